//! SAML response parsing errors.
//!
//! Every failure the parser, the bindings and the assertion converter can
//! produce is a variant of [`SamlError`]. Variants are grouped into
//! [`ErrorKind`]s so callers can tell a malformed message apart from a
//! caller-side misuse without matching every variant.

use thiserror::Error;

/// Result type for SAML response operations.
pub type SamlResult<T> = Result<T, SamlError>;

/// Broad classification of a [`SamlError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The document is not a usable protocol response.
    Parse,
    /// The caller invoked an operation the message cannot support.
    Usage,
    /// The transport binding wrapping the message could not be decoded.
    Binding,
}

/// SAML response errors.
#[derive(Debug, Error)]
pub enum SamlError {
    /// XML is not well-formed.
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// Document bytes are not valid UTF-8.
    #[error("invalid UTF-8 in document: {0}")]
    InvalidUtf8(String),

    /// Document exceeds the configured size limit.
    #[error("document too large: {size} bytes exceeds limit of {limit}")]
    DocumentTooLarge {
        /// Size of the rejected document in bytes.
        size: usize,
        /// The configured limit.
        limit: usize,
    },

    /// Element nesting exceeds the configured depth limit.
    #[error("element nesting exceeds maximum depth of {0}")]
    DepthExceeded(usize),

    /// A DTD declaration was found and DTDs are not allowed.
    #[error("DOCTYPE declarations are not allowed")]
    DoctypeNotAllowed,

    /// A path query used a prefix with no namespace binding.
    #[error("unbound namespace prefix in query: {0}")]
    UnboundPrefix(String),

    /// Neither a protocol response nor an artifact response is at the root.
    #[error("no response element")]
    NoResponseElement,

    /// The located response carries no status code.
    #[error("no status code")]
    NoStatusCode,

    /// The first status code has an empty or missing `Value` attribute.
    #[error("status code has no value")]
    EmptyStatusCode,

    /// Assertion conversion was requested on a response without assertions.
    #[error("no assertions present")]
    NoAssertions,

    /// The binding parameters do not carry a SAML message.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// Base64 decoding error.
    #[error("base64 decode error: {0}")]
    Base64Decode(String),

    /// Deflate decompression error.
    #[error("deflate error: {0}")]
    Deflate(String),
}

impl SamlError {
    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NoAssertions => ErrorKind::Usage,
            Self::InvalidMessage(_) | Self::Base64Decode(_) | Self::Deflate(_) => {
                ErrorKind::Binding
            }
            Self::XmlParse(_)
            | Self::InvalidUtf8(_)
            | Self::DocumentTooLarge { .. }
            | Self::DepthExceeded(_)
            | Self::DoctypeNotAllowed
            | Self::UnboundPrefix(_)
            | Self::NoResponseElement
            | Self::NoStatusCode
            | Self::EmptyStatusCode => ErrorKind::Parse,
        }
    }

    /// Returns true if the document itself could not be parsed.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Parse)
    }

    /// Returns true if the error signals caller misuse rather than bad input.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Usage)
    }
}

impl From<quick_xml::Error> for SamlError {
    fn from(err: quick_xml::Error) -> Self {
        Self::XmlParse(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for SamlError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::XmlParse(err.to_string())
    }
}

impl From<base64::DecodeError> for SamlError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64Decode(err.to_string())
    }
}

impl From<std::str::Utf8Error> for SamlError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::InvalidUtf8(err.to_string())
    }
}
