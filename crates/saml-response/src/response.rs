//! SAML Response parsing.
//!
//! A response sent by an identity provider to a service provider, either
//! directly (`samlp:Response`) or through the artifact binding, where the
//! response arrives nested inside a `samlp:ArtifactResponse`.

use chrono::{DateTime, Utc};

use crate::assertion::{self, AssertionElement};
use crate::config::ParserConfig;
use crate::constants::paths;
use crate::error::{SamlError, SamlResult};
use crate::message::{MessageHeader, ProtocolMessage};
use crate::status::Status;
use crate::xml::{NamespaceBindings, NamespaceResolver, NodeId, XmlDocument};

/// How the response element was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseVariant {
    /// `samlp:Response` at the document root.
    Direct,
    /// `samlp:Response` nested in a root `samlp:ArtifactResponse`.
    Artifact,
}

impl ResponseVariant {
    /// Path to the status code, relative to the located element.
    #[must_use]
    pub const fn status_code_path(self) -> &'static str {
        match self {
            Self::Direct => paths::STATUS_CODE,
            Self::Artifact => paths::ARTIFACT_STATUS_CODE,
        }
    }
}

/// Finds the protocol response element at the document root.
fn locate(resolver: &NamespaceResolver<'_>) -> SamlResult<(NodeId, ResponseVariant)> {
    let root = resolver
        .root(&[paths::RESPONSE, paths::ARTIFACT_RESPONSE])?
        .ok_or(SamlError::NoResponseElement)?;

    let variant = if resolver.document().element(root).local_name() == "ArtifactResponse" {
        ResponseVariant::Artifact
    } else {
        ResponseVariant::Direct
    };
    Ok((root, variant))
}

/// A parsed SAML Response.
///
/// Constructed once by [`Response::parse`] and read-only afterwards. The
/// value owns the source document; [`Response::as_xml`] returns it verbatim
/// and assertion handles point into it.
#[derive(Debug, Clone)]
pub struct Response {
    document: XmlDocument,
    variant: ResponseVariant,
    header: MessageHeader,
    status: Status,
    assertions: Vec<NodeId>,
}

impl Response {
    /// Parses a response with the default [`ParserConfig`].
    pub fn parse(xml: &[u8]) -> SamlResult<Self> {
        Self::parse_with_config(xml, &ParserConfig::default())
    }

    /// Parses a response.
    ///
    /// Fails with [`SamlError::NoResponseElement`] if the root is neither a
    /// `Response` nor an `ArtifactResponse`, and with
    /// [`SamlError::NoStatusCode`] if the response has no status code.
    pub fn parse_with_config(xml: &[u8], config: &ParserConfig) -> SamlResult<Self> {
        Self::from_document(XmlDocument::parse(xml, config)?)
    }

    /// Parses an already decoded response string.
    pub fn parse_str(xml: impl Into<String>, config: &ParserConfig) -> SamlResult<Self> {
        Self::from_document(XmlDocument::parse_str(xml.into(), config)?)
    }

    fn from_document(document: XmlDocument) -> SamlResult<Self> {
        let bindings = NamespaceBindings::saml();
        let resolver = NamespaceResolver::new(&document, &bindings);

        let (message, variant) = locate(&resolver)?;
        let status = Status::extract(&resolver, message, variant.status_code_path())?;
        let header = MessageHeader::extract(&resolver, message)?;
        let assertions = assertion::locate(&resolver, message)?;

        tracing::debug!(
            variant = ?variant,
            id = %header.id,
            issuer = %header.issuer,
            status = %status.status_code.value,
            assertions = assertions.len(),
            "SAML response parsed"
        );

        Ok(Self {
            document,
            variant,
            header,
            status,
            assertions,
        })
    }

    /// Whether the response arrived directly or inside an artifact response.
    #[must_use]
    pub const fn variant(&self) -> ResponseVariant {
        self.variant
    }

    /// The full status.
    #[must_use]
    pub const fn status_details(&self) -> &Status {
        &self.status
    }

    /// The primary status code URI.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status.status_code.value
    }

    /// The secondary status code URI, if the primary code nests one.
    #[must_use]
    pub fn substatus(&self) -> Option<&str> {
        self.status.status_code.sub_status_value()
    }

    /// The status message, if any.
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status.status_message.as_deref()
    }

    /// Returns true if the primary status is `Success`.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Assertions (plain or encrypted) in document order.
    pub fn assertions(&self) -> impl ExactSizeIterator<Item = AssertionElement<'_>> + '_ {
        self.assertions
            .iter()
            .map(|&node| AssertionElement::new(&self.document, node))
    }

    /// Number of assertion elements.
    #[must_use]
    pub fn assertion_count(&self) -> usize {
        self.assertions.len()
    }

    /// Returns true if the response carries at least one assertion.
    #[must_use]
    pub fn has_assertions(&self) -> bool {
        !self.assertions.is_empty()
    }

    /// The parsed document.
    #[must_use]
    pub const fn document(&self) -> &XmlDocument {
        &self.document
    }

    /// The original document text, unchanged.
    #[must_use]
    pub fn as_xml(&self) -> &str {
        self.document.source()
    }

    /// The original document bytes, unchanged.
    #[must_use]
    pub fn serialize(&self) -> &[u8] {
        self.as_xml().as_bytes()
    }

    /// Consumes the response, returning the original document text.
    #[must_use]
    pub fn into_xml(self) -> String {
        self.document.source().to_owned()
    }
}

impl ProtocolMessage for Response {
    fn header(&self) -> &MessageHeader {
        &self.header
    }
}

/// Convenience accessors mirroring [`ProtocolMessage`] so callers need not
/// import the trait.
impl Response {
    /// The issuing identity provider; empty if absent.
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.header.issuer
    }

    /// The response identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.header.id
    }

    /// The correlated request identifier; empty for unsolicited responses.
    #[must_use]
    pub fn in_response_to(&self) -> &str {
        &self.header.in_response_to
    }

    /// The destination URL, if stated.
    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.header.destination.as_deref()
    }

    /// The issue instant, if present and valid.
    #[must_use]
    pub const fn issue_instant(&self) -> Option<DateTime<Utc>> {
        self.header.issue_instant
    }
}
