//! SAML LogoutResponse parsing.
//!
//! The identity provider's answer to a single logout request. It shares the
//! header and status shape of [`Response`](crate::Response) but never carries
//! assertions.

use crate::config::ParserConfig;
use crate::constants::paths;
use crate::error::{SamlError, SamlResult};
use crate::message::{MessageHeader, ProtocolMessage};
use crate::status::Status;
use crate::xml::{NamespaceBindings, NamespaceResolver, XmlDocument};

/// A parsed SAML LogoutResponse.
#[derive(Debug, Clone)]
pub struct LogoutResponse {
    document: XmlDocument,
    header: MessageHeader,
    status: Status,
}

impl LogoutResponse {
    /// Parses a logout response with the default [`ParserConfig`].
    pub fn parse(xml: &[u8]) -> SamlResult<Self> {
        Self::parse_with_config(xml, &ParserConfig::default())
    }

    /// Parses a logout response.
    pub fn parse_with_config(xml: &[u8], config: &ParserConfig) -> SamlResult<Self> {
        Self::from_document(XmlDocument::parse(xml, config)?)
    }

    /// Parses an already decoded logout response string.
    pub fn parse_str(xml: impl Into<String>, config: &ParserConfig) -> SamlResult<Self> {
        Self::from_document(XmlDocument::parse_str(xml.into(), config)?)
    }

    fn from_document(document: XmlDocument) -> SamlResult<Self> {
        let bindings = NamespaceBindings::saml();
        let resolver = NamespaceResolver::new(&document, &bindings);

        let message = resolver
            .root(&[paths::LOGOUT_RESPONSE])?
            .ok_or(SamlError::NoResponseElement)?;
        let status = Status::extract(&resolver, message, paths::STATUS_CODE)?;
        let header = MessageHeader::extract(&resolver, message)?;

        tracing::debug!(
            id = %header.id,
            issuer = %header.issuer,
            status = %status.status_code.value,
            "SAML logout response parsed"
        );

        Ok(Self {
            document,
            header,
            status,
        })
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

    /// The secondary status code URI, if any.
    #[must_use]
    pub fn substatus(&self) -> Option<&str> {
        self.status.status_code.sub_status_value()
    }

    /// The status message, if any.
    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status.status_message.as_deref()
    }

    /// Returns true if the logout succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
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
}

impl ProtocolMessage for LogoutResponse {
    fn header(&self) -> &MessageHeader {
        &self.header
    }
}
