//! Protocol message header fields.
//!
//! Every SAML protocol response shares the same header: an `ID`, an optional
//! `InResponseTo` correlation id, an optional `Destination`, an
//! `IssueInstant` and an `Issuer` child. [`MessageHeader`] holds them and
//! [`ProtocolMessage`] exposes them uniformly across message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::paths;
use crate::error::SamlResult;
use crate::xml::{NamespaceResolver, NodeId};

/// Header fields of a protocol message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageHeader {
    /// Message identifier (`ID`), empty if the attribute is absent.
    pub id: String,

    /// Issuing entity, empty if there is no `Issuer` element.
    pub issuer: String,

    /// Identifier of the request this message answers, empty for unsolicited
    /// messages.
    pub in_response_to: String,

    /// The URL the message was sent to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Issue instant. `None` if absent or not a valid timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_instant: Option<DateTime<Utc>>,
}

impl MessageHeader {
    /// Reads the header fields of the protocol message element `message`.
    pub fn extract(resolver: &NamespaceResolver<'_>, message: NodeId) -> SamlResult<Self> {
        let element = resolver.document().element(message);
        let attribute = |name: &str| element.attribute(name).map(str::to_string);

        let issuer = resolver
            .text(message, paths::ISSUER)?
            .unwrap_or_default()
            .to_string();

        let issue_instant = element.attribute("IssueInstant").and_then(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| tracing::debug!(value = raw, error = %e, "unparseable IssueInstant"))
                .ok()
        });

        Ok(Self {
            id: attribute("ID").unwrap_or_default(),
            issuer,
            in_response_to: attribute("InResponseTo").unwrap_or_default(),
            destination: attribute("Destination"),
            issue_instant,
        })
    }
}

/// Behavior shared by SAML protocol messages.
pub trait ProtocolMessage {
    /// The message header.
    fn header(&self) -> &MessageHeader;

    /// The issuing entity; empty if the message carries no `Issuer`.
    fn issuer(&self) -> &str {
        &self.header().issuer
    }

    /// The message identifier.
    fn id(&self) -> &str {
        &self.header().id
    }

    /// The correlated request identifier; empty for unsolicited messages.
    fn in_response_to(&self) -> &str {
        &self.header().in_response_to
    }

    /// The destination URL, if stated.
    fn destination(&self) -> Option<&str> {
        self.header().destination.as_deref()
    }

    /// The issue instant, if present and valid.
    fn issue_instant(&self) -> Option<DateTime<Utc>> {
        self.header().issue_instant
    }

    /// Returns true if the message answers an earlier request.
    fn is_solicited(&self) -> bool {
        !self.in_response_to().is_empty()
    }
}
