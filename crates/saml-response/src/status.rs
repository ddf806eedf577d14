//! SAML Status extraction.
//!
//! Status information carried by protocol responses: a primary status code,
//! an optional nested (secondary) code and an optional message.

use serde::{Deserialize, Serialize};

use crate::constants::{paths, status_codes};
use crate::error::{SamlError, SamlResult};
use crate::xml::{NamespaceResolver, NodeId};

/// SAML protocol status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// The status code.
    pub status_code: StatusCode,

    /// Optional status message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

impl Status {
    /// Extracts the status of a protocol message.
    ///
    /// `path` locates the status code relative to `message`; the first match
    /// in document order is used. Nested codes and the status message are
    /// read relative to that match.
    pub fn extract(
        resolver: &NamespaceResolver<'_>,
        message: NodeId,
        path: &str,
    ) -> SamlResult<Self> {
        let code = resolver
            .first(message, path)?
            .ok_or(SamlError::NoStatusCode)?;

        let status_code = StatusCode::extract(resolver, code)?;
        if status_code.value.is_empty() {
            return Err(SamlError::EmptyStatusCode);
        }

        let status_message = match resolver.document().element(code).parent() {
            Some(status) => resolver
                .text(status, paths::STATUS_MESSAGE)?
                .map(str::to_string),
            None => None,
        };

        tracing::trace!(
            status = %status_code.value,
            substatus = ?status_code.sub_status_value(),
            "status extracted"
        );

        Ok(Self {
            status_code,
            status_message,
        })
    }

    /// Returns true if this status indicates success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status_code.is_success()
    }
}

/// SAML status code.
///
/// Status codes can be nested, with a top-level code and optional sub-code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCode {
    /// The status code URI value.
    pub value: String,

    /// Optional nested status code providing more detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<Box<StatusCode>>,
}

impl StatusCode {
    /// Creates a new status code with the given value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            status_code: None,
        }
    }

    /// Adds a sub-status code.
    #[must_use]
    pub fn with_sub_status(mut self, sub: StatusCode) -> Self {
        self.status_code = Some(Box::new(sub));
        self
    }

    /// Returns true if this is a success status code.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.value == status_codes::SUCCESS
    }

    /// Returns the sub-status code value if present.
    #[must_use]
    pub fn sub_status_value(&self) -> Option<&str> {
        self.status_code.as_ref().map(|s| s.value.as_str())
    }

    /// Reads a `StatusCode` element and its nested codes.
    ///
    /// A nested element without a `Value` attribute still counts as a
    /// sub-status, with an empty value.
    fn extract(resolver: &NamespaceResolver<'_>, code: NodeId) -> SamlResult<Self> {
        let value = resolver
            .document()
            .element(code)
            .attribute("Value")
            .unwrap_or_default()
            .to_string();

        let status_code = match resolver.first(code, paths::SUB_STATUS_CODE)? {
            Some(nested) => Some(Box::new(Self::extract(resolver, nested)?)),
            None => None,
        };

        Ok(Self { value, status_code })
    }
}
