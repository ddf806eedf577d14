//! Assertion conversion.
//!
//! Decrypting, verifying and interpreting assertions is not done here. A
//! caller plugs in an [`AssertionParser`] and [`Response::to_assertion`]
//! hands it the response document together with the caller's
//! [`KeyMaterial`]. Whatever the parser returns, success or failure, is
//! passed back unchanged.

use crate::error::SamlError;
use crate::response::Response;

/// Keys and certificates needed to decrypt and verify assertions.
#[derive(Clone, Default)]
pub struct KeyMaterial {
    /// PEM-encoded private key for `EncryptedAssertion` content.
    pub decryption_key_pem: Option<String>,

    /// PEM-encoded certificates trusted to sign assertions.
    pub trusted_certificates_pem: Vec<String>,

    /// Name of the decryption key, when the IdP references it by `KeyName`.
    pub key_name: Option<String>,
}

impl KeyMaterial {
    /// Creates empty key material.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the decryption key.
    #[must_use]
    pub fn with_decryption_key(mut self, pem: impl Into<String>) -> Self {
        self.decryption_key_pem = Some(pem.into());
        self
    }

    /// Adds a trusted signing certificate.
    #[must_use]
    pub fn with_trusted_certificate(mut self, pem: impl Into<String>) -> Self {
        self.trusted_certificates_pem.push(pem.into());
        self
    }

    /// Sets the decryption key name.
    #[must_use]
    pub fn with_key_name(mut self, name: impl Into<String>) -> Self {
        self.key_name = Some(name.into());
        self
    }

    /// Returns true if a decryption key is present.
    #[must_use]
    pub const fn has_decryption_key(&self) -> bool {
        self.decryption_key_pem.is_some()
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field(
                "decryption_key_pem",
                &self.decryption_key_pem.as_ref().map(|_| "***REDACTED***"),
            )
            .field("trusted_certificates", &self.trusted_certificates_pem.len())
            .field("key_name", &self.key_name)
            .finish()
    }
}

/// Turns a response document into a typed assertion.
///
/// Implementations own decryption and signature verification. The error type
/// must accept [`SamlError`] so that the converter's own usage error can be
/// reported through it.
pub trait AssertionParser {
    /// The typed assertion produced on success.
    type Assertion;

    /// The parser's error type.
    type Error: From<SamlError>;

    /// Parses the assertion carried by `xml`, the full response document.
    fn parse_assertion(&self, xml: &str, keys: &KeyMaterial)
        -> Result<Self::Assertion, Self::Error>;
}

impl Response {
    /// Delegates assertion parsing to `parser`.
    ///
    /// Fails with [`SamlError::NoAssertions`] (converted into the parser's
    /// error type) if the response carries no assertion. Any other error
    /// comes from the parser.
    pub fn to_assertion<P>(&self, parser: &P, keys: &KeyMaterial) -> Result<P::Assertion, P::Error>
    where
        P: AssertionParser,
    {
        if !self.has_assertions() {
            return Err(SamlError::NoAssertions.into());
        }

        tracing::debug!(
            id = %self.id(),
            assertions = self.assertion_count(),
            decryption_key = keys.has_decryption_key(),
            "delegating assertion parsing"
        );
        parser.parse_assertion(self.as_xml(), keys)
    }
}
