//! Common test utilities and fixtures.

use std::io::Write;

use base64::Engine;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use saml_response::{AssertionParser, KeyMaterial, SamlError};

/// Installs a tracing subscriber once so parser debug output is visible with
/// `RUST_LOG=saml_response=debug`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Successful response carrying one plaintext assertion.
pub const SUCCESS_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<samlp:Response xmlns:samlp="urn:oasis:names:tc:SAML:2.0:protocol"
                xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion"
                ID="_8e8dc5f69a98cc4c1ff3427e5ce34606fd672f91e6"
                Version="2.0"
                IssueInstant="2014-07-17T01:01:48Z"
                Destination="http://sp.example.com/demo1/index.php?acs"
                InResponseTo="ONELOGIN_4fee3b046395c4e751011e97f8900b5273d56685">
  <saml:Issuer>http://idp.example.com/metadata.php</saml:Issuer>
  <samlp:Status>
    <samlp:StatusCode Value="urn:oasis:names:tc:SAML:2.0:status:Success"/>
  </samlp:Status>
  <saml:Assertion ID="_d71a3a8e9fcc45c9e9d248ef7049393fc8f04e5f75" Version="2.0" IssueInstant="2014-07-17T01:01:48Z">
    <saml:Issuer>http://idp.example.com/metadata.php</saml:Issuer>
    <saml:Subject>
      <saml:NameID Format="urn:oasis:names:tc:SAML:2.0:nameid-format:transient">_ce3d2948b4cf20146dee0a0b3dd6f69b6cf86f62d7</saml:NameID>
    </saml:Subject>
  </saml:Assertion>
</samlp:Response>"#;

/// Requester failure refined by an InvalidNameIDPolicy substatus, no assertions.
pub const REQUESTER_RESPONSE: &str = r#"<samlp:Response xmlns:samlp="urn:oasis:names:tc:SAML:2.0:protocol"
    xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion"
    ID="_fail1" Version="2.0" IssueInstant="2024-03-01T09:30:00Z" InResponseTo="_req42">
  <saml:Issuer>https://idp.example.org</saml:Issuer>
  <samlp:Status>
    <samlp:StatusCode Value="urn:oasis:names:tc:SAML:2.0:status:Requester">
      <samlp:StatusCode Value="urn:oasis:names:tc:SAML:2.0:status:InvalidNameIDPolicy"/>
    </samlp:StatusCode>
    <samlp:StatusMessage>Unsupported NameID format</samlp:StatusMessage>
  </samlp:Status>
</samlp:Response>"#;

/// Artifact response wrapping a response with one encrypted assertion.
pub const ARTIFACT_ENCRYPTED_RESPONSE: &str = r#"<samlp:ArtifactResponse xmlns:samlp="urn:oasis:names:tc:SAML:2.0:protocol"
    xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion"
    ID="_artresp1" Version="2.0" IssueInstant="2024-03-01T09:30:05Z" InResponseTo="_artresolve7">
  <saml:Issuer>https://idp.example.org</saml:Issuer>
  <samlp:Status>
    <samlp:StatusCode Value="urn:oasis:names:tc:SAML:2.0:status:Success"/>
  </samlp:Status>
  <samlp:Response ID="_inner9" Version="2.0" IssueInstant="2024-03-01T09:30:04Z" InResponseTo="_authn3">
    <saml:Issuer>https://idp.example.org</saml:Issuer>
    <samlp:Status>
      <samlp:StatusCode Value="urn:oasis:names:tc:SAML:2.0:status:Success"/>
    </samlp:Status>
    <saml:EncryptedAssertion>
      <xenc:EncryptedData xmlns:xenc="http://www.w3.org/2001/04/xmlenc#" Type="http://www.w3.org/2001/04/xmlenc#Element">
        <xenc:EncryptionMethod Algorithm="http://www.w3.org/2001/04/xmlenc#aes256-cbc"/>
        <xenc:CipherData><xenc:CipherValue>bm90IHJlYWxseSBlbmNyeXB0ZWQ=</xenc:CipherValue></xenc:CipherData>
      </xenc:EncryptedData>
    </saml:EncryptedAssertion>
  </samlp:Response>
</samlp:ArtifactResponse>"#;

/// Logout response reporting a partial logout.
pub const PARTIAL_LOGOUT_RESPONSE: &str = r#"<samlp:LogoutResponse xmlns:samlp="urn:oasis:names:tc:SAML:2.0:protocol"
    xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion"
    ID="_lr7" Version="2.0" IssueInstant="2024-03-01T10:00:00Z"
    Destination="https://sp.example.com/slo" InResponseTo="_logout3">
  <saml:Issuer>https://idp.example.org</saml:Issuer>
  <samlp:Status>
    <samlp:StatusCode Value="urn:oasis:names:tc:SAML:2.0:status:Success">
      <samlp:StatusCode Value="urn:oasis:names:tc:SAML:2.0:status:PartialLogout"/>
    </samlp:StatusCode>
  </samlp:Status>
</samlp:LogoutResponse>"#;

/// Base64-encodes a document for the HTTP-POST binding.
pub fn post_encode(xml: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(xml)
}

/// Deflates, base64-encodes and URL-encodes a document for the HTTP-Redirect
/// binding.
pub fn redirect_encode(xml: &str) -> anyhow::Result<String> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(xml.as_bytes())?;
    let compressed = encoder.finish()?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(compressed);
    Ok(urlencoding::encode(&encoded).into_owned())
}

/// Assertion summary produced by [`StubAssertionParser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAssertion {
    /// Length of the document the parser was handed.
    pub document_len: usize,
    /// Whether the document held an encrypted assertion.
    pub was_encrypted: bool,
}

/// Errors of [`StubAssertionParser`].
#[derive(Debug, thiserror::Error)]
pub enum StubParserError {
    /// Raised by the response itself.
    #[error(transparent)]
    Saml(#[from] SamlError),
    /// Encrypted content without a decryption key.
    #[error("cannot decrypt assertion: no decryption key")]
    MissingDecryptionKey,
}

/// Stand-in for a real decrypting and verifying assertion parser.
pub struct StubAssertionParser;

impl AssertionParser for StubAssertionParser {
    type Assertion = ParsedAssertion;
    type Error = StubParserError;

    fn parse_assertion(
        &self,
        xml: &str,
        keys: &KeyMaterial,
    ) -> Result<ParsedAssertion, StubParserError> {
        let was_encrypted = xml.contains("EncryptedAssertion");
        if was_encrypted && !keys.has_decryption_key() {
            return Err(StubParserError::MissingDecryptionKey);
        }
        Ok(ParsedAssertion {
            document_len: xml.len(),
            was_encrypted,
        })
    }
}
