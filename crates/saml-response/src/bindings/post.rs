//! HTTP-POST Binding implementation.
//!
//! Decodes SAML responses posted to an assertion consumer service as a
//! base64-encoded `SAMLResponse` form field.

use base64::Engine;

use crate::error::{SamlError, SamlResult};

use super::{DecodedMessage, SamlBinding, SAML_RESPONSE_PARAM};

/// HTTP-POST binding decoder.
pub struct HttpPostBinding;

impl HttpPostBinding {
    /// Decodes a SAML response from HTTP-POST form data.
    ///
    /// # Arguments
    ///
    /// * `saml_response` - The SAMLResponse parameter value (if present)
    /// * `relay_state` - The RelayState parameter value (if present)
    pub fn decode_response(
        saml_response: Option<&str>,
        relay_state: Option<&str>,
    ) -> SamlResult<DecodedMessage> {
        let encoded = saml_response.ok_or_else(|| {
            SamlError::InvalidMessage(format!("No {SAML_RESPONSE_PARAM} parameter"))
        })?;

        // Form encoders commonly wrap base64 at 76 columns.
        let compact: String = encoded.split_ascii_whitespace().collect();
        let decoded = base64::engine::general_purpose::STANDARD.decode(compact)?;

        let xml = String::from_utf8(decoded)
            .map_err(|e| SamlError::InvalidMessage(format!("Invalid UTF-8 in message: {e}")))?;

        tracing::debug!(bytes = xml.len(), relay_state = ?relay_state, "decoded HTTP-POST message");

        Ok(DecodedMessage {
            xml,
            binding: SamlBinding::HttpPost,
            relay_state: relay_state.map(String::from),
            signature: None,
            sig_alg: None,
        })
    }
}
