//! HTTP-Redirect Binding implementation.
//!
//! Decodes SAML responses delivered in URL query parameters with DEFLATE
//! compression.

use base64::Engine;
use flate2::read::DeflateDecoder;
use std::io::Read;

use crate::config::DEFAULT_MAX_DOCUMENT_SIZE;
use crate::error::{SamlError, SamlResult};

use super::{
    DecodedMessage, SamlBinding, RELAY_STATE_PARAM, SAML_RESPONSE_PARAM, SIGNATURE_PARAM,
    SIG_ALG_PARAM,
};

/// HTTP-Redirect binding decoder.
pub struct HttpRedirectBinding;

impl HttpRedirectBinding {
    /// Decodes a SAML response from HTTP-Redirect query parameters.
    ///
    /// The inflated message is capped at [`DEFAULT_MAX_DOCUMENT_SIZE`].
    ///
    /// # Arguments
    ///
    /// * `saml_response` - The SAMLResponse parameter value (if present)
    /// * `relay_state` - The RelayState parameter value (if present)
    /// * `signature` - The Signature parameter value (if present)
    /// * `sig_alg` - The SigAlg parameter value (if present)
    pub fn decode(
        saml_response: Option<&str>,
        relay_state: Option<&str>,
        signature: Option<&str>,
        sig_alg: Option<&str>,
    ) -> SamlResult<DecodedMessage> {
        Self::decode_with_limit(
            saml_response,
            relay_state,
            signature,
            sig_alg,
            DEFAULT_MAX_DOCUMENT_SIZE,
        )
    }

    /// Decodes a SAML response, rejecting messages that inflate beyond
    /// `max_size` bytes.
    pub fn decode_with_limit(
        saml_response: Option<&str>,
        relay_state: Option<&str>,
        signature: Option<&str>,
        sig_alg: Option<&str>,
        max_size: usize,
    ) -> SamlResult<DecodedMessage> {
        let encoded = saml_response.ok_or_else(|| {
            SamlError::InvalidMessage(format!("No {SAML_RESPONSE_PARAM} parameter"))
        })?;

        // URL decode (may already be done by the web framework)
        let url_decoded = urlencoding::decode(encoded)
            .map_err(|e| SamlError::InvalidMessage(format!("URL decode error: {e}")))?;

        let compressed = base64::engine::general_purpose::STANDARD.decode(url_decoded.as_bytes())?;
        let xml_bytes = deflate_decompress(&compressed, max_size)?;

        let xml = String::from_utf8(xml_bytes)
            .map_err(|e| SamlError::InvalidMessage(format!("Invalid UTF-8 in message: {e}")))?;

        tracing::debug!(
            compressed = compressed.len(),
            bytes = xml.len(),
            signed = signature.is_some(),
            "decoded HTTP-Redirect message"
        );

        Ok(DecodedMessage {
            xml,
            binding: SamlBinding::HttpRedirect,
            relay_state: relay_state.map(String::from),
            signature: signature.map(String::from),
            sig_alg: sig_alg.map(String::from),
        })
    }

    /// Decodes a message from a full URL.
    pub fn decode_url(url: &str) -> SamlResult<DecodedMessage> {
        let parsed = url::Url::parse(url)
            .map_err(|e| SamlError::InvalidMessage(format!("Invalid URL: {e}")))?;

        let mut saml_response = None;
        let mut relay_state = None;
        let mut signature = None;
        let mut sig_alg = None;

        for (key, value) in parsed.query_pairs() {
            match key.as_ref() {
                SAML_RESPONSE_PARAM => saml_response = Some(value.into_owned()),
                RELAY_STATE_PARAM => relay_state = Some(value.into_owned()),
                SIGNATURE_PARAM => signature = Some(value.into_owned()),
                SIG_ALG_PARAM => sig_alg = Some(value.into_owned()),
                _ => {}
            }
        }

        Self::decode(
            saml_response.as_deref(),
            relay_state.as_deref(),
            signature.as_deref(),
            sig_alg.as_deref(),
        )
    }

    /// Extracts the query string covered by the detached signature.
    ///
    /// Returns `SAMLResponse`, `RelayState` (if present) and `SigAlg` in
    /// that order, each exactly as URL-encoded by the sender.
    pub fn extract_signed_query(url: &str) -> SamlResult<String> {
        let parsed = url::Url::parse(url)
            .map_err(|e| SamlError::InvalidMessage(format!("Invalid URL: {e}")))?;
        let query = parsed.query().unwrap_or_default();

        let raw = |name: &str| {
            query
                .split('&')
                .find(|pair| pair.split_once('=').is_some_and(|(key, _)| key == name))
        };

        let message = raw(SAML_RESPONSE_PARAM).ok_or_else(|| {
            SamlError::InvalidMessage(format!("No {SAML_RESPONSE_PARAM} parameter"))
        })?;

        let parts: Vec<&str> = std::iter::once(message)
            .chain(raw(RELAY_STATE_PARAM))
            .chain(raw(SIG_ALG_PARAM))
            .collect();
        Ok(parts.join("&"))
    }
}

/// Decompresses raw DEFLATE data, failing once more than `limit` bytes have
/// been produced.
fn deflate_decompress(data: &[u8], limit: usize) -> SamlResult<Vec<u8>> {
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    let mut decoder = DeflateDecoder::new(data).take(cap);
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(|e| SamlError::Deflate(format!("Decompression error: {e}")))?;

    if decompressed.len() > limit {
        return Err(SamlError::Deflate(format!(
            "Decompressed message exceeds {limit} bytes"
        )));
    }
    Ok(decompressed)
}
