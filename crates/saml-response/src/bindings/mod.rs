//! SAML bindings.
//!
//! Decoding of responses delivered to a service provider:
//!
//! - **HTTP-POST Binding** - the message is base64-encoded in a form field
//! - **HTTP-Redirect Binding** - the message is deflated, base64-encoded and
//!   URL-encoded in the query string
//!
//! # Usage
//!
//! ```rust,ignore
//! use saml_response::bindings::HttpPostBinding;
//! use saml_response::ParserConfig;
//!
//! let decoded = HttpPostBinding::decode_response(form.saml_response.as_deref(), form.relay_state.as_deref())?;
//! let response = decoded.parse_response(&ParserConfig::default())?;
//! ```

mod post;
mod redirect;

pub use post::*;
pub use redirect::*;

use crate::config::ParserConfig;
use crate::error::SamlResult;
use crate::logout::LogoutResponse;
use crate::response::Response;

/// Form or query parameter carrying a SAML response.
pub const SAML_RESPONSE_PARAM: &str = "SAMLResponse";

/// Parameter carrying the relay state.
pub const RELAY_STATE_PARAM: &str = "RelayState";

/// Redirect binding signature parameter.
pub const SIGNATURE_PARAM: &str = "Signature";

/// Redirect binding signature algorithm parameter.
pub const SIG_ALG_PARAM: &str = "SigAlg";

/// Binding a message was received over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamlBinding {
    /// HTTP-POST binding.
    HttpPost,
    /// HTTP-Redirect binding.
    HttpRedirect,
}

/// Decoded SAML binding message.
#[derive(Debug, Clone)]
pub struct DecodedMessage {
    /// The decoded XML message.
    pub xml: String,
    /// The binding the message arrived over.
    pub binding: SamlBinding,
    /// The RelayState if present.
    pub relay_state: Option<String>,
    /// The signature (for redirect binding).
    pub signature: Option<String>,
    /// The signature algorithm (for redirect binding).
    pub sig_alg: Option<String>,
}

impl DecodedMessage {
    /// Parses the decoded XML as a [`Response`].
    pub fn parse_response(&self, config: &ParserConfig) -> SamlResult<Response> {
        Response::parse_str(self.xml.as_str(), config)
    }

    /// Parses the decoded XML as a [`LogoutResponse`].
    pub fn parse_logout_response(&self, config: &ParserConfig) -> SamlResult<LogoutResponse> {
        LogoutResponse::parse_str(self.xml.as_str(), config)
    }

    /// Returns true if the redirect query carried a detached signature.
    #[must_use]
    pub fn is_signed(&self) -> bool {
        self.signature.is_some() && self.sig_alg.is_some()
    }
}
