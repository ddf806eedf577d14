//! SAML 2.0 Response parsing for service providers.
//!
//! This crate turns the XML an identity provider sends back into a typed,
//! immutable view:
//!
//! - **Response and ArtifactResponse parsing** - status, substatus, issuer and
//!   correlation identifiers
//! - **Assertion location** - plaintext and encrypted assertions in document order
//! - **Assertion conversion** - delegation to a pluggable [`AssertionParser`]
//! - **LogoutResponse parsing** - the single logout answer
//! - **POST and Redirect bindings** - decoding of the transport encodings
//!
//! # Architecture
//!
//! - [`xml`] - Owned XML document and namespace-aware path queries
//! - [`response`] - Response location and the [`Response`] value
//! - [`status`] - Status code extraction
//! - [`message`] - Header fields shared by protocol messages
//! - [`assertion`] - Assertion handles
//! - [`convert`] - The assertion converter seam
//! - [`logout`] - [`LogoutResponse`]
//! - [`bindings`] - HTTP-POST and HTTP-Redirect decoding
//! - [`config`] - Parser limits
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```rust,ignore
//! use saml_response::{KeyMaterial, ProtocolMessage, Response};
//!
//! let response = Response::parse(xml.as_bytes())?;
//! if !response.is_success() {
//!     return Err(LoginError::Rejected(response.status().to_owned(), response.substatus().map(str::to_owned)));
//! }
//! let assertion = response.to_assertion(&verifier, &KeyMaterial::new().with_decryption_key(pem))?;
//! ```
//!
//! # SAML Specifications
//!
//! - [SAML 2.0 Core](https://docs.oasis-open.org/security/saml/v2.0/saml-core-2.0-os.pdf)
//! - [SAML 2.0 Bindings](https://docs.oasis-open.org/security/saml/v2.0/saml-bindings-2.0-os.pdf)

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod assertion;
pub mod bindings;
pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod logout;
pub mod message;
pub mod response;
pub mod status;
pub mod xml;

pub use assertion::{AssertionElement, AssertionKind};
pub use bindings::{DecodedMessage, HttpPostBinding, HttpRedirectBinding, SamlBinding};
pub use config::ParserConfig;
pub use convert::{AssertionParser, KeyMaterial};
pub use error::{ErrorKind, SamlError, SamlResult};
pub use logout::LogoutResponse;
pub use message::{MessageHeader, ProtocolMessage};
pub use response::{Response, ResponseVariant};
pub use status::{Status, StatusCode};
