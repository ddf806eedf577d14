//! End-to-End Integration Tests
//!
//! These tests exercise the public API of `saml-response` the way a service
//! provider does: decode a binding, parse the message, check the status and
//! hand the assertions to an assertion parser.

mod common;
mod artifact_response;
mod bindings;
