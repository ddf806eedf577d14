//! SAML 2.0 namespace URIs, element names and status codes.

/// SAML 2.0 assertion namespace URI.
pub const SAML_NS: &str = "urn:oasis:names:tc:SAML:2.0:assertion";

/// SAML 2.0 protocol namespace URI.
pub const SAMLP_NS: &str = "urn:oasis:names:tc:SAML:2.0:protocol";

/// Prefix bound to [`SAML_NS`] in path queries.
pub const SAML_PREFIX: &str = "saml";

/// Prefix bound to [`SAMLP_NS`] in path queries.
pub const SAMLP_PREFIX: &str = "samlp";

// ============================================================================
// Query Paths
// ============================================================================

/// Path queries evaluated against a response document.
///
/// Steps are qualified with the prefixes registered by
/// [`NamespaceBindings::saml`](crate::xml::NamespaceBindings::saml).
pub mod paths {
    /// A protocol response at the document root.
    pub const RESPONSE: &str = "samlp:Response";

    /// An artifact response at the document root.
    pub const ARTIFACT_RESPONSE: &str = "samlp:ArtifactResponse";

    /// A logout response at the document root.
    pub const LOGOUT_RESPONSE: &str = "samlp:LogoutResponse";

    /// Status code directly under a response.
    pub const STATUS_CODE: &str = "samlp:Status/samlp:StatusCode";

    /// Status code under the inner response of an artifact response.
    pub const ARTIFACT_STATUS_CODE: &str = "samlp:Response/samlp:Status/samlp:StatusCode";

    /// Nested status code, relative to a status code.
    pub const SUB_STATUS_CODE: &str = "samlp:StatusCode";

    /// Status message, relative to a `Status` element.
    pub const STATUS_MESSAGE: &str = "samlp:StatusMessage";

    /// Issuer, relative to a protocol message.
    pub const ISSUER: &str = "saml:Issuer";

    /// Encrypted assertions anywhere beneath a response.
    pub const ENCRYPTED_ASSERTIONS: &str = "//saml:EncryptedAssertion";

    /// Plaintext assertions anywhere beneath a response.
    pub const ASSERTIONS: &str = "//saml:Assertion";
}

// ============================================================================
// Status Codes
// ============================================================================

/// Top-level SAML status codes.
pub mod status_codes {
    /// Success status code.
    pub const SUCCESS: &str = "urn:oasis:names:tc:SAML:2.0:status:Success";

    /// Requester error status code.
    pub const REQUESTER: &str = "urn:oasis:names:tc:SAML:2.0:status:Requester";

    /// Responder error status code.
    pub const RESPONDER: &str = "urn:oasis:names:tc:SAML:2.0:status:Responder";

    /// Version mismatch status code.
    pub const VERSION_MISMATCH: &str = "urn:oasis:names:tc:SAML:2.0:status:VersionMismatch";
}

/// Second-level SAML status codes.
pub mod sub_status_codes {
    /// Authentication failed.
    pub const AUTHN_FAILED: &str = "urn:oasis:names:tc:SAML:2.0:status:AuthnFailed";

    /// Invalid attribute name or value.
    pub const INVALID_ATTR_NAME_OR_VALUE: &str =
        "urn:oasis:names:tc:SAML:2.0:status:InvalidAttrNameOrValue";

    /// Invalid name ID policy.
    pub const INVALID_NAMEID_POLICY: &str = "urn:oasis:names:tc:SAML:2.0:status:InvalidNameIDPolicy";

    /// No authn context.
    pub const NO_AUTHN_CONTEXT: &str = "urn:oasis:names:tc:SAML:2.0:status:NoAuthnContext";

    /// No available IDP.
    pub const NO_AVAILABLE_IDP: &str = "urn:oasis:names:tc:SAML:2.0:status:NoAvailableIDP";

    /// No passive.
    pub const NO_PASSIVE: &str = "urn:oasis:names:tc:SAML:2.0:status:NoPassive";

    /// No supported IDP.
    pub const NO_SUPPORTED_IDP: &str = "urn:oasis:names:tc:SAML:2.0:status:NoSupportedIDP";

    /// Partial logout.
    pub const PARTIAL_LOGOUT: &str = "urn:oasis:names:tc:SAML:2.0:status:PartialLogout";

    /// Proxy count exceeded.
    pub const PROXY_COUNT_EXCEEDED: &str = "urn:oasis:names:tc:SAML:2.0:status:ProxyCountExceeded";

    /// Request denied.
    pub const REQUEST_DENIED: &str = "urn:oasis:names:tc:SAML:2.0:status:RequestDenied";

    /// Request unsupported.
    pub const REQUEST_UNSUPPORTED: &str = "urn:oasis:names:tc:SAML:2.0:status:RequestUnsupported";

    /// Request version deprecated.
    pub const REQUEST_VERSION_DEPRECATED: &str =
        "urn:oasis:names:tc:SAML:2.0:status:RequestVersionDeprecated";

    /// Resource not recognized.
    pub const RESOURCE_NOT_RECOGNIZED: &str =
        "urn:oasis:names:tc:SAML:2.0:status:ResourceNotRecognized";

    /// Too many responses.
    pub const TOO_MANY_RESPONSES: &str = "urn:oasis:names:tc:SAML:2.0:status:TooManyResponses";

    /// Unknown principal.
    pub const UNKNOWN_PRINCIPAL: &str = "urn:oasis:names:tc:SAML:2.0:status:UnknownPrincipal";

    /// Unsupported binding.
    pub const UNSUPPORTED_BINDING: &str = "urn:oasis:names:tc:SAML:2.0:status:UnsupportedBinding";
}
