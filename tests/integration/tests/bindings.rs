//! Binding decode tests.

use base64::Engine;
use saml_response::{
    ErrorKind, HttpPostBinding, HttpRedirectBinding, ParserConfig, SamlBinding, SamlError,
};

use crate::common::{
    post_encode, redirect_encode, PARTIAL_LOGOUT_RESPONSE, REQUESTER_RESPONSE, SUCCESS_RESPONSE,
};

/// A posted response decodes to the exact document and parses.
#[test]
fn test_post_binding_response() -> anyhow::Result<()> {
    let encoded = post_encode(SUCCESS_RESPONSE);
    let decoded = HttpPostBinding::decode_response(Some(&encoded), Some("/app/home"))?;

    assert_eq!(decoded.binding, SamlBinding::HttpPost);
    assert_eq!(decoded.xml, SUCCESS_RESPONSE);
    assert_eq!(decoded.relay_state.as_deref(), Some("/app/home"));

    let response = decoded.parse_response(&ParserConfig::default())?;
    assert!(response.is_success());
    assert_eq!(response.as_xml(), SUCCESS_RESPONSE);

    Ok(())
}

/// A redirected logout response decodes and parses, keeping the detached
/// signature parameters.
#[test]
fn test_redirect_binding_logout_response() -> anyhow::Result<()> {
    let url = format!(
        "https://sp.example.com/slo?SAMLResponse={}&RelayState=abc&SigAlg={}&Signature=c2lnbmF0dXJl",
        redirect_encode(PARTIAL_LOGOUT_RESPONSE)?,
        urlencoding::encode("http://www.w3.org/2001/04/xmldsig-more#rsa-sha256"),
    );

    let decoded = HttpRedirectBinding::decode_url(&url)?;
    assert_eq!(decoded.binding, SamlBinding::HttpRedirect);
    assert_eq!(decoded.xml, PARTIAL_LOGOUT_RESPONSE);
    assert!(decoded.is_signed());
    assert_eq!(
        decoded.sig_alg.as_deref(),
        Some("http://www.w3.org/2001/04/xmldsig-more#rsa-sha256")
    );

    let logout = decoded.parse_logout_response(&ParserConfig::default())?;
    assert!(logout.is_success());

    let signed = HttpRedirectBinding::extract_signed_query(&url)?;
    assert!(signed.starts_with("SAMLResponse="));
    assert!(signed.contains("&RelayState=abc&SigAlg="));
    assert!(!signed.contains("Signature="));

    Ok(())
}

/// Parameter-level decode failures are binding errors.
#[test]
fn test_binding_failures() {
    let err = HttpPostBinding::decode_response(None, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Binding);

    let err = HttpPostBinding::decode_response(Some("%%%"), None).unwrap_err();
    assert!(matches!(err, SamlError::Base64Decode(_)));

    // Block type 0b11 is reserved in DEFLATE.
    let not_deflated = base64::engine::general_purpose::STANDARD.encode([0xff; 8]);
    let err = HttpRedirectBinding::decode(Some(&not_deflated), None, None, None).unwrap_err();
    assert!(matches!(err, SamlError::Deflate(_)));

    let deflated_but_not_posted = redirect_encode(REQUESTER_RESPONSE).unwrap();
    let err = HttpPostBinding::decode_response(Some(&deflated_but_not_posted), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Binding);
}

/// The inflate cap follows the configured document size.
#[test]
fn test_redirect_inflate_cap() -> anyhow::Result<()> {
    let encoded = redirect_encode(SUCCESS_RESPONSE)?;
    let config = ParserConfig::default().with_max_document_size(128);

    let err = HttpRedirectBinding::decode_with_limit(
        Some(&encoded),
        None,
        None,
        None,
        config.max_document_size,
    )
    .unwrap_err();
    assert!(matches!(err, SamlError::Deflate(_)));

    Ok(())
}
