use assert_matches::assert_matches;
use axum::http::{header, HeaderMap, HeaderValue};
use deploy_settings::middleware::{cors_layer, https_redirect, is_secure_request, security_headers};
use deploy_settings::SettingsError;

use crate::test_utils::{development, production};

#[test]
fn test_cors_layer_builds_for_configured_origins() {
    let settings = production(&[("CORS_ALLOWED_ORIGINS", "https://hub.example.com")]);

    assert!(cors_layer(&settings.cors).is_ok());
}

#[test]
fn test_cors_layer_builds_for_empty_origins() {
    assert!(cors_layer(&production(&[]).cors).is_ok());
}

#[test]
fn test_cors_layer_rejects_wildcard_origin() {
    let settings = production(&[("CORS_ALLOWED_ORIGINS", "*")]);

    assert_matches!(
        cors_layer(&settings.cors),
        Err(SettingsError::InvalidHeader { ref value, .. }) if value == "*"
    );
}

#[test]
fn test_cors_layer_rejects_bad_header_names() {
    let mut cors = production(&[]).cors;
    cors.allow_headers.push("x bad header".to_string());

    assert_matches!(cors_layer(&cors), Err(SettingsError::InvalidHeader { .. }));
}

#[test]
fn test_production_security_headers() {
    let headers = security_headers(&production(&[]).security).unwrap();

    let get = |name: &header::HeaderName| {
        headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.to_str().unwrap().to_string())
    };

    assert_eq!(
        get(&header::STRICT_TRANSPORT_SECURITY).as_deref(),
        Some("max-age=31536000; includeSubDomains; preload")
    );
    assert_eq!(get(&header::X_CONTENT_TYPE_OPTIONS).as_deref(), Some("nosniff"));
    assert_eq!(get(&header::X_FRAME_OPTIONS).as_deref(), Some("DENY"));
    assert_eq!(get(&header::X_XSS_PROTECTION).as_deref(), Some("1; mode=block"));
}

#[test]
fn test_development_omits_hsts() {
    let headers = security_headers(&development(&[]).security).unwrap();

    assert!(headers
        .iter()
        .all(|(name, _)| *name != header::STRICT_TRANSPORT_SECURITY));
}

#[test]
fn test_proxy_header_marks_request_secure() {
    let security = production(&[]).security;
    let mut headers = HeaderMap::new();

    assert!(!is_secure_request(&security, &headers, false));
    assert!(is_secure_request(&security, &headers, true));

    headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));
    assert!(is_secure_request(&security, &headers, false));

    headers.insert("x-forwarded-proto", HeaderValue::from_static("http"));
    assert!(!is_secure_request(&security, &headers, false));
}

#[test]
fn test_https_redirect() {
    let security = production(&[]).security;

    assert_eq!(
        https_redirect(&security, "example.com", "/api/me?x=1", false).as_deref(),
        Some("https://example.com/api/me?x=1")
    );
    assert_eq!(https_redirect(&security, "example.com", "/api/me", true), None);
    assert_eq!(https_redirect(&security, "example.com", "/health/", false), None);

    let relaxed = production(&[("SECURE_SSL_REDIRECT", "false")]).security;
    assert_eq!(https_redirect(&relaxed, "example.com", "/api/me", false), None);
}
