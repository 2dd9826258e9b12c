use axum::http::{header, HeaderMap, HeaderName, HeaderValue};

use crate::config::SecurityConfig;
use crate::utils::{SettingsError, SettingsResult};

/// Response headers every reply should carry under this policy
pub fn security_headers(config: &SecurityConfig) -> SettingsResult<Vec<(HeaderName, HeaderValue)>> {
    let mut headers = Vec::new();

    if let Some(hsts) = config.hsts_header() {
        let value = HeaderValue::from_str(&hsts).map_err(|e| SettingsError::header(&hsts, e))?;
        headers.push((header::STRICT_TRANSPORT_SECURITY, value));
    }
    if config.content_type_nosniff {
        headers.push((header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")));
    }
    headers.push((
        header::X_FRAME_OPTIONS,
        HeaderValue::from_static(config.x_frame_options.as_str()),
    ));
    if config.browser_xss_filter {
        headers.push((header::X_XSS_PROTECTION, HeaderValue::from_static("1; mode=block")));
    }

    Ok(headers)
}

/// Whether the request arrived over TLS, directly or via the trusted proxy header
pub fn is_secure_request(config: &SecurityConfig, headers: &HeaderMap, tls: bool) -> bool {
    if tls {
        return true;
    }
    match &config.proxy_ssl_header {
        Some(proxy) => headers
            .get(proxy.header.as_str())
            .and_then(|v| v.to_str().ok())
            .map(|v| v == proxy.value)
            .unwrap_or(false),
        None => false,
    }
}

/// Location to redirect a plain-HTTP request to, if it must be upgraded
pub fn https_redirect(
    config: &SecurityConfig,
    host: &str,
    path_and_query: &str,
    secure: bool,
) -> Option<String> {
    if secure || !config.ssl_redirect {
        return None;
    }
    let path = path_and_query.split('?').next().unwrap_or_default();
    if config.is_redirect_exempt(path) {
        return None;
    }
    Some(format!("https://{}{}", host, path_and_query))
}
