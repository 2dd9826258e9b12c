use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::CorsConfig;
use crate::utils::{SettingsError, SettingsResult};

/// Build the CORS layer for the configured policy.
///
/// With credentials allowed, "all origins" is served by mirroring the request
/// origin since browsers reject a literal `*` alongside credentials.
pub fn cors_layer(config: &CorsConfig) -> SettingsResult<CorsLayer> {
    let methods = config
        .allow_methods
        .iter()
        .map(|m| Method::from_bytes(m.as_bytes()).map_err(|e| SettingsError::header(m, e)))
        .collect::<SettingsResult<Vec<_>>>()?;

    let headers = config
        .allow_headers
        .iter()
        .map(|h| HeaderName::from_bytes(h.as_bytes()).map_err(|e| SettingsError::header(h, e)))
        .collect::<SettingsResult<Vec<_>>>()?;

    let origin = if config.allow_all_origins {
        if config.allow_credentials {
            AllowOrigin::mirror_request()
        } else {
            AllowOrigin::any()
        }
    } else {
        AllowOrigin::list(origin_values(&config.allowed_origins)?)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::list(headers))
        .allow_credentials(config.allow_credentials))
}

fn origin_values(origins: &[String]) -> SettingsResult<Vec<HeaderValue>> {
    origins
        .iter()
        .map(|origin| {
            if origin == "*" {
                return Err(SettingsError::header(origin, "wildcard is not a valid origin"));
            }
            HeaderValue::from_str(origin).map_err(|e| SettingsError::header(origin, e))
        })
        .collect()
}
