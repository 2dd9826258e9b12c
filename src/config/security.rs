use regex::RegexSet;
use serde::Serialize;

use super::env::{parse_flag, EnvVars};
use crate::utils::SettingsResult;

/// One year, the HSTS duration used in production
pub const HSTS_SECONDS: u64 = 31_536_000;

/// Paths that must stay reachable over plain HTTP (platform health checks)
pub const REDIRECT_EXEMPT: &[&str] = &[r"^health/?$"];

/// Header the TLS-terminating proxy sets to report the original scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxySslHeader {
    /// Request header name
    pub header: String,
    /// Value meaning the original request used HTTPS
    pub value: String,
}

/// Value of the `X-Frame-Options` response header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FrameOptions {
    Deny,
    SameOrigin,
}

impl FrameOptions {
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameOptions::Deny => "DENY",
            FrameOptions::SameOrigin => "SAMEORIGIN",
        }
    }
}

/// Transport and response-header security policy
#[derive(Debug, Clone, Serialize)]
pub struct SecurityConfig {
    /// Header trusted to report the scheme behind the proxy
    pub proxy_ssl_header: Option<ProxySslHeader>,
    /// Redirect plain HTTP requests to HTTPS
    pub ssl_redirect: bool,
    /// Path patterns served over plain HTTP
    pub redirect_exempt: Vec<String>,
    #[serde(skip)]
    redirect_exempt_set: RegexSet,
    /// Send `X-XSS-Protection: 1; mode=block`
    pub browser_xss_filter: bool,
    /// Send `X-Content-Type-Options: nosniff`
    pub content_type_nosniff: bool,
    /// Framing policy
    pub x_frame_options: FrameOptions,
    /// HSTS max-age in seconds, 0 disables the header
    pub hsts_seconds: u64,
    /// Extend HSTS to subdomains
    pub hsts_include_subdomains: bool,
    /// Request inclusion in browser preload lists
    pub hsts_preload: bool,
}

impl SecurityConfig {
    pub(crate) fn production(env: &EnvVars) -> SettingsResult<Self> {
        Ok(Self {
            proxy_ssl_header: Some(ProxySslHeader {
                header: "X-Forwarded-Proto".to_string(),
                value: "https".to_string(),
            }),
            ssl_redirect: parse_flag(env.secure_ssl_redirect.as_deref(), true),
            redirect_exempt: REDIRECT_EXEMPT.iter().map(|p| p.to_string()).collect(),
            redirect_exempt_set: RegexSet::new(REDIRECT_EXEMPT)?,
            browser_xss_filter: true,
            content_type_nosniff: true,
            x_frame_options: FrameOptions::Deny,
            hsts_seconds: HSTS_SECONDS,
            hsts_include_subdomains: true,
            hsts_preload: true,
        })
    }

    /// Framework defaults with redirect and HSTS switched off
    pub(crate) fn development() -> Self {
        Self {
            proxy_ssl_header: None,
            ssl_redirect: false,
            redirect_exempt: Vec::new(),
            redirect_exempt_set: RegexSet::empty(),
            browser_xss_filter: false,
            content_type_nosniff: true,
            x_frame_options: FrameOptions::Deny,
            hsts_seconds: 0,
            hsts_include_subdomains: false,
            hsts_preload: false,
        }
    }

    /// Whether a request path is exempt from the HTTPS redirect.
    ///
    /// Patterns are searched against the path with its leading slashes removed.
    pub fn is_redirect_exempt(&self, path: &str) -> bool {
        self.redirect_exempt_set.is_match(path.trim_start_matches('/'))
    }

    /// Rendered `Strict-Transport-Security` value, `None` when HSTS is off
    pub fn hsts_header(&self) -> Option<String> {
        if self.hsts_seconds == 0 {
            return None;
        }
        let mut value = format!("max-age={}", self.hsts_seconds);
        if self.hsts_include_subdomains {
            value.push_str("; includeSubDomains");
        }
        if self.hsts_preload {
            value.push_str("; preload");
        }
        Some(value)
    }
}
