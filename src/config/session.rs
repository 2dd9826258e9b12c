//! Session cookie policy.
//!
//! Two frontends share the backend: the `clock` kiosk and the `hub` staff
//! portal. Each gets its own cookie policy, while the secure-cookie flag is
//! governed by the top-level setting and pushed down to both.

use std::str::FromStr;

use serde::Serialize;

use super::env::{parse_flag, parse_int, EnvVars, HUB_ABSOLUTE_SESSION_AGE, SESSION_COOKIE_AGE};
use crate::utils::SettingsResult;

pub const SESSION_ENGINE: &str = "core.session";
pub const DEFAULT_COOKIE_AGE: i64 = 3600;
pub const DEFAULT_HUB_ABSOLUTE_AGE: i64 = 12 * 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Frontend a request belongs to, as sent in the `X-App-Type` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppType {
    Clock,
    Hub,
}

impl FromStr for AppType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clock" => Ok(AppType::Clock),
            "hub" => Ok(AppType::Hub),
            _ => Err(()),
        }
    }
}

/// Cookie policy for one frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppSessionConfig {
    /// Session cookie name
    pub cookie_name: String,
    /// Cookie lifetime in seconds
    pub cookie_age: i64,
    /// Drop the session when the browser closes
    pub expire_at_browser_close: bool,
    /// Hide the cookie from scripts
    pub cookie_httponly: bool,
    /// Cross-site cookie policy
    pub cookie_samesite: SameSite,
    /// Path the cookie is scoped to
    pub cookie_path: String,
    /// Cookie domain, `None` for host-only
    pub cookie_domain: Option<String>,
    /// Unset means the top-level setting has not been pushed down
    pub cookie_secure: Option<bool>,
}

impl AppSessionConfig {
    /// Short non-sliding sessions for shared kiosk devices
    pub fn clock() -> Self {
        Self {
            cookie_name: "clock_sessionid".to_string(),
            cookie_age: 120,
            expire_at_browser_close: true,
            cookie_httponly: true,
            cookie_samesite: SameSite::Strict,
            cookie_path: "/api/".to_string(),
            cookie_domain: None,
            cookie_secure: None,
        }
    }

    /// One hour sliding window for staff, persistent across browser restarts
    pub fn hub() -> Self {
        Self {
            cookie_name: "hub_sessionid".to_string(),
            cookie_age: 3600,
            expire_at_browser_close: false,
            cookie_httponly: true,
            cookie_samesite: SameSite::Lax,
            cookie_path: "/api/".to_string(),
            cookie_domain: None,
            cookie_secure: None,
        }
    }
}

/// Top-level session policy and the per-frontend overrides
#[derive(Debug, Clone, Serialize)]
pub struct SessionConfig {
    /// Session store identifier
    pub engine: String,
    /// Only send the cookie over HTTPS
    pub cookie_secure: bool,
    /// Hide the cookie from scripts
    pub cookie_httponly: bool,
    /// Cross-site cookie policy
    pub cookie_samesite: SameSite,
    /// Session lifetime in seconds, from `SESSION_COOKIE_AGE`
    pub cookie_age: i64,
    /// Drop the session when the browser closes
    pub expire_at_browser_close: bool,
    /// Refresh the expiry on every request
    pub save_every_request: bool,
    /// Kiosk frontend policy
    pub clock_app: AppSessionConfig,
    /// Staff portal policy
    pub hub_app: AppSessionConfig,
    /// Hard cap on a hub session's lifetime regardless of activity
    pub hub_absolute_age: i64,
}

impl SessionConfig {
    fn from_env(env: &EnvVars, secure: bool) -> SettingsResult<Self> {
        let mut session = Self {
            engine: SESSION_ENGINE.to_string(),
            cookie_secure: false,
            cookie_httponly: true,
            cookie_samesite: SameSite::Lax,
            cookie_age: parse_int(
                SESSION_COOKIE_AGE,
                env.session_cookie_age.as_deref(),
                DEFAULT_COOKIE_AGE,
            )?,
            expire_at_browser_close: parse_flag(
                env.session_expire_at_browser_close.as_deref(),
                true,
            ),
            save_every_request: true,
            clock_app: AppSessionConfig::clock(),
            hub_app: AppSessionConfig::hub(),
            hub_absolute_age: parse_int(
                HUB_ABSOLUTE_SESSION_AGE,
                env.hub_absolute_session_age.as_deref(),
                DEFAULT_HUB_ABSOLUTE_AGE,
            )?,
        };
        session.set_cookie_secure(secure);
        Ok(session)
    }

    pub(crate) fn production(env: &EnvVars) -> SettingsResult<Self> {
        Self::from_env(env, true)
    }

    /// Plain HTTP is allowed locally
    pub(crate) fn development(env: &EnvVars) -> SettingsResult<Self> {
        Self::from_env(env, false)
    }

    /// Set the secure-cookie flag on the session and on both frontends
    pub fn set_cookie_secure(&mut self, secure: bool) {
        self.cookie_secure = secure;
        self.clock_app.cookie_secure = Some(secure);
        self.hub_app.cookie_secure = Some(secure);
    }

    /// Cookie policy for a request's frontend.
    ///
    /// Unknown frontends get the kiosk policy since it has the shortest lifetime.
    pub fn for_app(&self, app: Option<AppType>) -> &AppSessionConfig {
        match app {
            Some(AppType::Hub) => &self.hub_app,
            Some(AppType::Clock) | None => &self.clock_app,
        }
    }
}
