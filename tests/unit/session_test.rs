use assert_matches::assert_matches;
use deploy_settings::config::{AppType, SameSite};
use deploy_settings::SettingsError;

use crate::test_utils::{development, production, try_production};

#[test]
fn test_session_defaults() {
    let session = production(&[]).session;

    assert_eq!(session.cookie_age, 3600);
    assert!(session.expire_at_browser_close);
    assert!(session.cookie_secure);
    assert!(session.cookie_httponly);
    assert_eq!(session.cookie_samesite, SameSite::Lax);
    assert_eq!(session.hub_absolute_age, 12 * 3600);
    assert_eq!(session.engine, "core.session");
}

#[test]
fn test_session_age_override() {
    let session = production(&[("SESSION_COOKIE_AGE", "120")]).session;

    assert_eq!(session.cookie_age, 120);
}

#[test]
fn test_negative_session_age_is_accepted() {
    let session = production(&[("SESSION_COOKIE_AGE", "-5")]).session;

    assert_eq!(session.cookie_age, -5);
}

#[test]
fn test_non_numeric_session_age_fails_the_load() {
    let result = try_production(&[("SESSION_COOKIE_AGE", "one hour")]);

    assert_matches!(
        result,
        Err(SettingsError::InvalidInteger { var: "SESSION_COOKIE_AGE", ref value }) if value == "one hour"
    );
}

#[test]
fn test_expire_at_browser_close_flag() {
    let off = production(&[("SESSION_EXPIRE_AT_BROWSER_CLOSE", "FALSE")]).session;
    let on = production(&[("SESSION_EXPIRE_AT_BROWSER_CLOSE", "true")]).session;

    assert!(!off.expire_at_browser_close);
    assert!(on.expire_at_browser_close);
}

#[test]
fn test_secure_flag_reaches_both_frontends() {
    let mut session = production(&[]).session;

    assert_eq!(session.clock_app.cookie_secure, Some(true));
    assert_eq!(session.hub_app.cookie_secure, Some(true));

    session.set_cookie_secure(false);

    assert!(!session.cookie_secure);
    assert_eq!(session.clock_app.cookie_secure, Some(false));
    assert_eq!(session.hub_app.cookie_secure, Some(false));
}

#[test]
fn test_development_cookies_are_insecure() {
    let session = development(&[]).session;

    assert!(!session.cookie_secure);
    assert_eq!(session.clock_app.cookie_secure, Some(false));
    assert_eq!(session.hub_app.cookie_secure, Some(false));
}

#[test]
fn test_frontend_policies() {
    let session = production(&[]).session;

    let clock = session.for_app(Some(AppType::Clock));
    assert_eq!(clock.cookie_name, "clock_sessionid");
    assert_eq!(clock.cookie_age, 120);
    assert_eq!(clock.cookie_samesite, SameSite::Strict);

    let hub = session.for_app("hub".parse().ok());
    assert_eq!(hub.cookie_name, "hub_sessionid");
    assert!(!hub.expire_at_browser_close);
    assert_eq!(hub.cookie_path, "/api/");

    // unknown frontends get the kiosk policy
    assert_eq!(session.for_app("mobile".parse().ok()), clock);
    assert_eq!(session.for_app(None), clock);
}

#[test]
fn test_hub_absolute_age_override() {
    let session = production(&[("HUB_ABSOLUTE_SESSION_AGE", "7200")]).session;

    assert_eq!(session.hub_absolute_age, 7200);
}
