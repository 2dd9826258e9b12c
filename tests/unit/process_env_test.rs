use std::env;

use deploy_settings::config::Environment;
use deploy_settings::load_config;
use serial_test::serial;

const VARS: &[(&str, &str)] = &[
    ("DJANGO_ENV", "production"),
    ("DJANGO_SECRET_KEY", "process-env-secret"),
    ("DJANGO_ALLOWED_HOSTS", "example.com, api.example.com"),
    ("SESSION_COOKIE_AGE", "900"),
];

#[test]
#[serial]
fn test_load_reads_process_environment() {
    for (key, value) in VARS {
        env::set_var(key, value);
    }

    let result = load_config();

    for (key, _) in VARS {
        env::remove_var(key);
    }

    let settings = result.expect("settings should load from the process environment");
    assert_eq!(settings.environment, Environment::Production);
    assert_eq!(settings.allowed_hosts.as_slice(), ["example.com", "api.example.com"]);
    assert_eq!(settings.session.cookie_age, 900);
    assert!(settings.warnings.is_empty());
}

#[cfg(unix)]
mod non_unicode {
    use std::env;
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    use assert_matches::assert_matches;
    use deploy_settings::{load_config, SettingsError};
    use serial_test::serial;

    const INVALID: &[u8] = b"\xff\xfe";

    fn with_base_vars<T>(f: impl FnOnce() -> T) -> T {
        env::set_var("DJANGO_ENV", "production");
        env::set_var("DJANGO_SECRET_KEY", "process-env-secret");
        let result = f();
        env::remove_var("DJANGO_ENV");
        env::remove_var("DJANGO_SECRET_KEY");
        result
    }

    #[test]
    #[serial]
    fn test_unrelated_non_unicode_variable_is_ignored() {
        env::set_var("DEPLOY_SETTINGS_UNRELATED", OsStr::from_bytes(INVALID));
        let result = with_base_vars(load_config);
        env::remove_var("DEPLOY_SETTINGS_UNRELATED");

        let settings = result.expect("unrelated variables should not affect the load");
        assert!(settings.is_production());
    }

    #[test]
    #[serial]
    fn test_non_unicode_setting_fails_the_load() {
        env::set_var("DJANGO_LOG_LEVEL", OsStr::from_bytes(INVALID));
        let result = with_base_vars(load_config);
        env::remove_var("DJANGO_LOG_LEVEL");

        assert_matches!(result, Err(SettingsError::NonUnicode("DJANGO_LOG_LEVEL")));
    }
}
