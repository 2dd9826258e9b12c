use deploy_settings::config::SettingsWarning;

use crate::test_utils::{development, production};

#[test]
fn test_empty_hosts_fall_back_with_warning() {
    let settings = production(&[]);

    assert_eq!(
        settings.allowed_hosts.as_slice(),
        [".up.railway.app", "healthcheck.railway.app"]
    );
    assert_eq!(settings.warnings, vec![SettingsWarning::EmptyAllowedHosts]);
}

#[test]
fn test_configured_hosts_keep_order_without_warning() {
    let settings = production(&[("DJANGO_ALLOWED_HOSTS", "example.com, api.example.com")]);

    assert_eq!(settings.allowed_hosts.as_slice(), ["example.com", "api.example.com"]);
    assert!(settings.warnings.is_empty());
}

#[test]
fn test_blank_entries_are_dropped_and_duplicates_kept() {
    let settings = production(&[("DJANGO_ALLOWED_HOSTS", " a.com,, ,b.com,a.com ,")]);

    assert_eq!(settings.allowed_hosts.as_slice(), ["a.com", "b.com", "a.com"]);
}

#[test]
fn test_only_separators_counts_as_empty() {
    let settings = production(&[("DJANGO_ALLOWED_HOSTS", " , ,")]);

    assert_eq!(settings.allowed_hosts.len(), 2);
    assert_eq!(settings.warnings, vec![SettingsWarning::EmptyAllowedHosts]);
}

#[test]
fn test_platform_domain_is_appended() {
    let settings = production(&[
        ("DJANGO_ALLOWED_HOSTS", "example.com"),
        ("RAILWAY_PUBLIC_DOMAIN", "app-production.up.railway.app"),
    ]);

    assert_eq!(
        settings.allowed_hosts.as_slice(),
        ["example.com", "app-production.up.railway.app"]
    );
}

#[test]
fn test_platform_domain_alone_avoids_fallback() {
    let settings = production(&[("RAILWAY_PUBLIC_DOMAIN", "svc.up.railway.app")]);

    assert_eq!(settings.allowed_hosts.as_slice(), ["svc.up.railway.app"]);
    assert!(settings.warnings.is_empty());
}

#[test]
fn test_empty_platform_domain_is_ignored() {
    let settings = production(&[("RAILWAY_PUBLIC_DOMAIN", "")]);

    assert_eq!(settings.warnings, vec![SettingsWarning::EmptyAllowedHosts]);
}

#[test]
fn test_fallback_hosts_admit_platform_subdomains() {
    let settings = production(&[]);

    assert!(settings.allowed_hosts.is_allowed("my-app.up.railway.app"));
    assert!(settings.allowed_hosts.is_allowed("up.railway.app"));
    assert!(settings.allowed_hosts.is_allowed("healthcheck.railway.app:8080"));
    assert!(!settings.allowed_hosts.is_allowed("railway.app"));
    assert!(!settings.allowed_hosts.is_allowed("example.com"));
}

#[test]
fn test_development_hosts_are_extended() {
    let settings = development(&[("DJANGO_ALLOWED_HOSTS", "dev.example.com")]);

    assert_eq!(
        settings.allowed_hosts.as_slice(),
        ["localhost", "127.0.0.1", "0.0.0.0", "api", "dev.example.com"]
    );
    assert!(settings.warnings.is_empty());
}
