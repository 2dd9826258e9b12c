use serde::Serialize;

use super::env::{split_list, EnvVars};
use super::SettingsWarning;

/// Substituted when production ends up with no hosts at all
pub const FALLBACK_HOSTS: &[&str] = &[".up.railway.app", "healthcheck.railway.app"];

/// Hosts accepted in development before `DJANGO_ALLOWED_HOSTS` extends them
pub const DEVELOPMENT_HOSTS: &[&str] = &["localhost", "127.0.0.1", "0.0.0.0", "api"];

/// Ordered host allow-list.
///
/// Entries are kept exactly as the operator wrote them; duplicates are not
/// removed and hostname syntax is not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AllowedHosts(Vec<String>);

impl AllowedHosts {
    pub fn new(hosts: Vec<String>) -> Self {
        Self(hosts)
    }

    pub(crate) fn production(env: &EnvVars, warnings: &mut Vec<SettingsWarning>) -> Self {
        let mut hosts = split_list(env.django_allowed_hosts.as_deref());

        if let Some(domain) = env.railway_public_domain.as_deref().filter(|d| !d.is_empty()) {
            hosts.push(domain.to_string());
        }

        if hosts.is_empty() {
            tracing::warn!(
                fallback = ?FALLBACK_HOSTS,
                "ALLOWED_HOSTS is empty; consider setting DJANGO_ALLOWED_HOSTS"
            );
            warnings.push(SettingsWarning::EmptyAllowedHosts);
            hosts = FALLBACK_HOSTS.iter().map(|h| h.to_string()).collect();
        }

        Self(hosts)
    }

    pub(crate) fn development(env: &EnvVars) -> Self {
        let mut hosts: Vec<String> = DEVELOPMENT_HOSTS.iter().map(|h| h.to_string()).collect();
        hosts.extend(split_list(env.django_allowed_hosts.as_deref()));
        Self(hosts)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check a `Host` header value against the allow-list.
    ///
    /// The port and any trailing dot are ignored and comparison is case
    /// insensitive. `*` matches every host; a pattern starting with `.`
    /// matches that domain and all of its subdomains.
    pub fn is_allowed(&self, host: &str) -> bool {
        let domain = strip_port(host).trim_end_matches('.').to_ascii_lowercase();
        if domain.is_empty() {
            return false;
        }
        self.0.iter().any(|pattern| host_matches(&domain, pattern))
    }
}

fn strip_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        // IPv6 literal, keep the brackets
        return match rest.find(']') {
            Some(end) => &host[..end + 2],
            None => host,
        };
    }
    match host.rsplit_once(':') {
        Some((name, port)) if port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}

fn host_matches(domain: &str, pattern: &str) -> bool {
    let pattern = pattern.to_ascii_lowercase();
    if pattern == "*" {
        return true;
    }
    match pattern.strip_prefix('.') {
        Some(base) => domain == base || domain.ends_with(&pattern),
        None => domain == pattern,
    }
}
