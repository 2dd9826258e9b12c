use serde::Serialize;

pub const INSTALLED_APPS: &[&str] = &[
    "django.contrib.admin",
    "django.contrib.auth",
    "django.contrib.contenttypes",
    "django.contrib.sessions",
    "django.contrib.messages",
    "django.contrib.staticfiles",
    "corsheaders",
    "rest_framework",
    "core",
];

/// Tried in order; access codes first, then username and password
pub const AUTHENTICATION_BACKENDS: &[&str] = &[
    "core.auth.AccessCodeBackend",
    "django.contrib.auth.backends.ModelBackend",
];

pub const PASSWORD_VALIDATORS: &[&str] = &[
    "django.contrib.auth.password_validation.UserAttributeSimilarityValidator",
    "django.contrib.auth.password_validation.MinimumLengthValidator",
    "django.contrib.auth.password_validation.CommonPasswordValidator",
    "django.contrib.auth.password_validation.NumericPasswordValidator",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestFrameworkConfig {
    pub authentication_classes: Vec<String>,
    pub permission_classes: Vec<String>,
    pub pagination_class: String,
    pub page_size: u32,
}

impl Default for RestFrameworkConfig {
    fn default() -> Self {
        Self {
            authentication_classes: vec![
                "rest_framework.authentication.SessionAuthentication".to_string(),
            ],
            permission_classes: vec!["rest_framework.permissions.IsAuthenticated".to_string()],
            pagination_class: "rest_framework.pagination.PageNumberPagination".to_string(),
            page_size: 20,
        }
    }
}

/// Application wiring identical across profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationConfig {
    pub installed_apps: Vec<String>,
    pub root_urlconf: String,
    pub wsgi_application: String,
    pub authentication_backends: Vec<String>,
    pub password_validators: Vec<String>,
    pub default_auto_field: String,
    pub language_code: String,
    pub time_zone: String,
    pub use_i18n: bool,
    pub use_tz: bool,
    pub rest_framework: RestFrameworkConfig,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            installed_apps: owned(INSTALLED_APPS),
            root_urlconf: "time_tracking_backend.urls".to_string(),
            wsgi_application: "time_tracking_backend.wsgi.application".to_string(),
            authentication_backends: owned(AUTHENTICATION_BACKENDS),
            password_validators: owned(PASSWORD_VALIDATORS),
            default_auto_field: "django.db.models.BigAutoField".to_string(),
            language_code: "en-us".to_string(),
            time_zone: "UTC".to_string(),
            use_i18n: true,
            use_tz: true,
            rest_framework: RestFrameworkConfig::default(),
        }
    }
}
