//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Environment: development | staging | production
    pub environment: String,
    /// JWT secret for staff authentication
    pub jwt_secret: String,
    /// Bootstrap admin account, created when the staff table is empty
    pub admin_username: String,
    /// Bootstrap admin password
    pub admin_password: String,
    /// SES sender email address
    pub ses_from_email: String,
    /// Inbox that receives contact-inquiry notifications
    pub inquiry_notify_email: String,
    /// Set to disable outbound email (local development)
    pub email_disabled: bool,
    /// Business identity shown on the public site
    pub site: SiteConfig,
}

/// Static business identity rendered into public site payloads
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
}

impl Config {
    /// Require a secret env var: must be set and non-empty in non-development environments.
    fn require_secret(name: &str, environment: &str) -> Result<String, BoxError> {
        let val = match std::env::var(name) {
            Ok(v) => v,
            Err(_) => {
                if environment != "development" {
                    return Err(format!("{name} must be set in {environment} environment").into());
                }
                format!("dev-{name}-not-for-production")
            }
        };
        if val.is_empty() && environment != "development" {
            return Err(format!("{name} must not be empty in {environment} environment").into());
        }
        Ok(val)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            jwt_secret: Self::require_secret("JWT_SECRET", &environment)?,
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: Self::require_secret("ADMIN_PASSWORD", &environment)?,
            ses_from_email: std::env::var("SES_FROM_EMAIL")
                .unwrap_or_else(|_| "noreply@funhouse.example".into()),
            inquiry_notify_email: std::env::var("INQUIRY_NOTIFY_EMAIL")
                .unwrap_or_else(|_| "hello@funhouse.example".into()),
            email_disabled: std::env::var("EMAIL_DISABLED")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(environment == "development"),
            site: SiteConfig {
                name: std::env::var("SITE_NAME").unwrap_or_else(|_| "FunHouse Events".into()),
                tagline: std::env::var("SITE_TAGLINE")
                    .unwrap_or_else(|_| "Unforgettable parties for kids".into()),
                phone: std::env::var("SITE_PHONE").unwrap_or_else(|_| "+918888888888".into()),
                email: std::env::var("SITE_EMAIL")
                    .unwrap_or_else(|_| "hello@funhouse.example".into()),
            },
            environment,
        })
    }
}
