//! Application state

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::{Config, SiteConfig};
use crate::email::Notifier;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Outbound email (contact-inquiry notifications)
    pub notifier: Notifier,
    /// JWT secret for staff authentication
    pub jwt_secret: String,
    /// Inbox that receives contact-inquiry notifications
    pub inquiry_notify_email: String,
    /// Business identity for public site payloads
    pub site: SiteConfig,
}

impl AppState {
    /// Create a new AppState: connect the pool, run migrations, build the notifier.
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        let notifier = if config.email_disabled {
            tracing::info!("Outbound email disabled");
            Notifier::noop()
        } else {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            Notifier::ses(&aws_config, config.ses_from_email.clone())
        };

        Ok(Self {
            pool,
            notifier,
            jwt_secret: config.jwt_secret.clone(),
            inquiry_notify_email: config.inquiry_notify_email.clone(),
            site: config.site.clone(),
        })
    }
}
