//! Outbound email notifications (AWS SES)
//!
//! The only email the server sends today is the contact-inquiry alert to the
//! business inbox. Failures are reported to the caller through
//! `NotificationError`; the contact handler decides whether they are fatal
//! (they are not — the inquiry is already stored).

use aws_sdk_sesv2::Client as SesClient;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};

use shared::models::ContactInquiry;

/// Outbound email failed (build or send)
#[derive(Debug, thiserror::Error)]
#[error("email notification failed: {0}")]
pub struct NotificationError(#[from] Box<dyn std::error::Error + Send + Sync>);

#[derive(Clone)]
enum Backend {
    Ses { client: SesClient, from: String },
    Noop,
}

/// Sends operational notifications. Cheap to clone.
#[derive(Clone)]
pub struct Notifier {
    backend: Backend,
}

impl Notifier {
    pub fn ses(aws_config: &aws_config::SdkConfig, from: String) -> Self {
        Self {
            backend: Backend::Ses {
                client: SesClient::new(aws_config),
                from,
            },
        }
    }

    /// Drops every notification. Used when EMAIL_DISABLED is set.
    pub fn noop() -> Self {
        Self {
            backend: Backend::Noop,
        }
    }

    /// Alert the business inbox about a new contact inquiry.
    pub async fn send_inquiry_notification(
        &self,
        to: &str,
        inquiry: &ContactInquiry,
    ) -> Result<(), NotificationError> {
        let Backend::Ses { client, from } = &self.backend else {
            tracing::debug!(inquiry_id = inquiry.id, "Email disabled, skipping notification");
            return Ok(());
        };

        let subject = Content::builder()
            .data(format!("New contact inquiry from {}", inquiry.name))
            .build()
            .map_err(|e| NotificationError(e.into()))?;

        let company = inquiry.company.as_deref().unwrap_or("-");
        let body_text = format!(
            "Name: {}\nEmail: {}\nCompany: {}\n\n{}",
            inquiry.name, inquiry.email, company, inquiry.message
        );

        let body = Body::builder()
            .text(
                Content::builder()
                    .data(body_text)
                    .build()
                    .map_err(|e| NotificationError(e.into()))?,
            )
            .build();

        let message = Message::builder().subject(subject).body(body).build();

        client
            .send_email()
            .from_email_address(from)
            .destination(Destination::builder().to_addresses(to).build())
            .content(EmailContent::builder().simple(message).build())
            .send()
            .await
            .map_err(|e| NotificationError(e.into()))?;

        tracing::info!(inquiry_id = inquiry.id, "Contact inquiry notification sent");
        Ok(())
    }
}
