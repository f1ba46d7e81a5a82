//! Public marketing site handlers
//!
//! JSON payloads for the marketing pages, and the contact form endpoint.
//! Contact submission stores the inquiry first; the email notification is
//! best-effort and its failure never changes the HTTP outcome — ignoring it
//! is an explicit policy choice, logged at WARN.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use shared::models::{
    ContactSubmission, Portfolio, PortfolioCategory, PortfolioImage, Service, TeamMember,
};

use crate::db;
use crate::state::AppState;

const DEFAULT_MISSION: &str =
    "We bring joyful, safe and memorable parties to kids everywhere.";

/// Business identity block rendered into public payloads
#[derive(Serialize)]
pub struct SiteInfo {
    pub name: String,
    pub tagline: String,
    pub phone: String,
    pub email: String,
}

impl SiteInfo {
    fn from_state(state: &AppState) -> Self {
        Self {
            name: state.site.name.clone(),
            tagline: state.site.tagline.clone(),
            phone: state.site.phone.clone(),
            email: state.site.email.clone(),
        }
    }
}

#[derive(Serialize)]
pub struct HomePayload {
    pub site: SiteInfo,
    pub featured_services: Vec<Service>,
    pub featured_portfolio: Vec<Portfolio>,
}

/// GET /
pub async fn home(State(state): State<AppState>) -> AppResult<Json<HomePayload>> {
    let (featured_services, featured_portfolio) = futures::try_join!(
        db::site::services_featured(&state.pool, 3),
        db::site::portfolio_featured(&state.pool, 4),
    )?;

    Ok(Json(HomePayload {
        site: SiteInfo::from_state(&state),
        featured_services,
        featured_portfolio,
    }))
}

/// GET /services/
pub async fn services(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = db::site::services_all(&state.pool).await?;
    Ok(Json(services))
}

#[derive(Serialize)]
pub struct ServiceDetail {
    #[serde(flatten)]
    pub service: Service,
    pub related_portfolio: Vec<Portfolio>,
}

/// GET /services/{slug}/
pub async fn service_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ServiceDetail>> {
    let service = db::site::service_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Service '{slug}'")))?;

    let related_portfolio = db::site::portfolio_featured(&state.pool, 3).await?;

    Ok(Json(ServiceDetail {
        service,
        related_portfolio,
    }))
}

#[derive(Deserialize)]
pub struct PortfolioQuery {
    pub category: Option<String>,
}

/// GET /portfolio/?category=
pub async fn portfolio(
    State(state): State<AppState>,
    Query(query): Query<PortfolioQuery>,
) -> AppResult<Json<Vec<Portfolio>>> {
    let category: Option<PortfolioCategory> = match query.category.as_deref() {
        None | Some("") => None,
        Some(v) => Some(
            serde_json::from_value(serde_json::Value::String(v.to_string()))
                .map_err(|_| AppError::validation("category is not a recognized value"))?,
        ),
    };

    let projects = db::site::portfolio_list(&state.pool, category).await?;
    Ok(Json(projects))
}

#[derive(Serialize)]
pub struct PortfolioDetail {
    #[serde(flatten)]
    pub portfolio: Portfolio,
    pub images: Vec<PortfolioImage>,
    pub related: Vec<Portfolio>,
}

/// GET /portfolio/{slug}/
pub async fn portfolio_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<PortfolioDetail>> {
    let portfolio = db::site::portfolio_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Portfolio '{slug}'")))?;

    let (images, related) = futures::try_join!(
        db::site::portfolio_images(&state.pool, portfolio.id),
        db::site::portfolio_related(&state.pool, portfolio.category, portfolio.id, 3),
    )?;

    Ok(Json(PortfolioDetail {
        portfolio,
        images,
        related,
    }))
}

#[derive(Serialize)]
pub struct AboutPayload {
    pub site: SiteInfo,
    pub mission: String,
    pub team: Vec<TeamMember>,
}

/// GET /about/
pub async fn about(State(state): State<AppState>) -> AppResult<Json<AboutPayload>> {
    let (mission, team) = futures::try_join!(
        db::site::content_get(&state.pool, "about_mission"),
        db::site::team_active(&state.pool),
    )?;

    Ok(Json(AboutPayload {
        site: SiteInfo::from_state(&state),
        mission: mission
            .map(|c| c.content)
            .unwrap_or_else(|| DEFAULT_MISSION.to_string()),
        team,
    }))
}

// ── Contact form ─────────────────────────────────────────────────────

/// Response shape of POST /contact/submit/ (a stable contract)
#[derive(Serialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Check the required fields; returns the first missing one.
fn missing_field(submission: &ContactSubmission) -> Option<&'static str> {
    if submission.name.trim().is_empty() {
        return Some("name");
    }
    if submission.email.trim().is_empty() {
        return Some("email");
    }
    if submission.message.trim().is_empty() {
        return Some("message");
    }
    None
}

/// POST /contact/submit/
pub async fn contact_submit(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> (StatusCode, Json<ContactResponse>) {
    if let Some(field) = missing_field(&submission) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ContactResponse {
                success: false,
                message: None,
                error: Some(format!("{field} is required")),
            }),
        );
    }

    let company = Some(submission.company.trim())
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    let inquiry = match db::inquiries::create(
        &state.pool,
        submission.name.trim(),
        submission.email.trim(),
        company.as_deref(),
        submission.message.trim(),
    )
    .await
    {
        Ok(inquiry) => inquiry,
        Err(e) => {
            let app_error: AppError = e.into();
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContactResponse {
                    success: false,
                    message: None,
                    error: Some(app_error.message),
                }),
            );
        }
    };

    // Best-effort notification: the inquiry is already stored, so a send
    // failure is logged and dropped.
    if let Err(e) = state
        .notifier
        .send_inquiry_notification(&state.inquiry_notify_email, &inquiry)
        .await
    {
        tracing::warn!(inquiry_id = inquiry.id, error = %e, "Inquiry notification failed");
    }

    (
        StatusCode::OK,
        Json(ContactResponse {
            success: true,
            message: Some("Thanks! We'll get back to you shortly.".to_string()),
            error: None,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.into(),
            email: email.into(),
            company: String::new(),
            message: message.into(),
        }
    }

    #[test]
    fn test_missing_email_rejected() {
        let s = submission("Asha", "", "Birthday for 20 kids");
        assert_eq!(missing_field(&s), Some("email"));
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let s = submission("  ", "a@b.com", "hello");
        assert_eq!(missing_field(&s), Some("name"));
    }

    #[test]
    fn test_complete_submission_accepted() {
        let s = submission("Asha", "asha@example.com", "Birthday for 20 kids");
        assert_eq!(missing_field(&s), None);
    }
}
