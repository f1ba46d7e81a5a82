//! Content-management API module
//!
//! Admin-only CRUD over the marketing site content: services, portfolio
//! projects and their gallery images, team members, content blocks, and
//! contact inquiry triage. The whole router sits behind [`require_admin`]
//! on top of the CRM auth layer.

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_admin;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/site/services/", get(handler::services_list))
        .route("/site/services/add/", post(handler::service_create))
        .route("/site/services/{id}/edit/", post(handler::service_update))
        .route("/site/services/{id}/delete/", post(handler::service_delete))
        .route("/site/portfolio/", get(handler::portfolio_list))
        .route("/site/portfolio/add/", post(handler::portfolio_create))
        .route("/site/portfolio/{id}/edit/", post(handler::portfolio_update))
        .route("/site/portfolio/{id}/delete/", post(handler::portfolio_delete))
        .route("/site/portfolio/{id}/images/add/", post(handler::portfolio_image_add))
        .route("/site/portfolio/images/{id}/delete/", post(handler::portfolio_image_delete))
        .route("/site/team/", get(handler::team_list))
        .route("/site/team/add/", post(handler::team_create))
        .route("/site/team/{id}/edit/", post(handler::team_update))
        .route("/site/team/{id}/delete/", post(handler::team_delete))
        .route("/site/content/{key}/", post(handler::content_upsert))
        .route("/site/inquiries/", get(handler::inquiries_list))
        .route("/site/inquiries/{id}/status/", post(handler::inquiry_update_status))
        .layer(middleware::from_fn(require_admin))
}
