//! Public marketing site module (no auth)

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::home))
        .route("/services/", get(handler::services))
        .route("/services/{slug}/", get(handler::service_detail))
        .route("/portfolio/", get(handler::portfolio))
        .route("/portfolio/{slug}/", get(handler::portfolio_detail))
        .route("/about/", get(handler::about))
        .route("/contact/submit/", post(handler::contact_submit))
}
