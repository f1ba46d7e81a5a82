//! Task API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks/", get(handler::list))
        .route("/tasks/add/", post(handler::create))
        .route("/tasks/{id}/edit/", post(handler::update))
        .route("/tasks/{id}/status/", post(handler::update_status))
}
