//! Quote API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quotes/", get(handler::list))
        .route("/quotes/add/", post(handler::create))
        .route("/quotes/{id}/", get(handler::detail))
        .route("/quotes/{id}/status/", post(handler::update_status))
}
