//! Customer API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers/", get(handler::list))
        .route("/customers/add/", post(handler::create))
        .route("/customers/{id}/", get(handler::detail))
        .route("/customers/{id}/edit/", post(handler::update))
        .route("/customers/{id}/interaction/", post(handler::add_interaction))
}
