//! Staff login/logout module

mod handler;

use axum::{Router, routing::post};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login/", post(handler::login))
        .route("/logout/", post(handler::logout))
}
