//! Booking API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookings/", get(handler::list))
        .route("/bookings/add/", post(handler::create))
        .route("/bookings/add/{customer_id}/", post(handler::create_for_customer))
        .route("/bookings/{id}/", get(handler::detail))
        .route("/bookings/{id}/edit/", post(handler::update))
}
