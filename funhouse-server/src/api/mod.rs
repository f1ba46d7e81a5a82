//! API routes
//!
//! Two surfaces: the public marketing site at the root, and the CRM under
//! `/crm` behind staff JWT auth (login excepted). Content-management routes
//! inside the CRM additionally require the admin role.

pub mod auth;
pub mod bookings;
pub mod customers;
pub mod dashboard;
pub mod public;
pub mod quotes;
pub mod reports;
pub mod site_admin;
pub mod tasks;

use axum::{Router, middleware};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let crm = Router::new()
        .merge(dashboard::router())
        .merge(reports::router())
        .merge(customers::router())
        .merge(bookings::router())
        .merge(tasks::router())
        .merge(quotes::router())
        .merge(site_admin::router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::staff_auth_middleware,
        ))
        // Login/logout sit outside the auth layer
        .merge(auth::router());

    Router::new()
        .merge(public::router())
        .nest("/crm", crm)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
