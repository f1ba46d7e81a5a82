//! Dashboard handler
//!
//! One aggregate payload for the CRM landing page, covering the trailing
//! 30 days where a window applies.

use axum::{
    Json,
    extract::{Extension, State},
};
use chrono::{Duration, Utc};
use futures::try_join;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::error::AppResult;
use shared::models::{BookingWithCustomer, CustomerStatus, CustomerWithStats, Task};

use crate::auth::StaffIdentity;
use crate::db;
use crate::db::reports::{BookingStatusCount, LeadSourceCount};
use crate::state::AppState;

const WINDOW_DAYS: i64 = 30;
const SIDEBAR_LIMIT: i64 = 5;

#[derive(Serialize)]
pub struct DashboardPayload {
    pub total_customers: i64,
    pub new_leads: i64,
    pub active_bookings: i64,
    pub completed_bookings: i64,
    pub completed_revenue: Decimal,
    pub pending_revenue: Decimal,
    pub customers_by_lead_source: Vec<LeadSourceCount>,
    pub bookings_by_status: Vec<BookingStatusCount>,
    pub recent_customers: Vec<CustomerWithStats>,
    pub upcoming_events: Vec<BookingWithCustomer>,
    pub my_tasks: Vec<Task>,
}

/// GET /crm/
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(identity): Extension<StaffIdentity>,
) -> AppResult<Json<DashboardPayload>> {
    let today = Utc::now().date_naive();
    let window_start = today - Duration::days(WINDOW_DAYS);

    let (
        total_customers,
        new_leads,
        active_bookings,
        completed,
        pending_revenue,
        customers_by_lead_source,
        bookings_by_status,
        recent_customers,
        upcoming_events,
        my_tasks,
    ) = try_join!(
        db::reports::count_customers(&state.pool),
        db::reports::count_customers_with_status(&state.pool, CustomerStatus::New),
        db::reports::count_active_bookings(&state.pool),
        db::reports::completed_bookings_since(&state.pool, window_start),
        db::reports::pending_revenue(&state.pool),
        db::reports::customers_by_lead_source(&state.pool),
        db::reports::bookings_by_status(&state.pool),
        db::customers::recent(&state.pool, SIDEBAR_LIMIT),
        db::bookings::upcoming_confirmed(&state.pool, today, SIDEBAR_LIMIT),
        db::tasks::open_for_staff(&state.pool, identity.id, SIDEBAR_LIMIT),
    )?;

    Ok(Json(DashboardPayload {
        total_customers,
        new_leads,
        active_bookings,
        completed_bookings: completed.count,
        completed_revenue: completed.revenue,
        pending_revenue,
        customers_by_lead_source,
        bookings_by_status,
        recent_customers,
        upcoming_events,
        my_tasks,
    }))
}
