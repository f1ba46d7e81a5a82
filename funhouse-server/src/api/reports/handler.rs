//! Reports handler
//!
//! Trailing-90-day business analytics. The customer growth and lead
//! performance series window on record creation time; the package revenue
//! and booking trend series window on event date.

use axum::{Json, extract::State};
use chrono::{Duration, NaiveTime, Utc};
use futures::try_join;
use serde::Serialize;
use shared::error::AppResult;

use crate::db;
use crate::db::reports::{LeadPerformance, MonthlyCount, MonthlyTrend, PackageRevenue};
use crate::state::AppState;

const WINDOW_DAYS: i64 = 90;

#[derive(Serialize)]
pub struct ReportsPayload {
    pub customer_growth: Vec<MonthlyCount>,
    pub revenue_by_package: Vec<PackageRevenue>,
    pub lead_performance: Vec<LeadPerformance>,
    pub monthly_trends: Vec<MonthlyTrend>,
}

/// GET /crm/reports/
pub async fn reports(State(state): State<AppState>) -> AppResult<Json<ReportsPayload>> {
    let window_start = Utc::now().date_naive() - Duration::days(WINDOW_DAYS);
    let since_millis = window_start
        .and_time(NaiveTime::MIN)
        .and_utc()
        .timestamp_millis();

    let (customer_growth, revenue_by_package, lead_performance, monthly_trends) = try_join!(
        db::reports::customer_growth_by_month(&state.pool, since_millis),
        db::reports::revenue_by_package(&state.pool, window_start),
        db::reports::lead_performance(&state.pool, since_millis),
        db::reports::monthly_booking_trends(&state.pool, window_start),
    )?;

    Ok(Json(ReportsPayload {
        customer_growth,
        revenue_by_package,
        lead_performance,
        monthly_trends,
    }))
}
