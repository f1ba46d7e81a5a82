//! Grouped aggregates for the dashboard and report surfaces
//!
//! Every sum over an empty set is COALESCEd to zero so downstream display
//! arithmetic stays total. The conversion rate is bookings-per-customer as a
//! percentage and can exceed 100 when customers book more than once; that is
//! the metric's definition, not a bug.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

use shared::models::{BookingStatus, CustomerStatus, LeadSource, Package};

use crate::error::ServiceResult;

/// Bookings-per-customer ratio as a percentage. Not bounded at 100.
pub fn conversion_rate(customers: i64, bookings: i64) -> f64 {
    if customers == 0 {
        0.0
    } else {
        bookings as f64 * 100.0 / customers as f64
    }
}

// ── Scalar metrics ───────────────────────────────────────────────────

pub async fn count_customers(pool: &PgPool) -> ServiceResult<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM customer")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn count_customers_with_status(
    pool: &PgPool,
    status: CustomerStatus,
) -> ServiceResult<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM customer WHERE status = $1")
        .bind(status)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Bookings still moving through the pipeline.
pub async fn count_active_bookings(pool: &PgPool) -> ServiceResult<i64> {
    let count = sqlx::query_scalar(
        "SELECT COUNT(*) FROM event_booking WHERE status IN ('inquiry', 'quoted', 'confirmed')",
    )
    .fetch_one(pool)
    .await?;
    Ok(count)
}

/// Count and revenue of completed bookings with an event date in the window.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CompletedWindow {
    pub count: i64,
    pub revenue: Decimal,
}

pub async fn completed_bookings_since(pool: &PgPool, from: NaiveDate) -> ServiceResult<CompletedWindow> {
    let row = sqlx::query_as(
        "SELECT COUNT(*) AS count, COALESCE(SUM(total_amount), 0) AS revenue \
         FROM event_booking WHERE status = 'completed' AND event_date >= $1",
    )
    .bind(from)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Revenue expected from confirmed and quoted bookings, unwindowed.
pub async fn pending_revenue(pool: &PgPool) -> ServiceResult<Decimal> {
    let sum = sqlx::query_scalar(
        "SELECT COALESCE(SUM(total_amount), 0) FROM event_booking \
         WHERE status IN ('confirmed', 'quoted')",
    )
    .fetch_one(pool)
    .await?;
    Ok(sum)
}

// ── Grouped metrics ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LeadSourceCount {
    pub lead_source: LeadSource,
    pub count: i64,
}

pub async fn customers_by_lead_source(pool: &PgPool) -> ServiceResult<Vec<LeadSourceCount>> {
    let rows = sqlx::query_as(
        "SELECT lead_source, COUNT(*) AS count FROM customer \
         GROUP BY lead_source ORDER BY count DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct BookingStatusCount {
    pub status: BookingStatus,
    pub count: i64,
}

pub async fn bookings_by_status(pool: &PgPool) -> ServiceResult<Vec<BookingStatusCount>> {
    let rows = sqlx::query_as(
        "SELECT status, COUNT(*) AS count FROM event_booking \
         GROUP BY status ORDER BY count DESC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MonthlyCount {
    /// Calendar month, `YYYY-MM`
    pub month: String,
    pub count: i64,
}

/// New customers per creation month since the given timestamp.
pub async fn customer_growth_by_month(
    pool: &PgPool,
    since_millis: i64,
) -> ServiceResult<Vec<MonthlyCount>> {
    let rows = sqlx::query_as(
        "SELECT to_char(to_timestamp(created_at / 1000.0) AT TIME ZONE 'UTC', 'YYYY-MM') AS month, \
         COUNT(*) AS count FROM customer WHERE created_at >= $1 \
         GROUP BY 1 ORDER BY 1",
    )
    .bind(since_millis)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PackageRevenue {
    pub package: Package,
    pub count: i64,
    pub revenue: Decimal,
}

/// Completed-booking revenue and count per package tier in the window.
pub async fn revenue_by_package(pool: &PgPool, from: NaiveDate) -> ServiceResult<Vec<PackageRevenue>> {
    let rows = sqlx::query_as(
        "SELECT package, COUNT(*) AS count, COALESCE(SUM(total_amount), 0) AS revenue \
         FROM event_booking WHERE status = 'completed' AND event_date >= $1 \
         GROUP BY package ORDER BY revenue DESC",
    )
    .bind(from)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
struct LeadPerformanceRow {
    lead_source: LeadSource,
    customers: i64,
    bookings: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadPerformance {
    pub lead_source: LeadSource,
    pub customers: i64,
    pub bookings: i64,
    pub conversion_rate: f64,
}

/// Customer count, booking count and conversion rate per lead source, over
/// customers created since the given timestamp.
pub async fn lead_performance(pool: &PgPool, since_millis: i64) -> ServiceResult<Vec<LeadPerformance>> {
    let rows: Vec<LeadPerformanceRow> = sqlx::query_as(
        "SELECT c.lead_source, COUNT(DISTINCT c.id) AS customers, COUNT(b.id) AS bookings \
         FROM customer c LEFT JOIN event_booking b ON b.customer_id = c.id \
         WHERE c.created_at >= $1 GROUP BY c.lead_source ORDER BY customers DESC",
    )
    .bind(since_millis)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| LeadPerformance {
            lead_source: row.lead_source,
            customers: row.customers,
            bookings: row.bookings,
            conversion_rate: conversion_rate(row.customers, row.bookings),
        })
        .collect())
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct MonthlyTrend {
    /// Event month, `YYYY-MM`
    pub month: String,
    pub count: i64,
    pub revenue: Decimal,
}

/// Booking count and revenue per event month since the given date.
pub async fn monthly_booking_trends(pool: &PgPool, from: NaiveDate) -> ServiceResult<Vec<MonthlyTrend>> {
    let rows = sqlx::query_as(
        "SELECT to_char(event_date, 'YYYY-MM') AS month, COUNT(*) AS count, \
         COALESCE(SUM(total_amount), 0) AS revenue \
         FROM event_booking WHERE event_date >= $1 GROUP BY 1 ORDER BY 1",
    )
    .bind(from)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_rate_exceeds_100() {
        // 2 customers with 3 bookings between them: 150%, deliberately
        // unbounded.
        assert_eq!(conversion_rate(2, 3), 150.0);
    }

    #[test]
    fn test_conversion_rate_zero_customers() {
        assert_eq!(conversion_rate(0, 5), 0.0);
    }

    #[test]
    fn test_conversion_rate_no_bookings() {
        assert_eq!(conversion_rate(4, 0), 0.0);
    }
}
