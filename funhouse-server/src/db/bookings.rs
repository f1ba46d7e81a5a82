//! Event booking queries
//!
//! Every write recomputes `total_amount` and `balance_amount` through
//! `domain::pricing::derive_amounts`; the stored values are never taken from
//! input.

use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, QueryBuilder};

use shared::error::{AppError, ErrorCode};
use shared::models::{BookingCreate, BookingStatus, BookingUpdate, BookingWithCustomer, EventBooking};
use shared::page::{PAGE_SIZE, Page, clamp_page};
use shared::util::{now_millis, snowflake_id};

use crate::domain::pricing::derive_amounts;
use crate::error::{ServiceError, ServiceResult};

const BOOKING_SELECT: &str = "SELECT b.id, b.customer_id, \
     c.first_name || ' ' || c.last_name AS customer_name, \
     c.email AS customer_email, \
     b.event_date, b.event_time, b.event_type, b.package, b.venue_address, \
     b.number_of_children, b.child_age_group, b.special_requests, \
     b.base_price, b.additional_charges, b.discount, b.total_amount, \
     b.advance_paid, b.balance_amount, b.status, b.payment_status, \
     b.assigned_performer, b.created_at, b.updated_at \
     FROM event_booking b JOIN customer c ON c.id = b.customer_id";

fn push_filters(
    builder: &mut QueryBuilder<'_, Postgres>,
    search: Option<&str>,
    status: Option<BookingStatus>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
) {
    if let Some(s) = search {
        let pattern = format!("%{s}%");
        builder.push(" AND (c.first_name ILIKE ").push_bind(pattern.clone());
        builder.push(" OR c.last_name ILIKE ").push_bind(pattern.clone());
        builder.push(" OR c.email ILIKE ").push_bind(pattern.clone());
        builder.push(" OR b.venue_address ILIKE ").push_bind(pattern);
        builder.push(")");
    }
    if let Some(status) = status {
        builder.push(" AND b.status = ").push_bind(status);
    }
    if let Some(from) = date_from {
        builder.push(" AND b.event_date >= ").push_bind(from);
    }
    if let Some(to) = date_to {
        builder.push(" AND b.event_date <= ").push_bind(to);
    }
}

/// Filtered, paginated booking list, event date descending.
pub async fn list(
    pool: &PgPool,
    search: Option<&str>,
    status: Option<BookingStatus>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    page: u32,
) -> ServiceResult<Page<BookingWithCustomer>> {
    let mut count_query = QueryBuilder::new(
        "SELECT COUNT(*) FROM event_booking b JOIN customer c ON c.id = b.customer_id WHERE 1=1",
    );
    push_filters(&mut count_query, search, status, date_from, date_to);
    let total: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

    let page = clamp_page(page, total as u64, PAGE_SIZE);
    let offset = (page - 1) * PAGE_SIZE;

    let mut query = QueryBuilder::new(format!("{BOOKING_SELECT} WHERE 1=1"));
    push_filters(&mut query, search, status, date_from, date_to);
    query
        .push(" ORDER BY b.event_date DESC LIMIT ")
        .push_bind(PAGE_SIZE as i64)
        .push(" OFFSET ")
        .push_bind(offset as i64);
    let rows: Vec<BookingWithCustomer> = query.build_query_as().fetch_all(pool).await?;

    Ok(Page::new(rows, total as u64, page, PAGE_SIZE))
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> ServiceResult<Option<BookingWithCustomer>> {
    let sql = format!("{BOOKING_SELECT} WHERE b.id = $1");
    let row = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
    Ok(row)
}

async fn find_row(pool: &PgPool, id: i64) -> ServiceResult<Option<EventBooking>> {
    let row = sqlx::query_as("SELECT * FROM event_booking WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_customer(pool: &PgPool, customer_id: i64) -> ServiceResult<Vec<EventBooking>> {
    let rows = sqlx::query_as(
        "SELECT * FROM event_booking WHERE customer_id = $1 ORDER BY event_date DESC",
    )
    .bind(customer_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(
    pool: &PgPool,
    customer_id: i64,
    data: BookingCreate,
) -> ServiceResult<BookingWithCustomer> {
    if !super::customers::exists(pool, customer_id).await? {
        return Err(AppError::new(ErrorCode::CustomerNotFound).into());
    }

    let id = snowflake_id();
    let now = now_millis();
    let base_price = data.base_price.unwrap_or_else(|| data.package.base_price());
    let amounts = derive_amounts(base_price, data.additional_charges, data.discount, data.advance_paid);

    sqlx::query(
        "INSERT INTO event_booking (id, customer_id, event_date, event_time, event_type, \
         package, venue_address, number_of_children, child_age_group, special_requests, \
         base_price, additional_charges, discount, total_amount, advance_paid, \
         balance_amount, status, payment_status, assigned_performer, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, \
         $17, $18, $19, $20, $20)",
    )
    .bind(id)
    .bind(customer_id)
    .bind(data.event_date)
    .bind(data.event_time)
    .bind(data.event_type)
    .bind(data.package)
    .bind(&data.venue_address)
    .bind(data.number_of_children.unwrap_or(10))
    .bind(data.child_age_group.as_deref().unwrap_or("3-12 years"))
    .bind(&data.special_requests)
    .bind(base_price)
    .bind(data.additional_charges)
    .bind(data.discount)
    .bind(amounts.total_amount)
    .bind(data.advance_paid)
    .bind(amounts.balance_amount)
    .bind(data.status)
    .bind(data.payment_status)
    .bind(data.assigned_performer)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| ServiceError::Db("Booking vanished after insert".into()))
}

/// Merge the update into the stored row and rewrite it with freshly derived
/// amounts. Fetch-merge-write rather than COALESCE-in-SQL because the
/// derivation needs the effective values of all four monetary fields.
pub async fn update(pool: &PgPool, id: i64, data: BookingUpdate) -> ServiceResult<BookingWithCustomer> {
    let Some(existing) = find_row(pool, id).await? else {
        return Err(AppError::new(ErrorCode::BookingNotFound).into());
    };

    let base_price = data.base_price.unwrap_or(existing.base_price);
    let additional_charges = data.additional_charges.unwrap_or(existing.additional_charges);
    let discount = data.discount.unwrap_or(existing.discount);
    let advance_paid = data.advance_paid.unwrap_or(existing.advance_paid);
    let amounts = derive_amounts(base_price, additional_charges, discount, advance_paid);

    sqlx::query(
        "UPDATE event_booking SET event_date = $1, event_time = $2, event_type = $3, \
         package = $4, venue_address = $5, number_of_children = $6, child_age_group = $7, \
         special_requests = $8, base_price = $9, additional_charges = $10, discount = $11, \
         total_amount = $12, advance_paid = $13, balance_amount = $14, status = $15, \
         payment_status = $16, assigned_performer = $17, updated_at = $18 \
         WHERE id = $19",
    )
    .bind(data.event_date.unwrap_or(existing.event_date))
    .bind(data.event_time.unwrap_or(existing.event_time))
    .bind(data.event_type.unwrap_or(existing.event_type))
    .bind(data.package.unwrap_or(existing.package))
    .bind(data.venue_address.as_deref().unwrap_or(&existing.venue_address))
    .bind(data.number_of_children.unwrap_or(existing.number_of_children))
    .bind(data.child_age_group.as_deref().unwrap_or(&existing.child_age_group))
    .bind(data.special_requests.or(existing.special_requests))
    .bind(base_price)
    .bind(additional_charges)
    .bind(discount)
    .bind(amounts.total_amount)
    .bind(advance_paid)
    .bind(amounts.balance_amount)
    .bind(data.status.unwrap_or(existing.status))
    .bind(data.payment_status.unwrap_or(existing.payment_status))
    .bind(data.assigned_performer.or(existing.assigned_performer))
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::BookingNotFound).into())
}

/// Upcoming confirmed events for the dashboard.
pub async fn upcoming_confirmed(
    pool: &PgPool,
    from: NaiveDate,
    limit: i64,
) -> ServiceResult<Vec<BookingWithCustomer>> {
    let sql = format!(
        "{BOOKING_SELECT} WHERE b.status = 'confirmed' AND b.event_date >= $1 \
         ORDER BY b.event_date ASC LIMIT $2"
    );
    let rows = sqlx::query_as(&sql)
        .bind(from)
        .bind(limit)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}
