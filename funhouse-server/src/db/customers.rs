//! Customer queries
//!
//! Read paths select through `CUSTOMER_STATS_SELECT`, which computes the
//! derived fields in SQL: `full_name`, `total_bookings` (any status) and
//! `total_revenue` (confirmed bookings only, COALESCE-to-zero).

use sqlx::{PgPool, Postgres, QueryBuilder};

use shared::error::{AppError, ErrorCode};
use shared::models::{CustomerCreate, CustomerStatus, CustomerUpdate, CustomerWithStats, LeadSource};
use shared::page::{PAGE_SIZE, Page, clamp_page};
use shared::util::{now_millis, snowflake_id};

use crate::error::{ServiceError, ServiceResult, is_unique_violation};

const CUSTOMER_STATS_SELECT: &str = "SELECT c.id, c.first_name, c.last_name, \
     c.first_name || ' ' || c.last_name AS full_name, \
     c.email, c.phone, c.company, c.address, c.city, c.state, c.pincode, \
     c.status, c.lead_source, c.assigned_to, c.notes, c.last_contacted, \
     c.created_at, c.updated_at, \
     (SELECT COUNT(*) FROM event_booking b WHERE b.customer_id = c.id) AS total_bookings, \
     (SELECT COALESCE(SUM(b.total_amount), 0) FROM event_booking b \
      WHERE b.customer_id = c.id AND b.status = 'confirmed') AS total_revenue \
     FROM customer c";

fn push_filters(
    builder: &mut QueryBuilder<'_, Postgres>,
    search: Option<&str>,
    status: Option<CustomerStatus>,
    source: Option<LeadSource>,
) {
    if let Some(s) = search {
        let pattern = format!("%{s}%");
        builder.push(" AND (c.first_name ILIKE ").push_bind(pattern.clone());
        builder.push(" OR c.last_name ILIKE ").push_bind(pattern.clone());
        builder.push(" OR c.email ILIKE ").push_bind(pattern.clone());
        builder.push(" OR c.phone ILIKE ").push_bind(pattern.clone());
        builder.push(" OR c.company ILIKE ").push_bind(pattern);
        builder.push(")");
    }
    if let Some(status) = status {
        builder.push(" AND c.status = ").push_bind(status);
    }
    if let Some(source) = source {
        builder.push(" AND c.lead_source = ").push_bind(source);
    }
}

/// Filtered, paginated customer list, newest-created first.
pub async fn list(
    pool: &PgPool,
    search: Option<&str>,
    status: Option<CustomerStatus>,
    source: Option<LeadSource>,
    page: u32,
) -> ServiceResult<Page<CustomerWithStats>> {
    let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM customer c WHERE 1=1");
    push_filters(&mut count_query, search, status, source);
    let total: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

    let page = clamp_page(page, total as u64, PAGE_SIZE);
    let offset = (page - 1) * PAGE_SIZE;

    let mut query = QueryBuilder::new(format!("{CUSTOMER_STATS_SELECT} WHERE 1=1"));
    push_filters(&mut query, search, status, source);
    query
        .push(" ORDER BY c.created_at DESC LIMIT ")
        .push_bind(PAGE_SIZE as i64)
        .push(" OFFSET ")
        .push_bind(offset as i64);
    let rows: Vec<CustomerWithStats> = query.build_query_as().fetch_all(pool).await?;

    Ok(Page::new(rows, total as u64, page, PAGE_SIZE))
}

/// Most recently created customers (dashboard sidebar).
pub async fn recent(pool: &PgPool, limit: i64) -> ServiceResult<Vec<CustomerWithStats>> {
    let sql = format!("{CUSTOMER_STATS_SELECT} ORDER BY c.created_at DESC LIMIT $1");
    let rows = sqlx::query_as(&sql).bind(limit).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> ServiceResult<Option<CustomerWithStats>> {
    let sql = format!("{CUSTOMER_STATS_SELECT} WHERE c.id = $1");
    let row = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
    Ok(row)
}

pub async fn exists(pool: &PgPool, id: i64) -> ServiceResult<bool> {
    let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customer WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(found)
}

pub async fn create(pool: &PgPool, data: CustomerCreate) -> ServiceResult<CustomerWithStats> {
    let id = snowflake_id();
    let now = now_millis();

    let result = sqlx::query(
        "INSERT INTO customer (id, first_name, last_name, email, phone, company, address, \
         city, state, pincode, status, lead_source, notes, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $14)",
    )
    .bind(id)
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.company)
    .bind(&data.address)
    .bind(&data.city)
    .bind(&data.state)
    .bind(&data.pincode)
    .bind(data.status)
    .bind(data.lead_source)
    .bind(&data.notes)
    .bind(now)
    .execute(pool)
    .await;

    if let Err(e) = result {
        if is_unique_violation(&e, "customer_email_key") {
            return Err(AppError::new(ErrorCode::CustomerEmailExists).into());
        }
        return Err(e.into());
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| ServiceError::Db("Customer vanished after insert".into()))
}

pub async fn update(pool: &PgPool, id: i64, data: CustomerUpdate) -> ServiceResult<CustomerWithStats> {
    let now = now_millis();

    let result = sqlx::query(
        "UPDATE customer SET \
         first_name = COALESCE($1, first_name), \
         last_name = COALESCE($2, last_name), \
         email = COALESCE($3, email), \
         phone = COALESCE($4, phone), \
         company = COALESCE($5, company), \
         address = COALESCE($6, address), \
         city = COALESCE($7, city), \
         state = COALESCE($8, state), \
         pincode = COALESCE($9, pincode), \
         status = COALESCE($10, status), \
         lead_source = COALESCE($11, lead_source), \
         assigned_to = COALESCE($12, assigned_to), \
         notes = COALESCE($13, notes), \
         updated_at = $14 \
         WHERE id = $15",
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.company)
    .bind(&data.address)
    .bind(&data.city)
    .bind(&data.state)
    .bind(&data.pincode)
    .bind(data.status)
    .bind(data.lead_source)
    .bind(data.assigned_to)
    .bind(&data.notes)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await;

    match result {
        Ok(done) if done.rows_affected() == 0 => {
            Err(AppError::new(ErrorCode::CustomerNotFound).into())
        }
        Ok(_) => find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::new(ErrorCode::CustomerNotFound).into()),
        Err(e) if is_unique_violation(&e, "customer_email_key") => {
            Err(AppError::new(ErrorCode::CustomerEmailExists).into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Bump `last_contacted` after an interaction is logged.
pub async fn touch_last_contacted(pool: &PgPool, id: i64, now: i64) -> ServiceResult<()> {
    sqlx::query("UPDATE customer SET last_contacted = $1, updated_at = $1 WHERE id = $2")
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

// These tests run against a live Postgres instance; `#[sqlx::test]` gives
// each one its own database with ./migrations applied.
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;
    use shared::models::{BookingCreate, BookingStatus, EventType, Package};

    fn new_customer(first: &str, last: &str, email: &str) -> CustomerCreate {
        CustomerCreate {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: "+919876543210".to_string(),
            company: None,
            address: None,
            city: None,
            state: None,
            pincode: None,
            status: CustomerStatus::New,
            lead_source: LeadSource::Website,
            notes: None,
        }
    }

    fn new_booking(status: BookingStatus, base_price: Decimal) -> BookingCreate {
        BookingCreate {
            customer_id: None,
            event_date: NaiveDate::from_ymd_opt(2026, 10, 4).unwrap(),
            event_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            event_type: EventType::Birthday,
            package: Package::Gold,
            venue_address: "12 Park Lane".to_string(),
            number_of_children: None,
            child_age_group: None,
            special_requests: None,
            base_price: Some(base_price),
            additional_charges: Decimal::ZERO,
            discount: Decimal::ZERO,
            advance_paid: Decimal::ZERO,
            status,
            payment_status: Default::default(),
            assigned_performer: None,
        }
    }

    #[sqlx::test]
    async fn test_total_revenue_counts_confirmed_only(pool: PgPool) {
        let customer = create(&pool, new_customer("Asha", "Rao", "asha@example.com"))
            .await
            .unwrap();
        super::super::bookings::create(
            &pool,
            customer.id,
            new_booking(BookingStatus::Confirmed, Decimal::new(7000, 0)),
        )
        .await
        .unwrap();
        super::super::bookings::create(
            &pool,
            customer.id,
            new_booking(BookingStatus::Completed, Decimal::new(6000, 0)),
        )
        .await
        .unwrap();

        let stats = find_by_id(&pool, customer.id).await.unwrap().unwrap();
        // Both bookings count; only the confirmed one contributes revenue.
        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.total_revenue, Decimal::new(7000, 0));
        assert_eq!(stats.full_name, "Asha Rao");
    }

    #[sqlx::test]
    async fn test_list_combines_filters_newest_first(pool: PgPool) {
        let older = create(&pool, new_customer("Maya", "Iyer", "maya@example.com"))
            .await
            .unwrap();
        let newer = create(&pool, new_customer("Mayank", "Shah", "mayank@example.com"))
            .await
            .unwrap();
        let mut contacted = new_customer("Maya", "Kapoor", "maya.k@example.com");
        contacted.status = CustomerStatus::Contacted;
        create(&pool, contacted).await.unwrap();

        // Pin creation times so the ordering is deterministic.
        sqlx::query("UPDATE customer SET created_at = $1 WHERE id = $2")
            .bind(1_000_i64)
            .bind(older.id)
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("UPDATE customer SET created_at = $1 WHERE id = $2")
            .bind(2_000_i64)
            .bind(newer.id)
            .execute(&pool)
            .await
            .unwrap();

        let page = list(&pool, Some("may"), Some(CustomerStatus::New), None, 1)
            .await
            .unwrap();
        // Search matches all three; the status filter drops the contacted one.
        assert_eq!(page.total, 2);
        assert_eq!(page.data[0].id, newer.id);
        assert_eq!(page.data[1].id, older.id);
    }
}
