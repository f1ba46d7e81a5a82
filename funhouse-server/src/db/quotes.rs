//! Quote queries
//!
//! Quote numbers are generated at first save from the count of quotes
//! already created the same UTC day. Two concurrent creations can race to
//! the same number; the unique index rejects the loser and the insert is
//! retried with a fresh count, up to [`MAX_NUMBER_ATTEMPTS`] times.

use sqlx::PgPool;

use shared::error::{AppError, ErrorCode};
use shared::models::{Quote, QuoteCreate, QuoteStatus};
use shared::page::{PAGE_SIZE, Page, clamp_page};
use shared::util::{now_millis, snowflake_id};

use crate::domain::pricing::derive_amounts;
use crate::domain::quote_number;
use crate::error::{ServiceError, ServiceResult, is_unique_violation};

const MAX_NUMBER_ATTEMPTS: u32 = 3;

const DEFAULT_TERMS: &str = "Standard terms and conditions apply.";

/// Paginated quote list, newest first.
pub async fn list(pool: &PgPool, page: u32) -> ServiceResult<Page<Quote>> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quote")
        .fetch_one(pool)
        .await?;

    let page = clamp_page(page, total as u64, PAGE_SIZE);
    let offset = (page - 1) * PAGE_SIZE;

    let rows: Vec<Quote> = sqlx::query_as(
        "SELECT * FROM quote ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(PAGE_SIZE as i64)
    .bind(offset as i64)
    .fetch_all(pool)
    .await?;

    Ok(Page::new(rows, total as u64, page, PAGE_SIZE))
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> ServiceResult<Option<Quote>> {
    let row = sqlx::query_as("SELECT * FROM quote WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_customer(pool: &PgPool, customer_id: i64) -> ServiceResult<Vec<Quote>> {
    let rows = sqlx::query_as("SELECT * FROM quote WHERE customer_id = $1 ORDER BY created_at DESC")
        .bind(customer_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Number of quotes created on the given UTC day.
async fn count_created_on(pool: &PgPool, date: chrono::NaiveDate) -> ServiceResult<i64> {
    let (start, end) = quote_number::day_bounds_millis(date);
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM quote WHERE created_at >= $1 AND created_at < $2")
            .bind(start)
            .bind(end)
            .fetch_one(pool)
            .await?;
    Ok(count)
}

pub async fn create(pool: &PgPool, data: QuoteCreate) -> ServiceResult<Quote> {
    if !super::customers::exists(pool, data.customer_id).await? {
        return Err(AppError::new(ErrorCode::CustomerNotFound).into());
    }

    let base_price = data.base_price.unwrap_or_else(|| data.package.base_price());
    let amounts = derive_amounts(
        base_price,
        data.additional_charges,
        data.discount,
        rust_decimal::Decimal::ZERO,
    );
    let today = chrono::Utc::now().date_naive();

    for attempt in 1..=MAX_NUMBER_ATTEMPTS {
        let ordinal = count_created_on(pool, today).await? + 1;
        let number = quote_number::format(today, ordinal as u32);
        let id = snowflake_id();
        let now = now_millis();

        let result = sqlx::query(
            "INSERT INTO quote (id, customer_id, quote_number, event_type, event_date, \
             package, base_price, additional_services, additional_charges, discount, \
             total_amount, status, valid_until, terms_conditions, notes, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, 'draft', $12, $13, $14, $15, $15)",
        )
        .bind(id)
        .bind(data.customer_id)
        .bind(&number)
        .bind(data.event_type)
        .bind(data.event_date)
        .bind(data.package)
        .bind(base_price)
        .bind(&data.additional_services)
        .bind(data.additional_charges)
        .bind(data.discount)
        .bind(amounts.total_amount)
        .bind(data.valid_until)
        .bind(data.terms_conditions.as_deref().unwrap_or(DEFAULT_TERMS))
        .bind(&data.notes)
        .bind(now)
        .execute(pool)
        .await;

        match result {
            Ok(_) => {
                return find_by_id(pool, id)
                    .await?
                    .ok_or_else(|| ServiceError::Db("Quote vanished after insert".into()));
            }
            Err(e) if is_unique_violation(&e, "quote_quote_number_key") => {
                tracing::warn!(number, attempt, "Quote number collision, retrying");
                continue;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(AppError::new(ErrorCode::QuoteNumberConflict).into())
}

/// Status transition. `sent_at` latches on the first transition to `sent`.
pub async fn update_status(pool: &PgPool, id: i64, status: QuoteStatus) -> ServiceResult<Quote> {
    let Some(existing) = find_by_id(pool, id).await? else {
        return Err(AppError::new(ErrorCode::QuoteNotFound).into());
    };

    let now = now_millis();
    let sent_at = match (status, existing.sent_at) {
        (QuoteStatus::Sent, None) => Some(now),
        (_, existing) => existing,
    };

    sqlx::query("UPDATE quote SET status = $1, sent_at = $2, updated_at = $3 WHERE id = $4")
        .bind(status)
        .bind(sent_at)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::QuoteNotFound).into())
}

// These tests run against a live Postgres instance; `#[sqlx::test]` gives
// each one its own database with ./migrations applied.
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use shared::models::{CustomerCreate, EventType, Package};

    async fn seed_customer(pool: &PgPool) -> i64 {
        let created = super::super::customers::create(
            pool,
            CustomerCreate {
                first_name: "Asha".to_string(),
                last_name: "Rao".to_string(),
                email: "asha@example.com".to_string(),
                phone: "+919876543210".to_string(),
                company: None,
                address: None,
                city: None,
                state: None,
                pincode: None,
                status: Default::default(),
                lead_source: Default::default(),
                notes: None,
            },
        )
        .await
        .unwrap();
        created.id
    }

    fn new_quote(customer_id: i64) -> QuoteCreate {
        QuoteCreate {
            customer_id,
            event_type: EventType::Birthday,
            event_date: NaiveDate::from_ymd_opt(2026, 10, 4).unwrap(),
            package: Package::Silver,
            base_price: None,
            additional_services: None,
            additional_charges: Decimal::ZERO,
            discount: Decimal::ZERO,
            valid_until: NaiveDate::from_ymd_opt(2026, 9, 20).unwrap(),
            terms_conditions: None,
            notes: None,
        }
    }

    #[sqlx::test]
    async fn test_same_day_numbers_increment(pool: PgPool) {
        let customer_id = seed_customer(&pool).await;
        let today = chrono::Utc::now().date_naive();

        let first = create(&pool, new_quote(customer_id)).await.unwrap();
        let second = create(&pool, new_quote(customer_id)).await.unwrap();

        assert_eq!(first.quote_number, quote_number::format(today, 1));
        assert_eq!(second.quote_number, quote_number::format(today, 2));
        // base_price falls back to the package tier price.
        assert_eq!(first.total_amount, Package::Silver.base_price());
    }
}
