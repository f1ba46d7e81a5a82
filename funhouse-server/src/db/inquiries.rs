//! Contact inquiry queries

use sqlx::PgPool;

use shared::error::{AppError, ErrorCode};
use shared::models::{ContactInquiry, InquiryStatus};
use shared::page::{PAGE_SIZE, Page, clamp_page};
use shared::util::{now_millis, snowflake_id};

use crate::error::{ServiceError, ServiceResult};

pub async fn create(
    pool: &PgPool,
    name: &str,
    email: &str,
    company: Option<&str>,
    message: &str,
) -> ServiceResult<ContactInquiry> {
    let id = snowflake_id();
    let now = now_millis();

    sqlx::query(
        "INSERT INTO contact_inquiry (id, name, email, company, message, status, created_at) \
         VALUES ($1, $2, $3, $4, $5, 'new', $6)",
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(company)
    .bind(message)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| ServiceError::Db("Contact inquiry vanished after insert".into()))
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> ServiceResult<Option<ContactInquiry>> {
    let row = sqlx::query_as("SELECT * FROM contact_inquiry WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Paginated inquiry list, newest first (admin triage view).
pub async fn list(pool: &PgPool, page: u32) -> ServiceResult<Page<ContactInquiry>> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_inquiry")
        .fetch_one(pool)
        .await?;

    let page = clamp_page(page, total as u64, PAGE_SIZE);
    let offset = (page - 1) * PAGE_SIZE;

    let rows: Vec<ContactInquiry> = sqlx::query_as(
        "SELECT * FROM contact_inquiry ORDER BY created_at DESC LIMIT $1 OFFSET $2",
    )
    .bind(PAGE_SIZE as i64)
    .bind(offset as i64)
    .fetch_all(pool)
    .await?;

    Ok(Page::new(rows, total as u64, page, PAGE_SIZE))
}

/// Triage status transition. `responded_at` latches on the first transition
/// to `responded`.
pub async fn update_status(
    pool: &PgPool,
    id: i64,
    status: InquiryStatus,
) -> ServiceResult<ContactInquiry> {
    let Some(existing) = find_by_id(pool, id).await? else {
        return Err(AppError::new(ErrorCode::InquiryNotFound).into());
    };

    let responded_at = match (status, existing.responded_at) {
        (InquiryStatus::Responded, None) => Some(now_millis()),
        (_, existing) => existing,
    };

    sqlx::query("UPDATE contact_inquiry SET status = $1, responded_at = $2 WHERE id = $3")
        .bind(status)
        .bind(responded_at)
        .bind(id)
        .execute(pool)
        .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::InquiryNotFound).into())
}
