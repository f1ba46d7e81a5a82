//! Staff accounts

use sqlx::PgPool;

use shared::models::Staff;
use shared::util::{now_millis, snowflake_id};

use crate::error::ServiceResult;

pub async fn find_by_username(pool: &PgPool, username: &str) -> ServiceResult<Option<Staff>> {
    let row = sqlx::query_as("SELECT * FROM staff WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> ServiceResult<Option<Staff>> {
    let row = sqlx::query_as("SELECT * FROM staff WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Seed the initial admin account when the staff table is empty.
pub async fn ensure_admin(
    pool: &PgPool,
    username: &str,
    hashed_password: &str,
) -> ServiceResult<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM staff")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO staff (id, username, hashed_password, display_name, is_admin, created_at)
         VALUES ($1, $2, $3, $4, TRUE, $5)",
    )
    .bind(snowflake_id())
    .bind(username)
    .bind(hashed_password)
    .bind(username)
    .bind(now_millis())
    .execute(pool)
    .await?;

    tracing::info!(username, "Seeded initial admin staff account");
    Ok(())
}
