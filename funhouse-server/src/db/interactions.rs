//! Interaction log queries
//!
//! Append-only: interactions are created and listed, never updated.

use sqlx::PgPool;

use shared::models::{Interaction, InteractionCreate};
use shared::util::{now_millis, snowflake_id};

use crate::error::{ServiceError, ServiceResult};

pub async fn create(
    pool: &PgPool,
    customer_id: i64,
    created_by: i64,
    data: InteractionCreate,
) -> ServiceResult<Interaction> {
    let id = snowflake_id();
    let now = now_millis();

    sqlx::query(
        "INSERT INTO interaction (id, customer_id, interaction_type, subject, description, \
         created_by, follow_up_date, created_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(id)
    .bind(customer_id)
    .bind(data.interaction_type)
    .bind(&data.subject)
    .bind(&data.description)
    .bind(created_by)
    .bind(data.follow_up_date)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| ServiceError::Db("Interaction vanished after insert".into()))
}

async fn find_by_id(pool: &PgPool, id: i64) -> ServiceResult<Option<Interaction>> {
    let row = sqlx::query_as("SELECT * FROM interaction WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_customer(pool: &PgPool, customer_id: i64) -> ServiceResult<Vec<Interaction>> {
    let rows = sqlx::query_as(
        "SELECT * FROM interaction WHERE customer_id = $1 ORDER BY created_at DESC",
    )
    .bind(customer_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
