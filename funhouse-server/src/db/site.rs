//! Marketing site content queries
//!
//! Services, portfolio projects (+ gallery images), team members, and the
//! key-value site content blocks. Slugs are derived from the title once, at
//! creation, and never regenerated on update.

use sqlx::PgPool;

use shared::error::{AppError, ErrorCode};
use shared::models::{
    Portfolio, PortfolioCategory, PortfolioCreate, PortfolioImage, PortfolioImageCreate,
    PortfolioUpdate, Service, ServiceCreate, ServiceUpdate, SiteContent, SiteContentUpsert,
    TeamMember, TeamMemberCreate, TeamMemberUpdate,
};
use shared::util::{now_millis, slugify, snowflake_id};

use crate::error::{ServiceError, ServiceResult, is_unique_violation};

// ── Services ─────────────────────────────────────────────────────────

pub async fn services_all(pool: &PgPool) -> ServiceResult<Vec<Service>> {
    let rows = sqlx::query_as("SELECT * FROM service ORDER BY display_order, title")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn services_featured(pool: &PgPool, limit: i64) -> ServiceResult<Vec<Service>> {
    let rows = sqlx::query_as(
        "SELECT * FROM service WHERE featured ORDER BY display_order, title LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn service_by_slug(pool: &PgPool, slug: &str) -> ServiceResult<Option<Service>> {
    let row = sqlx::query_as("SELECT * FROM service WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

async fn service_by_id(pool: &PgPool, id: i64) -> ServiceResult<Option<Service>> {
    let row = sqlx::query_as("SELECT * FROM service WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn service_create(pool: &PgPool, data: ServiceCreate) -> ServiceResult<Service> {
    let id = snowflake_id();
    let now = now_millis();
    let slug = data.slug.unwrap_or_else(|| slugify(&data.title));

    let result = sqlx::query(
        "INSERT INTO service (id, title, slug, description, short_description, icon, \
         featured, display_order, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)",
    )
    .bind(id)
    .bind(&data.title)
    .bind(&slug)
    .bind(&data.description)
    .bind(&data.short_description)
    .bind(&data.icon)
    .bind(data.featured)
    .bind(data.display_order)
    .bind(now)
    .execute(pool)
    .await;

    if let Err(e) = result {
        if is_unique_violation(&e, "service_slug_key") {
            return Err(AppError::new(ErrorCode::SlugExists).into());
        }
        return Err(e.into());
    }

    service_by_id(pool, id)
        .await?
        .ok_or_else(|| ServiceError::Db("Service vanished after insert".into()))
}

pub async fn service_update(pool: &PgPool, id: i64, data: ServiceUpdate) -> ServiceResult<Service> {
    let done = sqlx::query(
        "UPDATE service SET title = COALESCE($1, title), \
         description = COALESCE($2, description), \
         short_description = COALESCE($3, short_description), \
         icon = COALESCE($4, icon), featured = COALESCE($5, featured), \
         display_order = COALESCE($6, display_order), updated_at = $7 WHERE id = $8",
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(&data.short_description)
    .bind(&data.icon)
    .bind(data.featured)
    .bind(data.display_order)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    if done.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::ServiceNotFound).into());
    }
    service_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ServiceNotFound).into())
}

pub async fn service_delete(pool: &PgPool, id: i64) -> ServiceResult<bool> {
    let done = sqlx::query("DELETE FROM service WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(done.rows_affected() > 0)
}

// ── Portfolio ────────────────────────────────────────────────────────

pub async fn portfolio_list(
    pool: &PgPool,
    category: Option<PortfolioCategory>,
) -> ServiceResult<Vec<Portfolio>> {
    let rows = match category {
        Some(category) => {
            sqlx::query_as(
                "SELECT * FROM portfolio WHERE category = $1 ORDER BY display_order, title",
            )
            .bind(category)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as("SELECT * FROM portfolio ORDER BY display_order, title")
                .fetch_all(pool)
                .await?
        }
    };
    Ok(rows)
}

pub async fn portfolio_featured(pool: &PgPool, limit: i64) -> ServiceResult<Vec<Portfolio>> {
    let rows = sqlx::query_as(
        "SELECT * FROM portfolio WHERE featured ORDER BY display_order, title LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn portfolio_by_slug(pool: &PgPool, slug: &str) -> ServiceResult<Option<Portfolio>> {
    let row = sqlx::query_as("SELECT * FROM portfolio WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

async fn portfolio_by_id(pool: &PgPool, id: i64) -> ServiceResult<Option<Portfolio>> {
    let row = sqlx::query_as("SELECT * FROM portfolio WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Other projects in the same category, excluding the current one.
pub async fn portfolio_related(
    pool: &PgPool,
    category: PortfolioCategory,
    exclude_id: i64,
    limit: i64,
) -> ServiceResult<Vec<Portfolio>> {
    let rows = sqlx::query_as(
        "SELECT * FROM portfolio WHERE category = $1 AND id <> $2 \
         ORDER BY display_order, title LIMIT $3",
    )
    .bind(category)
    .bind(exclude_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn portfolio_images(pool: &PgPool, portfolio_id: i64) -> ServiceResult<Vec<PortfolioImage>> {
    let rows = sqlx::query_as(
        "SELECT * FROM portfolio_image WHERE portfolio_id = $1 ORDER BY display_order, id",
    )
    .bind(portfolio_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn portfolio_create(pool: &PgPool, data: PortfolioCreate) -> ServiceResult<Portfolio> {
    let id = snowflake_id();
    let now = now_millis();
    let slug = data.slug.unwrap_or_else(|| slugify(&data.title));

    let result = sqlx::query(
        "INSERT INTO portfolio (id, title, slug, client, category, description, \
         short_description, featured_image, featured, display_order, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $11)",
    )
    .bind(id)
    .bind(&data.title)
    .bind(&slug)
    .bind(&data.client)
    .bind(data.category)
    .bind(&data.description)
    .bind(&data.short_description)
    .bind(&data.featured_image)
    .bind(data.featured)
    .bind(data.display_order)
    .bind(now)
    .execute(pool)
    .await;

    if let Err(e) = result {
        if is_unique_violation(&e, "portfolio_slug_key") {
            return Err(AppError::new(ErrorCode::SlugExists).into());
        }
        return Err(e.into());
    }

    portfolio_by_id(pool, id)
        .await?
        .ok_or_else(|| ServiceError::Db("Portfolio vanished after insert".into()))
}

pub async fn portfolio_update(pool: &PgPool, id: i64, data: PortfolioUpdate) -> ServiceResult<Portfolio> {
    let done = sqlx::query(
        "UPDATE portfolio SET title = COALESCE($1, title), client = COALESCE($2, client), \
         category = COALESCE($3, category), description = COALESCE($4, description), \
         short_description = COALESCE($5, short_description), \
         featured_image = COALESCE($6, featured_image), featured = COALESCE($7, featured), \
         display_order = COALESCE($8, display_order), updated_at = $9 WHERE id = $10",
    )
    .bind(&data.title)
    .bind(&data.client)
    .bind(data.category)
    .bind(&data.description)
    .bind(&data.short_description)
    .bind(&data.featured_image)
    .bind(data.featured)
    .bind(data.display_order)
    .bind(now_millis())
    .bind(id)
    .execute(pool)
    .await?;

    if done.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::PortfolioNotFound).into());
    }
    portfolio_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::PortfolioNotFound).into())
}

pub async fn portfolio_delete(pool: &PgPool, id: i64) -> ServiceResult<bool> {
    let done = sqlx::query("DELETE FROM portfolio WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(done.rows_affected() > 0)
}

pub async fn portfolio_image_add(
    pool: &PgPool,
    portfolio_id: i64,
    data: PortfolioImageCreate,
) -> ServiceResult<PortfolioImage> {
    if portfolio_by_id(pool, portfolio_id).await?.is_none() {
        return Err(AppError::new(ErrorCode::PortfolioNotFound).into());
    }

    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO portfolio_image (id, portfolio_id, image, caption, display_order) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(portfolio_id)
    .bind(&data.image)
    .bind(&data.caption)
    .bind(data.display_order)
    .execute(pool)
    .await?;

    let row = sqlx::query_as("SELECT * FROM portfolio_image WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    row.ok_or_else(|| ServiceError::Db("Portfolio image vanished after insert".into()))
}

pub async fn portfolio_image_delete(pool: &PgPool, id: i64) -> ServiceResult<bool> {
    let done = sqlx::query("DELETE FROM portfolio_image WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(done.rows_affected() > 0)
}

// ── Team members ─────────────────────────────────────────────────────

pub async fn team_active(pool: &PgPool) -> ServiceResult<Vec<TeamMember>> {
    let rows = sqlx::query_as(
        "SELECT * FROM team_member WHERE active ORDER BY display_order, name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn team_all(pool: &PgPool) -> ServiceResult<Vec<TeamMember>> {
    let rows = sqlx::query_as("SELECT * FROM team_member ORDER BY display_order, name")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

async fn team_by_id(pool: &PgPool, id: i64) -> ServiceResult<Option<TeamMember>> {
    let row = sqlx::query_as("SELECT * FROM team_member WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn team_create(pool: &PgPool, data: TeamMemberCreate) -> ServiceResult<TeamMember> {
    let id = snowflake_id();
    sqlx::query(
        "INSERT INTO team_member (id, name, position, bio, photo, display_order, active) \
         VALUES ($1, $2, $3, $4, $5, $6, TRUE)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.position)
    .bind(&data.bio)
    .bind(&data.photo)
    .bind(data.display_order)
    .execute(pool)
    .await?;

    team_by_id(pool, id)
        .await?
        .ok_or_else(|| ServiceError::Db("Team member vanished after insert".into()))
}

pub async fn team_update(pool: &PgPool, id: i64, data: TeamMemberUpdate) -> ServiceResult<TeamMember> {
    let done = sqlx::query(
        "UPDATE team_member SET name = COALESCE($1, name), \
         position = COALESCE($2, position), bio = COALESCE($3, bio), \
         photo = COALESCE($4, photo), display_order = COALESCE($5, display_order), \
         active = COALESCE($6, active) WHERE id = $7",
    )
    .bind(&data.name)
    .bind(&data.position)
    .bind(&data.bio)
    .bind(&data.photo)
    .bind(data.display_order)
    .bind(data.active)
    .bind(id)
    .execute(pool)
    .await?;

    if done.rows_affected() == 0 {
        return Err(AppError::new(ErrorCode::TeamMemberNotFound).into());
    }
    team_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TeamMemberNotFound).into())
}

pub async fn team_delete(pool: &PgPool, id: i64) -> ServiceResult<bool> {
    let done = sqlx::query("DELETE FROM team_member WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(done.rows_affected() > 0)
}

// ── Site content ─────────────────────────────────────────────────────

pub async fn content_get(pool: &PgPool, key: &str) -> ServiceResult<Option<SiteContent>> {
    let row = sqlx::query_as("SELECT * FROM site_content WHERE key = $1")
        .bind(key)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn content_upsert(
    pool: &PgPool,
    key: &str,
    data: SiteContentUpsert,
) -> ServiceResult<SiteContent> {
    sqlx::query(
        "INSERT INTO site_content (id, key, title, content, updated_at) \
         VALUES ($1, $2, $3, $4, $5) \
         ON CONFLICT (key) DO UPDATE SET title = EXCLUDED.title, \
         content = EXCLUDED.content, updated_at = EXCLUDED.updated_at",
    )
    .bind(snowflake_id())
    .bind(key)
    .bind(&data.title)
    .bind(&data.content)
    .bind(now_millis())
    .execute(pool)
    .await?;

    content_get(pool, key)
        .await?
        .ok_or_else(|| ServiceError::Db("Site content vanished after upsert".into()))
}
