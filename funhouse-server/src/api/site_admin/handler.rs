//! Content-management handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{
    ContactInquiry, InquiryStatus, Portfolio, PortfolioCreate, PortfolioImage,
    PortfolioImageCreate, PortfolioUpdate, Service, ServiceCreate, ServiceUpdate, SiteContent,
    SiteContentUpsert, TeamMember, TeamMemberCreate, TeamMemberUpdate,
};
use shared::page::Page;

use crate::db;
use crate::domain::listing::ListQuery;
use crate::state::AppState;
use crate::util::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text};

// ── Services ─────────────────────────────────────────────────────────

/// GET /crm/site/services/
pub async fn services_list(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = db::site::services_all(&state.pool).await?;
    Ok(Json(services))
}

/// POST /crm/site/services/add/
pub async fn service_create(
    State(state): State<AppState>,
    Json(payload): Json<ServiceCreate>,
) -> AppResult<Json<Service>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    let service = db::site::service_create(&state.pool, payload).await?;
    Ok(Json(service))
}

/// POST /crm/site/services/{id}/edit/
pub async fn service_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ServiceUpdate>,
) -> AppResult<Json<Service>> {
    validate_optional_text(&payload.title, "title", MAX_NAME_LEN)?;
    let service = db::site::service_update(&state.pool, id, payload).await?;
    Ok(Json(service))
}

/// POST /crm/site/services/{id}/delete/
pub async fn service_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    if !db::site::service_delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::ServiceNotFound));
    }
    Ok(Json(ApiResponse::ok()))
}

// ── Portfolio ────────────────────────────────────────────────────────

/// GET /crm/site/portfolio/?category=
pub async fn portfolio_list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Portfolio>>> {
    let category = query.category()?;
    let projects = db::site::portfolio_list(&state.pool, category).await?;
    Ok(Json(projects))
}

/// POST /crm/site/portfolio/add/
pub async fn portfolio_create(
    State(state): State<AppState>,
    Json(payload): Json<PortfolioCreate>,
) -> AppResult<Json<Portfolio>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    let project = db::site::portfolio_create(&state.pool, payload).await?;
    Ok(Json(project))
}

/// POST /crm/site/portfolio/{id}/edit/
pub async fn portfolio_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PortfolioUpdate>,
) -> AppResult<Json<Portfolio>> {
    validate_optional_text(&payload.title, "title", MAX_NAME_LEN)?;
    let project = db::site::portfolio_update(&state.pool, id, payload).await?;
    Ok(Json(project))
}

/// POST /crm/site/portfolio/{id}/delete/
pub async fn portfolio_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    if !db::site::portfolio_delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::PortfolioNotFound));
    }
    Ok(Json(ApiResponse::ok()))
}

/// POST /crm/site/portfolio/{id}/images/add/
pub async fn portfolio_image_add(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PortfolioImageCreate>,
) -> AppResult<Json<PortfolioImage>> {
    let image = db::site::portfolio_image_add(&state.pool, id, payload).await?;
    Ok(Json(image))
}

/// POST /crm/site/portfolio/images/{id}/delete/
pub async fn portfolio_image_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    if !db::site::portfolio_image_delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::PortfolioNotFound));
    }
    Ok(Json(ApiResponse::ok()))
}

// ── Team ─────────────────────────────────────────────────────────────

/// GET /crm/site/team/ — includes inactive members, unlike the public page.
pub async fn team_list(State(state): State<AppState>) -> AppResult<Json<Vec<TeamMember>>> {
    let members = db::site::team_all(&state.pool).await?;
    Ok(Json(members))
}

/// POST /crm/site/team/add/
pub async fn team_create(
    State(state): State<AppState>,
    Json(payload): Json<TeamMemberCreate>,
) -> AppResult<Json<TeamMember>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.position, "position", MAX_NAME_LEN)?;
    let member = db::site::team_create(&state.pool, payload).await?;
    Ok(Json(member))
}

/// POST /crm/site/team/{id}/edit/
pub async fn team_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TeamMemberUpdate>,
) -> AppResult<Json<TeamMember>> {
    validate_optional_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.position, "position", MAX_NAME_LEN)?;
    let member = db::site::team_update(&state.pool, id, payload).await?;
    Ok(Json(member))
}

/// POST /crm/site/team/{id}/delete/
pub async fn team_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    if !db::site::team_delete(&state.pool, id).await? {
        return Err(AppError::new(ErrorCode::TeamMemberNotFound));
    }
    Ok(Json(ApiResponse::ok()))
}

// ── Site content ─────────────────────────────────────────────────────

/// POST /crm/site/content/{key}/ — create-or-replace by key.
pub async fn content_upsert(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(payload): Json<SiteContentUpsert>,
) -> AppResult<Json<SiteContent>> {
    validate_required_text(&payload.content, "content", MAX_NOTE_LEN)?;
    let content = db::site::content_upsert(&state.pool, &key, payload).await?;
    Ok(Json(content))
}

// ── Contact inquiries ────────────────────────────────────────────────

/// GET /crm/site/inquiries/?page=
pub async fn inquiries_list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Page<ContactInquiry>>> {
    let page = db::inquiries::list(&state.pool, query.page()).await?;
    Ok(Json(page))
}

#[derive(serde::Deserialize)]
pub struct InquiryStatusUpdate {
    pub status: InquiryStatus,
}

/// POST /crm/site/inquiries/{id}/status/
pub async fn inquiry_update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<InquiryStatusUpdate>,
) -> AppResult<Json<ContactInquiry>> {
    let inquiry = db::inquiries::update_status(&state.pool, id, payload.status).await?;
    Ok(Json(inquiry))
}
