//! Task API handlers
//!
//! Non-admin staff only see tasks assigned to them, no matter what filter
//! parameters they send.

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Task, TaskCreate, TaskPriority, TaskStatus, TaskStatusUpdate, TaskUpdate};
use shared::page::Page;

use crate::auth::StaffIdentity;
use crate::db;
use crate::domain::listing::ListQuery;
use crate::state::AppState;
use crate::util::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text};

/// GET /crm/tasks/?status=&priority=&page=
pub async fn list(
    State(state): State<AppState>,
    Extension(identity): Extension<StaffIdentity>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Page<Task>>> {
    let status: Option<TaskStatus> = query.status()?;
    let priority: Option<TaskPriority> = query.priority()?;
    let restrict_to = if identity.is_admin { None } else { Some(identity.id) };

    let page = db::tasks::list(&state.pool, status, priority, restrict_to, query.page()).await?;
    Ok(Json(page))
}

/// POST /crm/tasks/add/
pub async fn create(
    State(state): State<AppState>,
    Extension(identity): Extension<StaffIdentity>,
    Json(payload): Json<TaskCreate>,
) -> AppResult<Json<Task>> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    if let Some(customer_id) = payload.customer_id
        && !db::customers::exists(&state.pool, customer_id).await?
    {
        return Err(AppError::new(ErrorCode::CustomerNotFound));
    }

    let task = db::tasks::create(&state.pool, identity.id, payload).await?;
    Ok(Json(task))
}

/// POST /crm/tasks/{id}/edit/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TaskUpdate>,
) -> AppResult<Json<Task>> {
    validate_optional_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let task = db::tasks::update(&state.pool, id, payload).await?;
    Ok(Json(task))
}

/// POST /crm/tasks/{id}/status/ — the completion latch applies here.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TaskStatusUpdate>,
) -> AppResult<Json<Task>> {
    let task = db::tasks::update_status(&state.pool, id, payload.status).await?;
    Ok(Json(task))
}
