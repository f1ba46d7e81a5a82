//! Quote API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Quote, QuoteCreate, QuoteStatusUpdate};
use shared::page::Page;

use crate::db;
use crate::domain::listing::ListQuery;
use crate::domain::pricing::validate_money;
use crate::state::AppState;
use crate::util::{MAX_NOTE_LEN, validate_optional_text};

/// GET /crm/quotes/?page=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Page<Quote>>> {
    let page = db::quotes::list(&state.pool, query.page()).await?;
    Ok(Json(page))
}

/// POST /crm/quotes/add/ — assigns the quote number and derives the total.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<QuoteCreate>,
) -> AppResult<Json<Quote>> {
    if let Some(base_price) = payload.base_price {
        validate_money("base_price", base_price)?;
    }
    validate_money("additional_charges", payload.additional_charges)?;
    validate_money("discount", payload.discount)?;
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let quote = db::quotes::create(&state.pool, payload).await?;
    Ok(Json(quote))
}

/// GET /crm/quotes/{id}/
pub async fn detail(State(state): State<AppState>, Path(id): Path<i64>) -> AppResult<Json<Quote>> {
    let quote = db::quotes::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::new(ErrorCode::QuoteNotFound))?;
    Ok(Json(quote))
}

/// POST /crm/quotes/{id}/status/ — `sent_at` latches on the first
/// transition to sent.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<QuoteStatusUpdate>,
) -> AppResult<Json<Quote>> {
    let quote = db::quotes::update_status(&state.pool, id, payload.status).await?;
    Ok(Json(quote))
}
