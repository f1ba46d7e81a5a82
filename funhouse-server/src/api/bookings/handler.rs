//! Booking API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{BookingCreate, BookingStatus, BookingUpdate, BookingWithCustomer, Task};
use shared::page::Page;

use crate::db;
use crate::domain::listing::ListQuery;
use crate::domain::pricing::validate_money;
use crate::state::AppState;
use crate::util::{MAX_ADDRESS_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text};

fn validate_create(data: &BookingCreate) -> AppResult<()> {
    validate_required_text(&data.venue_address, "venue_address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&data.special_requests, "special_requests", MAX_NOTE_LEN)?;
    if let Some(base_price) = data.base_price {
        validate_money("base_price", base_price)?;
    }
    validate_money("additional_charges", data.additional_charges)?;
    validate_money("discount", data.discount)?;
    validate_money("advance_paid", data.advance_paid)?;
    Ok(())
}

fn validate_update(data: &BookingUpdate) -> AppResult<()> {
    if let Some(base_price) = data.base_price {
        validate_money("base_price", base_price)?;
    }
    if let Some(additional_charges) = data.additional_charges {
        validate_money("additional_charges", additional_charges)?;
    }
    if let Some(discount) = data.discount {
        validate_money("discount", discount)?;
    }
    if let Some(advance_paid) = data.advance_paid {
        validate_money("advance_paid", advance_paid)?;
    }
    validate_optional_text(&data.special_requests, "special_requests", MAX_NOTE_LEN)?;
    Ok(())
}

/// GET /crm/bookings/?search=&status=&date_from=&date_to=&page=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Page<BookingWithCustomer>>> {
    let status: Option<BookingStatus> = query.status()?;
    let page = db::bookings::list(
        &state.pool,
        query.search().as_deref(),
        status,
        query.date_from()?,
        query.date_to()?,
        query.page(),
    )
    .await?;
    Ok(Json(page))
}

/// POST /crm/bookings/add/
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<BookingWithCustomer>> {
    let customer_id = payload
        .customer_id
        .ok_or_else(|| AppError::validation("customer_id is required"))?;
    validate_create(&payload)?;
    let booking = db::bookings::create(&state.pool, customer_id, payload).await?;
    Ok(Json(booking))
}

/// POST /crm/bookings/add/{customer_id}/ — booking-from-customer flow;
/// the URL wins over any customer_id in the body.
pub async fn create_for_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<i64>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<BookingWithCustomer>> {
    validate_create(&payload)?;
    let booking = db::bookings::create(&state.pool, customer_id, payload).await?;
    Ok(Json(booking))
}

/// Booking detail: the record plus its tasks
#[derive(Serialize)]
pub struct BookingDetail {
    #[serde(flatten)]
    pub booking: BookingWithCustomer,
    pub tasks: Vec<Task>,
}

/// GET /crm/bookings/{id}/
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BookingDetail>> {
    let booking = db::bookings::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::new(ErrorCode::BookingNotFound))?;

    let tasks = db::tasks::find_by_booking(&state.pool, id).await?;

    Ok(Json(BookingDetail { booking, tasks }))
}

/// POST /crm/bookings/{id}/edit/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<BookingUpdate>,
) -> AppResult<Json<BookingWithCustomer>> {
    validate_update(&payload)?;
    let booking = db::bookings::update(&state.pool, id, payload).await?;
    Ok(Json(booking))
}
