//! Customer API handlers

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    CustomerCreate, CustomerStatus, CustomerUpdate, CustomerWithStats, EventBooking, Interaction,
    InteractionCreate, LeadSource, Quote, Task,
};
use shared::page::Page;

use crate::auth::StaffIdentity;
use crate::db;
use crate::domain::listing::ListQuery;
use crate::state::AppState;
use crate::util::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_email,
    validate_optional_text, validate_phone, validate_required_text,
};

fn validate_create(data: &CustomerCreate) -> AppResult<()> {
    validate_required_text(&data.first_name, "first_name", MAX_NAME_LEN)?;
    validate_required_text(&data.last_name, "last_name", MAX_NAME_LEN)?;
    validate_email(&data.email)?;
    validate_phone(&data.phone)
        .map_err(|_| AppError::new(ErrorCode::CustomerInvalidPhone))?;
    validate_optional_text(&data.company, "company", MAX_NAME_LEN)?;
    validate_optional_text(&data.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&data.pincode, "pincode", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&data.notes, "notes", MAX_NOTE_LEN)?;
    Ok(())
}

/// GET /crm/customers/?search=&status=&source=&page=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Page<CustomerWithStats>>> {
    let status: Option<CustomerStatus> = query.status()?;
    let source: Option<LeadSource> = query.source()?;
    let page = db::customers::list(
        &state.pool,
        query.search().as_deref(),
        status,
        source,
        query.page(),
    )
    .await?;
    Ok(Json(page))
}

/// POST /crm/customers/add/
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CustomerCreate>,
) -> AppResult<Json<CustomerWithStats>> {
    validate_create(&payload)?;
    let customer = db::customers::create(&state.pool, payload).await?;
    Ok(Json(customer))
}

/// Customer detail: the record plus everything hanging off it
#[derive(Serialize)]
pub struct CustomerDetail {
    #[serde(flatten)]
    pub customer: CustomerWithStats,
    pub bookings: Vec<EventBooking>,
    pub interactions: Vec<Interaction>,
    pub tasks: Vec<Task>,
    pub quotes: Vec<Quote>,
}

/// GET /crm/customers/{id}/
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CustomerDetail>> {
    let customer = db::customers::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::new(ErrorCode::CustomerNotFound))?;

    let (bookings, interactions, tasks, quotes) = futures::try_join!(
        db::bookings::find_by_customer(&state.pool, id),
        db::interactions::find_by_customer(&state.pool, id),
        db::tasks::find_by_customer(&state.pool, id),
        db::quotes::find_by_customer(&state.pool, id),
    )?;

    Ok(Json(CustomerDetail {
        customer,
        bookings,
        interactions,
        tasks,
        quotes,
    }))
}

/// POST /crm/customers/{id}/edit/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CustomerUpdate>,
) -> AppResult<Json<CustomerWithStats>> {
    if let Some(email) = &payload.email {
        validate_email(email)?;
    }
    if let Some(phone) = &payload.phone {
        validate_phone(phone).map_err(|_| AppError::new(ErrorCode::CustomerInvalidPhone))?;
    }
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let customer = db::customers::update(&state.pool, id, payload).await?;
    Ok(Json(customer))
}

/// POST /crm/customers/{id}/interaction/
///
/// Logs the interaction and bumps the customer's `last_contacted`.
pub async fn add_interaction(
    State(state): State<AppState>,
    Extension(identity): Extension<StaffIdentity>,
    Path(id): Path<i64>,
    Json(payload): Json<InteractionCreate>,
) -> AppResult<Json<Interaction>> {
    validate_required_text(&payload.subject, "subject", MAX_NAME_LEN)?;
    validate_required_text(&payload.description, "description", MAX_NOTE_LEN)?;

    if !db::customers::exists(&state.pool, id).await.map_err(AppError::from)? {
        return Err(AppError::new(ErrorCode::CustomerNotFound));
    }

    let interaction = db::interactions::create(&state.pool, id, identity.id, payload).await?;
    db::customers::touch_last_contacted(&state.pool, id, interaction.created_at).await?;

    Ok(Json(interaction))
}
