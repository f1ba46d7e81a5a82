//! Task queries
//!
//! Non-admin staff only ever see tasks assigned to them; the restriction is
//! applied here with `restrict_to` so no filter parameter can bypass it.

use sqlx::{PgPool, Postgres, QueryBuilder};

use shared::error::{AppError, ErrorCode};
use shared::models::{Task, TaskCreate, TaskPriority, TaskStatus, TaskUpdate};
use shared::page::{PAGE_SIZE, Page, clamp_page};
use shared::util::{now_millis, snowflake_id};

use crate::domain::tasks::completion_stamp;
use crate::error::{ServiceError, ServiceResult};

fn push_filters(
    builder: &mut QueryBuilder<'_, Postgres>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    restrict_to: Option<i64>,
) {
    if let Some(status) = status {
        builder.push(" AND status = ").push_bind(status);
    }
    if let Some(priority) = priority {
        builder.push(" AND priority = ").push_bind(priority);
    }
    if let Some(staff_id) = restrict_to {
        builder.push(" AND assigned_to = ").push_bind(staff_id);
    }
}

/// Filtered, paginated task list, due date ascending. `restrict_to` is set
/// for non-admin requesters and always wins over other parameters.
pub async fn list(
    pool: &PgPool,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    restrict_to: Option<i64>,
    page: u32,
) -> ServiceResult<Page<Task>> {
    let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM task WHERE 1=1");
    push_filters(&mut count_query, status, priority, restrict_to);
    let total: i64 = count_query.build_query_scalar().fetch_one(pool).await?;

    let page = clamp_page(page, total as u64, PAGE_SIZE);
    let offset = (page - 1) * PAGE_SIZE;

    let mut query = QueryBuilder::new("SELECT * FROM task WHERE 1=1");
    push_filters(&mut query, status, priority, restrict_to);
    query
        .push(" ORDER BY due_date ASC LIMIT ")
        .push_bind(PAGE_SIZE as i64)
        .push(" OFFSET ")
        .push_bind(offset as i64);
    let rows: Vec<Task> = query.build_query_as().fetch_all(pool).await?;

    Ok(Page::new(rows, total as u64, page, PAGE_SIZE))
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> ServiceResult<Option<Task>> {
    let row = sqlx::query_as("SELECT * FROM task WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_customer(pool: &PgPool, customer_id: i64) -> ServiceResult<Vec<Task>> {
    let rows = sqlx::query_as("SELECT * FROM task WHERE customer_id = $1 ORDER BY due_date ASC")
        .bind(customer_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Tasks attached to a booking, latest due first (booking detail view).
pub async fn find_by_booking(pool: &PgPool, booking_id: i64) -> ServiceResult<Vec<Task>> {
    let rows = sqlx::query_as("SELECT * FROM task WHERE booking_id = $1 ORDER BY due_date DESC")
        .bind(booking_id)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Open tasks for a staff member, soonest due first (dashboard).
pub async fn open_for_staff(pool: &PgPool, staff_id: i64, limit: i64) -> ServiceResult<Vec<Task>> {
    let rows = sqlx::query_as(
        "SELECT * FROM task WHERE assigned_to = $1 AND status IN ('pending', 'in_progress') \
         ORDER BY due_date ASC LIMIT $2",
    )
    .bind(staff_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(pool: &PgPool, created_by: i64, data: TaskCreate) -> ServiceResult<Task> {
    let id = snowflake_id();
    let now = now_millis();
    // A task may be created directly in `completed`; the latch applies then too.
    let completed_at = completion_stamp(data.status, None, now);

    sqlx::query(
        "INSERT INTO task (id, title, description, customer_id, booking_id, assigned_to, \
         created_by, status, priority, due_date, completed_at, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $12)",
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.customer_id)
    .bind(data.booking_id)
    .bind(data.assigned_to)
    .bind(created_by)
    .bind(data.status)
    .bind(data.priority)
    .bind(data.due_date)
    .bind(completed_at)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| ServiceError::Db("Task vanished after insert".into()))
}

pub async fn update(pool: &PgPool, id: i64, data: TaskUpdate) -> ServiceResult<Task> {
    let Some(existing) = find_by_id(pool, id).await? else {
        return Err(AppError::new(ErrorCode::TaskNotFound).into());
    };

    let now = now_millis();
    let status = data.status.unwrap_or(existing.status);
    let completed_at = completion_stamp(status, existing.completed_at, now);

    sqlx::query(
        "UPDATE task SET title = COALESCE($1, title), description = COALESCE($2, description), \
         assigned_to = COALESCE($3, assigned_to), status = $4, \
         priority = COALESCE($5, priority), due_date = COALESCE($6, due_date), \
         completed_at = $7, updated_at = $8 WHERE id = $9",
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(data.assigned_to)
    .bind(status)
    .bind(data.priority)
    .bind(data.due_date)
    .bind(completed_at)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TaskNotFound).into())
}

/// Status-only transition; applies the completion latch.
pub async fn update_status(pool: &PgPool, id: i64, status: TaskStatus) -> ServiceResult<Task> {
    let Some(existing) = find_by_id(pool, id).await? else {
        return Err(AppError::new(ErrorCode::TaskNotFound).into());
    };

    let now = now_millis();
    let completed_at = completion_stamp(status, existing.completed_at, now);

    sqlx::query("UPDATE task SET status = $1, completed_at = $2, updated_at = $3 WHERE id = $4")
        .bind(status)
        .bind(completed_at)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TaskNotFound).into())
}

// This test runs against a live Postgres instance; `#[sqlx::test]` gives it
// its own database with ./migrations applied.
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;
    use shared::models::{BookingCreate, CustomerCreate, EventType, Package};

    async fn seed_staff(pool: &PgPool) -> i64 {
        super::super::staff::ensure_admin(pool, "admin", "not-a-real-hash")
            .await
            .unwrap();
        super::super::staff::find_by_username(pool, "admin")
            .await
            .unwrap()
            .unwrap()
            .id
    }

    async fn seed_booking(pool: &PgPool) -> i64 {
        let customer = super::super::customers::create(
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

        let booking = super::super::bookings::create(
            pool,
            customer.id,
            BookingCreate {
                customer_id: None,
                event_date: NaiveDate::from_ymd_opt(2026, 10, 4).unwrap(),
                event_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
                event_type: EventType::Birthday,
                package: Package::Gold,
                venue_address: "12 Park Lane".to_string(),
                number_of_children: None,
                child_age_group: None,
                special_requests: None,
                base_price: None,
                additional_charges: Decimal::ZERO,
                discount: Decimal::ZERO,
                advance_paid: Decimal::ZERO,
                status: Default::default(),
                payment_status: Default::default(),
                assigned_performer: None,
            },
        )
        .await
        .unwrap();
        booking.id
    }

    fn new_task(title: &str, booking_id: i64, assigned_to: i64, due_date: i64) -> TaskCreate {
        TaskCreate {
            title: title.to_string(),
            description: None,
            customer_id: None,
            booking_id: Some(booking_id),
            assigned_to,
            status: Default::default(),
            priority: Default::default(),
            due_date,
        }
    }

    #[sqlx::test]
    async fn test_booking_tasks_latest_due_first(pool: PgPool) {
        let staff_id = seed_staff(&pool).await;
        let booking_id = seed_booking(&pool).await;

        let earlier = create(&pool, staff_id, new_task("Call venue", booking_id, staff_id, 1_000))
            .await
            .unwrap();
        let later = create(&pool, staff_id, new_task("Confirm count", booking_id, staff_id, 2_000))
            .await
            .unwrap();

        let tasks = find_by_booking(&pool, booking_id).await.unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, later.id);
        assert_eq!(tasks[1].id, earlier.id);
    }
}
