//! Interaction Model
//!
//! Append-only log of contact with a customer. Never updated after creation.

use serde::{Deserialize, Serialize};

/// How the contact happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "interaction_type", rename_all = "snake_case")
)]
pub enum InteractionType {
    Call,
    Email,
    Meeting,
    Whatsapp,
    Sms,
    Note,
}

/// Interaction entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Interaction {
    pub id: i64,
    pub customer_id: i64,
    pub interaction_type: InteractionType,
    pub subject: String,
    pub description: String,
    pub created_by: i64,
    pub follow_up_date: Option<i64>,
    pub created_at: i64,
}

/// Create interaction payload (`created_by` comes from the authenticated staff)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionCreate {
    pub interaction_type: InteractionType,
    pub subject: String,
    pub description: String,
    pub follow_up_date: Option<i64>,
}
