//! Staff Model

use serde::{Deserialize, Serialize};

/// Staff account for the CRM
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Staff {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub display_name: String,
    pub is_admin: bool,
    pub created_at: i64,
}
