//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer pipeline status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "customer_status", rename_all = "snake_case")
)]
pub enum CustomerStatus {
    New,
    Contacted,
    Qualified,
    Proposal,
    Negotiation,
    Won,
    Lost,
    Existing,
}

impl Default for CustomerStatus {
    fn default() -> Self {
        Self::New
    }
}

/// Where the lead came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "lead_source", rename_all = "snake_case")
)]
pub enum LeadSource {
    Website,
    Referral,
    SocialMedia,
    Phone,
    Email,
    WalkIn,
    Advertisement,
    Other,
}

impl Default for LeadSource {
    fn default() -> Self {
        Self::Website
    }
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    #[serde(default)]
    pub status: CustomerStatus,
    #[serde(default)]
    pub lead_source: LeadSource,
    pub notes: Option<String>,
}

/// Update customer payload (absent fields keep their current value)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub status: Option<CustomerStatus>,
    pub lead_source: Option<LeadSource>,
    pub assigned_to: Option<i64>,
    pub notes: Option<String>,
}

/// Customer with read-time derivations (list/detail views)
///
/// `total_revenue` sums only bookings with status `confirmed`; completed and
/// cancelled bookings are excluded even if money changed hands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CustomerWithStats {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub status: CustomerStatus,
    pub lead_source: LeadSource,
    pub assigned_to: Option<i64>,
    pub notes: Option<String>,
    pub last_contacted: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
    pub total_bookings: i64,
    pub total_revenue: rust_decimal::Decimal,
}
