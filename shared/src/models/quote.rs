//! Quote Model

use super::booking::{EventType, Package};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quote lifecycle status: draft → sent → accepted/rejected/expired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "quote_status", rename_all = "snake_case")
)]
pub enum QuoteStatus {
    Draft,
    Sent,
    Accepted,
    Rejected,
    Expired,
}

impl Default for QuoteStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// Quote entity
///
/// `quote_number` has the form `QT<YYYYMMDD><3-digit ordinal>`, assigned once
/// at first save and never regenerated. `total_amount` is derived on every
/// save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Quote {
    pub id: i64,
    pub customer_id: i64,
    pub quote_number: String,
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub package: Package,
    pub base_price: Decimal,
    pub additional_services: Option<String>,
    pub additional_charges: Decimal,
    pub discount: Decimal,
    pub total_amount: Decimal,
    pub status: QuoteStatus,
    pub valid_until: NaiveDate,
    pub terms_conditions: String,
    pub notes: Option<String>,
    pub sent_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create quote payload
///
/// `base_price` defaults to the package tier price when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteCreate {
    pub customer_id: i64,
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub package: Package,
    pub base_price: Option<Decimal>,
    pub additional_services: Option<String>,
    #[serde(default)]
    pub additional_charges: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    pub valid_until: NaiveDate,
    pub terms_conditions: Option<String>,
    pub notes: Option<String>,
}

/// Status-only transition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteStatusUpdate {
    pub status: QuoteStatus,
}
