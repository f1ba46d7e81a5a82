//! Event Booking Model

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Booking lifecycle status
///
/// inquiry → quoted → confirmed → completed, or → cancelled at any point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "booking_status", rename_all = "snake_case")
)]
pub enum BookingStatus {
    Inquiry,
    Quoted,
    Confirmed,
    Completed,
    Cancelled,
}

impl Default for BookingStatus {
    fn default() -> Self {
        Self::Inquiry
    }
}

/// Payment progress for a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "payment_status", rename_all = "snake_case")
)]
pub enum PaymentStatus {
    Pending,
    Partial,
    Completed,
}

impl Default for PaymentStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Kind of kids event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "event_type", rename_all = "snake_case")
)]
pub enum EventType {
    Birthday,
    School,
    Corporate,
    Festival,
    Other,
}

/// Fixed-price service tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "package", rename_all = "snake_case"))]
pub enum Package {
    Silver,
    Gold,
    Diamond,
}

impl Package {
    /// Fixed base price for the tier
    pub fn base_price(&self) -> Decimal {
        match self {
            Self::Silver => Decimal::new(5000, 0),
            Self::Gold => Decimal::new(6000, 0),
            Self::Diamond => Decimal::new(7000, 0),
        }
    }
}

/// Event booking entity
///
/// `total_amount` and `balance_amount` are derived on every save and never
/// accepted from input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EventBooking {
    pub id: i64,
    pub customer_id: i64,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub event_type: EventType,
    pub package: Package,
    pub venue_address: String,
    pub number_of_children: i32,
    pub child_age_group: String,
    pub special_requests: Option<String>,
    pub base_price: Decimal,
    pub additional_charges: Decimal,
    pub discount: Decimal,
    pub total_amount: Decimal,
    pub advance_paid: Decimal,
    pub balance_amount: Decimal,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub assigned_performer: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create booking payload
///
/// `base_price` defaults to the package tier price when absent. `customer_id`
/// may come from the URL instead of the body (booking-from-customer flow).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub customer_id: Option<i64>,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub event_type: EventType,
    pub package: Package,
    pub venue_address: String,
    pub number_of_children: Option<i32>,
    pub child_age_group: Option<String>,
    pub special_requests: Option<String>,
    pub base_price: Option<Decimal>,
    #[serde(default)]
    pub additional_charges: Decimal,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub advance_paid: Decimal,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub assigned_performer: Option<i64>,
}

/// Update booking payload (absent fields keep their current value)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingUpdate {
    pub event_date: Option<NaiveDate>,
    pub event_time: Option<NaiveTime>,
    pub event_type: Option<EventType>,
    pub package: Option<Package>,
    pub venue_address: Option<String>,
    pub number_of_children: Option<i32>,
    pub child_age_group: Option<String>,
    pub special_requests: Option<String>,
    pub base_price: Option<Decimal>,
    pub additional_charges: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub advance_paid: Option<Decimal>,
    pub status: Option<BookingStatus>,
    pub payment_status: Option<PaymentStatus>,
    pub assigned_performer: Option<i64>,
}

/// Booking with customer info (for list/detail views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BookingWithCustomer {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub event_type: EventType,
    pub package: Package,
    pub venue_address: String,
    pub number_of_children: i32,
    pub child_age_group: String,
    pub special_requests: Option<String>,
    pub base_price: Decimal,
    pub additional_charges: Decimal,
    pub discount: Decimal,
    pub total_amount: Decimal,
    pub advance_paid: Decimal,
    pub balance_amount: Decimal,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub assigned_performer: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_base_prices() {
        assert_eq!(Package::Silver.base_price(), Decimal::new(5000, 0));
        assert_eq!(Package::Gold.base_price(), Decimal::new(6000, 0));
        assert_eq!(Package::Diamond.base_price(), Decimal::new(7000, 0));
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&BookingStatus::Inquiry).unwrap();
        assert_eq!(json, "\"inquiry\"");
    }
}
