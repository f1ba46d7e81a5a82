//! Data access layer
//!
//! Module-level async functions over `&PgPool`. Write paths call into
//! `crate::domain` for derived fields before touching the store; list
//! functions share the count → clamp → fetch pagination shape.

pub mod bookings;
pub mod customers;
pub mod inquiries;
pub mod interactions;
pub mod quotes;
pub mod reports;
pub mod site;
pub mod staff;
pub mod tasks;
