//! Pure derivation logic
//!
//! Derived fields (booking totals, quote numbers, task completion stamps) are
//! computed by free functions here and invoked from the db write paths, so
//! they stay testable without a database.

pub mod listing;
pub mod pricing;
pub mod quote_number;
pub mod tasks;
