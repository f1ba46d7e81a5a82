//! Booking and quote amount derivation
//!
//! `total_amount` and `balance_amount` are recomputed from the raw monetary
//! fields on every save and never accepted from input. Negative results are
//! accepted unchanged: a negative balance reads as refund owed.

use rust_decimal::{Decimal, RoundingStrategy};
use shared::error::{AppError, AppResult, ErrorCode};

/// Derived monetary fields for a booking or quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingAmounts {
    pub total_amount: Decimal,
    pub balance_amount: Decimal,
}

/// Compute `total_amount` and `balance_amount` from the raw fields.
///
/// total = base + additional − discount; balance = total − advance.
pub fn derive_amounts(
    base_price: Decimal,
    additional_charges: Decimal,
    discount: Decimal,
    advance_paid: Decimal,
) -> BookingAmounts {
    let total_amount = (base_price + additional_charges - discount)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let balance_amount = (total_amount - advance_paid)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    BookingAmounts {
        total_amount,
        balance_amount,
    }
}

/// Validate a monetary input field: non-negative, at most 2 fractional
/// digits, fits NUMERIC(10,2). Only inputs are checked; derived totals may
/// go negative.
pub fn validate_money(field: &str, value: Decimal) -> AppResult<()> {
    if value.is_sign_negative() {
        return Err(
            AppError::with_message(ErrorCode::BookingInvalidAmount, format!("{field} must not be negative"))
                .with_detail("field", field),
        );
    }
    if value.normalize().scale() > 2 {
        return Err(AppError::with_message(
            ErrorCode::BookingInvalidAmount,
            format!("{field} must have at most 2 decimal places"),
        )
        .with_detail("field", field));
    }
    // Largest value that fits a NUMERIC(10,2) column
    let max_amount = Decimal::new(9_999_999_999, 2);
    if value > max_amount {
        return Err(AppError::with_message(
            ErrorCode::BookingInvalidAmount,
            format!("{field} exceeds the maximum amount"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_amount_identities() {
        let amounts = derive_amounts(dec("6000"), dec("1500.50"), dec("500"), dec("2000"));
        assert_eq!(amounts.total_amount, dec("7000.50"));
        assert_eq!(amounts.balance_amount, dec("5000.50"));
    }

    #[test]
    fn test_zero_inputs() {
        let amounts = derive_amounts(dec("5000"), Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
        assert_eq!(amounts.total_amount, dec("5000"));
        assert_eq!(amounts.balance_amount, dec("5000"));
    }

    #[test]
    fn test_negative_results_accepted() {
        // Discount larger than the price, advance larger than the total:
        // both negative results pass through unclamped.
        let amounts = derive_amounts(dec("5000"), dec("0"), dec("6000"), dec("500"));
        assert_eq!(amounts.total_amount, dec("-1000"));
        assert_eq!(amounts.balance_amount, dec("-1500"));
    }

    #[test]
    fn test_midpoint_rounds_half_up() {
        // 2.005 must round to 2.01, not banker's 2.00.
        let amounts = derive_amounts(dec("2.005"), Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);
        assert_eq!(amounts.total_amount, dec("2.01"));
        assert_eq!(amounts.balance_amount, dec("2.01"));
    }

    #[test]
    fn test_validate_money_accepts_bounds() {
        assert!(validate_money("base_price", dec("0")).is_ok());
        assert!(validate_money("base_price", dec("99999999.99")).is_ok());
        assert!(validate_money("base_price", dec("7000.50")).is_ok());
    }

    #[test]
    fn test_validate_money_rejects_negative() {
        assert!(validate_money("discount", dec("-1")).is_err());
    }

    #[test]
    fn test_validate_money_rejects_three_decimals() {
        assert!(validate_money("advance_paid", dec("10.123")).is_err());
    }

    #[test]
    fn test_validate_money_rejects_oversize() {
        assert!(validate_money("base_price", dec("100000000")).is_err());
    }
}
