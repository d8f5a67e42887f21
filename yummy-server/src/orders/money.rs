//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic is done on `Decimal` internally, then converted
//! to `f64` for storage/serialization. Rounding to the currency's minor
//! unit happens once per computed amount, never per intermediate step.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::OrderLine;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed unit price
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per order line
pub const MAX_QUANTITY: i32 = 9999;

/// Convert f64 to Decimal for calculation
///
/// Input values should be validated finite at the boundary. If
/// NaN/Infinity somehow reaches here, logs an error and returns ZERO to
/// avoid silent data corruption in financial calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: Decimal rounded to 2dp with inputs bounded by MAX_PRICE and
        // MAX_QUANTITY is always within f64 representable range
        .expect("Decimal rounded to 2dp is always representable as f64")
}

/// Validate a unit price at the catalog write boundary
pub fn validate_price(price: f64, field: &str) -> AppResult<()> {
    if !price.is_finite() {
        return Err(AppError::validation(format!(
            "{field} must be a finite number, got {price}"
        )));
    }
    if price < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::MenuItemInvalidPrice,
            format!("{field} must be non-negative, got {price}"),
        ));
    }
    if price > MAX_PRICE {
        return Err(AppError::validation(format!(
            "{field} exceeds maximum allowed ({MAX_PRICE}), got {price}"
        )));
    }
    Ok(())
}

/// Validate an order line quantity
pub fn validate_quantity(quantity: i32, menu_item_id: i64) -> AppResult<()> {
    if quantity < 1 {
        return Err(AppError::with_message(
            ErrorCode::OrderInvalidQuantity,
            format!("quantity must be at least 1, got {quantity}"),
        )
        .with_detail("menu_item_id", menu_item_id));
    }
    if quantity > MAX_QUANTITY {
        return Err(AppError::with_message(
            ErrorCode::OrderInvalidQuantity,
            format!("quantity exceeds maximum allowed ({MAX_QUANTITY}), got {quantity}"),
        )
        .with_detail("menu_item_id", menu_item_id));
    }
    Ok(())
}

/// Sum of line price x quantity over all lines, unrounded
pub fn lines_total(lines: &[OrderLine]) -> Decimal {
    lines
        .iter()
        .map(|l| to_decimal(l.price) * Decimal::from(l.quantity))
        .sum()
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    let diff = (to_decimal(a) - to_decimal(b)).abs();
    diff < MONEY_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        // Classic floating point problem: 0.1 + 0.2 != 0.3
        let a = 0.1_f64;
        let b = 0.2_f64;
        let sum_f64 = a + b;

        // f64 fails
        assert_ne!(sum_f64, 0.3);

        // Decimal succeeds
        let sum_dec = to_decimal(a) + to_decimal(b);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_accumulation_precision() {
        // Sum 0.01 one thousand times
        let mut total = Decimal::ZERO;
        for _ in 0..1000 {
            total += to_decimal(0.01);
        }
        assert_eq!(to_f64(total), 10.0);
    }

    #[test]
    fn test_lines_total() {
        let lines = vec![
            OrderLine {
                menu_item_id: 1,
                name: "Paella".to_string(),
                quantity: 2,
                price: 12.99,
            },
            OrderLine {
                menu_item_id: 2,
                name: "Cola".to_string(),
                quantity: 3,
                price: 2.5,
            },
        ];
        assert_eq!(to_f64(lines_total(&lines)), 33.48); // 25.98 + 7.50
    }

    #[test]
    fn test_rounding_happens_at_the_end() {
        // Three lines of 0.333 each: per-line rounding would give 0.99,
        // end rounding gives 1.00
        let lines: Vec<OrderLine> = (0..3)
            .map(|i| OrderLine {
                menu_item_id: i,
                name: format!("item-{i}"),
                quantity: 1,
                price: 0.333,
            })
            .collect();
        assert_eq!(to_f64(lines_total(&lines)), 1.0);
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0, "price").is_ok());
        assert!(validate_price(12.99, "price").is_ok());

        let err = validate_price(-1.0, "price").unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);

        assert!(validate_price(f64::NAN, "price").is_err());
        assert!(validate_price(f64::INFINITY, "price").is_err());
        assert!(validate_price(MAX_PRICE + 1.0, "price").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1, 1).is_ok());
        assert!(validate_quantity(MAX_QUANTITY, 1).is_ok());

        let err = validate_quantity(0, 7).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderInvalidQuantity);
        assert_eq!(err.details.unwrap().get("menu_item_id").unwrap(), 7);

        assert!(validate_quantity(-3, 1).is_err());
        assert!(validate_quantity(MAX_QUANTITY + 1, 1).is_err());
    }

    #[test]
    fn test_money_eq() {
        assert!(money_eq(100.0, 100.0));
        assert!(money_eq(100.004, 100.006));
        assert!(!money_eq(100.0, 100.02));
    }

    #[test]
    fn test_rounding_half_up() {
        // 0.005 should round up to 0.01
        let value = Decimal::new(5, 3); // 0.005
        assert_eq!(to_f64(value), 0.01);
    }
}
