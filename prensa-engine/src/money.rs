//! Money discipline shared by every calculator
//!
//! All monetary math runs on `Decimal` end to end; values round to cents
//! (half away from zero) at the points each calculator documents. Boundary
//! validation lives here so the calculators themselves never fail on input
//! that passed it.

use rust_decimal::{Decimal, RoundingStrategy};
use shared::models::{DiscountKind, DiscountSpec, PricingMode};
use shared::quote::LineItemDraft;
use shared::{AppError, AppResult};

/// Monetary precision (cents)
pub const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum price accepted per line (R$ 1.000.000)
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Maximum piece count per line
pub const MAX_QUANTITY: u32 = 1_000_000;

/// Maximum piece dimension in cm (100 m)
pub const MAX_DIMENSION_CM: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Maximum shipping price (same ceiling as line prices)
pub const MAX_SHIPPING: Decimal = MAX_UNIT_PRICE;

/// Percent discounts never exceed the whole
pub const MAX_DISCOUNT_PERCENT: Decimal = Decimal::ONE_HUNDRED;

/// Item names are capped like receipt lines
pub const MAX_NAME_LEN: usize = 200;

/// Round to cents, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Monetary equality within one cent
#[inline]
pub fn money_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= MONEY_TOLERANCE
}

/// Clamp a computed amount at zero
#[inline]
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}

/// Validate a line item draft before pricing it into a quotation
pub fn validate_line_item(draft: &LineItemDraft) -> AppResult<()> {
    if draft.name.trim().is_empty() {
        return Err(AppError::validation("item name must not be empty").with_detail("field", "name"));
    }
    if draft.name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "item name exceeds {} characters",
            MAX_NAME_LEN
        ))
        .with_detail("field", "name"));
    }

    if draft.unit_price < Decimal::ZERO {
        return Err(AppError::out_of_range(format!(
            "unit price must be non-negative, got {}",
            draft.unit_price
        ))
        .with_detail("field", "unit_price"));
    }
    if draft.unit_price > MAX_UNIT_PRICE {
        return Err(AppError::out_of_range(format!(
            "unit price exceeds maximum allowed ({}), got {}",
            MAX_UNIT_PRICE, draft.unit_price
        ))
        .with_detail("field", "unit_price"));
    }

    if draft.quantity == 0 {
        return Err(AppError::out_of_range("quantity must be positive, got 0")
            .with_detail("field", "quantity"));
    }
    if draft.quantity > MAX_QUANTITY {
        return Err(AppError::out_of_range(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, draft.quantity
        ))
        .with_detail("field", "quantity"));
    }

    // Area pricing needs both dimensions; other modes ignore them
    if draft.mode == PricingMode::Area {
        for (field, dim) in [("width_cm", draft.width_cm), ("height_cm", draft.height_cm)] {
            let Some(value) = dim else {
                return Err(AppError::validation(format!(
                    "area-priced items require {}",
                    field
                ))
                .with_detail("field", field));
            };
            if value <= Decimal::ZERO {
                return Err(AppError::out_of_range(format!(
                    "{} must be positive, got {}",
                    field, value
                ))
                .with_detail("field", field));
            }
            if value > MAX_DIMENSION_CM {
                return Err(AppError::out_of_range(format!(
                    "{} exceeds maximum allowed ({}), got {}",
                    field, MAX_DIMENSION_CM, value
                ))
                .with_detail("field", field));
            }
        }
    }

    Ok(())
}

/// Validate quotation-level charges before computing totals
pub fn validate_quote_charges(shipping: Decimal, manual_discount: &DiscountSpec) -> AppResult<()> {
    if shipping < Decimal::ZERO {
        return Err(AppError::out_of_range(format!(
            "shipping must be non-negative, got {}",
            shipping
        ))
        .with_detail("field", "shipping"));
    }
    if shipping > MAX_SHIPPING {
        return Err(AppError::out_of_range(format!(
            "shipping exceeds maximum allowed ({}), got {}",
            MAX_SHIPPING, shipping
        ))
        .with_detail("field", "shipping"));
    }

    if manual_discount.value < Decimal::ZERO {
        return Err(AppError::out_of_range(format!(
            "discount must be non-negative, got {}",
            manual_discount.value
        ))
        .with_detail("field", "discount"));
    }
    if manual_discount.kind == DiscountKind::Percent
        && manual_discount.value > MAX_DISCOUNT_PERCENT
    {
        return Err(AppError::out_of_range(format!(
            "percent discount must be between 0 and {}, got {}",
            MAX_DISCOUNT_PERCENT, manual_discount.value
        ))
        .with_detail("field", "discount"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    fn area_draft(w: i64, h: i64) -> LineItemDraft {
        LineItemDraft::ad_hoc("Lona", PricingMode::Area, Decimal::from(50), 1)
            .dimensioned(Decimal::from(w), Decimal::from(h))
    }

    #[test]
    fn test_round_money_half_away_from_zero() {
        assert_eq!(round_money(Decimal::new(10125, 3)), Decimal::new(1013, 2)); // 10.125 -> 10.13
        assert_eq!(round_money(Decimal::new(-10125, 3)), Decimal::new(-1013, 2)); // -10.125 -> -10.13
        assert_eq!(round_money(Decimal::new(10124, 3)), Decimal::new(1012, 2)); // 10.124 -> 10.12
    }

    #[test]
    fn test_money_eq_tolerance() {
        let a = Decimal::new(1000, 2); // 10.00
        let b = Decimal::new(1001, 2); // 10.01
        let c = Decimal::new(1002, 2); // 10.02
        assert!(money_eq(a, b));
        assert!(!money_eq(a, c));
    }

    #[test]
    fn test_validate_line_item_accepts_sane_input() {
        let draft = LineItemDraft::ad_hoc("Caneca", PricingMode::Unit, Decimal::from(25), 10);
        assert!(validate_line_item(&draft).is_ok());
        assert!(validate_line_item(&area_draft(50, 20)).is_ok());
    }

    #[test]
    fn test_validate_line_item_rejects_empty_name() {
        let draft = LineItemDraft::ad_hoc("  ", PricingMode::Unit, Decimal::from(25), 1);
        let err = validate_line_item(&draft).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_validate_line_item_rejects_negative_price() {
        let draft = LineItemDraft::ad_hoc("Caneca", PricingMode::Unit, Decimal::from(-1), 1);
        let err = validate_line_item(&draft).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_validate_line_item_rejects_zero_quantity() {
        let draft = LineItemDraft::ad_hoc("Caneca", PricingMode::Unit, Decimal::from(25), 0);
        assert!(validate_line_item(&draft).is_err());
    }

    #[test]
    fn test_validate_line_item_requires_area_dimensions() {
        let missing = LineItemDraft::ad_hoc("Lona", PricingMode::Area, Decimal::from(50), 1);
        assert!(validate_line_item(&missing).is_err());

        let zero = area_draft(0, 20);
        assert!(validate_line_item(&zero).is_err());
    }

    #[test]
    fn test_validate_quote_charges() {
        assert!(validate_quote_charges(Decimal::from(15), &DiscountSpec::default()).is_ok());
        assert!(validate_quote_charges(Decimal::from(-1), &DiscountSpec::default()).is_err());
        assert!(
            validate_quote_charges(Decimal::ZERO, &DiscountSpec::percent(Decimal::from(101)))
                .is_err()
        );
        assert!(
            validate_quote_charges(Decimal::ZERO, &DiscountSpec::fixed(Decimal::from(5000)))
                .is_ok()
        );
    }
}
