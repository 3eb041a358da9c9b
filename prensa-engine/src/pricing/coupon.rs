//! Coupon redemption
//!
//! Codes are stored uppercase; user input is normalized before matching so
//! `natal10`, ` NATAL10 ` and `NATAL10` all redeem the same coupon. An
//! inactive match is reported distinctly from an unknown code so the
//! operator can tell a typo from an expired campaign.

use rust_decimal::Decimal;
use shared::models::{Coupon, DiscountKind};
use shared::{AppError, ErrorCode};

use crate::money::round_money;

/// Why a code did not redeem
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CouponRejection {
    #[error("coupon code is empty")]
    EmptyCode,
    #[error("coupon code not found: {0}")]
    UnknownCode(String),
    #[error("coupon is inactive: {0}")]
    Inactive(String),
}

impl From<CouponRejection> for AppError {
    fn from(rejection: CouponRejection) -> Self {
        let code = match &rejection {
            CouponRejection::EmptyCode => ErrorCode::RequiredField,
            CouponRejection::UnknownCode(_) => ErrorCode::CouponNotFound,
            CouponRejection::Inactive(_) => ErrorCode::CouponInactive,
        };
        AppError::with_message(code, rejection.to_string())
    }
}

/// Redeem a code against the registered coupons
pub fn redeem(input: &str, coupons: &[Coupon]) -> Result<Coupon, CouponRejection> {
    let normalized = input.trim().to_uppercase();
    if normalized.is_empty() {
        return Err(CouponRejection::EmptyCode);
    }

    let Some(coupon) = coupons.iter().find(|c| c.code == normalized) else {
        return Err(CouponRejection::UnknownCode(normalized));
    };
    if !coupon.active {
        return Err(CouponRejection::Inactive(normalized));
    }

    Ok(coupon.clone())
}

/// Discount amount against a base, rounded to cents
///
/// Percent discounts take their share of the base; fixed discounts are the
/// stated value regardless of base. Neither is capped here, the totals
/// calculator floors the grand total instead.
pub fn discount_amount(kind: DiscountKind, value: Decimal, base: Decimal) -> Decimal {
    match kind {
        DiscountKind::Fixed => round_money(value),
        DiscountKind::Percent => round_money(base * value / Decimal::ONE_HUNDRED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(code: &str, kind: DiscountKind, value: i64, active: bool) -> Coupon {
        let mut c = Coupon::new(format!("c-{}", code), code, kind, Decimal::from(value));
        c.active = active;
        c
    }

    fn campaign() -> Vec<Coupon> {
        vec![
            coupon("NATAL10", DiscountKind::Percent, 10, true),
            coupon("BEMVINDO", DiscountKind::Fixed, 5, true),
            coupon("ANTIGO", DiscountKind::Fixed, 20, false),
        ]
    }

    #[test]
    fn test_redeem_normalizes_input() {
        let coupons = campaign();
        let coupon = redeem("  natal10 ", &coupons).unwrap();
        assert_eq!(coupon.code, "NATAL10");
        assert_eq!(coupon.kind, DiscountKind::Percent);
    }

    #[test]
    fn test_redeem_empty_code() {
        let coupons = campaign();
        assert_eq!(redeem("   ", &coupons), Err(CouponRejection::EmptyCode));
    }

    #[test]
    fn test_redeem_unknown_code() {
        let coupons = campaign();
        assert_eq!(
            redeem("VERAO", &coupons),
            Err(CouponRejection::UnknownCode("VERAO".into()))
        );
    }

    #[test]
    fn test_redeem_inactive_code_is_not_unknown() {
        let coupons = campaign();
        assert_eq!(
            redeem("antigo", &coupons),
            Err(CouponRejection::Inactive("ANTIGO".into()))
        );
    }

    #[test]
    fn test_rejection_maps_to_error_codes() {
        let err: AppError = CouponRejection::UnknownCode("X".into()).into();
        assert_eq!(err.code, ErrorCode::CouponNotFound);

        let err: AppError = CouponRejection::Inactive("X".into()).into();
        assert_eq!(err.code, ErrorCode::CouponInactive);
    }

    #[test]
    fn test_discount_amount() {
        // 10% of 150.00 = 15.00
        assert_eq!(
            discount_amount(DiscountKind::Percent, Decimal::from(10), Decimal::from(150)),
            Decimal::from(15)
        );
        // Fixed ignores the base
        assert_eq!(
            discount_amount(DiscountKind::Fixed, Decimal::from(5), Decimal::from(150)),
            Decimal::from(5)
        );
        // 33% of 10.00 = 3.30
        assert_eq!(
            discount_amount(DiscountKind::Percent, Decimal::from(33), Decimal::from(10)),
            Decimal::new(330, 2)
        );
    }
}
