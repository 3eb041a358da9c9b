//! Coupon Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Discount kind, shared by coupons and manual quotation discounts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountKind {
    /// Flat amount off the items subtotal
    #[default]
    Fixed,
    /// Percentage of the items subtotal
    Percent,
}

/// A manual discount as entered on the quotation form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct DiscountSpec {
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    pub value: Decimal,
}

impl DiscountSpec {
    pub fn fixed(value: Decimal) -> Self {
        Self {
            kind: DiscountKind::Fixed,
            value,
        }
    }

    pub fn percent(value: Decimal) -> Self {
        Self {
            kind: DiscountKind::Percent,
            value,
        }
    }
}

/// Discount coupon entity
///
/// Codes are stored upper-cased; matching is case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    pub id: String,
    pub code: String,
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    pub value: Decimal,
    pub active: bool,
}

impl Coupon {
    /// Create an active coupon, normalizing the code to upper case
    pub fn new(id: impl Into<String>, code: &str, kind: DiscountKind, value: Decimal) -> Self {
        Self {
            id: id.into(),
            code: code.trim().to_uppercase(),
            kind,
            value,
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_coupon_code_is_uppercased() {
        let c = Coupon::new("c1", "promo10 ", DiscountKind::Percent, Decimal::from(10));
        assert_eq!(c.code, "PROMO10");
        assert!(c.active);
    }

    #[test]
    fn test_discount_kind_serde_casing() {
        let json = serde_json::to_string(&DiscountKind::Percent).unwrap();
        assert_eq!(json, "\"PERCENT\"");
        let json = serde_json::to_string(&DiscountKind::Fixed).unwrap();
        assert_eq!(json, "\"FIXED\"");
    }

    #[test]
    fn test_coupon_serializes_kind_as_type() {
        let c = Coupon::new("c1", "FRETE", DiscountKind::Fixed, Decimal::from(5));
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"type\":\"FIXED\""));
    }
}
