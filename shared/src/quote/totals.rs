//! Computed quotation totals

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Money breakdown computed by the totals calculator
///
/// Every figure is already rounded to cents. The gateway fee is a visible
/// line added on top of the payable amount, never folded into the subtotal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct QuoteTotals {
    /// Sum of the line item totals
    pub items_subtotal: Decimal,
    /// Selected shipping price (zero for counter pickup)
    pub shipping: Decimal,
    /// Manual discount amount, computed against `items_subtotal`
    pub manual_discount: Decimal,
    /// Coupon discount amount, computed against `items_subtotal`
    pub coupon_discount: Decimal,
    /// Card machine fee on `items_subtotal + shipping`
    pub gateway_fee: Decimal,
    /// Final payable amount, floored at zero
    pub total: Decimal,
}

impl QuoteTotals {
    /// Combined manual + coupon discount
    pub fn discount_total(&self) -> Decimal {
        self.manual_discount + self.coupon_discount
    }
}
