//! Quotation-Level Totals Calculator
//!
//! Assembles the full money breakdown for a quotation:
//! - Items subtotal (sum of priced line totals)
//! - Shipping charge from the selected option
//! - Manual discount (percentage or fixed amount)
//! - Coupon discount (stacks with the manual discount)
//! - Card acquirer fee on goods plus shipping
//!
//! Uses functions from coupon and gateway for the individual amounts.

use rust_decimal::Decimal;
use shared::models::{Coupon, DiscountSpec, ShippingOption};
use shared::quote::{Installments, PaymentMethod, PricedLineItem, QuoteTotals};

use super::coupon::discount_amount;
use super::gateway::gateway_fee;
use crate::money::{clamp_non_negative, round_money};

/// Quotation-level charges beside the items themselves
#[derive(Debug, Clone, Default)]
pub struct QuoteCharges {
    /// Selected shipping option; `None` means no shipping charge
    pub shipping: Option<ShippingOption>,
    /// Manual discount entered by the operator
    pub manual_discount: Option<DiscountSpec>,
    /// Redeemed coupon, if any
    pub coupon: Option<Coupon>,
    /// How the customer pays; drives the gateway fee
    pub payment_method: PaymentMethod,
    /// Credit installment count; ignored for other methods
    pub installments: Option<Installments>,
}

impl QuoteCharges {
    pub fn with_shipping(mut self, option: ShippingOption) -> Self {
        self.shipping = Some(option);
        self
    }

    pub fn with_manual_discount(mut self, discount: DiscountSpec) -> Self {
        self.manual_discount = Some(discount);
        self
    }

    pub fn with_coupon(mut self, coupon: Coupon) -> Self {
        self.coupon = Some(coupon);
        self
    }

    pub fn with_payment(mut self, method: PaymentMethod, installments: Option<Installments>) -> Self {
        self.payment_method = method;
        self.installments = installments;
        self
    }
}

/// Calculate the totals breakdown for a quotation
///
/// # Arguments
/// * `items` - Priced line items (already through the item calculator)
/// * `charges` - Shipping, discounts and payment selection
///
/// # Calculation Steps
/// 1. Sum line totals into the items subtotal
/// 2. Add the shipping charge
/// 3. Compute the manual discount against the items subtotal
/// 4. Compute the coupon discount, also against the items subtotal
/// 5. Compute the gateway fee on goods plus shipping
/// 6. Grand total, floored at zero
///
/// # Notes
/// - Both discounts are measured against the items subtotal, so a manual
///   percentage and a coupon percentage of the same order never compound
/// - The gateway fee ignores discounts: the acquirer charges on what moves
///   through the card, goods plus shipping
///
/// # Returns
/// `QuoteTotals` with every intermediate amount rounded to cents
pub fn compute_quote_totals(items: &[PricedLineItem], charges: &QuoteCharges) -> QuoteTotals {
    // Step 1: Items subtotal
    let items_subtotal = round_money(items.iter().map(|item| item.total).sum());

    // Step 2: Shipping charge
    let shipping = charges
        .shipping
        .as_ref()
        .map(|option| round_money(option.price))
        .unwrap_or(Decimal::ZERO);

    // Step 3: Manual discount (against the items subtotal)
    let manual_discount = charges
        .manual_discount
        .as_ref()
        .map(|d| discount_amount(d.kind, d.value, items_subtotal))
        .unwrap_or(Decimal::ZERO);

    // Step 4: Coupon discount (against the items subtotal)
    let coupon_discount = charges
        .coupon
        .as_ref()
        .map(|c| discount_amount(c.kind, c.value, items_subtotal))
        .unwrap_or(Decimal::ZERO);

    // Step 5: Gateway fee on goods plus shipping
    let fee = gateway_fee(
        items_subtotal + shipping,
        charges.payment_method,
        charges.installments,
    );

    // Step 6: Grand total, floored at zero
    let total = clamp_non_negative(
        items_subtotal + shipping - manual_discount - coupon_discount + fee,
    );

    QuoteTotals {
        items_subtotal,
        shipping,
        manual_discount,
        coupon_discount,
        gateway_fee: fee,
        total: round_money(total),
    }
}
