//! Quotation record and status flow

use crate::models::{Customer, DiscountSpec, ShippingOption};
use crate::quote::totals::QuoteTotals;
use crate::quote::{Installments, PaymentMethod, PaymentOption, PricedLineItem};
use crate::types::Timestamp;
use crate::util::{new_doc_id, now_millis, reference_code};
use serde::{Deserialize, Serialize};

/// Customer name used for counter sales with nobody identified
pub const WALK_IN_CUSTOMER: &str = "Consumidor Balcão";

/// Lifecycle status
///
/// The back office moves records freely between statuses; there is no
/// transition matrix. `Pending` records are quotes, everything after is an
/// order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuotationStatus {
    #[default]
    Pending,
    AwaitingPayment,
    Production,
    Shipping,
    Delivered,
    Cancelled,
}

impl QuotationStatus {
    /// Still needs attention from the workshop
    pub fn is_open(self) -> bool {
        !self.is_final()
    }

    pub fn is_final(self) -> bool {
        matches!(self, QuotationStatus::Delivered | QuotationStatus::Cancelled)
    }

    /// Reference prefix for records created in this status:
    /// quotes get `ORC`, anything already confirmed gets `PED`
    fn reference_prefix(self) -> &'static str {
        match self {
            QuotationStatus::Pending => "ORC",
            _ => "PED",
        }
    }
}

/// Quotation record
///
/// One type covers the whole lifecycle: quote, confirmed order and counter
/// sale. The `totals` breakdown is calculator output and is stored verbatim
/// so documents and messages never re-derive money figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quotation {
    /// Document id (opaque)
    pub id: String,
    /// Human-facing code: `ORC-`/`PED-`/`PDV-` plus four digits
    pub reference: String,
    pub customer_name: String,
    pub customer_contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub items: Vec<PricedLineItem>,
    /// Manual discount as entered on the form
    #[serde(default)]
    pub manual_discount: DiscountSpec,
    /// Redeemed coupon code, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    /// Selected shipping option snapshot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingOption>,
    pub totals: QuoteTotals,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub payment_option: PaymentOption,
    /// Present only for credit payments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installments: Option<Installments>,
    pub status: QuotationStatus,
    pub created_at: Timestamp,
    /// Free-text note printed on the quote document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_message: Option<String>,
}

impl Quotation {
    /// Create a record in the given status with a fresh reference code
    ///
    /// Remaining fields (discount, coupon, shipping, payment) start at their
    /// defaults and are filled in by the caller before saving.
    pub fn new(
        status: QuotationStatus,
        customer_name: impl Into<String>,
        customer_contact: impl Into<String>,
        items: Vec<PricedLineItem>,
        totals: QuoteTotals,
    ) -> Self {
        Self {
            id: new_doc_id(),
            reference: reference_code(status.reference_prefix()),
            customer_name: customer_name.into(),
            customer_contact: customer_contact.into(),
            customer_id: None,
            items,
            manual_discount: DiscountSpec::default(),
            coupon_code: None,
            shipping: None,
            totals,
            payment_method: PaymentMethod::default(),
            payment_option: PaymentOption::default(),
            installments: None,
            status,
            created_at: now_millis(),
            custom_message: None,
        }
    }

    /// Counter sale: settled and delivered on the spot
    ///
    /// Gets a `PDV` reference and falls back to the walk-in customer when
    /// nobody is identified.
    pub fn counter_sale(
        items: Vec<PricedLineItem>,
        totals: QuoteTotals,
        payment_method: PaymentMethod,
        customer: Option<&Customer>,
    ) -> Self {
        let mut sale = Self::new(
            QuotationStatus::Delivered,
            customer.map_or(WALK_IN_CUSTOMER, |c| c.name.as_str()),
            customer.map_or("-", |c| c.phone.as_str()),
            items,
            totals,
        );
        sale.reference = reference_code("PDV");
        sale.customer_id = customer.map(|c| c.id.clone());
        sale.payment_method = payment_method;
        sale
    }

    /// Move the record to another status
    pub fn with_status(mut self, status: QuotationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    pub fn is_final(&self) -> bool {
        self.status.is_final()
    }
}
