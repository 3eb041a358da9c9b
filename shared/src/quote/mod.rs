//! Quotation Domain Module
//!
//! Types for the quotation lifecycle:
//! - Line items: drafts priced into immutable snapshots
//! - Payment: method, option and installment selection
//! - Totals: the computed money breakdown
//! - Quotation: the stored record and its status flow

pub mod item;
pub mod payment;
pub mod quotation;
pub mod totals;

// Re-exports
pub use item::{LineItemDraft, PricedLineItem};
pub use payment::{Installments, PaymentMethod, PaymentOption};
pub use quotation::{Quotation, QuotationStatus, WALK_IN_CUSTOMER};
pub use totals::QuoteTotals;
