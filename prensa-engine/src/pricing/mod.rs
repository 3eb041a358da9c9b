//! Pricing pipeline
//!
//! Stateless calculators that turn drafts and charges into money:
//!
//! - [`item_calculator`] prices a single line through its pricing mode
//! - [`gateway`] resolves card acquirer fees by method and installments
//! - [`coupon`] redeems promotional codes against the registered list
//! - [`quote_calculator`] assembles the full totals breakdown
//!
//! Every function here is pure: same input, same output, no settings or
//! clock reads. Callers validate input through [`crate::money`] first.

pub mod coupon;
pub mod gateway;
pub mod item_calculator;
pub mod quote_calculator;


pub use coupon::{CouponRejection, discount_amount, redeem};
pub use gateway::{gateway_fee, gateway_fee_rate};
pub use item_calculator::{calculate_item_total, price_line_item};
pub use quote_calculator::{QuoteCharges, compute_quote_totals};
