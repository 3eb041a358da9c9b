//! Prensa Engine - pricing and quotation engine for print shops
//!
//! # Overview
//!
//! Deterministic business mathematics for the back office. Every operation
//! is a pure function over immutable inputs; persistence, rendering and
//! messaging transports live elsewhere and consume these results:
//!
//! - **Pricing** (`pricing`): line item pricing, gateway fees, coupon
//!   redemption and quotation totals
//! - **Costing** (`costing`): cost-plus price recommendation
//! - **Imposition** (`imposition`): fitting art onto stock sheets
//! - **Payment plans** (`payment_plan`): full / split / installment schedules
//! - **Cart** (`cart`): line assembly for the quotation form and the counter
//! - **Inventory** (`inventory`): stock ledger arithmetic and alerts
//! - **Reporting** (`reporting`): payables aging and the dashboard rollup
//! - **Messaging** (`messaging`): follow-up templates and BRL formatting
//!
//! # Module structure
//!
//! ```text
//! prensa-engine/src/
//! ├── money.rs         # rounding discipline, boundary validation
//! ├── pricing/         # the quotation money pipeline
//! ├── costing.rs       # cost-plus recommender
//! ├── imposition.rs    # sheet imposition calculator
//! ├── payment_plan.rs  # charge schedules
//! ├── cart.rs          # cart assembly
//! ├── inventory.rs     # stock movements
//! ├── reporting.rs     # rollups
//! └── messaging.rs     # templates and currency formatting
//! ```

pub mod cart;
pub mod costing;
pub mod imposition;
pub mod inventory;
pub mod messaging;
pub mod money;
pub mod payment_plan;
pub mod pricing;
pub mod reporting;

// Re-export the calculator entry points
pub use cart::Cart;
pub use costing::{CostBreakdown, CostingInput, MaterialLine};
pub use imposition::{ImpositionResult, SheetJob, impose};
pub use payment_plan::{PaymentPlan, PlanRejection, build_payment_plan};
pub use pricing::{
    CouponRejection, QuoteCharges, calculate_item_total, compute_quote_totals, price_line_item,
    redeem,
};
