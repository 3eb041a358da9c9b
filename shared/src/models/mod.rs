//! Data models
//!
//! Tenant-scoped records shared between the engine and the hosted document
//! store. All IDs are opaque `String`s handed out by the store; money fields
//! are `Decimal` and serialize as plain JSON numbers.

pub mod coupon;
pub mod customer;
pub mod payable;
pub mod product;
pub mod settings;
pub mod shipping;
pub mod stock;

// Re-exports
pub use coupon::*;
pub use customer::*;
pub use payable::*;
pub use product::*;
pub use settings::*;
pub use shipping::*;
pub use stock::*;
