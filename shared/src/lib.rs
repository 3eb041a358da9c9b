//! Shared types for the Prensa back office
//!
//! Common types used across crates: domain models, quotation records,
//! error types, and utility helpers. Everything here is passive data;
//! the business mathematics lives in `prensa-engine`.

pub mod error;
pub mod models;
pub mod quote;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use types::Timestamp;
