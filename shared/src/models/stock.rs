//! Stock Model

use crate::types::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw material / supply entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockItem {
    pub id: String,
    pub name: String,
    /// Counting unit shown next to quantities (e.g. "un", "m", "kg")
    pub unit: String,
    /// Alert threshold
    pub min_quantity: Decimal,
    pub current_quantity: Decimal,
    /// Acquisition cost per unit, feeds material compositions
    pub cost: Decimal,
}

/// Movement direction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockMovementKind {
    In,
    Out,
}

/// A single entry in the stock ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: String,
    pub stock_item_id: String,
    #[serde(rename = "type")]
    pub kind: StockMovementKind,
    pub quantity: Decimal,
    pub timestamp: Timestamp,
    /// Free-text justification ("compra", "produção ORC-1234", ...)
    pub reason: String,
}
