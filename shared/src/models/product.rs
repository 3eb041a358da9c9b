//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a product's price is charged
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingMode {
    /// Price per piece
    #[default]
    Unit,
    /// Price per m², dimensions entered in cm
    Area,
    /// Price per thousand pieces
    Milheiro,
}

/// Catalog product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Category label (free text, e.g. "Adesivos")
    pub category: String,
    /// Charging mode the price refers to
    pub mode: PricingMode,
    /// Sale price: per piece, per m² or per thousand depending on mode
    pub price: Decimal,
    /// Internal production cost, for margin tracking
    pub production_cost: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Lead-time label shown on quotes (e.g. "30 min")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_time: Option<String>,
}
