//! Shipping Option Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A delivery option the quotation form can pick
///
/// At most one per quotation; its price enters the gateway-fee base but
/// never the discount base.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingOption {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

impl ShippingOption {
    /// Stock options every new tenant starts with
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                id: "1".to_string(),
                name: "Retirada no Balcão".to_string(),
                price: Decimal::ZERO,
            },
            Self {
                id: "2".to_string(),
                name: "Entrega Expressa".to_string(),
                price: Decimal::from(15),
            },
        ]
    }
}
