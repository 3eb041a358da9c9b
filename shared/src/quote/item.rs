//! Quotation line items

use crate::models::{PricingMode, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Line item input, before pricing
///
/// Built either from a catalog product or ad hoc (free-entry name and
/// price). Dimensions only matter for [`PricingMode::Area`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemDraft {
    /// Catalog reference; `None` for ad hoc items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub name: String,
    pub mode: PricingMode,
    /// Price per piece, per m² or per thousand depending on mode
    pub unit_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_cm: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<Decimal>,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_time: Option<String>,
}

impl LineItemDraft {
    /// Draft from a catalog product
    pub fn for_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: Some(product.id.clone()),
            name: product.name.clone(),
            mode: product.mode,
            unit_price: product.price,
            width_cm: None,
            height_cm: None,
            quantity,
            production_time: product.production_time.clone(),
        }
    }

    /// Draft for an item that is not in the catalog
    pub fn ad_hoc(name: impl Into<String>, mode: PricingMode, unit_price: Decimal, quantity: u32) -> Self {
        Self {
            product_id: None,
            name: name.into(),
            mode,
            unit_price,
            width_cm: None,
            height_cm: None,
            quantity,
            production_time: None,
        }
    }

    /// Set the piece dimensions in cm (area-priced items)
    pub fn dimensioned(mut self, width_cm: Decimal, height_cm: Decimal) -> Self {
        self.width_cm = Some(width_cm);
        self.height_cm = Some(height_cm);
        self
    }
}

/// Priced line item, as stored inside a quotation
///
/// `total` is the calculator's output and is never hand-adjusted after the
/// fact: changing quantity or price means repricing the draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricedLineItem {
    /// Line id, local to the quotation
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub name: String,
    pub mode: PricingMode,
    pub unit_price: Decimal,
    /// Present only for area-priced lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_cm: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<Decimal>,
    pub quantity: u32,
    pub total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_time: Option<String>,
}

impl PricedLineItem {
    /// Whether this line was entered free-form rather than from the catalog
    pub fn is_ad_hoc(&self) -> bool {
        self.product_id.is_none()
    }
}
