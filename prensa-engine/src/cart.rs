//! Cart assembly
//!
//! Holds the lines of a quotation being built. Two entry styles, matching
//! the two screens that feed it:
//!
//! - The counter sale taps a catalog product repeatedly; re-adding bumps
//!   the existing line's quantity instead of duplicating it
//! - The quotation form pushes fully specified drafts; identical products
//!   with different dimensions are distinct jobs and always append
//!
//! A line's stored total is never hand-adjusted. Every quantity or price
//! change reprices the line through the item calculator.

use rust_decimal::Decimal;
use shared::models::{PricingMode, Product};
use shared::quote::{LineItemDraft, PricedLineItem};
use shared::{AppError, AppResult, ErrorCode};

use crate::money::{MAX_QUANTITY, round_money, validate_line_item};
use crate::pricing::{calculate_item_total, price_line_item};

/// Lines of a quotation in progress
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<PricedLineItem>,
}

fn reprice(line: &mut PricedLineItem) {
    line.total = calculate_item_total(
        line.mode,
        line.unit_price,
        line.width_cm,
        line.height_cm,
        line.quantity,
    );
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a catalog product, counter-sale style
    ///
    /// The counter sells by the piece whatever the catalog pricing mode
    /// says, so the line is priced as `quantity x product price`. Re-adding
    /// a product merges into its existing line. Returns the line id.
    pub fn add_catalog_item(&mut self, product: &Product, quantity: u32) -> AppResult<String> {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product_id.as_deref() == Some(product.id.as_str()))
        {
            let merged = line.quantity.saturating_add(quantity);
            if merged > MAX_QUANTITY {
                return Err(AppError::out_of_range(format!(
                    "quantity exceeds maximum allowed ({}), got {}",
                    MAX_QUANTITY, merged
                )));
            }
            line.quantity = merged;
            reprice(line);
            tracing::debug!(line_id = %line.id, quantity = merged, "merged repeated catalog pick");
            return Ok(line.id.clone());
        }

        let draft = LineItemDraft {
            mode: PricingMode::Unit,
            ..LineItemDraft::for_product(product, quantity)
        };
        validate_line_item(&draft)?;
        let line = price_line_item(&draft);
        let id = line.id.clone();
        self.items.push(line);
        Ok(id)
    }

    /// Append a fully specified draft, quotation-form style
    ///
    /// Never merges; two banners of the same product at different sizes are
    /// different jobs. Returns the line id.
    pub fn push_item(&mut self, draft: &LineItemDraft) -> AppResult<String> {
        validate_line_item(draft)?;
        let line = price_line_item(draft);
        let id = line.id.clone();
        self.items.push(line);
        Ok(id)
    }

    /// Change a line's quantity; zero removes the line
    pub fn set_quantity(&mut self, line_id: &str, quantity: u32) -> AppResult<()> {
        if quantity == 0 {
            return self.remove_item(line_id);
        }
        if quantity > MAX_QUANTITY {
            return Err(AppError::out_of_range(format!(
                "quantity exceeds maximum allowed ({}), got {}",
                MAX_QUANTITY, quantity
            )));
        }

        let line = self
            .items
            .iter_mut()
            .find(|line| line.id == line_id)
            .ok_or_else(|| AppError::new(ErrorCode::LineItemNotFound))?;
        line.quantity = quantity;
        reprice(line);
        Ok(())
    }

    pub fn remove_item(&mut self, line_id: &str) -> AppResult<()> {
        let before = self.items.len();
        self.items.retain(|line| line.id != line_id);
        if self.items.len() == before {
            return Err(AppError::new(ErrorCode::LineItemNotFound));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of line totals, rounded to cents
    pub fn subtotal(&self) -> Decimal {
        round_money(self.items.iter().map(|line| line.total).sum())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[PricedLineItem] {
        &self.items
    }

    /// Hand the lines over, emptying the cart
    pub fn into_items(self) -> Vec<PricedLineItem> {
        self.items
    }
}
