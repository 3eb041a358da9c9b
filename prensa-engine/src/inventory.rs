//! Inventory ledger
//!
//! Stock balances move only through recorded movements. Balances may go
//! negative: the counter keeps selling while paperwork catches up, so the
//! ledger warns instead of blocking the sale.

use rust_decimal::Decimal;
use shared::models::{StockItem, StockMovement, StockMovementKind};

/// Apply a movement to an item's balance
pub fn apply_movement(item: &StockItem, movement: &StockMovement) -> StockItem {
    let mut updated = item.clone();
    match movement.kind {
        StockMovementKind::In => updated.current_quantity += movement.quantity,
        StockMovementKind::Out => updated.current_quantity -= movement.quantity,
    }

    if updated.current_quantity < Decimal::ZERO {
        tracing::warn!(
            item = %updated.name,
            balance = %updated.current_quantity,
            "stock balance went negative"
        );
    }
    updated
}

/// At or below the reorder threshold
pub fn is_low_stock(item: &StockItem) -> bool {
    item.current_quantity <= item.min_quantity
}

/// Items needing a purchase order, in input order
pub fn low_stock_items(items: &[StockItem]) -> Vec<&StockItem> {
    items.iter().filter(|item| is_low_stock(item)).collect()
}
