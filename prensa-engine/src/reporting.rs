//! Reporting rollups
//!
//! Read-only views over persisted records:
//! - Payables aging: overdue is derived from the due date at read time,
//!   never stored, so a document written yesterday reads correctly today
//! - Dashboard: volume, record count, distinct customers, low stock
//!
//! Everything takes `today`/`now` explicitly; nothing here reads the clock.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{PayableAccount, PayableStatus, StockItem};
use shared::quote::Quotation;
use shared::types::Timestamp;
use std::collections::HashSet;

use crate::inventory::low_stock_items;
use crate::money::round_money;

/// Days ahead the "due soon" window looks
const DUE_SOON_WINDOW_DAYS: u64 = 7;

// ==================== Payables ====================

/// Status as of `today`
///
/// Paid is sticky; a stored Pending past its due date reads as Overdue.
pub fn effective_status(payable: &PayableAccount, today: NaiveDate) -> PayableStatus {
    match payable.status {
        PayableStatus::Paid => PayableStatus::Paid,
        _ if payable.due_date < today => PayableStatus::Overdue,
        _ => PayableStatus::Pending,
    }
}

/// Backs the "VENCE HOJE" badge
pub fn due_today(payable: &PayableAccount, today: NaiveDate) -> bool {
    effective_status(payable, today) == PayableStatus::Pending && payable.due_date == today
}

/// Unpaid accounts falling due within the next week
///
/// Already-overdue accounts are inside the window too: they need the
/// operator's attention more, not less.
pub fn due_soon(payables: &[PayableAccount], today: NaiveDate) -> Vec<&PayableAccount> {
    let horizon = today + Days::new(DUE_SOON_WINDOW_DAYS);
    payables
        .iter()
        .filter(|p| p.status != PayableStatus::Paid && p.due_date <= horizon)
        .collect()
}

/// Display order: open accounts first, then due date ascending
pub fn sorted_for_display(payables: &[PayableAccount]) -> Vec<&PayableAccount> {
    let mut sorted: Vec<&PayableAccount> = payables.iter().collect();
    sorted.sort_by_key(|p| (p.status == PayableStatus::Paid, p.due_date));
    sorted
}

/// Settle an account
pub fn mark_paid(payable: &PayableAccount, now: Timestamp) -> PayableAccount {
    PayableAccount {
        status: PayableStatus::Paid,
        paid_at: Some(now),
        ..payable.clone()
    }
}

/// Aging figures for the payables screen
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PayablesSummary {
    /// Everything unpaid, overdue included
    pub total_pending: Decimal,
    pub total_paid: Decimal,
    /// The overdue slice of the pending figure
    pub total_overdue: Decimal,
    pub due_soon_count: usize,
}

impl PayablesSummary {
    pub fn build(payables: &[PayableAccount], today: NaiveDate) -> Self {
        let mut total_pending = Decimal::ZERO;
        let mut total_paid = Decimal::ZERO;
        let mut total_overdue = Decimal::ZERO;

        for payable in payables {
            match effective_status(payable, today) {
                PayableStatus::Paid => total_paid += payable.amount,
                PayableStatus::Pending => total_pending += payable.amount,
                PayableStatus::Overdue => {
                    total_pending += payable.amount;
                    total_overdue += payable.amount;
                }
            }
        }

        Self {
            total_pending: round_money(total_pending),
            total_paid: round_money(total_paid),
            total_overdue: round_money(total_overdue),
            due_soon_count: due_soon(payables, today).len(),
        }
    }
}

// ==================== Dashboard ====================

/// Home screen rollup
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardSummary {
    /// Sum of record totals, whatever the status
    pub gross_volume: Decimal,
    pub quotation_count: usize,
    /// Distinct customer names, exact match
    pub unique_customers: usize,
    pub low_stock: Vec<StockItem>,
}

impl DashboardSummary {
    pub fn build(quotations: &[Quotation], stock: &[StockItem]) -> Self {
        let gross_volume = round_money(quotations.iter().map(|q| q.totals.total).sum());
        let unique_customers = quotations
            .iter()
            .map(|q| q.customer_name.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            gross_volume,
            quotation_count: quotations.len(),
            unique_customers,
            low_stock: low_stock_items(stock).into_iter().cloned().collect(),
        }
    }
}
