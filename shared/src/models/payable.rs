//! Payable Account Model

use crate::types::Timestamp;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payable settlement state
///
/// Only `Pending` and `Paid` are ever stored; `Overdue` is derived from the
/// due date by the reporting layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayableStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

/// An account the workshop has to pay (rent, supplier invoice, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayableAccount {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    /// Expense category label (free text, e.g. "Geral", "Insumos")
    pub category: String,
    pub status: PayableStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<Timestamp>,
    /// Supplier name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}
