//! Payment selection types

use crate::error::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the customer pays
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    #[default]
    Pix,
    Debit,
    Credit,
}

impl PaymentMethod {
    /// Settles immediately with no machine fee (cash or PIX)
    pub fn is_instant(self) -> bool {
        matches!(self, PaymentMethod::Cash | PaymentMethod::Pix)
    }

    /// Goes through the card machine and carries a gateway fee
    pub fn is_card(self) -> bool {
        matches!(self, PaymentMethod::Debit | PaymentMethod::Credit)
    }
}

/// Charge timing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentOption {
    /// Whole amount up front
    #[default]
    Full,
    /// Half on approval, half on delivery; cash/PIX only
    Split,
}

/// Credit installment count, 1 to 6
///
/// Construction validates the range, so the gateway fee lookup is total and
/// out-of-range counts never reach the calculators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct Installments(u8);

impl Installments {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Single up-front charge
    pub const ONE: Installments = Installments(1);

    pub fn new(count: u8) -> AppResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(AppError::with_message(
                ErrorCode::InstallmentsOutOfRange,
                format!(
                    "installments must be between {} and {}, got {}",
                    Self::MIN,
                    Self::MAX,
                    count
                ),
            )
            .with_detail("count", count))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Installments {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for Installments {
    type Error = AppError;

    fn try_from(count: u8) -> AppResult<Self> {
        Self::new(count)
    }
}

impl From<Installments> for u8 {
    fn from(i: Installments) -> Self {
        i.0
    }
}

impl fmt::Display for Installments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}
