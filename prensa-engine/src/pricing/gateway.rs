//! Card acquirer fee table
//!
//! Rates mirror the acquirer contract: debit is flat, credit grows with the
//! installment count, instant methods (cash, PIX) cost nothing. The fee is
//! charged on goods plus shipping and added on top of the total.

use rust_decimal::Decimal;
use shared::quote::{Installments, PaymentMethod};

use crate::money::round_money;

/// Debit card rate (1.99%)
const DEBIT_RATE: Decimal = Decimal::from_parts(199, 0, 0, false, 4);

/// Credit card rates by installment count, 1x through 6x
const CREDIT_RATES: [Decimal; 6] = [
    Decimal::from_parts(498, 0, 0, false, 4),  // 1x: 4.98%
    Decimal::from_parts(650, 0, 0, false, 4),  // 2x: 6.50%
    Decimal::from_parts(790, 0, 0, false, 4),  // 3x: 7.90%
    Decimal::from_parts(920, 0, 0, false, 4),  // 4x: 9.20%
    Decimal::from_parts(1050, 0, 0, false, 4), // 5x: 10.50%
    Decimal::from_parts(1180, 0, 0, false, 4), // 6x: 11.80%
];

/// Fee rate as a fraction of the charged base
///
/// Credit without an installment count rates as single-installment.
pub fn gateway_fee_rate(method: PaymentMethod, installments: Option<Installments>) -> Decimal {
    match method {
        PaymentMethod::Cash | PaymentMethod::Pix => Decimal::ZERO,
        PaymentMethod::Debit => DEBIT_RATE,
        PaymentMethod::Credit => {
            let count = installments.unwrap_or_default().get();
            CREDIT_RATES[usize::from(count - 1)]
        }
    }
}

/// Fee amount on `base`, rounded to cents
pub fn gateway_fee(base: Decimal, method: PaymentMethod, installments: Option<Installments>) -> Decimal {
    round_money(base * gateway_fee_rate(method, installments))
}
