//! Payment plan builder
//!
//! Turns the operator's payment selection into the amounts actually
//! charged. Split (half now, half on delivery) only exists for instant
//! methods; installments only exist on credit. Both constraints reject as
//! values so the caller can surface them next to the form field.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::quote::{Installments, PaymentMethod, PaymentOption};
use shared::{AppError, ErrorCode};

use crate::money::round_money;

/// Why a payment selection did not produce a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlanRejection {
    #[error("split payment is only available for cash or PIX")]
    SplitRequiresInstantPayment,
    #[error("installments are only available on credit")]
    InstallmentsRequireCredit,
}

impl From<PlanRejection> for AppError {
    fn from(rejection: PlanRejection) -> Self {
        let code = match rejection {
            PlanRejection::SplitRequiresInstantPayment => ErrorCode::SplitNotAllowed,
            PlanRejection::InstallmentsRequireCredit => ErrorCode::PaymentInvalidMethod,
        };
        AppError::with_message(code, rejection.to_string())
    }
}

/// The amounts a quotation will be charged in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentPlan {
    /// Everything at once
    Single { amount_due: Decimal },
    /// Half on approval, the rest on delivery
    Deposit {
        upfront: Decimal,
        on_delivery: Decimal,
    },
    /// Credit, charged by the acquirer in equal monthly parts
    Installments {
        count: Installments,
        /// Display value; the acquirer does its own cent distribution
        per_installment: Decimal,
    },
}

impl PaymentPlan {
    /// Total the plan charges
    pub fn charged_total(&self) -> Decimal {
        match self {
            PaymentPlan::Single { amount_due } => *amount_due,
            PaymentPlan::Deposit {
                upfront,
                on_delivery,
            } => *upfront + *on_delivery,
            PaymentPlan::Installments {
                count,
                per_installment,
            } => *per_installment * Decimal::from(count.get()),
        }
    }
}

/// Build the plan for a quotation total
///
/// `installments` of `None` or 1x both mean a plain single charge; counts
/// above 1x require credit. Split requires an instant method: a card
/// transaction cannot be half-captured at the counter.
pub fn build_payment_plan(
    total: Decimal,
    method: PaymentMethod,
    option: PaymentOption,
    installments: Option<Installments>,
) -> Result<PaymentPlan, PlanRejection> {
    let count = installments.unwrap_or_default();
    if count.get() > 1 && method != PaymentMethod::Credit {
        return Err(PlanRejection::InstallmentsRequireCredit);
    }

    match option {
        PaymentOption::Split => {
            if !method.is_instant() {
                return Err(PlanRejection::SplitRequiresInstantPayment);
            }
            let upfront = round_money(total / Decimal::TWO);
            Ok(PaymentPlan::Deposit {
                upfront,
                // Remainder, not a second rounding: the halves sum exactly
                on_delivery: total - upfront,
            })
        }
        PaymentOption::Full => {
            if method == PaymentMethod::Credit && count.get() > 1 {
                Ok(PaymentPlan::Installments {
                    count,
                    per_installment: round_money(total / Decimal::from(count.get())),
                })
            } else {
                Ok(PaymentPlan::Single { amount_due: total })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_single_charge() {
        let plan = build_payment_plan(
            Decimal::from(100),
            PaymentMethod::Pix,
            PaymentOption::Full,
            None,
        )
        .unwrap();
        assert_eq!(
            plan,
            PaymentPlan::Single {
                amount_due: Decimal::from(100)
            }
        );
    }

    #[test]
    fn test_split_halves_sum_exactly() {
        // 33.35 halves into 16.68 + 16.67
        let total = Decimal::new(3335, 2);
        let plan =
            build_payment_plan(total, PaymentMethod::Cash, PaymentOption::Split, None).unwrap();

        let PaymentPlan::Deposit {
            upfront,
            on_delivery,
        } = plan
        else {
            panic!("expected a deposit plan");
        };
        assert_eq!(upfront, Decimal::new(1668, 2));
        assert_eq!(on_delivery, Decimal::new(1667, 2));
        assert_eq!(upfront + on_delivery, total);
    }

    #[test]
    fn test_split_rejects_card_methods() {
        for method in [PaymentMethod::Debit, PaymentMethod::Credit] {
            let result =
                build_payment_plan(Decimal::from(100), method, PaymentOption::Split, None);
            assert_eq!(result, Err(PlanRejection::SplitRequiresInstantPayment));
        }
    }

    #[test]
    fn test_installments_on_credit() {
        let plan = build_payment_plan(
            Decimal::from(100),
            PaymentMethod::Credit,
            PaymentOption::Full,
            Some(Installments::new(3).unwrap()),
        )
        .unwrap();

        let PaymentPlan::Installments {
            count,
            per_installment,
        } = plan
        else {
            panic!("expected an installment plan");
        };
        assert_eq!(count.get(), 3);
        assert_eq!(per_installment, Decimal::new(3333, 2)); // 100 / 3
    }

    #[test]
    fn test_single_installment_credit_is_a_single_charge() {
        let plan = build_payment_plan(
            Decimal::from(100),
            PaymentMethod::Credit,
            PaymentOption::Full,
            Some(Installments::ONE),
        )
        .unwrap();
        assert!(matches!(plan, PaymentPlan::Single { .. }));
    }

    #[test]
    fn test_installments_reject_off_credit() {
        let result = build_payment_plan(
            Decimal::from(100),
            PaymentMethod::Pix,
            PaymentOption::Full,
            Some(Installments::new(2).unwrap()),
        );
        assert_eq!(result, Err(PlanRejection::InstallmentsRequireCredit));

        let err: AppError = result.unwrap_err().into();
        assert_eq!(err.code, ErrorCode::PaymentInvalidMethod);
    }

    #[test]
    fn test_charged_total_matches_the_quotation() {
        let total = Decimal::new(24999, 2);
        let plan =
            build_payment_plan(total, PaymentMethod::Pix, PaymentOption::Split, None).unwrap();
        assert_eq!(plan.charged_total(), total);
    }

    #[test]
    fn test_plan_serializes_tagged() {
        let plan = build_payment_plan(
            Decimal::from(50),
            PaymentMethod::Pix,
            PaymentOption::Full,
            None,
        )
        .unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["kind"], "SINGLE");
        assert_eq!(json["amount_due"], 50.0);
    }
}
