//! Workshop Settings Model
//!
//! The tenant-level configuration document. Everything the calculators need
//! from here is passed in explicitly by the caller; the engine never reads
//! settings ambiently.

use crate::models::ShippingOption;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Follow-up message templates, one per quotation status
///
/// Tokens `{cliente}`, `{empresa}`, `{total}` and `{id}` are substituted by
/// the messaging module.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageTemplates {
    /// Sent while the record is still a quote (status Pending)
    pub quotation: String,
    pub awaiting_payment: String,
    pub production: String,
    pub shipping: String,
    pub delivered: String,
    pub cancelled: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            quotation: "Olá {cliente}! Segue seu orçamento da {empresa}.\n\nTotal: {total}"
                .to_string(),
            awaiting_payment: "Olá {cliente}! Seu pedido {id} aguarda pagamento.".to_string(),
            production: "Olá {cliente}! Seu pedido {id} entrou em produção!".to_string(),
            shipping: "Olá {cliente}! Seu pedido {id} saiu para entrega!".to_string(),
            delivered: "Olá {cliente}! Seu pedido {id} foi entregue.".to_string(),
            cancelled: "Olá {cliente}! Seu pedido {id} foi cancelado.".to_string(),
        }
    }
}

/// Workshop-level financial figures backing the cost-plus recommender
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialDefaults {
    /// Rent, utilities, subscriptions... per month
    pub monthly_fixed_costs: Decimal,
    pub desired_monthly_salary: Decimal,
    pub working_days_per_month: u32,
    pub hours_per_day: u32,
}

impl Default for FinancialDefaults {
    fn default() -> Self {
        Self {
            monthly_fixed_costs: Decimal::from(1500),
            desired_monthly_salary: Decimal::from(3000),
            working_days_per_month: 22,
            hours_per_day: 8,
        }
    }
}

/// Tenant settings document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkshopSettings {
    pub business_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default = "ShippingOption::defaults")]
    pub shipping_options: Vec<ShippingOption>,
    #[serde(default)]
    pub wa_messages: MessageTemplates,
    #[serde(default)]
    pub financials: FinancialDefaults,
}

impl Default for WorkshopSettings {
    fn default() -> Self {
        Self {
            business_name: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            shipping_options: ShippingOption::defaults(),
            wa_messages: MessageTemplates::default(),
            financials: FinancialDefaults::default(),
        }
    }
}
