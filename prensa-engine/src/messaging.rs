//! Follow-up message rendering
//!
//! Builds the WhatsApp texts the operator sends at each status change.
//! Templates live in the workshop settings; rendering is plain token
//! substitution with no escaping, the channel is plain text.
//!
//! Money shows up here in pt-BR format (`R$ 1.234,56`). The calculators
//! never format; this is the one place amounts become text.

use rust_decimal::Decimal;
use shared::models::{MessageTemplates, WorkshopSettings};
use shared::quote::{Quotation, QuotationStatus};

use crate::money::round_money;

/// Values substituted into a template
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    /// Replaces `{cliente}`
    pub customer: &'a str,
    /// Replaces `{empresa}`
    pub business: &'a str,
    /// Replaces `{total}`, formatted as BRL
    pub total: Decimal,
    /// Replaces `{id}`
    pub reference: &'a str,
}

/// Format an amount as pt-BR currency: `R$ 1.234,56`
///
/// Thousands separated by `.`, decimals by `,`, always two places. The
/// sign goes before the symbol: `-R$ 12,30`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = round_money(value);
    let negative = rounded < Decimal::ZERO;
    let text = format!("{:.2}", rounded.abs());
    let (int_part, dec_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{}", sign, grouped, dec_part)
}

/// Substitute the known tokens; unknown tokens pass through untouched
pub fn render_template(template: &str, ctx: &TemplateContext<'_>) -> String {
    template
        .replace("{cliente}", ctx.customer)
        .replace("{empresa}", ctx.business)
        .replace("{total}", &format_brl(ctx.total))
        .replace("{id}", ctx.reference)
}

/// Template to send for a record in the given status
pub fn template_for_status(templates: &MessageTemplates, status: QuotationStatus) -> &str {
    match status {
        QuotationStatus::Pending => &templates.quotation,
        QuotationStatus::AwaitingPayment => &templates.awaiting_payment,
        QuotationStatus::Production => &templates.production,
        QuotationStatus::Shipping => &templates.shipping,
        QuotationStatus::Delivered => &templates.delivered,
        QuotationStatus::Cancelled => &templates.cancelled,
    }
}

/// The message for a quotation as it stands
pub fn message_for(settings: &WorkshopSettings, quotation: &Quotation) -> String {
    let ctx = TemplateContext {
        customer: &quotation.customer_name,
        business: &settings.business_name,
        total: quotation.totals.total,
        reference: &quotation.reference,
    };
    render_template(template_for_status(&settings.wa_messages, quotation.status), &ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::quote::QuoteTotals;

    #[test]
    fn test_format_brl_basic() {
        assert_eq!(format_brl(Decimal::new(123456, 2)), "R$ 1.234,56");
        assert_eq!(format_brl(Decimal::new(5, 1)), "R$ 0,50");
        assert_eq!(format_brl(Decimal::ZERO), "R$ 0,00");
    }

    #[test]
    fn test_format_brl_groups_millions() {
        assert_eq!(format_brl(Decimal::from(1_234_567)), "R$ 1.234.567,00");
        assert_eq!(format_brl(Decimal::from(1000)), "R$ 1.000,00");
        assert_eq!(format_brl(Decimal::from(999)), "R$ 999,00");
    }

    #[test]
    fn test_format_brl_negative() {
        assert_eq!(format_brl(Decimal::new(-1230, 2)), "-R$ 12,30");
    }

    #[test]
    fn test_format_brl_rounds_to_cents() {
        assert_eq!(format_brl(Decimal::new(10125, 3)), "R$ 10,13");
    }

    #[test]
    fn test_render_substitutes_all_tokens() {
        let ctx = TemplateContext {
            customer: "Ana",
            business: "Gráfica Aurora",
            total: Decimal::new(15050, 2),
            reference: "ORC-4821",
        };
        let out = render_template(
            "Olá {cliente}! {empresa} enviou o orçamento {id}: {total}",
            &ctx,
        );
        assert_eq!(out, "Olá Ana! Gráfica Aurora enviou o orçamento ORC-4821: R$ 150,50");
    }

    #[test]
    fn test_render_leaves_unknown_tokens_alone() {
        let ctx = TemplateContext {
            customer: "Ana",
            business: "",
            total: Decimal::ZERO,
            reference: "",
        };
        assert_eq!(render_template("{saudacao} {cliente}", &ctx), "{saudacao} Ana");
    }

    #[test]
    fn test_default_templates_cover_every_status() {
        let templates = MessageTemplates::default();
        for status in [
            QuotationStatus::Pending,
            QuotationStatus::AwaitingPayment,
            QuotationStatus::Production,
            QuotationStatus::Shipping,
            QuotationStatus::Delivered,
            QuotationStatus::Cancelled,
        ] {
            assert!(!template_for_status(&templates, status).is_empty());
        }
        assert!(template_for_status(&templates, QuotationStatus::Pending).contains("orçamento"));
    }

    #[test]
    fn test_message_for_a_pending_quotation() {
        let mut settings = WorkshopSettings::default();
        settings.business_name = "Gráfica Aurora".to_string();

        let totals = QuoteTotals {
            items_subtotal: Decimal::from(200),
            total: Decimal::from(200),
            ..QuoteTotals::default()
        };
        let quotation = Quotation::new(
            QuotationStatus::Pending,
            "Ana",
            "11 99999-0000",
            vec![],
            totals,
        );

        let message = message_for(&settings, &quotation);
        assert!(message.starts_with("Olá Ana!"));
        assert!(message.contains("Gráfica Aurora"));
        assert!(message.contains("R$ 200,00"));
    }
}
