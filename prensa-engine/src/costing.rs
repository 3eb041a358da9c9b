//! Cost-Plus Price Recommender
//!
//! Recommends a selling price from what a job actually costs:
//! - Labor, from the workshop's monthly financials broken down to an
//!   hourly rate
//! - Materials, from consumed stock items plus ad hoc entries
//! - A divisor markup covering fixed expenses and the desired margin
//!
//! The divisor form (`direct / (1 - loading)`) means the margin is a share
//! of the selling price, not of the cost. A loading of 100% or more has no
//! selling price that satisfies it; the breakdown flags that instead of
//! dividing by zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{FinancialDefaults, PricingMode, Product, StockItem};
use shared::util::new_doc_id;
use shared::{AppError, AppResult, ErrorCode};

use crate::money::round_money;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// One material consumed by the job
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialLine {
    /// Stock reference; `None` for ad hoc entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_item_id: Option<String>,
    pub name: String,
    /// Cost per unit as purchased
    pub unit_cost: Decimal,
    /// Consumed quantity; fractional for cut material
    pub quantity: Decimal,
}

impl MaterialLine {
    /// Material line from a stock item, one unit consumed
    pub fn from_stock(item: &StockItem) -> Self {
        Self {
            stock_item_id: Some(item.id.clone()),
            name: item.name.clone(),
            unit_cost: item.cost,
            quantity: Decimal::ONE,
        }
    }

    pub fn ad_hoc(name: impl Into<String>, unit_cost: Decimal, quantity: Decimal) -> Self {
        Self {
            stock_item_id: None,
            name: name.into(),
            unit_cost,
            quantity,
        }
    }
}

/// Everything the recommender needs, gathered by the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostingInput {
    pub monthly_fixed_costs: Decimal,
    pub desired_monthly_salary: Decimal,
    pub working_days_per_month: u32,
    pub hours_per_day: u32,
    /// Hands-on time for one run of the job
    pub production_minutes: Decimal,
    pub materials: Vec<MaterialLine>,
    /// Material spend not itemized above
    pub extra_material_cost: Decimal,
    /// Share of the selling price absorbed by fixed expenses
    pub fixed_expenses_percent: Decimal,
    /// Desired profit share of the selling price
    pub profit_margin_percent: Decimal,
}

impl CostingInput {
    /// Fresh input seeded from the workshop's financials
    pub fn from_financials(financials: &FinancialDefaults) -> Self {
        Self {
            monthly_fixed_costs: financials.monthly_fixed_costs,
            desired_monthly_salary: financials.desired_monthly_salary,
            working_days_per_month: financials.working_days_per_month,
            hours_per_day: financials.hours_per_day,
            production_minutes: Decimal::from(30),
            materials: Vec::new(),
            extra_material_cost: Decimal::ZERO,
            fixed_expenses_percent: Decimal::from(15),
            profit_margin_percent: Decimal::from(30),
        }
    }

    /// Add a material, merging repeated picks of the same stock item
    pub fn add_material(&mut self, line: MaterialLine) {
        if let Some(id) = &line.stock_item_id
            && let Some(existing) = self
                .materials
                .iter_mut()
                .find(|m| m.stock_item_id.as_deref() == Some(id.as_str()))
        {
            existing.quantity += line.quantity;
            return;
        }
        self.materials.push(line);
    }

    /// Itemized materials plus the extra spend, negative quantities ignored
    pub fn material_cost(&self) -> Decimal {
        let itemized: Decimal = self
            .materials
            .iter()
            .map(|m| m.unit_cost * m.quantity.max(Decimal::ZERO))
            .sum();
        itemized + self.extra_material_cost
    }

    /// What one working hour must earn to cover costs and salary
    ///
    /// Zero when the configured schedule has no working hours.
    pub fn hourly_rate(&self) -> Decimal {
        let monthly_hours = Decimal::from(self.working_days_per_month * self.hours_per_day);
        if monthly_hours.is_zero() {
            return Decimal::ZERO;
        }
        (self.monthly_fixed_costs + self.desired_monthly_salary) / monthly_hours
    }

    /// Run the recommendation
    pub fn recommend(&self) -> CostBreakdown {
        // Step 1: Labor from the hourly rate
        let hourly_rate = self.hourly_rate();
        let labor_cost = self.production_minutes / MINUTES_PER_HOUR * hourly_rate;

        // Step 2: Direct cost of one run
        let material_cost = self.material_cost();
        let direct_cost = material_cost + labor_cost;

        // Step 3: Divisor markup; a loading of 100%+ cannot be priced
        let loading =
            (self.fixed_expenses_percent + self.profit_margin_percent) / Decimal::ONE_HUNDRED;
        let divisor = Decimal::ONE - loading;
        let viable = divisor > Decimal::ZERO;
        let suggested_price = if viable {
            direct_cost / divisor
        } else {
            Decimal::ZERO
        };

        // Step 4: Derived figures for the operator
        let markup_factor = if direct_cost > Decimal::ZERO {
            suggested_price / direct_cost
        } else {
            Decimal::ZERO
        };
        let net_profit = suggested_price
            - direct_cost
            - suggested_price * self.fixed_expenses_percent / Decimal::ONE_HUNDRED;

        CostBreakdown {
            hourly_rate: round_money(hourly_rate),
            labor_cost: round_money(labor_cost),
            material_cost: round_money(material_cost),
            direct_cost: round_money(direct_cost),
            suggested_price: round_money(suggested_price),
            markup_factor: round_money(markup_factor),
            net_profit: round_money(net_profit),
            viable,
        }
    }
}

impl Default for CostingInput {
    fn default() -> Self {
        Self::from_financials(&FinancialDefaults::default())
    }
}

/// Result of a cost-plus recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostBreakdown {
    /// Workshop hour value derived from the monthly financials
    pub hourly_rate: Decimal,
    /// Labor share of one run
    pub labor_cost: Decimal,
    /// Material share of one run
    pub material_cost: Decimal,
    /// Labor plus materials
    pub direct_cost: Decimal,
    /// Price that funds the expense and margin shares; zero when not viable
    pub suggested_price: Decimal,
    /// Suggested price over direct cost
    pub markup_factor: Decimal,
    /// What remains of the suggested price after cost and fixed expenses
    pub net_profit: Decimal,
    /// False when expense plus margin percentages reach 100%
    pub viable: bool,
}

impl CostBreakdown {
    /// Promote the recommendation into a catalog product
    ///
    /// Fails when the breakdown has no positive suggested price to sell at.
    pub fn to_product(
        &self,
        name: impl Into<String>,
        category: impl Into<String>,
        production_minutes: Decimal,
    ) -> AppResult<Product> {
        if self.suggested_price <= Decimal::ZERO {
            return Err(AppError::with_message(
                ErrorCode::ProductInvalidPrice,
                "suggested price must be positive to publish a product",
            ));
        }

        let category = category.into();
        Ok(Product {
            id: new_doc_id(),
            name: name.into(),
            category: if category.trim().is_empty() {
                "Geral".to_string()
            } else {
                category
            },
            mode: PricingMode::Unit,
            price: self.suggested_price,
            production_cost: self.direct_cost,
            description: None,
            production_time: Some(format!("{} min", production_minutes)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock_item(id: &str, name: &str, cost: i64) -> StockItem {
        StockItem {
            id: id.to_string(),
            name: name.to_string(),
            unit: "un".to_string(),
            min_quantity: Decimal::from(5),
            current_quantity: Decimal::from(50),
            cost: Decimal::from(cost),
        }
    }

    #[test]
    fn test_hourly_rate_from_defaults() {
        // (1500 + 3000) / (22 x 8) = 25.5681... -> 25.57 rounded
        let input = CostingInput::default();
        assert_eq!(round_money(input.hourly_rate()), Decimal::new(2557, 2));
    }

    #[test]
    fn test_hourly_rate_guards_empty_schedule() {
        let mut input = CostingInput::default();
        input.working_days_per_month = 0;
        assert_eq!(input.hourly_rate(), Decimal::ZERO);
        assert_eq!(input.recommend().labor_cost, Decimal::ZERO);
    }

    #[test]
    fn test_recommend_simple_job() {
        let mut input = CostingInput::default();
        input.monthly_fixed_costs = Decimal::from(1000);
        input.desired_monthly_salary = Decimal::from(2200);
        input.working_days_per_month = 20;
        input.hours_per_day = 8;
        input.production_minutes = Decimal::from(60);
        input.extra_material_cost = Decimal::from(10);
        input.fixed_expenses_percent = Decimal::from(10);
        input.profit_margin_percent = Decimal::from(40);

        let breakdown = input.recommend();
        // (1000 + 2200) / 160 = 20.00/h; one hour of labor
        assert_eq!(breakdown.hourly_rate, Decimal::from(20));
        assert_eq!(breakdown.labor_cost, Decimal::from(20));
        assert_eq!(breakdown.direct_cost, Decimal::from(30));
        // 30 / (1 - 0.50) = 60.00
        assert_eq!(breakdown.suggested_price, Decimal::from(60));
        assert_eq!(breakdown.markup_factor, Decimal::from(2));
        // 60 - 30 - 60 x 10% = 24.00
        assert_eq!(breakdown.net_profit, Decimal::from(24));
        assert!(breakdown.viable);
    }

    #[test]
    fn test_recommend_flags_impossible_loading() {
        let mut input = CostingInput::default();
        input.extra_material_cost = Decimal::from(10);
        input.fixed_expenses_percent = Decimal::from(60);
        input.profit_margin_percent = Decimal::from(45);

        let breakdown = input.recommend();
        assert!(!breakdown.viable);
        assert_eq!(breakdown.suggested_price, Decimal::ZERO);
        assert_eq!(breakdown.markup_factor, Decimal::ZERO);
    }

    #[test]
    fn test_add_material_merges_stock_picks() {
        let mut input = CostingInput::default();
        let vinyl = stock_item("s1", "Vinil adesivo", 12);
        input.add_material(MaterialLine::from_stock(&vinyl));
        input.add_material(MaterialLine::from_stock(&vinyl));
        input.add_material(MaterialLine::ad_hoc("Fita", Decimal::from(3), Decimal::ONE));
        input.add_material(MaterialLine::ad_hoc("Fita", Decimal::from(3), Decimal::ONE));

        // Stock picks merge, ad hoc lines do not
        assert_eq!(input.materials.len(), 3);
        assert_eq!(input.materials[0].quantity, Decimal::from(2));
        // 2 x 12 + 3 + 3 = 30
        assert_eq!(input.material_cost(), Decimal::from(30));
    }

    #[test]
    fn test_material_cost_ignores_negative_quantities() {
        let mut input = CostingInput::default();
        input.add_material(MaterialLine::ad_hoc(
            "Papel",
            Decimal::from(2),
            Decimal::from(-4),
        ));
        assert_eq!(input.material_cost(), Decimal::ZERO);
    }

    #[test]
    fn test_to_product_requires_positive_price() {
        let mut input = CostingInput::default();
        input.fixed_expenses_percent = Decimal::from(60);
        input.profit_margin_percent = Decimal::from(45);
        input.extra_material_cost = Decimal::from(10);

        let breakdown = input.recommend();
        let err = breakdown
            .to_product("Caneca", "Brindes", input.production_minutes)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductInvalidPrice);
    }

    #[test]
    fn test_to_product_defaults_empty_category() {
        let mut input = CostingInput::default();
        input.extra_material_cost = Decimal::from(10);

        let product = input
            .recommend()
            .to_product("Caneca personalizada", "  ", input.production_minutes)
            .unwrap();
        assert_eq!(product.category, "Geral");
        assert_eq!(product.mode, PricingMode::Unit);
        assert_eq!(product.production_time.as_deref(), Some("30 min"));
        assert!(product.price > product.production_cost);
    }
}
