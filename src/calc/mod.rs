use rust_decimal::Decimal;

use crate::models::{BudgetInput, BudgetSummary, ChartSlice, SavingsTier};

/// Savings below this fraction of income count as the low tier.
fn low_savings_threshold(income: Decimal) -> Decimal {
    income * Decimal::new(10, 2)
}

/// Recommended savings target: 20% of income.
fn recommended_savings(income: Decimal) -> Decimal {
    income * Decimal::new(20, 2)
}

/// Compute the monthly budget summary from raw figures.
///
/// Pure and total: every numeric combination produces a summary. Zero income
/// with positive expenses yields negative savings and the overspending tier;
/// there is no division anywhere, so no degenerate ratios to guard.
pub(crate) fn summarize(input: &BudgetInput) -> BudgetSummary {
    let total_expenses = input.housing + input.food + input.transport + input.other;
    let savings = input.income - total_expenses;

    let tier = if savings < Decimal::ZERO {
        SavingsTier::Overspending
    } else if savings < low_savings_threshold(input.income) {
        SavingsTier::Low
    } else {
        SavingsTier::Healthy
    };

    let recommended = recommended_savings(input.income);
    let shortfall = if savings < recommended {
        Some(recommended - savings)
    } else {
        None
    };

    BudgetSummary {
        income: input.income,
        total_expenses,
        savings,
        tier,
        recommended_savings: recommended,
        shortfall,
    }
}

/// The five-slice breakdown for the pie chart. The savings slice is clamped
/// at zero; overspending is never drawn as a negative slice.
pub(crate) fn chart_series(input: &BudgetInput, summary: &BudgetSummary) -> Vec<ChartSlice> {
    vec![
        ChartSlice::new("Housing", input.housing),
        ChartSlice::new("Food", input.food),
        ChartSlice::new("Transportation", input.transport),
        ChartSlice::new("Other Expenses", input.other),
        ChartSlice::new("Savings", summary.savings.max(Decimal::ZERO)),
    ]
}

#[cfg(test)]
mod tests;
