#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::models::BudgetInput;

fn input(income: Decimal, housing: Decimal, food: Decimal, transport: Decimal, other: Decimal) -> BudgetInput {
    BudgetInput::new(income, housing, food, transport, other)
}

// ── Identities ────────────────────────────────────────────────

#[test]
fn test_total_is_sum_of_categories() {
    let s = summarize(&input(dec!(5000), dec!(1100.25), dec!(433.10), dec!(87.65), dec!(12)));
    assert_eq!(s.total_expenses, dec!(1633.00));
}

#[test]
fn test_savings_is_income_minus_total() {
    let s = summarize(&input(dec!(5000), dec!(1100.25), dec!(433.10), dec!(87.65), dec!(12)));
    assert_eq!(s.savings, dec!(3367.00));
    assert_eq!(s.savings, s.income - s.total_expenses);
}

// ── Spec scenarios ────────────────────────────────────────────

#[test]
fn test_default_form_values() {
    // income 3000, expenses 1200+400+200+300
    let s = summarize(&input(dec!(3000), dec!(1200), dec!(400), dec!(200), dec!(300)));
    assert_eq!(s.total_expenses, dec!(2100));
    assert_eq!(s.savings, dec!(900));
    assert_eq!(s.tier, SavingsTier::Healthy);
    assert_eq!(s.recommended_savings, dec!(600.00));
    // 900 >= 600: goal met, no shortfall
    assert_eq!(s.shortfall, None);
}

#[test]
fn test_overspending_household() {
    let s = summarize(&input(dec!(2000), dec!(1500), dec!(400), dec!(200), dec!(300)));
    assert_eq!(s.total_expenses, dec!(2400));
    assert_eq!(s.savings, dec!(-400));
    assert_eq!(s.tier, SavingsTier::Overspending);
    assert_eq!(s.recommended_savings, dec!(400.00));
    assert_eq!(s.shortfall, Some(dec!(800.00)));
}

#[test]
fn test_frugal_household() {
    let s = summarize(&input(dec!(3000), dec!(500), dec!(300), dec!(200), dec!(200)));
    assert_eq!(s.total_expenses, dec!(1200));
    assert_eq!(s.savings, dec!(1800));
    assert_eq!(s.tier, SavingsTier::Healthy);
    assert_eq!(s.shortfall, None);
}

// ── Tier boundaries ───────────────────────────────────────────

#[test]
fn test_tiny_negative_savings_is_overspending() {
    let s = summarize(&input(dec!(1000), dec!(1000.01), dec!(0), dec!(0), dec!(0)));
    assert_eq!(s.tier, SavingsTier::Overspending);
}

#[test]
fn test_zero_savings_is_low() {
    let s = summarize(&input(dec!(1000), dec!(1000), dec!(0), dec!(0), dec!(0)));
    assert_eq!(s.tier, SavingsTier::Low);
}

#[test]
fn test_just_below_ten_percent_is_low() {
    // savings 99.99 < 100.00
    let s = summarize(&input(dec!(1000), dec!(900.01), dec!(0), dec!(0), dec!(0)));
    assert_eq!(s.tier, SavingsTier::Low);
}

#[test]
fn test_exactly_ten_percent_is_healthy() {
    let s = summarize(&input(dec!(1000), dec!(900), dec!(0), dec!(0), dec!(0)));
    assert_eq!(s.tier, SavingsTier::Healthy);
}

#[test]
fn test_zero_income_zero_expenses_is_healthy() {
    // savings 0 is not < 0 and not < 10% of 0
    let s = summarize(&input(dec!(0), dec!(0), dec!(0), dec!(0), dec!(0)));
    assert_eq!(s.tier, SavingsTier::Healthy);
    assert_eq!(s.shortfall, None);
}

#[test]
fn test_zero_income_with_expenses_overspends() {
    let s = summarize(&input(dec!(0), dec!(100), dec!(0), dec!(0), dec!(0)));
    assert_eq!(s.tier, SavingsTier::Overspending);
    assert_eq!(s.shortfall, Some(dec!(100.00)));
}

// ── Recommendation ────────────────────────────────────────────

#[test]
fn test_shortfall_present_iff_below_twenty_percent() {
    // savings 500 < 20% of 3000 = 600
    let below = summarize(&input(dec!(3000), dec!(2500), dec!(0), dec!(0), dec!(0)));
    assert_eq!(below.shortfall, Some(dec!(100.00)));

    // savings exactly 600: goal met
    let at = summarize(&input(dec!(3000), dec!(2400), dec!(0), dec!(0), dec!(0)));
    assert_eq!(at.shortfall, None);
}

#[test]
fn test_shortfall_arithmetic() {
    // recommended 640.00, savings 123.45
    let s = summarize(&input(dec!(3200), dec!(3000), dec!(50), dec!(20), dec!(6.55)));
    assert_eq!(s.savings, dec!(123.45));
    assert_eq!(s.recommended_savings, dec!(640.00));
    assert_eq!(s.shortfall, Some(dec!(516.55)));
}

#[test]
fn test_negative_expenses_propagate() {
    // Deliberately unvalidated: a negative category raises savings
    let s = summarize(&input(dec!(1000), dec!(-200), dec!(100), dec!(0), dec!(0)));
    assert_eq!(s.total_expenses, dec!(-100));
    assert_eq!(s.savings, dec!(1100));
    assert_eq!(s.tier, SavingsTier::Healthy);
}

// ── Chart series ──────────────────────────────────────────────

#[test]
fn test_series_labels_in_order() {
    let i = input(dec!(3000), dec!(1200), dec!(400), dec!(200), dec!(300));
    let s = summarize(&i);
    let labels: Vec<&str> = chart_series(&i, &s).iter().map(|c| c.label).collect();
    assert_eq!(
        labels,
        ["Housing", "Food", "Transportation", "Other Expenses", "Savings"]
    );
}

#[test]
fn test_series_amounts_match_input() {
    let i = input(dec!(3000), dec!(1200), dec!(400), dec!(200), dec!(300));
    let s = summarize(&i);
    let series = chart_series(&i, &s);
    assert_eq!(series[0].amount, dec!(1200));
    assert_eq!(series[1].amount, dec!(400));
    assert_eq!(series[2].amount, dec!(200));
    assert_eq!(series[3].amount, dec!(300));
    assert_eq!(series[4].amount, dec!(900));
}

#[test]
fn test_series_savings_clamped_at_zero() {
    let i = input(dec!(2000), dec!(1500), dec!(400), dec!(200), dec!(300));
    let s = summarize(&i);
    let series = chart_series(&i, &s);
    assert_eq!(series[4].label, "Savings");
    assert_eq!(series[4].amount, Decimal::ZERO);
}
