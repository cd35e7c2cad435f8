use rust_decimal::Decimal;

use super::money::format_amount;

/// Savings-health classification derived from savings relative to income.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavingsTier {
    /// Expenses exceed income.
    Overspending,
    /// Saving, but less than 10% of income.
    Low,
    /// Saving at least 10% of income.
    Healthy,
}

impl SavingsTier {
    pub fn message(self) -> &'static str {
        match self {
            Self::Overspending => {
                "You are spending more than you earn. Consider reducing expenses."
            }
            Self::Low => "You are saving a little. Try to increase savings.",
            Self::Healthy => "Great! You are saving a healthy amount.",
        }
    }
}

impl std::fmt::Display for SavingsTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overspending => write!(f, "Overspending"),
            Self::Low => write!(f, "Low Savings"),
            Self::Healthy => write!(f, "Healthy Savings"),
        }
    }
}

/// Derived monthly budget figures. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSummary {
    pub income: Decimal,
    pub total_expenses: Decimal,
    /// May be negative when overspending.
    pub savings: Decimal,
    pub tier: SavingsTier,
    /// 20% of income.
    pub recommended_savings: Decimal,
    /// `recommended_savings - savings` when the 20% target is unmet.
    pub shortfall: Option<Decimal>,
}

impl BudgetSummary {
    /// The summary as ordered plain-text lines. Blank lines separate the
    /// figures, the tier message, and the recommendation block; renderers
    /// that want tighter output filter them out.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Monthly Income: {}", format_amount(self.income)),
            format!("Total Expenses: {}", format_amount(self.total_expenses)),
            format!("Remaining (Savings): {}", format_amount(self.savings)),
            String::new(),
            self.tier.message().to_string(),
            String::new(),
        ];

        if let Some(needed) = self.shortfall {
            lines.push(format!(
                "Goal Recommendation: Try to save ~20% ({}).",
                format_amount(self.recommended_savings)
            ));
            lines.push(format!(
                "To meet this goal, reduce expenses by about {}.",
                format_amount(needed)
            ));
        } else {
            lines.push("You are meeting the recommended 20% savings threshold.".to_string());
        }

        lines
    }
}
