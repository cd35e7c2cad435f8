use rust_decimal::Decimal;

/// One month of budget figures as entered by the user.
///
/// Amounts are not validated: negative values are accepted and flow through
/// the calculation unchanged. The interactive form clamps its sliders to
/// non-negative ranges, but callers feeding this struct directly (CLI args,
/// tests) may pass anything that parses as a decimal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetInput {
    pub income: Decimal,
    pub housing: Decimal,
    pub food: Decimal,
    pub transport: Decimal,
    pub other: Decimal,
}

impl BudgetInput {
    pub fn new(
        income: Decimal,
        housing: Decimal,
        food: Decimal,
        transport: Decimal,
        other: Decimal,
    ) -> Self {
        Self {
            income,
            housing,
            food,
            transport,
            other,
        }
    }
}
