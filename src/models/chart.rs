use rust_decimal::Decimal;

/// One labeled magnitude of the budget breakdown chart.
///
/// The core emits these as plain data; the frontend decides how to draw them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSlice {
    pub label: &'static str,
    /// Never negative; the savings slice is clamped at zero.
    pub amount: Decimal,
}

impl ChartSlice {
    pub fn new(label: &'static str, amount: Decimal) -> Self {
        Self { label, amount }
    }
}
