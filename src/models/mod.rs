mod chart;
mod input;
mod money;
mod summary;

pub use chart::ChartSlice;
pub use input::BudgetInput;
pub use money::format_amount;
pub use summary::{BudgetSummary, SavingsTier};
