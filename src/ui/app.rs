use anyhow::Result;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::calc;
use crate::models::{BudgetInput, BudgetSummary, ChartSlice};
use crate::report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

/// Static description of one form field: label and slider range, in whole
/// dollars. Exact entry may land between steps; the range still clamps it.
pub(crate) struct FieldSpec {
    pub(crate) label: &'static str,
    pub(crate) min: i64,
    pub(crate) max: i64,
    pub(crate) step: i64,
    pub(crate) default: i64,
}

pub(crate) const FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        label: "Monthly Income",
        min: 1000,
        max: 10000,
        step: 100,
        default: 3000,
    },
    FieldSpec {
        label: "Housing / Rent",
        min: 0,
        max: 6000,
        step: 50,
        default: 1200,
    },
    FieldSpec {
        label: "Food",
        min: 0,
        max: 2000,
        step: 25,
        default: 400,
    },
    FieldSpec {
        label: "Transportation",
        min: 0,
        max: 1000,
        step: 25,
        default: 200,
    },
    FieldSpec {
        label: "Other Expenses",
        min: 0,
        max: 2000,
        step: 25,
        default: 300,
    },
];

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) focus: usize,
    pub(crate) values: [Decimal; 5],
    pub(crate) edit_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    // Derived on every value change; the PDF only on request.
    pub(crate) summary: BudgetSummary,
    pub(crate) series: Vec<ChartSlice>,
    /// Path of the last generated report. At most one report file exists at
    /// a time; regeneration deletes the previous one first.
    pub(crate) report_path: Option<PathBuf>,
}

impl App {
    pub(crate) fn new() -> Self {
        let values = FIELDS.map(|f| Decimal::from(f.default));
        let input = build_input(&values);
        let summary = calc::summarize(&input);
        let series = calc::chart_series(&input, &summary);

        Self {
            running: true,
            input_mode: InputMode::Normal,
            focus: 0,
            values,
            edit_input: String::new(),
            status_message: String::from("Adjust values with ←/→, press g to generate the PDF report"),
            show_help: false,
            summary,
            series,
            report_path: None,
        }
    }

    pub(crate) fn input(&self) -> BudgetInput {
        build_input(&self.values)
    }

    pub(crate) fn recalculate(&mut self) {
        let input = self.input();
        self.summary = calc::summarize(&input);
        self.series = calc::chart_series(&input, &self.summary);
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    pub(crate) fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FIELDS.len();
    }

    pub(crate) fn focus_prev(&mut self) {
        self.focus = (self.focus + FIELDS.len() - 1) % FIELDS.len();
    }

    /// Nudge the focused field by its step (x10 when `big`), clamped to the
    /// field's range.
    pub(crate) fn adjust_focused(&mut self, direction: i64, big: bool) {
        let spec = &FIELDS[self.focus];
        let mult = if big { 10 } else { 1 };
        let delta = Decimal::from(direction * spec.step * mult);
        let min = Decimal::from(spec.min);
        let max = Decimal::from(spec.max);
        self.values[self.focus] = (self.values[self.focus] + delta).clamp(min, max);
        self.recalculate();
    }

    pub(crate) fn begin_edit(&mut self) {
        self.input_mode = InputMode::Editing;
        self.edit_input.clear();
        let spec = &FIELDS[self.focus];
        self.set_status(format!(
            "Enter amount for {} ({}-{}), Esc to cancel",
            spec.label, spec.min, spec.max
        ));
    }

    pub(crate) fn cancel_edit(&mut self) {
        self.input_mode = InputMode::Normal;
        self.edit_input.clear();
        self.set_status("Edit cancelled");
    }

    /// Parse the edit buffer as an exact amount for the focused field.
    /// Parse failures land in the status bar and leave the value unchanged.
    pub(crate) fn commit_edit(&mut self) {
        let raw = self.edit_input.trim().trim_start_matches('$').replace(',', "");
        match raw.parse::<Decimal>() {
            Ok(amount) => {
                let spec = &FIELDS[self.focus];
                let clamped = amount.clamp(Decimal::from(spec.min), Decimal::from(spec.max));
                self.values[self.focus] = clamped;
                self.input_mode = InputMode::Normal;
                self.edit_input.clear();
                self.recalculate();
                if clamped == amount {
                    self.set_status(format!("{} updated", spec.label));
                } else {
                    self.set_status(format!(
                        "{} clamped to range {}-{}",
                        spec.label, spec.min, spec.max
                    ));
                }
            }
            Err(_) => {
                self.set_status(format!("Invalid amount: '{}'", self.edit_input.trim()));
            }
        }
    }

    /// Write the current summary to a fresh temp PDF, replacing any report
    /// from an earlier press. The last report is left on disk for the user.
    pub(crate) fn generate_report(&mut self) -> Result<()> {
        if let Some(old) = self.report_path.take() {
            let _ = std::fs::remove_file(&old);
        }

        let tmp = tempfile::Builder::new()
            .prefix("budgetplan-")
            .suffix(".pdf")
            .tempfile()?;
        let path = tmp.into_temp_path().keep()?;

        report::write_report(&self.summary.lines(), &path)?;
        self.set_status(format!("Report saved to {}", path.display()));
        self.report_path = Some(path);
        Ok(())
    }
}

fn build_input(values: &[Decimal; 5]) -> BudgetInput {
    BudgetInput::new(values[0], values[1], values[2], values[3], values[4])
}
