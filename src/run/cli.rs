use anyhow::Result;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::calc;
use crate::models::BudgetInput;
use crate::report;

const AMOUNT_NAMES: [&str; 5] = ["income", "housing", "food", "transport", "other"];

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[1].as_str() {
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("budgetplan {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => cli_plan(&args[1..]),
    }
}

fn print_usage() {
    println!("Budgetplan — personal budget planner with PDF reports");
    println!();
    println!("Usage: budgetplan [amounts]");
    println!();
    println!("  (none)                        Launch interactive TUI");
    println!("  <income> <housing> <food> <transport> <other>");
    println!("                                Print a budget summary and write the PDF report");
    println!("    --out <path>                Report path (default: budget_report.pdf)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_plan(args: &[String]) -> Result<()> {
    // Parse --out flag
    let out_path = args
        .windows(2)
        .find(|w| w[0] == "--out")
        .map(|w| PathBuf::from(&w[1]));

    // Everything that isn't the --out pair is a positional amount
    let mut amounts: Vec<&String> = Vec::new();
    let mut skip = false;
    for arg in args {
        if skip {
            skip = false;
            continue;
        }
        if arg == "--out" {
            skip = true;
            continue;
        }
        amounts.push(arg);
    }

    if amounts.len() != 5 {
        print_usage();
        anyhow::bail!(
            "Expected five amounts (income housing food transport other), got {}",
            amounts.len()
        );
    }

    let mut parsed = [Decimal::ZERO; 5];
    for (slot, (name, raw)) in parsed.iter_mut().zip(AMOUNT_NAMES.iter().zip(&amounts)) {
        *slot = raw
            .parse::<Decimal>()
            .map_err(|_| anyhow::anyhow!("Invalid {name} amount: '{raw}'"))?;
    }

    let input = BudgetInput::new(parsed[0], parsed[1], parsed[2], parsed[3], parsed[4]);
    let summary = calc::summarize(&input);

    for line in summary.lines() {
        println!("{line}");
    }

    let path = out_path.unwrap_or_else(|| PathBuf::from("budget_report.pdf"));
    report::write_report(&summary.lines(), &path)?;
    println!();
    println!("Report written to {}", path.display());

    Ok(())
}
