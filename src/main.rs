mod calc;
mod models;
mod report;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => run::as_tui(),
        _ => run::as_cli(&args),
    }
}
