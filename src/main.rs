//! Statement Engine CLI
//!
//! Loads a play catalog and an invoice from JSON files and prints the
//! rendered billing statement.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- plays.json invoice.json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` to trace per-performance pricing

use serde::de::DeserializeOwned;
use statement_engine::{
    build_statement, render_plain_text, CurrencyFormat, Invoice, PlayCatalog, Result,
    StatementError,
};
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(StatementError::MissingArgument);
    }

    let plays: PlayCatalog = load_json(&args[1])?;
    let invoice: Invoice = load_json(&args[2])?;

    let statement = build_statement(&invoice, &plays)?;
    print!("{}", render_plain_text(&statement, &CurrencyFormat::default()));

    Ok(())
}

fn load_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}
