//! icon-extract CLI entrypoint

use anyhow::Result;

use icon_extract::extract::{self, INPUT_FILE, OUTPUT_FILE};
use icon_extract::output;

fn run() -> Result<()> {
    let stats = extract::extract_icon_names(INPUT_FILE, OUTPUT_FILE)?;

    // Summary contract: count and destination on stdout
    println!(
        "{} nomes de ícones extraídos para {}.",
        stats.names_written, OUTPUT_FILE
    );

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        // Display error in red with clean formatting
        output::error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}
