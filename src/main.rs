/*
cargo run --bin chunk_jsons -- -p chunks/recipes_

cargo run --bin chunk_jsons -- \
    -i recipes.json \
    -p chunks/recipes_ \
    -n 130
*/

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{Config, WriteLogger};

mod splitter;

use splitter::{split, SplitConfig};

/// Split one JSON array file into a fixed number of smaller array files.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Input JSON file containing a top-level array
    #[arg(short, long, default_value = "recipes.json")]
    input: PathBuf,

    /// Prefix for the output files; chunk i goes to "<PREFIX><i>.json"
    #[arg(short, long, value_name = "PREFIX")]
    prefix: String,

    /// Number of chunk files to write
    #[arg(short = 'n', long, default_value_t = 130)]
    chunks: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ----- initialise logging ----------------------------------------------
    fs::create_dir_all("logs").context("Cannot create log directory")?;
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let log_path = format!("logs/{timestamp}.log");
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(&log_path).with_context(|| format!("Cannot open {log_path}"))?,
    )
    .context("Failed to initialise logger")?;

    info!(
        "Started - input: {:?}, prefix: {:?}, chunks: {}",
        cli.input, cli.prefix, cli.chunks
    );

    // ----- split ------------------------------------------------------------
    let report = split(&SplitConfig {
        input: cli.input.clone(),
        prefix: cli.prefix,
        chunks: cli.chunks,
    })?;

    println!(
        "Split {} into {} chunks",
        cli.input.display(),
        report.files.len()
    );
    info!(
        "Finished - {} item(s) across {} file(s), chunk size {}",
        report.total_items,
        report.files.len(),
        report.chunk_size
    );

    Ok(())
}
