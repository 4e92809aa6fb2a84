// Declare modules
pub mod classifier;
pub mod cli;
pub mod config;
pub mod formatter;
pub mod models;
pub mod scanner;
pub mod scrubber;

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::time::Instant;

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::OutputGenerator;
use self::scanner::Scanner;

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration (validates the scan root)
    let config = resolve_config(args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", OutputGenerator::banner(&config.root))?;

    // 3. Scan and scrub
    let started = Instant::now();
    let mut scanner = Scanner::new(&config);
    let stats = scanner.scan(&mut out)?;
    let elapsed = started.elapsed();

    if stats.files_scanned == 0 && !config.extensions.is_empty() {
        log::warn!("No files matched the extension list {:?}", config.extensions);
    }

    // 4. Report
    writeln!(
        out,
        "{}",
        OutputGenerator::summary(&stats, elapsed, config.dry_run)
    )?;

    Ok(())
}
