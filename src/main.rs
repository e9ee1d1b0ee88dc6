use anyhow::Context;
use env_logger::Builder;
use log::{LevelFilter, info};
use std::io::{self, Write};
use std::path::Path;

use crate::config::{CONFIG_FILE_NAME, MonitorConfig};

mod analyzer;
mod config;

fn main() -> anyhow::Result<()> {
    // Logging setup
    Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter(Some("rank_monitor"), LevelFilter::Info)
        .init();

    info!("Starting up");

    let config = MonitorConfig::load(Path::new(CONFIG_FILE_NAME))?;
    info!("Scanning {}", config.log_file.display());

    let mut stdout = io::stdout().lock();
    let summary = analyzer::detect_anomalies(&config.log_file, &mut stdout).context("Rank scan failed")?;
    stdout.flush()?;

    info!(
        "Scan finished: {} lines, {} rank reports from {} nodes, {} anomalies",
        summary.lines_read, summary.observations, summary.distinct_nodes, summary.anomalies
    );

    Ok(())
}
