//! Rank anomaly detection over a log source.
//!
//! A single sequential pass: every line is parsed, matching reports are fed
//! into a fresh [`RankTable`], and each anomaly is written to the output as
//! soon as it is found.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use super::log_loader::LogLoader;
use super::log_parser::parse_rank_line;
use super::types::{DetectionSummary, RankTable};

/// Error type for detection failures.
#[derive(Debug)]
pub enum DetectError {
    /// The log could not be opened or read.
    SourceUnreadable { path: PathBuf, source: io::Error },
    /// Writing an anomaly report failed.
    Output(io::Error),
}

impl std::fmt::Display for DetectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectError::SourceUnreadable { path, source } => {
                write!(f, "Failed to read log file {}: {}", path.display(), source)
            }
            DetectError::Output(e) => write!(f, "Failed to write anomaly report: {}", e),
        }
    }
}

impl std::error::Error for DetectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DetectError::SourceUnreadable { source, .. } => Some(source),
            DetectError::Output(e) => Some(e),
        }
    }
}

/// Scan the log file at `path` and write one line per anomaly to `out`.
///
/// The file is held open only for the duration of the scan. Nothing is
/// written to `out` if the file cannot be opened.
pub fn detect_anomalies<W: Write>(path: &Path, out: &mut W) -> Result<DetectionSummary, DetectError> {
    let mut loader = LogLoader::open(path).map_err(|source| DetectError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    scan(&mut loader, out).map_err(|e| e.into_detect_error(path))
}

#[derive(Debug)]
enum ScanError {
    Read(io::Error),
    Write(io::Error),
}

impl ScanError {
    fn into_detect_error(self, path: &Path) -> DetectError {
        match self {
            ScanError::Read(source) => DetectError::SourceUnreadable {
                path: path.to_path_buf(),
                source,
            },
            ScanError::Write(e) => DetectError::Output(e),
        }
    }
}

fn scan<R: BufRead, W: Write>(loader: &mut LogLoader<R>, out: &mut W) -> Result<DetectionSummary, ScanError> {
    let mut table = RankTable::new();
    let mut summary = DetectionSummary::default();

    while let Some(line) = loader.next_line().map_err(ScanError::Read)? {
        summary.lines_read += 1;

        let Some(observation) = parse_rank_line(&line) else {
            log::trace!("Skipping line {}: {}", summary.lines_read, line);
            continue;
        };
        summary.observations += 1;

        if let Some(anomaly) = table.observe(observation) {
            summary.anomalies += 1;
            writeln!(out, "{}", anomaly).map_err(ScanError::Write)?;
        }
    }

    summary.distinct_nodes = table.node_count();
    Ok(summary)
}
