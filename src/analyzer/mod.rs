//! Analyzer module for rank log scanning.
//!
//! Provides functionality for:
//! - Reading a node log file line by line
//! - Extracting `Node <id> rank: <rank>` reports
//! - Reporting rank jumps between consecutive reports of the same node

pub mod detector;
pub mod log_loader;
pub mod log_parser;
pub mod types;

pub use detector::detect_anomalies;
