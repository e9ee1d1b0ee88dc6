//! Parse individual log lines and extract rank reports.
//!
//! Only one line format is recognised, anywhere within the line:
//!
//! ```text
//! 00:12.345  ID:3  Node 3 rank: 512
//! ```

use regex::Regex;
use std::sync::LazyLock;

use super::types::RankObservation;

static RANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Node ([0-9]+) rank: ([0-9]+)").expect("rank line pattern is valid"));

/// Parse a log line and extract the first rank report it contains.
///
/// # Returns
///
/// `Some(observation)` if the line carries a `Node <id> rank: <rank>` report,
/// `None` for any other line. A report whose numbers do not fit in `u64` is
/// also treated as unparseable.
pub fn parse_rank_line(line: &str) -> Option<RankObservation> {
    let captures = RANK_LINE.captures(line)?;

    let node_id = captures[1].parse::<u64>();
    let rank = captures[2].parse::<u64>();

    match (node_id, rank) {
        (Ok(node_id), Ok(rank)) => Some(RankObservation { node_id, rank }),
        _ => {
            log::warn!("Rank report out of range, skipping: {}", line);
            None
        }
    }
}
