//! Type definitions specific to the analyzer module.

use std::collections::HashMap;
use std::fmt;

/// Rank change (absolute) a node may make between two observations before it
/// is reported. A change of exactly this much is still considered normal.
pub const RANK_JUMP_THRESHOLD: u64 = 10;

/// A single `Node <id> rank: <rank>` report parsed from one log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankObservation {
    pub node_id: u64,
    pub rank: u64,
}

/// A rank jump larger than [`RANK_JUMP_THRESHOLD`] between two consecutive
/// observations of the same node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anomaly {
    pub node_id: u64,
    pub previous_rank: u64,
    pub new_rank: u64,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Anomaly detected! Node {}: {} → {}", self.node_id, self.previous_rank, self.new_rank)
    }
}

/// Last seen rank per node for the duration of one detection run.
#[derive(Debug, Default)]
pub struct RankTable {
    ranks: HashMap<u64, u64>,
}

impl RankTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation, returning an anomaly if the node was already
    /// known and its rank moved by more than the threshold.
    ///
    /// The stored rank is replaced in every case, so the next observation is
    /// always compared against this one.
    pub fn observe(&mut self, observation: RankObservation) -> Option<Anomaly> {
        let previous = self.ranks.insert(observation.node_id, observation.rank);

        match previous {
            Some(previous_rank) if previous_rank.abs_diff(observation.rank) > RANK_JUMP_THRESHOLD => Some(Anomaly {
                node_id: observation.node_id,
                previous_rank,
                new_rank: observation.rank,
            }),
            Some(_) => None,
            None => {
                log::debug!("First sighting of node {} with rank {}", observation.node_id, observation.rank);
                None
            }
        }
    }

    /// Number of distinct nodes seen so far.
    pub fn node_count(&self) -> usize {
        self.ranks.len()
    }
}

/// Counters collected over one detection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectionSummary {
    pub lines_read: u64,
    pub observations: u64,
    pub distinct_nodes: usize,
    pub anomalies: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(node_id: u64, rank: u64) -> RankObservation {
        RankObservation { node_id, rank }
    }

    #[test]
    fn test_first_sighting_never_anomalous() {
        let mut table = RankTable::new();
        assert_eq!(table.observe(obs(7, 65535)), None);
        assert_eq!(table.node_count(), 1);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut table = RankTable::new();
        table.observe(obs(2, 5));
        assert_eq!(table.observe(obs(2, 15)), None);
        assert_eq!(table.observe(obs(2, 4)), Some(Anomaly { node_id: 2, previous_rank: 15, new_rank: 4 }));
    }

    #[test]
    fn test_same_rank_twice_is_quiet() {
        let mut table = RankTable::new();
        table.observe(obs(1, 300));
        assert_eq!(table.observe(obs(1, 300)), None);
    }

    #[test]
    fn test_compares_only_against_previous_observation() {
        let mut table = RankTable::new();
        table.observe(obs(4, 10));
        assert_eq!(table.observe(obs(4, 18)), None);
        // 10 -> 26 would be a jump, but 18 -> 26 is not
        assert_eq!(table.observe(obs(4, 26)), None);
        assert_eq!(table.observe(obs(4, 37)), Some(Anomaly { node_id: 4, previous_rank: 26, new_rank: 37 }));
    }

    #[test]
    fn test_table_updated_after_anomaly() {
        let mut table = RankTable::new();
        table.observe(obs(3, 100));
        assert!(table.observe(obs(3, 50)).is_some());
        assert_eq!(table.observe(obs(3, 55)), None);
        assert_eq!(table.node_count(), 1);
    }

    #[test]
    fn test_anomaly_message_order() {
        let anomaly = Anomaly { node_id: 1, previous_rank: 5, new_rank: 20 };
        assert_eq!(anomaly.to_string(), "Anomaly detected! Node 1: 5 → 20");
    }
}
