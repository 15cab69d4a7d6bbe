//! High score table
//!
//! The persistence collaborator for round-over hand-offs: the caller feeds
//! it a (name, score) pair when a round ends. Keeps the top 10, sorted
//! descending, persisted as JSON.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Player's name (short, render-sink sized)
    pub name: String,
    /// Final round score
    pub score: u32,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<ScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the table. Zero never qualifies.
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Record a round result. Returns the rank achieved (1-indexed) or
    /// None if the score didn't qualify.
    pub fn record_result(&mut self, name: &str, score: u32) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let entry = ScoreEntry {
            name: name.to_string(),
            score,
        };

        // Insertion point, sorted descending by score
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Load the table from a JSON file; missing or corrupt files yield an
    /// empty table.
    pub fn load(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("Loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(e) => {
                    log::warn!("Bad high score file {}: {e}", path.display());
                    Self::new()
                }
            },
            Err(_) => {
                log::info!("No high scores found, starting fresh");
                Self::new()
            }
        }
    }

    /// Save the table as JSON; failures are logged, not propagated
    pub fn save(&self, path: &std::path::Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to save high scores to {}: {e}", path.display());
                } else {
                    log::info!("High scores saved ({} entries)", self.entries.len());
                }
            }
            Err(e) => log::warn!("Failed to serialize high scores: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_score_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(10));
    }

    #[test]
    fn test_record_keeps_descending_order() {
        let mut scores = HighScores::new();
        assert_eq!(scores.record_result("AAA", 100), Some(1));
        assert_eq!(scores.record_result("BBB", 300), Some(1));
        assert_eq!(scores.record_result("CCC", 200), Some(2));

        let values: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(values, vec![300, 200, 100]);
        assert_eq!(scores.top_score(), Some(300));
    }

    #[test]
    fn test_table_truncates_at_capacity() {
        let mut scores = HighScores::new();
        for i in 1..=MAX_HIGH_SCORES as u32 + 5 {
            scores.record_result("P", i * 10);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);

        // Too low to displace anything
        let cutoff = scores.entries.last().unwrap().score;
        assert!(!scores.qualifies(cutoff));
        assert_eq!(scores.record_result("Q", cutoff), None);
    }

    #[test]
    fn test_tie_ranks_below_existing_entry() {
        let mut scores = HighScores::new();
        scores.record_result("AAA", 100);
        // Equal score goes after the earlier holder
        assert_eq!(scores.record_result("BBB", 100), Some(2));
    }
}
