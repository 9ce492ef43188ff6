//! High score leaderboard
//!
//! In-memory only: the core keeps no persisted state. Runs are ranked by
//! score, with the level reached and the run length breaking ties; entries
//! record the simulation tick at which the run ended rather than wall-clock
//! time, so the board stays deterministic alongside the rest of the session.

use serde::{Deserialize, Serialize};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A finished run on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Level reached when the run ended
    pub level: u32,
    /// Simulation tick at which the run ended
    pub tick: u64,
}

impl HighScoreEntry {
    /// Board ordering: higher score first, a deeper level breaks score ties,
    /// and between otherwise equal runs the shorter one ranks higher
    fn beats(&self, other: &HighScoreEntry) -> bool {
        (self.score, self.level, other.tick) > (other.score, other.level, self.tick)
    }
}

/// High score leaderboard, best run first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Rank a finished run would take, 1-indexed. Scoreless runs and runs
    /// that fall off the bottom of a full board don't rank.
    pub fn potential_rank(&self, entry: &HighScoreEntry) -> Option<usize> {
        if entry.score == 0 {
            return None;
        }
        let rank = self.entries.iter().take_while(|e| !entry.beats(e)).count();
        if rank < MAX_HIGH_SCORES {
            Some(rank + 1)
        } else {
            None
        }
    }

    /// Record a finished run. Returns the rank it entered at (1-indexed),
    /// or None if it didn't make the board.
    pub fn add_score(&mut self, score: u64, level: u32, tick: u64) -> Option<usize> {
        let entry = HighScoreEntry { score, level, tick };
        let rank = self.potential_rank(&entry)?;
        self.entries.insert(rank - 1, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoreless_run_never_ranks() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(0, 1, 500), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_runs_rank_by_score() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score(30, 1, 100), Some(1));
        assert_eq!(scores.add_score(50, 1, 200), Some(1));
        assert_eq!(scores.add_score(40, 1, 300), Some(2));

        assert_eq!(scores.top_score(), Some(50));
        let ordered: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(ordered, vec![50, 40, 30]);
    }

    #[test]
    fn test_level_then_run_length_break_score_ties() {
        let mut scores = HighScores::new();
        scores.add_score(50, 1, 900);
        // Same score, deeper level goes above
        assert_eq!(scores.add_score(50, 2, 1200), Some(1));
        // Same score and level, the shorter run goes above
        assert_eq!(scores.add_score(50, 2, 800), Some(1));

        let ticks: Vec<u64> = scores.entries.iter().map(|e| e.tick).collect();
        assert_eq!(ticks, vec![800, 1200, 900]);
    }

    #[test]
    fn test_board_truncates_at_capacity() {
        let mut scores = HighScores::new();
        for i in 1..=MAX_HIGH_SCORES as u64 {
            scores.add_score(i * 10, 1, i);
        }
        assert_eq!(scores.add_score(5, 1, 99), None);

        assert_eq!(scores.add_score(65, 1, 100), Some(5));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        // The old lowest entry fell off
        assert_eq!(scores.entries.last().unwrap().score, 20);
    }

    #[test]
    fn test_tie_with_the_last_entry_of_a_full_board_misses() {
        let mut scores = HighScores::new();
        for i in 1..=MAX_HIGH_SCORES as u64 {
            scores.add_score(i * 10, 1, i);
        }
        // Equal on every axis to the current last entry: no rank
        let last = *scores.entries.last().unwrap();
        assert_eq!(scores.add_score(last.score, last.level, last.tick + 1), None);
    }
}
