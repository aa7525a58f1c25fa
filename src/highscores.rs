//! High score leaderboard
//!
//! Tracks the ten fastest human wins. Fewer seconds is a better score.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub name: String,
    /// Match duration in seconds
    pub seconds: f64,
}

/// High score leaderboard, fastest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a duration makes it onto the leaderboard
    pub fn qualifies(&self, seconds: f64) -> bool {
        if !seconds.is_finite() || seconds <= 0.0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().is_none_or(|e| seconds < e.seconds)
    }

    /// Rank a duration would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, seconds: f64) -> Option<usize> {
        if !self.qualifies(seconds) {
            return None;
        }
        let rank = self.entries.iter().position(|e| seconds < e.seconds);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a result if it qualifies; returns the rank achieved
    pub fn add_score(&mut self, name: &str, seconds: f64) -> Option<usize> {
        let rank = self.potential_rank(seconds)?;
        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                name: name.to_string(),
                seconds,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fastest win so far
    pub fn best(&self) -> Option<f64> {
        self.entries.first().map(|e| e.seconds)
    }

    /// Load the leaderboard; a missing file is an empty leaderboard
    pub fn load(path: &Path) -> Result<Self> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No high scores at {}, starting fresh", path.display());
                return Ok(Self::new());
            }
            Err(source) => {
                return Err(Error::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let scores: Self = serde_json::from_str(&json).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded {} high scores", scores.entries.len());
        Ok(scores)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("High scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}

/// Format a duration as `m:ss.s`
pub fn format_duration(seconds: f64) -> String {
    let minutes = (seconds / 60.0).floor() as u64;
    format!("{}:{:04.1}", minutes, seconds - minutes as f64 * 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faster_ranks_higher() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score("slow", 300.0), Some(1));
        assert_eq!(scores.add_score("fast", 120.0), Some(1));
        assert_eq!(scores.add_score("middle", 200.0), Some(2));

        let names: Vec<_> = scores.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["fast", "middle", "slow"]);
        assert_eq!(scores.best(), Some(120.0));
    }

    #[test]
    fn test_full_board_rejects_slow_result() {
        let mut scores = HighScores::new();
        for i in 0..MAX_HIGH_SCORES {
            scores.add_score("p", 100.0 + i as f64);
        }
        assert!(!scores.qualifies(500.0));
        assert_eq!(scores.add_score("late", 500.0), None);
        assert_eq!(scores.potential_rank(50.0), Some(1));

        assert_eq!(scores.add_score("quick", 105.5), Some(7));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.seconds), Some(108.0));
    }

    #[test]
    fn test_nonsense_durations_never_qualify() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0.0));
        assert!(!scores.qualifies(-3.0));
        assert!(!scores.qualifies(f64::NAN));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(75.3), "1:15.3");
        assert_eq!(format_duration(9.0), "0:09.0");
    }

    #[test]
    fn test_missing_file_is_empty() {
        let scores = HighScores::load(Path::new("/nonexistent/fussball-scores.json")).unwrap();
        assert!(scores.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let path =
            std::env::temp_dir().join(format!("fussball-scores-{}.json", std::process::id()));
        let mut scores = HighScores::new();
        scores.add_score("Ada", 93.5);
        scores.save(&path).unwrap();
        let loaded = HighScores::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, scores);
    }
}
