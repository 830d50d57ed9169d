//! Win/loss records and win-rate ranking
//!
//! Level 2 - rank_by_win_rate (phase)
//! Level 3 - WinLossRecord::win_rate, format_win_rate (steps)

use serde::Serialize;

use crate::error::{DataError, Result};

/// Overall record of one category across the tournament
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WinLossRecord {
    /// Name of the heuristic
    pub category: String,
    /// Total wins
    pub wins: u32,
    /// Total losses
    pub losses: u32,
}

impl WinLossRecord {
    pub fn new(category: impl Into<String>, wins: u32, losses: u32) -> Self {
        Self {
            category: category.into(),
            wins,
            losses,
        }
    }

    /// Games played, widened so the sum cannot overflow
    pub fn games_played(&self) -> u64 {
        u64::from(self.wins) + u64::from(self.losses)
    }

    /// Win rate as a percentage (0.0 to 100.0).
    ///
    /// A record with no games has no win rate and is rejected.
    pub fn win_rate(&self) -> Result<f64> {
        let games = self.games_played();
        if games == 0 {
            return Err(DataError::InvalidRecord {
                category: self.category.clone(),
            });
        }
        Ok(f64::from(self.wins) / games as f64 * 100.0)
    }
}

/// A record with its computed win rate
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WinRateEntry {
    pub category: String,
    pub wins: u32,
    pub losses: u32,
    /// Percentage (0.0 to 100.0)
    pub win_rate: f64,
}

/// Compute every win rate and sort descending.
///
/// The sort is stable: records with equal rates keep their input order.
pub fn rank_by_win_rate(records: &[WinLossRecord]) -> Result<Vec<WinRateEntry>> {
    let mut entries = records
        .iter()
        .map(|record| {
            Ok(WinRateEntry {
                category: record.category.clone(),
                wins: record.wins,
                losses: record.losses,
                win_rate: record.win_rate()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    entries.sort_by(|a, b| {
        b.win_rate
            .partial_cmp(&a.win_rate)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(top) = entries.first() {
        tracing::debug!(
            "Ranked {} records, leader {} at {:.1}%",
            entries.len(),
            top.category,
            top.win_rate
        );
    }

    Ok(entries)
}

/// Format a percentage with one decimal, e.g. `87.5%`
pub fn format_win_rate(rate: f64) -> String {
    format!("{:.1}%", rate)
}
