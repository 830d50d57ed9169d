//! Average game duration per heuristic, measured against the random baseline

use serde::Serialize;

use crate::error::{DataError, Result};
use crate::matrix::Player;

/// Average game time for one category
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimingSample {
    pub category: String,
    pub average_game_time_secs: f64,
}

/// Ordered timing samples for a heuristic playing one seat
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimingTable {
    /// Seat the heuristic occupied (the random baseline took the other one)
    pub seat: Player,
    samples: Vec<TimingSample>,
}

impl TimingTable {
    /// Build a table, rejecting negative or non-finite timings
    pub fn new(seat: Player, samples: Vec<TimingSample>) -> Result<Self> {
        if let Some(bad) = samples
            .iter()
            .find(|s| !s.average_game_time_secs.is_finite() || s.average_game_time_secs < 0.0)
        {
            return Err(DataError::InvalidTiming {
                category: bad.category.clone(),
                value: bad.average_game_time_secs,
            });
        }
        Ok(Self { seat, samples })
    }

    /// Build from `(category, seconds)` pairs
    pub fn from_pairs(seat: Player, pairs: &[(&str, f64)]) -> Result<Self> {
        let samples = pairs
            .iter()
            .map(|&(category, secs)| TimingSample {
                category: category.to_string(),
                average_game_time_secs: secs,
            })
            .collect();
        Self::new(seat, samples)
    }

    /// Samples in their original order
    pub fn samples(&self) -> &[TimingSample] {
        &self.samples
    }

    /// Largest timing in the table, 0.0 when empty
    pub fn max_secs(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.average_game_time_secs)
            .fold(0.0, f64::max)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
