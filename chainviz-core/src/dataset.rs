//! Tournament dataset - the measured results of the heuristic round robin

use serde::Serialize;

use crate::error::Result;
use crate::matrix::{OutcomeMatrix, Player};
use crate::standings::WinLossRecord;
use crate::timing::TimingTable;

/// Heuristics in tournament order (P, O, T, C, R)
pub const HEURISTICS: [&str; 5] = [
    "Peripheral Control",
    "Orb Difference",
    "Territory Control",
    "Cascade Potential",
    "Chain Reaction + Conversion Potential",
];

/// Shortened heuristic names used on the runtime charts
const RUNTIME_LABELS: [&str; 5] = [
    "Peripheral Control",
    "Orb Difference",
    "Territory Control",
    "Cascade Potential",
    "Chain Reaction+",
];

/// Everything the charts are drawn from
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TournamentDataset {
    /// Heuristic vs heuristic results, Red (row) perspective
    pub red_outcomes: OutcomeMatrix,
    /// Overall records, in reporting order
    pub records: Vec<WinLossRecord>,
    /// Heuristic as Red against the random player
    pub red_timings: TimingTable,
    /// Heuristic as Blue against the random player
    pub blue_timings: TimingTable,
}

impl TournamentDataset {
    /// Results of the Chain Reaction heuristic tournament
    pub fn chain_reaction() -> Result<Self> {
        const W: Option<u8> = Some(1);
        const L: Option<u8> = Some(0);
        const X: Option<u8> = None;

        let red_outcomes = OutcomeMatrix::from_bits(
            &HEURISTICS,
            &[
                &[X, W, W, W, W], // P vs (O, T, C, R)
                &[L, X, W, W, W], // O vs (P, T, C, R)
                &[L, L, X, L, W], // T vs (P, O, C, R)
                &[L, W, W, X, W], // C vs (P, O, T, R)
                &[W, W, W, L, X], // R vs (P, O, T, C)
            ],
            Player::Red,
        )?;

        let records = vec![
            WinLossRecord::new(HEURISTICS[0], 7, 1),
            WinLossRecord::new(HEURISTICS[3], 6, 2),
            WinLossRecord::new(HEURISTICS[1], 4, 4),
            WinLossRecord::new(HEURISTICS[4], 3, 5),
            WinLossRecord::new(HEURISTICS[2], 2, 6),
        ];

        let red_timings = TimingTable::from_pairs(
            Player::Red,
            &runtime_pairs([74.0, 126.0, 106.0, 104.0, 75.0]),
        )?;
        let blue_timings = TimingTable::from_pairs(
            Player::Blue,
            &runtime_pairs([51.0, 140.0, 50.0, 164.0, 170.0]),
        )?;

        Ok(Self {
            red_outcomes,
            records,
            red_timings,
            blue_timings,
        })
    }

    /// Outcome matrix seen by the Blue player
    pub fn blue_outcomes(&self) -> OutcomeMatrix {
        self.red_outcomes.flipped()
    }
}

fn runtime_pairs(secs: [f64; 5]) -> [(&'static str, f64); 5] {
    let mut pairs = [("", 0.0); 5];
    for (slot, (label, value)) in pairs.iter_mut().zip(RUNTIME_LABELS.iter().zip(secs)) {
        *slot = (*label, value);
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Outcome;
    use crate::standings::rank_by_win_rate;

    #[test]
    fn test_chain_reaction_dataset_builds() {
        let data = TournamentDataset::chain_reaction().unwrap();
        assert_eq!(data.red_outcomes.size(), 5);
        assert_eq!(data.records.len(), 5);
        assert_eq!(data.red_timings.len(), 5);
        assert_eq!(data.blue_timings.len(), 5);
        assert_eq!(data.red_timings.seat, Player::Red);
        assert_eq!(data.blue_timings.seat, Player::Blue);
    }

    #[test]
    fn test_peripheral_beats_orb_difference() {
        let data = TournamentDataset::chain_reaction().unwrap();
        assert_eq!(data.red_outcomes.get(0, 1), Some(Outcome::Win));
        let blue = data.blue_outcomes();
        assert_eq!(blue.perspective(), Player::Blue);
        assert_eq!(blue.get(1, 0), Some(Outcome::Loss));
    }

    #[test]
    fn test_records_rank_in_reported_order() {
        let data = TournamentDataset::chain_reaction().unwrap();
        let ranked = rank_by_win_rate(&data.records).unwrap();
        let rates: Vec<f64> = ranked.iter().map(|e| e.win_rate).collect();
        assert_eq!(rates, vec![87.5, 75.0, 50.0, 37.5, 25.0]);
        assert_eq!(ranked[0].category, "Peripheral Control");
        assert_eq!(ranked[4].category, "Territory Control");
    }

    #[test]
    fn test_runtime_labels_match_heuristic_order() {
        let data = TournamentDataset::chain_reaction().unwrap();
        let red: Vec<&str> = data
            .red_timings
            .samples()
            .iter()
            .map(|s| s.category.as_str())
            .collect();
        assert_eq!(red, RUNTIME_LABELS.to_vec());
        assert_eq!(data.blue_timings.samples()[4].average_game_time_secs, 170.0);
    }
}
