//! Chainviz Core - tournament result data and transforms
//!
//! This crate provides the data side of the tournament charts:
//! - Outcome matrices and the Red/Blue perspective flip
//! - Win/Loss cell annotations
//! - Win-rate computation and ranking
//! - Runtime tables against the random baseline
//! - The literal tournament dataset
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 2: OutcomeMatrix::flipped, rank_by_win_rate (phases)
//! - Level 3: flip_perspective, annotate, win_rate (steps)
//! - Level 4: error types, formatting utilities

pub mod annotation;
pub mod dataset;
pub mod error;
pub mod matrix;
pub mod standings;
pub mod timing;

// Re-exports for convenient access
pub use annotation::{annotate, cell_label, CellAnnotation, LOSS_LABEL, WIN_LABEL};
pub use dataset::{TournamentDataset, HEURISTICS};
pub use error::{DataError, Result, ShapeError};
pub use matrix::{check_square, flip_perspective, Cells, Outcome, OutcomeMatrix, Player};
pub use standings::{format_win_rate, rank_by_win_rate, WinLossRecord, WinRateEntry};
pub use timing::{TimingSample, TimingTable};
