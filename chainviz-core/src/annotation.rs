//! Cell annotations for outcome grids
//!
//! Level 3 - maps each off-diagonal cell to its "Win"/"Loss" text.

use serde::Serialize;

use crate::matrix::{Outcome, OutcomeMatrix};

/// Text shown on a won cell
pub const WIN_LABEL: &str = "Win";
/// Text shown on a lost cell
pub const LOSS_LABEL: &str = "Loss";

/// Label placed on one grid cell
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellAnnotation {
    pub row: usize,
    pub col: usize,
    pub outcome: Outcome,
    pub label: &'static str,
}

/// Label for a single cell value. Undefined cells carry no text.
pub fn cell_label(cell: Option<Outcome>) -> Option<&'static str> {
    cell.map(outcome_label)
}

fn outcome_label(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => WIN_LABEL,
        Outcome::Loss => LOSS_LABEL,
    }
}

/// Annotate every defined off-diagonal cell exactly once, in row-major order.
pub fn annotate(matrix: &OutcomeMatrix) -> Vec<CellAnnotation> {
    let n = matrix.size();
    let mut annotations = Vec::with_capacity(n * n.saturating_sub(1));

    for row in 0..n {
        for col in 0..n {
            if row == col {
                continue;
            }
            if let Some(outcome) = matrix.get(row, col) {
                annotations.push(CellAnnotation {
                    row,
                    col,
                    outcome,
                    label: outcome_label(outcome),
                });
            }
        }
    }

    annotations
}
