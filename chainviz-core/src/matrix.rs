//! Outcome matrix - pairwise head-to-head results and the perspective flip
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 2: OutcomeMatrix::new, OutcomeMatrix::flipped (phases)
//! - Level 3: flip_perspective, check_square (steps)
//! - Level 4: Outcome / Player utilities

use serde::Serialize;

use crate::error::{Result, ShapeError};

/// Raw cell grid, row-major. `None` marks an undefined cell.
pub type Cells = Vec<Vec<Option<Outcome>>>;

/// Result of one pairing from the row player's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Outcome {
    /// Row player lost (0)
    Loss,
    /// Row player won (1)
    Win,
}

impl Outcome {
    /// The same game seen from the other side
    pub fn complement(self) -> Self {
        match self {
            Outcome::Loss => Outcome::Win,
            Outcome::Win => Outcome::Loss,
        }
    }

    /// Build from the binary encoding used by the result tables
    pub fn from_bit(bit: u8) -> Option<Self> {
        match bit {
            0 => Some(Outcome::Loss),
            1 => Some(Outcome::Win),
            _ => None,
        }
    }

    pub fn as_bit(self) -> u8 {
        match self {
            Outcome::Loss => 0,
            Outcome::Win => 1,
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> u8 {
        outcome.as_bit()
    }
}

/// Seat in a Chain Reaction game. Red moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Display name ("Red" / "Blue")
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Blue => "Blue",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Square table of head-to-head outcomes between named categories.
///
/// Rows are the `perspective` player's category, columns the opponent's.
/// The diagonal is always undefined (no self-play).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutcomeMatrix {
    categories: Vec<String>,
    cells: Cells,
    perspective: Player,
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

impl OutcomeMatrix {
    /// Validate and build a matrix.
    ///
    /// Fails with a shape error when the grid is not square, when the label
    /// count does not match, or when a diagonal cell carries a value.
    pub fn new(categories: Vec<String>, cells: Cells, perspective: Player) -> Result<Self> {
        check_square(&cells)?;

        if categories.len() != cells.len() {
            return Err(ShapeError::LabelCount {
                expected: cells.len(),
                found: categories.len(),
            }
            .into());
        }

        if let Some(index) = (0..cells.len()).find(|&i| cells[i][i].is_some()) {
            return Err(ShapeError::DiagonalDefined { index }.into());
        }

        Ok(Self {
            categories,
            cells,
            perspective,
        })
    }

    /// Build from binary rows where `None` is the undefined cell.
    ///
    /// Any value other than 0 or 1 is rejected, diagonal included.
    pub fn from_bits(
        categories: &[&str],
        rows: &[&[Option<u8>]],
        perspective: Player,
    ) -> Result<Self> {
        let cells = rows
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(|(col, value)| decode_bit(row, col, *value))
                    .collect::<std::result::Result<Vec<_>, ShapeError>>()
            })
            .collect::<std::result::Result<Cells, ShapeError>>()?;
        let categories = categories.iter().map(|s| s.to_string()).collect();
        Self::new(categories, cells, perspective)
    }

    /// The same tournament from the opponent's perspective.
    ///
    /// `flipped()[j][i]` is the complement of `self[i][j]`.
    pub fn flipped(&self) -> Self {
        let n = self.size();
        let cells = (0..n)
            .map(|i| (0..n).map(|j| flip_cell(&self.cells, i, j)).collect())
            .collect();

        let perspective = self.perspective.opponent();
        tracing::debug!("Flipped {}x{} outcome matrix to {} perspective", n, n, perspective);

        Self {
            categories: self.categories.clone(),
            cells,
            perspective,
        }
    }

    /// Number of categories (N)
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn perspective(&self) -> Player {
        self.perspective
    }

    /// Cell (row, col), `None` when undefined or out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Outcome> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Transpose and complement a raw grid.
///
/// Works for any N; undefined cells stay undefined and the diagonal of the
/// result is always undefined. Non-square input is rejected.
pub fn flip_perspective(cells: &[Vec<Option<Outcome>>]) -> Result<Cells> {
    check_square(cells)?;

    let n = cells.len();
    Ok((0..n)
        .map(|i| (0..n).map(|j| flip_cell(cells, i, j)).collect())
        .collect())
}

/// Ensure every row has as many cells as there are rows
pub fn check_square(cells: &[Vec<Option<Outcome>>]) -> std::result::Result<(), ShapeError> {
    let n = cells.len();
    match cells.iter().position(|row| row.len() != n) {
        Some(row) => Err(ShapeError::NotSquare {
            row,
            expected: n,
            found: cells[row].len(),
        }),
        None => Ok(()),
    }
}

// ============================================================================
// Level 4 - Utilities
// ============================================================================

fn decode_bit(
    row: usize,
    col: usize,
    value: Option<u8>,
) -> std::result::Result<Option<Outcome>, ShapeError> {
    match value {
        None => Ok(None),
        Some(bit) => Outcome::from_bit(bit)
            .map(Some)
            .ok_or(ShapeError::InvalidCell {
                row,
                col,
                value: bit,
            }),
    }
}

fn flip_cell(cells: &[Vec<Option<Outcome>>], i: usize, j: usize) -> Option<Outcome> {
    if i == j {
        None
    } else {
        cells[j][i].map(Outcome::complement)
    }
}
