//! Render models - pure descriptions of each chart before drawing
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 2: heatmap_model, win_rate_model, runtime_model (phases)
//! - Level 3: timing_chart, bar_for (steps)
//!
//! Nothing here touches the file system or the drawing backend.

use chainviz_core::{
    annotate, format_win_rate, rank_by_win_rate, Outcome, OutcomeMatrix, Player, Result,
    TimingTable, WinLossRecord,
};
use serde::Serialize;

use crate::config::{BarStyle, ChartColor, HeatmapStyle};

/// Upper bound of the win-rate axis
pub const WIN_RATE_AXIS_MAX: f64 = 100.0;

/// Headroom above the tallest runtime bar
const RUNTIME_HEADROOM: f64 = 1.1;

/// Characters per line of a wrapped category label
pub const AXIS_LABEL_WIDTH: usize = 16;

// ============================================================================
// Heatmap model
// ============================================================================

/// What a grid cell represents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CellFill {
    Win,
    Loss,
    Undefined,
}

impl From<Option<Outcome>> for CellFill {
    fn from(cell: Option<Outcome>) -> Self {
        match cell {
            Some(Outcome::Win) => CellFill::Win,
            Some(Outcome::Loss) => CellFill::Loss,
            None => CellFill::Undefined,
        }
    }
}

/// One coloured grid cell and its optional annotation
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeatmapCell {
    pub row: usize,
    pub col: usize,
    pub fill: CellFill,
    pub color: ChartColor,
    pub label: Option<&'static str>,
}

/// Outcome grid ready to draw
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeatmapModel {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub perspective: Player,
    /// Axis labels, same order on both axes
    pub categories: Vec<String>,
    /// Row-major, N*N cells
    pub cells: Vec<HeatmapCell>,
    pub grid_line: ChartColor,
    pub text: ChartColor,
}

impl HeatmapModel {
    /// Number of categories per axis
    pub fn size(&self) -> usize {
        self.categories.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&HeatmapCell> {
        self.cells.get(row * self.size() + col)
    }

    /// Annotation text of a cell
    pub fn label_at(&self, row: usize, col: usize) -> Option<&'static str> {
        self.cell(row, col).and_then(|c| c.label)
    }
}

/// Build the grid model of an outcome matrix.
///
/// Rows are the matrix's perspective player, columns the opponent.
pub fn heatmap_model(matrix: &OutcomeMatrix, style: &HeatmapStyle) -> HeatmapModel {
    let n = matrix.size();
    let perspective = matrix.perspective();
    let opponent = perspective.opponent();

    let mut cells: Vec<HeatmapCell> = (0..n * n)
        .map(|idx| {
            let (row, col) = (idx / n, idx % n);
            let fill = if row == col {
                CellFill::Undefined
            } else {
                CellFill::from(matrix.get(row, col))
            };
            let color = match fill {
                CellFill::Win => style.win,
                CellFill::Loss => style.loss,
                CellFill::Undefined => style.undefined,
            };
            HeatmapCell {
                row,
                col,
                fill,
                color,
                label: None,
            }
        })
        .collect();

    for annotation in annotate(matrix) {
        cells[annotation.row * n + annotation.col].label = Some(annotation.label);
    }

    HeatmapModel {
        title: format!(
            "Heuristic vs. Heuristic: {} Player Win/Loss Outcome",
            perspective
        ),
        x_desc: format!("{} Player Heuristic", opponent),
        y_desc: format!("{} Player Heuristic", perspective),
        perspective,
        categories: matrix.categories().to_vec(),
        cells,
        grid_line: style.grid_line,
        text: style.text,
    }
}

// ============================================================================
// Bar chart models
// ============================================================================

/// One bar with its value label
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bar {
    pub category: String,
    pub value: f64,
    pub label: String,
    pub color: ChartColor,
}

/// Bar chart ready to draw
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarChartModel {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    /// Fixed y axis range (min, max)
    pub y_range: (f64, f64),
    /// Bars in drawing order, left to right
    pub bars: Vec<Bar>,
    /// Value label colour
    pub label_color: ChartColor,
}

impl BarChartModel {
    pub fn categories(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.category.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.value).collect()
    }
}

/// Win rates, highest first, on a fixed 0-100 axis.
///
/// Fails when any record has no games.
pub fn win_rate_model(records: &[WinLossRecord], style: &BarStyle) -> Result<BarChartModel> {
    let ranked = rank_by_win_rate(records)?;
    let count = ranked.len();

    let bars = ranked
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let label = format_win_rate(entry.win_rate);
            bar_for(entry.category, entry.win_rate, label, style, i, count)
        })
        .collect();

    Ok(BarChartModel {
        title: "Overall Win Rate of Each Heuristic Across Tournament".to_string(),
        x_desc: "Agent".to_string(),
        y_desc: "Overall Win Rate (%)".to_string(),
        y_range: (0.0, WIN_RATE_AXIS_MAX),
        bars,
        label_color: style.label,
    })
}

/// The two runtime charts of the composite figure
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RuntimeModel {
    /// Heuristic as first player (left panel)
    pub first: BarChartModel,
    /// Heuristic as second player (right panel)
    pub second: BarChartModel,
}

/// Runtime charts for the two seats. Each panel uses only its own table,
/// in the table's order.
pub fn runtime_model(
    first: &TimingTable,
    second: &TimingTable,
    first_style: &BarStyle,
    second_style: &BarStyle,
) -> RuntimeModel {
    RuntimeModel {
        first: timing_chart(first, first_style),
        second: timing_chart(second, second_style),
    }
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Single runtime panel for one seat
pub fn timing_chart(table: &TimingTable, style: &BarStyle) -> BarChartModel {
    let title = match table.seat {
        Player::Red => "Runtime: All Heuristics (Red) vs. Random (Blue)",
        Player::Blue => "Runtime: Random (Red) vs. All Heuristics (Blue)",
    };
    let count = table.len();

    let bars = table
        .samples()
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let secs = sample.average_game_time_secs;
            bar_for(sample.category.clone(), secs, format!("{:.0}s", secs), style, i, count)
        })
        .collect();

    let max = table.max_secs();
    let y_max = if max > 0.0 { max * RUNTIME_HEADROOM } else { 1.0 };

    BarChartModel {
        title: title.to_string(),
        x_desc: format!("Heuristic ({} Player)", table.seat),
        y_desc: "Average Game Time (s)".to_string(),
        y_range: (0.0, y_max),
        bars,
        label_color: style.label,
    }
}

/// Greedy word wrap into lines of at most `width` characters.
///
/// A single word longer than `width` keeps a line of its own.
pub fn wrap_label(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.chars().count() + 1 + word.chars().count() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }
    lines
}

fn bar_for(
    category: String,
    value: f64,
    label: String,
    style: &BarStyle,
    index: usize,
    count: usize,
) -> Bar {
    Bar {
        category,
        value,
        label,
        color: style.ramp.pick(index, count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Ramp;
    use chainviz_core::{DataError, TournamentDataset};

    fn dataset() -> TournamentDataset {
        TournamentDataset::chain_reaction().unwrap()
    }

    #[test]
    fn test_heatmap_labels_follow_cells() {
        let data = dataset();
        for matrix in [data.red_outcomes.clone(), data.blue_outcomes()] {
            let style = HeatmapStyle::for_perspective(matrix.perspective());
            let model = heatmap_model(&matrix, &style);
            assert_eq!(model.cells.len(), 25);

            for cell in &model.cells {
                match matrix.get(cell.row, cell.col) {
                    Some(Outcome::Win) => {
                        assert_eq!(cell.label, Some("Win"));
                        assert_eq!(cell.color, style.win);
                    }
                    Some(Outcome::Loss) => {
                        assert_eq!(cell.label, Some("Loss"));
                        assert_eq!(cell.color, style.loss);
                    }
                    None => {
                        assert_eq!(cell.label, None);
                        assert_eq!(cell.fill, CellFill::Undefined);
                    }
                }
            }
        }
    }

    #[test]
    fn test_heatmap_uses_two_outcome_colors() {
        let data = dataset();
        let style = HeatmapStyle::for_perspective(Player::Red);
        let model = heatmap_model(&data.red_outcomes, &style);

        let mut colors: Vec<String> = model
            .cells
            .iter()
            .filter(|c| c.fill != CellFill::Undefined)
            .map(|c| c.color.hex())
            .collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 2);
    }

    #[test]
    fn test_heatmap_captions_follow_perspective() {
        let data = dataset();
        let red = heatmap_model(&data.red_outcomes, &HeatmapStyle::for_perspective(Player::Red));
        let blue = heatmap_model(&data.blue_outcomes(), &HeatmapStyle::for_perspective(Player::Blue));

        assert_eq!(red.title, "Heuristic vs. Heuristic: Red Player Win/Loss Outcome");
        assert_eq!(red.x_desc, "Blue Player Heuristic");
        assert_eq!(red.y_desc, "Red Player Heuristic");
        assert_eq!(blue.title, "Heuristic vs. Heuristic: Blue Player Win/Loss Outcome");
        assert_eq!(blue.x_desc, "Red Player Heuristic");
        assert_eq!(red.categories, blue.categories);

        assert_eq!(red.label_at(0, 1), Some("Win"));
        assert_eq!(blue.label_at(1, 0), Some("Loss"));
        assert_eq!(blue.label_at(2, 2), None);
    }

    #[test]
    fn test_wrap_label() {
        assert_eq!(
            wrap_label("Chain Reaction + Conversion Potential", AXIS_LABEL_WIDTH),
            vec!["Chain Reaction +", "Conversion", "Potential"]
        );
        assert_eq!(
            wrap_label("Peripheral Control", AXIS_LABEL_WIDTH),
            vec!["Peripheral", "Control"]
        );
        assert_eq!(wrap_label("Orb Difference", AXIS_LABEL_WIDTH), vec!["Orb Difference"]);
        assert_eq!(wrap_label("Chain Reaction+", 4), vec!["Chain", "Reaction+"]);
        assert!(wrap_label("   ", AXIS_LABEL_WIDTH).is_empty());
    }

    #[test]
    fn test_every_heuristic_fits_axis_lines() {
        for name in chainviz_core::HEURISTICS {
            let lines = wrap_label(name, AXIS_LABEL_WIDTH);
            assert!(lines.len() <= 3, "{} wraps into {} lines", name, lines.len());
            for line in &lines {
                assert!(line.chars().count() <= AXIS_LABEL_WIDTH);
            }
        }
    }

    #[test]
    fn test_win_rate_model_order_and_labels() {
        let records = vec![
            WinLossRecord::new("B", 4, 4),
            WinLossRecord::new("A", 7, 1),
            WinLossRecord::new("C", 2, 6),
        ];
        let model = win_rate_model(&records, &BarStyle::new(Ramp::Viridis)).unwrap();

        assert_eq!(model.categories(), vec!["A", "B", "C"]);
        assert_eq!(model.values(), vec![87.5, 50.0, 25.0]);
        let labels: Vec<&str> = model.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["87.5%", "50.0%", "25.0%"]);
        assert_eq!(model.y_range, (0.0, 100.0));
    }

    #[test]
    fn test_win_rate_model_rejects_empty_record() {
        let records = vec![WinLossRecord::new("A", 7, 1), WinLossRecord::new("Z", 0, 0)];
        let err = win_rate_model(&records, &BarStyle::new(Ramp::Viridis)).unwrap_err();
        assert_eq!(
            err,
            DataError::InvalidRecord {
                category: "Z".to_string()
            }
        );
    }

    #[test]
    fn test_runtime_model_keeps_table_order() {
        let data = dataset();
        let config = crate::config::RenderConfig::default();
        let model = runtime_model(
            &data.red_timings,
            &data.blue_timings,
            &config.runtime_first_bars,
            &config.runtime_second_bars,
        );

        assert_eq!(model.first.values(), vec![74.0, 126.0, 106.0, 104.0, 75.0]);
        assert_eq!(model.second.values(), vec![51.0, 140.0, 50.0, 164.0, 170.0]);
        assert_eq!(model.first.categories(), model.second.categories());
        assert_eq!(model.first.x_desc, "Heuristic (Red Player)");
        assert_eq!(model.second.x_desc, "Heuristic (Blue Player)");
        assert_eq!(model.first.title, "Runtime: All Heuristics (Red) vs. Random (Blue)");
        assert_eq!(model.second.title, "Runtime: Random (Red) vs. All Heuristics (Blue)");
        assert!((model.second.y_range.1 - 187.0).abs() < 1e-9);
    }

    #[test]
    fn test_runtime_panels_are_independent() {
        let data = dataset();
        let style = BarStyle::new(Ramp::Plasma);
        let before = runtime_model(&data.red_timings, &data.blue_timings, &style, &style);

        let changed_first = TimingTable::from_pairs(
            Player::Red,
            &[("Peripheral Control", 999.0), ("Orb Difference", 1.0)],
        )
        .unwrap();
        let after = runtime_model(&changed_first, &data.blue_timings, &style, &style);

        assert_ne!(before.first, after.first);
        assert_eq!(before.second, after.second);
    }

    #[test]
    fn test_empty_timing_table() {
        let table = TimingTable::new(Player::Blue, Vec::new()).unwrap();
        let chart = timing_chart(&table, &BarStyle::new(Ramp::Cividis));
        assert!(chart.bars.is_empty());
        assert_eq!(chart.y_range, (0.0, 1.0));
    }
}
