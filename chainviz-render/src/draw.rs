//! Drawing - rasterize render models with plotters
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 2: export_heatmap, export_win_rate, export_runtime (phases)
//! - Level 3: draw_heatmap, draw_bar_chart (steps, any backend)
//! - Level 4: bar axis layout, multi-line labels, colour conversion

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontStyle;

use crate::config::{ChartColor, RenderConfig, HEATMAP_SIZE, RUNTIME_SIZE, WIN_RATE_SIZE};
use crate::error::Result;
use crate::model::{wrap_label, BarChartModel, HeatmapModel, RuntimeModel, AXIS_LABEL_WIDTH};

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Draw an outcome grid and write it to `path`, replacing any existing file
pub fn export_heatmap(model: &HeatmapModel, path: &Path, config: &RenderConfig) -> Result<()> {
    let root = BitMapBackend::new(path, config.figure(HEATMAP_SIZE)).into_drawing_area();
    draw_heatmap(&root, model, config)?;
    root.present()?;

    tracing::info!("Wrote {} outcome grid to {}", model.perspective, path.display());
    Ok(())
}

/// Draw the win-rate chart and write it to `path`
pub fn export_win_rate(model: &BarChartModel, path: &Path, config: &RenderConfig) -> Result<()> {
    let root = BitMapBackend::new(path, config.figure(WIN_RATE_SIZE)).into_drawing_area();
    draw_bar_chart(&root, model, config)?;
    root.present()?;

    tracing::info!("Wrote win rate chart to {}", path.display());
    Ok(())
}

/// Draw both runtime panels side by side and write them to `path`
pub fn export_runtime(model: &RuntimeModel, path: &Path, config: &RenderConfig) -> Result<()> {
    let root = BitMapBackend::new(path, config.figure(RUNTIME_SIZE)).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((1, 2));
    draw_bar_chart(&panels[0], &model.first, config)?;
    draw_bar_chart(&panels[1], &model.second, config)?;
    root.present()?;

    tracing::info!("Wrote runtime charts to {}", path.display());
    Ok(())
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Draw a coloured N×N grid with one annotation per labelled cell.
///
/// Row 0 is at the top; both axes list the categories in model order,
/// wrapped onto several lines when long.
pub fn draw_heatmap<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    model: &HeatmapModel,
    config: &RenderConfig,
) -> Result<()> {
    area.fill(&WHITE)?;

    let n = model.size() as i32;
    if n == 0 {
        area.titled(&model.title, config.font(28))?;
        return Ok(());
    }

    let mut chart = ChartBuilder::on(area)
        .caption(&model.title, config.font(28))
        .margin(config.size(20))
        .x_label_area_size(config.size(100))
        .y_label_area_size(config.size(170))
        .build_cartesian_2d(0i32..n, n..0i32)?;

    let (width, height) = chart.plotting_area().dim_in_pixel();
    let cell_w = width as i32 / n;
    let cell_h = height as i32 / n;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(n as usize + 1)
        .y_labels(n as usize + 1)
        .x_label_formatter(&|_: &i32| String::new())
        .y_label_formatter(&|_: &i32| String::new())
        .x_desc(model.x_desc.as_str())
        .y_desc(model.y_desc.as_str())
        .axis_desc_style(config.font(16))
        .draw()?;

    chart.draw_series(model.cells.iter().map(|cell| {
        let (x, y) = (cell.col as i32, cell.row as i32);
        Rectangle::new([(x, y), (x + 1, y + 1)], rgb(cell.color).filled())
    }))?;

    let grid_line = rgb(model.grid_line);
    chart.draw_series(model.cells.iter().map(|cell| {
        let (x, y) = (cell.col as i32, cell.row as i32);
        Rectangle::new([(x, y), (x + 1, y + 1)], grid_line.stroke_width(config.px(3)))
    }))?;

    let text_color = rgb(model.text);
    let text_style = config
        .font(16)
        .into_font()
        .color(&text_color)
        .pos(Pos::new(HPos::Center, VPos::Center));

    chart.draw_series(model.cells.iter().filter_map(|cell| {
        cell.label.map(|label| {
            EmptyElement::at((cell.col as i32, cell.row as i32))
                + Text::new(label, (cell_w / 2, cell_h / 2), text_style.clone())
        })
    }))?;

    // Category labels, drawn by hand so they can span several lines
    let base = area.get_base_pixel();
    let gap = config.size(8);
    let line_height = config.size(16);
    let label_font = config.font(13).into_font().color(&text_color);
    let under = label_font.pos(Pos::new(HPos::Center, VPos::Top));
    let beside = label_font.pos(Pos::new(HPos::Right, VPos::Center));

    for (i, category) in model.categories.iter().enumerate() {
        let lines = wrap_label(category, AXIS_LABEL_WIDTH);
        let i = i as i32;

        let (left, bottom) = chart.backend_coord(&(i, n));
        let (right, _) = chart.backend_coord(&(i + 1, n));
        let column = ((left + right) / 2 - base.0, bottom - base.1 + gap);
        draw_lines(area, &lines, column, line_height, &under)?;

        let (edge, top) = chart.backend_coord(&(0, i));
        let (_, lower) = chart.backend_coord(&(0, i + 1));
        let first = (top + lower) / 2 - (lines.len() as i32 - 1) * line_height / 2;
        draw_lines(area, &lines, (edge - base.0 - gap, first - base.1), line_height, &beside)?;
    }

    Ok(())
}

/// Draw a bar chart with each value label just inside the top of its bar
pub fn draw_bar_chart<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    model: &BarChartModel,
    config: &RenderConfig,
) -> Result<()> {
    area.fill(&WHITE)?;

    let n = model.bars.len();
    if n == 0 {
        area.titled(&model.title, config.font(22))?;
        return Ok(());
    }

    let (y_min, y_max) = model.y_range;
    let mut chart = ChartBuilder::on(area)
        .caption(&model.title, config.font(22))
        .margin(config.size(20))
        .x_label_area_size(config.size(100))
        .y_label_area_size(config.size(70))
        .build_cartesian_2d(bar_axis(n).into_segmented(), y_min..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|_: &SegmentValue<usize>| String::new())
        .x_desc(model.x_desc.as_str())
        .y_desc(model.y_desc.as_str())
        .label_style(config.font(12))
        .axis_desc_style(config.font(15))
        .draw()?;

    let bars = &model.bars;
    let gap = config.px(10);
    chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
        let (start, end) = bar_span(i, n);
        let mut rect = Rectangle::new([(start, y_min), (end, bar.value)], rgb(bar.color).filled());
        rect.set_margin(0, 0, gap, gap);
        rect
    }))?;

    let label_color = rgb(model.label_color);
    let label_style = config
        .font(14)
        .into_font()
        .style(FontStyle::Bold)
        .color(&label_color)
        .pos(Pos::new(HPos::Center, VPos::Top));
    let inset = config.size(6);

    chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
        EmptyElement::at((SegmentValue::CenterOf(i), bar.value))
            + Text::new(bar.label.clone(), (0, inset), label_style.clone())
    }))?;

    let base = area.get_base_pixel();
    let line_height = config.size(15);
    let under = config
        .font(12)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));

    for (i, bar) in bars.iter().enumerate() {
        let lines = wrap_label(&bar.category, AXIS_LABEL_WIDTH);
        let (x, bottom) = chart.backend_coord(&(SegmentValue::CenterOf(i), y_min));
        let origin = (x - base.0, bottom - base.1 + config.size(8));
        draw_lines(area, &lines, origin, line_height, &under)?;
    }

    Ok(())
}

// ============================================================================
// Level 4 - Utilities
// ============================================================================

/// Integer axis whose segmented form has exactly `count` segments
fn bar_axis(count: usize) -> Range<usize> {
    0..count.saturating_sub(1)
}

/// Left and right edge of bar `index` on the segmented axis
fn bar_span(index: usize, count: usize) -> (SegmentValue<usize>, SegmentValue<usize>) {
    let end = if index + 1 < count {
        SegmentValue::Exact(index + 1)
    } else {
        SegmentValue::Last
    };
    (SegmentValue::Exact(index), end)
}

/// Stack `lines` downward from `origin`, one `line_height` apart
fn draw_lines<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    lines: &[String],
    origin: (i32, i32),
    line_height: i32,
    style: &TextStyle,
) -> Result<()> {
    for (k, line) in lines.iter().enumerate() {
        let pos = (origin.0, origin.1 + k as i32 * line_height);
        area.draw(&Text::new(line.as_str(), pos, style.clone()))?;
    }
    Ok(())
}

fn rgb(color: ChartColor) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeatmapStyle;
    use crate::error::RenderError;
    use crate::model::{heatmap_model, runtime_model, win_rate_model};
    use chainviz_core::{OutcomeMatrix, Player, TournamentDataset};

    /// Run a draw call on an in-memory bitmap and return the RGB pixels
    fn render_to_buffer<F>(size: (u32, u32), draw: F) -> Vec<u8>
    where
        F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()>,
    {
        let mut buffer = vec![0u8; (size.0 * size.1 * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, size).into_drawing_area();
            draw(&root).unwrap();
            root.present().unwrap();
        }
        buffer
    }

    fn has_pixel(buffer: &[u8], color: ChartColor) -> bool {
        buffer
            .chunks_exact(3)
            .any(|p| p == [color.r, color.g, color.b])
    }

    #[test]
    fn test_rgb_conversion() {
        let c = rgb(ChartColor::rgb(0x90, 0xee, 0x90));
        assert_eq!((c.0, c.1, c.2), (0x90, 0xee, 0x90));
    }

    #[test]
    fn test_bar_axis_has_one_segment_per_bar() {
        for n in 1..=8 {
            let axis = bar_axis(n).into_segmented();
            assert_eq!(axis.index_of(&SegmentValue::Last), Some(n));
            assert!(matches!(bar_span(0, n).0, SegmentValue::Exact(0)));
            assert!(matches!(bar_span(n - 1, n).1, SegmentValue::Last));
        }
        assert!(matches!(bar_span(1, 5), (SegmentValue::Exact(1), SegmentValue::Exact(2))));
    }

    #[test]
    fn test_draw_heatmap_into_buffer() {
        let dataset = TournamentDataset::chain_reaction().unwrap();
        let config = RenderConfig::default();

        for matrix in [dataset.red_outcomes.clone(), dataset.blue_outcomes()] {
            let style = HeatmapStyle::for_perspective(matrix.perspective());
            let model = heatmap_model(&matrix, &style);

            let pixels =
                render_to_buffer(HEATMAP_SIZE, |root| draw_heatmap(root, &model, &config));
            assert!(has_pixel(&pixels, style.win));
            assert!(has_pixel(&pixels, style.loss));
        }
    }

    #[test]
    fn test_draw_bar_charts_into_buffer() {
        let dataset = TournamentDataset::chain_reaction().unwrap();
        let config = RenderConfig::default();

        let chart = win_rate_model(&dataset.records, &config.win_rate_bars).unwrap();
        let pixels = render_to_buffer(WIN_RATE_SIZE, |root| draw_bar_chart(root, &chart, &config));
        for bar in &chart.bars {
            assert!(has_pixel(&pixels, bar.color), "bar {} not drawn", bar.category);
        }

        let runtime = runtime_model(
            &dataset.red_timings,
            &dataset.blue_timings,
            &config.runtime_first_bars,
            &config.runtime_second_bars,
        );
        let pixels = render_to_buffer(RUNTIME_SIZE, |root| {
            let panels = root.split_evenly((1, 2));
            draw_bar_chart(&panels[0], &runtime.first, &config)?;
            draw_bar_chart(&panels[1], &runtime.second, &config)
        });
        let last = &runtime.second.bars[runtime.second.bars.len() - 1];
        assert!(has_pixel(&pixels, last.color));
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let matrix = OutcomeMatrix::from_bits(
            &["A", "B"],
            &[&[None, Some(1)], &[Some(0), None]],
            Player::Red,
        )
        .unwrap();
        let model = heatmap_model(&matrix, &HeatmapStyle::for_perspective(Player::Red));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist").join("grid.png");
        let err = export_heatmap(&model, &path, &RenderConfig::default()).unwrap_err();
        assert!(matches!(err, RenderError::Draw(_)));
        assert!(!path.exists());
    }
}
