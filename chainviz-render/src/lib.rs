//! Chainviz Render - chart models, drawing and export
//!
//! This crate turns tournament data into image files:
//! - Pure render models (grid cells, bars, captions, colours)
//! - plotters drawing of those models
//! - Fixed artifact names and the three chart pipelines
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run_all, run_pipeline (orchestration)
//! - Level 2: build_models, export_* (phases)
//! - Level 3: heatmap_model, win_rate_model, runtime_model, draw_* (steps)
//! - Level 4: configuration, colours, artifact names

mod artifact;
mod config;
mod draw;
mod error;
mod model;
mod pipeline;

pub use artifact::{prepare_output_dir, Artifact, EXTENSION};
pub use config::{
    BarStyle, ChartColor, HeatmapStyle, Ramp, RenderConfig, HEATMAP_SIZE, MAX_SCALE, MIN_SCALE,
    RUNTIME_SIZE, WIN_RATE_SIZE,
};
pub use draw::{draw_bar_chart, draw_heatmap, export_heatmap, export_runtime, export_win_rate};
pub use error::{RenderError, Result};
pub use model::{
    heatmap_model, runtime_model, timing_chart, win_rate_model, wrap_label, Bar, BarChartModel,
    CellFill, HeatmapCell, HeatmapModel, RuntimeModel, AXIS_LABEL_WIDTH, WIN_RATE_AXIS_MAX,
};
pub use pipeline::{
    build_models, run_all, run_pipeline, ChartModels, Pipeline, PipelineOutput, RunReport,
};
