//! Chart pipelines - data source to exported artifact
//!
//! Level 1 - Orchestration
//!
//! Each pipeline builds its render models from the dataset, then exports
//! them. Pipelines share nothing; a failure in one leaves the others alone.

use std::path::{Path, PathBuf};

use chainviz_core::TournamentDataset;
use serde::Serialize;

use crate::artifact::{prepare_output_dir, Artifact};
use crate::config::{HeatmapStyle, RenderConfig};
use crate::draw::{export_heatmap, export_runtime, export_win_rate};
use crate::error::{RenderError, Result};
use crate::model::{
    heatmap_model, runtime_model, win_rate_model, BarChartModel, HeatmapModel, RuntimeModel,
};

/// The three independent chart pipelines
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Pipeline {
    /// Red and Blue outcome grids
    OutcomeGrids,
    /// Overall win rate bars
    WinRate,
    /// Runtime bars for both seats
    Runtime,
}

impl Pipeline {
    /// All pipelines in execution order
    pub const ALL: [Pipeline; 3] = [Pipeline::OutcomeGrids, Pipeline::WinRate, Pipeline::Runtime];

    pub fn name(self) -> &'static str {
        match self {
            Pipeline::OutcomeGrids => "outcome-grids",
            Pipeline::WinRate => "win-rate",
            Pipeline::Runtime => "runtime",
        }
    }

    /// Artifacts this pipeline writes
    pub fn artifacts(self) -> &'static [Artifact] {
        match self {
            Pipeline::OutcomeGrids => &[Artifact::RedGrid, Artifact::BlueGrid],
            Pipeline::WinRate => &[Artifact::WinRate],
            Pipeline::Runtime => &[Artifact::Runtime],
        }
    }
}

impl std::fmt::Display for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Render models produced by one pipeline
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartModels {
    OutcomeGrids { red: HeatmapModel, blue: HeatmapModel },
    WinRate { chart: BarChartModel },
    Runtime { charts: RuntimeModel },
}

/// A pipeline that ran to completion
#[derive(Clone, Debug, Serialize)]
pub struct PipelineOutput {
    pub pipeline: Pipeline,
    pub artifacts: Vec<PathBuf>,
    pub models: ChartModels,
}

/// Outcome of a full run
#[derive(Debug, Default)]
pub struct RunReport {
    pub completed: Vec<PipelineOutput>,
    pub failed: Vec<(Pipeline, RenderError)>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Every artifact written during the run
    pub fn artifacts(&self) -> Vec<&Path> {
        self.completed
            .iter()
            .flat_map(|output| output.artifacts.iter().map(PathBuf::as_path))
            .collect()
    }
}

// ============================================================================
// Level 1 - Orchestration
// ============================================================================

/// Run every pipeline in order: outcome grids, win rate, runtime.
///
/// A failing pipeline is logged and recorded; the remaining ones still run
/// unless `fail_fast` is set.
pub fn run_all(
    dataset: &TournamentDataset,
    out_dir: &Path,
    config: &RenderConfig,
    fail_fast: bool,
) -> RunReport {
    let mut report = RunReport::default();

    for pipeline in Pipeline::ALL {
        match run_pipeline(pipeline, dataset, out_dir, config) {
            Ok(output) => report.completed.push(output),
            Err(err) => {
                tracing::error!("Pipeline {} failed: {}", pipeline, err);
                report.failed.push((pipeline, err));
                if fail_fast {
                    break;
                }
            }
        }
    }

    report
}

/// Build the models of one pipeline and export its artifacts
pub fn run_pipeline(
    pipeline: Pipeline,
    dataset: &TournamentDataset,
    out_dir: &Path,
    config: &RenderConfig,
) -> Result<PipelineOutput> {
    tracing::info!("Running {} pipeline", pipeline);
    prepare_output_dir(out_dir)?;

    let models = build_models(pipeline, dataset, config)?;
    let artifacts = export_models(&models, out_dir, config)?;

    tracing::info!("Finished {} pipeline ({} artifacts)", pipeline, artifacts.len());
    Ok(PipelineOutput {
        pipeline,
        artifacts,
        models,
    })
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Transform and render step, no I/O
pub fn build_models(
    pipeline: Pipeline,
    dataset: &TournamentDataset,
    config: &RenderConfig,
) -> Result<ChartModels> {
    let models = match pipeline {
        Pipeline::OutcomeGrids => {
            let red = &dataset.red_outcomes;
            let blue = dataset.blue_outcomes();
            ChartModels::OutcomeGrids {
                red: heatmap_model(red, &HeatmapStyle::for_perspective(red.perspective())),
                blue: heatmap_model(&blue, &HeatmapStyle::for_perspective(blue.perspective())),
            }
        }
        Pipeline::WinRate => ChartModels::WinRate {
            chart: win_rate_model(&dataset.records, &config.win_rate_bars)?,
        },
        Pipeline::Runtime => ChartModels::Runtime {
            charts: runtime_model(
                &dataset.red_timings,
                &dataset.blue_timings,
                &config.runtime_first_bars,
                &config.runtime_second_bars,
            ),
        },
    };

    tracing::debug!("Built render models for {}", pipeline);
    Ok(models)
}

/// Export step, overwriting existing files
fn export_models(
    models: &ChartModels,
    out_dir: &Path,
    config: &RenderConfig,
) -> Result<Vec<PathBuf>> {
    match models {
        ChartModels::OutcomeGrids { red, blue } => {
            let mut paths = Vec::with_capacity(2);
            for model in [red, blue] {
                let path = Artifact::grid_for(model.perspective).path_in(out_dir);
                export_heatmap(model, &path, config)?;
                paths.push(path);
            }
            Ok(paths)
        }
        ChartModels::WinRate { chart } => {
            let path = Artifact::WinRate.path_in(out_dir);
            export_win_rate(chart, &path, config)?;
            Ok(vec![path])
        }
        ChartModels::Runtime { charts } => {
            let path = Artifact::Runtime.path_in(out_dir);
            export_runtime(charts, &path, config)?;
            Ok(vec![path])
        }
    }
}
