//! Render command - draw every tournament chart
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_dataset(), render_charts(), report_results()
//! - Level 3: (delegated to chainviz-render pipelines)
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use chainviz_core::TournamentDataset;
use chainviz_render::{
    run_all, ChartModels, PipelineOutput, RenderConfig, RunReport, MAX_SCALE, MIN_SCALE,
};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Directory the chart images are written to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Multiplier for figure and font sizes (0.25 to 4.0)
    #[arg(long, default_value = "1.0", value_parser = parse_scale)]
    pub scale: f64,

    /// Print a JSON summary of the rendered charts
    #[arg(long)]
    pub json: bool,

    /// Stop at the first failing chart pipeline
    #[arg(long)]
    pub fail_fast: bool,
}

fn parse_scale(value: &str) -> std::result::Result<f64, String> {
    let scale: f64 = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if (MIN_SCALE..=MAX_SCALE).contains(&scale) {
        Ok(scale)
    } else {
        Err(format!("scale must be between {} and {}", MIN_SCALE, MAX_SCALE))
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run render command
///
/// This function reads like a table of contents:
/// 1. Load the tournament dataset
/// 2. Run the outcome grid, win rate and runtime pipelines
/// 3. Report results
pub fn run(args: RenderArgs) -> Result<()> {
    let dataset = load_dataset()?;
    let config = RenderConfig::default().with_scale(args.scale);

    tracing::info!(
        "Rendering tournament charts into {} (scale {})",
        args.output_dir.display(),
        config.scale
    );

    let report = run_all(&dataset, &args.output_dir, &config, args.fail_fast);

    report_results(&report, &args)?;

    if !report.is_success() {
        let failed: Vec<&str> = report.failed.iter().map(|(p, _)| p.name()).collect();
        anyhow::bail!("{} pipeline(s) failed: {}", failed.len(), failed.join(", "));
    }

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Build the literal tournament dataset
fn load_dataset() -> Result<TournamentDataset> {
    TournamentDataset::chain_reaction().context("Invalid built-in tournament dataset")
}

/// Report rendered charts
fn report_results(report: &RunReport, args: &RenderArgs) -> Result<()> {
    if args.json {
        print_json_results(report)
    } else {
        print_text_results(report);
        Ok(())
    }
}

// ============================================================================
// LEVEL 4 - FORMATTING UTILITIES
// ============================================================================

fn print_json_results(report: &RunReport) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonFailure {
        pipeline: String,
        error: String,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        completed: &'a [PipelineOutput],
        failed: Vec<JsonFailure>,
    }

    let output = JsonOutput {
        completed: &report.completed,
        failed: report
            .failed
            .iter()
            .map(|(pipeline, err)| JsonFailure {
                pipeline: pipeline.name().to_string(),
                error: err.to_string(),
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize summary")?;
    println!("{}", json);
    Ok(())
}

fn print_text_results(report: &RunReport) {
    println!("\n=== Tournament Charts ===");

    for output in &report.completed {
        println!("\n[{}]", output.pipeline);
        print_models(&output.models);
        for path in &output.artifacts {
            println!("  wrote {}", path.display());
        }
    }

    for (pipeline, err) in &report.failed {
        println!("\n[{}] FAILED: {}", pipeline, err);
    }
}

fn print_models(models: &ChartModels) {
    match models {
        ChartModels::OutcomeGrids { red, blue } => {
            for grid in [red, blue] {
                let wins = grid.cells.iter().filter(|c| c.label == Some("Win")).count();
                println!(
                    "  {} perspective: {} wins over {} categories",
                    grid.perspective,
                    wins,
                    grid.size()
                );
            }
        }
        ChartModels::WinRate { chart } => {
            for (rank, bar) in chart.bars.iter().enumerate() {
                println!("  {}. {:<40} {:>6}", rank + 1, bar.category, bar.label);
            }
        }
        ChartModels::Runtime { charts } => {
            for chart in [&charts.first, &charts.second] {
                let times: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
                println!("  {}: {}", chart.x_desc, times.join(", "));
            }
        }
    }
}
