//! Chainviz CLI - render the Chain Reaction tournament charts
//!
//! Running `chainviz` with no arguments writes all four charts into the
//! current directory:
//! - tournament_grid_red_wins.png / tournament_grid_blue_wins.png
//! - win_rate_chart.png
//! - runtime_charts.png

mod render_cmd;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use render_cmd::RenderArgs;

#[derive(Parser)]
#[command(name = "chainviz")]
#[command(about = "Chain Reaction heuristic tournament charts")]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging (stderr, so --json output stays clean)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    render_cmd::run(cli.render)
}
