//! Solves the reference school week and prints the resulting timetable.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use timetable::views::TimetableView;
use timetable::{data, explain_score, load_config, solve_async, PlanningSolution};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "timetable", version, about = "Solve the reference school timetable")]
struct Args {
    /// Solver configuration, TOML or YAML. Defaults apply when missing.
    #[arg(short, long, default_value = "solver.toml")]
    config: PathBuf,

    /// Overrides the configured time limit.
    #[arg(short, long)]
    seconds: Option<u64>,
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(event = "demo_failed", error = %err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(&args.config)?;
    if let Some(seconds) = args.seconds {
        config = config.with_termination_seconds(seconds);
    }

    let problem = data::generate_problem()?;
    let handle = solve_async(problem, config, |best| {
        if let Some(score) = best.score() {
            info!(event = "best_solution_changed", score = %score);
        }
    })?;
    let result = handle.await_termination()?;

    for view in TimetableView::all(&result.solution) {
        println!("\n{view}");
    }
    let explanation = explain_score(&result.solution);
    println!("\nScore {}", explanation.score);
    for analysis in &explanation.constraint_analyses {
        println!(
            "  {:<30} {:>12} ({} matches)",
            analysis.name(),
            analysis.score.to_string(),
            analysis.match_count()
        );
    }
    info!(
        event = "demo_done",
        score = %result.score,
        steps = result.stats.step_count,
        terminated_early = result.terminated_early,
    );
    Ok(())
}

#[cfg(feature = "console")]
fn init_logging() {
    timetable::console::init();
}

#[cfg(not(feature = "console"))]
fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
