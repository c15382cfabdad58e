//! Colored console output for solver progress.
//!
//! A `tracing` layer that turns the solver's structured events into one
//! readable line each, plus a summary box when solving ends.

use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use timetable_core::{HardSoftScore, ParseableScore, Score};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Filter used when `RUST_LOG` is unset: info everywhere, plus the solver's
/// phase and new-best events.
pub const DEFAULT_FILTER: &str = "info,timetable_solver=debug";

/// Prints the banner and installs the console layer.
///
/// Only the first call has an effect.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed, e.g. by a test.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let title = format!("timetable v{}", env!("CARGO_PKG_VERSION"));
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", title.bright_cyan().bold());
    let _ = writeln!(stdout, "{}", "school timetabling by local search".bright_white());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
#[derive(Debug, Default)]
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("timetable") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        if let Some(line) = format_event(&visitor) {
            let _ = writeln!(io::stdout(), "{line}");
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    phase: Option<String>,
    phase_index: Option<u64>,
    duration_ms: Option<u64>,
    steps: Option<u64>,
    step: Option<u64>,
    moves_evaluated: Option<u64>,
    moves_per_sec: Option<u64>,
    entity_count: Option<u64>,
    value_count: Option<u64>,
    score: Option<String>,
    best_score: Option<String>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "phase" => self.phase = Some(value),
            "score" => self.score = Some(value),
            "best_score" => self.best_score = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.set_text(field.name(), format!("{value:?}").trim_matches('"').to_owned());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_owned());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let slot = match field.name() {
            "phase_index" => &mut self.phase_index,
            "duration_ms" => &mut self.duration_ms,
            "steps" => &mut self.steps,
            "step" => &mut self.step,
            "moves_evaluated" => &mut self.moves_evaluated,
            "moves_per_sec" => &mut self.moves_per_sec,
            "entity_count" => &mut self.entity_count,
            "value_count" => &mut self.value_count,
            _ => return,
        };
        *slot = Some(value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }
}

fn format_event(v: &EventVisitor) -> Option<String> {
    match v.event.as_deref()? {
        "solve_start" => Some(format_solve_start(v)),
        "phase_start" => Some(format_phase_start(v)),
        "phase_end" => Some(format_phase_end(v)),
        "new_best" => Some(format_new_best(v)),
        "solve_end" => Some(format_solve_end(v)),
        _ => None,
    }
}

fn format_solve_start(v: &EventVisitor) -> String {
    let entity_count = v.entity_count.unwrap_or(0);
    let value_count = v.value_count.unwrap_or(0);
    format!(
        "{} {} lessons ({}), values ({}), problem scale ({})",
        "[Solver]".bright_cyan(),
        "Solving started:".white().bold(),
        entity_count.to_formatted_string(&Locale::en).bright_yellow(),
        value_count.to_formatted_string(&Locale::en).bright_yellow(),
        problem_scale(entity_count, value_count).bright_magenta(),
    )
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    format!(
        "{} {} phase ({}) started",
        format!("[{phase}]").bright_cyan(),
        phase.white().bold(),
        v.phase_index.unwrap_or(0).yellow(),
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    format!(
        "{} {} phase ({}) ended: time spent ({}), best score ({}), move evaluation speed ({}/sec), steps ({})",
        format!("[{phase}]").bright_cyan(),
        phase.white().bold(),
        v.phase_index.unwrap_or(0).yellow(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_score(v.best_score.as_deref().unwrap_or("N/A")),
        v.moves_per_sec
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta(),
        v.steps.unwrap_or(0).to_formatted_string(&Locale::en),
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    format!(
        "    {} step {:>7} | {}",
        "->".bright_blue(),
        v.step.unwrap_or(0).to_formatted_string(&Locale::en),
        format_score(v.score.as_deref().unwrap_or("N/A")),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let score = v.score.as_deref().unwrap_or("N/A");
    let feasible = HardSoftScore::parse(score).is_ok_and(|s| s.is_feasible());
    let status = if feasible {
        "FEASIBLE TIMETABLE FOUND".bright_green().bold().to_string()
    } else {
        "INFEASIBLE (hard constraints broken)".bright_red().bold().to_string()
    };
    format!(
        "{} Solving ended in {}: best score ({}), steps ({}), moves evaluated ({})\n  {}",
        "[Solver]".bright_cyan(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_score(score),
        v.steps.unwrap_or(0).to_formatted_string(&Locale::en),
        v.moves_evaluated
            .unwrap_or(0)
            .to_formatted_string(&Locale::en),
        status,
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        format!("{}m {}s", ms / 60_000, (ms % 60_000) / 1000)
    }
}

/// Colors the hard part red when broken and the soft part by sign.
fn format_score(text: &str) -> String {
    let Ok(score) = HardSoftScore::parse(text) else {
        return text.to_owned();
    };
    let hard = format!("{}hard", score.hard());
    let soft = format!("{}soft", score.soft());
    let hard = if score.hard() < 0 {
        hard.bright_red().to_string()
    } else {
        hard.bright_green().to_string()
    };
    let soft = match score.soft() {
        s if s < 0 => soft.yellow().to_string(),
        0 => soft.white().to_string(),
        _ => soft.bright_green().to_string(),
    };
    format!("{hard}/{soft}")
}

/// Size of the search space as `mantissa x 10^exponent`: every lesson
/// picks among all values.
fn problem_scale(entity_count: u64, value_count: u64) -> String {
    if entity_count == 0 || value_count == 0 {
        return "0".to_owned();
    }
    let log_scale = entity_count as f64 * (value_count as f64).log10();
    let exponent = log_scale.floor();
    let mantissa = 10f64.powf(log_scale - exponent);
    format!("{mantissa:.3} x 10^{exponent}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_problem_scale() {
        assert_eq!(problem_scale(0, 14), "0");
        assert_eq!(problem_scale(2, 10), "1.000 x 10^2");
    }

    #[test]
    fn test_unparseable_score_is_left_alone() {
        assert_eq!(format_score("N/A"), "N/A");
        assert!(format_score("-1hard/3soft").contains("-1hard"));
    }

    #[test]
    fn test_only_known_events_are_printed() {
        let mut visitor = EventVisitor::default();
        assert!(format_event(&visitor).is_none());

        visitor.event = Some("move_evaluated".to_owned());
        assert!(format_event(&visitor).is_none());

        visitor.event = Some("new_best".to_owned());
        visitor.step = Some(1200);
        visitor.score = Some("0hard/-2soft".to_owned());
        let line = format_event(&visitor).unwrap();
        assert!(line.contains("1,200"));
        assert!(line.contains("-2soft"));
    }
}
