//! Colorful console output for solver events.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve start/end)
//! - **DEBUG**: Per-variant and per-strategy mutation counts
//! - **TRACE**: Each solution as it is reported

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_DIRECTIVES: &str = "matchforge_solver=info";

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default `matchforge_solver=info` filter.
pub fn init() {
    init_with(DEFAULT_DIRECTIVES, true);
}

/// Like [`init`], with explicit fallback directives and optional banner.
pub fn init_with(directives: &str, banner: bool) {
    INIT.get_or_init(|| {
        if banner {
            print_banner();
        }

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 __  __       _       _     _____
|  \/  | __ _| |_ ___| |__ |  ___|__  _ __ __ _  ___
| |\/| |/ _` | __/ __| '_ \| |_ / _ \| '__/ _` |/ _ \
| |  | | (_| | || (__| | | |  _| (_) | | | (_| |  __/
|_|  |_|\__,_|\__\___|_| |_|_|  \___/|_|  \__, |\___|
                                          |___/
"#;

    let version_line = format!("                v{} - Matchstick Equation Solver\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();

        if !target.starts_with("matchforge_solver") && !target.starts_with("matchforge::") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    equation: Option<String>,
    mode: Option<String>,
    strategy: Option<String>,
    move_count: Option<u64>,
    max_mutations: Option<u64>,
    variant: Option<u64>,
    tokens: Option<u64>,
    mutations: Option<u64>,
    solutions: Option<u64>,
    others: Option<u64>,
    duration_ms: Option<u64>,
    speed: Option<u64>,
    terminated_early: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "equation" => self.equation = Some(s),
            "mode" => self.mode = Some(s),
            "strategy" => self.strategy = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "move_count" => self.move_count = Some(value),
            "max_mutations" => self.max_mutations = Some(value),
            "variant" => self.variant = Some(value),
            "tokens" => self.tokens = Some(value),
            "mutations" => self.mutations = Some(value),
            "solutions" => self.solutions = Some(value),
            "others" => self.others = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "speed" => self.speed = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "terminated_early" {
            self.terminated_early = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "equation" => self.equation = Some(value.to_string()),
            "mode" => self.mode = Some(value.to_string()),
            "strategy" => self.strategy = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "solve_start" => {
            mark_solve_start();
            format_solve_start(v)
        }
        "solve_end" => format_solve_end(v),
        "variant" => format_variant(v),
        "strategy" => format_strategy(v),
        "solution" => format_solution(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    let equation = v.equation.as_deref().unwrap_or("");
    let mode = v.mode.as_deref().unwrap_or("standard");
    let move_count = v.move_count.unwrap_or(1);
    let budget = v.max_mutations.unwrap_or(0);

    format!(
        "{} {} Solving {} │ {} │ {} stick{} │ budget {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        equation.white().bold(),
        mode.bright_magenta(),
        move_count.bright_yellow(),
        if move_count == 1 { "" } else { "s" },
        budget.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_variant(v: &EventVisitor) -> String {
    format!(
        "{} {} Variant {} │ {} tokens │ {} mutations so far",
        format_elapsed(),
        "◆".bright_blue(),
        v.variant.unwrap_or(0).white().bold(),
        v.tokens.unwrap_or(0).to_formatted_string(&Locale::en).white(),
        v.mutations
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_magenta(),
    )
}

fn format_strategy(v: &EventVisitor) -> String {
    format!(
        "{}   {} {:<24} {:>10}",
        format_elapsed(),
        "·".bright_black(),
        v.strategy.as_deref().unwrap_or("?").white(),
        v.mutations
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_black(),
    )
}

fn format_solution(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }
    format!(
        "{} {} {}",
        format_elapsed(),
        "✓".bright_green(),
        v.equation.as_deref().unwrap_or("").bright_green()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let solutions = v.solutions.unwrap_or(0);
    let others = v.others.unwrap_or(0);
    let mutations = v.mutations.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);
    let speed = v.speed.unwrap_or(0);

    let status = if solutions > 0 {
        "SOLVED".bright_green().bold().to_string()
    } else {
        "NO SOLUTION".bright_red().bold().to_string()
    };

    let mut output = format!(
        "{} {} Solving complete │ {} │ {} │ {} mutations │ {} mutations/s │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        format!("{} solutions, {} others", solutions, others).white(),
        mutations.to_formatted_string(&Locale::en).white(),
        speed.to_formatted_string(&Locale::en).bright_magenta().bold(),
        status,
    );

    if v.terminated_early == Some(true) {
        output.push_str(&format!(" │ {}", "budget exhausted".bright_yellow()));
    }

    output
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
