//! `matchforge` - solve matchstick equations from the command line.

mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use matchforge::{
    canonicalize, tokenize_variants, ConfigError, MatchForgeError, MoveCount, MoveThreadCount,
    RuleRegistry, Solver, SolverConfig,
};
use owo_colors::OwoColorize;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Solver(#[from] MatchForgeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Parser)]
#[command(name = "matchforge", version)]
#[command(about = "Find the true equations one matchstick move away")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve an equation by moving one or two sticks
    Solve(SolveArgs),
    /// Report whether an equation is well formed and true
    Check {
        equation: String,

        /// Display mode the equation is drawn in
        #[arg(short, long, default_value = "standard")]
        mode: String,
    },
    /// Show how an equation is read into glyphs
    Tokenize {
        equation: String,
    },
    /// List the display modes and their rule counts
    Modes,
}

#[derive(Debug, Args)]
struct SolveArgs {
    /// Equation such as `6-5=17` or `(1)H+(4)H=9`
    equation: String,

    /// Display mode (`standard` or `handwritten`)
    #[arg(short, long)]
    mode: Option<String>,

    /// Sticks to move
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
    moves: Option<u8>,

    /// Stop after generating this many candidates
    #[arg(long)]
    max_mutations: Option<usize>,

    /// Stop generating after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Evaluation threads: `auto`, `none` or a count
    #[arg(long, value_parser = parse_threads)]
    threads: Option<MoveThreadCount>,

    /// TOML or YAML solver configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also list the well-formed candidates that are not true
    #[arg(long)]
    others: bool,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Suppress the progress log
    #[arg(short, long)]
    quiet: bool,

    /// More log detail (-v strategies, -vv every solution)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_threads(s: &str) -> Result<MoveThreadCount, String> {
    match s {
        "auto" => Ok(MoveThreadCount::Auto),
        "none" | "0" => Ok(MoveThreadCount::None),
        n => n
            .parse::<usize>()
            .map(MoveThreadCount::Count)
            .map_err(|_| format!("expected `auto`, `none` or a thread count, got `{n}`")),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "error:".bright_red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    match cli.command {
        Command::Solve(args) => solve(args),
        Command::Check { equation, mode } => check(&equation, &mode),
        Command::Tokenize { equation } => tokenize(&equation),
        Command::Modes => {
            output::print_modes(&RuleRegistry::builtin());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn solve(args: SolveArgs) -> Result<ExitCode, CliError> {
    let config = build_config(&args)?;

    if !args.quiet && !args.json {
        let directives = match args.verbose {
            0 => "matchforge_solver=info",
            1 => "matchforge_solver=debug",
            _ => "matchforge_solver=trace",
        };
        matchforge_console::init_with(directives, true);
    }

    let solver = Solver::from_registry(&RuleRegistry::builtin(), config)?;
    let result = solver.solve(&args.equation)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_result(&result, args.others);
    }

    Ok(if result.is_solved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

/// File configuration first, then command-line overrides.
fn build_config(args: &SolveArgs) -> Result<SolverConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => SolverConfig::default(),
    };

    if let Some(mode) = &args.mode {
        config = config.with_mode(mode.as_str());
    }
    if let Some(moves) = args.moves {
        config = config.with_move_count(MoveCount::try_from(moves)?);
    }
    if let Some(max) = args.max_mutations {
        config = config.with_max_mutations(max);
    }
    if let Some(ms) = args.time_limit_ms {
        config = config.with_time_limit(Duration::from_millis(ms));
    }
    if let Some(threads) = &args.threads {
        config = config.with_move_thread_count(threads.clone());
    }

    config.validate()?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<SolverConfig, ConfigError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => SolverConfig::from_yaml_file(path),
        _ => SolverConfig::from_toml_file(path),
    }
}

fn check(equation: &str, mode: &str) -> Result<ExitCode, CliError> {
    let config = SolverConfig::default().with_mode(mode);
    let solver = Solver::from_registry(&RuleRegistry::builtin(), config)?;
    let (valid, holds) = solver.check(equation)?;
    output::print_check(&canonicalize(equation), valid, holds);
    Ok(if holds {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}

fn tokenize(equation: &str) -> Result<ExitCode, CliError> {
    let variants = tokenize_variants(&canonicalize(equation))?;
    output::print_variants(&variants);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_args(argv: &[&str]) -> SolveArgs {
        let mut full = vec!["matchforge", "solve"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Command::Solve(args) => args,
            other => panic!("expected solve, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_threads() {
        assert_eq!(parse_threads("auto"), Ok(MoveThreadCount::Auto));
        assert_eq!(parse_threads("none"), Ok(MoveThreadCount::None));
        assert_eq!(parse_threads("4"), Ok(MoveThreadCount::Count(4)));
        assert!(parse_threads("many").is_err());
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = build_config(&solve_args(&["6-5=17"])).unwrap();
        assert_eq!(config.mode, "standard");
        assert_eq!(config.move_count, MoveCount::One);
        assert_eq!(config.max_mutations, 10_000);
    }

    #[test]
    fn test_flags_override() {
        let args = solve_args(&[
            "41+29=78",
            "--mode",
            "handwritten",
            "--moves",
            "2",
            "--max-mutations",
            "100000",
            "--threads",
            "auto",
            "--time-limit-ms",
            "500",
        ]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.mode, "handwritten");
        assert_eq!(config.move_count, MoveCount::Two);
        assert_eq!(config.max_mutations, 100_000);
        assert_eq!(config.move_thread_count, MoveThreadCount::Auto);
        assert_eq!(config.time_limit(), Some(Duration::from_millis(500)));
    }

    #[test]
    fn test_moves_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["matchforge", "solve", "1+1=2", "--moves", "3"]).is_err());
    }

    #[test]
    fn test_zero_budget_rejected() {
        let args = solve_args(&["1+1=2", "--max-mutations", "0"]);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn test_check_rejects_unknown_mode() {
        assert!(matches!(
            check("1+1=2", "roman"),
            Err(CliError::Solver(MatchForgeError::UnknownMode(_)))
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let args = solve_args(&["1+1=2", "--config", "/nonexistent/matchforge.toml"]);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }
}
