//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-search solve <puzzle.json> [options]
//!   puzzle-search solve --stdin [options]
//!
//! Options:
//!   --strategy <s>   depth-first or breadth-first (default: breadth-first)
//!   --quiet          Omit the rendered solution path from the output
//!
//! Set `RUST_LOG=puzzle_search=debug` to see search statistics on stderr.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use puzzle_search::{solve, AnyPuzzle, Error, PuzzleFile, SearchReport, SearchStats, Strategy};

#[derive(Parser)]
#[command(name = "puzzle-search")]
#[command(about = "Depth-first and breadth-first solver for peg solitaire, sliding tiles and word ladders")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle described by a JSON file
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,

        /// Search strategy
        #[arg(long, value_enum, default_value_t = Strategy::BreadthFirst)]
        strategy: Strategy,

        /// Do not print the solution path
        #[arg(long)]
        quiet: bool,
    },
}

/// Output format for a solve run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    found: bool,
    kind: &'static str,
    strategy: Strategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    moves: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<String>>,
    stats: SearchStats,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            file,
            stdin,
            strategy,
            quiet,
        } => match run_solve(file, stdin, strategy, quiet) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::from(1),
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::from(2)
            }
        },
    }
}

/// Returns whether a solution was found.
fn run_solve(
    file: Option<PathBuf>,
    stdin: bool,
    strategy: Strategy,
    quiet: bool,
) -> Result<bool, Error> {
    let description = if stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| Error::Io {
                operation: "read from stdin".to_string(),
                source: e,
            })?;
        PuzzleFile::from_json(&buffer)?
    } else if let Some(path) = file {
        PuzzleFile::load(&path)?
    } else {
        return Err(Error::MissingInput);
    };

    let puzzle = description.build()?;
    let kind = puzzle.kind();
    let report = solve(puzzle, strategy);
    let found = report.is_solved();

    let output = format_report(kind, report, quiet);
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(found)
}

fn format_report(kind: &'static str, report: SearchReport<AnyPuzzle>, quiet: bool) -> SolveOutput {
    SolveOutput {
        found: report.is_solved(),
        kind,
        strategy: report.strategy,
        moves: report.solution.as_ref().map(|s| s.moves()),
        path: report
            .solution
            .as_ref()
            .filter(|_| !quiet)
            .map(|s| s.render()),
        stats: report.stats,
    }
}
