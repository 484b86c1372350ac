//! # selectful-cli
//!
//! Command-line interface for greedy feature subset search.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dataset::Dataset;
use selection_facade::prelude::*;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "selectful")]
#[command(about = "Greedy feature subset search", long_about = None)]
struct Cli {
    /// Dataset file: one instance per line, class label first
    input: PathBuf,
}

/// Console reporter implementing the round-by-round output contract.
struct ConsoleReporter;

impl SearchObserver for ConsoleReporter {
    fn on_baseline(&mut self, baseline: &FeatureSet) {
        println!("{}", baseline);
    }

    fn on_round(&mut self, outcome: &RoundOutcome) {
        println!("{}", outcome.winner);
    }

    fn on_degradation(&mut self, _round: usize) {
        println!();
        println!("Warning: accuracy decreasing, continuing search...");
        println!();
    }
}

/// Show the algorithm menu and read one choice from stdin.
///
/// `1` selects forward selection; every other value selects backward
/// elimination, matching the classic prompt.
fn prompt_direction() -> CliResult<SearchDirection> {
    println!("Welcome to the Feature Selection Algorithm");
    println!("Choose the selection algorithm:");
    println!("\t1) Forward Selection");
    println!("\t2) Backward Elimination");

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read menu choice: {}", e))?;

    match line.trim().parse::<i32>() {
        Ok(1) => Ok(SearchDirection::Forward),
        _ => Ok(SearchDirection::Backward),
    }
}

fn run_search(input: PathBuf) -> CliResult<()> {
    let dataset = Dataset::from_path(&input).map_err(|e| e.to_string())?;
    let direction = prompt_direction()?;

    tracing::debug!(
        %direction,
        num_features = dataset.num_features(),
        instances = dataset.len(),
        "starting search"
    );

    println!(
        "This dataset has {} features with {} instances:",
        dataset.num_features(),
        dataset.len()
    );
    println!();

    let engine = SearchEngine::new(SearchConfig {
        direction,
        parallel: false,
    });
    let oracle = RandomOracle::new();
    let mut reporter = ConsoleReporter;

    let outcome = engine
        .run(dataset.num_features(), &oracle, &mut reporter)
        .map_err(|e| e.to_string())?;

    println!();
    println!("The best feature subset is: {}", outcome.best);

    tracing::debug!(
        best_score = outcome.best.score,
        evaluations = outcome.evaluations,
        degraded = outcome.degraded(),
        "search finished"
    );

    Ok(())
}

fn main() {
    // Diagnostics go to stderr so the console output contract stays stable.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            err.exit()
        }
        Err(_) => {
            eprintln!("Error: Invalid program call");
            process::exit(1);
        }
    };

    if let Err(e) = run_search(cli.input) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
