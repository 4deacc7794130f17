//! Command-line runner for Advent of Code solvers

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

use aoc_runner::{Registry, RegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    let registry = build_registry()?;
    let executor = Executor::new(registry, &config)?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Report missing input files up front; runs are fully offline, so the
    // only fix is to drop the files in place
    if !executor.has_input_override() {
        let store = executor.input_store();
        let missing: Vec<_> = work_items
            .iter()
            .filter(|w| !store.contains(w.year, w.day))
            .collect();
        if !missing.is_empty() {
            println!("Missing {} input file(s):", missing.len());
            for w in &missing {
                println!("  - {}", store.input_path(w.year, w.day).display());
            }
            println!("Place your puzzle inputs at the paths above.");
        }
    }

    run_executor(executor, config.quiet)
}

/// Run the executor and stream ordered results
fn run_executor(executor: Executor, quiet: bool) -> Result<(), error::CliError> {
    let work_items = executor.collect_work_items();
    println!("Running {} solver(s)...", work_items.len());

    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |p| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part: p,
            })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Anything left arrived without a matching expected key
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }

    if !aggregator.is_complete() {
        eprintln!("Warning: Not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| error::CliError::Config("Executor thread panicked".to_string()))?
        .map_err(error::CliError::Executor)?;

    formatter.print_summary(&results);

    Ok(())
}

/// Wire every implemented day into a registry
fn build_registry() -> Result<Registry, error::CliError> {
    Ok(aoc_days::register_all(RegistryBuilder::new())?.build())
}
