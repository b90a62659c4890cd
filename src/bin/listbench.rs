// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI entry point: run the list-operation suite and print the table.

use clap::Parser;
use listbench::{render_table, run_suite, JsonReporter, DEFAULT_ITERATIONS};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "listbench")]
#[command(about = "Compare Vec and LinkedList operation costs")]
struct Args {
    /// Number of iterations for each operation
    iterations: Option<String>,

    /// Save a JSON report in addition to printing the table
    #[arg(long)]
    json: bool,

    /// Output directory for JSON reports
    #[arg(short, long, default_value = "data")]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Resolve the iteration count from the optional CLI argument.
///
/// Malformed input is non-fatal: it is reported on stdout and the run
/// proceeds with the default.
fn parse_iterations(arg: Option<&str>) -> u64 {
    match arg {
        None => DEFAULT_ITERATIONS,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            println!(
                "Invalid input. Using default iterations: {}",
                DEFAULT_ITERATIONS
            );
            DEFAULT_ITERATIONS
        }),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let iterations = parse_iterations(args.iterations.as_deref());

    println!("Running performance tests...");
    let report = run_suite(iterations);
    print!("{}", render_table(&report));

    if args.json {
        let reporter = JsonReporter::new(&args.output)?;
        let path = reporter.save(&report)?;
        println!();
        println!("Report saved to: {:?}", path);
    }

    Ok(())
}
