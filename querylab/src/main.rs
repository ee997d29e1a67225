//! # querylab
//!
//! Command-line runner for the querylab exercises.
//!
//! ## Overview
//!
//! querylab is built on top of querylablib. It loads a dataset (the bundled
//! sample unless `--data` points at a JSON file), runs the selected exercises
//! and prints each report, either as indented text or as JSON. Output goes
//! through standout templates; `--output term-debug` keeps the style tags
//! visible.
//!
//! ## Usage
//!
//! ```bash
//! # List the available exercises
//! querylab list
//!
//! # Run one or more exercises
//! querylab run task1 task5
//!
//! # Run everything, as JSON
//! querylab run --all --output json
//!
//! # Adjust the thresholds and the dump depth
//! querylab run task1 --turnover-threshold 50000 --depth 0
//! querylab run task8 --cheap-below 20 --expensive-from 60
//! ```

mod render;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use querylablib::{Dataset, Exercise, QueryConfig, Registry};
use standout::{ColorPolicy, Representation};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::render::{render_list, render_runs, ExerciseRun};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("querylab")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Run query exercises against an in-memory customer dataset")
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .global(true)
                .help("Dataset JSON file (defaults to the bundled sample)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .global(true)
                .value_parser(["text", "term-debug", "json"])
                .default_value("text")
                .help("Output format"),
        )
        .arg(
            Arg::new("depth")
                .long("depth")
                .global(true)
                .value_parser(value_parser!(usize))
                .help("Dump depth for every value (overrides each exercise's own)"),
        )
        .arg(
            Arg::new("turnover-threshold")
                .long("turnover-threshold")
                .global(true)
                .value_parser(value_parser!(f64))
                .help("Turnover a customer must exceed in task1"),
        )
        .arg(
            Arg::new("order-threshold")
                .long("order-threshold")
                .global(true)
                .value_parser(value_parser!(f64))
                .help("Order total a customer must exceed at least once in task3"),
        )
        .arg(
            Arg::new("cheap-below")
                .long("cheap-below")
                .global(true)
                .value_parser(value_parser!(f64))
                .help("Prices below this are cheap in task8"),
        )
        .arg(
            Arg::new("expensive-from")
                .long("expensive-from")
                .global(true)
                .value_parser(value_parser!(f64))
                .help("Prices from this on are expensive in task8"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log more to stderr (-v info, -vv debug)"),
        )
        .subcommand(Command::new("list").about("List the available exercises (default command)"))
        .subcommand(
            Command::new("run")
                .about("Run exercises and print their results")
                .arg(
                    Arg::new("keys")
                        .num_args(1..)
                        .action(ArgAction::Append)
                        .required_unless_present("all")
                        .help("Exercise keys to run, in order (e.g. task1 task5)"),
                )
                .arg(
                    Arg::new("all")
                        .short('a')
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("keys")
                        .help("Run every exercise"),
                ),
        )
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Build the query configuration from flags, starting from the defaults
fn build_config(matches: &ArgMatches) -> anyhow::Result<QueryConfig> {
    let mut config = QueryConfig::new();
    if let Some(&value) = matches.get_one::<f64>("turnover-threshold") {
        config = config.turnover_threshold(value);
    }
    if let Some(&value) = matches.get_one::<f64>("order-threshold") {
        config = config.order_threshold(value);
    }
    let cheap_below = matches
        .get_one::<f64>("cheap-below")
        .copied()
        .unwrap_or(config.cheap_below);
    let expensive_from = matches
        .get_one::<f64>("expensive-from")
        .copied()
        .unwrap_or(config.expensive_from);
    config = config.price_tiers(cheap_below, expensive_from);

    config.validate()?;
    Ok(config)
}

fn load_dataset(matches: &ArgMatches) -> anyhow::Result<Dataset> {
    let dataset = match matches.get_one::<String>("data") {
        Some(path) => Dataset::from_path(Path::new(path))?,
        None => Dataset::sample().context("bundled sample dataset is invalid")?,
    };
    info!(
        customers = dataset.customers.len(),
        orders = dataset.order_count(),
        suppliers = dataset.suppliers.len(),
        products = dataset.products.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Map the `--output` value onto a standout representation
fn output_mode(matches: &ArgMatches) -> Representation {
    match matches.get_one::<String>("output").map(String::as_str) {
        Some("json") => Representation::Json,
        Some("term-debug") => Representation::TermDebug,
        _ => Representation::Human,
    }
}

/// Handler for list command
fn list_handler(registry: &Registry, mode: Representation) -> anyhow::Result<()> {
    let output = render_list(registry.exercises(), mode, ColorPolicy::Auto)?;
    println!("{output}");
    Ok(())
}

/// Handler for run command
fn run_handler(
    sub: &ArgMatches,
    registry: &Registry,
    dataset: &Dataset,
    config: &QueryConfig,
    mode: Representation,
    depth: Option<usize>,
) -> anyhow::Result<()> {
    // Resolve every key before running anything, so a typo fails fast
    let selected: Vec<&Exercise> = if sub.get_flag("all") {
        registry.exercises().iter().collect()
    } else {
        sub.get_many::<String>("keys")
            .into_iter()
            .flatten()
            .map(|k| registry.find(k))
            .collect::<querylablib::Result<_>>()?
    };

    let mut runs = Vec::with_capacity(selected.len());
    for exercise in selected {
        info!(key = exercise.info.key, "running exercise");
        let report = exercise.run(dataset, config)?;
        runs.push(ExerciseRun {
            info: exercise.info,
            report,
        });
    }

    let output = render_runs(&runs, depth, mode, ColorPolicy::Auto)?;
    println!("{output}");
    Ok(())
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let registry = Registry::builtin();
    let mode = output_mode(matches);

    match matches.subcommand() {
        Some(("run", sub)) => {
            let config = build_config(matches)?;
            let dataset = load_dataset(matches)?;
            let depth = matches.get_one::<usize>("depth").copied();
            run_handler(sub, &registry, &dataset, &config, mode, depth)
        }
        // No subcommand lists, like `list`
        _ => list_handler(&registry, mode),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
