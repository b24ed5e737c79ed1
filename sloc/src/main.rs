//! # sloc
//!
//! A command-line source line counter for polyglot source trees.
//!
//! ## Overview
//!
//! sloc is built on top of sloclib. It walks the given paths, detects each
//! file's language from its name, splits every line into code, comment or
//! blank, and prints one row per language followed by the grand total.
//!
//! ## Usage
//!
//! ```bash
//! # Count the current directory
//! sloc
//!
//! # Count several trees, skipping vendored code
//! sloc src tools --ignore vendor,node_modules
//!
//! # Only Go files, largest comment count first
//! sloc . --include "**/*.go" --sort comment
//!
//! # Output as JSON
//! sloc . --json
//! ```
//!
//! Warnings about skipped paths go to stderr; set `RUST_LOG=debug` for more.

mod render;

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use render::OutputMode;
use sloclib::{count_paths, CountOptions, CountQuerySet, FilterConfig, LOCTable, OrderBy, Ordering};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("sloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count source, comment and blank lines per language")
        .arg(
            Arg::new("paths")
                .help("Files or directories to scan (defaults to current directory)")
                .num_args(1..)
                .default_value("."),
        )
        .arg(
            Arg::new("ignore")
                .long("ignore")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .help("Directory names to skip (comma-separated, can be repeated)"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Shorthand for --output json"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .value_parser(["code", "comment", "blank", "total", "files", "name"])
                .default_value("code")
                .help("Column to order languages by"),
        )
        .arg(
            Arg::new("jobs")
                .short('j')
                .long("jobs")
                .value_parser(clap::value_parser!(u64).range(1..))
                .help("Number of worker threads (1 scans sequentially)"),
        )
}

/// Collect the values of a repeatable flag
fn extract_values<'a>(matches: &'a ArgMatches, id: &str) -> Vec<&'a str> {
    matches
        .get_many::<String>(id)
        .map(|v| v.map(|s| s.as_str()).collect())
        .unwrap_or_default()
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> Result<FilterConfig, anyhow::Error> {
    let filter = FilterConfig::new()
        .ignore_dirs(extract_values(matches, "ignore"))
        .include_many(&extract_values(matches, "include"))?
        .exclude_many(&extract_values(matches, "exclude"))?;

    Ok(filter)
}

/// Pick the outstanding output mode from the output flags
fn extract_output_mode(matches: &ArgMatches) -> OutputMode {
    let json = matches.get_flag("json")
        || matches.get_one::<String>("output").map(|s| s.as_str()) == Some("json");

    if json {
        OutputMode::Json
    } else {
        OutputMode::Auto
    }
}

/// Extract the row ordering from matches
fn extract_ordering(matches: &ArgMatches) -> Result<Ordering, anyhow::Error> {
    let field = matches
        .get_one::<String>("sort")
        .map(|s| s.as_str())
        .unwrap_or("code");
    let by = field.parse::<OrderBy>().map_err(anyhow::Error::msg)?;
    Ok(Ordering::by(by))
}

/// Size the worker pool; returns whether files should be scanned in parallel.
fn configure_jobs(matches: &ArgMatches) -> Result<bool, anyhow::Error> {
    let Some(&jobs) = matches.get_one::<u64>("jobs") else {
        return Ok(true);
    };

    if jobs == 1 {
        return Ok(false);
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(usize::try_from(jobs)?)
        .build_global()?;
    log::debug!("scanning with {} worker threads", jobs);

    Ok(true)
}

/// Run the count and return the rendered output.
fn run(matches: &ArgMatches) -> Result<String, anyhow::Error> {
    let paths: Vec<&String> = matches
        .get_many::<String>("paths")
        .map(|v| v.collect())
        .unwrap_or_default();

    let options = CountOptions::new()
        .filter(build_filter(matches)?)
        .parallel(configure_jobs(matches)?);
    let ordering = extract_ordering(matches)?;

    let result = count_paths(&paths, &options);
    log::debug!(
        "counted {} files in {} languages",
        result.file_count(),
        result.languages.len()
    );

    let output_mode = extract_output_mode(matches);
    let mut output = if matches!(output_mode, OutputMode::Json) {
        render::render_json(&result.languages)?
    } else {
        let queryset = CountQuerySet::from_result(&result, ordering);
        render::render_table(&LOCTable::from_count_queryset(&queryset), output_mode)?
    };

    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
