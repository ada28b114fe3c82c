//! Quine-McCluskey Logic Minimizer - Command Line Interface
//!
//! Reads a problem in the integer text protocol from a file or stdin and
//! prints the minimal cover, optionally with every intermediate table.

use clap::Parser;
use qm_logic::{
    Minimization, Problem, ProblemReader, QmConfig, ReadError, ReportOptions, MAX_VARIABLES,
};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "qm")]
#[command(about = "Exact two-level logic minimizer (Quine-McCluskey)", long_about = None)]
#[command(version)]
struct Args {
    /// Problem file (reads stdin if not specified)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print every merge level
    #[arg(short = 'c', long = "columns")]
    columns: bool,

    /// Print the prime implicant coverage matrix
    #[arg(short = 't', long = "table")]
    table: bool,

    /// Print summary statistics to stderr
    #[arg(short = 's', long = "summary")]
    summary: bool,

    /// Stop generating levels once nothing merges
    #[arg(long = "early-stop")]
    early_stop: bool,

    /// Largest accepted number of variables
    #[arg(long = "max-vars", default_value_t = QmConfig::default().max_variables)]
    max_vars: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .build();
    // Only fails if a logger is already installed
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn read_problem(args: &Args) -> Result<Problem, ReadError> {
    match &args.input {
        Some(path) => Problem::from_file(path),
        None => Problem::from_reader(io::stdin().lock()),
    }
}

/// The summary is printed by `print_summary`, so the library's `info!`
/// summary stays off
fn build_config(args: &Args) -> QmConfig {
    QmConfig {
        max_variables: args.max_vars,
        early_termination: args.early_stop,
        ..Default::default()
    }
}

fn print_summary(result: &Minimization) {
    let stats = result.stats();
    eprintln!("Summary:");
    eprintln!("  Minterms:            {}", stats.num_minterms);
    eprintln!("  Don't-cares:         {}", stats.num_dontcares);
    eprintln!("  Non-empty levels:    {}", stats.num_levels);
    eprintln!("  Prime implicants:    {}", stats.num_primes);
    eprintln!("  Cover terms:         {}", stats.cover_size);
    eprintln!("  Cover literals:      {}", stats.cover_literals);
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.max_vars == 0 || args.max_vars > MAX_VARIABLES {
        eprintln!("Error: --max-vars must be between 1 and {}", MAX_VARIABLES);
        process::exit(2);
    }

    let problem = match read_problem(&args) {
        Ok(problem) => problem,
        Err(e) => {
            match &args.input {
                Some(path) => eprintln!("Error reading '{}': {}", path.display(), e),
                None => eprintln!("Error reading stdin: {}", e),
            }
            process::exit(1);
        }
    };

    let config = build_config(&args);

    let result = match problem.minimize(&config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let options = ReportOptions {
        levels: args.columns,
        table: args.table,
        cover: true,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = result
        .write_sections(&mut out, &options)
        .and_then(|_| out.flush())
    {
        eprintln!("Error writing to stdout: {}", e);
        process::exit(1);
    }

    if args.summary {
        print_summary(&result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_is_not_logged_twice() {
        let args = Args::parse_from(["qm", "-s", "-vv", "--early-stop"]);
        let config = build_config(&args);
        assert!(args.summary);
        assert!(!config.summary);
        assert!(config.early_termination);
    }

    #[test]
    fn test_max_vars_flag() {
        let args = Args::parse_from(["qm", "--max-vars", "20", "input.txt"]);
        assert_eq!(build_config(&args).max_variables, 20);
        assert_eq!(args.input, Some(PathBuf::from("input.txt")));

        let args = Args::parse_from(["qm"]);
        assert_eq!(build_config(&args).max_variables, 16);
    }
}
