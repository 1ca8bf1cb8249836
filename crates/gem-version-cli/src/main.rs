mod config;

use config::GemverConfig;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use gem_version::{Comparator, Constraints, Version};
use std::cmp::Ordering;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "gemver")]
#[command(about = "Compare, sort and filter RubyGems versions")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (can be used multiple times)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare two versions
    Compare {
        #[arg(value_name = "VERSION")]
        left: String,

        #[arg(value_name = "VERSION")]
        right: String,
    },

    /// Sort versions from lowest to highest
    Sort {
        /// Sort from highest to lowest
        #[arg(short, long)]
        reverse: bool,

        #[arg(value_name = "VERSIONS", required = true)]
        versions: Vec<String>,
    },

    /// Check versions against a requirement such as ">= 1.0, < 1.4 || > 2.0"
    Check {
        /// Skip versions that fail to parse
        #[arg(long)]
        skip_invalid: bool,

        #[arg(value_name = "REQUIREMENT")]
        requirement: String,

        #[arg(value_name = "VERSIONS", required = true)]
        versions: Vec<String>,
    },
}

fn init_logger(verbose: u8, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Error
    } else {
        match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    // RUST_LOG, when set, wins over the flags
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn parse_version(raw: &str) -> Result<Version> {
    Version::parse(raw).with_context(|| format!("Invalid version \"{}\"", raw))
}

fn run_compare(left: &str, right: &str) -> Result<i32> {
    let left = parse_version(left)?;
    let right = parse_version(right)?;

    let symbol = match Comparator::compare(&left, &right) {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    };
    println!("{} {} {}", left, symbol, right);

    Ok(0)
}

fn run_sort(versions: &[String], reverse: bool) -> Result<i32> {
    let mut parsed = versions
        .iter()
        .map(|v| parse_version(v))
        .collect::<Result<Vec<_>>>()?;

    if reverse {
        Comparator::rsort(&mut parsed);
    } else {
        Comparator::sort(&mut parsed);
    }

    for version in &parsed {
        println!("{}", version);
    }

    Ok(0)
}

fn run_check(requirement: &str, versions: &[String], skip_invalid: bool) -> Result<i32> {
    let constraints = Constraints::parse(requirement)
        .with_context(|| format!("Invalid requirement \"{}\"", requirement))?;
    log::info!("Checking {} version(s) against {}", versions.len(), constraints);

    let mut satisfied = 0;
    for raw in versions {
        let version = match parse_version(raw) {
            Ok(v) => v,
            Err(e) if skip_invalid => {
                log::warn!("Skipping {}: {:#}", raw, e);
                continue;
            }
            Err(e) => return Err(e),
        };

        if constraints.check(&version) {
            satisfied += 1;
            println!("{} {}", "✓".green(), version);
        } else {
            println!("{} {}", "✗".red(), version);
        }
    }

    log::debug!("{} of {} version(s) satisfied {}", satisfied, versions.len(), requirement);

    Ok(if satisfied > 0 { 0 } else { 1 })
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logger(args.verbose, args.quiet);

    let config = GemverConfig::load_from_cwd()?.unwrap_or_default();

    if args.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    match args.command {
        Commands::Compare { left, right } => run_compare(&left, &right),
        Commands::Sort { reverse, versions } => run_sort(&versions, reverse || config.output.reverse),
        Commands::Check {
            skip_invalid,
            requirement,
            versions,
        } => run_check(&requirement, &versions, skip_invalid || config.check.skip_invalid),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_check_args() {
        let args = Args::parse_from(["gemver", "-vv", "check", "~> 1.4", "1.5", "2.0"]);
        assert_eq!(args.verbose, 2);
        match args.command {
            Commands::Check {
                requirement,
                versions,
                skip_invalid,
            } => {
                assert_eq!(requirement, "~> 1.4");
                assert_eq!(versions, vec!["1.5", "2.0"]);
                assert!(!skip_invalid);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_run_check_exit_codes() {
        let versions = vec!["1.5".to_string(), "2.0".to_string()];
        assert_eq!(run_check("~> 1.4", &versions, false).unwrap(), 0);
        assert_eq!(run_check("~> 1.4.4", &versions, false).unwrap(), 1);
    }

    #[test]
    fn test_run_check_invalid_versions() {
        let versions = vec!["junk".to_string(), "1.5".to_string()];
        assert!(run_check("~> 1.4", &versions, false).is_err());
        assert_eq!(run_check("~> 1.4", &versions, true).unwrap(), 0);
    }

    #[test]
    fn test_run_check_invalid_requirement() {
        let err = run_check(">>> 1.3.5", &["1.0".to_string()], false).unwrap_err();
        assert_eq!(err.to_string(), "Invalid requirement \">>> 1.3.5\"");
        assert_eq!(err.root_cause().to_string(), "Improper constraint \">>>\"");
    }

    #[test]
    fn test_run_sort_rejects_invalid() {
        let err = run_sort(&["1.0".to_string(), "1..2".to_string()], false).unwrap_err();
        assert_eq!(err.to_string(), "Invalid version \"1..2\"");
    }
}
