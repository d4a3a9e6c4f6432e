//! tabcollate CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tabcollate_cli::logging::{LogConfig, LogFormat, init_logging};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{print_report_json, run_clean, run_load, run_locate};
use crate::summary::{print_cleaned, print_load_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Load(args) => run_load(args).and_then(|outcome| {
            if args.json {
                print_report_json(&outcome)
            } else {
                print_load_summary(&outcome);
                Ok(())
            }
        }),
        Command::Clean(args) => run_clean(args).map(|cleaned| print_cleaned(&args.file, &cleaned)),
        Command::Locate(args) => run_locate(args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_for(flags: &[&str]) -> LevelFilter {
        let mut args = vec!["tabcollate"];
        args.extend_from_slice(flags);
        args.extend(["locate", "data", "jan.csv"]);
        let cli = Cli::try_parse_from(args).unwrap();
        log_config_from_cli(&cli).level_filter
    }

    #[test]
    fn verbosity_flags_step_from_warn() {
        assert_eq!(level_for(&[]), LevelFilter::WARN);
        assert_eq!(level_for(&["-v"]), LevelFilter::INFO);
        assert_eq!(level_for(&["-vv"]), LevelFilter::DEBUG);
        assert_eq!(level_for(&["-vvv"]), LevelFilter::TRACE);
        assert_eq!(level_for(&["-q"]), LevelFilter::ERROR);
    }

    #[test]
    fn explicit_log_level_wins() {
        assert_eq!(level_for(&["-v", "--log-level", "trace"]), LevelFilter::TRACE);
    }
}
