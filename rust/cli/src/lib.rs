//! # Drawpoker CLI Library
//!
//! Command-line front end for the heads-up five-card draw engine.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments, dispatches to a subcommand handler
//! and returns the process exit code. All output goes to the writers it is
//! given, so the whole CLI can be driven from tests.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["drawpoker", "play", "--hands", "3", "--ai", "baseline"];
//! let code = drawpoker_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds interactively against an AI opponent
//! - `sim`: Let two policies play each other, optionally recording rounds as JSONL
//! - `deal`: Deal one round and show both hands
//! - `eval`: Evaluate five cards given on the command line
//! - `cfg`: Display the resolved configuration and where each value came from

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, DrawpokerCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "eval", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// [`exit_code::SUCCESS`] when the command completed (including `--help`),
/// [`exit_code::ERROR`] for usage errors and failed commands.
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["drawpoker", "deal", "--seed", "42"];
/// let code = drawpoker_cli::run(args, &mut io::sink(), &mut io::sink());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match DrawpokerCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play { hands, seed, ai } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(hands, seed, ai, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            rounds,
            seed,
            ai_a,
            ai_b,
            output,
        } => handle_sim_command(rounds, seed, &ai_a, &ai_b, output, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Eval { cards } => handle_eval_command(&cards, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version print to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = write_usage(&e, err);
    exit_code::ERROR
}

fn write_usage(e: &clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "Drawpoker CLI")?;
    writeln!(err, "Usage: drawpoker <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: drawpoker --help")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(args.iter().copied(), &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, err) = run_args(&["drawpoker", "--help"]);
        assert_eq!(code, 0);
        assert!(out.contains("Usage"));
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_command_lists_commands() {
        let (code, _, err) = run_args(&["drawpoker", "replay"]);
        assert_eq!(code, 2);
        assert!(err.contains("Commands:"));
        for c in COMMANDS {
            assert!(err.contains(&format!("  {}", c)), "missing {}", c);
        }
    }

    #[test]
    fn missing_subcommand_is_a_usage_error() {
        let (code, _, err) = run_args(&["drawpoker"]);
        assert_eq!(code, 2);
        assert!(err.contains("Usage: drawpoker"));
    }

    #[test]
    fn failed_command_reports_error() {
        let (code, _, err) = run_args(&["drawpoker", "eval", "Ah", "Kh"]);
        assert_eq!(code, 2);
        assert!(err.contains("Error:"));
    }

    #[test]
    fn commands_list_matches_subcommands() {
        use clap::CommandFactory;
        let cmd = DrawpokerCli::command();
        let names: Vec<&str> = cmd
            .get_subcommands()
            .map(|s| s.get_name())
            .filter(|n| *n != "help")
            .collect();
        for c in COMMANDS {
            assert!(names.contains(c), "{} is not a subcommand", c);
        }
        assert_eq!(names.len(), COMMANDS.len());
    }
}
