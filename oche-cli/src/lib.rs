//! Command-line interface for the Oche checkout engine.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod checkout;
mod error;
mod output;
mod visit;

pub use error::CliError;

use checkout::{CheckoutArgs, run_checkout};
use visit::{VisitArgs, run_visit};

const ARG_SCORE: &str = "score";
const ARG_MAX_RESULTS: &str = "max-results";
const ARG_FORMAT: &str = "format";
const ARG_BASE_SCORE: &str = "base-score";
const ENV_CHECKOUT_SCORE: &str = "OCHE_CMDS_CHECKOUT_SCORE";

/// Run the Oche CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &mut stdout)
}

fn run_command(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Checkout(args) => run_checkout(args, writer),
        Command::Visit(args) => run_visit(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "oche",
    about = "Darts scoring and checkout suggestions",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Suggest checkouts for a remaining score.
    Checkout(CheckoutArgs),
    /// Score darts from the start of a leg.
    Visit(VisitArgs),
}

#[cfg(test)]
mod tests;
