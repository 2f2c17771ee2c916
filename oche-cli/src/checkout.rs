//! Checkout command implementation for the Oche CLI.

use std::io::Write;

use clap::Parser;
use oche_core::CheckoutFinder;
use oche_solver::{BacktrackingSolver, SolverConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::output::{CheckoutReport, OutputFormat, write_checkout_report};
use crate::{ARG_FORMAT, ARG_MAX_RESULTS, ARG_SCORE, CliError, ENV_CHECKOUT_SCORE};

/// CLI arguments for the `checkout` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List the easiest ways to finish from a remaining score. \
                 Routes use at most three darts, end on a double or the \
                 bullseye and are ordered by throwing difficulty.",
    about = "Suggest checkouts for a remaining score"
)]
#[ortho_config(prefix = "OCHE")]
pub(crate) struct CheckoutArgs {
    /// Remaining score to finish from.
    #[arg(value_name = "score")]
    #[serde(default)]
    pub(crate) score: Option<u16>,
    /// Maximum number of routes to list.
    #[arg(long = ARG_MAX_RESULTS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_results: Option<usize>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl CheckoutArgs {
    pub(crate) fn into_config(self) -> Result<CheckoutConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CheckoutConfig::try_from(merged)
    }
}

/// Resolved `checkout` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CheckoutConfig {
    /// Score to search from.
    pub(crate) score: u16,
    /// Maximum routes listed.
    pub(crate) max_results: usize,
    /// Output format.
    pub(crate) format: OutputFormat,
}

impl CheckoutConfig {
    pub(crate) fn solver(&self) -> BacktrackingSolver {
        BacktrackingSolver::with_config(SolverConfig {
            max_results: self.max_results,
            ..SolverConfig::default()
        })
    }
}

impl TryFrom<CheckoutArgs> for CheckoutConfig {
    type Error = CliError;

    fn try_from(args: CheckoutArgs) -> Result<Self, Self::Error> {
        let score = args.score.ok_or(CliError::MissingArgument {
            field: ARG_SCORE,
            env: ENV_CHECKOUT_SCORE,
        })?;
        let max_results = args
            .max_results
            .unwrap_or_else(|| SolverConfig::default().max_results);
        if max_results == 0 {
            return Err(CliError::InvalidArgument {
                field: ARG_MAX_RESULTS,
                reason: "must list at least one route",
            });
        }
        Ok(Self {
            score,
            max_results,
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_checkout(args: CheckoutArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_checkout(&config, writer)
}

pub(crate) fn execute_checkout(
    config: &CheckoutConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let solver = config.solver();
    let outs = solver.find(config.score);
    let report = CheckoutReport::new(config.score, &outs, &solver.config().cost_weights);
    write_checkout_report(writer, &report, config.format)
}
