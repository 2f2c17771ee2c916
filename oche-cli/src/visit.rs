//! Visit command implementation for the Oche CLI.
//!
//! Records darts against a fresh player and reports the resulting score,
//! average and possible outs.

use std::io::Write;

use clap::Parser;
use oche_core::{DEFAULT_BASE_SCORE, Dart, Player};
use oche_solver::BacktrackingSolver;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::output::{OutputFormat, VisitReport, write_visit_report};
use crate::{ARG_BASE_SCORE, ARG_FORMAT, CliError};

/// CLI arguments for the `visit` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score darts thrown from the start of a leg. Darts use \
                 board notation such as T20, D16, 7, BULL or BULLSEYE.",
    about = "Score a sequence of darts and suggest outs"
)]
#[ortho_config(prefix = "OCHE")]
pub(crate) struct VisitArgs {
    /// Darts thrown, in order.
    #[arg(value_name = "dart")]
    #[serde(default)]
    pub(crate) darts: Vec<String>,
    /// Score the leg starts from.
    #[arg(long = ARG_BASE_SCORE, value_name = "score")]
    #[serde(default)]
    pub(crate) base_score: Option<u16>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl VisitArgs {
    pub(crate) fn into_config(self) -> Result<VisitConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        VisitConfig::try_from(merged)
    }
}

/// Resolved `visit` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VisitConfig {
    /// Parsed darts in throw order.
    pub(crate) darts: Vec<Dart>,
    /// Starting score of the leg.
    pub(crate) base_score: u16,
    /// Output format.
    pub(crate) format: OutputFormat,
}

impl TryFrom<VisitArgs> for VisitConfig {
    type Error = CliError;

    fn try_from(args: VisitArgs) -> Result<Self, Self::Error> {
        let darts = args
            .darts
            .iter()
            .map(|notation| {
                notation
                    .parse::<Dart>()
                    .map_err(|source| CliError::InvalidDart {
                        notation: notation.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            darts,
            base_score: args.base_score.unwrap_or(DEFAULT_BASE_SCORE),
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_visit(args: VisitArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_visit(&config, writer)
}

pub(crate) fn execute_visit(config: &VisitConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let mut player = Player::new(0, "visit", config.base_score);
    for dart in &config.darts {
        player.add_dart(*dart);
    }
    let solver = BacktrackingSolver::new();
    let outs = player.possible_outs(&solver);
    let report = VisitReport::new(&player, &outs, &solver.config().cost_weights);
    write_visit_report(writer, &report, config.format)
}
