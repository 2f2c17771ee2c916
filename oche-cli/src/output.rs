//! Report types and their text and JSON renderings.

use std::io::Write;

use clap::ValueEnum;
use oche_core::{Checkout, CostWeights, Dart, Player};
use serde::{Deserialize, Serialize};

use crate::CliError;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// One route per line, prefixed with its cost.
    #[default]
    Text,
    /// A pretty-printed JSON document.
    Json,
}

/// A checkout together with its ranking cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct RankedCheckout {
    pub(crate) darts: Vec<Dart>,
    pub(crate) cost: u32,
}

impl RankedCheckout {
    fn new(checkout: &Checkout, weights: &CostWeights) -> Self {
        Self {
            darts: checkout.darts().to_vec(),
            cost: weights.checkout_cost(checkout),
        }
    }

    fn describe(&self) -> String {
        let names: Vec<String> = self.darts.iter().map(ToString::to_string).collect();
        format!("{}\t{}", self.cost, names.join(" "))
    }
}

fn rank_all(checkouts: &[Checkout], weights: &CostWeights) -> Vec<RankedCheckout> {
    checkouts
        .iter()
        .map(|checkout| RankedCheckout::new(checkout, weights))
        .collect()
}

/// Result of `oche checkout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CheckoutReport {
    pub(crate) target: u16,
    pub(crate) checkouts: Vec<RankedCheckout>,
}

impl CheckoutReport {
    pub(crate) fn new(target: u16, checkouts: &[Checkout], weights: &CostWeights) -> Self {
        Self {
            target,
            checkouts: rank_all(checkouts, weights),
        }
    }

    fn render_text(&self) -> String {
        if self.checkouts.is_empty() {
            return "no checkout\n".to_owned();
        }
        self.checkouts
            .iter()
            .map(|ranked| format!("{}\n", ranked.describe()))
            .collect()
    }
}

/// Result of `oche visit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct VisitReport {
    pub(crate) base_score: u16,
    pub(crate) darts: Vec<Dart>,
    pub(crate) remaining: i32,
    pub(crate) average: u32,
    pub(crate) outs: Vec<RankedCheckout>,
}

impl VisitReport {
    pub(crate) fn new(player: &Player, outs: &[Checkout], weights: &CostWeights) -> Self {
        Self {
            base_score: player.base_score(),
            darts: player.darts().to_vec(),
            remaining: player.remaining_score(),
            average: player.average(),
            outs: rank_all(outs, weights),
        }
    }

    fn render_text(&self) -> String {
        let mut text = format!(
            "remaining: {}\naverage: {}\n",
            self.remaining, self.average
        );
        if self.outs.is_empty() {
            text.push_str("outs: none\n");
            return text;
        }
        text.push_str("outs:\n");
        for ranked in &self.outs {
            text.push_str("  ");
            text.push_str(&ranked.describe());
            text.push('\n');
        }
        text
    }
}

/// Write a checkout report in `format`.
pub(crate) fn write_checkout_report(
    writer: &mut dyn Write,
    report: &CheckoutReport,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_text(writer, &report.render_text()),
        OutputFormat::Json => write_json(writer, report),
    }
}

/// Write a visit report in `format`.
pub(crate) fn write_visit_report(
    writer: &mut dyn Write,
    report: &VisitReport,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_text(writer, &report.render_text()),
        OutputFormat::Json => write_json(writer, report),
    }
}

fn write_text(writer: &mut dyn Write, text: &str) -> Result<(), CliError> {
    writer
        .write_all(text.as_bytes())
        .map_err(CliError::WriteOutput)
}

fn write_json<T: Serialize>(writer: &mut dyn Write, report: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
