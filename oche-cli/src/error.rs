//! Error types emitted by the Oche CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use oche_core::DartParseError;
use thiserror::Error;

/// Errors emitted by the Oche CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// An option was present but unusable.
    #[error("invalid {field}: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
    /// A dart could not be parsed from its notation.
    #[error("invalid dart {notation:?}: {source}")]
    InvalidDart {
        /// Notation as typed.
        notation: String,
        /// Parse failure.
        #[source]
        source: DartParseError,
    },
    /// Serialising a report failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing a report failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
