//! CLI configuration module

use clap::{Parser, Subcommand};

use crate::config::{client::ClientArgs, form::FormArgs, logging::LoggingConfig};

pub(crate) mod client;
pub(crate) mod form;
pub(crate) mod logging;

/// Promotions admin client configuration
#[derive(Debug, Parser)]
#[command(
    name = "promotions-admin",
    about = "Promotions admin client",
    long_about = None
)]
pub(crate) struct CliConfig {
    /// Promotions service settings.
    #[command(flatten)]
    pub client: ClientArgs,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Form values the action starts from.
    #[command(flatten)]
    pub form: FormArgs,

    /// Form action to run.
    #[command(subcommand)]
    pub action: Action,
}

/// One button on the promotion form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub(crate) enum Action {
    /// Create a promotion from the form
    Create,

    /// Update the promotion addressed by --id
    Update,

    /// Load the promotion addressed by --id
    Retrieve,

    /// Delete the promotion addressed by --id
    Delete,

    /// Search by name, category and availability
    Search,

    /// Clear the form
    Clear,

    /// Check the service health endpoint
    Health,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
