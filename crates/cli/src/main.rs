//! Promotions Admin CLI

use std::{
    io::{self, Write},
    process,
};

use thiserror::Error;
use tracing::{error, info};

use promotions_admin::prelude::*;

use crate::config::{Action, CliConfig};

mod config;
mod logging;
mod report;

/// Failure of a CLI run.
#[derive(Debug, Error)]
enum CliError {
    /// The promotions service call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Promotions Admin CLI entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = CliConfig::load().unwrap_or_else(|error| error.exit());

    if let Err(init_error) = logging::init(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("Logging error: {init_error}");
        }

        process::exit(1);
    }

    if let Err(run_error) = run(config).await {
        error!("{run_error}");

        process::exit(1);
    }
}

async fn run(config: CliConfig) -> Result<(), CliError> {
    let client = HttpPromotionsClient::new(&config.client.client_config())?;

    info!(base_url = %config.client.base_url, schema = %config.client.schema, "client ready");

    if config.action == Action::Health {
        let status = client.health().await?;

        writeln!(io::stdout().lock(), "{status}")?;

        return Ok(());
    }

    let mut controller = PromotionsController::new(client, config.client.schema);

    *controller.form_mut() = config.form.into_form_state();

    let outcome = perform(&mut controller, config.action).await;

    report::write_report(io::stdout().lock(), &controller, config.action)?;

    Ok(outcome?)
}

async fn perform<A: PromotionsApi>(
    controller: &mut PromotionsController<A>,
    action: Action,
) -> Result<(), ClientError> {
    match action {
        Action::Create => controller.create().await,
        Action::Update => controller.update().await,
        Action::Retrieve => controller.retrieve().await,
        Action::Delete => controller.delete().await,
        Action::Search => controller.search().await,
        Action::Clear => {
            controller.clear();

            Ok(())
        }
        // Answered by `run` before a controller exists.
        Action::Health => Ok(()),
    }
}
