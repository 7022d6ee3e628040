//! Villa CLI Entry Point
//!
//! Composition root: builds the file-backed session store once, hands it to
//! the HTTP gateway as its token source, and runs one command.
//! Failures surface as `kernel::error::AppError`; `anyhow` only carries
//! them out of `main`.

mod cli;
mod commands;
mod settings;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gateway::HttpGateway;
use kernel::error::app_error::{AppError, ResultExt};
use kernel::error::kind::ErrorKind;
use platform::FileStorage;
use session::SessionStore;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing (stderr, so command output stays clean)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "villa=info,gateway=info,session=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env(cli.dev)?;

    let storage = FileStorage::open(&settings.data_dir, settings.session.namespace.clone())
        .map_app_err(
            ErrorKind::InternalServerError,
            format!("Could not open session storage in {}", settings.data_dir.display()),
        )?;
    tracing::debug!(path = %storage.path().display(), "Session storage opened");

    let session = Arc::new(SessionStore::with_storage(storage, settings.session.clone()));
    let api = Arc::new(HttpGateway::new(&settings.gateway, session.clone())?);
    tracing::debug!(base_url = %api.base_url(), "Gateway ready");

    Commands::new(api, session)
        .run(cli.command)
        .await
        .map_err(with_hint)?;

    Ok(())
}

fn with_hint(err: AppError) -> AppError {
    if err.action().is_some() {
        err
    } else if err.is_auth_error() {
        err.with_action("Run `villa login <email> <password>`")
    } else if err.is_transient() {
        err.with_action("Try again in a moment")
    } else {
        err
    }
}
