//! `content-admin` entry-point: loads settings, wires the reqwest transport
//! and runs one CLI command.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use content_admin::config::AdminSettings;
use content_admin::domain::AdminClient;
use content_admin::inbound::cli::{self, Cli};
use content_admin::outbound::http::ReqwestApiTransport;
use content_admin::outbound::session::StaticSession;
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let settings = AdminSettings::load_from_iter([OsString::from("content-admin")])
        .map_err(|error| eyre!("failed to load configuration: {error}"))?;
    let settings = cli.apply_overrides(settings);

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build Tokio runtime")?;
    runtime.block_on(async_main(cli, settings))
}

async fn async_main(cli: Cli, settings: AdminSettings) -> Result<()> {
    let api_url = settings.api_url()?;
    let transport = ReqwestApiTransport::new(api_url).wrap_err("failed to build HTTP client")?;
    let session = StaticSession::new(settings.access_token());
    let client = AdminClient::new(Arc::new(transport), Arc::new(session));

    let mut stdout = io::stdout().lock();
    cli::run(cli.command, &client, settings.page_size(), &mut stdout)
        .await
        .map_err(|error| eyre!(error.display_message()))
}
