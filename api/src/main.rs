//!

use anyhow::Context;
use clap::Parser;
use hub_customers::{app, open_store, random::Entropy, seed, AppState, Args};
use poem::{listener::TcpListener, Server};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Args {
        port,
        seed_count,
        log_request_bodies,
        db,
    } = Args::parse();

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    rt.block_on(async move {
        let store = open_store(&db)
            .await
            .context("failed to open customer store")?;
        let entropy = Entropy::os();

        seed::seed(&store, seed_count, &entropy);

        let state = AppState::new(store, entropy);

        info!(port, log_request_bodies, "starting graphql server");

        Server::new(TcpListener::bind(format!("0.0.0.0:{port}")))
            .run(app(state, log_request_bodies))
            .await
            .context("failed to build graphql server")
    })
}
