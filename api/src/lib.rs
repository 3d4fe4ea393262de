#![deny(clippy::disallowed_methods, clippy::suspicious, clippy::style)]
#![warn(clippy::pedantic, clippy::cargo)]
#![allow(clippy::module_name_repetitions)]

pub mod db;
pub mod entities;
pub mod events;
pub mod handlers;
pub mod middleware;
pub mod mutations;
pub mod objects;
pub mod queries;
pub mod random;
pub mod schema;
pub mod seed;
pub mod store;
pub mod subscriptions;

use std::sync::Arc;

use anyhow::Result;
use async_graphql_poem::GraphQLSubscription;
use db::Connection;
use handlers::{graphql_handler, health, playground, GRAPHQL_PATH, SUBSCRIPTION_PATH};
use middleware::RequestBodyLogger;
use poem::{get, middleware::AddData, post, Endpoint, EndpointExt, Route};
use random::Entropy;
use schema::{build_schema, AppSchema};
use store::{DbStore, MemoryStore, Store};
use tracing::info;

#[derive(Debug, clap::Parser)]
#[command(version, author, about)]
pub struct Args {
    #[arg(short, long, env, default_value_t = 8080)]
    pub port: u16,

    /// Synthetic customers created on startup
    #[arg(long, env, default_value_t = seed::DEFAULT_SEED_COUNT)]
    pub seed_count: usize,

    /// Log every inbound request body
    #[arg(long, env)]
    pub log_request_bodies: bool,

    #[command(flatten)]
    pub db: db::DbArgs,
}

#[derive(Clone)]
pub struct AppState {
    pub schema: AppSchema,
    pub store: Store,
}

impl AppState {
    #[must_use]
    pub fn new(store: Store, entropy: Entropy) -> Self {
        let schema = build_schema(store.clone(), entropy);

        Self { schema, store }
    }
}

/// Opens the configured store. Postgres is migrated before use.
///
/// # Errors
/// This function fails if the database cannot be reached or migrated
pub async fn open_store(args: &db::DbArgs) -> Result<Store> {
    let Some(url) = args.database_url.clone() else {
        info!("no database configured, using in-memory store");

        return Ok(Arc::new(MemoryStore::new()));
    };

    let connection = Connection::new(url, args).await?;
    connection.migrate().await?;

    Ok(Arc::new(DbStore::new(connection)))
}

/// All HTTP routes of the service.
pub fn app(state: AppState, log_request_bodies: bool) -> impl Endpoint {
    let subscriptions = GraphQLSubscription::new(state.schema.clone());

    Route::new()
        .at(GRAPHQL_PATH, post(graphql_handler).with(AddData::new(state)))
        .at(SUBSCRIPTION_PATH, get(subscriptions))
        .at("/playground", get(playground))
        .at("/health", get(health))
        .with_if(log_request_bodies, RequestBodyLogger::new())
}
