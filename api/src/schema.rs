use async_graphql::{extensions, Schema};

use crate::{
    mutations::Mutation, queries::Query, random::Entropy, store::Store,
    subscriptions::Subscription,
};

pub type AppSchema = Schema<Query, Mutation, Subscription>;

/// Builds the GraphQL Schema, attaching the store and randomness source to the context
#[must_use]
pub fn build_schema(store: Store, entropy: Entropy) -> AppSchema {
    Schema::build(
        Query::default(),
        Mutation::default(),
        Subscription::default(),
    )
    .extension(extensions::Logger)
    .data(store)
    .data(entropy)
    .finish()
}
