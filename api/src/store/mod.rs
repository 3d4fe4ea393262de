//! Persistence seam for customer records.
//!
//! The GraphQL layer only talks to [`CustomerStore`]. [`MemoryStore`] backs the
//! service when no database is configured, [`DbStore`] backs it with Postgres.

mod db;
mod memory;
#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use async_trait::async_trait;
pub use db::DbStore;
pub use memory::MemoryStore;
use sea_orm::DbErr;

use crate::entities::customers;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous CRUD access to customers.
///
/// Implementations assign ids on [`CustomerStore::save`] and must hand out
/// distinct ids to concurrent callers.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Every customer, ordered by id.
    async fn find_all(&self) -> Result<Vec<customers::Model>, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<customers::Model>, StoreError>;

    /// Customers whose name equals `name` exactly, ordered by id.
    async fn find_by_name(&self, name: &str) -> Result<Vec<customers::Model>, StoreError>;

    /// Persist a new customer and return it with its assigned id.
    ///
    /// # Errors
    /// Nothing is stored when this fails.
    async fn save(&self, name: &str) -> Result<customers::Model, StoreError>;
}

/// Shared handle placed in the GraphQL schema data.
pub type Store = Arc<dyn CustomerStore>;
