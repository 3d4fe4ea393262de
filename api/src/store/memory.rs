use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicI32, Ordering},
};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{CustomerStore, StoreError};
use crate::entities::customers;

/// In-process store keyed by id. Ids start at 1.
#[derive(Debug)]
pub struct MemoryStore {
    customers: RwLock<BTreeMap<i32, customers::Model>>,
    next_id: AtomicI32,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(BTreeMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<customers::Model>, StoreError> {
        Ok(self.customers.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<customers::Model>, StoreError> {
        Ok(self.customers.read().await.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<customers::Model>, StoreError> {
        Ok(self
            .customers
            .read()
            .await
            .values()
            .filter(|customer| customer.name == name)
            .cloned()
            .collect())
    }

    async fn save(&self, name: &str) -> Result<customers::Model, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let customer = customers::Model {
            id,
            name: name.to_string(),
        };

        self.customers.write().await.insert(id, customer.clone());

        Ok(customer)
    }
}
