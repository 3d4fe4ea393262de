use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{CustomerStore, MemoryStore, StoreError};
use crate::entities::customers;

fn offline() -> StoreError {
    StoreError::Unavailable("offline".to_string())
}

/// Fails every call.
pub struct UnavailableStore;

#[async_trait]
impl CustomerStore for UnavailableStore {
    async fn find_all(&self) -> Result<Vec<customers::Model>, StoreError> {
        Err(offline())
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<customers::Model>, StoreError> {
        Err(offline())
    }

    async fn find_by_name(&self, _name: &str) -> Result<Vec<customers::Model>, StoreError> {
        Err(offline())
    }

    async fn save(&self, _name: &str) -> Result<customers::Model, StoreError> {
        Err(offline())
    }
}

/// Memory store whose every `fail_every`-th save fails without storing.
pub struct FlakyStore {
    pub inner: MemoryStore,
    fail_every: usize,
    saves: AtomicUsize,
}

impl FlakyStore {
    pub fn new(fail_every: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_every,
            saves: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CustomerStore for FlakyStore {
    async fn find_all(&self) -> Result<Vec<customers::Model>, StoreError> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<customers::Model>, StoreError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<customers::Model>, StoreError> {
        self.inner.find_by_name(name).await
    }

    async fn save(&self, name: &str) -> Result<customers::Model, StoreError> {
        let n = self.saves.fetch_add(1, Ordering::Relaxed) + 1;

        if n % self.fail_every == 0 {
            return Err(offline());
        }

        self.inner.save(name).await
    }
}
