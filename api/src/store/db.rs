use async_trait::async_trait;
use sea_orm::{prelude::*, ActiveModelTrait};

use super::{CustomerStore, StoreError};
use crate::{db::Connection, entities::customers};

/// Postgres-backed store. Ids come from the `customers.id` serial column.
#[derive(Debug, Clone)]
pub struct DbStore {
    db: Connection,
}

impl DbStore {
    #[must_use]
    pub fn new(db: Connection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerStore for DbStore {
    async fn find_all(&self) -> Result<Vec<customers::Model>, StoreError> {
        Ok(customers::Entity::find_all().all(self.db.get()).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<customers::Model>, StoreError> {
        Ok(customers::Entity::find_by_id(id).one(self.db.get()).await?)
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<customers::Model>, StoreError> {
        Ok(customers::Entity::find_by_name(name)
            .all(self.db.get())
            .await?)
    }

    async fn save(&self, name: &str) -> Result<customers::Model, StoreError> {
        Ok(customers::Entity::create(name).insert(self.db.get()).await?)
    }
}
