use sea_orm_migration::prelude::*;

use crate::m20231101_093512_create_customers_table::Customers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                IndexCreateStatement::new()
                    .name("customers-name-idx")
                    .table(Customers::Table)
                    .col(Customers::Name)
                    .index_type(IndexType::BTree)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("customers-name-idx")
                    .table(Customers::Table)
                    .to_owned(),
            )
            .await
    }
}
