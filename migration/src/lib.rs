pub use sea_orm_migration::prelude::*;

mod m20231101_093512_create_customers_table;
mod m20231101_094208_add_customers_name_idx;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20231101_093512_create_customers_table::Migration),
            Box::new(m20231101_094208_add_customers_name_idx::Migration),
        ]
    }
}
