use sea_orm::{entity::prelude::*, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    pub fn find_all() -> Select<Self> {
        Self::find().order_by_asc(Column::Id)
    }

    pub fn find_by_name(name: &str) -> Select<Self> {
        Self::find()
            .filter(Column::Name.eq(name))
            .order_by_asc(Column::Id)
    }

    // The id is left unset so the database assigns it
    pub fn create(name: &str) -> ActiveModel {
        ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
    }
}
