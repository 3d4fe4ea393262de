use async_graphql::{ComplexObject, Context, Result, SimpleObject};

use super::Order;
use crate::{entities::customers, random::Entropy};

/// A customer record.
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
#[graphql(complex)]
pub struct Customer {
    /// The unique identifier assigned by the store
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Customer {
    /// Synthetic orders for the customer. A new random set is produced on
    /// every request.
    async fn orders(&self, ctx: &Context<'_>) -> Result<Vec<Order>> {
        let entropy = ctx.data::<Entropy>()?;

        Ok(Order::generate(self.id, &mut entropy.rng()))
    }
}

impl From<customers::Model> for Customer {
    fn from(customers::Model { id, name }: customers::Model) -> Self {
        Self { id, name }
    }
}
