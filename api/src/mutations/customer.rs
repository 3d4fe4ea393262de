use async_graphql::{Context, Object, Result};
use tracing::info;

use crate::{objects::Customer, store::Store};

#[derive(Default)]
pub struct Mutation;

#[Object(name = "CustomerMutation")]
impl Mutation {
    /// Creates a customer and returns it with the id assigned by the store.
    ///
    /// # Errors
    /// If the customer cannot be saved the mutation results in an error and nothing is stored.
    pub async fn add_customer(&self, ctx: &Context<'_>, name: String) -> Result<Customer> {
        let store = ctx.data::<Store>()?;

        let customer = store.save(&name).await?;

        info!(id = customer.id, "customer created");

        Ok(customer.into())
    }
}
