use async_graphql::{Context, Object, Result};

use crate::{objects::Customer, store::Store};

#[derive(Debug, Clone, Copy, Default)]
pub struct Query;

#[Object(name = "CustomerQuery")]
impl Query {
    /// Every customer in the store, ordered by id.
    ///
    /// # Errors
    /// This function fails if the store cannot be read
    async fn customers(&self, ctx: &Context<'_>) -> Result<Vec<Customer>> {
        let store = ctx.data::<Store>()?;

        Ok(store
            .find_all()
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Customers whose name matches `name` exactly.
    ///
    /// # Errors
    /// This function fails if the store cannot be read
    async fn customers_by_name(&self, ctx: &Context<'_>, name: String) -> Result<Vec<Customer>> {
        let store = ctx.data::<Store>()?;

        Ok(store
            .find_by_name(&name)
            .await?
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
