use async_graphql::{Context, Result, Subscription};
use futures::stream::BoxStream;

use crate::{
    events::{self, EVENT_COUNT, EVENT_INTERVAL},
    objects::CustomerEvent,
    random::Entropy,
    store::Store,
};

#[derive(Default)]
pub struct Subscription;

#[Subscription(name = "CustomerSubscription")]
impl Subscription {
    /// Streams 20 synthetic events for the customer, one per second. Ends
    /// immediately when the customer does not exist.
    ///
    /// # Errors
    /// This function fails if the customer lookup fails
    async fn customer_events(
        &self,
        ctx: &Context<'_>,
        customer_id: i32,
    ) -> Result<BoxStream<'static, CustomerEvent>> {
        let store = ctx.data::<Store>()?;
        let entropy = ctx.data::<Entropy>()?;

        Ok(events::customer_events(
            store.as_ref(),
            customer_id,
            entropy,
            EVENT_COUNT,
            EVENT_INTERVAL,
        )
        .await?)
    }
}
