//! Synthetic customer event streams backing the `customerEvents` subscription.

use std::time::Duration;

use futures::stream::{self, BoxStream, StreamExt};
use rand::{rngs::StdRng, Rng};
use tracing::debug;

use crate::{
    objects::{Customer, CustomerEvent},
    random::Entropy,
    store::{CustomerStore, StoreError},
};

/// Events emitted per subscription.
pub const EVENT_COUNT: usize = 20;

/// Delay before each event.
pub const EVENT_INTERVAL: Duration = Duration::from_secs(1);

/// Looks up `customer_id` and streams `count` synthetic events for it, each
/// after waiting `interval`.
///
/// An unknown id yields a stream that ends immediately. Dropping the stream
/// drops the pending timer with it.
///
/// # Errors
/// This function fails if the store lookup fails
pub async fn customer_events(
    store: &dyn CustomerStore,
    customer_id: i32,
    entropy: &Entropy,
    count: usize,
    interval: Duration,
) -> Result<BoxStream<'static, CustomerEvent>, StoreError> {
    let Some(customer) = store.find_by_id(customer_id).await? else {
        debug!(customer_id, "no customer for event stream");

        return Ok(stream::empty().boxed());
    };

    Ok(synthetic(customer.into(), entropy.rng(), count, interval))
}

fn synthetic(
    customer: Customer,
    rng: StdRng,
    count: usize,
    interval: Duration,
) -> BoxStream<'static, CustomerEvent> {
    stream::unfold((rng, 0), move |(mut rng, emitted)| {
        let customer = customer.clone();

        async move {
            if emitted == count {
                return None;
            }

            tokio::time::sleep(interval).await;

            let event = CustomerEvent {
                customer,
                event_type: rng.gen(),
            };

            Some((event, (rng, emitted + 1)))
        }
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use tokio::time::Instant;

    use super::*;
    use crate::{
        objects::CustomerEventType,
        store::{testing::UnavailableStore, MemoryStore},
    };

    async fn seeded_store() -> (MemoryStore, i32) {
        let store = MemoryStore::new();
        let customer = store.save("Greta").await.unwrap();

        (store, customer.id)
    }

    #[tokio::test(start_paused = true)]
    async fn test_known_customer_gets_twenty_events_one_per_second() {
        let (store, id) = seeded_store().await;
        let started = Instant::now();

        let events = customer_events(&store, id, &Entropy::seeded(1), EVENT_COUNT, EVENT_INTERVAL)
            .await
            .unwrap()
            .collect::<Vec<_>>()
            .await;

        assert_eq!(events.len(), EVENT_COUNT);
        assert!(events
            .iter()
            .all(|event| event.customer.id == id && event.customer.name == "Greta"));
        assert!(started.elapsed() >= EVENT_INTERVAL * 20);
        assert!(started.elapsed() < EVENT_INTERVAL * 21);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_customer_stream_is_empty() {
        let (store, _) = seeded_store().await;
        let started = Instant::now();

        let events = customer_events(&store, 999, &Entropy::seeded(1), EVENT_COUNT, EVENT_INTERVAL)
            .await
            .unwrap()
            .collect::<Vec<_>>()
            .await;

        assert!(events.is_empty());
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_stops_emission() {
        let (store, id) = seeded_store().await;
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        let events =
            customer_events(&store, id, &Entropy::seeded(1), EVENT_COUNT, EVENT_INTERVAL)
                .await
                .unwrap();

        let subscriber = tokio::spawn(async move {
            events
                .for_each(|event| {
                    let _ = tx.send(event);
                    async {}
                })
                .await;
        });

        for _ in 0..3 {
            rx.recv().await.unwrap();
        }
        subscriber.abort();

        tokio::time::sleep(EVENT_INTERVAL * 30).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_event_types_are_mixed() {
        let (store, id) = seeded_store().await;
        let entropy = Entropy::seeded(3);

        let mut kinds = HashSet::new();
        for _ in 0..10 {
            customer_events(&store, id, &entropy, EVENT_COUNT, Duration::ZERO)
                .await
                .unwrap()
                .for_each(|event| {
                    kinds.insert(event.event_type);
                    async {}
                })
                .await;
        }

        assert!(kinds.contains(&CustomerEventType::Updated));
        assert!(kinds.contains(&CustomerEventType::Deleted));
    }

    #[tokio::test]
    async fn test_store_errors_propagate() {
        let result = customer_events(
            &UnavailableStore,
            1,
            &Entropy::seeded(1),
            EVENT_COUNT,
            EVENT_INTERVAL,
        )
        .await;

        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }
}
