use async_graphql::SimpleObject;
use rand::Rng;

/// Largest number of orders generated for one customer.
pub const MAX_ORDERS: i32 = 100;

/// A synthetic order. Ids are only unique within one resolution of
/// `Customer.orders`.
#[derive(SimpleObject, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
}

impl Order {
    /// Between 1 and [`MAX_ORDERS`] orders numbered from 1.
    pub fn generate(customer_id: i32, rng: &mut impl Rng) -> Vec<Self> {
        let count = rng.gen_range(1..=MAX_ORDERS);

        (1..=count).map(|id| Self { id, customer_id }).collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_generated_orders_are_numbered_from_one() {
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let orders = Order::generate(42, &mut rng);

            assert!((1..=MAX_ORDERS as usize).contains(&orders.len()));
            assert!(orders.iter().all(|order| order.customer_id == 42));
            assert!(orders
                .iter()
                .zip(1..)
                .all(|(order, expected)| order.id == expected));
        }
    }

    #[test]
    fn test_order_counts_cover_the_range() {
        let counts = (0..2_000)
            .map(|seed| Order::generate(1, &mut StdRng::seed_from_u64(seed)).len())
            .collect::<Vec<_>>();

        assert!(counts.iter().any(|count| *count <= 5));
        assert!(counts.iter().any(|count| *count >= 95));
    }
}
