use async_graphql::{Enum, SimpleObject};
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use super::Customer;

#[derive(Enum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerEventType {
    Updated,
    Deleted,
}

/// Fair coin between the two event types.
impl Distribution<CustomerEventType> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CustomerEventType {
        if rng.gen_bool(0.5) {
            CustomerEventType::Deleted
        } else {
            CustomerEventType::Updated
        }
    }
}

/// A synthetic change notification for a customer.
#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct CustomerEvent {
    pub customer: Customer,
    #[graphql(name = "type")]
    pub event_type: CustomerEventType,
}
