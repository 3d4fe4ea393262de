mod customer;

#[derive(async_graphql::MergedSubscription, Default)]
pub struct Subscription(customer::Subscription);
