mod customer;
mod customer_event;
mod order;

pub use customer::Customer;
pub use customer_event::{CustomerEvent, CustomerEventType};
pub use order::{Order, MAX_ORDERS};
