pub mod orders;

pub use orders::{orders_table, poll_orders_responses, trigger_fetch};
