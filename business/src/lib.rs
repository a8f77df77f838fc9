//! Business logic for the Orders app: wire types for the paginated orders
//! endpoint, the page-fetch state machine, error shaping and table
//! formatting. No UI types live here.

mod config;
mod error;
mod order;
mod page;
pub mod table;

pub use config::BusinessConfig;
pub use error::FetchError;
pub use order::{Cursor, OrdersPage, Row, parse_page};
pub use page::OrdersPageState;
