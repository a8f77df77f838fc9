//! Orders table widget.
//!
//! Split into:
//! - `api`: the HTTP call and the handoff of its result back to the UI thread
//! - `panel`: rendering, the Load More trigger and response polling

mod api;
mod panel;

pub use panel::{orders_table, poll_orders_responses, trigger_fetch};
