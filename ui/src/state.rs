use orders_business::{BusinessConfig, OrdersPageState};

/// The main application state.
#[derive(Default)]
pub struct State {
    /// Backend configuration.
    pub config: BusinessConfig,
    /// Pagination state for the orders table.
    pub orders: OrdersPageState,
}

impl State {
    /// State pointed at an explicit backend, for integration tests.
    pub fn test(base_url: String) -> Self {
        Self {
            config: BusinessConfig::new(base_url),
            orders: OrdersPageState::new(),
        }
    }
}
