//! Page-fetch state machine for the orders table.

use crate::order::{Cursor, OrdersPage, Row};

/// Accumulated pagination state for the orders table.
///
/// `rows` only ever grows: a failed fetch leaves previously loaded rows
/// intact and the user sees them under the error banner. `cursor` is the
/// resume point once the server has provided one; whether more pages exist is
/// tracked separately in `has_more`, so a missing cursor never doubles as an
/// exhaustion marker.
#[derive(Debug)]
pub struct OrdersPageState {
    rows: Vec<Row>,
    cursor: Option<Cursor>,
    has_more: bool,
    is_fetching: bool,
    loading: bool,
    error: Option<String>,
}

impl Default for OrdersPageState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            cursor: None,
            has_more: true,
            is_fetching: false,
            // The first fetch fires on the first frame; start in the loading
            // state so there is no "No data available" flash before it lands.
            loading: true,
            error: None,
        }
    }
}

impl OrdersPageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows accumulated across all successful fetches, in arrival order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Resume point for the next fetch, once the server has provided one.
    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    /// False exactly when the most recent response carried no next cursor.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// True only between request dispatch and its resolution.
    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the user may request another page right now.
    pub fn can_load_more(&self) -> bool {
        self.has_more && !self.is_fetching
    }

    /// Move into the fetching state.
    ///
    /// Returns false (and changes nothing) when a fetch is already
    /// outstanding; the caller must not issue a request in that case.
    #[must_use]
    pub fn begin_fetch(&mut self) -> bool {
        if self.is_fetching {
            return false;
        }
        self.is_fetching = true;
        self.loading = true;
        self.error = None;
        true
    }

    /// Apply a successful page: append its rows, advance the resume cursor,
    /// and recompute `has_more` from the presence of the next cursor.
    pub fn apply_page(&mut self, page: OrdersPage) {
        log::debug!("applying page: {} rows", page.data.len());
        self.rows.extend(page.data);
        self.has_more = page.next_cursor.is_some();
        if let Some(next) = page.next_cursor {
            self.cursor = Some(next);
        }
        self.finish();
    }

    /// Record a failed fetch. Accumulated rows stay untouched.
    pub fn apply_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.finish();
    }

    // Flags are released on every outcome, success or failure.
    fn finish(&mut self) {
        self.is_fetching = false;
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FetchError;
    use serde_json::{Map, Value, json};

    fn row(id: i64) -> Row {
        let mut row = Map::new();
        row.insert("id".to_owned(), json!(id));
        row
    }

    fn page(ids: &[i64], next: Option<&str>) -> OrdersPage {
        OrdersPage {
            data: ids.iter().copied().map(row).collect(),
            next_cursor: next.map(Cursor::new),
        }
    }

    fn ids(state: &OrdersPageState) -> Vec<Value> {
        state.rows().iter().map(|r| r["id"].clone()).collect()
    }

    #[test]
    fn test_rows_are_concatenated_in_fetch_order() {
        let mut state = OrdersPageState::new();

        assert!(state.begin_fetch());
        state.apply_page(page(&[1, 2], Some("10")));
        assert!(state.begin_fetch());
        state.apply_page(page(&[3], Some("20")));
        assert!(state.begin_fetch());
        state.apply_page(page(&[4, 5], None));

        assert_eq!(ids(&state), vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);
    }

    #[test]
    fn test_has_more_tracks_next_cursor_presence() {
        let mut state = OrdersPageState::new();
        assert!(state.has_more(), "more pages assumed before the first fetch");

        assert!(state.begin_fetch());
        state.apply_page(page(&[1], Some("10")));
        assert!(state.has_more());
        assert_eq!(state.cursor(), Some(&Cursor::new("10")));

        assert!(state.begin_fetch());
        state.apply_page(page(&[2], None));
        assert!(!state.has_more());
        // The resume point is retained; exhaustion lives in has_more alone.
        assert_eq!(state.cursor(), Some(&Cursor::new("10")));
        assert!(!state.can_load_more());
    }

    #[test]
    fn test_begin_fetch_rejects_reentry() {
        let mut state = OrdersPageState::new();
        assert!(state.begin_fetch());
        assert!(!state.begin_fetch(), "second fetch while in flight must be a no-op");
        assert!(state.is_fetching());

        state.apply_page(page(&[], None));
        assert!(!state.is_fetching());
        assert!(state.begin_fetch());
    }

    #[test]
    fn test_error_keeps_accumulated_rows() {
        let mut state = OrdersPageState::new();
        assert!(state.begin_fetch());
        state.apply_page(page(&[1, 2], Some("10")));

        assert!(state.begin_fetch());
        state.apply_error(FetchError::Unreachable.to_string());

        assert_eq!(state.rows().len(), 2, "rows survive a failed fetch");
        assert!(state.error().unwrap().contains("CORS"));
        assert!(!state.is_fetching());
        assert!(!state.loading());
    }

    #[test]
    fn test_flags_released_on_every_outcome() {
        let mut state = OrdersPageState::new();

        assert!(state.begin_fetch());
        assert!(state.is_fetching());
        assert!(state.loading());
        state.apply_page(page(&[1], None));
        assert!(!state.is_fetching());
        assert!(!state.loading());

        let mut state = OrdersPageState::new();
        assert!(state.begin_fetch());
        state.apply_error("boom");
        assert!(!state.is_fetching());
        assert!(!state.loading());
    }

    #[test]
    fn test_new_fetch_clears_previous_error() {
        let mut state = OrdersPageState::new();
        assert!(state.begin_fetch());
        state.apply_error("boom");
        assert!(state.error().is_some());

        assert!(state.begin_fetch());
        assert!(state.error().is_none(), "a retry starts with a clean banner");
    }
}
