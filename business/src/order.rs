//! Wire types for the paginated orders endpoint.

use serde::{Deserialize, Deserializer, de};
use serde_json::{Map, Value};

use crate::FetchError;

/// One order record, keyed by column name.
///
/// The table schema is whatever the server sends; column order follows the
/// JSON object order of the first row (`serde_json` is built with
/// `preserve_order`).
pub type Row = Map<String, Value>;

/// Opaque pagination token.
///
/// The server may encode it as a JSON string or number. It is stored verbatim
/// and echoed back unchanged in the `cursor` query parameter; no arithmetic
/// is ever performed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Cursor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(Self(s)),
            Value::Number(n) => Ok(Self(n.to_string())),
            other => Err(de::Error::custom(format!(
                "cursor must be a string or number, got {other}"
            ))),
        }
    }
}

/// One page of the orders listing.
#[derive(Debug, Clone, Deserialize)]
pub struct OrdersPage {
    /// Rows in server order.
    pub data: Vec<Row>,
    /// Token for the next page; absent or null when the sequence is exhausted.
    #[serde(default, rename = "nextCursor")]
    pub next_cursor: Option<Cursor>,
}

/// Parse a response body into a page.
///
/// Anything that is not a `{"data": [...]}` object is a format error carrying
/// the payload text: the compact JSON rendering when the body parsed at all,
/// otherwise the raw bytes as lossy UTF-8.
pub fn parse_page(body: &[u8]) -> Result<OrdersPage, FetchError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| FetchError::format(String::from_utf8_lossy(body).into_owned()))?;
    serde_json::from_value(value.clone()).map_err(|_| FetchError::format(value.to_string()))
}
