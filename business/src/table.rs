//! Column derivation and cell formatting for the orders table.
//!
//! The schema is inferred from the data: column keys come from the first
//! row, and only the `items` column gets special treatment (a nested list of
//! `{name, quantity, price}` objects rendered as one formatted string).

use serde_json::Value;

use crate::order::Row;

/// Column holding the nested order items.
pub const ITEMS_COLUMN: &str = "items";

/// Display label for the items column.
pub const ITEMS_HEADER: &str = "Items (Name, Qty, Price)";

/// Rendered when a row has no usable items value.
pub const NO_ITEMS_FALLBACK: &str = "No items available";

/// Column keys in wire order, taken from the first row.
///
/// Empty while no rows are loaded. Keys are returned raw; display renaming
/// happens in [`header_label`] so cell lookups keep working.
pub fn columns(rows: &[Row]) -> Vec<String> {
    rows.first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

/// Human-readable header for a column key.
pub fn header_label(column: &str) -> &str {
    if column == ITEMS_COLUMN {
        ITEMS_HEADER
    } else {
        column
    }
}

/// Text for one table cell.
pub fn cell_text(column: &str, row: &Row) -> String {
    if column == ITEMS_COLUMN {
        format_items(row.get(column))
    } else {
        display_value(row.get(column))
    }
}

/// `"name (Qty: q, Price: $p)"` per item, comma-joined. Anything that is not
/// an array renders the fixed fallback.
fn format_items(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| {
                format!(
                    "{} (Qty: {}, Price: ${})",
                    display_value(item.get("name")),
                    display_value(item.get("quantity")),
                    display_value(item.get("price")),
                )
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => NO_ITEMS_FALLBACK.to_owned(),
    }
}

/// Raw value rendering: strings unquoted, numbers and booleans as written,
/// null and missing values empty, nested structures as compact JSON.
fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
