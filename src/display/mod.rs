pub mod table;

pub use table::TableDisplay;

use serde_json::Value;

/// Pretty-print a JSON document with two-space indentation
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
