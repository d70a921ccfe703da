use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parse raw translation file bytes into a JSON value.
///
/// Whitespace-only content is treated as an empty document and yields `None`.
/// A leading UTF-8 BOM is ignored.
pub fn parse_json_bytes(path: &Path, bytes: &[u8]) -> Result<Option<Value>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(bytes)
        .map(Some)
        .map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Flatten a translation tree into dotted key paths, in document order.
///
/// Only objects are recursed into. Strings, numbers, booleans, nulls and
/// arrays (even arrays of objects) are leaves. A non-object root yields no keys.
///
/// ```
/// use i18n_typegen::core::parsers::json::flatten_keys;
///
/// let tree = serde_json::json!({ "a": { "b": 1, "c": 2 }, "d": 3 });
/// assert_eq!(flatten_keys(&tree), vec!["a.b", "a.c", "d"]);
/// ```
pub fn flatten_keys(value: &Value) -> Vec<String> {
    let mut keys = Vec::new();
    flatten_json(value, "", &mut keys);
    keys
}

fn flatten_json(value: &Value, prefix: &str, result: &mut Vec<String>) {
    let Value::Object(map) = value else {
        return;
    };

    for (key, val) in map {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match val {
            Value::Object(_) => flatten_json(val, &full, result),
            Value::Array(_) | Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {
                result.push(full)
            }
        }
    }
}
