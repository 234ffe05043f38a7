//! Error-body message extraction
//!
//! Backends report failures in several shapes: a plain string, a JSON string
//! that itself contains JSON, `{error}`, `{message}` or `{errors: [...]}`.
//! Each shape has one decoder; they are tried in order and the first one that
//! yields a message wins.

use serde_json::Value;

/// A decoder inspects one JSON value at the given nesting depth
pub type Decoder = fn(&Value, u8) -> Option<String>;

/// Nested JSON (string-in-string, `{error: {message}}`) is followed at most this deep
const MAX_DEPTH: u8 = 4;

/// Decoders in priority order
pub const DECODERS: &[(&str, Decoder)] = &[
    ("string", decode_string),
    ("error", decode_error_field),
    ("message", decode_message_field),
    ("errors", decode_errors_list),
];

/// Extract a human-readable message from a raw response body
///
/// Returns `None` when nothing usable is found; callers then fall back to a
/// fixed message.
pub fn extract_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => extract_from_value(&value),
        // HTML error pages from proxies are not worth showing
        Err(_) if trimmed.starts_with('<') => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Extract a message from an already-parsed JSON value
pub fn extract_from_value(value: &Value) -> Option<String> {
    walk(value, 0)
}

fn walk(value: &Value, depth: u8) -> Option<String> {
    if depth > MAX_DEPTH {
        return None;
    }
    DECODERS.iter().find_map(|(name, decode)| {
        let found = decode(value, depth);
        if found.is_some() {
            tracing::trace!(decoder = *name, depth, "Extracted error message");
        }
        found
    })
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

fn decode_string(value: &Value, depth: u8) -> Option<String> {
    let Value::String(s) = value else {
        return None;
    };
    match serde_json::from_str::<Value>(s.trim()) {
        Ok(inner @ (Value::Object(_) | Value::Array(_))) => walk(&inner, depth + 1),
        _ => non_empty(s),
    }
}

fn field_text(value: &Value, field: &str, depth: u8) -> Option<String> {
    match value.get(field)? {
        s @ Value::String(_) => decode_string(s, depth),
        inner @ Value::Object(_) => walk(inner, depth + 1),
        _ => None,
    }
}

fn decode_error_field(value: &Value, depth: u8) -> Option<String> {
    field_text(value, "error", depth)
}

fn decode_message_field(value: &Value, depth: u8) -> Option<String> {
    field_text(value, "message", depth)
}

fn item_text(item: &Value) -> Option<String> {
    match item {
        Value::String(s) => non_empty(s),
        Value::Object(_) => ["message", "msg"]
            .iter()
            .find_map(|k| item.get(*k).and_then(Value::as_str).and_then(non_empty)),
        _ => None,
    }
}

fn decode_errors_list(value: &Value, _depth: u8) -> Option<String> {
    let messages: Vec<String> = match value.get("errors")? {
        Value::Array(items) => items.iter().filter_map(item_text).collect(),
        // Field-keyed validation errors: {"errors": {"sku": ["taken"]}}
        Value::Object(fields) => fields
            .values()
            .flat_map(|v| match v {
                Value::Array(items) => items.iter().filter_map(item_text).collect(),
                other => item_text(other).into_iter().collect::<Vec<_>>(),
            })
            .collect(),
        _ => return None,
    };
    (!messages.is_empty()).then(|| messages.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_text_body() {
        assert_eq!(
            extract_message("Variation already exists"),
            Some("Variation already exists".to_string())
        );
    }

    #[test]
    fn test_empty_and_html_bodies() {
        assert_eq!(extract_message("   "), None);
        assert_eq!(extract_message("<html><body>502</body></html>"), None);
    }

    #[test]
    fn test_error_field() {
        assert_eq!(
            extract_message(r#"{"error": "Color not found"}"#),
            Some("Color not found".to_string())
        );
    }

    #[test]
    fn test_message_field() {
        assert_eq!(
            extract_message(r#"{"success": false, "message": "Invalid price"}"#),
            Some("Invalid price".to_string())
        );
    }

    #[test]
    fn test_error_takes_priority_over_message() {
        let value = json!({"message": "Bad Request", "error": "SKU taken"});
        assert_eq!(extract_from_value(&value), Some("SKU taken".to_string()));
    }

    #[test]
    fn test_errors_array_joined() {
        let value = json!({"errors": ["stock must be >= 0", {"message": "sku required"}]});
        assert_eq!(
            extract_from_value(&value),
            Some("stock must be >= 0, sku required".to_string())
        );
    }

    #[test]
    fn test_errors_field_map() {
        let value = json!({"errors": {"selling_price": ["must be positive"]}});
        assert_eq!(
            extract_from_value(&value),
            Some("must be positive".to_string())
        );
    }

    #[test]
    fn test_json_string_containing_json() {
        let body = serde_json::to_string(&json!(r#"{"message": "nested"}"#)).unwrap();
        assert_eq!(extract_message(&body), Some("nested".to_string()));
    }

    #[test]
    fn test_nested_error_object() {
        let value = json!({"error": {"message": "deep"}});
        assert_eq!(extract_from_value(&value), Some("deep".to_string()));
    }

    #[test]
    fn test_unrecognized_shape() {
        assert_eq!(extract_from_value(&json!({"code": 500})), None);
        assert_eq!(extract_from_value(&json!({"errors": []})), None);
        assert_eq!(extract_from_value(&json!(42)), None);
    }
}
