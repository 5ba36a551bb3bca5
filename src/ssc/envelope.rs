//! SSC wraps nearly every value as a `[metadata, payload]` pair, where the metadata is a Java
//! class name and the payload is the part we care about. These helpers unwrap one level each
//! and return `None` when the shape does not match, so a descent reads as an `Option` chain.

use serde_json::Value;

/// Returns the payload of a `[metadata, payload]` envelope.
pub fn payload(value: &Value) -> Option<&Value> {
    match value.as_array()?.as_slice() {
        [_, payload, ..] => Some(payload),
        _ => None,
    }
}

/// Looks up `key` on an object and unwraps the envelope stored under it.
pub fn field_payload<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).and_then(payload)
}

/// Unwraps an envelope whose payload is a list.
pub fn list_payload(value: &Value) -> Option<&[Value]> {
    payload(value).and_then(Value::as_array).map(Vec::as_slice)
}
