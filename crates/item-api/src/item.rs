use serde_json::Value;

/// One stored item: attribute name to attribute value. Values cover the
/// full JSON range (string, number, bool, null, object, array), so items of
/// arbitrary shape round-trip through the store without loss.
pub type ItemRecord = serde_json::Map<String, Value>;

/// Parses a request body as a JSON object. Anything else (empty body,
/// malformed JSON, a top-level array or scalar) is rejected.
pub fn parse_item(body: &[u8]) -> Option<ItemRecord> {
    match serde_json::from_slice(body) {
        Ok(Value::Object(item)) => Some(item),
        _ => None,
    }
}
