use serde::{Deserialize, Serialize};

/// Single configuration entry.
///
/// The value is kept as the raw string an operator supplied; interpretation
/// (integer parsing, enum names) happens at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    key: String,
    value: String,
}

impl KeyValue {
    /// Create a new entry.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<K, V> From<(K, V)> for KeyValue
where
    K: Into<String>,
    V: Into<String>,
{
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::KeyValue;

    #[test]
    fn tuple_conversion_keeps_raw_value() {
        let kv: KeyValue = ("OTEL_METRIC_EXPORT_INTERVAL", " 1_000 ").into();
        assert_eq!(kv.key(), "OTEL_METRIC_EXPORT_INTERVAL");
        assert_eq!(kv.value(), " 1_000 ");
    }

    #[test]
    fn serde_shape_is_key_value_object() {
        let kv = KeyValue::new("OTEL_METRIC_EXPORT_TIMEOUT", "19");
        let json = serde_json::to_string(&kv).unwrap();
        assert_eq!(json, r#"{"key":"OTEL_METRIC_EXPORT_TIMEOUT","value":"19"}"#);

        let back: KeyValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kv);
    }
}
