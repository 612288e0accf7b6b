use serde::{Deserialize, Serialize};

use crate::{ConfigSource, KeyValue};

/// In-memory key-value configuration.
///
/// Entries are kept in insertion order; lookups scan from the end so a later
/// entry for the same key overrides an earlier one. Serialized as a plain array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap(Vec<KeyValue>);

impl ConfigMap {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append an entry, shadowing any earlier value for the same key.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.push(KeyValue::new(key, value));
        self
    }

    /// Builder-style [`ConfigMap::insert`].
    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(key, value);
        self
    }

    /// Last value recorded for `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|kv| kv.key() == key)
            .map(KeyValue::value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyValue> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(KeyValue::from).collect())
    }
}

impl ConfigSource for ConfigMap {
    fn get(&self, key: &str) -> Option<String> {
        self.value(key).map(str::to_owned)
    }

    fn name(&self) -> &'static str {
        "config-map"
    }
}
