use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untrusted listing record exactly as the upstream provider returned it.
///
/// Nothing about the shape is guaranteed: keys may be missing, null, carry a
/// string where a number is expected, or sit under a provider-specific nested
/// object. The only consumer that should look inside is the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawListing(Map<String, Value>);

impl RawListing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, treating JSON `null` as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    /// Reads `key` inside the object stored under `parent`.
    pub fn nested(&self, parent: &str, key: &str) -> Option<&Value> {
        self.get(parent)
            .and_then(Value::as_object)
            .and_then(|object| object.get(key))
            .filter(|value| !value.is_null())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }
}

impl From<Map<String, Value>> for RawListing {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for RawListing {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}
