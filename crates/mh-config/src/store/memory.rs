//! In-memory store, used by tests and for one-off scans.

use async_trait::async_trait;
use mh_common::StoreError;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use super::EntryStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<Map<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a JSON object; non-objects give an empty store.
    pub fn from_value(value: Value) -> Self {
        let values = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self {
            values: RwLock::new(values),
        }
    }

    pub async fn snapshot(&self) -> Value {
        Value::Object(self.values.read().await.clone())
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}
