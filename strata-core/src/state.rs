//! State snapshots.

use crate::error::StoreError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// One immutable snapshot of a store's state, keyed by field name.
///
/// Field names use the camelCase spelling widgets share across layers
/// (`focusLoop`, `activeId`, `value`), so stores built independently
/// agree on which keys to keep in sync.
pub type State = serde_json::Map<String, serde_json::Value>;

/// Serialize a typed state struct into a [`State`] map.
///
/// Fails with [`StoreError::Serialization`] if `value` does not serialize
/// to a JSON object.
pub fn to_state<T: Serialize>(value: &T) -> Result<State, StoreError> {
    match serde_json::to_value(value).map_err(|e| StoreError::Serialization(e.to_string()))? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(StoreError::Serialization(format!(
            "expected an object, got {other}"
        ))),
    }
}

/// Deserialize a typed view out of a [`State`] snapshot.
///
/// Keys the target type does not declare are ignored, so a layer can
/// read its own slice out of a merged snapshot.
pub fn from_state<T: DeserializeOwned>(state: &State) -> Result<T, StoreError> {
    serde_json::from_value(serde_json::Value::Object(state.clone()))
        .map_err(|e| StoreError::Serialization(e.to_string()))
}
