//! Helpers for testing stores.
//!
//! Available behind the `test-utils` feature flag.

mod recording_listener;

pub use recording_listener::{Notification, RecordingListener};

use crate::state::State;

/// Build a [`State`] from a `serde_json::json!` object literal.
///
/// Non-object values produce an empty state.
pub fn state_from_json(value: serde_json::Value) -> State {
    match value {
        serde_json::Value::Object(map) => map,
        _ => State::new(),
    }
}
