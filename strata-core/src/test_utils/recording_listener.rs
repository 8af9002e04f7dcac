//! RecordingListener — records every notification it receives.

use crate::state::State;
use crate::store::Listener;
use parking_lot::Mutex;
use std::sync::Arc;

/// One recorded notification.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Snapshot after the write.
    pub state: State,
    /// Snapshot before the write.
    pub prev: State,
}

impl Notification {
    /// Whether `key` differs between the two snapshots.
    pub fn changed(&self, key: &str) -> bool {
        self.state.get(key) != self.prev.get(key)
    }
}

/// A listener that records every call. Clone it freely; clones share the
/// same record.
#[derive(Clone, Default)]
pub struct RecordingListener {
    calls: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingListener {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A [`Listener`] that appends to this recorder.
    pub fn listener(&self) -> Listener {
        let calls = Arc::clone(&self.calls);
        Arc::new(move |state: &State, prev: &State| {
            calls.lock().push(Notification {
                state: state.clone(),
                prev: prev.clone(),
            });
        })
    }

    /// Number of notifications so far.
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Snapshot of all notifications so far.
    pub fn calls(&self) -> Vec<Notification> {
        self.calls.lock().clone()
    }

    /// The most recent notification, if any.
    pub fn last(&self) -> Option<Notification> {
        self.calls.lock().last().cloned()
    }
}
