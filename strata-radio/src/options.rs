//! Construction options for the radio layer.

use crate::value::RadioValue;
use serde::Deserialize;
use std::sync::Arc;
use strata_composite::CompositeStoreOptions;
use strata_core::Store;
use strata_core::serde_util::double_option;

/// Options for [`RadioStore::new`](crate::RadioStore::new).
///
/// Composite options are flattened in, so one camelCase JSON object
/// configures both layers. `focus_loop` defaults to `true` here, unlike
/// the composite layer.
#[non_exhaustive]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RadioStoreOptions {
    /// Options forwarded to the composite layer, including the adopted store.
    #[serde(flatten)]
    pub composite: CompositeStoreOptions,
    /// Controlled value. `Some(None)` selects nothing.
    #[serde(deserialize_with = "double_option")]
    pub value: Option<Option<RadioValue>>,
    /// Value used when neither `value` nor the adopted store provide one.
    #[serde(deserialize_with = "double_option")]
    pub default_value: Option<Option<RadioValue>>,
}

impl RadioStoreOptions {
    /// Empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the controlled value.
    pub fn with_value(mut self, value: Option<RadioValue>) -> Self {
        self.value = Some(value);
        self
    }

    /// Set the default value.
    pub fn with_default_value(mut self, value: Option<RadioValue>) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Set focus looping.
    pub fn with_focus_loop(mut self, focus_loop: bool) -> Self {
        self.composite.focus_loop = Some(focus_loop);
        self
    }

    /// Replace the composite options. The adopted store, if any, is kept
    /// unless `composite` names one of its own.
    pub fn with_composite(mut self, composite: CompositeStoreOptions) -> Self {
        let store = self.composite.store.take();
        self.composite = composite;
        if self.composite.store.is_none() {
            self.composite.store = store;
        }
        self
    }

    /// Adopt an existing store, typically another radio store's
    /// [`handle`](crate::RadioStore::handle).
    pub fn with_store(mut self, store: Arc<dyn Store>) -> Self {
        self.composite.store = Some(store);
        self
    }
}
