#![deny(missing_docs)]
//! Radio layer for strata.
//!
//! [`RadioStore`] stacks one field, `value`, on top of the composite layer:
//!
//! ```text
//! RadioStore ── BaseStore { ...composite state, value }
//!     │             │ sync partners
//!     │             ├── CompositeStore ── BaseStore { activeId, focusLoop, ... }
//!     │             └── adopted store (optional)
//!     └── forwards CompositeStoreFunctions to CompositeStore
//! ```
//!
//! The radio store's own [`BaseStore`] holds the merged snapshot. It is kept
//! in sync with the composite layer below it and, when one is adopted, with
//! an external store, so several radio groups can share one selection.

pub mod options;
pub mod value;

pub use options::RadioStoreOptions;
pub use value::RadioValue;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use strata_composite::{CompositeStore, CompositeStoreFunctions, CompositeStoreState};
use strata_core::state::from_state;
use strata_core::{
    Listener, SetStateAction, State, Store, StoreError, StoreExt, Subscription, default_value_or,
    read_field,
};
use strata_store::BaseStore;
use tracing::{debug, trace};

/// Typed view of the radio state.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioStoreState {
    /// Everything the composite layer holds. `focus_loop` defaults to `true`
    /// for radio groups.
    #[serde(flatten)]
    pub composite: CompositeStoreState,
    /// The selected value, `None` when nothing is selected.
    pub value: Option<RadioValue>,
}

impl RadioStoreState {
    /// Whether focus wraps around at the ends of the group.
    pub fn focus_loop(&self) -> bool {
        self.composite.focus_loop
    }
}

/// State of a radio group.
///
/// Cheap to clone; clones share the same underlying stores.
#[derive(Debug, Clone)]
pub struct RadioStore {
    composite: CompositeStore,
    store: Arc<BaseStore>,
}

impl RadioStore {
    /// Create a radio store.
    ///
    /// `focusLoop` resolves from the explicit option, then the adopted
    /// store, then `true`. `value` resolves from the explicit option, then
    /// the adopted store, then `default_value`, then `None`. Everything else
    /// is resolved by the composite layer.
    ///
    /// Fails fast if the adopted store holds a `value` or `focusLoop` of
    /// the wrong shape.
    pub fn new(options: RadioStoreOptions) -> Result<Self, StoreError> {
        let RadioStoreOptions {
            mut composite,
            value,
            default_value: declared,
        } = options;

        let sync_state = composite.store.as_ref().map(|store| store.get_state());
        let sync = sync_state.as_deref();

        composite.focus_loop = Some(default_value_or(
            [composite.focus_loop, read_field(sync, "focusLoop")?],
            true,
        ));
        let value: Option<RadioValue> =
            default_value_or([value, read_field(sync, "value")?, declared], None);

        let external = composite.store.clone();
        let composite = CompositeStore::new(composite)?;

        let mut initial = State::clone(&composite.get_state());
        initial.insert(
            "value".to_owned(),
            serde_json::to_value(&value).map_err(|e| StoreError::Serialization(e.to_string()))?,
        );

        debug!(
            adopted = external.is_some(),
            value = ?value,
            "creating radio store"
        );
        let partners = [Some(composite.handle()), external];
        let store = BaseStore::with_partners(initial, partners.into_iter().flatten());
        Ok(Self { composite, store })
    }

    /// Typed view of the current state.
    pub fn state(&self) -> Result<RadioStoreState, StoreError> {
        from_state(&self.store.get_state())
    }

    /// The selected value.
    pub fn value(&self) -> Result<Option<RadioValue>, StoreError> {
        self.store.get("value")
    }

    /// Whether focus wraps around at the ends of the group.
    pub fn focus_loop(&self) -> Result<bool, StoreError> {
        self.store.get("focusLoop")
    }

    /// Select a value, or derive it from the current one.
    ///
    /// ```
    /// use strata_core::SetStateAction;
    /// use strata_radio::{RadioStore, RadioStoreOptions, RadioValue};
    ///
    /// let store = RadioStore::new(RadioStoreOptions::new()).unwrap();
    /// store.set_value(Some(RadioValue::from("apple"))).unwrap();
    /// store
    ///     .set_value(SetStateAction::update(|value: &Option<RadioValue>| {
    ///         match value.as_ref().and_then(RadioValue::as_str) {
    ///             Some("apple") => Some("orange".into()),
    ///             _ => Some("apple".into()),
    ///         }
    ///     }))
    ///     .unwrap();
    /// assert_eq!(store.value().unwrap(), Some(RadioValue::from("orange")));
    /// ```
    ///
    /// Returns whether the value changed. Listeners on `value` run once per
    /// change and not at all for a write of the current value.
    pub fn set_value(
        &self,
        action: impl Into<SetStateAction<Option<RadioValue>>>,
    ) -> Result<bool, StoreError> {
        let changed = self.store.update("value", action.into())?;
        trace!(changed, "radio value set");
        Ok(changed)
    }

    /// Shared handle to this store, for adoption by another widget.
    pub fn handle(&self) -> Arc<dyn Store> {
        Arc::clone(&self.store) as Arc<dyn Store>
    }

    /// The composite layer this store is built on.
    pub fn composite(&self) -> &CompositeStore {
        &self.composite
    }

    /// The base store holding the merged snapshot.
    pub fn base(&self) -> &Arc<BaseStore> {
        &self.store
    }
}

impl CompositeStoreFunctions for RadioStore {
    fn set_active_id(&self, action: SetStateAction<Option<String>>) -> Result<bool, StoreError> {
        self.composite.set_active_id(action)
    }

    fn move_to(&self, id: Option<String>) -> Result<(), StoreError> {
        self.composite.move_to(id)
    }
}

impl Store for RadioStore {
    fn get_state(&self) -> Arc<State> {
        self.store.get_state()
    }

    fn set_state(&self, key: &str, action: SetStateAction<Value>) -> bool {
        self.store.set_state(key, action)
    }

    fn subscribe(&self, keys: Option<Vec<String>>, listener: Listener) -> Subscription {
        self.store.subscribe(keys, listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strata_composite::CompositeStoreOptions;
    use strata_core::test_utils::state_from_json;

    #[test]
    fn merged_snapshot_holds_both_layers() {
        let store = RadioStore::new(RadioStoreOptions::new()).unwrap();
        let snapshot = store.get_state();
        assert!(snapshot.contains_key("value"));
        assert!(snapshot.contains_key("activeId"));
        assert!(snapshot.contains_key("focusLoop"));
    }

    #[test]
    fn focus_loop_override_reaches_composite_layer() {
        let store = RadioStore::new(RadioStoreOptions::new()).unwrap();
        assert!(store.composite().state().unwrap().focus_loop);
    }

    #[test]
    fn explicit_focus_loop_wins() {
        let store = RadioStore::new(RadioStoreOptions::new().with_focus_loop(false)).unwrap();
        assert!(!store.focus_loop().unwrap());
    }

    #[test]
    fn adopted_focus_loop_beats_radio_default() {
        let external = BaseStore::new(state_from_json(json!({ "focusLoop": false })));
        let store = RadioStore::new(RadioStoreOptions::new().with_store(external)).unwrap();
        assert!(!store.focus_loop().unwrap());
    }

    #[test]
    fn value_is_not_forwarded_into_the_composite_layer() {
        let store = RadioStore::new(RadioStoreOptions::new()).unwrap();
        store.set_value(Some(RadioValue::from("apple"))).unwrap();
        assert!(!store.composite().get_state().contains_key("value"));
    }

    #[test]
    fn composite_functions_are_forwarded() {
        let store = RadioStore::new(RadioStoreOptions::new()).unwrap();
        store.move_to(Some("radio-2".into())).unwrap();
        let state = store.state().unwrap();
        assert_eq!(state.composite.active_id.as_deref(), Some("radio-2"));
        assert_eq!(state.composite.moves, 1);
    }

    #[test]
    fn composite_options_pass_through() {
        let opts = RadioStoreOptions::new()
            .with_composite(CompositeStoreOptions::new().with_rtl(true).with_virtual_focus(true));
        let state = RadioStore::new(opts).unwrap().state().unwrap();
        assert!(state.composite.rtl);
        assert!(state.composite.virtual_focus);
        assert!(state.focus_loop());
    }

    #[test]
    fn malformed_adopted_value_fails() {
        let external = BaseStore::new(state_from_json(json!({ "value": [1, 2] })));
        let err = RadioStore::new(RadioStoreOptions::new().with_store(external)).unwrap_err();
        assert!(matches!(err, StoreError::InvalidValue { ref key, .. } if key == "value"));
    }

    #[test]
    fn garbage_written_through_raw_set_state_surfaces_on_typed_read() {
        let store = RadioStore::new(RadioStoreOptions::new()).unwrap();
        store.set_state("value", SetStateAction::Value(json!(true)));
        assert!(store.value().is_err());
        let err = store
            .set_value(SetStateAction::update(|v: &Option<RadioValue>| v.clone()))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidValue { .. }));
    }
}
