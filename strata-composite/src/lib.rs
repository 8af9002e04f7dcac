#![deny(missing_docs)]
//! Composite layer for strata.
//!
//! A composite widget is a group of navigable items with one active item:
//! toolbars, radio groups, listboxes. This layer owns the state such a
//! widget shares between its container and its items, and the setters that
//! move the active item. Choosing *which* item to move to (next, previous,
//! first, last) is left to the embedding UI.
//!
//! Layers built on top of this one adopt a [`CompositeStore`] as a sync
//! partner and forward [`CompositeStoreFunctions`] to it.

pub mod options;

pub use options::{CompositeStoreOptions, Orientation};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use strata_core::state::{from_state, to_state};
use strata_core::{
    Listener, SetStateAction, State, Store, StoreError, StoreExt, Subscription, default_value,
    default_value_or, read_field,
};
use strata_store::BaseStore;
use tracing::debug;

/// Typed view of the composite state.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeStoreState {
    /// Id of the active item, `None` when the container itself is active.
    ///
    /// An unset and an explicitly null `activeId` option are both stored as
    /// `null`. Only `includes_base_element` keeps the difference, and stores
    /// adopting this one read `null` as an explicit value.
    pub active_id: Option<String>,
    /// Incremented every time the active item is moved programmatically.
    pub moves: u64,
    /// Navigation orientation.
    pub orientation: Orientation,
    /// Right-to-left layout.
    pub rtl: bool,
    /// Virtual focus.
    pub virtual_focus: bool,
    /// Wrap around at the ends.
    pub focus_loop: bool,
    /// Wrap between rows.
    pub focus_wrap: bool,
    /// Shift to neighbouring rows.
    pub focus_shift: bool,
    /// The container is a focus stop.
    pub includes_base_element: bool,
}

/// Operations the composite layer exposes, and every layer above it forwards.
pub trait CompositeStoreFunctions {
    /// Set the active item id. `None` activates the container itself.
    fn set_active_id(&self, action: SetStateAction<Option<String>>) -> Result<bool, StoreError>;

    /// Move to `id` and bump the `moves` counter, so the UI knows to focus
    /// the new item even when `id` equals the current one.
    fn move_to(&self, id: Option<String>) -> Result<(), StoreError>;
}

/// The composite layer: a [`BaseStore`] seeded with [`CompositeStoreState`].
///
/// Cheap to clone; clones share the same underlying store.
#[derive(Debug, Clone)]
pub struct CompositeStore {
    store: Arc<BaseStore>,
}

impl CompositeStore {
    /// Create a composite store.
    ///
    /// Each field resolves from, in order: the explicit option, the adopted
    /// store's live state, the declared default (`default_active_id`), the
    /// layer fallback. Fails if the adopted store holds a value of the
    /// wrong shape for one of these keys.
    pub fn new(options: CompositeStoreOptions) -> Result<Self, StoreError> {
        let sync_state = options.store.as_ref().map(|store| store.get_state());
        let sync = sync_state.as_deref();

        let active_id = default_value([
            options.active_id.clone(),
            read_field(sync, "activeId")?,
            options.default_active_id.clone(),
        ]);
        let includes_base_element = default_value_or(
            [
                options.includes_base_element,
                read_field(sync, "includesBaseElement")?,
            ],
            matches!(active_id, Some(None)),
        );

        let state = CompositeStoreState {
            active_id: active_id.flatten(),
            moves: default_value_or([read_field(sync, "moves")?], 0),
            orientation: default_value_or(
                [options.orientation, read_field(sync, "orientation")?],
                Orientation::Both,
            ),
            rtl: default_value_or([options.rtl, read_field(sync, "rtl")?], false),
            virtual_focus: default_value_or(
                [options.virtual_focus, read_field(sync, "virtualFocus")?],
                false,
            ),
            focus_loop: default_value_or(
                [options.focus_loop, read_field(sync, "focusLoop")?],
                false,
            ),
            focus_wrap: default_value_or(
                [options.focus_wrap, read_field(sync, "focusWrap")?],
                false,
            ),
            focus_shift: default_value_or(
                [options.focus_shift, read_field(sync, "focusShift")?],
                false,
            ),
            includes_base_element,
        };

        debug!(
            adopted = options.store.is_some(),
            focus_loop = state.focus_loop,
            "creating composite store"
        );
        let store = BaseStore::with_partners(to_state(&state)?, options.store);
        Ok(Self { store })
    }

    /// Typed view of the current state.
    pub fn state(&self) -> Result<CompositeStoreState, StoreError> {
        from_state(&self.store.get_state())
    }

    /// Shared handle to the underlying store, for adoption by another layer
    /// or another widget.
    pub fn handle(&self) -> Arc<dyn Store> {
        Arc::clone(&self.store) as Arc<dyn Store>
    }

    /// The underlying base store.
    pub fn base(&self) -> &Arc<BaseStore> {
        &self.store
    }
}

impl CompositeStoreFunctions for CompositeStore {
    fn set_active_id(&self, action: SetStateAction<Option<String>>) -> Result<bool, StoreError> {
        self.store.update("activeId", action)
    }

    fn move_to(&self, id: Option<String>) -> Result<(), StoreError> {
        self.store.set("activeId", id)?;
        self.store
            .update("moves", SetStateAction::update(|moves: &u64| moves + 1))?;
        Ok(())
    }
}

impl Store for CompositeStore {
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
