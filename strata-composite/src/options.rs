//! Construction options for the composite layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use strata_core::Store;
use strata_core::serde_util::double_option;

/// Which arrow keys move between items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Left/right only.
    Horizontal,
    /// Up/down only.
    Vertical,
    /// All four directions.
    #[default]
    Both,
}

/// Options for [`CompositeStore::new`](crate::CompositeStore::new).
///
/// Every field is optional. `None` means "not given": the value is then
/// taken from the adopted `store`, or from the layer's default.
/// Deserializes from camelCase JSON; `store` is never serialized.
#[non_exhaustive]
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompositeStoreOptions {
    /// Controlled active item id. `Some(None)` means "no active item".
    #[serde(deserialize_with = "double_option")]
    pub active_id: Option<Option<String>>,
    /// Active item id used when nothing else provides one.
    #[serde(deserialize_with = "double_option")]
    pub default_active_id: Option<Option<String>>,
    /// Navigation orientation. Default: [`Orientation::Both`].
    pub orientation: Option<Orientation>,
    /// Right-to-left layout. Default: `false`.
    pub rtl: Option<bool>,
    /// Keep DOM focus on the container and mark the active item virtually.
    /// Default: `false`.
    pub virtual_focus: Option<bool>,
    /// Wrap from the last item to the first and back. Default: `false`.
    pub focus_loop: Option<bool>,
    /// Wrap between rows in two-dimensional widgets. Default: `false`.
    pub focus_wrap: Option<bool>,
    /// Shift focus to the neighbouring row when the column is empty.
    /// Default: `false`.
    pub focus_shift: Option<bool>,
    /// Treat the container itself as a focusable stop. Defaults to `true`
    /// exactly when the active id resolved to an explicit "none".
    pub includes_base_element: Option<bool>,
    /// Existing store to adopt. Its live state takes precedence over the
    /// declared defaults, and it is kept in sync with the new store.
    #[serde(skip)]
    pub store: Option<Arc<dyn Store>>,
}

impl CompositeStoreOptions {
    /// Empty options: every field resolves from the store or the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the controlled active id.
    pub fn with_active_id(mut self, id: Option<String>) -> Self {
        self.active_id = Some(id);
        self
    }

    /// Set the default active id.
    pub fn with_default_active_id(mut self, id: Option<String>) -> Self {
        self.default_active_id = Some(id);
        self
    }

    /// Set the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Set right-to-left layout.
    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = Some(rtl);
        self
    }

    /// Set virtual focus.
    pub fn with_virtual_focus(mut self, virtual_focus: bool) -> Self {
        self.virtual_focus = Some(virtual_focus);
        self
    }

    /// Set focus looping.
    pub fn with_focus_loop(mut self, focus_loop: bool) -> Self {
        self.focus_loop = Some(focus_loop);
        self
    }

    /// Set focus wrapping.
    pub fn with_focus_wrap(mut self, focus_wrap: bool) -> Self {
        self.focus_wrap = Some(focus_wrap);
        self
    }

    /// Set focus shifting.
    pub fn with_focus_shift(mut self, focus_shift: bool) -> Self {
        self.focus_shift = Some(focus_shift);
        self
    }

    /// Set whether the container is a focus stop.
    pub fn with_includes_base_element(mut self, includes: bool) -> Self {
        self.includes_base_element = Some(includes);
        self
    }

    /// Adopt an existing store.
    pub fn with_store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }
}

impl fmt::Debug for CompositeStoreOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeStoreOptions")
            .field("active_id", &self.active_id)
            .field("default_active_id", &self.default_active_id)
            .field("orientation", &self.orientation)
            .field("rtl", &self.rtl)
            .field("virtual_focus", &self.virtual_focus)
            .field("focus_loop", &self.focus_loop)
            .field("focus_wrap", &self.focus_wrap)
            .field("focus_shift", &self.focus_shift)
            .field("includes_base_element", &self.includes_base_element)
            .field("store", &self.store.is_some())
            .finish()
    }
}
