//! Default-value resolution.
//!
//! Layers compute every optional field from an ordered list of candidates:
//!
//! 1. the value passed explicitly in the options,
//! 2. the value an adopted external store currently holds,
//! 3. the caller-declared default,
//! 4. the layer's own fallback.
//!
//! The first candidate that is defined wins. For nullable fields the
//! candidate type is itself an `Option`, and `Some(None)` is a defined
//! (explicitly empty) value.

use crate::error::StoreError;
use crate::state::State;
use serde::de::DeserializeOwned;

/// Return the first defined candidate, or `None` if every candidate is unset.
///
/// ```
/// use strata_core::default_value;
///
/// assert_eq!(default_value([None, None, Some(3)]), Some(3));
/// // An explicit null is not skipped.
/// assert_eq!(default_value([Some(None), Some(Some("apple"))]), Some(None));
/// ```
pub fn default_value<T>(candidates: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    candidates.into_iter().flatten().next()
}

/// Like [`default_value`], with a fallback that makes resolution total.
pub fn default_value_or<T>(candidates: impl IntoIterator<Item = Option<T>>, fallback: T) -> T {
    default_value(candidates).unwrap_or(fallback)
}

/// Read `key` from an adopted store's snapshot as a resolution candidate.
///
/// No snapshot, or a snapshot without `key`, yields `Ok(None)`. A present
/// value that does not deserialize as `T` is a contract violation by the
/// caller that supplied the store, and fails with
/// [`StoreError::InvalidValue`] rather than quietly falling through to a
/// default.
pub fn read_field<T: DeserializeOwned>(
    sync_state: Option<&State>,
    key: &str,
) -> Result<Option<T>, StoreError> {
    let Some(raw) = sync_state.and_then(|state| state.get(key)) else {
        return Ok(None);
    };
    serde_json::from_value(raw.clone())
        .map(Some)
        .map_err(|e| StoreError::invalid(key, e))
}
