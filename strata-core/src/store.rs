//! The Store protocol and typed helpers over it.

use crate::action::SetStateAction;
use crate::error::StoreError;
use crate::state::State;
use crate::subscription::Subscription;
use serde::Serialize;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Change callback. Receives the snapshot after the write and the snapshot
/// before it.
pub type Listener = Arc<dyn Fn(&State, &State) + Send + Sync>;

/// A shared, observable, key-addressed state container.
///
/// Every layer of a widget store speaks this trait, and an adopted external
/// store is accepted as `Arc<dyn Store>`, so layers can be stacked and
/// shared without knowing each other's concrete types.
///
/// Implementations:
/// - `BaseStore` (strata-store): the container itself
/// - `CompositeStore`, `RadioStore`: layers forwarding to their own `BaseStore`
///
/// Implementations must not hold internal locks while invoking listeners,
/// so listeners may read, write and (un)subscribe re-entrantly.
pub trait Store: Send + Sync {
    /// The current snapshot.
    fn get_state(&self) -> Arc<State>;

    /// Write one field. Returns whether the field changed.
    ///
    /// Writes to keys the state does not hold are ignored. Writing a value
    /// equal to the current one is a no-op and notifies nobody.
    ///
    /// Writes are ordered on one thread only. An updater runs against the
    /// value read when the write starts; if the field has moved by the time
    /// the write lands, the newer value is kept and the write is dropped.
    fn set_state(&self, key: &str, action: SetStateAction<serde_json::Value>) -> bool;

    /// Register `listener`. With `Some(keys)` it only runs when one of those
    /// keys changes; with `None` it runs on every change.
    fn subscribe(&self, keys: Option<Vec<String>>, listener: Listener) -> Subscription;
}

/// Typed conveniences available on every [`Store`].
pub trait StoreExt: Store {
    /// Read `key` as `T`.
    fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T, StoreError> {
        let state = self.get_state();
        let raw = state
            .get(key)
            .ok_or_else(|| StoreError::MissingKey(key.to_owned()))?;
        serde_json::from_value(raw.clone()).map_err(|e| StoreError::invalid(key, e))
    }

    /// Write a typed value to `key`. Returns whether the field changed.
    fn set<T: Serialize>(&self, key: &str, value: T) -> Result<bool, StoreError> {
        let value =
            serde_json::to_value(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(self.set_state(key, SetStateAction::Value(value)))
    }

    /// Apply a typed literal-or-updater write to `key`.
    ///
    /// An updater is handed to [`Store::set_state`] and runs against the
    /// value the store reads when applying it. That value is decoded as
    /// `T` first; a field holding something else fails without writing.
    /// See [`Store::set_state`] for writes racing on several threads.
    fn update<T>(&self, key: &str, action: SetStateAction<T>) -> Result<bool, StoreError>
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        let f = match action {
            SetStateAction::Value(value) => return self.set(key, value),
            SetStateAction::Update(f) => f,
        };
        if !self.get_state().contains_key(key) {
            return Err(StoreError::MissingKey(key.to_owned()));
        }

        let failure = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&failure);
        let owned_key = key.to_owned();
        let changed = self.set_state(
            key,
            SetStateAction::update(move |prev: &serde_json::Value| {
                let next = serde_json::from_value::<T>(prev.clone())
                    .map_err(|e| StoreError::invalid(&owned_key, e))
                    .and_then(|prev| {
                        serde_json::to_value(f(&prev))
                            .map_err(|e| StoreError::Serialization(e.to_string()))
                    });
                next.unwrap_or_else(|err| {
                    *sink.lock() = Some(err);
                    prev.clone()
                })
            }),
        );

        match failure.lock().take() {
            Some(err) => Err(err),
            None => Ok(changed),
        }
    }

    /// Subscribe to changes of the given keys.
    fn subscribe_keys<F>(&self, keys: &[&str], listener: F) -> Subscription
    where
        F: Fn(&State, &State) + Send + Sync + 'static,
    {
        let keys = keys.iter().map(|k| (*k).to_owned()).collect();
        self.subscribe(Some(keys), Arc::new(listener))
    }

    /// Subscribe to every change.
    fn subscribe_all<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&State, &State) + Send + Sync + 'static,
    {
        self.subscribe(None, Arc::new(listener))
    }

    /// Run `listener` once against the current snapshot, then on every
    /// change of the given keys (`None` for all keys).
    fn sync<F>(&self, keys: Option<&[&str]>, listener: F) -> Subscription
    where
        F: Fn(&State, &State) + Send + Sync + 'static,
    {
        let state = self.get_state();
        listener(&*state, &*state);
        let keys = keys.map(|keys| keys.iter().map(|k| (*k).to_owned()).collect());
        self.subscribe(keys, Arc::new(listener))
    }
}

impl<S: Store + ?Sized> StoreExt for S {}
