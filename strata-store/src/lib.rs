#![deny(missing_docs)]
//! Observable base store for strata.
//!
//! [`BaseStore`] holds one immutable [`State`] snapshot behind a lock and
//! replaces it on every write. Listeners are kept in registration order and
//! notified synchronously, after the lock is released, so they may read,
//! write and (un)subscribe re-entrantly.
//!
//! A store can be created with sync partners. For every key present in
//! both the store and a partner, writes flow both ways: a local write is
//! forwarded to the partner before it is applied here, and a partner write
//! is pulled in through a listener. Partners only hold weak references
//! back, so dropping a store detaches it from its partners.

use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Weak};
use strata_core::{Listener, SetStateAction, State, Store, Subscription};
use tracing::{debug, trace};

struct Entry {
    keys: Option<Vec<String>>,
    listener: Listener,
}

impl Entry {
    fn wants(&self, key: &str) -> bool {
        self.keys
            .as_ref()
            .is_none_or(|keys| keys.iter().any(|k| k == key))
    }
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: BTreeMap<u64, Arc<Entry>>,
}

/// Observable key-addressed state container.
///
/// Always handled through an `Arc`: partners and derived stores keep
/// references to it, and [`BaseStore::pick`]/[`BaseStore::omit`] need one.
pub struct BaseStore {
    state: RwLock<Arc<State>>,
    listeners: Arc<Mutex<Listeners>>,
    partners: Vec<Arc<dyn Store>>,
    // Dropping these removes our sync listeners from the partners.
    _partner_subscriptions: Vec<Subscription>,
}

impl BaseStore {
    /// Create a store with no partners.
    pub fn new(initial: State) -> Arc<Self> {
        Self::with_partners(initial, Vec::new())
    }

    /// Create a store kept in sync with `partners`.
    ///
    /// Only keys that exist in `initial` and in a partner's current state
    /// are synced with that partner. The initial values are taken as given;
    /// callers resolve them against the partners beforehand.
    pub fn with_partners(
        initial: State,
        partners: impl IntoIterator<Item = Arc<dyn Store>>,
    ) -> Arc<Self> {
        let partners: Vec<Arc<dyn Store>> = partners.into_iter().collect();
        debug!(
            keys = initial.len(),
            partners = partners.len(),
            "creating base store"
        );
        Arc::new_cyclic(move |weak: &Weak<Self>| {
            let subscriptions = partners
                .iter()
                .filter_map(|partner| sync_with(partner, &initial, weak.clone()))
                .collect();
            Self {
                state: RwLock::new(Arc::new(initial)),
                listeners: Arc::new(Mutex::new(Listeners::default())),
                partners,
                _partner_subscriptions: subscriptions,
            }
        })
    }

    /// Derive a store over only `keys`, kept in sync with this one.
    pub fn pick(self: &Arc<Self>, keys: &[&str]) -> Arc<Self> {
        self.derive(|key| keys.contains(&key))
    }

    /// Derive a store over every key except `keys`, kept in sync with this one.
    pub fn omit(self: &Arc<Self>, keys: &[&str]) -> Arc<Self> {
        self.derive(|key| !keys.contains(&key))
    }

    /// Number of registered listeners, sync listeners of partners included.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().entries.len()
    }

    fn derive(self: &Arc<Self>, keep: impl Fn(&str) -> bool) -> Arc<Self> {
        let subset: State = self
            .get_state()
            .iter()
            .filter(|(key, _)| keep(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let parent: Arc<dyn Store> = Arc::clone(self) as Arc<dyn Store>;
        Self::with_partners(subset, [parent])
    }

    fn write(&self, key: &str, action: SetStateAction<Value>, from_partner: bool) -> bool {
        let current = self.state.read().get(key).cloned();
        let Some(current) = current else {
            trace!(key, "ignoring write to unknown key");
            return false;
        };
        let next = action.apply(&current);
        if next == current {
            return false;
        }

        if !from_partner {
            for partner in &self.partners {
                partner.set_state(key, SetStateAction::Value(next.clone()));
            }
        }

        let (state, prev) = {
            let mut guard = self.state.write();
            // A partner synced this key back while we forwarded; its value
            // is newer than `next` and has already been notified.
            if guard.get(key) != Some(&current) {
                trace!(key, "key already moved by a partner");
                return true;
            }
            let prev = Arc::clone(&guard);
            let mut state = State::clone(&prev);
            state.insert(key.to_owned(), next);
            let state = Arc::new(state);
            *guard = Arc::clone(&state);
            (state, prev)
        };

        trace!(key, from_partner, "state updated");
        self.notify(key, &state, &prev);
        true
    }

    fn notify(&self, key: &str, state: &State, prev: &State) {
        let entries: Vec<(u64, Arc<Entry>)> = self
            .listeners
            .lock()
            .entries
            .iter()
            .map(|(id, entry)| (*id, Arc::clone(entry)))
            .collect();

        for (id, entry) in entries {
            if !entry.wants(key) {
                continue;
            }
            // Skip listeners removed by an earlier listener in this round.
            if !self.listeners.lock().entries.contains_key(&id) {
                continue;
            }
            (entry.listener)(state, prev);
        }
    }
}

fn sync_with(
    partner: &Arc<dyn Store>,
    initial: &State,
    store: Weak<BaseStore>,
) -> Option<Subscription> {
    let partner_state = partner.get_state();
    let keys: Vec<String> = initial
        .keys()
        .filter(|key| partner_state.contains_key(*key))
        .cloned()
        .collect();
    if keys.is_empty() {
        return None;
    }

    let synced = keys.clone();
    let source = Arc::downgrade(partner);
    let listener: Listener = Arc::new(move |state: &State, prev: &State| {
        let Some(store) = store.upgrade() else {
            return;
        };
        // `state` can be stale when a listener earlier in the same round
        // wrote to the partner again, so copy the partner's live value.
        let live = source.upgrade().map(|partner| partner.get_state());
        for key in &synced {
            if state.get(key) == prev.get(key) {
                continue;
            }
            let value = live.as_deref().unwrap_or(state).get(key);
            if let Some(value) = value {
                trace!(key = key.as_str(), "syncing from partner");
                store.write(key, SetStateAction::Value(value.clone()), true);
            }
        }
    });
    Some(partner.subscribe(Some(keys), listener))
}

impl Store for BaseStore {
    fn get_state(&self) -> Arc<State> {
        Arc::clone(&self.state.read())
    }

    fn set_state(&self, key: &str, action: SetStateAction<Value>) -> bool {
        self.write(key, action, false)
    }

    fn subscribe(&self, keys: Option<Vec<String>>, listener: Listener) -> Subscription {
        let id = {
            let mut listeners = self.listeners.lock();
            let id = listeners.next_id;
            listeners.next_id += 1;
            listeners.entries.insert(id, Arc::new(Entry { keys, listener }));
            id
        };
        let listeners = Arc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.lock().entries.remove(&id);
            }
        })
    }
}

impl fmt::Debug for BaseStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseStore")
            .field("state", &self.get_state())
            .field("partners", &self.partners.len())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
