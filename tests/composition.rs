//! Composition patterns across the strata layers.
//!
//! 1. **Layer stacking**: radio over composite over base, one merged snapshot
//! 2. **Store adoption**: independent widget trees sharing one selection
//! 3. **Derived stores**: pick/omit views that stay in sync
//! 4. **Configuration**: one JSON object configuring every layer

use serde_json::json;
use std::sync::{Arc, Mutex};
use strata::prelude::*;
use strata_core::test_utils::{RecordingListener, state_from_json};

fn text(s: &str) -> Option<RadioValue> {
    Some(RadioValue::from(s))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 1. Layer stacking
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn radio_snapshot_merges_composite_state() {
    let radio = RadioStore::new(RadioStoreOptions::new().with_default_value(text("apple"))).unwrap();
    let composite = radio.composite().state().unwrap();
    let merged = radio.state().unwrap();

    assert_eq!(merged.composite.active_id, composite.active_id);
    assert_eq!(merged.composite.orientation, composite.orientation);
    assert!(merged.focus_loop());
    assert_eq!(merged.value, text("apple"));
}

#[test]
fn every_layer_is_a_store() {
    fn read_focus_loop(store: &dyn Store) -> bool {
        store.get::<bool>("focusLoop").unwrap()
    }

    let radio = RadioStore::new(RadioStoreOptions::new()).unwrap();
    assert!(read_focus_loop(&radio));
    assert!(read_focus_loop(radio.composite()));
    assert!(read_focus_loop(&**radio.base()));
}

#[test]
fn listeners_observe_writes_from_any_layer() {
    let radio = RadioStore::new(RadioStoreOptions::new()).unwrap();
    let rec = RecordingListener::new();
    let _sub = radio.subscribe(None, rec.listener());

    radio.set_value(text("apple")).unwrap();
    radio.composite().set("virtualFocus", true).unwrap();
    radio.set_state("orientation", SetStateAction::Value(json!("vertical")));

    assert_eq!(rec.count(), 3);
    let composite = radio.composite().state().unwrap();
    assert!(composite.virtual_focus);
    assert_eq!(composite.orientation, Orientation::Vertical);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 2. Store adoption
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn independent_trees_share_one_selection() {
    let owner = RadioStore::new(RadioStoreOptions::new().with_default_value(text("pear"))).unwrap();
    let toolbar = RadioStore::new(RadioStoreOptions::new().with_store(owner.handle())).unwrap();
    let sidebar = RadioStore::new(RadioStoreOptions::new().with_store(owner.handle())).unwrap();

    assert_eq!(toolbar.value().unwrap(), text("pear"));
    assert_eq!(sidebar.value().unwrap(), text("pear"));

    toolbar.set_value(text("plum")).unwrap();
    assert_eq!(sidebar.value().unwrap(), text("plum"));
    assert_eq!(owner.value().unwrap(), text("plum"));

    owner.set_value(None).unwrap();
    assert_eq!(toolbar.value().unwrap(), None);
}

#[test]
fn adopting_a_hand_built_store() {
    let external = BaseStore::new(state_from_json(json!({
        "value": 7,
        "focusLoop": false,
        "activeId": "radio-7",
    })));
    let radio = RadioStore::new(RadioStoreOptions::new().with_store(external.clone())).unwrap();

    let state = radio.state().unwrap();
    assert_eq!(state.value, Some(RadioValue::from(7)));
    assert!(!state.focus_loop());
    assert_eq!(state.composite.active_id.as_deref(), Some("radio-7"));

    radio.set_value(Some(RadioValue::from(8))).unwrap();
    assert_eq!(external.get::<u64>("value").unwrap(), 8);
}

#[test]
fn listener_writing_back_into_a_shared_store() {
    let owner = RadioStore::new(RadioStoreOptions::new()).unwrap();
    let mirror = RadioStore::new(RadioStoreOptions::new().with_store(owner.handle())).unwrap();

    // Every selection also activates the matching item.
    let composite = mirror.clone();
    let _sub = mirror.subscribe_keys(&["value"], move |state, _| {
        let id = state.get("value").and_then(|v| v.as_str()).map(|v| format!("radio-{v}"));
        composite.move_to(id).unwrap();
    });

    owner.set_value(text("a")).unwrap();
    let state = owner.state().unwrap();
    assert_eq!(state.composite.active_id.as_deref(), Some("radio-a"));
    assert_eq!(state.composite.moves, 1);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 3. Derived stores
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn picked_value_view_tracks_the_radio() {
    let radio = RadioStore::new(RadioStoreOptions::new()).unwrap();
    let view = radio.base().pick(&["value"]);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = view.sync(None, move |state, _| {
        sink.lock().unwrap().push(state.get("value").cloned());
    });

    radio.set_value(text("fig")).unwrap();
    view.set("value", "date").unwrap();

    assert_eq!(radio.value().unwrap(), text("date"));
    assert_eq!(
        *seen.lock().unwrap(),
        vec![Some(json!(null)), Some(json!("fig")), Some(json!("date"))]
    );
}

#[test]
fn omitted_view_hides_the_value() {
    let radio = RadioStore::new(RadioStoreOptions::new()).unwrap();
    let view = radio.base().omit(&["value"]);
    assert!(!view.get_state().contains_key("value"));
    assert!(view.get_state().contains_key("focusLoop"));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// 4. Configuration
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[test]
fn json_configures_every_layer() {
    let opts: RadioStoreOptions = serde_json::from_value(json!({
        "value": null,
        "defaultValue": "ignored",
        "focusLoop": false,
        "rtl": true,
        "defaultActiveId": "radio-1",
    }))
    .unwrap();
    let state = RadioStore::new(opts).unwrap().state().unwrap();

    assert_eq!(state.value, None);
    assert!(!state.focus_loop());
    assert!(state.composite.rtl);
    assert_eq!(state.composite.active_id.as_deref(), Some("radio-1"));
}

#[test]
fn malformed_configuration_fails_fast() {
    let result: Result<RadioStoreOptions, _> =
        serde_json::from_value(json!({ "value": { "nested": true } }));
    assert!(result.is_err());

    let external = BaseStore::new(state_from_json(json!({ "value": false })));
    let err = RadioStore::new(RadioStoreOptions::new().with_store(external)).unwrap_err();
    assert!(matches!(err, StoreError::InvalidValue { .. }));
}
