//! # strata-core — protocol types for layered state stores
//!
//! A strata store is a shared, observable, key-addressed state container.
//! Widgets build their stores out of layers: every layer contributes its own
//! fields and operations and forwards the rest to the layer below it.
//!
//! | Piece | Item | What it does |
//! |-------|------|-------------|
//! | Snapshot | [`State`] | Immutable JSON object, one field per key |
//! | Protocol | [`Store`] | Read, keyed write, keyed subscribe |
//! | Helpers | [`StoreExt`] | Typed reads/writes on top of any [`Store`] |
//! | Writes | [`SetStateAction`] | A literal value or a function of the previous one |
//! | Listening | [`Listener`], [`Subscription`] | Change callbacks and their handles |
//! | Defaults | [`default_value`], [`default_value_or`] | First-defined candidate resolution |
//!
//! ## Unset vs. null
//!
//! Layers resolve every optional field through an ordered candidate list.
//! A candidate that was never given is `None`. A candidate that was given as
//! an explicit "nothing" is `Some(None)` and wins over later candidates.
//! Keep the two apart: collapsing them changes which default applies.

#![deny(missing_docs)]

pub mod action;
pub mod error;
pub mod resolve;
pub mod serde_util;
pub mod state;
pub mod store;
pub mod subscription;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use action::SetStateAction;
pub use error::StoreError;
pub use resolve::{default_value, default_value_or, read_field};
pub use state::State;
pub use store::{Listener, Store, StoreExt};
pub use subscription::Subscription;
