#![deny(missing_docs)]
//! # strata — umbrella crate
//!
//! Single import surface for the strata store layers. Re-exports the
//! protocol crate and each layer behind feature flags, plus a `prelude`
//! for the happy path.

pub use strata_core;
#[cfg(feature = "composite")]
pub use strata_composite;
#[cfg(feature = "radio")]
pub use strata_radio;
#[cfg(feature = "store")]
pub use strata_store;

/// Happy-path imports for building widget stores.
pub mod prelude {
    pub use strata_core::{
        Listener, SetStateAction, State, Store, StoreError, StoreExt, Subscription,
        default_value, default_value_or,
    };

    #[cfg(feature = "store")]
    pub use strata_store::BaseStore;

    #[cfg(feature = "composite")]
    pub use strata_composite::{
        CompositeStore, CompositeStoreFunctions, CompositeStoreOptions, CompositeStoreState,
        Orientation,
    };

    #[cfg(feature = "radio")]
    pub use strata_radio::{RadioStore, RadioStoreOptions, RadioStoreState, RadioValue};
}
