//! Literal-or-updater writes.

use std::fmt;

/// A write to one state field: either the new value itself, or a function
/// that derives the new value from the previous one.
///
/// The function form is resolved exactly once, at the moment the write is
/// applied, against the value the store holds at that time.
pub enum SetStateAction<T> {
    /// Replace the field with this value.
    Value(T),
    /// Compute the replacement from the previous value.
    Update(Box<dyn FnOnce(&T) -> T + Send>),
}

impl<T> SetStateAction<T> {
    /// Build an updater from a closure over the previous value.
    pub fn update(f: impl FnOnce(&T) -> T + Send + 'static) -> Self {
        Self::Update(Box::new(f))
    }

    /// Resolve the action against the previous value.
    pub fn apply(self, prev: &T) -> T {
        match self {
            Self::Value(value) => value,
            Self::Update(f) => f(prev),
        }
    }
}

impl<T> From<T> for SetStateAction<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for SetStateAction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Update(_) => f.write_str("Update(..)"),
        }
    }
}
