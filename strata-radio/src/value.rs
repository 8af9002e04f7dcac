//! Radio values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The value of one radio item: a string or a number.
///
/// A group with no selection holds `None` rather than a sentinel value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RadioValue {
    /// A numeric value.
    Number(serde_json::Number),
    /// A string value.
    Text(String),
}

impl RadioValue {
    /// The string value, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    /// The numeric value, if this is one.
    pub fn as_number(&self) -> Option<&serde_json::Number> {
        match self {
            Self::Number(number) => Some(number),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for RadioValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for RadioValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for RadioValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RadioValue {
                fn from(n: $ty) -> Self {
                    Self::Number(serde_json::Number::from(n))
                }
            }
        )*
    };
}

number_from!(i32, i64, u32, u64);
