//! Serde helpers for option structs.

use serde::{Deserialize, Deserializer};

/// Deserialize a tri-state field.
///
/// Use with `#[serde(default, deserialize_with = "...")]`: an absent key
/// stays `None` (unset) through `default`, while a present key becomes
/// `Some(..)`, so `null` arrives as `Some(None)`.
pub fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Opts {
        #[serde(default, deserialize_with = "double_option")]
        value: Option<Option<String>>,
    }

    #[test]
    fn absent_is_unset() {
        let opts: Opts = serde_json::from_value(json!({})).unwrap();
        assert_eq!(opts.value, None);
    }

    #[test]
    fn null_is_explicitly_empty() {
        let opts: Opts = serde_json::from_value(json!({ "value": null })).unwrap();
        assert_eq!(opts.value, Some(None));
    }

    #[test]
    fn present_is_set() {
        let opts: Opts = serde_json::from_value(json!({ "value": "apple" })).unwrap();
        assert_eq!(opts.value, Some(Some("apple".to_string())));
    }
}
