//! Property-based tests: default-value resolution.

use proptest::prelude::*;
use strata_core::{default_value, default_value_or};

fn arb_candidate() -> impl Strategy<Value = Option<Option<i64>>> {
    prop_oneof![
        Just(None),
        Just(Some(None)),
        any::<i64>().prop_map(|n| Some(Some(n))),
    ]
}

proptest! {
    #[test]
    fn returns_first_defined(
        candidates in proptest::collection::vec(arb_candidate(), 0..8),
    ) {
        let expected = candidates.iter().find(|c| c.is_some()).cloned().flatten();
        prop_assert_eq!(default_value(candidates.clone()), expected);
    }

    #[test]
    fn unset_only_when_all_unset(
        candidates in proptest::collection::vec(arb_candidate(), 0..8),
    ) {
        let resolved = default_value(candidates.clone());
        prop_assert_eq!(resolved.is_none(), candidates.iter().all(Option::is_none));
    }

    #[test]
    fn leading_unset_candidates_are_skipped(x in any::<i64>(), skipped in 0usize..5) {
        let mut candidates = vec![None; skipped];
        candidates.push(Some(x));
        prop_assert_eq!(default_value(candidates), Some(x));
    }

    #[test]
    fn null_is_never_skipped(x in any::<i64>()) {
        prop_assert_eq!(default_value([Some(None), Some(Some(x))]), Some(None));
    }

    #[test]
    fn fallback_is_last_resort(x in any::<i64>(), fallback in any::<i64>()) {
        prop_assert_eq!(default_value_or([None, None], fallback), fallback);
        prop_assert_eq!(default_value_or([None, Some(x)], fallback), x);
    }
}
