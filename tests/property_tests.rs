//! Property tests for the sanitization invariants.
//!
//! These tests validate the filtering contract over generated attribute
//! batches and deny-lists rather than hand-picked cases.

use assign_guard::{
    AttributeSanitizer, AttributeSet, Authorizer, DenyListAuthorizer, NoopReactor, StrictReactor,
};
use proptest::prelude::*;

// Strategy: a batch of unique attribute names with arbitrary values,
// in a stable insertion order.
fn arb_attributes() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::hash_set("[a-z]{1,6}", 0..8)
        .prop_flat_map(|names| {
            let names: Vec<String> = names.into_iter().collect();
            let len = names.len();
            (Just(names), prop::collection::vec(any::<i64>(), len))
        })
        .prop_map(|(names, values)| names.into_iter().zip(values).collect())
}

// Strategy: an independent deny-list over the same name alphabet, so it
// overlaps the batch sometimes and misses it sometimes.
fn arb_deny_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{1,6}", 0..8).prop_map(|names| names.into_iter().collect())
}

proptest! {
    /// Property: the sanitized keys are a subset of the input keys.
    #[test]
    fn proptest_sanitized_keys_are_subset_of_input(
        pairs in arb_attributes(),
        denied in arb_deny_list()
    ) {
        let input: AttributeSet<i64> = pairs.into_iter().collect();
        let authorizer = DenyListAuthorizer::new(denied);
        let sanitizer = AttributeSanitizer::new(NoopReactor);

        let sanitized = sanitizer.sanitize(&input, &authorizer).unwrap();

        for key in sanitized.keys() {
            prop_assert!(input.contains_key(key), "key '{}' not in input", key);
        }
    }

    /// Property: exactly the denied keys are removed, nothing else.
    #[test]
    fn proptest_exactly_the_denied_keys_are_removed(
        pairs in arb_attributes(),
        denied in arb_deny_list()
    ) {
        let input: AttributeSet<i64> = pairs.into_iter().collect();
        let authorizer = DenyListAuthorizer::new(denied);
        let sanitizer = AttributeSanitizer::new(NoopReactor);

        let sanitized = sanitizer.sanitize(&input, &authorizer).unwrap();

        for key in input.keys() {
            let kept = sanitized.contains_key(key);
            prop_assert_eq!(
                kept,
                !authorizer.deny(key),
                "key '{}' kept={} but deny={}",
                key,
                kept,
                authorizer.deny(key)
            );
        }
    }

    /// Property: surviving entries keep their exact values.
    #[test]
    fn proptest_surviving_values_are_unaltered(
        pairs in arb_attributes(),
        denied in arb_deny_list()
    ) {
        let input: AttributeSet<i64> = pairs.into_iter().collect();
        let authorizer = DenyListAuthorizer::new(denied);
        let sanitizer = AttributeSanitizer::new(NoopReactor);

        let sanitized = sanitizer.sanitize(&input, &authorizer).unwrap();

        for (key, value) in sanitized.iter() {
            prop_assert_eq!(input.get(key), Some(value));
        }
    }

    /// Property: sanitizing an already-sanitized batch changes nothing,
    /// since no surviving key is denied.
    #[test]
    fn proptest_sanitize_is_idempotent(
        pairs in arb_attributes(),
        denied in arb_deny_list()
    ) {
        let input: AttributeSet<i64> = pairs.into_iter().collect();
        let authorizer = DenyListAuthorizer::new(denied);
        let sanitizer = AttributeSanitizer::new(NoopReactor);

        let once = sanitizer.sanitize(&input, &authorizer).unwrap();
        let twice = sanitizer.sanitize(&once, &authorizer).unwrap();

        prop_assert_eq!(once, twice);
    }

    /// Property: an authorizer that denies nothing returns an equal copy.
    #[test]
    fn proptest_no_denials_returns_equal_copy(pairs in arb_attributes()) {
        let input: AttributeSet<i64> = pairs.into_iter().collect();
        let authorizer = DenyListAuthorizer::new(Vec::<String>::new());
        let sanitizer = AttributeSanitizer::new(NoopReactor);

        let sanitized = sanitizer.sanitize(&input, &authorizer).unwrap();

        prop_assert_eq!(sanitized, input);
    }

    /// Property: a strict failure lists exactly the denied input keys, in
    /// input order, exempt names included.
    #[test]
    fn proptest_strict_error_lists_removed_keys_in_input_order(
        pairs in arb_attributes(),
        denied in arb_deny_list()
    ) {
        let input: AttributeSet<i64> = pairs.into_iter().collect();
        let authorizer = DenyListAuthorizer::new(denied);
        let sanitizer = AttributeSanitizer::new(StrictReactor::new());

        let expected_removed: Vec<String> = input
            .keys()
            .filter(|k| authorizer.deny(k))
            .map(|k| k.to_string())
            .collect();
        let fatal = expected_removed.iter().any(|k| *k != "id");

        match sanitizer.sanitize(&input, &authorizer) {
            Ok(sanitized) => {
                prop_assert!(!fatal, "expected a strict failure");
                for key in sanitized.keys() {
                    prop_assert!(!authorizer.deny(key));
                }
            }
            Err(error) => {
                prop_assert!(fatal, "strict failure without non-exempt removal");
                prop_assert_eq!(error.removed(), expected_removed.as_slice());
            }
        }
    }
}
