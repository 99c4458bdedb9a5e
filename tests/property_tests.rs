//! Property-based tests for the tokenizer/serializer pair.
//!
//! These complement the example-driven integration tests by checking the
//! normalization and round-trip guarantees across generated inputs.

use proptest::prelude::*;
use pg_textarray::{edit_string_for_array, parse_array};

/// Tokens free of commas, quotes, and edge whitespace: the domain over
/// which the round trip is guaranteed.
fn simple_token() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,9}"
}

/// Like `simple_token`, but with internal single spaces allowed; these
/// get quoted on output.
fn spaced_token() -> impl Strategy<Value = String> {
    "[a-z]{1,6}( [a-z]{1,6}){0,2}"
}

proptest! {
    #[test]
    fn prop_parse_yields_trimmed_nonempty_tokens(s in ".{0,64}") {
        for token in parse_array(&s) {
            prop_assert!(!token.is_empty());
            prop_assert_eq!(token.trim(), token.as_str());
        }
    }

    #[test]
    fn prop_edit_string_is_order_independent(mut tokens in prop::collection::vec(simple_token(), 0..8)) {
        let forward = edit_string_for_array(&tokens);
        tokens.reverse();
        let backward = edit_string_for_array(&tokens);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_round_trip_preserves_token_set(tokens in prop::collection::vec(simple_token(), 0..8)) {
        let edited = edit_string_for_array(&tokens);
        let mut parsed = parse_array(&edited);
        parsed.sort_unstable();
        parsed.dedup();

        let mut expected = tokens;
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn prop_round_trip_preserves_spaced_tokens(tokens in prop::collection::vec(spaced_token(), 0..8)) {
        let edited = edit_string_for_array(&tokens);
        let mut parsed = parse_array(&edited);
        parsed.sort_unstable();
        parsed.dedup();

        let mut expected = tokens;
        expected.sort_unstable();
        expected.dedup();
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn prop_edit_output_is_idempotent(tokens in prop::collection::btree_set(simple_token(), 0..8)) {
        // For a duplicate-free token set, re-editing a parsed edit string
        // changes nothing.
        let once = edit_string_for_array(&tokens);
        let twice = edit_string_for_array(parse_array(&once));
        prop_assert_eq!(twice, once);
    }
}
