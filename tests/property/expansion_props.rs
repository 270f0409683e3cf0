//! Property tests for semantic expansion.

use certsearch::expand;
use certsearch::semantic::SEMANTIC_MAP;
use proptest::prelude::*;

fn table_size() -> usize {
    SEMANTIC_MAP.iter().map(|(_, related)| related.len()).sum()
}

proptest! {
    /// The (lowercased) query is always part of its own expansion.
    #[test]
    fn prop_contains_query(query in "[a-zA-Z0-9 ]{0,20}") {
        prop_assert!(expand(&query).contains(&query.to_lowercase()));
    }

    /// Apart from the query, every term comes from the table.
    #[test]
    fn prop_terms_from_table(query in "[a-z0-9 ]{0,20}") {
        for term in expand(&query) {
            if term == query {
                continue;
            }
            let known = SEMANTIC_MAP
                .iter()
                .any(|(_, related)| related.contains(&term.as_str()));
            prop_assert!(known, "{:?} not in the table", term);
        }
    }

    /// Expansion is bounded by the table, however long the query.
    #[test]
    fn prop_bounded(query in "[a-z0-9 ]{0,60}") {
        prop_assert!(expand(&query).len() <= table_size() + 1);
    }

    /// Embedding a trigger pulls in all of its related terms.
    #[test]
    fn prop_trigger_fires(idx in 0usize..64, prefix in "[0-9 ]{0,4}", suffix in "[0-9 ]{0,4}") {
        let (trigger, related) = SEMANTIC_MAP[idx % SEMANTIC_MAP.len()];
        let expanded = expand(&format!("{prefix}{trigger}{suffix}"));
        for term in related {
            prop_assert!(expanded.contains(*term), "{} did not add {}", trigger, term);
        }
    }

    /// Case does not change what fires.
    #[test]
    fn prop_case_insensitive(query in "[a-z ]{0,20}") {
        prop_assert_eq!(expand(&query), expand(&query.to_uppercase()));
    }
}
