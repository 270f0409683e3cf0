//! Property tests for the fuzzy primitive and per-record aggregation.

use crate::common::BUNDLED;
use certsearch::scoring::{score_record, threshold_for, Thresholds};
use certsearch::{expand, fuzzy_score, MatchType, SearchConfig, SearchEngine};
use proptest::prelude::*;

const FUZZY_CEILING: f64 = 95.0;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every fuzzy score lands in [0, 100].
    #[test]
    fn prop_fuzzy_score_in_range(text in "[a-zA-Z ]{0,40}", query in "[a-zA-Z ]{0,10}") {
        let score = fuzzy_score(&text, &query);
        prop_assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
    }

    /// Empty on either side scores nothing.
    #[test]
    fn prop_empty_scores_zero(s in "[a-z ]{0,20}") {
        prop_assert_eq!(fuzzy_score(&s, ""), 0.0);
        prop_assert_eq!(fuzzy_score("", &s), 0.0);
    }

    /// A field equal to the query, in any case, scores 100.
    #[test]
    fn prop_equal_is_exact(s in "[a-zA-Z]{1,20}") {
        prop_assert_eq!(fuzzy_score(&s, &s.to_lowercase()), 100.0);
        prop_assert_eq!(fuzzy_score(&s.to_uppercase(), &s), 100.0);
    }

    /// A proper substring scores exactly 80.
    #[test]
    fn prop_substring_is_80(prefix in "[a-z]{1,8}", query in "[a-z]{1,8}", suffix in "[a-z]{0,8}") {
        let text = format!("{prefix}{query}{suffix}");
        prop_assert_eq!(fuzzy_score(&text, &query), 80.0);
    }

    /// Without containment the fuzzy regime never reaches the direct scores.
    #[test]
    fn prop_fuzzy_capped(text in "[a-z ]{1,40}", query in "[a-z]{1,8}") {
        prop_assume!(!text.contains(&query));
        prop_assert!(fuzzy_score(&text, &query) <= FUZZY_CEILING);
    }

    /// No record outscores an exact hit on the heaviest field, and the
    /// acronym rule always classifies as exact.
    #[test]
    fn prop_record_score_bounded(idx in 0usize..12, query in "[a-z0-9 ]{1,12}") {
        let config = SearchConfig::default();
        let record = &BUNDLED.records()[idx % BUNDLED.len()];
        let query = query.trim().to_string();
        prop_assume!(!query.is_empty());

        let scored = score_record(record, &query, &expand(&query), &config);
        prop_assert!((0.0..=config.weights.ceiling()).contains(&scored.score));
        if record.acronym.to_lowercase() == query {
            prop_assert_eq!(scored.match_type, MatchType::Exact);
            prop_assert_eq!(scored.score, config.weights.ceiling());
        }
    }

    /// Searching for an acronym puts its record first, strictly ahead of
    /// everything else.
    #[test]
    fn prop_exact_acronym_ranks_first(idx in 0usize..12, upper in any::<bool>()) {
        let record = &BUNDLED.records()[idx % BUNDLED.len()];
        let query = if upper { record.acronym.clone() } else { record.acronym.to_lowercase() };
        let results = SearchEngine::new(BUNDLED.clone()).search(&query);

        prop_assert_eq!(&results[0].id, &record.id);
        for other in &results[1..] {
            prop_assert!(other.score < results[0].score, "{} tied {}", other.id, record.id);
        }
    }

    /// Every returned suggestion cleared the threshold for its query length.
    #[test]
    fn prop_results_clear_threshold(query in "[a-z]{1,8}") {
        let config = SearchConfig { limit: usize::MAX, ..SearchConfig::default() };
        let engine = SearchEngine::new(BUNDLED.clone()).with_config(config);
        let threshold = threshold_for(query.chars().count(), &Thresholds::default());
        for suggestion in engine.search(&query) {
            prop_assert!(suggestion.score > threshold,
                "{} scored {} at threshold {}", suggestion.id, suggestion.score, threshold);
        }
    }
}
