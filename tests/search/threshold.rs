//! Length-dependent inclusion thresholds.

use crate::common::{mini_catalog, BUNDLED};
use certsearch::scoring::{passes_threshold, score_record, threshold_for, Thresholds};
use certsearch::{expand, SearchConfig, SearchEngine};

#[test]
fn test_thresholds_step_down() {
    let thresholds = Thresholds::default();
    let by_len: Vec<f64> = (1..=6).map(|len| threshold_for(len, &thresholds)).collect();
    assert_eq!(by_len, vec![40.0, 25.0, 15.0, 15.0, 15.0, 15.0]);
    assert!(by_len.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_score_passing_short_query_passes_longer() {
    let thresholds = Thresholds::default();
    for score in [15.5, 25.0, 25.5, 40.0, 40.5, 80.0, 100.0] {
        if passes_threshold(score, 1, &thresholds) {
            assert!(passes_threshold(score, 2, &thresholds));
        }
        if passes_threshold(score, 2, &thresholds) {
            assert!(passes_threshold(score, 3, &thresholds));
        }
    }
}

#[test]
fn test_single_char_needs_more_than_40() {
    let config = SearchConfig::default();
    let engine = SearchEngine::new(mini_catalog());
    let results = engine.search("q");

    let expanded = expand("q");
    for record in mini_catalog().iter() {
        let scored = score_record(record, "q", &expanded, &config);
        let included = results.iter().any(|s| s.id == record.id);
        assert_eq!(included, scored.score > 40.0, "{}", record.id);
    }
}

#[test]
fn test_single_char_on_bundled_catalog() {
    let config = SearchConfig::default();
    let engine = SearchEngine::new(BUNDLED.clone()).with_config(SearchConfig {
        limit: usize::MAX,
        ..config.clone()
    });
    for record in BUNDLED.iter() {
        let short = score_record(record, "k", &expand("k"), &config);
        let included = engine.search("k").iter().any(|s| s.id == record.id);
        assert_eq!(included, short.score > 40.0, "{}", record.id);
    }
}

#[test]
fn test_custom_thresholds_filter_typos() {
    let config = SearchConfig {
        thresholds: Thresholds {
            single_char: 90.0,
            double_char: 90.0,
            longer: 90.0,
        },
        ..SearchConfig::default()
    };
    config.validate().unwrap();
    let engine = SearchEngine::new(BUNDLED.clone()).with_config(config);

    // Best typo score is 62.5
    assert!(engine.search("kubrnetes").is_empty());
    assert_eq!(engine.search("cka")[0].id, "cka");
}
