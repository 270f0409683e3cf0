//! Concrete queries against the bundled catalog.

use crate::common::{bundled_engine, find, ids, CertificationBuilder, BUNDLED};
use certsearch::scoring::{score_record, threshold_for, Thresholds};
use certsearch::{expand, Catalog, Level, MatchType, PathBuilder, SearchConfig, SearchEngine};

#[test]
fn test_exact_acronym_ranks_first() {
    let results = bundled_engine().search("cka");

    assert_eq!(results[0].id, "cka");
    assert_eq!(results[0].match_type, MatchType::Exact);
    assert_eq!(results[0].score, 300.0);

    // Acronym substring: 80 × 3
    assert_eq!(results[1].id, "ckad");
    assert_eq!(results[1].match_type, MatchType::Partial);
    assert_eq!(results[1].score, 240.0);
}

#[test]
fn test_k8s_finds_cka_semantically() {
    let results = bundled_engine().search("k8s");
    let cka = find(&results, "cka");

    assert_eq!(cka.match_type, MatchType::Semantic);
    assert!(cka.score > 10.0);
    // Related term "cka" hits the acronym: 100 × 0.8
    assert!((cka.score - 80.0).abs() < 1e-9);
}

#[test]
fn test_k8s_has_no_direct_hits() {
    let results = bundled_engine().search("k8s");
    assert!(!results.is_empty());
    assert!(results.iter().all(|s| s.match_type == MatchType::Semantic));
}

#[test]
fn test_empty_query_never_scores() {
    let engine = bundled_engine();
    for raw in ["", " ", "\t\n  "] {
        let run = engine.run(raw);
        assert!(run.suggestions.is_empty());
        assert_eq!(run.records_scored, 0, "scorer ran for {raw:?}");
    }
}

#[test]
fn test_nonexistent_query_is_empty() {
    assert!(bundled_engine().search("xyz-nonexistent").is_empty());
}

/// Descriptions full of x, e and t, the way real exam blurbs are.
fn exam_blurbs() -> Catalog {
    Catalog::new(vec![
        CertificationBuilder::new("cka", "CKA", "Certified Kubernetes Administrator")
            .description("Hands-on exam that proves expertise running production clusters.")
            .domain("Troubleshooting", &["Cluster component failure", "Networking"])
            .build(),
        CertificationBuilder::new("cks", "CKS", "Certified Kubernetes Security Specialist")
            .description("Performance-based exam testing expertise in securing container workloads.")
            .level(Level::Advanced)
            .domain("System Hardening", &["Kernel hardening", "Supply chain security"])
            .build(),
        CertificationBuilder::new("pca", "PCA", "Prometheus Certified Associate")
            .description(
                "Multiple-choice exam covering observability expertise with metrics and alerting.",
            )
            .domain("PromQL", &["Selectors", "Aggregation"])
            .build(),
    ])
    .unwrap()
}

#[test]
fn test_nonexistent_query_partial_subsequence_stays_below_threshold() {
    let catalog = exam_blurbs();
    let config = SearchConfig::default();
    let engine = SearchEngine::new(catalog.clone());
    assert_eq!(engine.search("exam").len(), 3);
    assert_eq!(engine.search("expertise").len(), 3);

    let query = "xyz-nonexistent";
    assert!(engine.search(query).is_empty());

    // The x (and PCA's y) do line up, just not far enough to count
    let threshold = threshold_for(query.len(), &config.thresholds);
    let expanded = expand(query);
    let pca = catalog.get("pca").unwrap();
    let scored = score_record(pca, query, &expanded, &config);
    assert!(scored.score > 0.0);
    assert!(scored.score < threshold, "pca scored {}", scored.score);
}

#[test]
fn test_two_char_query_uses_threshold_25() {
    let config = SearchConfig {
        limit: usize::MAX,
        ..SearchConfig::default()
    };
    let engine = bundled_engine().with_config(config.clone());
    let results = engine.search("se");
    let threshold = threshold_for(2, &Thresholds::default());
    assert_eq!(threshold, 25.0);

    let expanded = expand("se");
    for record in BUNDLED.iter() {
        let scored = score_record(record, "se", &expanded, &config);
        let included = results.iter().any(|s| s.id == record.id);
        assert_eq!(
            included,
            scored.score > threshold,
            "{} scored {}",
            record.id,
            scored.score
        );
    }
}

#[test]
fn test_typo_still_finds_kubernetes_records() {
    let results = bundled_engine().search("kubrnetes");
    assert_eq!(ids(&results), vec!["kcna", "kcsa", "cka", "ckad", "cks"]);
    assert!(results.iter().all(|s| s.match_type == MatchType::Fuzzy));
}

#[test]
fn test_query_is_normalized() {
    let engine = bundled_engine();
    assert_eq!(engine.search("  CKA "), engine.search("cka"));
}

#[test]
fn test_acronym_equal_to_query_is_exact() {
    let engine = bundled_engine();
    let ceiling = engine.config().weights.ceiling();
    for record in BUNDLED.iter() {
        let results = engine.search(&record.acronym);
        let hit = find(&results, &record.id);
        assert_eq!(hit.match_type, MatchType::Exact, "{}", record.id);
        assert_eq!(hit.score, ceiling, "{}", record.id);
        assert_eq!(results[0].id, record.id);
        assert!(results[1..].iter().all(|s| s.score < hit.score));
    }
}

#[test]
fn test_suggestion_shape() {
    let engine = bundled_engine().with_paths(PathBuilder::new("/learn/", "es"));
    let results = engine.search("istio");
    let ica = find(&results, "ica");

    assert_eq!(ica.title, "ICA - Istio Certified Associate");
    assert_eq!(ica.path, "/learn/es/certifications/ica");
    assert_eq!(ica.tags, vec!["specialist".to_string()]);
    assert_eq!(ica.level, Some(certsearch::Level::Intermediate));
    assert!(!ica.description.is_empty());
}

#[test]
fn test_localized_category() {
    let messages = certsearch::Messages::bundled("es").unwrap();
    let engine = bundled_engine().with_translator(messages);
    let results = engine.search("cks");
    assert_eq!(results[0].category.as_deref(), Some("Certificación"));
}
