//! Shared test utilities and fixtures.

#![allow(dead_code)]

use certsearch::{Catalog, MatchType, SearchEngine, Suggestion};
use std::sync::LazyLock;

// Re-export canonical test utilities from certsearch::testing
pub use certsearch::testing::{numbered_catalog, suggestion, CertificationBuilder};

/// The bundled catalog, parsed once per test binary.
pub static BUNDLED: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::bundled().expect("bundled catalog must load"));

/// Engine over the bundled catalog with default settings.
pub fn bundled_engine() -> SearchEngine {
    SearchEngine::new(BUNDLED.clone())
}

/// Ids of the suggestions, in order.
pub fn ids(results: &[Suggestion]) -> Vec<&str> {
    results.iter().map(|s| s.id.as_str()).collect()
}

/// Find a suggestion by id or fail the test.
pub fn find<'a>(results: &'a [Suggestion], id: &str) -> &'a Suggestion {
    results
        .iter()
        .find(|s| s.id == id)
        .unwrap_or_else(|| panic!("{id} not in {:?}", ids(results)))
}

/// Assert the ranking order holds for every adjacent pair.
pub fn assert_ranked(results: &[Suggestion]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score
                || (a.score == b.score && a.match_type.priority() >= b.match_type.priority()),
            "{} ({}, {:?}) ranked above {} ({}, {:?})",
            a.id,
            a.score,
            a.match_type,
            b.id,
            b.score,
            b.match_type
        );
    }
}

/// Small hand-built catalog for tests that need exact control over text.
pub fn mini_catalog() -> Catalog {
    Catalog::new(vec![
        CertificationBuilder::new("cka", "CKA", "Certified Kubernetes Administrator")
            .description("Hands-on test of running kubernetes clusters")
            .domain("Troubleshooting", &["Cluster component failure"])
            .build(),
        CertificationBuilder::new("ckad", "CKAD", "Certified Kubernetes Application Developer")
            .build(),
        CertificationBuilder::new("pca", "PCA", "Prometheus Certified Associate")
            .description("Monitoring and alerting with PromQL")
            .build(),
    ])
    .expect("mini catalog is valid")
}

pub fn match_types(results: &[Suggestion]) -> Vec<MatchType> {
    results.iter().map(|s| s.match_type).collect()
}
