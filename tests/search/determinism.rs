//! Same catalog and query, same suggestions.

use crate::common::{bundled_engine, BUNDLED};
use certsearch::{Catalog, SearchEngine};

const QUERIES: &[&str] = &["cka", "k8s", "kubrnetes", "s", "se", "observability", "mesh"];

#[test]
fn test_repeated_runs_match() {
    let engine = bundled_engine();
    for query in QUERIES {
        let first = engine.search(query);
        for _ in 0..5 {
            assert_eq!(engine.search(query), first, "query {query:?}");
        }
    }
}

#[test]
fn test_separate_engines_match() {
    let a = bundled_engine();
    let b = SearchEngine::new(Catalog::bundled().unwrap());
    for query in QUERIES {
        assert_eq!(a.search(query), b.search(query), "query {query:?}");
    }
}

#[test]
fn test_reloaded_catalog_matches() {
    let json = BUNDLED.to_json().unwrap();
    let reloaded = SearchEngine::new(Catalog::from_json(&json).unwrap());
    let engine = bundled_engine();
    for query in QUERIES {
        assert_eq!(engine.search(query), reloaded.search(query), "query {query:?}");
    }
}

#[test]
fn test_run_reports_expansion() {
    let run = bundled_engine().run("K8S");
    assert_eq!(run.query, "k8s");
    assert!(run.expanded.contains("k8s"));
    assert!(run.expanded.contains("kubernetes"));
    assert_eq!(run.records_scored, BUNDLED.len());
}
