//! Catalog, config and message files read from disk.

use crate::common::ids;
use certsearch::{Catalog, Error, Messages, SearchConfig, SearchEngine, Translator};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const CATALOG: &str = r#"{
  "version": 1,
  "certifications": [
    {
      "id": "fce",
      "acronym": "FCE",
      "name": "FooOps Certified Engineer",
      "description": "Running foo pipelines at scale.",
      "level": "advanced",
      "type": "professional",
      "domains": [
        { "name": "Pipelines", "weight": 60, "topics": ["Stages", "Runners"] }
      ],
      "resources": [
        {
          "title": "FooOps Handbook",
          "url": "https://example.org/handbook",
          "type": "book",
          "author": "A. Writer"
        }
      ]
    },
    {
      "id": "bma",
      "acronym": "BMA",
      "name": "Bar Mesh Associate",
      "level": "entry",
      "type": "associate"
    }
  ]
}"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

#[test]
fn test_load_catalog_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "catalog.json", CATALOG);

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 2);

    let fce = catalog.get("fce").unwrap();
    assert_eq!(fce.domains[0].weight, Some(60));
    assert_eq!(fce.resources[0].details.author.as_deref(), Some("A. Writer"));

    let bma = catalog.get("bma").unwrap();
    assert!(bma.description.is_empty());
    assert!(bma.domains.is_empty());

    let engine = SearchEngine::new(catalog);
    assert_eq!(ids(&engine.search("fce")), vec!["fce"]);
    assert_eq!(engine.search("mesh")[0].id, "bma");
}

#[test]
fn test_missing_catalog_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::load(dir.path().join("missing.json")).unwrap_err();
    match err {
        Error::Io { path, .. } => assert!(path.ends_with("missing.json")),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn test_malformed_catalog_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "catalog.json", "{ \"certifications\": [ ");
    assert!(matches!(Catalog::load(&path), Err(Error::Json(_))));
}

#[test]
fn test_duplicate_ids_rejected() {
    let json = CATALOG.replace("\"id\": \"bma\"", "\"id\": \"fce\"");
    match Catalog::from_json(&json) {
        Err(Error::DuplicateId(id)) => assert_eq!(id, "fce"),
        other => panic!("expected DuplicateId, got {other:?}"),
    }
}

#[test]
fn test_blank_id_rejected() {
    let json = CATALOG.replace("\"id\": \"bma\"", "\"id\": \" \"");
    assert!(matches!(
        Catalog::from_json(&json),
        Err(Error::MissingField { field: "id", .. })
    ));
}

#[test]
fn test_record_without_acronym_or_level_loads() {
    let json = CATALOG
        .replace("\"acronym\": \"BMA\",", "")
        .replace("\"level\": \"entry\",", "");
    let catalog = Catalog::from_json(&json).unwrap();
    let bma = catalog.get("bma").unwrap();
    assert!(bma.acronym.is_empty());
    assert_eq!(bma.level, None);

    let engine = SearchEngine::new(catalog);
    let results = engine.search("mesh");
    assert_eq!(results[0].id, "bma");
    assert_eq!(results[0].title, "Bar Mesh Associate");
    assert_eq!(results[0].level, None);
    assert_eq!(ids(&engine.search("fce")), vec!["fce"]);
}

#[test]
fn test_catalog_survives_rewrite() {
    let dir = TempDir::new().unwrap();
    let original = Catalog::from_json(CATALOG).unwrap();
    let path = write(&dir, "copy.json", &original.to_json().unwrap());
    let reloaded = Catalog::load(&path).unwrap();
    assert_eq!(reloaded.records(), original.records());
}

#[test]
fn test_load_partial_config() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "config.json", r#"{ "limit": 2, "debounceMs": 300 }"#);

    let config = SearchConfig::load(&path).unwrap();
    assert_eq!(config.limit, 2);
    assert_eq!(config.debounce_ms, 300);
    // Everything else keeps its default
    assert_eq!(config.thresholds, SearchConfig::default().thresholds);
    assert_eq!(config.weights, SearchConfig::default().weights);
}

#[test]
fn test_invalid_config_rejected() {
    let dir = TempDir::new().unwrap();
    for body in [
        r#"{ "limit": 0 }"#,
        r#"{ "weights": { "name": -1.0 } }"#,
        r#"{ "thresholds": { "singleChar": 10, "doubleChar": 20, "longer": 15 } }"#,
    ] {
        let path = write(&dir, "config.json", body);
        assert!(
            matches!(SearchConfig::load(&path), Err(Error::InvalidConfig(_))),
            "{body} was accepted"
        );
    }
}

#[test]
fn test_load_messages() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "fr.json",
        r#"{ "search.category.certification": "Certification", "search.noResults": "Aucun résultat" }"#,
    );

    let messages = Messages::load("fr", &path).unwrap();
    assert_eq!(messages.lang(), "fr");
    assert_eq!(messages.t("search.noResults"), "Aucun résultat");
    assert_eq!(messages.t("search.unknown"), "search.unknown");

    let catalog = Catalog::from_json(CATALOG).unwrap();
    let engine = SearchEngine::new(catalog).with_translator(messages);
    assert_eq!(
        engine.search("fce")[0].category.as_deref(),
        Some("Certification")
    );
}
