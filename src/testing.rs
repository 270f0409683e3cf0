//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::catalog::Catalog;
use crate::types::{
    Certification, CertificationType, Domain, Level, MatchType, Resource, ResourceDetails,
    ResourceKind, Suggestion,
};

/// Fluent builder for catalog records.
///
/// Defaults: intermediate level, professional type, empty description, no
/// domains, no resources.
pub struct CertificationBuilder {
    record: Certification,
}

impl CertificationBuilder {
    pub fn new(id: &str, acronym: &str, name: &str) -> Self {
        Self {
            record: Certification {
                id: id.to_string(),
                acronym: acronym.to_string(),
                name: name.to_string(),
                description: String::new(),
                level: Some(Level::Intermediate),
                kind: Some(CertificationType::Professional),
                domains: Vec::new(),
                resources: Vec::new(),
            },
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.record.description = description.to_string();
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.record.level = Some(level);
        self
    }

    pub fn kind(mut self, kind: CertificationType) -> Self {
        self.record.kind = Some(kind);
        self
    }

    pub fn domain(mut self, name: &str, topics: &[&str]) -> Self {
        self.record.domains.push(Domain {
            name: name.to_string(),
            weight: None,
            topics: topics.iter().map(|t| t.to_string()).collect(),
        });
        self
    }

    pub fn resource(mut self, title: &str, kind: ResourceKind, details: ResourceDetails) -> Self {
        self.record.resources.push(Resource {
            title: title.to_string(),
            url: format!("https://example.org/{}", title.to_lowercase().replace(' ', "-")),
            kind,
            details,
        });
        self
    }

    /// Drop the level and type, as a record that omits them would.
    pub fn unclassified(mut self) -> Self {
        self.record.level = None;
        self.record.kind = None;
        self
    }

    pub fn build(self) -> Certification {
        self.record
    }
}

/// Create a suggestion with just the fields ranking looks at.
pub fn suggestion(id: &str, score: f64, match_type: MatchType) -> Suggestion {
    Suggestion {
        id: id.to_string(),
        title: id.to_uppercase(),
        description: String::new(),
        path: format!("/certifications/{}", id),
        score,
        match_type,
        category: None,
        level: None,
        tags: vec![],
    }
}

/// Catalog of `n` records named "Record 0", "Record 1", ... with acronyms
/// "R0", "R1", ...
pub fn numbered_catalog(n: usize) -> Catalog {
    let records = (0..n)
        .map(|i| {
            CertificationBuilder::new(&format!("r{i}"), &format!("R{i}"), &format!("Record {i}"))
                .build()
        })
        .collect();
    Catalog::new(records).unwrap_or_default()
}
