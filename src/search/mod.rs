// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search pipeline: from raw keystrokes to ranked suggestions.
//!
//! ```text
//! raw → normalize → expand → score every record → threshold → rank → truncate
//! ```
//!
//! One pass, synchronous, no state carried between queries. The catalog is
//! small (tens of records), so scoring all of it per query is cheaper than
//! keeping any index up to date.

pub mod highlight;
pub mod paths;

pub use highlight::{highlight, mark, mark_html, Fragment};
pub use paths::PathBuilder;

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::i18n::{KeyEcho, Translator, CATEGORY_KEY};
use crate::scoring::{aggregate, rank, Candidate, Scored};
use crate::semantic::expand;
use crate::types::{Certification, Suggestion};
use crate::utils::{normalize_query, Stopwatch};
use std::collections::BTreeSet;

/// Everything one query produced, for callers that want more than the list.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRun {
    /// Normalized query
    pub query: String,
    /// Semantic expansion, including the query
    pub expanded: BTreeSet<String>,
    /// How many records went through the scorer (0 for an empty query)
    pub records_scored: usize,
    pub suggestions: Vec<Suggestion>,
}

/// Stateless query engine over one catalog.
pub struct SearchEngine<T: Translator = KeyEcho> {
    catalog: Catalog,
    config: SearchConfig,
    paths: PathBuilder,
    translator: T,
}

impl SearchEngine<KeyEcho> {
    /// Default config, unprefixed paths, category labels left as keys.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_parts(catalog, SearchConfig::default(), PathBuilder::default(), KeyEcho)
    }
}

impl<T: Translator> SearchEngine<T> {
    pub fn with_parts(
        catalog: Catalog,
        config: SearchConfig,
        paths: PathBuilder,
        translator: T,
    ) -> Self {
        Self {
            catalog,
            config,
            paths,
            translator,
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_paths(mut self, paths: PathBuilder) -> Self {
        self.paths = paths;
        self
    }

    /// Swap the translator, keeping everything else.
    pub fn with_translator<U: Translator>(self, translator: U) -> SearchEngine<U> {
        SearchEngine {
            catalog: self.catalog,
            config: self.config,
            paths: self.paths,
            translator,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn paths(&self) -> &PathBuilder {
        &self.paths
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Ranked suggestions for a raw query.
    pub fn search(&self, raw: &str) -> Vec<Suggestion> {
        self.run(raw).suggestions
    }

    /// Run the whole pipeline and keep the intermediate results.
    pub fn run(&self, raw: &str) -> SearchRun {
        let query = normalize_query(raw);
        if query.is_empty() {
            return SearchRun {
                query,
                expanded: BTreeSet::new(),
                records_scored: 0,
                suggestions: Vec::new(),
            };
        }

        let stopwatch = Stopwatch::start();
        let expanded = expand(&query);

        let candidates: Vec<Candidate> = self
            .catalog
            .iter()
            .enumerate()
            .filter_map(|(position, record)| {
                aggregate(record, &query, &expanded, &self.config).map(|scored| Candidate {
                    position,
                    suggestion: self.suggestion(record, scored),
                })
            })
            .collect();

        let matched = candidates.len();
        let suggestions = rank(candidates, self.config.limit);

        tracing::debug!(
            query = %query,
            expanded = expanded.len(),
            matched,
            returned = suggestions.len(),
            elapsed_us = stopwatch.elapsed_us(),
            "search"
        );

        SearchRun {
            query,
            expanded,
            records_scored: self.catalog.len(),
            suggestions,
        }
    }

    fn suggestion(&self, record: &Certification, scored: Scored) -> Suggestion {
        Suggestion {
            id: record.id.clone(),
            title: title(record),
            description: record.description.clone(),
            path: self.paths.certification(&record.id),
            score: scored.score,
            match_type: scored.match_type,
            category: Some(self.translator.t(CATEGORY_KEY)),
            level: record.level,
            tags: record.kind.iter().map(|kind| kind.as_str().to_string()).collect(),
        }
    }
}

/// "ACRONYM - Name", or whichever half the record has.
fn title(record: &Certification) -> String {
    match (record.acronym.is_empty(), record.name.is_empty()) {
        (false, false) => format!("{} - {}", record.acronym, record.name),
        (true, _) => record.name.clone(),
        (false, true) => record.acronym.clone(),
    }
}
