// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record-level scoring: field weights, the semantic pass, classification
//! and the inclusion threshold.
//!
//! A record is only as relevant as its single best field. Scores are
//! weighted per field and the maximum wins; nothing is summed.
//!
//! ```text
//! acronym     × 3.0  ┐
//! name        × 2.5  │
//! description × 1.5  ├─ max ──────────┐
//! level       × 2.0  │                ├─ max if > floor ─ threshold
//! domains     × 2.0  ┘                │
//!                     semantic terms ─┘  (acronym 0.8, name 0.7, level 0.6)
//! ```
//!
//! # Key Invariant: Exact Acronym Dominance
//!
//! Scores are not capped. The acronym carries the largest weight, so an
//! acronym equal to the query scores `100 × 3 = 300`, the highest score any
//! field can produce. A name that merely contains the query reaches
//! `80 × 2.5 = 200`, a topic hit 160, a description hit 120. The gaps
//! survive into the ranking.

use crate::config::SearchConfig;
use crate::scoring::core::{fuzzy_score_with, EXACT_SCORE};
use crate::types::{Certification, Level, MatchType};
use crate::utils::char_len;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const ACRONYM_WEIGHT: f64 = 3.0;
pub const NAME_WEIGHT: f64 = 2.5;
pub const DESCRIPTION_WEIGHT: f64 = 1.5;
pub const LEVEL_WEIGHT: f64 = 2.0;
pub const DOMAIN_WEIGHT: f64 = 2.0;

pub const SEMANTIC_ACRONYM_WEIGHT: f64 = 0.8;
pub const SEMANTIC_NAME_WEIGHT: f64 = 0.7;
pub const SEMANTIC_LEVEL_WEIGHT: f64 = 0.6;

/// A semantic score must exceed this to count.
pub const SEMANTIC_FLOOR: f64 = 10.0;

/// Minimum score (exclusive) for 1-character queries.
pub const SINGLE_CHAR_THRESHOLD: f64 = 40.0;
/// Minimum score (exclusive) for 2-character queries.
pub const DOUBLE_CHAR_THRESHOLD: f64 = 25.0;
/// Minimum score (exclusive) for queries of 3 or more characters.
pub const LONG_QUERY_THRESHOLD: f64 = 15.0;

/// Per-field multipliers for direct matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldWeights {
    pub acronym: f64,
    pub name: f64,
    pub description: f64,
    pub level: f64,
    /// Shared by domain names and their topics
    pub domain: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            acronym: ACRONYM_WEIGHT,
            name: NAME_WEIGHT,
            description: DESCRIPTION_WEIGHT,
            level: LEVEL_WEIGHT,
            domain: DOMAIN_WEIGHT,
        }
    }
}

impl FieldWeights {
    /// Highest score a direct match can reach: an exact hit on the
    /// heaviest field.
    pub fn ceiling(&self) -> f64 {
        self.values()
            .into_iter()
            .map(|(_, weight)| weight)
            .fold(0.0, f64::max)
            * EXACT_SCORE
    }

    pub(crate) fn values(&self) -> [(&'static str, f64); 5] {
        [
            ("weights.acronym", self.acronym),
            ("weights.name", self.name),
            ("weights.description", self.description),
            ("weights.level", self.level),
            ("weights.domain", self.domain),
        ]
    }
}

/// Discounts for matches found through semantic expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SemanticWeights {
    pub acronym: f64,
    pub name: f64,
    pub level: f64,
    pub floor: f64,
}

impl Default for SemanticWeights {
    fn default() -> Self {
        Self {
            acronym: SEMANTIC_ACRONYM_WEIGHT,
            name: SEMANTIC_NAME_WEIGHT,
            level: SEMANTIC_LEVEL_WEIGHT,
            floor: SEMANTIC_FLOOR,
        }
    }
}

impl SemanticWeights {
    pub(crate) fn values(&self) -> [(&'static str, f64); 4] {
        [
            ("semantic.acronym", self.acronym),
            ("semantic.name", self.name),
            ("semantic.level", self.level),
            ("semantic.floor", self.floor),
        ]
    }
}

/// Length-dependent inclusion thresholds. Scores must strictly exceed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Thresholds {
    pub single_char: f64,
    pub double_char: f64,
    pub longer: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            single_char: SINGLE_CHAR_THRESHOLD,
            double_char: DOUBLE_CHAR_THRESHOLD,
            longer: LONG_QUERY_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// True when a longer query never faces a stricter threshold.
    pub fn is_monotonic(&self) -> bool {
        self.single_char >= self.double_char && self.double_char >= self.longer
    }
}

/// One record's verdict for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub score: f64,
    pub match_type: MatchType,
}

/// Threshold a query of `query_len` characters must exceed.
///
/// Length 0 never reaches scoring; it shares the single-character bar.
pub fn threshold_for(query_len: usize, thresholds: &Thresholds) -> f64 {
    match query_len {
        0 | 1 => thresholds.single_char,
        2 => thresholds.double_char,
        _ => thresholds.longer,
    }
}

pub fn passes_threshold(score: f64, query_len: usize, thresholds: &Thresholds) -> bool {
    score > threshold_for(query_len, thresholds)
}

/// Score one record against a normalized query and its expansion.
///
/// Always returns a verdict; filtering is [`aggregate`]'s job. `expanded`
/// may contain `query` itself, which the semantic pass skips.
pub fn score_record(
    record: &Certification,
    query: &str,
    expanded: &BTreeSet<String>,
    config: &SearchConfig,
) -> Scored {
    let weights = &config.weights;
    let bonuses = &config.fuzzy;
    let level = record.level.as_ref().map_or("", Level::as_str);

    let domain_best = record
        .domain_texts()
        .map(|text| fuzzy_score_with(text, query, bonuses))
        .fold(0.0, f64::max);

    let mut score = [
        fuzzy_score_with(&record.acronym, query, bonuses) * weights.acronym,
        fuzzy_score_with(&record.name, query, bonuses) * weights.name,
        fuzzy_score_with(&record.description, query, bonuses) * weights.description,
        fuzzy_score_with(level, query, bonuses) * weights.level,
        domain_best * weights.domain,
    ]
    .into_iter()
    .fold(0.0, f64::max);

    let semantic = &config.semantic;
    let semantic_best = expanded
        .iter()
        .filter(|term| term.as_str() != query)
        .map(|term| {
            let acronym = fuzzy_score_with(&record.acronym, term, bonuses) * semantic.acronym;
            let name = fuzzy_score_with(&record.name, term, bonuses) * semantic.name;
            let level = fuzzy_score_with(level, term, bonuses) * semantic.level;
            acronym.max(name).max(level)
        })
        .fold(0.0, f64::max);

    let mut semantic_hit = false;
    if semantic_best > semantic.floor && semantic_best > score {
        score = semantic_best;
        semantic_hit = true;
    }

    Scored {
        score,
        match_type: classify(record, query, semantic_hit),
    }
}

/// Score and filter: `None` when the record does not clear the threshold.
pub fn aggregate(
    record: &Certification,
    query: &str,
    expanded: &BTreeSet<String>,
    config: &SearchConfig,
) -> Option<Scored> {
    if query.is_empty() {
        return None;
    }
    let scored = score_record(record, query, expanded, config);
    passes_threshold(scored.score, char_len(query), &config.thresholds).then_some(scored)
}

/// Direct acronym/name relationships override the semantic tag.
fn classify(record: &Certification, query: &str, semantic_hit: bool) -> MatchType {
    let acronym = record.acronym.to_lowercase();
    let name = record.name.to_lowercase();

    if acronym == query || name.contains(query) {
        MatchType::Exact
    } else if acronym.contains(query) {
        // name.contains(query) was already ruled out above
        MatchType::Partial
    } else if semantic_hit {
        MatchType::Semantic
    } else {
        MatchType::Fuzzy
    }
}
