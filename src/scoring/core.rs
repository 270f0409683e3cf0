// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fuzzy match primitive every field score is built on.
//!
//! Three regimes, checked in order:
//!
//! ```text
//! equal (case-insensitive)      → 100
//! substring (case-insensitive)  →  80
//! otherwise                     → subsequence + word bonus + acronym bonus, ≤ 95
//! ```
//!
//! # Key Invariant: Direct Hits Are Fixed Points
//!
//! Exact and substring hits return immediately with fixed scores. The fuzzy
//! regime is clamped to `FUZZY_CEILING`, so a pile of bonuses can approach
//! but never reach an exact hit.
//!
//! # Constants
//!
//! | Constant             | Value | Role                                          |
//! |----------------------|-------|-----------------------------------------------|
//! | `EXACT_SCORE`        | 100.0 | Whole field equals the query                  |
//! | `SUBSTRING_SCORE`    | 80.0  | Field contains the query                      |
//! | `FUZZY_CEILING`      | 95.0  | Clamp for the fuzzy regime                    |
//! | `SUBSEQUENCE_POINTS` | 5.0   | Points for matching the first query character |
//! | `WORD_PREFIX_BONUS`  | 15.0  | Per word starting with the query              |
//! | `WORD_CONTAINS_BONUS`| 5.0   | Per word containing the query                 |
//! | `ACRONYM_BONUS`      | 20.0  | Field acronym contains the query              |
//!
//! The bonus values are empirical. They are exposed through `FuzzyBonuses`
//! so a deployment can tune them without touching this file.

use crate::utils::acronym_of;
use serde::{Deserialize, Serialize};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Score for a case-insensitive exact match.
pub const EXACT_SCORE: f64 = 100.0;

/// Score for a case-insensitive substring match.
pub const SUBSTRING_SCORE: f64 = 80.0;

/// Upper bound for the fuzzy regime.
pub const FUZZY_CEILING: f64 = 95.0;

/// Points for the first matched query character in the subsequence scan.
/// Later characters earn proportionally less.
pub const SUBSEQUENCE_POINTS: f64 = 5.0;

/// Bonus per word that starts with the query.
pub const WORD_PREFIX_BONUS: f64 = 15.0;

/// Bonus per word that contains (but does not start with) the query.
pub const WORD_CONTAINS_BONUS: f64 = 5.0;

/// Bonus when the field's acronym contains the query.
pub const ACRONYM_BONUS: f64 = 20.0;

/// Tunable knobs of the fuzzy regime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FuzzyBonuses {
    pub subsequence_points: f64,
    pub word_prefix: f64,
    pub word_contains: f64,
    pub acronym: f64,
}

impl Default for FuzzyBonuses {
    fn default() -> Self {
        Self {
            subsequence_points: SUBSEQUENCE_POINTS,
            word_prefix: WORD_PREFIX_BONUS,
            word_contains: WORD_CONTAINS_BONUS,
            acronym: ACRONYM_BONUS,
        }
    }
}

impl FuzzyBonuses {
    pub(crate) fn values(&self) -> [(&'static str, f64); 4] {
        [
            ("fuzzy.subsequencePoints", self.subsequence_points),
            ("fuzzy.wordPrefix", self.word_prefix),
            ("fuzzy.wordContains", self.word_contains),
            ("fuzzy.acronym", self.acronym),
        ]
    }
}

/// How well does `text` match `query`? Default bonuses.
///
/// See [`fuzzy_score_with`].
pub fn fuzzy_score(text: &str, query: &str) -> f64 {
    fuzzy_score_with(text, query, &FuzzyBonuses::default())
}

/// How well does `text` match `query`? Returns a score in `[0, 100]`.
///
/// An empty query or an empty text scores 0. Matching an empty query against
/// everything would flood the results, and a missing field has nothing to
/// match.
///
/// # Example
///
/// ```
/// use certsearch::fuzzy_score;
///
/// assert_eq!(fuzzy_score("CKA", "cka"), 100.0);
/// assert_eq!(fuzzy_score("Certified Kubernetes Administrator", "kubernetes"), 80.0);
/// assert!(fuzzy_score("Certified Kubernetes Administrator", "ka") > 20.0);
/// ```
pub fn fuzzy_score_with(text: &str, query: &str, bonuses: &FuzzyBonuses) -> f64 {
    if query.is_empty() || text.is_empty() {
        return 0.0;
    }

    let text = text.to_lowercase();
    let query = query.to_lowercase();

    if text == query {
        return EXACT_SCORE;
    }
    if text.contains(&query) {
        return SUBSTRING_SCORE;
    }

    let mut score = subsequence_score(&text, &query, bonuses.subsequence_points);
    score += word_bonus(&text, &query, bonuses);
    if acronym_of(&text).contains(&query) {
        score += bonuses.acronym;
    }

    score.min(FUZZY_CEILING)
}

/// Left-to-right subsequence scan with early-match weighting.
///
/// Walks `text` once. Each time the next unmatched query character shows up,
/// it earns `points * remaining / query_len`, where `remaining` counts the
/// query characters not yet matched (including this one). The first
/// character is worth `points`, the last `points / query_len`.
///
/// An incomplete scan keeps what it earned. There is no all-or-nothing
/// failure, which is what lets "kubrnetes" still find "kubernetes".
pub fn subsequence_score(text: &str, query: &str, points: f64) -> f64 {
    let query: Vec<char> = query.chars().collect();
    if query.is_empty() {
        return 0.0;
    }

    let len = query.len() as f64;
    let mut matched = 0;
    let mut score = 0.0;

    for c in text.chars() {
        if matched == query.len() {
            break;
        }
        if c == query[matched] {
            score += points * (query.len() - matched) as f64 / len;
            matched += 1;
        }
    }

    score
}

/// Word-boundary bonus, cumulative across words.
///
/// A word that starts with the query earns `word_prefix`; a word that only
/// contains it earns `word_contains`. Expects already-lowercased input.
pub fn word_bonus(text: &str, query: &str, bonuses: &FuzzyBonuses) -> f64 {
    if query.is_empty() {
        return 0.0;
    }
    text.split_whitespace()
        .map(|word| {
            if word.starts_with(query) {
                bonuses.word_prefix
            } else if word.contains(query) {
                bonuses.word_contains
            } else {
                0.0
            }
        })
        .sum()
}
