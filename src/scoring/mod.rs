// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how suggestions get their numbers.
//!
//! Three layers, each usable on its own:
//!
//! ```text
//! core       fuzzy_score(text, query)        one field, 0..=100
//! aggregate  score_record(record, query, ..)  one record, weighted + semantic
//! ranking    rank(candidates, limit)          the list the user sees
//! ```
//!
//! The key property is exact-match dominance: an acronym equal to the query
//! scores `100 × acronym weight`, the heaviest weight, and nothing else
//! reaches that.

pub mod aggregate;
mod core;
pub mod ranking;

pub use aggregate::{
    aggregate, passes_threshold, score_record, threshold_for, FieldWeights, Scored,
    SemanticWeights, Thresholds,
};
pub use core::*;
pub use ranking::{compare_candidates, rank, Candidate, DEFAULT_LIMIT};
