// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how suggestions get sorted.
//!
//! Score decides. Match type only breaks ties, which happens whenever two
//! records hit the same field weight with the same kind of match (every
//! name containing the query sits at 200). Catalog position settles
//! whatever is left.

use crate::types::Suggestion;
use std::cmp::Ordering;

/// Default number of suggestions shown.
pub const DEFAULT_LIMIT: usize = 5;

/// A suggestion that passed the threshold, with its catalog position.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Index of the source record in the catalog
    pub position: usize,
    pub suggestion: Suggestion,
}

/// Compare two candidates for ranking.
///
/// Sort order:
/// 1. **Score** - higher wins
/// 2. **Match type priority** - exact > partial > semantic > fuzzy
/// 3. **Catalog position** - earlier wins, for absolute determinism
///
/// # Example
///
/// ```ignore
/// // Same score, the exact match goes first
/// let exact = Candidate { position: 1, suggestion: Suggestion { score: 100.0, match_type: MatchType::Exact, .. } };
/// let partial = Candidate { position: 0, suggestion: Suggestion { score: 100.0, match_type: MatchType::Partial, .. } };
///
/// assert_eq!(compare_candidates(&exact, &partial), Ordering::Less);
/// ```
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.suggestion
        .score
        .total_cmp(&a.suggestion.score)
        .then_with(|| {
            b.suggestion
                .match_type
                .priority()
                .cmp(&a.suggestion.match_type.priority())
        })
        .then_with(|| a.position.cmp(&b.position))
}

/// Sort candidates and keep the best `limit`.
pub fn rank(mut candidates: Vec<Candidate>, limit: usize) -> Vec<Suggestion> {
    candidates.sort_by(compare_candidates);
    candidates.truncate(limit);
    candidates.into_iter().map(|c| c.suggestion).collect()
}
