// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records we search and the suggestions we hand back.
//!
//! Catalog types are read-only once loaded. Everything that can be missing in
//! the source JSON defaults to an empty value, so a record without domains or
//! a description still loads and simply scores 0 on those fields.
//!
//! # Types
//!
//! | Type              | Role                                           |
//! |-------------------|------------------------------------------------|
//! | `Certification`   | One searchable catalog entry                   |
//! | `Domain`          | Exam domain with its ordered topic list        |
//! | `Resource`        | Study material attached to a certification     |
//! | `ResourceDetails` | Optional difficulty / author / duration fields |
//! | `MatchType`       | exact / partial / semantic / fuzzy             |
//! | `Suggestion`      | Per-query output, discarded on the next query  |

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ENUMERATIONS
// =============================================================================

/// Certification difficulty tier.
///
/// The lowercase name is what the level field scorer matches against, so
/// "advanced" finds every advanced certification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Entry,
    Intermediate,
    Advanced,
}

impl Level {
    /// Convert to lowercase string representation.
    ///
    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Entry => "entry",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of credential a certification is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CertificationType {
    /// Multiple-choice, knowledge-based exam
    Associate,
    /// Hands-on, performance-based exam
    Professional,
    /// Project-specific exam for a single CNCF tool
    Specialist,
}

impl CertificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CertificationType::Associate => "associate",
            CertificationType::Professional => "professional",
            CertificationType::Specialist => "specialist",
        }
    }
}

/// How a suggestion matched the query.
///
/// Used as the ranking tiebreaker and for styling in the UI. Unlike a
/// bucket ordering, it never overrides the numeric score: two suggestions
/// are compared by score first and only fall back to `priority()` on ties.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Exact,
    Partial,
    Semantic,
    Fuzzy,
}

impl MatchType {
    /// Tiebreak priority: higher wins.
    #[inline]
    pub fn priority(self) -> u8 {
        match self {
            MatchType::Exact => 4,
            MatchType::Partial => 3,
            MatchType::Semantic => 2,
            MatchType::Fuzzy => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Partial => "partial",
            MatchType::Semantic => "semantic",
            MatchType::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// CATALOG TYPES
// =============================================================================

/// An exam domain: a named area with an ordered list of topics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub name: String,
    /// Share of the exam, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u8>,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// One searchable catalog entry.
///
/// `id` doubles as the URL slug and is the only required field. Uniqueness
/// is checked by `Catalog`, not here. Anything else may be missing and then
/// scores 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: String,
    #[serde(default)]
    pub acronym: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CertificationType>,
    #[serde(default)]
    pub domains: Vec<Domain>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Certification {
    /// Domain names followed by their topics, in catalog order.
    ///
    /// The aggregator takes the best fuzzy score across all of these.
    pub fn domain_texts(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().flat_map(|domain| {
            std::iter::once(domain.name.as_str()).chain(domain.topics.iter().map(String::as_str))
        })
    }
}

/// What sort of study material a resource is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Course,
    Book,
    Practice,
    Documentation,
    Video,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Course => "course",
            ResourceKind::Book => "book",
            ResourceKind::Practice => "practice",
            ResourceKind::Documentation => "documentation",
            ResourceKind::Video => "video",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// Fields that only some resources carry.
///
/// Each one is an explicit `Option`; renderers match on them instead of
/// probing for properties at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Free-form, e.g. "12h" or "6 weeks"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl ResourceDetails {
    pub fn is_empty(&self) -> bool {
        self.difficulty.is_none() && self.author.is_none() && self.duration.is_none()
    }
}

/// Study material linked from a certification page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    #[serde(flatten)]
    pub details: ResourceDetails,
}

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// What the search bar shows for one matching record.
///
/// Created fresh on every query; nothing holds on to it once the query
/// changes or the bar closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Source record identifier
    pub id: String,
    /// "{ACRONYM} - {name}"
    pub title: String,
    pub description: String,
    /// Navigation target built by `PathBuilder`
    pub path: String,
    pub score: f64,
    pub match_type: MatchType,
    /// Localized category label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(default)]
    pub tags: Vec<String>,
}
