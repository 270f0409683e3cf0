// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-as-you-type suggestions for a small certification catalog.
//!
//! The whole catalog is scored on every query. There is no index: tens of
//! records make a linear pass faster than keeping one up to date, and it
//! keeps the scoring rules readable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  utils.rs   │────▶│ semantic.rs  │────▶│  scoring/    │────▶│  search/     │
//! │ (normalize) │     │  (expand)    │     │ core         │     │ SearchEngine │
//! └─────────────┘     └──────────────┘     │ aggregate    │     │ PathBuilder  │
//!                                          │ ranking      │     │ highlight    │
//!                                          └──────────────┘     └──────┬───────┘
//!                                                                      │
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────▼───────┐
//! │ catalog.rs  │     │  config.rs   │     │   i18n.rs    │     │ searchbar/   │
//! │ (records)   │     │ (knobs)      │     │ (Translator) │     │ (keyboard,   │
//! └─────────────┘     └──────────────┘     └──────────────┘     │  debounce)   │
//!                                                               └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use certsearch::{Catalog, MatchType, SearchEngine};
//!
//! let engine = SearchEngine::new(Catalog::bundled().unwrap());
//! let results = engine.search("cka");
//!
//! assert_eq!(results[0].id, "cka");
//! assert_eq!(results[0].match_type, MatchType::Exact);
//! ```

// Module declarations
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod scoring;
pub mod search;
pub mod searchbar;
pub mod semantic;
pub mod testing;
mod types;
mod utils;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use catalog::Catalog;
pub use config::SearchConfig;
pub use error::{Error, Result};
pub use i18n::{KeyEcho, Messages, Translator};
pub use scoring::{fuzzy_score, rank, Candidate, FuzzyBonuses, DEFAULT_LIMIT};
pub use search::{highlight, mark, mark_html, Fragment, PathBuilder, SearchEngine, SearchRun};
pub use searchbar::{BarState, Debouncer, Navigation, SearchBar};
pub use semantic::expand;
pub use types::{
    Certification, CertificationType, Difficulty, Domain, Level, MatchType, Resource,
    ResourceDetails, ResourceKind, Suggestion,
};
pub use utils::{acronym_of, normalize_query};
