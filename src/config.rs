// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Every knob defaults to the named constant in `scoring`, so an empty JSON
//! object is a valid config and behaves exactly like `SearchConfig::default()`.
//!
//! ```json
//! {
//!   "weights":    { "acronym": 3.0, "name": 2.5 },
//!   "thresholds": { "singleChar": 40, "doubleChar": 25, "longer": 15 },
//!   "limit": 5,
//!   "debounceMs": 150
//! }
//! ```

use crate::error::{Error, Result};
use crate::scoring::{FieldWeights, FuzzyBonuses, SemanticWeights, Thresholds, DEFAULT_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Keystroke quiet period before a query is scored.
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// Delay between losing focus and closing the suggestion list.
pub const DEFAULT_BLUR_GRACE_MS: u64 = 150;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub weights: FieldWeights,
    pub fuzzy: FuzzyBonuses,
    pub semantic: SemanticWeights,
    pub thresholds: Thresholds,
    /// Maximum number of suggestions returned
    pub limit: usize,
    pub debounce_ms: u64,
    pub blur_grace_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            fuzzy: FuzzyBonuses::default(),
            semantic: SemanticWeights::default(),
            thresholds: Thresholds::default(),
            limit: DEFAULT_LIMIT,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            blur_grace_ms: DEFAULT_BLUR_GRACE_MS,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), limit = config.limit, "loaded search config");
        Ok(config)
    }

    /// Reject values that would make scores meaningless or break ordering.
    ///
    /// - every weight, bonus and threshold must be finite and non-negative
    /// - `limit` must be at least 1
    /// - thresholds must not rise with query length
    pub fn validate(&self) -> Result<()> {
        let numbers = self
            .weights
            .values()
            .into_iter()
            .chain(self.fuzzy.values())
            .chain(self.semantic.values())
            .chain([
                ("thresholds.singleChar", self.thresholds.single_char),
                ("thresholds.doubleChar", self.thresholds.double_char),
                ("thresholds.longer", self.thresholds.longer),
            ]);

        for (field, value) in numbers {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::config(format!(
                    "{field} must be a finite non-negative number, got {value}"
                )));
            }
        }

        if self.limit == 0 {
            return Err(Error::config("limit must be at least 1"));
        }

        if !self.thresholds.is_monotonic() {
            return Err(Error::config(format!(
                "thresholds must not increase with query length (got {} / {} / {})",
                self.thresholds.single_char, self.thresholds.double_char, self.thresholds.longer
            )));
        }

        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }
}
