// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for catalog, configuration and message loading.
//!
//! Searching itself never fails. Only the edges that touch files, JSON or
//! user-supplied patterns return these.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading a catalog, config or message file failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON input
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two catalog records share an id
    #[error("duplicate certification id: {0}")]
    DuplicateId(String),

    /// A catalog record has an empty id, acronym or name
    #[error("certification {id:?} has an empty {field}")]
    MissingField { id: String, field: &'static str },

    /// Configuration values that would break ranking invariants
    #[error("invalid search config: {0}")]
    InvalidConfig(String),

    /// Highlight pattern could not be compiled
    #[error("highlight pattern rejected: {0}")]
    Pattern(#[from] regex::Error),

    /// Highlight query longer than the pattern budget
    #[error("highlight query is {len} chars, limit is {max}")]
    QueryTooLong { len: usize, max: usize },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
