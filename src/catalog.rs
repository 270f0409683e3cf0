// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The certification catalog: an ordered, validated, read-only record list.
//!
//! Order matters. It is the final ranking tiebreaker, so the same file always
//! produces the same suggestion order.
//!
//! # File format
//!
//! ```json
//! {
//!   "version": 1,
//!   "certifications": [
//!     { "id": "cka", "acronym": "CKA", "name": "...", "level": "intermediate", "type": "professional" }
//!   ]
//! }
//! ```

use crate::error::{Error, Result};
use crate::types::Certification;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Catalog compiled into the binary.
const BUNDLED_CATALOG: &str = include_str!("../data/certifications.json");

pub const CATALOG_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default = "default_version")]
    version: u32,
    certifications: Vec<Certification>,
}

fn default_version() -> u32 {
    CATALOG_VERSION
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<Certification>,
}

impl Catalog {
    /// Build a catalog, checking that every id is present and unique. Other
    /// fields may be empty; they just never match.
    pub fn new(records: Vec<Certification>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id.trim().is_empty() {
                return Err(Error::MissingField {
                    id: record.id.clone(),
                    field: "id",
                });
            }
            if !seen.insert(record.id.as_str()) {
                return Err(Error::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        if file.version != CATALOG_VERSION {
            tracing::warn!(
                version = file.version,
                expected = CATALOG_VERSION,
                "catalog version differs, loading anyway"
            );
        }
        Self::new(file.certifications)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), records = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// The catalog shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn get(&self, id: &str) -> Option<&Certification> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Certification> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Certification] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize back to the file format.
    pub fn to_json(&self) -> Result<String> {
        let file = CatalogFile {
            version: CATALOG_VERSION,
            certifications: self.records.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Certification;
    type IntoIter = std::slice::Iter<'a, Certification>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
