// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Localization seam.
//!
//! The engine never formats user-facing labels itself. It asks a
//! [`Translator`] for them by key, and only for the category label. Hosts
//! plug in whatever they already have: a closure over their i18n library,
//! a [`Messages`] table, or [`KeyEcho`] in tests.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;

/// Key for the category label on every suggestion.
pub const CATEGORY_KEY: &str = "search.category.certification";

/// Language served without a path prefix.
pub const DEFAULT_LANG: &str = "en";

const BUNDLED_EN: &str = include_str!("../data/messages/en.json");
const BUNDLED_ES: &str = include_str!("../data/messages/es.json");

/// Resolve a message key to display text.
pub trait Translator {
    fn t(&self, key: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn t(&self, key: &str) -> String {
        self(key)
    }
}

/// Returns every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEcho;

impl Translator for KeyEcho {
    fn t(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Flat key → text table. Unknown keys fall back to the key itself.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    lang: String,
    entries: HashMap<String, String>,
}

impl Messages {
    pub fn new(lang: impl Into<String>, entries: HashMap<String, String>) -> Self {
        Self {
            lang: lang.into(),
            entries,
        }
    }

    pub fn from_json(lang: impl Into<String>, json: &str) -> Result<Self> {
        Ok(Self::new(lang, serde_json::from_str(json)?))
    }

    pub fn load(lang: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let messages = Self::from_json(lang, &json)?;
        tracing::info!(
            path = %path.display(),
            lang = %messages.lang,
            entries = messages.entries.len(),
            "loaded messages"
        );
        Ok(messages)
    }

    /// Messages shipped with the crate, if `lang` is one of them.
    pub fn bundled(lang: &str) -> Option<Self> {
        let json = match lang {
            "en" => BUNDLED_EN,
            "es" => BUNDLED_ES,
            _ => return None,
        };
        Self::from_json(lang, json).ok()
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Translator for Messages {
    fn t(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}
