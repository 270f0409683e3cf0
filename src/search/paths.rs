// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Navigation targets for suggestions.

use crate::i18n::DEFAULT_LANG;

/// Builds `base_path + lang_prefix + "/certifications/" + id`.
///
/// The default language has no prefix; every other language gets `/{lang}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathBuilder {
    base_path: String,
    lang: String,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new("", DEFAULT_LANG)
    }
}

impl PathBuilder {
    /// A trailing `/` on `base_path` is dropped so joins never double it.
    pub fn new(base_path: impl Into<String>, lang: impl Into<String>) -> Self {
        let base_path = base_path.into();
        Self {
            base_path: base_path.trim_end_matches('/').to_string(),
            lang: lang.into(),
        }
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn lang_prefix(&self) -> String {
        if self.lang.is_empty() || self.lang == DEFAULT_LANG {
            String::new()
        } else {
            format!("/{}", self.lang)
        }
    }

    pub fn certification(&self, id: &str) -> String {
        format!("{}{}/certifications/{}", self.base_path, self.lang_prefix(), id)
    }
}
