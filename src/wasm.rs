// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings.
//!
//! Provides two WASM-accessible types:
//! - `CertSearch`: one-shot search, expansion and highlighting
//! - `CertSearchBar`: the keyboard/focus state machine, clocked by `Date.now()`

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::i18n::{Messages, DEFAULT_LANG};
use crate::search::{mark_html, PathBuilder, SearchEngine};
use crate::searchbar::{BarState, SearchBar};
use crate::semantic::expand;
use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use std::collections::HashMap;
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// Constructor options passed from JavaScript. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertSearchOptions {
    /// Catalog JSON; the bundled catalog when absent
    pub catalog: Option<String>,
    pub lang: Option<String>,
    pub base_path: Option<String>,
    pub config: Option<SearchConfig>,
    /// Flat key → text table; bundled messages for `lang` when absent
    pub messages: Option<HashMap<String, String>>,
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn now() -> Duration {
    Duration::from_secs_f64(js_sys::Date::now().max(0.0) / 1000.0)
}

/// WASM-accessible search engine over one catalog.
#[wasm_bindgen]
pub struct CertSearch {
    engine: SearchEngine<Messages>,
}

#[wasm_bindgen]
impl CertSearch {
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<JsValue>) -> Result<CertSearch, JsValue> {
        let options: CertSearchOptions = match options {
            Some(value) if !value.is_undefined() && !value.is_null() => {
                from_value(value).map_err(js_err)?
            }
            _ => CertSearchOptions::default(),
        };

        let catalog = match options.catalog.as_deref() {
            Some(json) => Catalog::from_json(json),
            None => Catalog::bundled(),
        }
        .map_err(js_err)?;

        let config = options.config.unwrap_or_default();
        config.validate().map_err(js_err)?;

        let lang = options.lang.unwrap_or_else(|| DEFAULT_LANG.to_string());
        let messages = match options.messages {
            Some(entries) => Messages::new(lang.clone(), entries),
            None => Messages::bundled(&lang).unwrap_or_default(),
        };
        let paths = PathBuilder::new(options.base_path.unwrap_or_default(), lang);

        Ok(CertSearch {
            engine: SearchEngine::with_parts(catalog, config, paths, messages),
        })
    }

    /// Ranked suggestions as `Suggestion[]`.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        to_value(&self.engine.search(query)).map_err(js_err)
    }

    /// Semantic expansion of a query, sorted.
    #[wasm_bindgen]
    pub fn expand(&self, query: &str) -> Vec<String> {
        expand(query).into_iter().collect()
    }

    /// HTML-escaped `text` with every match of `query` wrapped in `<mark>`.
    #[wasm_bindgen]
    pub fn highlight(&self, text: &str, query: &str) -> String {
        mark_html(text, query)
    }

    #[wasm_bindgen]
    pub fn record_count(&self) -> usize {
        self.engine.catalog().len()
    }

    /// Full record for a suggestion id, or `undefined`.
    #[wasm_bindgen]
    pub fn record(&self, id: &str) -> Result<JsValue, JsValue> {
        match self.engine.catalog().get(id) {
            Some(record) => to_value(record).map_err(js_err),
            None => Ok(JsValue::UNDEFINED),
        }
    }
}

/// WASM-accessible search bar state.
#[wasm_bindgen]
pub struct CertSearchBar {
    bar: SearchBar,
}

#[wasm_bindgen]
impl CertSearchBar {
    #[wasm_bindgen(constructor)]
    pub fn new(search: &CertSearch) -> CertSearchBar {
        CertSearchBar {
            bar: SearchBar::new(search.engine.config()),
        }
    }

    #[wasm_bindgen]
    pub fn input(&mut self, text: &str) {
        self.bar.input(text, now());
    }

    /// Run due work. Returns true when the UI should re-render.
    #[wasm_bindgen]
    pub fn tick(&mut self, search: &CertSearch) -> bool {
        self.bar.tick(now(), &search.engine)
    }

    /// Milliseconds until `tick` has work, or `undefined`.
    #[wasm_bindgen]
    pub fn next_deadline_in(&self) -> Option<f64> {
        let now = now();
        self.bar
            .next_deadline()
            .map(|due| due.saturating_sub(now).as_secs_f64() * 1000.0)
    }

    #[wasm_bindgen]
    pub fn arrow_down(&mut self) {
        self.bar.arrow_down();
    }

    #[wasm_bindgen]
    pub fn arrow_up(&mut self) {
        self.bar.arrow_up();
    }

    /// Path to navigate to, or `undefined`.
    #[wasm_bindgen]
    pub fn enter(&mut self) -> Option<String> {
        self.bar.enter().map(|navigation| navigation.path)
    }

    #[wasm_bindgen]
    pub fn select(&mut self, index: usize) -> Option<String> {
        self.bar.select(index).map(|navigation| navigation.path)
    }

    #[wasm_bindgen]
    pub fn escape(&mut self) {
        self.bar.escape();
    }

    #[wasm_bindgen]
    pub fn blur(&mut self) {
        self.bar.blur(now());
    }

    #[wasm_bindgen]
    pub fn focus(&mut self) {
        self.bar.focus();
    }

    /// "idle", "open" or "navigating".
    #[wasm_bindgen]
    pub fn state(&self) -> String {
        match self.bar.state() {
            BarState::Idle => "idle",
            BarState::Open => "open",
            BarState::Navigating { .. } => "navigating",
        }
        .to_string()
    }

    #[wasm_bindgen]
    pub fn focused(&self) -> Option<usize> {
        self.bar.focused()
    }

    #[wasm_bindgen]
    pub fn suggestions(&self) -> Result<JsValue, JsValue> {
        to_value(self.bar.suggestions()).map_err(js_err)
    }
}
