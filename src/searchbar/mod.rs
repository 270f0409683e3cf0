// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyboard and focus handling for a search-as-you-type box.
//!
//! ```text
//!            input (debounced, results)        arrow up/down
//!   Idle ──────────────────────────────▶ Open ──────────────▶ Navigating{i}
//!    ▲                                    │                        │
//!    └──── escape / blur grace / enter ───┴────────────────────────┘
//! ```
//!
//! The bar owns no clock. Hosts pass `now` (time since any fixed epoch) into
//! every time-sensitive call and call [`SearchBar::tick`] whenever
//! [`SearchBar::next_deadline`] has passed.

mod debounce;

pub use debounce::Debouncer;

use crate::config::SearchConfig;
use crate::i18n::Translator;
use crate::search::SearchEngine;
use crate::types::Suggestion;
use crate::utils::normalize_query;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarState {
    /// No suggestions shown
    Idle,
    /// Suggestions visible, nothing focused
    Open,
    /// Suggestions visible, one focused
    Navigating { focused: usize },
}

/// Where the host should go after the user picked a suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub id: String,
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct SearchBar {
    text: String,
    suggestions: Vec<Suggestion>,
    state: BarState,
    pending_query: Debouncer<String>,
    pending_dismiss: Debouncer<()>,
    debounce: Duration,
    blur_grace: Duration,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new(&SearchConfig::default())
    }
}

impl SearchBar {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            text: String::new(),
            suggestions: Vec::new(),
            state: BarState::Idle,
            pending_query: Debouncer::new(),
            pending_dismiss: Debouncer::new(),
            debounce: config.debounce(),
            blur_grace: config.blur_grace(),
        }
    }

    pub fn state(&self) -> BarState {
        self.state
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn focused(&self) -> Option<usize> {
        match self.state {
            BarState::Navigating { focused } => Some(focused),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.state != BarState::Idle
    }

    /// Earliest time at which `tick` has something to do.
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.pending_query.due_at(), self.pending_dismiss.due_at()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// The text changed.
    ///
    /// Blank text closes the bar at once and nothing is scored. Anything else
    /// is scored after the debounce, replacing any query still waiting.
    pub fn input(&mut self, text: &str, now: Duration) {
        self.text = text.to_string();
        if normalize_query(text).is_empty() {
            self.pending_query.cancel();
            self.suggestions.clear();
            self.state = BarState::Idle;
            return;
        }
        self.pending_query.schedule(now, self.debounce, self.text.clone());
    }

    /// Run whatever is due. Returns true if the visible state changed.
    pub fn tick<T: Translator>(&mut self, now: Duration, engine: &SearchEngine<T>) -> bool {
        let mut changed = false;

        if let Some(query) = self.pending_query.take_due(now) {
            self.suggestions = engine.search(&query);
            self.state = if self.suggestions.is_empty() {
                BarState::Idle
            } else {
                BarState::Open
            };
            changed = true;
        }

        if self.pending_dismiss.take_due(now).is_some() {
            self.pending_query.cancel();
            self.suggestions.clear();
            self.state = BarState::Idle;
            changed = true;
        }

        changed
    }

    /// Move focus down, wrapping from the last suggestion to the first.
    pub fn arrow_down(&mut self) {
        let len = self.suggestions.len();
        if len == 0 {
            return;
        }
        let focused = match self.state {
            BarState::Navigating { focused } => (focused + 1) % len,
            _ => 0,
        };
        self.state = BarState::Navigating { focused };
    }

    /// Move focus up, wrapping from the first suggestion to the last.
    pub fn arrow_up(&mut self) {
        let len = self.suggestions.len();
        if len == 0 {
            return;
        }
        let focused = match self.state {
            BarState::Navigating { focused } => (focused + len - 1) % len,
            _ => len - 1,
        };
        self.state = BarState::Navigating { focused };
    }

    /// Navigate to the focused suggestion, if any.
    pub fn enter(&mut self) -> Option<Navigation> {
        let focused = self.focused()?;
        self.select(focused)
    }

    /// Navigate to the suggestion at `index` (a click).
    ///
    /// Still works during the blur grace window, which is what the window is
    /// for.
    pub fn select(&mut self, index: usize) -> Option<Navigation> {
        let suggestion = self.suggestions.get(index)?;
        let navigation = Navigation {
            id: suggestion.id.clone(),
            path: suggestion.path.clone(),
        };
        self.reset();
        Some(navigation)
    }

    /// Clear query and suggestions.
    pub fn escape(&mut self) {
        self.reset();
    }

    /// The box lost focus; close after the grace delay.
    pub fn blur(&mut self, now: Duration) {
        self.pending_dismiss.schedule(now, self.blur_grace, ());
    }

    /// The box regained focus before the grace delay ran out.
    pub fn focus(&mut self) {
        self.pending_dismiss.cancel();
    }

    fn reset(&mut self) {
        self.text.clear();
        self.suggestions.clear();
        self.pending_query.cancel();
        self.pending_dismiss.cancel();
        self.state = BarState::Idle;
    }
}
