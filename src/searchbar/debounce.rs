// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-slot deferred work.

use std::time::Duration;

/// Holds at most one pending value with a due time.
///
/// Scheduling replaces whatever was pending; the replaced value is dropped
/// and never fires. Time is whatever the caller says it is, measured from an
/// arbitrary epoch, so the same code runs under a test clock, `Instant`, or
/// `performance.now()`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    slot: Option<(Duration, T)>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending value with `value`, due at `now + delay`.
    pub fn schedule(&mut self, now: Duration, delay: Duration, value: T) {
        self.slot = Some((now.saturating_add(delay), value));
    }

    pub fn cancel(&mut self) {
        self.slot = None;
    }

    pub fn is_pending(&self) -> bool {
        self.slot.is_some()
    }

    pub fn due_at(&self) -> Option<Duration> {
        self.slot.as_ref().map(|(due, _)| *due)
    }

    /// Take the pending value if its due time has been reached.
    pub fn take_due(&mut self, now: Duration) -> Option<T> {
        match self.slot {
            Some((due, _)) if due <= now => self.slot.take().map(|(_, value)| value),
            _ => None,
        }
    }
}
