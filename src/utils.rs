//! Utility functions for string processing.

/// Normalize a raw query: trim surrounding whitespace and lowercase.
///
/// Inner whitespace is kept as typed. "service mesh" and "service  mesh" are
/// different queries, which matches how the substring checks downstream
/// treat them.
pub fn normalize_query(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Length in characters, not bytes.
///
/// The threshold policy is defined on what the user typed, so "ö" counts as
/// one character just like "o".
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// First character of every whitespace-separated word.
///
/// "certified kubernetes administrator" → "cka"
pub fn acronym_of(text: &str) -> String {
    text.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Wall-clock timer for log fields.
///
/// `std::time::Instant` panics on `wasm32-unknown-unknown`, so there the
/// stopwatch always reads zero.
pub struct Stopwatch {
    #[cfg(not(target_arch = "wasm32"))]
    started: std::time::Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            started: std::time::Instant::now(),
        }
    }

    pub fn elapsed_us(&self) -> u64 {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.started.elapsed().as_micros() as u64
        }
        #[cfg(target_arch = "wasm32")]
        {
            0
        }
    }
}
