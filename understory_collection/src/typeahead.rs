// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typeahead search buffer.
//!
//! [`TypeSelect`] accumulates printable characters into a search string. Keys
//! typed within [`TypeSelect::timeout_ms`] of each other extend the search; a
//! longer pause starts a new one. Timestamps are supplied by the caller in
//! milliseconds, so the buffer never reads a clock itself.
//!
//! ```
//! use understory_collection::typeahead::TypeSelect;
//!
//! let mut search = TypeSelect::new();
//! assert_eq!(search.push('S', 0), Some("s"));
//! assert_eq!(search.push('a', 200), Some("sa"));
//! // After the timeout, a fresh search begins.
//! assert_eq!(search.push('b', 5_000), Some("b"));
//! ```

use alloc::string::String;

/// Default pause, in milliseconds, after which typing starts a new search.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Accumulating, time-limited typeahead buffer.
#[derive(Clone, Debug)]
pub struct TypeSelect {
    search: String,
    last_input: Option<u64>,
    /// Pause in milliseconds after which the search resets.
    pub timeout_ms: u64,
}

impl Default for TypeSelect {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeSelect {
    /// Create an empty buffer with the default timeout.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT_MS)
    }

    /// Create an empty buffer with a custom timeout.
    pub fn with_timeout(timeout_ms: u64) -> Self {
        Self {
            search: String::new(),
            last_input: None,
            timeout_ms,
        }
    }

    /// Feed one typed character at `timestamp` and return the current search.
    ///
    /// Returns `None` for characters that never start a search: control
    /// characters, and whitespace when no search is in progress (a leading
    /// space activates the focused item instead).
    pub fn push(&mut self, ch: char, timestamp: u64) -> Option<&str> {
        if self.is_expired(timestamp) {
            self.search.clear();
        }
        if ch.is_control() || (ch.is_whitespace() && self.search.is_empty()) {
            return None;
        }
        self.search.extend(ch.to_lowercase());
        self.last_input = Some(timestamp);
        Some(&self.search)
    }

    /// The search accumulated so far.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Drop the current search.
    pub fn reset(&mut self) {
        self.search.clear();
        self.last_input = None;
    }

    fn is_expired(&self, timestamp: u64) -> bool {
        self.last_input
            .is_some_and(|last| timestamp.saturating_sub(last) > self.timeout_ms)
    }
}
