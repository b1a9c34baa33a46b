// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped context lookup for composed widgets.
//!
//! Parts of a composite widget (a trigger, its content, the items inside)
//! need the context of the widget they are mounted under. The preferred way is
//! to pass that context explicitly. When a host mounts parts through a
//! recursive build step instead, a [`Provider`] makes the nearest enclosing
//! context available for the duration of that step.
//!
//! Looking up a required context outside any provided scope is a programming
//! error and is reported as [`ContextError::Missing`] rather than papered over
//! with a default.
//!
//! ```
//! use understory_overlay::context::{ContextError, Provider};
//!
//! let provider: Provider<&'static str> = Provider::new();
//! assert_eq!(
//!     provider.require("use_tab_context", "Tabs"),
//!     Err(ContextError::Missing { hook: "use_tab_context", component: "Tabs" })
//! );
//!
//! provider.provide("outer", || {
//!     provider.provide("inner", || {
//!         assert_eq!(provider.current(), Some("inner"));
//!     });
//!     assert_eq!(provider.current(), Some("outer"));
//! });
//! assert_eq!(provider.current(), None);
//! ```

use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// Errors from context lookup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// A required context was looked up outside the component that provides it.
    #[error("[understory]: `{hook}` must be used within a `{component}` component")]
    Missing {
        /// Name of the lookup that failed.
        hook: &'static str,
        /// Component that should have provided the context.
        component: &'static str,
    },
}

/// A stack of nested context values.
///
/// The innermost value provided with [`Provider::provide`] is the current one.
pub struct Provider<T> {
    stack: RefCell<Vec<T>>,
}

impl<T> fmt::Debug for Provider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}

impl<T> Default for Provider<T> {
    fn default() -> Self {
        Self::new()
    }
}

struct PopOnDrop<'a, T>(&'a RefCell<Vec<T>>);

impl<T> Drop for PopOnDrop<'_, T> {
    fn drop(&mut self) {
        self.0.borrow_mut().pop();
    }
}

impl<T> Provider<T> {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self {
            stack: RefCell::new(Vec::new()),
        }
    }

    /// Number of nested scopes currently open.
    pub fn depth(&self) -> usize {
        self.stack.borrow().len()
    }

    /// Run `f` with `value` as the current context.
    ///
    /// The value is removed again when `f` returns or unwinds.
    pub fn provide<R>(&self, value: T, f: impl FnOnce() -> R) -> R {
        self.stack.borrow_mut().push(value);
        let _scope = PopOnDrop(&self.stack);
        f()
    }
}

impl<T: Clone> Provider<T> {
    /// The innermost provided value, if any.
    pub fn current(&self) -> Option<T> {
        self.stack.borrow().last().cloned()
    }

    /// The innermost provided value, or [`ContextError::Missing`].
    pub fn require(&self, hook: &'static str, component: &'static str) -> Result<T, ContextError> {
        self.current()
            .ok_or(ContextError::Missing { hook, component })
    }
}
