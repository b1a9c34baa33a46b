// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open/closed state with controlled and uncontrolled modes.
//!
//! A [`DisclosureState`] is either:
//!
//! - **Uncontrolled**: it owns the open flag. It starts from
//!   [`DisclosureOptions::default_is_open`] and every mutation updates the flag
//!   and then notifies [`DisclosureOptions::on_open_change`].
//! - **Controlled**: the authoritative value lives with the caller and is read
//!   through [`DisclosureOptions::is_open`]. Mutations never change anything
//!   locally; they only forward the requested value to `on_open_change`, and
//!   the caller decides whether to apply it.
//!
//! Every mutation notifies exactly once with the requested value, even when the
//! value does not change (closing a closed disclosure still notifies).
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use understory_overlay::disclosure::{DisclosureOptions, DisclosureState};
//!
//! // Controlled: the caller owns the value and applies requested changes.
//! let external = Rc::new(Cell::new(false));
//! let state = DisclosureState::new(
//!     DisclosureOptions::controlled({
//!         let external = external.clone();
//!         move || external.get()
//!     })
//!     .with_on_open_change({
//!         let external = external.clone();
//!         move |open| external.set(open)
//!     }),
//! );
//!
//! state.open();
//! assert!(state.is_open());
//! external.set(false);
//! assert!(!state.is_open());
//! ```

use alloc::boxed::Box;
use core::cell::Cell;
use core::fmt;

/// Construction options for a [`DisclosureState`].
///
/// The default is uncontrolled, initially closed, without a change handler.
#[derive(Default)]
pub struct DisclosureOptions {
    /// External source of the open flag. When present, the state is controlled.
    pub is_open: Option<Box<dyn Fn() -> bool>>,
    /// Initial open flag for uncontrolled state.
    pub default_is_open: bool,
    /// Called with the requested value on every mutation.
    pub on_open_change: Option<Box<dyn Fn(bool)>>,
}

impl fmt::Debug for DisclosureOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisclosureOptions")
            .field("controlled", &self.is_open.is_some())
            .field("default_is_open", &self.default_is_open)
            .field("on_open_change", &self.on_open_change.is_some())
            .finish()
    }
}

impl DisclosureOptions {
    /// Uncontrolled options starting from `default_is_open`.
    pub fn uncontrolled(default_is_open: bool) -> Self {
        Self {
            default_is_open,
            ..Self::default()
        }
    }

    /// Controlled options reading the open flag from `source`.
    pub fn controlled(source: impl Fn() -> bool + 'static) -> Self {
        Self {
            is_open: Some(Box::new(source)),
            ..Self::default()
        }
    }

    /// Set the change handler.
    #[must_use]
    pub fn with_on_open_change(mut self, handler: impl Fn(bool) + 'static) -> Self {
        self.on_open_change = Some(Box::new(handler));
        self
    }
}

/// Open/closed flag with a change notification.
///
/// Methods take `&self` so a disclosure can live inside shared, `Rc`-based
/// contexts. No borrow is held while `on_open_change` runs, so the handler may
/// read the state it was called from.
pub struct DisclosureState {
    controlled: Option<Box<dyn Fn() -> bool>>,
    open: Cell<bool>,
    on_open_change: Option<Box<dyn Fn(bool)>>,
}

impl fmt::Debug for DisclosureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisclosureState")
            .field("is_open", &self.is_open())
            .field("is_controlled", &self.is_controlled())
            .finish_non_exhaustive()
    }
}

impl Default for DisclosureState {
    fn default() -> Self {
        Self::new(DisclosureOptions::default())
    }
}

impl DisclosureState {
    /// Create a disclosure from options.
    pub fn new(options: DisclosureOptions) -> Self {
        Self {
            controlled: options.is_open,
            open: Cell::new(options.default_is_open),
            on_open_change: options.on_open_change,
        }
    }

    /// Whether the disclosure is open.
    ///
    /// Controlled state always reports the external value.
    pub fn is_open(&self) -> bool {
        match &self.controlled {
            Some(source) => source(),
            None => self.open.get(),
        }
    }

    /// Whether the open flag is owned by the caller.
    pub fn is_controlled(&self) -> bool {
        self.controlled.is_some()
    }

    /// Request the open state.
    pub fn open(&self) {
        self.set_is_open(true);
    }

    /// Request the closed state.
    pub fn close(&self) {
        self.set_is_open(false);
    }

    /// Request the opposite of the current state.
    pub fn toggle(&self) {
        self.set_is_open(!self.is_open());
    }

    /// Request `next`. Uncontrolled state stores it before notifying.
    pub fn set_is_open(&self, next: bool) {
        if self.controlled.is_none() {
            self.open.set(next);
        }
        if let Some(handler) = &self.on_open_change {
            handler(next);
        }
    }
}
