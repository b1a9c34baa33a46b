// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interfaces to the collaborators an overlay relies on.
//!
//! Rendering, positioning, and hover-intent timing live outside this crate.
//! The core only needs:
//!
//! - a way to move focus to an element without scrolling it into view ([`FocusSafely`]),
//! - a unique-id generator for default root ids ([`UniqueIdSource`]),
//! - a description of what to ask of the anchored-overlay host ([`AnchoredOverlayProps`]).
//!
//! [`OverlayHost`] bundles the first two so contexts can share them.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::Cell;
use core::fmt;

/// Moves input focus to an element without triggering scroll.
pub trait FocusSafely<E> {
    /// Focus `element`. Only called for elements that are mounted.
    fn focus_safely(&self, element: &E);
}

impl<E, F: Fn(&E)> FocusSafely<E> for F {
    fn focus_safely(&self, element: &E) {
        self(element);
    }
}

/// Source of ids unique within the host document.
pub trait UniqueIdSource {
    /// Produce a fresh id fragment.
    fn unique_id(&self) -> String;
}

/// Counter-backed [`UniqueIdSource`] producing `"0"`, `"1"`, ….
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl SequentialIds {
    /// Start counting from zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl UniqueIdSource for SequentialIds {
    fn unique_id(&self) -> String {
        let id = self.next.get();
        self.next.set(id + 1);
        format!("{id}")
    }
}

/// Collaborators shared by the overlay contexts of one host.
pub struct OverlayHost<E> {
    /// Focus primitive.
    pub focus: Rc<dyn FocusSafely<E>>,
    /// Id generator for contexts created without an explicit id.
    pub ids: Rc<dyn UniqueIdSource>,
}

impl<E> Clone for OverlayHost<E> {
    fn clone(&self) -> Self {
        Self {
            focus: Rc::clone(&self.focus),
            ids: Rc::clone(&self.ids),
        }
    }
}

impl<E> fmt::Debug for OverlayHost<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayHost").finish_non_exhaustive()
    }
}

impl<E: 'static> OverlayHost<E> {
    /// Create a host with the given focus primitive and a [`SequentialIds`] generator.
    pub fn new(focus: impl FocusSafely<E> + 'static) -> Self {
        Self {
            focus: Rc::new(focus),
            ids: Rc::new(SequentialIds::new()),
        }
    }

    /// Replace the id generator.
    #[must_use]
    pub fn with_ids(mut self, ids: impl UniqueIdSource + 'static) -> Self {
        self.ids = Rc::new(ids);
        self
    }

    /// Derive a fresh root id `"{prefix}-{unique}"`.
    pub fn fresh_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.ids.unique_id())
    }
}

/// Where floating content sits relative to its anchor.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Above, centered.
    Top,
    /// Above, aligned to the start edge.
    TopStart,
    /// Above, aligned to the end edge.
    TopEnd,
    /// Right, centered.
    Right,
    /// Right, aligned to the start edge.
    RightStart,
    /// Right, aligned to the end edge.
    RightEnd,
    /// Below, centered.
    Bottom,
    /// Below, aligned to the start edge.
    #[default]
    BottomStart,
    /// Below, aligned to the end edge.
    BottomEnd,
    /// Left, centered.
    Left,
    /// Left, aligned to the start edge.
    LeftStart,
    /// Left, aligned to the end edge.
    LeftEnd,
}

/// What an overlay asks of the anchored-overlay host.
///
/// The host positions the content against `anchor`, applies the dismissal
/// rules, and reports user-driven open changes back through the owning
/// context's `set_open`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchoredOverlayProps<E> {
    /// Root id of the overlay.
    pub id: String,
    /// Whether the overlay is open.
    pub is_open: bool,
    /// Element to anchor to, once mounted.
    pub anchor: Option<E>,
    /// Preferred placement.
    pub placement: Placement,
    /// Close when the user interacts outside the content.
    pub close_on_interact_outside: bool,
    /// Close when the pointer leaves both anchor and content.
    pub close_on_hover_outside: bool,
    /// Hover-intent delay before opening, in milliseconds.
    pub open_delay: u32,
    /// Hover-intent delay before closing, in milliseconds.
    pub close_delay: u32,
    /// Close on the Escape key.
    pub close_on_esc: bool,
    /// Block interaction with the rest of the document while open.
    pub is_modal: bool,
    /// Block document scrolling while open.
    pub prevent_scroll: bool,
    /// Keep focus inside the content while open.
    pub trap_focus: bool,
    /// Return focus to the trigger on close.
    pub restore_focus: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn sequential_ids_count_up() {
        let ids = SequentialIds::new();
        assert_eq!(ids.unique_id(), "0");
        assert_eq!(ids.unique_id(), "1");
    }

    #[test]
    fn host_derives_prefixed_ids_and_focuses_through_closure() {
        let focused = Rc::new(RefCell::new(Vec::new()));
        let sink = focused.clone();
        let host = OverlayHost::new(move |el: &u32| sink.borrow_mut().push(*el));
        assert_eq!(host.fresh_id("menu"), "menu-0");
        assert_eq!(host.clone().fresh_id("dialog"), "dialog-1");
        host.focus.focus_safely(&7);
        assert_eq!(*focused.borrow(), [7]);
    }

    #[test]
    fn bottom_start_is_default_placement() {
        assert_eq!(Placement::default(), Placement::BottomStart);
    }
}
