// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Accessible id wiring: derived ids and single-writer id slots.
//!
//! Overlays need to cross-reference their parts (`aria-controls`,
//! `aria-labelledby`, and friends). An [`IdRegistry`] derives deterministic ids
//! from a root id and lets the part currently filling a semantic [`IdRole`]
//! publish its concrete id.
//!
//! Each role is a single-writer slot. [`IdRegistry::register`] overwrites the
//! slot and returns an [`IdRegistration`]; releasing that registration clears
//! the slot only if it still holds the same id. A part that unmounts after a
//! newer part already re-registered therefore leaves the newer id in place.
//!
//! ```
//! use understory_overlay::ids::{IdRegistry, IdRole};
//!
//! let ids = IdRegistry::new("menu-7");
//! assert_eq!(ids.generate_id("trigger"), "menu-7-trigger");
//!
//! let first = ids.register(IdRole::Content, "c1");
//! let second = ids.register(IdRole::Content, "c2");
//! first.unregister();
//! assert_eq!(ids.get(IdRole::Content).as_deref(), Some("c2"));
//! second.unregister();
//! assert_eq!(ids.get(IdRole::Content), None);
//! ```

use alloc::format;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;

/// Semantic part of an overlay whose id other parts refer to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IdRole {
    /// The element that opens the overlay.
    Trigger,
    /// The overlay content.
    Content,
    /// The heading that names the content.
    Title,
    /// The text that describes the content.
    Description,
    /// The visible label of a form control.
    Label,
}

impl IdRole {
    const COUNT: usize = 5;

    const fn index(self) -> usize {
        match self {
            Self::Trigger => 0,
            Self::Content => 1,
            Self::Title => 2,
            Self::Description => 3,
            Self::Label => 4,
        }
    }

    /// Suffix used when deriving an id for this role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trigger => "trigger",
            Self::Content => "content",
            Self::Title => "title",
            Self::Description => "description",
            Self::Label => "label",
        }
    }
}

type Slots = [RefCell<Option<String>>; IdRole::COUNT];

/// Derived ids plus one single-writer slot per [`IdRole`].
///
/// Cloning shares the slots.
#[derive(Clone)]
pub struct IdRegistry {
    root_id: Rc<str>,
    slots: Rc<Slots>,
}

impl fmt::Debug for IdRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdRegistry")
            .field("root_id", &self.root_id)
            .field("trigger", &self.get(IdRole::Trigger))
            .field("content", &self.get(IdRole::Content))
            .finish_non_exhaustive()
    }
}

impl IdRegistry {
    /// Create a registry whose derived ids are prefixed by `root_id`.
    pub fn new(root_id: impl Into<String>) -> Self {
        let root_id: String = root_id.into();
        Self {
            root_id: Rc::from(root_id),
            slots: Rc::new(core::array::from_fn(|_| RefCell::new(None))),
        }
    }

    /// The root id.
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// Derive `"{root_id}-{part}"`.
    pub fn generate_id(&self, part: &str) -> String {
        format!("{}-{part}", self.root_id)
    }

    /// The id currently published for `role`.
    pub fn get(&self, role: IdRole) -> Option<String> {
        self.slots[role.index()].borrow().clone()
    }

    /// Publish `id` for `role`, overwriting any previous id.
    pub fn register(&self, role: IdRole, id: impl Into<String>) -> IdRegistration {
        let id: String = id.into();
        tracing::trace!(root = %self.root_id, role = role.as_str(), %id, "registered id");
        *self.slots[role.index()].borrow_mut() = Some(id.clone());
        IdRegistration {
            slots: Rc::downgrade(&self.slots),
            role,
            id,
        }
    }
}

/// Release capability returned by [`IdRegistry::register`].
///
/// Dropping it (or calling [`IdRegistration::unregister`]) clears the slot only
/// if the slot still holds this registration's id.
#[must_use = "dropping the registration clears the id slot"]
pub struct IdRegistration {
    slots: Weak<Slots>,
    role: IdRole,
    id: String,
}

impl fmt::Debug for IdRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdRegistration")
            .field("role", &self.role)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl IdRegistration {
    /// The role this registration fills.
    pub fn role(&self) -> IdRole {
        self.role
    }

    /// The registered id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Release the registration.
    pub fn unregister(self) {
        drop(self);
    }
}

impl Drop for IdRegistration {
    fn drop(&mut self) {
        let Some(slots) = self.slots.upgrade() else {
            return;
        };
        let mut slot = slots[self.role.index()].borrow_mut();
        if slot.as_deref() == Some(self.id.as_str()) {
            *slot = None;
        } else {
            tracing::trace!(role = self.role.as_str(), id = %self.id, "ignored stale id release");
        }
    }
}
