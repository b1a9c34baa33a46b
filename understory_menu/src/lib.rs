// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_menu --heading-base-level=0

//! Understory Menu: headless state for menus and nested submenus.
//!
//! A menu is a tree of levels: the root menu and any submenus opened from its
//! items. Each level is a [`MenuContext`] that owns
//!
//! - its open state (a disclosure, controlled or uncontrolled),
//! - a live [`Collection`](understory_collection::Collection) of its items in
//!   document order, with a list state for keyboard navigation and typeahead,
//! - id slots for its trigger and content,
//! - a [`MenuConfig`] resolved once from its [`MenuProps`] and its parent.
//!
//! Levels coordinate through a non-owning parent link:
//!
//! - [`MenuContext::close`] with `deep = true` closes the level and then every
//!   ancestor, in child-to-root order, before returning.
//! - A submenu registers its trigger into the parent level's collection with
//!   [`MenuContext::register_item_to_parent_collection`], so the parent can
//!   navigate onto it like any other item. Dropping the submenu removes it again.
//! - `is_modal`, `prevent_scroll`, and `trap_focus` default to the parent's values.
//!
//! ## Example
//!
//! ```rust
//! use understory_collection::{FocusStrategy, ItemDescriptor};
//! use understory_menu::{FocusTarget, MenuContext, MenuProps};
//! use understory_overlay::host::OverlayHost;
//!
//! let host = OverlayHost::new(|_: &&str| {});
//! let file = MenuContext::new(MenuProps::default(), None, &host);
//! let _new = file.register_item(ItemDescriptor::new("new", 0, "#new")).unwrap();
//!
//! let recent = MenuContext::new(MenuProps::default(), Some(&file), &host);
//! recent
//!     .register_item_to_parent_collection(ItemDescriptor::new("recent", 1, "#recent"))
//!     .unwrap();
//! let _doc = recent.register_item(ItemDescriptor::new("notes.txt", 0, "#notes")).unwrap();
//!
//! file.open(FocusStrategy::First);
//! recent.open(FocusStrategy::First);
//! assert_eq!(recent.initial_focus(), FocusTarget::Item("notes.txt".into()));
//!
//! // Activating an item in the submenu closes the whole chain.
//! recent.activate("notes.txt");
//! assert!(!recent.is_open() && !file.is_open());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support in the dependencies.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod menu;

pub use config::{AutoFocus, MenuConfig, MenuFlags, MenuProps};
pub use menu::{FocusTarget, MenuContext, MenuError, use_menu_context, use_optional_menu_context};
