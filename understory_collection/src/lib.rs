// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_collection --heading-base-level=0

//! Understory Collection: live, document-ordered item registries for headless UI lists.
//!
//! Menus, listboxes, and selects need to know which interactive items are
//! currently mounted, in what order the user sees them, and which one has
//! keyboard focus. This crate provides those pieces without assuming any
//! particular UI framework.
//!
//! - [`Collection`]: a shared, live registry of [`ItemDescriptor`]s for one list level.
//!   Items are ordered by [`DocumentPosition`], not by registration order, and keys are unique
//!   among live items.
//! - [`ItemRegistration`]: the capability returned by [`Collection::register_item`]. Dropping it
//!   removes exactly the item it registered, even if the collection has since reused the slot.
//! - [`ListState`]: focused key, [`Navigation`], selection, and typeahead over a collection.
//! - [`typeahead::TypeSelect`]: the time-limited search buffer behind typeahead.
//!
//! ## Example
//!
//! Items may mount in any order; the collection follows document order.
//!
//! ```rust
//! use understory_collection::{Collection, FocusStrategy, ItemDescriptor, ListState, SelectionMode};
//!
//! let items: Collection<&'static str> = Collection::new();
//! let _delete = items.register_item(ItemDescriptor::new("delete", 2, "#delete")).unwrap();
//! let _open = items.register_item(ItemDescriptor::new("open", 0, "#open")).unwrap();
//! let _save = items.register_item(ItemDescriptor::new("save", 1, "#save")).unwrap();
//!
//! // A second live item with the same key is rejected.
//! assert!(items.register_item(ItemDescriptor::new("save", 3, "#save-2")).is_err());
//!
//! let mut list = ListState::new(items.clone(), SelectionMode::None);
//! assert_eq!(list.focus_initial(FocusStrategy::Last).as_deref(), Some("delete"));
//! assert_eq!(items.get("delete").map(|i| i.element), Some("#delete"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `thiserror` and `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod collection;
mod list;
pub mod typeahead;
mod types;

pub use collection::{Collection, CollectionError, ItemKey, ItemRegistration, Items};
pub use list::{ListState, Navigation, SelectionMode};
pub use types::{DocumentPosition, FocusStrategy, ItemDescriptor};
