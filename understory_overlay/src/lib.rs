// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_overlay --heading-base-level=0

//! Understory Overlay: headless state for overlay-style widgets.
//!
//! Dialogs, selects, popovers, and menus share a small set of concerns that
//! are independent of how they are drawn:
//!
//! - [`disclosure`]: an open/closed flag with controlled and uncontrolled modes.
//! - [`ids`]: deterministic derived ids and single-writer id slots with
//!   stale-release protection, for accessible cross-references.
//! - [`context`]: scoped lookup of the enclosing widget's context, failing
//!   loudly outside it.
//! - [`host`]: the collaborators an overlay calls into (focus without scroll,
//!   unique ids, anchored-overlay props).
//! - [`dialog`] and [`select`]: complete contexts built from the pieces above.
//!
//! Nested menus live in the `understory_menu` crate, built on this one.
//!
//! ## Example
//!
//! ```rust
//! use understory_overlay::dialog::{DialogContext, DialogProps};
//! use understory_overlay::disclosure::DisclosureOptions;
//! use understory_overlay::host::OverlayHost;
//!
//! let host = OverlayHost::new(|_: &&str| {});
//! let dialog = DialogContext::new(
//!     DialogProps {
//!         id: Some("confirm".into()),
//!         disclosure: DisclosureOptions::uncontrolled(true),
//!         ..DialogProps::default()
//!     },
//!     &host,
//! );
//! let _title = dialog.register_title_id(dialog.generate_id("title"));
//! assert_eq!(dialog.title_id().as_deref(), Some("confirm-title"));
//!
//! assert!(dialog.escape());
//! assert!(!dialog.is_open());
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `thiserror`, `tracing`, and `understory_collection`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod context;
pub mod dialog;
pub mod disclosure;
pub mod host;
pub mod ids;
pub mod select;
