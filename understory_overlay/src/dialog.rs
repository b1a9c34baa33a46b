// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dialog context: a single, non-nested overlay.
//!
//! A [`DialogContext`] combines a [`DisclosureState`] with an [`IdRegistry`]
//! for the content, title, and description parts, plus the resolved overlay
//! and focus-trap settings the host applies while the dialog is open.
//!
//! ```
//! use understory_overlay::dialog::{DialogContext, DialogProps};
//! use understory_overlay::host::OverlayHost;
//!
//! let host = OverlayHost::new(|_: &()| {});
//! let dialog = DialogContext::new(DialogProps::default(), &host);
//! assert_eq!(dialog.generate_id("title"), "dialog-0-title");
//!
//! let _title = dialog.register_title_id(dialog.generate_id("title"));
//! assert_eq!(dialog.title_id().as_deref(), Some("dialog-0-title"));
//!
//! assert!(!dialog.should_mount());
//! dialog.toggle();
//! assert!(dialog.is_open() && dialog.should_mount());
//! ```

use alloc::rc::Rc;
use alloc::string::String;
use core::fmt;

use crate::context::{ContextError, Provider};
use crate::disclosure::{DisclosureOptions, DisclosureState};
use crate::host::OverlayHost;
use crate::ids::{IdRegistration, IdRegistry, IdRole};

/// Construction options for a [`DialogContext`].
#[derive(Debug)]
pub struct DialogProps {
    /// Root id. A fresh `"dialog-{n}"` id is generated when absent.
    pub id: Option<String>,
    /// Open state options.
    pub disclosure: DisclosureOptions,
    /// Block interaction with the rest of the document while open.
    pub is_modal: bool,
    /// Block document scrolling while open. Defaults to `is_modal`.
    pub prevent_scroll: Option<bool>,
    /// Keep focus inside the dialog while open. Defaults to `is_modal`.
    pub trap_focus: Option<bool>,
    /// Close on the Escape key.
    pub close_on_esc: bool,
    /// Close when the user interacts outside the content.
    pub close_on_interact_outside: bool,
    /// Move focus into the dialog when it opens.
    pub auto_focus: bool,
    /// Return focus to the trigger when it closes.
    pub restore_focus: bool,
    /// Keep the content mounted while closed.
    pub force_mount: bool,
}

impl Default for DialogProps {
    fn default() -> Self {
        Self {
            id: None,
            disclosure: DisclosureOptions::default(),
            is_modal: true,
            prevent_scroll: None,
            trap_focus: None,
            close_on_esc: true,
            close_on_interact_outside: true,
            auto_focus: true,
            restore_focus: true,
            force_mount: false,
        }
    }
}

/// Overlay behavior the host applies while the dialog is open.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OverlayConfig {
    /// Block interaction with the rest of the document.
    pub is_modal: bool,
    /// Block document scrolling.
    pub prevent_scroll: bool,
    /// Close on the Escape key.
    pub close_on_esc: bool,
    /// Close when the user interacts outside the content.
    pub close_on_interact_outside: bool,
}

/// Focus-trap behavior for the dialog content.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FocusTrapConfig {
    /// Keep focus inside the content.
    pub trap_focus: bool,
    /// Move focus into the content on open.
    pub auto_focus: bool,
    /// Return focus on close.
    pub restore_focus: bool,
}

struct DialogInner {
    disclosure: DisclosureState,
    ids: IdRegistry,
    overlay: OverlayConfig,
    focus_trap: FocusTrapConfig,
    force_mount: bool,
}

/// Shared state of one dialog, handed to its trigger, content, title, and description.
#[derive(Clone)]
pub struct DialogContext {
    inner: Rc<DialogInner>,
}

impl fmt::Debug for DialogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogContext")
            .field("id", &self.inner.ids.root_id())
            .field("disclosure", &self.inner.disclosure)
            .field("overlay", &self.inner.overlay)
            .finish_non_exhaustive()
    }
}

impl DialogContext {
    /// Resolve `props` and create the dialog.
    pub fn new<E: 'static>(props: DialogProps, host: &OverlayHost<E>) -> Self {
        let id = props.id.unwrap_or_else(|| host.fresh_id("dialog"));
        let overlay = OverlayConfig {
            is_modal: props.is_modal,
            prevent_scroll: props.prevent_scroll.unwrap_or(props.is_modal),
            close_on_esc: props.close_on_esc,
            close_on_interact_outside: props.close_on_interact_outside,
        };
        let focus_trap = FocusTrapConfig {
            trap_focus: props.trap_focus.unwrap_or(props.is_modal),
            auto_focus: props.auto_focus,
            restore_focus: props.restore_focus,
        };
        Self {
            inner: Rc::new(DialogInner {
                disclosure: DisclosureState::new(props.disclosure),
                ids: IdRegistry::new(id),
                overlay,
                focus_trap,
                force_mount: props.force_mount,
            }),
        }
    }

    /// Whether the dialog is open.
    pub fn is_open(&self) -> bool {
        self.inner.disclosure.is_open()
    }

    /// Whether the content should be mounted.
    pub fn should_mount(&self) -> bool {
        self.inner.force_mount || self.is_open()
    }

    /// Overlay behavior for the host.
    pub fn overlay_config(&self) -> OverlayConfig {
        self.inner.overlay
    }

    /// Focus-trap behavior for the content.
    pub fn focus_trap_config(&self) -> FocusTrapConfig {
        self.inner.focus_trap
    }

    /// Open the dialog.
    pub fn open(&self) {
        tracing::debug!(id = self.inner.ids.root_id(), "dialog open");
        self.inner.disclosure.open();
    }

    /// Close the dialog.
    pub fn close(&self) {
        tracing::debug!(id = self.inner.ids.root_id(), "dialog close");
        self.inner.disclosure.close();
    }

    /// Toggle the dialog.
    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Apply an open change reported by the overlay host.
    pub fn set_open(&self, open: bool) {
        self.inner.disclosure.set_is_open(open);
    }

    /// Close in response to Escape, if configured. Returns whether it closed.
    pub fn escape(&self) -> bool {
        if self.inner.overlay.close_on_esc && self.is_open() {
            self.close();
            return true;
        }
        false
    }

    /// Close in response to an outside interaction, if configured. Returns whether it closed.
    pub fn interact_outside(&self) -> bool {
        if self.inner.overlay.close_on_interact_outside && self.is_open() {
            self.close();
            return true;
        }
        false
    }

    /// Derive `"{id}-{part}"`.
    pub fn generate_id(&self, part: &str) -> String {
        self.inner.ids.generate_id(part)
    }

    /// Id published by the content part.
    pub fn content_id(&self) -> Option<String> {
        self.inner.ids.get(IdRole::Content)
    }

    /// Id published by the title part.
    pub fn title_id(&self) -> Option<String> {
        self.inner.ids.get(IdRole::Title)
    }

    /// Id published by the description part.
    pub fn description_id(&self) -> Option<String> {
        self.inner.ids.get(IdRole::Description)
    }

    /// Publish the content id.
    pub fn register_content_id(&self, id: impl Into<String>) -> IdRegistration {
        self.inner.ids.register(IdRole::Content, id)
    }

    /// Publish the title id.
    pub fn register_title_id(&self, id: impl Into<String>) -> IdRegistration {
        self.inner.ids.register(IdRole::Title, id)
    }

    /// Publish the description id.
    pub fn register_description_id(&self, id: impl Into<String>) -> IdRegistration {
        self.inner.ids.register(IdRole::Description, id)
    }
}

/// Look up the enclosing dialog.
pub fn use_dialog_context(
    provider: &Provider<DialogContext>,
) -> Result<DialogContext, ContextError> {
    provider.require("use_dialog_context", "Dialog")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn host() -> OverlayHost<()> {
        OverlayHost::new(|_: &()| {})
    }

    #[test]
    fn modal_defaults_trap_and_prevent_scroll() {
        let dialog = DialogContext::new(DialogProps::default(), &host());
        assert_eq!(
            dialog.overlay_config(),
            OverlayConfig {
                is_modal: true,
                prevent_scroll: true,
                close_on_esc: true,
                close_on_interact_outside: true,
            }
        );
        assert!(dialog.focus_trap_config().trap_focus);
    }

    #[test]
    fn non_modal_relaxes_derived_defaults() {
        let dialog = DialogContext::new(
            DialogProps {
                is_modal: false,
                trap_focus: Some(true),
                ..DialogProps::default()
            },
            &host(),
        );
        assert!(!dialog.overlay_config().prevent_scroll);
        assert!(dialog.focus_trap_config().trap_focus);
    }

    #[test]
    fn escape_and_outside_honor_config() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let dialog = DialogContext::new(
            DialogProps {
                id: Some("settings".into()),
                disclosure: DisclosureOptions::uncontrolled(true)
                    .with_on_open_change(move |open| sink.borrow_mut().push(open)),
                close_on_esc: false,
                ..DialogProps::default()
            },
            &host(),
        );
        assert!(!dialog.escape());
        assert!(dialog.is_open());
        assert!(dialog.interact_outside());
        assert!(!dialog.is_open());
        // Already closed: nothing to dismiss.
        assert!(!dialog.interact_outside());
        assert_eq!(*log.borrow(), [false]);
    }

    #[test]
    fn force_mount_keeps_content() {
        let dialog = DialogContext::new(
            DialogProps {
                force_mount: true,
                ..DialogProps::default()
            },
            &host(),
        );
        assert!(!dialog.is_open());
        assert!(dialog.should_mount());
    }

    #[test]
    fn ids_wire_through_registry() {
        let dialog = DialogContext::new(
            DialogProps {
                id: Some("d".into()),
                ..DialogProps::default()
            },
            &host(),
        );
        let content = dialog.register_content_id(dialog.generate_id("content"));
        let _desc = dialog.register_description_id("custom-desc");
        assert_eq!(dialog.content_id().as_deref(), Some("d-content"));
        assert_eq!(dialog.description_id().as_deref(), Some("custom-desc"));
        drop(content);
        assert_eq!(dialog.content_id(), None);
    }

    #[test]
    fn lookup_outside_dialog_fails() {
        let provider = Provider::new();
        assert!(use_dialog_context(&provider).is_err());
        let dialog = DialogContext::new(DialogProps::default(), &host());
        provider.provide(dialog, || {
            let found = use_dialog_context(&provider).unwrap();
            found.open();
            assert!(found.is_open());
        });
    }
}
