// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Select context: a disclosure over a single-selection list of options.
//!
//! The content (listbox) of a select is only present while the select is open,
//! unless it is force-mounted. [`SelectPortal::should_render`] is the gate a
//! host consults before portalling the content into the document.
//!
//! ```
//! use understory_collection::{FocusStrategy, ItemDescriptor};
//! use understory_overlay::host::OverlayHost;
//! use understory_overlay::select::{SelectContext, SelectPortal, SelectProps};
//!
//! let host = OverlayHost::new(|_: &u32| {});
//! let select: SelectContext<u32> = SelectContext::new(SelectProps::default(), &host);
//! let _red = select.register_option(ItemDescriptor::new("red", 0, 1)).unwrap();
//! let _blue = select.register_option(ItemDescriptor::new("blue", 1, 2)).unwrap();
//!
//! assert!(!SelectPortal::should_render(&select));
//! select.open(Some(FocusStrategy::Last));
//! assert!(SelectPortal::should_render(&select));
//! assert_eq!(select.initial_focus().as_deref(), Some("blue"));
//!
//! assert!(select.select("red"));
//! assert_eq!(select.value().as_deref(), Some("red"));
//! assert!(!select.is_open());
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::{Cell, Ref, RefCell, RefMut};
use core::fmt;

use understory_collection::{
    Collection, CollectionError, FocusStrategy, ItemDescriptor, ItemRegistration, ListState,
    SelectionMode,
};

use crate::context::{ContextError, Provider};
use crate::disclosure::{DisclosureOptions, DisclosureState};
use crate::host::OverlayHost;
use crate::ids::{IdRegistration, IdRegistry, IdRole};

/// Construction options for a [`SelectContext`].
pub struct SelectProps {
    /// Root id. A fresh `"select-{n}"` id is generated when absent.
    pub id: Option<String>,
    /// Open state options.
    pub disclosure: DisclosureOptions,
    /// Keep the listbox mounted while closed.
    pub force_mount: bool,
    /// Close the select after an option is chosen.
    pub close_on_select: bool,
    /// Called with the new value after the selection changes.
    pub on_value_change: Option<Box<dyn Fn(Option<&str>)>>,
}

impl Default for SelectProps {
    fn default() -> Self {
        Self {
            id: None,
            disclosure: DisclosureOptions::default(),
            force_mount: false,
            close_on_select: true,
            on_value_change: None,
        }
    }
}

impl fmt::Debug for SelectProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectProps")
            .field("id", &self.id)
            .field("disclosure", &self.disclosure)
            .field("force_mount", &self.force_mount)
            .field("close_on_select", &self.close_on_select)
            .field("on_value_change", &self.on_value_change.is_some())
            .finish()
    }
}

struct SelectInner<E> {
    disclosure: DisclosureState,
    ids: IdRegistry,
    list: RefCell<ListState<E>>,
    focus_strategy: Cell<Option<FocusStrategy>>,
    force_mount: bool,
    close_on_select: bool,
    on_value_change: Option<Box<dyn Fn(Option<&str>)>>,
}

/// Shared state of one select, handed to its trigger, listbox, and options.
pub struct SelectContext<E> {
    inner: Rc<SelectInner<E>>,
}

impl<E> Clone for SelectContext<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> fmt::Debug for SelectContext<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectContext")
            .field("id", &self.inner.ids.root_id())
            .field("disclosure", &self.inner.disclosure)
            .field("options", self.inner.list.borrow().collection())
            .finish_non_exhaustive()
    }
}

impl<E: 'static> SelectContext<E> {
    /// Resolve `props` and create the select.
    pub fn new(props: SelectProps, host: &OverlayHost<E>) -> Self {
        let id = props.id.unwrap_or_else(|| host.fresh_id("select"));
        Self {
            inner: Rc::new(SelectInner {
                disclosure: DisclosureState::new(props.disclosure),
                ids: IdRegistry::new(id),
                list: RefCell::new(ListState::new(Collection::new(), SelectionMode::Single)),
                focus_strategy: Cell::new(None),
                force_mount: props.force_mount,
                close_on_select: props.close_on_select,
                on_value_change: props.on_value_change,
            }),
        }
    }

    /// Register an option into the listbox.
    pub fn register_option(
        &self,
        item: ItemDescriptor<E>,
    ) -> Result<ItemRegistration, CollectionError> {
        let options = self.inner.list.borrow().collection().clone();
        options.register_item(item)
    }
}

impl<E> SelectContext<E> {
    /// Whether the listbox is open.
    pub fn is_open(&self) -> bool {
        self.inner.disclosure.is_open()
    }

    /// Whether the listbox content is present (open or force-mounted).
    pub fn is_present(&self) -> bool {
        self.inner.force_mount || self.is_open()
    }

    /// Focus strategy requested by the last `open`.
    pub fn focus_strategy(&self) -> Option<FocusStrategy> {
        self.inner.focus_strategy.get()
    }

    /// Open the listbox, remembering where focus should land.
    pub fn open(&self, focus_strategy: Option<FocusStrategy>) {
        tracing::debug!(id = self.inner.ids.root_id(), ?focus_strategy, "select open");
        self.inner.focus_strategy.set(focus_strategy);
        self.inner.disclosure.open();
    }

    /// Close the listbox.
    pub fn close(&self) {
        tracing::debug!(id = self.inner.ids.root_id(), "select close");
        self.inner.disclosure.close();
    }

    /// Close if open, otherwise open with `focus_strategy`.
    pub fn toggle(&self, focus_strategy: Option<FocusStrategy>) {
        if self.is_open() {
            self.close();
        } else {
            self.open(focus_strategy);
        }
    }

    /// Apply an open change reported by the overlay host.
    pub fn set_open(&self, open: bool) {
        self.inner.disclosure.set_is_open(open);
    }

    /// Focus the option chosen by the stored strategy (the selected one by default).
    pub fn initial_focus(&self) -> Option<String> {
        let strategy = self
            .inner
            .focus_strategy
            .get()
            .unwrap_or(FocusStrategy::Selected);
        self.inner.list.borrow_mut().focus_initial(strategy)
    }

    /// Choose `key` as the value. Returns whether the value changed.
    ///
    /// Notifies `on_value_change` and, if configured, closes the listbox.
    pub fn select(&self, key: &str) -> bool {
        let changed = self.inner.list.borrow_mut().select(key);
        if changed {
            tracing::debug!(id = self.inner.ids.root_id(), key, "select value change");
            if let Some(handler) = &self.inner.on_value_change {
                handler(Some(key));
            }
        }
        if self.inner.close_on_select && self.is_open() {
            self.close();
        }
        changed
    }

    /// Clear the value.
    pub fn clear(&self) {
        let had_value = !self.inner.list.borrow().selected_keys().is_empty();
        self.inner.list.borrow_mut().clear_selection();
        if had_value && let Some(handler) = &self.inner.on_value_change {
            handler(None);
        }
    }

    /// The selected key, if its option is still live.
    pub fn value(&self) -> Option<String> {
        self.inner.list.borrow().first_selected_key()
    }

    /// Read access to the option list.
    ///
    /// Release the guard before calling back into this context.
    pub fn list_state(&self) -> Ref<'_, ListState<E>> {
        self.inner.list.borrow()
    }

    /// Write access to the option list, for keyboard navigation and typeahead.
    pub fn list_state_mut(&self) -> RefMut<'_, ListState<E>> {
        self.inner.list.borrow_mut()
    }

    /// Derive `"{id}-{part}"`.
    pub fn generate_id(&self, part: &str) -> String {
        self.inner.ids.generate_id(part)
    }

    /// Id published by the trigger.
    pub fn trigger_id(&self) -> Option<String> {
        self.inner.ids.get(IdRole::Trigger)
    }

    /// Id published by the listbox.
    pub fn content_id(&self) -> Option<String> {
        self.inner.ids.get(IdRole::Content)
    }

    /// Id published by the label.
    pub fn label_id(&self) -> Option<String> {
        self.inner.ids.get(IdRole::Label)
    }

    /// Id published by the description.
    pub fn description_id(&self) -> Option<String> {
        self.inner.ids.get(IdRole::Description)
    }

    /// Publish the trigger id.
    pub fn register_trigger_id(&self, id: impl Into<String>) -> IdRegistration {
        self.inner.ids.register(IdRole::Trigger, id)
    }

    /// Publish the listbox id.
    pub fn register_content_id(&self, id: impl Into<String>) -> IdRegistration {
        self.inner.ids.register(IdRole::Content, id)
    }

    /// Publish the label id.
    pub fn register_label_id(&self, id: impl Into<String>) -> IdRegistration {
        self.inner.ids.register(IdRole::Label, id)
    }

    /// Publish the description id.
    pub fn register_description_id(&self, id: impl Into<String>) -> IdRegistration {
        self.inner.ids.register(IdRole::Description, id)
    }
}

/// Gate for portalling the select listbox into the document.
#[derive(Copy, Clone, Debug, Default)]
pub struct SelectPortal;

impl SelectPortal {
    /// Whether the listbox should be rendered into the portal.
    pub fn should_render<E>(select: &SelectContext<E>) -> bool {
        select.is_present()
    }
}

/// Look up the enclosing select.
pub fn use_select_context<E>(
    provider: &Provider<SelectContext<E>>,
) -> Result<SelectContext<E>, ContextError> {
    provider.require("use_select_context", "Select")
}
