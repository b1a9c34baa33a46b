// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu node context.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::string::String;
use core::cell::{Cell, Ref, RefCell, RefMut};
use core::fmt;

use understory_collection::{
    Collection, CollectionError, ItemDescriptor, ItemRegistration, ListState, SelectionMode,
};
use understory_overlay::context::{ContextError, Provider};
use understory_overlay::disclosure::DisclosureState;
use understory_overlay::host::{AnchoredOverlayProps, OverlayHost};
use understory_overlay::ids::{IdRegistration, IdRegistry, IdRole};

use crate::config::{AutoFocus, MenuConfig, MenuFlags, MenuProps};

/// Errors from menu wiring.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    /// A root menu has no parent collection to register its trigger into.
    #[error("a root menu has no parent collection to register into")]
    NoParentCollection,
    /// The parent collection rejected the item.
    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// Where focus lands when a menu's content mounts.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// The content element itself.
    Content,
    /// The item with this key.
    Item(String),
    /// Focus stays where it is.
    None,
}

struct MenuNode<E> {
    ids: IdRegistry,
    parent: Option<Weak<Self>>,
    config: MenuConfig,
    disclosure: DisclosureState,
    items: Collection<E>,
    list: RefCell<ListState<E>>,
    auto_focus: Cell<AutoFocus>,
    trigger_ref: RefCell<Option<E>>,
    content_ref: RefCell<Option<E>>,
    focus_pending: Cell<bool>,
    on_action: Option<Box<dyn Fn(&str)>>,
    host: OverlayHost<E>,
    /// Key and entry for this menu in the parent's collection, released with the node.
    parent_registration: RefCell<Option<(String, ItemRegistration)>>,
}

/// Shared state of one menu level.
///
/// A menu level is the root menu or a submenu nested inside another level's
/// content. Each level owns its open state, its item collection, and its id
/// slots, and holds a non-owning link to its parent level.
///
/// Clones share the same level. Dropping the last clone unmounts the level,
/// which also removes the entry it registered into its parent's collection.
pub struct MenuContext<E> {
    node: Rc<MenuNode<E>>,
}

impl<E> Clone for MenuContext<E> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<E> fmt::Debug for MenuContext<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuContext")
            .field("id", &self.node.ids.root_id())
            .field("is_open", &self.is_open())
            .field("config", &self.node.config)
            .field("has_parent", &self.node.parent.is_some())
            .field("items", &self.node.items)
            .finish_non_exhaustive()
    }
}

impl<E: 'static> MenuContext<E> {
    /// Create a menu level nested under `parent`, or a root when `parent` is `None`.
    ///
    /// Inherited settings are resolved from the parent once, here.
    pub fn new(props: MenuProps, parent: Option<&Self>, host: &OverlayHost<E>) -> Self {
        let config = MenuConfig::resolve(&props, parent.map(|p| &p.node.config));
        let id = props.id.unwrap_or_else(|| host.fresh_id("menu"));
        tracing::trace!(%id, nested = parent.is_some(), "created menu");
        let items = Collection::new();
        Self {
            node: Rc::new(MenuNode {
                ids: IdRegistry::new(id),
                parent: parent.map(|p| Rc::downgrade(&p.node)),
                config,
                disclosure: DisclosureState::new(props.disclosure),
                list: RefCell::new(ListState::new(items.clone(), SelectionMode::None)),
                items,
                auto_focus: Cell::new(AutoFocus::Default),
                trigger_ref: RefCell::new(None),
                content_ref: RefCell::new(None),
                focus_pending: Cell::new(false),
                on_action: props.on_action,
                host: host.clone(),
                parent_registration: RefCell::new(None),
            }),
        }
    }

    /// Create a menu level nested under the innermost menu in `provider`, if any.
    ///
    /// The caller then provides the new level while mounting its children.
    pub fn from_provider(
        props: MenuProps,
        provider: &Provider<Self>,
        host: &OverlayHost<E>,
    ) -> Self {
        let parent = provider.current();
        Self::new(props, parent.as_ref(), host)
    }

    /// Register an item of this level.
    pub fn register_item(
        &self,
        item: ItemDescriptor<E>,
    ) -> Result<ItemRegistration, CollectionError> {
        self.node.items.register_item(item)
    }

    /// Register this level's trigger as an item of the parent level.
    ///
    /// The entry is replaced on a repeated call and removed when this level is
    /// dropped. If the parent rejects the new item, the previous entry is kept.
    pub fn register_item_to_parent_collection(
        &self,
        item: ItemDescriptor<E>,
    ) -> Result<(), MenuError> {
        let parent = self
            .parent_menu_context()
            .ok_or(MenuError::NoParentCollection)?;
        let same_key = self
            .node
            .parent_registration
            .borrow()
            .as_ref()
            .is_some_and(|(key, _)| *key == item.key);
        if same_key {
            drop(self.node.parent_registration.borrow_mut().take());
        }
        // On failure the previous entry stays registered.
        let key = item.key.clone();
        let registration = parent.register_item(item)?;
        let previous = self
            .node
            .parent_registration
            .borrow_mut()
            .replace((key, registration));
        drop(previous);
        Ok(())
    }
}

impl<E> MenuContext<E> {
    /// Whether this level is open.
    pub fn is_open(&self) -> bool {
        self.node.disclosure.is_open()
    }

    /// Whether this level is modal.
    pub fn is_modal(&self) -> bool {
        self.node.config.is_modal()
    }

    /// Whether document scrolling is blocked while this level is open.
    pub fn prevent_scroll(&self) -> bool {
        self.node.config.prevent_scroll()
    }

    /// Whether focus is trapped inside this level's content.
    pub fn trap_focus(&self) -> bool {
        self.node.config.trap_focus()
    }

    /// The focus hint recorded by the last `open`.
    pub fn auto_focus(&self) -> AutoFocus {
        self.node.auto_focus.get()
    }

    /// The resolved configuration.
    pub fn config(&self) -> MenuConfig {
        self.node.config
    }

    /// The items of this level.
    pub fn collection(&self) -> &Collection<E> {
        &self.node.items
    }

    /// Read access to this level's list state.
    ///
    /// Release the guard before calling back into this context.
    pub fn list_state(&self) -> Ref<'_, ListState<E>> {
        self.node.list.borrow()
    }

    /// Write access to this level's list state, for keyboard navigation and typeahead.
    pub fn list_state_mut(&self) -> RefMut<'_, ListState<E>> {
        self.node.list.borrow_mut()
    }

    /// The enclosing menu level, if this is a submenu that is still mounted.
    pub fn parent_menu_context(&self) -> Option<Self> {
        let parent = self.node.parent.as_ref()?.upgrade()?;
        Some(Self { node: parent })
    }

    /// Id published by the trigger.
    pub fn trigger_id(&self) -> Option<String> {
        self.node.ids.get(IdRole::Trigger)
    }

    /// Id published by the content.
    pub fn content_id(&self) -> Option<String> {
        self.node.ids.get(IdRole::Content)
    }

    /// Derive `"{id}-{part}"`.
    pub fn generate_id(&self, part: &str) -> String {
        self.node.ids.generate_id(part)
    }

    /// Publish the trigger id.
    pub fn register_trigger_id(&self, id: impl Into<String>) -> IdRegistration {
        self.node.ids.register(IdRole::Trigger, id)
    }

    /// Publish the content id.
    pub fn register_content_id(&self, id: impl Into<String>) -> IdRegistration {
        self.node.ids.register(IdRole::Content, id)
    }

    /// Record the trigger element, the anchor of the content.
    pub fn set_trigger_ref(&self, element: Option<E>) {
        *self.node.trigger_ref.borrow_mut() = element;
    }

    /// Open this level, recording where focus should land once content mounts.
    pub fn open(&self, auto_focus: impl Into<AutoFocus>) {
        let auto_focus = auto_focus.into();
        tracing::debug!(id = self.node.ids.root_id(), ?auto_focus, "menu open");
        self.node.auto_focus.set(auto_focus);
        self.node.disclosure.open();
    }

    /// Close this level and, if `deep`, every ancestor after it.
    ///
    /// Closing is complete for the whole chain, child to root, when this returns.
    pub fn close(&self, deep: bool) {
        tracing::debug!(id = self.node.ids.root_id(), deep, "menu close");
        self.node.focus_pending.set(false);
        self.node.disclosure.close();
        if deep && let Some(parent) = self.parent_menu_context() {
            parent.close(true);
        }
    }

    /// Close this level if open, otherwise open it.
    pub fn toggle(&self, auto_focus: impl Into<AutoFocus>) {
        if self.is_open() {
            self.close(false);
        } else {
            self.open(auto_focus);
        }
    }

    /// Apply an open change reported by the overlay host.
    pub fn set_open(&self, open: bool) {
        self.node.disclosure.set_is_open(open);
    }

    /// Close this level in response to Escape, if configured. Returns whether it closed.
    pub fn escape(&self) -> bool {
        if self.node.config.flags.contains(MenuFlags::CLOSE_ON_ESC) && self.is_open() {
            self.close(false);
            return true;
        }
        false
    }

    /// Forward an item action to the handler. Closes nothing.
    pub fn on_action(&self, key: &str) {
        tracing::trace!(id = self.node.ids.root_id(), key, "menu action");
        if let Some(handler) = &self.node.on_action {
            handler(key);
        }
    }

    /// Activate an item: report the action, then close the whole chain.
    pub fn activate(&self, key: &str) {
        self.on_action(key);
        self.close(true);
    }

    /// Resolve the recorded focus hint into a concrete target.
    ///
    /// A strategy also moves the list's focused key to the chosen item. A
    /// strategy that finds no enabled item falls back to the content.
    pub fn initial_focus(&self) -> FocusTarget {
        if !self.node.config.flags.contains(MenuFlags::AUTO_FOCUS) {
            return FocusTarget::None;
        }
        match self.node.auto_focus.get() {
            AutoFocus::Off => FocusTarget::None,
            AutoFocus::Default => FocusTarget::Content,
            AutoFocus::Strategy(strategy) => {
                match self.node.list.borrow_mut().focus_initial(strategy) {
                    Some(key) => FocusTarget::Item(key),
                    None => FocusTarget::Content,
                }
            }
        }
    }
}

impl<E: Clone> MenuContext<E> {
    /// Record the content element, flushing a deferred [`focus_content`](Self::focus_content).
    pub fn set_content_ref(&self, element: Option<E>) {
        let mounted = element.is_some();
        *self.node.content_ref.borrow_mut() = element;
        if mounted && self.node.focus_pending.replace(false) {
            tracing::trace!(id = self.node.ids.root_id(), "flushing deferred content focus");
            self.focus_content();
        }
    }

    /// Move focus to the content without scrolling.
    ///
    /// If the content is not mounted yet, focus moves when it is.
    pub fn focus_content(&self) {
        let content = self.node.content_ref.borrow().clone();
        match content {
            Some(content) => self.node.host.focus.focus_safely(&content),
            None => {
                tracing::trace!(id = self.node.ids.root_id(), "deferring content focus");
                self.node.focus_pending.set(true);
            }
        }
    }

    /// What this level asks of the anchored-overlay host.
    pub fn anchored_overlay_props(&self) -> AnchoredOverlayProps<E> {
        let flags = self.node.config.flags;
        AnchoredOverlayProps {
            id: String::from(self.node.ids.root_id()),
            is_open: self.is_open(),
            anchor: self.node.trigger_ref.borrow().clone(),
            placement: self.node.config.placement,
            close_on_interact_outside: true,
            close_on_hover_outside: self.node.parent.is_some(),
            open_delay: 0,
            close_delay: 0,
            close_on_esc: flags.contains(MenuFlags::CLOSE_ON_ESC),
            is_modal: flags.contains(MenuFlags::MODAL),
            prevent_scroll: flags.contains(MenuFlags::PREVENT_SCROLL),
            trap_focus: flags.contains(MenuFlags::TRAP_FOCUS),
            restore_focus: flags.contains(MenuFlags::RESTORE_FOCUS),
        }
    }
}

/// Look up the innermost enclosing menu.
pub fn use_menu_context<E>(
    provider: &Provider<MenuContext<E>>,
) -> Result<MenuContext<E>, ContextError> {
    provider.require("use_menu_context", "Menu")
}

/// Look up the innermost enclosing menu, if there is one.
pub fn use_optional_menu_context<E>(
    provider: &Provider<MenuContext<E>>,
) -> Option<MenuContext<E>> {
    provider.current()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use alloc::{format, vec};
    use understory_collection::{FocusStrategy, Navigation};
    use understory_overlay::disclosure::DisclosureOptions;
    use understory_overlay::host::Placement;

    type Log = Rc<RefCell<Vec<String>>>;

    fn host() -> OverlayHost<u32> {
        OverlayHost::new(|_: &u32| {})
    }

    fn logged(name: &'static str, open: bool, log: &Log) -> MenuProps {
        let sink = log.clone();
        MenuProps {
            id: Some(String::from(name)),
            disclosure: DisclosureOptions::uncontrolled(open)
                .with_on_open_change(move |open| sink.borrow_mut().push(format!("{name}:{open}"))),
            ..MenuProps::default()
        }
    }

    fn chain(log: &Log) -> (MenuContext<u32>, MenuContext<u32>, MenuContext<u32>) {
        let host = host();
        let root = MenuContext::new(logged("root", true, log), None, &host);
        let a = MenuContext::new(logged("a", true, log), Some(&root), &host);
        let b = MenuContext::new(logged("b", true, log), Some(&a), &host);
        (root, a, b)
    }

    #[test]
    fn deep_close_walks_child_to_root() {
        let log = Log::default();
        let (root, a, b) = chain(&log);
        b.close(true);
        assert!(!root.is_open() && !a.is_open() && !b.is_open());
        assert_eq!(*log.borrow(), ["b:false", "a:false", "root:false"]);
    }

    #[test]
    fn shallow_close_only_dismisses_own_level() {
        let log = Log::default();
        let (root, a, b) = chain(&log);
        b.close(false);
        assert!(root.is_open() && a.is_open());
        assert!(!b.is_open());
        assert_eq!(*log.borrow(), ["b:false"]);
    }

    #[test]
    fn deep_close_of_closed_chain_still_notifies() {
        let log = Log::default();
        let host = host();
        let root = MenuContext::new(logged("root", false, &log), None, &host);
        let a = MenuContext::new(logged("a", false, &log), Some(&root), &host);
        a.close(true);
        assert_eq!(*log.borrow(), ["a:false", "root:false"]);
    }

    #[test]
    fn deep_close_stops_at_unmounted_parent() {
        let log = Log::default();
        let (root, a, b) = chain(&log);
        drop(a);
        b.close(true);
        assert!(root.is_open());
        assert!(b.parent_menu_context().is_none());
    }

    #[test]
    fn activate_reports_then_closes_chain() {
        let log = Log::default();
        let host = host();
        let root = MenuContext::new(logged("root", true, &log), None, &host);
        let sink = log.clone();
        let sub = MenuContext::new(
            logged("sub", true, &log)
                .with_on_action(move |key| sink.borrow_mut().push(format!("action:{key}"))),
            Some(&root),
            &host,
        );
        sub.on_action("copy");
        assert!(sub.is_open());
        sub.activate("paste");
        assert_eq!(
            *log.borrow(),
            ["action:copy", "action:paste", "sub:false", "root:false"]
        );
    }

    #[test]
    fn toggle_opens_with_hint_and_closes_shallow() {
        let log = Log::default();
        let (root, _a, b) = chain(&log);
        b.close(false);
        b.toggle(FocusStrategy::Last);
        assert!(b.is_open());
        assert_eq!(b.auto_focus(), AutoFocus::Strategy(FocusStrategy::Last));
        b.toggle(None::<FocusStrategy>);
        assert!(!b.is_open());
        assert!(root.is_open());
    }

    #[test]
    fn submenu_trigger_lives_in_parent_collection_until_dropped() {
        let host = host();
        let root = MenuContext::new(MenuProps::default(), None, &host);
        let _open = root.register_item(ItemDescriptor::new("open", 0, 1)).unwrap();
        let _quit = root.register_item(ItemDescriptor::new("quit", 2, 3)).unwrap();

        let recent = MenuContext::new(MenuProps::default(), Some(&root), &host);
        recent
            .register_item_to_parent_collection(ItemDescriptor::new("recent", 1, 2))
            .unwrap();
        assert_eq!(root.collection().keys(), ["open", "recent", "quit"]);

        // Re-registering replaces the entry instead of colliding with it.
        recent
            .register_item_to_parent_collection(ItemDescriptor::new("recent", 1, 2))
            .unwrap();
        assert_eq!(root.collection().len(), 3);

        root.list_state_mut().navigate(Navigation::First);
        assert_eq!(
            root.list_state_mut().navigate(Navigation::Next).as_deref(),
            Some("recent")
        );

        drop(recent);
        assert_eq!(root.collection().keys(), ["open", "quit"]);
        assert_eq!(root.list_state().focused_key(), None);
    }

    #[test]
    fn root_cannot_register_into_parent() {
        let root = MenuContext::new(MenuProps::default(), None, &host());
        assert_eq!(
            root.register_item_to_parent_collection(ItemDescriptor::new("x", 0, 0)),
            Err(MenuError::NoParentCollection)
        );
    }

    #[test]
    fn duplicate_trigger_key_in_parent_is_reported() {
        let host = host();
        let root = MenuContext::new(MenuProps::default(), None, &host);
        let _x = root.register_item(ItemDescriptor::new("x", 0, 0)).unwrap();
        let sub = MenuContext::new(MenuProps::default(), Some(&root), &host);
        assert!(matches!(
            sub.register_item_to_parent_collection(ItemDescriptor::new("x", 1, 1)),
            Err(MenuError::Collection(CollectionError::DuplicateKey { .. }))
        ));
    }

    #[test]
    fn rejected_re_registration_keeps_previous_parent_entry() {
        let host = host();
        let root = MenuContext::new(MenuProps::default(), None, &host);
        let _x = root.register_item(ItemDescriptor::new("x", 0, 0)).unwrap();
        let sub = MenuContext::new(MenuProps::default(), Some(&root), &host);
        sub.register_item_to_parent_collection(ItemDescriptor::new("recent", 1, 1))
            .unwrap();

        assert!(matches!(
            sub.register_item_to_parent_collection(ItemDescriptor::new("x", 2, 2)),
            Err(MenuError::Collection(CollectionError::DuplicateKey { .. }))
        ));
        assert_eq!(root.collection().keys(), ["x", "recent"]);

        // A different key swaps the entry once it is accepted.
        sub.register_item_to_parent_collection(ItemDescriptor::new("history", 3, 3))
            .unwrap();
        assert_eq!(root.collection().keys(), ["x", "history"]);
        drop(sub);
        assert_eq!(root.collection().keys(), ["x"]);
    }

    #[test]
    fn inherited_config_is_a_snapshot() {
        let host = host();
        let root = MenuContext::new(
            MenuProps {
                is_modal: Some(false),
                ..MenuProps::default()
            },
            None,
            &host,
        );
        let sub = MenuContext::new(MenuProps::default(), Some(&root), &host);
        assert!(!sub.is_modal());
        assert!(sub.prevent_scroll() && sub.trap_focus());
        // The parent going away does not change what was resolved.
        drop(root);
        assert!(!sub.is_modal());
    }

    #[test]
    fn focus_content_defers_until_mounted() {
        let focused = Rc::new(RefCell::new(Vec::new()));
        let sink = focused.clone();
        let host = OverlayHost::new(move |el: &u32| sink.borrow_mut().push(*el));
        let menu = MenuContext::new(MenuProps::default(), None, &host);

        menu.focus_content();
        assert!(focused.borrow().is_empty());
        menu.set_content_ref(Some(42));
        assert_eq!(*focused.borrow(), [42]);
        // Flushed once only.
        menu.set_content_ref(Some(43));
        assert_eq!(*focused.borrow(), [42]);
        menu.focus_content();
        assert_eq!(*focused.borrow(), [42, 43]);
    }

    #[test]
    fn close_cancels_deferred_focus() {
        let focused = Rc::new(RefCell::new(Vec::new()));
        let sink = focused.clone();
        let host = OverlayHost::new(move |el: &u32| sink.borrow_mut().push(*el));
        let menu = MenuContext::new(MenuProps::default(), None, &host);
        menu.open(true);
        menu.focus_content();
        menu.close(false);
        menu.set_content_ref(Some(1));
        assert!(focused.borrow().is_empty());
    }

    #[test]
    fn initial_focus_follows_hint() {
        let host = host();
        let menu = MenuContext::new(MenuProps::default(), None, &host);
        let _a = menu
            .register_item(ItemDescriptor::new("a", 0, 1).with_disabled(true))
            .unwrap();
        let _b = menu.register_item(ItemDescriptor::new("b", 1, 2)).unwrap();
        let _c = menu.register_item(ItemDescriptor::new("c", 2, 3)).unwrap();

        assert_eq!(menu.auto_focus(), AutoFocus::Default);
        assert_eq!(menu.initial_focus(), FocusTarget::Content);
        menu.open(FocusStrategy::First);
        assert_eq!(menu.initial_focus(), FocusTarget::Item("b".into()));
        menu.toggle(true);
        menu.toggle(FocusStrategy::Last);
        assert_eq!(menu.initial_focus(), FocusTarget::Item("c".into()));
        assert_eq!(menu.list_state().focused_key(), Some("c"));
        menu.close(false);
        menu.open(None::<FocusStrategy>);
        assert_eq!(menu.initial_focus(), FocusTarget::None);

        let quiet = MenuContext::new(
            MenuProps {
                auto_focus: false,
                ..MenuProps::default()
            },
            None,
            &host,
        );
        quiet.open(FocusStrategy::First);
        assert_eq!(quiet.initial_focus(), FocusTarget::None);
    }

    #[test]
    fn escape_respects_config() {
        let host = host();
        let menu = MenuContext::new(MenuProps::default(), None, &host);
        menu.open(true);
        assert!(menu.escape());
        assert!(!menu.escape());
        let sticky = MenuContext::new(
            MenuProps {
                close_on_esc: false,
                ..MenuProps::default()
            },
            None,
            &host,
        );
        sticky.open(true);
        assert!(!sticky.escape());
        assert!(sticky.is_open());
    }

    #[test]
    fn ids_and_defaults() {
        let host = host();
        let menu = MenuContext::new(
            MenuProps {
                id: Some("menu-7".into()),
                ..MenuProps::default()
            },
            None,
            &host,
        );
        assert_eq!(menu.generate_id("trigger"), "menu-7-trigger");
        let trigger = menu.register_trigger_id(menu.generate_id("trigger"));
        let _content = menu.register_content_id("custom-content");
        assert_eq!(menu.trigger_id().as_deref(), Some("menu-7-trigger"));
        assert_eq!(menu.content_id().as_deref(), Some("custom-content"));
        trigger.unregister();
        assert_eq!(menu.trigger_id(), None);

        let anonymous = MenuContext::new(MenuProps::default(), None, &host);
        assert_eq!(anonymous.generate_id("content"), "menu-0-content");
    }

    #[test]
    fn anchored_props_reflect_nesting() {
        let host = host();
        let root = MenuContext::new(
            MenuProps {
                id: Some("root".into()),
                ..MenuProps::default()
            },
            None,
            &host,
        );
        root.set_trigger_ref(Some(9));
        let sub = MenuContext::new(
            MenuProps {
                placement: Placement::RightStart,
                restore_focus: false,
                ..MenuProps::default()
            },
            Some(&root),
            &host,
        );

        let props = root.anchored_overlay_props();
        assert_eq!(props.id, "root");
        assert_eq!(props.anchor, Some(9));
        assert_eq!(props.placement, Placement::BottomStart);
        assert!(props.close_on_interact_outside);
        assert!(!props.close_on_hover_outside);
        assert_eq!((props.open_delay, props.close_delay), (0, 0));

        let props = sub.anchored_overlay_props();
        assert!(props.close_on_hover_outside);
        assert_eq!(props.anchor, None);
        assert_eq!(props.placement, Placement::RightStart);
        assert!(!props.restore_focus);
    }

    #[test]
    fn host_open_changes_apply_to_disclosure() {
        let log = Log::default();
        let host = host();
        let menu = MenuContext::new(logged("m", false, &log), None, &host);
        menu.set_open(true);
        assert!(menu.is_open());
        menu.set_open(false);
        assert_eq!(*log.borrow(), vec!["m:true", "m:false"]);
    }

    #[test]
    fn provider_nests_levels() {
        let host = host();
        let provider = Provider::new();
        assert!(use_menu_context(&provider).is_err());
        assert!(use_optional_menu_context(&provider).is_none());

        let root = MenuContext::from_provider(MenuProps::default(), &provider, &host);
        provider.provide(root.clone(), || {
            let sub = MenuContext::from_provider(MenuProps::default(), &provider, &host);
            let parent = sub.parent_menu_context().unwrap();
            assert_eq!(parent.generate_id("x"), root.generate_id("x"));
            provider.provide(sub.clone(), || {
                let found = use_menu_context(&provider).unwrap();
                assert_eq!(found.generate_id("x"), sub.generate_id("x"));
            });
        });
        assert!(root.parent_menu_context().is_none());
    }
}
