// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu construction options and their resolved, immutable form.

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use understory_collection::FocusStrategy;
use understory_overlay::disclosure::DisclosureOptions;
use understory_overlay::host::Placement;

bitflags::bitflags! {
    /// Resolved behavior switches of one menu level.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MenuFlags: u8 {
        /// Block interaction with the rest of the document while open.
        const MODAL          = 0b0000_0001;
        /// Block document scrolling while open.
        const PREVENT_SCROLL = 0b0000_0010;
        /// Keep focus inside the content while open.
        const TRAP_FOCUS     = 0b0000_0100;
        /// Close on the Escape key.
        const CLOSE_ON_ESC   = 0b0000_1000;
        /// Move focus into the content when it opens.
        const AUTO_FOCUS     = 0b0001_0000;
        /// Return focus to the trigger on close.
        const RESTORE_FOCUS  = 0b0010_0000;
    }
}

impl Default for MenuFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// Where focus should go when a menu's content mounts.
///
/// Set by [`open`](crate::MenuContext::open) and
/// [`toggle`](crate::MenuContext::toggle).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AutoFocus {
    /// Focus the item chosen by the strategy.
    Strategy(FocusStrategy),
    /// Focus the content itself.
    #[default]
    Default,
    /// Leave focus where it is.
    Off,
}

impl From<FocusStrategy> for AutoFocus {
    fn from(strategy: FocusStrategy) -> Self {
        Self::Strategy(strategy)
    }
}

impl From<bool> for AutoFocus {
    fn from(focus: bool) -> Self {
        if focus { Self::Default } else { Self::Off }
    }
}

impl From<Option<FocusStrategy>> for AutoFocus {
    fn from(strategy: Option<FocusStrategy>) -> Self {
        strategy.map_or(Self::Off, Self::Strategy)
    }
}

/// Construction options for a [`MenuContext`](crate::MenuContext).
///
/// `is_modal`, `prevent_scroll`, and `trap_focus` fall back to the parent
/// menu's resolved value, and to `true` at the root.
pub struct MenuProps {
    /// Root id. A fresh `"menu-{n}"` id is generated when absent.
    pub id: Option<String>,
    /// Open state options.
    pub disclosure: DisclosureOptions,
    /// Modal override.
    pub is_modal: Option<bool>,
    /// Scroll-lock override.
    pub prevent_scroll: Option<bool>,
    /// Focus-trap override.
    pub trap_focus: Option<bool>,
    /// Preferred placement of the content.
    pub placement: Placement,
    /// Close on the Escape key.
    pub close_on_esc: bool,
    /// Move focus into the content when it opens.
    pub auto_focus: bool,
    /// Return focus to the trigger on close.
    pub restore_focus: bool,
    /// Called with the key of an activated item.
    pub on_action: Option<Box<dyn Fn(&str)>>,
}

impl Default for MenuProps {
    fn default() -> Self {
        Self {
            id: None,
            disclosure: DisclosureOptions::default(),
            is_modal: None,
            prevent_scroll: None,
            trap_focus: None,
            placement: Placement::BottomStart,
            close_on_esc: true,
            auto_focus: true,
            restore_focus: true,
            on_action: None,
        }
    }
}

impl fmt::Debug for MenuProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuProps")
            .field("id", &self.id)
            .field("disclosure", &self.disclosure)
            .field("is_modal", &self.is_modal)
            .field("prevent_scroll", &self.prevent_scroll)
            .field("trap_focus", &self.trap_focus)
            .field("placement", &self.placement)
            .field("close_on_esc", &self.close_on_esc)
            .field("auto_focus", &self.auto_focus)
            .field("restore_focus", &self.restore_focus)
            .field("on_action", &self.on_action.is_some())
            .finish()
    }
}

impl MenuProps {
    /// Set the action handler.
    #[must_use]
    pub fn with_on_action(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_action = Some(Box::new(handler));
        self
    }
}

/// Immutable behavior of one menu level, resolved once at construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct MenuConfig {
    /// Behavior switches.
    pub flags: MenuFlags,
    /// Preferred placement of the content.
    pub placement: Placement,
}

impl MenuConfig {
    /// Resolve `props` against the parent level's configuration.
    ///
    /// The result is a snapshot: later changes elsewhere do not affect it.
    pub fn resolve(props: &MenuProps, parent: Option<&Self>) -> Self {
        let inherited = |flag: MenuFlags, own: Option<bool>| {
            own.unwrap_or_else(|| parent.is_none_or(|p| p.flags.contains(flag)))
        };
        let mut flags = MenuFlags::empty();
        flags.set(MenuFlags::MODAL, inherited(MenuFlags::MODAL, props.is_modal));
        flags.set(
            MenuFlags::PREVENT_SCROLL,
            inherited(MenuFlags::PREVENT_SCROLL, props.prevent_scroll),
        );
        flags.set(
            MenuFlags::TRAP_FOCUS,
            inherited(MenuFlags::TRAP_FOCUS, props.trap_focus),
        );
        flags.set(MenuFlags::CLOSE_ON_ESC, props.close_on_esc);
        flags.set(MenuFlags::AUTO_FOCUS, props.auto_focus);
        flags.set(MenuFlags::RESTORE_FOCUS, props.restore_focus);
        Self {
            flags,
            placement: props.placement,
        }
    }

    /// Whether the menu is modal.
    pub fn is_modal(&self) -> bool {
        self.flags.contains(MenuFlags::MODAL)
    }

    /// Whether document scrolling is blocked while open.
    pub fn prevent_scroll(&self) -> bool {
        self.flags.contains(MenuFlags::PREVENT_SCROLL)
    }

    /// Whether focus is trapped inside the content.
    pub fn trap_focus(&self) -> bool {
        self.flags.contains(MenuFlags::TRAP_FOCUS)
    }
}
