// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List state: focused key, keyboard navigation, selection, and typeahead over a [`Collection`].
//!
//! [`ListState`] never owns items. It reads the live [`Collection`] it wraps
//! each time it navigates, so a focused or selected key whose item has since
//! been released is simply treated as absent.
//!
//! ```
//! use understory_collection::{Collection, ItemDescriptor, ListState, Navigation, SelectionMode};
//!
//! let items: Collection<()> = Collection::new();
//! let _a = items.register_item(ItemDescriptor::new("a", 0, ())).unwrap();
//! let _b = items
//!     .register_item(ItemDescriptor::new("b", 1, ()).with_disabled(true))
//!     .unwrap();
//! let _c = items.register_item(ItemDescriptor::new("c", 2, ())).unwrap();
//!
//! let mut list = ListState::new(items, SelectionMode::None);
//! assert_eq!(list.navigate(Navigation::First).as_deref(), Some("a"));
//! // Disabled items are skipped.
//! assert_eq!(list.navigate(Navigation::Next).as_deref(), Some("c"));
//! // Wrapping is on by default.
//! assert_eq!(list.navigate(Navigation::Next).as_deref(), Some("a"));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashSet;

use crate::collection::Collection;
use crate::typeahead::TypeSelect;
use crate::types::FocusStrategy;

/// Keyboard navigation intent within one list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Jump to the first enabled item (for example, Home).
    First,
    /// Jump to the last enabled item (for example, End).
    Last,
    /// Move to the next enabled item (for example, `ArrowDown`).
    Next,
    /// Move to the previous enabled item (for example, `ArrowUp`).
    Prev,
}

/// How many items a list lets the user select.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// Selection requests are ignored (menus).
    #[default]
    None,
    /// At most one selected key (selects).
    Single,
    /// Any number of selected keys.
    Multiple,
}

/// Focus, navigation, and selection state layered over a live [`Collection`].
#[derive(Debug)]
pub struct ListState<E> {
    collection: Collection<E>,
    focused_key: Option<String>,
    selection_mode: SelectionMode,
    selected: HashSet<String>,
    /// Whether `Next`/`Prev` wrap around at the ends.
    pub focus_wrap: bool,
    type_select: TypeSelect,
}

impl<E> ListState<E> {
    /// Create a list state over `collection`.
    pub fn new(collection: Collection<E>, selection_mode: SelectionMode) -> Self {
        Self {
            collection,
            focused_key: None,
            selection_mode,
            selected: HashSet::new(),
            focus_wrap: true,
            type_select: TypeSelect::new(),
        }
    }

    /// The collection this list navigates.
    pub fn collection(&self) -> &Collection<E> {
        &self.collection
    }

    /// The selection mode chosen at construction.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// The focused key, if its item is still live.
    pub fn focused_key(&self) -> Option<&str> {
        self.focused_key
            .as_deref()
            .filter(|k| self.collection.contains_key(k))
    }

    /// Focus `key`. Returns `false` (and leaves focus unchanged) if no enabled item has that key.
    pub fn set_focused_key(&mut self, key: &str) -> bool {
        if !self.is_enabled(key) {
            return false;
        }
        self.focused_key = Some(String::from(key));
        true
    }

    /// Clear the focused key.
    pub fn clear_focus(&mut self) {
        self.focused_key = None;
    }

    /// Apply a navigation intent and return the newly focused key.
    ///
    /// From no focus, `Next` behaves like `First` and `Prev` like `Last`.
    /// Without wrapping, moving past either end keeps the current focus.
    pub fn navigate(&mut self, direction: Navigation) -> Option<String> {
        // (key, enabled) in document order, gathered in one pass.
        let all: Vec<(String, bool)> = self
            .collection
            .with_items(|items| items.map(|i| (i.key.clone(), !i.disabled)).collect());
        let enabled = |(key, on): &(String, bool)| on.then(|| key.clone());
        let first = all.iter().find_map(enabled);
        let last = all.iter().rev().find_map(enabled);
        if first.is_none() {
            return None;
        }
        let origin = self
            .focused_key()
            .and_then(|k| all.iter().position(|(a, _)| a == k));

        let target = match (direction, origin) {
            (Navigation::First, _) | (Navigation::Next, None) => first,
            (Navigation::Last, _) | (Navigation::Prev, None) => last,
            (Navigation::Next, Some(pos)) => match all[pos + 1..].iter().find_map(enabled) {
                Some(k) => Some(k),
                None if self.focus_wrap => first,
                None => self.focused_key.clone(),
            },
            (Navigation::Prev, Some(pos)) => match all[..pos].iter().rev().find_map(enabled) {
                Some(k) => Some(k),
                None if self.focus_wrap => last,
                None => self.focused_key.clone(),
            },
        };
        self.focused_key.clone_from(&target);
        target
    }

    /// Resolve and apply the initial focus for a freshly opened list.
    pub fn focus_initial(&mut self, strategy: FocusStrategy) -> Option<String> {
        match strategy {
            FocusStrategy::First => self.navigate(Navigation::First),
            FocusStrategy::Last => self.navigate(Navigation::Last),
            FocusStrategy::Selected => match self.first_selected_key() {
                Some(key) if self.set_focused_key(&key) => Some(key),
                _ => self.navigate(Navigation::First),
            },
        }
    }

    /// Feed a typed character and focus the first matching item.
    ///
    /// The search starts at the focused item (inclusive) so that extending
    /// the search keeps the current match, then falls back to the top of the
    /// list.
    pub fn typeahead(&mut self, ch: char, timestamp: u64) -> Option<String> {
        let search = String::from(self.type_select.push(ch, timestamp)?);
        let from = self.focused_key().map(String::from);
        let found = self.collection.with_items(|items| {
            let candidates: Vec<(String, bool)> = items
                .filter(|i| !i.disabled)
                .map(|i| (i.key.clone(), i.text().to_lowercase().starts_with(&search)))
                .collect();
            let start = from
                .as_deref()
                .and_then(|k| candidates.iter().position(|(key, _)| key == k))
                .unwrap_or(0);
            candidates[start..]
                .iter()
                .chain(candidates[..start].iter())
                .find(|(_, matches)| *matches)
                .map(|(key, _)| key.clone())
        });
        if let Some(key) = &found {
            self.focused_key = Some(key.clone());
        }
        found
    }

    /// Select `key` according to the selection mode. Returns whether the selection changed.
    pub fn select(&mut self, key: &str) -> bool {
        match self.selection_mode {
            SelectionMode::None => false,
            _ if !self.is_enabled(key) => false,
            SelectionMode::Single => {
                if self.selected.len() == 1 && self.selected.contains(key) {
                    return false;
                }
                self.selected.clear();
                self.selected.insert(String::from(key))
            }
            SelectionMode::Multiple => self.selected.insert(String::from(key)),
        }
    }

    /// Remove `key` from the selection.
    pub fn deselect(&mut self, key: &str) -> bool {
        self.selected.remove(key)
    }

    /// Select `key` if unselected, otherwise deselect it.
    pub fn toggle_selection(&mut self, key: &str) -> bool {
        if self.selected.contains(key) {
            self.deselect(key)
        } else {
            self.select(key)
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Whether `key` is selected and still live.
    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.contains(key) && self.collection.contains_key(key)
    }

    /// Live selected keys in document order.
    pub fn selected_keys(&self) -> Vec<String> {
        self.collection
            .keys()
            .into_iter()
            .filter(|k| self.selected.contains(k))
            .collect()
    }

    /// The first live selected key in document order.
    pub fn first_selected_key(&self) -> Option<String> {
        self.selected_keys().into_iter().next()
    }

    fn is_enabled(&self, key: &str) -> bool {
        self.collection
            .with_items(|mut items| items.any(|i| i.key == key && !i.disabled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemDescriptor;
    use crate::collection::ItemRegistration;
    use alloc::{format, vec};

    fn menu(labels: &[(&str, bool)]) -> (Collection<()>, Vec<ItemRegistration>) {
        let items = Collection::new();
        let regs = labels
            .iter()
            .zip(0_u32..)
            .map(|((key, disabled), pos)| {
                items
                    .register_item(ItemDescriptor::new(*key, pos, ()).with_disabled(*disabled))
                    .unwrap()
            })
            .collect();
        (items, regs)
    }

    #[test]
    fn prev_from_nothing_focuses_last() {
        let (items, _regs) = menu(&[("a", false), ("b", false), ("c", true)]);
        let mut list = ListState::new(items, SelectionMode::None);
        assert_eq!(list.navigate(Navigation::Prev).as_deref(), Some("b"));
        assert_eq!(list.navigate(Navigation::Prev).as_deref(), Some("a"));
        assert_eq!(list.navigate(Navigation::Prev).as_deref(), Some("b"));
    }

    #[test]
    fn no_wrap_stops_at_edges() {
        let (items, _regs) = menu(&[("a", false), ("b", false)]);
        let mut list = ListState::new(items, SelectionMode::None);
        list.focus_wrap = false;
        list.navigate(Navigation::Last);
        assert_eq!(list.navigate(Navigation::Next).as_deref(), Some("b"));
        list.navigate(Navigation::First);
        assert_eq!(list.navigate(Navigation::Prev).as_deref(), Some("a"));
    }

    #[test]
    fn released_focus_is_treated_as_absent() {
        let (items, mut regs) = menu(&[("a", false), ("b", false), ("c", false)]);
        let mut list = ListState::new(items, SelectionMode::None);
        assert!(list.set_focused_key("b"));
        regs.remove(1).unregister();
        assert_eq!(list.focused_key(), None);
        assert_eq!(list.navigate(Navigation::Next).as_deref(), Some("a"));
    }

    #[test]
    fn navigation_crosses_long_disabled_runs() {
        let keys: Vec<String> = (0..200).map(|i| format!("k{i}")).collect();
        let items: Collection<()> = Collection::new();
        let _regs: Vec<_> = keys
            .iter()
            .zip(0_u32..)
            .map(|(key, pos)| {
                let disabled = !(pos == 3 || pos == 150 || pos == 198);
                let item = ItemDescriptor::new(key.as_str(), pos, ()).with_disabled(disabled);
                items.register_item(item).unwrap()
            })
            .collect();
        let mut list = ListState::new(items, SelectionMode::None);
        assert_eq!(list.navigate(Navigation::First).as_deref(), Some("k3"));
        assert_eq!(list.navigate(Navigation::Next).as_deref(), Some("k150"));
        assert_eq!(list.navigate(Navigation::Next).as_deref(), Some("k198"));
        assert_eq!(list.navigate(Navigation::Next).as_deref(), Some("k3"));
        assert_eq!(list.navigate(Navigation::Prev).as_deref(), Some("k198"));
        assert_eq!(list.navigate(Navigation::Last).as_deref(), Some("k198"));
    }

    #[test]
    fn cannot_focus_disabled_or_missing() {
        let (items, _regs) = menu(&[("a", false), ("b", true)]);
        let mut list = ListState::new(items, SelectionMode::None);
        assert!(!list.set_focused_key("b"));
        assert!(!list.set_focused_key("zzz"));
        assert_eq!(list.focused_key(), None);
    }

    #[test]
    fn focus_initial_strategies() {
        let (items, _regs) = menu(&[("a", true), ("b", false), ("c", false), ("d", true)]);
        let mut list = ListState::new(items, SelectionMode::Single);
        assert_eq!(list.focus_initial(FocusStrategy::First).as_deref(), Some("b"));
        assert_eq!(list.focus_initial(FocusStrategy::Last).as_deref(), Some("c"));
        // Nothing selected: falls back to first.
        assert_eq!(list.focus_initial(FocusStrategy::Selected).as_deref(), Some("b"));
        assert!(list.select("c"));
        assert_eq!(list.focus_initial(FocusStrategy::Selected).as_deref(), Some("c"));
    }

    #[test]
    fn selection_modes() {
        let (items, _regs) = menu(&[("a", false), ("b", false), ("c", true)]);
        let mut none = ListState::new(items.clone(), SelectionMode::None);
        assert!(!none.select("a"));
        assert!(none.selected_keys().is_empty());

        let mut single = ListState::new(items.clone(), SelectionMode::Single);
        assert!(single.select("b"));
        assert!(single.select("a"));
        assert!(!single.select("a"));
        assert_eq!(single.selected_keys(), vec!["a"]);
        assert!(!single.select("c"));

        let mut multi = ListState::new(items, SelectionMode::Multiple);
        assert!(multi.select("b"));
        assert!(multi.select("a"));
        assert_eq!(multi.selected_keys(), vec!["a", "b"]);
        assert!(multi.toggle_selection("a"));
        assert!(!multi.is_selected("a"));
        multi.clear_selection();
        assert!(multi.selected_keys().is_empty());
    }

    #[test]
    fn typeahead_extends_and_skips_disabled() {
        let items: Collection<()> = Collection::new();
        let _regs: Vec<_> = [
            ("apple", "Apple", false),
            ("apricot", "Apricot", true),
            ("avocado", "Avocado", false),
            ("banana", "Banana", false),
        ]
        .into_iter()
        .zip(0_u32..)
        .map(|((key, text, disabled), pos)| {
            items
                .register_item(
                    ItemDescriptor::new(key, pos, ())
                        .with_text_value(text)
                        .with_disabled(disabled),
                )
                .unwrap()
        })
        .collect();
        let mut list = ListState::new(items, SelectionMode::None);

        assert_eq!(list.typeahead('a', 0).as_deref(), Some("apple"));
        // "av" keeps searching from the focused item and skips disabled "apricot".
        assert_eq!(list.typeahead('v', 100).as_deref(), Some("avocado"));
        // A fresh search after the timeout.
        assert_eq!(list.typeahead('B', 5_000).as_deref(), Some("banana"));
        // No match leaves focus alone.
        assert_eq!(list.typeahead('z', 10_000), None);
        assert_eq!(list.focused_key(), Some("banana"));
    }
}
