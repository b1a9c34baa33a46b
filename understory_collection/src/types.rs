// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for collections: item descriptors, document positions, and focus strategies.

use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;

/// Structural position of an item within its document.
///
/// A position is the root→item path of sibling indices. Positions compare
/// lexicographically, so a parent sorts before its children and earlier
/// siblings sort before later ones, which matches visual top-to-bottom order.
///
/// A plain integer converts into a one-level path, which is enough for flat
/// lists where the host already knows each item's index.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentPosition(SmallVec<[u32; 8]>);

impl DocumentPosition {
    /// Create a position from a root→item path of sibling indices.
    pub fn new(path: &[u32]) -> Self {
        Self(SmallVec::from_slice(path))
    }

    /// Position of the `index`-th child of this position.
    #[must_use]
    pub fn child(&self, index: u32) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }

    /// The sibling-index path from the root.
    pub fn path(&self) -> &[u32] {
        &self.0
    }

    /// Number of levels in the path.
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for DocumentPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DocumentPosition").field(&self.path()).finish()
    }
}

impl From<u32> for DocumentPosition {
    fn from(index: u32) -> Self {
        Self::new(&[index])
    }
}

impl From<&[u32]> for DocumentPosition {
    fn from(path: &[u32]) -> Self {
        Self::new(path)
    }
}

impl<const N: usize> From<[u32; N]> for DocumentPosition {
    fn from(path: [u32; N]) -> Self {
        Self::new(&path)
    }
}

/// A navigable item registered into a collection.
///
/// `E` is the host's element handle (for example a DOM node reference or a
/// widget id). The collection never inspects it; it is handed back to callers
/// that need to move focus or scroll.
#[derive(Clone, Debug)]
pub struct ItemDescriptor<E> {
    /// Identity key, unique among the live items of one collection.
    pub key: String,
    /// Structural position used to order the collection.
    pub order: DocumentPosition,
    /// Host element backing this item.
    pub element: E,
    /// Label used for typeahead. Falls back to [`ItemDescriptor::key`].
    pub text_value: Option<String>,
    /// Disabled items stay in the collection but are skipped by navigation and selection.
    pub disabled: bool,
}

impl<E> ItemDescriptor<E> {
    /// Create an enabled item without an explicit text value.
    pub fn new(key: impl Into<String>, order: impl Into<DocumentPosition>, element: E) -> Self {
        Self {
            key: key.into(),
            order: order.into(),
            element,
            text_value: None,
            disabled: false,
        }
    }

    /// Set the typeahead label.
    #[must_use]
    pub fn with_text_value(mut self, text: impl Into<String>) -> Self {
        self.text_value = Some(text.into());
        self
    }

    /// Mark the item as disabled.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The label typeahead matches against.
    pub fn text(&self) -> &str {
        self.text_value.as_deref().unwrap_or(&self.key)
    }
}

/// Which item should receive focus when a list is first shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FocusStrategy {
    /// The first enabled item.
    First,
    /// The last enabled item.
    Last,
    /// The first selected item, or the first enabled item when nothing is selected.
    Selected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_follow_document_order() {
        let parent = DocumentPosition::from(1);
        let child = parent.child(0);
        let next_sibling = DocumentPosition::from(2);

        assert!(parent < child);
        assert!(child < next_sibling);
        assert_eq!(child.path(), &[1, 0]);
        assert_eq!(child.depth(), 2);
    }

    #[test]
    fn text_falls_back_to_key() {
        let item = ItemDescriptor::new("copy", 0, ());
        assert_eq!(item.text(), "copy");
        let item = item.with_text_value("Copy selection");
        assert_eq!(item.text(), "Copy selection");
    }
}
