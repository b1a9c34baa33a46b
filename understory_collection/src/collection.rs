// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live item collection: registration, ordering, and release.

use alloc::rc::{Rc, Weak};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use hashbrown::HashMap;

use crate::types::{DocumentPosition, ItemDescriptor};

/// Generational handle for one registered item.
///
/// A handle stays bound to the exact registration that produced it. Once that
/// item is released, the slot may be reused, but the generation changes and the
/// old handle no longer matches anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemKey(u32, u32);

impl ItemKey {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Collection slots are intentionally 32-bit; menus never approach that many items."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Errors reported by [`Collection`] registration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// Another live item already uses this key.
    #[error("an item with key `{key}` is already registered in this collection")]
    DuplicateKey {
        /// The rejected key.
        key: String,
    },
    /// The registration was released, or its collection was dropped.
    #[error("the item registration is no longer live")]
    StaleRegistration,
}

#[derive(Debug)]
struct Entry<E> {
    generation: u32,
    item: ItemDescriptor<E>,
}

struct Inner<E> {
    /// slots
    entries: Vec<Option<Entry<E>>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    /// live slots in document order
    order: Vec<usize>,
    by_key: HashMap<String, usize>,
    version: u64,
}

impl<E> Inner<E> {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            order: Vec::new(),
            by_key: HashMap::new(),
            version: 0,
        }
    }

    fn entry(&self, key: ItemKey) -> Option<&Entry<E>> {
        self.entries
            .get(key.idx())?
            .as_ref()
            .filter(|e| e.generation == key.1)
    }

    fn entry_mut(&mut self, key: ItemKey) -> Option<&mut Entry<E>> {
        self.entries
            .get_mut(key.idx())?
            .as_mut()
            .filter(|e| e.generation == key.1)
    }

    fn insert(&mut self, item: ItemDescriptor<E>) -> Result<ItemKey, CollectionError> {
        if self.by_key.contains_key(&item.key) {
            return Err(CollectionError::DuplicateKey { key: item.key });
        }
        let name = item.key.clone();
        let idx = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.entries[idx] = Some(Entry { generation, item });
            idx
        } else {
            self.generations.push(1);
            self.entries.push(Some(Entry {
                generation: 1,
                item,
            }));
            self.entries.len() - 1
        };
        self.by_key.insert(name, idx);
        self.place(idx);
        self.version += 1;
        Ok(ItemKey::new(idx, self.generations[idx]))
    }

    /// Insert `idx` into `order` after every item at or before its position,
    /// so equal positions keep registration order.
    fn place(&mut self, idx: usize) {
        let pos = {
            let Some(target) = self.entries[idx].as_ref().map(|e| &e.item.order) else {
                return;
            };
            let entries = &self.entries;
            self.order.partition_point(|&i| {
                entries[i]
                    .as_ref()
                    .is_some_and(|e| e.item.order <= *target)
            })
        };
        self.order.insert(pos, idx);
    }

    fn remove(&mut self, key: ItemKey) -> Option<ItemDescriptor<E>> {
        self.entry(key)?;
        let entry = self.entries[key.idx()].take()?;
        self.order.retain(|&i| i != key.idx());
        if self.by_key.get(&entry.item.key) == Some(&key.idx()) {
            self.by_key.remove(&entry.item.key);
        }
        self.free_list.push(key.idx());
        self.version += 1;
        Some(entry.item)
    }

    fn reposition(&mut self, key: ItemKey, order: DocumentPosition) -> Result<(), CollectionError> {
        let entry = self
            .entry_mut(key)
            .ok_or(CollectionError::StaleRegistration)?;
        entry.item.order = order;
        self.order.retain(|&i| i != key.idx());
        self.place(key.idx());
        self.version += 1;
        Ok(())
    }

    fn live(&self) -> Items<'_, E> {
        Items {
            order: self.order.iter(),
            entries: &self.entries,
        }
    }
}

/// Iterator over the live items of a [`Collection`] in document order.
///
/// Produced by [`Collection::with_items`].
pub struct Items<'a, E> {
    order: core::slice::Iter<'a, usize>,
    entries: &'a [Option<Entry<E>>],
}

impl<E> fmt::Debug for Items<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Items")
            .field("remaining", &self.order.len())
            .finish_non_exhaustive()
    }
}

impl<'a, E> Iterator for Items<'a, E> {
    type Item = &'a ItemDescriptor<E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let &idx = self.order.next()?;
            if let Some(entry) = self.entries[idx].as_ref() {
                return Some(&entry.item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.order.len()))
    }
}

/// Registration-side view of a collection, erased over the element type so
/// [`ItemRegistration`] stays non-generic.
trait Registry {
    fn release(&self, key: ItemKey);
    fn reposition(&self, key: ItemKey, order: DocumentPosition) -> Result<(), CollectionError>;
    fn is_live(&self, key: ItemKey) -> bool;
}

impl<E> Registry for RefCell<Inner<E>> {
    fn release(&self, key: ItemKey) {
        if let Some(item) = self.borrow_mut().remove(key) {
            tracing::trace!(key = %item.key, "released collection item");
        }
    }

    fn reposition(&self, key: ItemKey, order: DocumentPosition) -> Result<(), CollectionError> {
        self.borrow_mut().reposition(key, order)
    }

    fn is_live(&self, key: ItemKey) -> bool {
        self.borrow().entry(key).is_some()
    }
}

/// An ordered, live registry of navigable items for one list level.
///
/// Items are kept sorted by [`DocumentPosition`] rather than by the order in
/// which they were registered, so navigation follows what the user sees even
/// when items mount asynchronously. Keys are unique among live items.
///
/// `Collection` is a cheap, shared handle: clones refer to the same items.
/// Every mutation bumps [`Collection::version`], which consumers can poll to
/// detect changes.
///
/// ## Example
///
/// ```rust
/// use understory_collection::{Collection, ItemDescriptor};
///
/// let items: Collection<u32> = Collection::new();
/// let _paste = items.register_item(ItemDescriptor::new("paste", 2, 20)).unwrap();
/// let copy = items.register_item(ItemDescriptor::new("copy", 1, 10)).unwrap();
/// assert_eq!(items.keys(), ["copy", "paste"]);
///
/// // Releasing the registration removes exactly that item.
/// copy.unregister();
/// assert_eq!(items.keys(), ["paste"]);
/// ```
pub struct Collection<E> {
    inner: Rc<RefCell<Inner<E>>>,
}

impl<E> Clone for Collection<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> Default for Collection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Collection<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Collection")
            .field("len", &inner.order.len())
            .field("free_list", &inner.free_list.len())
            .field("version", &inner.version)
            .finish_non_exhaustive()
    }
}

impl<E> Collection<E> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner::new())),
        }
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.inner.borrow().order.len()
    }

    /// Returns `true` if no items are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Change counter, bumped by every registration, release, and reposition.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Whether a live item uses `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.borrow().by_key.contains_key(key)
    }

    /// Live keys in document order.
    pub fn keys(&self) -> Vec<String> {
        self.inner.borrow().live().map(|i| i.key.clone()).collect()
    }

    /// Document-order index of `key` among live items.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.inner.borrow().live().position(|i| i.key == key)
    }

    /// Key of the first live item.
    pub fn first_key(&self) -> Option<String> {
        self.inner.borrow().live().next().map(|i| i.key.clone())
    }

    /// Key of the last live item.
    pub fn last_key(&self) -> Option<String> {
        self.inner.borrow().live().last().map(|i| i.key.clone())
    }

    /// Run `f` over the live items in document order.
    ///
    /// The collection is borrowed for the duration of `f`; releasing or
    /// registering items from inside `f` panics.
    pub fn with_items<R>(&self, f: impl FnOnce(Items<'_, E>) -> R) -> R {
        let inner = self.inner.borrow();
        f(inner.live())
    }
}

impl<E: Clone> Collection<E> {
    /// Snapshot of the live items in document order.
    pub fn items(&self) -> Vec<ItemDescriptor<E>> {
        self.inner.borrow().live().cloned().collect()
    }

    /// The live item registered under `key`.
    pub fn get(&self, key: &str) -> Option<ItemDescriptor<E>> {
        let inner = self.inner.borrow();
        let idx = *inner.by_key.get(key)?;
        inner.entries[idx].as_ref().map(|e| e.item.clone())
    }
}

impl<E: 'static> Collection<E> {
    /// Register an item and return the capability that releases it.
    ///
    /// Fails with [`CollectionError::DuplicateKey`] if a live item already uses
    /// the same key; the existing item is left untouched.
    pub fn register_item(
        &self,
        item: ItemDescriptor<E>,
    ) -> Result<ItemRegistration, CollectionError> {
        let name = item.key.clone();
        let key = self.inner.borrow_mut().insert(item).inspect_err(|_| {
            tracing::warn!(key = %name, "rejected duplicate collection key");
        })?;
        tracing::trace!(key = %name, "registered collection item");
        let weak = Rc::downgrade(&self.inner);
        let registry: Weak<dyn Registry> = weak;
        Ok(ItemRegistration { registry, key })
    }
}

/// Release capability returned by [`Collection::register_item`].
///
/// Dropping the registration (or calling [`ItemRegistration::unregister`])
/// removes exactly the item it was created for. Releasing after the item or
/// the whole collection is gone does nothing.
#[must_use = "dropping the registration removes the item from its collection"]
pub struct ItemRegistration {
    registry: Weak<dyn Registry>,
    key: ItemKey,
}

impl fmt::Debug for ItemRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemRegistration")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl ItemRegistration {
    /// Handle of the registered item.
    pub fn item_key(&self) -> ItemKey {
        self.key
    }

    /// Whether the item is still registered.
    pub fn is_live(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|r| r.is_live(self.key))
    }

    /// Move the item to a new structural position and re-sort the collection.
    pub fn reposition(&self, order: impl Into<DocumentPosition>) -> Result<(), CollectionError> {
        let registry = self
            .registry
            .upgrade()
            .ok_or(CollectionError::StaleRegistration)?;
        registry.reposition(self.key, order.into())
    }

    /// Remove the item from its collection.
    pub fn unregister(self) {
        drop(self);
    }
}

impl Drop for ItemRegistration {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.release(self.key);
        }
    }
}
