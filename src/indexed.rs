use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::slice;

use log::{debug, trace};

use crate::error::{check_priority, PqError};
use crate::node::PriorityNode;
use crate::ExtrinsicMinPq;

/// A min-priority queue implemented with a binary heap and a position index.
///
/// Every item is stored once in the heap array, and the index maps each item
/// to the slot it currently occupies. The index is what makes
/// [`contains`] *O*(1) and [`change_priority`] *O*(log(*n*)): the slot of an
/// item is known without scanning the heap.
///
/// Items are identified by value, so they must implement [`Eq`] and [`Hash`].
/// The index keeps its own clone of every item as a key.
///
/// # Examples
///
/// ```
/// use extrinsic_pq::{IndexedMinHeap, PqError};
///
/// let mut heap = IndexedMinHeap::new();
///
/// heap.add("Bob", 3.0).unwrap();
/// heap.add("Alice", 1.0).unwrap();
/// heap.add("Eve", 2.0).unwrap();
///
/// // The item with the lowest priority is on top.
/// assert_eq!(heap.peek_min(), Ok(&"Alice"));
///
/// // Priorities can be changed after insertion.
/// heap.change_priority("Bob", 0.5).unwrap();
///
/// assert_eq!(heap.remove_min(), Ok("Bob"));
/// assert_eq!(heap.remove_min(), Ok("Alice"));
/// assert_eq!(heap.remove_min(), Ok("Eve"));
/// assert_eq!(heap.remove_min(), Err(PqError::EmptyQueue));
/// ```
///
/// # Time complexity
///
/// | [add]         | [remove_min]  | [change_priority] | [contains]/[peek_min] |
/// |---------------|---------------|-------------------|-----------------------|
/// | *O*(log(*n*)) | *O*(log(*n*)) | *O*(log(*n*))     | *O*(1)                |
///
/// [add]: IndexedMinHeap::add
/// [remove_min]: IndexedMinHeap::remove_min
/// [change_priority]: IndexedMinHeap::change_priority
/// [`change_priority`]: IndexedMinHeap::change_priority
/// [contains]: IndexedMinHeap::contains
/// [`contains`]: IndexedMinHeap::contains
/// [peek_min]: IndexedMinHeap::peek_min
#[derive(Clone)]
pub struct IndexedMinHeap<T> {
    data: Vec<PriorityNode<T>>,
    position: HashMap<T, usize>,
}

impl<T> Default for IndexedMinHeap<T> {
    /// Creates an empty `IndexedMinHeap<T>`.
    #[inline]
    fn default() -> IndexedMinHeap<T> {
        IndexedMinHeap::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for IndexedMinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Eq + Hash + Clone> IndexedMinHeap<T> {
    /// Inserts `item` with the given priority.
    ///
    /// Fails with [`PqError::DuplicateItem`] if an equal item is already
    /// queued, and with [`PqError::InvalidPriority`] if `priority` is NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use extrinsic_pq::{IndexedMinHeap, PqError};
    ///
    /// let mut heap = IndexedMinHeap::new();
    /// heap.add('x', 1.0).unwrap();
    ///
    /// assert_eq!(heap.add('x', 2.0), Err(PqError::DuplicateItem));
    /// assert_eq!(heap.len(), 1);
    /// ```
    pub fn add(&mut self, item: T, priority: f64) -> Result<(), PqError> {
        let priority = check_priority(priority)?;
        if self.position.contains_key(&item) {
            debug!("rejected add: item already queued");
            return Err(PqError::DuplicateItem);
        }

        let pos = self.data.len();
        self.position.insert(item.clone(), pos);
        self.data.push(PriorityNode::new(item, priority));
        let pos = self.sift_up(pos);

        trace!("add: priority {} settled at slot {}", priority, pos);
        Ok(())
    }

    /// Returns `true` if an item equal to `item` is queued, whatever its
    /// priority.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position.contains_key(item)
    }

    /// Returns the priority `item` is currently queued under.
    ///
    /// ```
    /// use extrinsic_pq::IndexedMinHeap;
    ///
    /// let mut heap = IndexedMinHeap::new();
    /// heap.add(String::from("task"), 4.0).unwrap();
    ///
    /// assert_eq!(heap.priority("task"), Some(4.0));
    /// assert_eq!(heap.priority("other"), None);
    /// ```
    pub fn priority<Q>(&self, item: &Q) -> Option<f64>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.position.get(item).map(|&pos| self.data[pos].priority)
    }

    /// Removes the item with the smallest priority and returns it.
    ///
    /// Fails with [`PqError::EmptyQueue`] if there is nothing to remove.
    pub fn remove_min(&mut self) -> Result<T, PqError> {
        match self.pop_min_entry() {
            Some(node) => Ok(node.item),
            None => {
                debug!("rejected remove_min: queue is empty");
                Err(PqError::EmptyQueue)
            }
        }
    }

    /// Removes the smallest node and returns it together with its priority,
    /// or `None` if the heap is empty.
    pub fn pop_min_entry(&mut self) -> Option<PriorityNode<T>> {
        let last = self.data.len().checked_sub(1)?;
        self.swap(0, last);
        let node = self.data.pop()?;
        self.position.remove(&node.item);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        trace!("remove_min: priority {}, {} left", node.priority, self.len());
        Some(node)
    }

    /// Moves `item` to a new priority.
    ///
    /// The item may move either toward the root or toward the leaves; both
    /// directions are tried and at most one of them moves it.
    ///
    /// Fails with [`PqError::ItemNotFound`] if `item` is not queued.
    ///
    /// # Examples
    ///
    /// ```
    /// use extrinsic_pq::IndexedMinHeap;
    ///
    /// let mut heap = IndexedMinHeap::new();
    /// heap.add("a", 10.0).unwrap();
    /// heap.add("b", 5.0).unwrap();
    /// heap.add("c", 20.0).unwrap();
    ///
    /// heap.change_priority("c", 1.0).unwrap();
    /// assert_eq!(heap.into_sorted_vec(), ["c", "b", "a"]);
    /// ```
    pub fn change_priority<Q>(&mut self, item: &Q, priority: f64) -> Result<(), PqError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let priority = check_priority(priority)?;
        let pos = match self.position.get(item) {
            Some(&pos) => pos,
            None => {
                debug!("rejected change_priority: item not queued");
                return Err(PqError::ItemNotFound);
            }
        };

        let old = mem::replace(&mut self.data[pos].priority, priority);
        let pos = self.sift_up(pos);
        let pos = self.sift_down(pos);

        trace!("change_priority: {} -> {}, now at slot {}", old, priority, pos);
        Ok(())
    }

    /// Checks heap order, index consistency and density.
    pub fn check_integrity(&self) -> bool {
        if self.position.len() != self.data.len() {
            return false;
        }

        self.data.iter().enumerate().all(|(i, node)| {
            let ordered = i == 0 || self.data[(i - 1) / 2].priority <= node.priority;
            ordered && self.position.get(&node.item) == Some(&i)
        })
    }

    /// Moves the node at `pos` toward the root while it is strictly smaller
    /// than its parent. Returns the slot it ends up in.
    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.data[pos].priority < self.data[parent].priority {
                self.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
        pos
    }

    /// Moves the node at `pos` toward the leaves while its smaller child is
    /// strictly smaller than it. Returns the slot it ends up in.
    fn sift_down(&mut self, mut pos: usize) -> usize {
        let len = self.data.len();

        // Loop invariant: child == 2 * pos + 1.
        let mut child = 2 * pos + 1;
        while child < len {
            if child + 1 < len && self.data[child + 1].priority < self.data[child].priority {
                child += 1;
            }

            if self.data[child].priority < self.data[pos].priority {
                self.swap(pos, child);
                pos = child;
                child = 2 * pos + 1;
            } else {
                break;
            }
        }
        pos
    }

    /// Exchanges two slots and rewrites the index entries of both items.
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }

        self.data.swap(a, b);
        for slot in [a, b] {
            let entry = self.position.get_mut(&self.data[slot].item);
            debug_assert!(entry.is_some(), "heap slot {} has no index entry", slot);
            if let Some(pos) = entry {
                *pos = slot;
            }
        }
    }
}

impl<T> IndexedMinHeap<T> {
    /// Creates an empty `IndexedMinHeap`.
    ///
    /// # Examples
    ///
    /// ```
    /// use extrinsic_pq::IndexedMinHeap;
    /// let mut heap = IndexedMinHeap::new();
    /// heap.add("Steven", 4.0).unwrap();
    /// ```
    #[must_use]
    pub fn new() -> IndexedMinHeap<T> {
        IndexedMinHeap {
            data: Vec::new(),
            position: HashMap::new(),
        }
    }

    /// Creates an empty `IndexedMinHeap` with room for `capacity` items
    /// before either the heap array or the index has to reallocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use extrinsic_pq::IndexedMinHeap;
    /// let mut heap = IndexedMinHeap::with_capacity(10);
    /// assert!(heap.capacity() >= 10);
    /// heap.add("Eve", 1.5).unwrap();
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> IndexedMinHeap<T> {
        IndexedMinHeap {
            data: Vec::with_capacity(capacity),
            position: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of items the heap array can hold without
    /// reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the item with the smallest priority without removing it.
    ///
    /// Fails with [`PqError::EmptyQueue`] if the heap is empty.
    pub fn peek_min(&self) -> Result<&T, PqError> {
        self.peek_min_entry()
            .map(|node| &node.item)
            .ok_or(PqError::EmptyQueue)
    }

    /// Returns the smallest node, or `None` if the heap is empty.
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    #[must_use]
    pub fn peek_min_entry(&self) -> Option<&PriorityNode<T>> {
        self.data.first()
    }

    /// Returns the number of queued items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator visiting all nodes in arbitrary order.
    ///
    /// # Examples
    ///
    /// ```
    /// use extrinsic_pq::IndexedMinHeap;
    /// let mut heap = IndexedMinHeap::new();
    /// heap.add(1, 0.1).unwrap();
    /// heap.add(2, 0.2).unwrap();
    ///
    /// let total: f64 = heap.iter().map(|node| node.priority).sum();
    /// assert!((total - 0.3).abs() < 1e-9);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            iter: self.data.iter(),
        }
    }

    /// Drops every queued item.
    pub fn clear(&mut self) {
        self.data.clear();
        self.position.clear();
    }

    /// Consumes the heap and returns its items in ascending priority order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut data = self.data;
        data.sort_by(|a, b| a.priority.total_cmp(&b.priority));
        data.into_iter().map(|node| node.item).collect()
    }
}

impl<T: Eq + Hash + Clone> ExtrinsicMinPq<T> for IndexedMinHeap<T> {
    fn add(&mut self, item: T, priority: f64) -> Result<(), PqError> {
        IndexedMinHeap::add(self, item, priority)
    }

    fn contains(&self, item: &T) -> bool {
        IndexedMinHeap::contains(self, item)
    }

    fn peek_min(&self) -> Result<&T, PqError> {
        IndexedMinHeap::peek_min(self)
    }

    fn remove_min(&mut self) -> Result<T, PqError> {
        IndexedMinHeap::remove_min(self)
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<(), PqError> {
        IndexedMinHeap::change_priority(self, item, priority)
    }

    fn len(&self) -> usize {
        IndexedMinHeap::len(self)
    }
}

/// An iterator over the nodes of an `IndexedMinHeap`.
///
/// This `struct` is created by [`IndexedMinHeap::iter()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, PriorityNode<T>>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a PriorityNode<T>;

    #[inline]
    fn next(&mut self) -> Option<&'a PriorityNode<T>> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a PriorityNode<T>> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a IndexedMinHeap<T> {
    type Item = &'a PriorityNode<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
