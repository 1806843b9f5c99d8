//! Reference queues with the same contract as [`IndexedMinHeap`] but without
//! a position index.
//!
//! They trade speed for obviousness and are meant as oracles when testing
//! the indexed heap, not for production use.
//!
//! [`IndexedMinHeap`]: crate::IndexedMinHeap

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::mem;

use log::debug;

use crate::error::{check_priority, PqError};
use crate::node::PriorityNode;
use crate::ExtrinsicMinPq;

/// Orders nodes by priority alone, reversed so that `BinaryHeap` (a max-heap)
/// yields the smallest priority first.
#[derive(Debug)]
struct Queued<T>(PriorityNode<T>);

impl<T> PartialEq for Queued<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Queued<T> {}

impl<T> PartialOrd for Queued<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Queued<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.priority.total_cmp(&other.0.priority).reverse()
    }
}

/// A queue backed by [`BinaryHeap`].
///
/// `contains` scans the heap and `change_priority` rebuilds it, so both are
/// *O*(*n*).
#[derive(Debug)]
pub struct HeapMinPq<T> {
    heap: BinaryHeap<Queued<T>>,
}

impl<T> Default for HeapMinPq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HeapMinPq<T> {
    pub fn new() -> Self {
        HeapMinPq {
            heap: BinaryHeap::new(),
        }
    }
}

impl<T: Eq> ExtrinsicMinPq<T> for HeapMinPq<T> {
    fn add(&mut self, item: T, priority: f64) -> Result<(), PqError> {
        let priority = check_priority(priority)?;
        if self.contains(&item) {
            debug!("rejected add: item already queued");
            return Err(PqError::DuplicateItem);
        }
        self.heap.push(Queued(PriorityNode::new(item, priority)));
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.heap.iter().any(|queued| queued.0.item == *item)
    }

    fn peek_min(&self) -> Result<&T, PqError> {
        self.heap
            .peek()
            .map(|queued| &queued.0.item)
            .ok_or(PqError::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<T, PqError> {
        self.heap
            .pop()
            .map(|queued| queued.0.item)
            .ok_or(PqError::EmptyQueue)
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<(), PqError> {
        let priority = check_priority(priority)?;
        if !self.contains(item) {
            debug!("rejected change_priority: item not queued");
            return Err(PqError::ItemNotFound);
        }

        let mut nodes = mem::take(&mut self.heap).into_vec();
        for queued in nodes.iter_mut().filter(|queued| queued.0.item == *item) {
            queued.0.priority = priority;
        }
        self.heap = BinaryHeap::from(nodes);
        Ok(())
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// A queue kept as an unsorted list. Every operation except `add` is a
/// linear scan.
#[derive(Debug, Clone)]
pub struct UnsortedMinPq<T> {
    nodes: Vec<PriorityNode<T>>,
}

impl<T> Default for UnsortedMinPq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> UnsortedMinPq<T> {
    pub fn new() -> Self {
        UnsortedMinPq { nodes: Vec::new() }
    }

    /// Index of the first node holding the smallest priority.
    fn min_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, node) in self.nodes.iter().enumerate() {
            match best {
                Some(b) if self.nodes[b].priority <= node.priority => {}
                _ => best = Some(i),
            }
        }
        best
    }
}

impl<T: PartialEq> ExtrinsicMinPq<T> for UnsortedMinPq<T> {
    fn add(&mut self, item: T, priority: f64) -> Result<(), PqError> {
        let priority = check_priority(priority)?;
        if self.contains(&item) {
            debug!("rejected add: item already queued");
            return Err(PqError::DuplicateItem);
        }
        self.nodes.push(PriorityNode::new(item, priority));
        Ok(())
    }

    fn contains(&self, item: &T) -> bool {
        self.nodes.iter().any(|node| node.item == *item)
    }

    fn peek_min(&self) -> Result<&T, PqError> {
        self.min_index()
            .map(|i| &self.nodes[i].item)
            .ok_or(PqError::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<T, PqError> {
        let i = self.min_index().ok_or(PqError::EmptyQueue)?;
        Ok(self.nodes.swap_remove(i).item)
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> Result<(), PqError> {
        let priority = check_priority(priority)?;
        match self.nodes.iter_mut().find(|node| node.item == *item) {
            Some(node) => {
                node.priority = priority;
                Ok(())
            }
            None => {
                debug!("rejected change_priority: item not queued");
                Err(PqError::ItemNotFound)
            }
        }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}
