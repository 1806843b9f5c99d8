#![allow(missing_docs)]

//! Priority queues whose priorities live outside the items.
//!
//! An *extrinsic* priority is attached to an item when it is queued and can
//! be changed afterwards, which ordinary priority queues built on [`Ord`]
//! cannot do. [`IndexedMinHeap`] is the engine to use; the queues in
//! [`baseline`] implement the same [`ExtrinsicMinPq`] contract with linear
//! scans and exist to cross-check it.
//!
//! # Examples
//!
//! A shortest-path search only ever lowers a tentative distance:
//!
//! ```
//! use extrinsic_pq::IndexedMinHeap;
//!
//! let edges = [(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0), (1, 3, 1.0)];
//! let mut dist = [f64::INFINITY; 4];
//! dist[0] = 0.0;
//!
//! let mut frontier = IndexedMinHeap::new();
//! for (node, d) in dist.iter().enumerate() {
//!     frontier.add(node, *d).unwrap();
//! }
//!
//! while let Some(entry) = frontier.pop_min_entry() {
//!     let (from, d) = entry.into_parts();
//!     for &(a, b, w) in &edges {
//!         if a == from && frontier.contains(&b) && d + w < dist[b] {
//!             dist[b] = d + w;
//!             frontier.change_priority(&b, dist[b]).unwrap();
//!         }
//!     }
//! }
//!
//! assert_eq!(dist, [0.0, 3.0, 1.0, 4.0]);
//! ```

pub mod baseline;
mod error;
mod indexed;
mod node;

pub use error::PqError;
pub use indexed::{IndexedMinHeap, Iter};
pub use node::PriorityNode;

/// The operations shared by every queue in this crate.
///
/// Items are identified by value equality. Lower priorities come out first;
/// the order among equal priorities is whatever the implementation produces.
/// A call that returns an error leaves the queue unchanged.
pub trait ExtrinsicMinPq<T> {
    /// Queues `item`, or fails with [`PqError::DuplicateItem`] if it is
    /// already queued.
    fn add(&mut self, item: T, priority: f64) -> Result<(), PqError>;

    fn contains(&self, item: &T) -> bool;

    /// The item with the smallest priority, or [`PqError::EmptyQueue`].
    fn peek_min(&self) -> Result<&T, PqError>;

    /// Removes the item with the smallest priority, or fails with
    /// [`PqError::EmptyQueue`].
    fn remove_min(&mut self) -> Result<T, PqError>;

    /// Requeues `item` under a new priority, or fails with
    /// [`PqError::ItemNotFound`].
    fn change_priority(&mut self, item: &T, priority: f64) -> Result<(), PqError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
