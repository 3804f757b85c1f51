//! # indexed_sum_tree
//!
//! A self-balancing, order-statistic red-black tree fused with a lazy
//! propagating segment tree, keyed by in-order position rather than by
//! value. It supports, on a dynamic sequence of numeric elements, all of
//! the following in `O(log n)`:
//!
//! - positional insertion and deletion,
//! - positional read/write of a single element,
//! - range-sum query over a contiguous positional interval,
//! - range-add update over a contiguous positional interval,
//! - positional forward/backward traversal.
//!
//! Unlike a plain order-statistic tree, every node also carries a subtree
//! sum and a deferred ("lazy") additive increment, so a range-add touches
//! `O(log n)` nodes instead of `O(r - l)` elements.
//!
//! ## Quick start
//!
//! ```rust
//! use indexed_sum_tree::IndexedSumTree;
//!
//! let mut seq = IndexedSumTree::new();
//! seq.insert(1, 10).unwrap();
//! seq.insert(2, 20).unwrap();
//! seq.insert(3, 30).unwrap();
//! assert_eq!(seq.sum(1, 3).unwrap(), 60);
//!
//! seq.insert(2, 99).unwrap();
//! assert_eq!(seq.iter().collect::<Vec<_>>(), vec![10, 99, 20, 30]);
//!
//! seq.update(2, 3, 5).unwrap();
//! assert_eq!(seq.at(2).unwrap(), 104);
//!
//! seq.erase(2).unwrap();
//! assert_eq!(seq.iter().collect::<Vec<_>>(), vec![10, 25, 30]);
//! ```
//!
//! ## Handles
//!
//! `find`/`next`/`prev` return an opaque, generation-checked [`Handle`]
//! rather than a raw node reference: once the node a handle names is
//! erased and its arena slot reused, the handle is detected as stale
//! instead of silently resolving to the new occupant.
//!
//! ```rust
//! use indexed_sum_tree::IndexedSumTree;
//!
//! let mut seq = IndexedSumTree::new();
//! seq.insert(1, 1).unwrap();
//! seq.insert(2, 2).unwrap();
//! seq.insert(3, 3).unwrap();
//!
//! let first = seq.find(1).unwrap();
//! let second = seq.next(first).unwrap().unwrap();
//! assert_eq!(seq.value(second).unwrap(), 2);
//! assert_eq!(seq.index(second).unwrap(), 2);
//! ```
//!
//! ## Concurrency
//!
//! `IndexedSumTree` is single-threaded and synchronous: no operation
//! blocks, suspends, or re-enters the tree. It has no interior mutability,
//! so it is `Send` (and `Sync`) whenever `T` is — but every read, not just
//! every write, takes `&mut self`, since a positional read may need to
//! push pending lazy increments down to the node it visits.

mod element;
mod error;
mod node;
mod tree;

pub use element::Numeric;
pub use error::TreeError;
pub use tree::{Handle, IndexedSumTree, Iter, IterRev};
