//! OrderedIndex Module
//!
//! In-memory ordered index mapping record keys to byte offsets.
//!
//! ## Responsibilities
//! - O(tree-height) point lookup of a record's file offset
//! - Ascending-key iteration for sorted reports (no sorting per call)
//! - First-wins insertion (duplicate keys never overwrite)
//!
//! ## Data Structure Choice
//! Plain unbalanced binary search tree:
//! - Matches the access pattern: bulk insert at rebuild, point lookups after
//! - Nodes are exclusively owned by their parent (no sharing, no cycles)
//! - Worst-case O(n) depth under monotonic key order is accepted; callers
//!   needing guarantees can pre-shuffle or live with it

mod tree;

pub use tree::{InOrderIter, OrderedIndex};
