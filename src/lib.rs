//! An in-memory B+ tree index for Rust.
//!
//! This crate provides [`BPTreeMap`], a single-writer ordered map over unique
//! keys with three entry points beyond the usual lookup and insertion:
//!
//! - [`insert`](BPTreeMap::insert) - Insert a key-value pair, overwriting the
//!   value in place if the key already exists
//! - [`get`](BPTreeMap::get) - Point lookup by key
//! - [`range_search`](BPTreeMap::range_search) - Collect every value whose key
//!   satisfies a comparator (`"<="`, `"=="`, `">="`) against a query key,
//!   in ascending key order
//!
//! The map is grow-only: entries can be inserted and overwritten, but never
//! removed. There is no deletion, no rebalancing-on-shrink, and no internal
//! synchronization; callers needing shared access must serialize externally.
//!
//! # Example
//!
//! ```
//! use bptree::BPTreeMap;
//!
//! let mut index = BPTreeMap::new(3)?;
//! for key in [1, 2, 3, 4, 5, 6] {
//!     index.insert(key, key * 10);
//! }
//!
//! assert_eq!(index.len(), 6);
//! assert_eq!(index.get(&3), Some(&30));
//!
//! // Every value whose key is >= 3, ascending.
//! let tail = index.range_search(&3, ">=");
//! assert_eq!(tail, [&30, &40, &50, &60]);
//!
//! // Unrecognized comparator tokens yield an empty result, never an error.
//! assert!(index.range_search(&3, "!=").is_empty());
//! # Ok::<(), bptree::TreeError>(())
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Run-time branching factor** - Node capacity is chosen at construction
//!   (any factor greater than 2) rather than fixed at compile time
//! - **Linked leaf chain** - All entries live in the leaves, which form a
//!   forward-linked chain enabling ascending-order traversal without touching
//!   internal nodes
//!
//! # Implementation
//!
//! Nodes are stored in an append-only arena and referenced by index handles;
//! values live in a second arena so that node arrays stay compact. An internal
//! node holds separator keys and one more child handle than keys; a leaf holds
//! parallel key/value arrays plus the handle of the next leaf in key order.
//! Splits bubble up through insert's return value, and only the tree-level
//! code replaces the root.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod raw;

pub mod bptree_map;

pub use bptree_map::BPTreeMap;
pub use error::TreeError;
