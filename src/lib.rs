//! # blocktree
//!
//! A disk-backed B-tree index: an ordered map from fixed-width keys to
//! fixed-width values, stored one node per fixed-size block behind a
//! pluggable block store.
//!
//! ## Quick Start
//!
//! ```
//! use blocktree::btree::{BTreeIndex, DisplayMode};
//! use blocktree::storage::MemoryStore;
//!
//! # fn main() -> blocktree::Result<()> {
//! let store = MemoryStore::new(64, 100);
//! let mut index = BTreeIndex::create(store, 0, 4, 8)?;
//!
//! index.insert(b"abcd", b"value-01")?;
//! index.insert(b"efgh", b"value-02")?;
//! assert_eq!(index.lookup(b"abcd")?, b"value-01");
//!
//! let mut out = Vec::new();
//! index.display(&mut out, DisplayMode::SortedKeyval)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Index API (BTreeIndex)            │  attach, lookup, insert, update
//! ├─────────────────────────────────────┤
//! │   Tree engine + freelist allocator  │  descent, splits, block reuse
//! ├─────────────────────────────────────┤
//! │   Block codec / node view (Node)    │  header + slot layout
//! ├─────────────────────────────────────┤
//! │   Block store (BlockStore)          │  MemoryStore | MmapStore | yours
//! └─────────────────────────────────────┘
//! ```
//!
//! The store is the sole I/O boundary: fixed-size numbered blocks with
//! whole-block read/write and advisory allocate/deallocate hooks. Block 0
//! is the superblock, block 1 the root (fixed forever), and every other
//! block is either tree-reachable or chained on the freelist.
//!
//! The engine is single-threaded and synchronous; every call runs to
//! completion or fails with a typed [`IndexError`]. Writes are ordered so a
//! parent never references an unwritten child, but no durability beyond the
//! store's own guarantees is promised.

pub mod btree;
pub mod error;
pub mod storage;

pub use error::{IndexError, Result};
