//! # Disk-Backed B-Tree Index
//!
//! An ordered mapping from fixed-width keys to fixed-width values, persisted
//! as one node per fixed-size block through a [`BlockStore`]. The module
//! splits along the engine's natural seams:
//!
//! - [`node`]: the block codec and typed node view: header layout, slot
//!   accessors, capacity arithmetic.
//! - [`tree`]: the index engine: attach/detach, the freelist allocator,
//!   and lookup/update/insert with recursive split propagation.
//! - [`display`]: depth-first traversal in structural, Graphviz, and
//!   sorted key/value forms.
//!
//! ## Shape
//!
//! ```text
//!                [Root, block 1]           (block number fixed forever)
//!                /      |      \
//!       [Interior]  [Interior]  [Interior]
//!        /   \        /   \       /   \
//!    [Leaf] [Leaf] [Leaf] [Leaf] [Leaf] [Leaf]
//! ```
//!
//! All key/value pairs live in leaves; interior nodes hold separators and
//! child pointers; all leaves sit at the same depth. Keys compare as raw
//! bytes and are unique: duplicate insertion fails with `Conflict`.
//!
//! [`BlockStore`]: crate::storage::BlockStore

mod display;
mod node;
mod tree;

pub use display::DisplayMode;
pub use node::{
    interior_slots, leaf_slots, KeyValuePair, Node, NodeKind, NODE_HEADER_SIZE, PTR_SIZE,
};
pub use tree::BTreeIndex;
