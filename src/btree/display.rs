//! # Tree Traversal and Display
//!
//! Depth-first enumeration of the index in three shapes:
//!
//! - [`DisplayMode::Depth`]: one node per line, block number first, raw
//!   key/value bytes and `*ptr` markers in slot order.
//! - [`DisplayMode::DepthDot`]: the same slot dump as Graphviz node labels,
//!   wrapped in a `digraph` with one edge per parent/child pointer.
//! - [`DisplayMode::SortedKeyval`]: leaves only, left to right, which is
//!   the in-order `(key,value)` enumeration of the index.
//!
//! Keys and values are emitted as raw bytes; the writer decides what they
//! mean. A freshly created index (keyless root, no leaf yet) renders as the
//! root line alone.

use std::io::Write;

use crate::error::{IndexError, Result};
use crate::storage::BlockStore;

use super::node::{Node, NodeKind};
use super::tree::BTreeIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Structural dump, one node per line.
    Depth,
    /// Graphviz digraph of the block graph.
    DepthDot,
    /// In-order key/value enumeration.
    SortedKeyval,
}

impl<S: BlockStore> BTreeIndex<S> {
    pub fn display<W: Write>(&self, out: &mut W, mode: DisplayMode) -> Result<()> {
        if mode == DisplayMode::DepthDot {
            writeln!(out, "digraph tree {{")?;
        }
        self.display_block(self.root_block(), out, mode)?;
        if mode == DisplayMode::DepthDot {
            writeln!(out, "}}")?;
        }
        Ok(())
    }

    fn display_block<W: Write>(&self, block: u32, out: &mut W, mode: DisplayMode) -> Result<()> {
        let node = self.node(block)?;
        print_node(out, block, &node, mode)?;
        if mode == DisplayMode::DepthDot {
            out.write_all(b";")?;
        }
        if mode != DisplayMode::SortedKeyval {
            out.write_all(b"\n")?;
        }

        match node.kind() {
            NodeKind::Root | NodeKind::Interior => {
                if node.kind() == NodeKind::Root
                    && node.num_keys() == 0
                    && node.get_ptr(0)? == 0
                {
                    // nothing below a root that has never materialized a leaf
                    return Ok(());
                }
                for i in 0..=node.num_keys() {
                    let ptr = node.get_ptr(i)?;
                    if mode == DisplayMode::DepthDot {
                        writeln!(out, "{} -> {};", block, ptr)?;
                    }
                    self.display_block(ptr, out, mode)?;
                }
                Ok(())
            }
            NodeKind::Leaf => Ok(()),
            _ => Err(IndexError::Insane("display reached a non-tree node")),
        }
    }
}

fn print_node<W: Write>(out: &mut W, block: u32, node: &Node, mode: DisplayMode) -> Result<()> {
    match mode {
        DisplayMode::DepthDot => write!(out, "{} [ label=\"{}: ", block, block)?,
        DisplayMode::Depth => write!(out, "{}: ", block)?,
        DisplayMode::SortedKeyval => {}
    }

    match node.kind() {
        NodeKind::Root | NodeKind::Interior => {
            if mode != DisplayMode::SortedKeyval {
                if mode == DisplayMode::Depth {
                    write!(out, "Interior: ")?;
                }
                for i in 0..=node.num_keys() {
                    write!(out, "*{} ", node.get_ptr(i)?)?;
                    if i == node.num_keys() {
                        break;
                    }
                    out.write_all(node.get_key(i)?)?;
                    out.write_all(b" ")?;
                }
            }
        }
        NodeKind::Leaf => {
            if mode == DisplayMode::Depth {
                write!(out, "Leaf: ")?;
            }
            for i in 0..node.num_keys() {
                if i == 0 && mode != DisplayMode::SortedKeyval {
                    // the raw first pointer slot, as the on-disk dump shows it
                    write!(out, "*{} ", node.get_ptr(0)?)?;
                }
                if mode == DisplayMode::SortedKeyval {
                    out.write_all(b"(")?;
                }
                out.write_all(node.get_key(i)?)?;
                let (mid, end): (&[u8], &[u8]) = if mode == DisplayMode::SortedKeyval {
                    (b",", b")\n")
                } else {
                    (b" ", b" ")
                };
                out.write_all(mid)?;
                out.write_all(node.get_val(i)?)?;
                out.write_all(end)?;
            }
        }
        _ => return Err(IndexError::Insane("display reached a non-tree node")),
    }

    if mode == DisplayMode::DepthDot {
        write!(out, "\" ]")?;
    }
    Ok(())
}
