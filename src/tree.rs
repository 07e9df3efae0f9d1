//! The recursive tree data model (§3): the raw domain the codec encodes
//! from and decodes to, before any sedes is applied.

use crate::bytes::Bytes;

/// A value that is either a leaf (atomic byte string) or an ordered
/// sequence of further trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    /// An atomic byte string.
    Leaf(Bytes),
    /// An ordered, arbitrarily nested sequence of trees.
    List(Vec<Tree>),
}

impl Tree {
    /// Build a leaf from anything that can be viewed as bytes.
    pub fn leaf(bytes: impl Into<Bytes>) -> Self {
        Tree::Leaf(bytes.into())
    }

    /// Build a list from an iterator of trees.
    pub fn list(items: impl IntoIterator<Item = Tree>) -> Self {
        Tree::List(items.into_iter().collect())
    }

    /// Borrow the leaf bytes, if this is a leaf.
    pub fn as_leaf(&self) -> Option<&Bytes> {
        match self {
            Tree::Leaf(b) => Some(b),
            Tree::List(_) => None,
        }
    }

    /// Borrow the child list, if this is a list.
    pub fn as_list(&self) -> Option<&[Tree]> {
        match self {
            Tree::Leaf(_) => None,
            Tree::List(items) => Some(items),
        }
    }
}

/// A decoded [`Tree`] paired with the exact input slice that produced each
/// node (§3, "Decoded-with-provenance").
///
/// For a leaf, the provenance is `prefix ++ bytes`, the full encoded slice
/// for that node. For a list, it is `[own_prefix, child1_slice, child2_slice, …]`,
/// matching the shape `_split_rlp_from_item` builds in the original
/// implementation: a flat list where position 0 is this node's own prefix
/// and subsequent positions are each child's full encoded slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decorated {
    /// A leaf, with its value and the full slice (prefix + value) that
    /// encoded it.
    Leaf { value: Bytes, encoded: Bytes },
    /// A list, with its decoded children and the per-node slice list
    /// described above.
    List {
        children: Vec<Decorated>,
        slices: Vec<Bytes>,
    },
}

impl Decorated {
    /// Strip provenance, recovering the bare [`Tree`].
    pub fn into_tree(self) -> Tree {
        match self {
            Decorated::Leaf { value, .. } => Tree::Leaf(value),
            Decorated::List { children, .. } => {
                Tree::List(children.into_iter().map(Decorated::into_tree).collect())
            }
        }
    }

    /// The full encoded slice (including prefix) that produced this node.
    pub fn own_slice(&self) -> &Bytes {
        match self {
            Decorated::Leaf { encoded, .. } => encoded,
            Decorated::List { slices, .. } => &slices[0],
        }
    }
}
