//! The dynamic value domain (§4.E): "a value without a statically known
//! sedes". [`infer_sedes`](crate::infer::infer_sedes) dispatches on this
//! enum's shape, and [`decode_value`](crate::facade::decode_value) lifts a
//! bare [`Tree`] into one when no sedes is supplied to decode.

use crate::bytes::Bytes;
use crate::tree::Tree;

/// A value whose sedes must be chosen dynamically, mirroring the closed set
/// of types `infer_sedes` recognizes in the original implementation
/// (`int`, `bool`, bytes-like, `str`, and `Sequence`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An unsigned integer, inferred to `big_endian_int`.
    UInt(u128),
    /// An arbitrary byte string, inferred to `binary`.
    Bytes(Bytes),
    /// A boolean, inferred to `boolean`.
    Bool(bool),
    /// UTF-8 text, inferred to `text`.
    Text(String),
    /// An ordered, arbitrarily nested sequence, inferred to a `List`.
    Seq(Vec<Value>),
}

impl Value {
    /// Lift a bare [`Tree`] into a `Value`, reading leaves as
    /// [`Value::Bytes`] and lists as [`Value::Seq`]: the natural dynamic
    /// reading of an undifferentiated tree. Never chooses
    /// `UInt`/`Bool`/`Text` for a leaf, since a bare `Tree` carries no type
    /// information beyond leaf-vs-list.
    pub fn from_tree(tree: &Tree) -> Self {
        match tree {
            Tree::Leaf(bytes) => Value::Bytes(bytes.clone()),
            Tree::List(items) => Value::Seq(items.iter().map(Value::from_tree).collect()),
        }
    }
}

impl From<&Tree> for Value {
    fn from(tree: &Tree) -> Self {
        Value::from_tree(tree)
    }
}

impl From<Tree> for Value {
    fn from(tree: Tree) -> Self {
        Value::from_tree(&tree)
    }
}
