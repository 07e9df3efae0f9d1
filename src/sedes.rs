//! The codec registry (§4.D): the `Sedes` interface and the four built-in
//! leaf codecs (`BigEndianInt`, `Binary`, `Boolean`, `Text`) plus the
//! fixed-arity and homogeneous `List` codecs, all implemented in-tree so
//! `infer_sedes` and the round-trip properties in §8 are testable without
//! depending on another crate.

use crate::bytes::Bytes;
use crate::error::{RlpError, RlpResult};
use crate::tree::Tree;

mod int;
mod list;

pub use int::{BigEndianInt, UintBytes};
pub use list::{List, List2, List3};

/// A stateless codec between a Rust value and a [`Tree`].
///
/// Sedes methods take no `&self`: per §3, "sedes instances are stateless",
/// and every built-in sedes in this module is a zero-sized marker type, so
/// dispatch is purely on `Self::Value` rather than on any runtime state.
pub trait Sedes {
    /// The Rust value this sedes serializes and deserializes.
    type Value;

    /// Lift a value into a [`Tree`].
    fn serialize(value: &Self::Value) -> RlpResult<Tree>;

    /// Project a [`Tree`] back into a value.
    fn deserialize(tree: &Tree) -> RlpResult<Self::Value>;
}

/// Arbitrary byte string, identity mapping onto a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binary;

impl Sedes for Binary {
    type Value = Bytes;

    fn serialize(value: &Bytes) -> RlpResult<Tree> {
        Ok(Tree::Leaf(value.clone()))
    }

    fn deserialize(tree: &Tree) -> RlpResult<Bytes> {
        tree.as_leaf()
            .cloned()
            .ok_or(RlpError::DeserializationError("expected a leaf, found a list"))
    }
}

/// `true ↔ 0x01`, `false ↔ empty` (§4.D).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boolean;

impl Sedes for Boolean {
    type Value = bool;

    fn serialize(value: &bool) -> RlpResult<Tree> {
        Ok(Tree::leaf(if *value { &b"\x01"[..] } else { &b""[..] }))
    }

    fn deserialize(tree: &Tree) -> RlpResult<bool> {
        let bytes = tree
            .as_leaf()
            .ok_or(RlpError::DeserializationError("expected a leaf, found a list"))?;
        match &bytes[..] {
            [] => Ok(false),
            [0x01] => Ok(true),
            _ => Err(RlpError::DeserializationError("invalid boolean encoding")),
        }
    }
}

/// UTF-8 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text;

impl Sedes for Text {
    type Value = String;

    fn serialize(value: &String) -> RlpResult<Tree> {
        Ok(Tree::leaf(value.as_bytes()))
    }

    fn deserialize(tree: &Tree) -> RlpResult<String> {
        let bytes = tree
            .as_leaf()
            .ok_or(RlpError::DeserializationError("expected a leaf, found a list"))?;
        String::from_utf8(bytes.0.clone())
            .map_err(|_| RlpError::DeserializationError("not valid utf-8"))
    }
}
