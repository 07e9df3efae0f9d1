//! `List(subsedes…)` (§4.D): fixed-arity tuple sedes, plus a homogeneous
//! variant over `Vec<T>` for a single repeated sub-sedes.
//!
//! Fixed arities 2 and 3 cover the fixed-shape tuple codecs this crate
//! needs; a field needing more positional structure than that should use
//! [`crate::impl_record!`] instead, which has no arity ceiling.

use std::marker::PhantomData;

use crate::error::{RlpError, RlpResult};
use crate::tree::Tree;

use super::Sedes;

macro_rules! impl_list_tuple {
    ($name:ident, $arity:literal, $($sedes:ident => $idx:tt),+) => {
        /// Fixed-arity tuple sedes.
        pub struct $name<$($sedes),+>(PhantomData<($($sedes),+,)>);

        impl<$($sedes: Sedes),+> Sedes for $name<$($sedes),+> {
            type Value = ($($sedes::Value),+,);

            fn serialize(value: &Self::Value) -> RlpResult<Tree> {
                Ok(Tree::list([
                    $($sedes::serialize(&value.$idx)?),+
                ]))
            }

            fn deserialize(tree: &Tree) -> RlpResult<Self::Value> {
                let items = tree
                    .as_list()
                    .ok_or(RlpError::DeserializationError("expected a list, found a leaf"))?;
                if items.len() != $arity {
                    return Err(RlpError::DeserializationError("list arity mismatch"));
                }
                Ok(($($sedes::deserialize(&items[$idx])?),+,))
            }
        }
    };
}

impl_list_tuple!(List2, 2, A => 0, B => 1);
impl_list_tuple!(List3, 3, A => 0, B => 1, C => 2);

/// Homogeneous list: every element shares the sub-sedes `S`.
pub struct List<S>(PhantomData<S>);

impl<S: Sedes> Sedes for List<S> {
    type Value = Vec<S::Value>;

    fn serialize(value: &Vec<S::Value>) -> RlpResult<Tree> {
        let items = value
            .iter()
            .map(S::serialize)
            .collect::<RlpResult<Vec<_>>>()?;
        Ok(Tree::List(items))
    }

    fn deserialize(tree: &Tree) -> RlpResult<Vec<S::Value>> {
        let items = tree
            .as_list()
            .ok_or(RlpError::DeserializationError("expected a list, found a leaf"))?;
        items.iter().map(S::deserialize).collect()
    }
}
