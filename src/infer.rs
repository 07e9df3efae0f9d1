//! Type inference (§4.E): mapping an in-memory [`Value`] to an appropriate
//! sedes, in the order the rules for `infer_sedes` specify.
//!
//! Rust has no runtime type introspection over an open set of host types.
//! Rule 1 ("value's declared type is itself a sedes") is handled
//! statically instead: any type implementing [`crate::record::Record`]
//! *is* its own sedes at compile time, so a caller holding a concrete
//! record value calls [`crate::facade::encode_record`] directly and never
//! reaches this module. `infer_sedes` here operates only over the closed,
//! dynamic [`Value`] enum, an explicit dispatch table keyed by a closed
//! set of value tags.

use crate::error::{RlpError, RlpResult};
use crate::tree::Tree;
use crate::value::Value;

/// A sedes chosen dynamically by [`infer_sedes`], mirroring `Value`'s shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferredSedes {
    /// `big_endian_int`.
    BigEndianInt,
    /// `binary`.
    Binary,
    /// `boolean`.
    Boolean,
    /// `text`.
    Text,
    /// A `List` whose elements are each the recursively inferred sedes of
    /// the corresponding child (rule 4).
    List(Vec<InferredSedes>),
}

impl InferredSedes {
    /// Serialize `value` using this inferred sedes. Fails with
    /// `SerializationError` if `value`'s shape no longer matches the sedes
    /// it was inferred from (e.g. a `List` sedes applied to a `Seq` of
    /// different length).
    pub fn serialize(&self, value: &Value) -> RlpResult<Tree> {
        match (self, value) {
            (InferredSedes::BigEndianInt, Value::UInt(n)) => {
                let be = n.to_be_bytes();
                let first_nonzero = be.iter().position(|&b| b != 0).unwrap_or(be.len());
                Ok(Tree::leaf(&be[first_nonzero..]))
            }
            (InferredSedes::Binary, Value::Bytes(b)) => Ok(Tree::Leaf(b.clone())),
            (InferredSedes::Boolean, Value::Bool(b)) => {
                Ok(Tree::leaf(if *b { &b"\x01"[..] } else { &b""[..] }))
            }
            (InferredSedes::Text, Value::Text(s)) => Ok(Tree::leaf(s.as_bytes())),
            (InferredSedes::List(subs), Value::Seq(items)) => {
                if subs.len() != items.len() {
                    return Err(RlpError::SerializationError(
                        "value shape no longer matches its inferred List sedes",
                    ));
                }
                let trees = subs
                    .iter()
                    .zip(items)
                    .map(|(sub, item)| sub.serialize(item))
                    .collect::<RlpResult<Vec<_>>>()?;
                Ok(Tree::List(trees))
            }
            _ => Err(RlpError::SerializationError(
                "value shape does not match its inferred sedes",
            )),
        }
    }

    /// Project a [`Tree`] back into a [`Value`] under this inferred sedes.
    /// Counterpart to [`Self::serialize`], used to round-trip a `Value`
    /// under the sedes `infer_sedes` chose for it (§8 property 4).
    pub fn deserialize(&self, tree: &Tree) -> RlpResult<Value> {
        match self {
            InferredSedes::BigEndianInt => {
                let bytes = tree.as_leaf().ok_or(RlpError::DeserializationError(
                    "expected a leaf, found a list",
                ))?;
                if bytes.len() > 16 {
                    return Err(RlpError::DeserializationError("integer too wide for u128"));
                }
                if !bytes.is_empty() && bytes[0] == 0 {
                    return Err(RlpError::DeserializationError(
                        "leading zero byte in integer encoding",
                    ));
                }
                let mut buf = [0u8; 16];
                buf[16 - bytes.len()..].copy_from_slice(bytes);
                Ok(Value::UInt(u128::from_be_bytes(buf)))
            }
            InferredSedes::Binary => {
                let bytes = tree.as_leaf().ok_or(RlpError::DeserializationError(
                    "expected a leaf, found a list",
                ))?;
                Ok(Value::Bytes(bytes.clone()))
            }
            InferredSedes::Boolean => {
                let bytes = tree.as_leaf().ok_or(RlpError::DeserializationError(
                    "expected a leaf, found a list",
                ))?;
                match &bytes[..] {
                    [] => Ok(Value::Bool(false)),
                    [0x01] => Ok(Value::Bool(true)),
                    _ => Err(RlpError::DeserializationError("invalid boolean encoding")),
                }
            }
            InferredSedes::Text => {
                let bytes = tree.as_leaf().ok_or(RlpError::DeserializationError(
                    "expected a leaf, found a list",
                ))?;
                let text = String::from_utf8(bytes.0.clone())
                    .map_err(|_| RlpError::DeserializationError("not valid utf-8"))?;
                Ok(Value::Text(text))
            }
            InferredSedes::List(subs) => {
                let items = tree.as_list().ok_or(RlpError::DeserializationError(
                    "expected a list, found a leaf",
                ))?;
                if subs.len() != items.len() {
                    return Err(RlpError::DeserializationError("list arity mismatch"));
                }
                let values = subs
                    .iter()
                    .zip(items)
                    .map(|(sub, item)| sub.deserialize(item))
                    .collect::<RlpResult<Vec<_>>>()?;
                Ok(Value::Seq(values))
            }
        }
    }
}

/// Select a sedes for `value` by the ordered rules in §4.E. The first
/// matching rule wins; boolean is checked ahead of integer (written
/// boolean-first even though `Value::Bool`/`Value::UInt` are already
/// disjoint variants, to keep the implementation visibly traceable back to
/// the rule list) though the two can never overlap in this representation.
pub fn infer_sedes(value: &Value) -> RlpResult<InferredSedes> {
    match value {
        Value::Bool(_) => Ok(InferredSedes::Boolean),
        Value::UInt(_) => Ok(InferredSedes::BigEndianInt),
        Value::Bytes(_) => Ok(InferredSedes::Binary),
        Value::Seq(items) => {
            let subs = items
                .iter()
                .map(infer_sedes)
                .collect::<RlpResult<Vec<_>>>()?;
            Ok(InferredSedes::List(subs))
        }
        Value::Text(_) => Ok(InferredSedes::Text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytes::Bytes;

    #[test]
    fn infers_each_variant() {
        assert_eq!(infer_sedes(&Value::Bool(true)).unwrap(), InferredSedes::Boolean);
        assert_eq!(infer_sedes(&Value::UInt(7)).unwrap(), InferredSedes::BigEndianInt);
        assert_eq!(
            infer_sedes(&Value::Bytes(Bytes::from(b"dog"))).unwrap(),
            InferredSedes::Binary
        );
        assert_eq!(infer_sedes(&Value::Text("cat".into())).unwrap(), InferredSedes::Text);
    }

    #[test]
    fn infers_nested_list_recursively() {
        let value = Value::Seq(vec![Value::UInt(1), Value::Seq(vec![Value::Bool(true)])]);
        assert_eq!(
            infer_sedes(&value).unwrap(),
            InferredSedes::List(vec![
                InferredSedes::BigEndianInt,
                InferredSedes::List(vec![InferredSedes::Boolean]),
            ])
        );
    }

    #[test]
    fn inference_soundness_roundtrip() {
        // Property 4 (§8): decode(encode(v), infer_sedes(v)) == v.
        let value = Value::Seq(vec![
            Value::UInt(1024),
            Value::Bytes(Bytes::from(b"dog")),
            Value::Bool(true),
            Value::Text("cat".into()),
        ]);
        let sedes = infer_sedes(&value).unwrap();
        let tree = sedes.serialize(&value).unwrap();
        let encoded = crate::raw::encode(&tree).unwrap();
        let (decorated, end) = crate::raw::decode(&encoded, 0).unwrap();
        assert_eq!(end, encoded.len());
        let round_tripped = sedes.deserialize(&decorated.into_tree()).unwrap();
        assert_eq!(round_tripped, value);
    }

    fn arb_value() -> impl proptest::strategy::Strategy<Value = Value> {
        use proptest::prelude::*;

        let leaf = prop_oneof![
            any::<u128>().prop_map(Value::UInt),
            proptest::collection::vec(any::<u8>(), 0..32).prop_map(|b| Value::Bytes(Bytes::from(&b[..]))),
            any::<bool>().prop_map(Value::Bool),
            "[a-zA-Z0-9 ]{0,32}".prop_map(Value::Text),
        ];
        leaf.prop_recursive(4, 32, 6, |inner| {
            proptest::collection::vec(inner, 0..6).prop_map(Value::Seq)
        })
    }

    proptest::proptest! {
        #![proptest_config(proptest::prelude::ProptestConfig::with_cases(256))]

        /// §8 property 4: decode(encode(v), infer_sedes(v)) == v for
        /// arbitrary values, not just the hand-picked one above.
        #[test]
        fn fuzz_inference_soundness_roundtrip(value in arb_value()) {
            let sedes = infer_sedes(&value).unwrap();
            let tree = sedes.serialize(&value).unwrap();
            let encoded = crate::raw::encode(&tree).unwrap();
            let (decorated, end) = crate::raw::decode(&encoded, 0).unwrap();
            proptest::prop_assert_eq!(end, encoded.len());
            let round_tripped = sedes.deserialize(&decorated.into_tree()).unwrap();
            proptest::prop_assert_eq!(round_tripped, value);
        }
    }
}
