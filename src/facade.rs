//! The public façade (§4.G): `encode`/`decode` entry points wiring sedes
//! selection, caching, and strictness together.
//!
//! A single dynamically-typed `encode`/`decode` pair, parameterized by an
//! optional sedes and an "infer one" flag over an `Any`-typed value,
//! doesn't translate to one generic Rust function without losing static
//! typing, so this fans out into a small family of monomorphic entry
//! points instead: one pair per static input/output shape.

use crate::bytes::Bytes;
use crate::error::{RlpError, RlpResult};
use crate::infer::infer_sedes;
use crate::raw;
use crate::record::Record;
use crate::tree::{Decorated, Tree};
use crate::value::Value;

/// Encode a [`Tree`] the caller already built by hand (§4.G step 3's
/// "already a Tree" branch, plus step 4). No cache applies: a bare `Tree`
/// is not a [`Record`].
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
pub fn encode_tree(tree: &Tree) -> RlpResult<Bytes> {
    raw::encode(tree)
}

/// Infer a sedes for `value`, serialize, and raw-encode. No cache applies
/// (`Value` is not a [`Record`]).
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
pub fn encode_value(value: &Value) -> RlpResult<Bytes> {
    let tree = infer_sedes(value)?.serialize(value)?;
    raw::encode(&tree)
}

/// Encode a [`Record`], honoring its cache per §4.G steps 1, 2, 5.
///
/// If `record` already has a non-empty cache, that value is returned
/// directly without re-serializing (step 1). Otherwise the record is
/// serialized to a tree of its fields and raw-encoded; if `cache` is true,
/// the result is stored in the record's cache slot before being returned
/// (steps 2, 5).
///
/// Unlike the conceptual `encode_record(record, cache) -> Bytes` surface in
/// §6.1, this returns [`RlpResult<Bytes>`]: `Record::serialize_fields` can
/// fail (a field's sedes refusing a value), and that failure must surface
/// rather than be swallowed. See `DESIGN.md` Open Questions.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, fields(cache)))]
pub fn encode_record<R: Record>(record: &R, cache: bool) -> RlpResult<Bytes> {
    if let Some(cached) = record.cache().get() {
        return Ok(cached);
    }
    let tree = Tree::List(record.serialize_fields()?);
    let result = raw::encode(&tree)?;
    if cache {
        record.cache().set(result.clone());
    }
    Ok(result)
}

/// Raw-decode `data` honoring strict/non-strict trailing-byte policy, and
/// return the bare [`Tree`] with all provenance discarded (§4.G steps 1-4,
/// "sedes not supplied" branch of step 5).
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(len = data.len(), strict))
)]
pub fn decode_tree(data: &[u8], strict: bool) -> RlpResult<Tree> {
    Ok(decode_decorated(data, strict)?.into_tree())
}

/// Same as [`decode_tree`], but lifts the bare tree into a [`Value`]
/// (leaves become [`Value::Bytes`], lists become [`Value::Seq`]) rather
/// than returning the undifferentiated `Tree`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(len = data.len(), strict))
)]
pub fn decode_value(data: &[u8], strict: bool) -> RlpResult<Value> {
    Ok(Value::from(decode_tree(data, strict)?))
}

/// Decode `data` into a [`Record`] `R`, attaching per-node encoded slices
/// into the cache of `R` (and of any nested records) along the way.
///
/// `R::deserialize_fields` is handed the decoded children directly, rather
/// than a separately-threaded slice list the way the original's
/// `_apply_rlp_cache` pops through a flat list: each nested [`Record`]
/// field (via [`crate::record::Nested`]) attaches its own slice to its own
/// cache as part of the same recursive construction pass (§4.G.1). The
/// outer record's own slice is attached here, after construction.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all, fields(len = data.len(), strict))
)]
pub fn decode_record<R: Record>(data: &[u8], strict: bool) -> RlpResult<R> {
    let decorated = decode_decorated(data, strict)?;
    let children = match &decorated {
        Decorated::List { children, .. } => children,
        Decorated::Leaf { .. } => {
            return Err(RlpError::DeserializationError(
                "expected a list to decode a record, found a leaf",
            ))
        }
    };
    let record = R::deserialize_fields(children)?;
    record.cache().set(decorated.own_slice().clone());
    Ok(record)
}

fn decode_decorated(data: &[u8], strict: bool) -> RlpResult<Decorated> {
    let (decorated, end) = raw::decode(data, 0)?;
    if strict && end != data.len() {
        return Err(RlpError::TrailingBytes);
    }
    Ok(decorated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sedes::{Binary, Sedes};

    #[test]
    fn encode_tree_matches_raw_encode() {
        let tree = Tree::list([Tree::leaf(b"cat"), Tree::leaf(b"dog")]);
        assert_eq!(encode_tree(&tree).unwrap(), raw::encode(&tree).unwrap());
    }

    #[test]
    fn encode_value_infers_and_encodes() {
        let value = Value::Bytes(crate::bytes::Bytes::from(b"dog"));
        let expected = raw::encode(&Binary::serialize(&crate::bytes::Bytes::from(b"dog")).unwrap()).unwrap();
        assert_eq!(encode_value(&value).unwrap(), expected);
    }

    #[test]
    fn decode_tree_non_strict_ignores_trailing_bytes() {
        let mut data = raw::encode(&Tree::leaf(b"dog")).unwrap().0;
        data.push(0xFF);
        assert!(decode_tree(&data, true).is_err());
        let tree = decode_tree(&data, false).unwrap();
        assert_eq!(tree, Tree::leaf(b"dog"));
    }

    #[test]
    fn decode_value_lifts_lists_and_bytes() {
        let tree = Tree::list([Tree::leaf(b"cat"), Tree::leaf(b"dog")]);
        let encoded = raw::encode(&tree).unwrap();
        let value = decode_value(&encoded, true).unwrap();
        assert_eq!(
            value,
            Value::Seq(vec![
                Value::Bytes(crate::bytes::Bytes::from(b"cat")),
                Value::Bytes(crate::bytes::Bytes::from(b"dog")),
            ])
        );
    }

    proptest::proptest! {
        #![proptest_config(proptest::prelude::ProptestConfig::with_cases(256))]

        /// `decode_tree`/`decode_value` must return `Result`, never panic, on
        /// arbitrary byte input, in either strictness mode.
        #[test]
        fn fuzz_decode_tree_never_panics(
            data in proptest::collection::vec(proptest::prelude::any::<u8>(), 0..1024),
            strict in proptest::prelude::any::<bool>(),
        ) {
            let _ = decode_tree(&data, strict);
            let _ = decode_value(&data, strict);
        }
    }
}
