use crate::bytes::Bytes;
use crate::facade::{decode_record, encode_record};
use crate::raw;
use crate::record::{Nested, Record};
use crate::sedes::{BigEndianInt, Binary};
use crate::tree::Tree;

// `impl_record!` already generates Debug/Clone/PartialEq/Eq (excluding the
// cache field from equality); no derive needed here.
crate::impl_record! {
    pub struct Pair {
        a: u64 => BigEndianInt<u64>,
        b: Bytes => Binary,
    }
}

crate::impl_record! {
    pub struct Wrapper {
        inner: Pair => Nested<Pair>,
        n: u64 => BigEndianInt<u64>,
    }
}

#[test]
fn record_round_trips_through_encode_decode() {
    let pair = Pair::new(1024, Bytes::from(b"dog"));
    let encoded = encode_record(&pair, true).unwrap();
    let decoded: Pair = decode_record(&encoded, true).unwrap();
    assert_eq!(decoded, pair);
}

#[test]
fn cache_is_populated_after_encode() {
    let pair = Pair::new(7, Bytes::from(b"cat"));
    assert!(pair.cache().get().is_none());
    let encoded = encode_record(&pair, true).unwrap();
    assert_eq!(pair.cache().get().unwrap(), encoded);
}

#[test]
fn cache_consistency_property() {
    // §8 property 5: encode(r) == encode(r) with cache cleared.
    let pair = Pair::new(1024, Bytes::from(b"dog"));
    let first = encode_record(&pair, true).unwrap();
    pair.cache().clear();
    let second = encode_record(&pair, true).unwrap();
    assert_eq!(first, second);
}

#[test]
fn uncached_encode_does_not_populate_cache() {
    let pair = Pair::new(5, Bytes::from(b"cat"));
    let _ = encode_record(&pair, false).unwrap();
    assert!(pair.cache().get().is_none());
}

#[test]
fn clone_does_not_carry_over_cache() {
    let pair = Pair::new(5, Bytes::from(b"cat"));
    let _ = encode_record(&pair, true).unwrap();
    assert!(pair.cache().get().is_some());
    let cloned = pair.clone();
    assert!(cloned.cache().get().is_none());
    assert_eq!(cloned, pair);
}

#[test]
fn equality_ignores_cache_state() {
    let a = Pair::new(5, Bytes::from(b"cat"));
    let b = Pair::new(5, Bytes::from(b"cat"));
    let _ = encode_record(&a, true).unwrap();
    assert!(a.cache().get().is_some());
    assert!(b.cache().get().is_none());
    assert_eq!(a, b);
}

#[test]
fn nested_record_attaches_cache_on_decode() {
    let wrapper = Wrapper::new(Pair::new(42, Bytes::from(b"dog")), 9);
    let encoded = encode_record(&wrapper, true).unwrap();
    let decoded: Wrapper = decode_record(&encoded, true).unwrap();
    assert_eq!(decoded, wrapper);

    // The nested record's own cache was populated during decode, with its
    // own slice, computed independently of the outer record's cache.
    let expected_inner = raw::encode(&Tree::List(decoded.inner.serialize_fields().unwrap())).unwrap();
    assert_eq!(decoded.inner.cache().get().unwrap(), expected_inner);
}

#[test]
fn field_count_mismatch_is_deserialization_error() {
    let too_few = Tree::list([Tree::leaf(b"\x07")]);
    let encoded = raw::encode(&too_few).unwrap();
    let result: Result<Pair, _> = decode_record(&encoded, true);
    assert!(result.is_err());
}
