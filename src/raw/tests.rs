use super::*;
use crate::error::{NonCanonicalKind, RlpError};

fn dog() -> Tree {
    Tree::leaf(b"dog")
}

#[test]
fn boundary_vectors_encode() {
    assert_eq!(encode(&Tree::leaf(b"")).unwrap().0, vec![0x80]);
    assert_eq!(encode(&Tree::leaf(b"\x00")).unwrap().0, vec![0x00]);
    assert_eq!(encode(&Tree::leaf(b"\x7f")).unwrap().0, vec![0x7f]);
    assert_eq!(encode(&Tree::leaf(b"\x80")).unwrap().0, vec![0x81, 0x80]);

    let fifty_five = vec![b'a'; 55];
    let mut expected = vec![0xB7u8];
    expected.extend_from_slice(&fifty_five);
    assert_eq!(encode(&Tree::leaf(&fifty_five[..])).unwrap().0, expected);

    let fifty_six = vec![b'a'; 56];
    let mut expected = vec![0xB8u8, 56];
    expected.extend_from_slice(&fifty_six);
    assert_eq!(encode(&Tree::leaf(&fifty_six[..])).unwrap().0, expected);

    assert_eq!(encode(&Tree::list([])).unwrap().0, vec![0xC0]);

    let cat_dog = Tree::list([Tree::leaf(b"cat"), dog()]);
    assert_eq!(
        encode(&cat_dog).unwrap().0,
        vec![0xC8, 0x83, 0x63, 0x61, 0x74, 0x83, 0x64, 0x6F, 0x67]
    );
}

#[test]
fn roundtrip_nested_tree() {
    let tree = Tree::list([
        Tree::leaf(b""),
        Tree::list([Tree::leaf(b"cat"), Tree::leaf(b"dog")]),
        Tree::leaf(b"\xff\xff\xff\xff"),
    ]);
    let encoded = encode(&tree).unwrap();
    let (decorated, end) = decode(&encoded, 0).unwrap();
    assert_eq!(end, encoded.len());
    assert_eq!(decorated.into_tree(), tree);
}

#[test]
fn decode_is_inverse_of_encode_on_bytes() {
    let tree = Tree::list([Tree::leaf(b"a"), Tree::leaf(b"bcdefg")]);
    let encoded = encode(&tree).unwrap();
    let (decorated, end) = decode(&encoded, 0).unwrap();
    assert_eq!(end, encoded.len());
    let re_encoded = encode(&decorated.into_tree()).unwrap();
    assert_eq!(re_encoded, encoded);
}

#[test]
fn negative_vectors() {
    assert_eq!(
        decode(&[0x81, 0x7F], 0).unwrap_err(),
        RlpError::NonCanonical(NonCanonicalKind::ShortStringSingleByte)
    );
    assert_eq!(
        decode(&[0xB8, 0x37], 0).unwrap_err(),
        RlpError::NonCanonical(NonCanonicalKind::LongFormForShortLength)
    );
    assert_eq!(
        decode(&[0xB9, 0x00, 0x40], 0).unwrap_err(),
        RlpError::NonCanonical(NonCanonicalKind::LeadingZeroLength)
    );
}

#[test]
fn list_length_mismatch_when_child_overshoots() {
    // A list declaring payload length 3, whose single child is a 3-byte
    // short string (`0x83 'a' 'b' 'c'`, 4 bytes total including its own
    // prefix) that overruns the declared parent length by one byte.
    let data = [0xC3, 0x83, b'a', b'b', b'c'];
    let err = decode(&data, 0).unwrap_err();
    assert_eq!(err, RlpError::ListLengthMismatch);
}

#[test]
fn recursion_depth_exceeded() {
    let mut encoded = vec![0xC0u8];
    for _ in 0..(MAX_RLP_DEPTH + 5) {
        let mut wrapped = vec![0xC0 + encoded.len() as u8];
        wrapped.extend_from_slice(&encoded);
        encoded = wrapped;
    }
    assert_eq!(
        decode(&encoded, 0).unwrap_err(),
        RlpError::RecursionDepthExceeded
    );
}

#[test]
fn own_slice_round_trips_for_cache_assignment() {
    let tree = Tree::list([Tree::leaf(b"dog")]);
    let encoded = encode(&tree).unwrap();
    let (decorated, _) = decode(&encoded, 0).unwrap();
    assert_eq!(decorated.own_slice(), &encoded);
}

#[test]
fn hex_test_vectors() {
    let cat_dog = Tree::list([Tree::leaf(b"cat"), dog()]);
    assert_eq!(encode(&cat_dog).unwrap().0, hex::decode("c88363617483646f67").unwrap());

    let lorem = vec![b'a'; 56];
    let expected = format!("b838{}", "61".repeat(56));
    assert_eq!(encode(&Tree::leaf(&lorem[..])).unwrap().0, hex::decode(expected).unwrap());
}
