//! `big_endian_int` (§4.D): the unsigned integer codec. Minimal big-endian
//! byte string, empty for zero; rejects leading-zero encodings on decode.

use std::marker::PhantomData;

use crate::bytes::Bytes;
use crate::error::{RlpError, RlpResult};
use crate::tree::Tree;

use super::Sedes;

/// Sealed trait over the closed set of unsigned integer widths
/// `BigEndianInt` accepts: strip leading zero bytes on encode, reject
/// leading-zero or over-width encodings on decode.
pub trait UintBytes: Copy + Eq + std::fmt::Debug + private::Sealed {
    /// Big-endian byte representation at this type's full width.
    fn to_be_bytes_vec(self) -> Vec<u8>;

    /// Reconstruct from a big-endian byte slice no wider than this type.
    fn from_be_slice(bytes: &[u8]) -> Self;
}

mod private {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for u128 {}
    impl Sealed for usize {}
}

macro_rules! impl_uint_bytes {
    ($($t:ty),+ $(,)?) => {
        $(
            impl UintBytes for $t {
                fn to_be_bytes_vec(self) -> Vec<u8> {
                    self.to_be_bytes().to_vec()
                }

                fn from_be_slice(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf[std::mem::size_of::<$t>() - bytes.len()..].copy_from_slice(bytes);
                    <$t>::from_be_bytes(buf)
                }
            }
        )+
    };
}

impl_uint_bytes!(u8, u16, u32, u64, u128, usize);

/// The unsigned integer sedes, generic over a closed set of widths via
/// [`UintBytes`]. A zero-sized marker; `BigEndianInt<u64>` is the sedes for
/// `u64` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigEndianInt<T>(PhantomData<T>);

impl<T: UintBytes> Sedes for BigEndianInt<T> {
    type Value = T;

    fn serialize(value: &T) -> RlpResult<Tree> {
        let be = value.to_be_bytes_vec();
        let first_nonzero = be.iter().position(|&b| b != 0).unwrap_or(be.len());
        Ok(Tree::leaf(&be[first_nonzero..]))
    }

    fn deserialize(tree: &Tree) -> RlpResult<T> {
        let bytes: &Bytes = tree
            .as_leaf()
            .ok_or(RlpError::DeserializationError("expected a leaf, found a list"))?;
        if bytes.len() > std::mem::size_of::<T>() {
            return Err(RlpError::DeserializationError("integer too wide for target type"));
        }
        if !bytes.is_empty() && bytes[0] == 0 {
            return Err(RlpError::DeserializationError("leading zero byte in integer encoding"));
        }
        Ok(T::from_be_slice(bytes))
    }
}
