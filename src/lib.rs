//! A canonical Recursive Length Prefix (RLP) codec: the bidirectional
//! mapping between a recursive tree of byte strings and a canonical flat
//! byte sequence, together with the type-directed "sedes" layer that lifts
//! higher-level values into that tree and projects them back.
//!
//! RLP is the serialization used throughout the Ethereum stack for blocks,
//! transactions, and state trie nodes. This crate implements the strict,
//! canonicalizing encoder/decoder and the pluggable serializer layer that
//! sits atop it; it does not implement any Ethereum-specific wire format
//! (blocks, transactions, trie nodes) itself.
//!
//! ```
//! use rlp_codec::{raw, Tree};
//!
//! let tree = Tree::list([Tree::leaf(b"cat"), Tree::leaf(b"dog")]);
//! let encoded = raw::encode(&tree).unwrap();
//! assert_eq!(
//!     &encoded[..],
//!     &[0xC8, 0x83, 0x63, 0x61, 0x74, 0x83, 0x64, 0x6F, 0x67][..],
//! );
//!
//! let (decorated, end) = raw::decode(&encoded, 0).unwrap();
//! assert_eq!(end, encoded.len());
//! assert_eq!(decorated.into_tree(), tree);
//! ```
//!
//! # Layers
//!
//! - [`bytes`] / [`tree`]: the atomic leaf value and the recursive tree
//!   that is the raw domain of the codec (§3).
//! - [`prefix`] / [`raw`]: the length-prefix framing and the raw
//!   encode/decode pass between a [`Tree`] and its canonical bytes (§4.B,
//!   §4.C).
//! - [`sedes`]: the codec registry, the `Sedes` trait and the built-in
//!   `BigEndianInt`/`Binary`/`Boolean`/`Text`/`List` codecs (§4.D).
//! - [`value`] / [`infer`]: the dynamic `Value` domain and `infer_sedes`,
//!   which chooses a sedes from a value's shape (§4.E).
//! - [`record`]: the `Record` trait, `impl_record!` macro, and the
//!   encoded-form cache (§4.F).
//! - [`facade`]: the `encode_*`/`decode_*` entry points wiring sedes
//!   selection, caching, and strictness together (§4.G).

pub mod bytes;
pub mod error;
pub mod facade;
pub mod infer;
pub mod prefix;
pub mod raw;
pub mod record;
pub mod sedes;
pub mod tree;
pub mod value;

pub use bytes::Bytes;
pub use error::{NonCanonicalKind, RlpError, RlpResult};
pub use facade::{decode_record, decode_tree, decode_value, encode_record, encode_tree, encode_value};
pub use infer::{infer_sedes, InferredSedes};
pub use record::{FieldCodec, Nested, Record, RlpCache};
pub use sedes::{BigEndianInt, Binary, Boolean, List, List2, List3, Sedes, Text, UintBytes};
pub use tree::{Decorated, Tree};
pub use value::Value;
