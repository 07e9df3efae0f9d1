//! The raw RLP codec (§4.C): encoding a [`Tree`] to bytes and decoding bytes
//! back to a [`Decorated`] tree.

use crate::bytes::Bytes;
use crate::error::{RlpError, RlpResult};
use crate::prefix::{self, Kind, LIST_OFFSET, STRING_OFFSET};
use crate::tree::{Decorated, Tree};

/// Maximum nesting depth `decode` will follow before giving up.
///
/// Not part of the distilled wire format: an unbounded recursive decode
/// is a stack-exhaustion vector in Rust that a dynamically stack-checked
/// interpreter does not share (§3.1/§4.C.1).
pub const MAX_RLP_DEPTH: u32 = 256;

/// RLP-encode a [`Tree`].
pub fn encode(tree: &Tree) -> RlpResult<Bytes> {
    match tree {
        Tree::Leaf(bytes) => encode_leaf(bytes),
        Tree::List(items) => encode_list(items),
    }
}

fn encode_leaf(bytes: &Bytes) -> RlpResult<Bytes> {
    if bytes.len() == 1 && bytes[0] < 0x80 {
        return Ok(bytes.clone());
    }
    let mut out = prefix::encode_length(bytes.len(), STRING_OFFSET)?;
    out.extend_from_slice(bytes);
    Ok(out)
}

fn encode_list(items: &[Tree]) -> RlpResult<Bytes> {
    let mut payload = Bytes::new();
    for item in items {
        payload.extend_from_slice(&encode(item)?);
    }
    let mut out = prefix::encode_length(payload.len(), LIST_OFFSET)?;
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Decode a single RLP item starting at `input[start]`, returning the
/// decorated tree and the offset of the first unconsumed byte.
///
/// This is the raw-codec entry point exposed for codec-layer users (§6.1);
/// it does not itself enforce strict/non-strict trailing-byte policy; that
/// is a facade concern (§4.G).
pub fn decode(input: &[u8], start: usize) -> RlpResult<(Decorated, usize)> {
    decode_item(input, start, 0)
}

fn decode_item(input: &[u8], start: usize, depth: u32) -> RlpResult<(Decorated, usize)> {
    if depth > MAX_RLP_DEPTH {
        return Err(RlpError::RecursionDepthExceeded);
    }

    let p = prefix::decode_prefix(input, start)?;
    let payload_end = p
        .payload_start
        .checked_add(p.payload_len)
        .ok_or(RlpError::InputTruncated)?;
    let payload = input
        .get(p.payload_start..payload_end)
        .ok_or(RlpError::InputTruncated)?;

    match p.kind {
        Kind::Leaf => {
            let own_slice = &input[start..payload_end];
            Ok((
                Decorated::Leaf {
                    value: Bytes::from(payload),
                    encoded: Bytes::from(own_slice),
                },
                payload_end,
            ))
        }
        Kind::List => {
            // slices[0] holds this node's own full encoded slice (prefix +
            // all children) so that `Decorated::own_slice` can hand a
            // cache-bearing record its exact encoding in one lookup. The
            // remaining entries are each child's own full slice; see
            // DESIGN.md for the rationale behind this shape.
            let mut children = Vec::new();
            let mut slices = Vec::with_capacity(1);
            let mut cursor = p.payload_start;
            while cursor < payload_end {
                let (child, next) = decode_item(input, cursor, depth + 1)?;
                if next > payload_end {
                    return Err(RlpError::ListLengthMismatch);
                }
                slices.push(child.own_slice().clone());
                children.push(child);
                cursor = next;
            }
            if cursor != payload_end {
                return Err(RlpError::ListLengthMismatch);
            }
            slices.insert(0, Bytes::from(&input[start..payload_end]));
            Ok((Decorated::List { children, slices }, payload_end))
        }
    }
}

#[cfg(test)]
mod tests;
