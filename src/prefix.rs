//! Length-prefix framing (§4.B): the single-byte or multi-byte header that
//! precedes every leaf or list payload.

use crate::bytes::Bytes;
use crate::error::{NonCanonicalKind, RlpError, RlpResult};

/// Offset added to a string payload's length to form its prefix byte.
pub const STRING_OFFSET: u8 = 0x80;
/// Offset added to a list payload's length to form its prefix byte.
pub const LIST_OFFSET: u8 = 0xC0;

const SHORT_LIMIT: usize = 56;
/// Length values must stay under 2^64.
const LONG_LENGTH_LIMIT: u128 = 1u128 << 64;

/// What a decoded prefix says about the payload that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The payload is a leaf (byte string).
    Leaf,
    /// The payload is a list (sequence of further items).
    List,
}

/// The result of reading one prefix: how many bytes it occupied, whether the
/// payload is a leaf or list, how many payload bytes follow, and the offset
/// at which the payload begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedPrefix {
    /// Number of bytes the prefix itself occupied (including the single
    /// byte that doubles as payload for values `< 0x80`, which is `0`).
    pub prefix_len: usize,
    pub kind: Kind,
    pub payload_len: usize,
    pub payload_start: usize,
}

/// Construct the prefix for a payload of `length` bytes, tagged with
/// `offset` (`STRING_OFFSET` or `LIST_OFFSET`).
pub fn encode_length(length: usize, offset: u8) -> RlpResult<Bytes> {
    let mut out = Bytes::new();
    if length < SHORT_LIMIT {
        out.push(offset + length as u8);
        return Ok(out);
    }
    if (length as u128) >= LONG_LENGTH_LIMIT {
        return Err(RlpError::EncodingTooLarge);
    }
    let be = strip_leading_zeros(&length.to_be_bytes());
    out.push(offset + (SHORT_LIMIT as u8 - 1) + be.len() as u8);
    out.extend_from_slice(be);
    Ok(out)
}

fn strip_leading_zeros(be: &[u8]) -> &[u8] {
    let first_nonzero = be.iter().position(|&b| b != 0).unwrap_or(be.len());
    &be[first_nonzero..]
}

/// Decode the length prefix starting at `input[start]`, returning a
/// `DecodedPrefix` and enforcing every canonicality check in §4.B directly
/// rather than leaving it to the caller.
pub fn decode_prefix(input: &[u8], start: usize) -> RlpResult<DecodedPrefix> {
    let b0 = *input.get(start).ok_or(RlpError::InputTruncated)?;

    if b0 < 0x80 {
        return Ok(DecodedPrefix {
            prefix_len: 0,
            kind: Kind::Leaf,
            payload_len: 1,
            payload_start: start,
        });
    }

    if b0 < 0x80 + SHORT_LIMIT as u8 {
        let payload_len = (b0 - 0x80) as usize;
        if payload_len == 1 {
            let first = *input
                .get(start + 1)
                .ok_or(RlpError::InputTruncated)?;
            if first < 0x80 {
                return Err(RlpError::NonCanonical(
                    NonCanonicalKind::ShortStringSingleByte,
                ));
            }
        }
        return Ok(DecodedPrefix {
            prefix_len: 1,
            kind: Kind::Leaf,
            payload_len,
            payload_start: start + 1,
        });
    }

    if b0 < 0xC0 {
        let ll = (b0 - 0xB7) as usize;
        let (payload_len, prefix_len) = decode_long_length(input, start, ll)?;
        return Ok(DecodedPrefix {
            prefix_len,
            kind: Kind::Leaf,
            payload_len,
            payload_start: start + prefix_len,
        });
    }

    if b0 < 0xC0 + SHORT_LIMIT as u8 {
        return Ok(DecodedPrefix {
            prefix_len: 1,
            kind: Kind::List,
            payload_len: (b0 - 0xC0) as usize,
            payload_start: start + 1,
        });
    }

    let ll = (b0 - 0xF7) as usize;
    let (payload_len, prefix_len) = decode_long_length(input, start, ll)?;
    Ok(DecodedPrefix {
        prefix_len,
        kind: Kind::List,
        payload_len,
        payload_start: start + prefix_len,
    })
}

/// Decode the `ll`-byte big-endian length field following the single prefix
/// byte at `start`, enforcing the no-leading-zero and `>= 56` canonicality
/// checks shared by the long-string and long-list prefix forms.
fn decode_long_length(input: &[u8], start: usize, ll: usize) -> RlpResult<(usize, usize)> {
    let field = input
        .get(start + 1..start + 1 + ll)
        .ok_or(RlpError::InputTruncated)?;
    if field[0] == 0 {
        return Err(RlpError::NonCanonical(NonCanonicalKind::LeadingZeroLength));
    }
    let mut buf = [0u8; std::mem::size_of::<usize>()];
    if ll > buf.len() {
        // A length field wider than `usize` cannot be represented; treat it
        // as truncated input rather than silently wrapping.
        return Err(RlpError::InputTruncated);
    }
    buf[buf.len() - ll..].copy_from_slice(field);
    let length = usize::from_be_bytes(buf);
    if length < SHORT_LIMIT {
        return Err(RlpError::NonCanonical(
            NonCanonicalKind::LongFormForShortLength,
        ));
    }
    Ok((length, 1 + ll))
}
