//! Error types for RLP encoding, decoding, and serialization.

use thiserror::Error;

/// Result type alias using [`RlpError`].
pub type RlpResult<T> = Result<T, RlpError>;

/// Errors that can occur while encoding, decoding, or serializing RLP.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RlpError {
    /// A raw-encode tree node was neither a leaf nor a sequence.
    #[error("cannot encode a value that is neither a leaf nor a list")]
    EncodingType,

    /// The total encoded length of an item would reach or exceed 2^64.
    #[error("item too large to encode (payload length >= 2^64)")]
    EncodingTooLarge,

    /// A sedes refused to serialize a value.
    #[error("serialization failed: {0}")]
    SerializationError(&'static str),

    /// The decoder ran past the end of the input buffer.
    #[error("input truncated: expected more bytes than were available")]
    InputTruncated,

    /// A prefix or length encoding was well-formed but not canonical.
    #[error("non-canonical encoding: {0}")]
    NonCanonical(NonCanonicalKind),

    /// Strict-mode decode found bytes after the root item.
    #[error("trailing bytes after the decoded item")]
    TrailingBytes,

    /// A list's children did not exactly fill its declared payload length.
    #[error("list length prefix did not match the length of its children")]
    ListLengthMismatch,

    /// A sedes rejected an otherwise well-formed tree.
    #[error("deserialization failed: {0}")]
    DeserializationError(&'static str),

    /// `infer_sedes` found no applicable codec for a value.
    #[error("no sedes applies to this value")]
    NoSedes,

    /// Decoding recursed past the configured depth ceiling.
    #[error("recursion depth exceeded while decoding")]
    RecursionDepthExceeded,
}

/// The specific canonical-form violation behind [`RlpError::NonCanonical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonCanonicalKind {
    /// A single byte `< 0x80` was wrapped in a one-byte-length string prefix
    /// instead of being emitted as itself.
    ShortStringSingleByte,
    /// A length field's leading byte was `0x00`.
    LeadingZeroLength,
    /// The long-form prefix was used for a length that fits the short form.
    LongFormForShortLength,
}

impl std::fmt::Display for NonCanonicalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::ShortStringSingleByte => {
                "single byte < 0x80 encoded as a short string instead of itself"
            }
            Self::LeadingZeroLength => "length field has a leading zero byte",
            Self::LongFormForShortLength => "long-form prefix used for a length under 56",
        };
        f.write_str(msg)
    }
}
