//! The record abstraction (§4.F): ordered named-field records that are
//! themselves sedes, carrying a lazily-populated encoded-form cache.
//!
//! The cache slot is a `Mutex<Option<Bytes>>` newtype: interior mutability
//! on an otherwise immutable struct. Contention is never expected (the
//! cache is per-instance, written at most a handful of times), so a
//! mutex's simplicity is preferred over a lock-free atomic.

use std::marker::PhantomData;
use std::sync::Mutex;

use crate::bytes::Bytes;
use crate::error::{RlpError, RlpResult};
use crate::sedes::Sedes;
use crate::tree::{Decorated, Tree};

/// The `_cached_rlp` slot (§3, §4.F): empty until an `encode` call (or a
/// `decode` call that attaches provenance) populates it.
///
/// `Clone` always produces an empty cache. Cloning a record must never
/// carry over a cached encoding that described a different instance's
/// address/identity, even though the bytes would currently be identical.
#[derive(Debug, Default)]
pub struct RlpCache(Mutex<Option<Bytes>>);

impl RlpCache {
    /// A fresh, empty cache.
    pub fn new() -> Self {
        Self(Mutex::new(None))
    }

    /// The cached bytes, if any have been stored.
    pub fn get(&self) -> Option<Bytes> {
        self.0.lock().expect("RlpCache mutex poisoned").clone()
    }

    /// Store `bytes` as the cached encoding. Concurrent callers that both
    /// observe an empty cache and both write are tolerated (§5): the
    /// written bytes are byte-identical under the canonicality invariant.
    pub fn set(&self, bytes: Bytes) {
        *self.0.lock().expect("RlpCache mutex poisoned") = Some(bytes);
    }

    /// Invalidate the cache. Records that permit field mutation MUST call
    /// this on every mutation (§3); none of the records this crate ships
    /// expose mutating setters, so none need to.
    pub fn clear(&self) {
        *self.0.lock().expect("RlpCache mutex poisoned") = None;
    }
}

impl Clone for RlpCache {
    fn clone(&self) -> Self {
        Self::new()
    }
}

/// A named, ordered tuple of fields, each carrying its own sedes; itself a
/// sedes whose serialized form is a sequence of per-field trees (§4.F).
pub trait Record: Sized {
    /// Serialize each field in declaration order to its own [`Tree`].
    fn serialize_fields(&self) -> RlpResult<Vec<Tree>>;

    /// Construct `Self` from a matching-arity sequence of decorated
    /// children, applying each field's sedes componentwise. Implementors
    /// whose fields are themselves records must attach `decorated`'s slice
    /// to that nested record's own cache as part of this pass (§4.G.1).
    fn deserialize_fields(children: &[Decorated]) -> RlpResult<Self>;

    /// This instance's encoded-form cache slot.
    fn cache(&self) -> &RlpCache;
}

/// The per-field codec interface [`impl_record!`] dispatches through.
///
/// A blanket impl covers every ordinary [`Sedes`] (scalars, `List`/`Vec`);
/// [`Nested`] covers fields that are themselves another [`Record`] type,
/// which need the field's own [`Decorated`] slice (not just its bare
/// [`Tree`]) so they can populate their own cache while being constructed.
pub trait FieldCodec {
    /// The Rust value this field codec produces.
    type Value;

    /// Serialize a field value to a [`Tree`].
    fn serialize(value: &Self::Value) -> RlpResult<Tree>;

    /// Deserialize a field value from its decorated child, attaching cache
    /// provenance for nested records along the way.
    fn deserialize_field(decorated: &Decorated) -> RlpResult<Self::Value>;
}

impl<S: Sedes> FieldCodec for S {
    type Value = S::Value;

    fn serialize(value: &Self::Value) -> RlpResult<Tree> {
        S::serialize(value)
    }

    fn deserialize_field(decorated: &Decorated) -> RlpResult<Self::Value> {
        S::deserialize(&decorated.clone().into_tree())
    }
}

/// Marks a record field whose value is itself a [`Record`]-implementing
/// type, e.g. `Nested<InnerRecord>` in an [`impl_record!`] field list.
pub struct Nested<R>(PhantomData<R>);

impl<R: Record> FieldCodec for Nested<R> {
    type Value = R;

    fn serialize(value: &R) -> RlpResult<Tree> {
        Ok(Tree::List(value.serialize_fields()?))
    }

    fn deserialize_field(decorated: &Decorated) -> RlpResult<R> {
        match decorated {
            Decorated::List { children, .. } => {
                let record = R::deserialize_fields(children)?;
                record.cache().set(decorated.own_slice().clone());
                Ok(record)
            }
            Decorated::Leaf { .. } => Err(RlpError::DeserializationError(
                "expected a list for a nested record field, found a leaf",
            )),
        }
    }
}

/// Declare a [`Record`]-implementing struct from an ordered `(field,
/// sedes)` list, generating the struct itself plus its `Record` impl.
///
/// Generated structs forbid mutation after construction by not exposing
/// public field-level setters: every field is `pub` for read access and
/// for the generated constructor, but there is no generated `set_*`, so
/// the only way to get a different value into a field is to build a new
/// record (see `DESIGN.md` Open Questions).
#[macro_export]
macro_rules! impl_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $field:ident : $field_ty:ty => $codec:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( pub $field : $field_ty, )+
            _cached_rlp: $crate::record::RlpCache,
        }

        impl $name {
            /// Construct a new record with an empty encoded-form cache.
            pub fn new( $( $field : $field_ty ),+ ) -> Self {
                Self { $( $field, )+ _cached_rlp: $crate::record::RlpCache::new() }
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    $( .field(stringify!($field), &self.$field) )+
                    .finish()
            }
        }

        impl ::std::clone::Clone for $name {
            fn clone(&self) -> Self {
                Self {
                    $( $field: self.$field.clone(), )+
                    _cached_rlp: $crate::record::RlpCache::new(),
                }
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                true $( && self.$field == other.$field )+
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl $crate::record::Record for $name {
            fn serialize_fields(&self) -> $crate::error::RlpResult<::std::vec::Vec<$crate::tree::Tree>> {
                Ok(vec![
                    $( <$codec as $crate::record::FieldCodec>::serialize(&self.$field)?, )+
                ])
            }

            fn deserialize_fields(
                children: &[$crate::tree::Decorated],
            ) -> $crate::error::RlpResult<Self> {
                let expected = 0usize $( + { let _ = stringify!($field); 1usize } )+;
                if children.len() != expected {
                    return Err($crate::error::RlpError::DeserializationError(
                        "record field count mismatch",
                    ));
                }
                let mut fields = children.iter();
                $(
                    let $field = <$codec as $crate::record::FieldCodec>::deserialize_field(
                        fields.next().expect("length checked above"),
                    )?;
                )+
                Ok(Self { $( $field, )+ _cached_rlp: $crate::record::RlpCache::new() })
            }

            fn cache(&self) -> &$crate::record::RlpCache {
                &self._cached_rlp
            }
        }
    };
}

#[cfg(test)]
mod tests;
