//! Stack item representation and the capability queries the limit checker
//! needs from whatever concrete item type an interpreter uses.

use std::fmt;
use std::sync::Arc;

use num_bigint::BigInt;
use num_traits::Zero;

/// Capability queries the limit checker and price table perform against a
/// stack item, independent of how a given interpreter actually represents one.
///
/// A tagged-variant enum (see [`StackItem`]) is the obvious implementation,
/// but the trait lets a host plug in its own representation as long as it can
/// answer these questions. Conversions are the conventional VM ones:
/// byte-string ↔ integer uses little-endian two's complement, and an absent
/// (null) value decodes as a zero-length integer — which [`crate::limit`]
/// treats as "does not fit" for every big-integer check.
pub trait StackItemView {
    /// Interprets the item as an arbitrary-precision integer, if it is
    /// convertible to one (integers and byte strings are; arrays, maps, and
    /// interop handles are not).
    fn as_big_integer(&self) -> Option<BigInt>;

    /// Interprets the item as a byte string, converting integers and
    /// booleans to their little-endian two's-complement encoding.
    fn as_byte_array(&self) -> Vec<u8>;

    /// Whether this item is an array or struct.
    fn is_array(&self) -> bool;

    /// The item's elements, if it is an array or struct.
    fn as_array(&self) -> Option<&[StackItem]>;
}

/// An opaque handle to a host-provided object exposed on the stack (the
/// `InteropInterface` stack item kind). The engine never inspects its
/// contents; only identity and type-name matter for diagnostics.
#[derive(Clone)]
pub struct InteropHandle {
    type_name: &'static str,
    handle: Arc<dyn std::any::Any + Send + Sync>,
}

impl InteropHandle {
    /// Wraps a host object as an interop stack item.
    pub fn new<T: std::any::Any + Send + Sync>(type_name: &'static str, value: T) -> Self {
        Self { type_name, handle: Arc::new(value) }
    }

    /// The interface type name, as surfaced in diagnostics.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Downcasts to the concrete wrapped type.
    #[must_use]
    pub fn downcast_ref<T: std::any::Any>(&self) -> Option<&T> {
        self.handle.downcast_ref()
    }
}

impl fmt::Debug for InteropHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteropHandle").field("type_name", &self.type_name).finish()
    }
}

impl PartialEq for InteropHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handle, &other.handle)
    }
}

/// The concrete stack item representation bundled with this crate.
///
/// Interpreters are free to use their own representation as long as it
/// implements [`StackItemView`]; this enum is what the engine's own
/// [`crate::test_utils`] fixture interpreter uses, and is a reasonable default
/// for a host that has no stronger reason to roll its own.
#[derive(Debug, Clone, PartialEq)]
pub enum StackItem {
    /// A boolean value.
    Boolean(bool),
    /// An arbitrary-precision integer.
    Integer(BigInt),
    /// A byte string (including NeoVM's distinct "Buffer" vs. immutable
    /// "ByteString" kinds, which the limit checker does not need to tell apart).
    ByteString(Vec<u8>),
    /// An ordered, mutable list of items.
    Array(Vec<StackItem>),
    /// Structurally identical to [`StackItem::Array`] but copy-by-value under
    /// the interpreter's own semantics; the limit checker treats them alike.
    Struct(Vec<StackItem>),
    /// An associative container. Order is insertion order.
    Map(Vec<(StackItem, StackItem)>),
    /// A host-provided opaque object.
    Interop(InteropHandle),
}

impl StackItem {
    /// Convenience constructor from an `i64`.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self::Integer(BigInt::from(value))
    }
}

impl StackItemView for StackItem {
    fn as_big_integer(&self) -> Option<BigInt> {
        match self {
            Self::Integer(n) => Some(n.clone()),
            Self::Boolean(b) => Some(BigInt::from(i64::from(*b))),
            Self::ByteString(bytes) => Some(BigInt::from_signed_bytes_le(bytes)),
            Self::Array(_) | Self::Struct(_) | Self::Map(_) | Self::Interop(_) => None,
        }
    }

    fn as_byte_array(&self) -> Vec<u8> {
        match self {
            Self::ByteString(bytes) => bytes.clone(),
            Self::Integer(n) => {
                if n.is_zero() {
                    Vec::new()
                } else {
                    n.to_signed_bytes_le()
                }
            }
            Self::Boolean(b) => vec![u8::from(*b)],
            Self::Array(_) | Self::Struct(_) | Self::Map(_) | Self::Interop(_) => Vec::new(),
        }
    }

    fn is_array(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Struct(_))
    }

    fn as_array(&self) -> Option<&[StackItem]> {
        match self {
            Self::Array(items) | Self::Struct(items) => Some(items),
            _ => None,
        }
    }
}
