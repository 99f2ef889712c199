//! Symbol field ordering capabilities
//!
//! A matrix stores one of 256 byte symbols per cell. The matrix itself only
//! needs to compare symbols and to know the extreme elements of the order;
//! arithmetic lives in a separate algebra layer.

mod sealed {
    pub trait Sealed {}
}

/// Ordering and equality primitives of a byte-valued field
///
/// Implementors are zero-sized markers selecting an order over the 256
/// byte symbols. The trait is sealed: the additive identity is always the
/// byte `0`, which the wire format and compact vectors rely on.
pub trait OctetField:
    sealed::Sealed + Copy + Clone + core::fmt::Debug + Default + Send + Sync + 'static
{
    /// The additive identity, never stored in a sparse structure
    const ZERO: u8 = 0;

    /// Symbol equality
    fn equals(a: u8, b: u8) -> bool {
        a == b
    }

    /// `a` precedes `b` in the field order
    fn less(a: u8, b: u8) -> bool;

    /// `a` follows `b` in the field order
    fn greater(a: u8, b: u8) -> bool {
        Self::less(b, a)
    }

    /// Smallest symbol in the field order
    fn min_element() -> u8;

    /// Largest symbol in the field order
    fn max_element() -> u8;

    /// Whether `value` is the additive identity
    #[inline]
    fn is_zero(value: u8) -> bool {
        Self::equals(value, Self::ZERO)
    }
}

/// Bytes ordered as unsigned integers `0..=255`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnsignedOctets;

impl sealed::Sealed for UnsignedOctets {}

impl OctetField for UnsignedOctets {
    #[inline]
    fn less(a: u8, b: u8) -> bool {
        a < b
    }

    fn min_element() -> u8 {
        u8::MIN
    }

    fn max_element() -> u8 {
        u8::MAX
    }
}

/// Bytes ordered as two's complement integers `-128..=127`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignedOctets;

impl sealed::Sealed for SignedOctets {}

impl OctetField for SignedOctets {
    #[inline]
    fn less(a: u8, b: u8) -> bool {
        (a as i8) < (b as i8)
    }

    fn min_element() -> u8 {
        i8::MIN as u8
    }

    fn max_element() -> u8 {
        i8::MAX as u8
    }
}
