//! Edge classification bitfield.
//!
//! The mask classification itself is done by the host model; this type
//! only names the bits so the velocity kernel can ask one question of it:
//! "is this edge part of the dynamic ice domain?"

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Per-edge classification bits.
///
/// # Example
///
/// ```
/// use sia_rs::types::EdgeMask;
///
/// let mask = EdgeMask::ICE | EdgeMask::DYNAMIC_ICE;
/// assert!(mask.is_dynamic_ice());
/// assert!(!EdgeMask::ICE.is_dynamic_ice());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct EdgeMask(u32);

impl EdgeMask {
    /// No bits set (ice-free edge).
    pub const EMPTY: Self = Self(0);
    /// Edge has ice on at least one side.
    pub const ICE: Self = Self(1 << 0);
    /// Edge belongs to the actively flowing ice domain.
    pub const DYNAMIC_ICE: Self = Self(1 << 1);
    /// Edge lies on floating ice.
    pub const FLOATING: Self = Self(1 << 2);
    /// Edge lies on the grounding line.
    pub const GROUNDING_LINE: Self = Self(1 << 3);
    /// Edge lies on the ice margin.
    pub const MARGIN: Self = Self(1 << 4);

    /// Wrap raw bits as produced by the host's mask classification.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bit pattern.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// True if every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set the bits of `other`.
    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clear the bits of `other`.
    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// True if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Dynamic-ice predicate used by the velocity kernel.
    #[inline]
    pub const fn is_dynamic_ice(self) -> bool {
        self.contains(Self::DYNAMIC_ICE)
    }
}

impl BitOr for EdgeMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for EdgeMask {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for EdgeMask {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl From<u32> for EdgeMask {
    #[inline]
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl fmt::Display for EdgeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#07b}", self.0)
    }
}
