//! Physical quantity newtypes for the ice column.
//!
//! These types prevent mixing up quantities that share the same
//! underlying type (f64): a thickness, a height above the bed, and a
//! normalized sigma coordinate.

use std::fmt;

// =============================================================================
// IceThickness (always non-negative)
// =============================================================================

/// Ice thickness (H), always non-negative.
///
/// # Example
///
/// ```
/// use sia_rs::types::IceThickness;
///
/// let h = IceThickness::new(1200.0);
/// assert_eq!(h.meters(), 1200.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct IceThickness(f64);

impl IceThickness {
    /// Create a new thickness value.
    ///
    /// # Panics
    ///
    /// Debug-panics if the thickness is negative.
    #[inline]
    pub fn new(meters: f64) -> Self {
        debug_assert!(meters >= 0.0, "Thickness must be non-negative, got {}", meters);
        Self(meters)
    }

    /// Ice-free column.
    pub const ZERO: Self = Self(0.0);

    /// Edge thickness as the arithmetic mean of the two adjacent cells.
    #[inline]
    pub fn edge_mean(a: Self, b: Self) -> Self {
        Self(0.5 * (a.0 + b.0))
    }

    /// Get the thickness in meters.
    #[inline]
    pub fn meters(self) -> f64 {
        self.0
    }
}

impl fmt::Display for IceThickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}m", self.0)
    }
}

impl From<IceThickness> for f64 {
    #[inline]
    fn from(h: IceThickness) -> f64 {
        h.0
    }
}

// =============================================================================
// Sigma (normalized depth below the upper surface)
// =============================================================================

/// Sigma coordinate (σ) of a layer center.
///
/// σ ∈ [0, 1] where:
/// - σ = 0 at the upper ice surface
/// - σ = 1 at the bed
///
/// The height of a sigma point above the bed is `H × (1 − σ)`.
///
/// # Example
///
/// ```
/// use sia_rs::types::{IceThickness, Sigma};
///
/// let h = IceThickness::new(100.0);
/// assert_eq!(Sigma::SURFACE.height_above_bed(h), 100.0);
/// assert_eq!(Sigma::BED.height_above_bed(h), 0.0);
/// assert_eq!(Sigma::new(0.25).height_above_bed(h), 75.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Sigma(f64);

impl Sigma {
    /// Create a new sigma coordinate.
    ///
    /// # Panics
    ///
    /// Debug-panics if sigma is outside [0, 1].
    #[inline]
    pub fn new(value: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&value),
            "Sigma must be in [0, 1], got {}",
            value
        );
        Self(value)
    }

    /// Create sigma without validation (for hot paths).
    #[inline]
    pub const fn new_unchecked(value: f64) -> Self {
        Self(value)
    }

    /// Sigma at the upper surface.
    pub const SURFACE: Self = Self(0.0);

    /// Sigma at the bed.
    pub const BED: Self = Self(1.0);

    /// Get the raw sigma value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Height above the bed of this sigma point in a column of thickness `h`.
    #[inline]
    pub fn height_above_bed(self, h: IceThickness) -> f64 {
        h.0 * (1.0 - self.0)
    }
}

impl fmt::Display for Sigma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "σ={:.3}", self.0)
    }
}

impl From<Sigma> for f64 {
    #[inline]
    fn from(s: Sigma) -> f64 {
        s.0
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thickness() {
        let h = IceThickness::new(100.0);
        assert_eq!(h.meters(), 100.0);
        assert_eq!(f64::from(h), 100.0);
        assert_eq!(IceThickness::ZERO.meters(), 0.0);
    }

    #[test]
    fn test_edge_mean() {
        let h = IceThickness::edge_mean(IceThickness::new(80.0), IceThickness::new(120.0));
        assert_eq!(h.meters(), 100.0);
    }

    #[test]
    fn test_height_above_bed() {
        let h = IceThickness::new(200.0);

        assert!((Sigma::SURFACE.height_above_bed(h) - 200.0).abs() < 1e-12);
        assert!((Sigma::BED.height_above_bed(h) - 0.0).abs() < 1e-12);
        assert!((Sigma::new(0.5).height_above_bed(h) - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_thickness_column() {
        assert_eq!(Sigma::new(0.3).height_above_bed(IceThickness::ZERO), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Sigma::new(0.5)), "σ=0.500");
        assert_eq!(format!("{}", IceThickness::new(3.0)), "3.00m");
    }
}
