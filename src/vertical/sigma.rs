//! Layer-center sigma levels for the ice column.
//!
//! The coordinate σ ranges from 0 (upper surface) to 1 (bed). Every edge
//! shares the same ordered set of layer centers, so the levels are stored
//! once per mesh.
//!
//! # Coordinate Transform
//!
//! The height of a layer center above the bed is:
//!
//! ```text
//! z = H × (1 − σ)
//! ```
//!
//! where H is the local ice thickness.
//!
//! # Example
//!
//! ```
//! use sia_rs::vertical::SigmaLevels;
//!
//! // Ten equally spaced layers
//! let levels = SigmaLevels::uniform(10);
//! assert_eq!(levels.n_levels(), 10);
//!
//! assert_eq!(levels.surface_level(), Some(0));
//! assert_eq!(levels.bed_level(), Some(9));
//! ```

use crate::error::SiaError;

/// Ordered layer-center sigma values shared by every edge.
///
/// # Memory Layout
///
/// Values are a contiguous `Vec<f64>` so the kernel can zip them directly
/// against a per-edge output chunk.
#[derive(Clone, PartialEq)]
pub struct SigmaLevels {
    /// σ at each layer center, in caller-supplied order.
    layer_center_sigma: Vec<f64>,
}

impl SigmaLevels {
    /// Create equally spaced layers.
    ///
    /// σ_k = (k + ½) / n, so level 0 is the layer nearest the surface and
    /// level n−1 the layer nearest the bed.
    ///
    /// ```
    /// use sia_rs::vertical::SigmaLevels;
    ///
    /// let levels = SigmaLevels::uniform(4);
    /// assert_eq!(levels.as_slice(), &[0.125, 0.375, 0.625, 0.875]);
    /// ```
    pub fn uniform(n_levels: usize) -> Self {
        let dn = n_levels as f64;
        Self {
            layer_center_sigma: (0..n_levels).map(|k| (k as f64 + 0.5) / dn).collect(),
        }
    }

    /// Wrap host-supplied layer centers after checking they lie in [0, 1].
    ///
    /// The order is preserved as given; it only fixes which output level
    /// each value maps to.
    pub fn from_centers(layer_center_sigma: Vec<f64>) -> Result<Self, SiaError> {
        let levels = Self { layer_center_sigma };
        levels.validate()?;
        Ok(levels)
    }

    /// Wrap layer centers without validation.
    ///
    /// Values are checked by the kernel before use.
    #[inline]
    pub fn from_centers_unchecked(layer_center_sigma: Vec<f64>) -> Self {
        Self { layer_center_sigma }
    }

    /// Number of vertical levels.
    #[inline]
    pub fn n_levels(&self) -> usize {
        self.layer_center_sigma.len()
    }

    /// Sigma values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.layer_center_sigma
    }

    /// Check every value is in [0, 1] (NaN rejected).
    pub fn validate(&self) -> Result<(), SiaError> {
        for (k, &s) in self.layer_center_sigma.iter().enumerate() {
            if !(0.0..=1.0).contains(&s) {
                return Err(SiaError::invalid(
                    format!("layer_center_sigma[{}]", k),
                    s,
                    "must lie in [0, 1]",
                ));
            }
        }
        Ok(())
    }

    /// Index of the level nearest the bed (largest σ), if any.
    pub fn bed_level(&self) -> Option<usize> {
        self.layer_center_sigma
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(k, _)| k)
    }

    /// Index of the level nearest the surface (smallest σ), if any.
    pub fn surface_level(&self) -> Option<usize> {
        self.layer_center_sigma
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(k, _)| k)
    }
}

impl std::fmt::Debug for SigmaLevels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigmaLevels")
            .field("n_levels", &self.n_levels())
            .finish()
    }
}

impl std::fmt::Display for SigmaLevels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SigmaLevels({} levels)", self.n_levels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_uniform_centers() {
        let levels = SigmaLevels::uniform(5);
        assert_eq!(levels.n_levels(), 5);
        assert!((levels.as_slice()[0] - 0.1).abs() < TOL);
        assert!((levels.as_slice()[4] - 0.9).abs() < TOL);
        assert_eq!(levels.surface_level(), Some(0));
        assert_eq!(levels.bed_level(), Some(4));
    }

    #[test]
    fn test_from_centers_rejects_out_of_range() {
        assert!(SigmaLevels::from_centers(vec![0.0, 0.5, 1.0]).is_ok());

        let err = SigmaLevels::from_centers(vec![0.0, 1.5]).unwrap_err();
        assert!(matches!(err, SiaError::InvalidParameter { ref name, .. } if name == "layer_center_sigma[1]"));

        assert!(SigmaLevels::from_centers(vec![f64::NAN]).is_err());
        assert!(SigmaLevels::from_centers(vec![-0.1]).is_err());
    }

    #[test]
    fn test_unchecked_then_validate() {
        let levels = SigmaLevels::from_centers_unchecked(vec![0.2, -0.2]);
        assert!(levels.validate().is_err());
    }

    #[test]
    fn test_custom_order_levels() {
        let levels = SigmaLevels::from_centers(vec![0.9, 0.0, 0.4]).unwrap();
        assert_eq!(levels.surface_level(), Some(1));
        assert_eq!(levels.bed_level(), Some(0));
    }

    #[test]
    fn test_infinite_sigma_rejected() {
        assert!(SigmaLevels::from_centers(vec![f64::INFINITY]).is_err());
        assert!(SigmaLevels::from_centers(vec![f64::NEG_INFINITY]).is_err());
    }

    #[test]
    fn test_empty_levels() {
        let levels = SigmaLevels::uniform(0);
        assert_eq!(levels.n_levels(), 0);
        assert_eq!(levels.bed_level(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SigmaLevels::uniform(3)), "SigmaLevels(3 levels)");
    }
}
