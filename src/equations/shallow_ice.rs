//! Shallow Ice Approximation with Glen's flow law.
//!
//! For shallow, slowly varying ice the horizontal velocity at height `z`
//! above the bed follows from integrating the Glen's-law shear strain rate
//! from the bed upward:
//!
//! ```text
//! u(z) = u_b + ½ A (ρ g)ⁿ |∇s|ⁿ⁻¹ ∂s/∂x (Hⁿ⁺¹ − (H − z)ⁿ⁺¹)
//! ```
//!
//! where:
//! - A = flow-law rate factor (s⁻¹ Pa⁻ⁿ)
//! - n = flow-law exponent (typically 3)
//! - ρ = ice density, g = gravitational acceleration
//! - s = upper-surface elevation, H = ice thickness
//! - u_b = basal velocity, zero under the no-slip assumption
//!
//! The rate factor is a run-wide constant; its temperature dependence is
//! left to the host model.

use crate::error::SiaError;
use crate::types::{IceThickness, Sigma};

/// Standard gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.81;

/// Density of glacier ice (kg/m³).
pub const ICE_DENSITY: f64 = 910.0;

/// Glen's flow-law exponent.
pub const FLOW_LAW_EXPONENT: f64 = 3.0;

/// Seconds in a 365-day year.
pub const SECONDS_PER_YEAR: f64 = 365.0 * 86400.0;

/// Default rate factor: 1e-16 Pa⁻³ a⁻¹ expressed per second.
pub const RATE_FACTOR: f64 = 1.0e-16 / SECONDS_PER_YEAR;

/// Basal velocity under the no-slip assumption.
pub const BASAL_VELOCITY: f64 = 0.0;

/// Physical parameters of the shallow-ice velocity solution.
///
/// Constructed once per run and passed by reference into the kernel.
///
/// # Example
///
/// ```
/// use sia_rs::equations::SiaConfig;
///
/// let config = SiaConfig::new(910.0, 3.0, 1e-16 / 3.1536e7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.gravity, 9.81);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SiaConfig {
    /// Ice density ρ (kg/m³)
    pub ice_density: f64,
    /// Flow-law exponent n
    pub flow_law_exponent: f64,
    /// Flow-law rate factor A (s⁻¹ Pa⁻ⁿ)
    pub rate_factor: f64,
    /// Gravitational acceleration g (m/s²)
    pub gravity: f64,
}

impl Default for SiaConfig {
    fn default() -> Self {
        Self {
            ice_density: ICE_DENSITY,
            flow_law_exponent: FLOW_LAW_EXPONENT,
            rate_factor: RATE_FACTOR,
            gravity: GRAVITY,
        }
    }
}

impl SiaConfig {
    /// Create a configuration with standard gravity.
    pub fn new(ice_density: f64, flow_law_exponent: f64, rate_factor: f64) -> Self {
        Self {
            ice_density,
            flow_law_exponent,
            rate_factor,
            gravity: GRAVITY,
        }
    }

    /// Create with a custom gravitational acceleration.
    pub fn with_gravity(ice_density: f64, flow_law_exponent: f64, rate_factor: f64, gravity: f64) -> Self {
        Self {
            ice_density,
            flow_law_exponent,
            rate_factor,
            gravity,
        }
    }

    /// Start a builder with no values set.
    pub fn builder() -> SiaConfigBuilder {
        SiaConfigBuilder::default()
    }

    /// Check that every parameter is finite and strictly positive.
    pub fn validate(&self) -> Result<(), SiaError> {
        check_positive("ice_density", self.ice_density)?;
        check_positive("flow_law_exponent", self.flow_law_exponent)?;
        check_positive("rate_factor", self.rate_factor)?;
        check_positive("gravity", self.gravity)?;
        Ok(())
    }

    /// Column prefactor ½ A (ρ g)ⁿ, shared by every edge.
    #[inline]
    pub fn prefactor(&self) -> f64 {
        0.5 * self.rate_factor * (self.ice_density * self.gravity).powf(self.flow_law_exponent)
    }

    /// Fill `out` with the velocity profile of one ice column.
    ///
    /// # Arguments
    /// * `prefactor` - value of [`SiaConfig::prefactor`]
    /// * `thickness` - column thickness H (≥ 0)
    /// * `normal_slope` - signed surface slope along the edge normal
    /// * `slope_magnitude` - surface gradient magnitude (≥ 0)
    /// * `sigma` - layer-center sigma values, one per entry of `out`
    ///
    /// A flat surface (`slope_magnitude == 0`) yields zero at every level
    /// without evaluating `slope^(n−1)`, which is undefined there for `n < 1`.
    #[inline]
    pub fn column_profile_into(
        &self,
        prefactor: f64,
        thickness: f64,
        normal_slope: f64,
        slope_magnitude: f64,
        sigma: &[f64],
        out: &mut [f64],
    ) {
        debug_assert_eq!(sigma.len(), out.len());

        if slope_magnitude == 0.0 {
            out.fill(BASAL_VELOCITY);
            return;
        }

        let n = self.flow_law_exponent;
        let coeff = prefactor * slope_magnitude.powf(n - 1.0) * normal_slope;
        let h_pow = thickness.powf(n + 1.0);
        let column = IceThickness::new(thickness);

        for (u, &s) in out.iter_mut().zip(sigma.iter()) {
            let height_above_bed = Sigma::new_unchecked(s).height_above_bed(column);
            *u = BASAL_VELOCITY + coeff * (h_pow - (thickness - height_above_bed).powf(n + 1.0));
        }
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), SiaError> {
    if !value.is_finite() {
        return Err(SiaError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(SiaError::invalid(name, value, "must be positive"));
    }
    Ok(())
}

/// Builder for [`SiaConfig`] that reports unset values.
///
/// Gravity defaults to [`GRAVITY`]; the three flow parameters must be
/// supplied explicitly.
///
/// ```
/// use sia_rs::equations::SiaConfig;
/// use sia_rs::SiaError;
///
/// let err = SiaConfig::builder().ice_density(910.0).flow_law_exponent(3.0).build();
/// assert!(matches!(err, Err(SiaError::MissingField(_))));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SiaConfigBuilder {
    ice_density: Option<f64>,
    flow_law_exponent: Option<f64>,
    rate_factor: Option<f64>,
    gravity: Option<f64>,
}

impl SiaConfigBuilder {
    /// Set the ice density (kg/m³).
    pub fn ice_density(mut self, value: f64) -> Self {
        self.ice_density = Some(value);
        self
    }

    /// Set the flow-law exponent.
    pub fn flow_law_exponent(mut self, value: f64) -> Self {
        self.flow_law_exponent = Some(value);
        self
    }

    /// Set the flow-law rate factor (s⁻¹ Pa⁻ⁿ).
    pub fn rate_factor(mut self, value: f64) -> Self {
        self.rate_factor = Some(value);
        self
    }

    /// Override gravitational acceleration (m/s²).
    pub fn gravity(mut self, value: f64) -> Self {
        self.gravity = Some(value);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<SiaConfig, SiaError> {
        let config = SiaConfig {
            ice_density: self.ice_density.ok_or_else(|| SiaError::missing("ice_density"))?,
            flow_law_exponent: self
                .flow_law_exponent
                .ok_or_else(|| SiaError::missing("flow_law_exponent"))?,
            rate_factor: self.rate_factor.ok_or_else(|| SiaError::missing("rate_factor"))?,
            gravity: self.gravity.unwrap_or(GRAVITY),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const A: f64 = 1.0e-16;

    #[test]
    fn test_default_is_valid() {
        let config = SiaConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.flow_law_exponent, 3.0);
        assert_relative_eq!(config.rate_factor, 3.1709791983764586e-24, max_relative = 1e-12);
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        for (config, name) in [
            (SiaConfig::new(0.0, 3.0, A), "ice_density"),
            (SiaConfig::new(910.0, -1.0, A), "flow_law_exponent"),
            (SiaConfig::new(910.0, 3.0, 0.0), "rate_factor"),
            (SiaConfig::with_gravity(910.0, 3.0, A, -9.81), "gravity"),
        ] {
            match config.validate() {
                Err(SiaError::InvalidParameter { name: n, .. }) => assert_eq!(n, name),
                other => panic!("expected InvalidParameter for {}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_nan() {
        let config = SiaConfig::new(f64::NAN, 3.0, A);
        assert!(matches!(
            config.validate(),
            Err(SiaError::InvalidParameter { reason: "must be finite", .. })
        ));
    }

    #[test]
    fn test_builder() {
        let config = SiaConfig::builder()
            .ice_density(917.0)
            .flow_law_exponent(3.0)
            .rate_factor(A)
            .build()
            .unwrap();
        assert_eq!(config.gravity, GRAVITY);
        assert_eq!(config.ice_density, 917.0);

        let missing = SiaConfig::builder().ice_density(917.0).rate_factor(A).build();
        assert_eq!(missing, Err(SiaError::missing("flow_law_exponent")));

        let invalid = SiaConfig::builder()
            .ice_density(917.0)
            .flow_law_exponent(3.0)
            .rate_factor(-A)
            .build();
        assert!(matches!(invalid, Err(SiaError::InvalidParameter { .. })));
    }

    #[test]
    fn test_prefactor() {
        let config = SiaConfig::new(910.0, 3.0, A);
        let expected = 0.5 * A * (910.0_f64 * 9.81).powi(3);
        assert_relative_eq!(config.prefactor(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_column_profile_surface_and_bed() {
        let config = SiaConfig::new(910.0, 3.0, A);
        let pre = config.prefactor();
        let sigma = [0.0, 0.5, 1.0];
        let mut out = [f64::NAN; 3];

        config.column_profile_into(pre, 100.0, 0.01, 0.01, &sigma, &mut out);

        let surface = pre * 0.01_f64.powi(2) * 0.01 * 100.0_f64.powi(4);
        assert_relative_eq!(out[0], surface, max_relative = 1e-12);
        assert_relative_eq!(out[1], pre * 1e-6 * (1e8 - 50.0_f64.powi(4)), max_relative = 1e-12);
        assert_eq!(out[2], 0.0);
    }

    #[test]
    fn test_column_profile_flat_surface_sub_linear_exponent() {
        let config = SiaConfig::new(910.0, 0.5, A);
        let mut out = [f64::NAN; 4];
        config.column_profile_into(config.prefactor(), 100.0, 0.0, 0.0, &[0.1, 0.3, 0.6, 0.9], &mut out);
        assert!(out.iter().all(|&u| u == 0.0));
    }
}
