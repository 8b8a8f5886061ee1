//! Shallow Ice Approximation velocity solver.
//!
//! Ties the flow-law configuration to the edge kernel behind the
//! [`VelocitySolver`] lifecycle.

use crate::equations::SiaConfig;
use crate::error::SiaError;
use crate::fields::{FieldStore, TimeLevel};
use crate::mesh::MeshGeometry;
use crate::solver;

use super::traits::VelocitySolver;

/// SIA velocity solver.
///
/// The configuration is validated once at construction and then shared
/// read-only by every call.
///
/// # Example
///
/// ```
/// use sia_rs::equations::SiaConfig;
/// use sia_rs::physics::{SiaVelocitySolver, VelocitySolver};
///
/// let solver = SiaVelocitySolver::new(SiaConfig::default()).unwrap();
/// assert_eq!(VelocitySolver::<2>::name(&solver), "sia");
/// ```
#[derive(Clone, Debug)]
pub struct SiaVelocitySolver {
    config: SiaConfig,
}

impl SiaVelocitySolver {
    /// Create a solver after validating the configuration.
    pub fn new(config: SiaConfig) -> Result<Self, SiaError> {
        config.validate()?;
        log::debug!(
            "SIA solver: rho = {}, n = {}, A = {:.4e}, g = {}",
            config.ice_density,
            config.flow_law_exponent,
            config.rate_factor,
            config.gravity
        );
        Ok(Self { config })
    }

    /// The flow-law configuration.
    pub fn config(&self) -> &SiaConfig {
        &self.config
    }
}

impl<const N: usize> VelocitySolver<N> for SiaVelocitySolver {
    fn name(&self) -> &'static str {
        "sia"
    }

    fn solve(
        &self,
        mesh: &MeshGeometry,
        fields: &mut FieldStore<N>,
        level: TimeLevel,
    ) -> Result<(), SiaError> {
        solver::solve(mesh, fields, level, &self.config)
    }
}
