//! Velocity solver traits.
//!
//! This module defines the lifecycle interface a host driver uses to call
//! a velocity solver.

use crate::error::SiaError;
use crate::fields::{FieldStore, TimeLevel};
use crate::mesh::MeshGeometry;
use crate::simulation::{Block, Domain};

/// Lifecycle of a velocity solver, as seen from the host driver.
///
/// The driver calls [`init`](Self::init) once per run, [`block_init`](Self::block_init)
/// once per partition, [`solve`](Self::solve) once per time step per partition, and
/// [`finalize`](Self::finalize) at the end of the run.
///
/// `N` is the number of time levels in each partition's field store.
///
/// # Example Implementation
///
/// ```ignore
/// impl<const N: usize> VelocitySolver<N> for SiaVelocitySolver {
///     fn name(&self) -> &'static str {
///         "sia"
///     }
///
///     fn solve(&self, mesh: &MeshGeometry, fields: &mut FieldStore<N>, level: TimeLevel) -> Result<(), SiaError> {
///         solve(mesh, fields, level, &self.config)
///     }
/// }
/// ```
pub trait VelocitySolver<const N: usize = 2>: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Once-per-run setup.
    ///
    /// Default implementation does nothing.
    fn init(&self, _domain: &Domain<N>) -> Result<(), SiaError> {
        Ok(())
    }

    /// Once-per-partition setup.
    ///
    /// Default implementation does nothing.
    fn block_init(&self, _block: &Block<N>) -> Result<(), SiaError> {
        Ok(())
    }

    /// Compute velocity at one time level of one partition.
    ///
    /// Writes only the velocity of `level`; on error nothing is written.
    fn solve(
        &self,
        mesh: &MeshGeometry,
        fields: &mut FieldStore<N>,
        level: TimeLevel,
    ) -> Result<(), SiaError>;

    /// End-of-run teardown.
    ///
    /// Default implementation does nothing.
    fn finalize(&self, _domain: &Domain<N>) -> Result<(), SiaError> {
        Ok(())
    }
}
