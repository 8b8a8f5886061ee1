//! Domain driver implementation.
//!
//! Provides the host-facing loop that hands every spatial partition of a
//! domain to a velocity solver for one time level.

use thiserror::Error;

use crate::error::SiaError;
use crate::fields::{FieldStore, TimeLevel};
use crate::mesh::MeshGeometry;
use crate::physics::VelocitySolver;

// =============================================================================
// Domain
// =============================================================================

/// One spatial partition: its geometry and its fields.
///
/// Halo values in `fields` are assumed to be exchanged by the host before
/// any solve.
#[derive(Clone, Debug)]
pub struct Block<const N: usize = 2> {
    /// Partition geometry
    pub mesh: MeshGeometry,
    /// Time-leveled fields of this partition
    pub fields: FieldStore<N>,
}

impl<const N: usize> Block<N> {
    /// Create a block with every time level zeroed for `mesh`.
    pub fn zeros(mesh: MeshGeometry) -> Self {
        let fields = FieldStore::zeros(&mesh);
        Self { mesh, fields }
    }
}

/// All partitions owned by this process.
#[derive(Clone, Debug, Default)]
pub struct Domain<const N: usize = 2> {
    /// Partitions in host order
    pub blocks: Vec<Block<N>>,
}

impl<const N: usize> Domain<N> {
    /// Create a domain from its blocks.
    pub fn new(blocks: Vec<Block<N>>) -> Self {
        Self { blocks }
    }

    /// Number of partitions.
    pub fn n_blocks(&self) -> usize {
        self.blocks.len()
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Failure of one block during a domain-wide solve.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Block {block} failed: {source}")]
pub struct DomainError {
    /// Index of the failing block
    pub block: usize,
    /// Underlying solver error
    #[source]
    pub source: SiaError,
}

impl DomainError {
    /// Integer status code of the underlying error.
    pub fn code(&self) -> i32 {
        self.source.code()
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Solve every block of `domain` at one time level, in block order.
///
/// Stops at the first failing block; blocks before it keep their new
/// velocity, the failing block and those after it are untouched.
pub fn run_time_level<S, const N: usize>(
    solver: &S,
    domain: &mut Domain<N>,
    level: TimeLevel,
) -> Result<(), DomainError>
where
    S: VelocitySolver<N> + ?Sized,
{
    for (i, block) in domain.blocks.iter_mut().enumerate() {
        log::trace!("{}: solving block {} at {}", solver.name(), i, level);
        solver
            .solve(&block.mesh, &mut block.fields, level)
            .map_err(|source| {
                log::warn!("{}: block {} failed at {}: {}", solver.name(), i, level, source);
                DomainError { block: i, source }
            })?;
    }
    Ok(())
}

/// Run the full solver lifecycle for a single time level.
///
/// Calls `init`, `block_init` for every block, the domain-wide solve, and
/// `finalize`.
pub fn run_lifecycle<S, const N: usize>(
    solver: &S,
    domain: &mut Domain<N>,
    level: TimeLevel,
) -> Result<(), DomainError>
where
    S: VelocitySolver<N> + ?Sized,
{
    let lift = |block: usize| move |source: SiaError| DomainError { block, source };

    solver.init(domain).map_err(lift(0))?;
    for (i, block) in domain.blocks.iter().enumerate() {
        solver.block_init(block).map_err(lift(i))?;
    }
    run_time_level(solver, domain, level)?;
    solver.finalize(domain).map_err(lift(0))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::SiaConfig;
    use crate::physics::SiaVelocitySolver;
    use crate::types::EdgeMask;
    use crate::vertical::SigmaLevels;

    fn sloped_block() -> Block {
        let mesh = MeshGeometry::structured_quad(3, 1, 1000.0, 1000.0, SigmaLevels::uniform(4));
        let mut block = Block::zeros(mesh);
        let snap = block.fields.snapshot_mut(TimeLevel::CURRENT).unwrap();
        snap.thickness = Some(vec![500.0; 3]);
        snap.upper_surface = Some(vec![1020.0, 1010.0, 1000.0]);
        snap.upper_surface_vertex = Some(vec![0.0; 8]);
        snap.edge_mask = Some(vec![EdgeMask::DYNAMIC_ICE; 2]);
        block
    }

    #[test]
    fn test_run_time_level_all_blocks() {
        let solver = SiaVelocitySolver::new(SiaConfig::default()).unwrap();
        let mut domain = Domain::new(vec![sloped_block(), sloped_block()]);

        run_time_level(&solver, &mut domain, TimeLevel::CURRENT).unwrap();

        for block in &domain.blocks {
            let u = block.fields.velocity(TimeLevel::CURRENT).unwrap();
            assert!(u.data.iter().all(|&v| v > 0.0));
        }
    }

    #[test]
    fn test_failure_reports_block_and_stops() {
        let solver = SiaVelocitySolver::new(SiaConfig::default()).unwrap();
        let mut bad = sloped_block();
        bad.fields.snapshot_mut(TimeLevel::CURRENT).unwrap().thickness = None;
        let mut domain = Domain::new(vec![sloped_block(), bad, sloped_block()]);

        let err = run_time_level(&solver, &mut domain, TimeLevel::CURRENT).unwrap_err();
        assert_eq!(err.block, 1);
        assert_eq!(err.source, SiaError::missing("thickness"));
        assert_eq!(err.code(), 2);

        // First block solved, third untouched
        let first = domain.blocks[0].fields.velocity(TimeLevel::CURRENT).unwrap();
        let third = domain.blocks[2].fields.velocity(TimeLevel::CURRENT).unwrap();
        assert!(first.max_abs() > 0.0);
        assert_eq!(third.max_abs(), 0.0);
    }

    #[test]
    fn test_lifecycle() {
        let solver = SiaVelocitySolver::new(SiaConfig::default()).unwrap();
        let mut domain = Domain::new(vec![sloped_block()]);
        assert_eq!(domain.n_blocks(), 1);
        assert!(run_lifecycle(&solver, &mut domain, TimeLevel::CURRENT).is_ok());
    }

    #[test]
    fn test_empty_domain() {
        let solver = SiaVelocitySolver::new(SiaConfig::default()).unwrap();
        let mut domain: Domain = Domain::default();
        assert!(run_lifecycle(&solver, &mut domain, TimeLevel::NEXT).is_ok());
    }
}
