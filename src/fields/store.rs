//! Time-leveled field storage.
//!
//! The host time stepper owns one [`FieldStore`] per partition. Each time
//! level holds a [`FieldSnapshot`] with the scalar inputs of the velocity
//! kernel and the velocity output. Inputs are `Option`s because the
//! transport solver may not have produced them yet; the kernel reports an
//! absent input as `MissingField` rather than reading stale data.

use std::fmt;

use crate::error::SiaError;
use crate::mesh::MeshGeometry;
use crate::types::EdgeMask;

use super::velocity::VelocityField;

/// Index of a time level in a [`FieldStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct TimeLevel(usize);

impl TimeLevel {
    /// The level holding the current state.
    pub const CURRENT: Self = Self(0);

    /// The level being advanced to.
    pub const NEXT: Self = Self(1);

    /// Create a time level index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for TimeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// Fields at a single time level.
///
/// # Example
///
/// ```
/// use sia_rs::fields::FieldSnapshot;
/// use sia_rs::types::EdgeMask;
///
/// let snapshot = FieldSnapshot::new()
///     .with_thickness(vec![100.0, 100.0])
///     .with_upper_surface(vec![1010.0, 1000.0])
///     .with_upper_surface_vertex(vec![1005.0, 1005.0])
///     .with_edge_mask(vec![EdgeMask::DYNAMIC_ICE])
///     .with_velocity(1, 4);
/// assert!(snapshot.normal_velocity.is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldSnapshot {
    /// Ice thickness per cell
    pub thickness: Option<Vec<f64>>,
    /// Upper-surface elevation per cell
    pub upper_surface: Option<Vec<f64>>,
    /// Upper-surface elevation per vertex
    pub upper_surface_vertex: Option<Vec<f64>>,
    /// Classification bits per edge
    pub edge_mask: Option<Vec<EdgeMask>>,
    /// Normal velocity per (edge, level), the kernel output
    pub normal_velocity: Option<VelocityField>,
}

impl FieldSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a snapshot with every field allocated and zeroed for `mesh`.
    ///
    /// Every edge mask starts empty, i.e. no edge is dynamic.
    pub fn zeros(mesh: &MeshGeometry) -> Self {
        Self {
            thickness: Some(vec![0.0; mesh.n_cells]),
            upper_surface: Some(vec![0.0; mesh.n_cells]),
            upper_surface_vertex: Some(vec![0.0; mesh.n_vertices]),
            edge_mask: Some(vec![EdgeMask::EMPTY; mesh.n_edges]),
            normal_velocity: Some(VelocityField::zeros(mesh.n_edges, mesh.n_levels())),
        }
    }

    /// Set the cell thickness field.
    pub fn with_thickness(mut self, thickness: Vec<f64>) -> Self {
        self.thickness = Some(thickness);
        self
    }

    /// Set the cell upper-surface field.
    pub fn with_upper_surface(mut self, upper_surface: Vec<f64>) -> Self {
        self.upper_surface = Some(upper_surface);
        self
    }

    /// Set the vertex upper-surface field.
    pub fn with_upper_surface_vertex(mut self, upper_surface_vertex: Vec<f64>) -> Self {
        self.upper_surface_vertex = Some(upper_surface_vertex);
        self
    }

    /// Set the edge mask.
    pub fn with_edge_mask(mut self, edge_mask: Vec<EdgeMask>) -> Self {
        self.edge_mask = Some(edge_mask);
        self
    }

    /// Allocate a zeroed velocity output.
    pub fn with_velocity(mut self, n_edges: usize, n_levels: usize) -> Self {
        self.normal_velocity = Some(VelocityField::zeros(n_edges, n_levels));
        self
    }
}

/// Fixed number of time-level snapshots for one partition.
///
/// `N` defaults to two levels (current and next).
#[derive(Clone, Debug)]
pub struct FieldStore<const N: usize = 2> {
    levels: [Option<FieldSnapshot>; N],
}

impl<const N: usize> Default for FieldStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FieldStore<N> {
    /// Create a store with no time level allocated.
    pub fn new() -> Self {
        Self {
            levels: std::array::from_fn(|_| None),
        }
    }

    /// Create a store with every time level allocated and zeroed for `mesh`.
    pub fn zeros(mesh: &MeshGeometry) -> Self {
        Self {
            levels: std::array::from_fn(|_| Some(FieldSnapshot::zeros(mesh))),
        }
    }

    /// Number of time levels the store can hold.
    #[inline]
    pub const fn n_time_levels(&self) -> usize {
        N
    }

    /// Install a snapshot at a time level, returning the previous one.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `level` is outside the store.
    pub fn insert(
        &mut self,
        level: TimeLevel,
        snapshot: FieldSnapshot,
    ) -> Result<Option<FieldSnapshot>, SiaError> {
        let slot = self
            .levels
            .get_mut(level.get())
            .ok_or_else(|| SiaError::shape_mismatch("time level", N, level.get()))?;
        Ok(slot.replace(snapshot))
    }

    /// Snapshot at a time level.
    ///
    /// # Errors
    ///
    /// `MissingField` if the level is outside the store or not allocated.
    pub fn snapshot(&self, level: TimeLevel) -> Result<&FieldSnapshot, SiaError> {
        self.levels
            .get(level.get())
            .and_then(Option::as_ref)
            .ok_or_else(|| SiaError::missing(format!("field set for time level {}", level)))
    }

    /// Mutable snapshot at a time level.
    pub fn snapshot_mut(&mut self, level: TimeLevel) -> Result<&mut FieldSnapshot, SiaError> {
        self.levels
            .get_mut(level.get())
            .and_then(Option::as_mut)
            .ok_or_else(|| SiaError::missing(format!("field set for time level {}", level)))
    }

    /// Velocity output at a time level.
    pub fn velocity(&self, level: TimeLevel) -> Result<&VelocityField, SiaError> {
        self.snapshot(level)?
            .normal_velocity
            .as_ref()
            .ok_or_else(|| SiaError::missing("normal_velocity"))
    }
}
