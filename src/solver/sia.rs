//! Shallow Ice Approximation edge velocity kernel.
//!
//! For every edge flagged as dynamic ice, the kernel maps the cell and
//! vertex surface fields onto the edge stencil, combines the two
//! orthogonal slope estimates into a gradient magnitude, and evaluates the
//! closed-form Glen's-law depth integral at each layer center:
//!
//! ```text
//! ∂s/∂n  = (s[c1] − s[c2]) / dc
//! ∂s/∂t  = (sv[v1] − sv[v2]) / dv
//! |∇s|   = sqrt((∂s/∂n)² + (∂s/∂t)²)
//! H_e    = (H[c1] + H[c2]) / 2
//! u(σ)   = ½ A (ρg)ⁿ |∇s|ⁿ⁻¹ ∂s/∂n (H_eⁿ⁺¹ − (H_e − H_e(1 − σ))ⁿ⁺¹)
//! ```
//!
//! Edges not flagged as dynamic get exactly zero at every level, and none
//! of their other inputs are read.
//!
//! All validation happens before the first write, so a failed call leaves
//! the velocity field untouched.

use crate::equations::SiaConfig;
use crate::error::SiaError;
use crate::fields::{FieldSnapshot, FieldStore, TimeLevel, VelocityField};
use crate::mesh::MeshGeometry;
use crate::types::{EdgeIndex, EdgeMask, IceThickness};

use super::diagnostics::VelocityDiagnostics;

// =============================================================================
// Inputs
// =============================================================================

/// Borrowed scalar inputs of the kernel for one time level.
#[derive(Clone, Copy, Debug)]
pub struct SiaInputs<'a> {
    /// Ice thickness per cell
    pub thickness: &'a [f64],
    /// Upper-surface elevation per cell
    pub upper_surface: &'a [f64],
    /// Upper-surface elevation per vertex
    pub upper_surface_vertex: &'a [f64],
    /// Classification bits per edge
    pub edge_mask: &'a [EdgeMask],
}

impl<'a> SiaInputs<'a> {
    /// Borrow the inputs from a snapshot.
    ///
    /// # Errors
    ///
    /// `MissingField` naming the first absent input.
    pub fn from_snapshot(snapshot: &'a FieldSnapshot) -> Result<Self, SiaError> {
        Ok(Self {
            thickness: required(&snapshot.thickness, "thickness")?,
            upper_surface: required(&snapshot.upper_surface, "upper_surface")?,
            upper_surface_vertex: required(&snapshot.upper_surface_vertex, "upper_surface_vertex")?,
            edge_mask: required(&snapshot.edge_mask, "edge_mask")?,
        })
    }
}

fn required<'a, T>(field: &'a Option<Vec<T>>, name: &str) -> Result<&'a [T], SiaError> {
    field.as_deref().ok_or_else(|| SiaError::missing(name))
}

/// Split a snapshot into its borrowed inputs and its mutable velocity.
fn split_snapshot(
    snapshot: &mut FieldSnapshot,
) -> Result<(SiaInputs<'_>, &mut VelocityField), SiaError> {
    let FieldSnapshot {
        thickness,
        upper_surface,
        upper_surface_vertex,
        edge_mask,
        normal_velocity,
    } = snapshot;

    let inputs = SiaInputs {
        thickness: required(thickness, "thickness")?,
        upper_surface: required(upper_surface, "upper_surface")?,
        upper_surface_vertex: required(upper_surface_vertex, "upper_surface_vertex")?,
        edge_mask: required(edge_mask, "edge_mask")?,
    };
    let velocity = normal_velocity
        .as_mut()
        .ok_or_else(|| SiaError::missing("normal_velocity"))?;

    Ok((inputs, velocity))
}

// =============================================================================
// Edge stencil
// =============================================================================

/// Values an active edge reads from its two cells and two vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStencil {
    /// Upper surface at (c1, c2)
    pub surface: [f64; 2],
    /// Upper surface at (v1, v2)
    pub surface_vertex: [f64; 2],
    /// Thickness at (c1, c2)
    pub thickness: [f64; 2],
    /// Distance between cell centers
    pub dc_edge: f64,
    /// Distance between vertices
    pub dv_edge: f64,
}

impl EdgeStencil {
    /// Gather the stencil of one edge.
    ///
    /// Indices must already have been range-checked.
    #[inline]
    pub fn gather(mesh: &MeshGeometry, inputs: &SiaInputs<'_>, edge: EdgeIndex) -> Self {
        let e = edge.get();
        let [c1, c2] = mesh.cells_on_edge[e];
        let [v1, v2] = mesh.vertices_on_edge[e];
        Self {
            surface: [inputs.upper_surface[c1], inputs.upper_surface[c2]],
            surface_vertex: [inputs.upper_surface_vertex[v1], inputs.upper_surface_vertex[v2]],
            thickness: [inputs.thickness[c1], inputs.thickness[c2]],
            dc_edge: mesh.dc_edge[e],
            dv_edge: mesh.dv_edge[e],
        }
    }

    /// The same edge seen with its cells and vertices swapped.
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            surface: [self.surface[1], self.surface[0]],
            surface_vertex: [self.surface_vertex[1], self.surface_vertex[0]],
            thickness: [self.thickness[1], self.thickness[0]],
            ..self
        }
    }

    /// Signed surface slope along the cell-to-cell line.
    #[inline]
    pub fn normal_slope(&self) -> f64 {
        (self.surface[0] - self.surface[1]) / self.dc_edge
    }

    /// Signed surface slope along the vertex-to-vertex line.
    #[inline]
    pub fn tangent_slope(&self) -> f64 {
        (self.surface_vertex[0] - self.surface_vertex[1]) / self.dv_edge
    }

    /// Surface gradient magnitude from the two orthogonal slopes.
    #[inline]
    pub fn slope_magnitude(&self) -> f64 {
        let sn = self.normal_slope();
        let st = self.tangent_slope();
        (sn * sn + st * st).sqrt()
    }

    /// Edge thickness as the mean of the two cells.
    #[inline]
    pub fn edge_thickness(&self) -> f64 {
        let [h1, h2] = self.thickness;
        IceThickness::edge_mean(IceThickness::new(h1), IceThickness::new(h2)).meters()
    }
}

/// Velocity profile of one active edge.
///
/// Writes one value per entry of `sigma` into `out`.
///
/// ```
/// use sia_rs::equations::SiaConfig;
/// use sia_rs::solver::{EdgeStencil, edge_velocity_profile};
///
/// let stencil = EdgeStencil {
///     surface: [1010.0, 1000.0],
///     surface_vertex: [1005.0, 1005.0],
///     thickness: [100.0, 100.0],
///     dc_edge: 1000.0,
///     dv_edge: 1000.0,
/// };
/// let config = SiaConfig::new(910.0, 3.0, 1e-16);
/// let mut u = [0.0; 2];
/// edge_velocity_profile(&stencil, &config, &[0.0, 1.0], &mut u);
/// assert!(u[0] > 0.0);
/// assert_eq!(u[1], 0.0);
/// ```
pub fn edge_velocity_profile(stencil: &EdgeStencil, config: &SiaConfig, sigma: &[f64], out: &mut [f64]) {
    fill_edge_column(stencil, config, config.prefactor(), sigma, out);
}

#[inline]
fn fill_edge_column(
    stencil: &EdgeStencil,
    config: &SiaConfig,
    prefactor: f64,
    sigma: &[f64],
    out: &mut [f64],
) {
    config.column_profile_into(
        prefactor,
        stencil.edge_thickness(),
        stencil.normal_slope(),
        stencil.slope_magnitude(),
        sigma,
        out,
    );
}

// =============================================================================
// Validation
// =============================================================================

/// Check every precondition of the kernel without writing anything.
///
/// # Errors
///
/// - `InvalidParameter` for non-positive configuration values, sigma
///   outside [0, 1], negative or non-finite thickness or non-positive
///   distances on a dynamic edge
/// - `ShapeMismatch` for arrays inconsistent with the mesh, or adjacency
///   of a dynamic edge pointing outside the mesh
pub fn validate_inputs(
    mesh: &MeshGeometry,
    inputs: &SiaInputs<'_>,
    config: &SiaConfig,
    velocity: &VelocityField,
) -> Result<(), SiaError> {
    config.validate()?;
    mesh.check_shapes()?;
    mesh.levels.validate()?;

    check_len("thickness", mesh.n_cells, inputs.thickness.len())?;
    check_len("upper_surface", mesh.n_cells, inputs.upper_surface.len())?;
    check_len("upper_surface_vertex", mesh.n_vertices, inputs.upper_surface_vertex.len())?;
    check_len("edge_mask", mesh.n_edges, inputs.edge_mask.len())?;

    check_len("normal_velocity edges", mesh.n_edges, velocity.n_edges)?;
    check_len("normal_velocity levels", mesh.n_levels(), velocity.n_levels)?;
    check_len(
        "normal_velocity data",
        mesh.n_edges * mesh.n_levels(),
        velocity.data.len(),
    )?;

    for edge in EdgeIndex::iter(mesh.n_edges) {
        if !inputs.edge_mask[edge].is_dynamic_ice() {
            continue;
        }
        mesh.check_edge_stencil(edge)?;
        for c in mesh.cells_on_edge[edge] {
            let h = inputs.thickness[c];
            // Also rejects NaN
            if !(h >= 0.0 && h.is_finite()) {
                return Err(SiaError::invalid(
                    format!("thickness[{}]", c),
                    h,
                    "must be finite and non-negative on dynamic edges",
                ));
            }
        }
    }

    Ok(())
}

fn check_len(field: &str, expected: usize, actual: usize) -> Result<(), SiaError> {
    if expected != actual {
        return Err(SiaError::shape_mismatch(field, expected, actual));
    }
    Ok(())
}

// =============================================================================
// Kernel
// =============================================================================

/// Compute normal velocity on every edge (serial).
///
/// # Arguments
/// * `mesh` - Edge geometry and sigma levels
/// * `inputs` - Thickness, surfaces and edge mask for one time level
/// * `config` - Flow-law parameters
/// * `velocity` - Output, overwritten on success and untouched on error
pub fn compute_sia_velocity(
    mesh: &MeshGeometry,
    inputs: &SiaInputs<'_>,
    config: &SiaConfig,
    velocity: &mut VelocityField,
) -> Result<(), SiaError> {
    validate_inputs(mesh, inputs, config, velocity)?;

    let n_levels = mesh.n_levels();
    if n_levels == 0 {
        return Ok(());
    }

    let prefactor = config.prefactor();
    let sigma = mesh.levels.as_slice();

    for (e, column) in velocity.data.chunks_exact_mut(n_levels).enumerate() {
        let edge = EdgeIndex::new(e);
        if !inputs.edge_mask[edge].is_dynamic_ice() {
            column.fill(0.0);
            continue;
        }
        let stencil = EdgeStencil::gather(mesh, inputs, edge);
        fill_edge_column(&stencil, config, prefactor, sigma, column);
    }

    Ok(())
}

/// Parallel version of [`compute_sia_velocity`] using Rayon.
///
/// Each edge's column is an independent chunk of the output, so the edge
/// range is split across threads with no synchronization. Results are
/// bit-identical to the serial kernel.
#[cfg(feature = "parallel")]
pub fn compute_sia_velocity_parallel(
    mesh: &MeshGeometry,
    inputs: &SiaInputs<'_>,
    config: &SiaConfig,
    velocity: &mut VelocityField,
) -> Result<(), SiaError> {
    use rayon::prelude::*;

    validate_inputs(mesh, inputs, config, velocity)?;

    let n_levels = mesh.n_levels();
    if n_levels == 0 {
        return Ok(());
    }

    let prefactor = config.prefactor();
    let sigma = mesh.levels.as_slice();

    velocity
        .data
        .par_chunks_mut(n_levels)
        .enumerate()
        .for_each(|(e, column)| {
            let edge = EdgeIndex::new(e);
            if !inputs.edge_mask[edge].is_dynamic_ice() {
                column.fill(0.0);
                return;
            }
            let stencil = EdgeStencil::gather(mesh, inputs, edge);
            fill_edge_column(&stencil, config, prefactor, sigma, column);
        });

    Ok(())
}

/// Compute velocity for one time level of a field store.
///
/// Reads the inputs of `level` and overwrites its velocity. Uses the
/// parallel kernel when the `parallel` feature is enabled.
pub fn solve<const N: usize>(
    mesh: &MeshGeometry,
    store: &mut FieldStore<N>,
    level: TimeLevel,
    config: &SiaConfig,
) -> Result<(), SiaError> {
    let snapshot = store.snapshot_mut(level)?;
    let (inputs, velocity) = split_snapshot(snapshot)?;

    #[cfg(feature = "parallel")]
    compute_sia_velocity_parallel(mesh, &inputs, config, velocity)?;
    #[cfg(not(feature = "parallel"))]
    compute_sia_velocity(mesh, &inputs, config, velocity)?;

    if log::log_enabled!(log::Level::Debug) {
        let diag = VelocityDiagnostics::compute(mesh, velocity, inputs.edge_mask);
        log::debug!("SIA velocity at {}: {}", level, diag.summary_line());
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
