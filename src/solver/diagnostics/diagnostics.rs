//! Runtime diagnostics for SIA velocity fields.
//!
//! Provides a summary of a computed velocity field:
//! - Number of dynamic edges
//! - Velocity bounds over all levels
//! - Surface-layer speed statistics on dynamic edges
//!
//! # Example
//!
//! ```ignore
//! use sia_rs::solver::VelocityDiagnostics;
//!
//! let diag = VelocityDiagnostics::compute(&mesh, &velocity, &edge_mask);
//! log::info!("{}", diag.summary_line());
//! ```

use crate::fields::VelocityField;
use crate::mesh::MeshGeometry;
use crate::types::{EdgeIndex, EdgeMask, LevelIndex};

/// Diagnostic quantities of one velocity field.
#[derive(Clone, Debug, PartialEq)]
pub struct VelocityDiagnostics {
    /// Total number of edges
    pub n_edges: usize,
    /// Number of edges flagged as dynamic ice
    pub n_dynamic_edges: usize,
    /// Maximum |u| over all edges and levels
    pub max_speed: f64,
    /// Maximum |u| in the layer nearest the surface
    pub max_surface_speed: f64,
    /// Mean |u| in the layer nearest the surface, over dynamic edges
    pub mean_surface_speed: f64,
    /// False if any value is NaN or infinite
    pub all_finite: bool,
}

impl VelocityDiagnostics {
    /// Compute diagnostics of a velocity field.
    ///
    /// # Arguments
    /// * `mesh` - Geometry the field was computed on
    /// * `velocity` - Kernel output
    /// * `edge_mask` - Classification used for the computation
    pub fn compute(mesh: &MeshGeometry, velocity: &VelocityField, edge_mask: &[EdgeMask]) -> Self {
        debug_assert_eq!(edge_mask.len(), velocity.n_edges);

        let surface = mesh.levels.surface_level().map(LevelIndex::new);

        let mut n_dynamic_edges = 0;
        let mut max_surface_speed = 0.0_f64;
        let mut sum_surface_speed = 0.0;

        for edge in EdgeIndex::iter(velocity.n_edges) {
            if !edge_mask[edge].is_dynamic_ice() {
                continue;
            }
            n_dynamic_edges += 1;

            if let Some(level) = surface {
                let speed = velocity.get(edge, level).abs();
                max_surface_speed = max_surface_speed.max(speed);
                sum_surface_speed += speed;
            }
        }

        let mean_surface_speed = if n_dynamic_edges > 0 {
            sum_surface_speed / n_dynamic_edges as f64
        } else {
            0.0
        };

        Self {
            n_edges: velocity.n_edges,
            n_dynamic_edges,
            max_speed: velocity.max_abs(),
            max_surface_speed,
            mean_surface_speed,
            all_finite: velocity.data.iter().all(|u| u.is_finite()),
        }
    }

    /// Fraction of edges that are dynamic.
    pub fn dynamic_fraction(&self) -> f64 {
        if self.n_edges == 0 {
            0.0
        } else {
            self.n_dynamic_edges as f64 / self.n_edges as f64
        }
    }

    /// Format diagnostics as a single-line summary.
    pub fn summary_line(&self) -> String {
        format!(
            "dynamic={}/{} |u|_max={:.4e} |u_s|_max={:.4e} |u_s|_mean={:.4e}",
            self.n_dynamic_edges,
            self.n_edges,
            self.max_speed,
            self.max_surface_speed,
            self.mean_surface_speed
        )
    }
}
