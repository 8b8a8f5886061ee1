//! # sia-rs
//!
//! Shallow Ice Approximation velocity on the edges of an unstructured mesh.
//!
//! This crate provides the building blocks of the SIA velocity solve:
//! - Typed mesh indices and edge classification masks
//! - Sigma-coordinate vertical levels
//! - Edge-based mesh geometry (connectivity and distances)
//! - Glen's flow law parameters
//! - The edge kernel (serial and, with `parallel`, rayon-based)
//! - Time-leveled field storage and a multi-block driver
//!
//! # Example
//!
//! ```
//! use sia_rs::{EdgeMask, MeshGeometry, SiaConfig, SigmaLevels, VelocityField, compute_sia_velocity};
//! use sia_rs::solver::SiaInputs;
//!
//! let mesh = MeshGeometry::structured_quad(2, 1, 1000.0, 1000.0, SigmaLevels::uniform(5));
//! let inputs = SiaInputs {
//!     thickness: &[500.0, 500.0],
//!     upper_surface: &[1010.0, 1000.0],
//!     upper_surface_vertex: &[0.0; 6],
//!     edge_mask: &[EdgeMask::DYNAMIC_ICE],
//! };
//! let mut velocity = VelocityField::zeros(mesh.n_edges, mesh.n_levels());
//!
//! compute_sia_velocity(&mesh, &inputs, &SiaConfig::default(), &mut velocity).unwrap();
//! assert!(velocity.data.iter().all(|&u| u > 0.0));
//! ```

pub mod equations;
pub mod error;
pub mod fields;
pub mod mesh;
pub mod physics;
pub mod simulation;
pub mod solver;
pub mod types;
pub mod vertical;

// Re-export main types for convenience
pub use equations::{SiaConfig, SiaConfigBuilder};
pub use error::{SiaError, status_code};
pub use fields::{FieldSnapshot, FieldStore, TimeLevel, VelocityField};
pub use mesh::MeshGeometry;
pub use physics::{SiaVelocitySolver, VelocitySolver};
pub use simulation::{Block, Domain, DomainError, run_lifecycle, run_time_level};
pub use solver::{VelocityDiagnostics, compute_sia_velocity, solve};
pub use types::{CellIndex, EdgeIndex, EdgeMask, IceThickness, LevelIndex, Sigma, VertexIndex};
pub use vertical::SigmaLevels;

#[cfg(feature = "parallel")]
pub use solver::compute_sia_velocity_parallel;
