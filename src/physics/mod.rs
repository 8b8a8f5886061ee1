//! Velocity solver abstraction.
//!
//! This module provides the host-facing interface for velocity solvers.
//! It abstracts over the details of:
//! - Configuration validation
//! - The init / block-init / solve / finalize lifecycle
//!
//! # Key Types
//!
//! - [`VelocitySolver`]: Lifecycle trait called by the host driver
//! - [`SiaVelocitySolver`]: Shallow Ice Approximation implementation
//!
//! # Example
//! ```
//! use sia_rs::equations::SiaConfig;
//! use sia_rs::fields::{FieldStore, TimeLevel};
//! use sia_rs::mesh::MeshGeometry;
//! use sia_rs::physics::{SiaVelocitySolver, VelocitySolver};
//! use sia_rs::vertical::SigmaLevels;
//!
//! let mesh = MeshGeometry::structured_quad(4, 4, 1000.0, 1000.0, SigmaLevels::uniform(10));
//! let mut fields: FieldStore = FieldStore::zeros(&mesh);
//!
//! let solver = SiaVelocitySolver::new(SiaConfig::default()).unwrap();
//! solver.solve(&mesh, &mut fields, TimeLevel::CURRENT).unwrap();
//! ```

mod sia;
mod traits;

pub use sia::SiaVelocitySolver;
pub use traits::VelocitySolver;
