//! Domain driver.
//!
//! This module provides the host-facing loop that ties together:
//! - Spatial partitions (blocks) with their own mesh and fields
//! - A [`VelocitySolver`](crate::physics::VelocitySolver) lifecycle
//!
//! # Example
//! ```
//! use sia_rs::equations::SiaConfig;
//! use sia_rs::fields::TimeLevel;
//! use sia_rs::mesh::MeshGeometry;
//! use sia_rs::physics::SiaVelocitySolver;
//! use sia_rs::simulation::{Block, Domain, run_lifecycle};
//! use sia_rs::vertical::SigmaLevels;
//!
//! let mesh = MeshGeometry::structured_quad(8, 8, 500.0, 500.0, SigmaLevels::uniform(10));
//! let mut domain: Domain = Domain::new(vec![Block::zeros(mesh)]);
//!
//! let solver = SiaVelocitySolver::new(SiaConfig::default()).unwrap();
//! run_lifecycle(&solver, &mut domain, TimeLevel::CURRENT).unwrap();
//! ```

mod runner;

pub use runner::{Block, Domain, DomainError, run_lifecycle, run_time_level};
