//! Strongly-typed domain types for safer APIs.
//!
//! This module provides newtypes to make APIs self-documenting and
//! prevent parameter mix-ups.
//!
//! # Design Philosophy
//!
//! - **Newtypes prevent mix-ups**: `CellIndex(3)` vs `VertexIndex(3)` are distinct types
//! - **Named bits over magic numbers**: `EdgeMask::DYNAMIC_ICE` instead of `mask & 2`
//! - **Zero-cost abstractions**: All newtypes are `#[repr(transparent)]`
//!
//! # Example
//!
//! ```
//! use sia_rs::types::{EdgeMask, IceThickness, Sigma};
//!
//! let mask = EdgeMask::ICE | EdgeMask::DYNAMIC_ICE;
//! assert!(mask.is_dynamic_ice());
//!
//! let h = IceThickness::new(500.0);
//! let z = Sigma::new(0.2).height_above_bed(h);
//! assert!((z - 400.0).abs() < 1e-12);
//! ```

mod indices;
mod mask;
mod physical;

pub use indices::{CellIndex, EdgeIndex, LevelIndex, VertexIndex};
pub use mask::EdgeMask;
pub use physical::{IceThickness, Sigma};
