//! SIA velocity solver components.
//!
//! # Submodules
//!
//! - [`diagnostics`]: Velocity field statistics
//!
//! # Kernel
//!
//! [`compute_sia_velocity`] fills the normal velocity of every dynamic-ice
//! edge at every sigma level. [`solve`] does the same against a
//! time-leveled [`FieldStore`](crate::fields::FieldStore).

pub mod diagnostics;
mod sia;

pub use sia::{
    EdgeStencil, SiaInputs, compute_sia_velocity, edge_velocity_profile, solve, validate_inputs,
};

#[cfg(feature = "parallel")]
pub use sia::compute_sia_velocity_parallel;

pub use diagnostics::VelocityDiagnostics;
