//! Runtime diagnostics.
//!
//! - [`VelocityDiagnostics`]: bounds and surface-speed statistics of a velocity field

mod diagnostics;

pub use diagnostics::VelocityDiagnostics;
