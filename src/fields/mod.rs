//! Field storage consumed and produced by the velocity kernel.
//!
//! - [`FieldStore`]: fixed array of per-time-level snapshots
//! - [`FieldSnapshot`]: thickness, surfaces and edge mask at one level
//! - [`VelocityField`]: per-edge, per-level normal velocity output

mod store;
mod velocity;

pub use store::{FieldSnapshot, FieldStore, TimeLevel};
pub use velocity::VelocityField;
