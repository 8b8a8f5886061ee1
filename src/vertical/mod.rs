//! Vertical coordinate for the ice column.
//!
//! Layers are described by normalized sigma coordinates that follow both
//! the bed and the upper surface:
//!
//! - σ = 0 at the upper surface
//! - σ = 1 at the bed
//!
//! The height of a layer center above the bed is `H × (1 − σ)`.
//!
//! # Example
//!
//! ```
//! use sia_rs::vertical::SigmaLevels;
//!
//! let levels = SigmaLevels::from_centers(vec![0.05, 0.5, 0.95]).unwrap();
//! assert_eq!(levels.n_levels(), 3);
//!
//! // Values outside [0, 1] are rejected
//! assert!(SigmaLevels::from_centers(vec![1.2]).is_err());
//! ```

mod sigma;

pub use sigma::SigmaLevels;
