//! Ice flow laws.
//!
//! Provides the Shallow Ice Approximation of Glen's flow law:
//!
//! u(σ) = u_b + ½ A (ρ g)ⁿ |∇s|ⁿ⁻¹ ∂s/∂x (Hⁿ⁺¹ − (H − h)ⁿ⁺¹)
//!
//! where h = H (1 − σ) is the height above the bed.

mod shallow_ice;

pub use shallow_ice::{
    BASAL_VELOCITY, FLOW_LAW_EXPONENT, GRAVITY, ICE_DENSITY, RATE_FACTOR, SECONDS_PER_YEAR,
    SiaConfig, SiaConfigBuilder,
};
