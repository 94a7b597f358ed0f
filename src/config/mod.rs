//! Configuration and parameters
//!
//! Tuning constants and the externally adjustable field parameters.

pub mod constants;
pub mod field_params;

pub use constants::*;
pub use field_params::*;
