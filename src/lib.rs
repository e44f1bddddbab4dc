//! Bondsim solves incremental, path-dependent equilibrium problems of one-dimensional
//! bar and bond-interface finite elements (e.g., pull-out tests and crack bridges)
//!
//! The interface between matrix and reinforcement follows an elastoplastic law with
//! damage softening; the global equations are solved by a Newton-Raphson driver
//! with predictor/corrector sub-steps.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod fem;
pub mod material;
pub mod prelude;
