//! Makes available common structures needed to run a simulation
//!
//! You may write `use bondsim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Config, Elem, Essential, Mesh, Natural, ParamBar, ParamBond, SampleMeshes, ScalarLaw};
pub use crate::fem::{FemBase, FemState, History, SimError, SolverImplicit};
