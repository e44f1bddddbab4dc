//! Implements material models

mod bond_slip;
mod bond_slip_path;
mod linear_elastic;
mod local_state;
mod stress_strain;
pub use crate::material::bond_slip::*;
pub use crate::material::bond_slip_path::*;
pub use crate::material::linear_elastic::*;
pub use crate::material::local_state::*;
pub use crate::material::stress_strain::*;
