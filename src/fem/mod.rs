//! Implements the finite element method for one-dimensional bar and bond elements

mod bc_concentrated;
mod bc_prescribed;
mod control_convergence;
mod element_line;
mod elements;
mod fem_base;
mod fem_state;
mod history;
mod linear_system;
mod shape;
mod sim_error;
mod solver_implicit;
mod sweep;
pub use crate::fem::bc_concentrated::*;
pub use crate::fem::bc_prescribed::*;
pub use crate::fem::control_convergence::*;
pub use crate::fem::element_line::*;
pub use crate::fem::elements::*;
pub use crate::fem::fem_base::*;
pub use crate::fem::fem_state::*;
pub use crate::fem::history::*;
pub use crate::fem::linear_system::*;
pub use crate::fem::shape::*;
pub use crate::fem::sim_error::*;
pub use crate::fem::solver_implicit::*;
pub use crate::fem::sweep::*;
