use crate::base::{Mesh, Natural, Pbc};
use crate::StrError;
use russell_lab::Vector;

/// Holds a collection of concentrated (point) loads
pub struct BcConcentratedArray {
    /// All values
    pub all: Vec<Pbc>,
}

impl BcConcentratedArray {
    /// Allocates a new instance
    pub fn new(mesh: &Mesh, natural: &Natural) -> Result<Self, StrError> {
        if natural.n_dof() != mesh.n_dof {
            return Err("the number of DOFs of Natural and Mesh must be equal");
        }
        Ok(BcConcentratedArray {
            all: natural.points.clone(),
        })
    }

    /// Adds all concentrated load values at given time to the external forces vector
    ///
    /// **Note:** Loads at the same DOF are added together.
    pub fn add_to_ff_ext(&self, ff_ext: &mut Vector, time: f64) {
        for pbc in &self.all {
            ff_ext[pbc.dof] += pbc.value * (pbc.f)(time);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
