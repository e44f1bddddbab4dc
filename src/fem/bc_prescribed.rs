use crate::base::{Ebc, Essential, Mesh};
use crate::StrError;
use russell_lab::Vector;

/// Defines the tolerance (relative to max(1, |ū|)) to accept the displacement of a prescribed DOF
const PRESCRIBED_TOL: f64 = 1e-10;

/// Implements an array of prescribed (essential) values
///
/// The prescribed value at time t is `value · f(t)`. During a load step from `t_prev` to
/// `t_next`, the increment `Δū = scale · value · (f(t_next) - f(t_prev))` is applied with
/// `scale = 1` on the predictor and `scale = 0` on the correctors.
pub struct BcPrescribedArray {
    /// All values
    pub all: Vec<Ebc>,

    /// An array indicating which DOFs (equations) are prescribed
    ///
    /// The length of `flags` is equal to `n_dof`, the total number of DOFs (total number of equations).
    pub flags: Vec<bool>,

    /// Array with only the DOFs numbers of the prescribed equations
    ///
    /// Compared to the array `flags`, this is a "smaller" array with only the prescribed DOFs numbers.
    pub equations: Vec<usize>,
}

impl BcPrescribedArray {
    /// Allocates a new instance
    pub fn new(mesh: &Mesh, essential: &Essential) -> Result<Self, StrError> {
        if essential.n_dof() != mesh.n_dof {
            return Err("the number of DOFs of Essential and Mesh must be equal");
        }
        let mut flags = vec![false; mesh.n_dof];
        let mut equations = Vec::with_capacity(essential.all.len());
        for ebc in &essential.all {
            flags[ebc.dof] = true;
            equations.push(ebc.dof);
        }
        Ok(BcPrescribedArray {
            all: essential.all.clone(),
            flags,
            equations,
        })
    }

    /// Returns true if there are no prescribed values
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// Calculates the prescribed increments from t_prev to t_next
    ///
    /// Only the prescribed entries of `ddu_bar` are written.
    pub fn increment(&self, ddu_bar: &mut Vector, t_prev: f64, t_next: f64, scale: f64) {
        for ebc in &self.all {
            ddu_bar[ebc.dof] = scale * (ebc.value_at(t_next) - ebc.value_at(t_prev));
        }
    }

    /// Returns the first prescribed condition whose displacement differs from `value · f(t)`
    ///
    /// Since only increments are applied, a mismatch at the start of a run would persist.
    pub fn find_mismatch(&self, uu: &Vector, t: f64) -> Option<&Ebc> {
        self.all.iter().find(|ebc| {
            let value = ebc.value_at(t);
            f64::abs(uu[ebc.dof] - value) > PRESCRIBED_TOL * f64::max(1.0, f64::abs(value))
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
