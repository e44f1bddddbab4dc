use super::{ElementLine, FemBase, FemState, GaussFailure, IntegScheme};
use crate::base::{assemble_lifting, assemble_matrix, assemble_vector, Config, Mesh};
use crate::StrError;
use russell_lab::Vector;
use russell_sparse::CooMatrix;

/// Holds a collection of line elements
pub struct Elements {
    /// All elements (in the order of the mesh cells)
    pub all: Vec<ElementLine>,
}

impl Elements {
    /// Allocates a new instance
    pub fn new(mesh: &Mesh, base: &FemBase, config: &Config) -> Result<Self, StrError> {
        let scheme = IntegScheme::from_flag(config.nodal_integration);
        let res: Result<Vec<_>, _> = mesh
            .cells
            .iter()
            .map(|cell| ElementLine::new(cell, base.get(cell)?, scheme))
            .collect();
        Ok(Elements { all: res? })
    }

    /// Returns the sum of the squared number of local DOFs (upper bound of the non-zeros in K)
    pub fn nnz_sup(&self) -> usize {
        self.all.iter().fold(0, |acc, e| {
            let n = e.local_to_global.len();
            acc + n * n
        })
    }

    /// Calculates the residual vectors and assembles the internal forces vector
    ///
    /// **Note:** The global vector F_int is cleared at the beginning; all rows are assembled,
    /// thus the entries of the prescribed DOFs hold the reactions.
    pub fn assemble_ff_int(&mut self, ff_int: &mut Vector) {
        ff_int.fill(0.0); // << important
        for e in &mut self.all {
            e.calc_residual();
            assemble_vector(ff_int, &e.residual, &e.local_to_global);
        }
    }

    /// Calculates the Jacobian matrices of all elements
    pub fn calc_jacobians(&mut self) -> Result<(), GaussFailure> {
        for e in &mut self.all {
            e.calc_jacobian()?;
        }
        Ok(())
    }

    /// Assembles the Jacobian matrices into the global matrix
    ///
    /// **Notes:**
    ///
    /// 1. You must call `calc_jacobians` first
    /// 2. The CooMatrix position in the global matrix K will be reset at the beginning
    /// 3. The rows and columns of prescribed DOFs are skipped
    pub fn assemble_kk(&self, kk: &mut CooMatrix, prescribed: &[bool]) -> Result<(), StrError> {
        kk.reset(); // << important
        for e in &self.all {
            assemble_matrix(kk, &e.jacobian, &e.local_to_global, prescribed)?;
        }
        Ok(())
    }

    /// Adds K_fc · ΔŪ to the free rows of the residual vector
    ///
    /// **Note:** You must call `calc_jacobians` first.
    pub fn assemble_lifting(&self, rr: &mut Vector, prescribed: &[bool], ddu_bar: &Vector) {
        for e in &self.all {
            assemble_lifting(rr, &e.jacobian, &e.local_to_global, prescribed, ddu_bar);
        }
    }

    /// Resets the trial states of all elements to the committed states
    pub fn reset_trial_states(&mut self, state: &FemState) {
        for e in &mut self.all {
            e.reset_trial_states(&state.gauss[e.cell_id]);
        }
    }

    /// Updates the trial states of all elements given the committed states and state.duu
    pub fn update_trial_states(&mut self, state: &FemState) -> Result<(), GaussFailure> {
        for e in &mut self.all {
            e.update_trial_states(&state.gauss[e.cell_id], &state.duu)?;
        }
        Ok(())
    }

    /// Copies the trial states of all elements into the committed state
    pub fn commit(&self, state: &mut FemState) {
        for e in &self.all {
            e.commit(&mut state.gauss[e.cell_id]);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
