use super::{BcPrescribedArray, Elements, FemBase};
use crate::base::Config;
use crate::StrError;
use russell_lab::Vector;
use russell_sparse::{CooMatrix, LinSolver, Sym};

/// Holds variables to solve the global linear system
pub struct LinearSystem<'a> {
    /// Total number of global equations (total number of DOFs)
    pub n_equation: usize,

    /// Holds the supremum of the number of nonzero values (nnz) in the global matrix
    ///
    /// **Notes:**
    ///
    /// 1. The global matrix is sparse with the number of nonzero values indicated by `nnz`
    /// 2. The local element matrices add only to parts of the global matrix yielding a banded matrix
    /// 3. The number of entries in a local matrix is `n_local × n_local`
    /// 4. The least upper bound (supremum) of nnz, indicated here by `nnz_sup`, is equal to the
    ///    sum of all the number of entries in the local matrices plus the number of prescribed
    ///    equations since we will put ones on the diagonal of the global matrix; thus
    ///    `nnz ≤ n_prescribed + Σ (n_local × n_local)`
    pub nnz_sup: usize,

    /// Holds the internal forces vector F_int
    pub ff_int: Vector,

    /// Holds the external forces vector F_ext
    pub ff_ext: Vector,

    /// Holds the residual vector R = F_int - F_ext
    pub rr: Vector,

    /// Holds the prescribed increments ΔŪ (only the prescribed entries are used)
    pub ddu_bar: Vector,

    /// Holds the global Jacobian matrix K
    pub kk: CooMatrix,

    /// Holds the linear solver
    pub solver: LinSolver<'a>,

    /// Holds the "minus-delta-U" vector (the solution of the linear system)
    pub mdu: Vector,
}

impl<'a> LinearSystem<'a> {
    /// Allocates a new instance
    pub fn new(
        base: &FemBase,
        config: &Config,
        prescribed: &BcPrescribedArray,
        elements: &Elements,
    ) -> Result<Self, StrError> {
        let n_equation = base.n_dof;
        let nnz_sup = prescribed.equations.len() + elements.nnz_sup();
        Ok(LinearSystem {
            n_equation,
            nnz_sup,
            ff_int: Vector::new(n_equation),
            ff_ext: Vector::new(n_equation),
            rr: Vector::new(n_equation),
            ddu_bar: Vector::new(n_equation),
            kk: CooMatrix::new(n_equation, n_equation, nnz_sup, Sym::No)?,
            solver: LinSolver::new(config.lin_sol_genie)?,
            mdu: Vector::new(n_equation),
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
