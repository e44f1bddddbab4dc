use super::{calc_bb, lin2_jacobian, IntegScheme, LineKind, N_INTEG_POINT};
use crate::base::{Cell, Elem};
use crate::material::{LocalState, StressStrain};
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Holds the location and message of a failed local state update
#[derive(Clone, Debug)]
pub struct GaussFailure {
    /// Index of the element (cell id)
    pub element: usize,

    /// Index of the integration point
    pub gauss: usize,

    /// Message from the stress-strain model
    pub message: &'static str,
}

/// Implements a two-node line element (bar or bond) with nonlinear channel-wise materials
///
/// The local vectors and matrices are computed by numerical integration:
///
/// ```text
/// f = Σ_p w_p Bᵀ (a ∘ σ) |J|
/// k = Σ_p w_p Bᵀ diag(a) D B |J|
/// ```
///
/// where `a` holds the area factors of each channel (Bar: `[A]`; Bond: `[A_m, perimeter, A_f]`).
pub struct ElementLine {
    /// Index of the cell
    pub cell_id: usize,

    /// Element family
    pub kind: LineKind,

    /// Local-to-global mapping
    pub local_to_global: Vec<usize>,

    /// Area factors of each channel
    pub areas: Vec<f64>,

    /// Reference coordinates and weights of the integration points
    integ_points: [(f64, f64); N_INTEG_POINT],

    /// Jacobian (determinant) dx/dr
    pub det_jac: f64,

    /// Strain-displacement matrices at the integration points
    pub bbs: Vec<Matrix>,

    /// Stress-strain model
    model: StressStrain,

    /// Trial local states at the integration points
    pub trial: Vec<LocalState>,

    /// Residual vector (local internal forces)
    pub residual: Vector,

    /// Jacobian matrix (local tangent stiffness)
    pub jacobian: Matrix,

    /// Auxiliary tangent modulus matrix (n_channel × n_channel)
    dd: Matrix,

    /// Auxiliary local displacement increment
    duu_local: Vector,

    /// Auxiliary strain increment
    delta_strain: Vector,
}

impl ElementLine {
    /// Allocates a new instance
    pub fn new(cell: &Cell, elem: &Elem, scheme: IntegScheme) -> Result<Self, StrError> {
        let kind = LineKind::from(elem);
        let n_local = kind.n_local_dof();
        let n_channel = kind.n_channel();
        if cell.dofs.len() != n_local {
            return Err("the number of cell DOFs is incompatible with the element family");
        }
        let areas = match elem {
            Elem::Bar(p) => vec![p.area],
            Elem::Bond(p) => vec![p.area_matrix, p.perimeter, p.area_fiber],
        };
        let model = StressStrain::new(elem)?;
        let mut trial = Vec::with_capacity(N_INTEG_POINT);
        for _ in 0..N_INTEG_POINT {
            trial.push(model.new_local_state()?);
        }
        let integ_points = scheme.points();
        let det_jac = lin2_jacobian(&cell.coords)?;
        let mut bbs = vec![Matrix::new(n_channel, n_local); N_INTEG_POINT];
        for p in 0..N_INTEG_POINT {
            calc_bb(&mut bbs[p], kind, integ_points[p].0, det_jac);
        }
        Ok(ElementLine {
            cell_id: cell.id,
            kind,
            local_to_global: cell.dofs.clone(),
            areas,
            integ_points,
            det_jac,
            bbs,
            model,
            trial,
            residual: Vector::new(n_local),
            jacobian: Matrix::new(n_local, n_local),
            dd: Matrix::new(n_channel, n_channel),
            duu_local: Vector::new(n_local),
            delta_strain: Vector::new(n_channel),
        })
    }

    /// Calculates the residual vector (internal forces) using the trial stresses
    pub fn calc_residual(&mut self) {
        let (n_channel, n_local) = self.bbs[0].dims();
        self.residual.fill(0.0);
        for p in 0..N_INTEG_POINT {
            let coef = self.integ_points[p].1 * self.det_jac;
            let bb = &self.bbs[p];
            let sigma = &self.trial[p].stress;
            for i in 0..n_local {
                for c in 0..n_channel {
                    self.residual[i] += coef * bb.get(c, i) * self.areas[c] * sigma[c];
                }
            }
        }
    }

    /// Calculates the Jacobian matrix (tangent stiffness) using the trial states
    pub fn calc_jacobian(&mut self) -> Result<(), GaussFailure> {
        let (n_channel, n_local) = self.bbs[0].dims();
        self.jacobian.fill(0.0);
        for p in 0..N_INTEG_POINT {
            self.model
                .actual
                .stiffness(&mut self.dd, &self.trial[p])
                .map_err(|message| GaussFailure {
                    element: self.cell_id,
                    gauss: p,
                    message,
                })?;
            let coef = self.integ_points[p].1 * self.det_jac;
            let bb = &self.bbs[p];
            for i in 0..n_local {
                for j in 0..n_local {
                    let mut sum = 0.0;
                    for c in 0..n_channel {
                        for d in 0..n_channel {
                            sum += bb.get(c, i) * self.areas[c] * self.dd.get(c, d) * bb.get(d, j);
                        }
                    }
                    let kij = self.jacobian.get(i, j);
                    self.jacobian.set(i, j, kij + coef * sum);
                }
            }
        }
        Ok(())
    }

    /// Resets the trial states to the committed states
    pub fn reset_trial_states(&mut self, committed: &[LocalState]) {
        for p in 0..N_INTEG_POINT {
            self.trial[p].mirror(&committed[p]);
        }
    }

    /// Updates the trial states from the committed states given the cumulated increment ΔU
    ///
    /// The strain increment at each integration point is `Δε = B ΔU_local`.
    pub fn update_trial_states(&mut self, committed: &[LocalState], duu: &Vector) -> Result<(), GaussFailure> {
        let (n_channel, n_local) = self.bbs[0].dims();
        for l in 0..n_local {
            self.duu_local[l] = duu[self.local_to_global[l]];
        }
        for p in 0..N_INTEG_POINT {
            for c in 0..n_channel {
                self.delta_strain[c] = 0.0;
                for l in 0..n_local {
                    self.delta_strain[c] += self.bbs[p].get(c, l) * self.duu_local[l];
                }
            }
            self.trial[p].mirror(&committed[p]);
            self.model
                .actual
                .update_stress(&mut self.trial[p], &self.delta_strain)
                .map_err(|message| GaussFailure {
                    element: self.cell_id,
                    gauss: p,
                    message,
                })?;
        }
        Ok(())
    }

    /// Copies the trial states into the committed states
    pub fn commit(&self, committed: &mut [LocalState]) {
        for p in 0..N_INTEG_POINT {
            committed[p].mirror(&self.trial[p]);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
