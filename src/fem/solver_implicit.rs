use super::{BcConcentratedArray, BcPrescribedArray, ControlConvergence, Elements};
use super::{FemBase, FemState, GaussFailure, History, LinearSystem, SimError};
use crate::base::{Config, Essential, Mesh, Natural};
use crate::StrError;
use russell_lab::vec_add;

/// Defines the tolerance (relative to Δt) to accept the last time step at t_fin
const T_FIN_TOL: f64 = 1e-8;

/// Implements the implicit (Newton-Raphson) finite element solver
///
/// Each time (load) step from `t_prev` to `t_next = t_prev + Δt` consists of:
///
/// 1. **Predictor** (iteration 0): the full increment of the prescribed values is applied
///    (with the coupling term `K_fc · ΔŪ` added to the free rows of the residual)
/// 2. **Correctors** (iterations 1, 2, ...): the residual is re-assembled at the current trial
///    displacements and solved with zero prescribed increments
/// 3. **Converged**: `‖R‖₂ < tol` at a corrector; the trial local states are committed and
///    a record is appended to the history
///
/// If the residual does not converge within `n_max_iterations` correctors, the run stops with
/// [SimError::StepNonConvergence]. The committed state is never modified by a failed step.
pub struct SolverImplicit<'a> {
    /// Holds configuration parameters
    pub config: &'a Config,

    /// Holds a collection of concentrated loads
    pub bc_concentrated: BcConcentratedArray,

    /// Holds a collection of prescribed (primary) values
    pub bc_prescribed: BcPrescribedArray,

    /// Holds a collection of elements
    pub elements: Elements,

    /// Holds variables to solve the global linear system
    pub linear_system: LinearSystem<'a>,

    /// Holds the DOFs that are not connected to any element
    disconnected: Vec<usize>,
}

impl<'a> SolverImplicit<'a> {
    /// Allocates a new instance
    pub fn new(
        mesh: &Mesh,
        base: &FemBase,
        config: &'a Config,
        essential: &Essential,
        natural: &Natural,
    ) -> Result<Self, StrError> {
        if let Some(msg) = config.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate simulation because config.validate() failed");
        }
        mesh.check()?;
        if mesh.n_dof != base.n_dof {
            return Err("the number of DOFs of the mesh and FemBase must be equal");
        }
        let bc_concentrated = BcConcentratedArray::new(mesh, natural)?;
        let bc_prescribed = BcPrescribedArray::new(mesh, essential)?;
        let elements = Elements::new(mesh, base, config)?;
        let linear_system = LinearSystem::new(base, config, &bc_prescribed, &elements)?;
        Ok(SolverImplicit {
            config,
            bc_concentrated,
            bc_prescribed,
            elements,
            linear_system,
            disconnected: base.disconnected_dofs(),
        })
    }

    /// Solves the equilibrium equations from state.t until config.t_fin
    ///
    /// If the history is empty, the initial state is recorded first. The displacements of the
    /// prescribed DOFs must equal `value · f(state.t)` at the start.
    pub fn solve(&mut self, state: &mut FemState, history: &mut History) -> Result<(), SimError> {
        // accessors
        let config = self.config;
        let elements = &mut self.elements;
        let prescribed = &self.bc_prescribed;
        let ls = &mut self.linear_system;
        let n_dof = ls.n_equation;

        // check the state
        if state.uu.dim() != n_dof || state.duu.dim() != n_dof {
            return Err(SimError::Other("the number of DOFs of FemState and FemBase must be equal"));
        }
        if state.gauss.len() != elements.all.len() {
            return Err(SimError::Other("the number of cells of FemState and Elements must be equal"));
        }

        // check the constraints
        if prescribed.is_empty() {
            return Err(SimError::SingularSystem {
                timestep: 0,
                iteration: 0,
                message: "there are no essential boundary conditions".to_string(),
            });
        }
        if let Some(dof) = self.disconnected.iter().find(|dof| !prescribed.flags[**dof]) {
            return Err(SimError::SingularSystem {
                timestep: 0,
                iteration: 0,
                message: format!("the free DOF {} is not connected to any element", dof),
            });
        }

        // check the prescribed values at the start of the run
        if let Some(ebc) = prescribed.find_mismatch(&state.uu, state.t) {
            return Err(SimError::PrescribedMismatch {
                dof: ebc.dof,
                t: state.t,
                value: ebc.value_at(state.t),
                uu: state.uu[ebc.dof],
            });
        }

        // initial record
        elements.reset_trial_states(state);
        if history.is_empty() {
            elements.assemble_ff_int(&mut ls.ff_int);
            history.push(state.t, &state.uu, &ls.ff_int, &state.gauss);
        }

        // allocate convergence control
        let mut control = ControlConvergence::new(config);
        control.print_header();

        // helper macro to restore the committed U before returning an error
        macro_rules! run {
            ($e:expr) => {
                match $e {
                    Ok(val) => val,
                    Err(err) => {
                        for i in 0..n_dof {
                            state.uu[i] -= state.duu[i];
                            state.duu[i] = 0.0;
                        }
                        control.print_footer();
                        return Err(err);
                    }
                }
            };
        }

        // time loop
        let t_start = state.t;
        let mut timestep = 0;
        loop {
            // update time
            let t_prev = state.t;
            let t_next = t_start + ((timestep + 1) as f64) * config.dt;
            if t_next > config.t_fin + T_FIN_TOL * config.dt {
                break;
            }
            state.dt = config.dt;
            control.reset();
            control.print_timestep(timestep, t_next, config.dt);

            // reset cumulated primary values and trial states
            state.duu.fill(0.0);
            elements.reset_trial_states(state);

            // external forces at the new time
            ls.ff_ext.fill(0.0);
            self.bc_concentrated.add_to_ff_ext(&mut ls.ff_ext, t_next);

            // iterations (0 is the predictor)
            for iteration in 0..=config.n_max_iterations {
                // residual vector R = F_int - F_ext with zero prescribed rows
                elements.assemble_ff_int(&mut ls.ff_int);
                run!(vec_add(&mut ls.rr, 1.0, &ls.ff_int, -1.0, &ls.ff_ext).map_err(SimError::Other));
                for eq in &prescribed.equations {
                    ls.rr[*eq] = 0.0;
                }

                // check convergence
                run!(control.analyze_rr(iteration, &ls.rr).map_err(|e| singular(timestep, iteration, e)));
                if control.converged() {
                    control.print_iteration();
                    break;
                }
                if iteration == config.n_max_iterations {
                    control.print_iteration();
                    let err = SimError::StepNonConvergence {
                        timestep,
                        t: t_next,
                        iterations: iteration,
                        norm_rr: control.norm_rr(),
                    };
                    run!(Err::<(), SimError>(err));
                }

                // Jacobian matrix with ones on the diagonal of prescribed equations
                run!(elements
                    .calc_jacobians()
                    .map_err(|f| local_failure(timestep, iteration, f)));
                run!(elements.assemble_kk(&mut ls.kk, &prescribed.flags).map_err(SimError::Other));
                for eq in &prescribed.equations {
                    run!(ls.kk.put(*eq, *eq, 1.0).map_err(SimError::Other));
                }

                // prescribed increments (scale = 1 on the predictor and 0 on the correctors)
                let scale = if iteration == 0 { 1.0 } else { 0.0 };
                prescribed.increment(&mut ls.ddu_bar, t_prev, t_next, scale);
                if iteration == 0 {
                    elements.assemble_lifting(&mut ls.rr, &prescribed.flags, &ls.ddu_bar);
                }

                // solve linear system K · mdu = R
                run!(ls
                    .solver
                    .actual
                    .factorize(&ls.kk, None)
                    .map_err(|e| singular(timestep, iteration, e)));
                run!(ls
                    .solver
                    .actual
                    .solve(&mut ls.mdu, &ls.rr, false)
                    .map_err(|e| singular(timestep, iteration, e)));
                run!(control.analyze_mdu(&ls.mdu).map_err(|e| singular(timestep, iteration, e)));
                control.print_iteration();

                // update U and ΔU
                for i in 0..n_dof {
                    let delta = if prescribed.flags[i] { ls.ddu_bar[i] } else { -ls.mdu[i] };
                    state.uu[i] += delta;
                    state.duu[i] += delta;
                }

                // update trial local states from the committed ones
                run!(elements
                    .update_trial_states(state)
                    .map_err(|f| local_failure(timestep, iteration, f)));
            }

            // commit
            elements.commit(state);
            state.t = t_next;
            control.add_converged();
            history.push(state.t, &state.uu, &ls.ff_int, &state.gauss);
            timestep += 1;
        }
        control.print_footer();
        Ok(())
    }
}

/// Returns a SingularSystem error
fn singular(timestep: usize, iteration: usize, message: StrError) -> SimError {
    SimError::SingularSystem {
        timestep,
        iteration,
        message: message.to_string(),
    }
}

/// Returns a LocalStateUpdate error
fn local_failure(timestep: usize, iteration: usize, failure: GaussFailure) -> SimError {
    SimError::LocalStateUpdate {
        timestep,
        iteration,
        element: failure.element,
        gauss: failure.gauss,
        message: failure.message,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
