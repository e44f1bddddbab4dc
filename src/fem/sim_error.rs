use crate::StrError;
use thiserror::Error;

/// Defines the errors reported by the nonlinear solver
///
/// Each variant carries the step (and iteration) indices to help diagnosing the failure.
/// The committed state and the history are never changed by the failed step.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// The constitutive update failed at an integration point
    #[error("local state update failed at timestep {timestep}, iteration {iteration}, element {element}, gauss point {gauss}: {message}")]
    LocalStateUpdate {
        timestep: usize,
        iteration: usize,
        element: usize,
        gauss: usize,
        message: StrError,
    },

    /// The Newton-Raphson iterations did not converge within the allowed number of iterations
    #[error("timestep {timestep} (t = {t:?}) did not converge after {iterations} iterations (‖R‖ = {norm_rr:e})")]
    StepNonConvergence {
        timestep: usize,
        t: f64,
        iterations: usize,
        norm_rr: f64,
    },

    /// The global system is singular or ill-posed
    #[error("singular system at timestep {timestep}, iteration {iteration}: {message}")]
    SingularSystem {
        timestep: usize,
        iteration: usize,
        message: String,
    },

    /// The displacement of a prescribed DOF differs from its prescribed value at the start of a run
    #[error("the displacement {uu:?} of DOF {dof} differs from its prescribed value {value:?} at t = {t:?}")]
    PrescribedMismatch { dof: usize, t: f64, value: f64, uu: f64 },

    /// Other errors (allocation, invalid input data)
    #[error("{0}")]
    Other(StrError),
}

impl From<StrError> for SimError {
    fn from(err: StrError) -> Self {
        SimError::Other(err)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
