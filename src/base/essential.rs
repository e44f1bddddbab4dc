use crate::StrError;
use std::fmt;

/// Defines the time function scaling a prescribed value
pub type TimeFn = fn(t: f64) -> f64;

/// Holds one essential (Dirichlet) boundary condition
#[derive(Clone, Copy, Debug)]
pub struct Ebc {
    /// Global DOF number
    pub dof: usize,

    /// Reference value; the prescribed value at time t is `value · f(t)`
    ///
    /// The solver applies increments of `value · f(t)`; thus, the displacement at the start of
    /// a run must already equal `value · f(t_start)`, otherwise the run is rejected.
    pub value: f64,

    /// Time function f(t)
    pub f: TimeFn,

    /// Fixed (support) condition; the value is zero for the whole run
    pub fixed: bool,
}

/// Holds essential boundary conditions
///
/// Registrations fail immediately if the DOF is out of range or already constrained.
pub struct Essential {
    /// Total number of DOFs
    n_dof: usize,

    /// All conditions in the order of registration
    pub all: Vec<Ebc>,
}

impl Ebc {
    /// Returns the prescribed value at time t
    pub fn value_at(&self, t: f64) -> f64 {
        if self.fixed {
            0.0
        } else {
            self.value * (self.f)(t)
        }
    }
}

impl Essential {
    /// Allocates a new instance
    pub fn new(n_dof: usize) -> Self {
        Essential { n_dof, all: Vec::new() }
    }

    /// Fixes a DOF (support) for the whole simulation
    pub fn fix(&mut self, dof: usize) -> Result<&mut Self, StrError> {
        self.register(Ebc {
            dof,
            value: 0.0,
            f: |_| 0.0,
            fixed: true,
        })
    }

    /// Prescribes `value · t` at a DOF
    pub fn at(&mut self, dof: usize, value: f64) -> Result<&mut Self, StrError> {
        self.register(Ebc {
            dof,
            value,
            f: |t| t,
            fixed: false,
        })
    }

    /// Prescribes `value · f(t)` at a DOF
    pub fn at_fn(&mut self, dof: usize, value: f64, f: TimeFn) -> Result<&mut Self, StrError> {
        self.register(Ebc {
            dof,
            value,
            f,
            fixed: false,
        })
    }

    /// Returns the number of DOFs covered by this set
    pub fn n_dof(&self) -> usize {
        self.n_dof
    }

    /// Registers a condition
    fn register(&mut self, ebc: Ebc) -> Result<&mut Self, StrError> {
        if ebc.dof >= self.n_dof {
            return Err("cannot register essential boundary condition because DOF is out of range");
        }
        if self.all.iter().any(|e| e.dof == ebc.dof) {
            return Err("cannot register essential boundary condition because DOF is already constrained");
        }
        if !ebc.value.is_finite() {
            return Err("cannot register essential boundary condition because value is not finite");
        }
        self.all.push(ebc);
        Ok(self)
    }
}

impl fmt::Display for Essential {
    /// Prints a formatted summary of Boundary Conditions
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Essential boundary conditions\n")?;
        write!(f, "=============================\n")?;
        for ebc in &self.all {
            if ebc.fixed {
                write!(f, "{} : fixed\n", ebc.dof)?;
            } else {
                write!(f, "{} : {:?} · f(t) @ t=1 → {:?}\n", ebc.dof, ebc.value, ebc.value_at(1.0))?;
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
