use super::TimeFn;
use crate::StrError;
use std::fmt;

/// Holds one concentrated (point) load
#[derive(Clone, Copy, Debug)]
pub struct Pbc {
    /// Global DOF number
    pub dof: usize,

    /// Reference value; the load at time t is `value · f(t)`
    pub value: f64,

    /// Time function f(t)
    pub f: TimeFn,
}

/// Holds natural boundary conditions (concentrated loads)
pub struct Natural {
    /// Total number of DOFs
    n_dof: usize,

    /// All point loads
    pub points: Vec<Pbc>,
}

impl Natural {
    /// Allocates a new instance
    pub fn new(n_dof: usize) -> Self {
        Natural {
            n_dof,
            points: Vec::new(),
        }
    }

    /// Sets a point load `value · t` at a DOF
    pub fn at(&mut self, dof: usize, value: f64) -> Result<&mut Self, StrError> {
        self.at_fn(dof, value, |t| t)
    }

    /// Sets a point load `value · f(t)` at a DOF
    pub fn at_fn(&mut self, dof: usize, value: f64, f: TimeFn) -> Result<&mut Self, StrError> {
        if dof >= self.n_dof {
            return Err("cannot set point load because DOF is out of range");
        }
        if !value.is_finite() {
            return Err("cannot set point load because value is not finite");
        }
        self.points.push(Pbc { dof, value, f });
        Ok(self)
    }

    /// Returns the total number of DOFs
    pub fn n_dof(&self) -> usize {
        self.n_dof
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point loads\n")?;
        write!(f, "===========\n")?;
        for pbc in &self.points {
            write!(f, "{} : {:?} · f(t)\n", pbc.dof, pbc.value)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
