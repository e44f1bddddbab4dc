use super::{FemBase, FemState, History, IpQuantity, SimError, SolverImplicit};
use crate::base::{Config, Elem, Essential, Natural, ParamBond, SampleMeshes};
use crate::StrError;
use plotpy::linspace;

/// Holds the results of one crack-bridge run
pub struct CrackBridgeResult {
    /// Embedded length L
    pub length: f64,

    /// Prescribed pull-out displacement w at t = 1
    pub w_max: f64,

    /// Composite stress σc = F / A_c at each record (F is the pull-out force)
    pub composite_stress: Vec<f64>,

    /// History of the run
    pub history: History,
}

/// Runs a sequence of pull-out tests for log-spaced embedded lengths (crack bridges)
///
/// Each run uses a fresh mesh, state, and solver; thus, the results are independent of
/// the order of the runs. In each run, the matrix and fiber at x = 0 are fixed and the
/// fiber at x = L is pulled by
///
/// ```text
/// w = F_max / (E_f A_f) · L + slack · L
/// ```
pub struct CrackBridgeSweep {
    /// Bond parameters
    pub param: ParamBond,

    /// Number of cells of each mesh
    pub n_cell: usize,

    /// Smallest embedded length
    pub length_min: f64,

    /// Largest embedded length
    pub length_max: f64,

    /// Number of lengths
    pub n_length: usize,

    /// Force controlling the maximum pull-out displacement
    pub max_force: f64,

    /// Fiber slack (displacement per unit length)
    pub slack: f64,

    /// Cross-sectional area of the composite A_c
    pub area_composite: f64,
}

impl CrackBridgeSweep {
    /// Allocates a new instance with default values
    ///
    /// Cross-section of 120 × 13 mm², lengths from 1 to 500 mm, and maximum force of 20 MPa × A_c.
    pub fn new(param: ParamBond) -> Self {
        let area_composite = 120.0 * 13.0;
        CrackBridgeSweep {
            param,
            n_cell: 100,
            length_min: 1.0,
            length_max: 500.0,
            n_length: 50,
            max_force: 20.0 * area_composite,
            slack: 0.0,
            area_composite,
        }
    }

    /// Returns the log-spaced embedded lengths
    pub fn lengths(&self) -> Result<Vec<f64>, StrError> {
        if self.length_min <= 0.0 || self.length_max < self.length_min {
            return Err("the lengths must satisfy 0 < length_min ≤ length_max");
        }
        if self.n_length < 1 {
            return Err("the number of lengths must be ≥ 1");
        }
        if self.n_length == 1 {
            return Ok(vec![self.length_min]);
        }
        let exponents = linspace(f64::log10(self.length_min), f64::log10(self.length_max), self.n_length);
        Ok(exponents.iter().map(|x| f64::powf(10.0, *x)).collect())
    }

    /// Returns the prescribed pull-out displacement for an embedded length
    pub fn w_max(&self, length: f64) -> f64 {
        self.max_force / (self.param.young_fiber * self.param.area_fiber) * length + self.slack * length
    }

    /// Runs the pull-out test for a single embedded length
    pub fn run_one(&self, config: &Config, length: f64) -> Result<CrackBridgeResult, SimError> {
        if self.n_cell < 1 {
            return Err(SimError::Other("the number of cells must be ≥ 1"));
        }
        if self.area_composite <= 0.0 {
            return Err(SimError::Other("the composite area must be positive"));
        }
        let mesh = SampleMeshes::bonds(length, self.n_cell, 1);
        let base = FemBase::new(&mesh, [(1, Elem::Bond(self.param.clone()))])?;
        let fiber_dof = mesh.n_dof - 1;
        let w_max = self.w_max(length);
        let mut essential = Essential::new(mesh.n_dof);
        essential.fix(0)?.fix(1)?.at(fiber_dof, w_max)?;
        let natural = Natural::new(mesh.n_dof);
        let mut solver = SolverImplicit::new(&mesh, &base, config, &essential, &natural)?;
        let mut state = FemState::new(&mesh, &base, config)?;
        let mut history = History::new(&mesh, config)?;
        solver.solve(&mut state, &mut history)?;
        let composite_stress = history
            .records
            .iter()
            .map(|r| r.ff[fiber_dof] / self.area_composite)
            .collect();
        Ok(CrackBridgeResult {
            length,
            w_max,
            composite_stress,
            history,
        })
    }

    /// Runs the pull-out tests for all lengths
    pub fn run(&self, config: &Config) -> Result<Vec<CrackBridgeResult>, SimError> {
        let lengths = self.lengths()?;
        lengths.iter().map(|length| self.run_one(config, *length)).collect()
    }
}

impl CrackBridgeResult {
    /// Returns the matrix stress averaged onto the nodes at a record
    pub fn nodal_matrix_stress(&self, index: usize) -> Result<Vec<f64>, StrError> {
        let ip_values = self.history.ip_field(index, IpQuantity::Stress(0))?;
        self.history.nodal_average(&ip_values)
    }

    /// Returns the fiber strain averaged onto the nodes at a record
    pub fn nodal_fiber_strain(&self, index: usize) -> Result<Vec<f64>, StrError> {
        let ip_values = self.history.ip_field(index, IpQuantity::Strain(2))?;
        self.history.nodal_average(&ip_values)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
