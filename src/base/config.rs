use crate::StrError;
use russell_sparse::Genie;
use std::fmt;

/// Defines the smallest allowed time increment
pub const CONFIG_MIN_DT: f64 = 1e-10;

/// Defines the smallest allowed tolerance
pub const CONFIG_MIN_TOL: f64 = 1e-15;

/// Holds configuration parameters for the time (load) stepping and the Newton-Raphson iterations
pub struct Config {
    /// Initial time
    pub t_ini: f64,

    /// Final time (the simulation stops once t + Δt exceeds t_fin)
    pub t_fin: f64,

    /// Fixed time (load) increment Δt
    pub dt: f64,

    /// Maximum number of (corrector) iterations per time step
    pub n_max_iterations: usize,

    /// Absolute tolerance on the Euclidean norm of the residual vector
    pub tol_rr_abs: f64,

    /// Integration scheme of line elements
    pub nodal_integration: bool,

    /// Linear solver type
    pub lin_sol_genie: Genie,

    /// Verbose mode during timesteps
    pub verbose_timesteps: bool,

    /// Verbose mode during iterations
    pub verbose_iterations: bool,
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            t_ini: 0.0,
            t_fin: 1.0,
            dt: 0.005,
            n_max_iterations: 50,
            tol_rr_abs: 1e-5,
            nodal_integration: true,
            lin_sol_genie: Genie::Umfpack,
            verbose_timesteps: false,
            verbose_iterations: false,
        }
    }

    /// Sets the initial and final times
    pub fn set_time_range(&mut self, t_ini: f64, t_fin: f64) -> Result<&mut Self, StrError> {
        if t_ini < 0.0 {
            return Err("t_ini must be ≥ 0.0");
        }
        if t_fin <= t_ini {
            return Err("t_fin must be greater than t_ini");
        }
        self.t_ini = t_ini;
        self.t_fin = t_fin;
        Ok(self)
    }

    /// Sets the fixed time increment
    pub fn set_dt(&mut self, dt: f64) -> Result<&mut Self, StrError> {
        if dt < CONFIG_MIN_DT {
            return Err("dt must be ≥ 1e-10");
        }
        self.dt = dt;
        Ok(self)
    }

    /// Sets the maximum number of iterations per time step
    pub fn set_n_max_iterations(&mut self, n: usize) -> Result<&mut Self, StrError> {
        if n < 1 {
            return Err("n_max_iterations must be ≥ 1");
        }
        self.n_max_iterations = n;
        Ok(self)
    }

    /// Sets the absolute tolerance on the norm of the residual vector
    pub fn set_tol_rr_abs(&mut self, tol: f64) -> Result<&mut Self, StrError> {
        if tol < CONFIG_MIN_TOL {
            return Err("tol_rr_abs must be ≥ 1e-15");
        }
        self.tol_rr_abs = tol;
        Ok(self)
    }

    /// Sets the integration scheme of line elements
    ///
    /// If true, the integration points are located at the nodes (slightly shifted inwards);
    /// otherwise, the two-point Gauss-Legendre rule is used.
    pub fn set_nodal_integration(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.nodal_integration = flag;
        Ok(self)
    }

    /// Sets the verbose mode
    pub fn set_verbose(&mut self, timesteps: bool, iterations: bool) -> Result<&mut Self, StrError> {
        self.verbose_timesteps = timesteps;
        self.verbose_iterations = iterations;
        Ok(self)
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.t_ini < 0.0 {
            return Some(format!("t_ini = {:?} is incorrect; it must be ≥ 0.0", self.t_ini));
        }
        if self.t_fin <= self.t_ini {
            return Some(format!(
                "t_fin = {:?} is incorrect; it must be > t_ini = {:?}",
                self.t_fin, self.t_ini
            ));
        }
        if self.dt < CONFIG_MIN_DT {
            return Some(format!(
                "dt = {:?} is incorrect; it must be ≥ {:e}",
                self.dt, CONFIG_MIN_DT
            ));
        }
        if self.n_max_iterations < 1 {
            return Some(format!(
                "n_max_iterations = {} is incorrect; it must be ≥ 1",
                self.n_max_iterations
            ));
        }
        if self.tol_rr_abs < CONFIG_MIN_TOL {
            return Some(format!(
                "tol_rr_abs = {:?} is incorrect; it must be ≥ {:e}",
                self.tol_rr_abs, CONFIG_MIN_TOL
            ));
        }
        None // all good
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "t_ini = {:?}\n", self.t_ini)?;
        write!(f, "t_fin = {:?}\n", self.t_fin)?;
        write!(f, "dt = {:?}\n", self.dt)?;
        write!(f, "n_max_iterations = {}\n", self.n_max_iterations)?;
        write!(f, "tol_rr_abs = {:?}\n", self.tol_rr_abs)?;
        write!(f, "nodal_integration = {:?}\n", self.nodal_integration)?;
        write!(f, "lin_sol_genie = {:?}\n", self.lin_sol_genie)?;
        write!(f, "verbose_timesteps = {:?}\n", self.verbose_timesteps)?;
        write!(f, "verbose_iterations = {:?}\n", self.verbose_iterations)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
