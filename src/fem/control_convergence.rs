use crate::base::Config;
use crate::StrError;
use russell_lab::{vec_norm, Norm, Vector};

/// Controls the convergence of the Newton-Raphson iterations
///
/// The convergence is measured by the Euclidean norm of the residual vector (with the
/// prescribed rows zeroed). The predictor (iteration 0) always runs; thus, convergence
/// is only declared at the corrector iterations (iteration ≥ 1).
///
/// This struct also prints the time stepping and convergence statistics if the verbose
/// flags of [Config] are enabled.
pub struct ControlConvergence<'a> {
    config: &'a Config,
    iteration: usize,
    norm_rr_prev: f64,
    norm_rr: f64,
    norm_mdu: f64,
    converged_on_norm_rr: bool,
    diverging_on_norm_rr: bool,
    n_converged_total: usize,
    n_iterations_total: usize,
}

impl<'a> ControlConvergence<'a> {
    /// Allocates a new instance
    pub fn new(config: &'a Config) -> Self {
        ControlConvergence {
            config,
            iteration: 0,
            norm_rr_prev: 0.0,
            norm_rr: 0.0,
            norm_mdu: 0.0,
            converged_on_norm_rr: false,
            diverging_on_norm_rr: false,
            n_converged_total: 0,
            n_iterations_total: 0,
        }
    }

    /// Resets the flags at the beginning of a new step
    pub fn reset(&mut self) {
        self.iteration = 0;
        self.norm_rr_prev = 0.0;
        self.norm_rr = 0.0;
        self.norm_mdu = 0.0;
        self.converged_on_norm_rr = false;
        self.diverging_on_norm_rr = false;
    }

    /// Increments the total number of converged steps
    pub fn add_converged(&mut self) {
        self.n_converged_total += 1;
    }

    /// Returns the total number of converged steps
    pub fn n_converged_total(&self) -> usize {
        self.n_converged_total
    }

    /// Returns the total number of iterations (including the predictors)
    pub fn n_iterations_total(&self) -> usize {
        self.n_iterations_total
    }

    /// Returns the last computed norm of R
    pub fn norm_rr(&self) -> f64 {
        self.norm_rr
    }

    /// Returns true if the norm of R is smaller than the tolerance (at a corrector iteration)
    pub fn converged(&self) -> bool {
        self.converged_on_norm_rr
    }

    /// Analyzes the residual vector
    ///
    /// Returns an error if R contains NaN or Inf values.
    pub(crate) fn analyze_rr(&mut self, iteration: usize, rr: &Vector) -> Result<(), StrError> {
        self.iteration = iteration;
        self.n_iterations_total += 1;
        self.norm_rr = vec_norm(rr, Norm::Euc);
        if !self.norm_rr.is_finite() {
            self.converged_on_norm_rr = false;
            self.diverging_on_norm_rr = false;
            return Err("found NaN or Inf in the residual vector");
        }
        self.converged_on_norm_rr = iteration > 0 && self.norm_rr < self.config.tol_rr_abs;
        self.diverging_on_norm_rr = iteration > 1 && self.norm_rr > self.norm_rr_prev;
        self.norm_rr_prev = self.norm_rr;
        Ok(())
    }

    /// Analyzes the solution of the linear system (minus ΔU)
    ///
    /// Returns an error if mdu contains NaN or Inf values.
    pub(crate) fn analyze_mdu(&mut self, mdu: &Vector) -> Result<(), StrError> {
        self.norm_mdu = vec_norm(mdu, Norm::Max);
        if !self.norm_mdu.is_finite() {
            return Err("found NaN or Inf in the solution of the linear system");
        }
        Ok(())
    }

    /// Prints the header before time stepping
    pub fn print_header(&self) {
        if self.config.verbose_timesteps || self.config.verbose_iterations {
            println!("\nBONDSIM === TIME STEPPING AND CONVERGENCE STATISTICS ==========================");
            println!("\nLegend:");
            println!("✅ : converged");
            println!("🔹 : converging");
            println!("🎈 : diverging");
            println!("\"iter\" means iteration (0 is the predictor)\n");
            println!("{}", "─".repeat(60));
            println!(
                "{:8} {:>11} {:>11} {:>5} {:>9} {:>9}",
                "timestep", "t", "Δt", "iter", "‖mdu‖∞", "‖R‖₂"
            );
            println!("{}", "─".repeat(60));
        }
    }

    /// Prints the timestep information
    pub(crate) fn print_timestep(&self, timestep: usize, t: f64, dt: f64) {
        if self.config.verbose_timesteps {
            println!("{:>8} {:>11.6e} {:>11.6e}", timestep + 1, t, dt);
        }
    }

    /// Prints the iteration information
    pub(crate) fn print_iteration(&self) {
        if self.config.verbose_iterations {
            if self.iteration == 0 {
                println!(
                    "{:>8} {:>11} {:>11} {:>5} {:>9.2e} {:>9.2e}",
                    "·", "·", "·", self.iteration, self.norm_mdu, self.norm_rr
                );
            } else {
                let icon = if self.converged_on_norm_rr {
                    "✅"
                } else if self.diverging_on_norm_rr {
                    "🎈"
                } else {
                    "🔹"
                };
                if self.converged_on_norm_rr {
                    println!(
                        "{:>8} {:>11} {:>11} {:>5} {:>9} {:>9.2e} {}",
                        "·", "·", "·", self.iteration, "·", self.norm_rr, icon
                    );
                } else {
                    println!(
                        "{:>8} {:>11} {:>11} {:>5} {:>9.2e} {:>9.2e} {}",
                        "·", "·", "·", self.iteration, self.norm_mdu, self.norm_rr, icon
                    );
                }
            }
        }
    }

    /// Prints the horizontal line and the totals at the end of the analysis
    pub(crate) fn print_footer(&self) {
        if self.config.verbose_timesteps || self.config.verbose_iterations {
            println!("{}", "─".repeat(60));
            println!(
                "converged steps = {}, iterations = {}",
                self.n_converged_total, self.n_iterations_total
            );
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
