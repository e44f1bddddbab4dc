use super::{LocalState, StressStrainTrait};
use crate::base::{ParamBond, ScalarLaw};
use crate::StrError;
use russell_lab::{Matrix, RootFinder, Vector};

/// Defines the tolerance on the trial yield function to detect elastic updates
pub const BOND_F_TRIAL_TOL: f64 = 1e-8;

/// Defines the maximum number of times the bracket of the plastic multiplier is enlarged
const N_MAX_BRACKET_EXPANSIONS: usize = 60;

/// Holds the index of the matrix channel
const MATRIX: usize = 0;

/// Holds the index of the interface (slip) channel
const SLIP: usize = 1;

/// Holds the index of the fiber channel
const FIBER: usize = 2;

/// Implements an elastoplastic bond-slip model with damage
///
/// The matrix and fiber channels are linear elastic. The interface (slip) channel reads:
///
/// ```text
/// σe_trial = σe + E_b Δs
/// ξ = σe_trial - q
/// f_trial = |ξ| - (σy + K(α))
/// ```
///
/// If `f_trial > 0`, the plastic multiplier increment Δγ solves:
///
/// ```text
/// f_trial - E_b Δγ - [K(α + Δγ) - K(α)] = 0
/// ```
///
/// and the state is updated as follows:
///
/// ```text
/// α ← α + Δγ
/// κ ← κ + Δγ
/// q ← q + Δγ H sign(ξ)
/// σe ← σe_trial - Δγ E_b sign(ξ)
/// w = g(κ)
/// σ = (1 - w) σe
/// ```
///
/// The derivatives of K and g are computed numerically; thus, the laws may be any
/// scalar function (closed-form or tabulated).
pub struct BondSlip {
    /// Young's modulus of the matrix
    young_matrix: f64,

    /// Young's modulus of the fiber
    young_fiber: f64,

    /// Elastic stiffness of the interface E_b
    stiffness: f64,

    /// Initial yield stress σy
    yield_stress: f64,

    /// Kinematic hardening modulus H
    kinematic: f64,

    /// Isotropic hardening law K(α)
    hardening: ScalarLaw,

    /// Damage law g(κ)
    damage: ScalarLaw,

    /// Solver for the plastic multiplier
    root_finder: RootFinder,
}

impl BondSlip {
    /// Allocates a new instance
    pub fn new(param: &ParamBond) -> Self {
        BondSlip {
            young_matrix: param.young_matrix,
            young_fiber: param.young_fiber,
            stiffness: param.stiffness,
            yield_stress: param.yield_stress,
            kinematic: param.kinematic,
            hardening: param.hardening.clone(),
            damage: param.damage.clone(),
            root_finder: RootFinder::new(),
        }
    }

    /// Calculates the yield function given the relative stress ξ and the hardening variable α
    pub fn yield_function(&self, xi: f64, alpha: f64) -> f64 {
        f64::abs(xi) - (self.yield_stress + self.hardening.value(alpha))
    }

    /// Calculates the plastic multiplier increment Δγ given a positive trial yield function
    ///
    /// Linear hardening `K = k α` yields the exact solution `Δγ = f_trial / (E_b + k)`
    /// (with `k = 0` for zero hardening); otherwise the scalar equation is solved by Brent's method.
    pub fn plastic_multiplier(&self, f_trial: f64, alpha: f64) -> Result<f64, StrError> {
        let eb = self.stiffness;
        match self.hardening {
            ScalarLaw::Zero => return Ok(f_trial / eb),
            ScalarLaw::Linear { slope } => {
                let den = eb + slope;
                if den <= 0.0 {
                    return Err("the hardening slope must be greater than -E_b");
                }
                return Ok(f_trial / den);
            }
            _ => (),
        }

        // residual of the consistency condition
        let k_ini = self.hardening.value(alpha);
        let residual = |dg: f64| f_trial - eb * dg - (self.hardening.value(alpha + dg) - k_ini);

        // find the bracket [0, b] such that residual(b) ≤ 0
        let mut b = f_trial / eb;
        let mut rb = residual(b);
        let mut n_expansion = 0;
        while rb > 0.0 {
            if n_expansion == N_MAX_BRACKET_EXPANSIONS || !rb.is_finite() {
                return Err("cannot bracket the plastic multiplier");
            }
            b *= 2.0;
            rb = residual(b);
            n_expansion += 1;
        }
        if !rb.is_finite() {
            return Err("cannot bracket the plastic multiplier");
        }
        if rb == 0.0 {
            return Ok(b);
        }

        // solve residual(Δγ) = 0 with Δγ ∈ [0, b]
        let (dg, _) = self.root_finder.brent(0.0, b, &mut 0, |x, _| Ok(residual(x)))?;
        if !dg.is_finite() || dg < 0.0 {
            return Err("the plastic multiplier is invalid");
        }
        Ok(dg)
    }
}

impl StressStrainTrait for BondSlip {
    /// Returns the number of strain channels: [matrix, slip, fiber]
    fn n_channel(&self) -> usize {
        3
    }

    /// Initializes the internal values for the initial stress state
    fn initialize_internal_values(&self, state: &mut LocalState) -> Result<(), StrError> {
        let w = self.damage.value(state.kappa);
        if !w.is_finite() || w < 0.0 || w >= 1.0 {
            return Err("the initial damage factor must be in [0, 1)");
        }
        state.damage = w;
        Ok(())
    }

    /// Computes the consistent tangent stiffness
    ///
    /// ```text
    ///        elastic:  D₁₁ = (1 - w) E_b
    ///
    ///                          E_b                           E_b K'
    /// elastoplastic:  D₁₁ = - ——————— sign(ξ) g'(κ) σe + (1 - w) ———————
    ///                         E_b + K'                         E_b + K'
    /// ```
    fn stiffness(&mut self, dd: &mut Matrix, state: &LocalState) -> Result<(), StrError> {
        let eb = self.stiffness;
        let w = self.damage.value(state.kappa);
        dd.fill(0.0);
        dd.set(MATRIX, MATRIX, self.young_matrix);
        dd.set(FIBER, FIBER, self.young_fiber);
        if !state.loading {
            dd.set(SLIP, SLIP, (1.0 - w) * eb);
            return Ok(());
        }
        let dk_da = self.hardening.derivative(state.alpha);
        let dg_dk = self.damage.derivative(state.kappa);
        let den = eb + dk_da;
        if f64::abs(den) < f64::EPSILON {
            return Err("the hardening slope cancels the interface stiffness");
        }
        let ep = -state.direction * eb / den * dg_dk * state.stress_eff + (1.0 - w) * eb * dk_da / den;
        if !ep.is_finite() {
            return Err("the interface tangent stiffness is not finite");
        }
        dd.set(SLIP, SLIP, ep);
        Ok(())
    }

    /// Updates the stress given the strain increment
    fn update_stress(&mut self, state: &mut LocalState, delta_strain: &Vector) -> Result<(), StrError> {
        if delta_strain.dim() != 3 {
            return Err("delta_strain has an incorrect dimension");
        }

        // elastic channels
        for i in 0..3 {
            state.strain[i] += delta_strain[i];
        }
        state.stress[MATRIX] += self.young_matrix * delta_strain[MATRIX];
        state.stress[FIBER] += self.young_fiber * delta_strain[FIBER];

        // trial state
        let eb = self.stiffness;
        let sig_trial = state.stress_eff + eb * delta_strain[SLIP];
        let xi = sig_trial - state.q;
        let f_trial = self.yield_function(xi, state.alpha);
        let sign = if xi < 0.0 { -1.0 } else { 1.0 };

        // return mapping
        let dg = if f_trial <= BOND_F_TRIAL_TOL {
            state.loading = false;
            0.0
        } else {
            state.loading = true;
            self.plastic_multiplier(f_trial, state.alpha)?
        };

        // update internal values and stress
        state.alpha += dg;
        state.kappa += dg;
        state.q += dg * self.kinematic * sign;
        state.stress_eff = sig_trial - dg * eb * sign;
        state.damage = self.damage.value(state.kappa);
        state.stress[SLIP] = (1.0 - state.damage) * state.stress_eff;
        state.direction = sign;
        if !state.is_finite() {
            return Err("the stress update yields NaN or Inf");
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
