use super::{BondSlip, LocalState, StressStrainTrait};
use crate::base::ParamBond;
use crate::StrError;
use plotpy::linspace;
use russell_lab::Vector;

/// Holds the response of a single interface point driven along a slip path
///
/// The matrix and fiber strains are kept at zero; thus, only the interface channel is loaded.
pub struct BondSlipPath {
    /// Holds the slip values (the first one is the initial state)
    pub slips: Vec<f64>,

    /// Holds the nominal interface stress σ = (1 - w) σe
    pub stresses: Vec<f64>,

    /// Holds the effective (undamaged) interface stress σe
    pub stresses_eff: Vec<f64>,

    /// Holds the damage factor w
    pub damages: Vec<f64>,

    /// Holds the isotropic hardening variable α
    pub alphas: Vec<f64>,
}

impl BondSlipPath {
    /// Allocates a new instance with the given slip history
    ///
    /// Returns an error if the slip history is empty or contains non-finite values.
    pub fn new(slips: &[f64]) -> Result<Self, StrError> {
        if slips.is_empty() {
            return Err("the slip history must have at least one value");
        }
        if slips.iter().any(|s| !s.is_finite()) {
            return Err("the slip values must be finite");
        }
        Ok(BondSlipPath {
            slips: slips.to_vec(),
            stresses: Vec::new(),
            stresses_eff: Vec::new(),
            damages: Vec::new(),
            alphas: Vec::new(),
        })
    }

    /// Allocates a new instance with monotonic loading followed by elastic unloading
    ///
    /// The slip goes from 0 to `s_max` with `n_loading` points and then back by `σy / E_b`
    /// with `n_unloading` points.
    pub fn new_loading_unloading(
        param: &ParamBond,
        s_max: f64,
        n_loading: usize,
        n_unloading: usize,
    ) -> Result<Self, StrError> {
        if param.stiffness <= 0.0 {
            return Err("the interface stiffness must be positive");
        }
        let mut slips = linspace(0.0, s_max, n_loading);
        let s_min = s_max - param.yield_stress / param.stiffness;
        slips.extend(linspace(s_max, s_min, n_unloading));
        BondSlipPath::new(&slips)
    }

    /// Allocates a new instance with the default history (slip from 0 to 10, then unloading)
    pub fn new_default(param: &ParamBond) -> Result<Self, StrError> {
        BondSlipPath::new_loading_unloading(param, 10.0, 200, 10)
    }

    /// Drives a fresh material point along the slip history and records the response
    pub fn calculate(&mut self, param: &ParamBond) -> Result<(), StrError> {
        if param.validate().is_some() {
            return Err("bond parameters are invalid");
        }
        let mut model = BondSlip::new(param);
        let mut state = LocalState::new(model.n_channel());
        model.initialize_internal_values(&mut state)?;
        let n = self.slips.len();
        self.stresses = vec![0.0; n];
        self.stresses_eff = vec![0.0; n];
        self.damages = vec![0.0; n];
        self.alphas = vec![0.0; n];
        self.damages[0] = state.damage;
        let mut delta_strain = Vector::new(3);
        for i in 1..n {
            delta_strain[1] = self.slips[i] - self.slips[i - 1];
            model.update_stress(&mut state, &delta_strain)?;
            self.stresses[i] = state.stress[1];
            self.stresses_eff[i] = state.stress_eff;
            self.damages[i] = state.damage;
            self.alphas[i] = state.alpha;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
