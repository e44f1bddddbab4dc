use russell_lab::Vector;
use serde::{Deserialize, Serialize};

/// Holds local state data for one-dimensional (channel) materials
///
/// This data is associated with an integration (Gauss) point. Each entry of `strain`
/// and `stress` corresponds to one strain channel of the element (e.g., axial strain of
/// the matrix, slip, and axial strain of the fiber).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LocalState {
    /// Holds the strain ε (one value per channel)
    pub strain: Vector,

    /// Holds the stress σ (one value per channel)
    pub stress: Vector,

    /// Holds the effective (undamaged) interface stress σe
    ///
    /// The nominal interface stress is `(1 - w) σe`
    pub stress_eff: f64,

    /// Holds the isotropic hardening variable α
    pub alpha: f64,

    /// Holds the damage history variable κ
    pub kappa: f64,

    /// Holds the back stress q
    pub q: f64,

    /// Holds the damage factor w
    pub damage: f64,

    /// Holds the elastoplastic (vs elastic) flag of the last update
    pub loading: bool,

    /// Holds the sign of the relative stress ξ = σe_trial - q in the last update
    pub direction: f64,
}

impl LocalState {
    /// Allocates a new (zero) instance
    pub fn new(n_channel: usize) -> Self {
        LocalState {
            strain: Vector::new(n_channel),
            stress: Vector::new(n_channel),
            stress_eff: 0.0,
            alpha: 0.0,
            kappa: 0.0,
            q: 0.0,
            damage: 0.0,
            loading: false,
            direction: 0.0,
        }
    }

    /// Returns the number of channels
    pub fn n_channel(&self) -> usize {
        self.strain.dim()
    }

    /// Copies the data of another state into this state
    ///
    /// # Panics
    ///
    /// A panic will occur if the number of channels is different
    pub fn mirror(&mut self, other: &LocalState) {
        let n = self.strain.dim();
        assert_eq!(other.strain.dim(), n);
        for i in 0..n {
            self.strain[i] = other.strain[i];
            self.stress[i] = other.stress[i];
        }
        self.stress_eff = other.stress_eff;
        self.alpha = other.alpha;
        self.kappa = other.kappa;
        self.q = other.q;
        self.damage = other.damage;
        self.loading = other.loading;
        self.direction = other.direction;
    }

    /// Returns true if all values are finite
    pub fn is_finite(&self) -> bool {
        self.strain.as_data().iter().all(|v| v.is_finite())
            && self.stress.as_data().iter().all(|v| v.is_finite())
            && self.stress_eff.is_finite()
            && self.alpha.is_finite()
            && self.kappa.is_finite()
            && self.q.is_finite()
            && self.damage.is_finite()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
