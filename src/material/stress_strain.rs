use super::{BondSlip, LinearElastic, LocalState};
use crate::base::Elem;
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Specifies the essential functions for channel-wise stress-strain models
///
/// The stress and strain are arrays with one entry per strain channel; the stiffness
/// is a square matrix with the size equal to the number of channels.
pub trait StressStrainTrait: Send {
    /// Returns the number of strain channels
    fn n_channel(&self) -> usize;

    /// Initializes the internal values for the initial (zero) state
    fn initialize_internal_values(&self, state: &mut LocalState) -> Result<(), StrError>;

    /// Computes the consistent tangent stiffness
    fn stiffness(&mut self, dd: &mut Matrix, state: &LocalState) -> Result<(), StrError>;

    /// Updates the stress given the strain increment
    ///
    /// The state must be a (trial) copy of the committed state; the increment is
    /// measured from the committed state.
    fn update_stress(&mut self, state: &mut LocalState, delta_strain: &Vector) -> Result<(), StrError>;
}

/// Holds the actual stress-strain model implementation
pub struct StressStrain {
    /// Holds the actual model implementation
    pub actual: Box<dyn StressStrainTrait>,
}

impl StressStrain {
    /// Allocates a new instance
    pub fn new(param: &Elem) -> Result<Self, StrError> {
        if param.validate().is_some() {
            return Err("element parameters are invalid");
        }
        let actual: Box<dyn StressStrainTrait> = match param {
            Elem::Bar(p) => Box::new(LinearElastic::new(&[p.young])),
            Elem::Bond(p) => Box::new(BondSlip::new(p)),
        };
        Ok(StressStrain { actual })
    }

    /// Allocates a new local state initialized for this model
    pub fn new_local_state(&self) -> Result<LocalState, StrError> {
        let mut state = LocalState::new(self.actual.n_channel());
        self.actual.initialize_internal_values(&mut state)?;
        Ok(state)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
