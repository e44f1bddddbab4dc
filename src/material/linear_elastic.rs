use super::{LocalState, StressStrainTrait};
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Implements a linear elastic model with one modulus per strain channel
///
/// ```text
/// σᵢ = Eᵢ εᵢ   (no coupling between channels)
/// ```
pub struct LinearElastic {
    /// Moduli of each channel
    moduli: Vec<f64>,
}

impl LinearElastic {
    /// Allocates a new instance
    pub fn new(moduli: &[f64]) -> Self {
        LinearElastic {
            moduli: moduli.to_vec(),
        }
    }
}

impl StressStrainTrait for LinearElastic {
    /// Returns the number of strain channels
    fn n_channel(&self) -> usize {
        self.moduli.len()
    }

    /// Initializes the internal values for the initial stress state
    fn initialize_internal_values(&self, _state: &mut LocalState) -> Result<(), StrError> {
        Ok(())
    }

    /// Computes the consistent tangent stiffness
    fn stiffness(&mut self, dd: &mut Matrix, _state: &LocalState) -> Result<(), StrError> {
        dd.fill(0.0);
        for (i, young) in self.moduli.iter().enumerate() {
            dd.set(i, i, *young);
        }
        Ok(())
    }

    /// Updates the stress given the strain increment
    fn update_stress(&mut self, state: &mut LocalState, delta_strain: &Vector) -> Result<(), StrError> {
        if delta_strain.dim() != self.moduli.len() {
            return Err("delta_strain has an incorrect dimension");
        }
        for (i, young) in self.moduli.iter().enumerate() {
            state.strain[i] += delta_strain[i];
            state.stress[i] += young * delta_strain[i]; // σ += E Δε
        }
        state.loading = false;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::LinearElastic;
    use crate::material::{LocalState, StressStrainTrait};
    use russell_lab::{Matrix, Vector};

    #[test]
    fn update_stress_captures_errors() {
        let mut model = LinearElastic::new(&[10.0]);
        let mut state = LocalState::new(1);
        let delta_strain = Vector::new(2);
        assert_eq!(
            model.update_stress(&mut state, &delta_strain).err(),
            Some("delta_strain has an incorrect dimension")
        );
    }

    #[test]
    fn update_stress_and_stiffness_work() {
        let mut model = LinearElastic::new(&[10.0, 0.1, 20.0]);
        let mut state = LocalState::new(3);
        model.initialize_internal_values(&mut state).unwrap();
        let delta_strain = Vector::from(&[0.1, 1.0, -0.1]);
        model.update_stress(&mut state, &delta_strain).unwrap();
        model.update_stress(&mut state, &delta_strain).unwrap();
        assert_eq!(state.strain.as_data(), &[0.2, 2.0, -0.2]);
        assert_eq!(state.stress.as_data(), &[2.0, 0.2, -4.0]);
        let mut dd = Matrix::new(3, 3);
        model.stiffness(&mut dd, &state).unwrap();
        #[rustfmt::skip]
        let correct = &[
            10.0, 0.0,  0.0,
             0.0, 0.1,  0.0,
             0.0, 0.0, 20.0,
        ];
        assert_eq!(dd.as_data(), correct);
    }
}
