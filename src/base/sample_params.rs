use super::{ParamBar, ParamBond, ScalarLaw};
use std::f64::consts::PI;

/// Holds samples of material parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample parameters for a linear-elastic bar (E = 10, A = 1)
    pub fn param_bar() -> ParamBar {
        ParamBar { young: 10.0, area: 1.0 }
    }

    /// Returns sample parameters of a textile-reinforced pull-out specimen (MPa, mm)
    ///
    /// The specimen has 9 yarns with area 1.85 mm² each embedded in a 100 × 8 mm² matrix.
    /// The hardening law is a piecewise-linear table and the damage law is logistic.
    pub fn param_bond_pullout() -> ParamBond {
        let area_yarn = 1.85;
        let n_yarn = 9.0;
        let area_fiber = n_yarn * area_yarn;
        let slopes = [
            -0.1, 0.1, 0.2, 0.5, //
            -0.1, 0.1, 0.2, 0.5, //
            -0.1, 0.1, 0.2, 0.5, //
        ];
        let dx = 5.0 / (slopes.len() as f64);
        let mut xx = vec![0.0; slopes.len() + 1];
        let mut yy = vec![0.0; slopes.len() + 1];
        for (i, slope) in slopes.iter().enumerate() {
            xx[i + 1] = ((i + 1) as f64) * dx;
            yy[i + 1] = yy[i] + slope * dx;
        }
        ParamBond {
            young_matrix: 28484.0,
            young_fiber: 170000.0,
            stiffness: 2.0,
            yield_stress: 1.05,
            kinematic: 0.0,
            hardening: ScalarLaw::Table { xx, yy },
            damage: ScalarLaw::Logistic {
                alpha: 1.0,
                beta: 1.0,
                shift: 6.0,
            },
            area_matrix: 100.0 * 8.0 - area_fiber,
            perimeter: n_yarn * f64::sqrt(PI * 4.0 * area_yarn),
            area_fiber,
        }
    }

    /// Returns sample parameters of a bond element that never yields (linear interface)
    ///
    /// E_m = E_f = 10 and E_b = 0.1 with unit areas and perimeter.
    pub fn param_bond_linear() -> ParamBond {
        ParamBond {
            young_matrix: 10.0,
            young_fiber: 10.0,
            stiffness: 0.1,
            yield_stress: 1e30,
            kinematic: 0.0,
            hardening: ScalarLaw::Zero,
            damage: ScalarLaw::Zero,
            area_matrix: 1.0,
            perimeter: 1.0,
            area_fiber: 1.0,
        }
    }

    /// Returns sample parameters of a perfectly plastic bond without damage
    ///
    /// E_m = E_f = 10, E_b = 2 and σy = 1 with unit areas and perimeter.
    pub fn param_bond_perfectly_plastic() -> ParamBond {
        ParamBond {
            young_matrix: 10.0,
            young_fiber: 10.0,
            stiffness: 2.0,
            yield_stress: 1.0,
            kinematic: 0.0,
            hardening: ScalarLaw::Zero,
            damage: ScalarLaw::Zero,
            area_matrix: 1.0,
            perimeter: 1.0,
            area_fiber: 1.0,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
