use super::ScalarLaw;
use serde::{Deserialize, Serialize};

/// Holds parameters for linear-elastic bars (rods)
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamBar {
    /// Young's modulus E
    pub young: f64,

    /// Cross-sectional area A
    pub area: f64,
}

/// Holds parameters for bond (interface) elements connecting matrix and reinforcement (fiber)
///
/// The element has three strain channels:
///
/// ```text
/// 0: axial strain of the matrix      → linear elastic (young_matrix)
/// 1: slip = u_fiber - u_matrix       → elastoplastic with damage (bond law)
/// 2: axial strain of the fiber       → linear elastic (young_fiber)
/// ```
///
/// The interface law reads:
///
/// ```text
/// f = |σe - q| - (σy + K(α))
/// σ = (1 - g(κ)) σe
/// ```
///
/// where K is the hardening law and g is the damage law.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ParamBond {
    /// Young's modulus of the matrix E_m
    pub young_matrix: f64,

    /// Young's modulus of the fiber E_f
    pub young_fiber: f64,

    /// Elastic stiffness of the bond interface E_b
    pub stiffness: f64,

    /// Initial yield stress of the bond σy
    pub yield_stress: f64,

    /// Kinematic hardening modulus H (back stress q)
    pub kinematic: f64,

    /// Isotropic hardening law K(α)
    pub hardening: ScalarLaw,

    /// Damage law w = g(κ) with 0 ≤ w ≤ 1
    pub damage: ScalarLaw,

    /// Cross-sectional area of the matrix A_m
    pub area_matrix: f64,

    /// Perimeter of the bond interface L_b
    pub perimeter: f64,

    /// Cross-sectional area of the fiber A_f
    pub area_fiber: f64,
}

/// Holds element configuration, material parameters, and number of integration points
#[derive(Clone, Debug, Deserialize, Serialize)]
pub enum Elem {
    /// Linear-elastic bar with one DOF per node
    Bar(ParamBar),

    /// Bond element with two DOFs per node (matrix and fiber)
    Bond(ParamBond),
}

impl ParamBar {
    /// Validates the parameters
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.young <= 0.0 {
            return Some(format!("young = {:?} is incorrect; it must be > 0.0", self.young));
        }
        if self.area <= 0.0 {
            return Some(format!("area = {:?} is incorrect; it must be > 0.0", self.area));
        }
        None // all good
    }
}

impl ParamBond {
    /// Validates the parameters
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.young_matrix <= 0.0 {
            return Some(format!(
                "young_matrix = {:?} is incorrect; it must be > 0.0",
                self.young_matrix
            ));
        }
        if self.young_fiber <= 0.0 {
            return Some(format!(
                "young_fiber = {:?} is incorrect; it must be > 0.0",
                self.young_fiber
            ));
        }
        if self.stiffness <= 0.0 {
            return Some(format!("stiffness = {:?} is incorrect; it must be > 0.0", self.stiffness));
        }
        if self.yield_stress < 0.0 {
            return Some(format!(
                "yield_stress = {:?} is incorrect; it must be ≥ 0.0",
                self.yield_stress
            ));
        }
        if self.kinematic < 0.0 {
            return Some(format!("kinematic = {:?} is incorrect; it must be ≥ 0.0", self.kinematic));
        }
        if self.area_matrix <= 0.0 {
            return Some(format!(
                "area_matrix = {:?} is incorrect; it must be > 0.0",
                self.area_matrix
            ));
        }
        if self.perimeter <= 0.0 {
            return Some(format!("perimeter = {:?} is incorrect; it must be > 0.0", self.perimeter));
        }
        if self.area_fiber <= 0.0 {
            return Some(format!("area_fiber = {:?} is incorrect; it must be > 0.0", self.area_fiber));
        }
        if let Some(msg) = self.hardening.validate() {
            return Some(format!("hardening: {}", msg));
        }
        if let Some(msg) = self.damage.validate() {
            return Some(format!("damage: {}", msg));
        }
        None // all good
    }
}

impl Elem {
    /// Returns the name of the element family
    pub fn name(&self) -> &'static str {
        match self {
            Elem::Bar(..) => "Bar",
            Elem::Bond(..) => "Bond",
        }
    }

    /// Returns the number of DOFs per node
    pub fn n_nodal_dof(&self) -> usize {
        match self {
            Elem::Bar(..) => 1,
            Elem::Bond(..) => 2,
        }
    }

    /// Validates the parameters
    pub fn validate(&self) -> Option<String> {
        match self {
            Elem::Bar(p) => p.validate(),
            Elem::Bond(p) => p.validate(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Elem;
    use crate::base::{SampleParams, ScalarLaw};

    #[test]
    fn derive_works() {
        let p = SampleParams::param_bar();
        let q = p.clone();
        assert_eq!(format!("{:?}", q), "ParamBar { young: 10.0, area: 1.0 }");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "{\"young\":10.0,\"area\":1.0}");
    }

    #[test]
    fn bond_json_works() {
        let p = SampleParams::param_bond_pullout();
        let json = serde_json::to_string(&p).unwrap();
        let q: super::ParamBond = serde_json::from_str(&json).unwrap();
        assert_eq!(q.young_matrix, p.young_matrix);
        assert_eq!(q.perimeter, p.perimeter);
        match q.damage {
            ScalarLaw::Logistic { alpha, beta, shift } => {
                assert_eq!(alpha, 1.0);
                assert_eq!(beta, 1.0);
                assert_eq!(shift, 6.0);
            }
            _ => panic!("logistic damage law is expected"),
        }
    }

    #[test]
    fn validate_works() {
        let mut p = SampleParams::param_bar();
        assert_eq!(p.validate(), None);
        p.area = 0.0;
        assert_eq!(p.validate(), Some("area = 0.0 is incorrect; it must be > 0.0".to_string()));
        p.young = -1.0;
        assert_eq!(p.validate(), Some("young = -1.0 is incorrect; it must be > 0.0".to_string()));

        let mut p = SampleParams::param_bond_pullout();
        assert_eq!(p.validate(), None);
        p.stiffness = 0.0;
        assert_eq!(
            p.validate(),
            Some("stiffness = 0.0 is incorrect; it must be > 0.0".to_string())
        );
        p.stiffness = 2.0;
        p.hardening = ScalarLaw::Table {
            xx: vec![0.0],
            yy: vec![0.0],
        };
        assert_eq!(
            p.validate(),
            Some("hardening: table must have at least 2 points; found 1".to_string())
        );
    }

    #[test]
    fn elem_works() {
        let bar = Elem::Bar(SampleParams::param_bar());
        let bond = Elem::Bond(SampleParams::param_bond_pullout());
        assert_eq!(bar.name(), "Bar");
        assert_eq!(bond.name(), "Bond");
        assert_eq!(bar.n_nodal_dof(), 1);
        assert_eq!(bond.n_nodal_dof(), 2);
        assert_eq!(bar.validate(), None);
        assert_eq!(bond.validate(), None);
    }
}
