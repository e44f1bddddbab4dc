use crate::base::Elem;
use crate::StrError;
use russell_lab::Matrix;
use serde::{Deserialize, Serialize};

/// Defines the offset from the element ends of the integration points of the nodal scheme
pub const NODAL_INTEG_OFFSET: f64 = 1e-6;

/// Defines the family of two-node line elements
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum LineKind {
    /// Bar with one DOF per node and one strain channel (axial strain)
    Bar,

    /// Bond element with two DOFs per node (matrix, fiber) and three channels (matrix strain, slip, fiber strain)
    Bond,
}

/// Defines the integration scheme of line elements
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum IntegScheme {
    /// Two points next to the nodes at r = ∓(1 - 10⁻⁶) with unit weights
    Nodal,

    /// Two Gauss-Legendre points at r = ∓1/√3 with unit weights
    Gauss2,
}

impl LineKind {
    /// Returns the kind corresponding to the element parameters
    pub fn from(elem: &Elem) -> Self {
        match elem {
            Elem::Bar(..) => LineKind::Bar,
            Elem::Bond(..) => LineKind::Bond,
        }
    }

    /// Returns the number of DOFs per node
    pub fn n_nodal_dof(&self) -> usize {
        match self {
            LineKind::Bar => 1,
            LineKind::Bond => 2,
        }
    }

    /// Returns the number of local DOFs (equations)
    pub fn n_local_dof(&self) -> usize {
        2 * self.n_nodal_dof()
    }

    /// Returns the number of strain channels
    pub fn n_channel(&self) -> usize {
        match self {
            LineKind::Bar => 1,
            LineKind::Bond => 3,
        }
    }
}

impl IntegScheme {
    /// Returns the scheme selected by the nodal-integration flag
    pub fn from_flag(nodal: bool) -> Self {
        if nodal {
            IntegScheme::Nodal
        } else {
            IntegScheme::Gauss2
        }
    }

    /// Returns the reference coordinates and weights of the integration points
    pub fn points(&self) -> [(f64, f64); 2] {
        match self {
            IntegScheme::Nodal => {
                let r = 1.0 - NODAL_INTEG_OFFSET;
                [(-r, 1.0), (r, 1.0)]
            }
            IntegScheme::Gauss2 => {
                let r = 1.0 / f64::sqrt(3.0);
                [(-r, 1.0), (r, 1.0)]
            }
        }
    }
}

/// Calculates the shape functions of the two-node line at the reference coordinate r ∈ [-1, 1]
///
/// ```text
/// N₀ = (1 - r) / 2    N₁ = (1 + r) / 2
/// ```
pub fn lin2_interp(r: f64) -> [f64; 2] {
    [(1.0 - r) / 2.0, (1.0 + r) / 2.0]
}

/// Returns the derivatives of the shape functions with respect to r
pub fn lin2_deriv() -> [f64; 2] {
    [-0.5, 0.5]
}

/// Calculates the Jacobian (determinant) J = dx/dr of the two-node line
///
/// Returns an error if the element has a zero or negative length.
pub fn lin2_jacobian(coords: &[f64; 2]) -> Result<f64, StrError> {
    let dnn = lin2_deriv();
    let jac = dnn[0] * coords[0] + dnn[1] * coords[1];
    if !jac.is_finite() {
        return Err("the Jacobian of the line element is not finite");
    }
    if jac <= 0.0 {
        return Err("the line element must have a positive length (x₁ > x₀)");
    }
    Ok(jac)
}

/// Calculates the x coordinate at the reference coordinate r
pub fn lin2_x(coords: &[f64; 2], r: f64) -> f64 {
    let nn = lin2_interp(r);
    nn[0] * coords[0] + nn[1] * coords[1]
}

/// Calculates the strain-displacement matrix B
///
/// Bar (1 × 2):
///
/// ```text
/// B = [dN₀/dx  dN₁/dx]
/// ```
///
/// Bond (3 × 4) with the local DOFs `[matrix₀, fiber₀, matrix₁, fiber₁]`:
///
/// ```text
///     ┌                             ┐
///     │ dN₀/dx    0    dN₁/dx    0  │  matrix strain
/// B = │  -N₀     N₀     -N₁     N₁  │  slip = u_fiber - u_matrix
///     │   0    dN₀/dx    0   dN₁/dx │  fiber strain
///     └                             ┘
/// ```
///
/// # Output
///
/// * `bb` -- the B matrix (n_channel × n_local_dof)
///
/// # Input
///
/// * `kind` -- the element family
/// * `r` -- the reference coordinate
/// * `jac` -- the Jacobian dx/dr
#[rustfmt::skip]
pub fn calc_bb(bb: &mut Matrix, kind: LineKind, r: f64, jac: f64) {
    let nn = lin2_interp(r);
    let dnn = lin2_deriv();
    let g0 = dnn[0] / jac;
    let g1 = dnn[1] / jac;
    bb.fill(0.0);
    match kind {
        LineKind::Bar => {
            bb.set(0, 0, g0);
            bb.set(0, 1, g1);
        }
        LineKind::Bond => {
            bb.set(0, 0, g0);                          bb.set(0, 2, g1);
            bb.set(1, 0, -nn[0]); bb.set(1, 1, nn[0]); bb.set(1, 2, -nn[1]); bb.set(1, 3, nn[1]);
                                  bb.set(2, 1, g0);                          bb.set(2, 3, g1);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
