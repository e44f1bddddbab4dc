use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the identification number of an attribute (e.g., material) of a cell
pub type CellAttribute = usize;

/// Holds a two-node line cell (element topology and geometry)
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Cell {
    /// Identification number (equal to the index in the array of cells)
    pub id: usize,

    /// Attribute used to select the element parameters
    pub attribute: CellAttribute,

    /// Global DOF numbers, ordered node by node
    ///
    /// Bar: `[u₀, u₁]`; Bond: `[matrix₀, fiber₀, matrix₁, fiber₁]`
    pub dofs: Vec<usize>,

    /// x coordinates of the two nodes
    pub coords: [f64; 2],
}

/// Holds the discretization of a one-dimensional domain
///
/// The mesh is consumed read-only by the solver: the element-to-DOF maps and the
/// nodal coordinates are given by the caller.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Mesh {
    /// Total number of DOFs (equations)
    pub n_dof: usize,

    /// All cells
    pub cells: Vec<Cell>,
}

impl Mesh {
    /// Checks the consistency of the cells
    pub fn check(&self) -> Result<(), StrError> {
        if self.cells.len() == 0 {
            return Err("there are no cells in the mesh");
        }
        for (index, cell) in self.cells.iter().enumerate() {
            if cell.id != index {
                return Err("cell id must be equal to its index in the array of cells");
            }
            if cell.dofs.len() == 0 {
                return Err("cell must have at least one DOF");
            }
            for (i, dof) in cell.dofs.iter().enumerate() {
                if *dof >= self.n_dof {
                    return Err("cell DOF number is out of range");
                }
                if cell.dofs[..i].contains(dof) {
                    return Err("cell DOF numbers must be unique");
                }
            }
            if !cell.coords[0].is_finite() || !cell.coords[1].is_finite() {
                return Err("cell coordinates must be finite");
            }
        }
        Ok(())
    }

    /// Returns the x coordinates of the nodes assuming the cells are sorted from left to right
    ///
    /// The result has `n_cell + 1` entries.
    pub fn node_coords(&self) -> Vec<f64> {
        let mut xx: Vec<f64> = self.cells.iter().map(|c| c.coords[0]).collect();
        if let Some(last) = self.cells.last() {
            xx.push(last.coords[1]);
        }
        xx
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Cell, Mesh};

    #[test]
    fn check_captures_errors() {
        let mut mesh = Mesh {
            n_dof: 2,
            cells: Vec::new(),
        };
        assert_eq!(mesh.check().err(), Some("there are no cells in the mesh"));
        mesh.cells.push(Cell {
            id: 1,
            attribute: 1,
            dofs: vec![0, 1],
            coords: [0.0, 1.0],
        });
        assert_eq!(
            mesh.check().err(),
            Some("cell id must be equal to its index in the array of cells")
        );
        mesh.cells[0].id = 0;
        mesh.cells[0].dofs = Vec::new();
        assert_eq!(mesh.check().err(), Some("cell must have at least one DOF"));
        mesh.cells[0].dofs = vec![0, 2];
        assert_eq!(mesh.check().err(), Some("cell DOF number is out of range"));
        mesh.cells[0].dofs = vec![1, 1];
        assert_eq!(mesh.check().err(), Some("cell DOF numbers must be unique"));
        mesh.cells[0].dofs = vec![0, 1];
        mesh.cells[0].coords[1] = f64::NAN;
        assert_eq!(mesh.check().err(), Some("cell coordinates must be finite"));
        mesh.cells[0].coords[1] = 1.0;
        assert_eq!(mesh.check().err(), None);
    }

    #[test]
    fn node_coords_works() {
        let mesh = Mesh {
            n_dof: 3,
            cells: vec![
                Cell {
                    id: 0,
                    attribute: 1,
                    dofs: vec![0, 1],
                    coords: [0.0, 1.5],
                },
                Cell {
                    id: 1,
                    attribute: 1,
                    dofs: vec![1, 2],
                    coords: [1.5, 4.0],
                },
            ],
        };
        assert_eq!(mesh.node_coords(), &[0.0, 1.5, 4.0]);
    }
}
