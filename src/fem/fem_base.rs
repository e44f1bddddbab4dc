use crate::base::{Cell, CellAttribute, Elem, Mesh};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Holds the element parameters of each cell attribute and the DOF connectivity
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FemBase {
    /// Total number of DOFs (equations)
    pub n_dof: usize,

    /// Maps the cell attribute to the element parameters
    pub amap: HashMap<CellAttribute, Elem>,

    /// Indicates which DOFs are connected to at least one element (n_dof)
    pub connected: Vec<bool>,
}

impl FemBase {
    /// Allocates a new instance
    ///
    /// Checks the mesh, the element parameters, and whether the number of DOFs of each
    /// cell matches its element family (two nodes times the number of nodal DOFs).
    pub fn new<const N: usize>(mesh: &Mesh, arr: [(CellAttribute, Elem); N]) -> Result<Self, StrError> {
        mesh.check()?;
        let amap: HashMap<_, _> = arr.into_iter().collect();
        for elem in amap.values() {
            if elem.validate().is_some() {
                return Err("element parameters are invalid");
            }
        }
        let mut connected = vec![false; mesh.n_dof];
        for cell in &mesh.cells {
            let elem = amap
                .get(&cell.attribute)
                .ok_or("cannot find CellAttribute in the map of elements")?;
            if cell.dofs.len() != 2 * elem.n_nodal_dof() {
                return Err("the number of cell DOFs is incompatible with the element family");
            }
            for dof in &cell.dofs {
                connected[*dof] = true;
            }
        }
        Ok(FemBase {
            n_dof: mesh.n_dof,
            amap,
            connected,
        })
    }

    /// Returns the element parameters of a cell
    pub fn get(&self, cell: &Cell) -> Result<&Elem, StrError> {
        self.amap
            .get(&cell.attribute)
            .ok_or("cannot find CellAttribute in the map of elements")
    }

    /// Returns the DOFs that are not connected to any element
    pub fn disconnected_dofs(&self) -> Vec<usize> {
        (0..self.n_dof).filter(|dof| !self.connected[*dof]).collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
