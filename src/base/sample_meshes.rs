use super::{Cell, CellAttribute, Mesh};

/// Holds samples of uniform one-dimensional meshes
pub struct SampleMeshes {}

impl SampleMeshes {
    /// Returns a uniform mesh of bars with one DOF per node
    ///
    /// ```text
    /// {0}      {1}      {2}           {n}
    ///  0--[0]---1--[1]---2-- ··· --n-1--[n-1]--n
    /// x=0                                     x=length
    ///
    /// {#} indicates the DOF number
    /// [#] indicates the cell id
    /// ```
    pub fn bars(length: f64, n_cell: usize, attribute: CellAttribute) -> Mesh {
        let dx = length / (n_cell as f64);
        let cells = (0..n_cell)
            .map(|e| Cell {
                id: e,
                attribute,
                dofs: vec![e, e + 1],
                coords: [(e as f64) * dx, ((e + 1) as f64) * dx],
            })
            .collect();
        Mesh {
            n_dof: n_cell + 1,
            cells,
        }
    }

    /// Returns a uniform mesh of bond elements with two DOFs per node (matrix, fiber)
    ///
    /// ```text
    ///     {1}      {3}      {5}             {2n+1}   fiber
    ///      0--[0]---1--[1]---2-- ··· --n-1--[n-1]--n
    ///     {0}      {2}      {4}             {2n}     matrix
    /// x=0                                         x=length
    ///
    /// {#} indicates the DOF number
    /// [#] indicates the cell id
    /// ```
    pub fn bonds(length: f64, n_cell: usize, attribute: CellAttribute) -> Mesh {
        let dx = length / (n_cell as f64);
        let cells = (0..n_cell)
            .map(|e| Cell {
                id: e,
                attribute,
                dofs: vec![2 * e, 2 * e + 1, 2 * e + 2, 2 * e + 3],
                coords: [(e as f64) * dx, ((e + 1) as f64) * dx],
            })
            .collect();
        Mesh {
            n_dof: 2 * (n_cell + 1),
            cells,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
