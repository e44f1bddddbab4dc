use super::{IntegScheme, N_INTEG_POINT};
use crate::base::{Config, Mesh};
use crate::fem::lin2_x;
use crate::material::LocalState;
use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Selects a quantity stored at the integration points
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IpQuantity {
    /// Strain of a channel (Bar: 0; Bond: 0 matrix, 1 slip, 2 fiber)
    Strain(usize),

    /// Stress of a channel (Bar: 0; Bond: 0 matrix, 1 interface, 2 fiber)
    Stress(usize),

    /// Effective (undamaged) interface stress σe
    StressEff,

    /// Damage factor w
    Damage,

    /// Isotropic hardening variable α
    Alpha,
}

/// Holds the data of one converged step
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Time (load factor)
    pub t: f64,

    /// Cumulated primary unknowns {U} (n_dof)
    pub uu: Vector,

    /// Internal forces at the converged state (n_dof)
    ///
    /// Holds the reactions at the prescribed DOFs and the applied loads at the free DOFs.
    pub ff: Vector,

    /// Committed local states (n_cell, N_INTEG_POINT)
    pub gauss: Vec<Vec<LocalState>>,
}

/// Holds the sequence of converged steps of a simulation (append-only)
///
/// The first record corresponds to the initial state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct History {
    /// x coordinates of the integration points (n_cell, N_INTEG_POINT)
    pub ip_coords: Vec<Vec<f64>>,

    /// x coordinates of the nodes (n_cell + 1)
    pub node_coords: Vec<f64>,

    /// Global DOF numbers of each node (n_cell + 1)
    pub node_dofs: Vec<Vec<usize>>,

    /// All records
    pub records: Vec<HistoryRecord>,
}

impl History {
    /// Allocates a new (empty) instance
    ///
    /// **Note:** The cells must be sorted from left to right, with the
    /// right node of a cell coinciding with the left node of the next one.
    pub fn new(mesh: &Mesh, config: &Config) -> Result<Self, StrError> {
        mesh.check()?;
        let points = IntegScheme::from_flag(config.nodal_integration).points();
        let ip_coords = mesh
            .cells
            .iter()
            .map(|cell| points.iter().map(|(r, _)| lin2_x(&cell.coords, *r)).collect())
            .collect();
        let mut node_dofs = Vec::with_capacity(mesh.cells.len() + 1);
        for cell in &mesh.cells {
            let half = cell.dofs.len() / 2;
            node_dofs.push(cell.dofs[..half].to_vec());
        }
        if let Some(last) = mesh.cells.last() {
            let half = last.dofs.len() / 2;
            node_dofs.push(last.dofs[half..].to_vec());
        }
        Ok(History {
            ip_coords,
            node_coords: mesh.node_coords(),
            node_dofs,
            records: Vec::new(),
        })
    }

    /// Appends a record
    pub fn push(&mut self, t: f64, uu: &Vector, ff: &Vector, gauss: &[Vec<LocalState>]) {
        self.records.push(HistoryRecord {
            t,
            uu: uu.clone(),
            ff: ff.clone(),
            gauss: gauss.to_vec(),
        });
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the times of all records
    pub fn times(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.t).collect()
    }

    /// Returns the index of the record with time nearest to t
    pub fn index_near(&self, t: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, r) in self.records.iter().enumerate() {
            let dist = f64::abs(r.t - t);
            match best {
                Some((_, d)) if d <= dist => (),
                _ => best = Some((i, dist)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Returns the displacement and force histories at a DOF (e.g., the pull-out curve)
    pub fn curve(&self, dof: usize) -> Result<(Vec<f64>, Vec<f64>), StrError> {
        if let Some(first) = self.records.first() {
            if dof >= first.uu.dim() {
                return Err("the DOF is out of range");
            }
        }
        let uu = self.records.iter().map(|r| r.uu[dof]).collect();
        let ff = self.records.iter().map(|r| r.ff[dof]).collect();
        Ok((uu, ff))
    }

    /// Returns the x coordinates of all integration points, ordered from left to right
    pub fn ip_x(&self) -> Vec<f64> {
        self.ip_coords.iter().flatten().copied().collect()
    }

    /// Returns a quantity at all integration points of a record, ordered from left to right
    pub fn ip_field(&self, index: usize, quantity: IpQuantity) -> Result<Vec<f64>, StrError> {
        let record = self.records.get(index).ok_or("the record index is out of range")?;
        let mut values = Vec::with_capacity(record.gauss.len() * N_INTEG_POINT);
        for states in &record.gauss {
            for state in states {
                let value = match quantity {
                    IpQuantity::Strain(c) | IpQuantity::Stress(c) if c >= state.n_channel() => {
                        return Err("the channel index is out of range")
                    }
                    IpQuantity::Strain(c) => state.strain[c],
                    IpQuantity::Stress(c) => state.stress[c],
                    IpQuantity::StressEff => state.stress_eff,
                    IpQuantity::Damage => state.damage,
                    IpQuantity::Alpha => state.alpha,
                };
                values.push(value);
            }
        }
        Ok(values)
    }

    /// Averages the values at the integration points onto the nodes
    ///
    /// The value at an interior node is the average of the values at the two integration
    /// points next to it (one in each adjacent cell); the end nodes take the value of
    /// their single adjacent integration point.
    ///
    /// # Input
    ///
    /// * `ip_values` -- values ordered as in [History::ip_field] (n_cell × N_INTEG_POINT)
    ///
    /// # Output
    ///
    /// Returns the n_cell + 1 nodal values
    pub fn nodal_average(&self, ip_values: &[f64]) -> Result<Vec<f64>, StrError> {
        let n_cell = self.ip_coords.len();
        if n_cell == 0 || ip_values.len() != n_cell * N_INTEG_POINT {
            return Err("the number of values must equal the number of integration points");
        }
        let last = N_INTEG_POINT - 1;
        let mut res = Vec::with_capacity(n_cell + 1);
        res.push(ip_values[0]);
        for i in 1..n_cell {
            let left = ip_values[(i - 1) * N_INTEG_POINT + last];
            let right = ip_values[i * N_INTEG_POINT];
            res.push((left + right) / 2.0);
        }
        res.push(ip_values[n_cell * N_INTEG_POINT - 1]);
        Ok(res)
    }

    /// Returns the slip (u_fiber - u_matrix) at all nodes of a record
    ///
    /// Requires two DOFs per node `[matrix, fiber]`.
    pub fn nodal_slip(&self, index: usize) -> Result<Vec<f64>, StrError> {
        let record = self.records.get(index).ok_or("the record index is out of range")?;
        self.node_dofs
            .iter()
            .map(|dofs| {
                if dofs.len() != 2 {
                    return Err("the nodal slip requires two DOFs per node");
                }
                Ok(record.uu[dofs[1]] - record.uu[dofs[0]])
            })
            .collect()
    }

    /// Reads a JSON file containing the history
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let history = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(history)
    }

    /// Writes a JSON file with the history
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
