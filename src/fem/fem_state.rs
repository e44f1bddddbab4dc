use super::FemBase;
use crate::base::{Config, Mesh};
use crate::material::{LocalState, StressStrain};
use crate::StrError;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Defines the number of integration points of the line elements
pub const N_INTEG_POINT: usize = 2;

/// Holds the (committed) state of a simulation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FemState {
    /// Time (load factor)
    pub t: f64,

    /// Delta time
    pub dt: f64,

    /// Cumulated (for one timestep) primary unknowns {ΔU}
    ///
    /// (n_dof)
    pub duu: Vector,

    /// Primary unknowns {U}
    ///
    /// (n_dof)
    pub uu: Vector,

    /// Holds the committed local states at all integration points of all elements
    ///
    /// (n_cell, N_INTEG_POINT)
    pub gauss: Vec<Vec<LocalState>>,
}

impl FemState {
    /// Allocates a new instance with zero displacements and initialized local states
    pub fn new(mesh: &Mesh, base: &FemBase, config: &Config) -> Result<FemState, StrError> {
        if mesh.cells.len() == 0 {
            return Err("there are no cells in the mesh");
        }
        if mesh.n_dof != base.n_dof {
            return Err("the number of DOFs of the mesh and FemBase must be equal");
        }
        let mut gauss = Vec::with_capacity(mesh.cells.len());
        for cell in &mesh.cells {
            let model = StressStrain::new(base.get(cell)?)?;
            let mut states = Vec::with_capacity(N_INTEG_POINT);
            for _ in 0..N_INTEG_POINT {
                states.push(model.new_local_state()?);
            }
            gauss.push(states);
        }
        Ok(FemState {
            t: config.t_ini,
            dt: config.dt,
            duu: Vector::new(mesh.n_dof),
            uu: Vector::new(mesh.n_dof),
            gauss,
        })
    }

    /// Reads a JSON file containing the state data
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
        let state = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(state)
    }

    /// Writes a JSON file with the state data
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
