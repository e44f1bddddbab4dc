use bondsim::base::{SampleParams, DEFAULT_OUT_DIR};
use bondsim::prelude::*;
use bondsim::StrError;
use std::fs::File;
use std::io::BufReader;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "bondsim_pullout",
    about = "Runs a pull-out test of a reinforcement bonded to a matrix"
)]
struct Options {
    /// Embedded length
    #[structopt(long, default_value = "600.0")]
    length: f64,

    /// Number of cells
    #[structopt(long, default_value = "30")]
    n_cell: usize,

    /// Pull-out displacement of the fiber at the loaded end (at t = 1)
    #[structopt(long, default_value = "10.0")]
    w_max: f64,

    /// Time (load) increment
    #[structopt(long, default_value = "0.005")]
    dt: f64,

    /// Maximum number of iterations per step
    #[structopt(long, default_value = "50")]
    n_max_iterations: usize,

    /// Use the two-point Gauss rule instead of the nodal integration
    #[structopt(long)]
    gauss: bool,

    /// JSON file with the bond parameters (the sample pull-out parameters are used otherwise)
    #[structopt(long)]
    params: Option<String>,

    /// Output JSON file with the history
    #[structopt(long)]
    out: Option<String>,

    /// Prints the time stepping and convergence statistics
    #[structopt(short, long)]
    verbose: bool,
}

fn read_params(path: &str) -> Result<ParamBond, StrError> {
    let input = File::open(path).map_err(|_| "cannot open parameters file")?;
    let buffered = BufReader::new(input);
    let param = serde_json::from_reader(buffered).map_err(|_| "cannot parse parameters file")?;
    Ok(param)
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // parameters
    let param = match &options.params {
        Some(path) => read_params(path)?,
        None => SampleParams::param_bond_pullout(),
    };

    // mesh and configuration
    let mesh = SampleMeshes::bonds(options.length, options.n_cell, 1);
    let base = FemBase::new(&mesh, [(1, Elem::Bond(param))])?;
    let mut config = Config::new();
    config
        .set_dt(options.dt)?
        .set_n_max_iterations(options.n_max_iterations)?
        .set_nodal_integration(!options.gauss)?
        .set_verbose(options.verbose, options.verbose)?;

    // boundary conditions: fixed matrix at x = 0 and pulled fiber at x = L
    let fiber_dof = mesh.n_dof - 1;
    let mut essential = Essential::new(mesh.n_dof);
    essential.fix(0)?.at(fiber_dof, options.w_max)?;
    let natural = Natural::new(mesh.n_dof);

    // run
    let mut solver = SolverImplicit::new(&mesh, &base, &config, &essential, &natural)?;
    let mut state = FemState::new(&mesh, &base, &config)?;
    let mut history = History::new(&mesh, &config)?;
    let status = solver.solve(&mut state, &mut history);

    // write the history, including the partial results of a failed run
    let path = match &options.out {
        Some(p) => p.clone(),
        None => format!("{}/pullout.json", DEFAULT_OUT_DIR),
    };
    history.write_json(&path)?;

    // message
    let (uu, ff) = history.curve(fiber_dof)?;
    let thin_line = format!("{:─^1$}", "", path.len());
    println!("\n{}", thin_line);
    match &status {
        Ok(_) => println!("converged steps = {}", history.len() - 1),
        Err(e) => println!("ERROR: {}", e),
    }
    if let (Some(u), Some(f)) = (uu.last(), ff.last()) {
        println!("pull-out displacement = {:?}", u);
        println!("pull-out force        = {:?}", f);
    }
    println!("the history file is:");
    println!("{}", path);
    println!("{}\n", thin_line);
    status.map_err(|_| "the simulation failed")
}
