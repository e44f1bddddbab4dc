use bondsim::base::{SampleParams, DEFAULT_TEST_DIR};
use bondsim::fem::IpQuantity;
use bondsim::prelude::*;
use russell_lab::*;

// Single bar with prescribed displacement
//
// TEST GOAL
//
// This test verifies the converged reaction of a linear-elastic bar against the
// analytical solution F = E A u / L
//
// MESH
//
//  {0}----------[0]----------{1}
//  x=0                       x=20
//
// {#} indicates the DOF number
// [#] indicates the cell id
//
// BOUNDARY CONDITIONS
//
// Fixed DOF 0; DOF 1 prescribed to 1.0 · t
//
// CONFIGURATION AND PARAMETERS
//
// One load step from t = 0 to t = 1
// Attribute 1: E = 10, A = 1

#[test]
fn test_bar_prescribed_displacement() -> Result<(), SimError> {
    // mesh
    let mesh = SampleMeshes::bars(20.0, 1, 1);

    // parameters
    let base = FemBase::new(&mesh, [(1, Elem::Bar(SampleParams::param_bar()))])?;

    // boundary conditions
    let mut essential = Essential::new(mesh.n_dof);
    essential.fix(0)?.at(1, 1.0)?;
    let natural = Natural::new(mesh.n_dof);

    // configuration
    let mut config = Config::new();
    config.set_dt(1.0)?;

    // solution
    let mut solver = SolverImplicit::new(&mesh, &base, &config, &essential, &natural)?;
    let mut state = FemState::new(&mesh, &base, &config)?;
    let mut history = History::new(&mesh, &config)?;
    solver.solve(&mut state, &mut history)?;

    // check
    assert_eq!(history.len(), 2);
    let (uu, ff) = history.curve(1)?;
    assert_eq!(uu, &[0.0, 1.0]);
    approx_eq(ff[1], 10.0 * (1.0 / 20.0) * 1.0, 1e-12);
    let (_, ff) = history.curve(0)?;
    approx_eq(ff[1], -0.5, 1e-12);
    Ok(())
}

// Two bars with prescribed displacement and several load steps
//
// TEST GOAL
//
// This test verifies the assembly additivity at the shared node, the enforcement of the
// prescribed values at every converged step, and the history JSON round trip
//
// MESH
//
//  {0}----[0]----{1}----[1]----{2}
//  x=0          x=10          x=20

#[test]
fn test_two_bars_prescribed_displacement() -> Result<(), SimError> {
    let mesh = SampleMeshes::bars(20.0, 2, 1);
    let base = FemBase::new(&mesh, [(1, Elem::Bar(SampleParams::param_bar()))])?;
    let mut essential = Essential::new(mesh.n_dof);
    essential.fix(0)?.at_fn(2, 2.0, |t| t * t)?;
    let natural = Natural::new(mesh.n_dof);
    let mut config = Config::new();
    config.set_dt(0.25)?.set_nodal_integration(false)?;
    let mut solver = SolverImplicit::new(&mesh, &base, &config, &essential, &natural)?;
    let mut state = FemState::new(&mesh, &base, &config)?;
    let mut history = History::new(&mesh, &config)?;
    solver.solve(&mut state, &mut history)?;

    // prescribed values at every converged step
    assert_eq!(history.len(), 5);
    for record in &history.records {
        let t = record.t;
        assert_eq!(record.uu[0], 0.0);
        approx_eq(record.uu[2], 2.0 * t * t, 1e-14);
        // uniform strain; the middle node is in the middle
        approx_eq(record.uu[1], t * t, 1e-12);
        // the shared node is in equilibrium
        approx_eq(record.ff[1], 0.0, 1e-12);
        // reactions: E A ε = 10 · 2 t² / 20
        approx_eq(record.ff[2], t * t, 1e-12);
        approx_eq(record.ff[0], -t * t, 1e-12);
    }
    let times = history.times();
    array_approx_eq(&times, &[0.0, 0.25, 0.5, 0.75, 1.0], 1e-15);

    // stress field at the integration points
    let sig = history.ip_field(4, IpQuantity::Stress(0))?;
    array_approx_eq(&sig, &[1.0, 1.0, 1.0, 1.0], 1e-12);
    let sig_nodes = history.nodal_average(&sig)?;
    array_approx_eq(&sig_nodes, &[1.0, 1.0, 1.0], 1e-12);

    // history file
    let path = format!("{}/test_two_bars_prescribed_displacement.json", DEFAULT_TEST_DIR);
    history.write_json(&path)?;
    let read = History::read_json(&path)?;
    assert_eq!(read.len(), history.len());
    vec_approx_eq(&read.records[4].uu, history.records[4].uu.as_data(), 1e-15);
    Ok(())
}
