use bondsim::base::{Cell, ParamBar};
use bondsim::prelude::*;
use russell_lab::*;

// Two bars in series with a point load
//
// TEST GOAL
//
// This test verifies the force-controlled solution of two bars with distinct
// cross-sections (two cell attributes) against the analytical solution
//
// MESH
//
//  {0}----[0]----{1}----[1]----{2}  ---→ P
//  x=0          x=3           x=5
//
// {#} indicates the DOF number
// [#] indicates the cell id
//
// BOUNDARY CONDITIONS
//
// Fixed DOF 0; point load P · t at DOF 2
//
// CONFIGURATION AND PARAMETERS
//
// Four load steps from t = 0 to t = 1; two-point Gauss rule
// Attribute 1: E = 10, A = 1
// Attribute 2: E = 10, A = 2
// P = 8

#[test]
fn test_bar_point_load() -> Result<(), SimError> {
    // mesh
    let mesh = Mesh {
        n_dof: 3,
        cells: vec![
            Cell {
                id: 0,
                attribute: 1,
                dofs: vec![0, 1],
                coords: [0.0, 3.0],
            },
            Cell {
                id: 1,
                attribute: 2,
                dofs: vec![1, 2],
                coords: [3.0, 5.0],
            },
        ],
    };

    // parameters
    let p1 = ParamBar { young: 10.0, area: 1.0 };
    let p2 = ParamBar { young: 10.0, area: 2.0 };
    let base = FemBase::new(&mesh, [(1, Elem::Bar(p1)), (2, Elem::Bar(p2))])?;

    // boundary conditions
    let load = 8.0;
    let mut essential = Essential::new(mesh.n_dof);
    essential.fix(0)?;
    let mut natural = Natural::new(mesh.n_dof);
    natural.at(2, load)?;

    // configuration
    let mut config = Config::new();
    config.set_dt(0.25)?.set_nodal_integration(false)?;

    // solution
    let mut solver = SolverImplicit::new(&mesh, &base, &config, &essential, &natural)?;
    let mut state = FemState::new(&mesh, &base, &config)?;
    let mut history = History::new(&mesh, &config)?;
    solver.solve(&mut state, &mut history)?;

    // check the final state: u1 = P L1 / (E A1) and u2 = u1 + P L2 / (E A2)
    let u1 = load * 3.0 / 10.0;
    let u2 = u1 + load * 2.0 / 20.0;
    vec_approx_eq(&state.uu, &[0.0, u1, u2], 1e-12);
    assert_eq!(state.t, 1.0);

    // check all steps (linear response)
    assert_eq!(history.len(), 5);
    for record in &history.records {
        let t = record.t;
        vec_approx_eq(&record.uu, &[0.0, u1 * t, u2 * t], 1e-12);
        // the internal forces balance the applied load and the reaction
        vec_approx_eq(&record.ff, &[-load * t, 0.0, load * t], 1e-11);
    }
    Ok(())
}

// Bar under a point load without supports
//
// TEST GOAL
//
// This test verifies that a system without essential boundary conditions is rejected
// before any step is taken

#[test]
fn test_bar_point_load_without_supports() -> Result<(), SimError> {
    let mesh = SampleMeshes::bars(1.0, 1, 1);
    let base = FemBase::new(&mesh, [(1, Elem::Bar(ParamBar { young: 1.0, area: 1.0 }))])?;
    let essential = Essential::new(mesh.n_dof);
    let mut natural = Natural::new(mesh.n_dof);
    natural.at(1, 1.0)?;
    let config = Config::new();
    let mut solver = SolverImplicit::new(&mesh, &base, &config, &essential, &natural)?;
    let mut state = FemState::new(&mesh, &base, &config)?;
    let mut history = History::new(&mesh, &config)?;
    let res = solver.solve(&mut state, &mut history);
    assert!(matches!(res, Err(SimError::SingularSystem { .. })));
    assert_eq!(history.len(), 0);
    assert_eq!(state.uu.as_data(), &[0.0, 0.0]);
    Ok(())
}
