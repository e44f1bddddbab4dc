use bondsim::base::SampleParams;
use bondsim::fem::IpQuantity;
use bondsim::prelude::*;
use russell_lab::*;

// Perfectly plastic bond under a uniform slip reversal
//
// TEST GOAL
//
// This test verifies that the interface stress of a perfectly plastic bond is clipped
// to ±σy, that the hardening variable accumulates the plastic slip, and that the
// reactions equal the integrated interface stress
//
// MESH
//
//   {1}----------------{3}   fiber
//    0-------[0]--------1
//   {0}----------------{2}   matrix
//   x=0                x=4
//
// {#} indicates the DOF number
// [#] indicates the cell id
//
// BOUNDARY CONDITIONS
//
// Fixed matrix DOFs 0 and 2; fiber DOFs 1 and 3 prescribed to 2 · f(t) with
//
// f(t) = t           for t ≤ 1
// f(t) = 3 - 2 t     for t > 1
//
// CONFIGURATION AND PARAMETERS
//
// Two load steps (t = 1 and t = 2); slip = 2 then slip = -2
// E_b = 2, σy = 1, no hardening, no damage, perimeter = 1

#[test]
fn test_bond_plastic_clipping() -> Result<(), SimError> {
    // mesh
    let length = 4.0;
    let mesh = SampleMeshes::bonds(length, 1, 1);

    // parameters
    let base = FemBase::new(&mesh, [(1, Elem::Bond(SampleParams::param_bond_perfectly_plastic()))])?;

    // boundary conditions
    let mut essential = Essential::new(mesh.n_dof);
    let reversal = |t: f64| if t <= 1.0 { t } else { 3.0 - 2.0 * t };
    essential
        .fix(0)?
        .fix(2)?
        .at_fn(1, 2.0, reversal)?
        .at_fn(3, 2.0, reversal)?;
    let natural = Natural::new(mesh.n_dof);

    // configuration
    let mut config = Config::new();
    config.set_time_range(0.0, 2.0)?.set_dt(1.0)?;

    // solution
    let mut solver = SolverImplicit::new(&mesh, &base, &config, &essential, &natural)?;
    let mut state = FemState::new(&mesh, &base, &config)?;
    let mut history = History::new(&mesh, &config)?;
    solver.solve(&mut state, &mut history)?;
    assert_eq!(history.len(), 3);

    // t = 1: trial stress = 2 · 2 = 4 > σy
    let slip = history.ip_field(1, IpQuantity::Strain(1))?;
    array_approx_eq(&slip, &[2.0, 2.0], 1e-14);
    let tau = history.ip_field(1, IpQuantity::Stress(1))?;
    array_approx_eq(&tau, &[1.0, 1.0], 1e-14);
    let alpha = history.ip_field(1, IpQuantity::Alpha)?;
    array_approx_eq(&alpha, &[1.5, 1.5], 1e-14);

    // t = 2: trial stress = 1 - 2 · 4 = -7 < -σy
    let tau = history.ip_field(2, IpQuantity::Stress(1))?;
    array_approx_eq(&tau, &[-1.0, -1.0], 1e-14);
    let alpha = history.ip_field(2, IpQuantity::Alpha)?;
    array_approx_eq(&alpha, &[4.5, 4.5], 1e-14);
    let damage = history.ip_field(2, IpQuantity::Damage)?;
    array_approx_eq(&damage, &[0.0, 0.0], 1e-15);

    // the matrix and fiber stay unstrained
    let sig_m = history.ip_field(2, IpQuantity::Stress(0))?;
    let sig_f = history.ip_field(2, IpQuantity::Stress(2))?;
    array_approx_eq(&sig_m, &[0.0, 0.0], 1e-15);
    array_approx_eq(&sig_f, &[0.0, 0.0], 1e-15);

    // reactions: the interface stress integrated over half of the length per node
    let half = 1.0 * length / 2.0;
    vec_approx_eq(&history.records[1].ff, &[-half, half, -half, half], 1e-13);
    vec_approx_eq(&history.records[2].ff, &[half, -half, half, -half], 1e-13);

    // nodal slip
    let slip_nodes = history.nodal_slip(2)?;
    array_approx_eq(&slip_nodes, &[-2.0, -2.0], 1e-14);
    Ok(())
}

// Partially yielded bond with a linear interior
//
// TEST GOAL
//
// This test verifies that only the integration points whose trial stress exceeds
// the yield stress are plastic
//
// BOUNDARY CONDITIONS
//
// Fixed matrix DOFs 0 and 2; fixed fiber DOF 1; fiber DOF 3 prescribed to 2 · t

#[test]
fn test_bond_partially_yielded() -> Result<(), SimError> {
    let mesh = SampleMeshes::bonds(4.0, 1, 1);
    let base = FemBase::new(&mesh, [(1, Elem::Bond(SampleParams::param_bond_perfectly_plastic()))])?;
    let mut essential = Essential::new(mesh.n_dof);
    essential.fix(0)?.fix(1)?.fix(2)?.at(3, 2.0)?;
    let natural = Natural::new(mesh.n_dof);
    let mut config = Config::new();
    config.set_dt(1.0)?;
    let mut solver = SolverImplicit::new(&mesh, &base, &config, &essential, &natural)?;
    let mut state = FemState::new(&mesh, &base, &config)?;
    let mut history = History::new(&mesh, &config)?;
    solver.solve(&mut state, &mut history)?;

    // the left point barely slips (elastic) and the right point yields
    let tau = history.ip_field(1, IpQuantity::Stress(1))?;
    let alpha = history.ip_field(1, IpQuantity::Alpha)?;
    assert!(tau[0] > 0.0 && tau[0] < 1.0);
    assert_eq!(alpha[0], 0.0);
    approx_eq(tau[1], 1.0, 1e-14);
    assert!(alpha[1] > 0.0);
    Ok(())
}
