use bondsim::base::SampleParams;
use bondsim::fem::CrackBridgeSweep;
use bondsim::prelude::*;
use russell_lab::*;

// Crack-bridge sweep over embedded lengths
//
// TEST GOAL
//
// This test verifies that each run of the sweep starts from a fresh state; thus, the
// results do not depend on the order of the runs. It also checks that the composite
// stress at the final step increases with the embedded length (more bond area)
//
// MESH
//
// Five bond cells over each embedded length L
//
// BOUNDARY CONDITIONS
//
// Fixed matrix and fiber at x = 0; fiber at x = L pulled to w = F_max / (E_f A_f) · L · t
//
// CONFIGURATION AND PARAMETERS
//
// Four load steps from t = 0 to t = 1; three lengths from 1 to 100
// E_m = E_f = 10, E_b = 2, σy = 1, K(α) = 0.5 α, no damage, unit areas and perimeter
// F_max = 0.2, A_c = 2

#[test]
fn test_crack_bridge_sweep() -> Result<(), SimError> {
    // parameters
    let mut param = SampleParams::param_bond_perfectly_plastic();
    param.hardening = ScalarLaw::Linear { slope: 0.5 };

    // sweep
    let mut sweep = CrackBridgeSweep::new(param);
    sweep.n_cell = 5;
    sweep.length_min = 1.0;
    sweep.length_max = 100.0;
    sweep.n_length = 3;
    sweep.max_force = 0.2;
    sweep.area_composite = 2.0;

    // configuration
    let mut config = Config::new();
    config.set_dt(0.25)?.set_tol_rr_abs(1e-10)?;

    // run in ascending order
    let results = sweep.run(&config)?;
    assert_eq!(results.len(), 3);
    approx_eq(results[1].length, 10.0, 1e-13);

    // run in reverse order
    let lengths = sweep.lengths()?;
    for (i, length) in lengths.iter().enumerate().rev() {
        let res = sweep.run_one(&config, *length)?;
        assert_eq!(res.length, results[i].length);
        assert_eq!(res.w_max, results[i].w_max);
        assert_eq!(res.composite_stress, results[i].composite_stress);
        let n_record = res.history.len();
        assert_eq!(n_record, 5);
        assert_eq!(
            res.history.records[n_record - 1].uu.as_data(),
            results[i].history.records[n_record - 1].uu.as_data()
        );
    }

    // final composite stress
    let final_stress: Vec<_> = results.iter().map(|r| r.composite_stress[4]).collect();
    assert!(final_stress[0] > 0.0);
    assert!(final_stress[1] > final_stress[0]);
    assert!(final_stress[2] > final_stress[1]);

    // nodal fields of the longest bridge
    let sig_m = results[2].nodal_matrix_stress(4)?;
    let eps_f = results[2].nodal_fiber_strain(4)?;
    assert_eq!(sig_m.len(), 6);
    assert_eq!(eps_f.len(), 6);
    for value in &eps_f {
        assert!(value.is_finite());
    }
    Ok(())
}
