//! Integration tests for the linear solvers
//!
//! Known small systems with exact answers, degenerate inputs, and agreement
//! between strategies on generated systems.

use approx::assert_abs_diff_eq;
use math_audio_linsolve::{
    FastPathSolver, GaussJordanSolver, LinearSolver, LuSolver, SolveMethod, SolverConfig,
    SolverError, SolverType, deviations, generate, generate_dense, solve, try_fast_solve,
};
use ndarray::{Array1, Array2, array};

/// The two complete strategies under test
fn complete_solvers() -> Vec<Box<dyn LinearSolver<f64>>> {
    vec![Box::new(GaussJordanSolver), Box::new(LuSolver)]
}

/// Assert every equation balances within `tol`
fn assert_balanced(m: &Array2<f64>, x: &Array1<f64>, tol: f64) {
    let devs = deviations(m, x).expect("solution matches the system size");
    for (i, d) in devs.iter().enumerate() {
        assert!(d.abs() < tol, "row {} deviates by {:e}", i, d);
    }
}

#[test]
fn test_three_unknowns_exact_after_rounding() {
    let m = array![
        [1.0_f64, 1.0, 0.0, 7.0],
        [-2.0, -1.0, 2.0, 0.0],
        [3.0, -2.0, -2.0, -9.0]
    ];

    for solver in complete_solvers() {
        let x = solver.solve(&m, Some(14)).expect("solvable");
        assert_eq!(x, array![3.0_f64, 4.0, 5.0], "{}", solver.name());
        assert_eq!(deviations(&m, &x), Ok(array![0.0_f64, 0.0, 0.0]));
    }
}

#[test]
fn test_fractional_coefficients_exact_after_rounding() {
    let m = array![
        [3.0_f64, 2.0, -1.0, 1.0],
        [-1.0, 0.5, -1.0, 0.0],
        [2.0, -2.0, 4.0, -2.0]
    ];

    for solver in complete_solvers() {
        let x = solver.solve(&m, Some(14)).expect("solvable");
        assert_eq!(x, array![1.0_f64, -2.0, -2.0], "{}", solver.name());
        assert_eq!(deviations(&m, &x), Ok(array![0.0_f64, 0.0, 0.0]));
    }
}

#[test]
fn test_negative_component_exact_at_fifteen_digits() {
    // LU leaves 3.0000000000000004 here, whose scaled product sits on a
    // spurious half at 15 digits
    let m = array![
        [2.0_f64, 1.0, -1.0, 8.0],
        [-3.0, -1.0, 2.0, -11.0],
        [-2.0, 1.0, 2.0, -3.0]
    ];

    for solver in complete_solvers() {
        let x = solver.solve(&m, Some(15)).expect("solvable");
        assert_eq!(x, array![2.0_f64, 3.0, -1.0], "{}", solver.name());
        assert_eq!(deviations(&m, &x), Ok(array![0.0_f64, 0.0, 0.0]));
    }
}

#[test]
fn test_two_unknowns() {
    let m = array![[1.0_f64, 2.0, 4.0], [2.0, 3.0, 5.0]];

    for solver in complete_solvers() {
        let x = solver.solve(&m, None).expect("solvable");
        assert_eq!(x, array![-2.0_f64, 3.0], "{}", solver.name());
        assert_balanced(&m, &x, 1e-15);
    }
}

#[test]
fn test_contradictory_rows_singular() {
    let m = array![
        [1.0_f64, 1.0, 1.0, 1.0],
        [1.0, 1.0, 1.0, 1.0],
        [1.0, 1.0, 1.0, 0.0]
    ];

    for solver in complete_solvers() {
        let result = solver.solve(&m, None);
        assert!(
            matches!(result, Err(SolverError::SingularMatrix(_))),
            "{}: {:?}",
            solver.name(),
            result
        );
    }
}

#[test]
fn test_identical_rows_singular() {
    let m = array![
        [2.0_f64, -1.0, 3.0, 4.0],
        [1.0, 5.0, -2.0, 0.0],
        [2.0, -1.0, 3.0, 4.0]
    ];

    for solver in complete_solvers() {
        assert!(solver.solve(&m, None).unwrap_err().is_singular());
    }
}

#[test]
fn test_nan_and_infinity_with_singular_block() {
    for bad in [f64::NAN, f64::INFINITY] {
        let m = array![
            [1.0_f64, 1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0, bad]
        ];

        // The strategies themselves report the singular coefficient block
        for solver in complete_solvers() {
            assert!(solver.solve(&m, None).unwrap_err().is_singular());
        }

        // The facade rejects the non-finite entry up front
        assert_eq!(
            solve(&m, &SolverConfig::default()).map(|s| s.values),
            Err(SolverError::NonFiniteInput { row: 2, col: 3 })
        );
    }
}

#[test]
fn test_wrong_shape_rejected() {
    let m = array![[1.0_f64, 1.0, 1.0, 1.0], [1.0, 1.0, 1.0, f64::NEG_INFINITY]];

    for solver in complete_solvers() {
        assert_eq!(
            solver.solve(&m, None),
            Err(SolverError::NonSquareMatrix { rows: 2, cols: 3 })
        );
    }
    assert!(try_fast_solve(&m).is_none());
}

#[test]
fn test_repeated_solve_is_idempotent() {
    let system = generate(30, false, 1234);
    let before = system.augmented.clone();

    for solver in complete_solvers() {
        let first = solver.solve(&system.augmented, None).expect("solvable");
        let second = solver.solve(&system.augmented, None).expect("solvable");
        assert_eq!(first, second);
    }
    assert_eq!(system.augmented, before);
}

#[test]
fn test_strategies_agree_on_dense_system() {
    let system = generate_dense(40, 99);

    let gj = GaussJordanSolver
        .solve(&system.augmented, None)
        .expect("solvable");
    let lu = LuSolver.solve(&system.augmented, None).expect("solvable");

    assert_abs_diff_eq!(gj, lu, epsilon = 1e-9);
    assert_abs_diff_eq!(gj, system.unknowns, epsilon = 1e-9);
    assert_balanced(&system.augmented, &gj, 1e-9);
    assert_balanced(&system.augmented, &lu, 1e-9);
}

#[test]
fn test_generated_system_falls_back() {
    let system = generate(50, false, 5);
    assert!(try_fast_solve(&system.augmented).is_none());

    let sol = solve(&system.augmented, &SolverConfig::default()).expect("solvable");
    assert_eq!(sol.method, SolveMethod::Lu);
    assert_abs_diff_eq!(sol.values, system.unknowns, epsilon = 1e-6);
}

#[test]
fn test_happy_path_system_uses_fast_path() {
    let system = generate(200, true, 5);

    let sol = solve(&system.augmented, &SolverConfig::default()).expect("solvable");
    assert_eq!(sol.method, SolveMethod::FastPath);
    assert_eq!(sol.fast_path_passes, 1);
    assert_abs_diff_eq!(sol.values, system.unknowns, epsilon = 1e-6);

    let lu = LuSolver.solve(&system.augmented, None).expect("solvable");
    assert_abs_diff_eq!(sol.values, lu, epsilon = 1e-6);
}

#[test]
fn test_fast_path_solver_chain() {
    let chained = FastPathSolver::new(GaussJordanSolver);
    let dense = array![[1.0_f64, 2.0, 4.0], [2.0, 3.0, 5.0]];
    assert_abs_diff_eq!(
        chained.solve(&dense, None).expect("solvable"),
        array![-2.0_f64, 3.0],
        epsilon = 1e-12
    );

    let singular = array![[1.0_f64, 1.0, 1.0], [1.0, 1.0, 2.0]];
    assert!(chained.solve(&singular, None).unwrap_err().is_singular());
}

#[test]
fn test_all_solver_types_from_config() {
    let m = array![
        [4.0_f64, -1.0, 0.0, 2.0],
        [-1.0, 4.0, -1.0, 4.0],
        [0.0, -1.0, 4.0, 10.0]
    ];

    for solver_type in SolverType::ALL {
        let sol = solve(&m, &SolverConfig::with_solver(solver_type)).expect("solvable");
        assert_abs_diff_eq!(sol.values, array![1.0_f64, 2.0, 3.0], epsilon = 1e-12);
    }
}
