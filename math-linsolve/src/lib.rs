//! Dense solvers for square systems of linear equations
//!
//! This crate solves `Ax = b` given the augmented matrix `[A | b]`, using
//! interchangeable strategies with different speed and robustness trade-offs.
//!
//! # Features
//!
//! - **Gauss-Jordan**: full elimination to reduced row-echelon form
//! - **LU**: Doolittle decomposition with partial pivoting, plus determinant and inverse
//! - **Fast path**: direct substitution for triangular or otherwise reducible systems,
//!   chained into a complete method when it cannot resolve every unknown
//! - **Verification**: per-equation deviation of a candidate solution
//! - **Generic Scalar Types**: Works with f64 and f32
//!
//! Singularity is detected by exact comparison with zero. Ill-conditioned
//! systems are not detected and may return inaccurate values.
//!
//! # Example
//!
//! ```
//! use math_audio_linsolve::{SolverConfig, solve};
//! use ndarray::array;
//!
//! // x + y = 7, -2x - y + 2z = 0, 3x - 2y - 2z = -9
//! let m = array![
//!     [1.0_f64, 1.0, 0.0, 7.0],
//!     [-2.0, -1.0, 2.0, 0.0],
//!     [3.0, -2.0, -2.0, -9.0],
//! ];
//! let config = SolverConfig { round_digits: Some(14), ..Default::default() };
//! let solution = solve(&m, &config).unwrap();
//! assert_eq!(solution.values, array![3.0, 4.0, 5.0]);
//! ```

pub mod direct;
pub mod error;
pub mod fast_path;
pub mod generator;
pub mod matrix;
pub mod parallel;
pub mod solver;
pub mod traits;
pub mod verify;

// Re-export main types
pub use error::SolverError;
pub use traits::{LinearSolver, RealField};

// Re-export solvers
pub use direct::{
    GaussJordanSolver, LuDecomposition, LuSolver, determinant, gauss_jordan, lu_solve,
    solve_from_lu,
};
pub use fast_path::{FastPathOutcome, fast_path, try_fast_solve};
pub use solver::{
    ConfigError, FastPathSolver, SolveMethod, Solution, SolverConfig, SolverType, solve, strategy,
};

// Re-export synthetic system generation
pub use generator::{SyntheticSystem, generate, generate_dense};

// Re-export verification helpers
pub use verify::{close_to_zero, deviations, is_solution, max_abs_deviation};
