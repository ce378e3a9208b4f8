//! Direct solvers for dense linear systems
//!
//! This module provides the complete (non-heuristic) methods:
//! - [`gauss_jordan`]: Gauss-Jordan elimination with partial pivoting
//! - [`LuDecomposition`]: Doolittle LU decomposition with partial pivoting
//! - [`solve_from_lu`]: forward/backward substitution on a packed LU factor

mod gauss_jordan;
mod lu;
mod triangular;

pub use gauss_jordan::{GaussJordanSolver, gauss_jordan};
pub use lu::{LuDecomposition, LuSolver, determinant, lu_solve};
pub use triangular::{backward_substitution, forward_substitution, solve_from_lu};
