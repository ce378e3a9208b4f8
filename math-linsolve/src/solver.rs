//! Solver facade
//!
//! Picks a strategy from a [`SolverConfig`] and runs it over an augmented
//! matrix. The fast-path strategies are an explicit two-step call: try the
//! substitution heuristic, and only if it leaves unknowns unresolved run the
//! complete method once.
//!
//! # Solver Types
//!
//! - **GaussJordan**: reduced row-echelon elimination
//! - **Lu**: Doolittle LU decomposition plus triangular solves
//! - **FastPathGaussJordan** / **FastPathLu**: substitution first, then the
//!   named complete method

use crate::direct::{GaussJordanSolver, LuSolver};
use crate::error::SolverError;
use crate::fast_path::{FastPathOutcome, fast_path};
use crate::matrix::{check_augmented, check_finite, round_solution};
use crate::traits::{LinearSolver, RealField};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// Type of solver to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverType {
    /// Gauss-Jordan elimination only
    GaussJordan,
    /// LU decomposition only
    Lu,
    /// Fast path, falling back to Gauss-Jordan
    FastPathGaussJordan,
    /// Fast path, falling back to LU (best general choice)
    #[default]
    FastPathLu,
}

impl SolverType {
    /// All strategies, in the order reports list them
    pub const ALL: [SolverType; 4] = [
        SolverType::GaussJordan,
        SolverType::Lu,
        SolverType::FastPathGaussJordan,
        SolverType::FastPathLu,
    ];

    /// Complete method used by this strategy, directly or as fallback
    pub fn complete_method(&self) -> SolveMethod {
        match self {
            SolverType::GaussJordan | SolverType::FastPathGaussJordan => SolveMethod::GaussJordan,
            SolverType::Lu | SolverType::FastPathLu => SolveMethod::Lu,
        }
    }

    /// Whether the fast path is tried first
    pub fn uses_fast_path(&self) -> bool {
        matches!(
            self,
            SolverType::FastPathGaussJordan | SolverType::FastPathLu
        )
    }
}

/// Method that actually produced a solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveMethod {
    FastPath,
    GaussJordan,
    Lu,
}

/// Solver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Solver type to use
    pub solver_type: SolverType,
    /// Round each component to this many fractional digits
    pub round_digits: Option<u32>,
    /// Reject NaN and infinite entries before solving
    pub reject_non_finite: bool,
    /// Verbosity level (0 = quiet, 1 = summary, 2+ = detailed)
    pub verbosity: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            solver_type: SolverType::FastPathLu,
            round_digits: None,
            reject_non_finite: true,
            verbosity: 0,
        }
    }
}

/// Errors loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SolverConfig {
    /// Config with the given strategy and defaults elsewhere
    pub fn with_solver(solver_type: SolverType) -> Self {
        Self {
            solver_type,
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Solution result from the solver
#[derive(Debug, Clone)]
pub struct Solution<T: RealField> {
    /// Solution vector
    pub values: Array1<T>,
    /// Method that produced the values
    pub method: SolveMethod,
    /// Fast-path passes run before success or fallback (0 if not tried)
    pub fast_path_passes: usize,
    /// Wall time of the solve
    pub elapsed: Duration,
}

/// Solve an augmented system `[A | b]`
///
/// # Arguments
/// * `augmented` - Matrix of shape `n x (n+1)`, left untouched
/// * `config` - Solver configuration
///
/// # Returns
/// The solution and the method that produced it
pub fn solve<T: RealField>(
    augmented: &Array2<T>,
    config: &SolverConfig,
) -> Result<Solution<T>, SolverError> {
    let start = Instant::now();

    let n = check_augmented(augmented)?;
    if config.reject_non_finite {
        check_finite(augmented)?;
    }

    let mut fast_path_passes = 0;
    if config.solver_type.uses_fast_path() {
        match fast_path(augmented) {
            FastPathOutcome::Solved { mut x, passes } => {
                round_solution(&mut x, config.round_digits);
                let elapsed = start.elapsed();
                if config.verbosity > 0 {
                    log::info!(
                        "Fast path solved {} unknowns in {} passes ({:.3}ms)",
                        n,
                        passes,
                        elapsed.as_secs_f64() * 1000.0
                    );
                }
                return Ok(Solution {
                    values: x,
                    method: SolveMethod::FastPath,
                    fast_path_passes: passes,
                    elapsed,
                });
            }
            FastPathOutcome::Unresolved { resolved, passes } => {
                fast_path_passes = passes;
                if config.verbosity > 1 {
                    log::debug!(
                        "Fast path stalled after {} passes with {}/{} unknowns, falling back",
                        passes,
                        resolved,
                        n
                    );
                }
            }
        }
    }

    let method = config.solver_type.complete_method();
    let values = solve_complete(config.solver_type, augmented, config.round_digits)?;
    let elapsed = start.elapsed();

    if config.verbosity > 0 {
        log::info!(
            "{:?} solved {} unknowns ({:.3}ms)",
            method,
            n,
            elapsed.as_secs_f64() * 1000.0
        );
    }

    Ok(Solution {
        values,
        method,
        fast_path_passes,
        elapsed,
    })
}

/// Run the complete method of `solver_type`, skipping any fast path
fn solve_complete<T: RealField>(
    solver_type: SolverType,
    augmented: &Array2<T>,
    round_digits: Option<u32>,
) -> Result<Array1<T>, SolverError> {
    match solver_type {
        SolverType::GaussJordan | SolverType::FastPathGaussJordan => {
            GaussJordanSolver.solve(augmented, round_digits)
        }
        SolverType::Lu | SolverType::FastPathLu => LuSolver.solve(augmented, round_digits),
    }
}

/// Fast path chained into a complete strategy
///
/// Exposes the fallback composition through the common [`LinearSolver`]
/// interface so it can be swapped with the plain strategies.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastPathSolver<S> {
    /// Strategy used when the fast path leaves unknowns unresolved
    pub fallback: S,
}

impl<S> FastPathSolver<S> {
    pub fn new(fallback: S) -> Self {
        Self { fallback }
    }
}

impl<T: RealField, S: LinearSolver<T>> LinearSolver<T> for FastPathSolver<S> {
    fn name(&self) -> &'static str {
        "fast-path"
    }

    fn solve(
        &self,
        augmented: &Array2<T>,
        round_digits: Option<u32>,
    ) -> Result<Array1<T>, SolverError> {
        if let Some(mut x) = fast_path(augmented).into_solution() {
            round_solution(&mut x, round_digits);
            return Ok(x);
        }
        self.fallback.solve(augmented, round_digits)
    }
}

/// Strategy object for a [`SolverType`]
pub fn strategy<T: RealField>(solver_type: SolverType) -> Box<dyn LinearSolver<T>> {
    match solver_type {
        SolverType::GaussJordan => Box::new(GaussJordanSolver),
        SolverType::Lu => Box::new(LuSolver),
        SolverType::FastPathGaussJordan => Box::new(FastPathSolver::new(GaussJordanSolver)),
        SolverType::FastPathLu => Box::new(FastPathSolver::new(LuSolver)),
    }
}
