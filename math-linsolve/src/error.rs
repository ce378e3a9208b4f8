//! Errors reported by the solvers

use thiserror::Error;

/// Errors that can occur while solving a linear system
///
/// The fast-path solver never produces these: an unresolved system is a normal
/// outcome, reported as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Row count does not match the number of unknowns
    #[error("Matrix is not square: {rows} rows for {cols} unknowns")]
    NonSquareMatrix { rows: usize, cols: usize },
    /// A pivot or diagonal entry is exactly zero with no usable replacement row
    #[error("Matrix is singular: {0}")]
    SingularMatrix(&'static str),
    /// Input validation found a NaN or infinite entry
    #[error("Non-finite value at row {row}, column {col}")]
    NonFiniteInput { row: usize, col: usize },
    /// The system has no equations
    #[error("System has no equations")]
    EmptySystem,
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

impl SolverError {
    /// Whether the error is a numerical (rather than structural) failure
    pub fn is_singular(&self) -> bool {
        matches!(self, SolverError::SingularMatrix(_))
    }
}
