//! Fast-path substitution solver
//!
//! Resolves unknowns by direct substitution whenever a row is left with a
//! single unresolved unknown. Triangular and other structurally reducible
//! systems are solved in linear passes without any elimination; anything else
//! comes back unresolved so the caller can fall back to a complete method.

use crate::matrix::check_augmented;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Result of a fast-path attempt
#[derive(Debug, Clone, PartialEq)]
pub enum FastPathOutcome<T: RealField> {
    /// Every unknown was resolved
    Solved {
        /// Solution vector
        x: Array1<T>,
        /// Number of passes over the rows
        passes: usize,
    },
    /// A full pass resolved nothing new
    Unresolved {
        /// Unknowns resolved before stalling
        resolved: usize,
        /// Number of passes over the rows
        passes: usize,
    },
}

impl<T: RealField> FastPathOutcome<T> {
    /// Solution if the system was fully resolved
    pub fn into_solution(self) -> Option<Array1<T>> {
        match self {
            FastPathOutcome::Solved { x, .. } => Some(x),
            FastPathOutcome::Unresolved { .. } => None,
        }
    }

    pub fn passes(&self) -> usize {
        match self {
            FastPathOutcome::Solved { passes, .. } | FastPathOutcome::Unresolved { passes, .. } => {
                *passes
            }
        }
    }
}

/// Try to solve `[A | b]` by repeated direct substitution.
///
/// Never fails: a malformed shape or a system that is not reducible this way
/// both yield [`FastPathOutcome::Unresolved`].
pub fn fast_path<T: RealField>(augmented: &Array2<T>) -> FastPathOutcome<T> {
    let Ok(n) = check_augmented(augmented) else {
        return FastPathOutcome::Unresolved {
            resolved: 0,
            passes: 0,
        };
    };

    let mut row_solved = vec![false; n];
    let mut col_solved = vec![false; n];
    let mut x = Array1::zeros(n);
    let mut resolved = 0;
    let mut passes = 0;

    loop {
        passes += 1;
        let mut progress = false;

        for i in 0..n {
            if row_solved[i] {
                continue;
            }

            let mut sum = T::zero();
            let mut pending: Option<usize> = None;
            let mut blocked = false;
            for j in 0..n {
                let coeff = augmented[[i, j]];
                if coeff.is_exact_zero() {
                    continue;
                }
                if col_solved[j] {
                    sum += coeff * x[j];
                } else if pending.is_none() {
                    pending = Some(j);
                } else {
                    blocked = true;
                    break;
                }
            }

            if blocked {
                continue;
            }
            let Some(col) = pending else {
                continue;
            };

            x[col] = (augmented[[i, n]] - sum) / augmented[[i, col]];
            col_solved[col] = true;
            row_solved[i] = true;
            resolved += 1;
            progress = true;

            if resolved == n {
                return FastPathOutcome::Solved { x, passes };
            }
        }

        if !progress {
            return FastPathOutcome::Unresolved { resolved, passes };
        }
    }
}

/// Fast-path solve, `None` when the system needs a complete method
pub fn try_fast_solve<T: RealField>(augmented: &Array2<T>) -> Option<Array1<T>> {
    fast_path(augmented).into_solution()
}
