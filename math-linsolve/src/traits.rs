//! Core traits for dense linear solvers
//!
//! This module defines the two abstractions shared by every solving strategy:
//! - [`RealField`]: Trait for the real scalar types a system can be expressed in
//! - [`LinearSolver`]: Trait for strategies that turn an augmented matrix into a solution

use crate::error::SolverError;
use ndarray::{Array1, Array2};
use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types that can be used in the solvers.
///
/// Only real floating-point types are supported. Singularity checks throughout
/// the crate compare against exact zero, so no tolerance is attached to the type.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for all solvers)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Copy + Send + Sync + Debug + Display + 'static
{
    /// Largest number of fractional digits that rounding can honour for this type
    const MAX_ROUND_DIGITS: u32;

    /// Round to `digits` fractional digits, half away from zero.
    ///
    /// Values whose scaled magnitude no longer has a fractional part are
    /// returned unchanged.
    fn round_to_digits(self, digits: u32) -> Self;

    /// Exact comparison with zero, used for pivot checks
    #[inline]
    fn is_exact_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Round `value * scale` to an integer and scale back.
///
/// The product is itself rounded, so an inexact product can land exactly on a
/// half. The residual `value * scale - scaled`, exact under a fused
/// multiply-add, tells which side of the half the true product lies on; only
/// an exact half is rounded away from zero.
#[inline]
fn round_scaled<T: Float>(value: T, scale: T, integer_limit: T) -> T {
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= integer_limit {
        return value;
    }
    let half = T::one() / (T::one() + T::one());
    let rounded = if scaled.fract().abs() == half {
        let residual = value.mul_add(scale, -scaled);
        if residual > T::zero() {
            scaled.ceil()
        } else if residual < T::zero() {
            scaled.floor()
        } else {
            scaled.round()
        }
    } else {
        scaled.round()
    };
    rounded / scale
}

impl RealField for f64 {
    const MAX_ROUND_DIGITS: u32 = 15;

    #[inline]
    fn round_to_digits(self, digits: u32) -> Self {
        let scale = 10f64.powi(digits.min(Self::MAX_ROUND_DIGITS) as i32);
        // 2^52: above this every f64 is already an integer
        round_scaled(self, scale, 4_503_599_627_370_496.0)
    }
}

impl RealField for f32 {
    const MAX_ROUND_DIGITS: u32 = 7;

    #[inline]
    fn round_to_digits(self, digits: u32) -> Self {
        let scale = 10f32.powi(digits.min(Self::MAX_ROUND_DIGITS) as i32);
        // 2^23
        round_scaled(self, scale, 8_388_608.0)
    }
}

/// Trait for strategies solving a dense square system `Ax = b`.
///
/// The input is the augmented matrix `[A | b]` of shape `n x (n+1)`. Implementors
/// never mutate the caller's matrix and hold no state between calls, so a single
/// instance can be shared freely across threads.
pub trait LinearSolver<T: RealField>: Send + Sync {
    /// Short name of the strategy, used in logs and reports
    fn name(&self) -> &'static str;

    /// Solve the system, optionally rounding every component of the solution
    /// to `round_digits` fractional digits.
    fn solve(
        &self,
        augmented: &Array2<T>,
        round_digits: Option<u32>,
    ) -> Result<Array1<T>, SolverError>;
}
