//! Integer coordinate types.

use std::fmt;
use std::hash::Hash;

use num_traits::{PrimInt, Signed};

/// Signed integer type usable as a point coordinate.
///
/// This is implemented for every signed primitive integer, so the caller
/// picks the precision (`i8` through `i128`, or `isize`).
pub trait Coord: PrimInt + Signed + Hash + fmt::Debug + fmt::Display {
    /// Returns `2 * self + 1`.
    fn double_plus_one(self) -> Self {
        self + self + Self::one()
    }

    /// Returns the largest radius for which the midpoint circle algorithm
    /// cannot overflow, which is one third of the largest value.
    fn max_radius() -> Self {
        Self::max_value() / (Self::one() + Self::one() + Self::one())
    }
}

impl<T: PrimInt + Signed + Hash + fmt::Debug + fmt::Display> Coord for T {}
