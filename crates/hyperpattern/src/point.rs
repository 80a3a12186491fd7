//! N-dimensional integer point.

use std::fmt;
use std::ops::{Index, IndexMut};

use itertools::Itertools;
use smallvec::SmallVec;

use crate::{Coord, Ndim};

/// Constructs an N-dimensional integer point, using the same syntax as
/// `vec![]`.
#[macro_export]
macro_rules! point {
    [$($tok:tt)*] => {
        $crate::Point($crate::smallvec::smallvec![$($tok)*])
    };
}

/// N-dimensional point with integer coordinates.
///
/// Points are ordered lexicographically by their coordinates.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point<N>(pub SmallVec<[N; 4]>);

impl<N> Ndim for Point<N> {
    /// Returns the number of coordinates of the point.
    fn ndim(&self) -> u8 {
        self.0.len().try_into().unwrap_or(u8::MAX)
    }
}

impl<N: Coord> Point<N> {
    /// Returns the origin in `ndim` dimensions.
    pub fn origin(ndim: u8) -> Self {
        Point(smallvec::smallvec![N::zero(); ndim as usize])
    }

    /// Returns an iterator over the coordinates of the point.
    pub fn iter(&self) -> impl Clone + ExactSizeIterator<Item = N> + '_ {
        self.0.iter().copied()
    }

    /// Returns a copy of the point with the coordinates along axes `a` and `b`
    /// exchanged, i.e., the reflection through the diagonal hyperplane between
    /// those two axes.
    #[must_use]
    pub fn with_swapped_axes(&self, a: u8, b: u8) -> Self {
        let mut ret = self.clone();
        ret.0.swap(a as usize, b as usize);
        ret
    }
    /// Returns a copy of the point with the coordinate along `axis` negated,
    /// i.e., the reflection through the hyperplane orthogonal to `axis`.
    #[must_use]
    pub fn with_negated_axis(&self, axis: u8) -> Self {
        let mut ret = self.clone();
        ret[axis] = -ret[axis];
        ret
    }

    /// Returns the absolute values of the coordinates in ascending order.
    ///
    /// Two points have the same canonical form if and only if one can be
    /// reached from the other by permuting axes and reflecting along axes.
    #[must_use]
    pub fn canonical(&self) -> Self {
        let mut ret: Self = self.iter().map(|x| x.abs()).collect();
        ret.0.sort_unstable();
        ret
    }

    /// Returns the squared Euclidean distance from the origin.
    pub fn mag2(&self) -> N {
        self.iter().fold(N::zero(), |acc, x| acc + x * x)
    }
}

impl<N: Coord> FromIterator<N> for Point<N> {
    fn from_iter<T: IntoIterator<Item = N>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<N: fmt::Display> fmt::Display for Point<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}

impl<N> Index<u8> for Point<N> {
    type Output = N;

    fn index(&self, axis: u8) -> &Self::Output {
        &self.0[axis as usize]
    }
}
impl<N> IndexMut<u8> for Point<N> {
    fn index_mut(&mut self, axis: u8) -> &mut Self::Output {
        &mut self.0[axis as usize]
    }
}
