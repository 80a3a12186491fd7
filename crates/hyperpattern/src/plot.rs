//! ASCII plots of two-dimensional hyperspheres.

use std::fmt;
use std::iter;

use crate::{Coord, Hypersphere};

/// ASCII plot of a two-dimensional [`Hypersphere`], constructed using
/// [`Hypersphere::plot_2d()`].
///
/// Each point of the hypersphere is drawn as its two-digit layer index. The
/// axes, and the diagonals through the origin, are drawn in the empty cells
/// around it. Rows and columns are labeled with the last digit of their
/// coordinate.
#[derive(Debug, Copy, Clone)]
pub struct Plot2d<'a, N> {
    sphere: &'a Hypersphere<N>,
}

impl<'a, N: Coord> Plot2d<'a, N> {
    pub(crate) fn new(sphere: &'a Hypersphere<N>) -> Self {
        Self { sphere }
    }

    /// Returns the coordinates spanned by the plot along each axis, from
    /// lowest to highest.
    fn coordinates(&self) -> Vec<N> {
        let outermost = self.sphere.layers().outermost();
        let extent = outermost.checked_add(&N::one()).unwrap_or(outermost);
        iter::successors(Some(-extent), |&x| (x < extent).then(|| x + N::one())).collect()
    }

    fn write_ruler(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "# ")?;
        for &x in &self.coordinates() {
            write!(f, " {}", last_digit(x))?;
        }
        writeln!(f)
    }
}

impl<N: Coord> fmt::Display for Plot2d<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_ruler(f)?;

        let coordinates = self.coordinates();
        for &y in coordinates.iter().rev() {
            write!(f, "#{}", last_digit(y))?;
            for &x in &coordinates {
                match self.sphere.points().get(&point![x, y]) {
                    Some(layer) => write!(f, "{layer:02}")?,
                    None if last_digit(x) == '0' => write!(f, " |")?,
                    None if last_digit(y) == '0' => write!(f, "--")?,
                    None if x == y => write!(f, " /")?,
                    None if x == -y => write!(f, " \\")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f, " {}", last_digit(y))?;
        }

        self.write_ruler(f)
    }
}

/// Returns the last decimal digit of `x`, ignoring sign.
fn last_digit<N: Coord>(x: N) -> char {
    x.to_string().pop().unwrap_or('0')
}
