//! Recursive slicing of a layered hypersphere.
//!
//! An N-dimensional hypersphere consists of (N-1)-dimensional slices
//! orthogonal to some axis, each of which is itself a hypersphere. The radius
//! of the slice at a given offset from the centre is computed using the
//! midpoint circle algorithm, as if drawing a circle in the plane spanned by
//! the slicing axis and any other axis:
//!
//! ```text
//! [][][][]                    slice 11, radius  3
//! [][][][][][]                slice 10, radius  5
//! [][][][][][][][]            slice  9, radius  7
//! [][][][][][][][][]          slice  8, radius  8
//! [][][][][][][][][][]        slice  7, radius  9
//! [][][][][][][][][][]        slice  6, radius  9
//! [][][][][][][][][][][]      slice  5, radius 10
//! [][][][][][][][][][][]      slice  4, radius 10
//! [][][][][][][][][][][][]    slice  3, radius 11
//! [][][][][][][][][][][][]    slice  2, radius 11
//! [][][][][][][][][][][][]    slice  1, radius 11
//! [][][][][][][][][][][][]    slice  0, radius 11
//! 0 1 2 3 4 5 6 7 8 9 10 11
//! ```
//!
//! Slicing stops at the diagonal (where the offset exceeds the slice radius),
//! so recursing down to one dimension produces only one hyperoctant. The rest
//! is filled in by [`crate::symmetry`].

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::{Coord, LayerIndex, Layers, Ndim, Point};

/// Iterator over the slices of a circle along one axis, yielding `(offset,
/// radius)` pairs from the equator (offset `0`) up to the diagonal.
///
/// This is the midpoint circle algorithm, with the offset playing the role of
/// the coordinate that always increments and the radius playing the role of
/// the coordinate that sometimes decrements.
#[derive(Debug, Clone)]
pub struct MidpointSlices<N> {
    offset: N,
    radius: N,
    decision: N,
}
impl<N: Coord> MidpointSlices<N> {
    /// Returns the slices of a circle with radius `radius`, which must not
    /// exceed [`Coord::max_radius()`].
    pub fn new(radius: N) -> Self {
        Self {
            offset: N::zero(),
            radius,
            decision: N::one() - radius,
        }
    }
}
impl<N: Coord> Iterator for MidpointSlices<N> {
    type Item = (N, N);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset > self.radius {
            return None;
        }
        let ret = (self.offset, self.radius);

        self.offset = self.offset + N::one();
        if self.decision.is_negative() {
            self.decision = self.decision + self.offset.double_plus_one();
        } else {
            self.radius = self.radius - N::one();
            self.decision = self.decision + (self.offset - self.radius).double_plus_one();
        }

        Some(ret)
    }
}

/// Returns the points of one hyperoctant of a layered hypersphere centred at
/// the origin, each tagged with its layer.
///
/// Points are sorted by layer, outermost first, and may contain duplicates.
/// If the hypersphere has a core, the origin is included as part of the
/// innermost layer.
///
/// When the surfaces of neighboring layers touch, a point may be generated
/// for more than one layer. Each point is tagged with the outermost layer
/// that generated it or any of its symmetric images, so that symmetric
/// points always share a layer.
pub fn first_hyperoctant<N: Coord>(ndim: u8, layers: &Layers<N>) -> Vec<(Point<N>, LayerIndex)> {
    let origin = Point::origin(ndim);
    let indexed_layers = layers.iter().enumerate().collect_vec();

    let mut ret = slice(&origin, 0, &indexed_layers);
    if layers.has_core() {
        ret.push((origin, layers.innermost_index()));
    }

    let mut orbit_layers = BTreeMap::new();
    for (point, layer) in &ret {
        orbit_layers
            .entry(point.canonical())
            .and_modify(|l: &mut LayerIndex| *l = (*l).min(*layer))
            .or_insert(*layer);
    }
    for (point, layer) in &mut ret {
        if let Some(&outermost) = orbit_layers.get(&point.canonical()) {
            *layer = outermost;
        }
    }

    ret.sort_by_key(|&(_, layer)| layer);
    ret
}

/// Returns the points of the hypersphere centred at `centre` with the given
/// layers, slicing along `axis` and every axis after it.
fn slice<N: Coord>(
    centre: &Point<N>,
    axis: u8,
    layers: &[(LayerIndex, N)],
) -> Vec<(Point<N>, LayerIndex)> {
    if axis + 1 >= centre.ndim() {
        // In 1D, each layer is just a pair of points.
        let mut ret = Vec::with_capacity(layers.len() * 2);
        for &(layer, radius) in layers {
            for offset in [radius, -radius] {
                let mut point = centre.clone();
                point[axis] = centre[axis] + offset;
                ret.push((point, layer));
            }
        }
        return ret;
    }

    let mut slices = layers
        .iter()
        .map(|&(layer, radius)| (layer, MidpointSlices::new(radius)))
        .collect_vec();

    let mut ret = vec![];
    let mut slice_centre = centre.clone();
    let mut offset = N::zero();
    loop {
        // Layers advance in lock-step; a layer drops out once its slices
        // reach the diagonal.
        let slice_layers = slices
            .iter_mut()
            .filter_map(|(layer, s)| Some((*layer, s.next()?.1)))
            .collect_vec();
        if slice_layers.is_empty() {
            break;
        }

        slice_centre[axis] = centre[axis] + offset;
        ret.extend(slice(&slice_centre, axis + 1, &slice_layers));
        offset = offset + N::one();
    }
    ret
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_midpoint_slices() {
        assert_eq!(
            MidpointSlices::new(5).collect_vec(),
            [(0, 5), (1, 5), (2, 5), (3, 4)],
        );
        assert_eq!(
            MidpointSlices::new(11_i64).collect_vec(),
            [
                (0, 11),
                (1, 11),
                (2, 11),
                (3, 11),
                (4, 10),
                (5, 10),
                (6, 9),
                (7, 8),
                (8, 8),
            ],
        );
        assert_eq!(MidpointSlices::new(0_i8).collect_vec(), [(0, 0)]);
        assert_eq!(MidpointSlices::new(1).collect_vec(), [(0, 1)]);
    }

    #[test]
    fn test_first_octant_of_circle() {
        let layers = Layers::new([5]).unwrap();
        let points: BTreeSet<Point<i32>> = first_hyperoctant(2, &layers)
            .into_iter()
            .map(|(p, layer)| {
                assert_eq!(layer, 0);
                p
            })
            .filter(|p| p[1] >= 0)
            .collect();
        let expected = BTreeSet::from([point![0, 5], point![1, 5], point![2, 5], point![3, 4]]);
        assert_eq!(points, expected);
    }

    #[test]
    fn test_line_segment() {
        let layers = Layers::new([3, 0]).unwrap();
        let points = first_hyperoctant(1, &layers);
        assert_eq!(points.first(), Some(&(point![3], 0)));
        assert!(points.iter().all(|(p, layer)| match p[0] {
            3 | -3 => *layer == 0,
            0 => *layer == 1,
            _ => false,
        }));

        let hollow = first_hyperoctant(1, &Layers::new([3]).unwrap());
        assert_eq!(hollow, [(point![3], 0), (point![-3], 0)]);
    }

    #[test]
    fn test_layers_sorted_outermost_first() {
        let layers = Layers::new([7, 4, 2]).unwrap();
        let points = first_hyperoctant(3, &layers);
        assert!(points.is_sorted_by_key(|(_, layer)| *layer));
        assert_eq!(points.last(), Some(&(Point::origin(3), 2)));
    }

    #[test]
    fn test_touching_layers_share_outer_layer() {
        let layers = Layers::new([6, 5]).unwrap();
        let points = first_hyperoctant(3, &layers);
        let mut orbit_layers = BTreeMap::new();
        for (p, layer) in points {
            let l = *orbit_layers.entry(p.canonical()).or_insert(layer);
            assert_eq!(l, layer, "{p} is in layer {layer} but a symmetric image is in {l}");
        }
    }
}
