//! Completion of a hypersphere from one hyperoctant by symmetry.
//!
//! Every pass computes its reflections from a snapshot of the store taken
//! before the pass, then merges them in bulk. Points added during a pass are
//! not reflected again by the same pass.

use itertools::Itertools;

use crate::{Coord, PatternStore, Point};

/// Reflects every point through the diagonal hyperplanes between adjacent
/// axes (including the last and first axes) until no new points appear, and
/// returns the number of points added.
///
/// Payloads are copied from the original point. A single sweep over all axis
/// pairs does not reach every permutation of coordinates in four or more
/// dimensions, so sweeps repeat until one of them adds nothing.
pub fn complete_diagonal<N: Coord, P: Clone>(store: &mut PatternStore<N, P>, ndim: u8) -> usize {
    if ndim < 2 {
        return 0;
    }

    let mut total = 0;
    loop {
        let mut added = 0;
        for a in 0..ndim {
            let b = (a + 1) % ndim;
            added += reflect(store, |p| (p[a] != p[b]).then(|| p.with_swapped_axes(a, b)));
        }
        log::trace!("diagonal sweep added {added} points");
        if added == 0 {
            return total;
        }
        total += added;
    }
}

/// Reflects every point through the hyperplane orthogonal to each axis, and
/// returns the number of points added.
///
/// Payloads are copied from the original point.
pub fn complete_axial<N: Coord, P: Clone>(store: &mut PatternStore<N, P>, ndim: u8) -> usize {
    (0..ndim)
        .map(|axis| {
            reflect(store, |p| {
                (!p[axis].is_zero()).then(|| p.with_negated_axis(axis))
            })
        })
        .sum()
}

/// Applies diagonal and then axial completion, and returns the number of
/// points added.
pub fn complete<N: Coord, P: Clone>(store: &mut PatternStore<N, P>, ndim: u8) -> usize {
    complete_diagonal(store, ndim) + complete_axial(store, ndim)
}

fn reflect<N: Coord, P: Clone>(
    store: &mut PatternStore<N, P>,
    reflection: impl Fn(&Point<N>) -> Option<Point<N>>,
) -> usize {
    let reflected = store
        .iter()
        .filter_map(|(p, payload)| Some((reflection(p)?, payload.clone())))
        .collect_vec();
    store.merge(reflected)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_octant_of_square_grid() {
        let mut store = PatternStore::new();
        store.insert(point![2, 1], 'a');

        assert_eq!(complete_diagonal(&mut store, 2), 1);
        assert_eq!(store.get(&point![1, 2]), Some(&'a'));

        assert_eq!(complete_axial(&mut store, 2), 6);
        assert_eq!(store.len(), 8);
        assert!(store.iter().all(|(_, &payload)| payload == 'a'));
    }

    #[test]
    fn test_points_on_mirrors_are_not_duplicated() {
        let mut store = PatternStore::new();
        store.insert(point![0, 0, 0], 1);
        store.insert(point![4, 4, 0], 0);

        assert_eq!(complete(&mut store, 3), 2 + 9);
        // 3 arrangements of (4, 4, 0), each with 4 sign combinations, plus
        // the origin.
        assert_eq!(store.len(), 13);
        assert_eq!(store.get(&Point::origin(3)), Some(&1));
    }

    #[test]
    fn test_all_permutations_in_4d() {
        let mut store = PatternStore::new();
        store.insert(point![1, 2, 3, 4], ());
        complete_diagonal(&mut store, 4);
        assert_eq!(store.len(), 24);
        assert!(
            [1, 2, 3, 4]
                .into_iter()
                .permutations(4)
                .all(|p| store.contains(&p.into_iter().collect()))
        );

        complete_axial(&mut store, 4);
        assert_eq!(store.len(), 24 * 16);
    }

    #[test]
    fn test_existing_payload_wins() {
        let mut store = PatternStore::new();
        store.insert(point![-3], 1);
        store.insert(point![3], 0);
        assert_eq!(complete(&mut store, 1), 0);
        assert_eq!(store.get(&point![-3]), Some(&1));
    }
}
