//! Deduplicated set of points, each with a payload.

use std::collections::BTreeMap;
use std::collections::btree_map::{self, Entry};
use std::fmt;

use crate::{Coord, Ndim, Point, PointNotFound};

/// Set of points with a payload attached to each one.
///
/// Insertion is first-write-wins: inserting a point that is already present
/// does nothing and keeps the payload from the original insertion. Iteration
/// visits points in lexicographic order, so it is deterministic.
#[derive(Clone, PartialEq, Eq)]
pub struct PatternStore<N, P> {
    points: BTreeMap<Point<N>, P>,
}
impl<N, P> Default for PatternStore<N, P> {
    fn default() -> Self {
        Self {
            points: BTreeMap::new(),
        }
    }
}
impl<N: fmt::Debug, P: fmt::Debug> fmt::Debug for PatternStore<N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(&self.points).finish()
    }
}
impl<N: Coord, P> PatternStore<N, P> {
    /// Constructs an empty store.
    pub fn new() -> Self {
        PatternStore::default()
    }

    /// Adds a point with a payload and returns `true`, or returns `false` if
    /// the point is already present. In the latter case the existing payload
    /// is kept.
    pub fn insert(&mut self, point: Point<N>, payload: P) -> bool {
        match self.points.entry(point) {
            Entry::Vacant(e) => {
                e.insert(payload);
                true
            }
            Entry::Occupied(_) => false,
        }
    }
    /// Inserts every point from `iter`, following the same first-write-wins
    /// rule as [`Self::insert()`], and returns the number of points that were
    /// not already present.
    pub fn merge(&mut self, iter: impl IntoIterator<Item = (Point<N>, P)>) -> usize {
        let mut added = 0;
        for (point, payload) in iter {
            if self.insert(point, payload) {
                added += 1;
            }
        }
        added
    }

    /// Returns the number of distinct points.
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// Returns whether the store contains no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns whether `point` is present.
    pub fn contains(&self, point: &Point<N>) -> bool {
        self.points.contains_key(point)
    }
    /// Returns the payload of `point`, or `None` if it is not present.
    pub fn get(&self, point: &Point<N>) -> Option<&P> {
        self.points.get(point)
    }
    /// Returns the payload of `point`, or an error if it is not present.
    pub fn get_payload(&self, point: &Point<N>) -> Result<&P, PointNotFound> {
        self.get(point).ok_or_else(|| PointNotFound {
            point: point.to_string(),
        })
    }

    /// Returns an iterator over all points and their payloads, in
    /// lexicographic order of the points.
    pub fn iter(&self) -> Iter<'_, N, P> {
        self.points.iter()
    }
    /// Returns an iterator over all points, in lexicographic order.
    pub fn points(&self) -> impl Clone + ExactSizeIterator<Item = &Point<N>> + '_ {
        self.points.keys()
    }

    /// Returns an owned copy of every point and payload.
    ///
    /// This is how to read a consistent view of the store while inserting
    /// into it.
    pub fn snapshot(&self) -> Vec<(Point<N>, P)>
    where
        P: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

/// Iterator over the points and payloads of a [`PatternStore`].
pub type Iter<'a, N, P> = btree_map::Iter<'a, Point<N>, P>;

impl<N: Coord, P> Ndim for PatternStore<N, P> {
    /// Returns the largest number of coordinates of any stored point, or `0`
    /// if the store is empty.
    fn ndim(&self) -> u8 {
        self.points().map(|p| p.ndim()).max().unwrap_or(0)
    }
}

impl<'a, N: Coord, P> IntoIterator for &'a PatternStore<N, P> {
    type Item = (&'a Point<N>, &'a P);

    type IntoIter = Iter<'a, N, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: Coord, P> Extend<(Point<N>, P)> for PatternStore<N, P> {
    fn extend<T: IntoIterator<Item = (Point<N>, P)>>(&mut self, iter: T) {
        self.merge(iter);
    }
}

impl<N: Coord, P> FromIterator<(Point<N>, P)> for PatternStore<N, P> {
    fn from_iter<T: IntoIterator<Item = (Point<N>, P)>>(iter: T) -> Self {
        let mut ret = Self::new();
        ret.merge(iter);
        ret
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_first_write_wins() {
        let mut store = PatternStore::new();
        assert!(store.insert(point![1, 2], 'a'));
        assert!(!store.insert(point![1, 2], 'b'));
        assert!(store.insert(point![2, 1], 'c'));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_payload(&point![1, 2]), Ok(&'a'));
        assert_eq!(store.get_payload(&point![2, 1]), Ok(&'c'));
    }

    #[test]
    fn test_missing_point() {
        let store: PatternStore<i32, ()> = [(point![0, 0], ())].into_iter().collect();
        assert!(store.contains(&point![0, 0]));
        assert!(!store.contains(&point![0, 1]));
        assert_eq!(store.get(&point![0, 1]), None);
        assert_eq!(
            store.get_payload(&point![0, 1]).map_err(|e| e.to_string()),
            Err("no such point: (0, 1)".to_string()),
        );
    }

    #[test]
    fn test_merge_counts_new_points() {
        let mut store = PatternStore::new();
        store.insert(point![5], 0_usize);
        let added = store.merge([(point![5], 9), (point![-5], 9), (point![-5], 7)]);
        assert_eq!(added, 1);
        assert_eq!(
            store.snapshot(),
            vec![(point![-5], 9), (point![5], 0)],
        );
    }

    #[test]
    fn test_iteration_is_ordered_and_restartable() {
        let store: PatternStore<i16, u8> = [
            (point![3, 0], 0),
            (point![-3, 0], 1),
            (point![0, 3], 2),
            (point![0, -3], 3),
        ]
        .into_iter()
        .collect();

        let first: Vec<_> = store.iter().map(|(p, &v)| (p.clone(), v)).collect();
        let second: Vec<_> = store.iter().map(|(p, &v)| (p.clone(), v)).collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                (point![-3, 0], 1),
                (point![0, -3], 3),
                (point![0, 3], 2),
                (point![3, 0], 0),
            ],
        );
        assert_eq!(store.ndim(), 2);
    }
}
