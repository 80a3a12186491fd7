//! Layer radii and hypersphere parameters.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::{Coord, HypersphereError};

/// Radii of the concentric layers of a hypersphere, from the outermost
/// (index `0`) to the innermost.
///
/// A `Layers` is never empty, contains no negative radius or radius greater
/// than [`Coord::max_radius()`], and never increases from one layer to the
/// next.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "Vec<N>",
        into = "Vec<N>",
        bound(
            serialize = "N: Coord + serde::Serialize",
            deserialize = "N: Coord + serde::Deserialize<'de>",
        )
    )
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layers<N>(SmallVec<[N; 4]>);

impl<N: Coord> Layers<N> {
    /// Validates a list of radii, ordered from the outermost layer to the
    /// innermost.
    pub fn new(radii: impl IntoIterator<Item = N>) -> Result<Self, HypersphereError> {
        let radii: SmallVec<[N; 4]> = radii.into_iter().collect();
        if radii.is_empty() {
            return Err(HypersphereError::EmptyLayers);
        }
        if let Some(layer) = radii.iter().position(|r| r.is_negative()) {
            return Err(HypersphereError::NegativeRadius { layer });
        }
        if let Some(layer) = radii.iter().position(|&r| r > N::max_radius()) {
            return Err(HypersphereError::RadiusTooLarge { layer });
        }
        if let Some(i) = radii
            .iter()
            .tuple_windows()
            .position(|(outer, inner)| inner > outer)
        {
            return Err(HypersphereError::IncreasingRadius { layer: i + 1 });
        }
        Ok(Self(radii))
    }

    /// Returns the number of layers. This is always at least `1`.
    pub fn count(&self) -> usize {
        self.0.len()
    }
    /// Returns the radius of the outermost layer.
    pub fn outermost(&self) -> N {
        self.0[0]
    }
    /// Returns the radius of the innermost layer.
    pub fn innermost(&self) -> N {
        self.0[self.0.len() - 1]
    }
    /// Returns the index of the innermost layer.
    pub fn innermost_index(&self) -> usize {
        self.0.len() - 1
    }
    /// Returns whether the hypersphere has a core, i.e., whether its centre
    /// belongs to the innermost layer even when that layer has a nonzero
    /// radius. A hypersphere with a single layer is hollow.
    pub fn has_core(&self) -> bool {
        self.0.len() > 1
    }

    /// Returns the radii, from outermost to innermost.
    pub fn as_slice(&self) -> &[N] {
        &self.0
    }
    /// Returns an iterator over the radii, from outermost to innermost.
    pub fn iter(&self) -> impl Clone + ExactSizeIterator<Item = N> + '_ {
        self.0.iter().copied()
    }
}

impl<N: Coord> TryFrom<Vec<N>> for Layers<N> {
    type Error = HypersphereError;

    fn try_from(radii: Vec<N>) -> Result<Self, Self::Error> {
        Self::new(radii)
    }
}

impl<N: Coord> From<Layers<N>> for Vec<N> {
    fn from(layers: Layers<N>) -> Self {
        layers.0.into_vec()
    }
}

impl<N: Coord> FromStr for Layers<N> {
    type Err = HypersphereError;

    /// Parses radii separated by commas and/or whitespace, such as
    /// `"11, 9, 5"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let radii: Vec<N> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|word| !word.is_empty())
            .map(|word| {
                N::from_str_radix(word, 10)
                    .map_err(|_| HypersphereError::InvalidRadius(word.to_owned()))
            })
            .collect::<Result<_, _>>()?;
        Self::new(radii)
    }
}

impl<N: fmt::Display> fmt::Display for Layers<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(", "))
    }
}

/// Parameters from which a [`crate::Hypersphere`] is constructed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct HypersphereParams<N> {
    /// Number of dimensions of the space.
    pub ndim: u8,
    /// Layer radii, from the outermost layer to the innermost.
    pub layers: Vec<N>,
}

impl<N: Coord> HypersphereParams<N> {
    /// Returns the parameters of a hypersphere with the given number of
    /// dimensions and layer radii.
    pub fn new(ndim: u8, layers: impl IntoIterator<Item = N>) -> Self {
        Self {
            ndim,
            layers: layers.into_iter().collect(),
        }
    }

    /// Checks that the parameters describe a valid hypersphere and returns
    /// the validated layers.
    pub fn validate(&self) -> Result<Layers<N>, HypersphereError> {
        if self.ndim == 0 {
            return Err(HypersphereError::ZeroDimension);
        }
        Layers::new(self.layers.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_layers_validation() {
        assert_eq!(
            Layers::<i32>::new([]),
            Err(HypersphereError::EmptyLayers),
        );
        assert_eq!(
            Layers::new([4, -1]),
            Err(HypersphereError::NegativeRadius { layer: 1 }),
        );
        assert_eq!(
            Layers::new([9, 5, 7]),
            Err(HypersphereError::IncreasingRadius { layer: 2 }),
        );
        assert_eq!(
            Layers::<i8>::new([127]),
            Err(HypersphereError::RadiusTooLarge { layer: 0 }),
        );
        assert_eq!(
            Layers::<i8>::new([42, 43]),
            Err(HypersphereError::RadiusTooLarge { layer: 1 }),
        );
        assert_eq!(Layers::<i8>::new([42]).map(|l| l.outermost()), Ok(42));
        assert_eq!(i16::max_radius(), 10922);

        let layers = Layers::new([11, 9, 9, 0]).unwrap();
        assert_eq!(layers.count(), 4);
        assert_eq!(layers.outermost(), 11);
        assert_eq!(layers.innermost(), 0);
        assert_eq!(layers.innermost_index(), 3);
        assert!(layers.has_core());
        assert!(!Layers::new([3]).unwrap().has_core());
    }

    #[test]
    fn test_layers_from_str() {
        assert_eq!("11, 9 5".parse(), Layers::<i64>::new([11, 9, 5]));
        assert_eq!(" 7 ".parse(), Layers::<i8>::new([7]));
        assert_eq!(
            "3, x".parse::<Layers<i32>>(),
            Err(HypersphereError::InvalidRadius("x".to_owned())),
        );
        assert_eq!(
            "".parse::<Layers<i32>>(),
            Err(HypersphereError::EmptyLayers),
        );
        assert_eq!(Layers::new([11, 9, 5]).unwrap().to_string(), "11, 9, 5");
    }

    #[test]
    fn test_params_validation() {
        assert_eq!(
            HypersphereParams::new(0, [3]).validate(),
            Err(HypersphereError::ZeroDimension),
        );
        assert_eq!(
            HypersphereParams::<i32>::new(2, []).validate(),
            Err(HypersphereError::EmptyLayers),
        );
        assert_eq!(
            HypersphereParams::new(3, [3, 0]).validate(),
            Layers::new([3, 0]),
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_params_serde() {
        let params: HypersphereParams<i32> =
            serde_json::from_str(r#"{"ndim": 2, "layers": [11, 9, 5]}"#).unwrap();
        assert_eq!(params, HypersphereParams::new(2, [11, 9, 5]));

        let layers: Layers<i32> = serde_json::from_str("[4, 2]").unwrap();
        assert_eq!(serde_json::to_string(&layers).unwrap(), "[4,2]");
        assert!(serde_json::from_str::<Layers<i32>>("[2, 4]").is_err());
    }
}
