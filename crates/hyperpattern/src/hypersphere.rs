//! Layered hypersphere pattern.

use crate::{
    Coord, HypersphereError, HypersphereParams, Layers, Ndim, PatternStore, Plot2d, Point,
    PointNotFound, slicing, store, symmetry,
};

/// Index of a hypersphere layer, counting inwards from `0` for the outermost
/// layer.
pub type LayerIndex = usize;

/// Hypersphere centred at the origin of N-dimensional integer space,
/// consisting of one or more concentric layers.
///
/// Each layer is the discrete surface of a hypersphere with the layer's
/// radius, and each point is tagged with the index of its layer. If there is
/// more than one layer, the origin also belongs to the innermost layer;
/// otherwise the hypersphere is hollow.
///
/// All points are computed on construction, and the hypersphere is immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hypersphere<N = i32> {
    ndim: u8,
    layers: Layers<N>,
    points: PatternStore<N, LayerIndex>,
}

impl<N: Coord> Hypersphere<N> {
    /// Constructs a hypersphere with `ndim` dimensions and the given layer
    /// radii, listed from the outermost layer to the innermost.
    ///
    /// # Panics
    ///
    /// Panics if `ndim` is zero or the layers are invalid. See
    /// [`Hypersphere::try_new()`] for a non-panicking version.
    #[track_caller]
    pub fn new(ndim: u8, layers: impl IntoIterator<Item = N>) -> Self {
        match Self::try_new(ndim, layers) {
            Ok(ret) => ret,
            Err(e) => panic!("invalid hypersphere: {e}"),
        }
    }

    /// Constructs a hypersphere with `ndim` dimensions and the given layer
    /// radii, listed from the outermost layer to the innermost, or returns an
    /// error if `ndim` is zero or the layers are invalid.
    pub fn try_new(
        ndim: u8,
        layers: impl IntoIterator<Item = N>,
    ) -> Result<Self, HypersphereError> {
        if ndim == 0 {
            return Err(HypersphereError::ZeroDimension);
        }
        Ok(Self::with_layers(ndim, Layers::new(layers)?))
    }

    /// Constructs a hypersphere from parameters, or returns an error if they
    /// are invalid.
    pub fn from_params(params: &HypersphereParams<N>) -> Result<Self, HypersphereError> {
        let layers = params.validate()?;
        Ok(Self::with_layers(params.ndim, layers))
    }

    fn with_layers(ndim: u8, layers: Layers<N>) -> Self {
        let octant = slicing::first_hyperoctant(ndim, &layers);
        log::trace!("first hyperoctant has {} points", octant.len());

        let mut points = PatternStore::new();
        points.merge(octant);
        let added = symmetry::complete(&mut points, ndim);
        log::trace!("symmetry added {added} points");

        log::debug!(
            "generated {ndim}D hypersphere with layers [{layers}]: {} points",
            points.len(),
        );

        Self {
            ndim,
            layers,
            points,
        }
    }

    /// Returns the layer radii, from outermost to innermost.
    pub fn layers(&self) -> &Layers<N> {
        &self.layers
    }
    /// Returns the underlying set of points.
    pub fn points(&self) -> &PatternStore<N, LayerIndex> {
        &self.points
    }

    /// Returns the number of points in the hypersphere.
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// Returns whether the hypersphere contains no points. This is never
    /// true.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Returns whether `point` belongs to the hypersphere.
    pub fn contains(&self, point: &Point<N>) -> bool {
        self.points.contains(point)
    }
    /// Returns the layer of `point`, or an error if it does not belong to the
    /// hypersphere.
    pub fn get_payload(&self, point: &Point<N>) -> Result<LayerIndex, PointNotFound> {
        self.points.get_payload(point).copied()
    }
    /// Returns an iterator over the points of the hypersphere and their
    /// layers, in lexicographic order of the points.
    pub fn iter(&self) -> store::Iter<'_, N, LayerIndex> {
        self.points.iter()
    }

    /// Returns an ASCII plot of the hypersphere, or `None` if it is not
    /// two-dimensional.
    pub fn plot_2d(&self) -> Option<Plot2d<'_, N>> {
        (self.ndim == 2).then(|| Plot2d::new(self))
    }
}

impl<N> Ndim for Hypersphere<N> {
    fn ndim(&self) -> u8 {
        self.ndim
    }
}

impl<'a, N: Coord> IntoIterator for &'a Hypersphere<N> {
    type Item = (&'a Point<N>, &'a LayerIndex);

    type IntoIter = store::Iter<'a, N, LayerIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
