//! Error types.

use thiserror::Error;

/// Error produced when the parameters of a hypersphere are invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HypersphereError {
    /// Hypersphere must have at least one dimension
    #[error("hypersphere must have at least one dimension")]
    ZeroDimension,
    /// Hypersphere must have at least one layer
    #[error("hypersphere must have at least one layer")]
    EmptyLayers,
    /// Layer radius is negative
    #[error("radius of layer {layer} is negative")]
    NegativeRadius {
        /// Index of the offending layer.
        layer: usize,
    },
    /// Layer radius is too large for the coordinate type
    ///
    /// See [`crate::Coord::max_radius()`].
    #[error("radius of layer {layer} is too large for the coordinate type")]
    RadiusTooLarge {
        /// Index of the offending layer.
        layer: usize,
    },
    /// Layer radius is greater than the radius of the layer outside it
    ///
    /// Layers are listed from the outermost to the innermost, so radii must
    /// never increase.
    #[error("radius of layer {layer} is greater than radius of the layer outside it")]
    IncreasingRadius {
        /// Index of the offending layer.
        layer: usize,
    },
    /// Layer radius could not be parsed
    #[error("invalid layer radius {0:?}")]
    InvalidRadius(String),
}

/// Error produced when looking up the payload of a point that is not in a
/// pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no such point: {point}")]
pub struct PointNotFound {
    /// Point that was looked up.
    pub point: String,
}
