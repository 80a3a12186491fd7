//! Layered discrete hyperspheres in N-dimensional integer space.
//!
//! A [`Hypersphere`] is generated by slicing: every (N-1)-dimensional slice
//! of an N-dimensional sphere is itself a sphere whose radius follows the
//! midpoint circle algorithm. Slicing recursively down to one dimension
//! yields the points of a single hyperoctant, and the rest of the sphere is
//! filled in by diagonal and axial symmetry.
//!
//! ```
//! use hyperpattern::{Hypersphere, point};
//!
//! let circle = Hypersphere::<i32>::new(2, [5]);
//! assert!(circle.contains(&point![4, 3]));
//! assert!(!circle.contains(&point![4, 4]));
//! assert_eq!(circle.get_payload(&point![0, -5]), Ok(0));
//! ```

pub use {num_traits as num, smallvec};

#[cfg(test)]
use serde_json as _; // Suppress unused crate warning (it's used with the `serde` feature)

#[macro_use]
pub mod point;

pub mod coord;
pub mod error;
pub mod hypersphere;
pub mod layers;
pub mod ndim;
pub mod plot;
pub mod slicing;
pub mod store;
pub mod symmetry;


/// Structs, traits, and constants.
pub mod prelude {
    pub use crate::coord::Coord;
    pub use crate::error::{HypersphereError, PointNotFound};
    pub use crate::hypersphere::{Hypersphere, LayerIndex};
    pub use crate::layers::{HypersphereParams, Layers};
    pub use crate::ndim::Ndim;
    pub use crate::plot::Plot2d;
    pub use crate::point::Point;
    pub use crate::store::PatternStore;
}
pub use prelude::*;
