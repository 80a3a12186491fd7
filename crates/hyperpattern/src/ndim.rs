//! Number of dimensions trait.

/// Number of dimensions.
pub trait Ndim {
    /// Returns the number of axes of the space that the object lives in.
    ///
    /// This method may return `0`.
    fn ndim(&self) -> u8;
}
