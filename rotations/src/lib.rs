pub mod rotation_matrix;

use nalgebra::Vector3;

pub mod prelude {
    pub use crate::RotationTrait;
    pub use crate::rotation_matrix::*;
}

/// Trait defining rotation and transformation operations.
pub trait RotationTrait {
    /// Rotates a vector by the rotation.
    ///
    /// # Arguments
    ///
    /// * `v` - The vector to be rotated.
    ///
    /// # Returns
    ///
    /// The rotated vector.
    fn rotate(&self, v: &Vector3<f64>) -> Vector3<f64>;

    /// Transforms a vector by the inverse of the rotation.
    fn transform(&self, v: &Vector3<f64>) -> Vector3<f64>;

    fn inv(&self) -> Self;

    fn identity() -> Self;
}
