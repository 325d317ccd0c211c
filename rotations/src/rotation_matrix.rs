use super::*;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::ops::Mul;
use thiserror::Error;

/// A struct representing a 3x3 rotation matrix (direction cosine matrix).
///
/// Rows are the axes of the new frame expressed in the old frame, so
/// `matrix * v_old` gives the components of `v_old` in the new frame.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationMatrix(pub Matrix3<f64>);

/// Errors that can occur when creating a `RotationMatrix`.
#[derive(Debug, Copy, Clone, Error, PartialEq)]
pub enum RotationMatrixErrors {
    #[error("row {0} of the rotation matrix has zero magnitude")]
    ZeroMagnitudeRow(usize),
}

impl RotationMatrix {
    /// Creates a new `RotationMatrix` from its elements in row-major order.
    ///
    /// The elements are stored as given. Rows with zero magnitude are rejected
    /// since they can never belong to a rotation.
    ///
    /// # Arguments
    ///
    /// * `e11`, `e12`, `e13` - Elements of the first row.
    /// * `e21`, `e22`, `e23` - Elements of the second row.
    /// * `e31`, `e32`, `e33` - Elements of the third row.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        e11: f64,
        e12: f64,
        e13: f64,
        e21: f64,
        e22: f64,
        e23: f64,
        e31: f64,
        e32: f64,
        e33: f64,
    ) -> Result<Self, RotationMatrixErrors> {
        let rows = [[e11, e12, e13], [e21, e22, e23], [e31, e32, e33]];
        for (i, row) in rows.iter().enumerate() {
            let mag_squared = row[0] * row[0] + row[1] * row[1] + row[2] * row[2];
            if mag_squared < f64::EPSILON {
                return Err(RotationMatrixErrors::ZeroMagnitudeRow(i));
            }
        }
        Ok(Self::from_rows(rows))
    }

    /// Builds the matrix directly from rows without any checks.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self(Matrix3::new(
            rows[0][0], rows[0][1], rows[0][2], rows[1][0], rows[1][1], rows[1][2], rows[2][0],
            rows[2][1], rows[2][2],
        ))
    }

    pub fn get_value(&self) -> Matrix3<f64> {
        self.0
    }

    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    /// Returns true if `R * R^T` matches the identity element-wise within `tol`.
    pub fn is_orthogonal(&self, tol: f64) -> bool {
        let product = self.0 * self.0.transpose();
        let identity = Matrix3::<f64>::identity();
        product
            .iter()
            .zip(identity.iter())
            .all(|(p, i)| (p - i).abs() <= tol)
    }
}

impl From<Matrix3<f64>> for RotationMatrix {
    fn from(value: Matrix3<f64>) -> Self {
        Self(value)
    }
}

impl RotationTrait for RotationMatrix {
    /// Rotates a vector by the rotation matrix.
    fn rotate(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.0 * v
    }

    /// Transforms a vector by the transpose of the rotation matrix.
    fn transform(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.0.transpose() * v
    }

    fn inv(&self) -> Self {
        self.transpose()
    }

    fn identity() -> Self {
        Self(Matrix3::identity())
    }
}

impl Mul<RotationMatrix> for RotationMatrix {
    type Output = RotationMatrix;

    /// Composes two rotation matrices, `rhs` is applied first.
    fn mul(self, rhs: RotationMatrix) -> RotationMatrix {
        RotationMatrix::from(self.0 * rhs.0)
    }
}

impl Mul<Vector3<f64>> for RotationMatrix {
    type Output = Vector3<f64>;

    fn mul(self, rhs: Vector3<f64>) -> Vector3<f64> {
        self.0 * rhs
    }
}
