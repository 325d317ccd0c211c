use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{GravityErrors, GravityModel};

/// Point mass (central body) gravity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewtonianGravity {
    pub mu: f64,
}

impl NewtonianGravity {
    pub fn new(mu: f64) -> Self {
        Self { mu }
    }

    /// `-mu * r / |r|^3`. A zero position yields NaN rather than an error.
    pub fn acceleration(&self, position: &Vector3<f64>) -> Vector3<f64> {
        let position_mag = position.magnitude();
        if position_mag < 0.1 {
            tracing::warn!(position_mag, "central body gravity evaluated near the origin");
        }
        -position * self.mu / position_mag.powi(3)
    }
}

impl GravityModel for NewtonianGravity {
    fn calculate(&self, position: &Vector3<f64>) -> Result<Vector3<f64>, GravityErrors> {
        Ok(self.acceleration(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use utilities::assert_equal;

    #[test]
    fn test_inverse_square() {
        let g = NewtonianGravity::new(3.986004418e14);
        let a = g.calculate(&Vector3::new(7e6, 0.0, 0.0)).unwrap();
        assert_equal(a.x, -3.986004418e14 / 4.9e13);
        assert_eq!(a.y, 0.0);
        assert_eq!(a.z, 0.0);

        let a2 = g.calculate(&Vector3::new(0.0, 0.0, -1.4e7)).unwrap();
        assert_abs_diff_eq!(a2.z * 4.0, -a.x, epsilon = 1e-12);
    }

    #[test]
    fn test_origin_is_not_finite() {
        let g = NewtonianGravity::new(1.0);
        let a = g.acceleration(&Vector3::zeros());
        assert!(a.x.is_nan());
    }
}
