use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Represents a point in Earth-centered Earth-fixed Cartesian coordinates (m).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Converts the `Cartesian` instance to a `Vector3`.
    pub fn vec(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Distance from the origin.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl From<Vector3<f64>> for Cartesian {
    fn from(v: Vector3<f64>) -> Cartesian {
        Cartesian::new(v[0], v[1], v[2])
    }
}

impl From<Cartesian> for Vector3<f64> {
    fn from(c: Cartesian) -> Vector3<f64> {
        c.vec()
    }
}
