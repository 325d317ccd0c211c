use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod newtonian;
pub mod somigliana;
pub mod welmec;
pub mod zonal;

pub use newtonian::NewtonianGravity;
pub use somigliana::{SomiglianaGravity, somigliana};
pub use welmec::{WelmecGravity, welmec};
pub use zonal::{ZonalCoefficients, ZonalDegree, ZonalGravity, compute_vertical_acceleration};

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum GravityErrors {
    #[error("unsupported harmonic order {0}, expected 2 through 4")]
    UnsupportedOrder(usize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Gravity {
    Newtonian(NewtonianGravity),
    Zonal(ZonalGravity),
}

impl Gravity {
    pub fn calculate(&self, r: &Vector3<f64>) -> Result<Vector3<f64>, GravityErrors> {
        match self {
            Gravity::Newtonian(g) => g.calculate(r),
            Gravity::Zonal(g) => g.calculate(r),
        }
    }
}

pub trait GravityModel {
    // input r is position vector in the central body's fixed (rotating) frame
    // returns gravitational acceleration in the central body's fixed (rotating) frame
    fn calculate(&self, r: &Vector3<f64>) -> Result<Vector3<f64>, GravityErrors>;
}

/// Scalar gravity on the reference ellipsoid as a function of geodetic latitude (rad).
pub trait SurfaceGravity {
    fn surface_gravity(&self, latitude: f64) -> f64;
}
