use serde::{Deserialize, Serialize};

use crate::SurfaceGravity;

/// WELMEC gravity formula at sea level (the height correction is dropped).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WelmecGravity;

impl WelmecGravity {
    const GE: f64 = 9.780318;
    const BETA_1: f64 = 0.0053024;
    const BETA_2: f64 = 0.0000058;
}

impl SurfaceGravity for WelmecGravity {
    fn surface_gravity(&self, latitude: f64) -> f64 {
        let s1 = latitude.sin().powi(2);
        let s2 = (2.0 * latitude).sin().powi(2);
        Self::GE * (1.0 + Self::BETA_1 * s1 - Self::BETA_2 * s2)
    }
}

/// WELMEC gravity in m/s^2 at a geodetic latitude in degrees. Longitude is ignored.
pub fn welmec(latitude_deg: f64, _longitude_deg: f64) -> f64 {
    WelmecGravity.surface_gravity(latitude_deg.to_radians())
}
