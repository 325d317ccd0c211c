use serde::{Deserialize, Serialize};

use crate::SurfaceGravity;

/// Closed form Somigliana normal gravity on the WGS84 ellipsoid.
///
/// ```text
/// g = ge (1 + k sin^2(lat)) / sqrt(1 - e^2 sin^2(lat))
/// ```
/// Includes the centrifugal effect of Earth's rotation, unlike the zonal model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SomiglianaGravity;

impl SomiglianaGravity {
    /// equatorial normal gravity (m/s^2)
    const GE: f64 = 9.780325335903891718546;
    const K: f64 = 0.00193185265245827352087;
    const E2: f64 = 0.006694379990141316996137;
}

impl SurfaceGravity for SomiglianaGravity {
    fn surface_gravity(&self, latitude: f64) -> f64 {
        let s2 = latitude.sin().powi(2);
        Self::GE * (1.0 + Self::K * s2) / (1.0 - Self::E2 * s2).sqrt()
    }
}

/// Somigliana gravity in m/s^2 at a geodetic latitude in degrees. Longitude is ignored.
pub fn somigliana(latitude_deg: f64, _longitude_deg: f64) -> f64 {
    SomiglianaGravity.surface_gravity(latitude_deg.to_radians())
}
