use serde::{Deserialize, Serialize};

/// Reference ellipsoid and the gravitational parameter of the body it models.
///
/// Values are fixed once constructed. Alternate ellipsoids are built with
/// [`Ellipsoid::new`] or deserialized, the default is [`Ellipsoid::WGS84`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// equatorial radius (m)
    pub semi_major_axis: f64,
    /// first eccentricity
    pub eccentricity: f64,
    /// gravitational parameter (m^3/s^2)
    pub mu: f64,
}

impl Ellipsoid {
    pub const WGS84: Self = Self {
        semi_major_axis: 6378137.0,
        eccentricity: 0.0818191908426215,
        mu: 3.986004418e14,
    };

    pub fn new(semi_major_axis: f64, eccentricity: f64, mu: f64) -> Self {
        Self {
            semi_major_axis,
            eccentricity,
            mu,
        }
    }

    pub const fn eccentricity_squared(&self) -> f64 {
        self.eccentricity * self.eccentricity
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity_squared()).sqrt()
    }

    /// Prime vertical radius of curvature `N` at a geodetic latitude (rad).
    pub fn radius_of_curvature(&self, latitude: f64) -> f64 {
        let sin_lat = latitude.sin();
        self.semi_major_axis / (1.0 - self.eccentricity_squared() * sin_lat * sin_lat).sqrt()
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}
