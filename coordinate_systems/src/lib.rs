//! Geodetic coordinate frames on a reference ellipsoid.
//!
//! Positions start as geodetic latitude/longitude/altitude and are carried
//! into the Earth-centered Earth-fixed (ECEF) Cartesian frame, the
//! geocentric latitude/radius pair, or a local north-east-down (NED) frame.
//! Every conversion here is a total function of its inputs: degenerate
//! input produces NaN or infinity rather than an error.

pub mod cartesian;
pub mod ellipsoid;
pub mod geodetic;
pub mod ned;

pub use cartesian::Cartesian;
pub use ellipsoid::Ellipsoid;
pub use geodetic::{Geocentric, Geodetic};
pub use ned::{ecef_from_ned, ned_from_ecef};

use rotations::rotation_matrix::RotationMatrix;

/// Converts geodetic latitude, longitude (radians) and altitude (meters) to ECEF.
pub fn geodetic_to_cartesian(
    latitude: f64,
    longitude: f64,
    altitude: f64,
    ellipsoid: &Ellipsoid,
) -> Cartesian {
    Geodetic::new(latitude, longitude, altitude).to_cartesian(ellipsoid)
}

/// Converts geodetic latitude (radians) and altitude (meters) to geocentric
/// latitude and radius.
pub fn geodetic_to_geocentric(latitude: f64, altitude: f64, ellipsoid: &Ellipsoid) -> Geocentric {
    Geodetic::new(latitude, 0.0, altitude).to_geocentric(ellipsoid)
}

/// Rotation from ECEF to the local NED frame at the given latitude and longitude (radians).
pub fn ecef_to_ned_rotation(latitude: f64, longitude: f64) -> RotationMatrix {
    ned_from_ecef(latitude, longitude)
}
