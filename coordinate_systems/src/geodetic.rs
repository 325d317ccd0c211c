use crate::{cartesian::Cartesian, ellipsoid::Ellipsoid};
use serde::{Deserialize, Serialize};

/// A position referenced to an ellipsoid.
///
/// Latitude is expected in [-pi/2, pi/2] and longitude in (-pi, pi], both in
/// radians. Altitude is meters above the ellipsoid and may be negative.
/// Nothing is validated, out of range values simply flow through the trig.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geodetic {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

/// Geocentric latitude (rad) and distance from the ellipsoid center (m).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geocentric {
    pub latitude: f64,
    pub radius: f64,
}

impl Geodetic {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    pub fn from_degrees(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self::new(latitude.to_radians(), longitude.to_radians(), altitude)
    }

    /// Distance from the polar axis and height above the equatorial plane.
    fn meridian_components(&self, ellipsoid: &Ellipsoid) -> (f64, f64) {
        let n = ellipsoid.radius_of_curvature(self.latitude);
        let e2 = ellipsoid.eccentricity_squared();
        let rho = (n + self.altitude) * self.latitude.cos();
        let z = (n * (1.0 - e2) + self.altitude) * self.latitude.sin();
        (rho, z)
    }

    /// Converts to Earth-centered Earth-fixed Cartesian coordinates.
    ///
    /// ```text
    /// N = a / sqrt(1 - e^2 sin^2(lat))
    /// x = (N + h) cos(lat) cos(lon)
    /// y = (N + h) cos(lat) sin(lon)
    /// z = (N (1 - e^2) + h) sin(lat)
    /// ```
    pub fn to_cartesian(&self, ellipsoid: &Ellipsoid) -> Cartesian {
        let (rho, z) = self.meridian_components(ellipsoid);
        Cartesian::new(rho * self.longitude.cos(), rho * self.longitude.sin(), z)
    }

    /// Converts to geocentric latitude and radius. Longitude plays no part.
    pub fn to_geocentric(&self, ellipsoid: &Ellipsoid) -> Geocentric {
        let (rho, z) = self.meridian_components(ellipsoid);
        Geocentric {
            latitude: z.atan2(rho),
            radius: (z * z + rho * rho).sqrt(),
        }
    }

    /// Recovers geodetic coordinates from an ECEF position.
    ///
    /// Bowring's closed form followed by a single fixed-point refinement of
    /// the latitude, which is well below a micro-radian anywhere near the
    /// surface.
    pub fn from_cartesian(position: &Cartesian, ellipsoid: &Ellipsoid) -> Self {
        let a = ellipsoid.semi_major_axis;
        let b = ellipsoid.semi_minor_axis();
        let e2 = ellipsoid.eccentricity_squared();
        let ep2 = (a * a - b * b) / (b * b);

        let p = (position.x * position.x + position.y * position.y).sqrt();
        let longitude = position.y.atan2(position.x);

        let theta = (a * position.z).atan2(b * p);
        let (sin_theta, cos_theta) = theta.sin_cos();
        let mut latitude = (position.z + ep2 * b * sin_theta.powi(3))
            .atan2(p - e2 * a * cos_theta.powi(3));

        let altitude_at = |latitude: f64| {
            let (sin_lat, cos_lat) = latitude.sin_cos();
            p * cos_lat + position.z * sin_lat - a * (1.0 - e2 * sin_lat * sin_lat).sqrt()
        };

        let n = ellipsoid.radius_of_curvature(latitude);
        let h = altitude_at(latitude);
        latitude = position.z.atan2(p * (1.0 - e2 * n / (n + h)));

        Self::new(latitude, longitude, altitude_at(latitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};
    use utilities::assert_equal;

    const WGS84: Ellipsoid = Ellipsoid::WGS84;

    fn wrapped_difference(a: f64, b: f64) -> f64 {
        let d = a - b;
        d.sin().atan2(d.cos())
    }

    #[test]
    fn test_to_cartesian_equator() {
        let c = Geodetic::new(0.0, 0.0, 0.0).to_cartesian(&WGS84);
        assert_eq!(c, Cartesian::new(WGS84.semi_major_axis, 0.0, 0.0));

        let c = Geodetic::from_degrees(0.0, 90.0, 1000.0).to_cartesian(&WGS84);
        assert_abs_diff_eq!(c.x, 0.0, epsilon = 1e-6);
        assert_eq!(c.y, WGS84.semi_major_axis + 1000.0);
        assert_eq!(c.z, 0.0);
    }

    #[test]
    fn test_to_cartesian_pole() {
        let c = Geodetic::new(FRAC_PI_2, 0.0, 0.0).to_cartesian(&WGS84);
        assert_abs_diff_eq!(c.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(c.z, WGS84.semi_minor_axis(), epsilon = 1e-6);

        let c = Geodetic::new(-FRAC_PI_2, 0.0, 0.0).to_cartesian(&WGS84);
        assert_abs_diff_eq!(c.z, -WGS84.semi_minor_axis(), epsilon = 1e-6);
    }

    #[test]
    fn test_to_cartesian_known_point() {
        // 45N 45E on WGS84, zero altitude
        let c = Geodetic::from_degrees(45.0, 45.0, 0.0).to_cartesian(&WGS84);
        assert_abs_diff_eq!(c.x, 3194419.145060574, epsilon = 1e-3);
        assert_abs_diff_eq!(c.y, 3194419.145060574, epsilon = 1e-3);
        assert_abs_diff_eq!(c.z, 4487348.408865919, epsilon = 1e-3);
    }

    #[test]
    fn test_geocentric_equator_and_pole() {
        let g = Geodetic::new(0.0, 1.0, 0.0).to_geocentric(&WGS84);
        assert_eq!(g.latitude, 0.0);
        assert_eq!(g.radius, WGS84.semi_major_axis);

        let g = Geodetic::new(FRAC_PI_2, 0.0, 0.0).to_geocentric(&WGS84);
        assert_abs_diff_eq!(g.latitude, FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(g.radius, WGS84.semi_minor_axis(), epsilon = 1e-6);
    }

    #[test]
    fn test_geocentric_latitude_on_surface() {
        // on the ellipsoid tan(geocentric) = (1 - e^2) tan(geodetic)
        for deg in [-75.0_f64, -30.0, 10.0, 45.0, 80.0] {
            let lat = deg.to_radians();
            let g = Geodetic::new(lat, 0.0, 0.0).to_geocentric(&WGS84);
            let expected = ((1.0 - WGS84.eccentricity_squared()) * lat.tan()).atan();
            assert_abs_diff_eq!(g.latitude, expected, epsilon = 1e-12);
            assert!(g.latitude.abs() < lat.abs());
        }
    }

    #[test]
    fn test_geocentric_matches_cartesian() {
        let geodetic = Geodetic::from_degrees(37.5, -122.0, 250.0);
        let g = geodetic.to_geocentric(&WGS84);
        let c = geodetic.to_cartesian(&WGS84);
        assert_equal(g.radius, c.norm());
        assert_abs_diff_eq!(g.latitude, (c.z / c.norm()).asin(), epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip_grid() {
        for i in 0..=12 {
            let lat = (-90.0 + 15.0 * i as f64).to_radians();
            for j in 0..=12 {
                let lon = (-180.0 + 30.0 * j as f64).to_radians();
                for alt in [0.0, 1500.0] {
                    let geodetic = Geodetic::new(lat, lon, alt);
                    let back = Geodetic::from_cartesian(&geodetic.to_cartesian(&WGS84), &WGS84);
                    assert_abs_diff_eq!(back.latitude, lat, epsilon = 1e-6);
                    assert_abs_diff_eq!(wrapped_difference(back.longitude, lon), 0.0, epsilon = 1e-6);
                    assert_abs_diff_eq!(back.altitude, alt, epsilon = 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_longitude_range() {
        let geodetic = Geodetic::new(0.2, PI, 0.0);
        let back = Geodetic::from_cartesian(&geodetic.to_cartesian(&WGS84), &WGS84);
        assert_abs_diff_eq!(back.longitude.abs(), PI, epsilon = 1e-9);
    }

    #[test]
    fn test_nan_propagates() {
        let c = Geodetic::new(f64::NAN, 0.0, 0.0).to_cartesian(&WGS84);
        assert!(c.x.is_nan() && c.z.is_nan());
    }
}
