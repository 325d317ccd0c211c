use rotations::{RotationTrait, rotation_matrix::RotationMatrix};

/// Direction cosine matrix taking ECEF components into the local
/// north-east-down frame at a geodetic latitude and longitude (rad).
///
/// Rows are the north, east and down unit vectors expressed in ECEF.
pub fn ned_from_ecef(latitude: f64, longitude: f64) -> RotationMatrix {
    let (slat, clat) = latitude.sin_cos();
    let (slon, clon) = longitude.sin_cos();

    RotationMatrix::from_rows([
        [-slat * clon, -slat * slon, clat],
        [-slon, clon, 0.0],
        [-clat * clon, -clat * slon, -slat],
    ])
}

/// Inverse of [`ned_from_ecef`].
pub fn ecef_from_ned(latitude: f64, longitude: f64) -> RotationMatrix {
    ned_from_ecef(latitude, longitude).inv()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Ellipsoid, Geodetic};
    use approx::assert_abs_diff_eq;
    use nalgebra::{Matrix3, Vector3};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_equator_prime_meridian() {
        // north is +z, east is +y, down is -x
        let r = ned_from_ecef(0.0, 0.0);
        let expected = Matrix3::new(0.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0);
        assert_abs_diff_eq!(r.0, expected, epsilon = 1e-15);
    }

    #[test]
    fn test_north_pole_down_is_minus_z() {
        let r = ned_from_ecef(FRAC_PI_2, 0.3);
        let down = r * Vector3::new(0.0, 0.0, -1.0);
        assert_abs_diff_eq!(down, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_orthogonal_everywhere() {
        for i in 0..=36 {
            let lat = (-90.0 + 5.0 * i as f64).to_radians();
            for j in 0..=24 {
                let lon = (-180.0 + 15.0 * j as f64).to_radians();
                let r = ned_from_ecef(lat, lon);
                assert!(r.is_orthogonal(1e-9), "not orthogonal at {lat} {lon}");
                assert_abs_diff_eq!(r.0.determinant(), 1.0, epsilon = 1e-12);
                assert_abs_diff_eq!(
                    (ecef_from_ned(lat, lon) * r).0,
                    Matrix3::identity(),
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_down_is_ellipsoid_normal() {
        // the down axis is anti-parallel to the outward normal at the point,
        // so moving up in altitude is a pure negative-down displacement
        let ellipsoid = Ellipsoid::WGS84;
        let lat = 0.7;
        let lon = -1.2;
        let low = Geodetic::new(lat, lon, 0.0).to_cartesian(&ellipsoid).vec();
        let high = Geodetic::new(lat, lon, 100.0).to_cartesian(&ellipsoid).vec();

        let ned = ned_from_ecef(lat, lon) * (high - low);
        assert_abs_diff_eq!(ned, Vector3::new(0.0, 0.0, -100.0), epsilon = 1e-6);
    }
}
