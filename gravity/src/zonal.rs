//! Truncated zonal harmonic gravity.
//!
//! The acceleration is the central body term with the closed-form gradient of
//! each zonal harmonic from J2 up to the requested order subtracted from it
//! (Vallado, "Fundamentals of Astrodynamics and Applications", 8.7.1). The
//! coefficients keep the sign convention of [`ZonalCoefficients::WGS84`], so
//! the subtraction must not be flipped to an addition.

use coordinate_systems::{Ellipsoid, Geodetic, ned_from_ecef};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::{GravityErrors, GravityModel, SurfaceGravity, newtonian::NewtonianGravity};

/// Dimensionless zonal harmonic coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZonalCoefficients {
    pub j2: f64,
    pub j3: f64,
    pub j4: f64,
}

impl ZonalCoefficients {
    /// Bate, Mueller & White pg. 422
    pub const WGS84: Self = Self {
        j2: -0.1082635854e-2,
        j3: 0.2532435346e-5,
        j4: 0.1619331205e-5,
    };

    pub fn new(j2: f64, j3: f64, j4: f64) -> Self {
        Self { j2, j3, j4 }
    }
}

impl Default for ZonalCoefficients {
    fn default() -> Self {
        Self::WGS84
    }
}

/// A single zonal harmonic term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonalDegree {
    J2,
    J3,
    J4,
}

impl ZonalDegree {
    pub const ALL: [ZonalDegree; 3] = [ZonalDegree::J2, ZonalDegree::J3, ZonalDegree::J4];
    pub const MIN_ORDER: usize = 2;
    pub const MAX_ORDER: usize = 4;

    pub fn degree(&self) -> usize {
        match self {
            ZonalDegree::J2 => 2,
            ZonalDegree::J3 => 3,
            ZonalDegree::J4 => 4,
        }
    }

    /// Every degree from 2 through `order`, ascending.
    pub fn up_to(order: usize) -> Result<&'static [ZonalDegree], GravityErrors> {
        if !(Self::MIN_ORDER..=Self::MAX_ORDER).contains(&order) {
            return Err(GravityErrors::UnsupportedOrder(order));
        }
        Ok(&Self::ALL[..=order - Self::MIN_ORDER])
    }

    /// Acceleration contribution of this degree at an ECEF position, to be
    /// subtracted from the central body term.
    pub fn term(
        &self,
        r_ecef: &Vector3<f64>,
        ellipsoid: &Ellipsoid,
        coefficients: &ZonalCoefficients,
    ) -> Vector3<f64> {
        let (x, y, z) = (r_ecef.x, r_ecef.y, r_ecef.z);
        let r = r_ecef.norm();
        let r2 = r * r;
        let z2 = z * z;
        let mu = ellipsoid.mu;
        let re = ellipsoid.semi_major_axis;

        match self {
            ZonalDegree::J2 => {
                let factor = -3.0 * coefficients.j2 * mu * re.powi(2) / (2.0 * r.powi(5));
                let xy = 1.0 - 5.0 * z2 / r2;
                Vector3::new(
                    factor * x * xy,
                    factor * y * xy,
                    factor * z * (3.0 - 5.0 * z2 / r2),
                )
            }
            ZonalDegree::J3 => {
                let factor = -5.0 * coefficients.j3 * mu * re.powi(3) / (2.0 * r.powi(7));
                let xy = 3.0 * z - 7.0 * z.powi(3) / r2;
                Vector3::new(
                    factor * x * xy,
                    factor * y * xy,
                    factor * (6.0 * z2 - 7.0 * z.powi(4) / r2 - 3.0 * r2 / 5.0),
                )
            }
            ZonalDegree::J4 => {
                let factor = 15.0 * coefficients.j4 * mu * re.powi(4) / (8.0 * r.powi(7));
                let z4 = z.powi(4) / r.powi(4);
                let xy = 1.0 - 14.0 * z2 / r2 + 21.0 * z4;
                Vector3::new(
                    factor * x * xy,
                    factor * y * xy,
                    factor * z * (5.0 - 70.0 * z2 / (3.0 * r2) + 21.0 * z4),
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct ZonalGravityParameters {
    #[serde(default)]
    ellipsoid: Ellipsoid,
    #[serde(default)]
    coefficients: ZonalCoefficients,
    order: usize,
}

impl TryFrom<ZonalGravityParameters> for ZonalGravity {
    type Error = GravityErrors;

    fn try_from(p: ZonalGravityParameters) -> Result<Self, Self::Error> {
        ZonalGravity::with_parameters(p.ellipsoid, p.coefficients, p.order)
    }
}

/// Zonal harmonic gravity model truncated at a fixed order (2, 3 or 4).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ZonalGravityParameters")]
pub struct ZonalGravity {
    ellipsoid: Ellipsoid,
    coefficients: ZonalCoefficients,
    order: usize,
}

impl ZonalGravity {
    /// WGS84 ellipsoid and coefficients.
    pub fn new(order: usize) -> Result<Self, GravityErrors> {
        Self::with_parameters(Ellipsoid::WGS84, ZonalCoefficients::WGS84, order)
    }

    pub fn with_parameters(
        ellipsoid: Ellipsoid,
        coefficients: ZonalCoefficients,
        order: usize,
    ) -> Result<Self, GravityErrors> {
        ZonalDegree::up_to(order)?;
        tracing::debug!(order, a = ellipsoid.semi_major_axis, "zonal gravity model");
        Ok(Self {
            ellipsoid,
            coefficients,
            order,
        })
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    pub fn coefficients(&self) -> &ZonalCoefficients {
        &self.coefficients
    }

    fn degrees(&self) -> &'static [ZonalDegree] {
        // order is validated on construction
        &ZonalDegree::ALL[..=self.order - ZonalDegree::MIN_ORDER]
    }

    /// ECEF acceleration at an ECEF position.
    pub fn acceleration(&self, r_ecef: &Vector3<f64>) -> Vector3<f64> {
        let mut a = NewtonianGravity::new(self.ellipsoid.mu).acceleration(r_ecef);
        for degree in self.degrees() {
            a -= degree.term(r_ecef, &self.ellipsoid, &self.coefficients);
        }
        a
    }

    /// Acceleration in the local north-east-down frame at a geodetic position.
    pub fn calculate_ned(&self, position: &Geodetic) -> Vector3<f64> {
        let r_ecef = position.to_cartesian(&self.ellipsoid).vec();
        ned_from_ecef(position.latitude, position.longitude) * self.acceleration(&r_ecef)
    }

    /// Down component of [`ZonalGravity::calculate_ned`], positive toward the ellipsoid.
    pub fn vertical_acceleration(&self, position: &Geodetic) -> f64 {
        self.calculate_ned(position)[2]
    }
}

impl GravityModel for ZonalGravity {
    fn calculate(&self, r: &Vector3<f64>) -> Result<Vector3<f64>, GravityErrors> {
        Ok(self.acceleration(r))
    }
}

impl SurfaceGravity for ZonalGravity {
    fn surface_gravity(&self, latitude: f64) -> f64 {
        self.vertical_acceleration(&Geodetic::new(latitude, 0.0, 0.0))
    }
}

/// Vertical (down) gravitational acceleration in m/s^2 on the WGS84 ellipsoid
/// at a geodetic latitude and longitude given in degrees, summing zonal
/// harmonics J2 through J`order`.
pub fn compute_vertical_acceleration(
    latitude_deg: f64,
    longitude_deg: f64,
    order: usize,
) -> Result<f64, GravityErrors> {
    let model = ZonalGravity::new(order)?;
    Ok(model.vertical_acceleration(&Geodetic::from_degrees(latitude_deg, longitude_deg, 0.0)))
}
