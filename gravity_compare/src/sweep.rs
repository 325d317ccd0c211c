use std::path::Path;

use coordinate_systems::Geodetic;
use gravity::{SomiglianaGravity, SurfaceGravity, WelmecGravity, ZonalGravity};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::{CompareConfig, CompareErrors};

/// Evenly spaced latitudes, both ends included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub lat_min: f64,
    pub lat_max: f64,
    pub samples: usize,
    pub longitude: f64,
}

impl Sweep {
    pub fn new(
        lat_min: f64,
        lat_max: f64,
        samples: usize,
        longitude: f64,
    ) -> Result<Self, CompareErrors> {
        if samples < 2 {
            return Err(CompareErrors::InvalidSweep(format!(
                "need at least 2 samples, got {samples}"
            )));
        }
        if !(lat_min < lat_max) {
            return Err(CompareErrors::InvalidSweep(format!(
                "latitude range [{lat_min}, {lat_max}] is empty"
            )));
        }
        Ok(Self {
            lat_min,
            lat_max,
            samples,
            longitude,
        })
    }

    pub fn latitudes(&self) -> Vec<f64> {
        let step = (self.lat_max - self.lat_min) / (self.samples - 1) as f64;
        (0..self.samples)
            .map(|i| {
                if i == self.samples - 1 {
                    self.lat_max
                } else {
                    self.lat_min + step * i as f64
                }
            })
            .collect()
    }
}

/// Every model evaluated at one latitude. Zonal values are the down
/// component in the local NED frame (m/s^2).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GravitySample {
    pub latitude: f64,
    pub j2: f64,
    pub j3: f64,
    pub j4: f64,
    /// magnitude of the J2 NED vector, includes the small northward component
    pub j2_norm: f64,
    pub somigliana: f64,
    pub welmec: f64,
}

/// Evaluates every model across the sweep. Rows come back in latitude order.
pub fn run(sweep: &Sweep, config: &CompareConfig) -> Result<Vec<GravitySample>, CompareErrors> {
    let j2 = ZonalGravity::with_parameters(config.ellipsoid, config.coefficients, 2)?;
    let j3 = ZonalGravity::with_parameters(config.ellipsoid, config.coefficients, 3)?;
    let j4 = ZonalGravity::with_parameters(config.ellipsoid, config.coefficients, 4)?;

    tracing::info!(
        samples = sweep.samples,
        lat_min = sweep.lat_min,
        lat_max = sweep.lat_max,
        longitude = sweep.longitude,
        "running latitude sweep"
    );

    let samples = sweep
        .latitudes()
        .into_par_iter()
        .map(|latitude| {
            let position = Geodetic::from_degrees(latitude, sweep.longitude, 0.0);
            let j2_ned = j2.calculate_ned(&position);
            GravitySample {
                latitude,
                j2: j2_ned[2],
                j3: j3.vertical_acceleration(&position),
                j4: j4.vertical_acceleration(&position),
                j2_norm: j2_ned.norm(),
                somigliana: SomiglianaGravity.surface_gravity(position.latitude),
                welmec: WelmecGravity.surface_gravity(position.latitude),
            }
        })
        .collect();
    Ok(samples)
}

pub fn write_csv(samples: &[GravitySample], path: &Path) -> Result<(), CompareErrors> {
    let mut writer = csv::Writer::from_path(path)?;
    for sample in samples {
        writer.serialize(sample)?;
    }
    writer.flush()?;
    tracing::info!(path = %path.display(), rows = samples.len(), "wrote csv");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use gravity::{compute_vertical_acceleration, somigliana, welmec};

    #[test]
    fn test_latitudes_inclusive() {
        let sweep = Sweep::new(-90.0, 90.0, 100, 0.0).unwrap();
        let lats = sweep.latitudes();
        assert_eq!(lats.len(), 100);
        assert_eq!(lats[0], -90.0);
        assert_eq!(lats[99], 90.0);
        assert!(lats.windows(2).all(|w| w[0] < w[1]));

        let lats = Sweep::new(0.0, 10.0, 3, 0.0).unwrap().latitudes();
        assert_eq!(lats, vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_invalid_sweep() {
        assert!(matches!(
            Sweep::new(-90.0, 90.0, 1, 0.0),
            Err(CompareErrors::InvalidSweep(_))
        ));
        assert!(matches!(
            Sweep::new(10.0, 10.0, 5, 0.0),
            Err(CompareErrors::InvalidSweep(_))
        ));
        assert!(matches!(
            Sweep::new(f64::NAN, 10.0, 5, 0.0),
            Err(CompareErrors::InvalidSweep(_))
        ));
    }

    #[test]
    fn test_run_matches_models() {
        let sweep = Sweep::new(-90.0, 90.0, 19, 0.0).unwrap();
        let samples = run(&sweep, &CompareConfig::default()).unwrap();
        assert_eq!(samples.len(), 19);

        for (sample, latitude) in samples.iter().zip(sweep.latitudes()) {
            assert_eq!(sample.latitude, latitude);
            assert_abs_diff_eq!(
                sample.j2,
                compute_vertical_acceleration(latitude, 0.0, 2).unwrap(),
                epsilon = 1e-12
            );
            assert_abs_diff_eq!(
                sample.j4,
                compute_vertical_acceleration(latitude, 0.0, 4).unwrap(),
                epsilon = 1e-12
            );
            assert_abs_diff_eq!(sample.somigliana, somigliana(latitude, 0.0), epsilon = 1e-12);
            assert_abs_diff_eq!(sample.welmec, welmec(latitude, 0.0), epsilon = 1e-12);
            assert!(sample.j2_norm >= sample.j2 - 1e-12);
            assert_abs_diff_eq!(sample.j2_norm, sample.j2, epsilon = 0.02);
        }
    }

    #[test]
    fn test_run_uses_config() {
        let sweep = Sweep::new(0.0, 45.0, 4, 0.0).unwrap();
        let wgs84 = run(&sweep, &CompareConfig::default()).unwrap();

        let config = CompareConfig {
            coefficients: gravity::ZonalCoefficients::new(0.0, 0.0, 0.0),
            ..Default::default()
        };
        let point_mass = run(&sweep, &config).unwrap();

        assert!(point_mass[0].j2 < wgs84[0].j2);
        assert_eq!(point_mass[0].j2, point_mass[0].j4);
        // reference formulas do not depend on the config
        assert_eq!(point_mass[2].somigliana, wgs84[2].somigliana);
    }
}
