use std::path::Path;

use coordinate_systems::Ellipsoid;
use gravity::{GravityErrors, ZonalCoefficients};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareErrors {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Config(#[from] ron::error::SpannedError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("GravityErrors: {0}")]
    Gravity(#[from] GravityErrors),
    #[error("invalid sweep: {0}")]
    InvalidSweep(String),
}

/// Model parameters for a comparison run. Fields left out of a config file
/// fall back to WGS84.
///
/// ```ron
/// (
///     ellipsoid: (semi_major_axis: 6378137.0, eccentricity: 0.0818191908426215, mu: 3.986004418e14),
///     coefficients: (j2: -0.1082635854e-2, j3: 0.2532435346e-5, j4: 0.1619331205e-5),
/// )
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    #[serde(default)]
    pub ellipsoid: Ellipsoid,
    #[serde(default)]
    pub coefficients: ZonalCoefficients,
}

impl CompareConfig {
    pub fn load(path: &Path) -> Result<Self, CompareErrors> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_ron(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn from_ron(contents: &str) -> Result<Self, CompareErrors> {
        Ok(ron::from_str(contents)?)
    }
}
