use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use utilities::format_number;

mod config;
mod plot;
mod sweep;

use config::CompareConfig;
use sweep::{GravitySample, Sweep};

/// Compare zonal harmonic, Somigliana and WELMEC gravity over a latitude sweep
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// First latitude of the sweep [deg]
    #[arg(long, default_value_t = -90.0, allow_negative_numbers = true)]
    lat_min: f64,
    /// Last latitude of the sweep [deg]
    #[arg(long, default_value_t = 90.0, allow_negative_numbers = true)]
    lat_max: f64,
    /// Number of evenly spaced latitudes, ends included
    #[arg(long, default_value_t = 100)]
    samples: usize,
    /// Longitude for the zonal models [deg]
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    longitude: f64,
    /// Chart output path
    #[arg(short, long, default_value = "gravity.png")]
    output: PathBuf,
    /// Also write the sweep as a csv table
    #[arg(long)]
    csv: Option<PathBuf>,
    /// RON file overriding the ellipsoid and zonal coefficients
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => CompareConfig::load(path)?,
        None => CompareConfig::default(),
    };

    let sweep = Sweep::new(cli.lat_min, cli.lat_max, cli.samples, cli.longitude)?;
    let samples = sweep::run(&sweep, &config)?;

    if let Some(path) = &cli.csv {
        sweep::write_csv(&samples, path)?;
    }
    plot::draw_chart(&samples, &cli.output)?;

    print_summary(&samples);
    Ok(())
}

fn print_summary(samples: &[GravitySample]) {
    let columns: [(&str, fn(&GravitySample) -> f64); 6] = [
        ("J2", |s| s.j2),
        ("J2 norm", |s| s.j2_norm),
        ("J3", |s| s.j3),
        ("J4", |s| s.j4),
        ("WGS84", |s| s.somigliana),
        ("WELMEC", |s| s.welmec),
    ];

    println!("{:<10}{:>14}{:>14}", "model", "min [m/s^2]", "max [m/s^2]");
    for (name, value) in columns {
        let (min, max) = samples
            .iter()
            .map(value)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), g| {
                (lo.min(g), hi.max(g))
            });
        println!(
            "{:<10}{:>14}{:>14}",
            name,
            format_number(min),
            format_number(max)
        );
    }

    let residual = samples
        .iter()
        .map(|s| (s.j4 - s.j2).abs())
        .fold(0.0, f64::max);
    println!("max |J4 - J2| = {} m/s^2", format_number(residual));
}
