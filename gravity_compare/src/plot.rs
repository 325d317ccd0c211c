use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::sweep::GravitySample;

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 800;

/// Draws every model against latitude and writes the chart as a PNG.
pub fn draw_chart(samples: &[GravitySample], path: &Path) -> Result<(), Box<dyn Error>> {
    let series: [(&str, RGBColor, fn(&GravitySample) -> f64); 5] = [
        ("J2", RED, |s| s.j2),
        ("J3", BLUE, |s| s.j3),
        ("J4", GREEN, |s| s.j4),
        ("WGS84", BLACK, |s| s.somigliana),
        ("WELMEC", RGBColor(255, 165, 0), |s| s.welmec),
    ];

    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return Err("no samples to plot".into());
    };

    let mut g_min = f64::INFINITY;
    let mut g_max = f64::NEG_INFINITY;
    for sample in samples {
        for (_, _, value) in &series {
            let g = value(sample);
            if g.is_finite() {
                g_min = g_min.min(g);
                g_max = g_max.max(g);
            }
        }
    }
    if !(g_min < g_max) {
        return Err("no finite range of gravity values to plot".into());
    }

    // Add a small margin to the ranges
    let g_margin = (g_max - g_min) * 0.05;
    let lat_range = first.latitude..last.latitude;
    let g_range = (g_min - g_margin)..(g_max + g_margin);

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Comparing Gravity Models", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(lat_range, g_range)?;

    chart
        .configure_mesh()
        .x_desc("Latitude [deg]")
        .y_desc("Gravitational Accel. [m/s^2]")
        .draw()?;

    for (label, color, value) in series {
        chart
            .draw_series(LineSeries::new(
                samples.iter().map(|s| (s.latitude, value(s))),
                color.stroke_width(2),
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperMiddle)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    tracing::info!(path = %path.display(), "wrote chart");
    Ok(())
}
