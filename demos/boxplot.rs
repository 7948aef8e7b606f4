//! Lap time spread for two drivers, written to `boxplot.svg`.

use svgplot::{BoxPlot, BoxSeries, Color, License, Marker, Plot, PlotCommon, PointStyle};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let common = PlotCommon::new(svgplot::defaults::IMAGE_SIZE_BOXPLOT)
        .title("Lap times")
        .author("Timing desk")
        .license(License::default());

    let plot = BoxPlot::new()
        .with_common(common)
        .x_label("driver")
        .series(BoxSeries::new(
            "dan",
            [3.1, 4.2, 3.8, 4.0, 3.5, 3.9, 3.6, 9.5],
        ))
        .series(
            BoxSeries::new("elaine", [2.1, 7.8, 3.3, 3.9, 4.4, 4.1, 3.7, 4.0])
                .show_mean(PointStyle::new(Marker::Cross).stroke(Color::RED)),
        );

    match plot.write_to_file("boxplot.svg") {
        Ok(()) => eprintln!("wrote boxplot.svg"),
        Err(e) => eprintln!("Error: {:?}", miette::Report::new(e)),
    }
}
