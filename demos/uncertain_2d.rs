//! Points with uncertainty in both coordinates, joined by a smoothed line.

use svgplot::{
    AxisConfig, Color, LineStyle, Marker, Plot, Plot2d, PointStyle, Series2d, Uncertain,
    ValueLabelStyle,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let points = [
        (1.0, 0.3, 2.0, 0.4),
        (2.0, 0.2, 3.5, 0.6),
        (3.5, 0.4, 3.1, 0.3),
        (5.0, 0.3, 6.2, 0.9),
        (7.0, 0.5, f64::INFINITY, 0.0),
    ]
    .map(|(x, sx, y, sy)| (Uncertain::new(x).std_dev(sx), Uncertain::new(y).std_dev(sy)));

    let plot = Plot2d::new()
        .title("Calibration")
        .legend_on(true)
        .x_axis(AxisConfig::new().label("input").units("V"))
        .y_axis(AxisConfig::new().label("output").units("mA"))
        .series(
            Series2d::new("probe A", points)
                .point(PointStyle::new(Marker::UncertaintyEllipse).stroke(Color::BLUE))
                .line(LineStyle::new(Color::BLUE).curve(true))
                .value_labels(ValueLabelStyle::new().plus_minus(Color::GRAY)),
        );

    match plot.to_svg_string() {
        Ok(svg) => println!("{svg}"),
        Err(e) => eprintln!("Error: {:?}", miette::Report::new(e)),
    }
}
