//! Two runners' times along one axis. `RUST_LOG=svgplot=debug` with
//! `--features tracing` shows the layout decisions.

use svgplot::{Color, Marker, Plot, Plot1d, PointStyle, Series1d};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let plot = Plot1d::new()
        .title("Race Times")
        .legend_on(true)
        .x_label("time")
        .series(Series1d::new("dan", [3.1, 4.2]))
        .series(
            Series1d::new("elaine", [2.1, 7.8])
                .point(PointStyle::new(Marker::Square).stroke(Color::BLUE)),
        );
    let plot = match plot.x_range(-1.0, 11.0) {
        Ok(plot) => plot,
        Err(e) => {
            eprintln!("Error: {:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };

    match plot.to_svg_string() {
        Ok(svg) => println!("{svg}"),
        Err(e) => eprintln!("Error: {:?}", miette::Report::new(e)),
    }
}
