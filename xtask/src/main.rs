use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use std::fs;
use svgplot::{
    AxisConfig, Bars, BoxPlot, BoxSeries, Color, LegendPlacement, LineStyle, Marker, Plot, Plot1d,
    Plot2d, PlotResult, PointStyle, Series1d, Series2d, Uncertain, ValueLabelStyle,
};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery [dir]   Render every sample plot and an index.html");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => {
            let out = args
                .get(2)
                .map(Utf8PathBuf::from)
                .unwrap_or_else(|| workspace_root().join("target/gallery"));
            gallery(&out);
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn workspace_root() -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("xtask lives inside the workspace")
        .to_owned()
}

type Sample = (&'static str, fn() -> PlotResult<String>);

const SAMPLES: &[Sample] = &[
    ("race_times", race_times),
    ("limits_1d", limits_1d),
    ("uncertain_2d", uncertain_2d),
    ("bars", bars),
    ("boxplot", boxplot),
];

fn gallery(out: &Utf8Path) {
    fs::create_dir_all(out).expect("Failed to create gallery directory");

    let results: Vec<(&str, Result<(), String>)> = SAMPLES
        .par_iter()
        .map(|(name, build)| {
            let path = out.join(format!("{name}.svg"));
            let result = build()
                .map_err(|e| e.to_string())
                .and_then(|svg| fs::write(&path, svg).map_err(|e| e.to_string()));
            (*name, result)
        })
        .collect();

    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>svgplot gallery</title></head>\n<body>\n",
    );
    let mut failed = 0;
    for (name, result) in &results {
        match result {
            Ok(()) => {
                eprintln!("rendered {name}");
                html.push_str(&format!(
                    "<figure><img src=\"{name}.svg\" alt=\"{name}\"><figcaption>{name}</figcaption></figure>\n"
                ));
            }
            Err(e) => {
                eprintln!("FAILED {name}: {e}");
                failed += 1;
            }
        }
    }
    html.push_str("</body>\n</html>\n");
    fs::write(out.join("index.html"), html).expect("Failed to write index.html");

    eprintln!("{} of {} plots written to {out}", results.len() - failed, results.len());
    if failed > 0 {
        std::process::exit(1);
    }
}

fn race_times() -> PlotResult<String> {
    Plot1d::new()
        .title("Race Times")
        .legend_on(true)
        .x_range(-1.0, 11.0)?
        .series(Series1d::new("dan", [3.1, 4.2]))
        .series(
            Series1d::new("elaine", [2.1, 7.8])
                .point(PointStyle::new(Marker::Square).stroke(Color::BLUE)),
        )
        .to_svg_string()
}

fn limits_1d() -> PlotResult<String> {
    Plot1d::new()
        .title("Missing and infinite values")
        .x_range(0.0, 10.0)?
        .series(
            Series1d::new(
                "readings",
                [
                    Uncertain::new(2.5).std_dev(0.4),
                    Uncertain::new(f64::NAN),
                    Uncertain::new(f64::INFINITY),
                    Uncertain::new(6.0).std_dev(1.0),
                ],
            )
            .point(PointStyle::new(Marker::UncertaintyEllipse).stroke(Color::RED))
            .value_labels(ValueLabelStyle::new().plus_minus(Color::GRAY)),
        )
        .to_svg_string()
}

fn uncertain_2d() -> PlotResult<String> {
    let points = (0..8).map(|i| {
        let x = f64::from(i);
        (
            Uncertain::new(x).std_dev(0.2),
            Uncertain::new(x * x / 4.0).std_dev(0.5 + x / 8.0),
        )
    });
    let mut plot = Plot2d::new()
        .title("Growth")
        .legend_on(true)
        .x_axis(AxisConfig::new().label("time").units("s"))
        .y_axis(AxisConfig::new().label("distance").units("m"))
        .series(
            Series2d::new("run", points)
                .point(PointStyle::new(Marker::UncertaintyEllipse).stroke(Color::BLUE))
                .line(LineStyle::new(Color::BLUE).curve(true)),
        );
    plot.common.legend.placement = LegendPlacement::OutsideBottom;
    plot.to_svg_string()
}

fn bars() -> PlotResult<String> {
    Plot2d::new()
        .title("Monthly totals")
        .y_range(0.0, 50.0)?
        .series(
            Series2d::new("total", [(1.0, 12.0), (2.0, 31.0), (3.0, 24.0), (4.0, 45.0)])
                .bars(Bars::YBlock)
                .point(PointStyle::new(Marker::None)),
        )
        .to_svg_string()
}

fn boxplot() -> PlotResult<String> {
    BoxPlot::new()
        .title("Lap times")
        .x_label("driver")
        .series(BoxSeries::new("dan", [3.1, 4.2, 3.8, 4.0, 3.5, 3.9, 9.5]))
        .series(
            BoxSeries::new("elaine", [2.1, 7.8, 3.3, 3.9, 4.4, 4.1, 3.7])
                .show_mean(PointStyle::new(Marker::Cross).stroke(Color::RED)),
        )
        .to_svg_string()
}
