// File: crates/demo/src/main.rs
// Summary: Demo loads a value CSV (or synthesizes a waveform), optimizes the chart description and writes the result as JSON.

use anyhow::{Context, Result};
use chart_optimize::{ChartDescription, OptimizeOptions, Optimizer, Point, SamplingMethod, Series};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    // Args: [csv-path] [method] [target-points], all optional.
    let mut args = std::env::args().skip(1);
    let source = args.next();
    let method = match args.next() {
        Some(name) => name.parse::<SamplingMethod>()?,
        None => SamplingMethod::Lttb,
    };
    let target: usize = match args.next() {
        Some(t) => t.parse().context("target point count must be an integer")?,
        None => 1000,
    };

    let (label, points) = match source {
        Some(raw) => {
            let path = PathBuf::from(raw);
            let pts = load_value_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            (stem_of(&path), pts)
        }
        None => ("waveform".to_string(), synth_waveform(50_000)),
    };
    println!("Loaded {} points ({})", points.len(), label);
    anyhow::ensure!(!points.is_empty(), "no points loaded, check headers/delimiter.");

    let chart = ChartDescription::with_series(vec![Series::with_points("line", points)]);
    let opts = OptimizeOptions::default().with_method(method).with_target_points(target);

    let mut optimizer = Optimizer::new();
    let optimized = optimizer.optimize(&chart, &opts);
    report("first pass", &chart, &optimized, &optimizer);

    // Same shape again: answered from the cache.
    let again = optimizer.optimize(&chart, &opts);
    report("second pass", &chart, &again, &optimizer);

    let out = out_name(&label, method);
    std::fs::write(&out, optimized.to_json_pretty()?)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());

    Ok(())
}

fn report(pass: &str, input: &ChartDescription, output: &ChartDescription, optimizer: &Optimizer) {
    let before = input.series_slice().first().map(Series::len).unwrap_or(0);
    let after = output.series_slice().first().map(Series::len).unwrap_or(0);
    println!(
        "{pass}: {before} -> {after} points (cache: {} hits, {} misses)",
        optimizer.cache().hits(),
        optimizer.cache().misses()
    );
}

/// Load a CSV with sniffed time/value columns into points.
fn load_value_csv(path: &Path) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_x = idx(&["time", "timestamp", "date", "x", "index"]);
    let i_y = idx(&["value", "y", "close", "price", "v"]);
    if i_y.is_none() {
        println!("Warning: no value column found, falling back to the last column.");
    }
    let y_ix = i_y.unwrap_or_else(|| headers.len().saturating_sub(1));

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let y = match rec.get(y_ix).and_then(|s| s.trim().parse::<f64>().ok()) {
            Some(y) => y,
            None => continue,
        };
        match i_x.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok()) {
            Some(x) => out.push(Point::Pair(x, y)),
            None => out.push(Point::Scalar(y)),
        }
    }
    Ok(out)
}

fn synth_waveform(n: usize) -> Vec<Point> {
    let mut v = Vec::with_capacity(n);
    for i in 0..n {
        let y = (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001);
        v.push(Point::Pair(i as f64, y));
    }
    v
}

fn stem_of(path: &Path) -> String {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string()
}

/// Output file name like target/out/optimized_<label>_<method>.json
fn out_name(label: &str, method: SamplingMethod) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("optimized_{}_{}.json", label, method.as_str()));
    out
}
