// File: crates/chart-optimize/tests/transform.rs
// Purpose: End-to-end optimizer behavior: reduction, annotations, data zoom and renderer flags.

use chart_optimize::{
    optimize, ChartDescription, OneOrMany, OptimizeOptions, Optimizer, Point, SamplingMethod,
    Series,
};

fn ramp(n: usize) -> Vec<Point> {
    (0..n).map(|i| Point::Scalar(i as f64)).collect()
}

fn line_chart(n: usize) -> ChartDescription {
    ChartDescription::with_series(vec![Series::with_points("line", ramp(n))])
}

#[test]
fn reduces_oversized_line_series() {
    let chart = line_chart(5000);
    let opts = OptimizeOptions::default()
        .with_sampling_threshold(1000)
        .with_method(SamplingMethod::Lttb)
        .with_target_points(1000);

    let out = Optimizer::new().optimize(&chart, &opts);
    let series = &out.series_slice()[0];
    let points = series.points().unwrap();

    assert_eq!(points.len(), 1000);
    assert_eq!(points[0], Point::Scalar(0.0));
    assert_eq!(points[999], Point::Scalar(4999.0));

    // Line tweaks ride along with the reduction.
    assert_eq!(series.show_symbol, Some(false));
    assert_eq!(series.sampling.as_deref(), Some("lttb"));
    assert_eq!(series.line_style.as_ref().unwrap().width, Some(1.0));
}

#[test]
fn keyed_points_carry_bucket_means() {
    let data: Vec<Point> = (0..5000).map(|i| Point::value(i as f64)).collect();
    let chart = ChartDescription::with_series(vec![Series::with_points("line", data)]);
    let opts = OptimizeOptions::default()
        .with_sampling_threshold(1000)
        .with_method(SamplingMethod::Average);

    let out = Optimizer::new().optimize(&chart, &opts);
    let points = out.series_slice()[0].points().unwrap();

    assert_eq!(points.len(), 1000);
    // Buckets are 5 wide: first mean is (0+..+4)/5, last is (4995+..+4999)/5.
    assert_eq!(points[0], Point::value(2.0));
    assert_eq!(points[999], Point::value(4997.0));
}

#[test]
fn excluded_types_pass_through() {
    let chart = ChartDescription::with_series(vec![Series::with_points("pie", ramp(5000))]);
    let opts = OptimizeOptions::default().with_sampling_threshold(1000).exclude("pie");

    let out = Optimizer::new().optimize(&chart, &opts);
    let series = &out.series_slice()[0];

    assert_eq!(series.len(), 5000);
    assert_eq!(series.show_symbol, None);
    assert_eq!(series.sampling, None);
}

#[test]
fn huge_series_get_progressive_annotations() {
    let chart = line_chart(20000);
    let out = Optimizer::new().optimize(&chart, &OptimizeOptions::default());
    let series = &out.series_slice()[0];

    assert_eq!(series.points().unwrap().len(), 1000);
    assert_eq!(series.progressive, Some(500));
    assert_eq!(series.progressive_threshold, Some(10000));
    assert_eq!(series.progressive_chunk_mode.as_deref(), Some("sequential"));
    assert_eq!(series.animation, Some(false));
    assert_eq!(series.show_symbol, Some(false));
}

#[test]
fn progressive_uses_the_original_length() {
    // 20000 points reduce to 1000, below the progressive threshold; the
    // annotation still keys off the pre-reduction size.
    let chart = line_chart(20000);
    let mut opts = OptimizeOptions::default();
    opts.progressive_threshold = 15000;

    let out = Optimizer::new().optimize(&chart, &opts);
    assert_eq!(out.series_slice()[0].progressive, Some(500));
}

#[test]
fn data_zoom_is_injected_when_absent() {
    let out = Optimizer::new().optimize(&line_chart(100), &OptimizeOptions::default());
    let zooms = out.data_zoom.as_ref().unwrap();

    assert_eq!(zooms.len(), 1);
    let zoom = &zooms.as_slice()[0];
    assert_eq!(zoom.kind.as_deref(), Some("inside"));
    assert_eq!(zoom.start, Some(0.0));
    assert_eq!(zoom.end, Some(100.0));
    assert_eq!(zoom.throttle, Some(100));
}

#[test]
fn data_zoom_injection_respects_simplify_flag() {
    let mut opts = OptimizeOptions::default();
    opts.simplify_out_of_view = false;

    let out = Optimizer::new().optimize(&line_chart(100), &opts);
    assert!(out.data_zoom.is_none());
}

#[test]
fn existing_data_zoom_is_patched_not_replaced() {
    let chart = ChartDescription::from_json(
        r#"{"series":[],"dataZoom":{"type":"slider","start":20.0,"end":80.0,"zoomLock":true}}"#,
    )
    .unwrap();

    let out = Optimizer::new().optimize(&chart, &OptimizeOptions::default());
    let zooms = out.data_zoom.as_ref().unwrap();

    // Single-object shape survives.
    assert!(matches!(zooms, OneOrMany::One(_)));
    let zoom = &zooms.as_slice()[0];
    assert_eq!(zoom.kind.as_deref(), Some("slider"));
    assert_eq!(zoom.start, Some(20.0));
    assert_eq!(zoom.end, Some(80.0));
    assert_eq!(zoom.throttle, Some(100));
    assert_eq!(zoom.extra.get("zoomLock"), Some(&serde_json::Value::Bool(true)));
}

#[test]
fn repeated_optimization_is_idempotent_for_data_zoom() {
    let mut optimizer = Optimizer::new();
    let once = optimizer.optimize(&line_chart(100), &OptimizeOptions::default());
    let twice = optimizer.optimize(&once, &OptimizeOptions::default());

    assert_eq!(twice.data_zoom.as_ref().unwrap().len(), 1);
    assert_eq!(twice.data_zoom, once.data_zoom);
}

#[test]
fn input_chart_is_never_mutated() {
    let chart = line_chart(5000);
    let before = chart.clone();
    let _ = optimize(&chart, &OptimizeOptions::default().with_sampling_threshold(100));
    assert_eq!(chart, before);
}

#[test]
fn series_override_replaces_the_global_options() {
    // Global options would reduce; the series override raises the
    // threshold and wins wholesale.
    let lenient = OptimizeOptions::default().with_sampling_threshold(10000);
    let series = Series::with_points("line", ramp(5000)).with_optimization(lenient);
    let chart = ChartDescription::with_series(vec![series]);

    let strict = OptimizeOptions::default().with_sampling_threshold(100).with_target_points(50);
    let out = Optimizer::new().optimize(&chart, &strict);
    assert_eq!(out.series_slice()[0].len(), 5000);

    // And the other way round: the override reduces harder than the global.
    let harsh = OptimizeOptions::default()
        .with_sampling_threshold(100)
        .with_target_points(50)
        .with_method(SamplingMethod::First);
    let series = Series::with_points("line", ramp(5000)).with_optimization(harsh);
    let chart = ChartDescription::with_series(vec![series]);

    let out = Optimizer::new().optimize(&chart, &OptimizeOptions::default());
    assert_eq!(out.series_slice()[0].len(), 50);
}

#[test]
fn identity_reduction_still_tags_the_series() {
    // Between the sampling threshold and the target: the dispatcher runs,
    // copies the data unchanged, and the line tweaks still apply.
    let chart = line_chart(500);
    let opts = OptimizeOptions::default().with_sampling_threshold(100).with_target_points(1000);

    let out = Optimizer::new().optimize(&chart, &opts);
    let series = &out.series_slice()[0];

    assert_eq!(series.points().unwrap(), chart.series_slice()[0].points().unwrap());
    assert_eq!(series.show_symbol, Some(false));
    assert_eq!(series.sampling.as_deref(), Some("lttb"));
}

#[test]
fn legacy_strategy_drives_the_sampler() {
    let chart = line_chart(5000);
    let opts =
        OptimizeOptions::from_json(r#"{"samplingThreshold": 1000, "samplingStrategy": "avg-max"}"#)
            .unwrap();

    let out = Optimizer::new().optimize(&chart, &opts);
    let series = &out.series_slice()[0];

    assert_eq!(series.points().unwrap().len(), 1000);
    assert_eq!(series.sampling.as_deref(), Some("average"));
}

#[test]
fn malformed_series_data_passes_through() {
    let chart = ChartDescription::from_json(
        r#"{"series":[{"type":"line","data":{"rows":3}},{"type":"line","data":[1.0,[1.0,2.0,3.0]]}]}"#,
    )
    .unwrap();

    let mut opts = OptimizeOptions::default();
    opts.sampling_threshold = 0;

    let out = Optimizer::new().optimize(&chart, &opts);
    assert_eq!(out.series_slice()[0].data, chart.series_slice()[0].data);
    assert_eq!(out.series_slice()[1].data, chart.series_slice()[1].data);
    assert_eq!(out.series_slice()[0].show_symbol, None);
}

#[test]
fn scatter_series_shrink_their_symbols() {
    let chart = ChartDescription::with_series(vec![Series::with_points("scatter", ramp(5000))]);
    let opts = OptimizeOptions::default().with_sampling_threshold(1000);

    let out = Optimizer::new().optimize(&chart, &opts);
    let series = &out.series_slice()[0];

    assert_eq!(series.len(), 1000);
    assert_eq!(series.symbol_size, Some(3.0));
    assert_eq!(series.show_symbol, None);
}

#[test]
fn other_kinds_reduce_without_display_tweaks() {
    let chart = ChartDescription::with_series(vec![Series::with_points("bar", ramp(5000))]);
    let opts = OptimizeOptions::default().with_sampling_threshold(1000);

    let out = Optimizer::new().optimize(&chart, &opts);
    let series = &out.series_slice()[0];

    assert_eq!(series.len(), 1000);
    assert_eq!(series.show_symbol, None);
    assert_eq!(series.symbol_size, None);
    assert_eq!(series.sampling, None);
}

#[test]
fn renderer_flags_are_set_at_the_top_level() {
    let out = Optimizer::new().optimize(&line_chart(100), &OptimizeOptions::default());
    assert_eq!(out.progressive, Some(500));
    assert_eq!(out.renderer.as_deref(), Some("canvas"));
    assert_eq!(out.use_dirty_rect, Some(true));

    let mut opts = OptimizeOptions::default();
    opts.use_async_rendering = false;
    opts.use_dirty_rect = false;
    let out = Optimizer::new().optimize(&line_chart(100), &opts);
    assert_eq!(out.progressive, None);
    assert_eq!(out.renderer, None);
    assert_eq!(out.use_dirty_rect, None);
}

#[test]
fn small_series_keep_their_data() {
    let chart = line_chart(100);
    let out = Optimizer::new().optimize(&chart, &OptimizeOptions::default());
    let series = &out.series_slice()[0];

    assert_eq!(series.points().unwrap(), chart.series_slice()[0].points().unwrap());
    assert_eq!(series.show_symbol, None);
    // Chart-level rewrites still happen for small data.
    assert!(out.data_zoom.is_some());
    assert_eq!(out.renderer.as_deref(), Some("canvas"));
}

#[test]
fn single_series_object_shape_is_preserved() {
    let chart = ChartDescription::from_json(
        r#"{"series":{"type":"line","data":[0.0,1.0,2.0,3.0,4.0,5.0]},"title":{"text":"t"}}"#,
    )
    .unwrap();

    let mut opts = OptimizeOptions::default();
    opts.sampling_threshold = 2;
    opts.target_points = 4;

    let out = Optimizer::new().optimize(&chart, &opts);
    assert!(matches!(out.series, Some(OneOrMany::One(_))));
    assert_eq!(out.series_slice()[0].len(), 4);
    // Unrelated top-level fields ride through.
    assert_eq!(out.extra.get("title"), chart.extra.get("title"));
}

#[test]
fn empty_description_gains_only_chart_level_fields() {
    let out = Optimizer::new().optimize(&ChartDescription::new(), &OptimizeOptions::default());
    assert!(out.series.is_none());
    assert!(out.data_zoom.is_some());
    assert_eq!(out.use_dirty_rect, Some(true));
}
