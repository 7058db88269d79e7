// File: crates/chart-optimize/src/transform.rs
// Summary: Option transformer: rewrites a chart description's series, data zoom and renderer flags.

use std::time::Duration;

use log::debug;

use crate::cache::{CacheKey, SampleCache};
use crate::chart::{ChartDescription, DataZoom, OneOrMany};
use crate::downsample::downsample;
use crate::options::OptimizeOptions;
use crate::point::Point;
use crate::series::{LineStyle, Series, SeriesData};

/// One-shot optimization with a fresh cache.
///
/// Repeated calls over the same data should go through an [`Optimizer`]
/// instead so reductions can be reused.
pub fn optimize(chart: &ChartDescription, options: &OptimizeOptions) -> ChartDescription {
    Optimizer::new().optimize(chart, options)
}

/// Walks chart descriptions and rewrites them for large datasets. Owns the
/// cache of past reductions, so one optimizer should live as long as the
/// charts it serves.
#[derive(Default)]
pub struct Optimizer {
    cache: SampleCache,
}

impl Optimizer {
    pub fn new() -> Self {
        Self { cache: SampleCache::new() }
    }

    pub fn with_cache(cache: SampleCache) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &SampleCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut SampleCache {
        &mut self.cache
    }

    /// Produce an optimized copy of `chart`. The input is never mutated;
    /// fields the optimizer does not recognize pass through unchanged.
    pub fn optimize(
        &mut self,
        chart: &ChartDescription,
        options: &OptimizeOptions,
    ) -> ChartDescription {
        let mut out = chart.clone();
        if let Some(list) = out.series.as_mut() {
            for series in list.as_mut_slice() {
                self.optimize_series(series, options);
            }
        }
        apply_data_zoom(&mut out, options);
        apply_render_flags(&mut out, options);
        out
    }

    fn optimize_series(&mut self, series: &mut Series, global: &OptimizeOptions) {
        let kind = series.kind.clone().unwrap_or_default();
        // Exclusion is decided before per-series overrides are resolved.
        if global.exclude_chart_types.contains(&kind) {
            return;
        }

        let opts = match series.optimization.as_ref() {
            Some(own) => own.clamped(),
            None => global.clamped(),
        };

        // Series without a recognizable point array pass through untouched.
        let original_len = match series.points() {
            Some(points) => points.len(),
            None => return,
        };

        let mut reduced = false;
        if original_len > opts.sampling_threshold {
            if let Some(points) = series.points() {
                let sampled = self.sample(&kind, points, &opts);
                debug!(
                    "reduced {} series from {} to {} points via {}",
                    kind,
                    original_len,
                    sampled.len(),
                    opts.effective_method().as_str()
                );
                series.data = Some(SeriesData::Points(sampled));
                reduced = true;
            }
        }

        if original_len > opts.progressive_threshold {
            series.progressive = Some(opts.progressive_chunk_size as u64);
            series.progressive_threshold = Some(opts.progressive_threshold as u64);
            series.progressive_chunk_mode = Some("sequential".to_string());
            series.animation = Some(false);
        }

        if reduced {
            match kind.as_str() {
                "line" => {
                    series.show_symbol = Some(false);
                    series.sampling = Some(opts.effective_method().as_str().to_string());
                    series.line_style.get_or_insert_with(LineStyle::default).width = Some(1.0);
                }
                "scatter" => {
                    series.symbol_size = Some(3.0);
                }
                _ => {}
            }
        }
    }

    fn sample(&mut self, kind: &str, points: &[Point], opts: &OptimizeOptions) -> Vec<Point> {
        let method = opts.effective_method();
        if !opts.enable_cache {
            return downsample(points, method, opts.target_points);
        }

        let key = CacheKey {
            series_kind: kind.to_string(),
            len: points.len(),
            method,
            target: opts.target_points,
        };
        let ttl = Duration::from_millis(opts.cache_expiration_ms);
        if let Some(cached) = self.cache.get(&key, ttl) {
            debug!("cache hit for {} series with {} points", kind, key.len);
            return cached;
        }

        let sampled = downsample(points, method, opts.target_points);
        self.cache.put(key, sampled.clone());
        sampled
    }
}

/// Existing data-zoom entries get the configured throttle; a chart with no
/// zoom at all gets a full-range inside control when view simplification
/// is on.
fn apply_data_zoom(chart: &mut ChartDescription, options: &OptimizeOptions) {
    if let Some(zooms) = chart.data_zoom.as_mut() {
        for zoom in zooms.as_mut_slice() {
            zoom.throttle = Some(options.throttle_delay_ms);
        }
    } else if options.simplify_out_of_view {
        chart.data_zoom = Some(OneOrMany::Many(vec![DataZoom::inside(
            options.throttle_delay_ms,
        )]));
    }
}

fn apply_render_flags(chart: &mut ChartDescription, options: &OptimizeOptions) {
    if options.use_async_rendering {
        chart.progressive = Some(options.progressive_chunk_size as u64);
        chart.renderer = Some("canvas".to_string());
    }
    if options.use_dirty_rect {
        chart.use_dirty_rect = Some(true);
    }
}
