// File: crates/chart-optimize/src/lib.rs
// Summary: Library entry point; exports the chart data model, reducers, cache and optimizer.

pub mod point;
pub mod series;
pub mod chart;
pub mod options;
pub mod downsample;
pub mod cache;
pub mod transform;
pub mod error;

pub use point::{KeyedPoint, Point};
pub use series::{LineStyle, Series, SeriesData};
pub use chart::{ChartDescription, DataZoom, OneOrMany};
pub use options::{OptimizeOptions, SamplingMethod, SamplingStrategy};
pub use downsample::{
    downsample, reduce_average, reduce_first, reduce_lttb, reduce_max, reduce_min, reduce_sum,
};
pub use cache::{CacheKey, SampleCache};
pub use transform::{optimize, Optimizer};
pub use error::{OptimizeError, Result};
