// File: crates/chart-optimize/src/options.rs
// Summary: Sampling method/strategy enums and the per-call optimization options.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OptimizeError;

/// Reduction strategy for oversized series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingMethod {
    Lttb,
    Average,
    Max,
    Min,
    Sum,
    First,
}

impl Default for SamplingMethod {
    fn default() -> Self { SamplingMethod::Lttb }
}

impl SamplingMethod {
    /// Renderer-facing name; also the serialized spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            SamplingMethod::Lttb => "lttb",
            SamplingMethod::Average => "average",
            SamplingMethod::Max => "max",
            SamplingMethod::Min => "min",
            SamplingMethod::Sum => "sum",
            SamplingMethod::First => "first",
        }
    }
}

impl FromStr for SamplingMethod {
    type Err = OptimizeError;

    /// Accepts both the method names and the legacy strategy spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lttb" => Ok(SamplingMethod::Lttb),
            "average" | "avg" | "avg-max" => Ok(SamplingMethod::Average),
            "max" => Ok(SamplingMethod::Max),
            "min" => Ok(SamplingMethod::Min),
            "sum" => Ok(SamplingMethod::Sum),
            "first" | "precision" => Ok(SamplingMethod::First),
            other => Err(OptimizeError::UnknownMethod(other.to_string())),
        }
    }
}

/// Legacy three-valued strategy kept for configurations that predate
/// `SamplingMethod`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SamplingStrategy {
    Lttb,
    AvgMax,
    Precision,
}

impl From<SamplingStrategy> for SamplingMethod {
    fn from(strategy: SamplingStrategy) -> Self {
        match strategy {
            SamplingStrategy::Lttb => SamplingMethod::Lttb,
            SamplingStrategy::AvgMax => SamplingMethod::Average,
            SamplingStrategy::Precision => SamplingMethod::First,
        }
    }
}

/// Tuning knobs for one optimize pass. A series may carry its own
/// `OptimizeOptions`, which replaces this value wholesale for that series
/// (no field-by-field merge).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizeOptions {
    /// Series longer than this get downsampled.
    pub sampling_threshold: usize,
    pub sampling_method: SamplingMethod,
    /// Legacy alias; when set it wins over `sampling_method`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sampling_strategy: Option<SamplingStrategy>,
    /// Point count a reduced series ends up with.
    pub target_points: usize,
    /// Series longer than this (pre-reduction length) render progressively.
    pub progressive_threshold: usize,
    pub progressive_chunk_size: usize,
    pub use_async_rendering: bool,
    pub simplify_out_of_view: bool,
    pub throttle_delay_ms: u32,
    pub use_dirty_rect: bool,
    pub enable_cache: bool,
    pub cache_expiration_ms: u64,
    /// Series types left untouched (typically pie/radar/gauge, where point
    /// count is semantic, not resolution).
    pub exclude_chart_types: BTreeSet<String>,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            sampling_threshold: 5000,
            sampling_method: SamplingMethod::Lttb,
            sampling_strategy: None,
            target_points: 1000,
            progressive_threshold: 10_000,
            progressive_chunk_size: 500,
            use_async_rendering: true,
            simplify_out_of_view: true,
            throttle_delay_ms: 100,
            use_dirty_rect: true,
            enable_cache: true,
            cache_expiration_ms: 60_000,
            exclude_chart_types: BTreeSet::new(),
        }
    }
}

impl OptimizeOptions {
    pub fn with_sampling_threshold(mut self, threshold: usize) -> Self {
        self.sampling_threshold = threshold;
        self
    }

    pub fn with_method(mut self, method: SamplingMethod) -> Self {
        self.sampling_method = method;
        self
    }

    pub fn with_target_points(mut self, target: usize) -> Self {
        self.target_points = target;
        self
    }

    pub fn exclude(mut self, kind: impl Into<String>) -> Self {
        self.exclude_chart_types.insert(kind.into());
        self
    }

    /// Method after the legacy strategy override.
    pub fn effective_method(&self) -> SamplingMethod {
        match self.sampling_strategy {
            Some(strategy) => strategy.into(),
            None => self.sampling_method,
        }
    }

    /// Repair degenerate values instead of failing: `target_points` floors
    /// to 2, `sampling_threshold` to 1.
    pub fn clamped(&self) -> Self {
        let mut out = self.clone();
        if out.target_points < 2 {
            out.target_points = 2;
        }
        if out.sampling_threshold == 0 {
            out.sampling_threshold = 1;
        }
        out
    }

    pub fn from_json(json: &str) -> Result<Self, OptimizeError> {
        Ok(serde_json::from_str(json)?)
    }
}
