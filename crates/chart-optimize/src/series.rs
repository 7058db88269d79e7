// File: crates/chart-optimize/src/series.rs
// Summary: Series model: typed annotation fields plus opaque passthrough payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::options::OptimizeOptions;
use crate::point::Point;

/// One series of a chart description. Fields the optimizer reads or writes
/// are typed; everything else rides in `extra` and round-trips untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SeriesData>,
    /// Per-series settings; replaces the call-level options wholesale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization: Option<OptimizeOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progressive: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progressive_threshold: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progressive_chunk_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_symbol: Option<bool>,
    /// Renderer-level sampling hint, attached once a line series was reduced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampling: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol_size: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Series {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: Some(kind.into()), ..Default::default() }
    }

    pub fn with_points(kind: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            kind: Some(kind.into()),
            data: Some(SeriesData::Points(points)),
            ..Default::default()
        }
    }

    pub fn with_optimization(mut self, options: OptimizeOptions) -> Self {
        self.optimization = Some(options);
        self
    }

    /// Point view of the payload; `None` when absent or opaque.
    pub fn points(&self) -> Option<&[Point]> {
        self.data.as_ref().and_then(SeriesData::as_points)
    }

    /// Point count, 0 when the payload is absent or opaque.
    pub fn len(&self) -> usize {
        self.points().map(<[Point]>::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Payload of `Series::data`. Anything that is not a well-formed point
/// list is carried as `Opaque` and never touched: malformed input degrades
/// to pass-through rather than failing the chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesData {
    Points(Vec<Point>),
    Opaque(Value),
}

impl SeriesData {
    pub fn as_points(&self) -> Option<&[Point]> {
        match self {
            SeriesData::Points(points) => Some(points),
            SeriesData::Opaque(_) => None,
        }
    }
}

/// Line styling subset the optimizer touches; unknown style fields ride
/// along in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
