// File: crates/chart-optimize/src/chart.rs
// Summary: Chart description value: series list, data-zoom controls, renderer flags, JSON boundary.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::OptimizeError;
use crate::series::Series;

/// Single value or list. Chart descriptions allow both for `series` and
/// `dataZoom`; the incoming shape is preserved on output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(v) => std::slice::from_ref(v),
            OneOrMany::Many(v) => v.as_slice(),
        }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            OneOrMany::One(v) => std::slice::from_mut(v),
            OneOrMany::Many(v) => v.as_mut_slice(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            OneOrMany::One(_) => 1,
            OneOrMany::Many(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The chart description the engine consumes and produces. Only the parts
/// the optimizer reads or writes are typed; the rest of the description
/// (titles, axes, tooltips, ...) rides in `extra` untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<OneOrMany<Series>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_zoom: Option<OneOrMany<DataZoom>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progressive: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renderer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_dirty_rect: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChartDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(series: Vec<Series>) -> Self {
        Self { series: Some(OneOrMany::Many(series)), ..Default::default() }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series = Some(match self.series.take() {
            None => OneOrMany::Many(vec![series]),
            Some(OneOrMany::One(first)) => OneOrMany::Many(vec![first, series]),
            Some(OneOrMany::Many(mut list)) => {
                list.push(series);
                OneOrMany::Many(list)
            }
        });
    }

    /// All series, regardless of single-vs-list input shape.
    pub fn series_slice(&self) -> &[Series] {
        self.series.as_ref().map(OneOrMany::as_slice).unwrap_or(&[])
    }

    pub fn from_json(json: &str) -> Result<Self, OptimizeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, OptimizeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, OptimizeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Interactive viewport (data-zoom) control entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataZoom {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throttle: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DataZoom {
    /// The full-range inside control the optimizer injects when a
    /// description has no data zoom of its own.
    pub fn inside(throttle: u32) -> Self {
        Self {
            kind: Some("inside".to_string()),
            start: Some(0.0),
            end: Some(100.0),
            throttle: Some(throttle),
            extra: Map::new(),
        }
    }
}
