// File: crates/chart-optimize/src/point.rs
// Summary: Heterogeneous point model (scalar, pair, keyed object) with numeric accessors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single datum of a series. Data arrays mix bare numbers, `[x, y]`
/// pairs and keyed objects; `Null` marks a gap entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Point {
    Scalar(f64),
    Pair(f64, f64),
    Keyed(KeyedPoint),
    Null,
}

/// Object-form point. Only `x`/`y`/`value` are read by the engine; every
/// other field rides along in `extra` and is written back verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyedPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Point {
    /// Keyed-object convenience constructor carrying only a `value`.
    pub fn value(v: f64) -> Self {
        Point::Keyed(KeyedPoint { value: Some(v), ..Default::default() })
    }

    /// X position: `x` field when keyed and present, the pair's first
    /// element, else the point's index in the series.
    pub fn x(&self, index: usize) -> f64 {
        match self {
            Point::Keyed(KeyedPoint { x: Some(x), .. }) => *x,
            Point::Pair(x, _) => *x,
            _ => index as f64,
        }
    }

    /// Y value: the scalar itself, the pair's second element, or the first
    /// present of `y`/`value` on a keyed point. Gaps read as 0.
    pub fn y(&self) -> f64 {
        match self {
            Point::Scalar(v) => *v,
            Point::Pair(_, y) => *y,
            Point::Keyed(k) => k.y.or(k.value).unwrap_or(0.0),
            Point::Null => 0.0,
        }
    }

    /// Rebuild this point as the carrier of an aggregated value: keyed
    /// points get `agg` written into `value` (with `y` cleared, since the
    /// y-accessor prefers `y` over `value`), pairs keep their x anchor,
    /// everything else collapses to a scalar.
    pub fn carry_aggregate(&self, agg: f64) -> Point {
        match self {
            Point::Keyed(k) => {
                let mut out = k.clone();
                out.value = Some(agg);
                out.y = None;
                Point::Keyed(out)
            }
            Point::Pair(x, _) => Point::Pair(*x, agg),
            _ => Point::Scalar(agg),
        }
    }
}
