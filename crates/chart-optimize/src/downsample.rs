// File: crates/chart-optimize/src/downsample.rs
// Summary: Downsampling reducers: LTTB plus bucket aggregates (average, max, min, sum, first).

use crate::options::SamplingMethod;
use crate::point::Point;

/// Reduce `data` to at most `target` points with the given method.
///
/// `target` is clamped to 2 so a reduction always keeps a drawable pair of
/// points. Series at or below the target are returned as-is.
pub fn downsample(data: &[Point], method: SamplingMethod, target: usize) -> Vec<Point> {
    let target = target.max(2);
    if data.len() <= target {
        return data.to_vec();
    }
    match method {
        SamplingMethod::Lttb => reduce_lttb(data, target),
        SamplingMethod::Average => reduce_average(data, target),
        SamplingMethod::Max => reduce_max(data, target),
        SamplingMethod::Min => reduce_min(data, target),
        SamplingMethod::Sum => reduce_sum(data, target),
        SamplingMethod::First => reduce_first(data, target),
    }
}

/// Index bounds of bucket `i` when `n` points split into `target` equal-width
/// buckets. Boundaries floor, and the last bucket absorbs the remainder.
fn bucket_bounds(n: usize, target: usize, i: usize) -> (usize, usize) {
    let width = n as f64 / target as f64;
    let start = (i as f64 * width) as usize;
    let end = if i + 1 == target {
        n
    } else {
        ((i + 1) as f64 * width) as usize
    };
    (start, end)
}

fn reduce_summed(data: &[Point], target: usize, mean: bool) -> Vec<Point> {
    if target == 0 || data.is_empty() {
        return Vec::new();
    }
    let n = data.len();
    if n <= target {
        return data.to_vec();
    }

    let mut out = Vec::with_capacity(target);
    for i in 0..target {
        let (start, end) = bucket_bounds(n, target, i);
        let mut sum = 0.0;
        for p in &data[start..end] {
            sum += p.y();
        }
        let agg = if mean { sum / (end - start) as f64 } else { sum };
        // The bucket's midpoint element lends its shape to the output.
        let mid = (start + end) / 2;
        out.push(data[mid].carry_aggregate(agg));
    }
    out
}

/// One point per bucket carrying the bucket's mean y value.
pub fn reduce_average(data: &[Point], target: usize) -> Vec<Point> {
    reduce_summed(data, target, true)
}

/// One point per bucket carrying the bucket's summed y value.
pub fn reduce_sum(data: &[Point], target: usize) -> Vec<Point> {
    reduce_summed(data, target, false)
}

fn reduce_extreme(data: &[Point], target: usize, want_max: bool) -> Vec<Point> {
    if target == 0 || data.is_empty() {
        return Vec::new();
    }
    let n = data.len();
    if n <= target {
        return data.to_vec();
    }

    let mut out = Vec::with_capacity(target);
    for i in 0..target {
        let (start, end) = bucket_bounds(n, target, i);
        let mut best = start;
        let mut best_y = data[start].y();
        for k in start + 1..end {
            let y = data[k].y();
            // Strict comparison: ties keep the earliest point.
            let better = if want_max { y > best_y } else { y < best_y };
            if better {
                best = k;
                best_y = y;
            }
        }
        out.push(data[best].clone());
    }
    out
}

/// The original point with the largest y in each bucket.
pub fn reduce_max(data: &[Point], target: usize) -> Vec<Point> {
    reduce_extreme(data, target, true)
}

/// The original point with the smallest y in each bucket.
pub fn reduce_min(data: &[Point], target: usize) -> Vec<Point> {
    reduce_extreme(data, target, false)
}

/// The first point of each bucket.
pub fn reduce_first(data: &[Point], target: usize) -> Vec<Point> {
    if target == 0 || data.is_empty() {
        return Vec::new();
    }
    let n = data.len();
    if n <= target {
        return data.to_vec();
    }

    let mut out = Vec::with_capacity(target);
    for i in 0..target {
        let (start, _) = bucket_bounds(n, target, i);
        out.push(data[start].clone());
    }
    out
}

/// Largest-Triangle-Three-Buckets reduction.
///
/// The first and last points always survive. Interior points split into
/// `target - 2` buckets; in each bucket the point forming the largest
/// triangle with the previously kept point and the bucket's own average
/// is kept. Output order follows input order.
pub fn reduce_lttb(data: &[Point], target: usize) -> Vec<Point> {
    let n = data.len();
    if target == 0 || n == 0 {
        return Vec::new();
    }
    if n <= target || n <= 2 {
        return data.to_vec();
    }
    if target == 1 {
        return vec![data[0].clone()];
    }
    if target == 2 {
        return vec![data[0].clone(), data[n - 1].clone()];
    }

    let bucket_count = target - 2;
    let width = (n - 2) as f64 / bucket_count as f64;

    let mut sampled = Vec::with_capacity(target);
    sampled.push(data[0].clone());

    let mut a = 0usize;
    for i in 0..bucket_count {
        let start = (i as f64 * width) as usize + 1;
        let end = (((i + 1) as f64 * width) as usize + 1)
            .min(n - 1)
            .max(start + 1);

        // Average of the bucket itself anchors the triangle's third corner.
        let count = (end - start) as f64;
        let mut cx = 0.0;
        let mut cy = 0.0;
        for k in start..end {
            cx += data[k].x(k);
            cy += data[k].y();
        }
        cx /= count;
        cy /= count;

        let ax = data[a].x(a);
        let ay = data[a].y();

        let mut max_area = -1.0f64;
        let mut max_idx = start;
        for b in start..end {
            let bx = data[b].x(b);
            let by = data[b].y();
            let area = ((ax - cx) * (by - ay) - (ax - bx) * (cy - ay)).abs() * 0.5;
            if area > max_area {
                max_area = area;
                max_idx = b;
            }
        }

        sampled.push(data[max_idx].clone());
        a = max_idx;
    }

    sampled.push(data[n - 1].clone());
    sampled
}
