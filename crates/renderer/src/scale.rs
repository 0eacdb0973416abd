//! Scales mapping data values onto chart coordinates and colors.
//!
//! - [`BandScale`]: ordinal values onto equal-width bands (years, months)
//! - [`LinearScale`]: continuous values onto a pixel range (legend)
//! - [`ThresholdScale`]: continuous values onto discrete outputs (palette)

use std::collections::HashMap;
use std::hash::Hash;

use heatmap_common::TemperatureRange;
use serde::Serialize;

/// Ordinal scale dividing a pixel range into equal-width bands, one per
/// distinct domain value, with no padding between bands.
#[derive(Debug, Clone)]
pub struct BandScale<T> {
    domain: Vec<T>,
    index: HashMap<T, usize>,
    range: (f64, f64),
    step: f64,
}

impl<T: Copy + Eq + Hash> BandScale<T> {
    /// Build a band scale. Duplicate domain values keep their first position.
    pub fn new(domain: impl IntoIterator<Item = T>, range: (f64, f64)) -> Self {
        let mut values = Vec::new();
        let mut index = HashMap::new();
        for value in domain {
            if !index.contains_key(&value) {
                index.insert(value, values.len());
                values.push(value);
            }
        }

        let n = values.len().max(1) as f64;
        let step = (range.1 - range.0) / n;

        Self {
            domain: values,
            index,
            range,
            step,
        }
    }

    /// Start offset of the band for `value`, `None` if not in the domain.
    pub fn position(&self, value: T) -> Option<f64> {
        self.index
            .get(&value)
            .map(|&i| self.range.0 + i as f64 * self.step)
    }

    /// Center of the band for `value`, where axis ticks are drawn.
    pub fn center(&self, value: T) -> Option<f64> {
        self.position(value).map(|p| p + self.step / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// Continuous linear mapping from a value domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a value onto the range. A zero-width domain maps everything to the
    /// middle of the range.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span.is_infinite() && d0.is_finite() && d1.is_finite() {
            (value / 2.0 - d0 / 2.0) / (d1 / 2.0 - d0 / 2.0)
        } else if span != 0.0 && span.is_finite() {
            (value - d0) / span
        } else {
            0.5
        };
        r0 + t * (r1 - r0)
    }
}

/// Step function mapping a continuous value to one of the outputs, based on
/// sorted breakpoints. A value selects output `k`, where `k` is the number of
/// breakpoints less than or equal to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale<T> {
    breakpoints: Vec<f64>,
    outputs: Vec<T>,
}

impl<T> ThresholdScale<T> {
    /// Create a threshold scale.
    ///
    /// `outputs` must not be empty. If there are fewer than
    /// `breakpoints.len() + 1` outputs, upper buckets reuse the last output.
    pub fn new(breakpoints: Vec<f64>, outputs: Vec<T>) -> Self {
        debug_assert!(!outputs.is_empty());
        Self {
            breakpoints,
            outputs,
        }
    }

    /// Split a temperature range into `outputs.len()` equal-width buckets.
    pub fn equal_width(range: TemperatureRange, outputs: Vec<T>) -> Self {
        let breakpoints = equal_width_breakpoints(range, outputs.len());
        Self::new(breakpoints, outputs)
    }

    /// Index of the bucket `value` falls into. NaN selects bucket 0.
    pub fn bucket(&self, value: f64) -> usize {
        let k = self.breakpoints.partition_point(|&b| b <= value);
        k.min(self.outputs.len().saturating_sub(1))
    }

    /// Output for `value`.
    pub fn apply(&self, value: f64) -> &T {
        &self.outputs[self.bucket(value)]
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn outputs(&self) -> &[T] {
        &self.outputs
    }
}

/// Breakpoints splitting `range` into `count` equal-width intervals:
/// `min + i * (max - min) / count` for `i` in `1..count`.
///
/// A degenerate range (or fewer than two buckets) has no breakpoints, so
/// every value falls into the first bucket. The same holds for a range too
/// narrow to hold `count - 1` distinct breakpoints above `min`.
pub fn equal_width_breakpoints(range: TemperatureRange, count: usize) -> Vec<f64> {
    if count < 2 || range.is_degenerate() || !range.min.is_finite() || !range.max.is_finite() {
        return Vec::new();
    }

    let n = count as f64;
    let step = range.span() / n;
    let breakpoints: Vec<f64> = if step.is_finite() {
        (1..count).map(|i| range.min + i as f64 * step).collect()
    } else {
        // max - min overflows; interpolate instead
        (1..count)
            .map(|i| {
                let t = i as f64 / n;
                range.min * (1.0 - t) + range.max * t
            })
            .collect()
    };

    let separated = breakpoints.first().is_some_and(|&b| b > range.min)
        && breakpoints.last().is_some_and(|&b| b <= range.max)
        && breakpoints.windows(2).all(|w| w[0] < w[1]);

    if separated {
        breakpoints
    } else {
        Vec::new()
    }
}

/// Decimal places a linear axis with about `count` ticks over `[start, stop]`
/// would use for its labels.
pub fn tick_precision(start: f64, stop: f64, count: usize) -> usize {
    let span = (stop - start).abs();
    if count == 0 || !(span > 0.0) || !span.is_finite() {
        return 0;
    }

    let step = span / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let exponent = if error >= 50f64.sqrt() {
        power + 1.0
    } else {
        power
    };

    if exponent >= 0.0 {
        0
    } else {
        (-exponent) as usize
    }
}
