//! Monthly temperature variance dataset.
//!
//! The wire format is the global land-surface temperature JSON document:
//!
//! ```json
//! { "baseTemperature": 8.66,
//!   "monthlyVariance": [ { "year": 1753, "month": 1, "variance": -1.366 }, ... ] }
//! ```
//!
//! [`RawDataset`] mirrors the wire format as-is. Converting it into a
//! [`Dataset`] is the validation boundary: everything downstream may assume
//! months are in 1..=12 and all numbers are finite.

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};

/// Dataset exactly as it arrives over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<RawDataPoint>,
}

/// One unvalidated monthly record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDataPoint {
    pub year: i32,
    /// 1-based month; widened so that out-of-range values survive decoding
    /// and get reported by validation instead of a serde error.
    pub month: i64,
    pub variance: f64,
}

/// A validated monthly record.
///
/// Only [`RawDataset`] is deserializable; records reach the renderer through
/// the validating `TryFrom` conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataPoint {
    pub year: i32,
    /// 1-based month (1 = January)
    pub month: u8,
    /// Offset from the dataset's base temperature in °C
    pub variance: f64,
}

impl DataPoint {
    /// Zero-based month index used for band positioning, `None` for a month
    /// outside 1-12.
    pub fn month_index(&self) -> Option<usize> {
        (1..=12)
            .contains(&self.month)
            .then(|| usize::from(self.month) - 1)
    }

    /// Absolute temperature for this record.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        base_temperature + self.variance
    }
}

/// Validated dataset, immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub base_temperature: f64,
    pub records: Vec<DataPoint>,
}

impl Dataset {
    /// Decode and validate a dataset from JSON bytes.
    pub fn from_json_bytes(bytes: &[u8]) -> HeatmapResult<Self> {
        let raw: RawDataset = serde_json::from_slice(bytes)?;
        Self::try_from(raw)
    }

    /// Decode and validate a dataset from a JSON string.
    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        Self::from_json_bytes(json.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Absolute temperature of a record.
    pub fn temperature_of(&self, point: &DataPoint) -> f64 {
        point.temperature(self.base_temperature)
    }

    /// Observed absolute temperature range.
    ///
    /// An empty dataset yields the degenerate range `[base, base]`.
    pub fn temperature_range(&self) -> TemperatureRange {
        if self.records.is_empty() {
            return TemperatureRange::new(self.base_temperature, self.base_temperature);
        }

        let (min_variance, max_variance) = self.records.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), p| (min.min(p.variance), max.max(p.variance)),
        );

        TemperatureRange::new(
            self.base_temperature + min_variance,
            self.base_temperature + max_variance,
        )
    }

    /// Distinct years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|p| p.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// First and last year covered, if any.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let first = self.records.iter().map(|p| p.year).min()?;
        let last = self.records.iter().map(|p| p.year).max()?;
        Some((first, last))
    }
}

impl TryFrom<RawDataset> for Dataset {
    type Error = HeatmapError;

    fn try_from(raw: RawDataset) -> Result<Self, Self::Error> {
        if !raw.base_temperature.is_finite() {
            return Err(HeatmapError::InvalidBaseTemperature(raw.base_temperature));
        }

        let records = raw
            .monthly_variance
            .into_iter()
            .enumerate()
            .map(|(index, p)| validate_point(index, p))
            .collect::<HeatmapResult<Vec<_>>>()?;

        Ok(Self {
            base_temperature: raw.base_temperature,
            records,
        })
    }
}

fn validate_point(index: usize, raw: RawDataPoint) -> HeatmapResult<DataPoint> {
    let month = u8::try_from(raw.month)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| HeatmapError::InvalidRecord {
            index,
            message: format!("month {} is outside 1-12", raw.month),
        })?;

    if !raw.variance.is_finite() {
        return Err(HeatmapError::InvalidRecord {
            index,
            message: format!("variance {} is not finite", raw.variance),
        });
    }

    Ok(DataPoint {
        year: raw.year,
        month,
        variance: raw.variance,
    })
}

/// Closed range of absolute temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub min: f64,
    pub max: f64,
}

impl TemperatureRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// A range with no width cannot be split into buckets.
    pub fn is_degenerate(&self) -> bool {
        !(self.span() > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "baseTemperature": 8.66,
        "monthlyVariance": [
            {"year": 1753, "month": 1, "variance": -1.366},
            {"year": 1753, "month": 2, "variance": -2.223},
            {"year": 1754, "month": 1, "variance": 0.5}
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        assert_eq!(dataset.base_temperature, 8.66);
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.records[1].month, 2);
        assert_eq!(dataset.records[1].month_index(), Some(1));
        assert_eq!(dataset.years(), vec![1753, 1754]);
        assert_eq!(dataset.year_span(), Some((1753, 1754)));
    }

    #[test]
    fn test_temperature_range() {
        let dataset = Dataset::from_json(SAMPLE).unwrap();
        let range = dataset.temperature_range();
        assert!((range.min - (8.66 - 2.223)).abs() < 1e-12);
        assert!((range.max - 9.16).abs() < 1e-12);
        assert!(!range.is_degenerate());
    }

    #[test]
    fn test_empty_dataset_is_degenerate() {
        let dataset = Dataset::from_json(r#"{"baseTemperature": 8.66, "monthlyVariance": []}"#)
            .unwrap();
        let range = dataset.temperature_range();
        assert_eq!(range, TemperatureRange::new(8.66, 8.66));
        assert!(range.is_degenerate());
        assert_eq!(dataset.year_span(), None);
    }

    #[test]
    fn test_rejects_month_out_of_range() {
        for month in [0, 13, -1] {
            let json = format!(
                r#"{{"baseTemperature": 8.66, "monthlyVariance": [
                    {{"year": 1753, "month": 1, "variance": 0.1}},
                    {{"year": 1753, "month": {}, "variance": 0.1}}
                ]}}"#,
                month
            );
            match Dataset::from_json(&json) {
                Err(HeatmapError::InvalidRecord { index, .. }) => assert_eq!(index, 1),
                other => panic!("expected invalid record for month {}, got {:?}", month, other),
            }
        }
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Dataset::from_json(r#"{"baseTemperature": "warm"}"#).unwrap_err();
        assert!(matches!(err, HeatmapError::DecodeError(_)));
    }

    #[test]
    fn test_month_index_bounds() {
        let point = |month| DataPoint {
            year: 1753,
            month,
            variance: 0.0,
        };
        assert_eq!(point(1).month_index(), Some(0));
        assert_eq!(point(12).month_index(), Some(11));
        assert_eq!(point(0).month_index(), None);
        assert_eq!(point(13).month_index(), None);
    }

    #[test]
    fn test_data_point_temperature() {
        let point = DataPoint {
            year: 1753,
            month: 1,
            variance: -6.9,
        };
        assert!((point.temperature(8.66) - 1.76).abs() < 1e-9);
    }
}
