//! Synthetic dataset generators.
//!
//! These produce predictable, fully populated year × month grids so tests can
//! reason about exact cell counts and temperature ranges.

use heatmap_common::{DataPoint, Dataset};

use crate::fixtures::BASE_TEMPERATURE;

/// Creates a dataset covering every month of `first_year..=last_year`, with
/// the variance of each record produced by `variance(year, month)`.
///
/// Records are ordered by year, then month, like the upstream dataset.
pub fn synthetic_dataset<F>(first_year: i32, last_year: i32, variance: F) -> Dataset
where
    F: Fn(i32, u8) -> f64,
{
    let records = (first_year..=last_year)
        .flat_map(|year| (1..=12u8).map(move |month| (year, month)))
        .map(|(year, month)| DataPoint {
            year,
            month,
            variance: variance(year, month),
        })
        .collect();

    Dataset {
        base_temperature: BASE_TEMPERATURE,
        records,
    }
}

/// Creates a dataset with a warming trend and a seasonal cycle.
///
/// Variance starts near -1.5°C, rises by 0.01°C per year and swings ±1°C
/// over the year, peaking in July.
///
/// # Example
///
/// ```
/// use test_utils::warming_dataset;
///
/// let dataset = warming_dataset(1753, 2015);
/// assert_eq!(dataset.records.len(), (2015 - 1753 + 1) * 12);
/// ```
pub fn warming_dataset(first_year: i32, last_year: i32) -> Dataset {
    synthetic_dataset(first_year, last_year, |year, month| {
        let trend = (year - first_year) as f64 * 0.01;
        let season = ((f64::from(month) - 7.0) / 6.0 * std::f64::consts::PI).cos();
        -1.5 + trend + season
    })
}

/// Serializes a dataset into the upstream wire format.
pub fn to_wire_json(dataset: &Dataset) -> String {
    let records: Vec<serde_json::Value> = dataset
        .records
        .iter()
        .map(|p| {
            serde_json::json!({
                "year": p.year,
                "month": p.month,
                "variance": p.variance,
            })
        })
        .collect();

    serde_json::json!({
        "baseTemperature": dataset.base_temperature,
        "monthlyVariance": records,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_dataset_shape() {
        let dataset = synthetic_dataset(2000, 2002, |_, month| f64::from(month));
        assert_eq!(dataset.records.len(), 36);
        assert_eq!(dataset.records[0].year, 2000);
        assert_eq!(dataset.records[35].month, 12);
        assert_eq!(dataset.records[13].variance, 2.0);
    }

    #[test]
    fn test_wire_json_round_trips() {
        let dataset = warming_dataset(1990, 1991);
        let decoded = Dataset::from_json(&to_wire_json(&dataset)).unwrap();
        assert_eq!(decoded, dataset);
    }
}
