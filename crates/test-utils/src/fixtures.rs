//! Common test fixtures for heatmap tests.
//!
//! Values are taken from the head of the published global land-surface
//! temperature dataset so expectations can be checked by hand.

/// Base temperature of the published dataset, in °C.
pub const BASE_TEMPERATURE: f64 = 8.66;

/// First months of 1753 in the upstream wire format.
pub const SAMPLE_JSON: &str = r#"{
    "baseTemperature": 8.66,
    "monthlyVariance": [
        {"year": 1753, "month": 1, "variance": -1.366},
        {"year": 1753, "month": 2, "variance": -2.223},
        {"year": 1753, "month": 3, "variance": 0.211},
        {"year": 1753, "month": 4, "variance": -0.843},
        {"year": 1753, "month": 5, "variance": -0.771},
        {"year": 1753, "month": 6, "variance": -0.515},
        {"year": 1753, "month": 7, "variance": -1.355},
        {"year": 1753, "month": 8, "variance": 0.234},
        {"year": 1753, "month": 9, "variance": -0.342},
        {"year": 1753, "month": 10, "variance": -1.339},
        {"year": 1753, "month": 11, "variance": -0.948},
        {"year": 1753, "month": 12, "variance": -0.724}
    ]
}"#;

/// Dataset with no records.
pub const EMPTY_JSON: &str = r#"{"baseTemperature": 8.66, "monthlyVariance": []}"#;

/// Dataset whose records all share one variance.
pub const FLAT_JSON: &str = r#"{
    "baseTemperature": 8.66,
    "monthlyVariance": [
        {"year": 1900, "month": 1, "variance": 0.5},
        {"year": 1900, "month": 2, "variance": 0.5},
        {"year": 1901, "month": 1, "variance": 0.5}
    ]
}"#;

/// Well-formed JSON with a month outside 1-12 in record 1.
pub const BAD_MONTH_JSON: &str = r#"{
    "baseTemperature": 8.66,
    "monthlyVariance": [
        {"year": 1900, "month": 1, "variance": 0.5},
        {"year": 1900, "month": 13, "variance": 0.5}
    ]
}"#;

/// A coldest and a warmest record spanning the full observed range of the
/// published dataset (1.684°C to 13.888°C).
pub const EXTREMES_JSON: &str = r#"{
    "baseTemperature": 8.66,
    "monthlyVariance": [
        {"year": 1753, "month": 1, "variance": -6.976},
        {"year": 2007, "month": 1, "variance": 5.228}
    ]
}"#;
