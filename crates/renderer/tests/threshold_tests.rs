//! Tests for equal-width temperature bucketing.
//!
//! Covers breakpoint placement, boundary behavior, monotonicity and the
//! degenerate (zero-width) range.

use heatmap_common::{Color, Palette, TemperatureRange};
use renderer::scale::{equal_width_breakpoints, ThresholdScale};

fn indices(n: usize) -> Vec<usize> {
    (0..n).collect()
}

// ============================================================================
// Breakpoint tests
// ============================================================================

#[test]
fn test_breakpoints_count_and_order() {
    for n in 2..=16 {
        let range = TemperatureRange::new(1.684, 13.888);
        let breaks = equal_width_breakpoints(range, n);

        assert_eq!(breaks.len(), n - 1, "palette size {}", n);
        assert!(
            breaks.windows(2).all(|w| w[0] < w[1]),
            "breakpoints not strictly increasing for n={}: {:?}",
            n,
            breaks
        );
        assert!(breaks.iter().all(|b| *b > range.min && *b < range.max));
    }
}

#[test]
fn test_breakpoints_equal_width() {
    let range = TemperatureRange::new(-3.0, 8.0);
    let breaks = equal_width_breakpoints(range, 11);
    for (i, b) in breaks.iter().enumerate() {
        let expected = -3.0 + (i + 1) as f64;
        assert!((b - expected).abs() < 1e-12, "breakpoint {} = {}", i, b);
    }
}

#[test]
fn test_breakpoints_ignore_distribution() {
    // Same range, wildly different data: breakpoints only depend on min/max
    let a = equal_width_breakpoints(TemperatureRange::new(0.0, 100.0), 4);
    assert_eq!(a, vec![25.0, 50.0, 75.0]);
}

// ============================================================================
// Lookup tests
// ============================================================================

#[test]
fn test_every_bucket_is_reachable() {
    for n in 2..=12 {
        let range = TemperatureRange::new(2.0, 14.0);
        let scale = ThresholdScale::equal_width(range, indices(n));
        let width = range.span() / n as f64;

        for k in 0..n {
            let middle = range.min + (k as f64 + 0.5) * width;
            assert_eq!(*scale.apply(middle), k, "n={} bucket {}", n, k);
        }
    }
}

#[test]
fn test_range_ends_map_to_palette_ends() {
    let palette = Palette::default();
    let range = TemperatureRange::new(1.684, 13.888);
    let scale = ThresholdScale::equal_width(range, palette.colors.clone());

    assert_eq!(scale.apply(range.min), &palette.colors[0]);
    assert_eq!(scale.apply(range.max), &palette.colors[10]);
}

#[test]
fn test_total_over_real_line() {
    let scale = ThresholdScale::equal_width(TemperatureRange::new(0.0, 1.0), indices(5));
    assert_eq!(*scale.apply(f64::NEG_INFINITY), 0);
    assert_eq!(*scale.apply(-1e300), 0);
    assert_eq!(*scale.apply(1e300), 4);
    assert_eq!(*scale.apply(f64::INFINITY), 4);
}

#[test]
fn test_monotonic() {
    let range = TemperatureRange::new(-10.0, 30.0);
    let scale = ThresholdScale::equal_width(range, indices(11));

    let mut previous = 0;
    let mut t = -20.0;
    while t <= 40.0 {
        let k = scale.bucket(t);
        assert!(k >= previous, "bucket dropped from {} to {} at {}", previous, k, t);
        previous = k;
        t += 0.01;
    }
    assert_eq!(previous, 10);
}

#[test]
fn test_deterministic() {
    let range = TemperatureRange::new(1.684, 13.888);
    let a = ThresholdScale::equal_width(range, indices(11));
    let b = ThresholdScale::equal_width(range, indices(11));
    assert_eq!(a, b);
    for t in [1.684, 5.0, 7.77, 13.888] {
        assert_eq!(a.bucket(t), b.bucket(t));
    }
}

// ============================================================================
// Degenerate range tests
// ============================================================================

#[test]
fn test_degenerate_range_uses_first_color() {
    let palette = Palette::default();
    let range = TemperatureRange::new(9.16, 9.16);
    let scale = ThresholdScale::equal_width(range, palette.colors.clone());

    assert!(scale.breakpoints().is_empty());
    assert!(scale.breakpoints().iter().all(|b| !b.is_nan()));
    for t in [-100.0, 9.16, 100.0] {
        assert_eq!(scale.apply(t), &palette.colors[0]);
    }
}

#[test]
fn test_two_color_palette() {
    let colors = vec![Color::hex("#000000"), Color::hex("#ffffff")];
    let scale = ThresholdScale::equal_width(TemperatureRange::new(0.0, 10.0), colors);
    assert_eq!(scale.breakpoints(), &[5.0]);
    assert_eq!(scale.apply(4.999).to_css(), "#000000");
    assert_eq!(scale.apply(5.0).to_css(), "#ffffff");
}

// ============================================================================
// Extreme range tests
// ============================================================================

#[test]
fn test_one_ulp_range_keeps_minimum_in_first_bucket() {
    let palette = Palette::default();
    let range = TemperatureRange::new(1.0, 1.0 + f64::EPSILON);
    let scale = ThresholdScale::equal_width(range, palette.colors.clone());

    // eleven buckets cannot fit in one ULP: no duplicate breakpoints
    assert!(scale.breakpoints().windows(2).all(|w| w[0] < w[1]));
    assert!(scale.breakpoints().iter().all(|b| *b > range.min));
    assert_eq!(scale.bucket(range.min), 0);
    assert_eq!(scale.apply(range.min), &palette.colors[0]);
}

#[test]
fn test_narrow_range_with_room_for_buckets() {
    // 1.0 + 16 ULPs fits ten distinct breakpoints
    let range = TemperatureRange::new(1.0, 1.0 + 16.0 * f64::EPSILON);
    let scale = ThresholdScale::equal_width(range, indices(11));

    let breaks = scale.breakpoints();
    assert_eq!(breaks.len(), 10);
    assert!(breaks.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(scale.bucket(range.min), 0);
    assert_eq!(scale.bucket(range.max), 10);
}

#[test]
fn test_wide_range_does_not_overflow() {
    let palette = Palette::default();
    let range = TemperatureRange::new(-1.7e308, 1.7e308);
    let scale = ThresholdScale::equal_width(range, palette.colors.clone());

    let breaks = scale.breakpoints();
    assert_eq!(breaks.len(), 10);
    assert!(breaks.iter().all(|b| b.is_finite()));
    assert!(breaks.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(scale.apply(range.min), &palette.colors[0]);
    assert_eq!(scale.apply(0.0), &palette.colors[5]);
    assert_eq!(scale.apply(range.max), &palette.colors[10]);
}
