#![allow(clippy::float_cmp)]

use super::*;

const SAMPLES: [f64; 9] = [0.0, 1.0, 11.9, 12.0, 23.99, -7.3, 1234.567, -0.49, 99_999.5];

fn is_multiple(value: f64, grid: f64) -> bool {
    (value / grid).fract() == 0.0
}

#[test]
fn snaps_to_nearest_multiple() {
    assert_eq!(snap_value(13.0, 24.0), 24.0);
    assert_eq!(snap_value(11.0, 24.0), 0.0);
    assert_eq!(snap_value(-13.0, 24.0), -24.0);
}

#[test]
fn snapped_values_are_exact_multiples() {
    for grid in [24.0, 12.5, 1.0] {
        for v in SAMPLES {
            let s = snap_value(v, grid);
            assert!(is_multiple(s, grid), "{v} snapped to {s} is not a multiple of {grid}");
        }
    }
}

#[test]
fn snapping_is_idempotent() {
    for grid in [24.0, 12.5, 1.0] {
        for v in SAMPLES {
            let once = snap_value(v, grid);
            assert_eq!(snap_value(once, grid), once);
        }
    }
}

#[test]
fn non_positive_grid_passes_through() {
    assert_eq!(snap_value(13.3, 0.0), 13.3);
    assert_eq!(snap_value(13.3, -5.0), 13.3);
    assert_eq!(snap_value(13.3, f64::NAN), 13.3);
}

#[test]
fn snap_point_snaps_both_axes() {
    assert_eq!(snap_point(Point::new(30.0, 40.0), 24.0), Point::new(24.0, 48.0));
}

#[test]
fn default_grid_is_one_foot() {
    let s = SnapSettings::default();
    assert_eq!(s.grid_px, inches_to_px(12.0));
    assert!(s.enabled);
    assert!(s.grid_visible);
}

#[test]
fn apply_respects_enabled_flag() {
    let mut s = SnapSettings::default();
    let p = Point::new(30.0, 40.0);
    assert_eq!(s.apply(p), Point::new(24.0, 48.0));
    s.toggle_enabled();
    assert_eq!(s.apply(p), p);
}

#[test]
fn toggles_are_independent() {
    let mut s = SnapSettings::default();
    s.toggle_grid();
    assert!(!s.grid_visible);
    assert!(s.enabled);
    s.toggle_enabled();
    s.toggle_grid();
    assert!(s.grid_visible);
    assert!(!s.enabled);
}
