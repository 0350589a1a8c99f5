#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_distance() {
    assert_eq!(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0);
}

#[test]
fn point_add_sub_inverse() {
    let a = Point::new(1.5, -2.0);
    let b = Point::new(4.0, 8.0);
    assert!(point_approx_eq(a.add(b).sub(b), a));
}

// --- Bounds ---

#[test]
fn bounds_contains_edges() {
    let b = Bounds::new(0.0, 0.0, 10.0, 5.0);
    assert!(b.contains(Point::new(0.0, 0.0)));
    assert!(b.contains(Point::new(10.0, 5.0)));
    assert!(!b.contains(Point::new(10.1, 5.0)));
}

#[test]
fn bounds_expand_and_clamp() {
    let b = Bounds::new(0.0, 0.0, 10.0, 10.0).expand(2.0);
    assert_eq!(b, Bounds::new(-2.0, -2.0, 12.0, 12.0));
    assert_eq!(b.clamp(Point::new(50.0, -50.0)), Point::new(12.0, -2.0));
}

#[test]
fn bounds_include_grows() {
    let b = Bounds::new(0.0, 0.0, 1.0, 1.0).include(Point::new(-3.0, 4.0));
    assert_eq!(b, Bounds::new(-3.0, 0.0, 1.0, 4.0));
}

// --- Camera conversions ---

#[test]
fn default_camera_is_identity() {
    let cam = Camera::default();
    let p = Point::new(12.0, 34.0);
    assert!(point_approx_eq(cam.screen_to_world(p), p));
    assert!(point_approx_eq(cam.world_to_screen(p), p));
}

#[test]
fn screen_world_round_trip_with_pan_and_zoom() {
    let cam = Camera { pan_x: 40.0, pan_y: -15.0, zoom: 2.5 };
    let p = Point::new(100.0, 200.0);
    assert!(point_approx_eq(cam.world_to_screen(cam.screen_to_world(p)), p));
}

#[test]
fn screen_dist_scales_with_zoom() {
    let cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 4.0 };
    assert_eq!(cam.screen_dist_to_world(8.0), 2.0);
}

// --- Pan / zoom ---

#[test]
fn pan_by_accumulates() {
    let mut cam = Camera::default();
    cam.pan_by(5.0, 6.0);
    cam.pan_by(-1.0, 1.0);
    assert_eq!(cam.pan_x, 4.0);
    assert_eq!(cam.pan_y, 7.0);
}

#[test]
fn zoom_by_keeps_focus_point_fixed() {
    let mut cam = Camera { pan_x: 10.0, pan_y: 20.0, zoom: 1.0 };
    let focus = Point::new(300.0, 200.0);
    let before = cam.screen_to_world(focus);
    cam.zoom_by(1.2, focus);
    assert!(approx_eq(cam.zoom, 1.2));
    assert!(point_approx_eq(cam.screen_to_world(focus), before));
}

#[test]
fn zoom_by_clamps() {
    let mut cam = Camera::default();
    cam.zoom_by(1000.0, Point::default());
    assert_eq!(cam.zoom, MAX_ZOOM);
    cam.zoom_by(0.000_001, Point::default());
    assert_eq!(cam.zoom, MIN_ZOOM);
}

#[test]
fn zoom_by_ignores_invalid_factor() {
    let mut cam = Camera::default();
    cam.zoom_by(0.0, Point::default());
    cam.zoom_by(f64::NAN, Point::default());
    assert_eq!(cam, Camera::default());
}

// --- Fit ---

#[test]
fn fit_centers_bounds() {
    let mut cam = Camera::default();
    let bounds = Bounds::new(0.0, 0.0, 288.0, 240.0);
    cam.fit_to(bounds, 800.0, 600.0, 20.0);
    let center = cam.world_to_screen(bounds.center());
    assert!(point_approx_eq(center, Point::new(400.0, 300.0)));
    // Height is the limiting axis: (600 - 40) / 240.
    assert!(approx_eq(cam.zoom, 560.0 / 240.0));
}

#[test]
fn fit_ignores_degenerate_viewport() {
    let mut cam = Camera { pan_x: 3.0, pan_y: 4.0, zoom: 1.5 };
    let before = cam;
    cam.fit_to(Bounds::new(0.0, 0.0, 10.0, 10.0), 0.0, 0.0, 20.0);
    assert_eq!(cam, before);
}
