#![allow(clippy::float_cmp)]

use super::*;

fn room() -> Room {
    Room::new(12.0, 10.0, 8.0, Unit::Foot)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn awaiting() -> ZoneFill {
    let mut z = ZoneFill::new();
    z.begin(pt(10.0, 10.0)).unwrap();
    z.resize(pt(110.0, 90.0));
    z.finish(50.0).unwrap();
    z
}

// =============================================================
// ZoneRect
// =============================================================

#[test]
fn from_corners_normalizes_drag_direction() {
    let r = ZoneRect::from_corners(pt(100.0, 80.0), pt(20.0, 10.0));
    assert_eq!(r, ZoneRect { x: 20.0, y: 10.0, width: 80.0, height: 70.0 });
}

#[test]
fn exceeds_requires_both_sides() {
    let r = ZoneRect { x: 0.0, y: 0.0, width: 80.0, height: 50.0 };
    assert!(!r.exceeds(50.0));
    assert!(r.exceeds(49.0));
}

#[test]
fn contains_includes_edges() {
    let r = ZoneRect { x: 0.0, y: 0.0, width: 10.0, height: 10.0 };
    assert!(r.contains(pt(10.0, 0.0)));
    assert!(!r.contains(pt(10.1, 5.0)));
}

// =============================================================
// State machine
// =============================================================

#[test]
fn drawing_tracks_the_live_rect() {
    let mut z = ZoneFill::new();
    assert!(z.selection().is_none());
    z.begin(pt(10.0, 10.0)).unwrap();
    z.resize(pt(40.0, 60.0));
    assert_eq!(z.selection(), Some(ZoneRect { x: 10.0, y: 10.0, width: 30.0, height: 50.0 }));
}

#[test]
fn small_zone_is_discarded() {
    let mut z = ZoneFill::new();
    z.begin(pt(0.0, 0.0)).unwrap();
    z.resize(pt(30.0, 30.0));
    assert!(z.finish(50.0).is_none());
    assert_eq!(z.state(), ZoneState::Idle);
}

#[test]
fn large_zone_awaits_input() {
    let z = awaiting();
    assert!(matches!(z.state(), ZoneState::AwaitingInput { .. }));
}

#[test]
fn resize_outside_drawing_is_ignored() {
    let mut z = awaiting();
    let before = z.state();
    z.resize(pt(500.0, 500.0));
    assert_eq!(z.state(), before);
}

#[test]
fn finish_without_drawing_returns_none() {
    assert!(ZoneFill::new().finish(50.0).is_none());
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_builds_request() {
    let mut z = awaiting();
    let req = z.submit("  cozy reading nook ", true, &room()).unwrap();
    assert_eq!(req.prompt_text, "cozy reading nook");
    assert!(req.use_saved_preferences);
    assert_eq!(req.zone_constraints, ZoneRect { x: 10.0, y: 10.0, width: 100.0, height: 80.0 });
    assert_eq!(req.room_dimensions.width, 12.0);
    assert_eq!(req.room_dimensions.depth, 10.0);
    assert_eq!(req.room_dimensions.unit, Unit::Foot);
    assert!(z.is_requesting());
}

#[test]
fn submit_without_zone_errors() {
    let mut z = ZoneFill::new();
    assert_eq!(z.submit("sofa", false, &room()), Err(ZoneError::NoZone));
}

#[test]
fn submit_empty_prompt_keeps_zone() {
    let mut z = awaiting();
    assert_eq!(z.submit("   ", false, &room()), Err(ZoneError::EmptyPrompt));
    assert!(matches!(z.state(), ZoneState::AwaitingInput { .. }));
}

#[test]
fn requesting_refuses_new_work() {
    let mut z = awaiting();
    z.submit("sofa", false, &room()).unwrap();
    assert_eq!(z.submit("again", false, &room()), Err(ZoneError::Busy));
    assert_eq!(z.begin(pt(0.0, 0.0)), Err(ZoneError::Busy));
    assert_eq!(z.cancel(), Err(ZoneError::Busy));
    assert!(z.is_requesting());
}

#[test]
fn complete_returns_to_idle() {
    let mut z = awaiting();
    z.submit("sofa", false, &room()).unwrap();
    assert!(z.complete().is_some());
    assert_eq!(z.state(), ZoneState::Idle);
    assert!(z.complete().is_none());
}

#[test]
fn cancel_clears_awaiting_zone() {
    let mut z = awaiting();
    z.cancel().unwrap();
    assert!(z.selection().is_none());
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn request_serializes_camel_case() {
    let mut z = awaiting();
    let req = z.submit("sofa", false, &room()).unwrap();
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["promptText"], "sofa");
    assert_eq!(json["useSavedPreferences"], false);
    assert_eq!(json["roomDimensions"]["unit"], "ft");
    assert_eq!(json["zoneConstraints"]["width"], 100.0);
}

#[test]
fn response_parses_without_suggestions() {
    let json = r#"{"furniture":[{"id":"sofa","x":100,"y":80,"rotation":90}]}"#;
    let resp: GenerationResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.furniture.len(), 1);
    assert_eq!(resp.furniture[0].rotation, 90.0);
    assert!(resp.suggestions.is_none());
}

#[test]
fn response_rotation_defaults_to_zero() {
    let json = r#"{"furniture":[{"id":"bed","x":1,"y":2}],"suggestions":["add a rug"]}"#;
    let resp: GenerationResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.furniture[0].rotation, 0.0);
    assert_eq!(resp.suggestions, Some(vec!["add a rug".to_owned()]));
}
