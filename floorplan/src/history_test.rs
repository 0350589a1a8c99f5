use super::*;
use crate::camera::Point;
use crate::scene::{Room, Scene};
use crate::units::Unit;

fn scene() -> Scene {
    Scene::new(Room::new(12.0, 10.0, 8.0, Unit::Foot))
}

fn with_walls(n: usize) -> SceneSnapshot {
    let mut s = scene();
    for i in 0..n {
        let y = 10.0 * i as f64;
        s.add_wall(Point::new(0.0, y), Point::new(50.0, y), 9.0).unwrap();
    }
    s.snapshot()
}

// =============================================================
// Undo / redo
// =============================================================

#[test]
fn fresh_history_has_nothing_to_undo() {
    let mut h = History::new(with_walls(0), 10);
    assert!(!h.can_undo());
    assert!(!h.can_redo());
    assert!(h.undo().is_none());
    assert!(h.redo().is_none());
    assert_eq!(h.len(), 1);
    assert_eq!(h.cursor(), 0);
}

#[test]
fn undo_then_redo_restores_identical_snapshot() {
    let a = with_walls(0);
    let b = with_walls(1);
    let mut h = History::new(a.clone(), 10);
    h.commit(b.clone());

    assert_eq!(h.undo(), Some(&a));
    assert!(h.can_redo());
    assert_eq!(h.redo(), Some(&b));
    assert_eq!(h.current(), Some(&b));
    assert!(!h.can_redo());
}

#[test]
fn undo_stops_at_oldest_entry() {
    let mut h = History::new(with_walls(0), 10);
    h.commit(with_walls(1));
    assert!(h.undo().is_some());
    assert!(h.undo().is_none());
    assert_eq!(h.cursor(), 0);
}

#[test]
fn commit_after_undo_truncates_redo_tail() {
    let mut h = History::new(with_walls(0), 10);
    h.commit(with_walls(1));
    h.commit(with_walls(2));
    h.undo();
    h.undo();
    let branch = with_walls(3);
    h.commit(branch.clone());

    assert_eq!(h.len(), 2);
    assert!(!h.can_redo());
    assert_eq!(h.current(), Some(&branch));
}

// =============================================================
// Capacity
// =============================================================

#[test]
fn capacity_drops_oldest_entries() {
    let mut h = History::new(with_walls(0), 3);
    for n in 1..=5 {
        h.commit(with_walls(n));
    }
    assert_eq!(h.len(), 3);
    assert_eq!(h.cursor(), 2);
    assert_eq!(h.current().map(|s| s.objects.len()), Some(5));

    h.undo();
    h.undo();
    assert!(!h.can_undo());
    assert_eq!(h.current().map(|s| s.objects.len()), Some(3));
}

#[test]
fn zero_capacity_is_raised_to_one() {
    let mut h = History::new(with_walls(0), 0);
    assert_eq!(h.capacity(), 1);
    h.commit(with_walls(1));
    assert_eq!(h.len(), 1);
    assert!(!h.can_undo());
}

#[test]
fn reset_discards_everything() {
    let mut h = History::new(with_walls(0), 10);
    h.commit(with_walls(1));
    h.commit(with_walls(2));
    let fresh = with_walls(4);
    h.reset(fresh.clone());
    assert_eq!(h.len(), 1);
    assert_eq!(h.current(), Some(&fresh));
    assert!(!h.can_undo());
}
