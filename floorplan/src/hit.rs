//! Hit-testing against scene objects.
//!
//! Objects are tested topmost first (reverse draw order). Furniture is a
//! rotated rectangle, openings are oriented bars, and walls are matched by
//! distance to their centerline. Slop is given in screen pixels and converted
//! through the camera so handles stay the same size on screen at any zoom.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::consts::{DEFAULT_WALL_THICKNESS_PX, HANDLE_RADIUS_PX, ROTATE_HANDLE_OFFSET_PX};
use crate::scene::{FurnitureInstance, ObjectId, Opening, Scene, SceneObject, Wall};

/// Which part of an object was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    RotateHandle,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub object_id: ObjectId,
    pub part: HitPart,
}

/// Test which object (if any) is under `world_pt`, checking the selected
/// furniture's rotate handle first.
#[must_use]
pub fn hit_test(world_pt: Point, scene: &Scene, camera: &Camera, selected_id: Option<ObjectId>) -> Option<Hit> {
    let slop = camera.screen_dist_to_world(HANDLE_RADIUS_PX);

    if let Some(f) = selected_id.and_then(|id| scene.get(&id)).and_then(SceneObject::as_furniture) {
        if world_pt.distance(rotate_handle_position(f, camera)) <= slop {
            return Some(Hit { object_id: f.id, part: HitPart::RotateHandle });
        }
    }

    scene
        .objects()
        .rev()
        .find(|obj| match obj {
            SceneObject::Furniture(f) => hits_furniture(f, world_pt),
            SceneObject::Opening(o) => hits_opening(o, world_pt, slop),
            SceneObject::Wall(w) => hits_wall(w, world_pt, slop),
        })
        .map(|obj| Hit { object_id: obj.id(), part: HitPart::Body })
}

/// World-space position of a furniture block's rotate handle, which sits just
/// past its back edge.
#[must_use]
pub fn rotate_handle_position(f: &FurnitureInstance, camera: &Camera) -> Point {
    let offset = camera.screen_dist_to_world(ROTATE_HANDLE_OFFSET_PX);
    to_world(f.position, f.rotation, Point::new(0.0, -f.depth_px() * 0.5 - offset))
}

fn hits_furniture(f: &FurnitureInstance, pt: Point) -> bool {
    let local = to_local(f.position, f.rotation, pt);
    local.x.abs() <= f.width_px() * 0.5 && local.y.abs() <= f.depth_px() * 0.5
}

fn hits_opening(o: &Opening, pt: Point, slop: f64) -> bool {
    let local = to_local(o.position, o.rotation, pt);
    local.x.abs() <= o.width_px() * 0.5 + slop && local.y.abs() <= DEFAULT_WALL_THICKNESS_PX * 0.5 + slop
}

fn hits_wall(w: &Wall, pt: Point, slop: f64) -> bool {
    w.distance_to(pt) <= w.thickness * 0.5 + slop
}

/// Express `pt` in the frame of an object centered at `center` rotated by `rotation_deg`.
fn to_local(center: Point, rotation_deg: f64, pt: Point) -> Point {
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    let d = pt.sub(center);
    Point::new(d.x * cos + d.y * sin, -d.x * sin + d.y * cos)
}

fn to_world(center: Point, rotation_deg: f64, local: Point) -> Point {
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    Point::new(center.x + local.x * cos - local.y * sin, center.y + local.x * sin + local.y * cos)
}
