//! Scene model: the room, its walls, openings and furniture, and the selection.
//!
//! This module defines the authoritative in-memory representation of the
//! editable room (`Scene`), the object types it holds (`Wall`, `Opening`,
//! `FurnitureInstance`, wrapped in `SceneObject`), and the serializable
//! `SceneSnapshot` that the history stack stores.
//!
//! Objects live in an insertion-ordered map so lookups during a drag are O(1)
//! while draw order and snapshot order stay stable. The selection is a weak
//! `(id, kind)` reference and is never part of a snapshot.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::{Bounds, Point};
use crate::catalog::FurnitureDefinition;
use crate::consts::{DOOR_WIDTH_IN, OPENING_ATTACH_DISTANCE_PX, ROOM_MARGIN_PX, WINDOW_WIDTH_IN};
use crate::error::SceneError;
use crate::units::{Unit, inches_to_px, to_internal};

/// Unique identifier for a scene object.
pub type ObjectId = Uuid;

/// Normalize an angle in degrees into `[0, 360)`. Non-finite input becomes 0.
#[must_use]
pub fn normalize_degrees(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let r = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0.
    if r >= 360.0 { 0.0 } else { r }
}

// =============================================================================
// ROOM
// =============================================================================

/// Room dimensions, stored in inches, plus the unit the user works in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub unit: Unit,
}

impl Room {
    /// Build a room from dimensions expressed in `unit`.
    #[must_use]
    pub fn new(width: f64, depth: f64, height: f64, unit: Unit) -> Self {
        Self {
            width: to_internal(width, unit),
            depth: to_internal(depth, unit),
            height: to_internal(height, unit),
            unit,
        }
    }

    #[must_use]
    pub fn width_px(&self) -> f64 {
        inches_to_px(self.width)
    }

    #[must_use]
    pub fn depth_px(&self) -> f64 {
        inches_to_px(self.depth)
    }

    /// The room outline in canvas pixels, anchored at the origin.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(0.0, 0.0, self.width_px(), self.depth_px())
    }
}

// =============================================================================
// OBJECTS
// =============================================================================

/// Kind tag used by selections and hit results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Wall,
    Door,
    Window,
    Furniture,
}

/// A straight wall segment in canvas pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: ObjectId,
    pub start: Point,
    pub end: Point,
    pub thickness: f64,
}

impl Wall {
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.start.x + self.end.x) * 0.5, (self.start.y + self.end.y) * 0.5)
    }

    /// Direction of the segment in degrees, `[0, 360)`.
    #[must_use]
    pub fn angle_deg(&self) -> f64 {
        normalize_degrees((self.end.y - self.start.y).atan2(self.end.x - self.start.x).to_degrees())
    }

    /// Shortest distance from `pt` to the segment centerline.
    #[must_use]
    pub fn distance_to(&self, pt: Point) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq <= f64::EPSILON {
            return pt.distance(self.start);
        }
        let t = (((pt.x - self.start.x) * dx + (pt.y - self.start.y) * dy) / len_sq).clamp(0.0, 1.0);
        pt.distance(Point::new(self.start.x + t * dx, self.start.y + t * dy))
    }

    fn move_center_to(&mut self, center: Point) {
        let delta = center.sub(self.center());
        self.start = self.start.add(delta);
        self.end = self.end.add(delta);
    }

    fn set_angle(&mut self, deg: f64) {
        let center = self.center();
        let half = self.length() * 0.5;
        let rad = deg.to_radians();
        let (dx, dy) = (rad.cos() * half, rad.sin() * half);
        self.start = Point::new(center.x - dx, center.y - dy);
        self.end = Point::new(center.x + dx, center.y + dy);
    }

    /// Shift the wall back inside `bounds`, then clamp each endpoint.
    fn keep_inside(&mut self, bounds: Bounds) {
        let (x0, x1) = (self.start.x.min(self.end.x), self.start.x.max(self.end.x));
        let (y0, y1) = (self.start.y.min(self.end.y), self.start.y.max(self.end.y));
        let delta = Point::new(
            axis_shift(x0, x1, bounds.min_x, bounds.max_x),
            axis_shift(y0, y1, bounds.min_y, bounds.max_y),
        );
        self.start = bounds.clamp(self.start.add(delta));
        self.end = bounds.clamp(self.end.add(delta));
    }
}

/// Offset that moves `[lo, hi]` inside `[min, max]`, zero if it already fits.
fn axis_shift(lo: f64, hi: f64, min: f64, max: f64) -> f64 {
    if hi - lo > max - min {
        0.0
    } else if lo < min {
        min - lo
    } else if hi > max {
        max - hi
    } else {
        0.0
    }
}

/// Door or window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
}

impl OpeningKind {
    /// Fixed width for the kind, in inches.
    #[must_use]
    pub fn width_inches(self) -> f64 {
        match self {
            Self::Door => DOOR_WIDTH_IN,
            Self::Window => WINDOW_WIDTH_IN,
        }
    }

    #[must_use]
    pub fn object_kind(self) -> ObjectKind {
        match self {
            Self::Door => ObjectKind::Door,
            Self::Window => ObjectKind::Window,
        }
    }
}

/// An opening: a point plus an orientation, conceptually sitting on a wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub id: ObjectId,
    pub kind: OpeningKind,
    pub position: Point,
    pub rotation: f64,
}

impl Opening {
    #[must_use]
    pub fn width_px(&self) -> f64 {
        inches_to_px(self.kind.width_inches())
    }
}

/// A placed furniture block. The definition is shared; placement is owned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurnitureInstance {
    pub id: ObjectId,
    pub definition: Arc<FurnitureDefinition>,
    /// Center of the footprint in canvas pixels.
    pub position: Point,
    /// Clockwise rotation in degrees, `[0, 360)`.
    pub rotation: f64,
}

impl FurnitureInstance {
    #[must_use]
    pub fn width_px(&self) -> f64 {
        self.definition.width_px()
    }

    #[must_use]
    pub fn depth_px(&self) -> f64 {
        self.definition.depth_px()
    }
}

/// Any object stored in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneObject {
    Wall(Wall),
    Opening(Opening),
    Furniture(FurnitureInstance),
}

impl SceneObject {
    #[must_use]
    pub fn id(&self) -> ObjectId {
        match self {
            Self::Wall(w) => w.id,
            Self::Opening(o) => o.id,
            Self::Furniture(f) => f.id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Wall(_) => ObjectKind::Wall,
            Self::Opening(o) => o.kind.object_kind(),
            Self::Furniture(_) => ObjectKind::Furniture,
        }
    }

    /// Anchor point: wall midpoint, opening position, or furniture center.
    #[must_use]
    pub fn position(&self) -> Point {
        match self {
            Self::Wall(w) => w.center(),
            Self::Opening(o) => o.position,
            Self::Furniture(f) => f.position,
        }
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        match self {
            Self::Wall(w) => w.angle_deg(),
            Self::Opening(o) => o.rotation,
            Self::Furniture(f) => f.rotation,
        }
    }

    #[must_use]
    pub fn as_furniture(&self) -> Option<&FurnitureInstance> {
        match self {
            Self::Furniture(f) => Some(f),
            _ => None,
        }
    }
}

/// Weak reference to the selected object. Holds no ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedObject {
    pub id: ObjectId,
    pub kind: ObjectKind,
}

/// Sparse transform update. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransformUpdate {
    pub position: Option<Point>,
    pub rotation: Option<f64>,
}

/// Full capture of the durable scene state, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub room: Room,
    pub objects: Vec<SceneObject>,
}

// =============================================================================
// SCENE
// =============================================================================

/// The editable room and everything placed in it.
#[derive(Debug, Clone)]
pub struct Scene {
    room: Room,
    objects: IndexMap<ObjectId, SceneObject>,
    selected: Option<SelectedObject>,
}

impl Scene {
    /// Create an empty scene for `room`.
    #[must_use]
    pub fn new(room: Room) -> Self {
        Self { room, objects: IndexMap::new(), selected: None }
    }

    #[must_use]
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Room outline in canvas pixels.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.room.bounds()
    }

    /// Room outline grown by the placement margin.
    #[must_use]
    pub fn placement_bounds(&self) -> Bounds {
        self.bounds().expand(ROOM_MARGIN_PX)
    }

    #[must_use]
    pub fn contains_with_margin(&self, pt: Point) -> bool {
        self.placement_bounds().contains(pt)
    }

    /// Smallest bounds covering the room and every object anchor.
    #[must_use]
    pub fn content_bounds(&self) -> Bounds {
        let mut bounds = self.bounds();
        for obj in self.objects.values() {
            match obj {
                SceneObject::Wall(w) => bounds = bounds.include(w.start).include(w.end),
                other => bounds = bounds.include(other.position()),
            }
        }
        bounds
    }

    fn check_bounds(&self, pt: Point) -> Result<(), SceneError> {
        if self.contains_with_margin(pt) { Ok(()) } else { Err(SceneError::OutOfBounds(pt)) }
    }

    // --- Mutators ---

    /// Add a wall between two points.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::OutOfBounds`] if either endpoint is outside the room plus margin.
    pub fn add_wall(&mut self, start: Point, end: Point, thickness: f64) -> Result<ObjectId, SceneError> {
        self.check_bounds(start)?;
        self.check_bounds(end)?;
        let id = Uuid::new_v4();
        self.objects.insert(id, SceneObject::Wall(Wall { id, start, end, thickness }));
        Ok(id)
    }

    /// Add a door or window. It takes on the orientation of the nearest wall in reach.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::OutOfBounds`] if `position` is outside the room plus margin.
    pub fn add_opening(&mut self, kind: OpeningKind, position: Point) -> Result<ObjectId, SceneError> {
        self.check_bounds(position)?;
        let rotation = self.nearest_wall_angle(position).unwrap_or(0.0);
        let id = Uuid::new_v4();
        self.objects.insert(id, SceneObject::Opening(Opening { id, kind, position, rotation }));
        Ok(id)
    }

    /// Place a furniture block. Defaults to the room center and 0°.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::OutOfBounds`] if `position` is outside the room plus margin.
    pub fn add_furniture(
        &mut self,
        definition: Arc<FurnitureDefinition>,
        position: Option<Point>,
        rotation: Option<f64>,
    ) -> Result<ObjectId, SceneError> {
        let position = position.unwrap_or_else(|| self.bounds().center());
        self.check_bounds(position)?;
        let id = Uuid::new_v4();
        let rotation = normalize_degrees(rotation.unwrap_or(0.0));
        self.objects.insert(id, SceneObject::Furniture(FurnitureInstance { id, definition, position, rotation }));
        Ok(id)
    }

    /// Apply a transform update. Positions are clamped into the placement
    /// bounds and rotations normalized. Returns false if the object doesn't exist.
    pub fn update_transform(&mut self, id: &ObjectId, update: TransformUpdate) -> bool {
        let bounds = self.placement_bounds();
        let Some(obj) = self.objects.get_mut(id) else {
            return false;
        };
        let position = update.position.map(|p| bounds.clamp(p));
        let rotation = update.rotation.map(normalize_degrees);
        match obj {
            SceneObject::Wall(w) => {
                if let Some(r) = rotation {
                    w.set_angle(r);
                }
                if let Some(p) = position {
                    w.move_center_to(p);
                }
                w.keep_inside(bounds);
            }
            SceneObject::Opening(o) => {
                if let Some(p) = position {
                    o.position = p;
                }
                if let Some(r) = rotation {
                    o.rotation = r;
                }
            }
            SceneObject::Furniture(f) => {
                if let Some(p) = position {
                    f.position = p;
                }
                if let Some(r) = rotation {
                    f.rotation = r;
                }
            }
        }
        true
    }

    /// Rotate an object by `delta_deg` relative to its current rotation.
    pub fn rotate_by(&mut self, id: &ObjectId, delta_deg: f64) -> bool {
        let Some(current) = self.objects.get(id).map(SceneObject::rotation) else {
            return false;
        };
        self.update_transform(id, TransformUpdate { position: None, rotation: Some(current + delta_deg) })
    }

    /// Move a wall's end point, clamped into the placement bounds. Used while
    /// a wall is being drawn.
    pub fn set_wall_end(&mut self, id: &ObjectId, end: Point) -> bool {
        let end = self.placement_bounds().clamp(end);
        match self.objects.get_mut(id) {
            Some(SceneObject::Wall(w)) => {
                w.end = end;
                true
            }
            _ => false,
        }
    }

    /// Remove an object. Idempotent; clears the selection if it pointed here.
    pub fn remove(&mut self, id: &ObjectId) -> Option<SceneObject> {
        if self.selected.is_some_and(|s| s.id == *id) {
            self.selected = None;
        }
        self.objects.shift_remove(id)
    }

    // --- Selection ---

    #[must_use]
    pub fn selected(&self) -> Option<SelectedObject> {
        self.selected
    }

    /// Select an object by id, or clear with `None`. Returns false (leaving the
    /// selection untouched) if the id isn't in the scene.
    pub fn set_selected(&mut self, id: Option<ObjectId>) -> bool {
        match id {
            None => {
                self.selected = None;
                true
            }
            Some(id) => match self.objects.get(&id) {
                Some(obj) => {
                    self.selected = Some(SelectedObject { id, kind: obj.kind() });
                    true
                }
                None => false,
            },
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    /// Objects in draw order (oldest first).
    pub fn objects(&self) -> impl DoubleEndedIterator<Item = &SceneObject> {
        self.objects.values()
    }

    pub fn furniture(&self) -> impl Iterator<Item = &FurnitureInstance> {
        self.objects.values().filter_map(SceneObject::as_furniture)
    }

    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.objects.values().filter_map(|o| match o {
            SceneObject::Wall(w) => Some(w),
            _ => None,
        })
    }

    pub fn openings(&self) -> impl Iterator<Item = &Opening> {
        self.objects.values().filter_map(|o| match o {
            SceneObject::Opening(op) => Some(op),
            _ => None,
        })
    }

    /// Number of placed objects. The room outline and grid are not objects.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Orientation of the closest wall within attach distance of `pt`.
    #[must_use]
    pub fn nearest_wall_angle(&self, pt: Point) -> Option<f64> {
        self.walls()
            .map(|w| (w.distance_to(pt), w.angle_deg()))
            .filter(|(d, _)| *d <= OPENING_ATTACH_DISTANCE_PX)
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, angle)| angle)
    }

    // --- Snapshots ---

    /// Capture the durable state (room and objects, not the selection).
    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot { room: self.room, objects: self.objects.values().cloned().collect() }
    }

    /// Replace the durable state. Keeps the selection only if its object survives.
    pub fn restore(&mut self, snapshot: &SceneSnapshot) {
        self.room = snapshot.room;
        self.objects = snapshot
            .objects
            .iter()
            .map(|o| (o.id(), o.clone()))
            .collect();
        if let Some(sel) = self.selected {
            if !self.objects.contains_key(&sel.id) {
                self.selected = None;
            }
        }
    }

    /// Encode the scene as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Serialization`] if encoding fails.
    pub fn serialize(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Decode a scene from JSON produced by [`Scene::serialize`].
    ///
    /// Rotations are re-normalized on the way in.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Serialization`] on malformed input,
    /// [`SceneError::DuplicateId`] when two objects share an id and
    /// [`SceneError::OutOfBounds`] for any anchor outside the room plus margin.
    pub fn deserialize(json: &str) -> Result<Scene, SceneError> {
        let mut snapshot: SceneSnapshot = serde_json::from_str(json)?;
        for obj in &mut snapshot.objects {
            match obj {
                SceneObject::Opening(o) => o.rotation = normalize_degrees(o.rotation),
                SceneObject::Furniture(f) => f.rotation = normalize_degrees(f.rotation),
                SceneObject::Wall(_) => {}
            }
        }
        let mut scene = Scene::new(snapshot.room);
        let mut seen = HashSet::with_capacity(snapshot.objects.len());
        for obj in &snapshot.objects {
            if !seen.insert(obj.id()) {
                return Err(SceneError::DuplicateId(obj.id()));
            }
            match obj {
                SceneObject::Wall(w) => {
                    scene.check_bounds(w.start)?;
                    scene.check_bounds(w.end)?;
                }
                other => scene.check_bounds(other.position())?,
            }
        }
        scene.restore(&snapshot);
        Ok(scene)
    }
}
