//! Bird's-eye camera overlay.
//!
//! Camera markers sit on top of a rendered image of the room. Their positions
//! are percentages of the container so they survive image resizes; the
//! conversions to and from pixels are pure and take the image size.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::consts::{DEFAULT_FOV_DEG, MAX_FOV_DEG, MIN_FOV_DEG};
use crate::scene::normalize_degrees;

pub type MarkerId = Uuid;

/// A position in percent of the container, 0–100 on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentPoint {
    pub x: f64,
    pub y: f64,
}

impl PercentPoint {
    /// Build a point, clamping each axis into 0–100.
    #[must_use]
    pub fn clamped(x: f64, y: f64) -> Self {
        Self { x: clamp_percent(x), y: clamp_percent(y) }
    }
}

fn clamp_percent(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 100.0) } else { 0.0 }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraMarker {
    pub id: MarkerId,
    pub name: String,
    pub position: PercentPoint,
    /// Facing direction in degrees, `[0, 360)`.
    pub rotation: f64,
    /// Field of view in degrees.
    pub fov: f64,
}

/// Pixel position of `p` inside an image of the given size.
#[must_use]
pub fn percent_to_px(p: PercentPoint, width: f64, height: f64) -> Point {
    Point::new(p.x / 100.0 * width, p.y / 100.0 * height)
}

/// Percent position of a pixel point, clamped into the container.
/// A degenerate image size maps everything to the origin.
#[must_use]
pub fn px_to_percent(pt: Point, width: f64, height: f64) -> PercentPoint {
    if width <= 0.0 || height <= 0.0 {
        return PercentPoint { x: 0.0, y: 0.0 };
    }
    PercentPoint::clamped(pt.x / width * 100.0, pt.y / height * 100.0)
}

/// The set of camera markers and which one is selected.
#[derive(Debug, Clone, Default)]
pub struct CameraOverlay {
    markers: Vec<CameraMarker>,
    selected: Option<MarkerId>,
}

impl CameraOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marker at the center facing 0° with the default field of view
    /// and select it. Unnamed markers are numbered.
    pub fn add_camera(&mut self, name: Option<&str>) -> MarkerId {
        let id = Uuid::new_v4();
        let name = name.map_or_else(|| format!("Camera {}", self.markers.len() + 1), str::to_owned);
        self.markers.push(CameraMarker {
            id,
            name,
            position: PercentPoint { x: 50.0, y: 50.0 },
            rotation: 0.0,
            fov: DEFAULT_FOV_DEG,
        });
        self.selected = Some(id);
        id
    }

    /// Select a marker, or clear with `None`. Returns false for an unknown id.
    pub fn select(&mut self, id: Option<MarkerId>) -> bool {
        match id {
            Some(id) if self.get(&id).is_none() => false,
            other => {
                self.selected = other;
                true
            }
        }
    }

    pub fn move_marker(&mut self, id: &MarkerId, position: PercentPoint) -> bool {
        self.with_marker(id, |m| m.position = PercentPoint::clamped(position.x, position.y))
    }

    pub fn rotate_marker(&mut self, id: &MarkerId, rotation: f64) -> bool {
        self.with_marker(id, |m| m.rotation = normalize_degrees(rotation))
    }

    /// Set the field of view, clamped into the supported range.
    pub fn set_fov(&mut self, id: &MarkerId, fov: f64) -> bool {
        let fov = if fov.is_finite() { fov.clamp(MIN_FOV_DEG, MAX_FOV_DEG) } else { DEFAULT_FOV_DEG };
        self.with_marker(id, |m| m.fov = fov)
    }

    /// Remove a marker. Idempotent; clears the selection if it pointed here.
    pub fn remove(&mut self, id: &MarkerId) -> Option<CameraMarker> {
        if self.selected == Some(*id) {
            self.selected = None;
        }
        let idx = self.markers.iter().position(|m| m.id == *id)?;
        Some(self.markers.remove(idx))
    }

    #[must_use]
    pub fn get(&self, id: &MarkerId) -> Option<&CameraMarker> {
        self.markers.iter().find(|m| m.id == *id)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&CameraMarker> {
        self.selected.and_then(|id| self.get(&id))
    }

    #[must_use]
    pub fn markers(&self) -> &[CameraMarker] {
        &self.markers
    }

    fn with_marker(&mut self, id: &MarkerId, f: impl FnOnce(&mut CameraMarker)) -> bool {
        match self.markers.iter_mut().find(|m| m.id == *id) {
            Some(m) => {
                f(m);
                true
            }
            None => false,
        }
    }
}
