//! Grid snapping.
//!
//! Snapping is applied to a candidate coordinate just before it is written
//! to the scene. It never touches history.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use crate::camera::Point;
use crate::consts::INCHES_PER_FOOT;
use crate::units::inches_to_px;

/// Round `value` to the nearest multiple of `grid`. A non-positive grid disables snapping.
#[must_use]
pub fn snap_value(value: f64, grid: f64) -> f64 {
    if grid <= 0.0 || !grid.is_finite() {
        return value;
    }
    (value / grid).round() * grid
}

/// Snap both axes of a point.
#[must_use]
pub fn snap_point(pt: Point, grid: f64) -> Point {
    Point::new(snap_value(pt.x, grid), snap_value(pt.y, grid))
}

/// Grid display and snapping toggles. The two flags are independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapSettings {
    pub enabled: bool,
    pub grid_visible: bool,
    /// Grid spacing in canvas pixels.
    pub grid_px: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self { enabled: true, grid_visible: true, grid_px: inches_to_px(INCHES_PER_FOOT) }
    }
}

impl SnapSettings {
    /// Snap `pt` when snapping is enabled, otherwise return it unchanged.
    #[must_use]
    pub fn apply(&self, pt: Point) -> Point {
        if self.enabled { snap_point(pt, self.grid_px) } else { pt }
    }

    pub fn toggle_enabled(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn toggle_grid(&mut self) {
        self.grid_visible = !self.grid_visible;
    }
}
