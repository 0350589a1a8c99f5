#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// A point in either screen or world (scene pixel) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Component-wise `self + other`.
    #[must_use]
    pub fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

/// Axis-aligned bounds in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) * 0.5, (self.min_y + self.max_y) * 0.5)
    }

    /// Grow the bounds by `margin` on every side.
    #[must_use]
    pub fn expand(&self, margin: f64) -> Bounds {
        Bounds::new(self.min_x - margin, self.min_y - margin, self.max_x + margin, self.max_y + margin)
    }

    /// Whether `pt` lies inside or on the edge of the bounds.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.min_x && pt.x <= self.max_x && pt.y >= self.min_y && pt.y <= self.max_y
    }

    /// Clamp `pt` onto the bounds.
    #[must_use]
    pub fn clamp(&self, pt: Point) -> Point {
        Point::new(pt.x.clamp(self.min_x, self.max_x), pt.y.clamp(self.min_y, self.max_y))
    }

    /// Smallest bounds containing both `self` and `pt`.
    #[must_use]
    pub fn include(&self, pt: Point) -> Bounds {
        Bounds::new(self.min_x.min(pt.x), self.min_y.min(pt.y), self.max_x.max(pt.x), self.max_y.max(pt.y))
    }
}

/// Camera state for pan/zoom over the floor plan.
///
/// `pan_x` / `pan_y` are in CSS pixels.
/// `zoom` is a scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point { x: (screen.x - self.pan_x) / self.zoom, y: (screen.y - self.pan_y) / self.zoom }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point { x: world.x * self.zoom + self.pan_x, y: world.y * self.zoom + self.pan_y }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Shift the view by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Multiply zoom by `factor`, keeping the world point under `focus_screen` fixed.
    pub fn zoom_by(&mut self, factor: f64, focus_screen: Point) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let focus_world = self.screen_to_world(focus_screen);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.pan_x = focus_screen.x - focus_world.x * self.zoom;
        self.pan_y = focus_screen.y - focus_world.y * self.zoom;
    }

    /// Zoom and pan so `bounds` fills the viewport with `padding` screen pixels on each side.
    ///
    /// Degenerate bounds or viewports leave the camera untouched.
    pub fn fit_to(&mut self, bounds: Bounds, viewport_width: f64, viewport_height: f64, padding: f64) {
        let avail_w = viewport_width - 2.0 * padding;
        let avail_h = viewport_height - 2.0 * padding;
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 || avail_w <= 0.0 || avail_h <= 0.0 {
            return;
        }
        self.zoom = (avail_w / bounds.width())
            .min(avail_h / bounds.height())
            .clamp(MIN_ZOOM, MAX_ZOOM);
        let center = bounds.center();
        self.pan_x = viewport_width * 0.5 - center.x * self.zoom;
        self.pan_y = viewport_height * 0.5 - center.y * self.zoom;
    }
}
