//! Shared numeric constants for the floorplan crate.

// ── Units ───────────────────────────────────────────────────────

/// Internal pixel units per real-world inch.
pub const PIXELS_PER_INCH: f64 = 2.0;

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Centimeters per inch.
pub const CM_PER_INCH: f64 = 2.54;

// ── Scene ───────────────────────────────────────────────────────

/// Slack around the room bounds inside which furniture may still sit, in pixels.
pub const ROOM_MARGIN_PX: f64 = 24.0;

/// Default wall thickness in pixels (4.5 inches).
pub const DEFAULT_WALL_THICKNESS_PX: f64 = 9.0;

/// Length of a wall placed with a single click, in pixels (4 feet).
pub const DEFAULT_WALL_LENGTH_PX: f64 = 96.0;

/// A wall drag shorter than this is treated as a single click.
pub const MIN_WALL_LENGTH_PX: f64 = 6.0;

/// Door leaf width in inches.
pub const DOOR_WIDTH_IN: f64 = 36.0;

/// Window width in inches.
pub const WINDOW_WIDTH_IN: f64 = 48.0;

/// An opening placed within this distance of a wall takes on its orientation.
pub const OPENING_ATTACH_DISTANCE_PX: f64 = 24.0;

// ── Rotation ────────────────────────────────────────────────────

/// Keyboard / button rotation increment in degrees.
pub const ROTATE_STEP_DEG: f64 = 15.0;

/// The quarter-turn action in degrees.
pub const QUARTER_TURN_DEG: f64 = 90.0;

// ── Zone fill ───────────────────────────────────────────────────

/// Minimum zone side length in pixels; smaller rectangles are discarded.
pub const ZONE_MIN_SIZE_PX: f64 = 50.0;

// ── History ─────────────────────────────────────────────────────

/// Default number of snapshots retained by the history stack.
pub const DEFAULT_HISTORY_DEPTH: usize = 200;

// ── Viewport ────────────────────────────────────────────────────

/// Multiplicative zoom step for the `+` / `-` shortcuts.
pub const ZOOM_STEP: f64 = 1.2;

/// Lower zoom clamp.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper zoom clamp.
pub const MAX_ZOOM: f64 = 8.0;

/// Screen-space padding kept around the scene when fitting the viewport.
pub const FIT_PADDING_PX: f64 = 32.0;

/// Zoom change per wheel pixel when zooming with Ctrl/Cmd held.
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.002;

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space hit slop in pixels for handles and thin edges.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Distance from the furniture footprint edge to the rotate handle, in screen pixels.
pub const ROTATE_HANDLE_OFFSET_PX: f64 = 24.0;

// ── Camera overlay ──────────────────────────────────────────────

/// Narrowest field of view for a camera marker, in degrees.
pub const MIN_FOV_DEG: f64 = 30.0;

/// Widest field of view for a camera marker, in degrees.
pub const MAX_FOV_DEG: f64 = 120.0;

/// Field of view given to a freshly added camera marker.
pub const DEFAULT_FOV_DEG: f64 = 60.0;
