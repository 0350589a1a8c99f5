//! Input model: tools, modifier keys, mouse buttons, and the gesture state machine.
//!
//! `Tool` and `Modifiers` capture the user's intent at the time of a pointer
//! event. `InputState` is the gesture tracked between pointer-down and
//! pointer-up, carrying what the engine needs to apply live updates and to
//! decide on release whether anything worth committing happened.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::catalog::FurnitureDefinition;
use crate::scene::{ObjectId, OpeningKind};
use crate::snap::SnapSettings;

/// Which tool is currently active. Tools are sticky until changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Select, drag and rotate (default).
    #[default]
    Select,
    /// Drag to pan the view.
    Pan,
    /// Draw a wall segment.
    Wall,
    /// Click to place a window.
    Window,
    /// Click to place a door.
    Door,
    /// Place the armed furniture definition.
    Furniture,
    /// Drag out a zone for the generator to fill.
    AiZone,
}

impl Tool {
    /// The opening kind this tool places, if it places one.
    #[must_use]
    pub fn opening_kind(self) -> Option<OpeningKind> {
        match self {
            Self::Door => Some(OpeningKind::Door),
            Self::Window => Some(OpeningKind::Window),
            _ => None,
        }
    }

    /// Cursor name the host should show while this tool is active.
    #[must_use]
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Select => "default",
            Self::Pan => "grab",
            Self::Wall | Self::AiZone => "crosshair",
            Self::Window | Self::Door | Self::Furniture => "copy",
        }
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the host (e.g. `"Delete"`, `"r"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Key name lowercased for case-insensitive matching.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// How choosing a catalog definition places it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// Add at the room center right away.
    Append,
    /// Wait for the next canvas click.
    Arm,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// Grid and snapping toggles.
    pub snap: SnapSettings,
    /// Definition placed by the next furniture-tool click.
    pub armed: Option<Arc<FurnitureDefinition>>,
    /// While true the host owns the keyboard and shortcuts are ignored.
    pub text_input_focused: bool,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging the view.
    Panning {
        /// Screen-space position of the previous pointer event.
        last_screen: Point,
    },
    /// Moving an existing object.
    DraggingObject {
        /// Id of the object being dragged.
        id: ObjectId,
        /// Object position minus pointer position at pointer-down.
        grab_offset: Point,
        /// Object position at the start of the drag.
        orig: Point,
    },
    /// Rotating a furniture block by its handle.
    RotatingObject {
        /// Id of the object being rotated.
        id: ObjectId,
        /// World-space pivot.
        center: Point,
        /// Rotation in degrees at the start of the gesture.
        orig_rotation: f64,
        /// Pointer bearing from the pivot at pointer-down, in degrees.
        start_angle: f64,
    },
    /// Sizing a provisional wall from its anchor.
    DrawingWall {
        /// Id of the provisional wall.
        id: ObjectId,
        /// World-space start point.
        anchor: Point,
    },
    /// Sizing the zone rectangle.
    DrawingZone,
}
