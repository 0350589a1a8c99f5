//! Zone-fill orchestrator.
//!
//! A zone is a transient rectangle the user drags out with the ai-zone tool.
//! Once it is big enough the user is asked for a prompt, the engine builds a
//! [`GenerationRequest`] for the host to send, and the host hands the outcome
//! back. This module owns only the state machine and the wire types; merging
//! placements into the scene is the engine's job.
//!
//! ```text
//! Idle ──begin──▶ Drawing ──finish(ok)──▶ AwaitingInput ──submit──▶ Requesting ──complete──▶ Idle
//!                    │ finish(too small)        │ cancel
//!                    ▼                          ▼
//!                  Idle                        Idle
//! ```

#[cfg(test)]
#[path = "zone_test.rs"]
mod zone_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::error::ZoneError;
use crate::scene::Room;
use crate::units::{Unit, to_display};

// =============================================================================
// ZONE RECT
// =============================================================================

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ZoneRect {
    /// Rectangle spanned by two opposite corners, in any order.
    #[must_use]
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self { x: a.x.min(b.x), y: a.y.min(b.y), width: (a.x - b.x).abs(), height: (a.y - b.y).abs() }
    }

    /// Both sides strictly longer than `min`.
    #[must_use]
    pub fn exceeds(&self, min: f64) -> bool {
        self.width > min && self.height > min
    }

    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.width && pt.y >= self.y && pt.y <= self.y + self.height
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Room dimensions in the room's display unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub unit: Unit,
}

impl From<&Room> for RoomDimensions {
    fn from(room: &Room) -> Self {
        Self {
            width: to_display(room.width, room.unit),
            depth: to_display(room.depth, room.unit),
            height: to_display(room.height, room.unit),
            unit: room.unit,
        }
    }
}

/// Request body sent to the zone-fill generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt_text: String,
    pub room_dimensions: RoomDimensions,
    pub use_saved_preferences: bool,
    pub zone_constraints: ZoneRect,
}

/// One generated placement, in absolute scene pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPlacement {
    /// Catalog definition id.
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
}

/// Response body returned by the zone-fill generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub furniture: Vec<GeneratedPlacement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

// =============================================================================
// STATE MACHINE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ZoneState {
    #[default]
    Idle,
    Drawing {
        anchor: Point,
        rect: ZoneRect,
    },
    AwaitingInput {
        zone: ZoneRect,
    },
    Requesting {
        zone: ZoneRect,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ZoneFill {
    state: ZoneState,
}

impl ZoneFill {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ZoneState {
        self.state
    }

    #[must_use]
    pub fn is_requesting(&self) -> bool {
        matches!(self.state, ZoneState::Requesting { .. })
    }

    /// The rectangle currently on screen, whatever stage it is in.
    #[must_use]
    pub fn selection(&self) -> Option<ZoneRect> {
        match self.state {
            ZoneState::Idle => None,
            ZoneState::Drawing { rect, .. } => Some(rect),
            ZoneState::AwaitingInput { zone } | ZoneState::Requesting { zone } => Some(zone),
        }
    }

    /// Start a new rectangle at `anchor`, replacing any zone awaiting input.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::Busy`] while a request is in flight.
    pub fn begin(&mut self, anchor: Point) -> Result<(), ZoneError> {
        if self.is_requesting() {
            return Err(ZoneError::Busy);
        }
        self.state = ZoneState::Drawing { anchor, rect: ZoneRect::from_corners(anchor, anchor) };
        Ok(())
    }

    /// Stretch the rectangle toward `corner`. No-op unless drawing.
    pub fn resize(&mut self, corner: Point) {
        if let ZoneState::Drawing { anchor, .. } = self.state {
            self.state = ZoneState::Drawing { anchor, rect: ZoneRect::from_corners(anchor, corner) };
        }
    }

    /// End the drag. A rectangle with both sides over `min_size` moves to
    /// awaiting input and is returned; anything smaller is discarded.
    pub fn finish(&mut self, min_size: f64) -> Option<ZoneRect> {
        let ZoneState::Drawing { rect, .. } = self.state else {
            return None;
        };
        if rect.exceeds(min_size) {
            self.state = ZoneState::AwaitingInput { zone: rect };
            Some(rect)
        } else {
            self.state = ZoneState::Idle;
            None
        }
    }

    /// Turn the awaiting zone plus a prompt into a request and start waiting on it.
    ///
    /// # Errors
    ///
    /// [`ZoneError::Busy`] if a request is already in flight, [`ZoneError::NoZone`]
    /// if nothing is awaiting input, [`ZoneError::EmptyPrompt`] for blank text.
    pub fn submit(&mut self, prompt: &str, use_saved_preferences: bool, room: &Room) -> Result<GenerationRequest, ZoneError> {
        let zone = match self.state {
            ZoneState::Requesting { .. } => return Err(ZoneError::Busy),
            ZoneState::AwaitingInput { zone } => zone,
            ZoneState::Idle | ZoneState::Drawing { .. } => return Err(ZoneError::NoZone),
        };
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(ZoneError::EmptyPrompt);
        }
        self.state = ZoneState::Requesting { zone };
        Ok(GenerationRequest {
            prompt_text: prompt.to_owned(),
            room_dimensions: RoomDimensions::from(room),
            use_saved_preferences,
            zone_constraints: zone,
        })
    }

    /// Drop a zone that is being drawn or awaiting input.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::Busy`] while a request is in flight.
    pub fn cancel(&mut self) -> Result<(), ZoneError> {
        if self.is_requesting() {
            return Err(ZoneError::Busy);
        }
        self.state = ZoneState::Idle;
        Ok(())
    }

    /// Leave the requesting state once the outcome has arrived. Returns the
    /// zone that was being filled.
    pub fn complete(&mut self) -> Option<ZoneRect> {
        match self.state {
            ZoneState::Requesting { zone } => {
                self.state = ZoneState::Idle;
                Some(zone)
            }
            _ => None,
        }
    }
}
