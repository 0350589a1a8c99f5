//! Error types for scene, zone, catalog and unit operations.
//!
//! None of these are fatal. The gesture layer swallows geometry rejections
//! (logging them at debug level) and the host surfaces generation failures as
//! notifications.

use thiserror::Error;

use crate::camera::Point;
use crate::scene::ObjectId;

/// Errors raised by [`crate::scene::Scene`] mutators and (de)serialization.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A placement landed outside the room bounds plus margin.
    #[error("placement ({}, {}) is outside the room bounds", .0.x, .0.y)]
    OutOfBounds(Point),

    /// Two objects in a decoded scene share an id.
    #[error("duplicate object id: {0}")]
    DuplicateId(ObjectId),

    /// A furniture definition id could not be resolved against the catalog.
    #[error("unknown furniture definition: {0}")]
    UnknownDefinition(String),

    /// Scene JSON could not be encoded or decoded.
    #[error("scene serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised by the zone-fill orchestrator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZoneError {
    /// No finalized zone is waiting for a prompt.
    #[error("no zone selection is awaiting input")]
    NoZone,

    /// A generation request is already in flight.
    #[error("a zone-fill request is already in flight")]
    Busy,

    /// The prompt text was empty after trimming.
    #[error("zone prompt is empty")]
    EmptyPrompt,
}

/// Errors raised while loading a furniture catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog JSON could not be decoded.
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two definitions share the same id.
    #[error("duplicate definition id: {0}")]
    DuplicateId(String),
}

/// Error for an unrecognized unit name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown unit: {0}")]
pub struct UnitError(pub String);
