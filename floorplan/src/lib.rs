//! Floor-plan editing engine for the room designer.
//!
//! This crate is the synchronous, I/O-free core of the editor. It owns the
//! scene (room, walls, openings, furniture), the undo/redo history, the
//! camera, grid snapping, and the gesture state machine that turns raw pointer
//! and key events into scene mutations. The zone-fill flow is modeled as a
//! state machine here; the host performs the actual generator call and feeds
//! the outcome back through [`engine::EngineCore::apply_generation`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Session context and input handlers ([`engine::EngineCore`]) |
//! | [`scene`] | Room, scene objects, selection and snapshots |
//! | [`history`] | Linear snapshot undo/redo |
//! | [`input`] | Tools, modifiers and the gesture state machine |
//! | [`hit`] | Hit-testing against scene objects |
//! | [`snap`] | Grid snapping and grid toggles |
//! | [`zone`] | Zone-fill orchestrator and generator wire types |
//! | [`catalog`] | Furniture definitions and drag-and-drop payloads |
//! | [`overlay`] | Bird's-eye camera markers in percent space |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`units`] | Real-world unit conversion and formatting |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants |

pub mod camera;
pub mod catalog;
pub mod consts;
pub mod engine;
pub mod error;
pub mod hit;
pub mod history;
pub mod input;
pub mod overlay;
pub mod scene;
pub mod snap;
pub mod units;
pub mod zone;
