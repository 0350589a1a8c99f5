//! Tool and gesture engine.
//!
//! `EngineCore` is the whole editor session: scene, history, camera, UI and
//! gesture state, the zone-fill orchestrator and the catalog. Hosts forward raw
//! pointer, wheel, key and drop events and act on the returned [`Action`]s.
//! Live gesture updates write straight to the scene; history only sees the
//! result once the gesture completes.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::fmt::Display;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::camera::{Camera, Point};
use crate::catalog::{Catalog, DropPayload, FurnitureDefinition};
use crate::consts::{
    DEFAULT_HISTORY_DEPTH, DEFAULT_WALL_LENGTH_PX, DEFAULT_WALL_THICKNESS_PX, FIT_PADDING_PX, INCHES_PER_FOOT,
    MIN_WALL_LENGTH_PX, QUARTER_TURN_DEG, ROTATE_STEP_DEG, WHEEL_ZOOM_SENSITIVITY, ZONE_MIN_SIZE_PX, ZOOM_STEP,
};
use crate::error::ZoneError;
use crate::hit::{HitPart, hit_test};
use crate::history::History;
use crate::input::{Button, InputState, Key, Modifiers, PlacementMode, Tool, UiState, WheelDelta};
use crate::scene::{ObjectId, OpeningKind, Room, Scene, SceneObject, SelectedObject, TransformUpdate};
use crate::snap::{SnapSettings, snap_value};
use crate::units::inches_to_px;
use crate::zone::{GenerationRequest, GenerationResponse, ZoneFill, ZoneRect};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A history entry was committed.
    Committed { label: &'static str },
    SelectionChanged(Option<SelectedObject>),
    ToolChanged(Tool),
    /// A zone was finalized; the host should ask the user for a prompt.
    ZonePromptRequested(ZoneRect),
    /// Message to surface to the user.
    Notify(String),
    SetCursor(String),
    RenderNeeded,
}

/// Editor policy knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorSettings {
    /// Grid spacing in canvas pixels.
    pub grid_px: f64,
    /// Zones need both sides longer than this to be kept.
    pub zone_min_px: f64,
    pub history_depth: usize,
    pub snap_enabled: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_px: inches_to_px(INCHES_PER_FOOT),
            zone_min_px: ZONE_MIN_SIZE_PX,
            history_depth: DEFAULT_HISTORY_DEPTH,
            snap_enabled: true,
        }
    }
}

/// Core engine state: all editor logic, with no rendering or I/O.
#[derive(Debug)]
pub struct EngineCore {
    pub scene: Scene,
    pub history: History,
    pub camera: Camera,
    pub ui: UiState,
    pub input: InputState,
    pub zone: ZoneFill,
    pub catalog: Catalog,
    pub settings: EditorSettings,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl EngineCore {
    #[must_use]
    pub fn new(room: Room, catalog: Catalog, settings: EditorSettings) -> Self {
        let scene = Scene::new(room);
        let history = History::new(scene.snapshot(), settings.history_depth);
        let ui = UiState {
            snap: SnapSettings { enabled: settings.snap_enabled, grid_visible: true, grid_px: settings.grid_px },
            ..UiState::default()
        };
        Self {
            scene,
            history,
            camera: Camera::default(),
            ui,
            input: InputState::Idle,
            zone: ZoneFill::new(),
            catalog,
            settings,
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }

    // --- Data inputs ---

    /// Replace the scene (e.g. loaded from storage) and start a fresh history.
    pub fn load_scene(&mut self, scene: Scene) {
        self.history.reset(scene.snapshot());
        self.scene = scene;
        self.input = InputState::Idle;
        self.zone = ZoneFill::new();
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    // --- Tool / catalog ---

    /// Set the active tool. Leaving ai-zone drops a zone that isn't in flight.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        if self.ui.tool == Tool::AiZone && tool != Tool::AiZone {
            if let Err(error) = self.zone.cancel() {
                debug!(%error, "zone: kept in-flight zone on tool change");
            }
        }
        self.ui.tool = tool;
        vec![Action::ToolChanged(tool), Action::SetCursor(tool.cursor().into()), Action::RenderNeeded]
    }

    /// Pick a catalog definition. `Append` places it at the room center now;
    /// `Arm` switches to the furniture tool and places it on the next click.
    pub fn choose_definition(&mut self, id: &str, mode: PlacementMode) -> Vec<Action> {
        let Some(definition) = self.catalog.get(id).cloned() else {
            debug!(id, "engine: unknown definition");
            return vec![Action::Notify(format!("Unknown furniture: {id}"))];
        };
        match mode {
            PlacementMode::Append => {
                let position = self.default_position();
                self.place_furniture(definition, Some(position))
            }
            PlacementMode::Arm if self.gesture_active() => {
                debug!(id, "engine: arm ignored mid-gesture");
                Vec::new()
            }
            PlacementMode::Arm => {
                self.ui.armed = Some(definition);
                self.set_tool(Tool::Furniture)
            }
        }
    }

    /// A catalog item dropped on the canvas at `screen_pt`.
    pub fn on_drop(&mut self, screen_pt: Point, payload: &DropPayload) -> Vec<Action> {
        match payload.resolve(&self.catalog) {
            Ok(definition) => {
                let world = self.snapped_world(screen_pt);
                self.place_furniture(definition, Some(world))
            }
            Err(error) => {
                debug!(%error, "engine: drop rejected");
                vec![Action::Notify(error.to_string())]
            }
        }
    }

    /// Decode a raw drop payload at the boundary, then handle it like [`Self::on_drop`].
    pub fn on_drop_json(&mut self, screen_pt: Point, json: &str) -> Vec<Action> {
        match DropPayload::decode(json) {
            Ok(payload) => self.on_drop(screen_pt, &payload),
            Err(error) => {
                debug!(%error, "engine: malformed drop payload");
                vec![Action::Notify("Unrecognized drop".into())]
            }
        }
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if !matches!(self.input, InputState::Idle) {
            return Vec::new();
        }
        if button == Button::Middle || (button == Button::Primary && self.ui.tool == Tool::Pan) {
            self.input = InputState::Panning { last_screen: screen_pt };
            return vec![Action::SetCursor("grabbing".into())];
        }
        if button != Button::Primary {
            return Vec::new();
        }

        let world = self.camera.screen_to_world(screen_pt);
        match self.ui.tool {
            Tool::Select => self.select_down(screen_pt, world),
            Tool::Wall => self.wall_down(world),
            Tool::Door | Tool::Window => match self.ui.tool.opening_kind() {
                Some(kind) => self.place_opening(kind, self.ui.snap.apply(world)),
                None => Vec::new(),
            },
            Tool::Furniture => match self.ui.armed.clone() {
                Some(definition) => self.place_furniture(definition, Some(self.ui.snap.apply(world))),
                None => Vec::new(),
            },
            Tool::AiZone => match self.zone.begin(world) {
                Ok(()) => {
                    self.input = InputState::DrawingZone;
                    vec![Action::RenderNeeded]
                }
                Err(error) => vec![Action::Notify(error.to_string())],
            },
            Tool::Pan => Vec::new(),
        }
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, modifiers: Modifiers) -> Vec<Action> {
        let world = self.camera.screen_to_world(screen_pt);
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { last_screen } => {
                self.camera.pan_by(screen_pt.x - last_screen.x, screen_pt.y - last_screen.y);
                self.input = InputState::Panning { last_screen: screen_pt };
                vec![Action::RenderNeeded]
            }
            InputState::DraggingObject { id, grab_offset, .. } => {
                let target = self.ui.snap.apply(world.add(grab_offset));
                self.scene.update_transform(&id, TransformUpdate { position: Some(target), rotation: None });
                vec![Action::RenderNeeded]
            }
            InputState::RotatingObject { id, center, orig_rotation, start_angle } => {
                let mut rotation = orig_rotation + bearing_deg(center, world) - start_angle;
                if modifiers.shift {
                    rotation = snap_value(rotation, ROTATE_STEP_DEG);
                }
                self.scene.update_transform(&id, TransformUpdate { position: None, rotation: Some(rotation) });
                vec![Action::RenderNeeded]
            }
            InputState::DrawingWall { id, .. } => {
                self.scene.set_wall_end(&id, self.ui.snap.apply(world));
                vec![Action::RenderNeeded]
            }
            InputState::DrawingZone => {
                self.zone.resize(world);
                vec![Action::RenderNeeded]
            }
        }
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        let cursor = Action::SetCursor(self.ui.tool.cursor().into());
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::Panning { .. } => vec![cursor],
            InputState::DraggingObject { .. } => {
                let mut actions = self.commit_if_changed("move");
                actions.push(cursor);
                actions
            }
            InputState::RotatingObject { .. } => {
                let mut actions = self.commit_if_changed("rotate");
                actions.push(cursor);
                actions
            }
            InputState::DrawingWall { id, anchor } => self.finish_wall(id, anchor),
            InputState::DrawingZone => match self.zone.finish(self.settings.zone_min_px) {
                Some(rect) => {
                    info!(width = rect.width, height = rect.height, "zone: awaiting prompt");
                    vec![Action::ZonePromptRequested(rect), Action::RenderNeeded]
                }
                None => {
                    debug!("zone: selection too small, discarded");
                    vec![Action::RenderNeeded]
                }
            },
        }
    }

    /// Ctrl/Cmd + wheel zooms toward the cursor; a plain wheel pans.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if modifiers.command() {
            self.camera.zoom_by((-delta.dy * WHEEL_ZOOM_SENSITIVITY).exp(), screen_pt);
        } else {
            self.camera.pan_by(-delta.dx, -delta.dy);
        }
        vec![Action::RenderNeeded]
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: Key, modifiers: Modifiers) -> Vec<Action> {
        if self.ui.text_input_focused {
            return Vec::new();
        }
        let name = key.normalized();
        if modifiers.command() {
            return match name.as_str() {
                "z" if modifiers.shift => self.redo(),
                "z" => self.undo(),
                "y" => self.redo(),
                "0" => self.fit_view(),
                _ => Vec::new(),
            };
        }
        match name.as_str() {
            "v" => self.set_tool(Tool::Select),
            "w" => self.set_tool(Tool::Wall),
            "f" => self.set_tool(Tool::Furniture),
            "a" => self.set_tool(Tool::AiZone),
            "p" => self.set_tool(Tool::Pan),
            "d" => self.place_opening(OpeningKind::Door, self.default_position()),
            "n" => self.place_opening(OpeningKind::Window, self.default_position()),
            "r" if modifiers.shift => self.rotate_selection(-ROTATE_STEP_DEG),
            "r" => self.rotate_selection(ROTATE_STEP_DEG),
            "q" => self.quarter_turn(),
            "delete" | "backspace" => self.delete_selection(),
            "escape" => self.escape(),
            "+" | "=" => self.zoom_in(),
            "-" => self.zoom_out(),
            "g" => {
                self.ui.snap.toggle_grid();
                vec![Action::RenderNeeded]
            }
            "s" => {
                self.ui.snap.toggle_enabled();
                debug!(enabled = self.ui.snap.enabled, "engine: snap toggled");
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    // --- Commands ---

    /// Rotate the selection by `delta_deg`. Works in any tool.
    pub fn rotate_selection(&mut self, delta_deg: f64) -> Vec<Action> {
        if self.gesture_active() {
            return Vec::new();
        }
        let Some(sel) = self.scene.selected() else {
            return Vec::new();
        };
        if self.scene.rotate_by(&sel.id, delta_deg) {
            vec![self.commit("rotate"), Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    pub fn quarter_turn(&mut self) -> Vec<Action> {
        self.rotate_selection(QUARTER_TURN_DEG)
    }

    pub fn delete_selection(&mut self) -> Vec<Action> {
        if self.gesture_active() {
            return Vec::new();
        }
        let Some(sel) = self.scene.selected() else {
            return Vec::new();
        };
        match self.scene.remove(&sel.id) {
            Some(_) => vec![self.commit("delete"), Action::SelectionChanged(None), Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    pub fn undo(&mut self) -> Vec<Action> {
        if self.gesture_active() {
            return Vec::new();
        }
        let before = self.scene.selected();
        match self.history.undo() {
            Some(snapshot) => self.scene.restore(snapshot),
            None => return Vec::new(),
        }
        debug!(cursor = self.history.cursor(), "engine: undo");
        self.after_restore(before)
    }

    pub fn redo(&mut self) -> Vec<Action> {
        if self.gesture_active() {
            return Vec::new();
        }
        let before = self.scene.selected();
        match self.history.redo() {
            Some(snapshot) => self.scene.restore(snapshot),
            None => return Vec::new(),
        }
        debug!(cursor = self.history.cursor(), "engine: redo");
        self.after_restore(before)
    }

    pub fn zoom_in(&mut self) -> Vec<Action> {
        self.camera.zoom_by(ZOOM_STEP, self.viewport_center());
        vec![Action::RenderNeeded]
    }

    pub fn zoom_out(&mut self) -> Vec<Action> {
        self.camera.zoom_by(1.0 / ZOOM_STEP, self.viewport_center());
        vec![Action::RenderNeeded]
    }

    /// Fit the room and everything in it into the viewport.
    pub fn fit_view(&mut self) -> Vec<Action> {
        self.camera.fit_to(self.scene.content_bounds(), self.viewport_width, self.viewport_height, FIT_PADDING_PX);
        vec![Action::RenderNeeded]
    }

    // --- Zone fill ---

    /// Attach a prompt to the awaiting zone and get the request to send.
    ///
    /// # Errors
    ///
    /// Propagates [`ZoneError`] from the orchestrator.
    pub fn submit_zone_prompt(&mut self, prompt: &str, use_saved_preferences: bool) -> Result<GenerationRequest, ZoneError> {
        let request = self.zone.submit(prompt, use_saved_preferences, self.scene.room())?;
        info!(prompt_len = request.prompt_text.len(), "zone: request submitted");
        Ok(request)
    }

    /// Drop a zone being drawn or awaiting a prompt.
    pub fn cancel_zone(&mut self) -> Vec<Action> {
        match self.zone.cancel() {
            Ok(()) => {
                if matches!(self.input, InputState::DrawingZone) {
                    self.input = InputState::Idle;
                }
                info!("zone: cancelled");
                vec![Action::RenderNeeded]
            }
            Err(error) => vec![Action::Notify(error.to_string())],
        }
    }

    /// Merge the generator's outcome. Every placement that resolves and fits
    /// lands in the scene under a single history entry; a failure merges
    /// nothing. Either way the zone is cleared and the tool reverts to select.
    pub fn apply_generation<E: Display>(&mut self, outcome: Result<GenerationResponse, E>) -> Vec<Action> {
        let Some(zone) = self.zone.complete() else {
            warn!("zone: outcome arrived with no request in flight");
            return Vec::new();
        };
        // Drop any gesture in progress so the merge commit sees a settled scene.
        let mut actions = self.cancel_gesture();
        match outcome {
            Ok(response) => {
                let mut placed = 0usize;
                let mut skipped = 0usize;
                for item in &response.furniture {
                    let Some(definition) = self.catalog.get(&item.id).cloned() else {
                        warn!(id = %item.id, "zone: unknown definition, skipped");
                        skipped += 1;
                        continue;
                    };
                    let position = Point::new(item.x, item.y);
                    if !zone.contains(position) {
                        debug!(id = %item.id, x = item.x, y = item.y, "zone: placement outside the zone");
                    }
                    match self.scene.add_furniture(definition, Some(position), Some(item.rotation)) {
                        Ok(_) => placed += 1,
                        Err(error) => {
                            warn!(id = %item.id, %error, "zone: placement skipped");
                            skipped += 1;
                        }
                    }
                }
                info!(placed, skipped, "zone: merged");
                if placed > 0 {
                    actions.push(self.commit("zone fill"));
                }
                if skipped > 0 {
                    actions.push(Action::Notify(format!("{skipped} suggested items could not be placed")));
                }
                for suggestion in response.suggestions.unwrap_or_default() {
                    actions.push(Action::Notify(suggestion));
                }
            }
            Err(error) => {
                warn!(error = %error, "zone: generation failed");
                actions.push(Action::Notify(format!("Zone fill failed: {error}")));
            }
        }
        actions.extend(self.set_tool(Tool::Select));
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn selection(&self) -> Option<SelectedObject> {
        self.scene.selected()
    }

    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.scene.get(id)
    }

    #[must_use]
    pub fn zone_selection(&self) -> Option<ZoneRect> {
        self.zone.selection()
    }

    // --- Internals ---

    fn commit(&mut self, label: &'static str) -> Action {
        self.history.commit(self.scene.snapshot());
        debug!(label, objects = self.scene.object_count(), cursor = self.history.cursor(), "engine: commit");
        Action::Committed { label }
    }

    fn commit_if_changed(&mut self, label: &'static str) -> Vec<Action> {
        if self.history.current() == Some(&self.scene.snapshot()) {
            return Vec::new();
        }
        vec![self.commit(label), Action::RenderNeeded]
    }

    fn after_restore(&self, before: Option<SelectedObject>) -> Vec<Action> {
        let after = self.scene.selected();
        let mut actions = vec![Action::RenderNeeded];
        if after != before {
            actions.push(Action::SelectionChanged(after));
        }
        actions
    }

    fn select_down(&mut self, screen_pt: Point, world: Point) -> Vec<Action> {
        let selected_id = self.scene.selected().map(|s| s.id);
        let Some(hit) = hit_test(world, &self.scene, &self.camera, selected_id) else {
            self.input = InputState::Panning { last_screen: screen_pt };
            if selected_id.is_some() {
                self.scene.set_selected(None);
                return vec![Action::SelectionChanged(None), Action::RenderNeeded];
            }
            return Vec::new();
        };

        let Some(obj) = self.scene.get(&hit.object_id) else {
            return Vec::new();
        };
        let (position, rotation) = (obj.position(), obj.rotation());
        match hit.part {
            HitPart::RotateHandle => {
                self.input = InputState::RotatingObject {
                    id: hit.object_id,
                    center: position,
                    orig_rotation: rotation,
                    start_angle: bearing_deg(position, world),
                };
                vec![Action::SetCursor("grabbing".into())]
            }
            HitPart::Body => {
                self.input = InputState::DraggingObject { id: hit.object_id, grab_offset: position.sub(world), orig: position };
                let mut actions = vec![Action::SetCursor("move".into()), Action::RenderNeeded];
                if selected_id != Some(hit.object_id) {
                    self.scene.set_selected(Some(hit.object_id));
                    actions.insert(0, Action::SelectionChanged(self.scene.selected()));
                }
                actions
            }
        }
    }

    fn wall_down(&mut self, world: Point) -> Vec<Action> {
        let anchor = self.ui.snap.apply(world);
        match self.scene.add_wall(anchor, anchor, DEFAULT_WALL_THICKNESS_PX) {
            Ok(id) => {
                self.input = InputState::DrawingWall { id, anchor };
                vec![Action::RenderNeeded]
            }
            Err(error) => {
                debug!(%error, "engine: wall rejected");
                Vec::new()
            }
        }
    }

    fn finish_wall(&mut self, id: ObjectId, anchor: Point) -> Vec<Action> {
        let short = match self.scene.get(&id) {
            Some(SceneObject::Wall(w)) => w.length() < MIN_WALL_LENGTH_PX,
            _ => return Vec::new(),
        };
        if short {
            self.scene.set_wall_end(&id, Point::new(anchor.x + DEFAULT_WALL_LENGTH_PX, anchor.y));
        }
        self.scene.set_selected(Some(id));
        vec![
            self.commit("add wall"),
            Action::SelectionChanged(self.scene.selected()),
            Action::SetCursor(self.ui.tool.cursor().into()),
            Action::RenderNeeded,
        ]
    }

    fn place_opening(&mut self, kind: OpeningKind, position: Point) -> Vec<Action> {
        if self.gesture_active() {
            debug!(?kind, "engine: opening ignored mid-gesture");
            return Vec::new();
        }
        match self.scene.add_opening(kind, position) {
            Ok(id) => self.select_and_commit(id, "add opening"),
            Err(error) => {
                debug!(?kind, %error, "engine: opening rejected");
                Vec::new()
            }
        }
    }

    fn place_furniture(&mut self, definition: Arc<FurnitureDefinition>, position: Option<Point>) -> Vec<Action> {
        let def_id = definition.id.clone();
        if self.gesture_active() {
            debug!(id = %def_id, "engine: furniture ignored mid-gesture");
            return Vec::new();
        }
        match self.scene.add_furniture(definition, position, None) {
            Ok(id) => self.select_and_commit(id, "add furniture"),
            Err(error) => {
                debug!(id = %def_id, %error, "engine: furniture rejected");
                Vec::new()
            }
        }
    }

    fn select_and_commit(&mut self, id: ObjectId, label: &'static str) -> Vec<Action> {
        self.scene.set_selected(Some(id));
        vec![self.commit(label), Action::SelectionChanged(self.scene.selected()), Action::RenderNeeded]
    }

    /// Abandon the gesture in progress, putting the scene back as it was at pointer-down.
    fn cancel_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => return Vec::new(),
            InputState::Panning { .. } => {}
            InputState::DraggingObject { id, orig, .. } => {
                self.scene.update_transform(&id, TransformUpdate { position: Some(orig), rotation: None });
            }
            InputState::RotatingObject { id, orig_rotation, .. } => {
                self.scene.update_transform(&id, TransformUpdate { position: None, rotation: Some(orig_rotation) });
            }
            InputState::DrawingWall { id, .. } => {
                self.scene.remove(&id);
            }
            InputState::DrawingZone => {
                if let Err(error) = self.zone.cancel() {
                    debug!(%error, "zone: cancel refused");
                }
            }
        }
        debug!("engine: gesture cancelled");
        vec![Action::SetCursor(self.ui.tool.cursor().into()), Action::RenderNeeded]
    }

    fn escape(&mut self) -> Vec<Action> {
        if self.gesture_active() {
            let mut actions = self.cancel_gesture();
            if self.ui.tool == Tool::AiZone {
                actions.extend(self.set_tool(Tool::Select));
            }
            return actions;
        }
        self.ui.armed = None;
        if self.ui.tool == Tool::AiZone {
            let mut actions = self.cancel_zone();
            actions.extend(self.set_tool(Tool::Select));
            return actions;
        }
        if self.scene.selected().is_none() {
            return Vec::new();
        }
        self.scene.set_selected(None);
        vec![Action::SelectionChanged(None), Action::RenderNeeded]
    }

    fn gesture_active(&self) -> bool {
        !matches!(self.input, InputState::Idle)
    }

    /// Room center, on the grid when snapping is on.
    fn default_position(&self) -> Point {
        self.ui.snap.apply(self.scene.bounds().center())
    }

    fn snapped_world(&self, screen_pt: Point) -> Point {
        self.ui.snap.apply(self.camera.screen_to_world(screen_pt))
    }

    fn viewport_center(&self) -> Point {
        Point::new(self.viewport_width * 0.5, self.viewport_height * 0.5)
    }
}

/// Direction from `from` to `to` in degrees.
fn bearing_deg(from: Point, to: Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}
