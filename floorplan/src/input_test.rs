use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_select() {
    assert_eq!(Tool::default(), Tool::Select);
}

#[test]
fn opening_kind_only_for_door_and_window() {
    assert_eq!(Tool::Door.opening_kind(), Some(OpeningKind::Door));
    assert_eq!(Tool::Window.opening_kind(), Some(OpeningKind::Window));
    for tool in [Tool::Select, Tool::Pan, Tool::Wall, Tool::Furniture, Tool::AiZone] {
        assert_eq!(tool.opening_kind(), None);
    }
}

#[test]
fn drawing_tools_use_crosshair() {
    assert_eq!(Tool::Wall.cursor(), "crosshair");
    assert_eq!(Tool::AiZone.cursor(), "crosshair");
    assert_eq!(Tool::Pan.cursor(), "grab");
}

// =============================================================
// Modifiers / Key
// =============================================================

#[test]
fn command_is_ctrl_or_meta() {
    assert!(!Modifiers::default().command());
    assert!(Modifiers { ctrl: true, ..Default::default() }.command());
    assert!(Modifiers { meta: true, ..Default::default() }.command());
    assert!(!Modifiers { shift: true, alt: true, ..Default::default() }.command());
}

#[test]
fn key_normalized_lowercases() {
    assert_eq!(Key("R".into()).normalized(), "r");
    assert_eq!(Key("Delete".into()).normalized(), "delete");
}

// =============================================================
// UiState / InputState
// =============================================================

#[test]
fn ui_state_defaults() {
    let ui = UiState::default();
    assert_eq!(ui.tool, Tool::Select);
    assert!(ui.armed.is_none());
    assert!(!ui.text_input_focused);
    assert!(ui.snap.enabled);
}

#[test]
fn input_state_default_is_idle() {
    assert!(matches!(InputState::default(), InputState::Idle));
}

#[test]
fn tool_names_are_kebab_case() {
    assert_eq!(serde_json::to_string(&Tool::AiZone).unwrap(), "\"ai-zone\"");
    assert_eq!(serde_json::from_str::<Tool>("\"wall\"").unwrap(), Tool::Wall);
    assert_eq!(serde_json::from_str::<Button>("\"middle\"").unwrap(), Button::Middle);
}
