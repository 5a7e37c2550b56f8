use super::*;

#[test]
fn panel_starts_closed() {
    let state = PanelState::default();
    assert!(!state.is_open);
    assert_eq!(state.panel_aria_hidden(), "true");
    assert_eq!(state.overlay_aria_hidden(), "true");
    assert_eq!(state.trigger_aria_expanded(), "false");
}

#[test]
fn open_sets_all_aria_values_in_lockstep() {
    let mut state = PanelState::default();
    state.open();
    assert_eq!(state.panel_aria_hidden(), "false");
    assert_eq!(state.overlay_aria_hidden(), "false");
    assert_eq!(state.trigger_aria_expanded(), "true");
}

#[test]
fn open_then_close_restores_hidden_state() {
    let mut state = PanelState::default();
    state.open();
    state.close();
    assert_eq!(state.panel_aria_hidden(), "true");
    assert_eq!(state.overlay_aria_hidden(), "true");
    assert_eq!(state.trigger_aria_expanded(), "false");
}

#[test]
fn close_is_idempotent() {
    let mut state = PanelState::default();
    state.open();
    state.close();
    let after_first = state;
    state.close();
    assert_eq!(state, after_first);
}

#[test]
fn open_is_idempotent() {
    let mut state = PanelState::default();
    state.open();
    state.open();
    assert!(state.is_open);
}

#[test]
fn toggle_alternates() {
    let mut state = PanelState::default();
    state.toggle();
    assert!(state.is_open);
    state.toggle();
    assert!(!state.is_open);
}
