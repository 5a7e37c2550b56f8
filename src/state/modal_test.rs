use super::*;

#[test]
fn starts_closed_with_empty_src() {
    let state = ModalState::default();
    assert!(!state.is_open());
    assert_eq!(state.image_src(), "");
    assert_eq!(state.aria_hidden(), "true");
}

#[test]
fn open_with_empty_src_is_noop() {
    let mut state = ModalState::default();
    assert!(!state.open(""));
    assert!(!state.is_open());
    assert_eq!(state.image_src(), "");
}

#[test]
fn open_loads_image_and_shows_overlay() {
    let mut state = ModalState::default();
    assert!(state.open("work/deck.png"));
    assert!(state.is_open());
    assert_eq!(state.image_src(), "work/deck.png");
    assert_eq!(state.aria_hidden(), "false");
}

#[test]
fn close_hides_and_clears_image() {
    let mut state = ModalState::default();
    state.open("x.png");
    state.close();
    assert!(!state.is_open());
    assert_eq!(state.image_src(), "");
}

#[test]
fn reopening_replaces_the_source() {
    let mut state = ModalState::default();
    state.open("a.png");
    state.open("b.png");
    assert_eq!(state.image_src(), "b.png");
}

#[test]
fn close_if_open_reports_whether_it_acted() {
    let mut state = ModalState::default();
    assert!(!state.close_if_open());
    state.open("x.png");
    assert!(state.close_if_open());
    assert!(!state.close_if_open());
}
