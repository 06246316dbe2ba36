use super::*;

#[test]
fn menu_starts_closed() {
    assert_eq!(MenuState::default(), MenuState::Closed);
    assert!(!MenuState::default().is_open());
}

#[test]
fn menu_button_opens_closed_menu() {
    assert_eq!(MenuState::Closed.on_menu_button(), MenuState::Open);
}

#[test]
fn menu_button_closes_open_menu() {
    assert_eq!(MenuState::Open.on_menu_button(), MenuState::Closed);
}

#[test]
fn nav_link_closes_open_menu() {
    assert_eq!(MenuState::Open.on_nav_link(), MenuState::Closed);
}

#[test]
fn nav_link_keeps_closed_menu_closed() {
    assert_eq!(MenuState::Closed.on_nav_link(), MenuState::Closed);
}

#[test]
fn mount_step_resets_to_closed() {
    assert_eq!(MenuState::Open.on_mounted(), MenuState::Closed);
    assert_eq!(MenuState::Closed.on_mounted(), MenuState::Closed);
}

#[test]
fn repeated_button_presses_alternate() {
    let mut state = MenuState::Closed;
    for i in 0..6 {
        state = state.on_menu_button();
        assert_eq!(state.is_open(), i % 2 == 0);
    }
}
