use super::*;

#[test]
fn nav_state_default_has_no_active_menu() {
    let state = NavState::default();
    assert!(state.active_menu.is_none());
    assert!(!state.is_active(NEW_INVOICE_MENU));
}

#[test]
fn set_active_menu_replaces_previous_section() {
    let mut state = NavState::default();
    state.set_active_menu("overview");
    state.set_active_menu(NEW_INVOICE_MENU);
    assert!(state.is_active("new"));
    assert!(!state.is_active("overview"));
}
