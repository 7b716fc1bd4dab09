//! Host navigation state: which menu section is highlighted.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Menu section shown for the invoice form.
pub const NEW_INVOICE_MENU: &str = "new";

/// Active navigation section, set by pages when they mount.
///
/// Provided as `RwSignal<NavState>` context from `App`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active_menu: Option<String>,
}

impl NavState {
    pub fn set_active_menu(&mut self, name: &str) {
        self.active_menu = Some(name.to_owned());
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active_menu.as_deref() == Some(name)
    }
}
