//! Local UI chrome state (form panel, stories modal).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the requirement inventory so
//! widgets can evolve independently of record data. The flags are independent
//! of each other; no transition depends on another flag.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Visibility flags for the dashboard's conditional panels.
///
/// Wrapped in an `RwSignal` and provided via context at the app root.
/// Session-local: resets on reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// New-requirement form panel, hidden initially.
    pub form_open: bool,
    /// Generated-stories modal, hidden initially.
    pub stories_open: bool,
}

impl UiState {
    /// Flip the new-requirement panel.
    pub fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
    }

    pub fn open_stories(&mut self) {
        self.stories_open = true;
    }

    pub fn close_stories(&mut self) {
        self.stories_open = false;
    }
}
