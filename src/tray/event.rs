//! Internal events emitted by the tray icon.
//!
//! These events are sent from the ksni activate callbacks to the controller's
//! dispatch loop, where they are turned into notification lines.

/// Internal events emitted by the tray icon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrayEvent {
    /// A normal menu item was clicked.
    Clicked(String),
    /// A checkbox item was toggled; carries the new checked state.
    CheckboxToggled(String, bool),
    /// The reserved quit entry was activated.
    Quit,
}
