//! Configuration document schema and decoding.
//!
//! A configuration document is a single JSON object describing the tray icon
//! and the ordered list of menu items. Decoding is all-or-nothing: a document
//! that fails to decode leaves any previously applied configuration intact.

use serde::Deserialize;

use crate::error::ConfigError;

/// One declared menu entry.
///
/// The `type` tag is an open set: unknown values survive decoding and are
/// skipped with a warning when the menu is interpreted, so documents written
/// against a newer schema still load.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemDescriptor {
    /// Item kind tag: `normal`, `separator`, `label` or `checkbox`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Display text. Required, but may be empty (a separator ignores it).
    pub title: String,
    /// Stable identifier carried by dispatched events. Uniqueness is the
    /// document author's responsibility; it is not enforced here.
    pub id: String,
    /// Optional icon reference: a file path or a symbolic icon name.
    #[serde(default)]
    pub icon: Option<String>,
    /// Bold title decoration.
    pub is_bold: bool,
    /// Underlined title decoration.
    pub is_underlined: bool,
    /// Forces the item non-interactive.
    pub is_disabled: bool,
    /// Initial checked state, meaningful only for `checkbox` items.
    /// Absent means unchecked.
    #[serde(default)]
    pub is_checked: Option<bool>,
}

/// The whole configuration document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuConfig {
    /// Optional icon reference for the status-bar button itself.
    #[serde(default)]
    pub tray_icon: Option<String>,
    /// Ordered menu entries; order is preserved in the rendered menu.
    pub menu_items: Vec<MenuItemDescriptor>,
    /// Whether a separator plus a quit entry is appended after all items.
    pub show_quit_item: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            tray_icon: None,
            menu_items: Vec::new(),
            show_quit_item: true,
        }
    }
}

impl MenuConfig {
    /// Decodes a configuration document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}
