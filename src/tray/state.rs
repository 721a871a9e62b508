//! Tray state management.
//!
//! This module holds the internal state of the tray icon: the current
//! configuration, the live menu tree built from it, and the methods for
//! rebuilding the tree and toggling checkboxes.

use crate::config::MenuConfig;
use crate::icon;
use crate::menu::interpret::interpret;
use crate::menu::node::{MenuNode, NodeIcon};
use crate::tray::event::TrayEvent;
use crate::tray::ksni_impl::KsniTray;
use ksni::menu::*;
use std::sync::mpsc::Sender;
use tracing::warn;

/// Internal state of the tray icon.
///
/// This struct holds the current configuration, the live menu tree, the tray
/// button icon, and the event channel used by activate callbacks.
pub struct TrayState {
    /// Unique identifier for this tray icon on the bus.
    pub tray_id: String,
    /// The title text of the tray icon.
    pub title: String,
    /// The name of the tray icon from the freedesktop icon theme.
    pub icon_name: String,
    /// Raw tray icon data as pixmaps.
    pub icon_pixmap: Vec<ksni::Icon>,
    /// The currently applied configuration document.
    pub config: MenuConfig,
    /// The live menu tree; rebuilt wholesale by `construct_menu`.
    pub nodes: Vec<MenuNode>,
    /// Channel sender for emitting interaction events to the dispatcher.
    pub event_sender: Option<Sender<TrayEvent>>,
}

impl TrayState {
    /// Creates a new `TrayState` with an empty default configuration.
    pub fn new(tray_id: String) -> Self {
        Self {
            tray_id,
            title: "configtray".to_string(),
            icon_name: "application-x-executable".to_string(),
            icon_pixmap: Vec::new(),
            config: MenuConfig::default(),
            nodes: Vec::new(),
            event_sender: None,
        }
    }

    /// Replaces the stored configuration wholesale and applies the tray icon
    /// it declares, if any. The live menu tree is untouched until the next
    /// `construct_menu` call.
    pub fn apply_config(&mut self, config: MenuConfig) {
        if let Some(reference) = config.tray_icon.as_deref()
            && !reference.is_empty()
        {
            self.apply_tray_icon(reference);
        }
        self.config = config;
    }

    /// Resolves a reference and applies it as the tray button icon.
    ///
    /// A reference that resolves neither as a file nor as a symbolic name
    /// leaves the current icon unchanged.
    pub fn apply_tray_icon(&mut self, reference: &str) {
        match icon::resolve(reference) {
            Some(NodeIcon::Loaded { pixmap, .. }) => {
                self.icon_pixmap = vec![pixmap];
                self.icon_name = String::new();
            }
            Some(NodeIcon::Named(name)) => {
                self.icon_name = name;
                self.icon_pixmap.clear();
            }
            None => warn!(reference, "failed to set tray icon"),
        }
    }

    /// Rebuilds the live menu tree from the stored configuration.
    ///
    /// The previous tree is discarded along with any checkbox toggles made
    /// since the last build. Declaration order is preserved; items of
    /// unrecognized kind contribute nothing. When the configuration asks for
    /// a quit entry, one separator and one quit node are appended after all
    /// declared items.
    pub fn construct_menu(&mut self) {
        self.nodes.clear();
        for item in &self.config.menu_items {
            let Some(mut node) = interpret(item) else {
                continue;
            };
            // Separators are appended directly; no icon consideration.
            if !matches!(node, MenuNode::Separator)
                && let Some(reference) = item.icon.as_deref()
                && !reference.is_empty()
            {
                let resolved = icon::resolve(reference);
                if resolved.is_none() {
                    warn!(reference, "failed to resolve menu item icon");
                }
                node.attach_icon(resolved);
            }
            self.nodes.push(node);
        }
        if self.config.show_quit_item {
            self.nodes.push(MenuNode::Separator);
            self.nodes.push(MenuNode::Quit);
        }
    }

    /// Finds a checkbox node by id and flips its checked state.
    ///
    /// Returns the new state, or `None` when no checkbox carries the id.
    /// State is written to the live node only; the configuration descriptor
    /// keeps its original `isChecked`.
    pub fn find_and_toggle_checkbox(&mut self, id: &str) -> Option<bool> {
        for node in &mut self.nodes {
            if let MenuNode::Checkbox {
                id: node_id,
                checked,
                ..
            } = node
                && node_id == id
            {
                *checked = !*checked;
                return Some(*checked);
            }
        }
        None
    }

    /// Renders the live menu tree into the ksni menu structure.
    pub fn build_menu_items(&self) -> Vec<MenuItem<KsniTray>> {
        self.nodes
            .iter()
            .map(|node| self.build_menu_item(node))
            .collect()
    }

    /// Converts a single live node into a ksni menu item.
    ///
    /// Computed title styles are not forwarded: dbusmenu labels are plain
    /// text, so the style stays observable on the node only.
    fn build_menu_item(&self, node: &MenuNode) -> MenuItem<KsniTray> {
        match node {
            MenuNode::Standard {
                id,
                label,
                icon,
                enabled,
                ..
            } => {
                let id_clone = id.clone();
                let sender = self.event_sender.clone();
                let (icon_name, icon_data) = split_icon(icon);
                StandardItem {
                    label: label.clone(),
                    icon_name,
                    icon_data,
                    enabled: *enabled,
                    activate: Box::new(move |_this: &mut KsniTray| {
                        if let Some(ref tx) = sender {
                            let _ = tx.send(TrayEvent::Clicked(id_clone.clone()));
                        }
                    }),
                    ..Default::default()
                }
                .into()
            }
            MenuNode::Checkbox {
                id,
                label,
                icon,
                enabled,
                checked,
                ..
            } => {
                let id_clone = id.clone();
                let sender = self.event_sender.clone();
                let (icon_name, icon_data) = split_icon(icon);
                CheckmarkItem {
                    label: label.clone(),
                    icon_name,
                    icon_data,
                    enabled: *enabled,
                    checked: *checked,
                    activate: Box::new(move |this: &mut KsniTray| {
                        let new_checked = {
                            let mut state = this.state.lock().unwrap();
                            state.find_and_toggle_checkbox(&id_clone)
                        };

                        if let (Some(tx), Some(checked)) = (&sender, new_checked) {
                            let _ = tx.send(TrayEvent::CheckboxToggled(id_clone.clone(), checked));
                        }
                    }),
                    ..Default::default()
                }
                .into()
            }
            MenuNode::Label { label, icon, .. } => {
                let (icon_name, icon_data) = split_icon(icon);
                StandardItem {
                    label: label.clone(),
                    icon_name,
                    icon_data,
                    enabled: false,
                    ..Default::default()
                }
                .into()
            }
            MenuNode::Separator => MenuItem::Separator,
            MenuNode::Quit => {
                let sender = self.event_sender.clone();
                StandardItem {
                    label: "Quit".to_string(),
                    icon_name: "application-exit".to_string(),
                    activate: Box::new(move |_this: &mut KsniTray| {
                        if let Some(ref tx) = sender {
                            let _ = tx.send(TrayEvent::Quit);
                        }
                    }),
                    ..Default::default()
                }
                .into()
            }
        }
    }
}

/// Splits a resolved node icon into the two ksni menu item fields.
fn split_icon(icon: &Option<NodeIcon>) -> (String, Vec<u8>) {
    match icon {
        Some(NodeIcon::Named(name)) => (name.clone(), Vec::new()),
        Some(NodeIcon::Loaded { png, .. }) => (String::new(), png.clone()),
        None => (String::new(), Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MenuItemDescriptor;

    fn item(kind: &str, id: &str) -> MenuItemDescriptor {
        MenuItemDescriptor {
            kind: kind.to_string(),
            title: format!("title-{id}"),
            id: id.to_string(),
            icon: None,
            is_bold: false,
            is_underlined: false,
            is_disabled: false,
            is_checked: None,
        }
    }

    fn state_with(items: Vec<MenuItemDescriptor>, show_quit_item: bool) -> TrayState {
        let mut state = TrayState::new("test".to_string());
        state.config = MenuConfig {
            tray_icon: None,
            menu_items: items,
            show_quit_item,
        };
        state
    }

    #[test]
    fn preserves_declaration_order() {
        let mut state = state_with(
            vec![
                item("normal", "a"),
                item("separator", ""),
                item("label", ""),
                item("checkbox", "b"),
            ],
            false,
        );
        state.construct_menu();

        assert_eq!(state.nodes.len(), 4);
        assert!(matches!(&state.nodes[0], MenuNode::Standard { id, .. } if id == "a"));
        assert!(matches!(state.nodes[1], MenuNode::Separator));
        assert!(matches!(state.nodes[2], MenuNode::Label { .. }));
        assert!(matches!(&state.nodes[3], MenuNode::Checkbox { id, .. } if id == "b"));
    }

    #[test]
    fn unknown_kind_contributes_nothing() {
        let mut state = state_with(
            vec![item("normal", "a"), item("bogus", "x"), item("normal", "b")],
            false,
        );
        state.construct_menu();

        assert_eq!(state.nodes.len(), 2);
        assert!(matches!(&state.nodes[0], MenuNode::Standard { id, .. } if id == "a"));
        assert!(matches!(&state.nodes[1], MenuNode::Standard { id, .. } if id == "b"));
    }

    #[test]
    fn quit_appended_after_all_items() {
        let mut state = state_with(vec![item("normal", "a")], true);
        state.construct_menu();

        assert_eq!(state.nodes.len(), 3);
        assert!(matches!(state.nodes[1], MenuNode::Separator));
        assert!(matches!(state.nodes[2], MenuNode::Quit));
    }

    #[test]
    fn empty_config_with_quit_is_separator_plus_quit() {
        let mut state = state_with(Vec::new(), true);
        state.construct_menu();

        assert_eq!(state.nodes.len(), 2);
        assert!(matches!(state.nodes[0], MenuNode::Separator));
        assert!(matches!(state.nodes[1], MenuNode::Quit));
    }

    #[test]
    fn no_quit_means_no_trailing_nodes() {
        let mut state = state_with(vec![item("normal", "a")], false);
        state.construct_menu();

        assert_eq!(state.nodes.len(), 1);
        assert!(matches!(state.nodes[0], MenuNode::Standard { .. }));
    }

    #[test]
    fn toggle_twice_is_an_involution() {
        let mut state = state_with(vec![item("checkbox", "t1")], false);
        state.construct_menu();

        assert_eq!(state.find_and_toggle_checkbox("t1"), Some(true));
        assert_eq!(state.find_and_toggle_checkbox("t1"), Some(false));
    }

    #[test]
    fn toggle_unknown_id_is_none() {
        let mut state = state_with(vec![item("checkbox", "t1")], false);
        state.construct_menu();

        assert_eq!(state.find_and_toggle_checkbox("nope"), None);
    }

    #[test]
    fn toggle_does_not_mutate_descriptor() {
        let mut state = state_with(vec![item("checkbox", "t1")], false);
        state.construct_menu();
        state.find_and_toggle_checkbox("t1");

        assert_eq!(state.config.menu_items[0].is_checked, None);
    }

    #[test]
    fn rebuild_discards_toggle_state() {
        let mut state = state_with(vec![item("checkbox", "t1")], false);
        state.construct_menu();
        assert_eq!(state.find_and_toggle_checkbox("t1"), Some(true));

        state.construct_menu();
        assert!(matches!(state.nodes[0], MenuNode::Checkbox { checked: false, .. }));
    }

    #[test]
    fn rebuild_is_destructive() {
        let mut state = state_with(vec![item("normal", "a")], true);
        state.construct_menu();
        state.construct_menu();

        // Re-running yields an equivalent tree, never an accumulated one.
        assert_eq!(state.nodes.len(), 3);
    }

    #[test]
    fn renders_one_ksni_item_per_node() {
        let mut state = state_with(
            vec![item("normal", "a"), item("checkbox", "b"), item("label", "")],
            true,
        );
        state.construct_menu();

        let items = state.build_menu_items();
        assert_eq!(items.len(), state.nodes.len());
    }

    #[test]
    fn tray_icon_from_symbolic_name() {
        let mut state = state_with(Vec::new(), true);
        state.apply_tray_icon("network-idle");

        assert_eq!(state.icon_name, "network-idle");
        assert!(state.icon_pixmap.is_empty());
    }

    #[test]
    fn failed_tray_icon_keeps_previous() {
        let mut state = state_with(Vec::new(), true);
        state.apply_tray_icon("/nonexistent/icon.png");

        assert_eq!(state.icon_name, "application-x-executable");
    }
}
