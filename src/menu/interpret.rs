//! Descriptor interpretation.
//!
//! Converts one declared configuration item into its live menu node,
//! applying the per-kind policy and composing title decorations.

use tracing::warn;

use crate::config::MenuItemDescriptor;
use crate::menu::node::{MenuNode, TextStyle};

/// Computes the effective title style for a descriptor.
///
/// Bold is applied first and underline second, both writing the same style
/// slot, so an item declaring both ends up underlined.
pub fn text_style(item: &MenuItemDescriptor) -> TextStyle {
    let mut style = TextStyle::Plain;
    if item.is_bold {
        style = TextStyle::Bold;
    }
    if item.is_underlined {
        style = TextStyle::Underlined;
    }
    style
}

/// Converts a single descriptor into a live menu node.
///
/// Returns `None` for unrecognized kinds after logging a warning; such items
/// contribute nothing to the tree. Icons are attached separately by the tree
/// builder.
pub fn interpret(item: &MenuItemDescriptor) -> Option<MenuNode> {
    let node = match item.kind.as_str() {
        "separator" => MenuNode::Separator,
        "normal" => MenuNode::Standard {
            id: item.id.clone(),
            label: item.title.clone(),
            style: text_style(item),
            icon: None,
            enabled: !item.is_disabled,
        },
        // Labels are forced non-interactive regardless of isDisabled.
        "label" => MenuNode::Label {
            label: item.title.clone(),
            style: text_style(item),
            icon: None,
        },
        "checkbox" => MenuNode::Checkbox {
            id: item.id.clone(),
            label: item.title.clone(),
            style: text_style(item),
            icon: None,
            enabled: !item.is_disabled,
            checked: item.is_checked.unwrap_or(false),
        },
        other => {
            warn!(kind = other, "unknown menu item kind, skipping item");
            return None;
        }
    };
    Some(node)
}
