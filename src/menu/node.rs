//! Live menu node model.
//!
//! Nodes are the runtime objects built from configuration descriptors. They
//! own all transient interaction state (checkbox toggles); descriptors are
//! never written back to.

/// Title text styling computed from a descriptor's decoration flags.
///
/// A node carries exactly one style slot, so bold and underline are mutually
/// exclusive: whichever decoration is applied last wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextStyle {
    #[default]
    Plain,
    Bold,
    Underlined,
}

/// A resolved icon attached to a node or to the tray button.
#[derive(Clone, Debug)]
pub enum NodeIcon {
    /// Symbolic freedesktop icon-theme name, looked up by the host toolkit.
    Named(String),
    /// Image loaded from a filesystem path, kept in both forms the
    /// StatusNotifierItem protocol wants: an ARGB pixmap for the tray button
    /// and PNG bytes for menu items.
    Loaded { pixmap: ksni::Icon, png: Vec<u8> },
}

/// One node of the live menu tree.
#[derive(Clone, Debug)]
pub enum MenuNode {
    /// A clickable item bound to a click event carrying its id.
    Standard {
        id: String,
        label: String,
        style: TextStyle,
        icon: Option<NodeIcon>,
        enabled: bool,
    },
    /// A toggleable item bound to a toggle event carrying its id.
    /// Checked state lives here for the lifetime of the current tree.
    Checkbox {
        id: String,
        label: String,
        style: TextStyle,
        icon: Option<NodeIcon>,
        enabled: bool,
        checked: bool,
    },
    /// A non-interactive text item, always disabled.
    Label {
        label: String,
        style: TextStyle,
        icon: Option<NodeIcon>,
    },
    /// A visual separator line, not bound to any identifier.
    Separator,
    /// The reserved quit entry appended after all declared items.
    Quit,
}

impl MenuNode {
    /// Attaches a resolved icon to node kinds that can display one.
    pub fn attach_icon(&mut self, icon: Option<NodeIcon>) {
        match self {
            MenuNode::Standard { icon: slot, .. }
            | MenuNode::Checkbox { icon: slot, .. }
            | MenuNode::Label { icon: slot, .. } => *slot = icon,
            MenuNode::Separator | MenuNode::Quit => {}
        }
    }

    /// The identifier carried by interaction events, if the node has one.
    pub fn id(&self) -> Option<&str> {
        match self {
            MenuNode::Standard { id, .. } | MenuNode::Checkbox { id, .. } => Some(id),
            MenuNode::Label { .. } | MenuNode::Separator | MenuNode::Quit => None,
        }
    }
}
