//! Menu node model and descriptor interpretation.
//!
//! This module defines the live node types the menu tree is built from and
//! the policy that maps configuration descriptors onto them.

pub mod interpret;
pub mod node;

pub use interpret::interpret;
pub use node::{MenuNode, NodeIcon, TextStyle};
