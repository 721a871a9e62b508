//! # configtray
//!
//! A system tray (menu bar) icon whose dropdown menu is driven entirely by a
//! declarative JSON document, rendered on Linux desktop environments through
//! the StatusNotifierItem (SNI) specification via the
//! [ksni](https://crates.io/crates/ksni) library.
//!
//! ## Overview
//!
//! A configuration document declares the tray icon and an ordered list of
//! menu items. Each item is interpreted into a live menu node: `normal` items
//! dispatch a click event carrying their id, `checkbox` items toggle and keep
//! their checked state on the live node, `label` items are non-interactive
//! text, and `separator` items are structural dividers. Items of unknown kind
//! are skipped with a warning. An optional quit entry is appended after all
//! declared items.
//!
//! Every interaction emits one JSON line on standard output:
//!
//! ```text
//! {"event":"clicked","id":"open"}
//! {"event":"checkbox_toggled","id":"t1","newState":true}
//! {"event":"quit"}
//! ```
//!
//! ## Configuration document
//!
//! ```json
//! {
//!     "trayIcon": "network-idle",
//!     "menuItems": [
//!         {
//!             "type": "normal",
//!             "title": "Open",
//!             "id": "open",
//!             "icon": "document-open",
//!             "isBold": false,
//!             "isUnderlined": false,
//!             "isDisabled": false
//!         },
//!         {
//!             "type": "checkbox",
//!             "title": "Notifications",
//!             "id": "notify",
//!             "isChecked": true,
//!             "isBold": false,
//!             "isUnderlined": false,
//!             "isDisabled": false
//!         }
//!     ],
//!     "showQuitItem": true
//! }
//! ```
//!
//! Icon references are tried as filesystem paths first, then as freedesktop
//! icon-theme names; a reference that resolves neither way is logged and the
//! item renders without an icon.
//!
//! ## Usage
//!
//! As a binary: `configtray --config '<json>'`, or place a
//! `menu_config.json` in the working directory.
//!
//! As a library:
//!
//! ```rust,no_run
//! use configtray::TrayController;
//!
//! let mut controller = TrayController::new("my_app");
//! controller
//!     .load_config(r#"{"menuItems": [], "showQuitItem": true}"#)
//!     .unwrap();
//! controller.construct_menu();
//! controller.spawn().unwrap();
//! controller.run();
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod icon;
pub mod menu;
pub mod tray;

// Public re-exports
pub use config::{MenuConfig, MenuItemDescriptor};
pub use error::{ConfigError, TrayError};
pub use menu::{MenuNode, NodeIcon, TextStyle};
pub use tray::{KsniTray, Notification, TrayController, TrayEvent, TrayState};
