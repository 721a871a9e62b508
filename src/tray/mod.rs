//! Tray core functionality.
//!
//! This module contains the core tray functionality, including state
//! management, event dispatch, the notification stream, and the bridge to
//! the KSNI library.

pub mod controller;
pub mod event;
pub mod ksni_impl;
pub mod notify;
pub mod state;

pub use controller::TrayController;
pub use event::TrayEvent;
pub use ksni_impl::KsniTray;
pub use notify::Notification;
pub use state::TrayState;
