//! KSNI tray bridge implementation.
//!
//! This module provides the bridge between the internal tray state and the
//! ksni library, implementing the `ksni::Tray` trait to connect with the
//! StatusNotifierItem specification.

use crate::tray::state::TrayState;
use ksni::menu::MenuItem;
use std::sync::{Arc, Mutex};

/// Implementation of the ksni::Tray trait that bridges the internal state
/// with the ksni library.
///
/// The menu is rendered from the live node tree on every query, so a state
/// change followed by a handle update is all a refresh takes.
pub struct KsniTray {
    /// Shared reference to the tray state.
    pub state: Arc<Mutex<TrayState>>,
}

impl ksni::Tray for KsniTray {
    fn id(&self) -> String {
        let state = self.state.lock().unwrap();
        state.tray_id.clone()
    }

    fn icon_name(&self) -> String {
        let state = self.state.lock().unwrap();
        state.icon_name.clone()
    }

    fn icon_pixmap(&self) -> Vec<ksni::Icon> {
        let state = self.state.lock().unwrap();
        state.icon_pixmap.clone()
    }

    fn title(&self) -> String {
        let state = self.state.lock().unwrap();
        state.title.clone()
    }

    fn menu(&self) -> Vec<MenuItem<Self>> {
        let state = self.state.lock().unwrap();
        state.build_menu_items()
    }
}
