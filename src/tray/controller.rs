//! Tray controller.
//!
//! The top-level object composing configuration loading, menu construction,
//! icon resolution and event dispatch against the ksni toolkit. All state is
//! owned here; nothing ambient.

use std::sync::mpsc::{Receiver, channel};
use std::sync::{Arc, Mutex};

use ksni::blocking::TrayMethods;
use tracing::debug;

use crate::config::MenuConfig;
use crate::error::{ConfigError, TrayError};
use crate::tray::event::TrayEvent;
use crate::tray::ksni_impl::KsniTray;
use crate::tray::notify::{self, Notification};
use crate::tray::state::TrayState;

/// Owns the current configuration, the live menu tree, and the spawned tray.
///
/// # Example
///
/// ```no_run
/// use configtray::TrayController;
///
/// let mut controller = TrayController::new("my_app");
/// controller
///     .load_config(r#"{"menuItems": [], "showQuitItem": true}"#)
///     .unwrap();
/// controller.construct_menu();
/// controller.spawn().unwrap();
/// controller.run();
/// ```
pub struct TrayController {
    handle: Option<ksni::blocking::Handle<KsniTray>>,
    state: Arc<Mutex<TrayState>>,
    event_receiver: Option<Receiver<TrayEvent>>,
}

impl TrayController {
    pub fn new(tray_id: impl Into<String>) -> Self {
        Self {
            handle: None,
            state: Arc::new(Mutex::new(TrayState::new(tray_id.into()))),
            event_receiver: None,
        }
    }

    /// Decodes a configuration document and replaces the stored config.
    ///
    /// On success any tray icon the document declares is resolved and
    /// applied. On decode failure the previous configuration stays active
    /// and nothing is partially applied.
    pub fn load_config(&mut self, text: &str) -> Result<(), ConfigError> {
        let config = MenuConfig::from_json(text)?;
        {
            let mut state = self.state.lock().unwrap();
            state.apply_config(config);
        }
        self.refresh();
        Ok(())
    }

    /// Rebuilds the live menu tree from the current configuration and pushes
    /// it to the spawned tray, if any.
    ///
    /// Safe to call with the default configuration (zero items, quit shown).
    /// Checkbox toggles made since the previous build are discarded.
    pub fn construct_menu(&mut self) {
        {
            let mut state = self.state.lock().unwrap();
            state.construct_menu();
        }
        self.refresh();
    }

    /// Resolves a reference and applies it as the tray button icon,
    /// independent of menu construction.
    pub fn set_icon(&mut self, reference: &str) {
        {
            let mut state = self.state.lock().unwrap();
            state.apply_tray_icon(reference);
        }
        self.refresh();
    }

    /// Snapshot of the currently applied configuration.
    pub fn config(&self) -> MenuConfig {
        self.state.lock().unwrap().config.clone()
    }

    /// Spawns the system tray icon and the interaction event channel.
    pub fn spawn(&mut self) -> Result<(), TrayError> {
        if self.handle.is_some() {
            return Err(TrayError::AlreadySpawned);
        }

        let (tx, rx) = channel();
        self.event_receiver = Some(rx);
        {
            let mut state = self.state.lock().unwrap();
            state.event_sender = Some(tx);
        }

        let tray = KsniTray {
            state: self.state.clone(),
        };
        self.handle = Some(tray.spawn()?);
        debug!("tray spawned");
        Ok(())
    }

    /// Runs the dispatch loop until the quit interaction arrives.
    ///
    /// One interaction is fully processed (state mutation happened in the
    /// activate callback, notification emitted here) before the next is
    /// taken off the channel.
    pub fn run(&mut self) {
        let Some(rx) = self.event_receiver.take() else {
            return;
        };
        for event in rx.iter() {
            let quit = matches!(event, TrayEvent::Quit);
            notify::emit(&Notification::from(event));
            if quit {
                if let Some(handle) = self.handle.take() {
                    handle.shutdown();
                }
                break;
            }
        }
    }

    /// Pushes the current state to the spawned tray.
    fn refresh(&self) {
        if let Some(handle) = &self.handle {
            let _ = handle.update(|_tray: &mut KsniTray| {});
        }
    }
}
