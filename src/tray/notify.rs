//! Notification stream.
//!
//! Every user interaction emits exactly one JSON line on standard output,
//! flushed immediately. This stream is the observable side channel for
//! behavior verification besides the rendered menu itself.

use std::io::Write;

use serde::Serialize;

use crate::tray::event::TrayEvent;

/// One notification line describing a dispatched interaction.
#[derive(Debug, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    Clicked {
        id: String,
    },
    CheckboxToggled {
        id: String,
        #[serde(rename = "newState")]
        new_state: bool,
    },
    Quit,
}

impl From<TrayEvent> for Notification {
    fn from(event: TrayEvent) -> Self {
        match event {
            TrayEvent::Clicked(id) => Notification::Clicked { id },
            TrayEvent::CheckboxToggled(id, new_state) => {
                Notification::CheckboxToggled { id, new_state }
            }
            TrayEvent::Quit => Notification::Quit,
        }
    }
}

/// Writes one notification line to stdout and flushes it.
pub fn emit(notification: &Notification) {
    if let Ok(line) = serde_json::to_string(notification) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}
