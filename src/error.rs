//! Error types.

/// Errors produced while loading a configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to decode configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by the tray controller.
#[derive(Debug, thiserror::Error)]
pub enum TrayError {
    #[error("tray already spawned")]
    AlreadySpawned,

    #[error("failed to spawn tray: {0}")]
    Spawn(#[from] ksni::Error),
}
