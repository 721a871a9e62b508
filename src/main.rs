//! Process entry point for the `configtray` binary.

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use configtray::TrayController;

const DEFAULT_CONFIG_PATH: &str = "./menu_config.json";

#[derive(Parser)]
#[command(name = "configtray")]
#[command(about = "JSON-driven system tray menu")]
#[command(version)]
struct Cli {
    /// Inline JSON configuration document
    #[arg(long)]
    config: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut controller = TrayController::new("configtray");

    let text = match cli.config {
        Some(text) => Some(text),
        None => match std::fs::read_to_string(DEFAULT_CONFIG_PATH) {
            Ok(text) => Some(text),
            // Soft default: no config file means an empty menu plus quit.
            Err(err) => {
                debug!(path = DEFAULT_CONFIG_PATH, %err, "no default configuration file");
                None
            }
        },
    };

    if let Some(text) = text
        && let Err(err) = controller.load_config(&text)
    {
        error!(%err, "failed to load configuration, continuing with defaults");
    }

    controller.construct_menu();
    if let Err(err) = controller.spawn() {
        error!(%err, "failed to spawn tray");
        std::process::exit(1);
    }
    controller.run();
}
