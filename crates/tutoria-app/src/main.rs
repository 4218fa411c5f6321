//! # Tutoria
//!
//! Demo binary for the Contrata Docentes marketplace: seeds the store
//! and walks the student, teacher, onboarding and admin journeys end
//! to end.

use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use tutoria_store::{FilePreferences, Store, ThemeController};

mod walkthrough;

use walkthrough::Walkthrough;

/// Preference file written next to the binary.
const PREFS_PATH: &str = "tutoria.prefs.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("🚀 Contrata Docentes demo starting...");

    let store = Store::seeded();
    let theme = ThemeController::new(Arc::new(FilePreferences::new(PREFS_PATH)));

    Walkthrough::new(store, theme).run().await?;

    info!("👋 Demo finished");
    Ok(())
}
