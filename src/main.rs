//! Air quality analysis shell - main entry point

#![cfg_attr(all(target_os = "windows", not(debug_assertions)), windows_subsystem = "windows")]

use air_quality_shell::config::{self, LOG_ENV, Profile};
use anyhow::Result;

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    let log_level = config::log_level(std::env::var(LOG_ENV).ok().as_deref());

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let profile = match Profile::from_env() {
        Ok(profile) => profile,
        Err(e) => {
            tracing::error!(error = %e, "invalid startup configuration");
            report_startup_error(&e.to_string());
            return Err(e.into());
        }
    };
    tracing::info!(?profile, "starting air quality shell");

    // Launch the GUI application
    air_quality_shell::gui::run(profile.window_config())
}

/// Without a console the returned error would go unseen
#[cfg(all(target_os = "windows", not(debug_assertions)))]
fn report_startup_error(message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(config::APP_TITLE)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

#[cfg(not(all(target_os = "windows", not(debug_assertions))))]
fn report_startup_error(_message: &str) {}
