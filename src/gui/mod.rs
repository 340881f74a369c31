//! GUI - window bootstrap and views

mod app;
mod theme;

pub use app::ShellApp;

use crate::config::WindowConfig;
use anyhow::Result;
use eframe::egui;
use tracing::info;

/// Toolkit seam that opens top-level windows
pub trait WindowHost {
    fn open_window(&mut self, config: &WindowConfig) -> Result<()>;
}

/// Opens one window for a fixed configuration on the host's ready signal
pub struct Bootstrapper {
    config: WindowConfig,
}

impl Bootstrapper {
    pub fn new(config: WindowConfig) -> Self {
        Self { config }
    }

    /// Ready signal: open exactly one window and load the starting document
    pub fn on_ready<H: WindowHost>(self, host: &mut H) -> Result<()> {
        info!(
            width = self.config.width,
            height = self.config.height,
            resizable = self.config.resizable,
            isolated = self.config.isolated,
            start = %self.config.start_document,
            "opening window"
        );
        host.open_window(&self.config)
    }
}

/// Build the viewport for a window configuration
pub fn viewport(config: &WindowConfig) -> egui::ViewportBuilder {
    let size = [config.width as f32, config.height as f32];

    let builder = egui::ViewportBuilder::default()
        .with_inner_size(size)
        .with_title(config.title.clone())
        .with_resizable(config.resizable);

    if config.resizable {
        builder
    } else {
        builder.with_min_inner_size(size).with_max_inner_size(size)
    }
}

/// eframe-backed host; blocks until the window is closed
pub struct NativeHost;

impl WindowHost for NativeHost {
    fn open_window(&mut self, config: &WindowConfig) -> Result<()> {
        let options = eframe::NativeOptions {
            viewport: viewport(config),
            ..Default::default()
        };

        let app_config = config.clone();
        eframe::run_native(
            &config.title,
            options,
            Box::new(move |cc| {
                cc.egui_ctx.set_style(theme::light_theme());
                Ok(Box::new(ShellApp::new(app_config)))
            }),
        )
        .map_err(|e| anyhow::anyhow!("application error: {}", e))
    }
}

/// Launch the application window
pub fn run(config: WindowConfig) -> Result<()> {
    Bootstrapper::new(config).on_ready(&mut NativeHost)
}
