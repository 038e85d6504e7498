#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the docpick file selection window.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use docpick::config::{self, AppConfig};
use docpick::egui_app::ui::{MIN_VIEWPORT_SIZE, UploadApp};
use docpick::logging;
use eframe::egui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let loaded = config::load_or_default().map_err(|err| {
        tracing::error!("Failed to load config: {err}");
        format!("Failed to load config: {err}")
    });
    let settings = loaded.clone().unwrap_or_default();
    let native_options = eframe::NativeOptions {
        viewport: viewport_for(&settings),
        ..Default::default()
    };

    eframe::run_native(
        settings.window.title.as_str(),
        native_options,
        Box::new(move |_cc| match loaded {
            Ok(settings) => Ok(Box::new(UploadApp::new(settings))),
            Err(message) => Ok(Box::new(LaunchError { message })),
        }),
    )?;
    Ok(())
}

fn viewport_for(settings: &AppConfig) -> egui::ViewportBuilder {
    egui::ViewportBuilder::default()
        .with_title(settings.window.title.as_str())
        .with_inner_size([settings.window.width, settings.window.height])
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_drag_and_drop(true)
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start UI");
                ui.label(&self.message);
            });
        });
    }
}
