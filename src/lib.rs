//! Library exports for the desktop shell and tests.
/// Application directory resolution.
pub mod app_dirs;
/// Persisted window, picker and drop zone settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Tracing setup.
pub mod logging;
/// File selection state and event handling.
pub mod selection;
