//! egui desktop shell around the file selection.
/// Per-frame drag snapshot to selection event translation.
pub mod drop_tracker;
/// Window rendering and the egui-backed selection surface.
pub mod ui;
