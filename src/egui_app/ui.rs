//! egui renderer for the file selection window.
use eframe::egui;

use crate::config::AppConfig;
use crate::egui_app::drop_tracker::{DropFrame, DropTracker};
use crate::selection::SelectionController;

mod layout;
mod picker;
pub mod style;
mod surface;

pub use picker::{NO_FILE_CHOSEN, PickerControl, browse_for_file};
pub use surface::EguiSurface;

/// Smallest window size that still fits the picker row and the drop zone.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(360.0, 260.0);

/// Renders the picker, drop zone and label, routing their input through one
/// selection controller.
pub struct UploadApp {
    controller: SelectionController,
    surface: EguiSurface,
    tracker: DropTracker,
    settings: AppConfig,
    drop_zone_rect: Option<egui::Rect>,
    visuals_set: bool,
}

impl UploadApp {
    pub fn new(settings: AppConfig) -> Self {
        Self {
            controller: SelectionController::new(),
            surface: EguiSurface::default(),
            tracker: DropTracker::default(),
            settings,
            drop_zone_rect: None,
            visuals_set: false,
        }
    }

    /// Selection state driving this window.
    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    /// Widget state as last written by the controller.
    pub fn surface(&self) -> &EguiSurface {
        &self.surface
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    /// Feed this frame's OS drag state through the tracker and controller.
    ///
    /// Uses the drop zone rect from the previous frame; nothing is tracked
    /// before the zone has been laid out once.
    fn process_drop_input(&mut self, ctx: &egui::Context) {
        let Some(rect) = self.drop_zone_rect else {
            return;
        };
        let frame = DropFrame::capture(ctx, rect);
        for event in self.tracker.advance(&frame) {
            self.controller.dispatch(event, &mut self.surface);
        }
        if self.surface.take_default_prevented() {
            ctx.input_mut(|i| i.raw.dropped_files.clear());
        }
        if self.tracker.hovering() {
            ctx.request_repaint();
        }
    }

    fn browse(&mut self) {
        let files = browse_for_file(&self.settings.picker);
        let event = self.surface.picker_mut().choose(files);
        self.controller.dispatch(event, &mut self.surface);
    }
}

impl eframe::App for UploadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.process_drop_input(ctx);
        if self.render(ctx) {
            self.browse();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Run one frame of drop handling and layout, returning how many dropped
    /// entries were still visible to the rest of the frame.
    fn run_frame(app: &mut UploadApp, ctx: &egui::Context, input: egui::RawInput) -> usize {
        let mut dropped_left = 0;
        let _ = ctx.run(input, |ctx| {
            app.process_drop_input(ctx);
            dropped_left = ctx.input(|i| i.raw.dropped_files.len());
            app.render(ctx);
        });
        dropped_left
    }

    fn hovering_input() -> egui::RawInput {
        egui::RawInput {
            hovered_files: vec![egui::HoveredFile {
                path: Some(PathBuf::from("/tmp/photo.png")),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn dropping_input() -> egui::RawInput {
        egui::RawInput {
            dropped_files: vec![egui::DroppedFile {
                path: Some(PathBuf::from("/tmp/photo.png")),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn drop_on_zone_updates_label_and_consumes_dropped_files() {
        let ctx = egui::Context::default();
        let mut app = UploadApp::new(AppConfig::default());

        run_frame(&mut app, &ctx, egui::RawInput::default());
        assert!(app.drop_zone_rect.is_some());

        run_frame(&mut app, &ctx, hovering_input());
        assert!(app.surface().drop_marker());

        let dropped_left = run_frame(&mut app, &ctx, dropping_input());
        assert_eq!(dropped_left, 0);
        assert!(!app.surface().drop_marker());
        assert_eq!(app.surface().label(), "Selected: photo.png");
        assert_eq!(app.surface().picker().summary(), "photo.png");
        assert_eq!(
            app.controller().selected().map(|file| file.name()),
            Some("photo.png")
        );
    }

    #[test]
    fn drag_input_is_ignored_until_zone_is_laid_out() {
        let ctx = egui::Context::default();
        let mut app = UploadApp::new(AppConfig::default());

        let _ = ctx.run(hovering_input(), |ctx| {
            app.process_drop_input(ctx);
        });
        assert!(app.drop_zone_rect.is_none());
        assert!(!app.surface().drop_marker());

        let dropped_left = run_frame(&mut app, &ctx, dropping_input());
        assert_eq!(dropped_left, 1);
        assert_eq!(app.surface().label(), "");
        assert!(app.controller().selected().is_none());
    }

    #[test]
    fn drop_away_from_zone_is_left_for_other_consumers() {
        let ctx = egui::Context::default();
        let mut app = UploadApp::new(AppConfig::default());
        run_frame(&mut app, &ctx, egui::RawInput::default());

        let outside = egui::pos2(1.0, 1.0);
        assert!(app.drop_zone_rect.is_some_and(|rect| !rect.contains(outside)));
        let mut input = dropping_input();
        input.events.push(egui::Event::PointerMoved(outside));

        let dropped_left = run_frame(&mut app, &ctx, input);
        assert_eq!(dropped_left, 1);
        assert_eq!(app.surface().label(), "");
    }
}
