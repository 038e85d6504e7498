use eframe::egui::{self, Align2, CornerRadius, FontId, RichText, Sense, StrokeKind, Ui};

use super::{UploadApp, style};

impl UploadApp {
    /// Draw the window. Returns true when the user asked to open the picker.
    pub(super) fn render(&mut self, ctx: &egui::Context) -> bool {
        let mut browse_requested = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            let palette = style::palette();
            ui.add_space(6.0);
            ui.heading(self.settings.window.title.as_str());
            ui.add_space(10.0);
            browse_requested |= self.render_picker_row(ui);
            ui.add_space(10.0);
            browse_requested |= self.render_drop_zone(ui);
            ui.add_space(10.0);
            ui.label(RichText::new(self.surface.label()).color(palette.accent_mint));
        });
        browse_requested
    }

    fn render_picker_row(&self, ui: &mut Ui) -> bool {
        let palette = style::palette();
        ui.horizontal(|ui| {
            let clicked = ui.button("Browse…").clicked();
            ui.label(RichText::new(self.surface.picker().summary()).color(palette.text_muted));
            clicked
        })
        .inner
    }

    fn render_drop_zone(&mut self, ui: &mut Ui) -> bool {
        let palette = style::palette();
        let size = egui::vec2(ui.available_width(), self.settings.drop_zone.height);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());
        self.drop_zone_rect = Some(rect);

        let (fill, stroke) = style::drop_zone_visuals(self.surface.drop_marker(), response.hovered());
        let painter = ui.painter();
        painter.rect(rect, CornerRadius::ZERO, fill, stroke, StrokeKind::Inside);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            &self.settings.drop_zone.hint,
            FontId::proportional(15.0),
            palette.text_primary,
        );
        response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
    }
}
