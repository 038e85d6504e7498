use super::{FileDescriptor, SurfaceEffect};

/// Capabilities the selection logic needs from the UI it drives.
pub trait SelectionSurface {
    /// Overwrite the display label text.
    fn set_label_text(&mut self, text: &str);
    /// Show or hide the drop zone's active marker.
    fn set_drop_marker(&mut self, active: bool);
    /// Replace the picker control's file list with a single file.
    fn assign_picker(&mut self, file: FileDescriptor);
    /// Suppress the platform default for the event being handled.
    fn prevent_default(&mut self);
}

/// Apply effects in order.
pub fn apply_effects(
    surface: &mut dyn SelectionSurface,
    effects: impl IntoIterator<Item = SurfaceEffect>,
) {
    for effect in effects {
        match effect {
            SurfaceEffect::PreventDefault => surface.prevent_default(),
            SurfaceEffect::SetDropMarker(active) => surface.set_drop_marker(active),
            SurfaceEffect::AssignPicker(file) => surface.assign_picker(file),
            SurfaceEffect::SetLabel(text) => surface.set_label_text(&text),
        }
    }
}
