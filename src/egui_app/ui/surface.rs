use crate::selection::{FileDescriptor, SelectionSurface};

use super::picker::PickerControl;

/// Widget state written by the selection controller and read by the renderer.
#[derive(Debug, Default)]
pub struct EguiSurface {
    label: String,
    drop_marker: bool,
    picker: PickerControl,
    default_prevented: bool,
}

impl EguiSurface {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn drop_marker(&self) -> bool {
        self.drop_marker
    }

    pub fn picker(&self) -> &PickerControl {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut PickerControl {
        &mut self.picker
    }

    /// Read and reset the default-prevented flag for the current frame.
    pub fn take_default_prevented(&mut self) -> bool {
        std::mem::take(&mut self.default_prevented)
    }
}

impl SelectionSurface for EguiSurface {
    fn set_label_text(&mut self, text: &str) {
        self.label.clear();
        self.label.push_str(text);
    }

    fn set_drop_marker(&mut self, active: bool) {
        self.drop_marker = active;
    }

    fn assign_picker(&mut self, file: FileDescriptor) {
        self.picker.assign(file);
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}
