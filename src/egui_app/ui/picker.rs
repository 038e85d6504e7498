use rfd::FileDialog;

use crate::config::PickerSettings;
use crate::selection::{FileDescriptor, SelectionEvent};

/// Placeholder shown next to the Browse button while nothing is chosen.
pub const NO_FILE_CHOSEN: &str = "No file chosen";

/// File list held by the picker control.
///
/// A later submission reads from here, so drops are mirrored into it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickerControl {
    files: Vec<FileDescriptor>,
}

impl PickerControl {
    pub fn files(&self) -> &[FileDescriptor] {
        &self.files
    }

    /// Record a dialog result and produce the matching change event.
    pub fn choose(&mut self, files: Vec<FileDescriptor>) -> SelectionEvent {
        self.files = files.clone();
        SelectionEvent::PickerChanged(files)
    }

    pub fn assign(&mut self, file: FileDescriptor) {
        self.files = vec![file];
    }

    pub fn summary(&self) -> &str {
        self.files
            .first()
            .map(FileDescriptor::name)
            .unwrap_or(NO_FILE_CHOSEN)
    }
}

/// Show the native file dialog. A cancelled dialog yields an empty list.
pub fn browse_for_file(settings: &PickerSettings) -> Vec<FileDescriptor> {
    let mut dialog = FileDialog::new().set_title(settings.dialog_title.as_str());
    if let Some(dir) = &settings.start_dir {
        dialog = dialog.set_directory(dir);
    }
    match dialog.pick_file() {
        Some(path) => FileDescriptor::from_path(path).into_iter().collect(),
        None => {
            tracing::debug!("File dialog cancelled");
            Vec::new()
        }
    }
}
