//! Single-file selection shared by the picker control and the drop zone.
//!
//! Handlers are pure transitions from `(state, event)` to `(state, effects)`.
//! Effects are applied to a [`SelectionSurface`] afterwards, so the decision
//! logic runs without a window.

use std::path::{Path, PathBuf};

mod surface;

pub use surface::{SelectionSurface, apply_effects};


/// Prefix rendered in front of the selected file name.
pub const LABEL_PREFIX: &str = "Selected: ";

/// A file offered by the picker dialog or a drop payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileDescriptor {
    name: String,
    path: Option<PathBuf>,
}

impl FileDescriptor {
    /// Descriptor carrying only a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }

    /// Descriptor for a filesystem path, named after its final component.
    ///
    /// Returns `None` for paths without a file name (e.g. `/` or `..`).
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self {
            name,
            path: Some(path),
        })
    }

    /// Display name of the file.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Filesystem path, when the platform supplied one.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Input events from the picker control and the drop zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The picker dialog produced a new file list (possibly empty).
    PickerChanged(Vec<FileDescriptor>),
    DragEnter,
    DragOver,
    DragLeave,
    /// Files released over the drop zone; the payload may hold no files.
    Drop(Vec<FileDescriptor>),
}

/// Instructions for the surface produced by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceEffect {
    /// Suppress the platform's own handling of the current drag/drop event.
    PreventDefault,
    /// Toggle the drop zone's active marker.
    SetDropMarker(bool),
    /// Make the picker control hold exactly this file.
    AssignPicker(FileDescriptor),
    /// Overwrite the display label.
    SetLabel(String),
}

/// State owned by [`SelectionController`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<FileDescriptor>,
    drag_active: bool,
}

impl SelectionState {
    /// Current selection, if any.
    pub fn selected(&self) -> Option<&FileDescriptor> {
        self.selected.as_ref()
    }

    /// Whether a drag is hovering the drop zone.
    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Text for the display label derived from the current selection.
    pub fn label(&self) -> String {
        label_for(self.selected.as_ref())
    }
}

/// Render the display label for an optional selection.
pub fn label_for(file: Option<&FileDescriptor>) -> String {
    file.map(|file| format!("{LABEL_PREFIX}{}", file.name))
        .unwrap_or_default()
}

/// Compute the next state and the surface effects for one event.
pub fn transition(
    state: &SelectionState,
    event: SelectionEvent,
) -> (SelectionState, Vec<SurfaceEffect>) {
    let mut next = state.clone();
    let mut effects = Vec::new();
    match event {
        SelectionEvent::PickerChanged(files) => {
            next.selected = files.into_iter().next();
            effects.push(SurfaceEffect::SetLabel(next.label()));
        }
        SelectionEvent::DragEnter | SelectionEvent::DragOver => {
            next.drag_active = true;
            effects.push(SurfaceEffect::PreventDefault);
            effects.push(SurfaceEffect::SetDropMarker(true));
        }
        SelectionEvent::DragLeave => {
            next.drag_active = false;
            effects.push(SurfaceEffect::SetDropMarker(false));
        }
        SelectionEvent::Drop(files) => {
            next.drag_active = false;
            effects.push(SurfaceEffect::PreventDefault);
            effects.push(SurfaceEffect::SetDropMarker(false));
            if let Some(file) = files.into_iter().next() {
                effects.push(SurfaceEffect::AssignPicker(file.clone()));
                next.selected = Some(file);
                effects.push(SurfaceEffect::SetLabel(next.label()));
            }
        }
    }
    (next, effects)
}

/// Owns the selection for one window and routes events to a surface.
#[derive(Debug, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    /// Controller with nothing selected and no drag in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the owned state.
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Current selection, if any.
    pub fn selected(&self) -> Option<&FileDescriptor> {
        self.state.selected()
    }

    /// Text currently owed to the display label.
    pub fn label(&self) -> String {
        self.state.label()
    }

    /// Apply an event to the stored state and return the effects to render.
    pub fn handle(&mut self, event: SelectionEvent) -> Vec<SurfaceEffect> {
        let (next, effects) = transition(&self.state, event);
        if next.selected != self.state.selected {
            match next.selected() {
                Some(file) => tracing::info!("Selected file {}", file.name()),
                None => tracing::info!("File selection cleared"),
            }
        }
        self.state = next;
        effects
    }

    /// Handle an event and apply its effects to `surface`.
    pub fn dispatch(&mut self, event: SelectionEvent, surface: &mut dyn SelectionSurface) {
        tracing::trace!(?event, "Dispatching selection event");
        let effects = self.handle(event);
        apply_effects(surface, effects);
    }
}
