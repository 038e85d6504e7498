//! egui reports OS drags as per-frame state (`hovered_files`, `dropped_files`)
//! rather than discrete events. [`DropTracker`] diffs consecutive frames into
//! enter/over/leave/drop events for the selection controller.

use crate::selection::{FileDescriptor, SelectionEvent};

/// Drag input observed for the drop zone during one frame.
#[derive(Clone, Debug, Default)]
pub struct DropFrame {
    /// The OS is dragging something over the window.
    pub files_hovered: bool,
    /// Whether the pointer is inside the drop zone; `None` when egui has no
    /// pointer position, which happens on some platforms during OS drags.
    pub pointer_over: Option<bool>,
    /// Entries released over the window this frame.
    pub dropped: Vec<egui::DroppedFile>,
}

impl DropFrame {
    pub fn capture(ctx: &egui::Context, zone: egui::Rect) -> Self {
        ctx.input(|i| {
            let pointer_pos = i.pointer.hover_pos().or_else(|| i.pointer.interact_pos());
            Self {
                files_hovered: !i.raw.hovered_files.is_empty(),
                pointer_over: pointer_pos.map(|pos| zone.contains(pos)),
                dropped: i.raw.dropped_files.clone(),
            }
        })
    }
}

/// Convert a dropped entry into a file descriptor.
///
/// Entries with neither a path nor a name are not files.
pub fn descriptor_from_dropped(file: &egui::DroppedFile) -> Option<FileDescriptor> {
    file.path
        .clone()
        .and_then(FileDescriptor::from_path)
        .or_else(|| (!file.name.is_empty()).then(|| FileDescriptor::named(file.name.clone())))
}

#[derive(Debug, Default)]
pub struct DropTracker {
    hovering: bool,
    /// Survives one frame after hovering ends without a pointer position, so
    /// a drop delivered on the following frame still lands on the zone.
    armed: bool,
}

impl DropTracker {
    pub fn hovering(&self) -> bool {
        self.hovering
    }

    pub fn advance(&mut self, frame: &DropFrame) -> Vec<SelectionEvent> {
        if !frame.dropped.is_empty() {
            let on_zone = self.hovering || self.armed || frame.pointer_over == Some(true);
            self.hovering = false;
            self.armed = false;
            if !on_zone {
                return Vec::new();
            }
            let files = frame
                .dropped
                .iter()
                .filter_map(descriptor_from_dropped)
                .collect::<Vec<_>>();
            tracing::debug!("{} file(s) dropped on the drop zone", files.len());
            return vec![SelectionEvent::Drop(files)];
        }

        let over = frame.files_hovered && frame.pointer_over.unwrap_or(true);
        if over {
            let event = if self.hovering {
                SelectionEvent::DragOver
            } else {
                tracing::debug!("Drag entered the drop zone");
                SelectionEvent::DragEnter
            };
            self.hovering = true;
            self.armed = true;
            return vec![event];
        }

        let just_left = std::mem::take(&mut self.hovering);
        self.armed = just_left && frame.pointer_over.is_none();
        if just_left {
            tracing::debug!("Drag left the drop zone");
            vec![SelectionEvent::DragLeave]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn hover(pointer_over: Option<bool>) -> DropFrame {
        DropFrame {
            files_hovered: true,
            pointer_over,
            dropped: Vec::new(),
        }
    }

    fn dropped(pointer_over: Option<bool>, paths: &[&str]) -> DropFrame {
        DropFrame {
            files_hovered: false,
            pointer_over,
            dropped: paths
                .iter()
                .map(|path| egui::DroppedFile {
                    path: Some(PathBuf::from(path)),
                    ..Default::default()
                })
                .collect(),
        }
    }

    fn idle(pointer_over: Option<bool>) -> DropFrame {
        DropFrame {
            files_hovered: false,
            pointer_over,
            dropped: Vec::new(),
        }
    }

    #[test]
    fn hover_sequence_emits_enter_over_leave() {
        let mut tracker = DropTracker::default();
        assert_eq!(
            tracker.advance(&hover(Some(true))),
            vec![SelectionEvent::DragEnter]
        );
        assert_eq!(
            tracker.advance(&hover(Some(true))),
            vec![SelectionEvent::DragOver]
        );
        assert_eq!(
            tracker.advance(&hover(Some(false))),
            vec![SelectionEvent::DragLeave]
        );
        assert!(tracker.advance(&idle(Some(false))).is_empty());
        assert!(!tracker.hovering());
    }

    #[test]
    fn unknown_pointer_counts_as_over() {
        let mut tracker = DropTracker::default();
        assert_eq!(tracker.advance(&hover(None)), vec![SelectionEvent::DragEnter]);
    }

    #[test]
    fn hover_outside_zone_is_ignored() {
        let mut tracker = DropTracker::default();
        assert!(tracker.advance(&hover(Some(false))).is_empty());
    }

    #[test]
    fn drop_while_hovering_yields_drop_only() {
        let mut tracker = DropTracker::default();
        tracker.advance(&hover(Some(true)));
        let events = tracker.advance(&dropped(None, &["/tmp/photo.png"]));
        assert_eq!(
            events,
            vec![SelectionEvent::Drop(vec![FileDescriptor::from_path("/tmp/photo.png").unwrap()])]
        );
        assert!(!tracker.hovering());
    }

    #[test]
    fn drop_outside_zone_is_ignored() {
        let mut tracker = DropTracker::default();
        assert!(
            tracker
                .advance(&dropped(Some(false), &["/tmp/photo.png"]))
                .is_empty()
        );
    }

    #[test]
    fn drop_on_frame_after_hover_ends_without_pointer() {
        let mut tracker = DropTracker::default();
        tracker.advance(&hover(None));
        assert_eq!(tracker.advance(&idle(None)), vec![SelectionEvent::DragLeave]);
        let events = tracker.advance(&dropped(None, &["/tmp/report.pdf"]));
        assert!(matches!(events.as_slice(), [SelectionEvent::Drop(files)] if files.len() == 1));
    }

    #[test]
    fn armed_state_expires_after_one_idle_frame() {
        let mut tracker = DropTracker::default();
        tracker.advance(&hover(None));
        tracker.advance(&idle(None));
        tracker.advance(&idle(None));
        assert!(
            tracker
                .advance(&dropped(None, &["/tmp/report.pdf"]))
                .is_empty()
        );
    }

    #[test]
    fn entries_without_path_or_name_make_an_empty_drop() {
        let mut tracker = DropTracker::default();
        tracker.advance(&hover(Some(true)));
        let frame = DropFrame {
            files_hovered: false,
            pointer_over: Some(true),
            dropped: vec![egui::DroppedFile::default()],
        };
        assert_eq!(tracker.advance(&frame), vec![SelectionEvent::Drop(Vec::new())]);
    }

    #[test]
    fn web_style_entries_use_their_name() {
        let file = egui::DroppedFile {
            name: "slides.pptx".into(),
            ..Default::default()
        };
        let descriptor = descriptor_from_dropped(&file).unwrap();
        assert_eq!(descriptor.name(), "slides.pptx");
        assert!(descriptor.path().is_none());
    }
}
