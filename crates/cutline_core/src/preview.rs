use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    /// Insertion marker or new-track bar.
    #[default]
    Solid,
    /// Full-size ghost of where the clip will land.
    Dashed,
}

/// The transient placeholder drawn while a gesture is in progress, in
/// timeline-container coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Preview {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub border: BorderStyle,
    pub visible: bool,
}

impl Preview {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn shown(rect: Rect, border: BorderStyle) -> Self {
        Self {
            left: rect.left,
            top: rect.top,
            width: rect.width,
            height: rect.height,
            border,
            visible: true,
        }
    }
}

/// Receives the preview each frame. Implemented by whatever draws it.
pub trait PreviewSink {
    fn show(&mut self, preview: &Preview);
}

/// Keeps every preview it is shown, newest last.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<Preview>,
}

impl PreviewSink for RecordingSink {
    fn show(&mut self, preview: &Preview) {
        self.frames.push(*preview);
    }
}
