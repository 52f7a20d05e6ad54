//! Normalized per-frame geometry delivered by the drag-and-drop layer.
//!
//! All rectangles share one coordinate space except [`TrackRows`], which is
//! relative to the timeline container (the same frame the preview is drawn
//! in).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// The same rectangle expressed relative to `origin`'s top-left corner.
    pub fn relative_to(&self, origin: &Rect) -> Rect {
        Rect::new(
            self.left - origin.left,
            self.top - origin.top,
            self.width,
            self.height,
        )
    }
}

// ---------------------------------------------------------------------------
// CollisionTarget
// ---------------------------------------------------------------------------

/// What a drop target is, with the ids of the entity it stands for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TargetKind {
    Timeline,
    Track { track_id: Uuid },
    Clip { clip_id: Uuid, track_id: Uuid },
}

/// A drop target the active item currently overlaps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollisionTarget {
    pub id: String,
    pub kind: TargetKind,
    pub rect: Rect,
    /// Overlap ranking; larger means a better match.
    pub value: f64,
}

/// Container-relative bounds of the first and last track rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrackRows {
    pub first: Rect,
    pub last: Rect,
}

// ---------------------------------------------------------------------------
// GeometryFrame
// ---------------------------------------------------------------------------

/// One interaction frame: pointer delta since gesture start, the active
/// item's translated rect, and every target it overlaps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeometryFrame {
    #[serde(default)]
    pub delta_x: f64,
    #[serde(default)]
    pub delta_y: f64,
    #[serde(default)]
    pub active_rect: Option<Rect>,
    #[serde(default)]
    pub targets: Vec<CollisionTarget>,
    #[serde(default)]
    pub track_rows: Option<TrackRows>,
}

impl GeometryFrame {
    /// Rect of the timeline container, present only while the pointer is
    /// over the timeline.
    pub fn container(&self) -> Option<Rect> {
        self.targets
            .iter()
            .find(|t| t.kind == TargetKind::Timeline)
            .map(|t| t.rect)
    }

    /// Targets other than the timeline itself and the dragged clip.
    pub fn candidates(&self, active_clip: Uuid) -> impl Iterator<Item = &CollisionTarget> {
        self.targets.iter().filter(move |t| match t.kind {
            TargetKind::Timeline => false,
            TargetKind::Clip { clip_id, .. } => clip_id != active_clip,
            TargetKind::Track { .. } => true,
        })
    }

    /// The track candidate with the largest overlap value. Earlier targets
    /// win ties.
    pub fn best_track(&self, active_clip: Uuid) -> Option<(Uuid, &CollisionTarget)> {
        self.candidates(active_clip)
            .filter_map(|t| match t.kind {
                TargetKind::Track { track_id } => Some((track_id, t)),
                _ => None,
            })
            .reduce(|best, next| if next.1.value > best.1.value { next } else { best })
    }

    /// Clip candidates that sit on `track_id`.
    pub fn clips_on_track(
        &self,
        active_clip: Uuid,
        track_id: Uuid,
    ) -> impl Iterator<Item = (Uuid, &CollisionTarget)> {
        self.candidates(active_clip).filter_map(move |t| match t.kind {
            TargetKind::Clip {
                clip_id,
                track_id: owner,
            } if owner == track_id => Some((clip_id, t)),
            _ => None,
        })
    }
}
