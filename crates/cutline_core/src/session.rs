use crate::placement::PlacementResult;
use crate::resize::{ClipSpan, ResizeEdge};
use crate::types::*;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// Which end of the track list a new track is created at.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrackEdge {
    Head,
    Tail,
}

/// Where a dragged clip will be committed.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DropTarget {
    NewTrack { edge: TrackEdge },
    Track { track_id: Uuid, start_ms: TimeMs },
}

impl DropTarget {
    pub fn from_placement(result: &PlacementResult) -> Option<Self> {
        match *result {
            PlacementResult::None => None,
            PlacementResult::NewTrack(edge) => Some(DropTarget::NewTrack { edge }),
            PlacementResult::Track {
                track_id, start_ms, ..
            } => Some(DropTarget::Track { track_id, start_ms }),
        }
    }
}

/// The clip being dragged, captured when the gesture begins.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSubject {
    pub clip_id: Uuid,
    pub resource: Arc<Resource>,
    pub duration_ms: TimeMs,
    /// `None` while dragging a resource that is not on the timeline yet.
    pub source_track: Option<Uuid>,
}

impl DragSubject {
    pub fn from_resource(clip_id: Uuid, resource: Arc<Resource>) -> Self {
        Self {
            clip_id,
            duration_ms: resource.duration_ms,
            resource,
            source_track: None,
        }
    }

    pub fn from_clip(clip: &Clip) -> Self {
        Self {
            clip_id: clip.id,
            resource: Arc::clone(&clip.resource),
            duration_ms: clip.duration_ms,
            source_track: Some(clip.track_id),
        }
    }

    /// The clip this subject becomes once committed.
    pub fn to_clip(&self, track_id: Uuid, start_ms: TimeMs) -> Clip {
        Clip {
            id: self.clip_id,
            track_id,
            start_ms,
            duration_ms: self.duration_ms,
            resource: Arc::clone(&self.resource),
        }
    }
}

/// The clip being resized, as it was before the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSubject {
    pub clip_id: Uuid,
    pub track_id: Uuid,
    pub edge: ResizeEdge,
    pub original: ClipSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Drag {
        subject: DragSubject,
        target: Option<DropTarget>,
    },
    Resize {
        subject: ResizeSubject,
        span: Option<ClipSpan>,
    },
}

/// An in-progress drag or resize. Lives from pointer-down to pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionSession {
    pub gesture: Gesture,
    /// Frames processed so far.
    pub frames: u32,
}

impl InteractionSession {
    pub fn drag(subject: DragSubject) -> Self {
        Self {
            gesture: Gesture::Drag {
                subject,
                target: None,
            },
            frames: 0,
        }
    }

    pub fn resize(subject: ResizeSubject) -> Self {
        Self {
            gesture: Gesture::Resize {
                subject,
                span: None,
            },
            frames: 0,
        }
    }

    /// Whether the latest frame produced something a commit can use.
    pub fn has_final_values(&self) -> bool {
        match &self.gesture {
            Gesture::Drag { target, .. } => target.is_some(),
            Gesture::Resize { span, .. } => span.is_some(),
        }
    }

    pub fn clip_id(&self) -> Uuid {
        match &self.gesture {
            Gesture::Drag { subject, .. } => subject.clip_id,
            Gesture::Resize { subject, .. } => subject.clip_id,
        }
    }
}
