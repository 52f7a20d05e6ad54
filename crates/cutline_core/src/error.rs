use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Clip not found: {0}")]
    ClipNotFound(Uuid),

    #[error("Track not found: {0}")]
    TrackNotFound(Uuid),

    #[error("Overlap detected on track {track_id}: clip {clip_id}")]
    OverlapDetected { track_id: Uuid, clip_id: Uuid },

    #[error("Clips out of order on track {0}")]
    UnsortedTrack(Uuid),

    #[error("Track has no clips: {0}")]
    EmptyTrack(Uuid),

    #[error("Duplicate clip id: {0}")]
    DuplicateClip(Uuid),

    #[error("Duplicate track id: {0}")]
    DuplicateTrack(Uuid),

    #[error("Clip {clip_id} claims track {claimed} but lives on {actual}")]
    TrackMismatch {
        clip_id: Uuid,
        claimed: Uuid,
        actual: Uuid,
    },

    #[error("Invalid span for clip {0}: start must be >= 0 and duration > 0")]
    InvalidSpan(Uuid),

    #[error("A gesture is already in progress")]
    GestureInProgress,

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
