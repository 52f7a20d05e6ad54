use crate::config::EngineConfig;
use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResizeEdge {
    Left,
    Right,
}

/// Start and duration of a clip, without its identity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClipSpan {
    pub start_ms: TimeMs,
    pub duration_ms: TimeMs,
}

impl ClipSpan {
    pub fn of(clip: &Clip) -> Self {
        Self {
            start_ms: clip.start_ms,
            duration_ms: clip.duration_ms,
        }
    }

    pub fn end_ms(&self) -> TimeMs {
        self.start_ms + self.duration_ms
    }
}

/// Compute the span of a clip whose `edge` has been dragged by `delta`.
///
/// `original` is the clip as it was when the gesture began; `prev` and `next`
/// are its neighbours on the same track. Every input is clamped, never
/// rejected:
///
/// - left edge: the start never goes before the previous clip's end (or 0),
///   and when the minimum duration kicks in the clip's end stays put.
/// - right edge: the start is fixed and the duration is kept within
///   `[min_clip_duration, room before next]`. The minimum wins if the two
///   bounds cross.
pub fn compute_resize(
    original: ClipSpan,
    edge: ResizeEdge,
    delta: TimeMs,
    prev: Option<&Clip>,
    next: Option<&Clip>,
    config: &EngineConfig,
) -> ClipSpan {
    let min_duration = config.min_clip_duration;
    let prev_end = prev.map(|c| c.end_ms()).unwrap_or(TimeMs::ZERO);

    match edge {
        ResizeEdge::Left => {
            let mut start_ms = original.start_ms + delta;
            let mut duration_ms = original.duration_ms - delta;

            if start_ms <= prev_end {
                start_ms = prev_end;
                duration_ms = original.end_ms() - start_ms;
            }
            if duration_ms <= min_duration {
                duration_ms = min_duration;
                start_ms = original.end_ms() - min_duration;
            }
            ClipSpan {
                start_ms,
                duration_ms,
            }
        }
        ResizeEdge::Right => {
            let mut duration_ms = original.duration_ms + delta;
            if let Some(next) = next {
                let max_duration =
                    (next.start_ms - prev_end).min(next.start_ms - original.start_ms);
                duration_ms = duration_ms.min(max_duration);
            }
            ClipSpan {
                start_ms: original.start_ms,
                duration_ms: duration_ms.max(min_duration),
            }
        }
    }
}
