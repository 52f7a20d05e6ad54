//! Mutations applied to a draft timeline when a gesture ends.
//!
//! These run inside [`TimelineStore::apply_commit`](crate::store::TimelineStore::apply_commit),
//! so an error here discards the draft and leaves the store untouched.

use crate::error::{CoreError, Result};
use crate::ids::IdAllocator;
use crate::resize::ClipSpan;
use crate::session::{DragSubject, DropTarget, ResizeSubject, TrackEdge};
use crate::types::*;
use uuid::Uuid;

/// Drop a dragged clip (or a new clip for a dragged resource) on `target`.
/// Returns the id of the track the clip ended up on.
pub fn apply_drag(
    timeline: &mut Timeline,
    subject: &DragSubject,
    target: DropTarget,
    ids: &mut dyn IdAllocator,
) -> Result<Uuid> {
    let track_id = match target {
        DropTarget::NewTrack { edge } => drop_on_new_track(timeline, subject, edge, ids)?,
        DropTarget::Track { track_id, start_ms } => {
            drop_on_track(timeline, subject, track_id, start_ms)?;
            track_id
        }
    };
    timeline.prune_empty_tracks();
    Ok(track_id)
}

/// Write a resized span back onto its clip, which must still be on the track
/// it was resized on.
pub fn apply_resize(
    timeline: &mut Timeline,
    subject: &ResizeSubject,
    span: ClipSpan,
) -> Result<()> {
    let ti = timeline
        .track_index(subject.track_id)
        .ok_or(CoreError::TrackNotFound(subject.track_id))?;
    let clip = timeline.tracks[ti]
        .clips
        .iter_mut()
        .find(|c| c.id == subject.clip_id)
        .ok_or(CoreError::ClipNotFound(subject.clip_id))?;
    clip.start_ms = span.start_ms;
    clip.duration_ms = span.duration_ms;
    Ok(())
}

fn drop_on_new_track(
    timeline: &mut Timeline,
    subject: &DragSubject,
    edge: TrackEdge,
    ids: &mut dyn IdAllocator,
) -> Result<Uuid> {
    if subject.source_track.is_some() {
        timeline.remove_clip(subject.clip_id)?;
    }

    let track_id = ids.next_track_id();
    let track = Track {
        id: track_id,
        clips: vec![subject.to_clip(track_id, TimeMs::ZERO)],
    };
    match edge {
        TrackEdge::Head => timeline.tracks.insert(0, track),
        TrackEdge::Tail => timeline.tracks.push(track),
    }
    Ok(track_id)
}

fn drop_on_track(
    timeline: &mut Timeline,
    subject: &DragSubject,
    track_id: Uuid,
    start_ms: TimeMs,
) -> Result<()> {
    let target_idx = timeline
        .track_index(track_id)
        .ok_or(CoreError::TrackNotFound(track_id))?;
    let clip = subject.to_clip(track_id, start_ms);

    if subject.source_track == Some(track_id) {
        let slot = timeline.tracks[target_idx]
            .clips
            .iter_mut()
            .find(|c| c.id == subject.clip_id)
            .ok_or(CoreError::ClipNotFound(subject.clip_id))?;
        *slot = clip;
    } else {
        if subject.source_track.is_some() {
            timeline.remove_clip(subject.clip_id)?;
        }
        timeline.tracks[target_idx].clips.push(clip);
    }

    settle_track(&mut timeline.tracks[target_idx], subject.clip_id);
    Ok(())
}

/// Restore order and non-overlap on a track after `moved` was placed on it.
///
/// Clips are sorted by start, with `moved` ahead of any clip sharing its
/// start. Then, from `moved` onwards, each clip that begins before its
/// predecessor ends is pushed to that end.
pub fn settle_track(track: &mut Track, moved: Uuid) {
    track.clips.sort_by_key(|c| (c.start_ms, c.id != moved));

    let Some(from) = track.clips.iter().position(|c| c.id == moved) else {
        return;
    };
    for i in from.max(1)..track.clips.len() {
        let prev_end = track.clips[i - 1].end_ms();
        let clip = &mut track.clips[i];
        if clip.start_ms < prev_end {
            clip.start_ms = prev_end;
        }
    }
}
