use crate::error::{CoreError, Result};
use crate::types::*;
use std::collections::HashSet;
use uuid::Uuid;

impl Timeline {
    pub fn new() -> Self {
        Self { tracks: vec![] }
    }

    pub fn track(&self, track_id: Uuid) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == track_id)
    }

    pub fn track_index(&self, track_id: Uuid) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == track_id)
    }

    pub fn clip(&self, clip_id: Uuid) -> Option<&Clip> {
        self.find_clip_location(clip_id)
            .map(|(ti, ci)| &self.tracks[ti].clips[ci])
    }

    /// Find the (track_index, clip_index) for a given clip id.
    pub fn find_clip_location(&self, clip_id: Uuid) -> Option<(usize, usize)> {
        for (ti, track) in self.tracks.iter().enumerate() {
            if let Some(ci) = track.clips.iter().position(|c| c.id == clip_id) {
                return Some((ti, ci));
            }
        }
        None
    }

    /// The clips immediately before and after `clip_id` on its own track.
    pub fn siblings(&self, clip_id: Uuid) -> Result<(Option<&Clip>, Option<&Clip>)> {
        let (ti, ci) = self
            .find_clip_location(clip_id)
            .ok_or(CoreError::ClipNotFound(clip_id))?;
        let clips = &self.tracks[ti].clips;
        let prev = ci.checked_sub(1).map(|i| &clips[i]);
        Ok((prev, clips.get(ci + 1)))
    }

    /// Remove a clip by id, returning it. The track is left in place even if
    /// it becomes empty.
    pub fn remove_clip(&mut self, clip_id: Uuid) -> Result<Clip> {
        let (ti, ci) = self
            .find_clip_location(clip_id)
            .ok_or(CoreError::ClipNotFound(clip_id))?;
        Ok(self.tracks[ti].clips.remove(ci))
    }

    /// Drop every track that has no clips left.
    pub fn prune_empty_tracks(&mut self) {
        self.tracks.retain(|t| !t.clips.is_empty());
    }

    /// Check every structural invariant of the timeline.
    pub fn validate(&self) -> Result<()> {
        let mut track_ids = HashSet::new();
        let mut clip_ids = HashSet::new();

        for track in &self.tracks {
            if !track_ids.insert(track.id) {
                return Err(CoreError::DuplicateTrack(track.id));
            }
            if track.clips.is_empty() {
                return Err(CoreError::EmptyTrack(track.id));
            }
            for clip in &track.clips {
                if !clip_ids.insert(clip.id) {
                    return Err(CoreError::DuplicateClip(clip.id));
                }
                if clip.track_id != track.id {
                    return Err(CoreError::TrackMismatch {
                        clip_id: clip.id,
                        claimed: clip.track_id,
                        actual: track.id,
                    });
                }
                if clip.start_ms < TimeMs::ZERO || clip.duration_ms <= TimeMs::ZERO {
                    return Err(CoreError::InvalidSpan(clip.id));
                }
            }
            track.validate_order()?;
        }
        Ok(())
    }
}

impl Track {
    /// Ascending start order with no two `[start, end)` intervals touching
    /// more than an edge.
    pub fn validate_order(&self) -> Result<()> {
        for pair in self.clips.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.start_ms < prev.start_ms {
                return Err(CoreError::UnsortedTrack(self.id));
            }
            if prev.overlaps(next) {
                return Err(CoreError::OverlapDetected {
                    track_id: self.id,
                    clip_id: next.id,
                });
            }
        }
        Ok(())
    }
}
