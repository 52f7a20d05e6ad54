//! Where a dragged clip would land this frame.
//!
//! [`compute_placement`] is pure: identical inputs give identical
//! placements. The result only drives the preview until the gesture ends,
//! when the editor commits the last one.

use crate::config::EngineConfig;
use crate::geometry::{CollisionTarget, GeometryFrame, Rect, TrackRows};
use crate::preview::{BorderStyle, Preview};
use crate::session::{DragSubject, TrackEdge};
use crate::types::*;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PlacementResult {
    /// Nothing to drop onto this frame.
    None,
    NewTrack(TrackEdge),
    Track {
        track_id: Uuid,
        /// Container-relative x of the proposed clip's left edge.
        insertion_x: f64,
        start_ms: TimeMs,
    },
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Placement {
    pub result: PlacementResult,
    pub preview: Preview,
}

impl Placement {
    fn nowhere() -> Self {
        Self {
            result: PlacementResult::None,
            preview: Preview::hidden(),
        }
    }
}

pub fn compute_placement(
    subject: &DragSubject,
    frame: &GeometryFrame,
    timeline: &Timeline,
    config: &EngineConfig,
) -> Placement {
    let (Some(container), Some(active)) = (frame.container(), frame.active_rect) else {
        return Placement::nowhere();
    };

    if timeline.tracks.is_empty() {
        // Anything dropped on an empty timeline starts the first track.
        let bar = Rect::new(0.0, 0.0, container.width, 0.0);
        return Placement {
            result: PlacementResult::NewTrack(TrackEdge::Tail),
            preview: Preview::shown(bar, BorderStyle::Solid),
        };
    }

    // Without row bounds there is nothing to measure head/tail against.
    if let Some(rows) = frame.track_rows {
        if let Some(edge) = new_track_edge(&active, &container, &rows) {
            return Placement {
                result: PlacementResult::NewTrack(edge),
                preview: new_track_bar(edge, &rows, config),
            };
        }
    }

    let Some((track_id, track_target)) = frame.best_track(subject.clip_id) else {
        return Placement::nowhere();
    };
    let track_rect = track_target.rect;
    let track_offset = track_rect.relative_to(&container);

    let closest = frame
        .clips_on_track(subject.clip_id, track_id)
        .min_by(|a, b| {
            let da = (active.left - a.1.rect.left).abs();
            let db = (active.left - b.1.rect.left).abs();
            da.total_cmp(&db)
        });

    let (insertion_x, preview) = match closest {
        None => {
            let x = (active.left - container.left).max(track_offset.left);
            let rect = Rect::new(x, track_offset.top, active.width, active.height);
            (x, Preview::shown(rect, BorderStyle::Dashed))
        }
        Some((clip_id, clip_target)) => {
            let track = timeline.track(track_id);
            place_beside(
                subject,
                &active,
                &container,
                &track_rect,
                track,
                clip_id,
                clip_target,
                config,
            )
        }
    };

    let start_ms = config.px_to_ms((insertion_x - track_offset.left).max(0.0));
    Placement {
        result: PlacementResult::Track {
            track_id,
            insertion_x,
            start_ms,
        },
        preview,
    }
}

fn new_track_edge(active: &Rect, container: &Rect, rows: &TrackRows) -> Option<TrackEdge> {
    let offset_y = active.top - container.top;
    let half = active.height / 2.0;
    if offset_y < rows.first.top - half {
        Some(TrackEdge::Head)
    } else if offset_y > rows.last.top + half {
        Some(TrackEdge::Tail)
    } else {
        None
    }
}

fn new_track_bar(edge: TrackEdge, rows: &TrackRows, config: &EngineConfig) -> Preview {
    let top = match edge {
        TrackEdge::Head => rows.first.top - config.new_track_bar_inset,
        TrackEdge::Tail => rows.last.bottom(),
    };
    let bar = Rect::new(rows.first.left, top, rows.first.width, 0.0);
    Preview::shown(bar, BorderStyle::Solid)
}

/// Insert before or after the overlapped clip closest to the active one,
/// widening the marker into a full ghost when the gap allows.
#[allow(clippy::too_many_arguments)]
fn place_beside(
    subject: &DragSubject,
    active: &Rect,
    container: &Rect,
    track_rect: &Rect,
    track: Option<&Track>,
    clip_id: Uuid,
    clip_target: &CollisionTarget,
    config: &EngineConfig,
) -> (f64, Preview) {
    let closest = clip_target.rect;
    let top = closest.top - container.top;
    let (before, after) = neighbours(track, clip_id, subject.clip_id);

    if active.left < closest.center_x() {
        let x = closest.left - container.left;
        let gap_start = before
            .map(|c| track_rect.left + config.ms_to_px(c.end_ms()))
            .unwrap_or(track_rect.left);
        if closest.left - gap_start >= active.width {
            let x = x - active.width;
            let rect = Rect::new(x, top, active.width, closest.height);
            return (x, Preview::shown(rect, BorderStyle::Dashed));
        }
        let marker = Rect::new(x, top, 0.0, closest.height);
        (x, Preview::shown(marker, BorderStyle::Solid))
    } else {
        let x = closest.right() - container.left;
        let gap_end = after
            .map(|c| track_rect.left + config.ms_to_px(c.start_ms))
            .unwrap_or(f64::INFINITY);
        if gap_end - closest.right() >= active.width {
            let rect = Rect::new(x, top, active.width, closest.height);
            return (x, Preview::shown(rect, BorderStyle::Dashed));
        }
        let marker = Rect::new(x, top, 0.0, closest.height);
        (x, Preview::shown(marker, BorderStyle::Solid))
    }
}

/// Clips on either side of `clip_id`, skipping the one being dragged.
fn neighbours(
    track: Option<&Track>,
    clip_id: Uuid,
    dragged: Uuid,
) -> (Option<&Clip>, Option<&Clip>) {
    let Some(track) = track else {
        return (None, None);
    };
    let Some(idx) = track.clips.iter().position(|c| c.id == clip_id) else {
        return (None, None);
    };
    let before = track.clips[..idx].iter().rev().find(|c| c.id != dragged);
    let after = track.clips[idx + 1..].iter().find(|c| c.id != dragged);
    (before, after)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::TargetKind;
    use std::sync::Arc;

    // Container at (100, 50); tracks are 48px tall with 12px gaps and start
    // 24px into the container. At 24px/s one second is one track-height half.
    const CONTAINER: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 1000.0,
        height: 300.0,
    };
    const ROW_H: f64 = 48.0;

    fn row_top(index: usize) -> f64 {
        24.0 + index as f64 * (ROW_H + 12.0)
    }

    fn make_resource(duration: i64) -> Arc<Resource> {
        Arc::new(Resource {
            id: Uuid::new_v4(),
            title: "Video 05".to_string(),
            mime_type: "video/mp4".to_string(),
            duration_ms: TimeMs(duration),
            width: 3840,
            height: 2160,
            url: "media/05.mp4".to_string(),
            poster: "media/05-poster.jpeg".to_string(),
        })
    }

    fn make_track(spans: &[(i64, i64)]) -> Track {
        let id = Uuid::new_v4();
        Track {
            id,
            clips: spans
                .iter()
                .map(|&(s, d)| Clip {
                    id: Uuid::new_v4(),
                    track_id: id,
                    start_ms: TimeMs(s),
                    duration_ms: TimeMs(d),
                    resource: make_resource(d),
                })
                .collect(),
        }
    }

    fn track_rect(index: usize) -> Rect {
        Rect::new(CONTAINER.left + 24.0, CONTAINER.top + row_top(index), 900.0, ROW_H)
    }

    fn clip_rect(index: usize, clip: &Clip) -> Rect {
        let config = EngineConfig::default();
        let t = track_rect(index);
        Rect::new(
            t.left + config.ms_to_px(clip.start_ms),
            t.top,
            config.ms_to_px(clip.duration_ms),
            ROW_H,
        )
    }

    fn rows(count: usize) -> TrackRows {
        TrackRows {
            first: Rect::new(24.0, row_top(0), 900.0, ROW_H),
            last: Rect::new(24.0, row_top(count - 1), 900.0, ROW_H),
        }
    }

    fn timeline_target() -> CollisionTarget {
        CollisionTarget {
            id: "Droppable-Timeline".to_string(),
            kind: TargetKind::Timeline,
            rect: CONTAINER,
            value: 1.0,
        }
    }

    fn track_target(index: usize, track: &Track, value: f64) -> CollisionTarget {
        CollisionTarget {
            id: format!("Droppable-Track-{}", track.id),
            kind: TargetKind::Track { track_id: track.id },
            rect: track_rect(index),
            value,
        }
    }

    fn clip_target(index: usize, clip: &Clip) -> CollisionTarget {
        CollisionTarget {
            id: format!("Droppable-Clip-{}", clip.id),
            kind: TargetKind::Clip {
                clip_id: clip.id,
                track_id: clip.track_id,
            },
            rect: clip_rect(index, clip),
            value: 0.5,
        }
    }

    fn subject(duration: i64) -> DragSubject {
        DragSubject::from_resource(Uuid::new_v4(), make_resource(duration))
    }

    fn active_rect(left: f64, top: f64, duration: i64) -> Rect {
        Rect::new(left, top, EngineConfig::default().ms_to_px(TimeMs(duration)), ROW_H)
    }

    fn place(subject: &DragSubject, frame: &GeometryFrame, timeline: &Timeline) -> Placement {
        compute_placement(subject, frame, timeline, &EngineConfig::default())
    }

    // -----------------------------------------------------------------------
    // outside / no target
    // -----------------------------------------------------------------------

    #[test]
    fn outside_timeline_hides_preview() {
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 14_000)])],
        };
        let frame = GeometryFrame {
            active_rect: Some(active_rect(0.0, 0.0, 5_000)),
            targets: vec![track_target(0, &tl.tracks[0], 0.3)],
            track_rows: Some(rows(1)),
            ..Default::default()
        };
        let placement = place(&subject(5_000), &frame, &tl);
        assert_eq!(placement.result, PlacementResult::None);
        assert!(!placement.preview.visible);
    }

    #[test]
    fn between_tracks_without_track_target_is_none() {
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 1_000)]), make_track(&[(0, 1_000)])],
        };
        let frame = GeometryFrame {
            active_rect: Some(active_rect(200.0, CONTAINER.top + 50.0, 2_000)),
            targets: vec![timeline_target()],
            track_rows: Some(rows(2)),
            ..Default::default()
        };
        let placement = place(&subject(2_000), &frame, &tl);
        assert_eq!(placement.result, PlacementResult::None);
        assert!(!placement.preview.visible);
    }

    // -----------------------------------------------------------------------
    // new tracks
    // -----------------------------------------------------------------------

    #[test]
    fn far_above_first_track_creates_head() {
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 14_000)])],
        };
        // offset_y = -10, first row top 24, half height 24 => -10 < 0
        let frame = GeometryFrame {
            active_rect: Some(active_rect(300.0, CONTAINER.top - 10.0, 5_000)),
            targets: vec![timeline_target()],
            track_rows: Some(rows(1)),
            ..Default::default()
        };
        let placement = place(&subject(5_000), &frame, &tl);
        assert_eq!(placement.result, PlacementResult::NewTrack(TrackEdge::Head));
        assert_eq!(placement.preview.top, 22.0);
        assert_eq!(placement.preview.height, 0.0);
        assert_eq!(placement.preview.width, 900.0);
        assert_eq!(placement.preview.border, BorderStyle::Solid);
    }

    #[test]
    fn slightly_above_first_track_is_not_head() {
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 14_000)])],
        };
        // offset_y = 10 > 24 - 24
        let frame = GeometryFrame {
            active_rect: Some(active_rect(500.0, CONTAINER.top + 10.0, 5_000)),
            targets: vec![timeline_target(), track_target(0, &tl.tracks[0], 0.4)],
            track_rows: Some(rows(1)),
            ..Default::default()
        };
        let placement = place(&subject(5_000), &frame, &tl);
        assert!(matches!(placement.result, PlacementResult::Track { .. }));
    }

    #[test]
    fn far_below_last_track_creates_tail() {
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 1_000)]), make_track(&[(0, 1_000)])],
        };
        // last row top 84; offset_y 120 > 84 + 24
        let frame = GeometryFrame {
            active_rect: Some(active_rect(300.0, CONTAINER.top + 120.0, 1_000)),
            targets: vec![timeline_target(), track_target(1, &tl.tracks[1], 0.1)],
            track_rows: Some(rows(2)),
            ..Default::default()
        };
        let placement = place(&subject(1_000), &frame, &tl);
        assert_eq!(placement.result, PlacementResult::NewTrack(TrackEdge::Tail));
        assert_eq!(placement.preview.top, row_top(1) + ROW_H);
    }

    #[test]
    fn empty_timeline_starts_first_track() {
        let frame = GeometryFrame {
            active_rect: Some(active_rect(300.0, 100.0, 1_000)),
            targets: vec![timeline_target()],
            track_rows: None,
            ..Default::default()
        };
        let placement = place(&subject(1_000), &frame, &Timeline::new());
        assert_eq!(placement.result, PlacementResult::NewTrack(TrackEdge::Tail));
        assert!(placement.preview.visible);
    }

    #[test]
    fn missing_rows_still_pick_best_track() {
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 1_000)])],
        };
        let frame = GeometryFrame {
            active_rect: Some(active_rect(CONTAINER.left + 144.0, CONTAINER.top - 40.0, 2_000)),
            targets: vec![timeline_target(), track_target(0, &tl.tracks[0], 0.9)],
            track_rows: None,
            ..Default::default()
        };
        let placement = place(&subject(2_000), &frame, &tl);
        assert_eq!(
            placement.result,
            PlacementResult::Track {
                track_id: tl.tracks[0].id,
                insertion_x: 144.0,
                start_ms: TimeMs(5_000),
            }
        );
    }

    #[test]
    fn missing_rows_without_track_target_is_none() {
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 1_000)])],
        };
        let frame = GeometryFrame {
            active_rect: Some(active_rect(300.0, CONTAINER.top + 30.0, 1_000)),
            targets: vec![timeline_target()],
            track_rows: None,
            ..Default::default()
        };
        assert_eq!(place(&subject(1_000), &frame, &tl).result, PlacementResult::None);
    }

    // -----------------------------------------------------------------------
    // free space on target track
    // -----------------------------------------------------------------------

    #[test]
    fn free_space_uses_pointer_position() {
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 1_000)])],
        };
        // track offset left = 24; active left 100 + 24 + 120 => 5s into track
        let left = CONTAINER.left + 24.0 + 120.0;
        let frame = GeometryFrame {
            active_rect: Some(active_rect(left, CONTAINER.top + row_top(0), 2_000)),
            targets: vec![timeline_target(), track_target(0, &tl.tracks[0], 0.8)],
            track_rows: Some(rows(1)),
            ..Default::default()
        };
        let placement = place(&subject(2_000), &frame, &tl);
        assert_eq!(
            placement.result,
            PlacementResult::Track {
                track_id: tl.tracks[0].id,
                insertion_x: 144.0,
                start_ms: TimeMs(5_000),
            }
        );
        assert_eq!(placement.preview.border, BorderStyle::Dashed);
        assert_eq!(placement.preview.width, 48.0);
        assert_eq!(placement.preview.top, row_top(0));
    }

    #[test]
    fn free_space_left_of_track_clamps_to_track_start() {
        let tl = Timeline {
            tracks: vec![make_track(&[(20_000, 1_000)])],
        };
        let frame = GeometryFrame {
            active_rect: Some(active_rect(CONTAINER.left - 40.0, CONTAINER.top + row_top(0), 2_000)),
            targets: vec![timeline_target(), track_target(0, &tl.tracks[0], 0.8)],
            track_rows: Some(rows(1)),
            ..Default::default()
        };
        let placement = place(&subject(2_000), &frame, &tl);
        match placement.result {
            PlacementResult::Track {
                insertion_x,
                start_ms,
                ..
            } => {
                assert_eq!(insertion_x, 24.0);
                assert_eq!(start_ms, TimeMs::ZERO);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn highest_overlap_track_wins() {
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 1_000)]), make_track(&[(0, 1_000)])],
        };
        let frame = GeometryFrame {
            active_rect: Some(active_rect(400.0, CONTAINER.top + 70.0, 1_000)),
            targets: vec![
                timeline_target(),
                track_target(0, &tl.tracks[0], 0.2),
                track_target(1, &tl.tracks[1], 0.7),
            ],
            track_rows: Some(rows(2)),
            ..Default::default()
        };
        let placement = place(&subject(1_000), &frame, &tl);
        match placement.result {
            PlacementResult::Track { track_id, .. } => assert_eq!(track_id, tl.tracks[1].id),
            other => panic!("unexpected {:?}", other),
        }
    }

    // -----------------------------------------------------------------------
    // beside an overlapped clip
    // -----------------------------------------------------------------------

    #[test]
    fn before_clip_with_room_shows_full_ghost() {
        // clip at 10s..15s, nothing before it: 240px of room
        let tl = Timeline {
            tracks: vec![make_track(&[(10_000, 5_000)])],
        };
        let clip = &tl.tracks[0].clips[0];
        let clip_r = clip_rect(0, clip);
        let frame = GeometryFrame {
            active_rect: Some(active_rect(clip_r.left + 10.0, CONTAINER.top + row_top(0), 2_000)),
            targets: vec![
                timeline_target(),
                track_target(0, &tl.tracks[0], 0.9),
                clip_target(0, clip),
            ],
            track_rows: Some(rows(1)),
            ..Default::default()
        };
        let placement = place(&subject(2_000), &frame, &tl);
        // clip left relative to container = 24 + 240 = 264; ghost is 48 wide
        assert_eq!(
            placement.result,
            PlacementResult::Track {
                track_id: tl.tracks[0].id,
                insertion_x: 216.0,
                start_ms: TimeMs(8_000),
            }
        );
        assert_eq!(placement.preview.border, BorderStyle::Dashed);
        assert_eq!(placement.preview.left + placement.preview.width, 264.0);
    }

    #[test]
    fn before_clip_without_room_shows_marker() {
        // 0..9s then 10..15s: only 24px between them, active is 48px wide
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 9_000), (10_000, 5_000)])],
        };
        let second = &tl.tracks[0].clips[1];
        let clip_r = clip_rect(0, second);
        let frame = GeometryFrame {
            active_rect: Some(active_rect(clip_r.left + 5.0, CONTAINER.top + row_top(0), 2_000)),
            targets: vec![
                timeline_target(),
                track_target(0, &tl.tracks[0], 0.9),
                clip_target(0, second),
            ],
            track_rows: Some(rows(1)),
            ..Default::default()
        };
        let placement = place(&subject(2_000), &frame, &tl);
        assert_eq!(
            placement.result,
            PlacementResult::Track {
                track_id: tl.tracks[0].id,
                insertion_x: 264.0,
                start_ms: TimeMs(10_000),
            }
        );
        assert_eq!(placement.preview.width, 0.0);
        assert_eq!(placement.preview.border, BorderStyle::Solid);
    }

    #[test]
    fn before_clip_skips_dragged_clip_when_measuring_gap() {
        // dragging the middle clip left onto the third: the gap is measured
        // from the first clip, not the dragged one.
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 1_000), (6_000, 2_000), (8_000, 4_000)])],
        };
        let dragged = DragSubject::from_clip(&tl.tracks[0].clips[1]);
        let third = &tl.tracks[0].clips[2];
        let third_r = clip_rect(0, third);
        let frame = GeometryFrame {
            active_rect: Some(active_rect(third_r.left + 4.0, CONTAINER.top + row_top(0), 2_000)),
            targets: vec![
                timeline_target(),
                track_target(0, &tl.tracks[0], 0.9),
                clip_target(0, &tl.tracks[0].clips[1]),
                clip_target(0, third),
            ],
            track_rows: Some(rows(1)),
            ..Default::default()
        };
        let placement = place(&dragged, &frame, &tl);
        // room from 1s to 8s = 168px >= 48px
        assert_eq!(placement.preview.border, BorderStyle::Dashed);
        match placement.result {
            PlacementResult::Track { start_ms, .. } => assert_eq!(start_ms, TimeMs(6_000)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn after_last_clip_shows_full_ghost() {
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 5_000)])],
        };
        let clip = &tl.tracks[0].clips[0];
        let clip_r = clip_rect(0, clip);
        let frame = GeometryFrame {
            active_rect: Some(active_rect(clip_r.center_x() + 1.0, CONTAINER.top + row_top(0), 2_000)),
            targets: vec![
                timeline_target(),
                track_target(0, &tl.tracks[0], 0.9),
                clip_target(0, clip),
            ],
            track_rows: Some(rows(1)),
            ..Default::default()
        };
        let placement = place(&subject(2_000), &frame, &tl);
        assert_eq!(
            placement.result,
            PlacementResult::Track {
                track_id: tl.tracks[0].id,
                insertion_x: 144.0,
                start_ms: TimeMs(5_000),
            }
        );
        assert_eq!(placement.preview.width, 48.0);
        assert_eq!(placement.preview.border, BorderStyle::Dashed);
    }

    #[test]
    fn after_clip_skips_dragged_clip_when_measuring_gap() {
        // dragging the middle clip right onto the first: its old slot directly
        // after the first clip does not count against the gap.
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 5_000), (5_000, 2_000), (12_000, 2_000)])],
        };
        let first = &tl.tracks[0].clips[0];
        let dragged = DragSubject::from_clip(&tl.tracks[0].clips[1]);
        let first_r = clip_rect(0, first);
        let frame = GeometryFrame {
            active_rect: Some(active_rect(first_r.center_x() + 1.0, CONTAINER.top + row_top(0), 2_000)),
            targets: vec![
                timeline_target(),
                track_target(0, &tl.tracks[0], 0.9),
                clip_target(0, first),
                clip_target(0, &tl.tracks[0].clips[1]),
            ],
            track_rows: Some(rows(1)),
            ..Default::default()
        };
        let placement = place(&dragged, &frame, &tl);
        // room from 5s to 12s = 168px >= 48px
        assert_eq!(
            placement.result,
            PlacementResult::Track {
                track_id: tl.tracks[0].id,
                insertion_x: 144.0,
                start_ms: TimeMs(5_000),
            }
        );
        assert_eq!(placement.preview.border, BorderStyle::Dashed);
        assert_eq!(placement.preview.width, 48.0);
    }

    #[test]
    fn after_clip_without_room_shows_marker() {
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 5_000), (6_000, 5_000)])],
        };
        let first = &tl.tracks[0].clips[0];
        let first_r = clip_rect(0, first);
        let frame = GeometryFrame {
            active_rect: Some(active_rect(first_r.right() - 2.0, CONTAINER.top + row_top(0), 2_000)),
            targets: vec![
                timeline_target(),
                track_target(0, &tl.tracks[0], 0.9),
                clip_target(0, first),
            ],
            track_rows: Some(rows(1)),
            ..Default::default()
        };
        let placement = place(&subject(2_000), &frame, &tl);
        assert_eq!(placement.preview.width, 0.0);
        assert_eq!(placement.preview.border, BorderStyle::Solid);
        match placement.result {
            PlacementResult::Track { start_ms, .. } => assert_eq!(start_ms, TimeMs(5_000)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn closest_clip_is_nearest_left_edge() {
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 5_000), (5_000, 5_000)])],
        };
        let (a, b) = (&tl.tracks[0].clips[0], &tl.tracks[0].clips[1]);
        let b_r = clip_rect(0, b);
        // just left of b's left edge and b's midpoint: insert before b
        let frame = GeometryFrame {
            active_rect: Some(active_rect(b_r.left - 3.0, CONTAINER.top + row_top(0), 1_000)),
            targets: vec![
                timeline_target(),
                track_target(0, &tl.tracks[0], 0.9),
                clip_target(0, a),
                clip_target(0, b),
            ],
            track_rows: Some(rows(1)),
            ..Default::default()
        };
        let placement = place(&subject(1_000), &frame, &tl);
        match placement.result {
            PlacementResult::Track { start_ms, .. } => assert_eq!(start_ms, TimeMs(5_000)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn placement_is_idempotent() {
        let tl = Timeline {
            tracks: vec![make_track(&[(0, 9_000), (10_000, 5_000)])],
        };
        let second = &tl.tracks[0].clips[1];
        let frame = GeometryFrame {
            active_rect: Some(active_rect(clip_rect(0, second).left + 7.0, CONTAINER.top + row_top(0), 3_000)),
            targets: vec![
                timeline_target(),
                track_target(0, &tl.tracks[0], 0.9),
                clip_target(0, second),
            ],
            track_rows: Some(rows(1)),
            ..Default::default()
        };
        let s = subject(3_000);
        assert_eq!(place(&s, &frame, &tl), place(&s, &frame, &tl));
    }
}
