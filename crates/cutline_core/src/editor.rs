use crate::commit;
use crate::config::EngineConfig;
use crate::error::{CoreError, Result};
use crate::geometry::GeometryFrame;
use crate::ids::{IdAllocator, UuidAllocator};
use crate::placement::compute_placement;
use crate::preview::{BorderStyle, Preview};
use crate::resize::{compute_resize, ClipSpan, ResizeEdge};
use crate::session::{DragSubject, DropTarget, Gesture, InteractionSession, ResizeSubject};
use crate::store::TimelineStore;
use crate::types::*;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// What happened when a gesture ended.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    Applied,
    /// No gesture was in progress.
    NoSession,
    /// The gesture never produced a usable drop or resize; nothing changed.
    NoFinalValues,
    /// The mutation failed or broke an invariant; nothing changed.
    Rejected(CoreError),
}

impl CommitOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommitOutcome::Applied)
    }
}

/// Drives one gesture at a time against the timeline store: begin, a
/// preview per pointer move, then commit or cancel.
#[derive(Debug)]
pub struct TimelineEditor<A: IdAllocator = UuidAllocator> {
    store: TimelineStore,
    config: EngineConfig,
    ids: A,
    session: Option<InteractionSession>,
}

impl TimelineEditor<UuidAllocator> {
    pub fn new(timeline: Timeline, config: EngineConfig) -> Result<Self> {
        Self::with_ids(timeline, config, UuidAllocator)
    }
}

impl<A: IdAllocator> TimelineEditor<A> {
    pub fn with_ids(timeline: Timeline, config: EngineConfig, ids: A) -> Result<Self> {
        Ok(Self {
            store: TimelineStore::new(timeline)?,
            config,
            ids,
            session: None,
        })
    }

    pub fn tracks(&self) -> Arc<Timeline> {
        self.store.tracks()
    }

    pub fn store(&self) -> &TimelineStore {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&InteractionSession> {
        self.session.as_ref()
    }

    // -----------------------------------------------------------------------
    // begin
    // -----------------------------------------------------------------------

    /// Start dragging a resource from the catalog. The new clip's id is
    /// allocated now so the frames can refer to it.
    pub fn begin_resource_drag(&mut self, resource: Arc<Resource>) -> Result<Uuid> {
        self.ensure_idle()?;
        let clip_id = self.ids.next_clip_id();
        debug!(%clip_id, resource = %resource.id, "begin resource drag");
        self.session = Some(InteractionSession::drag(DragSubject::from_resource(
            clip_id, resource,
        )));
        Ok(clip_id)
    }

    pub fn begin_clip_drag(&mut self, clip_id: Uuid) -> Result<()> {
        self.ensure_idle()?;
        let tracks = self.store.tracks();
        let clip = tracks.clip(clip_id).ok_or(CoreError::ClipNotFound(clip_id))?;
        debug!(%clip_id, track = %clip.track_id, "begin clip drag");
        self.session = Some(InteractionSession::drag(DragSubject::from_clip(clip)));
        Ok(())
    }

    pub fn begin_resize(&mut self, clip_id: Uuid, edge: ResizeEdge) -> Result<()> {
        self.ensure_idle()?;
        let tracks = self.store.tracks();
        let clip = tracks.clip(clip_id).ok_or(CoreError::ClipNotFound(clip_id))?;
        debug!(%clip_id, ?edge, "begin resize");
        self.session = Some(InteractionSession::resize(ResizeSubject {
            clip_id,
            track_id: clip.track_id,
            edge,
            original: ClipSpan::of(clip),
        }));
        Ok(())
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.session.is_some() {
            return Err(CoreError::GestureInProgress);
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // update
    // -----------------------------------------------------------------------

    /// Process one pointer-move frame. The session's final values are
    /// replaced before this returns, so a following [`end_gesture`](Self::end_gesture)
    /// always commits what this frame previewed.
    pub fn update(&mut self, frame: &GeometryFrame) -> Preview {
        let Some(session) = self.session.as_mut() else {
            return Preview::hidden();
        };
        session.frames += 1;
        let tracks = self.store.tracks();

        match &mut session.gesture {
            Gesture::Drag { subject, target } => {
                let placement = compute_placement(subject, frame, &tracks, &self.config);
                *target = DropTarget::from_placement(&placement.result);
                debug!(result = ?placement.result, "drag frame");
                placement.preview
            }
            Gesture::Resize { subject, span } => {
                let delta = self.config.px_to_ms(frame.delta_x);
                let (prev, next) = match tracks.siblings(subject.clip_id) {
                    Ok(siblings) => siblings,
                    Err(err) => {
                        warn!(%err, "resized clip vanished from the timeline");
                        *span = None;
                        return Preview::hidden();
                    }
                };
                let resized =
                    compute_resize(subject.original, subject.edge, delta, prev, next, &self.config);
                *span = Some(resized);
                debug!(start = %resized.start_ms, duration = %resized.duration_ms, "resize frame");
                resize_preview(&resized, frame, &self.config)
            }
        }
    }

    // -----------------------------------------------------------------------
    // end
    // -----------------------------------------------------------------------

    /// Commit the last frame's final values and discard the session.
    pub fn end_gesture(&mut self) -> CommitOutcome {
        let Some(session) = self.session.take() else {
            return CommitOutcome::NoSession;
        };
        let clip_id = session.clip_id();

        let result = match session.gesture {
            Gesture::Drag {
                subject,
                target: Some(target),
            } => {
                let ids = &mut self.ids;
                self.store
                    .apply_commit(|tl| commit::apply_drag(tl, &subject, target, ids))
                    .map(|track_id| info!(%clip_id, %track_id, ?target, "committed drag"))
            }
            Gesture::Resize {
                subject,
                span: Some(span),
            } => self
                .store
                .apply_commit(|tl| commit::apply_resize(tl, &subject, span))
                .map(|()| {
                    info!(
                        %clip_id,
                        start = %span.start_ms,
                        duration = %span.duration_ms,
                        "committed resize"
                    )
                }),
            _ => {
                debug!(%clip_id, frames = session.frames, "gesture ended without a target");
                return CommitOutcome::NoFinalValues;
            }
        };

        match result {
            Ok(()) => CommitOutcome::Applied,
            Err(err) => {
                warn!(%clip_id, %err, "commit rejected");
                CommitOutcome::Rejected(err)
            }
        }
    }

    /// Abandon the current gesture. Returns whether one was in progress.
    pub fn cancel_gesture(&mut self) -> bool {
        match self.session.take() {
            Some(session) => {
                debug!(clip_id = %session.clip_id(), "gesture cancelled");
                true
            }
            None => false,
        }
    }
}

/// Track-relative rect of a clip being resized, drawn solid.
fn resize_preview(span: &ClipSpan, frame: &GeometryFrame, config: &EngineConfig) -> Preview {
    Preview {
        left: config.ms_to_px(span.start_ms),
        top: 0.0,
        width: config.ms_to_px(span.duration_ms),
        height: frame.active_rect.map(|r| r.height).unwrap_or(0.0),
        border: BorderStyle::Solid,
        visible: true,
    }
}
