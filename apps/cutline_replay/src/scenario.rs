use anyhow::{anyhow, bail, Context, Result};
use cutline_core::geometry::GeometryFrame;
use cutline_core::ids::IdAllocator;
use cutline_core::preview::PreviewSink;
use cutline_core::resize::ResizeEdge;
use cutline_core::{
    Clip, CommitOutcome, EngineConfig, Resource, TimeMs, Timeline, TimelineEditor, Track,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// A recorded editing session: a seed timeline plus gestures to replay.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: EngineConfig,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub tracks: Vec<SeedTrack>,
    #[serde(default)]
    pub gestures: Vec<RecordedGesture>,
}

#[derive(Debug, Deserialize)]
pub struct SeedTrack {
    pub id: Uuid,
    pub clips: Vec<SeedClip>,
}

#[derive(Debug, Deserialize)]
pub struct SeedClip {
    pub id: Uuid,
    pub resource: Uuid,
    pub start_ms: TimeMs,
    /// Defaults to the resource's full duration.
    #[serde(default)]
    pub duration_ms: Option<TimeMs>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum GestureStart {
    DragResource { resource: Uuid },
    DragClip { clip: Uuid },
    Resize { clip: Uuid, edge: ResizeEdge },
}

#[derive(Debug, Deserialize)]
pub struct RecordedGesture {
    #[serde(flatten)]
    pub start: GestureStart,
    #[serde(default)]
    pub frames: Vec<GeometryFrame>,
    /// Release outside any drop zone instead of committing.
    #[serde(default)]
    pub cancel: bool,
}

/// Per-gesture result, in replay order.
#[derive(Debug, PartialEq)]
pub enum GestureReport {
    Committed(CommitOutcome),
    Cancelled,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        serde_json::from_str(&data).with_context(|| format!("parsing scenario {}", path.display()))
    }

    fn catalog(&self) -> Result<HashMap<Uuid, Arc<Resource>>> {
        let mut catalog = HashMap::new();
        for resource in &self.resources {
            if catalog.insert(resource.id, Arc::new(resource.clone())).is_some() {
                bail!("duplicate resource id {}", resource.id);
            }
        }
        Ok(catalog)
    }

    /// Build the starting timeline, sharing one `Arc` per resource.
    pub fn seed_timeline(&self) -> Result<Timeline> {
        let catalog = self.catalog()?;
        let mut tracks = Vec::with_capacity(self.tracks.len());
        for seed in &self.tracks {
            let mut clips = Vec::with_capacity(seed.clips.len());
            for clip in &seed.clips {
                let resource = catalog.get(&clip.resource).ok_or_else(|| {
                    anyhow!("clip {} uses unknown resource {}", clip.id, clip.resource)
                })?;
                clips.push(Clip {
                    id: clip.id,
                    track_id: seed.id,
                    start_ms: clip.start_ms,
                    duration_ms: clip.duration_ms.unwrap_or(resource.duration_ms),
                    resource: Arc::clone(resource),
                });
            }
            tracks.push(Track { id: seed.id, clips });
        }
        Ok(Timeline { tracks })
    }

    /// Run every gesture through `editor`, showing each frame's preview on
    /// `sink`.
    pub fn replay<A: IdAllocator>(
        &self,
        editor: &mut TimelineEditor<A>,
        sink: &mut dyn PreviewSink,
    ) -> Result<Vec<GestureReport>> {
        let catalog = self.catalog()?;
        let mut reports = Vec::with_capacity(self.gestures.len());

        for (n, gesture) in self.gestures.iter().enumerate() {
            match &gesture.start {
                GestureStart::DragResource { resource } => {
                    let resource = catalog.get(resource).ok_or_else(|| {
                        anyhow!("gesture {} drags unknown resource {}", n, resource)
                    })?;
                    editor.begin_resource_drag(Arc::clone(resource))?;
                }
                GestureStart::DragClip { clip } => editor.begin_clip_drag(*clip)?,
                GestureStart::Resize { clip, edge } => editor.begin_resize(*clip, *edge)?,
            }

            for frame in &gesture.frames {
                sink.show(&editor.update(frame));
            }

            let report = if gesture.cancel {
                editor.cancel_gesture();
                GestureReport::Cancelled
            } else {
                GestureReport::Committed(editor.end_gesture())
            };
            tracing::info!(gesture = n, ?report, "gesture replayed");
            reports.push(report);
        }
        Ok(reports)
    }
}
