use crate::error::Result;
use crate::types::Timeline;
use std::sync::Arc;

/// The authoritative track collection.
///
/// Readers get an `Arc` snapshot that never changes underneath them. The
/// only way to mutate is [`apply_commit`](Self::apply_commit), which works on
/// a private copy and swaps it in once it validates.
#[derive(Debug, Clone)]
pub struct TimelineStore {
    current: Arc<Timeline>,
    revision: u64,
}

impl TimelineStore {
    /// Wrap an initial timeline, rejecting one that breaks any invariant.
    pub fn new(timeline: Timeline) -> Result<Self> {
        timeline.validate()?;
        Ok(Self {
            current: Arc::new(timeline),
            revision: 0,
        })
    }

    pub fn tracks(&self) -> Arc<Timeline> {
        Arc::clone(&self.current)
    }

    /// Number of commits applied since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Run `mutate` on a copy of the timeline and publish the copy if both
    /// the mutation and validation succeed. On error nothing changes.
    pub fn apply_commit<T>(
        &mut self,
        mutate: impl FnOnce(&mut Timeline) -> Result<T>,
    ) -> Result<T> {
        let mut draft = Timeline::clone(&self.current);
        let out = mutate(&mut draft)?;
        draft.validate()?;
        self.current = Arc::new(draft);
        self.revision += 1;
        Ok(out)
    }
}

impl Default for TimelineStore {
    fn default() -> Self {
        Self {
            current: Arc::new(Timeline::new()),
            revision: 0,
        }
    }
}
