use uuid::Uuid;

/// Issues identifiers for clips and tracks created during a commit.
pub trait IdAllocator {
    fn next_clip_id(&mut self) -> Uuid;
    fn next_track_id(&mut self) -> Uuid;
}

/// Random v4 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidAllocator;

impl IdAllocator for UuidAllocator {
    fn next_clip_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }

    fn next_track_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic ids counting up from a seed, shared between clips and tracks.
/// Used for replays where output must be reproducible.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    pub fn starting_at(next: u128) -> Self {
        Self { next }
    }

    fn bump(&mut self) -> Uuid {
        let id = Uuid::from_u128(self.next);
        self.next += 1;
        id
    }
}

impl IdAllocator for SequentialIds {
    fn next_clip_id(&mut self) -> Uuid {
        self.bump()
    }

    fn next_track_id(&mut self) -> Uuid {
        self.bump()
    }
}
