//! Placement engine for a multi-track, non-linear video timeline.
//!
//! A gesture runs through [`editor::TimelineEditor`]: `begin_*`, one
//! [`editor::TimelineEditor::update`] per pointer move (returning a
//! [`preview::Preview`]), then `end_gesture` commits into the
//! [`store::TimelineStore`].

pub mod commit;
pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod placement;
pub mod preview;
pub mod resize;
pub mod session;
pub mod store;
pub mod timeline;
pub mod types;

pub use config::EngineConfig;
pub use editor::{CommitOutcome, TimelineEditor};
pub use error::{CoreError, Result};
pub use types::{Clip, Resource, TimeMs, Timeline, Track};
