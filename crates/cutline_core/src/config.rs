use crate::types::TimeMs;
use serde::{Deserialize, Serialize};

/// Tunables for the placement and resize engines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Horizontal scale of the timeline. Default: 24.
    #[serde(default = "default_pixels_per_second")]
    pub pixels_per_second: f64,
    /// Shortest duration a resize may leave a clip with. Default: 1000 ms.
    #[serde(default = "default_min_clip_duration")]
    pub min_clip_duration: TimeMs,
    /// How far above the first track the new-track bar is drawn. Default: 2.
    #[serde(default = "default_new_track_bar_inset")]
    pub new_track_bar_inset: f64,
}

fn default_pixels_per_second() -> f64 {
    24.0
}

fn default_min_clip_duration() -> TimeMs {
    TimeMs(1_000)
}

fn default_new_track_bar_inset() -> f64 {
    2.0
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            pixels_per_second: default_pixels_per_second(),
            min_clip_duration: default_min_clip_duration(),
            new_track_bar_inset: default_new_track_bar_inset(),
        }
    }
}

impl EngineConfig {
    pub fn ms_to_px(&self, time: TimeMs) -> f64 {
        time.0 as f64 / 1_000.0 * self.pixels_per_second
    }

    /// Rounds to the nearest millisecond.
    pub fn px_to_ms(&self, px: f64) -> TimeMs {
        TimeMs((px / self.pixels_per_second * 1_000.0).round() as i64)
    }
}
