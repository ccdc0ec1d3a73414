/// Detections received from a detector and detections annotated with track identifiers
pub mod observation;

/// Tracker configuration
pub mod options;

/// Gated center-to-center distance
pub mod metric;

/// Greedy nearest-neighbour selection of the track for a detection
pub mod voting;

/// Centroid tracker with a very tiny interface
pub mod simple_api;

#[cfg(test)]
mod tracker_tests;

#[cfg(feature = "python")]
pub mod centroid_py;

/// Maximum center-to-center distance (exclusive) that allows associating a detection with a track
pub const DEFAULT_MAX_DISTANCE: f32 = 100.0;

/// Frames a track may miss before it becomes stale, at the nominal frame rate
const DEFAULT_MAX_AGE_FRAMES: f64 = 30.0;

/// Idle time after which a track is stale: 30 frames at ~33 ms per frame
pub const DEFAULT_STALE_THRESHOLD_MS: f64 = DEFAULT_MAX_AGE_FRAMES * 33.0;

/// Idle time after which a track is removed
pub const DEFAULT_EXPIRY_THRESHOLD_MS: f64 = DEFAULT_MAX_AGE_FRAMES * 100.0;

/// Maximum number of detections kept within the track history
pub const DEFAULT_HISTORY_LENGTH: usize = 10;

/// Detections older than this (relative to the current frame) are evicted from the history
pub const DEFAULT_HISTORY_WINDOW_MS: f64 = 1000.0;
