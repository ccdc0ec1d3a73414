use crate::trackers::centroid::{
    DEFAULT_EXPIRY_THRESHOLD_MS, DEFAULT_HISTORY_LENGTH, DEFAULT_HISTORY_WINDOW_MS,
    DEFAULT_MAX_DISTANCE, DEFAULT_STALE_THRESHOLD_MS,
};
use crate::trackers::lifecycle::Lifecycle;
use crate::utils::color::{TrackColor, DEFAULT_PALETTE, DEFAULT_TRACK_COLOR};

/// Class that is used to configure the Centroid Tracker
#[derive(Debug, Clone)]
pub struct CentroidTrackerOptions {
    max_distance: f32,
    stale_threshold: f64,
    expiry_threshold: f64,
    history_length: usize,
    history_window: f64,
    palette: Vec<TrackColor>,
    default_color: TrackColor,
    keep_wasted: bool,
}

impl Default for CentroidTrackerOptions {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            stale_threshold: DEFAULT_STALE_THRESHOLD_MS,
            expiry_threshold: DEFAULT_EXPIRY_THRESHOLD_MS,
            history_length: DEFAULT_HISTORY_LENGTH,
            history_window: DEFAULT_HISTORY_WINDOW_MS,
            palette: DEFAULT_PALETTE.to_vec(),
            default_color: DEFAULT_TRACK_COLOR,
            keep_wasted: false,
        }
    }
}

impl Lifecycle for CentroidTrackerOptions {
    fn get_stale_threshold(&self) -> f64 {
        self.stale_threshold
    }

    fn get_expiry_threshold(&self) -> f64 {
        self.expiry_threshold
    }

    fn get_keep_wasted(&self) -> bool {
        self.keep_wasted
    }
}

impl CentroidTrackerOptions {
    /// The gating distance. A detection is associated with a track only when the distance
    /// between the detection center and the center of the last track detection is strictly
    /// less than the value.
    ///
    pub fn max_distance(mut self, d: f32) -> Self {
        assert!(
            d > 0.0 && d.is_finite(),
            "The distance is expected to be a positive float"
        );
        self.max_distance = d;
        self
    }

    /// The time (ms) without updates after which the track no longer takes part in
    /// association. A stale track is never reactivated: the object seen again gets a new
    /// track.
    ///
    pub fn stale_threshold(mut self, ms: f64) -> Self {
        assert!(ms >= 0.0, "Stale threshold must not be negative");
        assert!(
            ms <= self.expiry_threshold,
            "Stale threshold must not exceed expiry threshold"
        );
        self.stale_threshold = ms;
        self
    }

    /// The time (ms) without updates after which the track is removed from the tracker.
    ///
    pub fn expiry_threshold(mut self, ms: f64) -> Self {
        assert!(
            ms >= self.stale_threshold,
            "Expiry threshold must not be less than stale threshold"
        );
        self.expiry_threshold = ms;
        self
    }

    /// The number of last detections kept within the track.
    ///
    pub fn history_length(mut self, n: usize) -> Self {
        assert!(n > 0, "History length must be a positive number");
        self.history_length = n;
        self
    }

    /// Detections older than the window (ms, relative to the frame being processed) are
    /// evicted from the track history when the track is updated.
    ///
    pub fn history_window(mut self, ms: f64) -> Self {
        assert!(ms > 0.0, "History window must be a positive number");
        self.history_window = ms;
        self
    }

    /// Colors assigned to new tracks. The color is chosen by the number of tracks kept in the
    /// tracker modulo the palette size, so colors repeat.
    ///
    pub fn palette(mut self, palette: &[TrackColor]) -> Self {
        assert!(!palette.is_empty(), "Palette must contain at least one color");
        self.palette = palette.to_vec();
        self
    }

    /// When set, expired tracks are kept with their history until they are collected with
    /// `wasted` or dropped with `clear_wasted`. Otherwise they are dropped on expiry.
    ///
    pub fn keep_wasted(mut self, keep: bool) -> Self {
        self.keep_wasted = keep;
        self
    }

    /// Color returned for identifiers unknown to the tracker
    ///
    pub fn default_color(mut self, color: TrackColor) -> Self {
        self.default_color = color;
        self
    }

    pub fn get_max_distance(&self) -> f32 {
        self.max_distance
    }

    pub fn get_history_length(&self) -> usize {
        self.history_length
    }

    pub fn get_history_window(&self) -> f64 {
        self.history_window
    }

    pub fn get_palette(&self) -> &[TrackColor] {
        &self.palette
    }

    pub fn get_default_color(&self) -> TrackColor {
        self.default_color
    }

    /// Palette color for the track created when `track_count` tracks are kept
    ///
    pub(crate) fn color_for(&self, track_count: usize) -> TrackColor {
        self.palette[track_count % self.palette.len()]
    }
}
