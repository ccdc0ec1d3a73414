use std::time::Duration;

/// Statistics of the tracker, refreshed on every processed frame
///
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackingStats {
    /// Frame rate estimated from the timestamps of the last two frames, `0` for the first frame
    pub fps: f64,
    /// Active tracks after the last frame
    pub object_count: usize,
    /// Time spent on association and lifecycle sweeps for the last frame
    pub processing_time: Duration,
    /// Identified detections emitted since the tracker was created or reset
    pub total_detections: usize,
    /// Frames processed since the tracker was created or reset
    pub frames: usize,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct StatsCollector {
    last_frame_time: Option<f64>,
    stats: TrackingStats,
}

impl StatsCollector {
    pub fn record(
        &mut self,
        current_time: f64,
        detections: usize,
        object_count: usize,
        processing_time: Duration,
    ) {
        let delta = self
            .last_frame_time
            .map(|last| current_time - last)
            .unwrap_or(0.0);
        self.stats.fps = if delta > 0.0 { 1000.0 / delta } else { 0.0 };
        self.stats.object_count = object_count;
        self.stats.processing_time = processing_time;
        self.stats.total_detections += detections;
        self.stats.frames += 1;
        self.last_frame_time = Some(current_time);
    }

    pub fn last_frame_time(&self) -> Option<f64> {
        self.last_frame_time
    }

    pub fn get(&self) -> TrackingStats {
        self.stats
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
