use crate::trackers::centroid::observation::Detection;
use crate::utils::bbox::BoundingBox;
use rand::distributions::Uniform;
use rand::prelude::ThreadRng;
use rand::Rng;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Generates detections of a single object that drifts randomly across the frame.
///
/// Every call of `next` advances the clock by `frame_interval` milliseconds.
///
pub struct DetectionGen {
    class: String,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    timestamp: f64,
    frame_interval: f64,
    gen: ThreadRng,
    dist_pos: Uniform<f32>,
    dist_box: Uniform<f32>,
    dist_conf: Uniform<f32>,
}

impl DetectionGen {
    pub fn new(
        class: &str,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        pos_drift: f32,
        box_drift: f32,
    ) -> Self {
        Self {
            class: class.to_string(),
            x,
            y,
            width,
            height,
            timestamp: 0.0,
            frame_interval: 33.0,
            gen: rand::thread_rng(),
            dist_pos: Uniform::new(-pos_drift, pos_drift),
            dist_box: Uniform::new(-box_drift, box_drift),
            dist_conf: Uniform::new_inclusive(0.5, 1.0),
        }
    }

    /// The object moves only towards the bottom-right corner
    ///
    pub fn new_monotonous(
        class: &str,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        pos_drift: f32,
        box_drift: f32,
    ) -> Self {
        Self {
            dist_pos: Uniform::new(0.0, pos_drift),
            ..Self::new(class, x, y, width, height, pos_drift, box_drift)
        }
    }

    pub fn start_time(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn frame_interval(mut self, ms: f64) -> Self {
        assert!(ms >= 0.0, "Frame interval must not be negative");
        self.frame_interval = ms;
        self
    }

    /// Timestamp of the detection returned by the last call of `next`
    ///
    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }
}

impl Iterator for DetectionGen {
    type Item = Detection;

    fn next(&mut self) -> Option<Self::Item> {
        self.x += self.gen.sample(self.dist_pos);
        self.y += self.gen.sample(self.dist_pos);

        self.width += self.gen.sample(self.dist_box);
        self.height += self.gen.sample(self.dist_box);

        if self.width < 1.0 {
            self.width = 1.0;
        }
        if self.height < 1.0 {
            self.height = 1.0;
        }

        self.timestamp += self.frame_interval;
        let confidence = self.gen.sample(self.dist_conf);

        Detection::new(
            self.class.as_str(),
            confidence,
            BoundingBox::new(self.x, self.y, self.width, self.height),
            self.timestamp,
        )
        .ok()
    }
}

#[inline]
pub fn current_time_span() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

#[inline]
pub fn current_time_ms() -> f64 {
    current_time_span().as_secs_f64() * 1000.0
}
