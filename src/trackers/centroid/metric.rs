use crate::track::Track;
use crate::trackers::centroid::observation::Detection;
use crate::trackers::centroid::DEFAULT_MAX_DISTANCE;
use crate::utils::bbox::BoundingBox;

/// Euclidean distance between the detection center and the center of the last detection of
/// the track, gated by the maximum distance.
///
#[derive(Clone, Debug)]
pub struct CentroidMetric {
    max_distance: f32,
}

impl Default for CentroidMetric {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DISTANCE)
    }
}

impl CentroidMetric {
    pub fn new(max_distance: f32) -> Self {
        Self { max_distance }
    }

    /// Distance from the candidate to the track, `None` when the track has no detections or
    /// the distance is not strictly less than the gate.
    ///
    pub fn distance(&self, track: &Track, candidate: &Detection) -> Option<f32> {
        let last = track.last_detection()?;
        let dist = BoundingBox::center_distance(last.bbox(), candidate.bbox());
        if dist < self.max_distance {
            Some(dist)
        } else {
            None
        }
    }
}
