use std::time::Instant;

use itertools::Itertools;
use log::{debug, warn};

use crate::track::store::TrackStore;
use crate::track::Track;
use crate::trackers::centroid::metric::CentroidMetric;
use crate::trackers::centroid::observation::{Detection, TrackedDetection};
use crate::trackers::centroid::options::CentroidTrackerOptions;
use crate::trackers::centroid::voting::NearestVoting;
use crate::trackers::stats::{StatsCollector, TrackingStats};
use crate::trackers::tracker_api::TrackerAPI;
use crate::utils::color::TrackColor;

/// Easy to use centroid tracker implementation
///
/// Every call of [track](CentroidTracker::track) processes the detections of one frame. Each
/// detection is associated with the closest active track whose last detection is within the
/// gating distance, otherwise a new track is created for it. Afterwards tracks that were idle
/// for too long are turned stale or removed.
///
pub struct CentroidTracker {
    store: TrackStore,
    wasted_store: Vec<Track>,
    opts: CentroidTrackerOptions,
    metric: CentroidMetric,
    voting: NearestVoting,
    epoch: usize,
    stats: StatsCollector,
}

impl Default for CentroidTracker {
    fn default() -> Self {
        Self::new(CentroidTrackerOptions::default())
    }
}

impl CentroidTracker {
    /// Creates new tracker
    ///
    /// # Parameters
    /// * `opts` - gating distance, lifecycle thresholds, history limits and palette
    ///
    pub fn new(opts: CentroidTrackerOptions) -> Self {
        Self {
            store: TrackStore::new(),
            wasted_store: Vec::default(),
            metric: CentroidMetric::new(opts.get_max_distance()),
            voting: NearestVoting,
            opts,
            epoch: 0,
            stats: StatsCollector::default(),
        }
    }

    /// Receive track identifiers for the detections of a frame
    ///
    /// # Parameters
    /// * `detections` - detections received from a detector for the frame
    /// * `current_time` - frame time in milliseconds of the same clock the detections use
    ///
    /// The result keeps the order and the length of `detections`.
    ///
    /// A non-finite `current_time` is replaced with the time of the previous frame, or with the
    /// latest detection timestamp for the first frame, so tracks always carry a finite
    /// last-seen time.
    ///
    pub fn track(
        &mut self,
        detections: &[Detection],
        current_time: f64,
    ) -> Vec<TrackedDetection> {
        let started = Instant::now();
        let current_time = match self.frame_time(detections, current_time) {
            Some(t) => t,
            None => return Vec::default(),
        };
        if let Some(last) = self.stats.last_frame_time() {
            if current_time < last {
                warn!(
                    "Frame time went backwards: {} < {}, tracks are not aged for the frame",
                    current_time, last
                );
            }
        }

        self.epoch += 1;
        let epoch = self.epoch;
        let mut res = Vec::with_capacity(detections.len());

        for detection in detections {
            // tracks born in this frame are not candidates, so detections of one frame never merge
            let candidates = self
                .store
                .iter()
                .filter(|t| t.is_active() && t.get_created_epoch() != epoch)
                .flat_map(|t| {
                    self.metric
                        .distance(t, detection)
                        .map(|dist| (t.get_track_id(), dist))
                });

            let tracked = match self.voting.winner(candidates) {
                Some((track_id, dist)) => {
                    debug!(
                        "Detection {:?} is merged into {} at distance {}",
                        detection.center(),
                        track_id,
                        dist
                    );
                    let tracked = TrackedDetection::new(track_id, detection.clone());
                    if let Some(track) = self.store.get_mut(&track_id) {
                        track.update(
                            tracked.clone(),
                            current_time,
                            epoch,
                            self.opts.get_history_length(),
                            self.opts.get_history_window(),
                        );
                    }
                    tracked
                }
                None => {
                    let color = self.opts.color_for(self.store.len());
                    let track_id = self.store.gen_track_id();
                    debug!(
                        "Detection {:?} starts {} with color {}",
                        detection.center(),
                        track_id,
                        color
                    );
                    let tracked = TrackedDetection::new(track_id, detection.clone());
                    self.store
                        .add_track(Track::new(tracked.clone(), color, current_time, epoch));
                    tracked
                }
            };
            res.push(tracked);
        }

        self.auto_waste(current_time);
        self.stats.record(
            current_time,
            res.len(),
            self.store.active_count(),
            started.elapsed(),
        );
        res
    }

    fn frame_time(&self, detections: &[Detection], current_time: f64) -> Option<f64> {
        if current_time.is_finite() {
            return Some(current_time);
        }
        let substitute = self.stats.last_frame_time().or_else(|| {
            detections
                .iter()
                .map(|d| d.timestamp())
                .reduce(f64::max)
        });
        warn!(
            "Frame time {} is not finite, {:?} is used instead",
            current_time, substitute
        );
        substitute
    }

    /// Drops all the tracks, the expired ones included, and restarts identifier allocation.
    /// Identifiers issued after the reset may repeat the ones issued before.
    ///
    pub fn reset(&mut self) {
        debug!(
            "Tracker reset, {} tracks dropped, last issued id: {:?}",
            self.store.len() + self.wasted_store.len(),
            self.store.last_track_id()
        );
        self.store.clear();
        self.wasted_store.clear();
        self.epoch = 0;
        self.stats.reset();
    }

    /// Live tracks, both active and stale, in the order of creation
    ///
    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.store.iter()
    }

    /// Live tracks that were not updated during the last call of `track`
    ///
    pub fn idle_tracks(&self) -> Vec<&Track> {
        self.store
            .iter()
            .filter(|t| t.get_last_updated_epoch() != self.epoch)
            .collect_vec()
    }

    /// Number of calls of `track` since the tracker was created or reset
    ///
    pub fn current_epoch(&self) -> usize {
        self.epoch
    }

    pub fn stats(&self) -> TrackingStats {
        self.stats.get()
    }

    pub fn get_options(&self) -> &CentroidTrackerOptions {
        &self.opts
    }
}

impl TrackerAPI for CentroidTracker {
    type Options = CentroidTrackerOptions;

    fn get_opts(&self) -> &CentroidTrackerOptions {
        &self.opts
    }

    fn get_default_color(&self) -> TrackColor {
        self.opts.get_default_color()
    }

    fn get_main_store(&self) -> &TrackStore {
        &self.store
    }

    fn get_main_store_mut(&mut self) -> &mut TrackStore {
        &mut self.store
    }

    fn get_wasted_store_mut(&mut self) -> &mut Vec<Track> {
        &mut self.wasted_store
    }
}
