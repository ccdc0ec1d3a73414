use crate::trackers::centroid::observation::TrackedDetection;
use crate::utils::color::TrackColor;
use crate::Errors;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

pub mod store;

const TRACK_ID_PREFIX: &str = "track_";

/// Public handle of a track.
///
/// Internally the handle is the monotonically allocated integer used as the key of the
/// [TrackStore](store::TrackStore). Externally it is rendered as `track_<n>`.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrackId(pub(crate) u64);

impl TrackId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TRACK_ID_PREFIX}{}", self.0)
    }
}

impl FromStr for TrackId {
    type Err = Errors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(TRACK_ID_PREFIX)
            .and_then(|n| n.parse::<u64>().ok())
            .map(TrackId)
            .ok_or_else(|| Errors::InvalidTrackId(s.to_string()))
    }
}

impl From<TrackId> for u64 {
    fn from(id: TrackId) -> Self {
        id.0
    }
}

/// Lifecycle state of a track.
///
/// A new track is `Active` right away. When it is not updated for the stale threshold it
/// becomes `Stale` and is no longer considered for association. When it is not updated
/// for the expiry threshold it is `Expired` and removed from the store.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackStatus {
    Active,
    Stale,
    Expired,
}

/// Identity hypothesis for one physical object
///
#[derive(Debug, Clone)]
pub struct Track {
    track_id: TrackId,
    history: VecDeque<TrackedDetection>,
    last_seen: f64,
    created_at: f64,
    color: TrackColor,
    active: bool,
    track_length: usize,
    created_epoch: usize,
    last_updated_epoch: usize,
}

impl Track {
    pub(crate) fn new(
        detection: TrackedDetection,
        color: TrackColor,
        current_time: f64,
        epoch: usize,
    ) -> Self {
        let mut history = VecDeque::new();
        let track_id = detection.track_id();
        history.push_back(detection);
        Self {
            track_id,
            history,
            last_seen: current_time,
            created_at: current_time,
            color,
            active: true,
            track_length: 1,
            created_epoch: epoch,
            last_updated_epoch: epoch,
        }
    }

    /// Merges the detection into the track and evicts the history that went out of the
    /// `history_window` (milliseconds) or exceeds `history_length` entries.
    ///
    pub(crate) fn update(
        &mut self,
        detection: TrackedDetection,
        current_time: f64,
        epoch: usize,
        history_length: usize,
        history_window: f64,
    ) {
        debug_assert_eq!(detection.track_id(), self.track_id);
        self.history.push_back(detection);
        self.last_seen = current_time;
        self.active = true;
        self.track_length += 1;
        self.last_updated_epoch = epoch;

        // the detection just merged always survives, whatever its own timestamp is
        let last = self.history.len() - 1;
        let mut index = 0;
        self.history.retain(|d| {
            let keep = index == last || current_time - d.timestamp() < history_window;
            index += 1;
            keep
        });

        while self.history.len() > history_length {
            self.history.pop_front();
        }
    }

    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn get_track_id(&self) -> TrackId {
        self.track_id
    }

    /// The most recent detections of the track, oldest first
    ///
    pub fn get_history(&self) -> &VecDeque<TrackedDetection> {
        &self.history
    }

    pub fn last_detection(&self) -> Option<&TrackedDetection> {
        self.history.back()
    }

    /// Timestamp (ms) of the frame that last updated the track
    ///
    pub fn get_last_seen(&self) -> f64 {
        self.last_seen
    }

    /// Timestamp (ms) of the frame that created the track
    ///
    pub fn get_created_at(&self) -> f64 {
        self.created_at
    }

    pub fn get_color(&self) -> TrackColor {
        self.color
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn get_status(&self) -> TrackStatus {
        if self.active {
            TrackStatus::Active
        } else {
            TrackStatus::Stale
        }
    }

    /// Total number of detections merged into the track, not limited by the kept history
    ///
    pub fn get_track_length(&self) -> usize {
        self.track_length
    }

    pub fn get_created_epoch(&self) -> usize {
        self.created_epoch
    }

    pub fn get_last_updated_epoch(&self) -> usize {
        self.last_updated_epoch
    }
}
