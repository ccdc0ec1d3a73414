use crate::track;
use crate::trackers;
use crate::utils;

pub use track::store::TrackStore;
pub use track::{Track, TrackId, TrackStatus};
pub use trackers::centroid::observation::{Detection, TrackedDetection};
pub use trackers::centroid::options::CentroidTrackerOptions;
pub use trackers::centroid::simple_api::CentroidTracker;
pub use trackers::lifecycle::Lifecycle;
pub use trackers::stats::TrackingStats;
pub use trackers::tracker_api::TrackerAPI;
pub use utils::bbox::BoundingBox;
pub use utils::color::{TrackColor, DEFAULT_PALETTE, DEFAULT_TRACK_COLOR};
