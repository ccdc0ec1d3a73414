/// Greedy nearest-centroid tracker implementation
///
pub mod centroid;

/// Trait that implements time-gated track lifecycle
pub mod lifecycle;

/// Frame statistics collected by trackers
pub mod stats;

/// Operations shared by trackers that keep tracks in a [TrackStore](crate::track::store::TrackStore)
pub mod tracker_api;
