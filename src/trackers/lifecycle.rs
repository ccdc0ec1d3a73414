use crate::track::TrackStatus;

pub trait Lifecycle {
    /// Milliseconds without updates after which the track stops taking part in association
    fn get_stale_threshold(&self) -> f64;
    /// Milliseconds without updates after which the track is removed
    fn get_expiry_threshold(&self) -> f64;
    /// Whether expired tracks are kept until the caller collects them
    fn get_keep_wasted(&self) -> bool;

    /// Status of a track that was lastly seen at `last_seen` when the frame of
    /// `current_time` is processed.
    ///
    /// The stale threshold is inclusive, the expiry threshold is exclusive. If the clock goes
    /// backwards the elapsed time is negative and the track stays active.
    ///
    fn status(&self, last_seen: f64, current_time: f64) -> TrackStatus {
        let idle = current_time - last_seen;
        if idle > self.get_expiry_threshold() {
            TrackStatus::Expired
        } else if idle >= self.get_stale_threshold() {
            TrackStatus::Stale
        } else {
            TrackStatus::Active
        }
    }
}
