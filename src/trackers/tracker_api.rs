use crate::track::store::TrackStore;
use crate::track::{Track, TrackId, TrackStatus};
use crate::trackers::lifecycle::Lifecycle;
use crate::utils::color::TrackColor;
use log::debug;

pub trait TrackerAPI {
    type Options: Lifecycle;

    fn get_opts(&self) -> &Self::Options;
    fn get_default_color(&self) -> TrackColor;
    fn get_main_store(&self) -> &TrackStore;
    fn get_main_store_mut(&mut self) -> &mut TrackStore;
    fn get_wasted_store_mut(&mut self) -> &mut Vec<Track>;

    /// Color of the track, or the default color if the track is not in the store.
    ///
    /// Renderers may keep identifiers longer than the tracks live, so the lookup never fails.
    ///
    fn color_of(&self, track_id: &TrackId) -> TrackColor {
        self.get_main_store()
            .get(track_id)
            .map(|t| t.get_color())
            .unwrap_or_else(|| self.get_default_color())
    }

    /// Number of tracks that take part in association
    ///
    fn active_track_count(&self) -> usize {
        self.get_main_store().active_count()
    }

    /// Number of tracks kept in the store, both active and stale
    ///
    fn track_count(&self) -> usize {
        self.get_main_store().len()
    }

    fn get_track(&self, track_id: &TrackId) -> Option<&Track> {
        self.get_main_store().get(track_id)
    }

    /// Applies the lifecycle to every track in the store: tracks idle for the stale
    /// threshold are deactivated, tracks idle beyond the expiry threshold are removed. Removed
    /// tracks go to the wasted store only when the options keep them.
    ///
    fn auto_waste(&mut self, current_time: f64) {
        let opts = self.get_opts();
        let stale = self.get_main_store().lookup(|t| {
            t.is_active() && opts.status(t.get_last_seen(), current_time) != TrackStatus::Active
        });
        let expired = self.get_main_store().lookup(|t| {
            opts.status(t.get_last_seen(), current_time) == TrackStatus::Expired
        });
        let keep_wasted = opts.get_keep_wasted();

        for track_id in stale {
            if let Some(track) = self.get_main_store_mut().get_mut(&track_id) {
                debug!("Track {} became stale at {}", track_id, current_time);
                track.deactivate();
            }
        }

        if !expired.is_empty() {
            debug!("Tracks expired at {}: {:?}", current_time, expired);
            let tracks = self.get_main_store_mut().fetch_tracks(&expired);
            if keep_wasted {
                self.get_wasted_store_mut().extend(tracks);
            }
        }
    }

    /// Receive the tracks that expired since the previous call, always empty unless the
    /// options keep wasted tracks
    ///
    fn wasted(&mut self) -> Vec<Track> {
        std::mem::take(self.get_wasted_store_mut())
    }

    /// Clears wasted tracks
    fn clear_wasted(&mut self) {
        self.get_wasted_store_mut().clear();
    }
}
