use crate::track::{Track, TrackId};
use std::collections::BTreeMap;

/// Table that owns the live tracks.
///
/// Tracks are kept in a map ordered by their integer handle, so every scan over the store
/// visits older tracks first. The store also owns the identifier allocator: identifiers are
/// never handed out twice until the store is cleared.
///
#[derive(Debug, Default, Clone)]
pub struct TrackStore {
    tracks: BTreeMap<u64, Track>,
    last_track_id: u64,
}

impl TrackStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next track identifier
    ///
    pub fn gen_track_id(&mut self) -> TrackId {
        self.last_track_id += 1;
        TrackId(self.last_track_id)
    }

    /// The identifier that was allocated last, `None` if nothing was allocated yet
    ///
    pub fn last_track_id(&self) -> Option<TrackId> {
        if self.last_track_id == 0 {
            None
        } else {
            Some(TrackId(self.last_track_id))
        }
    }

    pub(crate) fn add_track(&mut self, track: Track) {
        let id = track.get_track_id().as_u64();
        debug_assert!(
            id <= self.last_track_id,
            "Track id must be allocated by the store"
        );
        let previous = self.tracks.insert(id, track);
        debug_assert!(previous.is_none(), "Track ids must never be reused");
    }

    pub fn get(&self, track_id: &TrackId) -> Option<&Track> {
        self.tracks.get(&track_id.0)
    }

    pub(crate) fn get_mut(&mut self, track_id: &TrackId) -> Option<&mut Track> {
        self.tracks.get_mut(&track_id.0)
    }

    /// Tracks in the ascending order of their identifiers
    ///
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.values()
    }

    /// Finds identifiers of the tracks that satisfy the predicate
    ///
    pub fn lookup<F>(&self, predicate: F) -> Vec<TrackId>
    where
        F: Fn(&Track) -> bool,
    {
        self.tracks
            .values()
            .filter(|t| predicate(t))
            .map(|t| t.get_track_id())
            .collect()
    }

    /// Removes the tracks from the store and returns them to the caller
    ///
    pub(crate) fn fetch_tracks(&mut self, tracks: &[TrackId]) -> Vec<Track> {
        tracks
            .iter()
            .flat_map(|track_id| self.tracks.remove(&track_id.0))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.tracks.values().filter(|t| t.is_active()).count()
    }

    /// Drops all the tracks and restarts identifier allocation
    ///
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.last_track_id = 0;
    }
}
