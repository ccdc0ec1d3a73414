use crate::track::TrackId;
use log::debug;

/// Selects the closest track for a detection.
///
/// Candidates are expected in the store order. When distances are equal the candidate seen
/// first wins, which makes the selection deterministic.
///
#[derive(Default, Debug, Clone, Copy)]
pub struct NearestVoting;

impl NearestVoting {
    pub fn winner<T>(&self, distances: T) -> Option<(TrackId, f32)>
    where
        T: IntoIterator<Item = (TrackId, f32)>,
    {
        let mut best: Option<(TrackId, f32)> = None;
        for (track_id, dist) in distances {
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((track_id, dist)),
            }
        }
        debug!("Nearest track: {:?}", &best);
        best
    }
}
