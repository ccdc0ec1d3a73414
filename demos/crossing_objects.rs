use centroid_tracker::prelude::*;

fn detection(class: &str, cx: f32, cy: f32, timestamp: f64) -> Detection {
    Detection::new(
        class,
        0.8,
        BoundingBox::with_center(cx, cy, 30.0, 30.0),
        timestamp,
    )
    .unwrap()
}

/// Two objects move towards each other along the same line. When their centers come close the
/// greedy association prefers the older track, so identities may swap after the crossing.
///
fn main() {
    env_logger::init();

    let mut tracker = CentroidTracker::new(CentroidTrackerOptions::default().max_distance(40.0));

    for frame in 0..30 {
        let current_time = frame as f64 * 33.0;
        let offset = frame as f32 * 15.0;
        let left = detection("ball", 50.0 + offset, 200.0, current_time);
        let right = detection("ball", 500.0 - offset, 200.0, current_time);

        let tracked = tracker.track(&[left, right], current_time);
        eprintln!(
            "Frame {:02}: {}",
            frame,
            tracked
                .iter()
                .map(|t| format!("{}@{:.0}", t.track_id(), t.center().x))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    eprintln!("Tracks created: {}", tracker.track_count());
    for t in tracker.tracks() {
        eprintln!(
            "{} active={} length={} color={}",
            t.get_track_id(),
            t.is_active(),
            t.get_track_length(),
            t.get_color()
        );
    }
}
