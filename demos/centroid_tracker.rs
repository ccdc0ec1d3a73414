use centroid_tracker::examples::{current_time_ms, DetectionGen};
use centroid_tracker::prelude::*;

fn main() {
    env_logger::init();

    let mut tracker = CentroidTracker::new(CentroidTrackerOptions::default().keep_wasted(true));

    let start = current_time_ms();
    let pos_drift = 3.0;
    let box_drift = 0.5;
    let mut person =
        DetectionGen::new_monotonous("person", 100.0, 100.0, 40.0, 90.0, pos_drift, box_drift)
            .start_time(start);
    let mut car =
        DetectionGen::new_monotonous("car", 600.0, 300.0, 120.0, 60.0, pos_drift, box_drift)
            .start_time(start);

    for _ in 0..20 {
        let p = person.next().unwrap();
        let c = car.next().unwrap();
        let current_time = p.timestamp();
        let tracked = tracker.track(&[p, c], current_time);
        for t in &tracked {
            eprintln!(
                "{} {} {}",
                t.track_id(),
                t.label(),
                tracker.color_of(&t.track_id())
            );
        }
    }
    eprintln!("Stats: {:#?}", tracker.stats());

    // the objects disappear; the tracks go stale and then expire
    let last = person.timestamp();
    tracker.track(&[], last + 1000.0);
    eprintln!("Active tracks after 1s: {}", tracker.active_track_count());
    tracker.track(&[], last + 3100.0);

    for t in tracker.wasted() {
        eprintln!("Track id: {}, color: {}", t.get_track_id(), t.get_color());
        eprintln!(
            "Centers: {:?}",
            t.get_history()
                .iter()
                .map(|d| d.center())
                .collect::<Vec<_>>()
        );
    }
}
