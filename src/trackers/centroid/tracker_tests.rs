use crate::track::{TrackId, TrackStatus};
use crate::trackers::centroid::observation::{Detection, TrackedDetection};
use crate::trackers::centroid::options::CentroidTrackerOptions;
use crate::trackers::centroid::simple_api::CentroidTracker;
use crate::trackers::tracker_api::TrackerAPI;
use crate::utils::bbox::BoundingBox;
use crate::utils::color::{DEFAULT_PALETTE, DEFAULT_TRACK_COLOR};
use std::collections::HashSet;

fn det(cx: f32, cy: f32, timestamp: f64) -> Detection {
    Detection::new(
        "person",
        0.8,
        BoundingBox::with_center(cx, cy, 30.0, 60.0),
        timestamp,
    )
    .unwrap()
}

fn ids(v: &[TrackedDetection]) -> Vec<TrackId> {
    v.iter().map(|d| d.track_id()).collect()
}

#[test]
fn scenario() {
    let mut t = CentroidTracker::new(CentroidTrackerOptions::default().keep_wasted(true));

    let v = t.track(&[det(100.0, 100.0, 0.0)], 0.0);
    assert_eq!(v[0].track_id().to_string(), "track_1");

    let v = t.track(&[det(110.0, 105.0, 50.0)], 50.0);
    assert_eq!(v[0].track_id().to_string(), "track_1");

    let v = t.track(&[det(400.0, 400.0, 100.0)], 100.0);
    assert_eq!(v[0].track_id().to_string(), "track_2");
    assert_eq!(t.active_track_count(), 2);

    let track_1 = TrackId::new(1);
    let color_1 = t.color_of(&track_1);
    assert_eq!(color_1, DEFAULT_PALETTE[0]);
    assert_eq!(t.color_of(&TrackId::new(2)), DEFAULT_PALETTE[1]);

    // only track_2 keeps receiving updates
    let mut now = 100.0;
    while now < 3150.0 {
        now += 50.0;
        let v = t.track(&[det(400.0, 400.0, now)], now);
        assert_eq!(v[0].track_id(), TrackId::new(2));
    }

    assert_eq!(t.active_track_count(), 1);
    assert!(t.get_track(&track_1).is_none());
    assert_eq!(t.color_of(&track_1), DEFAULT_TRACK_COLOR);
    let wasted = t.wasted();
    assert_eq!(wasted.len(), 1);
    assert_eq!(wasted[0].get_track_id(), track_1);
    assert_eq!(wasted[0].get_color(), color_1);
}

#[test]
fn output_keeps_order_and_length() {
    let mut t = CentroidTracker::default();
    let frame = [
        det(500.0, 500.0, 0.0),
        det(100.0, 100.0, 0.0),
        det(900.0, 100.0, 0.0),
    ];
    let v = t.track(&frame, 0.0);
    assert_eq!(v.len(), 3);
    for (input, output) in frame.iter().zip(v.iter()) {
        assert_eq!(output.detection(), input);
    }
    assert_eq!(ids(&v), vec![TrackId::new(1), TrackId::new(2), TrackId::new(3)]);

    // the same objects in a different order keep their identities
    let frame = [
        det(905.0, 102.0, 33.0),
        det(498.0, 497.0, 33.0),
        det(101.0, 104.0, 33.0),
    ];
    let v = t.track(&frame, 33.0);
    assert_eq!(ids(&v), vec![TrackId::new(3), TrackId::new(1), TrackId::new(2)]);
}

#[test]
fn identity_continuity() {
    let mut t = CentroidTracker::default();
    let mut first = None;
    for i in 0..100 {
        let now = i as f64 * 33.0;
        let v = t.track(&[det(10.0 + i as f32 * 20.0, 50.0, now)], now);
        let id = v[0].track_id();
        assert_eq!(*first.get_or_insert(id), id);
    }
    assert_eq!(t.track_count(), 1);
    let track = t.get_track(&first.unwrap()).unwrap();
    assert_eq!(track.get_track_length(), 100);
    assert_eq!(track.get_history().len(), 10);
}

#[test]
fn new_track_beyond_gate() {
    let mut t = CentroidTracker::default();
    t.track(&[det(0.0, 0.0, 0.0)], 0.0);
    // exactly on the gate is not a match
    let v = t.track(&[det(100.0, 0.0, 33.0)], 33.0);
    assert_eq!(v[0].track_id(), TrackId::new(2));
    let v = t.track(&[det(60.0, 80.0, 66.0)], 66.0);
    assert_eq!(v[0].track_id(), TrackId::new(2));
    let v = t.track(&[det(99.0, 0.0, 99.0)], 99.0);
    assert_eq!(v[0].track_id(), TrackId::new(2));
}

#[test]
fn nearest_track_wins() {
    let mut t = CentroidTracker::default();
    t.track(&[det(100.0, 100.0, 0.0), det(160.0, 100.0, 0.0)], 0.0);
    assert_eq!(t.track_count(), 2);

    let v = t.track(&[det(140.0, 100.0, 33.0)], 33.0);
    assert_eq!(v[0].track_id(), TrackId::new(2));
    let v = t.track(&[det(115.0, 100.0, 66.0)], 66.0);
    assert_eq!(v[0].track_id(), TrackId::new(1));
}

#[test]
fn equal_distances_resolve_to_older_track() {
    let mut t = CentroidTracker::default();
    t.track(&[det(100.0, 100.0, 0.0), det(200.0, 100.0, 0.0)], 0.0);
    let v = t.track(&[det(150.0, 100.0, 33.0)], 33.0);
    assert_eq!(v[0].track_id(), TrackId::new(1));
}

#[test]
fn no_intra_frame_merging() {
    let mut t = CentroidTracker::default();
    let v = t.track(&[det(100.0, 100.0, 0.0), det(105.0, 100.0, 0.0)], 0.0);
    assert_eq!(ids(&v), vec![TrackId::new(1), TrackId::new(2)]);
    assert_eq!(t.active_track_count(), 2);
}

#[test]
fn one_track_may_take_several_detections() {
    let mut t = CentroidTracker::default();
    t.track(&[det(100.0, 100.0, 0.0)], 0.0);
    let v = t.track(&[det(90.0, 100.0, 33.0), det(110.0, 100.0, 33.0)], 33.0);
    assert_eq!(ids(&v), vec![TrackId::new(1), TrackId::new(1)]);
    let track = t.get_track(&TrackId::new(1)).unwrap();
    assert_eq!(track.get_history().len(), 3);
    assert!((track.last_detection().unwrap().center().x - 110.0).abs() < 0.001);
}

#[test]
fn history_bounds() {
    let opts = CentroidTrackerOptions::default();
    let mut t = CentroidTracker::default();
    for i in 0..200 {
        // irregular frame intervals
        let now = (i % 3) as f64 * 20.0 + i as f64 * 90.0;
        t.track(&[det(300.0 + (i % 5) as f32, 300.0, now)], now);
        for track in t.tracks() {
            let history = track.get_history();
            assert!(history.len() <= opts.get_history_length());
            for d in history {
                assert!(track.get_last_seen() - d.timestamp() < opts.get_history_window());
            }
            assert!(history.iter().all(|d| d.track_id() == track.get_track_id()));
        }
    }
}

#[test]
fn stale_at_threshold() {
    let mut t = CentroidTracker::default();
    t.track(&[det(100.0, 100.0, 0.0)], 0.0);

    t.track(&[], 989.0);
    assert_eq!(t.active_track_count(), 1);

    t.track(&[], 990.0);
    assert_eq!(t.active_track_count(), 0);
    assert_eq!(t.track_count(), 1);
    let track = t.get_track(&TrackId::new(1)).unwrap();
    assert_eq!(track.get_status(), TrackStatus::Stale);

    // the same place, but the stale track is not reused
    let v = t.track(&[det(100.0, 100.0, 1000.0)], 1000.0);
    assert_eq!(v[0].track_id(), TrackId::new(2));
    assert_eq!(t.active_track_count(), 1);
    // the stale track still has its color until it expires
    assert_eq!(t.color_of(&TrackId::new(1)), DEFAULT_PALETTE[0]);
    assert_eq!(t.color_of(&TrackId::new(2)), DEFAULT_PALETTE[1]);
}

#[test]
fn track_is_matched_until_swept() {
    let mut t = CentroidTracker::default();
    t.track(&[det(100.0, 100.0, 0.0)], 0.0);
    // no calls in between, the track is still flagged active and is matched
    let v = t.track(&[det(100.0, 100.0, 2000.0)], 2000.0);
    assert_eq!(v[0].track_id(), TrackId::new(1));
    assert_eq!(t.active_track_count(), 1);
}

#[test]
fn expiry() {
    let mut t = CentroidTracker::default();
    t.track(&[det(100.0, 100.0, 0.0)], 0.0);
    t.track(&[], 3000.0);
    assert_eq!(t.track_count(), 1);
    t.track(&[], 3000.1);
    assert_eq!(t.track_count(), 0);
    assert_eq!(t.active_track_count(), 0);
    assert_eq!(t.color_of(&TrackId::new(1)), DEFAULT_TRACK_COLOR);

    // identifiers are never reissued
    let v = t.track(&[det(100.0, 100.0, 3100.0)], 3100.0);
    assert_eq!(v[0].track_id(), TrackId::new(2));
}

#[test]
fn colors_cycle_by_track_count() {
    let mut t = CentroidTracker::default();
    let frame = (0..10)
        .map(|i| det(i as f32 * 500.0, 0.0, 0.0))
        .collect::<Vec<_>>();
    let v = t.track(&frame, 0.0);
    for (i, d) in v.iter().enumerate() {
        let expected = DEFAULT_PALETTE[i % DEFAULT_PALETTE.len()];
        assert_eq!(t.color_of(&d.track_id()), expected);
    }

    // after a removal the color index follows the number of kept tracks, not the id
    let mut t = CentroidTracker::default();
    t.track(&[det(0.0, 0.0, 0.0)], 0.0);
    t.track(&[det(1000.0, 0.0, 2000.0)], 2000.0);
    t.track(&[], 3500.0);
    assert_eq!(t.track_count(), 1);
    let v = t.track(&[det(5000.0, 0.0, 3600.0)], 3600.0);
    assert_eq!(v[0].track_id(), TrackId::new(3));
    assert_eq!(t.color_of(&TrackId::new(3)), DEFAULT_PALETTE[1]);
}

#[test]
fn unknown_id_has_default_color() {
    let t = CentroidTracker::default();
    assert_eq!(t.color_of(&TrackId::new(77)), DEFAULT_TRACK_COLOR);

    let red = "#ff0000".parse().unwrap();
    let t = CentroidTracker::new(CentroidTrackerOptions::default().default_color(red));
    assert_eq!(t.color_of(&TrackId::new(1)), red);
}

#[test]
fn reset() {
    let mut t = CentroidTracker::default();
    t.reset();
    assert_eq!(t.active_track_count(), 0);
    assert_eq!(t.current_epoch(), 0);

    t.track(&[det(0.0, 0.0, 0.0), det(500.0, 0.0, 0.0)], 0.0);
    t.track(&[], 5000.0);
    t.track(&[det(0.0, 0.0, 5000.0)], 5000.0);
    assert_eq!(t.stats().total_detections, 3);

    t.reset();
    assert_eq!(t.active_track_count(), 0);
    assert_eq!(t.track_count(), 0);
    assert!(t.wasted().is_empty());
    assert_eq!(t.stats().total_detections, 0);
    assert_eq!(t.stats().frames, 0);

    let v = t.track(&[det(0.0, 0.0, 6000.0)], 6000.0);
    assert_eq!(v[0].track_id(), TrackId::new(1));
}

#[test]
fn determinism() {
    let frames = (0..60)
        .map(|i| {
            let now = i as f64 * 70.0;
            let dets = (0..((i % 4) + 1))
                .map(|k| det(k as f32 * 120.0 + (i % 9) as f32 * 7.0, 200.0, now))
                .collect::<Vec<_>>();
            (dets, now)
        })
        .collect::<Vec<_>>();

    let mut a = CentroidTracker::default();
    let mut b = CentroidTracker::default();
    for (dets, now) in &frames {
        assert_eq!(a.track(dets, *now), b.track(dets, *now));
    }

    let snapshot = |t: &CentroidTracker| {
        t.tracks()
            .map(|tr| {
                (
                    tr.get_track_id(),
                    tr.is_active(),
                    tr.get_color(),
                    tr.get_history().clone(),
                )
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(snapshot(&a), snapshot(&b));
}

#[test]
fn identifiers_are_unique() {
    let mut t = CentroidTracker::default();
    let mut seen = HashSet::new();
    for i in 0..50 {
        let now = i as f64 * 1500.0;
        // jump far away on every frame, so every detection creates a track
        let v = t.track(&[det((i % 2) as f32 * 1000.0, 0.0, now)], now);
        assert!(seen.insert(v[0].track_id()));
    }
}

#[test]
fn time_going_backwards_does_not_age_tracks() {
    let mut t = CentroidTracker::default();
    t.track(&[det(0.0, 0.0, 1000.0)], 1000.0);
    t.track(&[], 0.0);
    assert_eq!(t.active_track_count(), 1);
}

#[test]
fn stats() {
    let mut t = CentroidTracker::default();
    t.track(&[det(0.0, 0.0, 0.0), det(500.0, 0.0, 0.0)], 0.0);
    let s = t.stats();
    assert_eq!(s.fps, 0.0);
    assert_eq!(s.object_count, 2);
    assert_eq!(s.total_detections, 2);

    t.track(&[det(0.0, 0.0, 40.0)], 40.0);
    let s = t.stats();
    assert!((s.fps - 25.0).abs() < 1e-9);
    assert_eq!(s.total_detections, 3);
    assert_eq!(s.frames, 2);
}

#[test]
fn expired_tracks_are_dropped() {
    let mut t = CentroidTracker::default();
    for i in 0..1000 {
        let now = i as f64 * 3001.0;
        let v = t.track(&[det((i % 2) as f32 * 1000.0, 0.0, now)], now);
        assert_eq!(v[0].track_id(), TrackId::new(i + 1));
        assert_eq!(t.track_count(), 1);
    }
    assert!(t.get_track(&TrackId::new(1)).is_none());
    assert!(t.wasted().is_empty());
}

#[test]
fn kept_expired_tracks_are_collected_or_cleared() {
    let mut t = CentroidTracker::new(CentroidTrackerOptions::default().keep_wasted(true));
    t.track(&[det(0.0, 0.0, 0.0)], 0.0);
    t.track(&[], 3001.0);
    t.clear_wasted();
    assert!(t.wasted().is_empty());

    t.track(&[det(0.0, 0.0, 4000.0)], 4000.0);
    t.track(&[], 7001.0);
    let wasted = t.wasted();
    assert_eq!(wasted.len(), 1);
    assert_eq!(wasted[0].get_track_id(), TrackId::new(2));
    assert!(t.wasted().is_empty());
}

#[test]
fn non_finite_time_on_first_frame() {
    let mut t = CentroidTracker::default();
    assert!(t.track(&[], f64::NAN).is_empty());
    assert_eq!(t.current_epoch(), 0);

    let v = t.track(&[det(0.0, 0.0, 10.0), det(500.0, 0.0, 20.0)], f64::NAN);
    assert_eq!(v.len(), 2);
    let track = t.get_track(&TrackId::new(1)).unwrap();
    assert_eq!(track.get_last_seen(), 20.0);

    t.track(&[], 1e9);
    assert_eq!(t.track_count(), 0);
    assert_eq!(t.active_track_count(), 0);
}

#[test]
fn non_finite_time_reuses_previous_frame_time() {
    let mut t = CentroidTracker::default();
    t.track(&[det(0.0, 0.0, 0.0)], 0.0);
    t.track(&[det(100.0, 0.0, 0.0)], 500.0);

    let v = t.track(&[det(5.0, 0.0, 520.0)], f64::INFINITY);
    assert_eq!(v[0].track_id(), TrackId::new(1));
    assert_eq!(t.get_track(&TrackId::new(1)).unwrap().get_last_seen(), 500.0);

    t.track(&[], f64::NAN);
    assert_eq!(t.active_track_count(), 2);
    t.track(&[], 3501.0);
    assert_eq!(t.track_count(), 0);
}
