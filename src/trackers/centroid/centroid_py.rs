use crate::track::TrackId;
use crate::trackers::centroid::observation::{Detection, TrackedDetection};
use crate::trackers::centroid::options::CentroidTrackerOptions;
use crate::trackers::centroid::simple_api::CentroidTracker;
use crate::trackers::centroid::{
    DEFAULT_EXPIRY_THRESHOLD_MS, DEFAULT_HISTORY_LENGTH, DEFAULT_HISTORY_WINDOW_MS,
    DEFAULT_MAX_DISTANCE, DEFAULT_STALE_THRESHOLD_MS,
};
use crate::trackers::tracker_api::TrackerAPI;
use crate::utils::bbox::BoundingBox;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[pyclass]
#[pyo3(name = "Detection")]
#[derive(Debug, Clone)]
#[repr(transparent)]
pub struct PyDetection(pub(crate) Detection);

#[pymethods]
impl PyDetection {
    #[new]
    #[pyo3(signature = (class_name, confidence, bbox, timestamp))]
    fn new(
        class_name: String,
        confidence: f32,
        bbox: (f32, f32, f32, f32),
        timestamp: f64,
    ) -> PyResult<Self> {
        let (x, y, width, height) = bbox;
        Detection::new(
            class_name,
            confidence,
            BoundingBox::new(x, y, width, height),
            timestamp,
        )
        .map(PyDetection)
        .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.0)
    }

    fn __str__(&self) -> String {
        format!("{:#?}", self.0)
    }
}

#[pyclass]
#[pyo3(name = "TrackedDetection")]
#[derive(Debug, Clone)]
#[repr(transparent)]
pub struct PyTrackedDetection(pub(crate) TrackedDetection);

#[pymethods]
impl PyTrackedDetection {
    fn __repr__(&self) -> String {
        format!("{:?}", self.0)
    }

    fn __str__(&self) -> String {
        format!("{:#?}", self.0)
    }

    #[getter]
    fn track_id(&self) -> String {
        self.0.track_id().to_string()
    }

    #[getter]
    fn class_name(&self) -> String {
        self.0.class().to_string()
    }

    #[getter]
    fn confidence(&self) -> f32 {
        self.0.confidence()
    }

    #[getter]
    fn bbox(&self) -> (f32, f32, f32, f32) {
        let b = self.0.bbox();
        (b.x(), b.y(), b.width(), b.height())
    }

    #[getter]
    fn center(&self) -> (f32, f32) {
        let c = self.0.center();
        (c.x, c.y)
    }

    #[getter]
    fn timestamp(&self) -> f64 {
        self.0.timestamp()
    }

    #[getter]
    fn label(&self) -> String {
        self.0.label()
    }
}

#[pyclass]
#[pyo3(name = "CentroidTracker")]
pub struct PyCentroidTracker(pub(crate) CentroidTracker);

#[pymethods]
impl PyCentroidTracker {
    #[new]
    #[pyo3(signature = (
        max_distance = DEFAULT_MAX_DISTANCE,
        stale_threshold = DEFAULT_STALE_THRESHOLD_MS,
        expiry_threshold = DEFAULT_EXPIRY_THRESHOLD_MS,
        history_length = DEFAULT_HISTORY_LENGTH,
        history_window = DEFAULT_HISTORY_WINDOW_MS
    ))]
    fn new(
        max_distance: f32,
        stale_threshold: f64,
        expiry_threshold: f64,
        history_length: usize,
        history_window: f64,
    ) -> PyResult<Self> {
        if stale_threshold < 0.0 || expiry_threshold < stale_threshold {
            return Err(PyValueError::new_err(
                "Thresholds must satisfy 0 <= stale_threshold <= expiry_threshold",
            ));
        }
        if max_distance <= 0.0 || history_length == 0 || history_window <= 0.0 {
            return Err(PyValueError::new_err(
                "max_distance, history_length and history_window must be positive",
            ));
        }
        // the builder checks every threshold against the current value of the other one
        let opts = CentroidTrackerOptions::default()
            .stale_threshold(0.0)
            .expiry_threshold(expiry_threshold)
            .stale_threshold(stale_threshold)
            .max_distance(max_distance)
            .history_length(history_length)
            .history_window(history_window);
        Ok(Self(CentroidTracker::new(opts)))
    }

    /// Receive track identifiers for the detections of a frame
    ///
    #[pyo3(signature = (detections, current_time))]
    fn track(
        &mut self,
        py: Python<'_>,
        detections: Vec<PyDetection>,
        current_time: f64,
    ) -> Vec<PyTrackedDetection> {
        let detections = detections.into_iter().map(|d| d.0).collect::<Vec<_>>();
        py.allow_threads(|| self.0.track(&detections, current_time))
            .into_iter()
            .map(PyTrackedDetection)
            .collect()
    }

    /// Color of the track in the `#rrggbb` form, the default color for unknown identifiers
    ///
    fn color_of(&self, track_id: &str) -> String {
        match track_id.parse::<TrackId>() {
            Ok(id) => self.0.color_of(&id).hex(),
            Err(_) => self.0.get_default_color().hex(),
        }
    }

    fn active_track_count(&self) -> usize {
        self.0.active_track_count()
    }

    fn track_count(&self) -> usize {
        self.0.track_count()
    }

    fn reset(&mut self) {
        self.0.reset()
    }
}
