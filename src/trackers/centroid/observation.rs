use crate::track::TrackId;
use crate::utils::bbox::BoundingBox;
use crate::Errors::InvalidDetection;
use anyhow::Result;
use nalgebra::Point2;

/// Unidentified detection produced by a detector for a single frame
///
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    class: String,
    confidence: f32,
    bbox: BoundingBox,
    center: Point2<f32>,
    timestamp: f64,
}

impl Detection {
    /// Constructor. Rejects detections that cannot be associated safely.
    ///
    /// # Parameters
    /// * `class` - class label assigned by the detector
    /// * `confidence` - detector confidence, must be within `[0.0, 1.0]`
    /// * `bbox` - box in (x, y, width, height) form, finite, with non-negative dimensions
    /// * `timestamp` - capture time in milliseconds of a monotonic clock
    ///
    pub fn new(
        class: impl Into<String>,
        confidence: f32,
        bbox: BoundingBox,
        timestamp: f64,
    ) -> Result<Self> {
        bbox.validate()?;
        if !(0.0..=1.0).contains(&confidence) {
            return Err(InvalidDetection(format!(
                "confidence must be between 0.0 and 1.0, got {confidence}"
            ))
            .into());
        }
        if !timestamp.is_finite() {
            return Err(
                InvalidDetection(format!("timestamp must be finite, got {timestamp}")).into(),
            );
        }
        Ok(Self {
            class: class.into(),
            confidence,
            center: bbox.center(),
            bbox,
            timestamp,
        })
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn center(&self) -> Point2<f32> {
        self.center
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }
}

/// Detection annotated with the identifier of the track it belongs to
///
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedDetection {
    track_id: TrackId,
    detection: Detection,
}

impl TrackedDetection {
    pub fn new(track_id: TrackId, detection: Detection) -> Self {
        Self {
            track_id,
            detection,
        }
    }

    pub fn track_id(&self) -> TrackId {
        self.track_id
    }

    pub fn detection(&self) -> &Detection {
        &self.detection
    }

    pub fn class(&self) -> &str {
        self.detection.class()
    }

    pub fn confidence(&self) -> f32 {
        self.detection.confidence()
    }

    pub fn bbox(&self) -> &BoundingBox {
        self.detection.bbox()
    }

    pub fn center(&self) -> Point2<f32> {
        self.detection.center()
    }

    pub fn timestamp(&self) -> f64 {
        self.detection.timestamp()
    }

    /// Caption for the box, e.g. `person (87%)`
    ///
    pub fn label(&self) -> String {
        format!(
            "{} ({}%)",
            self.detection.class,
            (self.detection.confidence * 100.0).round() as u32
        )
    }
}

impl From<TrackedDetection> for Detection {
    fn from(d: TrackedDetection) -> Self {
        d.detection
    }
}
