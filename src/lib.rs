pub mod track;
use thiserror::Error;

/// Greedy nearest-centroid tracker and the lifecycle machinery around it
pub mod trackers;

/// Bounding boxes and display colors
pub mod utils;

/// Synthetic detection generators used by demos and benchmarks
pub mod examples;

pub mod prelude;

#[cfg(feature = "python")]
mod py;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Errors {
    #[error("Detection is malformed: {0}")]
    InvalidDetection(String),
    #[error("Color `{0}` is not in the #rrggbb format.")]
    InvalidColor(String),
    #[error("Track id `{0}` is not in the track_<n> format.")]
    InvalidTrackId(String),
}

pub(crate) const EPS: f32 = 0.00001;

/// Approximate comparison for floating point based values
pub trait EstimateClose {
    fn almost_same(&self, other: &Self, eps: f32) -> bool;
}
