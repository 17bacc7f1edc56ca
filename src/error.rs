//! Error types for label placement.

use thiserror::Error;

/// Errors reported while validating a labeler before annealing starts.
///
/// The annealing loop itself never fails; every variant here is raised
/// by [`Labeler::run`](crate::labeler::Labeler::run) or by a strategy
/// constructor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LabelerError {
    #[error("label/anchor count mismatch: {labels} labels, {anchors} anchors")]
    LengthMismatch { labels: usize, anchors: usize },

    #[error("sweep count must be positive")]
    ZeroSweeps,

    #[error("invalid boundary: {0}")]
    InvalidBoundary(String),

    #[error("invalid label {index}: {reason}")]
    InvalidLabel { index: usize, reason: String },

    #[error("invalid anchor {index}: {reason}")]
    InvalidAnchor { index: usize, reason: String },

    #[error("label {index} at ({x}, {y}) starts outside the boundary")]
    LabelOutOfBounds { index: usize, x: f64, y: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, LabelerError>;
