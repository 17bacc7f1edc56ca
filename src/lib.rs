//! Automatic label placement by simulated annealing.
//!
//! Given label boxes, the anchor points they annotate and a bounding
//! region, [`labeler::Labeler`] moves the labels in place so they avoid
//! each other and the anchors while staying close to their anchors via
//! short, non-crossing leader lines.
//!
//! - [`geometry`]: rectangle overlap and segment intersection
//! - [`labeler`]: data model, energy, moves, cooling schedules and driver
//! - [`random`]: seedable generator construction
//!
//! The optimizer is stochastic and best-effort: it reduces overlap, it
//! does not guarantee an overlap-free layout. Runs are single-threaded
//! and fully reproducible for a fixed seed.
//!
//! # Example
//!
//! ```
//! use u_labeler::labeler::{AnchorPoint, Boundary, LabelBox, Labeler, LabelerConfig};
//!
//! let anchors = vec![AnchorPoint::new(100.0, 100.0, 4.0)];
//! let labels = vec![LabelBox::new(104.0, 96.0, 48.0, 14.0)];
//!
//! let mut labeler = Labeler::new(LabelerConfig::default().with_seed(7))
//!     .with_boundary(Boundary::new(0.0, 0.0, 400.0, 300.0))
//!     .with_anchors(anchors)
//!     .with_labels(labels);
//! labeler.run(500).unwrap();
//!
//! let placed = labeler.into_labels();
//! assert!(placed[0].x.is_finite());
//! ```

pub mod error;
pub mod geometry;
pub mod labeler;
pub mod random;

pub use error::{LabelerError, Result};
