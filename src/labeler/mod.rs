//! Simulated-annealing label placement.
//!
//! Labels are moved one at a time by random translations and rotations
//! about their anchors. Each move is kept or undone by the Metropolis
//! criterion against a placement energy that penalizes long leader lines,
//! crossing leaders, label-label overlap, label-anchor overlap and labels
//! placed anywhere but up and to the right of their anchor.
//!
//! # Key Types
//!
//! - [`Labeler`]: owns the layout and runs the annealing sweeps
//! - [`LabelerConfig`], [`EnergyWeights`]: step sizes, temperature, weights
//! - [`EnergyStrategy`], [`DefaultEnergy`]: pluggable placement energy
//! - [`CoolingSchedule`], [`LinearCooling`]: pluggable temperature schedule
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Christensen, Marks & Shieber (1995), "An Empirical Study of Algorithms
//!   for Point-Feature Label Placement"

mod config;
mod energy;
mod moves;
mod runner;
mod schedule;
mod types;

pub use config::{EnergyWeights, LabelerConfig};
pub use energy::{DefaultEnergy, EnergyStrategy, Orientation};
pub use moves::{rotate, translate, Move};
pub use runner::{Labeler, RunStats};
pub use schedule::{CoolingSchedule, GeometricCooling, LinearCooling, LundyMeesCooling};
pub use types::{AnchorPoint, Boundary, LabelBox, LABEL_BASELINE_OFFSET};
