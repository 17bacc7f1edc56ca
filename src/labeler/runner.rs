//! Annealing driver.
//!
//! # Algorithm
//!
//! 1. Validate labels, anchors, boundary and configuration
//! 2. Start at the initial temperature
//! 3. Each sweep performs one Metropolis trial per label:
//!    a. Pick a label uniformly at random and a move (translate or rotate)
//!    b. Apply the move, restoring any axis that leaves the boundary
//!    c. Accept with probability `min(1, exp((E_old - E_new) / T))`,
//!       otherwise restore the previous position
//! 4. Cool after every sweep; stop after the requested sweep count

use super::config::LabelerConfig;
use super::energy::{DefaultEnergy, EnergyStrategy};
use super::moves::Move;
use super::schedule::{CoolingSchedule, LinearCooling};
use super::types::{AnchorPoint, Boundary, LabelBox};
use crate::error::{LabelerError, Result};
use crate::random::create_rng;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace};

/// Statistics of one [`Labeler::run`] call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Sweeps performed.
    pub sweeps: usize,

    /// Metropolis trials performed (`sweeps * labels`).
    pub trials: usize,

    /// Trials whose move was kept.
    pub accepted: usize,

    /// Trials whose move was undone.
    pub rejected: usize,

    /// [`Labeler::total_energy`] before the first sweep.
    pub initial_energy: f64,

    /// [`Labeler::total_energy`] after the last sweep.
    pub final_energy: f64,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,
}

impl RunStats {
    /// Fraction of trials accepted; zero when no trial ran.
    pub fn acceptance_ratio(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.accepted as f64 / self.trials as f64
        }
    }
}

/// Simulated-annealing label placer.
///
/// Owns the labels it moves. Set up the anchors, labels and boundary,
/// call [`run`](Labeler::run), then read the final positions back with
/// [`labels`](Labeler::labels) or [`into_labels`](Labeler::into_labels).
///
/// # Examples
///
/// ```
/// use u_labeler::labeler::{AnchorPoint, Boundary, LabelBox, Labeler, LabelerConfig};
///
/// let mut labeler = Labeler::new(LabelerConfig::default().with_seed(42))
///     .with_boundary(Boundary::new(0.0, 0.0, 200.0, 200.0))
///     .with_anchors(vec![AnchorPoint::new(50.0, 100.0, 3.0), AnchorPoint::new(100.0, 100.0, 3.0)])
///     .with_labels(vec![LabelBox::new(52.0, 98.0, 40.0, 12.0), LabelBox::new(60.0, 98.0, 40.0, 12.0)]);
///
/// let stats = labeler.run(200).unwrap();
/// assert_eq!(stats.trials, 400);
/// for label in labeler.labels() {
///     assert!(labeler.boundary().contains(label.x, label.y));
/// }
/// ```
pub struct Labeler {
    labels: Vec<LabelBox>,
    anchors: Vec<AnchorPoint>,
    boundary: Boundary,
    config: LabelerConfig,
    energy: Box<dyn EnergyStrategy>,
    schedule: Box<dyn CoolingSchedule>,
    rng: StdRng,
    temperature: f64,
    accepted: usize,
    rejected: usize,
}

impl Labeler {
    /// Creates a labeler with no labels, the unit-square boundary, the
    /// default energy built from `config.weights` and linear cooling.
    pub fn new(config: LabelerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self {
            labels: Vec::new(),
            anchors: Vec::new(),
            boundary: Boundary::default(),
            energy: Box::new(DefaultEnergy::new(config.weights)),
            schedule: Box::new(LinearCooling),
            temperature: config.initial_temperature,
            config,
            rng,
            accepted: 0,
            rejected: 0,
        }
    }

    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_labels(mut self, labels: Vec<LabelBox>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_anchors(mut self, anchors: Vec<AnchorPoint>) -> Self {
        self.anchors = anchors;
        self
    }

    pub fn with_energy<E: EnergyStrategy + 'static>(mut self, energy: E) -> Self {
        self.set_energy(energy);
        self
    }

    pub fn with_schedule<S: CoolingSchedule + 'static>(mut self, schedule: S) -> Self {
        self.set_schedule(schedule);
        self
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn set_boundary(&mut self, boundary: Boundary) {
        self.boundary = boundary;
    }

    pub fn labels(&self) -> &[LabelBox] {
        &self.labels
    }

    pub fn labels_mut(&mut self) -> &mut [LabelBox] {
        &mut self.labels
    }

    pub fn set_labels(&mut self, labels: Vec<LabelBox>) {
        self.labels = labels;
    }

    /// Consumes the labeler, returning the labels in their final positions.
    pub fn into_labels(self) -> Vec<LabelBox> {
        self.labels
    }

    pub fn anchors(&self) -> &[AnchorPoint] {
        &self.anchors
    }

    pub fn set_anchors(&mut self, anchors: Vec<AnchorPoint>) {
        self.anchors = anchors;
    }

    pub fn config(&self) -> &LabelerConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// The active energy becomes a [`DefaultEnergy`] for the new weights,
    /// discarding any strategy installed with
    /// [`set_energy`](Labeler::set_energy). The schedule and rng are kept.
    pub fn set_config(&mut self, config: LabelerConfig) {
        self.energy = Box::new(DefaultEnergy::new(config.weights));
        self.config = config;
    }

    pub fn energy_strategy(&self) -> &dyn EnergyStrategy {
        self.energy.as_ref()
    }

    pub fn set_energy<E: EnergyStrategy + 'static>(&mut self, energy: E) {
        self.energy = Box::new(energy);
    }

    pub fn schedule(&self) -> &dyn CoolingSchedule {
        self.schedule.as_ref()
    }

    pub fn set_schedule<S: CoolingSchedule + 'static>(&mut self, schedule: S) {
        self.schedule = Box::new(schedule);
    }

    /// Restarts the random stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = create_rng(seed);
    }

    /// Current temperature; after a run, the temperature following the
    /// last cooling step.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Accepted trials over the lifetime of this labeler.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Rejected trials over the lifetime of this labeler.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Local energy of label `index` under the active strategy.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range for the labels or anchors.
    pub fn energy(&self, index: usize) -> f64 {
        self.energy.energy(index, &self.labels, &self.anchors)
    }

    /// Sum of the local energies of every label.
    ///
    /// Pairwise terms are counted once from each side; this is a progress
    /// measure, not the quantity the trials compare.
    pub fn total_energy(&self) -> f64 {
        (0..self.labels.len()).map(|i| self.energy(i)).sum()
    }

    /// Runs `sweeps` annealing sweeps, moving labels in place.
    ///
    /// Each call is a fresh run starting from the configured initial
    /// temperature. Inputs are validated first; once the sweeps start
    /// the run cannot fail.
    pub fn run(&mut self, sweeps: usize) -> Result<RunStats> {
        self.validate(sweeps)?;

        let n = self.labels.len();
        let initial = self.config.initial_temperature;
        let initial_energy = self.total_energy();
        let (accepted_before, rejected_before) = (self.accepted, self.rejected);

        debug!(
            labels = n,
            sweeps,
            initial_temperature = initial,
            initial_energy,
            "starting label annealing"
        );

        self.temperature = initial;
        for sweep in 0..sweeps {
            let accepted_at_start = self.accepted;
            for _ in 0..n {
                let mv = Move::choose(&mut self.rng);
                self.trial(self.temperature, mv);
            }
            trace!(
                sweep,
                temperature = self.temperature,
                accepted = self.accepted - accepted_at_start,
                "sweep complete"
            );
            self.temperature = self
                .schedule
                .next_temperature(self.temperature, initial, sweeps);
        }

        let stats = RunStats {
            sweeps,
            trials: sweeps * n,
            accepted: self.accepted - accepted_before,
            rejected: self.rejected - rejected_before,
            initial_energy,
            final_energy: self.total_energy(),
            final_temperature: self.temperature,
        };

        debug!(
            accepted = stats.accepted,
            rejected = stats.rejected,
            final_energy = stats.final_energy,
            final_temperature = stats.final_temperature,
            "label annealing finished"
        );

        Ok(stats)
    }

    /// One Metropolis trial at `temperature`. Returns whether the move
    /// was accepted.
    fn trial(&mut self, temperature: f64, mv: Move) -> bool {
        let i = self.rng.random_range(0..self.labels.len());
        let (old_x, old_y) = (self.labels[i].x, self.labels[i].y);

        let old_energy = self.energy(i);

        mv.apply(
            &mut self.labels[i],
            &self.anchors[i],
            self.config.max_move,
            self.config.max_angle,
            &mut self.rng,
        );

        // Hard walls, per axis.
        let label = &mut self.labels[i];
        if !self.boundary.contains_x(label.x) {
            label.x = old_x;
        }
        if !self.boundary.contains_y(label.y) {
            label.y = old_y;
        }

        let new_energy = self.energy(i);

        if accept(old_energy, new_energy, temperature, &mut self.rng) {
            self.accepted += 1;
            true
        } else {
            let label = &mut self.labels[i];
            label.x = old_x;
            label.y = old_y;
            self.rejected += 1;
            false
        }
    }

    fn validate(&self, sweeps: usize) -> Result<()> {
        if sweeps == 0 {
            return Err(LabelerError::ZeroSweeps);
        }
        self.config.validate()?;

        if self.labels.len() != self.anchors.len() {
            return Err(LabelerError::LengthMismatch {
                labels: self.labels.len(),
                anchors: self.anchors.len(),
            });
        }

        let b = &self.boundary;
        if ![b.left, b.top, b.right, b.bottom].iter().all(|v| v.is_finite()) {
            return Err(LabelerError::InvalidBoundary("edges must be finite".into()));
        }
        if b.left > b.right || b.top > b.bottom {
            return Err(LabelerError::InvalidBoundary(format!(
                "left <= right and top <= bottom required, got {b:?}"
            )));
        }

        for (index, anchor) in self.anchors.iter().enumerate() {
            if !anchor.x.is_finite() || !anchor.y.is_finite() {
                return Err(LabelerError::InvalidAnchor {
                    index,
                    reason: "position must be finite".into(),
                });
            }
            if !anchor.r.is_finite() || anchor.r < 0.0 {
                return Err(LabelerError::InvalidAnchor {
                    index,
                    reason: format!("radius must be finite and non-negative, got {}", anchor.r),
                });
            }
        }

        for (index, label) in self.labels.iter().enumerate() {
            if !label.x.is_finite() || !label.y.is_finite() {
                return Err(LabelerError::InvalidLabel {
                    index,
                    reason: "position must be finite".into(),
                });
            }
            if !label.width.is_finite()
                || !label.height.is_finite()
                || label.width < 0.0
                || label.height < 0.0
            {
                return Err(LabelerError::InvalidLabel {
                    index,
                    reason: format!(
                        "size must be finite and non-negative, got {}x{}",
                        label.width, label.height
                    ),
                });
            }
            if !b.contains(label.x, label.y) {
                return Err(LabelerError::LabelOutOfBounds {
                    index,
                    x: label.x,
                    y: label.y,
                });
            }
        }

        Ok(())
    }
}

/// Metropolis acceptance criterion.
///
/// Moves that do not raise the energy are always accepted. Uphill moves
/// are accepted with probability `exp(-delta / T)`, and never once the
/// temperature has reached zero.
fn accept<R: Rng>(old_energy: f64, new_energy: f64, temperature: f64, rng: &mut R) -> bool {
    let delta = new_energy - old_energy;
    if delta <= 0.0 {
        true
    } else if temperature > 0.0 {
        rng.random::<f64>() < (-delta / temperature).exp()
    } else {
        false
    }
}
