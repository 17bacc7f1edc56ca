//! Labeler configuration and energy weights.

use crate::error::{LabelerError, Result};

/// Weights of the terms in the default placement energy.
///
/// # Examples
///
/// ```
/// use u_labeler::labeler::EnergyWeights;
///
/// let weights = EnergyWeights::default()
///     .with_length(0.5)
///     .with_orientation(0.0);
/// assert_eq!(weights.label_label, 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyWeights {
    /// Cost per unit of leader-line length.
    pub length: f64,

    /// Flat penalty for each pair of crossing leader lines.
    pub intersection: f64,

    /// Cost per unit area of label-label overlap.
    pub label_label: f64,

    /// Cost per unit area of label-anchor overlap.
    pub label_anchor: f64,

    /// Cost per orientation bucket step away from top-right.
    pub orientation: f64,
}

impl Default for EnergyWeights {
    fn default() -> Self {
        Self {
            length: 0.2,
            intersection: 1.0,
            label_label: 30.0,
            label_anchor: 30.0,
            orientation: 3.0,
        }
    }
}

impl EnergyWeights {
    pub fn with_length(mut self, w: f64) -> Self {
        self.length = w;
        self
    }

    pub fn with_intersection(mut self, w: f64) -> Self {
        self.intersection = w;
        self
    }

    pub fn with_label_label(mut self, w: f64) -> Self {
        self.label_label = w;
        self
    }

    pub fn with_label_anchor(mut self, w: f64) -> Self {
        self.label_anchor = w;
        self
    }

    pub fn with_orientation(mut self, w: f64) -> Self {
        self.orientation = w;
        self
    }

    /// Every weight must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("length", self.length),
            ("intersection", self.intersection),
            ("label_label", self.label_label),
            ("label_anchor", self.label_anchor),
            ("orientation", self.orientation),
        ];
        for (name, w) in named {
            if !w.is_finite() || w < 0.0 {
                return Err(LabelerError::InvalidConfig(format!(
                    "{name} weight must be finite and non-negative, got {w}"
                )));
            }
        }
        Ok(())
    }
}

/// Configuration for a [`Labeler`](super::Labeler).
///
/// # Examples
///
/// ```
/// use u_labeler::labeler::LabelerConfig;
///
/// let config = LabelerConfig::default()
///     .with_max_move(10.0)
///     .with_max_angle(0.25)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelerConfig {
    /// Weights for the default energy.
    pub weights: EnergyWeights,

    /// Full width of the uniform translation step; each axis moves by at
    /// most half of this.
    pub max_move: f64,

    /// Full width of the uniform rotation step in radians.
    pub max_angle: f64,

    /// Temperature at the start of every run.
    pub initial_temperature: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for LabelerConfig {
    fn default() -> Self {
        Self {
            weights: EnergyWeights::default(),
            max_move: 5.0,
            max_angle: 0.5,
            initial_temperature: 1.0,
            seed: None,
        }
    }
}

impl LabelerConfig {
    pub fn with_weights(mut self, weights: EnergyWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_max_move(mut self, d: f64) -> Self {
        self.max_move = d;
        self
    }

    pub fn with_max_angle(mut self, a: f64) -> Self {
        self.max_angle = a;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if !self.max_move.is_finite() || self.max_move < 0.0 {
            return Err(LabelerError::InvalidConfig(format!(
                "max_move must be finite and non-negative, got {}",
                self.max_move
            )));
        }
        if !self.max_angle.is_finite() || self.max_angle < 0.0 {
            return Err(LabelerError::InvalidConfig(format!(
                "max_angle must be finite and non-negative, got {}",
                self.max_angle
            )));
        }
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(LabelerError::InvalidConfig(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        Ok(())
    }
}
