//! Cooling schedules.
//!
//! # References
//!
//! - Linear: fixed-duration cooling, reaching zero after the last sweep
//! - Geometric: standard textbook approach
//! - LundyMees: Lundy & Mees (1986), with convergence proof

use crate::error::{LabelerError, Result};

/// Maps the temperature after one sweep to the temperature for the next.
///
/// Any `Fn(f64, f64, usize) -> f64` closure taking
/// `(current, initial, sweeps)` is a cooling schedule.
pub trait CoolingSchedule: Send + Sync {
    /// Next temperature given the current one, the run's initial
    /// temperature and the total number of sweeps in the run.
    fn next_temperature(&self, current: f64, initial: f64, sweeps: usize) -> f64;
}

impl<F> CoolingSchedule for F
where
    F: Fn(f64, f64, usize) -> f64 + Send + Sync,
{
    fn next_temperature(&self, current: f64, initial: f64, sweeps: usize) -> f64 {
        self(current, initial, sweeps)
    }
}

/// Linear cooling: `T_{k+1} = T_k - T_0 / sweeps`.
///
/// After `k` sweeps the temperature is `T_0 * (1 - k / sweeps)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinearCooling;

impl CoolingSchedule for LinearCooling {
    fn next_temperature(&self, current: f64, initial: f64, sweeps: usize) -> f64 {
        current - initial / sweeps as f64
    }
}

/// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
///
/// Ignores the sweep budget; the final temperature is `alpha^sweeps * T_0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricCooling {
    alpha: f64,
}

impl GeometricCooling {
    /// `alpha` must lie in `(0, 1)`. Typical values: 0.95-0.99.
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(LabelerError::InvalidConfig(format!(
                "geometric alpha must be in (0, 1), got {alpha}"
            )));
        }
        Ok(Self { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl CoolingSchedule for GeometricCooling {
    fn next_temperature(&self, current: f64, _initial: f64, _sweeps: usize) -> f64 {
        current * self.alpha
    }
}

/// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
///
/// Cools fast at high temperature and slowly near zero.
///
/// Reference: Lundy & Mees (1986)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LundyMeesCooling {
    beta: f64,
}

impl LundyMeesCooling {
    /// `beta` must be positive.
    pub fn new(beta: f64) -> Result<Self> {
        if !(beta > 0.0 && beta.is_finite()) {
            return Err(LabelerError::InvalidConfig(format!(
                "lundy-mees beta must be positive, got {beta}"
            )));
        }
        Ok(Self { beta })
    }

    /// Chooses `beta` so that `sweeps` steps cool from `initial` to `target`.
    pub fn reaching(initial: f64, target: f64, sweeps: usize) -> Result<Self> {
        if !(initial > target && target > 0.0) || sweeps == 0 {
            return Err(LabelerError::InvalidConfig(format!(
                "lundy-mees needs initial > target > 0 and sweeps > 0, got {initial}, {target}, {sweeps}"
            )));
        }
        Self::new((initial - target) / (sweeps as f64 * initial * target))
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl CoolingSchedule for LundyMeesCooling {
    fn next_temperature(&self, current: f64, _initial: f64, _sweeps: usize) -> f64 {
        current / (1.0 + self.beta * current)
    }
}
