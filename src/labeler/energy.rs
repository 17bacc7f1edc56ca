//! Placement energy.
//!
//! Energies are *local*: [`EnergyStrategy::energy`] scores one label
//! against everything else. A trial moves a single label, so only the
//! terms touching that label change between the before and after
//! evaluations.

use super::config::EnergyWeights;
use super::types::{AnchorPoint, LabelBox};
use crate::geometry::{overlap_area, segments_intersect};

/// Scores the placement of one label. Lower is better.
///
/// Implementations must be deterministic: the annealer evaluates the
/// same label twice per trial and compares the results.
///
/// Any `Fn(usize, &[LabelBox], &[AnchorPoint]) -> f64` closure is an
/// energy strategy.
pub trait EnergyStrategy: Send + Sync {
    /// Energy of `labels[index]` given the full label and anchor arrays.
    fn energy(&self, index: usize, labels: &[LabelBox], anchors: &[AnchorPoint]) -> f64;
}

impl<F> EnergyStrategy for F
where
    F: Fn(usize, &[LabelBox], &[AnchorPoint]) -> f64 + Send + Sync,
{
    fn energy(&self, index: usize, labels: &[LabelBox], anchors: &[AnchorPoint]) -> f64 {
        self(index, labels, anchors)
    }
}

/// Direction of a label relative to its anchor.
///
/// The discriminant is the orientation penalty multiplier; labels up and
/// to the right of their anchor are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    TopRight = 0,
    TopLeft = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Orientation {
    /// Classifies the leader from `anchor` to `label`.
    ///
    /// Points on an axis, and a label sitting exactly on its anchor, fall
    /// into [`Orientation::BottomRight`].
    pub fn of(label: &LabelBox, anchor: &AnchorPoint) -> Self {
        // Screen y grows downward; flip so positive dy means "above".
        let dx = label.x - anchor.x;
        let dy = anchor.y - label.y;
        if dx > 0.0 && dy > 0.0 {
            Orientation::TopRight
        } else if dx < 0.0 && dy > 0.0 {
            Orientation::TopLeft
        } else if dx < 0.0 && dy < 0.0 {
            Orientation::BottomLeft
        } else {
            Orientation::BottomRight
        }
    }

    pub fn penalty(self) -> f64 {
        self as u8 as f64
    }
}

/// The standard label placement energy.
///
/// For label `i` the energy sums:
///
/// 1. leader length times `weights.length`;
/// 2. the [`Orientation`] bucket times `weights.orientation`;
/// 3. for each other label `j`, `weights.intersection` if the two leader
///    lines cross, plus their box overlap area times `weights.label_label`;
/// 4. for every anchor (its own included), the overlap of the anchor's
///    exclusion square with the label box times `weights.label_anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DefaultEnergy {
    weights: EnergyWeights,
}

impl DefaultEnergy {
    pub fn new(weights: EnergyWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &EnergyWeights {
        &self.weights
    }
}

impl EnergyStrategy for DefaultEnergy {
    fn energy(&self, index: usize, labels: &[LabelBox], anchors: &[AnchorPoint]) -> f64 {
        let w = &self.weights;
        let label = &labels[index];
        let anchor = &anchors[index];

        let mut energy = label.position().distance(&anchor.position()) * w.length;
        energy += Orientation::of(label, anchor).penalty() * w.orientation;

        let label_rect = label.rect();
        let leader_start = anchor.position();
        let leader_end = label.position();

        for (j, (other, other_anchor)) in labels.iter().zip(anchors).enumerate() {
            if j != index {
                if segments_intersect(
                    &leader_start,
                    &leader_end,
                    &other_anchor.position(),
                    &other.position(),
                ) {
                    energy += w.intersection;
                }
                energy += overlap_area(&other.rect(), &label_rect) * w.label_label;
            }
            energy += overlap_area(&other_anchor.rect(), &label_rect) * w.label_anchor;
        }

        energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_orientation() -> EnergyWeights {
        EnergyWeights::default().with_orientation(0.0)
    }

    #[test]
    fn test_orientation_buckets() {
        let anchor = AnchorPoint::new(0.0, 0.0, 0.0);
        let at = |x, y| Orientation::of(&LabelBox::new(x, y, 1.0, 1.0), &anchor);
        assert_eq!(at(1.0, -1.0), Orientation::TopRight);
        assert_eq!(at(-1.0, -1.0), Orientation::TopLeft);
        assert_eq!(at(-1.0, 1.0), Orientation::BottomLeft);
        assert_eq!(at(1.0, 1.0), Orientation::BottomRight);
    }

    #[test]
    fn test_orientation_coincident_is_bottom_right() {
        let anchor = AnchorPoint::new(3.0, 3.0, 1.0);
        let label = LabelBox::new(3.0, 3.0, 1.0, 1.0);
        assert_eq!(Orientation::of(&label, &anchor), Orientation::BottomRight);
    }

    #[test]
    fn test_orientation_penalties() {
        assert_eq!(Orientation::TopRight.penalty(), 0.0);
        assert_eq!(Orientation::TopLeft.penalty(), 1.0);
        assert_eq!(Orientation::BottomLeft.penalty(), 2.0);
        assert_eq!(Orientation::BottomRight.penalty(), 3.0);
    }

    #[test]
    fn test_single_label_length_and_orientation() {
        // 3-4-5 triangle up and to the right of the anchor: only length counts.
        let labels = [LabelBox::new(3.0, -4.0, 1.0, 1.0)];
        let anchors = [AnchorPoint::new(0.0, 0.0, 0.0)];
        let e = DefaultEnergy::default().energy(0, &labels, &anchors);
        assert!((e - 5.0 * 0.2).abs() < 1e-12);

        // Mirror below the anchor: bottom-right bucket adds 3 * 3.0.
        let labels = [LabelBox::new(3.0, 4.0, 1.0, 1.0)];
        let e = DefaultEnergy::default().energy(0, &labels, &anchors);
        assert!((e - (1.0 + 9.0)).abs() < 1e-12);
    }

    #[test]
    fn test_coincident_label_energy_is_finite() {
        let labels = [LabelBox::new(0.5, 0.5, 0.1, 0.1)];
        let anchors = [AnchorPoint::new(0.5, 0.5, 0.0)];
        let e = DefaultEnergy::default().energy(0, &labels, &anchors);
        assert!(e.is_finite());
        assert!((e - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_label_label_overlap_penalty() {
        // Identical 4x4 boxes far from their anchors' exclusion zones.
        let labels = [
            LabelBox::new(10.0, 10.0, 4.0, 4.0),
            LabelBox::new(10.0, 10.0, 4.0, 4.0),
        ];
        let anchors = [
            AnchorPoint::new(10.0, 10.0, 0.0),
            AnchorPoint::new(10.0, 10.0, 0.0),
        ];
        let e = DefaultEnergy::new(no_orientation()).energy(0, &labels, &anchors);
        assert!((e - 16.0 * 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_crossing_leaders_penalty() {
        let labels = [
            LabelBox::new(10.0, 10.0, 0.0, 0.0),
            LabelBox::new(0.0, 10.0, 0.0, 0.0),
        ];
        let anchors = [
            AnchorPoint::new(0.0, 0.0, 0.0),
            AnchorPoint::new(10.0, 0.0, 0.0),
        ];
        let weights = no_orientation().with_length(0.0);
        let e = DefaultEnergy::new(weights).energy(0, &labels, &anchors);
        assert!((e - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_own_anchor_overlap_counts() {
        let labels = [LabelBox::new(0.0, 0.0, 4.0, 4.0)];
        let anchors = [AnchorPoint::new(1.0, -1.0, 1.0)];
        let weights = no_orientation().with_length(0.0);
        // Label rect (0,-2)-(4,2); anchor square (0,-2)-(2,0): area 4.
        let e = DefaultEnergy::new(weights).energy(0, &labels, &anchors);
        assert!((e - 4.0 * 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_energy_is_pure() {
        let labels = [
            LabelBox::new(0.2, 0.3, 0.1, 0.05),
            LabelBox::new(0.25, 0.32, 0.1, 0.05),
            LabelBox::new(0.7, 0.1, 0.2, 0.05),
        ];
        let anchors = [
            AnchorPoint::new(0.1, 0.4, 0.01),
            AnchorPoint::new(0.4, 0.2, 0.01),
            AnchorPoint::new(0.6, 0.2, 0.01),
        ];
        let energy = DefaultEnergy::default();
        for i in 0..labels.len() {
            assert_eq!(
                energy.energy(i, &labels, &anchors),
                energy.energy(i, &labels, &anchors)
            );
        }
    }

    #[test]
    fn test_closure_strategy() {
        let strategy = |i: usize, labels: &[LabelBox], _: &[AnchorPoint]| labels[i].x;
        let labels = [LabelBox::new(2.5, 0.0, 1.0, 1.0)];
        let anchors = [AnchorPoint::default()];
        assert_eq!(strategy.energy(0, &labels, &anchors), 2.5);
    }
}
