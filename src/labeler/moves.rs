//! Move proposers.

use super::types::{AnchorPoint, LabelBox};
use rand::Rng;

/// A perturbation applied to one label during a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Uniform jitter on both axes.
    Translate,
    /// Rotation of the label's reference point about its anchor.
    Rotate,
}

impl Move {
    /// Picks translate or rotate with equal probability.
    pub fn choose<R: Rng>(rng: &mut R) -> Self {
        if rng.random::<f64>() < 0.5 {
            Move::Translate
        } else {
            Move::Rotate
        }
    }

    pub fn apply<R: Rng>(
        self,
        label: &mut LabelBox,
        anchor: &AnchorPoint,
        max_move: f64,
        max_angle: f64,
        rng: &mut R,
    ) {
        match self {
            Move::Translate => translate(label, max_move, rng),
            Move::Rotate => rotate(label, anchor, max_angle, rng),
        }
    }
}

/// Shifts the label by independent uniform offsets in
/// `[-max_move / 2, max_move / 2)` on each axis.
pub fn translate<R: Rng>(label: &mut LabelBox, max_move: f64, rng: &mut R) {
    label.x += (rng.random::<f64>() - 0.5) * max_move;
    label.y += (rng.random::<f64>() - 0.5) * max_move;
}

/// Rotates the label about its anchor by a uniform angle in
/// `[-max_angle / 2, max_angle / 2)`. Leader length is preserved.
pub fn rotate<R: Rng>(label: &mut LabelBox, anchor: &AnchorPoint, max_angle: f64, rng: &mut R) {
    let angle = (rng.random::<f64>() - 0.5) * max_angle;
    rotate_by(label, anchor, angle);
}

fn rotate_by(label: &mut LabelBox, anchor: &AnchorPoint, angle: f64) {
    let (s, c) = angle.sin_cos();
    let x = label.x - anchor.x;
    let y = label.y - anchor.y;
    label.x = x * c - y * s + anchor.x;
    label.y = x * s + y * c + anchor.y;
}
