//! Data model: anchors, labels and the hard boundary.

use crate::geometry::{Point, Rect};

/// Vertical offset between a label's reference point and its box bottom.
///
/// Text is positioned by its baseline, so the box extends this far below
/// `y` and `height - LABEL_BASELINE_OFFSET` above it.
pub const LABEL_BASELINE_OFFSET: f64 = 2.0;

/// A fixed point being annotated, with a circular exclusion radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorPoint {
    pub x: f64,
    pub y: f64,
    /// Exclusion radius. Labels are penalized for covering the square of
    /// half-width `r` centered on the anchor.
    pub r: f64,
}

impl AnchorPoint {
    pub fn new(x: f64, y: f64, r: f64) -> Self {
        Self { x, y, r }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The square exclusion region around the anchor.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x - self.r,
            self.y - self.r,
            self.x + self.r,
            self.y + self.r,
        )
    }
}

/// A movable label rectangle.
///
/// `(x, y)` is the label's reference point: the left edge at the text
/// baseline. The annealer only ever moves this point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LabelBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LabelBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The occupied rectangle derived from the reference point.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x,
            self.y - self.height + LABEL_BASELINE_OFFSET,
            self.x + self.width,
            self.y + LABEL_BASELINE_OFFSET,
        )
    }
}

/// Hard limits on label reference points.
///
/// Defaults to the unit square `[0, 1] x [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundary {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for Boundary {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            right: 1.0,
            bottom: 1.0,
        }
    }
}

impl Boundary {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.left && x <= self.right
    }

    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom
    }

    /// Whether `(x, y)` lies inside the boundary, edges included.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.contains_x(x) && self.contains_y(y)
    }
}
