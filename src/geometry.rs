//! Planar primitives used by the placement energy.
//!
//! Coordinates follow screen convention: `x` grows right, `y` grows down,
//! so a rectangle's `top` is numerically smaller than its `bottom`.

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An axis-aligned rectangle given by its four edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Area of the rectangle; zero when either extent is non-positive.
    pub fn area(&self) -> f64 {
        self.width().max(0.0) * self.height().max(0.0)
    }
}

/// Area of the intersection of two rectangles.
///
/// Returns `0.0` for disjoint or merely touching rectangles.
///
/// ```
/// use u_labeler::geometry::{overlap_area, Rect};
///
/// let a = Rect::new(0.0, 0.0, 4.0, 2.0);
/// let b = Rect::new(2.0, 1.0, 6.0, 5.0);
/// assert_eq!(overlap_area(&a, &b), 2.0);
/// ```
pub fn overlap_area(a: &Rect, b: &Rect) -> f64 {
    let x_overlap = (a.right.min(b.right) - a.left.max(b.left)).max(0.0);
    let y_overlap = (a.bottom.min(b.bottom) - a.top.max(b.top)).max(0.0);
    x_overlap * y_overlap
}

/// Tests whether segment `p1-p2` intersects segment `p3-p4`.
///
/// Solves the two parametric line equations for `mua` (along `p1-p2`) and
/// `mub` (along `p3-p4`); the segments intersect iff both lie in `[0, 1]`.
/// Parallel, collinear and degenerate segments have a zero denominator and
/// are reported as not intersecting.
///
/// Reference: Paul Bourke, "Intersection point of two line segments in 2
/// dimensions" (1989).
pub fn segments_intersect(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> bool {
    let denom = (p4.y - p3.y) * (p2.x - p1.x) - (p4.x - p3.x) * (p2.y - p1.y);
    if denom == 0.0 {
        return false;
    }

    let numer_a = (p4.x - p3.x) * (p1.y - p3.y) - (p4.y - p3.y) * (p1.x - p3.x);
    let numer_b = (p2.x - p1.x) * (p1.y - p3.y) - (p2.y - p1.y) * (p1.x - p3.x);
    let mua = numer_a / denom;
    let mub = numer_b / denom;

    (0.0..=1.0).contains(&mua) && (0.0..=1.0).contains(&mub)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_overlap_disjoint_is_zero() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(5.0, 5.0, 6.0, 6.0);
        assert_eq!(overlap_area(&a, &b), 0.0);
    }

    #[test]
    fn test_overlap_touching_edges_is_zero() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(1.0, 0.0, 2.0, 1.0);
        assert_eq!(overlap_area(&a, &b), 0.0);
    }

    #[test]
    fn test_overlap_identical_boxes() {
        let a = Rect::new(3.0, -2.0, 8.0, 1.0);
        assert!((overlap_area(&a, &a) - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_overlap_contained_box() {
        let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
        let inner = Rect::new(2.0, 3.0, 5.0, 7.0);
        assert!((overlap_area(&outer, &inner) - inner.area()).abs() < 1e-12);
    }

    #[test]
    fn test_overlap_partial() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);
        let b = Rect::new(3.0, 2.0, 7.0, 9.0);
        assert!((overlap_area(&a, &b) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_crossing_diagonals_intersect() {
        assert!(segments_intersect(
            &p(0.0, 0.0),
            &p(1.0, 1.0),
            &p(0.0, 1.0),
            &p(1.0, 0.0)
        ));
    }

    #[test]
    fn test_parallel_segments_do_not_intersect() {
        assert!(!segments_intersect(
            &p(0.0, 0.0),
            &p(1.0, 0.0),
            &p(0.0, 1.0),
            &p(1.0, 1.0)
        ));
    }

    #[test]
    fn test_collinear_segments_do_not_intersect() {
        assert!(!segments_intersect(
            &p(0.0, 0.0),
            &p(2.0, 0.0),
            &p(1.0, 0.0),
            &p(3.0, 0.0)
        ));
    }

    #[test]
    fn test_degenerate_segment_does_not_intersect() {
        assert!(!segments_intersect(
            &p(0.5, 0.5),
            &p(0.5, 0.5),
            &p(0.0, 0.0),
            &p(1.0, 1.0)
        ));
    }

    #[test]
    fn test_lines_cross_outside_segments() {
        // The infinite lines meet at (2, 2), past the end of both segments.
        assert!(!segments_intersect(
            &p(0.0, 0.0),
            &p(1.0, 1.0),
            &p(4.0, 0.0),
            &p(3.0, 1.0)
        ));
    }

    #[test]
    fn test_shared_endpoint_counts_as_intersection() {
        assert!(segments_intersect(
            &p(0.0, 0.0),
            &p(1.0, 1.0),
            &p(1.0, 1.0),
            &p(2.0, 0.0)
        ));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-100.0..100.0f64, -100.0..100.0f64, 0.0..50.0f64, 0.0..50.0f64)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric_and_bounded(a in rect_strategy(), b in rect_strategy()) {
            let ab = overlap_area(&a, &b);
            let ba = overlap_area(&b, &a);
            prop_assert!((ab - ba).abs() < 1e-9);
            prop_assert!(ab >= 0.0);
            prop_assert!(ab <= a.area().min(b.area()) + 1e-9);
        }

        #[test]
        fn prop_segment_test_symmetric(
            ax in -10.0..10.0f64, ay in -10.0..10.0f64,
            bx in -10.0..10.0f64, by in -10.0..10.0f64,
            cx in -10.0..10.0f64, cy in -10.0..10.0f64,
            dx in -10.0..10.0f64, dy in -10.0..10.0f64,
        ) {
            let (a, b, c, d) = (p(ax, ay), p(bx, by), p(cx, cy), p(dx, dy));
            prop_assert_eq!(
                segments_intersect(&a, &b, &c, &d),
                segments_intersect(&c, &d, &a, &b)
            );
        }
    }
}
