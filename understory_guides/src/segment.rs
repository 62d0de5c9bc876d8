// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned segments: the candidates guides snap to.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use kurbo::{Line, Point};

use crate::tolerance::{cmp_approx, distance};

/// Orientation of a [`Segment`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Constant `y`, spanning `x1..=x2`.
    Horizontal,
    /// Constant `x`, spanning `y1..=y2`.
    Vertical,
}

/// Bit pattern of a coordinate with `-0.0` folded into `0.0`.
#[inline]
fn canonical_bits(v: f64) -> u64 {
    (v + 0.0).to_bits()
}

/// A horizontal segment at `y`, spanning `x1..=x2`.
#[derive(Copy, Clone, Debug)]
pub struct HorizontalSegment {
    x1: f64,
    x2: f64,
    y: f64,
}

impl HorizontalSegment {
    /// Create a horizontal segment. The span endpoints are stored in ascending order.
    pub fn new(x1: f64, x2: f64, y: f64) -> Self {
        debug_assert!(
            x1.is_finite() && x2.is_finite() && y.is_finite(),
            "segment coordinates must be finite; got x1={x1:?} x2={x2:?} y={y:?}"
        );
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        Self { x1, x2, y }
    }

    /// Left end of the span.
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// Right end of the span.
    pub fn x2(&self) -> f64 {
        self.x2
    }

    /// The fixed coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Length of the span.
    pub fn length(&self) -> f64 {
        distance(self.x1, self.x2)
    }
}

impl PartialEq for HorizontalSegment {
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.x1) == canonical_bits(other.x1)
            && canonical_bits(self.x2) == canonical_bits(other.x2)
            && canonical_bits(self.y) == canonical_bits(other.y)
    }
}

impl Eq for HorizontalSegment {}

impl Hash for HorizontalSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x1).hash(state);
        canonical_bits(self.x2).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

/// A vertical segment at `x`, spanning `y1..=y2`.
#[derive(Copy, Clone, Debug)]
pub struct VerticalSegment {
    y1: f64,
    y2: f64,
    x: f64,
}

impl VerticalSegment {
    /// Create a vertical segment. The span endpoints are stored in ascending order.
    pub fn new(y1: f64, y2: f64, x: f64) -> Self {
        debug_assert!(
            y1.is_finite() && y2.is_finite() && x.is_finite(),
            "segment coordinates must be finite; got y1={y1:?} y2={y2:?} x={x:?}"
        );
        let (y1, y2) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        Self { y1, y2, x }
    }

    /// Top end of the span.
    pub fn y1(&self) -> f64 {
        self.y1
    }

    /// Bottom end of the span.
    pub fn y2(&self) -> f64 {
        self.y2
    }

    /// The fixed coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Length of the span.
    pub fn length(&self) -> f64 {
        distance(self.y1, self.y2)
    }
}

impl PartialEq for VerticalSegment {
    fn eq(&self, other: &Self) -> bool {
        canonical_bits(self.y1) == canonical_bits(other.y1)
            && canonical_bits(self.y2) == canonical_bits(other.y2)
            && canonical_bits(self.x) == canonical_bits(other.x)
    }
}

impl Eq for VerticalSegment {}

impl Hash for VerticalSegment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.y1).hash(state);
        canonical_bits(self.y2).hash(state);
        canonical_bits(self.x).hash(state);
    }
}

/// An immutable axis-aligned segment.
///
/// Equality and hashing are exact over the three defining coordinates, so a
/// segment can key the visual map in [`GuidePool`](crate::render::GuidePool).
/// Ordering is tolerance-aware and is provided by [`Segment::cmp_coordinate`]
/// and [`Segment::cmp_length`] rather than `Ord`.
///
/// ```rust
/// use understory_guides::{Axis, Segment};
///
/// let top = Segment::horizontal(10.0, 110.0, 40.0);
/// assert_eq!(top.axis(), Axis::Horizontal);
/// assert_eq!(top.coordinate(), 40.0);
/// assert_eq!(top.length(), 100.0);
/// assert_eq!((top.y1(), top.y2()), (40.0, 40.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A horizontal line.
    Horizontal(HorizontalSegment),
    /// A vertical line.
    Vertical(VerticalSegment),
}

impl Segment {
    /// Shorthand for a [`HorizontalSegment`].
    pub fn horizontal(x1: f64, x2: f64, y: f64) -> Self {
        Self::Horizontal(HorizontalSegment::new(x1, x2, y))
    }

    /// Shorthand for a [`VerticalSegment`].
    pub fn vertical(y1: f64, y2: f64, x: f64) -> Self {
        Self::Vertical(VerticalSegment::new(y1, y2, x))
    }

    /// Orientation.
    pub fn axis(&self) -> Axis {
        match self {
            Self::Horizontal(_) => Axis::Horizontal,
            Self::Vertical(_) => Axis::Vertical,
        }
    }

    /// Minimum x. Equal to [`x2`](Self::x2) for vertical segments.
    pub fn x1(&self) -> f64 {
        match self {
            Self::Horizontal(h) => h.x1,
            Self::Vertical(v) => v.x,
        }
    }

    /// Maximum x. Equal to [`x1`](Self::x1) for vertical segments.
    pub fn x2(&self) -> f64 {
        match self {
            Self::Horizontal(h) => h.x2,
            Self::Vertical(v) => v.x,
        }
    }

    /// Minimum y. Equal to [`y2`](Self::y2) for horizontal segments.
    pub fn y1(&self) -> f64 {
        match self {
            Self::Horizontal(h) => h.y,
            Self::Vertical(v) => v.y1,
        }
    }

    /// Maximum y. Equal to [`y1`](Self::y1) for horizontal segments.
    pub fn y2(&self) -> f64 {
        match self {
            Self::Horizontal(h) => h.y,
            Self::Vertical(v) => v.y2,
        }
    }

    /// Span length.
    pub fn length(&self) -> f64 {
        match self {
            Self::Horizontal(h) => h.length(),
            Self::Vertical(v) => v.length(),
        }
    }

    /// The fixed coordinate: `y` for horizontal segments, `x` for vertical ones.
    pub fn coordinate(&self) -> f64 {
        match self {
            Self::Horizontal(h) => h.y,
            Self::Vertical(v) => v.x,
        }
    }

    /// First endpoint, `(x1, y1)`.
    pub fn start(&self) -> Point {
        Point::new(self.x1(), self.y1())
    }

    /// Second endpoint, `(x2, y2)`.
    pub fn end(&self) -> Point {
        Point::new(self.x2(), self.y2())
    }

    /// The segment as a [`kurbo::Line`].
    pub fn to_line(&self) -> Line {
        Line::new(self.start(), self.end())
    }

    /// Order by fixed coordinate, treating coordinates within tolerance as equal.
    pub fn cmp_coordinate(&self, other: &Self) -> Ordering {
        cmp_approx(self.coordinate(), other.coordinate())
    }

    /// Order by length ascending, treating lengths within tolerance as equal.
    pub fn cmp_length(&self, other: &Self) -> Ordering {
        cmp_approx(self.length(), other.length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerance::EPSILON;
    use hashbrown::HashSet;

    #[test]
    fn endpoints_are_normalized() {
        let s = Segment::horizontal(30.0, 10.0, 5.0);
        assert_eq!((s.x1(), s.x2()), (10.0, 30.0));
        assert_eq!(s.length(), 20.0);

        let s = Segment::vertical(8.0, -2.0, 1.0);
        assert_eq!((s.y1(), s.y2()), (-2.0, 8.0));
        assert_eq!((s.x1(), s.x2()), (1.0, 1.0));
        assert_eq!(s.length(), 10.0);
    }

    #[test]
    fn equality_is_per_axis_and_exact() {
        let h = Segment::horizontal(0.0, 10.0, 5.0);
        let v = Segment::vertical(0.0, 10.0, 5.0);
        assert_ne!(h, v);
        assert_eq!(h, Segment::horizontal(10.0, 0.0, 5.0));
        assert_ne!(h, Segment::horizontal(0.0, 10.0, 5.0 + EPSILON / 2.0));
        assert_eq!(
            Segment::horizontal(0.0, 10.0, -0.0),
            Segment::horizontal(0.0, 10.0, 0.0)
        );
    }

    #[test]
    fn hashing_agrees_with_equality() {
        let mut set = HashSet::new();
        set.insert(Segment::horizontal(0.0, 10.0, 0.0));
        set.insert(Segment::horizontal(10.0, 0.0, -0.0));
        set.insert(Segment::vertical(0.0, 10.0, 0.0));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn comparators_use_tolerance() {
        let a = Segment::horizontal(0.0, 10.0, 5.0);
        let b = Segment::horizontal(0.0, 30.0, 5.0 + EPSILON / 2.0);
        assert_eq!(a.cmp_coordinate(&b), Ordering::Equal);
        assert_eq!(a.cmp_length(&b), Ordering::Less);
        assert_eq!(b.cmp_length(&a), Ordering::Greater);
    }

    #[test]
    fn to_line_uses_normalized_endpoints() {
        let line = Segment::vertical(20.0, 0.0, 3.0).to_line();
        assert_eq!(line.p0, Point::new(3.0, 0.0));
        assert_eq!(line.p1, Point::new(3.0, 20.0));
    }
}
