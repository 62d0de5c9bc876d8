// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis indices: nearest-coordinate lookups over horizontal or vertical lines.

use kurbo::Rect;

use crate::nearest::{Matches, NearestSegments, SortKey};
use crate::segment::{Axis, Segment};

/// Horizontal lines, matched against the `y` extents of a target rectangle.
///
/// Lines are appended in any order and sorted lazily by `y` on the next query.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_guides::{HorizontalLineIndex, Segment};
///
/// let mut idx = HorizontalLineIndex::new();
/// idx.add_line(Segment::horizontal(0.0, 100.0, 50.0));
///
/// let target = Rect::new(0.0, 47.0, 20.0, 67.0);
/// let hits = idx.match_north(target, 6.0);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].coordinate(), 50.0);
/// assert!(idx.match_south(target, 6.0).is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct HorizontalLineIndex {
    lines: NearestSegments,
}

impl Default for HorizontalLineIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl HorizontalLineIndex {
    /// Create an empty index.
    pub const fn new() -> Self {
        Self {
            lines: NearestSegments::new(SortKey::Coordinate),
        }
    }

    /// Append a horizontal line.
    pub fn add_line(&mut self, line: Segment) {
        debug_assert_eq!(
            line.axis(),
            Axis::Horizontal,
            "HorizontalLineIndex only accepts horizontal segments"
        );
        self.lines.push(line);
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the index holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in the order they are currently stored.
    pub fn lines(&self) -> &[Segment] {
        self.lines.as_slice()
    }

    /// Lines nearest to the top edge of `target`.
    pub fn match_north(&mut self, target: Rect, threshold: f64) -> Matches {
        self.match_y(target, target.min_y(), threshold)
    }

    /// Lines nearest to the bottom edge of `target`.
    pub fn match_south(&mut self, target: Rect, threshold: f64) -> Matches {
        self.match_y(target, target.max_y(), threshold)
    }

    /// Lines nearest to the vertical midpoint of `target`.
    pub fn match_center(&mut self, target: Rect, threshold: f64) -> Matches {
        self.match_y(target, target.center().y, threshold)
    }

    fn match_y(&mut self, target: Rect, y: f64, threshold: f64) -> Matches {
        debug_assert!(!target.is_zero_area(), "target bounds must not be empty");
        self.lines.nearest(y, threshold)
    }
}

/// Vertical lines, matched against the `x` extents of a target rectangle.
#[derive(Clone, Debug)]
pub struct VerticalLineIndex {
    lines: NearestSegments,
}

impl Default for VerticalLineIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl VerticalLineIndex {
    /// Create an empty index.
    pub const fn new() -> Self {
        Self {
            lines: NearestSegments::new(SortKey::Coordinate),
        }
    }

    /// Append a vertical line.
    pub fn add_line(&mut self, line: Segment) {
        debug_assert_eq!(
            line.axis(),
            Axis::Vertical,
            "VerticalLineIndex only accepts vertical segments"
        );
        self.lines.push(line);
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the index holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in the order they are currently stored.
    pub fn lines(&self) -> &[Segment] {
        self.lines.as_slice()
    }

    /// Lines nearest to the left edge of `target`.
    pub fn match_west(&mut self, target: Rect, threshold: f64) -> Matches {
        self.match_x(target, target.min_x(), threshold)
    }

    /// Lines nearest to the right edge of `target`.
    pub fn match_east(&mut self, target: Rect, threshold: f64) -> Matches {
        self.match_x(target, target.max_x(), threshold)
    }

    /// Lines nearest to the horizontal midpoint of `target`.
    pub fn match_center(&mut self, target: Rect, threshold: f64) -> Matches {
        self.match_x(target, target.center().x, threshold)
    }

    fn match_x(&mut self, target: Rect, x: f64, threshold: f64) -> Matches {
        debug_assert!(!target.is_zero_area(), "target bounds must not be empty");
        self.lines.nearest(x, threshold)
    }
}
