// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Length index: nearest-length lookups used for size snapping.

use crate::nearest::{Matches, NearestSegments, SortKey};
use crate::segment::Segment;

/// Segments of either orientation, matched by span length.
///
/// The same structure backs both width and height matching; a resizing
/// controller keeps one instance per enabled dimension.
///
/// ```rust
/// use understory_guides::{LengthIndex, Segment};
///
/// let mut widths = LengthIndex::new();
/// widths.add_segment(Segment::horizontal(0.0, 100.0, 0.0));
/// widths.add_segment(Segment::horizontal(200.0, 350.0, 0.0));
///
/// let hits = widths.match_length(98.0, 6.0);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].length(), 100.0);
/// ```
#[derive(Clone, Debug)]
pub struct LengthIndex {
    segments: NearestSegments,
}

impl Default for LengthIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl LengthIndex {
    /// Create an empty index.
    pub const fn new() -> Self {
        Self {
            segments: NearestSegments::new(SortKey::Length),
        }
    }

    /// Append a segment.
    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Remove every segment.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the index holds no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments in the order they are currently stored.
    pub fn segments(&self) -> &[Segment] {
        self.segments.as_slice()
    }

    /// Segments whose length is nearest to `length`, strictly within `threshold`.
    pub fn match_length(&mut self, length: f64, threshold: f64) -> Matches {
        self.segments.nearest(length, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_lengths_at_different_positions_tie() {
        let mut idx = LengthIndex::new();
        idx.add_segment(Segment::horizontal(0.0, 100.0, 0.0));
        idx.add_segment(Segment::horizontal(300.0, 400.0, 50.0));
        idx.add_segment(Segment::vertical(0.0, 103.0, 0.0));

        let hits = idx.match_length(99.0, 6.0);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|s| s.length() == 100.0));
    }

    #[test]
    fn nothing_within_threshold() {
        let mut idx = LengthIndex::new();
        idx.add_segment(Segment::horizontal(0.0, 100.0, 0.0));
        assert!(idx.match_length(94.0, 6.0).is_empty());
        assert_eq!(idx.match_length(94.5, 6.0).len(), 1);
    }
}
