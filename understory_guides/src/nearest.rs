// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazily sorted segment storage with nearest-key queries.
//!
//! Shared by the line indices (keyed by fixed coordinate) and the length
//! index (keyed by span length).

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::segment::Segment;
use crate::tolerance::{EPSILON, approx_eq, distance};

/// Segments returned by a nearest match, all at the same best distance.
///
/// Ordered by ascending key. Empty when nothing lies within the threshold.
pub type Matches = SmallVec<[Segment; 4]>;

/// Which scalar of a segment a [`NearestSegments`] sorts and matches on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SortKey {
    Coordinate,
    Length,
}

impl SortKey {
    #[inline]
    fn of(self, segment: &Segment) -> f64 {
        match self {
            Self::Coordinate => segment.coordinate(),
            Self::Length => segment.length(),
        }
    }
}

/// Append-only segment list, sorted on demand before each query.
#[derive(Clone, Debug)]
pub(crate) struct NearestSegments {
    segments: Vec<Segment>,
    sorted: bool,
    key: SortKey,
}

impl NearestSegments {
    pub(crate) const fn new(key: SortKey) -> Self {
        Self {
            segments: Vec::new(),
            sorted: true,
            key,
        }
    }

    pub(crate) fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
        self.sorted = false;
    }

    pub(crate) fn clear(&mut self) {
        self.segments.clear();
        self.sorted = true;
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    fn ensure_sorted(&mut self) {
        if self.sorted {
            return;
        }
        let key = self.key;
        // Stable, so segments with equal keys keep insertion order.
        self.segments.sort_by(|a, b| key.of(a).total_cmp(&key.of(b)));
        self.sorted = true;
    }

    /// Segments whose key is strictly closer than `threshold` to `target`,
    /// keeping only those at the smallest distance (ties within tolerance are
    /// all kept).
    pub(crate) fn nearest(&mut self, target: f64, threshold: f64) -> Matches {
        debug_assert!(target.is_finite(), "match target must be finite; got {target:?}");
        debug_assert!(
            threshold >= 0.0,
            "match threshold must be non-negative; got {threshold:?}"
        );
        self.ensure_sorted();

        let key = self.key;
        // Only keys inside this window can be closer than `threshold`.
        let lower = target - threshold - EPSILON;
        let upper = target + threshold + EPSILON;
        let first = self.segments.partition_point(|s| key.of(s) < lower);
        let last = self.segments.partition_point(|s| key.of(s) <= upper);
        let window = &self.segments[first..last.max(first)];

        let delta = |s: &Segment| distance(key.of(s), target);
        let Some(best) = window
            .iter()
            .map(delta)
            .filter(|d| *d < threshold)
            .reduce(f64::min)
        else {
            return Matches::new();
        };
        window
            .iter()
            .filter(|s| {
                let d = delta(*s);
                d < threshold && approx_eq(d, best)
            })
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(matches: &Matches) -> Vec<f64> {
        matches.iter().map(Segment::coordinate).collect()
    }

    #[test]
    fn empty_returns_no_matches() {
        let mut idx = NearestSegments::new(SortKey::Coordinate);
        assert!(idx.nearest(10.0, 6.0).is_empty());
    }

    #[test]
    fn closer_segment_replaces_result() {
        let mut idx = NearestSegments::new(SortKey::Coordinate);
        idx.push(Segment::horizontal(0.0, 1.0, 14.0));
        idx.push(Segment::horizontal(0.0, 1.0, 12.0));
        idx.push(Segment::horizontal(0.0, 1.0, 7.0));
        assert_eq!(coords(&idx.nearest(11.0, 6.0)), [12.0]);
    }

    #[test]
    fn ties_are_all_kept_in_key_order() {
        let mut idx = NearestSegments::new(SortKey::Coordinate);
        idx.push(Segment::horizontal(0.0, 1.0, 13.0));
        idx.push(Segment::horizontal(0.0, 1.0, 7.0));
        idx.push(Segment::horizontal(0.0, 5.0, 13.0));
        idx.push(Segment::horizontal(0.0, 1.0, 40.0));
        let m = idx.nearest(10.0, 6.0);
        assert_eq!(coords(&m), [7.0, 13.0, 13.0]);
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut idx = NearestSegments::new(SortKey::Coordinate);
        idx.push(Segment::vertical(0.0, 1.0, 16.0));
        idx.push(Segment::vertical(0.0, 1.0, 4.0));
        assert!(idx.nearest(10.0, 6.0).is_empty());

        idx.push(Segment::vertical(0.0, 1.0, 10.0 + (6.0 - EPSILON)));
        assert_eq!(coords(&idx.nearest(10.0, 6.0)), [10.0 + (6.0 - EPSILON)]);
    }

    #[test]
    fn ties_are_measured_against_the_final_best() {
        let mut idx = NearestSegments::new(SortKey::Coordinate);
        idx.push(Segment::horizontal(0.0, 1.0, 8.999_999_88));
        idx.push(Segment::horizontal(0.0, 1.0, 8.999_999_94));
        idx.push(Segment::horizontal(0.0, 1.0, 9.0));
        assert_eq!(coords(&idx.nearest(10.0, 6.0)), [8.999_999_94, 9.0]);
    }

    #[test]
    fn zero_threshold_matches_nothing() {
        let mut idx = NearestSegments::new(SortKey::Coordinate);
        idx.push(Segment::vertical(0.0, 1.0, 10.0));
        assert!(idx.nearest(10.0, 0.0).is_empty());
    }

    #[test]
    fn insert_after_query_resorts() {
        let mut idx = NearestSegments::new(SortKey::Coordinate);
        idx.push(Segment::horizontal(0.0, 1.0, 50.0));
        assert!(idx.nearest(10.0, 6.0).is_empty());
        idx.push(Segment::horizontal(0.0, 1.0, 9.0));
        assert_eq!(coords(&idx.nearest(10.0, 6.0)), [9.0]);
        assert_eq!(idx.len(), 2);
    }

    #[test]
    fn length_key_matches_on_span() {
        let mut idx = NearestSegments::new(SortKey::Length);
        idx.push(Segment::horizontal(0.0, 100.0, 500.0));
        idx.push(Segment::horizontal(0.0, 120.0, 0.0));
        let m = idx.nearest(98.0, 6.0);
        assert_eq!(m.len(), 1);
        assert_eq!(m[0].length(), 100.0);
    }
}
