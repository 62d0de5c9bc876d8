// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment-to-visual bookkeeping with a reuse pool.

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use super::{GuideGroup, GuideKind, GuideVisual, ReconcileStats, VisualId};
use crate::segment::Segment;

/// Maps displayed segments to their visuals and keeps hidden visuals for reuse.
///
/// Every segment in the live map owns exactly one visible visual. Every other
/// visual in the group is hidden and sits in the pool. A visual is never in
/// both places.
#[derive(Clone, Debug, Default)]
pub struct GuidePool {
    live: HashMap<Segment, VisualId>,
    free: Vec<VisualId>,
}

impl GuidePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Visual currently displaying `segment`, if any.
    pub fn visual_for(&self, segment: &Segment) -> Option<VisualId> {
        self.live.get(segment).copied()
    }

    /// Number of displayed segments.
    pub fn live_len(&self) -> usize {
        self.live.len()
    }

    /// Number of hidden visuals waiting for reuse.
    pub fn pooled_len(&self) -> usize {
        self.free.len()
    }

    /// Bring `group` in line with `targets`.
    ///
    /// Segments no longer present are retired first, so incoming segments can
    /// pick up their visuals. `place` is called once for every incoming
    /// segment to style and position its visual; it is not called for
    /// segments that were already displayed.
    pub fn reconcile<F>(
        &mut self,
        group: &mut GuideGroup,
        targets: &[Segment],
        kind_of: fn(&Segment) -> GuideKind,
        mut place: F,
    ) -> ReconcileStats
    where
        F: FnMut(&Segment, &mut GuideVisual),
    {
        let mut stats = ReconcileStats::default();

        let wanted: HashSet<&Segment> = targets.iter().collect();
        let obsolete: SmallVec<[Segment; 8]> = self
            .live
            .keys()
            .filter(|s| !wanted.contains(s))
            .copied()
            .collect();
        for segment in &obsolete {
            if let Some(id) = self.live.remove(segment) {
                group.visual_mut(id).visible = false;
                self.free.push(id);
                stats.retired += 1;
            }
        }
        stats.kept = self.live.len();

        for segment in targets {
            if self.live.contains_key(segment) {
                continue;
            }
            let kind = kind_of(segment);
            let id = if let Some(id) = self.free.pop() {
                stats.reused += 1;
                id
            } else {
                stats.allocated += 1;
                group.allocate(kind)
            };
            let visual = group.visual_mut(id);
            visual.visible = true;
            visual.kind = kind;
            place(segment, visual);
            self.live.insert(*segment, id);
        }

        if stats.allocated > 0 {
            tracing::debug!(
                allocated = stats.allocated,
                pooled = self.free.len(),
                "allocated guide visuals"
            );
        }
        stats
    }

    /// Re-run `place` for every displayed segment, for example after the
    /// local transform changed.
    pub fn relayout<F>(&self, group: &mut GuideGroup, mut place: F)
    where
        F: FnMut(&Segment, &mut GuideVisual),
    {
        for (segment, id) in &self.live {
            place(segment, group.visual_mut(*id));
        }
    }

    /// Forget every segment and visual, and detach all visuals from `group`.
    pub fn clear(&mut self, group: &mut GuideGroup) {
        self.live.clear();
        self.free.clear();
        group.clear();
    }
}
