// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer for size guides shown while resizing an element.

use kurbo::{Affine, Line, Point};

use super::{GuideGroup, GuideKind, GuidePool, GuideVisual, ReconcileStats};
use crate::segment::{Axis, Segment};

/// Displays matched size segments as a main line with two perpendicular end caps.
///
/// Unlike alignment guides, size guides are drawn over the segment's own span
/// so the user can see which sibling has the matched width or height.
#[derive(Clone, Debug)]
pub struct ResizingGuideRenderer {
    group: GuideGroup,
    pool: GuidePool,
    scene_to_local: Affine,
    tick_length: f64,
}

impl ResizingGuideRenderer {
    /// Create a renderer whose end caps are `tick_length` long.
    pub fn new(tick_length: f64) -> Self {
        debug_assert!(
            tick_length >= 0.0,
            "chrome tick length must be non-negative; got {tick_length:?}"
        );
        Self {
            group: GuideGroup::new(),
            pool: GuidePool::new(),
            scene_to_local: Affine::IDENTITY,
            tick_length,
        }
    }

    /// The container the host attaches to its overlay layer.
    pub fn guide_group(&self) -> &GuideGroup {
        &self.group
    }

    /// Segment-to-visual bookkeeping.
    pub fn pool(&self) -> &GuidePool {
        &self.pool
    }

    /// Transform from scene coordinates into the group's local coordinates.
    pub fn scene_to_local(&self) -> Affine {
        self.scene_to_local
    }

    /// Set the scene-to-local transform and reposition every displayed guide.
    pub fn set_scene_to_local(&mut self, scene_to_local: Affine) {
        self.scene_to_local = scene_to_local;
        let tick_length = self.tick_length;
        self.pool.relayout(&mut self.group, |segment, visual| {
            place(scene_to_local, tick_length, segment, visual);
        });
    }

    /// Display exactly the given segments. An empty slice hides everything.
    pub fn set_segments(&mut self, segments: &[Segment]) -> ReconcileStats {
        let (scene_to_local, tick_length) = (self.scene_to_local, self.tick_length);
        let stats = self.pool.reconcile(
            &mut self.group,
            segments,
            |_| GuideKind::Resize,
            |segment, visual| place(scene_to_local, tick_length, segment, visual),
        );
        tracing::trace!(?stats, "resizing guides reconciled");
        stats
    }

    /// Remove every visual from the group and empty the pool.
    pub fn clear(&mut self) {
        self.pool.clear(&mut self.group);
    }
}

fn place(scene_to_local: Affine, tick_length: f64, segment: &Segment, visual: &mut GuideVisual) {
    let [main, cap0, cap1] = chrome(tick_length, segment);
    let local = |l: Line| Line::new(scene_to_local * l.p0, scene_to_local * l.p1);
    visual.restyle(GuideKind::Resize, &[local(main), local(cap0), local(cap1)]);
}

/// Main line and the two end caps for `segment`, in scene coordinates.
fn chrome(tick_length: f64, segment: &Segment) -> [Line; 3] {
    let half = tick_length / 2.0;
    let (p0, p1) = (segment.start(), segment.end());
    let cap = |p: Point| match segment.axis() {
        Axis::Horizontal => Line::new((p.x, p.y - half), (p.x, p.y + half)),
        Axis::Vertical => Line::new((p.x - half, p.y), (p.x + half, p.y)),
    };
    [Line::new(p0, p1), cap(p0), cap(p1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_has_perpendicular_caps() {
        let mut r = ResizingGuideRenderer::new(4.0);
        let w = Segment::horizontal(10.0, 110.0, 0.0);
        let h = Segment::vertical(0.0, 50.0, 5.0);
        r.set_segments(&[w, h]);

        let group = r.guide_group();
        let wv = group.get(r.pool().visual_for(&w).unwrap()).unwrap();
        assert_eq!(wv.kind(), GuideKind::Resize);
        assert_eq!(
            wv.lines(),
            &[
                Line::new((10.0, 0.0), (110.0, 0.0)),
                Line::new((10.0, -2.0), (10.0, 2.0)),
                Line::new((110.0, -2.0), (110.0, 2.0)),
            ]
        );
        let hv = group.get(r.pool().visual_for(&h).unwrap()).unwrap();
        assert_eq!(hv.lines()[1], Line::new((3.0, 0.0), (7.0, 0.0)));
        assert_eq!(hv.lines()[2], Line::new((3.0, 50.0), (7.0, 50.0)));
    }

    #[test]
    fn same_segments_keep_visual_identity() {
        let mut r = ResizingGuideRenderer::new(4.0);
        let w = Segment::horizontal(10.0, 110.0, 0.0);
        r.set_segments(&[w]);
        let id = r.pool().visual_for(&w);
        let stats = r.set_segments(&[w]);
        assert!(stats.is_noop());
        assert_eq!(r.pool().visual_for(&w), id);
        assert_eq!(r.guide_group().len(), 1);
    }

    #[test]
    fn empty_segments_retire_to_pool() {
        let mut r = ResizingGuideRenderer::new(4.0);
        r.set_segments(&[Segment::horizontal(10.0, 110.0, 0.0)]);
        r.set_segments(&[]);
        assert_eq!(r.pool().pooled_len(), 1);
        assert_eq!(r.guide_group().visible().count(), 0);
    }
}
