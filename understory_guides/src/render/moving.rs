// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer for alignment lines shown while moving an element.

use kurbo::{Affine, Line, Point, Rect};
use smallvec::SmallVec;

use super::{GuideGroup, GuideKind, GuidePool, GuideVisual, ReconcileStats};
use crate::segment::{Axis, Segment};

/// Displays matched horizontal and vertical lines as full-width guides.
///
/// Each guide is stretched across the visible scope (in scene coordinates)
/// along its own axis, then mapped into the renderer's local space with the
/// scene-to-local transform. Without a scope, a guide covers only its
/// segment's span.
#[derive(Clone, Debug)]
pub struct MovingGuideRenderer {
    group: GuideGroup,
    pool: GuidePool,
    scene_to_local: Affine,
    scope: Option<Rect>,
}

impl Default for MovingGuideRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MovingGuideRenderer {
    /// Create a renderer with an identity transform and no scope.
    pub fn new() -> Self {
        Self {
            group: GuideGroup::new(),
            pool: GuidePool::new(),
            scene_to_local: Affine::IDENTITY,
            scope: None,
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
        self.relayout();
    }

    /// Visible scope in scene coordinates that guides stretch across.
    pub fn scope(&self) -> Option<Rect> {
        self.scope
    }

    /// Set the visible scope and reposition every displayed guide.
    pub fn set_scope(&mut self, scope: Option<Rect>) {
        self.scope = scope;
        self.relayout();
    }

    /// Display exactly the given lines.
    ///
    /// Lines already on screen keep their visuals untouched; passing two empty
    /// slices hides everything.
    pub fn set_lines(&mut self, horizontal: &[Segment], vertical: &[Segment]) -> ReconcileStats {
        let mut targets: SmallVec<[Segment; 8]> = SmallVec::new();
        targets.extend_from_slice(horizontal);
        targets.extend_from_slice(vertical);

        let Self {
            group,
            pool,
            scene_to_local,
            scope,
        } = self;
        let stats = pool.reconcile(group, &targets, kind_of, |segment, visual| {
            place(*scene_to_local, *scope, segment, visual);
        });
        tracing::trace!(?stats, "moving guides reconciled");
        stats
    }

    /// Remove every visual from the group and empty the pool.
    pub fn clear(&mut self) {
        self.pool.clear(&mut self.group);
    }

    fn relayout(&mut self) {
        let (scene_to_local, scope) = (self.scene_to_local, self.scope);
        self.pool.relayout(&mut self.group, |segment, visual| {
            place(scene_to_local, scope, segment, visual);
        });
    }
}

fn kind_of(segment: &Segment) -> GuideKind {
    match segment.axis() {
        Axis::Horizontal => GuideKind::Horizontal,
        Axis::Vertical => GuideKind::Vertical,
    }
}

fn place(
    scene_to_local: Affine,
    scope: Option<Rect>,
    segment: &Segment,
    visual: &mut GuideVisual,
) {
    let line = guide_line(scope, segment);
    visual.restyle(
        kind_of(segment),
        &[Line::new(scene_to_local * line.p0, scene_to_local * line.p1)],
    );
}

/// The guide for `segment` in scene coordinates.
fn guide_line(scope: Option<Rect>, segment: &Segment) -> Line {
    let c = segment.coordinate();
    match (segment.axis(), scope) {
        (Axis::Horizontal, Some(r)) => Line::new(Point::new(r.x0, c), Point::new(r.x1, c)),
        (Axis::Vertical, Some(r)) => Line::new(Point::new(c, r.y0), Point::new(c, r.y1)),
        (_, None) => segment.to_line(),
    }
}
