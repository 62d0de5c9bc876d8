// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained guide visuals and the renderers that keep them in sync with match results.
//!
//! A renderer owns a [`GuideGroup`]: a flat container of [`GuideVisual`]s the
//! host attaches once to its overlay layer and paints every frame. Between
//! ticks, the renderer diffs the newly matched segments against what is on
//! screen:
//!
//! - Visuals for segments that are still matched are left untouched.
//! - Visuals for segments that are no longer matched are hidden and moved to
//!   a reuse pool.
//! - Newly matched segments take a visual from the pool, or allocate a new
//!   one when the pool is empty.
//!
//! Visuals are only removed from the group when the renderer is cleared at
//! the end of a gesture.

use alloc::vec::Vec;

use kurbo::Line;
use smallvec::SmallVec;

mod moving;
mod pool;
mod resizing;

pub use moving::MovingGuideRenderer;
pub use pool::GuidePool;
pub use resizing::ResizingGuideRenderer;

/// Identifier of a visual inside a [`GuideGroup`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct VisualId(u32);

impl VisualId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Guide groups never hold anywhere near u32::MAX visuals."
    )]
    const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Style class of a guide visual.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GuideKind {
    /// A horizontal alignment line from a move gesture.
    Horizontal,
    /// A vertical alignment line from a move gesture.
    Vertical,
    /// A size guide from a resize gesture: a main line with two end caps.
    Resize,
}

/// A single retained guide visual.
#[derive(Clone, Debug)]
pub struct GuideVisual {
    id: VisualId,
    kind: GuideKind,
    visible: bool,
    lines: SmallVec<[Line; 3]>,
}

impl GuideVisual {
    /// This visual's identifier. Stable for the lifetime of the owning group.
    pub fn id(&self) -> VisualId {
        self.id
    }

    /// Style class.
    pub fn kind(&self) -> GuideKind {
        self.kind
    }

    /// Whether the visual should be painted.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Strokes in the renderer's local coordinate space.
    ///
    /// Alignment guides have one line; resize guides have the main line
    /// followed by the two end caps.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub(crate) fn restyle(&mut self, kind: GuideKind, lines: &[Line]) {
        self.kind = kind;
        self.lines.clear();
        self.lines.extend_from_slice(lines);
    }
}

/// Container of guide visuals owned by a renderer.
///
/// The host reads it to paint; only the renderer mutates it.
#[derive(Clone, Debug, Default)]
pub struct GuideGroup {
    visuals: Vec<GuideVisual>,
}

impl GuideGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of visuals attached, visible or pooled.
    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    /// Whether no visuals are attached.
    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    /// Look up a visual.
    pub fn get(&self, id: VisualId) -> Option<&GuideVisual> {
        self.visuals.get(id.idx())
    }

    /// All attached visuals, in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = &GuideVisual> + '_ {
        self.visuals.iter()
    }

    /// Visuals that should currently be painted.
    pub fn visible(&self) -> impl Iterator<Item = &GuideVisual> + '_ {
        self.visuals.iter().filter(|v| v.visible)
    }

    fn allocate(&mut self, kind: GuideKind) -> VisualId {
        let id = VisualId::new(self.visuals.len());
        self.visuals.push(GuideVisual {
            id,
            kind,
            visible: false,
            lines: SmallVec::new(),
        });
        id
    }

    fn visual_mut(&mut self, id: VisualId) -> &mut GuideVisual {
        &mut self.visuals[id.idx()]
    }

    fn clear(&mut self) {
        self.visuals.clear();
    }
}

/// What a reconcile pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Visuals left as they were because their segment is still matched.
    pub kept: usize,
    /// Visuals hidden and returned to the pool.
    pub retired: usize,
    /// Visuals taken back out of the pool.
    pub reused: usize,
    /// Visuals newly allocated into the group.
    pub allocated: usize,
}

impl ReconcileStats {
    /// Whether the pass changed nothing on screen.
    pub fn is_noop(&self) -> bool {
        self.retired == 0 && self.reused == 0 && self.allocated == 0
    }
}
