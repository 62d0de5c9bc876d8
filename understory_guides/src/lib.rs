// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_guides --heading-base-level=0

//! Understory Guides: alignment guides and snapping for layout editors.
//!
//! While the user drags or resizes an element over a canvas of existing
//! elements, this crate answers two questions on every pointer move:
//!
//! - Which edges or centers of the other elements are close enough to the
//!   manipulated element to justify a snap?
//! - What offset (when moving) or size (when resizing) should be suggested
//!   so the element lines up exactly?
//!
//! It also keeps a small retained set of guide visuals in sync with the
//! matches, reusing visuals across ticks instead of reallocating them.
//!
//! ## Moving
//!
//! [`MovingGuideController`] indexes the top, bottom, left, and right edges
//! (and optionally the center lines) of every candidate element. Each axis is
//! resolved on its own: the target's center is tried first, then its leading
//! edge, then its trailing edge.
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_guides::{GuideConfig, MovingGuideController, SnapTier};
//!
//! let mut guides = MovingGuideController::new(GuideConfig::default());
//! guides.add_sample_bounds(Rect::new(0.0, 0.0, 100.0, 100.0), true);
//! guides.add_sample_bounds(Rect::new(200.0, 0.0, 300.0, 100.0), true);
//!
//! // Drag a 100×100 element so its center sits at (53, 248).
//! let target = Rect::new(3.0, 198.0, 103.0, 298.0);
//! let s = guides.match_bounds(target);
//! assert_eq!(s.x_tier, Some(SnapTier::Center));
//! assert_eq!(s.dx, -3.0);
//! assert_eq!(s.dy, 0.0);
//!
//! // The host applies the correction and draws `guide_group()` in its overlay.
//! assert_eq!(s.apply(target), Rect::new(0.0, 198.0, 100.0, 298.0));
//! assert_eq!(guides.guide_group().visible().count(), 1);
//!
//! // Gesture over.
//! guides.clear_sample_bounds();
//! ```
//!
//! ## Resizing
//!
//! [`ResizingGuideController`] indexes candidate widths and heights and
//! suggests the exact length of the closest sibling, so a resized element
//! ends up precisely as wide or tall as another.
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_guides::{GuideConfig, ResizingGuideController, SizeAxes};
//!
//! let mut guides = ResizingGuideController::new(GuideConfig::default(), SizeAxes::default());
//! guides.add_sample_bounds(Rect::new(0.0, 0.0, 100.0, 40.0));
//!
//! let s = guides.match_bounds(Rect::new(300.0, 0.0, 398.0, 90.0));
//! assert_eq!(s.width, 100.0);
//! assert_eq!(s.height, 90.0);
//! ```
//!
//! ## Building blocks
//!
//! - [`Segment`]: an immutable horizontal or vertical segment.
//! - [`HorizontalLineIndex`] / [`VerticalLineIndex`]: lazily sorted,
//!   nearest-coordinate lookups.
//! - [`LengthIndex`]: the same, keyed by segment length.
//! - [`render`]: the retained [`GuideGroup`] and the diffing renderers.
//! - [`tolerance`]: the shared epsilon every comparison goes through.
//!
//! ## Scope
//!
//! This crate does not own a scene graph or decide when a gesture starts or
//! ends. Hosts feed it bounds in a shared scene coordinate space (directly or
//! via [`SceneBounds`]), read back suggestions, and paint the guide group.
//! It does not persist guides, compute spacing or distribution guides, or
//! perform layout.
//!
//! Preconditions (non-empty target bounds, finite coordinates, non-negative
//! thresholds) are checked with debug assertions.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod length_index;
mod line_index;
mod moving;
mod nearest;
pub mod render;
mod resizing;
mod scene;
mod segment;
pub mod tolerance;

pub use config::{GuideConfig, GuideConfigError, SizeAxes};
pub use length_index::LengthIndex;
pub use line_index::{HorizontalLineIndex, VerticalLineIndex};
pub use moving::{MoveSuggestion, MovingGuideController, SnapTier};
pub use nearest::Matches;
pub use render::{GuideGroup, GuideKind, GuideVisual, ReconcileStats, VisualId};
pub use resizing::{ResizeSuggestion, ResizingGuideController};
pub use scene::SceneBounds;
pub use segment::{Axis, HorizontalSegment, Segment, VerticalSegment};

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Affine, Rect, Vec2};

    #[test]
    fn drag_session_reuses_visuals_across_ticks() {
        let mut guides = MovingGuideController::new(GuideConfig::default());
        guides.add_sample_bounds(Rect::new(0.0, 0.0, 100.0, 100.0), true);
        guides.add_sample_bounds(Rect::new(0.0, 300.0, 100.0, 400.0), true);

        // Top edge near y = 100: one horizontal guide.
        guides.match_bounds(Rect::new(500.0, 104.0, 550.0, 154.0));
        assert_eq!(guides.guide_group().len(), 1);

        // Bottom edge near y = 300 instead: the old guide is recycled.
        let allocated = guides.guide_group().len();
        guides.match_bounds(Rect::new(500.0, 248.0, 550.0, 298.0));
        assert_eq!(guides.guide_group().len(), allocated);
        assert_eq!(guides.guide_group().visible().count(), 1);

        // Nothing in range: everything hidden but still attached.
        guides.match_bounds(Rect::new(500.0, 180.0, 550.0, 230.0));
        assert_eq!(guides.guide_group().visible().count(), 0);
        assert_eq!(guides.guide_group().len(), 1);
        assert_eq!(guides.renderer().pool().pooled_len(), 1);

        guides.clear_sample_bounds();
        assert!(guides.guide_group().is_empty());
    }

    #[test]
    fn guides_are_drawn_in_overlay_space() {
        let mut guides = MovingGuideController::new(GuideConfig::default());
        guides.renderer_mut().set_scene_to_local(Affine::translate(Vec2::new(0.0, -10.0)));
        guides.renderer_mut().set_scope(Some(Rect::new(0.0, 0.0, 800.0, 600.0)));
        guides.add_sample_bounds(Rect::new(0.0, 0.0, 100.0, 100.0), false);

        guides.match_bounds(Rect::new(300.0, 102.0, 350.0, 152.0));
        let visual = guides.guide_group().visible().next().unwrap();
        assert_eq!(visual.kind(), GuideKind::Horizontal);
        assert_eq!(visual.lines()[0], kurbo::Line::new((0.0, 90.0), (800.0, 90.0)));
    }

    #[test]
    fn custom_match_distance_is_respected() {
        let config = GuideConfig::default().with_match_distance(2.0).unwrap();
        let mut guides = MovingGuideController::new(config);
        guides.add_sample_bounds(Rect::new(0.0, 0.0, 100.0, 100.0), false);

        let s = guides.match_bounds(Rect::new(103.0, 500.0, 150.0, 550.0));
        assert!(!s.is_snapped());
        let s = guides.match_bounds(Rect::new(101.5, 500.0, 150.0, 550.0));
        assert_eq!(s.dx, -1.5);
    }

    #[test]
    fn resize_session_uses_configured_tick_length() {
        let config = GuideConfig::default().with_chrome_tick_length(10.0).unwrap();
        let mut guides = ResizingGuideController::new(config, SizeAxes::WIDTH);
        guides.add_sample_bounds(Rect::new(0.0, 0.0, 100.0, 40.0));

        let s = guides.match_bounds(Rect::new(0.0, 100.0, 96.0, 140.0));
        assert_eq!(s.width, 100.0);
        let visual = guides.guide_group().visible().next().unwrap();
        assert_eq!(visual.kind(), GuideKind::Resize);
        assert_eq!(visual.lines().len(), 3);
        assert_eq!(visual.lines()[1], kurbo::Line::new((0.0, -5.0), (0.0, 5.0)));
    }
}
