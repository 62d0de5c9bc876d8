// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size snapping while an element is resized.

use kurbo::{Rect, Size};

use crate::config::{GuideConfig, SizeAxes};
use crate::length_index::LengthIndex;
use crate::nearest::Matches;
use crate::render::{GuideGroup, ResizingGuideRenderer};
use crate::scene::{SceneBounds, finite_bounds};
use crate::segment::Segment;
use crate::tolerance::approx_eq;

/// Size suggested by [`ResizingGuideController::match_bounds`].
///
/// Each dimension is either the exact length of a matched sibling or the
/// target's own, unchanged dimension.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ResizeSuggestion {
    /// Suggested width.
    pub width: f64,
    /// Suggested height.
    pub height: f64,
    /// Whether `width` came from a match.
    pub width_matched: bool,
    /// Whether `height` came from a match.
    pub height_matched: bool,
}

impl ResizeSuggestion {
    /// Pass-through suggestion for `target`.
    pub fn unchanged(target: Rect) -> Self {
        Self {
            width: target.width(),
            height: target.height(),
            width_matched: false,
            height_matched: false,
        }
    }

    /// The suggestion as a size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether either dimension snapped.
    pub fn is_snapped(&self) -> bool {
        self.width_matched || self.height_matched
    }
}

/// Snaps a resized element's width and height to those of other elements.
///
/// Width and height are matched independently, and either may be disabled
/// (for example when a handle only changes the width). A match snaps to the
/// sibling's exact length rather than nudging by a delta.
///
/// Candidate widths are recorded as horizontal segments along each element's
/// top edge, and heights as vertical segments along its left edge; those
/// segments are what the guides display.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_guides::{GuideConfig, ResizingGuideController, SizeAxes};
///
/// let mut guides = ResizingGuideController::new(GuideConfig::default(), SizeAxes::WIDTH);
/// guides.add_sample_bounds(Rect::new(0.0, 0.0, 100.0, 30.0));
///
/// let s = guides.match_bounds(Rect::new(200.0, 0.0, 298.0, 31.0));
/// assert_eq!(s.width, 100.0);
/// // Height matching is disabled, so the target's height passes through.
/// assert_eq!(s.height, 31.0);
/// ```
#[derive(Clone, Debug)]
pub struct ResizingGuideController {
    config: GuideConfig,
    widths: Option<LengthIndex>,
    heights: Option<LengthIndex>,
    renderer: ResizingGuideRenderer,
    suggestion: ResizeSuggestion,
}

impl ResizingGuideController {
    /// Create a controller matching the dimensions in `axes`.
    pub fn new(config: GuideConfig, axes: SizeAxes) -> Self {
        Self {
            config,
            widths: axes.contains(SizeAxes::WIDTH).then(LengthIndex::new),
            heights: axes.contains(SizeAxes::HEIGHT).then(LengthIndex::new),
            renderer: ResizingGuideRenderer::new(config.chrome_tick_length()),
            suggestion: ResizeSuggestion::default(),
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    /// Dimensions being matched.
    pub fn axes(&self) -> SizeAxes {
        let mut axes = SizeAxes::empty();
        axes.set(SizeAxes::WIDTH, self.widths.is_some());
        axes.set(SizeAxes::HEIGHT, self.heights.is_some());
        axes
    }

    /// Add a candidate element's width and height. Zero dimensions are skipped.
    pub fn add_sample_bounds(&mut self, bounds: Rect) {
        debug_assert!(bounds.is_finite(), "sample bounds must be finite; got {bounds:?}");
        let (x0, x1) = (bounds.min_x(), bounds.max_x());
        let (y0, y1) = (bounds.min_y(), bounds.max_y());

        if let Some(widths) = &mut self.widths
            && !approx_eq(x0, x1)
        {
            widths.add_segment(Segment::horizontal(x0, x1, y0));
        }
        if let Some(heights) = &mut self.heights
            && !approx_eq(y0, y1)
        {
            heights.add_segment(Segment::vertical(y0, y1, x0));
        }
    }

    /// Add a candidate element by asking `scene` for its bounds.
    ///
    /// A zero width or height only drops that dimension, so a thin separator
    /// still offers its width. Returns `false` when the element is unknown or
    /// its bounds are not finite.
    pub fn add_sample_element<K>(&mut self, scene: &impl SceneBounds<K>, element: K) -> bool {
        match finite_bounds(scene, element) {
            Some(bounds) => {
                self.add_sample_bounds(bounds);
                true
            }
            None => false,
        }
    }

    /// [`add_sample_element`](Self::add_sample_element) for each element.
    ///
    /// Returns how many elements contributed segments.
    pub fn add_sample_elements<K, I>(&mut self, scene: &impl SceneBounds<K>, elements: I) -> usize
    where
        I: IntoIterator<Item = K>,
    {
        let mut added = 0;
        for element in elements {
            if self.add_sample_element(scene, element) {
                added += 1;
            }
        }
        tracing::debug!(added, "collected resize guide samples");
        added
    }

    /// Drop all candidate lengths and every displayed guide.
    pub fn clear_sample_bounds(&mut self) {
        tracing::debug!(
            widths = self.widths.as_ref().map_or(0, LengthIndex::len),
            heights = self.heights.as_ref().map_or(0, LengthIndex::len),
            "clearing resize guide samples"
        );
        for index in [&mut self.widths, &mut self.heights].into_iter().flatten() {
            index.clear();
        }
        self.renderer.clear();
    }

    /// Whether any candidate lengths are present.
    pub fn has_sample_bounds(&self) -> bool {
        [&self.widths, &self.heights]
            .into_iter()
            .flatten()
            .any(|index| !index.is_empty())
    }

    /// Resolve the suggested size for `target` and update the displayed guides.
    ///
    /// `target` must not be empty.
    pub fn match_bounds(&mut self, target: Rect) -> ResizeSuggestion {
        debug_assert!(!target.is_zero_area(), "target bounds must not be empty");
        let threshold = self.config.match_distance();
        let mut suggestion = ResizeSuggestion::unchanged(target);
        let mut shown = Matches::new();

        if let Some(widths) = &mut self.widths {
            let hits = widths.match_length(target.width(), threshold);
            if let Some(first) = hits.first() {
                suggestion.width = first.length();
                suggestion.width_matched = true;
            }
            shown.extend(hits);
        }
        if let Some(heights) = &mut self.heights {
            let hits = heights.match_length(target.height(), threshold);
            if let Some(first) = hits.first() {
                suggestion.height = first.length();
                suggestion.height_matched = true;
            }
            shown.extend(hits);
        }

        tracing::trace!(
            width = suggestion.width,
            height = suggestion.height,
            guides = shown.len(),
            "resize guides matched"
        );
        self.renderer.set_segments(&shown);
        self.suggestion = suggestion;
        suggestion
    }

    /// Width from the last [`match_bounds`](Self::match_bounds).
    pub fn suggested_width(&self) -> f64 {
        self.suggestion.width
    }

    /// Height from the last [`match_bounds`](Self::match_bounds).
    pub fn suggested_height(&self) -> f64 {
        self.suggestion.height
    }

    /// Full result of the last [`match_bounds`](Self::match_bounds).
    pub fn suggestion(&self) -> ResizeSuggestion {
        self.suggestion
    }

    /// The container of guide visuals to attach to the host overlay.
    pub fn guide_group(&self) -> &GuideGroup {
        self.renderer.guide_group()
    }

    /// The renderer, for inspecting its pool.
    pub fn renderer(&self) -> &ResizingGuideRenderer {
        &self.renderer
    }

    /// The renderer, for setting its transform.
    pub fn renderer_mut(&mut self) -> &mut ResizingGuideRenderer {
        &mut self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(axes: SizeAxes) -> ResizingGuideController {
        ResizingGuideController::new(GuideConfig::default(), axes)
    }

    #[test]
    fn snaps_to_exact_sibling_width() {
        let mut c = controller(SizeAxes::default());
        c.add_sample_bounds(Rect::new(0.0, 0.0, 100.0, 40.0));

        let s = c.match_bounds(Rect::new(300.0, 300.0, 398.0, 360.0));
        assert!(s.width_matched);
        assert_eq!(s.width, 100.0);
        assert_eq!(c.suggested_width(), 100.0);
        // 60 is 20 away from 40: no height snap.
        assert!(!s.height_matched);
        assert_eq!(s.height, 60.0);
        assert_eq!(s.size(), Size::new(100.0, 60.0));
    }

    #[test]
    fn dimensions_match_independently() {
        let mut c = controller(SizeAxes::default());
        c.add_sample_bounds(Rect::new(0.0, 0.0, 100.0, 40.0));
        c.add_sample_bounds(Rect::new(0.0, 100.0, 250.0, 160.0));

        let s = c.match_bounds(Rect::new(0.0, 0.0, 180.0, 57.0));
        assert!(!s.width_matched);
        assert_eq!(s.width, 180.0);
        assert!(s.height_matched);
        assert_eq!(s.height, 60.0);
        assert_eq!(c.suggested_height(), 60.0);

        let shown: alloc::vec::Vec<_> = c.guide_group().visible().collect();
        assert_eq!(shown.len(), 1);
        assert!(
            c.renderer()
                .pool()
                .visual_for(&Segment::vertical(100.0, 160.0, 0.0))
                .is_some()
        );
    }

    #[test]
    fn disabled_axis_passes_target_through() {
        let mut c = controller(SizeAxes::HEIGHT);
        assert_eq!(c.axes(), SizeAxes::HEIGHT);
        c.add_sample_bounds(Rect::new(0.0, 0.0, 100.0, 40.0));

        let s = c.match_bounds(Rect::new(0.0, 0.0, 99.0, 38.0));
        assert!(!s.width_matched);
        assert_eq!(s.width, 99.0);
        assert_eq!(s.height, 40.0);
    }

    #[test]
    fn zero_dimensions_are_not_candidates() {
        let mut c = controller(SizeAxes::default());
        c.add_sample_bounds(Rect::new(0.0, 0.0, 100.0, 0.0));
        assert!(c.has_sample_bounds());

        let s = c.match_bounds(Rect::new(0.0, 0.0, 10.0, 3.0));
        assert!(!s.height_matched);
        assert_eq!(s.height, 3.0);

        let mut c = controller(SizeAxes::default());
        c.add_sample_bounds(Rect::new(5.0, 5.0, 5.0, 5.0));
        assert!(!c.has_sample_bounds());
    }

    #[test]
    fn flat_scene_element_still_offers_its_width() {
        let scene = |id: u32| match id {
            1 => Some(Rect::new(0.0, 0.0, 100.0, 0.0)),
            2 => Some(Rect::new(0.0, 0.0, f64::INFINITY, 10.0)),
            _ => None,
        };
        let mut c = controller(SizeAxes::default());
        assert_eq!(c.add_sample_elements(&scene, [1, 2, 3]), 1);

        let s = c.match_bounds(Rect::new(0.0, 0.0, 98.0, 3.0));
        assert!(s.width_matched);
        assert_eq!(s.width, 100.0);
        assert!(!s.height_matched);
        assert_eq!(s.height, 3.0);
    }

    #[test]
    fn sibling_ties_are_all_displayed() {
        let mut c = controller(SizeAxes::WIDTH);
        c.add_sample_bounds(Rect::new(0.0, 0.0, 100.0, 40.0));
        c.add_sample_bounds(Rect::new(0.0, 200.0, 100.0, 210.0));
        c.add_sample_bounds(Rect::new(500.0, 0.0, 602.0, 40.0));

        let s = c.match_bounds(Rect::new(0.0, 0.0, 101.0, 40.0));
        // 100 and 102 are both 1 away; the shorter comes first.
        assert_eq!(s.width, 100.0);
        assert_eq!(c.guide_group().visible().count(), 3);
    }

    #[test]
    fn unchanged_match_keeps_visual_identity_and_clear_removes_it() {
        let mut c = controller(SizeAxes::WIDTH);
        c.add_sample_bounds(Rect::new(0.0, 0.0, 100.0, 40.0));

        c.match_bounds(Rect::new(0.0, 0.0, 98.0, 40.0));
        let seg = Segment::horizontal(0.0, 100.0, 0.0);
        let id = c.renderer().pool().visual_for(&seg);
        assert!(id.is_some());

        c.match_bounds(Rect::new(0.0, 0.0, 97.0, 40.0));
        assert_eq!(c.renderer().pool().visual_for(&seg), id);
        assert_eq!(c.guide_group().len(), 1);

        c.clear_sample_bounds();
        assert!(!c.has_sample_bounds());
        assert!(c.guide_group().is_empty());
    }
}
