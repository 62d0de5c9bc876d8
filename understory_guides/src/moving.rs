// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position snapping while an element is dragged.

use kurbo::{Rect, Vec2};

use crate::config::GuideConfig;
use crate::line_index::{HorizontalLineIndex, VerticalLineIndex};
use crate::nearest::Matches;
use crate::render::{GuideGroup, MovingGuideRenderer};
use crate::scene::{SceneBounds, usable_bounds};
use crate::segment::Segment;

/// Which part of the target produced a snap on one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SnapTier {
    /// The target's midpoint.
    Center,
    /// The target's top edge (y axis) or left edge (x axis).
    Leading,
    /// The target's bottom edge (y axis) or right edge (x axis).
    Trailing,
}

impl SnapTier {
    /// Tiers in the order they are tried. The first tier with a match wins.
    pub const PRIORITY: [Self; 3] = [Self::Center, Self::Leading, Self::Trailing];
}

/// Correction suggested by [`MovingGuideController::match_bounds`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MoveSuggestion {
    /// Signed horizontal offset that lands the target on the matched vertical line.
    pub dx: f64,
    /// Signed vertical offset that lands the target on the matched horizontal line.
    pub dy: f64,
    /// Tier that produced `dx`, if any.
    pub x_tier: Option<SnapTier>,
    /// Tier that produced `dy`, if any.
    pub y_tier: Option<SnapTier>,
}

impl MoveSuggestion {
    /// No snap on either axis.
    pub const NONE: Self = Self {
        dx: 0.0,
        dy: 0.0,
        x_tier: None,
        y_tier: None,
    };

    /// Whether either axis snapped, including snaps with a zero offset.
    pub fn is_snapped(&self) -> bool {
        self.x_tier.is_some() || self.y_tier.is_some()
    }

    /// The offset as a vector.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.dx, self.dy)
    }

    /// `bounds` moved by the suggested offset.
    pub fn apply(&self, bounds: Rect) -> Rect {
        bounds + self.offset()
    }
}

/// Snaps a dragged element's edges and center to those of other elements.
///
/// Typical use per gesture: feed every candidate element to
/// [`add_sample_bounds`](Self::add_sample_bounds) when the drag starts, call
/// [`match_bounds`](Self::match_bounds) on every pointer move, and
/// [`clear_sample_bounds`](Self::clear_sample_bounds) when the drag ends.
///
/// Each axis is resolved on its own. Within an axis, the center is tried
/// first, then the leading edge, then the trailing edge.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_guides::{GuideConfig, MovingGuideController};
///
/// let mut guides = MovingGuideController::new(GuideConfig::default());
/// guides.add_sample_bounds(Rect::new(0.0, 0.0, 100.0, 100.0), true);
///
/// // The dragged element's left edge is 3 units right of x = 100.
/// let s = guides.match_bounds(Rect::new(103.0, 300.0, 153.0, 350.0));
/// assert_eq!(s.dx, -3.0);
/// assert_eq!(s.dy, 0.0);
/// assert_eq!(guides.guide_group().visible().count(), 1);
///
/// guides.clear_sample_bounds();
/// assert!(guides.guide_group().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct MovingGuideController {
    config: GuideConfig,
    horizontal: HorizontalLineIndex,
    vertical: VerticalLineIndex,
    renderer: MovingGuideRenderer,
    suggestion: MoveSuggestion,
}

impl MovingGuideController {
    /// Create a controller with empty indices.
    pub fn new(config: GuideConfig) -> Self {
        Self {
            config,
            horizontal: HorizontalLineIndex::new(),
            vertical: VerticalLineIndex::new(),
            renderer: MovingGuideRenderer::new(),
            suggestion: MoveSuggestion::NONE,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    /// Add the edges of a candidate element, and its center lines if `add_middle`.
    ///
    /// Horizontal lines span the element's width; vertical lines span its height.
    pub fn add_sample_bounds(&mut self, bounds: Rect, add_middle: bool) {
        debug_assert!(bounds.is_finite(), "sample bounds must be finite; got {bounds:?}");
        let (x0, x1) = (bounds.min_x(), bounds.max_x());
        let (y0, y1) = (bounds.min_y(), bounds.max_y());

        self.horizontal.add_line(Segment::horizontal(x0, x1, y0));
        self.horizontal.add_line(Segment::horizontal(x0, x1, y1));
        self.vertical.add_line(Segment::vertical(y0, y1, x0));
        self.vertical.add_line(Segment::vertical(y0, y1, x1));
        if add_middle {
            let center = bounds.center();
            self.horizontal.add_line(Segment::horizontal(x0, x1, center.y));
            self.vertical.add_line(Segment::vertical(y0, y1, center.x));
        }
    }

    /// Add a candidate element by asking `scene` for its bounds, including
    /// center lines.
    ///
    /// Returns `false` when the element has no usable bounds and was skipped.
    pub fn add_sample_element<K>(&mut self, scene: &impl SceneBounds<K>, element: K) -> bool {
        match usable_bounds(scene, element) {
            Some(bounds) => {
                self.add_sample_bounds(bounds, true);
                true
            }
            None => false,
        }
    }

    /// [`add_sample_element`](Self::add_sample_element) for each element.
    ///
    /// Returns how many elements contributed lines.
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
        tracing::debug!(
            added,
            horizontal = self.horizontal.len(),
            vertical = self.vertical.len(),
            "collected move guide samples"
        );
        added
    }

    /// Drop all candidate lines and every displayed guide.
    pub fn clear_sample_bounds(&mut self) {
        tracing::debug!(
            horizontal = self.horizontal.len(),
            vertical = self.vertical.len(),
            "clearing move guide samples"
        );
        self.horizontal.clear();
        self.vertical.clear();
        self.renderer.clear();
    }

    /// Whether any candidate lines are present.
    pub fn has_sample_bounds(&self) -> bool {
        !self.horizontal.is_empty() || !self.vertical.is_empty()
    }

    /// Resolve the suggested offset for `target` and update the displayed guides.
    ///
    /// `target` must not be empty. An axis without a match within the
    /// configured distance gets a zero offset.
    pub fn match_bounds(&mut self, target: Rect) -> MoveSuggestion {
        debug_assert!(!target.is_zero_area(), "target bounds must not be empty");
        let threshold = self.config.match_distance();

        let horizontal = &mut self.horizontal;
        let (dy, y_tier, horizontal_lines) = resolve_axis(|tier| match tier {
            SnapTier::Center => (horizontal.match_center(target, threshold), target.center().y),
            SnapTier::Leading => (horizontal.match_north(target, threshold), target.min_y()),
            SnapTier::Trailing => (horizontal.match_south(target, threshold), target.max_y()),
        });
        let vertical = &mut self.vertical;
        let (dx, x_tier, vertical_lines) = resolve_axis(|tier| match tier {
            SnapTier::Center => (vertical.match_center(target, threshold), target.center().x),
            SnapTier::Leading => (vertical.match_west(target, threshold), target.min_x()),
            SnapTier::Trailing => (vertical.match_east(target, threshold), target.max_x()),
        });
        let suggestion = MoveSuggestion {
            dx,
            dy,
            x_tier,
            y_tier,
        };

        tracing::trace!(
            dx = suggestion.dx,
            dy = suggestion.dy,
            horizontal = horizontal_lines.len(),
            vertical = vertical_lines.len(),
            "move guides matched"
        );
        self.renderer.set_lines(&horizontal_lines, &vertical_lines);
        self.suggestion = suggestion;
        suggestion
    }

    /// Horizontal offset from the last [`match_bounds`](Self::match_bounds).
    pub fn suggested_dx(&self) -> f64 {
        self.suggestion.dx
    }

    /// Vertical offset from the last [`match_bounds`](Self::match_bounds).
    pub fn suggested_dy(&self) -> f64 {
        self.suggestion.dy
    }

    /// Full result of the last [`match_bounds`](Self::match_bounds).
    pub fn suggestion(&self) -> MoveSuggestion {
        self.suggestion
    }

    /// The container of guide visuals to attach to the host overlay.
    pub fn guide_group(&self) -> &GuideGroup {
        self.renderer.guide_group()
    }

    /// The renderer, for inspecting its pool.
    pub fn renderer(&self) -> &MovingGuideRenderer {
        &self.renderer
    }

    /// The renderer, for setting its transform and scope.
    pub fn renderer_mut(&mut self) -> &mut MovingGuideRenderer {
        &mut self.renderer
    }

    /// Candidate horizontal lines.
    pub fn horizontal_lines(&self) -> &[Segment] {
        self.horizontal.lines()
    }

    /// Candidate vertical lines.
    pub fn vertical_lines(&self) -> &[Segment] {
        self.vertical.lines()
    }
}

/// Try each tier in priority order and stop at the first with a match.
///
/// `probe` returns the matches for a tier and the target coordinate they were
/// measured from. The offset is taken from the first (lowest-coordinate)
/// match; ties are all returned for display.
fn resolve_axis(
    mut probe: impl FnMut(SnapTier) -> (Matches, f64),
) -> (f64, Option<SnapTier>, Matches) {
    for tier in SnapTier::PRIORITY {
        let (lines, edge) = probe(tier);
        if let Some(first) = lines.first() {
            return (first.coordinate() - edge, Some(tier), lines);
        }
    }
    (0.0, None, Matches::new())
}
