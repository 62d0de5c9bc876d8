// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary with the host scene graph.

use kurbo::Rect;

/// Source of element bounds in the shared scene coordinate space.
///
/// This is the only question the guide engine asks of a host scene graph.
/// Implementations typically walk their element's parent transforms (for
/// example via a box tree's world bounds) and return the axis-aligned result.
pub trait SceneBounds<K> {
    /// Bounds of `element` in scene coordinates, or `None` if it is unknown
    /// or not laid out.
    fn bounds_in_scene(&self, element: K) -> Option<Rect>;
}

impl<K, F> SceneBounds<K> for F
where
    F: Fn(K) -> Option<Rect>,
{
    fn bounds_in_scene(&self, element: K) -> Option<Rect> {
        self(element)
    }
}

/// Bounds usable as a snap candidate: known, finite, and with non-zero area.
pub(crate) fn usable_bounds<K>(scene: &impl SceneBounds<K>, element: K) -> Option<Rect> {
    scene
        .bounds_in_scene(element)
        .filter(|r| r.is_finite() && !r.is_zero_area())
}

/// Bounds that are known and finite, possibly with a zero width or height.
pub(crate) fn finite_bounds<K>(scene: &impl SceneBounds<K>, element: K) -> Option<Rect> {
    scene.bounds_in_scene(element).filter(Rect::is_finite)
}
