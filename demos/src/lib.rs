// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A toy canvas shared by the guide demos.

use std::collections::HashMap;

use kurbo::Rect;
use understory_guides::SceneBounds;

/// Identifier of an element placed on a [`DemoScene`].
pub type ElementId = u32;

/// Elements with bounds in scene coordinates.
#[derive(Clone, Debug, Default)]
pub struct DemoScene {
    elements: HashMap<ElementId, Rect>,
    next: ElementId,
}

impl DemoScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place an element and return its id.
    pub fn insert(&mut self, bounds: Rect) -> ElementId {
        let id = self.next;
        self.next += 1;
        self.elements.insert(id, bounds);
        id
    }

    /// Move or resize an existing element.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) {
        if let Some(slot) = self.elements.get_mut(&id) {
            *slot = bounds;
        }
    }

    /// Every element except `skip`, the one being manipulated.
    pub fn others(&self, skip: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.keys().copied().filter(move |id| *id != skip)
    }
}

impl SceneBounds<ElementId> for DemoScene {
    fn bounds_in_scene(&self, element: ElementId) -> Option<Rect> {
        self.elements.get(&element).copied()
    }
}
