// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag and resize sessions over a small scene, printing suggestions and guides.
//!
//! Run:
//! - `cargo run -p understory_guides_demos --example drag_guides`
//!
//! Guide reconciliation is logged at `TRACE`.

use kurbo::{Affine, Rect, Vec2};
use tracing::Level;
use understory_guides::{
    GuideConfig, GuideGroup, MovingGuideController, ResizingGuideController, SizeAxes,
};
use understory_guides_demos::DemoScene;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    let mut scene = DemoScene::new();
    scene.insert(Rect::new(0.0, 0.0, 100.0, 100.0));
    scene.insert(Rect::new(200.0, 0.0, 300.0, 60.0));
    let dragged = scene.insert(Rect::new(40.0, 240.0, 90.0, 290.0));

    // Drag: sample once at gesture start, then query per pointer move.
    let mut moving = MovingGuideController::new(GuideConfig::default());
    moving
        .renderer_mut()
        .set_scene_to_local(Affine::translate(Vec2::new(-20.0, -20.0)));
    moving.renderer_mut().set_scope(Some(Rect::new(0.0, 0.0, 640.0, 480.0)));
    moving.add_sample_elements(&scene, scene.others(dragged));

    let mut bounds = Rect::new(40.0, 240.0, 90.0, 290.0);
    for step in [Vec2::new(5.0, -30.0), Vec2::new(3.0, -40.0), Vec2::new(-46.0, -108.0)] {
        bounds = bounds + step;
        let s = moving.match_bounds(bounds);
        println!(
            "move {bounds:?}: dx={} ({:?}) dy={} ({:?}) -> {:?}",
            s.dx,
            s.x_tier,
            s.dy,
            s.y_tier,
            s.apply(bounds)
        );
        print_group(moving.guide_group());
    }
    scene.set_bounds(dragged, moving.suggestion().apply(bounds));
    moving.clear_sample_bounds();

    // Resize: widths and heights of every other element are candidates.
    let config = GuideConfig::default()
        .with_chrome_tick_length(8.0)
        .unwrap_or_default();
    let mut resizing = ResizingGuideController::new(config, SizeAxes::WIDTH | SizeAxes::HEIGHT);
    resizing.add_sample_elements(&scene, scene.others(dragged));

    for size in [(97.0, 30.0), (55.0, 62.0)] {
        let target = Rect::from_origin_size((400.0, 300.0), size);
        let s = resizing.match_bounds(target);
        println!("resize {:?}: suggested {:?}", target.size(), s.size());
        print_group(resizing.guide_group());
    }
    resizing.clear_sample_bounds();
}

fn print_group(group: &GuideGroup) {
    for visual in group.visible() {
        println!("  {:?} {:?}: {:?}", visual.id(), visual.kind(), visual.lines());
    }
}
