// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color bar dragging.
//!
//! Drag the thumb across a shrunk-ends bar inside a scrolling container and
//! watch the selection follow the pointer.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p honeycomb_demos --example bar_picker_drag`

use honeycomb_picker::{BarPicker, Color, DragConfig, DrawOp, PickEvent, PointerEvent};
use kurbo::Size;

fn main() {
    env_logger::init();

    let mut bar = BarPicker::new();
    bar.set_colors([
        Color::rgb(255, 0, 0),
        Color::rgb(255, 255, 0),
        Color::rgb(0, 255, 0),
        Color::rgb(0, 255, 255),
        Color::rgb(0, 0, 255),
    ])
    .unwrap();
    bar.set_drag_config(DragConfig {
        touch_slop: 8.0,
        in_scrolling_container: true,
    });
    bar.set_size(Size::new(200.0, bar.measure_height()));
    log::info!("bar size {:?}", bar.size());

    let samples = [
        PointerEvent::down(10.0, 12.0),
        PointerEvent::moved(14.0, 12.0),
        PointerEvent::moved(60.0, 12.0),
        PointerEvent::moved(120.0, 12.0),
        PointerEvent::up(190.0, 12.0),
    ];
    let mut clicks = Vec::new();
    for ev in samples {
        let events = bar.handle_pointer(ev);
        println!("{:?} at x = {:>5} -> {events:?} (selected {:?})", ev.action, ev.pos.x, bar.selected_color());
        clicks.extend(events.into_iter().filter(|e| matches!(e, PickEvent::Click(_))));
    }
    assert_eq!(clicks, vec![PickEvent::Click(Color::rgb(0, 0, 255))]);

    let mut ops: Vec<DrawOp> = Vec::new();
    bar.render(&mut ops).unwrap();
    for op in &ops {
        println!("{op:?}");
    }
}
