// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hexagon picker basics.
//!
//! Lay out a grid, render it into a pixel buffer, and feed a tap plus a
//! press-drag-release through the picker.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p honeycomb_demos --example hex_picker_basics`

use honeycomb_picker::{
    Color, HexPicker, HitStrategy, PickEvent, PixelBuffer, PointerEvent, dispatch,
};
use kurbo::Size;

fn main() {
    env_logger::init();

    let palette = [
        Color::rgb(230, 57, 70),
        Color::rgb(241, 250, 238),
        Color::rgb(168, 218, 220),
        Color::rgb(69, 123, 157),
        Color::rgb(29, 53, 87),
    ];
    let mut picker = HexPicker::new();
    picker.set_colors(palette);
    picker.set_stroke_width(2.0).unwrap();
    picker.set_stroke_color(Color::WHITE);
    picker.set_size(picker.measure(Size::new(320.0, 240.0)));
    println!("measured size: {:?}", picker.size());

    let mut buf = PixelBuffer::for_size(picker.size());
    picker.render(&mut buf).unwrap();
    let painted = buf.pixels().iter().filter(|c| !c.is_transparent()).count();
    println!("painted {painted} of {} pixels", buf.pixels().len());

    // Tap the center cell.
    let center = picker.grid().unwrap().centers()[9];
    let mut events: Vec<PickEvent<Color>> = Vec::new();
    dispatch(&picker.handle_pointer(PointerEvent::down(center.x, center.y)), &mut events);
    dispatch(&picker.handle_pointer(PointerEvent::up(center.x, center.y)), &mut events);
    println!("tap: {events:?}");
    assert!(matches!(events.last(), Some(PickEvent::Click(_))));

    // Press, wander to a neighbor, come back: still a click.
    let neighbor = picker.grid().unwrap().centers()[10];
    let mut events: Vec<PickEvent<Color>> = Vec::new();
    for ev in [
        PointerEvent::down(center.x, center.y),
        PointerEvent::moved(neighbor.x, neighbor.y),
        PointerEvent::up(center.x, center.y),
    ] {
        dispatch(&picker.handle_pointer(ev), &mut events);
    }
    println!("drag and return: {events:?}");
    assert_eq!(events.iter().filter(|e| matches!(e, PickEvent::Click(_))).count(), 1);

    // The raster strategy also covers the corners the inscribed circle misses.
    picker.set_hit_strategy(HitStrategy::Raster);
    assert_eq!(picker.color_at(center), picker.grid().unwrap().cell(9).map(|c| c.color));
    println!("invalidation since start: {:?}", picker.take_invalidation());
}
