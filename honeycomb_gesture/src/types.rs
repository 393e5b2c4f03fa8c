// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: pointer input, pick events, and listeners.

use kurbo::Point;

/// What a pointer sample represents.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerAction {
    /// Contact started.
    Down,
    /// Contact moved.
    Move,
    /// Contact ended normally.
    Up,
    /// The platform took the gesture away (e.g. a scrolling ancestor claimed it).
    Cancel,
}

/// A single pointer sample in widget coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Position of the pointer.
    pub pos: Point,
    /// Kind of sample.
    pub action: PointerAction,
}

impl PointerEvent {
    /// Create a sample.
    pub const fn new(action: PointerAction, pos: Point) -> Self {
        Self { pos, action }
    }

    /// A [`PointerAction::Down`] sample at `(x, y)`.
    pub const fn down(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Down, Point::new(x, y))
    }

    /// A [`PointerAction::Move`] sample at `(x, y)`.
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Move, Point::new(x, y))
    }

    /// A [`PointerAction::Up`] sample at `(x, y)`.
    pub const fn up(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Up, Point::new(x, y))
    }

    /// A [`PointerAction::Cancel`] sample at `(x, y)`.
    pub const fn cancel(x: f64, y: f64) -> Self {
        Self::new(PointerAction::Cancel, Point::new(x, y))
    }
}

/// A pick notification.
///
/// Produced by [`PressLatch`](crate::press::PressLatch) and
/// [`DragTracker`](crate::drag::DragTracker); forward them to a
/// [`PickListener`] with [`dispatch`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PickEvent<C> {
    /// The pointer is over a color. Fires on every qualifying sample.
    Touch(C),
    /// A gesture completed on a color.
    Click(C),
}

impl<C: Copy> PickEvent<C> {
    /// The color carried by the event.
    pub fn color(&self) -> C {
        match *self {
            Self::Touch(c) | Self::Click(c) => c,
        }
    }
}

/// Receives pick notifications.
pub trait PickListener<C> {
    /// The pointer is over `color`.
    fn on_color_touch(&mut self, color: C);
    /// A gesture completed on `color`.
    fn on_color_click(&mut self, color: C);
}

impl<C> PickListener<C> for alloc::vec::Vec<PickEvent<C>> {
    fn on_color_touch(&mut self, color: C) {
        self.push(PickEvent::Touch(color));
    }

    fn on_color_click(&mut self, color: C) {
        self.push(PickEvent::Click(color));
    }
}

/// Forward `events` to `listener` in order. Returns whether anything was sent.
pub fn dispatch<C: Copy, L: PickListener<C> + ?Sized>(
    events: &[PickEvent<C>],
    listener: &mut L,
) -> bool {
    for ev in events {
        match *ev {
            PickEvent::Touch(c) => listener.on_color_touch(c),
            PickEvent::Click(c) => listener.on_color_click(c),
        }
    }
    !events.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Counter {
        touches: u32,
        clicks: u32,
    }

    impl PickListener<u8> for Counter {
        fn on_color_touch(&mut self, _: u8) {
            self.touches += 1;
        }
        fn on_color_click(&mut self, _: u8) {
            self.clicks += 1;
        }
    }

    #[test]
    fn dispatch_preserves_order() {
        let events = [PickEvent::Touch(1), PickEvent::Touch(2), PickEvent::Click(2)];
        let mut seen: Vec<PickEvent<u8>> = Vec::new();
        assert!(dispatch(&events, &mut seen));
        assert_eq!(seen, vec![PickEvent::Touch(1), PickEvent::Touch(2), PickEvent::Click(2)]);
    }

    #[test]
    fn dispatch_counts_and_reports_empty() {
        let mut counter = Counter::default();
        assert!(!dispatch::<u8, _>(&[], &mut counter));
        dispatch(&[PickEvent::Touch(0), PickEvent::Click(0)], &mut counter);
        assert_eq!((counter.touches, counter.clicks), (1, 1));
    }

    #[test]
    fn event_color() {
        assert_eq!(PickEvent::Click(9_u8).color(), 9);
        assert_eq!(PointerEvent::up(1.0, 2.0).action, PointerAction::Up);
    }
}
