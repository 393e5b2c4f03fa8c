// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking for seek-bar style pickers.
//!
//! Inside a scrolling ancestor a press is ambiguous: it may be the start of a
//! scroll. The tracker then waits until the pointer has moved more than the
//! touch slop along x before it starts tracking. Outside a scrolling ancestor
//! tracking starts on press.
//!
//! While tracking, every sample re-resolves the color and emits a touch. A
//! release emits a touch and then a click for the color under the release
//! point. A release that was never tracked (a tap) is tracked on the spot.
//! Cancel stops tracking silently.

use alloc::vec::Vec;

use kurbo::Point;

use crate::types::{PickEvent, PointerAction, PointerEvent};

/// Default drag tolerance in logical pixels.
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

/// Drag tracker configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragConfig {
    /// Distance along x the pointer has to travel before a drag starts when
    /// inside a scrolling ancestor.
    pub touch_slop: f64,
    /// Whether the widget sits inside a scrolling ancestor.
    pub in_scrolling_container: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            touch_slop: DEFAULT_TOUCH_SLOP,
            in_scrolling_container: false,
        }
    }
}

/// Drag state for a single pointer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragTracker {
    config: DragConfig,
    dragging: bool,
    down_x: f64,
}

impl DragTracker {
    /// Create an idle tracker.
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            dragging: false,
            down_x: 0.0,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> DragConfig {
        self.config
    }

    /// Replace the configuration. Takes effect on the next press.
    pub fn set_config(&mut self, config: DragConfig) {
        self.config = config;
    }

    /// Whether a drag is being tracked.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Process one sample, resolving colors with `resolve` as needed.
    pub fn handle<C: Copy>(
        &mut self,
        event: PointerEvent,
        mut resolve: impl FnMut(Point) -> Option<C>,
    ) -> Vec<PickEvent<C>> {
        let mut out = Vec::new();
        match event.action {
            PointerAction::Down => {
                self.down_x = event.pos.x;
                if !self.config.in_scrolling_container {
                    self.start(event, &mut resolve, &mut out);
                }
            }
            PointerAction::Move => {
                if self.dragging {
                    track(event, &mut resolve, &mut out);
                } else if self.beyond_slop(event.pos.x) {
                    self.start(event, &mut resolve, &mut out);
                }
            }
            PointerAction::Up => {
                // Untracked releases are taps: track them once on the spot.
                track(event, &mut resolve, &mut out);
                self.dragging = false;
            }
            PointerAction::Cancel => {
                self.dragging = false;
            }
        }
        out
    }

    fn beyond_slop(&self, x: f64) -> bool {
        let dx = x - self.down_x;
        dx > self.config.touch_slop || -dx > self.config.touch_slop
    }

    fn start<C: Copy>(
        &mut self,
        event: PointerEvent,
        resolve: &mut impl FnMut(Point) -> Option<C>,
        out: &mut Vec<PickEvent<C>>,
    ) {
        log::debug!("drag started at x = {}", event.pos.x);
        self.dragging = true;
        track(event, resolve, out);
    }
}

fn track<C: Copy>(
    event: PointerEvent,
    resolve: &mut impl FnMut(Point) -> Option<C>,
    out: &mut Vec<PickEvent<C>>,
) {
    let Some(color) = resolve(event.pos) else {
        return;
    };
    out.push(PickEvent::Touch(color));
    if event.action == PointerAction::Up {
        out.push(PickEvent::Click(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    // Three 10px wide segments; nothing past x = 30.
    fn segment(p: Point) -> Option<char> {
        match p.x {
            x if x < 0.0 => None,
            x if x <= 10.0 => Some('a'),
            x if x <= 20.0 => Some('b'),
            x if x <= 30.0 => Some('c'),
            _ => None,
        }
    }

    fn scrolling() -> DragTracker {
        DragTracker::new(DragConfig {
            touch_slop: 4.0,
            in_scrolling_container: true,
        })
    }

    #[test]
    fn press_starts_drag_outside_scrolling_container() {
        let mut t = DragTracker::default();
        assert_eq!(t.handle(PointerEvent::down(5.0, 0.0), segment), vec![PickEvent::Touch('a')]);
        assert!(t.is_dragging());
        assert_eq!(t.handle(PointerEvent::moved(15.0, 0.0), segment), vec![PickEvent::Touch('b')]);
        assert_eq!(
            t.handle(PointerEvent::up(25.0, 0.0), segment),
            vec![PickEvent::Touch('c'), PickEvent::Click('c')]
        );
        assert!(!t.is_dragging());
    }

    #[test]
    fn release_clicks_without_matching_the_press() {
        let mut t = DragTracker::default();
        let _ = t.handle(PointerEvent::down(5.0, 0.0), segment);
        let _ = t.handle(PointerEvent::moved(15.0, 0.0), segment);
        // Back on the pressed color: click for what is under the release.
        assert_eq!(
            t.handle(PointerEvent::up(6.0, 0.0), segment),
            vec![PickEvent::Touch('a'), PickEvent::Click('a')]
        );
        // Released elsewhere: still a click, for that color.
        let _ = t.handle(PointerEvent::down(5.0, 0.0), segment);
        assert_eq!(
            t.handle(PointerEvent::up(16.0, 0.0), segment),
            vec![PickEvent::Touch('b'), PickEvent::Click('b')]
        );
    }

    #[test]
    fn scrolling_container_waits_for_slop() {
        let mut t = scrolling();
        assert!(t.handle(PointerEvent::down(5.0, 0.0), segment).is_empty());
        assert!(!t.is_dragging());
        assert!(t.handle(PointerEvent::moved(8.0, 40.0), segment).is_empty());
        assert!(!t.is_dragging(), "within slop along x");
        assert_eq!(t.handle(PointerEvent::moved(9.5, 0.0), segment), vec![PickEvent::Touch('a')]);
        assert!(t.is_dragging());
        assert_eq!(t.handle(PointerEvent::moved(12.0, 0.0), segment), vec![PickEvent::Touch('b')]);
    }

    #[test]
    fn slop_applies_in_both_directions() {
        let mut t = scrolling();
        let _ = t.handle(PointerEvent::down(20.0, 0.0), segment);
        assert!(t.handle(PointerEvent::moved(16.0, 0.0), segment).is_empty());
        assert_eq!(t.handle(PointerEvent::moved(15.0, 0.0), segment), vec![PickEvent::Touch('b')]);
    }

    #[test]
    fn tap_in_scrolling_container_clicks() {
        let mut t = scrolling();
        assert!(t.handle(PointerEvent::down(25.0, 0.0), segment).is_empty());
        assert_eq!(
            t.handle(PointerEvent::up(25.0, 0.0), segment),
            vec![PickEvent::Touch('c'), PickEvent::Click('c')]
        );
        assert!(!t.is_dragging());
    }

    #[test]
    fn cancel_stops_silently() {
        let mut t = DragTracker::default();
        let _ = t.handle(PointerEvent::down(5.0, 0.0), segment);
        assert!(t.handle(PointerEvent::cancel(15.0, 0.0), segment).is_empty());
        assert!(!t.is_dragging());
    }

    #[test]
    fn unresolved_samples_emit_nothing_but_keep_tracking() {
        let mut t = DragTracker::default();
        let _ = t.handle(PointerEvent::down(5.0, 0.0), segment);
        assert!(t.handle(PointerEvent::moved(50.0, 0.0), segment).is_empty());
        assert!(t.is_dragging());
        assert!(t.handle(PointerEvent::up(50.0, 0.0), segment).is_empty());
        assert!(!t.is_dragging());
    }
}
