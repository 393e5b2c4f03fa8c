// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press latch: click gating by matching press and release colors.
//!
//! ## Usage
//!
//! 1) Resolve the color under each pointer sample (for example with a grid hit test).
//! 2) Feed the action and resolved color to [`PressLatch::handle`].
//! 3) Forward the returned events to a listener.
//!
//! ```
//! use honeycomb_gesture::press::PressLatch;
//! use honeycomb_gesture::types::{PickEvent, PointerAction};
//!
//! let mut latch = PressLatch::new();
//! assert_eq!(latch.handle(PointerAction::Down, Some('a')), vec![PickEvent::Touch('a')]);
//! assert_eq!(latch.handle(PointerAction::Move, Some('b')), vec![PickEvent::Touch('b')]);
//! assert_eq!(
//!     latch.handle(PointerAction::Up, Some('a')),
//!     vec![PickEvent::Touch('a'), PickEvent::Click('a')]
//! );
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::types::{PickEvent, PointerAction};

/// Remembers the color under the initial press.
///
/// A release emits a click only when the color under the release equals the
/// latched color; moving across other colors in between is allowed.
/// Samples over no color emit nothing and leave the latch as is, except that
/// any release or cancel clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PressLatch<C: Copy + PartialEq> {
    pressed: Option<C>,
}

impl<C: Copy + PartialEq> PressLatch<C> {
    /// Create an unlatched state.
    pub fn new() -> Self {
        Self { pressed: None }
    }

    /// The color latched by the current press, if any.
    pub fn pressed(&self) -> Option<C> {
        self.pressed
    }

    /// Clear the latch without emitting anything.
    pub fn reset(&mut self) {
        self.pressed = None;
    }

    /// Process one sample with the color resolved under it.
    pub fn handle(&mut self, action: PointerAction, hit: Option<C>) -> Vec<PickEvent<C>> {
        if action == PointerAction::Cancel {
            self.pressed = None;
            return Vec::new();
        }
        let Some(color) = hit else {
            if action == PointerAction::Up {
                self.pressed = None;
            }
            return Vec::new();
        };

        let mut out = vec![PickEvent::Touch(color)];
        match action {
            PointerAction::Down => self.pressed = Some(color),
            PointerAction::Up => {
                if self.pressed.take() == Some(color) {
                    out.push(PickEvent::Click(color));
                }
            }
            PointerAction::Move | PointerAction::Cancel => {}
        }
        out
    }
}
