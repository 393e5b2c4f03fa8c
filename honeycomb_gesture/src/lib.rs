// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=honeycomb_gesture --heading-base-level=0

//! Honeycomb Gesture: deterministic, `no_std` pointer gesture state for color pickers.
//!
//! ## Overview
//!
//! This crate turns raw pointer samples into color pick notifications.
//! It does not perform hit testing. Instead, you resolve the color under each
//! sample (for example with a hexagon grid or a bar layout) and the state
//! machines here decide which [`PickEvent`](crate::types::PickEvent)s to emit.
//!
//! Two policies are provided:
//!
//! - [`PressLatch`](crate::press::PressLatch) emits a touch for every sample
//!   over a color and a click only when the release lands on the color that
//!   was pressed. Grids use this.
//! - [`DragTracker`](crate::drag::DragTracker) emits touches while dragging and
//!   a click for whatever color is under the release point. It can defer the
//!   start of a drag past a touch slop when the widget sits inside a scrolling
//!   ancestor. Bars use this.
//!
//! Both return events as a `Vec` in emission order; forward them with
//! [`dispatch`](crate::types::dispatch) to any [`PickListener`](crate::types::PickListener).
//!
//! ## Example
//!
//! ```
//! use honeycomb_gesture::drag::{DragConfig, DragTracker};
//! use honeycomb_gesture::types::{PickEvent, PointerEvent};
//!
//! let mut drag = DragTracker::new(DragConfig::default());
//! let resolve = |p: kurbo::Point| (p.x >= 0.0).then_some(if p.x < 50.0 { 0 } else { 1 });
//!
//! assert_eq!(drag.handle(PointerEvent::down(10.0, 5.0), resolve), vec![PickEvent::Touch(0)]);
//! assert_eq!(drag.handle(PointerEvent::moved(70.0, 5.0), resolve), vec![PickEvent::Touch(1)]);
//! assert_eq!(
//!     drag.handle(PointerEvent::up(70.0, 5.0), resolve),
//!     vec![PickEvent::Touch(1), PickEvent::Click(1)]
//! );
//! ```
//!
//! ## Cancelation
//!
//! A [`PointerAction::Cancel`](crate::types::PointerAction::Cancel) sample
//! resets either state machine and emits nothing.

#![no_std]

extern crate alloc;

pub mod drag;
pub mod press;
pub mod types;
