// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=honeycomb_picker --heading-base-level=0

//! Honeycomb Picker: hexagon grid and color bar pickers on top of Kurbo.
//!
//! This crate is the thin adapter between the pure geometry in
//! [`honeycomb_layout`], the gesture state machines in [`honeycomb_gesture`],
//! and whatever toolkit hosts the widget. It owns configuration, caches
//! derived geometry, draws through a small [`Surface`] trait, and turns
//! pointer samples into pick events.
//!
//! - [`HexPicker`]: a honeycomb of swatches. Clicks require press and release
//!   on the same color. Hit testing is analytic by default, or raster via a
//!   hit map ([`HitStrategy`]).
//! - [`BarPicker`]: a segmented bar with a thumb. Dragging updates the
//!   selection, and every release over a segment clicks.
//!
//! ## Caching and invalidation
//!
//! Geometry lives in a [`Memo`] keyed by everything it depends on (size,
//! padding, radius or bar mode, and a palette version). It is recomputed on the
//! first query after a key change, never eagerly. Setters record what they
//! invalidated as [`Invalidation`] flags; hosts drain them with
//! `take_invalidation` to schedule repaints.
//!
//! ## Example
//!
//! ```rust
//! use honeycomb_picker::{DrawOp, HexPicker, PickEvent, PointerEvent};
//! use honeycomb_picker::Color;
//! use kurbo::Size;
//!
//! let mut picker = HexPicker::new();
//! picker.set_colors([Color::rgb(230, 57, 70), Color::rgb(69, 123, 157)]);
//! picker.set_size(Size::new(300.0, 300.0));
//!
//! let mut ops: Vec<DrawOp> = Vec::new();
//! picker.render(&mut ops).unwrap();
//! assert_eq!(ops.len(), 19);
//!
//! let down = picker.handle_pointer(PointerEvent::down(150.0, 150.0));
//! let up = picker.handle_pointer(PointerEvent::up(150.0, 150.0));
//! assert!(matches!(down[..], [PickEvent::Touch(_)]));
//! assert!(matches!(up[..], [PickEvent::Touch(_), PickEvent::Click(_)]));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo.
//! - `libm`: `no_std` float math through Kurbo.
//! - `random` (default): OS-seeded fallback palettes and `new()` constructors.
//! - `serde`: serialize styles.

#![no_std]

extern crate alloc;

mod bar;
mod cache;
mod hex;
mod surface;

pub use bar::{BarPicker, BarStyle};
pub use cache::{CacheStats, Invalidation, Memo};
pub use hex::{HexPicker, HexStyle, HitStrategy, MAX_HIT_MAP_CELLS};
pub use surface::{Blend, DrawOp, PixelBuffer, Surface};

pub use honeycomb_gesture::drag::DragConfig;
pub use honeycomb_gesture::types::{PickEvent, PickListener, PointerAction, PointerEvent, dispatch};
pub use honeycomb_layout::{BarEnd, BarMode, Color, ColorSource, ConfigError};
