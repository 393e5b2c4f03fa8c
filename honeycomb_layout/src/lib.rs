// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=honeycomb_layout --heading-base-level=0

//! Honeycomb Layout: geometry for hexagon swatch grids and segmented color bars.
//!
//! This crate is the pure computational core of a color picker. It has no
//! notion of widgets, surfaces, or events; it turns a drawing area and a few
//! parameters into positions, and positions back into palette indices.
//!
//! - [`HexGrid`] lays out `3r(r - 1) + 1` point-up hexagons in a big hexagon of
//!   ring radius `r`, centered in a drawing area, and hit tests pointers.
//! - [`hexagon_path`] and [`hexagon_vertices`] produce cell outlines.
//! - [`BarLayout`] splits a bar into per-color segments and hit tests along x.
//! - [`ColorSource`] abstracts fallback palettes; [`RandomColors`] (feature
//!   `random`) is the default.
//!
//! # Example
//!
//! ```rust
//! use honeycomb_layout::{Color, HexGrid, cell_count};
//! use kurbo::Rect;
//!
//! let palette = [Color::rgb(230, 57, 70), Color::rgb(69, 123, 157)];
//! let grid = HexGrid::new(Rect::new(0.0, 0.0, 300.0, 300.0), 3, &palette).unwrap();
//! assert_eq!(grid.len(), cell_count(3));
//!
//! // Rows run 3, 4, 5, 4, 3; the middle cell is the third of the widest row.
//! assert_eq!(grid.hit_test(kurbo::Point::new(150.0, 150.0)), Some(3 + 4 + 2));
//! assert_eq!(grid.hit_test(kurbo::Point::new(1.0, 1.0)), None);
//! ```
//!
//! ## Degenerate areas
//!
//! A drawing area with no positive width or height is not an error: it lays
//! out nothing and every hit test misses. Widgets are routinely laid out at
//! zero size for a frame or two.
//!
//! ### Float semantics
//!
//! Hit tests treat NaN coordinates as misses. Geometry assumes finite inputs.

#![no_std]

extern crate alloc;

pub mod bar;
pub mod color;
pub mod error;
pub mod hex;
pub mod path;

pub use bar::{BarEnd, BarLayout, BarMode, BarSegment};
#[cfg(feature = "random")]
pub use color::RandomColors;
pub use color::{BAR_FALLBACK_LEN, Color, ColorSource, CycleColors};
pub use error::ConfigError;
pub use hex::{CellMetrics, HexCell, HexGrid, cell_count, compute_centers, row_lengths};
pub use path::{hexagon_path, hexagon_vertices};

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Rect};

    #[test]
    fn grid_and_bar_share_a_palette() {
        let palette = [Color::rgb(1, 2, 3), Color::rgb(4, 5, 6), Color::rgb(7, 8, 9)];
        let grid = HexGrid::new(Rect::new(0.0, 0.0, 100.0, 100.0), 2, &palette).unwrap();
        let bar = BarLayout::new(0.0, 100.0, palette.len(), BarMode::Auto, BarEnd::Unbounded)
            .unwrap();

        let center = grid.hit_test(Point::new(50.0, 50.0)).unwrap();
        assert_eq!(grid.colors()[center], palette[center % palette.len()]);
        assert_eq!(bar.hit_test(50.0), Some(1));
    }
}
