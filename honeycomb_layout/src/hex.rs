// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hexagon-shaped swatch grids: cell counts, center generation, and hit testing.
//!
//! ## Layout
//!
//! A grid of ring radius `r` is a big hexagon made of `3r(r - 1) + 1` point-up
//! cells. Cells are emitted row by row, where a "row" is a diagonal line of
//! cells running up and to the right. Row lengths grow from `r` to `2r - 1`
//! and shrink back to `r`:
//!
//! ```text
//! r = 3:  3, 4, 5, 4, 3   (19 cells)
//! ```
//!
//! Emission order is part of the contract: cell `i` takes palette entry
//! `i % palette.len()`.
//!
//! ## Hit testing
//!
//! [`HexGrid::hit_test`] uses each cell's inscribed circle (radius half the
//! cell width). Inscribed circles of neighbors touch but never overlap, so at
//! most one cell matches a point. The thin corner regions of each hexagon
//! outside its inscribed circle report no cell.

use alloc::vec::Vec;

use kurbo::{BezPath, Point, Rect, Size, Vec2};

use crate::color::Color;
use crate::error::ConfigError;
use crate::path::{hexagon_path, hexagon_vertices};

/// `sqrt(3)`, the ratio between a hexagon's width across flats and its circumradius.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Number of cells in a grid of the given ring radius.
///
/// Returns `0` for radius `0`. Saturates at `usize::MAX`.
pub const fn cell_count(radius: u32) -> usize {
    if radius == 0 {
        return 0;
    }
    let r = radius as usize;
    3usize.saturating_mul(r).saturating_mul(r - 1).saturating_add(1)
}

/// Row lengths of a grid, in emission order.
///
/// Empty for radius `0`.
pub fn row_lengths(radius: u32) -> impl Iterator<Item = usize> + Clone {
    let r = radius as usize;
    let widest = (2 * r).saturating_sub(1);
    (r..widest).chain((r..=widest).rev()).filter(|&len| len > 0)
}

/// Cell dimensions derived from the drawing area and ring radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellMetrics {
    /// Width of a cell across its flat sides; also the distance between
    /// neighboring centers.
    pub width: f64,
    /// Distance from a cell's center to any of its vertices.
    pub circumradius: f64,
}

impl CellMetrics {
    /// Metrics for a grid filling the shorter side of `size`.
    ///
    /// Returns `None` when the area has no positive extent.
    pub fn for_area(size: Size, radius: u32) -> Option<Self> {
        let draw_size = size.min_side();
        if radius == 0 || draw_size.is_nan() || draw_size <= 0.0 {
            return None;
        }
        let width = draw_size / (2.0 * f64::from(radius) - 1.0);
        Some(Self {
            width,
            circumradius: width / SQRT_3,
        })
    }

    /// Radius of each cell's inscribed circle (half the cell width).
    pub fn inradius(&self) -> f64 {
        self.width / 2.0
    }
}

/// Compute the ordered cell centers for a grid centered in `size`.
///
/// Coordinates are local to the area (origin at its top-left corner). An area
/// with no positive extent yields no centers.
pub fn compute_centers(size: Size, radius: u32) -> Result<Vec<Point>, ConfigError> {
    ConfigError::check_radius(radius)?;
    let mut out = Vec::new();
    if let Some(metrics) = CellMetrics::for_area(size, radius) {
        out.reserve_exact(cell_count(radius));
        push_centers(&mut out, Point::ORIGIN, size, radius, metrics);
    }
    Ok(out)
}

fn push_centers(out: &mut Vec<Point>, origin: Point, size: Size, radius: u32, m: CellMetrics) {
    let r = radius as usize;
    let widest = 2 * r - 1;
    let along_row = Vec2::new(m.width / 2.0, -1.5 * m.circumradius);
    let mut start = Point::new(
        origin.x + size.width / 2.0 - (r - 1) as f64 * m.width,
        origin.y + size.height / 2.0,
    );
    for len in r..widest {
        push_row(out, start, along_row, len);
        start += Vec2::new(m.width / 2.0, 1.5 * m.circumradius);
    }
    for len in (r..=widest).rev() {
        push_row(out, start, along_row, len);
        start += Vec2::new(m.width, 0.0);
    }
}

fn push_row(out: &mut Vec<Point>, start: Point, step: Vec2, len: usize) {
    out.extend((0..len).map(|i| start + step * i as f64));
}

/// One swatch of a grid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexCell {
    /// Center in area coordinates.
    pub center: Point,
    /// Fill color.
    pub color: Color,
    /// Position in emission order.
    pub index: usize,
}

/// A laid-out grid: cell centers and colors stored side by side.
///
/// The cell index is the only join key between geometry and color.
#[derive(Clone, Debug, PartialEq)]
pub struct HexGrid {
    area: Rect,
    radius: u32,
    metrics: Option<CellMetrics>,
    centers: Vec<Point>,
    colors: Vec<Color>,
}

impl HexGrid {
    /// Lay out a grid of `radius` rings centered in `area`.
    ///
    /// Cell `i` is colored `palette[i % palette.len()]`. An `area` with no
    /// positive extent produces an empty grid rather than an error.
    pub fn new(area: Rect, radius: u32, palette: &[Color]) -> Result<Self, ConfigError> {
        ConfigError::check_radius(radius)?;
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let metrics = CellMetrics::for_area(area.size(), radius);
        let mut centers = Vec::new();
        match metrics {
            Some(m) => {
                centers.reserve_exact(cell_count(radius));
                push_centers(&mut centers, area.origin(), area.size(), radius, m);
                log::debug!(
                    "laid out {} cells for radius {radius} in {area:?}",
                    centers.len()
                );
            }
            None => log::warn!("degenerate grid area {area:?}; no cells laid out"),
        }
        let colors = (0..centers.len())
            .map(|i| palette[i % palette.len()])
            .collect();
        Ok(Self {
            area,
            radius,
            metrics,
            centers,
            colors,
        })
    }

    /// The drawing area the grid was laid out in.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Ring radius.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Cell metrics, or `None` for a degenerate area.
    pub fn metrics(&self) -> Option<CellMetrics> {
        self.metrics
    }

    /// Distance from a cell center to its vertices (`0` when empty).
    pub fn circumradius(&self) -> f64 {
        self.metrics.map_or(0.0, |m| m.circumradius)
    }

    /// Width of a cell across flats (`0` when empty).
    pub fn cell_width(&self) -> f64 {
        self.metrics.map_or(0.0, |m| m.width)
    }

    /// Number of laid-out cells.
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// True if no cells were laid out.
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Cell centers in emission order.
    pub fn centers(&self) -> &[Point] {
        &self.centers
    }

    /// Cell colors in emission order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The cell at `index`.
    pub fn cell(&self, index: usize) -> Option<HexCell> {
        Some(HexCell {
            center: *self.centers.get(index)?,
            color: self.colors[index],
            index,
        })
    }

    /// Iterate cells in emission order.
    pub fn cells(&self) -> impl ExactSizeIterator<Item = HexCell> + '_ {
        self.centers
            .iter()
            .zip(&self.colors)
            .enumerate()
            .map(|(index, (&center, &color))| HexCell {
                center,
                color,
                index,
            })
    }

    /// Vertices of the cell at `index`.
    pub fn vertices(&self, index: usize) -> Option<[Point; 6]> {
        let center = *self.centers.get(index)?;
        Some(hexagon_vertices(center, self.circumradius()))
    }

    /// Outline path of the cell at `index`.
    pub fn path(&self, index: usize) -> Option<BezPath> {
        let center = *self.centers.get(index)?;
        Some(hexagon_path(center, self.circumradius()))
    }

    /// Index of the cell whose inscribed circle strictly contains `pt`.
    ///
    /// Points outside the drawing area never hit.
    pub fn hit_test(&self, pt: Point) -> Option<usize> {
        let m = self.metrics?;
        if !self.area.contains(pt) {
            return None;
        }
        let r = m.inradius();
        let r2 = r * r;
        let hit = self.centers.iter().position(|&c| (pt - c).hypot2() < r2);
        log::trace!("hit test at {pt:?} -> {hit:?}");
        hit
    }

    /// Color of the cell under `pt`, if any.
    pub fn color_at(&self, pt: Point) -> Option<Color> {
        self.hit_test(pt).map(|i| self.colors[i])
    }
}
