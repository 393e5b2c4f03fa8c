// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hexagon grid picker.

use alloc::boxed::Box;
use alloc::vec::Vec;

use honeycomb_gesture::press::PressLatch;
use honeycomb_gesture::types::{PickEvent, PointerEvent};
use honeycomb_layout::{Color, ColorSource, ConfigError, HexGrid, cell_count};
use kurbo::{Insets, Point, Rect, Size};

use crate::cache::{CacheStats, Invalidation, Memo};
use crate::surface::{PixelBuffer, Surface};

/// How pointer positions are resolved to cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitStrategy {
    /// Inscribed-circle test against cell centers.
    ///
    /// Misses the six corners of each hexagon, never touches pixels.
    #[default]
    Analytic,
    /// Lookup in an offscreen hit map rasterized from the cell shapes.
    ///
    /// Exact to the rasterized hexagons. Costs one buffer the size of the widget.
    Raster,
}

/// Visual and behavioral settings of a [`HexPicker`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexStyle {
    /// Ring radius. At least 1.
    pub radius: u32,
    /// Outline width. `0` draws no outline.
    pub stroke_width: f64,
    /// Outline color.
    pub stroke_color: Color,
    /// Hit testing strategy.
    pub hit_strategy: HitStrategy,
    /// Space between the widget bounds and the drawing area.
    pub padding: Insets,
}

impl Default for HexStyle {
    fn default() -> Self {
        Self {
            radius: 3,
            stroke_width: 0.0,
            stroke_color: Color::TRANSPARENT,
            hit_strategy: HitStrategy::Analytic,
            padding: Insets::ZERO,
        }
    }
}

impl HexStyle {
    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_radius(self.radius)?;
        ConfigError::check_length("stroke width", self.stroke_width)?;
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct GridKey {
    size: Size,
    padding: Insets,
    radius: u32,
    palette_version: u64,
}

/// A honeycomb of hexagonal swatches.
///
/// Geometry is computed lazily on the first query after a change and cached
/// until size, padding, radius, or palette change. Pointer samples are gated
/// by a [`PressLatch`]: a click fires only when the release lands on the
/// color that was pressed.
pub struct HexPicker {
    style: HexStyle,
    size: Size,
    palette: Vec<Color>,
    palette_version: u64,
    fallback: Vec<Color>,
    source: Box<dyn ColorSource>,
    grid: Memo<GridKey, HexGrid>,
    hit_map: Memo<GridKey, PixelBuffer>,
    latch: PressLatch<Color>,
    invalid: Invalidation,
}

impl core::fmt::Debug for HexPicker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HexPicker")
            .field("style", &self.style)
            .field("size", &self.size)
            .field("palette_len", &self.palette.len())
            .field("palette_version", &self.palette_version)
            .field("grid", &self.grid)
            .field("invalid", &self.invalid)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "random")]
impl Default for HexPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl HexPicker {
    /// A picker with default style and a random fallback palette.
    #[cfg(feature = "random")]
    pub fn new() -> Self {
        Self::with_color_source(honeycomb_layout::RandomColors::from_os_rng())
    }

    /// A picker with default style that draws fallback colors from `source`.
    pub fn with_color_source(source: impl ColorSource + 'static) -> Self {
        Self {
            style: HexStyle::default(),
            size: Size::ZERO,
            palette: Vec::new(),
            palette_version: 0,
            fallback: Vec::new(),
            source: Box::new(source),
            grid: Memo::new(),
            hit_map: Memo::new(),
            latch: PressLatch::new(),
            invalid: Invalidation::LAYOUT,
        }
    }

    /// Current style.
    pub fn style(&self) -> HexStyle {
        self.style
    }

    /// Replace the whole style. Nothing changes if `style` is invalid.
    pub fn set_style(&mut self, style: HexStyle) -> Result<(), ConfigError> {
        style.validate()?;
        if style == self.style {
            return Ok(());
        }
        let old = core::mem::replace(&mut self.style, style);
        if old.radius != style.radius || old.padding != style.padding {
            self.invalid |= Invalidation::LAYOUT;
        } else if old.hit_strategy != style.hit_strategy {
            self.invalid |= Invalidation::HIT_MAP;
        } else {
            self.invalid |= Invalidation::REDRAW;
        }
        Ok(())
    }

    /// Set the ring radius.
    pub fn set_radius(&mut self, radius: u32) -> Result<(), ConfigError> {
        self.set_style(HexStyle {
            radius,
            ..self.style
        })
    }

    /// Set the outline width. `0` disables the outline.
    pub fn set_stroke_width(&mut self, stroke_width: f64) -> Result<(), ConfigError> {
        self.set_style(HexStyle {
            stroke_width,
            ..self.style
        })
    }

    /// Set the outline color.
    pub fn set_stroke_color(&mut self, stroke_color: Color) {
        if stroke_color != self.style.stroke_color {
            self.style.stroke_color = stroke_color;
            self.invalid |= Invalidation::REDRAW;
        }
    }

    /// Set the hit testing strategy.
    pub fn set_hit_strategy(&mut self, hit_strategy: HitStrategy) {
        if hit_strategy != self.style.hit_strategy {
            self.style.hit_strategy = hit_strategy;
            self.invalid |= Invalidation::HIT_MAP;
        }
    }

    /// Set the padding around the drawing area.
    pub fn set_padding(&mut self, padding: Insets) {
        if padding != self.style.padding {
            self.style.padding = padding;
            self.invalid |= Invalidation::LAYOUT;
        }
    }

    /// Replace the palette.
    ///
    /// Cells cycle through `colors` in order. An empty list switches back to
    /// the fallback palette.
    pub fn set_colors(&mut self, colors: impl Into<Vec<Color>>) {
        self.palette = colors.into();
        self.palette_version += 1;
        self.invalid |= Invalidation::LAYOUT;
    }

    /// The palette set by the host, empty when the fallback is in use.
    pub fn colors(&self) -> &[Color] {
        &self.palette
    }

    /// Widget size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize the widget.
    pub fn set_size(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            self.invalid |= Invalidation::LAYOUT;
        }
    }

    /// Preferred size within `available`: the largest square drawing area
    /// that fits, plus padding.
    pub fn measure(&self, available: Size) -> Size {
        let pad = self.style.padding;
        let side = (available.width - pad.x_value())
            .min(available.height - pad.y_value())
            .max(0.0);
        Size::new(side + pad.x_value(), side + pad.y_value())
    }

    /// Drain the accumulated invalidation flags.
    pub fn take_invalidation(&mut self) -> Invalidation {
        core::mem::take(&mut self.invalid)
    }

    /// Whether a repaint has been requested since the last drain.
    pub fn needs_redraw(&self) -> bool {
        self.invalid.contains(Invalidation::REDRAW)
    }

    /// Geometry cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.grid.stats()
    }

    fn key(&self) -> GridKey {
        GridKey {
            size: self.size,
            padding: self.style.padding,
            radius: self.style.radius,
            palette_version: self.palette_version,
        }
    }

    fn draw_area(&self) -> Rect {
        self.size.to_rect() - self.style.padding
    }

    fn fill_fallback(&mut self) {
        if self.palette.is_empty() && self.fallback.is_empty() {
            let count = cell_count(self.style.radius);
            self.fallback = self.source.palette(count);
            log::debug!("filled fallback palette with {count} colors");
        }
    }

    /// The laid-out grid, recomputed if anything it depends on changed.
    pub fn grid(&mut self) -> Result<&HexGrid, ConfigError> {
        self.fill_fallback();
        let (key, area, radius) = (self.key(), self.draw_area(), self.style.radius);
        let palette = if self.palette.is_empty() {
            &self.fallback
        } else {
            &self.palette
        };
        self.grid
            .get_or_try_insert_with(key, || HexGrid::new(area, radius, palette))
    }

    fn hit_map(&mut self) -> Result<&PixelBuffer, ConfigError> {
        self.fill_fallback();
        let (key, area, radius) = (self.key(), self.draw_area(), self.style.radius);
        let size = self.size;
        let palette = if self.palette.is_empty() {
            &self.fallback
        } else {
            &self.palette
        };
        let grid = self
            .grid
            .get_or_try_insert_with(key, || HexGrid::new(area, radius, palette))?;
        self.hit_map
            .get_or_try_insert_with(key, || Ok(rasterize_ids(grid, size)))
    }

    /// Index of the cell under `pt`, using the configured strategy.
    ///
    /// The raster strategy falls back to the analytic test when the grid has
    /// more than [`MAX_HIT_MAP_CELLS`] cells or the hit map could not be
    /// allocated.
    pub fn hit_test(&mut self, pt: Point) -> Option<usize> {
        let strategy = self.style.hit_strategy;
        let grid = self.grid().ok()?;
        if strategy == HitStrategy::Analytic || grid.len() > MAX_HIT_MAP_CELLS {
            return grid.hit_test(pt);
        }
        if !grid.area().contains(pt) {
            return None;
        }
        let sample = {
            let map = self.hit_map().ok()?;
            (!map.pixels().is_empty()).then(|| map.sample(pt))
        };
        let Some(sample) = sample else {
            return self.grid().ok()?.hit_test(pt);
        };
        let hit = index_of(sample);
        log::trace!("raster hit test at {pt:?} -> {hit:?}");
        hit
    }

    /// Color of the cell under `pt`.
    pub fn color_at(&mut self, pt: Point) -> Option<Color> {
        let i = self.hit_test(pt)?;
        self.grid().ok()?.colors().get(i).copied()
    }

    /// Feed one pointer sample.
    ///
    /// Returns a touch for every sample over a cell, followed by a click when
    /// a release lands on the pressed color.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Vec<PickEvent<Color>> {
        let hit = self.color_at(event.pos);
        self.latch.handle(event.action, hit)
    }

    /// Draw the cells, then their outlines if enabled.
    pub fn render(&mut self, surface: &mut impl Surface) -> Result<(), ConfigError> {
        let HexStyle {
            stroke_width,
            stroke_color,
            ..
        } = self.style;
        let grid = self.grid()?;
        let paths: Vec<_> = (0..grid.len()).filter_map(|i| grid.path(i)).collect();
        for (path, &color) in paths.iter().zip(grid.colors()) {
            surface.fill_path(path, color);
        }
        if stroke_width > 0.0 {
            for path in &paths {
                surface.stroke_path(path, stroke_width, stroke_color);
            }
        }
        Ok(())
    }
}

/// Paint every cell with its id color. Outlines are left off.
fn rasterize_ids(grid: &HexGrid, size: Size) -> PixelBuffer {
    let mut map = PixelBuffer::for_size(size);
    for i in 0..grid.len() {
        if let Some(path) = grid.path(i) {
            map.fill_path(&path, index_color(i));
        }
    }
    log::debug!("rasterized hit map for {} cells", grid.len());
    map
}

/// Largest grid the raster hit map can encode; ids use the 24 color bits.
pub const MAX_HIT_MAP_CELLS: usize = 0x00ff_ffff;

/// Hit map encoding: cell `i` is painted as opaque `i + 1`, transparent means no cell.
///
/// Only meaningful for `index < MAX_HIT_MAP_CELLS`.
fn index_color(index: usize) -> Color {
    let id = u32::try_from(index + 1).unwrap_or(u32::MAX) & 0x00ff_ffff;
    Color::from_argb(0xff00_0000 | id)
}

fn index_of(color: Color) -> Option<usize> {
    if color.is_transparent() {
        return None;
    }
    let id = usize::try_from(color.to_argb() & 0x00ff_ffff).ok()?;
    id.checked_sub(1)
}
