// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seek-bar style picker.

use alloc::boxed::Box;
use alloc::vec::Vec;

use honeycomb_gesture::drag::{DragConfig, DragTracker};
use honeycomb_gesture::types::{PickEvent, PointerEvent};
use honeycomb_layout::{
    BAR_FALLBACK_LEN, BarEnd, BarLayout, BarMode, Color, ColorSource, ConfigError,
};
use kurbo::{Circle, Insets, Point, Rect, RoundedRect, Size};

use crate::cache::{CacheStats, Invalidation, Memo};
use crate::surface::{Blend, Surface};

/// Halo radius relative to the thumb size.
const HALO_SCALE: f64 = 0.8;

/// Visual and behavioral settings of a [`BarPicker`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarStyle {
    /// Thumb diameter. `0` hides the thumb.
    pub thumb_size: f64,
    /// Bar thickness.
    pub bar_height: f64,
    /// Color of the rounded mask the segments are multiplied onto.
    pub mask_color: Color,
    /// Segment width policy.
    pub mode: BarMode,
    /// Policy for coordinates past the bar's end.
    pub end: BarEnd,
    /// Space between the widget bounds and the bar.
    pub padding: Insets,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            thumb_size: 24.0,
            bar_height: 16.0,
            mask_color: Color::WHITE,
            mode: BarMode::Auto,
            end: BarEnd::Unbounded,
            padding: Insets::ZERO,
        }
    }
}

impl BarStyle {
    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_length("thumb size", self.thumb_size)?;
        ConfigError::check_length("bar height", self.bar_height)?;
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct BarKey {
    size: Size,
    padding: Insets,
    mode: BarMode,
    end: BarEnd,
    palette_version: u64,
}

/// A horizontal bar of color segments with a draggable thumb.
///
/// Every completed gesture over a segment fires a click for the color under
/// the release point; there is no press/release matching.
pub struct BarPicker {
    style: BarStyle,
    size: Size,
    palette: Vec<Color>,
    palette_version: u64,
    selected: Option<Color>,
    source: Box<dyn ColorSource>,
    layout: Memo<BarKey, BarLayout>,
    drag: DragTracker,
    invalid: Invalidation,
}

impl core::fmt::Debug for BarPicker {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BarPicker")
            .field("style", &self.style)
            .field("size", &self.size)
            .field("palette_len", &self.palette.len())
            .field("selected", &self.selected)
            .field("drag", &self.drag)
            .field("invalid", &self.invalid)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "random")]
impl Default for BarPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl BarPicker {
    /// A picker with default style and a random fallback palette.
    #[cfg(feature = "random")]
    pub fn new() -> Self {
        Self::with_color_source(honeycomb_layout::RandomColors::from_os_rng())
    }

    /// A picker with default style that draws its fallback palette from `source`.
    pub fn with_color_source(source: impl ColorSource + 'static) -> Self {
        Self {
            style: BarStyle::default(),
            size: Size::ZERO,
            palette: Vec::new(),
            palette_version: 0,
            selected: None,
            source: Box::new(source),
            layout: Memo::new(),
            drag: DragTracker::default(),
            invalid: Invalidation::GEOMETRY | Invalidation::REDRAW,
        }
    }

    /// Current style.
    pub fn style(&self) -> BarStyle {
        self.style
    }

    /// Replace the whole style. Nothing changes if `style` is invalid.
    pub fn set_style(&mut self, style: BarStyle) -> Result<(), ConfigError> {
        style.validate()?;
        if style == self.style {
            return Ok(());
        }
        let old = core::mem::replace(&mut self.style, style);
        self.invalid |= Invalidation::REDRAW;
        if old.padding != style.padding || old.mode != style.mode || old.end != style.end {
            self.invalid |= Invalidation::GEOMETRY;
        }
        Ok(())
    }

    /// Set the thumb diameter.
    pub fn set_thumb_size(&mut self, thumb_size: f64) -> Result<(), ConfigError> {
        self.set_style(BarStyle {
            thumb_size,
            ..self.style
        })
    }

    /// Set the bar thickness.
    pub fn set_bar_height(&mut self, bar_height: f64) -> Result<(), ConfigError> {
        self.set_style(BarStyle {
            bar_height,
            ..self.style
        })
    }

    /// Set the mask color.
    pub fn set_mask_color(&mut self, mask_color: Color) {
        if mask_color != self.style.mask_color {
            self.style.mask_color = mask_color;
            self.invalid |= Invalidation::REDRAW;
        }
    }

    /// Set the segment width policy.
    pub fn set_mode(&mut self, mode: BarMode) {
        if mode != self.style.mode {
            self.style.mode = mode;
            self.invalid |= Invalidation::GEOMETRY | Invalidation::REDRAW;
        }
    }

    /// Set the policy for coordinates past the bar's end.
    pub fn set_end(&mut self, end: BarEnd) {
        if end != self.style.end {
            self.style.end = end;
            self.invalid |= Invalidation::GEOMETRY | Invalidation::REDRAW;
        }
    }

    /// Set the padding around the bar.
    pub fn set_padding(&mut self, padding: Insets) {
        if padding != self.style.padding {
            self.style.padding = padding;
            self.invalid |= Invalidation::GEOMETRY | Invalidation::REDRAW;
        }
    }

    /// Configure drag recognition.
    pub fn set_drag_config(&mut self, config: DragConfig) {
        self.drag.set_config(config);
    }

    /// Replace the palette and select its first color.
    pub fn set_colors(&mut self, colors: impl Into<Vec<Color>>) -> Result<(), ConfigError> {
        let colors = colors.into();
        let Some(&first) = colors.first() else {
            return Err(ConfigError::EmptyPalette);
        };
        self.palette = colors;
        self.palette_version += 1;
        self.selected = Some(first);
        self.invalid |= Invalidation::GEOMETRY | Invalidation::REDRAW;
        Ok(())
    }

    /// The palette, empty until set or first laid out.
    pub fn colors(&self) -> &[Color] {
        &self.palette
    }

    /// The selected color, if any.
    pub fn selected_color(&self) -> Option<Color> {
        self.selected
    }

    /// Select `color`. A color missing from the palette puts the thumb on the left edge.
    pub fn set_selected_color(&mut self, color: Color) {
        if self.selected != Some(color) {
            self.selected = Some(color);
            self.invalid |= Invalidation::REDRAW;
        }
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Widget size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Resize the widget.
    pub fn set_size(&mut self, size: Size) {
        if size != self.size {
            self.size = size;
            self.invalid |= Invalidation::GEOMETRY | Invalidation::REDRAW;
        }
    }

    /// Preferred height: the taller of thumb and bar, rounded up, plus vertical padding.
    pub fn measure_height(&self) -> f64 {
        let content = Size::new(0.0, self.style.thumb_size.max(self.style.bar_height)).ceil();
        content.height + self.style.padding.y_value()
    }

    /// Drain the accumulated invalidation flags.
    pub fn take_invalidation(&mut self) -> Invalidation {
        core::mem::take(&mut self.invalid)
    }

    /// Whether a repaint has been requested since the last drain.
    pub fn needs_redraw(&self) -> bool {
        self.invalid.contains(Invalidation::REDRAW)
    }

    /// Layout cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.layout.stats()
    }

    fn draw_area(&self) -> Rect {
        self.size.to_rect() - self.style.padding
    }

    fn key(&self) -> BarKey {
        BarKey {
            size: self.size,
            padding: self.style.padding,
            mode: self.style.mode,
            end: self.style.end,
            palette_version: self.palette_version,
        }
    }

    fn fill_fallback(&mut self) {
        if self.palette.is_empty() {
            self.palette = self.source.palette(BAR_FALLBACK_LEN);
            self.selected = self.palette.first().copied();
            log::debug!("filled fallback bar palette");
        }
    }

    /// The laid-out segments, recomputed if anything they depend on changed.
    pub fn layout(&mut self) -> Result<&BarLayout, ConfigError> {
        self.fill_fallback();
        let key = self.key();
        let area = self.draw_area();
        let count = self.palette.len();
        self.layout.get_or_try_insert_with(key, || {
            BarLayout::new(area.x0, area.width(), count, key.mode, key.end)
        })
    }

    /// Color of the segment under `pt`. Only the x coordinate matters.
    pub fn color_at(&mut self, pt: Point) -> Option<Color> {
        let i = self.layout().ok()?.hit_test(pt.x)?;
        self.palette.get(i).copied()
    }

    /// Feed one pointer sample.
    ///
    /// Tracked samples move the selection to the color under the pointer.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Vec<PickEvent<Color>> {
        let hit = self.color_at(event.pos);
        let was_dragging = self.drag.is_dragging();
        let mut tracked = false;
        let events = self.drag.handle(event, |_| {
            tracked = true;
            hit
        });
        if tracked && self.selected != hit {
            self.selected = hit;
            self.invalid |= Invalidation::REDRAW;
        }
        if was_dragging != self.drag.is_dragging() {
            self.invalid |= Invalidation::REDRAW;
        }
        events
    }

    /// Draw the masked segments and the thumb.
    pub fn render(&mut self, surface: &mut impl Surface) -> Result<(), ConfigError> {
        let style = self.style;
        let area = self.draw_area();
        let selected = self.selected;
        let dragging = self.drag.is_dragging();
        let cy = area.center().y;

        self.layout()?;
        let Some(layout) = self.layout.get(&self.key()) else {
            return Ok(());
        };
        if area.width() > 0.0 && area.height() > 0.0 {
            let half = style.bar_height / 2.0;
            let (top, bottom) = (cy - half, cy + half);
            surface.fill_rounded_rect(
                RoundedRect::new(area.x0, top, area.x1, bottom, half),
                style.mask_color,
            );
            for (i, &color) in self.palette.iter().enumerate() {
                if let Some((x0, x1)) = layout.segment_extent(i) {
                    surface.fill_rect(Rect::new(x0, top, x1, bottom), color, Blend::Multiply);
                }
            }
        }

        let Some(color) = selected else {
            return Ok(());
        };
        if style.thumb_size <= 0.0 {
            return Ok(());
        }
        let index = self.palette.iter().position(|&c| c == color).unwrap_or(0);
        let cx = layout.thumb_x(index).unwrap_or(area.x0);
        if dragging {
            let halo = color.with_alpha(color.a & 0x7f);
            surface.fill_circle(Circle::new((cx, cy), style.thumb_size * HALO_SCALE), halo);
        }
        surface.fill_circle(Circle::new((cx, cy), style.thumb_size / 2.0), color);
        Ok(())
    }
}
