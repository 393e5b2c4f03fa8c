// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing surfaces.
//!
//! Pickers draw through the narrow [`Surface`] trait. Two implementations ship
//! with the crate:
//!
//! - `Vec<DrawOp>` records commands for a host renderer (or a test) to replay.
//! - [`PixelBuffer`] is a small software rasterizer without anti-aliasing.
//!   It backs the raster hit map and is handy for golden-pixel tests.

use alloc::vec::Vec;
use core::ops::Range;

use honeycomb_layout::Color;
use kurbo::{BezPath, Circle, ParamCurveNearest, Point, Rect, RoundedRect, Shape, Size};

/// How a fill combines with what is already on the surface.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Blend {
    /// Source over destination.
    #[default]
    SrcOver,
    /// Channel-wise product, alpha included. Clips to the destination's coverage.
    Multiply,
}

impl Blend {
    /// Combine `src` onto `dst`. Both are non-premultiplied.
    pub fn apply(self, src: Color, dst: Color) -> Color {
        match self {
            Self::SrcOver => src_over(src, dst),
            Self::Multiply => Color::new(
                mul(src.r, dst.r),
                mul(src.g, dst.g),
                mul(src.b, dst.b),
                mul(src.a, dst.a),
            ),
        }
    }
}

fn channel(v: u32) -> u8 {
    u8::try_from(v).unwrap_or(u8::MAX)
}

fn mul(a: u8, b: u8) -> u8 {
    channel(u32::from(a) * u32::from(b) / 255)
}

fn src_over(src: Color, dst: Color) -> Color {
    let sa = u32::from(src.a);
    match sa {
        255 => return src,
        0 => return dst,
        _ => {}
    }
    let da = u32::from(dst.a) * (255 - sa) / 255;
    let oa = sa + da;
    let mix = |s: u8, d: u8| channel((u32::from(s) * sa + u32::from(d) * da) / oa);
    Color::new(
        mix(src.r, dst.r),
        mix(src.g, dst.g),
        mix(src.b, dst.b),
        channel(oa),
    )
}

/// A 2D drawing target.
///
/// Coordinates are widget-local logical pixels.
pub trait Surface {
    /// Fill a closed path with the even-odd rule.
    fn fill_path(&mut self, path: &BezPath, color: Color);
    /// Stroke a path's outline, centered on the path.
    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Color);
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color, blend: Blend);
    /// Fill a rounded rectangle.
    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color);
    /// Fill a circle.
    fn fill_circle(&mut self, circle: Circle, color: Color);
}

/// A recorded drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// See [`Surface::fill_path`].
    FillPath {
        /// Path to fill.
        path: BezPath,
        /// Fill color.
        color: Color,
    },
    /// See [`Surface::stroke_path`].
    StrokePath {
        /// Path to stroke.
        path: BezPath,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// See [`Surface::fill_rect`].
    FillRect {
        /// Rectangle to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
        /// Blend mode.
        blend: Blend,
    },
    /// See [`Surface::fill_rounded_rect`].
    FillRoundedRect {
        /// Rounded rectangle to fill.
        rect: RoundedRect,
        /// Fill color.
        color: Color,
    },
    /// See [`Surface::fill_circle`].
    FillCircle {
        /// Circle to fill.
        circle: Circle,
        /// Fill color.
        color: Color,
    },
}

impl Surface for Vec<DrawOp> {
    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.push(DrawOp::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Color) {
        self.push(DrawOp::StrokePath {
            path: path.clone(),
            width,
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, blend: Blend) {
        self.push(DrawOp::FillRect { rect, color, blend });
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        self.push(DrawOp::FillRoundedRect { rect, color });
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.push(DrawOp::FillCircle { circle, color });
    }
}

/// An offscreen RGBA buffer.
///
/// A pixel is covered when its center is inside the shape. Reads outside the
/// buffer return [`Color::TRANSPARENT`].
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl core::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl PixelBuffer {
    /// A transparent buffer of `width * height` pixels.
    ///
    /// A size whose pixel count overflows or cannot be allocated yields an
    /// empty `0 x 0` buffer.
    pub fn new(width: usize, height: usize) -> Self {
        let mut pixels = Vec::new();
        let len = match width.checked_mul(height) {
            Some(len) if pixels.try_reserve_exact(len).is_ok() => len,
            _ => {
                log::warn!("pixel buffer of {width}x{height} is too large; left empty");
                return Self {
                    width: 0,
                    height: 0,
                    pixels,
                };
            }
        };
        pixels.resize(len, Color::TRANSPARENT);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A transparent buffer covering `size`, rounded up to whole pixels.
    pub fn for_size(size: Size) -> Self {
        let size = size.ceil();
        Self::new(to_index(size.width), to_index(size.height))
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Overwrite every pixel.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// The pixel at column `x`, row `y`.
    pub fn read_pixel(&self, x: usize, y: usize) -> Color {
        if x >= self.width || y >= self.height {
            return Color::TRANSPARENT;
        }
        self.pixels[y * self.width + x]
    }

    /// The pixel containing `pt`.
    pub fn sample(&self, pt: Point) -> Color {
        if pt.x.is_nan() || pt.y.is_nan() || pt.x < 0.0 || pt.y < 0.0 {
            return Color::TRANSPARENT;
        }
        self.read_pixel(to_index(pt.x), to_index(pt.y))
    }

    fn fill_where(
        &mut self,
        bounds: Rect,
        color: Color,
        blend: Blend,
        covers: impl Fn(Point) -> bool,
    ) {
        let cols = span(bounds.x0, bounds.x1, self.width);
        for y in span(bounds.y0, bounds.y1, self.height) {
            for x in cols.clone() {
                if covers(Point::new(x as f64 + 0.5, y as f64 + 0.5)) {
                    let px = &mut self.pixels[y * self.width + x];
                    *px = blend.apply(color, *px);
                }
            }
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Callers pass finite, non-negative values; the saturating cast floors them."
)]
fn to_index(v: f64) -> usize {
    v.max(0.0) as usize
}

/// Pixel indices whose centers may fall in `[lo, hi]`.
fn span(lo: f64, hi: f64, limit: usize) -> Range<usize> {
    let start = to_index(lo).min(limit);
    let end = to_index(hi).saturating_add(1).min(limit);
    start..end.max(start)
}

impl Surface for PixelBuffer {
    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.fill_where(path.bounding_box(), color, Blend::SrcOver, |p| {
            path.winding(p) % 2 != 0
        });
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, color: Color) {
        let half = width / 2.0;
        let reach = half * half;
        let bounds = path.bounding_box().inflate(half, half);
        self.fill_where(bounds, color, Blend::SrcOver, |p| {
            path.segments()
                .any(|seg| seg.nearest(p, 1e-6).distance_sq <= reach)
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color, blend: Blend) {
        let rect = rect.abs();
        self.fill_where(rect, color, blend, |p| {
            p.x >= rect.x0 && p.x < rect.x1 && p.y >= rect.y0 && p.y < rect.y1
        });
    }

    fn fill_rounded_rect(&mut self, rect: RoundedRect, color: Color) {
        self.fill_where(rect.bounding_box(), color, Blend::SrcOver, |p| {
            rect.contains(p)
        });
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.fill_where(circle.bounding_box(), color, Blend::SrcOver, |p| {
            circle.contains(p)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use honeycomb_layout::hexagon_path;

    const RED: Color = Color::rgb(200, 10, 10);

    #[test]
    fn src_over_opaque_replaces_and_transparent_keeps() {
        let dst = Color::rgb(1, 2, 3);
        assert_eq!(Blend::SrcOver.apply(RED, dst), RED);
        assert_eq!(Blend::SrcOver.apply(Color::TRANSPARENT, dst), dst);
        let half = Blend::SrcOver.apply(Color::new(255, 255, 255, 128), Color::TRANSPARENT);
        assert_eq!(half, Color::new(255, 255, 255, 128));
    }

    #[test]
    fn multiply_by_white_is_identity_and_clips_to_coverage() {
        assert_eq!(Blend::Multiply.apply(RED, Color::WHITE), RED);
        assert!(Blend::Multiply.apply(RED, Color::TRANSPARENT).is_transparent());
        assert_eq!(
            Blend::Multiply.apply(Color::rgb(255, 128, 0), Color::rgb(128, 255, 77)),
            Color::rgb(128, 128, 0)
        );
    }

    #[test]
    fn oversized_buffers_are_empty() {
        let buf = PixelBuffer::new(usize::MAX, 2);
        assert_eq!((buf.width(), buf.height()), (0, 0));
        assert!(buf.pixels().is_empty());
        let buf = PixelBuffer::for_size(Size::new(1e12, 1e12));
        assert!(buf.pixels().is_empty());
        assert!(buf.sample(Point::new(5.0, 5.0)).is_transparent());
    }

    #[test]
    fn reads_outside_are_transparent() {
        let buf = PixelBuffer::for_size(Size::new(3.5, 2.0));
        assert_eq!((buf.width(), buf.height()), (4, 2));
        assert_eq!(buf.read_pixel(4, 0), Color::TRANSPARENT);
        assert_eq!(buf.sample(Point::new(-0.5, 1.0)), Color::TRANSPARENT);
        assert_eq!(buf.sample(Point::new(f64::NAN, 1.0)), Color::TRANSPARENT);
    }

    #[test]
    fn rect_fill_covers_pixel_centers() {
        let mut buf = PixelBuffer::new(10, 10);
        buf.fill_rect(Rect::new(2.0, 2.0, 5.0, 4.0), RED, Blend::SrcOver);
        assert_eq!(buf.read_pixel(2, 2), RED);
        assert_eq!(buf.read_pixel(4, 3), RED);
        assert_eq!(buf.read_pixel(5, 3), Color::TRANSPARENT);
        assert_eq!(buf.read_pixel(2, 4), Color::TRANSPARENT);
        assert_eq!(buf.pixels().iter().filter(|c| **c == RED).count(), 6);
    }

    #[test]
    fn hexagon_fill_matches_shape() {
        let mut buf = PixelBuffer::new(40, 40);
        buf.fill_path(&hexagon_path(Point::new(20.0, 20.0), 15.0), RED);
        assert_eq!(buf.sample(Point::new(20.0, 20.0)), RED);
        // Point-up hexagon: top vertex at y = 5, flat sides at x = 20 +- 13.
        assert_eq!(buf.sample(Point::new(20.0, 6.0)), RED);
        assert_eq!(buf.sample(Point::new(20.0, 3.0)), Color::TRANSPARENT);
        assert_eq!(buf.sample(Point::new(34.5, 20.0)), Color::TRANSPARENT);
        assert_eq!(buf.sample(Point::new(8.0, 8.0)), Color::TRANSPARENT);
    }

    #[test]
    fn stroke_covers_outline_only() {
        let mut buf = PixelBuffer::new(40, 40);
        let path = hexagon_path(Point::new(20.0, 20.0), 15.0);
        buf.stroke_path(&path, 2.0, RED);
        assert_eq!(buf.sample(Point::new(20.0, 20.0)), Color::TRANSPARENT);
        // The top vertex sits at (20, 5).
        assert_eq!(buf.sample(Point::new(20.0, 5.0)), RED);
    }

    #[test]
    fn circles_and_rounded_rects() {
        let mut buf = PixelBuffer::new(20, 20);
        buf.fill_rounded_rect(RoundedRect::new(0.0, 0.0, 20.0, 10.0, 5.0), Color::WHITE);
        assert_eq!(buf.read_pixel(0, 0), Color::TRANSPARENT, "corner is rounded off");
        assert_eq!(buf.read_pixel(10, 5), Color::WHITE);
        buf.fill_circle(Circle::new((10.0, 15.0), 3.0), RED);
        assert_eq!(buf.sample(Point::new(10.0, 15.0)), RED);
        assert_eq!(buf.sample(Point::new(10.0, 19.5)), Color::TRANSPARENT);
    }

    #[test]
    fn recording_surface_keeps_order() {
        let mut ops: Vec<DrawOp> = Vec::new();
        ops.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), RED, Blend::Multiply);
        ops.fill_circle(Circle::new((0.0, 0.0), 1.0), RED);
        assert!(matches!(ops[0], DrawOp::FillRect { blend: Blend::Multiply, .. }));
        assert!(matches!(ops[1], DrawOp::FillCircle { .. }));
    }
}
