// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segmented color bars: segment extents, boundary tables, and hit testing.
//!
//! A bar of width `W` starting at `start` shows `n` colors side by side.
//! Hit testing walks a cumulative boundary table: `x` resolves to the first
//! segment whose `range_end` is at or beyond `x`.
//!
//! Two layouts are supported:
//!
//! - Uniform: every segment is `W / n` wide.
//! - Shrunk ends: interior segments are `W / (n - 1)` wide and the two end
//!   segments half that, so the thumb for the first and last colors rests
//!   exactly on the bar's edges.
//!
//! ```
//! use honeycomb_layout::{BarEnd, BarLayout, BarMode};
//!
//! let bar = BarLayout::new(0.0, 120.0, 4, BarMode::ShrunkEnds, BarEnd::Unbounded).unwrap();
//! assert_eq!(bar.segment_width(), 40.0);
//! assert_eq!(bar.hit_test(19.0), Some(0));
//! assert_eq!(bar.hit_test(21.0), Some(1));
//! assert_eq!(bar.hit_test(1e6), Some(3));
//! ```

use alloc::vec::Vec;

use crate::error::ConfigError;

/// How segment widths are assigned.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarMode {
    /// Shrunk ends for more than two colors, uniform otherwise.
    #[default]
    Auto,
    /// Equal-width segments.
    Uniform,
    /// Half-width end segments. Falls back to uniform for one or two colors.
    ShrunkEnds,
}

/// What the last boundary of the table is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarEnd {
    /// The last color catches every coordinate past the bar's end.
    #[default]
    Unbounded,
    /// Coordinates past the bar's end resolve to no color.
    Clamped,
}

/// One entry of the cumulative boundary table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BarSegment {
    /// Palette index of the segment.
    pub color_index: usize,
    /// Inclusive upper bound of the segment's hit range.
    pub range_end: f64,
}

/// A laid-out bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    start: f64,
    width: f64,
    count: usize,
    shrunk: bool,
    segment_width: f64,
    boundaries: Vec<BarSegment>,
}

impl BarLayout {
    /// Lay out `color_count` segments over `[start, start + width]`.
    ///
    /// A bar with no positive width has an empty boundary table and never hits.
    pub fn new(
        start: f64,
        width: f64,
        color_count: usize,
        mode: BarMode,
        end: BarEnd,
    ) -> Result<Self, ConfigError> {
        if color_count == 0 {
            return Err(ConfigError::EmptyPalette);
        }
        let shrunk = match mode {
            BarMode::Uniform => false,
            BarMode::Auto | BarMode::ShrunkEnds => color_count > 2,
        };
        let slots = if shrunk { color_count - 1 } else { color_count };
        let segment_width = width / slots as f64;

        let mut boundaries = Vec::new();
        if width.is_nan() || width <= 0.0 {
            log::warn!("degenerate bar width {width}; no segments laid out");
        } else {
            let first_end = start + if shrunk { segment_width / 2.0 } else { segment_width };
            boundaries.reserve_exact(color_count);
            boundaries.extend((0..color_count - 1).map(|i| BarSegment {
                color_index: i,
                range_end: first_end + i as f64 * segment_width,
            }));
            boundaries.push(BarSegment {
                color_index: color_count - 1,
                range_end: match end {
                    BarEnd::Unbounded => f64::INFINITY,
                    BarEnd::Clamped => start + width,
                },
            });
            log::debug!("laid out {color_count} bar segments of width {segment_width}");
        }

        Ok(Self {
            start,
            width,
            count: color_count,
            shrunk,
            segment_width,
            boundaries,
        })
    }

    /// Left edge of the bar.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Bar width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Number of colors.
    pub fn color_count(&self) -> usize {
        self.count
    }

    /// Whether end segments are half width.
    pub fn is_shrunk(&self) -> bool {
        self.shrunk
    }

    /// Width of an interior segment.
    pub fn segment_width(&self) -> f64 {
        self.segment_width
    }

    /// The cumulative boundary table, ascending by `range_end`.
    pub fn boundaries(&self) -> &[BarSegment] {
        &self.boundaries
    }

    /// Palette index under `x`.
    pub fn hit_test(&self, x: f64) -> Option<usize> {
        if x.is_nan() {
            return None;
        }
        let i = self.boundaries.partition_point(|s| s.range_end < x);
        let hit = self.boundaries.get(i).map(|s| s.color_index);
        log::trace!("bar hit test at {x} -> {hit:?}");
        hit
    }

    /// Horizontal extent `(x0, x1)` of the segment painted for `index`.
    pub fn segment_extent(&self, index: usize) -> Option<(f64, f64)> {
        if index >= self.count || self.boundaries.is_empty() {
            return None;
        }
        let w = self.segment_width;
        let (x0, x1) = if !self.shrunk {
            let x0 = self.start + index as f64 * w;
            (x0, x0 + w)
        } else if index == 0 {
            (self.start, self.start + w / 2.0)
        } else if index == self.count - 1 {
            let end = self.start + self.width;
            (end - w / 2.0, end)
        } else {
            let x0 = self.start + w / 2.0 + (index - 1) as f64 * w;
            (x0, x0 + w)
        };
        Some((x0, x1))
    }

    /// Resting x of the thumb when `index` is selected.
    ///
    /// The first color rests on the left edge and the last on the right edge;
    /// color `i` in between rests at `start + i * segment_width`.
    pub fn thumb_x(&self, index: usize) -> Option<f64> {
        if index >= self.count {
            return None;
        }
        let local = if index == self.count - 1 {
            self.width
        } else {
            index as f64 * self.segment_width
        };
        Some(self.start + local)
    }
}
