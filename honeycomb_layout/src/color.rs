// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and fallback color sources.
//!
//! Palettes are plain ordered slices of [`Color`]. When a host supplies no
//! palette, a [`ColorSource`] produces one; the default source is
//! [`RandomColors`] (behind the `random` feature).

use alloc::vec::Vec;

/// Number of colors in the bar's fallback palette.
pub const BAR_FALLBACK_LEN: usize = 8;

/// An 8-bit-per-channel, non-premultiplied RGBA color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel. `0` is fully transparent.
    pub a: u8,
}

impl Color {
    /// Fully transparent black. Used as the "no cell" sentinel in hit maps.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Unpack a `0xAARRGGBB` value.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Each channel is masked to 8 bits before the cast."
    )]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into a `0xAARRGGBB` value.
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// The same color with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Whether the color is fully transparent.
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

/// Produces fallback colors on demand.
pub trait ColorSource {
    /// Return the next color.
    fn next_color(&mut self) -> Color;

    /// Collect `count` colors into a palette.
    fn palette(&mut self, count: usize) -> Vec<Color> {
        (0..count).map(|_| self.next_color()).collect()
    }
}

impl<S: ColorSource + ?Sized> ColorSource for &mut S {
    fn next_color(&mut self) -> Color {
        (**self).next_color()
    }
}

/// Cycles through a fixed list of colors. Mostly useful in tests and demos.
#[derive(Clone, Debug)]
pub struct CycleColors {
    colors: Vec<Color>,
    next: usize,
}

impl CycleColors {
    /// Create a source that repeats `colors` in order.
    ///
    /// An empty list yields [`Color::TRANSPARENT`].
    pub fn new(colors: impl Into<Vec<Color>>) -> Self {
        Self {
            colors: colors.into(),
            next: 0,
        }
    }
}

impl ColorSource for CycleColors {
    fn next_color(&mut self) -> Color {
        if self.colors.is_empty() {
            return Color::TRANSPARENT;
        }
        let c = self.colors[self.next % self.colors.len()];
        self.next = self.next.wrapping_add(1);
        c
    }
}

#[cfg(feature = "random")]
pub use random::RandomColors;

#[cfg(feature = "random")]
mod random {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{Color, ColorSource};

    /// Uniformly random opaque colors.
    pub struct RandomColors<R = StdRng> {
        rng: R,
    }

    impl RandomColors<StdRng> {
        /// A source seeded from the operating system. Every instance differs.
        pub fn from_os_rng() -> Self {
            Self::new(StdRng::from_os_rng())
        }

        /// A deterministic source for reproducible palettes.
        pub fn seeded(seed: u64) -> Self {
            Self::new(StdRng::seed_from_u64(seed))
        }
    }

    impl<R: Rng> RandomColors<R> {
        /// Wrap an existing generator.
        pub fn new(rng: R) -> Self {
            Self { rng }
        }
    }

    impl Default for RandomColors<StdRng> {
        fn default() -> Self {
            Self::from_os_rng()
        }
    }

    impl<R: Rng> ColorSource for RandomColors<R> {
        fn next_color(&mut self) -> Color {
            Color::rgb(self.rng.random(), self.rng.random(), self.rng.random())
        }
    }

    impl<R> core::fmt::Debug for RandomColors<R> {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.debug_struct("RandomColors").finish_non_exhaustive()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn argb_round_trips_channels() {
        let c = Color::from_argb(0x80_12_34_56);
        assert_eq!(c, Color::new(0x12, 0x34, 0x56, 0x80));
        assert_eq!(c.to_argb(), 0x80_12_34_56);
    }

    #[test]
    fn transparent_is_detected() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(Color::WHITE.with_alpha(0).is_transparent());
        assert!(!Color::BLACK.is_transparent());
    }

    #[test]
    fn cycle_repeats_in_order() {
        let a = Color::rgb(1, 0, 0);
        let b = Color::rgb(0, 1, 0);
        let mut src = CycleColors::new(vec![a, b]);
        assert_eq!(src.palette(5), vec![a, b, a, b, a]);
    }

    #[test]
    fn empty_cycle_yields_transparent() {
        let mut src = CycleColors::new(Vec::new());
        assert_eq!(src.next_color(), Color::TRANSPARENT);
    }

    #[cfg(feature = "random")]
    #[test]
    fn random_fallback_palette_is_opaque() {
        let mut src = RandomColors::from_os_rng();
        let palette = src.palette(BAR_FALLBACK_LEN);
        assert_eq!(palette.len(), 8);
        // Channels are u8, so [0, 255] holds by construction; alpha must stay opaque.
        assert!(palette.iter().all(|c| c.a == 255), "fallback colors are opaque");
    }

    #[cfg(feature = "random")]
    #[test]
    fn seeded_sources_agree() {
        let a = RandomColors::seeded(7).palette(16);
        let b = RandomColors::seeded(7).palette(16);
        assert_eq!(a, b);
    }

    #[cfg(feature = "random")]
    #[test]
    fn wraps_a_caller_supplied_generator() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let mut wrapped = RandomColors::new(StdRng::seed_from_u64(7));
        assert_eq!(wrapped.palette(4), RandomColors::seeded(7).palette(4));
    }

    #[test]
    fn mutable_reference_forwards() {
        fn first(mut source: impl ColorSource) -> Color {
            source.next_color()
        }
        let mut src = CycleColors::new(vec![Color::WHITE, Color::BLACK]);
        assert_eq!(first(&mut src), Color::WHITE);
        assert_eq!(src.next_color(), Color::BLACK);
    }
}
