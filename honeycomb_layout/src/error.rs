// Copyright 2025 the Honeycomb Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

/// A rejected configuration value.
///
/// Returned synchronously by constructors and setters. The previous
/// configuration is left untouched when a setter fails.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The ring radius was zero.
    #[error("radius has to be at least 1")]
    ZeroRadius,
    /// A palette with no colors was supplied where one is required.
    #[error("palette has to contain at least one color")]
    EmptyPalette,
    /// A length (stroke width, thumb size, bar height) was negative or not finite.
    #[error("{name} has to be a finite value of at least 0, got {value}")]
    InvalidLength {
        /// Which setting was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl ConfigError {
    /// Validate a non-negative finite length.
    pub fn check_length(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() && value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidLength { name, value })
        }
    }

    /// Validate a ring radius.
    pub fn check_radius(radius: u32) -> Result<u32, Self> {
        if radius == 0 {
            Err(Self::ZeroRadius)
        } else {
            Ok(radius)
        }
    }
}
