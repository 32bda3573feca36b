// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

use reel_layout::Tier;

/// Why a [`CarouselOptions`](crate::CarouselOptions) value was rejected.
///
/// Runtime operations never fail; only configuration is validated.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum OptionsError {
    /// The fallback card width or gap is negative or not finite.
    #[error("invalid card metrics: width {width}, gap {gap}")]
    InvalidCardMetrics {
        /// Rejected card width.
        width: f64,
        /// Rejected card gap.
        gap: f64,
    },
    /// A responsive table entry is negative or not finite.
    #[error("invalid responsive entry for tier `{}`: width {width}, gap {gap}", .tier.name())]
    InvalidResponsiveEntry {
        /// Tier whose entry was rejected.
        tier: Tier,
        /// Rejected card width.
        width: f64,
        /// Rejected card gap.
        gap: f64,
    },
    /// A card width of zero would stack every card on the same spot.
    #[error("card width must be positive")]
    ZeroCardWidth,
    /// Autoplay needs a positive interval.
    #[error("autoplay interval must be positive")]
    ZeroInterval,
}
