// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reel Layout: responsive tiers, card geometry, and layout-mode selection.
//!
//! ## Overview
//!
//! This crate holds the pure, side-effect-free half of a horizontal card carousel:
//!
//! - [`Tier`] classifies a viewport width into one of five ordered breakpoint buckets.
//! - [`Geometry`] resolves card width, gap, and container padding for a tier from a
//!   caller-supplied [`ResponsiveTable`], falling back to lower tiers and finally a global default.
//! - [`select_mode`] decides between native scrolling, transform paging, and a static
//!   "all cards visible" layout.
//! - The [`paging`] module derives visible-card counts, slide bounds, and theoretical card offsets.
//!
//! It owns no state and does not depend on a geometry crate.
//! Higher layers (like the carousel engine) feed it the live viewport width and item count.
//!
//! ## Example
//!
//! ```rust
//! use reel_layout::{
//!     CardMetrics, Geometry, LayoutMode, ModeInputs, ResponsiveTable, Tier, select_mode,
//! };
//!
//! let table = ResponsiveTable::new()
//!     .with(Tier::Sm, CardMetrics::new(260.0, 16.0))
//!     .with(Tier::Xl, CardMetrics::new(320.0, 24.0));
//!
//! // `Md` has no entry of its own and inherits `Sm`.
//! let md = Geometry::resolve(Tier::Md, &table, CardMetrics::default());
//! assert_eq!(md.card_width, 260.0);
//! assert_eq!(md.padding_left, 24.0);
//!
//! let tier = Tier::from_viewport_width(1400.0);
//! assert_eq!(tier, Tier::Xl);
//! let geometry = Geometry::resolve(tier, &table, CardMetrics::default());
//! let mode = select_mode(&ModeInputs {
//!     tier,
//!     natural_scroll: false,
//!     flexible_width: true,
//!     item_count: 3,
//!     geometry,
//!     viewport_width: 1400.0,
//! });
//! assert_eq!(mode, LayoutMode::AllVisibleStatic);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod geometry;
mod mode;
pub mod paging;
mod tier;

pub use geometry::{CardMetrics, Geometry, ResponsiveTable};
pub use mode::{
    LayoutMode, MIN_FLEXIBLE_CARD_WIDTH, ModeInputs, available_width, content_overflows,
    content_width, flexible_card_width, select_mode,
};
pub use tier::Tier;

/// Largest whole number not above `x`, saturating at zero for negative or non-finite input.
#[inline]
pub(crate) fn floor_to_usize(x: f64) -> usize {
    if x.is_finite() && x > 0.0 {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Input is finite and positive; `as` truncates toward zero which is floor here."
        )]
        let n = x as usize;
        n
    } else {
        0
    }
}

/// Absolute distance between two coordinates.
#[inline]
pub(crate) fn distance(a: f64, b: f64) -> f64 {
    if a > b { a - b } else { b - a }
}
