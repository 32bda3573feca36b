// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout mode selection.
//!
//! ## Rules
//!
//! 1. If flexible width is enabled, the tier is desktop-like (`xl`/`2xl`), and every card can be
//!    laid out side by side at no less than [`MIN_FLEXIBLE_CARD_WIDTH`], the carousel is
//!    [`LayoutMode::AllVisibleStatic`]. This overrides the other two rules.
//! 2. Else, if natural scrolling is forced or the tier is `sm`/`md`/`lg`, it is
//!    [`LayoutMode::NaturalScroll`].
//! 3. Otherwise it is [`LayoutMode::TransformPaging`].
//!
//! Rule 1 depends on the live viewport width, not only on the tier, so the selection must be
//! re-run on every resize.

use crate::geometry::Geometry;
use crate::tier::Tier;

/// Minimum per-card width for the static all-visible layout.
pub const MIN_FLEXIBLE_CARD_WIDTH: f64 = 300.0;

/// How the card strip is laid out and moved.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutMode {
    /// Native horizontal scroll container; the browser owns the position.
    NaturalScroll,
    /// Fixed-width cards moved discretely with a translate transform.
    TransformPaging,
    /// Every card is visible at flexible width; nothing scrolls.
    AllVisibleStatic,
}

impl LayoutMode {
    /// True unless the layout is static.
    pub const fn can_move(self) -> bool {
        !matches!(self, Self::AllVisibleStatic)
    }

    /// True if cards render at flexible (`flex: 1`) width instead of a fixed width.
    pub const fn flexible_cards(self) -> bool {
        matches!(self, Self::AllVisibleStatic)
    }

    /// True if pointer drags move the strip.
    pub const fn accepts_drag(self) -> bool {
        matches!(self, Self::TransformPaging)
    }

    /// Short lowercase name, used for data attributes and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NaturalScroll => "natural-scroll",
            Self::TransformPaging => "transform-paging",
            Self::AllVisibleStatic => "all-visible",
        }
    }
}

/// Everything [`select_mode`] looks at.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModeInputs {
    /// Current breakpoint tier.
    pub tier: Tier,
    /// Force native scrolling regardless of tier.
    pub natural_scroll: bool,
    /// Allow the static all-visible layout on desktop tiers.
    pub flexible_width: bool,
    /// Number of items in the carousel.
    pub item_count: usize,
    /// Geometry resolved for `tier`.
    pub geometry: Geometry,
    /// Live viewport width in pixels.
    pub viewport_width: f64,
}

/// Pick the layout mode. See the [module docs](self) for the rules.
pub fn select_mode(inputs: &ModeInputs) -> LayoutMode {
    let fits = flexible_card_width(inputs.item_count, &inputs.geometry, inputs.viewport_width)
        .is_some_and(|w| w >= MIN_FLEXIBLE_CARD_WIDTH);
    if inputs.flexible_width && inputs.tier.is_desktop_like() && fits {
        return LayoutMode::AllVisibleStatic;
    }
    if inputs.natural_scroll || !inputs.tier.is_desktop_like() {
        LayoutMode::NaturalScroll
    } else {
        LayoutMode::TransformPaging
    }
}

/// Viewport width left for cards once container padding is removed. Never negative.
pub fn available_width(geometry: &Geometry, viewport_width: f64) -> f64 {
    (viewport_width - geometry.horizontal_padding()).max(0.0)
}

/// Width of `item_count` fixed-width cards laid out with gaps between them.
pub fn content_width(item_count: usize, geometry: &Geometry) -> f64 {
    if item_count == 0 {
        return 0.0;
    }
    let n = item_count as f64;
    n * geometry.card_width + (n - 1.0) * geometry.card_gap
}

/// Width each card would get if all `item_count` cards shared the available width.
///
/// Returns `None` for an empty carousel.
pub fn flexible_card_width(
    item_count: usize,
    geometry: &Geometry,
    viewport_width: f64,
) -> Option<f64> {
    if item_count == 0 {
        return None;
    }
    let n = item_count as f64;
    let gaps = (n - 1.0) * geometry.card_gap;
    Some((available_width(geometry, viewport_width) - gaps) / n)
}

/// True if the fixed-width strip is wider than the space available for it.
pub fn content_overflows(item_count: usize, geometry: &Geometry, viewport_width: f64) -> bool {
    content_width(item_count, geometry) > available_width(geometry, viewport_width)
}
