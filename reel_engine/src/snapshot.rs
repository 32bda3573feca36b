// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only views of the store, handed to measurers and renderers.

use core::ops::Range;

use reel_layout::paging::{self, visible_range};
use reel_layout::{
    Geometry, LayoutMode, ModeInputs, Tier, content_overflows, flexible_card_width, select_mode,
};

use crate::interaction::Interaction;
use crate::options::CarouselOptions;

/// Everything derived from viewport width, options, and item count.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutSnapshot {
    /// Breakpoint tier.
    pub tier: Tier,
    /// Resolved card geometry.
    pub geometry: Geometry,
    /// Selected layout mode.
    pub mode: LayoutMode,
    /// Viewport width the layout was derived from.
    pub viewport_width: f64,
    /// Whole cards that fit in the viewport (transform paging).
    pub visible_cards: usize,
    /// Number of items.
    pub item_count: usize,
}

impl LayoutSnapshot {
    /// Derive the layout for a viewport width.
    pub fn derive(options: &CarouselOptions, item_count: usize, viewport_width: f64) -> Self {
        let tier = Tier::from_viewport_width(viewport_width);
        let geometry = Geometry::resolve(tier, &options.responsive, options.card_metrics());
        let mode = select_mode(&ModeInputs {
            tier,
            natural_scroll: options.natural_scroll,
            flexible_width: options.flexible_width,
            item_count,
            geometry,
            viewport_width,
        });
        Self {
            tier,
            geometry,
            mode,
            viewport_width,
            visible_cards: paging::visible_card_count(viewport_width, &geometry),
            item_count,
        }
    }

    /// Largest valid slide in transform paging.
    pub fn max_slide(&self) -> usize {
        paging::max_slide(self.item_count, self.visible_cards)
    }

    /// True if the strip can move at all: the layout is not static and the cards overflow.
    pub fn can_scroll(&self) -> bool {
        self.mode.can_move()
            && content_overflows(self.item_count, &self.geometry, self.viewport_width)
    }

    /// Card width in the static layout; `None` in the other modes.
    pub fn flexible_card_width(&self) -> Option<f64> {
        if self.mode.flexible_cards() {
            flexible_card_width(self.item_count, &self.geometry, self.viewport_width)
        } else {
            None
        }
    }
}

impl Default for LayoutSnapshot {
    fn default() -> Self {
        Self::derive(&CarouselOptions::default(), 0, 0.0)
    }
}

/// Carousel state as the renderer sees it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Focused item; drives highlight and indicators.
    pub active_index: usize,
    /// Left-most card in view (transform paging); equals `active_index` in the other modes.
    pub current_slide: usize,
    /// Autoplay progress in percent of the current threshold's base (0..=137.5).
    pub progress: f64,
    /// Current layout.
    pub layout: LayoutSnapshot,
    /// Current interaction.
    pub interaction: Interaction,
    /// True while the pointer is over the carousel.
    pub hovering: bool,
    /// True between mount and unmount.
    pub mounted: bool,
}

impl Snapshot {
    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.layout.item_count
    }

    /// True while the user drags the strip.
    pub fn is_dragging(&self) -> bool {
        self.interaction.drag().is_some()
    }

    /// Live drag offset.
    pub fn drag_offset(&self) -> f64 {
        self.interaction.drag_offset()
    }

    /// Translate offset of the strip in transform paging; zero otherwise.
    pub fn strip_offset(&self) -> f64 {
        let geometry = &self.layout.geometry;
        match self.layout.mode {
            LayoutMode::TransformPaging => {
                paging::strip_offset(self.current_slide, geometry, self.drag_offset())
            }
            LayoutMode::NaturalScroll | LayoutMode::AllVisibleStatic => 0.0,
        }
    }

    /// Cards in view.
    ///
    /// In transform paging this is the page starting at `current_slide`; otherwise every card.
    pub fn visible_range(&self) -> Range<usize> {
        let n = self.item_count();
        match self.layout.mode {
            LayoutMode::TransformPaging => {
                visible_range(self.current_slide, self.layout.visible_cards, n)
            }
            LayoutMode::NaturalScroll | LayoutMode::AllVisibleStatic => 0..n,
        }
    }
}
