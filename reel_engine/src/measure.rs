// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measurement seam.
//!
//! Natural-scroll reconciliation and programmatic scrolling need the live position of each
//! card relative to the viewport. In a browser that is a bounding-box read; in tests and
//! headless hosts it can be computed. [`Measure`] isolates that read so the rest of the
//! engine never touches a DOM.
//!
//! All rectangles share one coordinate space (for example client coordinates); only
//! differences between them matter.

use kurbo::Rect;
use reel_layout::LayoutMode;

use crate::snapshot::LayoutSnapshot;

/// Source of live card and viewport boxes.
pub trait Measure {
    /// Visible box of the scroll container.
    fn viewport_bounds(&self) -> Rect;

    /// Live box of card `index`, or `None` if it is not rendered.
    fn card_bounds(&self, index: usize) -> Option<Rect>;

    /// The carousel re-derived its layout.
    fn sync(&mut self, layout: &LayoutSnapshot) {
        let _ = layout;
    }

    /// The container reported a new scroll offset.
    fn scrolled_to(&mut self, scroll_left: f64) {
        let _ = scroll_left;
    }
}

/// A [`Measure`] that computes boxes from the resolved geometry and the last scroll offset.
///
/// Cards start after the left padding and are `stride` apart; the viewport starts at zero.
/// This is the default measurer and mirrors what a browser lays out for the strip.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometricMeasure {
    layout: LayoutSnapshot,
    scroll_left: f64,
    card_height: f64,
}

impl GeometricMeasure {
    /// Measurer with a nominal card height.
    pub fn new(card_height: f64) -> Self {
        Self {
            card_height,
            ..Self::default()
        }
    }

    /// Last scroll offset seen.
    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    fn card_width(&self) -> f64 {
        self.layout
            .flexible_card_width()
            .unwrap_or(self.layout.geometry.card_width)
    }
}

impl Measure for GeometricMeasure {
    fn viewport_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.layout.viewport_width, self.card_height)
    }

    fn card_bounds(&self, index: usize) -> Option<Rect> {
        if index >= self.layout.item_count {
            return None;
        }
        let g = &self.layout.geometry;
        let width = self.card_width();
        let scroll = match self.layout.mode {
            LayoutMode::NaturalScroll => self.scroll_left,
            LayoutMode::TransformPaging | LayoutMode::AllVisibleStatic => 0.0,
        };
        let x0 = g.padding_left + index as f64 * (width + g.card_gap) - scroll;
        Some(Rect::new(x0, 0.0, x0 + width, self.card_height))
    }

    fn sync(&mut self, layout: &LayoutSnapshot) {
        self.layout = *layout;
    }

    fn scrolled_to(&mut self, scroll_left: f64) {
        self.scroll_left = scroll_left;
    }
}
