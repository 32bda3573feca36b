// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inputs and outputs of the carousel store: actions, effects, pointers, and device capabilities.
//!
//! ## Overview
//!
//! Hosts translate their native events into [`Action`]s and pass them to
//! [`Carousel::dispatch`](crate::Carousel::dispatch) together with the current time.
//! The store answers with [`Effect`]s that the host applies: notify listeners of a slide change,
//! scroll the native container, or restyle hovered regions.

use alloc::vec::Vec;

use crate::hover::HoverEvent;

/// Kind of pointer that produced an input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Mouse or trackpad.
    Mouse,
    /// Finger on a touch screen.
    Touch,
}

/// Keyboard navigation keys understood by the carousel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavKey {
    /// Previous item.
    Left,
    /// Next item.
    Right,
    /// First item.
    Home,
    /// Last item.
    End,
}

/// A part of the carousel the pointer can be over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// The scroll viewport around the card strip.
    Viewport,
    /// A card by index.
    Card(usize),
    /// An indicator by index.
    Indicator(usize),
}

/// How a programmatic scroll should animate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    /// Animated scroll.
    Smooth,
}

/// Something that happened to the carousel, as seen by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// The carousel was attached with the given viewport width. Starts timers.
    Mount {
        /// Current viewport width in pixels.
        viewport_width: f64,
    },
    /// The window was resized.
    Resize {
        /// New viewport width in pixels.
        viewport_width: f64,
    },
    /// No input; only fire timers that are due.
    Advance,
    /// The native scroll container reported a position.
    Scroll {
        /// Horizontal scroll offset of the container.
        scroll_left: f64,
    },
    /// A finger touched the native scroll container.
    TouchStart,
    /// A pointer was pressed over the strip.
    PointerDown {
        /// Horizontal pointer position.
        x: f64,
        /// Pointer kind.
        kind: PointerKind,
    },
    /// A pressed pointer moved.
    PointerMove {
        /// Horizontal pointer position.
        x: f64,
        /// Pointer kind.
        kind: PointerKind,
    },
    /// A pressed pointer was released.
    PointerUp {
        /// Horizontal pointer position.
        x: f64,
        /// Pointer kind.
        kind: PointerKind,
    },
    /// The platform cancelled the pointer sequence.
    PointerCancel,
    /// An indicator was clicked.
    IndicatorClick(usize),
    /// Go to the next item.
    Next,
    /// Go to the previous item.
    Prev,
    /// Go to a specific item.
    ScrollToSlide(usize),
    /// A navigation key was pressed while the carousel had focus.
    Key(NavKey),
    /// The pointer is now over this root→leaf region path (empty when it left the carousel).
    Hover(Vec<Region>),
    /// The carousel was detached. Every later action is ignored.
    Unmount,
}

/// Work the host must carry out after a dispatch.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// The active index changed; invoke `onSlideChange(index)`.
    SlideChanged(usize),
    /// Scroll the native container to `left`.
    ScrollContainer {
        /// Target horizontal scroll offset.
        left: f64,
        /// Scroll animation.
        behavior: ScrollBehavior,
    },
    /// Hover moved into or out of a region.
    Hover(HoverEvent<Region>),
}

bitflags::bitflags! {
    /// Input capabilities of the device the carousel runs on.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DeviceCaps: u8 {
        /// Touch input is available; mouse-driven drags are ignored to avoid
        /// double handling of synthesized mouse events.
        const TOUCH = 0b0000_0001;
        /// A hovering pointer is available.
        const HOVER = 0b0000_0010;
    }
}

impl Default for DeviceCaps {
    fn default() -> Self {
        Self::HOVER
    }
}

impl DeviceCaps {
    /// Build capabilities from the usual browser probes: presence of `ontouchstart`,
    /// `navigator.maxTouchPoints`, and a `(hover: hover)` media query.
    pub fn detect(has_touch_start: bool, max_touch_points: u32, can_hover: bool) -> Self {
        let mut caps = Self::empty();
        if has_touch_start || max_touch_points > 0 {
            caps |= Self::TOUCH;
        }
        if can_hover {
            caps |= Self::HOVER;
        }
        caps
    }

    /// True if drags from `kind` should be handled on this device.
    pub fn drives_drag(self, kind: PointerKind) -> bool {
        if self.contains(Self::TOUCH) {
            kind == PointerKind::Touch
        } else {
            kind == PointerKind::Mouse
        }
    }
}
