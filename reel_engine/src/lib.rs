// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reel Engine: a deterministic carousel store.
//!
//! ## Overview
//!
//! A [`Carousel`] keeps one horizontal strip of cards in sync with its viewport:
//!
//! - it picks a layout mode from [`reel_layout`] whenever the viewport width, options, or items
//!   change,
//! - it advances the active card on an autoplay timer and draws the progress bar,
//! - it tracks drags, touches, keyboard navigation, and indicator clicks, and holds autoplay
//!   for a cooldown after any of them,
//! - it reconciles native scrolling back to the card nearest the viewport center, ignoring the
//!   scroll events that its own smooth scrolls produce.
//!
//! The store never reads a clock, touches a DOM, or spawns a timer. Hosts pass the current
//! monotonic time with every [`Action`], apply the returned [`Effect`]s, and call
//! [`Carousel::advance`] at [`Carousel::next_deadline`]. Live card boxes come from a
//! [`Measure`] implementation; [`GeometricMeasure`] computes them from the layout.
//!
//! ## Example
//!
//! ```rust
//! use core::time::Duration;
//! use reel_engine::{Carousel, CarouselItem, CarouselOptions, Effect};
//!
//! let items: Vec<CarouselItem> = (0..5_u32)
//!     .map(|i| CarouselItem::new(i, format!("Card {i}"), "Lorem ipsum"))
//!     .collect();
//! let options = CarouselOptions::default().with_auto_play_interval(Duration::from_millis(3000));
//! let mut carousel = Carousel::new(items, options).unwrap();
//!
//! carousel.mount(Duration::ZERO, 1280.0);
//! assert_eq!(carousel.next_deadline(), Some(Duration::from_millis(80)));
//!
//! // The first card dwells for 137.5% of the interval: 52 ticks of 80ms.
//! assert!(carousel.advance(Duration::from_millis(51 * 80)).is_empty());
//! let effects = carousel.advance(Duration::from_millis(52 * 80));
//! assert_eq!(effects, vec![Effect::SlideChanged(1)]);
//!
//! // Manual navigation holds autoplay for five seconds.
//! carousel.next_slide(Duration::from_millis(5000));
//! assert_eq!(carousel.active_index(), 2);
//! assert!(carousel.interaction().is_suspended());
//! ```
//!
//! ## Features
//!
//! - `std` (default) and `libm` select Kurbo's float backend.
//! - `tracing` logs mounts, mode changes, interaction transitions, and advances.
//! - `serde` derives (de)serialization for options and items.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod autoplay;
mod carousel;
mod error;
pub mod hover;
pub mod interaction;
mod item;
pub mod measure;
pub mod options;
mod snapshot;
pub mod types;

pub use carousel::Carousel;
pub use error::OptionsError;
pub use hover::{HoverEvent, HoverState};
pub use interaction::{Drag, Interaction};
pub use item::{CarouselItem, ItemId};
pub use measure::{GeometricMeasure, Measure};
pub use options::{CardStyle, CarouselOptions, ColorTheme, IndicatorStyle, ResumePolicy};
pub use snapshot::{LayoutSnapshot, Snapshot};
pub use types::{Action, DeviceCaps, Effect, NavKey, PointerKind, Region, ScrollBehavior};

pub use reel_layout;
