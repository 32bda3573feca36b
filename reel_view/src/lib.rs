// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reel View: the presentation side of a reel carousel.
//!
//! [`render`] turns a [`Snapshot`](reel_engine::Snapshot) plus the item list into a [`Frame`]:
//! card widths, which card is active and which are on the current page, indicator fill, the
//! strip translate, and whether the edge fades show. [`markup::write_html`] serializes a frame.
//!
//! Rendering is a pure function of its inputs; nothing here feeds back into the store.
//!
//! ```rust
//! use core::time::Duration;
//! use reel_engine::{Carousel, CarouselItem, CarouselOptions};
//! use reel_view::{CardWidth, markup, render};
//!
//! let items: Vec<CarouselItem> = vec![
//!     CarouselItem::new(1_u32, "Search", "Find anything"),
//!     CarouselItem::new(2_u32, "Share", "Send it along"),
//!     CarouselItem::new(3_u32, "Sync", "Everywhere"),
//! ];
//! let mut carousel = Carousel::new(items, CarouselOptions::platform_page()).unwrap();
//! carousel.mount(Duration::ZERO, 1400.0);
//!
//! let frame = render(&carousel.snapshot(), carousel.items(), carousel.options()).unwrap();
//! assert!(matches!(frame.cards[0].width, CardWidth::Flexible(_)));
//! assert!(!frame.gradients);
//!
//! let mut html = String::new();
//! markup::write_html(&frame, carousel.items(), &mut html).unwrap();
//! assert!(html.contains("Find anything"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod frame;
pub mod markup;

pub use frame::{CardView, CardWidth, Frame, IndicatorView, Indicators, Strip, render};
