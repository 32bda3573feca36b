// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll reconciliation and drag paging.
//!
//! Part one runs a phone-width carousel in native-scroll mode against a custom [`Measure`]
//! that plays the role of cached client rects. It shows a user scroll being reconciled to
//! the nearest card, and a programmatic scroll whose own scroll events are ignored.
//!
//! Part two drags a desktop carousel in transform paging, once short of the threshold and
//! once past it.
//!
//! Run:
//! - `cargo run -p reel_demos --example carousel_gestures`

use std::time::Duration;

use kurbo::Rect;
use reel_engine::{
    Action, Carousel, CarouselItem, CarouselOptions, Effect, LayoutSnapshot, Measure,
    OptionsError, PointerKind,
};

/// Client rects as a browser host would cache them after layout.
#[derive(Default)]
struct ClientRects {
    viewport: Rect,
    cards: Vec<Rect>,
    scroll_left: f64,
}

impl Measure for ClientRects {
    fn viewport_bounds(&self) -> Rect {
        self.viewport
    }

    fn card_bounds(&self, index: usize) -> Option<Rect> {
        self.cards
            .get(index)
            .map(|r| r.with_origin((r.x0 - self.scroll_left, r.y0)))
    }

    fn sync(&mut self, layout: &LayoutSnapshot) {
        let g = &layout.geometry;
        self.viewport = Rect::new(0.0, 0.0, layout.viewport_width, 320.0);
        self.cards = (0..layout.item_count)
            .map(|i| {
                let x0 = g.padding_left + i as f64 * g.stride();
                Rect::new(x0, 0.0, x0 + g.card_width, 320.0)
            })
            .collect();
    }

    fn scrolled_to(&mut self, scroll_left: f64) {
        self.scroll_left = scroll_left;
    }
}

fn items(n: u32) -> Vec<CarouselItem> {
    (0..n)
        .map(|i| CarouselItem::new(i, format!("Card {i}"), "Swipe me"))
        .collect()
}

fn report(label: &str, effects: &[Effect]) {
    if effects.is_empty() {
        println!("  {label}: no effects");
    }
    for effect in effects {
        println!("  {label}: {effect:?}");
    }
}

fn drag(carousel: &mut Carousel, at: Duration, dx: f64) -> Vec<Effect> {
    let start = 640.0;
    let mouse = PointerKind::Mouse;
    let down = Action::PointerDown {
        x: start,
        kind: mouse,
    };
    let _ = carousel.dispatch(at, down);
    let _ = carousel.dispatch(
        at + Duration::from_millis(8),
        Action::PointerMove {
            x: start + dx,
            kind: mouse,
        },
    );
    let offset = carousel.snapshot().strip_offset();
    println!("  strip offset while dragging: {offset}");
    carousel.dispatch(
        at + Duration::from_millis(16),
        Action::PointerUp {
            x: start + dx,
            kind: mouse,
        },
    )
}

fn main() -> Result<(), OptionsError> {
    let ms = Duration::from_millis;

    println!("native scroll at 600px");
    let rects = ClientRects::default();
    let mut phone = Carousel::with_measure(items(6), CarouselOptions::default(), rects)?;
    let _ = phone.mount(Duration::ZERO, 600.0);
    report("user scrolls to 700", &phone.scroll(ms(1000), 700.0));
    let clicked = phone.dispatch(ms(2000), Action::IndicatorClick(4));
    report("indicator 5", &clicked);
    report("our own scroll frame", &phone.scroll(ms(2016), 120.0));
    println!("  active card stays {}", phone.active_index());

    println!("transform paging at 1280px");
    let mut desktop = Carousel::new(items(8), CarouselOptions::default())?;
    let _ = desktop.mount(Duration::ZERO, 1280.0);
    for (t, dx) in [(100, -60.0), (200, -120.0)] {
        let effects = drag(&mut desktop, ms(t), dx);
        report(&format!("drag {dx}px"), &effects);
    }
    println!("  slide is now {}", desktop.current_slide());
    Ok(())
}
