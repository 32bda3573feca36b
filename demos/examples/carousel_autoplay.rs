// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Autoplay on a simulated clock.
//!
//! Drives a five-card carousel through its timer deadlines, clicks an indicator halfway
//! through, and prints every slide change with the indicator fill. Set `RUST_LOG=reel_engine=trace`
//! to watch interaction transitions.
//!
//! Run:
//! - `cargo run -p reel_demos --example carousel_autoplay`

use std::time::Duration;

use reel_engine::{Action, Carousel, CarouselItem, CarouselOptions, Effect};
use reel_view::render;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reel_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let items: Vec<CarouselItem> = (1_u32..)
        .zip(["Search", "Share", "Sync", "Secure", "Scale"])
        .map(|(id, title)| CarouselItem::new(id, title, format!("{title} your work")))
        .collect();
    let options = CarouselOptions::default().with_auto_play_interval(Duration::from_millis(3000));
    let mut carousel = Carousel::new(items, options).expect("valid options");
    let _ = carousel.mount(Duration::ZERO, 1280.0);
    println!("mounted in {} mode", carousel.layout().mode.name());

    let end = Duration::from_secs(30);
    let click_at = Duration::from_secs(10);
    let mut clicked = false;
    while let Some(at) = carousel.next_deadline() {
        if at > end {
            break;
        }
        let effects = if !clicked && at >= click_at {
            clicked = true;
            println!("{:>6}ms  user clicks indicator 4", at.as_millis());
            carousel.dispatch(at, Action::IndicatorClick(3))
        } else {
            carousel.advance(at)
        };
        for effect in effects {
            if let Effect::SlideChanged(index) = effect {
                let frame = render(&carousel.snapshot(), carousel.items(), carousel.options())
                    .expect("items present");
                let fills: Vec<String> = frame
                    .indicators
                    .iter()
                    .flat_map(|row| row.items.iter())
                    .map(|dot| format!("{:>3.0}", dot.fill))
                    .collect();
                println!(
                    "{:>6}ms  slide -> {index} ({})  [{}]",
                    at.as_millis(),
                    carousel.items()[index].title,
                    fills.join(" ")
                );
            }
        }
    }
}
