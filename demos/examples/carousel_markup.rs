// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Options and items from JSON, rendered to HTML.
//!
//! Run:
//! - `cargo run -p reel_demos --example carousel_markup`

use std::time::Duration;

use reel_engine::{Carousel, CarouselItem, CarouselOptions};
use reel_view::{markup, render};

const OPTIONS: &str = r#"{
    "autoPlayInterval": 5000,
    "responsive": {
        "sm": { "cardWidth": 240, "cardGap": 12 },
        "xl": { "cardWidth": 320, "cardGap": 24 }
    },
    "flexibleWidth": true,
    "indicatorStyle": "line",
    "cardStyle": "outlined",
    "indicatorColor": "accent"
}"#;

const ITEMS: &str = r#"[
    { "id": 1, "title": "Fast", "description": "Sub-millisecond <b>dispatch</b>", "icon": "⚡" },
    { "id": "two", "title": "Small", "description": "no_std & alloc only" },
    { "id": 3, "title": "Tested", "description": "Property tests", "content": "proptest" }
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options: CarouselOptions = serde_json::from_str(OPTIONS)?;
    let items: Vec<CarouselItem> = serde_json::from_str(ITEMS)?;
    let mut carousel = Carousel::new(items, options)?;

    let _ = carousel.mount(Duration::ZERO, 480.0);

    for width in [480.0, 1440.0] {
        let _ = carousel.resize(Duration::ZERO, width);
        let snapshot = carousel.snapshot();
        let Some(frame) = render(&snapshot, carousel.items(), carousel.options()) else {
            continue;
        };
        let mut html = String::new();
        markup::write_html(&frame, carousel.items(), &mut html)?;
        println!("<!-- {width}px: {} -->", carousel.layout().mode.name());
        println!("{html}");
    }
    Ok(())
}
