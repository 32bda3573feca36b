// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML output for a [`Frame`].
//!
//! The markup is static: hosts attach their own listeners and map them to
//! [`Action`](reel_engine::Action)s. Class names follow a `reel__element` / `reel--modifier`
//! scheme; state is also mirrored in `data-*` attributes and ARIA.
//!
//! Item text and payloads are escaped. An item without an icon or content gets no element
//! for it at all.

use core::fmt::{self, Write};

use reel_engine::CarouselItem;
use reel_engine::reel_layout::LayoutMode;

use crate::frame::{CardWidth, Frame, Indicators};

/// Writes HTML-escaped text to the inner writer.
struct Escaped<'a, W: Write>(&'a mut W);

impl<W: Write> Write for Escaped<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut rest = s;
        while let Some(at) = rest.find(['&', '<', '>', '"', '\'']) {
            self.0.write_str(&rest[..at])?;
            let entity = match rest.as_bytes()[at] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#39;",
            };
            self.0.write_str(entity)?;
            rest = &rest[at + 1..];
        }
        self.0.write_str(rest)
    }
}

fn mode_class(mode: LayoutMode) -> &'static str {
    match mode {
        LayoutMode::NaturalScroll => "natural",
        LayoutMode::TransformPaging => "paging",
        LayoutMode::AllVisibleStatic => "static",
    }
}

/// Write `frame` as HTML.
///
/// `items` must be the list the frame was rendered from; payloads are written through their
/// [`Display`](core::fmt::Display) impl and escaped.
pub fn write_html<N: fmt::Display>(
    frame: &Frame,
    items: &[CarouselItem<N>],
    out: &mut impl Write,
) -> fmt::Result {
    let strip = &frame.strip;
    write!(
        out,
        r#"<section class="reel reel--{}" aria-roledescription="carousel">"#,
        mode_class(strip.mode)
    )?;
    out.write_str(r#"<div class="reel__viewport""#)?;
    if strip.native_scroll {
        out.write_str(r#" style="overflow-x: auto""#)?;
    }
    if strip.draggable {
        out.write_str(r#" data-draggable="true""#)?;
    }
    out.write_char('>')?;

    if frame.gradients {
        out.write_str(r#"<div class="reel__fade reel__fade--left" aria-hidden="true"></div>"#)?;
        out.write_str(r#"<div class="reel__fade reel__fade--right" aria-hidden="true"></div>"#)?;
    }

    write!(
        out,
        r#"<div class="reel__strip{}" style="gap: {}px; padding-left: {}px; padding-right: {}px"#,
        if strip.dragging { " is-dragging" } else { "" },
        strip.gap,
        strip.padding_left,
        strip.padding_right,
    )?;
    if strip.mode == LayoutMode::TransformPaging {
        write!(out, "; transform: translateX({}px)", strip.offset)?;
    }
    out.write_str(r#"">"#)?;

    for (card, item) in frame.cards.iter().zip(items) {
        write!(
            out,
            r#"<article class="reel__card reel__card--{}"#,
            frame.card_style.name()
        )?;
        if card.active {
            out.write_str(" is-active")?;
        }
        if card.highlighted {
            write!(out, " reel__card--highlight-{}", frame.theme.name())?;
        }
        write!(out, r#"" data-index="{}""#, card.index)?;
        match card.width {
            CardWidth::Fixed(w) => write!(out, r#" style="flex: 0 0 {w}px; width: {w}px""#)?,
            CardWidth::Flexible(_) => out.write_str(r#" style="flex: 1 1 0""#)?,
        }
        if !card.in_view {
            out.write_str(r#" aria-hidden="true""#)?;
        }
        out.write_char('>')?;

        if let Some(icon) = &item.icon {
            out.write_str(r#"<div class="reel__icon">"#)?;
            write!(Escaped(&mut *out), "{icon}")?;
            out.write_str("</div>")?;
        }
        out.write_str(r#"<h3 class="reel__title">"#)?;
        Escaped(&mut *out).write_str(&item.title)?;
        out.write_str(r#"</h3><p class="reel__description">"#)?;
        Escaped(&mut *out).write_str(&item.description)?;
        out.write_str("</p>")?;
        if let Some(content) = &item.content {
            out.write_str(r#"<div class="reel__content">"#)?;
            write!(Escaped(&mut *out), "{content}")?;
            out.write_str("</div>")?;
        }
        out.write_str("</article>")?;
    }
    out.write_str("</div></div>")?;

    if let Some(indicators) = &frame.indicators {
        write_indicators(indicators, out)?;
    }
    out.write_str("</section>")
}

fn write_indicators(indicators: &Indicators, out: &mut impl Write) -> fmt::Result {
    write!(
        out,
        r#"<nav class="reel__indicators reel__indicators--{} reel__indicators--{}">"#,
        indicators.style.name(),
        indicators.color.name()
    )?;
    for dot in &indicators.items {
        write!(
            out,
            r#"<button type="button" class="reel__indicator{}" data-index="{}" aria-label="Go to slide {}""#,
            if dot.active { " is-active" } else { "" },
            dot.index,
            dot.index + 1
        )?;
        if dot.active {
            out.write_str(r#" aria-current="true""#)?;
        }
        write!(
            out,
            r#"><span class="reel__indicator-fill" style="width: {}%"></span></button>"#,
            dot.fill
        )?;
    }
    out.write_str("</nav>")
}
