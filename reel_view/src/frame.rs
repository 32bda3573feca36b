// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use reel_engine::autoplay::threshold_for;
use reel_engine::reel_layout::LayoutMode;
use reel_engine::{CardStyle, CarouselItem, CarouselOptions, ColorTheme, IndicatorStyle, Snapshot};

/// How a card is sized.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CardWidth {
    /// Fixed pixel width; the strip overflows.
    Fixed(f64),
    /// Share of the available width in the static layout (the resolved width is carried along).
    Flexible(f64),
}

impl CardWidth {
    /// Resolved pixel width.
    pub fn px(self) -> f64 {
        match self {
            Self::Fixed(w) | Self::Flexible(w) => w,
        }
    }
}

/// One card.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardView {
    /// Position in the item list.
    pub index: usize,
    /// Sizing.
    pub width: CardWidth,
    /// The card is the focused item.
    pub active: bool,
    /// The card is on the current page.
    pub in_view: bool,
    /// Draw the active highlight.
    pub highlighted: bool,
}

/// One indicator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndicatorView {
    /// Item the indicator navigates to.
    pub index: usize,
    /// Draw as the current item.
    pub active: bool,
    /// Fill in percent (0..=100).
    pub fill: f64,
}

/// The indicator row.
#[derive(Clone, Debug, PartialEq)]
pub struct Indicators {
    /// Dot or line.
    pub style: IndicatorStyle,
    /// Theme of the active indicator.
    pub color: ColorTheme,
    /// One per item.
    pub items: Vec<IndicatorView>,
}

/// The moving strip that holds the cards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Strip {
    /// Layout mode the strip is drawn in.
    pub mode: LayoutMode,
    /// Horizontal translate in transform paging (drag offset included); zero otherwise.
    pub offset: f64,
    /// Disable the translate transition while a drag is live.
    pub dragging: bool,
    /// The container scrolls natively.
    pub native_scroll: bool,
    /// Pointer drags page the strip.
    pub draggable: bool,
    /// Scroll, touch, and drag handlers are attached.
    pub handlers_enabled: bool,
    /// Gap between cards.
    pub gap: f64,
    /// Left container padding.
    pub padding_left: f64,
    /// Right container padding.
    pub padding_right: f64,
}

/// Everything needed to draw one carousel frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Strip placement and behavior.
    pub strip: Strip,
    /// Card chrome.
    pub card_style: CardStyle,
    /// Highlight theme.
    pub theme: ColorTheme,
    /// Cards in item order.
    pub cards: Vec<CardView>,
    /// Indicator row, if enabled.
    pub indicators: Option<Indicators>,
    /// Show the edge fades.
    pub gradients: bool,
}

/// Build a frame from the store snapshot. Returns `None` when there is nothing to draw.
///
/// `items` must be the list the snapshot was taken from.
pub fn render<N>(
    snapshot: &Snapshot,
    items: &[CarouselItem<N>],
    options: &CarouselOptions,
) -> Option<Frame> {
    let n = items.len();
    if n == 0 {
        return None;
    }
    let layout = &snapshot.layout;
    let geometry = &layout.geometry;
    let width = match layout.flexible_card_width() {
        Some(w) => CardWidth::Flexible(w),
        None => CardWidth::Fixed(geometry.card_width),
    };
    let in_view = snapshot.visible_range();

    let cards = (0..n)
        .map(|index| {
            let active = index == snapshot.active_index;
            CardView {
                index,
                width,
                active,
                in_view: in_view.contains(&index),
                highlighted: active && options.highlight_active_card,
            }
        })
        .collect();

    let indicators = options.show_progress_indicators.then(|| Indicators {
        style: options.indicator_style,
        color: options.indicator_color,
        items: (0..n)
            .map(|index| indicator(snapshot, options.indicator_style, n, index))
            .collect(),
    });

    Some(Frame {
        strip: Strip {
            mode: layout.mode,
            offset: snapshot.strip_offset(),
            dragging: snapshot.is_dragging(),
            native_scroll: layout.mode == LayoutMode::NaturalScroll,
            draggable: layout.mode.accepts_drag() && n > 1,
            handlers_enabled: layout.mode.can_move(),
            gap: geometry.card_gap,
            padding_left: geometry.padding_left,
            padding_right: geometry.padding_right,
        },
        card_style: options.card_style,
        theme: options.indicator_color,
        cards,
        indicators,
        gradients: options.show_gradients && layout.can_scroll() && !snapshot.hovering,
    })
}

fn indicator(snapshot: &Snapshot, style: IndicatorStyle, n: usize, index: usize) -> IndicatorView {
    // A lone item has nothing to advance to.
    let active = n > 1 && index == snapshot.active_index;
    let fill = match (active, style) {
        (false, _) => 0.0,
        (true, IndicatorStyle::Line) => 100.0,
        (true, IndicatorStyle::Progress) => {
            (snapshot.progress / threshold_for(index) * 100.0).clamp(0.0, 100.0)
        }
    };
    IndicatorView {
        index,
        active,
        fill,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;
    use core::time::Duration;
    use reel_engine::{Action, Carousel, Region};

    fn items(n: usize) -> Vec<CarouselItem> {
        (0..n)
            .map(|i| CarouselItem::new(format!("{i}"), format!("Card {i}"), "Body"))
            .collect()
    }

    fn frame(c: &Carousel) -> Frame {
        render(&c.snapshot(), c.items(), c.options()).unwrap()
    }

    #[test]
    fn nothing_to_draw_without_items() {
        let c: Carousel<String> = Carousel::new(Vec::new(), CarouselOptions::default()).unwrap();
        assert_eq!(render(&c.snapshot(), c.items(), c.options()), None);
    }

    #[test]
    fn paging_marks_page_and_active_card() {
        let mut c = Carousel::new(items(6), CarouselOptions::default()).unwrap();
        let _ = c.mount(Duration::ZERO, 1280.0);
        let _ = c.scroll_to_slide(Duration::from_millis(10), 5);
        let f = frame(&c);
        // 4 visible, slide 2.
        let page = f.cards.iter().filter(|c| c.in_view);
        let in_view: Vec<usize> = page.map(|c| c.index).collect();
        assert_eq!(in_view, [2, 3, 4, 5]);
        assert!(f.cards[5].active && f.cards[5].highlighted);
        assert!(!f.cards[2].active);
        assert_eq!(f.cards[0].width, CardWidth::Fixed(260.0));
        assert_eq!(f.strip.offset, -2.0 * 276.0);
        assert!(f.strip.draggable && !f.strip.native_scroll);
    }

    #[test]
    fn static_layout_uses_flexible_cards() {
        let mut c = Carousel::new(items(3), CarouselOptions::platform_page()).unwrap();
        let _ = c.mount(Duration::ZERO, 1400.0);
        let f = frame(&c);
        assert_eq!(f.strip.mode, LayoutMode::AllVisibleStatic);
        let flexible = |c: &CardView| matches!(c.width, CardWidth::Flexible(w) if w >= 300.0);
        assert!(f.cards.iter().all(flexible));
        assert!(f.cards.iter().all(|c| c.in_view));
        assert!(!f.gradients);
        assert!(!f.strip.handlers_enabled);
    }

    #[test]
    fn single_item_indicator_looks_inactive() {
        let mut c = Carousel::new(items(1), CarouselOptions::default()).unwrap();
        let _ = c.mount(Duration::ZERO, 1280.0);
        let f = frame(&c);
        let dots = f.indicators.unwrap();
        assert_eq!(dots.items.len(), 1);
        assert!(!dots.items[0].active);
        assert_eq!(dots.items[0].fill, 0.0);
        // The card itself still carries the highlight.
        assert!(f.cards[0].highlighted);
    }

    #[test]
    fn progress_fills_active_indicator() {
        let interval = Duration::from_millis(800);
        let options = CarouselOptions::default().with_auto_play_interval(interval);
        let mut c = Carousel::new(items(4), options).unwrap();
        let _ = c.mount(Duration::ZERO, 1280.0);
        let _ = c.next_slide(Duration::from_millis(1));
        let _ = c.advance(Duration::from_millis(5001 + 5 * 80));
        // 10 per tick, 5 ticks on card 1: half way to 100.
        let dots = frame(&c).indicators.unwrap();
        assert_eq!(dots.items[1].fill, 50.0);
        assert_eq!(dots.items[0].fill, 0.0);

        let lines = CarouselOptions::default().with_indicator_style(IndicatorStyle::Line);
        let _ = c.set_options(Duration::from_millis(5500), lines).unwrap();
        let dots = frame(&c).indicators.unwrap();
        assert_eq!(dots.items[1].fill, 100.0);
    }

    #[test]
    fn gradients_hide_while_hovering() {
        let mut c = Carousel::new(items(8), CarouselOptions::default()).unwrap();
        let _ = c.mount(Duration::ZERO, 1280.0);
        assert!(frame(&c).gradients);
        let over = Action::Hover(alloc::vec![Region::Viewport]);
        let _ = c.dispatch(Duration::from_millis(5), over);
        assert!(!frame(&c).gradients);
        let _ = c.dispatch(Duration::from_millis(6), Action::Hover(Vec::new()));
        assert!(frame(&c).gradients);

        let hidden = CarouselOptions::default()
            .with_gradients(false)
            .with_progress_indicators(false);
        let _ = c.set_options(Duration::from_millis(7), hidden).unwrap();
        let f = frame(&c);
        assert!(!f.gradients);
        assert!(f.indicators.is_none());
    }
}
