// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel store.
//!
//! ## Overview
//!
//! [`Carousel`] owns every piece of mutable carousel state: the active index, the paging
//! slide, autoplay progress, the tagged [`Interaction`], and the deadlines of its timers.
//! Hosts feed it [`Action`]s with a monotonic timestamp and apply the returned [`Effect`]s.
//!
//! ## Timers
//!
//! Timers are deadlines inside the store. Before an action is applied, every deadline up to
//! `now` fires in chronological order, so timer work always reads the latest state. When two
//! deadlines coincide the order is: re-entrancy guard, trailing scroll reconciliation,
//! manual-input cooldown, autoplay tick. Ask [`Carousel::next_deadline`] when to call
//! [`Carousel::advance`] next.
//!
//! ## Re-entrancy
//!
//! Navigating in natural-scroll mode emits [`Effect::ScrollContainer`] and enters
//! [`Interaction::ProgrammaticScrolling`] for [`SCROLL_GUARD`]. Scroll events that arrive
//! inside that window are the browser executing our own scroll; they update the measurer but
//! are neither reconciled nor counted as manual input.

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use reel_layout::paging::{clamp_slide, nearest_center, nearest_theoretical_card};
use reel_layout::LayoutMode;

use crate::autoplay::Ticker;
use crate::error::OptionsError;
use crate::hover::HoverState;
use crate::interaction::{
    COOLDOWN, DRAG_THRESHOLD_RATIO, Drag, Interaction, SCROLL_GUARD, ScrollThrottle,
};
use crate::item::CarouselItem;
use crate::measure::{GeometricMeasure, Measure};
use crate::options::{CarouselOptions, ResumePolicy};
use crate::snapshot::{LayoutSnapshot, Snapshot};
use crate::types::{Action, DeviceCaps, Effect, NavKey, PointerKind, Region, ScrollBehavior};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

/// Deadline kinds, in tie-break order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Timer {
    Settle,
    ScrollFlush,
    Cooldown,
    Tick,
}

/// A carousel instance.
///
/// `N` is the item payload type (see [`CarouselItem`]); `M` supplies live card boxes.
///
/// ## Usage
///
/// - Construct with [`Carousel::new`] (geometric measurement) or [`Carousel::with_measure`].
/// - Dispatch [`Action::Mount`] once the viewport width is known.
/// - Forward resize, scroll, pointer, touch, key, hover, and indicator events.
/// - Call [`Carousel::advance`] at [`Carousel::next_deadline`].
/// - Render from [`Carousel::snapshot`].
/// - Dispatch [`Action::Unmount`] when done; the store then ignores everything.
pub struct Carousel<N = String, M: Measure = GeometricMeasure> {
    items: Vec<CarouselItem<N>>,
    options: CarouselOptions,
    caps: DeviceCaps,
    measure: M,
    lifecycle: Lifecycle,
    clock: Duration,
    layout: LayoutSnapshot,
    scroll_left: f64,
    active_index: usize,
    current_slide: usize,
    ticker: Ticker,
    interaction: Interaction,
    // Autoplay came to rest after a cooldown because the resume policy held it back.
    held: bool,
    throttle: ScrollThrottle,
    hover: HoverState<Region>,
}

impl<N, M: Measure> core::fmt::Debug for Carousel<N, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Carousel")
            .field("items", &self.items.len())
            .field("lifecycle", &self.lifecycle)
            .field("mode", &self.layout.mode)
            .field("active_index", &self.active_index)
            .field("current_slide", &self.current_slide)
            .field("interaction", &self.interaction)
            .finish_non_exhaustive()
    }
}

impl<N> Carousel<N, GeometricMeasure> {
    /// Create an unmounted carousel measured from its own geometry.
    pub fn new(
        items: Vec<CarouselItem<N>>,
        options: CarouselOptions,
    ) -> Result<Self, OptionsError> {
        Self::with_measure(items, options, GeometricMeasure::default())
    }
}

impl<N, M: Measure> Carousel<N, M> {
    /// Create an unmounted carousel with an explicit measurer.
    pub fn with_measure(
        items: Vec<CarouselItem<N>>,
        options: CarouselOptions,
        mut measure: M,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        let layout = LayoutSnapshot::derive(&options, items.len(), 0.0);
        measure.sync(&layout);
        Ok(Self {
            items,
            options,
            caps: DeviceCaps::default(),
            measure,
            lifecycle: Lifecycle::Created,
            clock: Duration::ZERO,
            layout,
            scroll_left: 0.0,
            active_index: 0,
            current_slide: 0,
            ticker: Ticker::default(),
            interaction: Interaction::Idle,
            held: false,
            throttle: ScrollThrottle::default(),
            hover: HoverState::new(),
        })
    }

    /// Set the device capabilities (builder form).
    #[must_use]
    pub fn with_device_caps(mut self, caps: DeviceCaps) -> Self {
        self.caps = caps;
        self
    }

    /// Items in display order.
    pub fn items(&self) -> &[CarouselItem<N>] {
        &self.items
    }

    /// Current options.
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Device capabilities.
    pub fn device_caps(&self) -> DeviceCaps {
        self.caps
    }

    /// The measurer.
    pub fn measure(&self) -> &M {
        &self.measure
    }

    /// The measurer, mutably (for hosts that refresh cached boxes).
    pub fn measure_mut(&mut self) -> &mut M {
        &mut self.measure
    }

    /// Focused item.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Left-most card in view in transform paging; tracks `active_index` elsewhere.
    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    /// Autoplay progress.
    pub fn progress(&self) -> f64 {
        self.ticker.progress()
    }

    /// Current layout.
    pub fn layout(&self) -> &LayoutSnapshot {
        &self.layout
    }

    /// Current interaction.
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// True between mount and unmount.
    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// Renderer view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            active_index: self.active_index,
            current_slide: self.current_slide,
            progress: self.ticker.progress(),
            layout: self.layout,
            interaction: self.interaction,
            hovering: self.hover.is_hovering(),
            mounted: self.is_mounted(),
        }
    }

    /// Earliest pending timer deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        if !self.is_mounted() {
            return None;
        }
        self.next_due().map(|(at, _)| at)
    }

    /// Apply an action at time `now` and return the effects to carry out.
    pub fn dispatch(&mut self, now: Duration, action: Action) -> Vec<Effect> {
        let mut out = Vec::new();
        match self.lifecycle {
            Lifecycle::Unmounted => return out,
            Lifecycle::Created => {
                if let Action::Mount { viewport_width } = action {
                    self.attach(now, viewport_width, &mut out);
                }
                return out;
            }
            Lifecycle::Mounted => {}
        }

        let now = self.observe(now);
        self.run_due(now, &mut out);

        match action {
            Action::Mount { viewport_width } | Action::Resize { viewport_width } => {
                self.relayout(now, viewport_width, &mut out);
            }
            Action::Advance => {}
            Action::Scroll { scroll_left } => self.on_scroll(now, scroll_left, &mut out),
            Action::TouchStart => self.on_touch_start(now),
            Action::PointerDown { x, kind } => self.on_pointer_down(now, x, kind),
            Action::PointerMove { x, kind } => self.on_pointer_move(x, kind),
            Action::PointerUp { x, kind } => self.on_pointer_up(now, x, kind, &mut out),
            Action::PointerCancel => self.on_pointer_cancel(now),
            Action::IndicatorClick(index) | Action::ScrollToSlide(index) => {
                self.go_to(now, index, &mut out);
            }
            Action::Next => self.step(now, true, &mut out),
            Action::Prev => self.step(now, false, &mut out),
            Action::Key(key) => self.on_key(now, key, &mut out),
            Action::Hover(path) => self.on_hover(&path, &mut out),
            Action::Unmount => self.detach(),
        }
        out
    }

    /// Mount with a viewport width.
    pub fn mount(&mut self, now: Duration, viewport_width: f64) -> Vec<Effect> {
        self.dispatch(now, Action::Mount { viewport_width })
    }

    /// Report a new viewport width.
    pub fn resize(&mut self, now: Duration, viewport_width: f64) -> Vec<Effect> {
        self.dispatch(now, Action::Resize { viewport_width })
    }

    /// Fire due timers.
    pub fn advance(&mut self, now: Duration) -> Vec<Effect> {
        self.dispatch(now, Action::Advance)
    }

    /// Report a native scroll position.
    pub fn scroll(&mut self, now: Duration, scroll_left: f64) -> Vec<Effect> {
        self.dispatch(now, Action::Scroll { scroll_left })
    }

    /// Navigate to `index` (clamped). Counts as manual input.
    pub fn scroll_to_slide(&mut self, now: Duration, index: usize) -> Vec<Effect> {
        self.dispatch(now, Action::ScrollToSlide(index))
    }

    /// Navigate to the next item, wrapping to the first.
    pub fn next_slide(&mut self, now: Duration) -> Vec<Effect> {
        self.dispatch(now, Action::Next)
    }

    /// Navigate to the previous item, wrapping to the last.
    pub fn prev_slide(&mut self, now: Duration) -> Vec<Effect> {
        self.dispatch(now, Action::Prev)
    }

    /// Unmount. All timers are dropped and later actions are ignored.
    pub fn unmount(&mut self, now: Duration) -> Vec<Effect> {
        self.dispatch(now, Action::Unmount)
    }

    /// Replace the options. Timers restart when autoplay settings change.
    pub fn set_options(
        &mut self,
        now: Duration,
        options: CarouselOptions,
    ) -> Result<Vec<Effect>, OptionsError> {
        options.validate()?;
        let restart = options.auto_play != self.options.auto_play
            || options.auto_play_interval != self.options.auto_play_interval;
        self.options = options;
        let mut out = Vec::new();
        match self.lifecycle {
            Lifecycle::Mounted => {
                let now = self.observe(now);
                self.run_due(now, &mut out);
                if restart {
                    self.held = false;
                }
                self.relayout(now, self.layout.viewport_width, &mut out);
                if restart && self.ticker.is_running() {
                    self.ticker.start(now);
                }
            }
            Lifecycle::Created => {
                self.layout = LayoutSnapshot::derive(&self.options, self.items.len(), 0.0);
                self.measure.sync(&self.layout);
            }
            Lifecycle::Unmounted => {}
        }
        Ok(out)
    }

    /// Replace the items. Indices are re-clamped.
    pub fn set_items(&mut self, now: Duration, items: Vec<CarouselItem<N>>) -> Vec<Effect> {
        self.items = items;
        let mut out = Vec::new();
        match self.lifecycle {
            Lifecycle::Mounted => {
                let now = self.observe(now);
                self.run_due(now, &mut out);
                self.relayout(now, self.layout.viewport_width, &mut out);
            }
            Lifecycle::Created => {
                self.layout = LayoutSnapshot::derive(&self.options, self.items.len(), 0.0);
                self.measure.sync(&self.layout);
            }
            Lifecycle::Unmounted => {}
        }
        out
    }

    // --- lifecycle -------------------------------------------------------------------------

    fn attach(&mut self, now: Duration, viewport_width: f64, out: &mut Vec<Effect>) {
        self.lifecycle = Lifecycle::Mounted;
        self.clock = now;
        self.relayout(now, viewport_width, out);
        if self.autoplay_allowed() {
            self.set_interaction(now, Interaction::AutoAdvancing);
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            items = self.items.len(),
            mode = self.layout.mode.name(),
            autoplay = self.ticker.is_running(),
            "carousel mounted"
        );
    }

    fn detach(&mut self) {
        self.lifecycle = Lifecycle::Unmounted;
        self.ticker.stop();
        self.interaction = Interaction::Idle;
        self.held = false;
        self.throttle.clear();
        let _ = self.hover.clear();
        #[cfg(feature = "tracing")]
        tracing::debug!("carousel unmounted");
    }

    fn observe(&mut self, now: Duration) -> Duration {
        if now > self.clock {
            self.clock = now;
        }
        self.clock
    }

    // --- layout ----------------------------------------------------------------------------

    fn relayout(&mut self, now: Duration, viewport_width: f64, out: &mut Vec<Effect>) {
        let layout = LayoutSnapshot::derive(&self.options, self.items.len(), viewport_width);
        #[cfg(feature = "tracing")]
        {
            if layout.tier != self.layout.tier {
                tracing::trace!(tier = layout.tier.name(), "tier changed");
            }
            if layout.mode != self.layout.mode {
                tracing::debug!(
                    from = self.layout.mode.name(),
                    to = layout.mode.name(),
                    "layout mode changed"
                );
            }
        }
        self.layout = layout;
        self.measure.sync(&self.layout);

        let n = self.items.len();
        let before = self.active_index;
        self.active_index = self.active_index.min(n.saturating_sub(1));
        self.current_slide = match layout.mode {
            LayoutMode::TransformPaging => clamp_slide(self.current_slide, n, layout.visible_cards),
            LayoutMode::NaturalScroll | LayoutMode::AllVisibleStatic => self.active_index,
        };
        if n > 0 && self.active_index != before {
            out.push(Effect::SlideChanged(self.active_index));
        }

        if self.interaction.drag().is_some() && !layout.mode.accepts_drag() {
            self.set_interaction(
                now,
                Interaction::UserScrolling {
                    resume_at: now + COOLDOWN,
                },
            );
        }
        self.refresh_rest(now);
    }

    // --- interaction state -----------------------------------------------------------------

    fn autoplay_allowed(&self) -> bool {
        self.options.auto_play && self.items.len() > 1
    }

    fn may_resume(&self) -> bool {
        match self.options.resume_policy {
            ResumePolicy::Always => true,
            ResumePolicy::DesktopOnly => self.layout.tier.is_desktop_like(),
        }
    }

    /// Swap the interaction state, starting or stopping the ticker on the edges.
    fn set_interaction(&mut self, now: Duration, next: Interaction) {
        let was = self.interaction.ticks_autoplay();
        let is = next.ticks_autoplay();
        #[cfg(feature = "tracing")]
        if self.interaction.name() != next.name() {
            tracing::trace!(
                from = self.interaction.name(),
                to = next.name(),
                "interaction"
            );
        }
        if next != Interaction::Idle {
            self.held = false;
        }
        self.interaction = next;
        if is && !was {
            self.ticker.start(now);
        } else if was && !is {
            self.ticker.stop();
        }
    }

    /// Re-evaluate a resting state after options, items, or tier changed.
    ///
    /// The resume policy only gates a rest that a manual cooldown ended in.
    fn refresh_rest(&mut self, now: Duration) {
        match self.interaction {
            Interaction::AutoAdvancing if !self.autoplay_allowed() => {
                self.set_interaction(now, Interaction::Idle);
            }
            Interaction::Idle if self.autoplay_allowed() && (!self.held || self.may_resume()) => {
                self.set_interaction(now, Interaction::AutoAdvancing);
            }
            _ => {}
        }
    }

    /// Manual input ended its cooldown.
    fn resume(&mut self, now: Duration) {
        let next = if self.autoplay_allowed() && self.may_resume() {
            Interaction::AutoAdvancing
        } else {
            Interaction::Idle
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(autoplay = next.ticks_autoplay(), "manual cooldown elapsed");
        self.set_interaction(now, next);
        self.held = self.autoplay_allowed() && !next.ticks_autoplay();
    }

    /// Record manual input and (re)arm the cooldown.
    fn mark_manual(&mut self, now: Duration) {
        let resume_at = now + COOLDOWN;
        match self.interaction {
            Interaction::Dragging(_) => {}
            Interaction::ProgrammaticScrolling { settles_at, .. } => self.set_interaction(
                now,
                Interaction::ProgrammaticScrolling {
                    settles_at,
                    resume_at: Some(resume_at),
                },
            ),
            Interaction::Idle | Interaction::AutoAdvancing | Interaction::UserScrolling { .. } => {
                self.set_interaction(now, Interaction::UserScrolling { resume_at });
            }
        }
    }

    // --- timers ----------------------------------------------------------------------------

    fn next_due(&self) -> Option<(Duration, Timer)> {
        let state = self.interaction.deadline().map(|at| {
            let timer = if self.interaction.guards_scroll() {
                Timer::Settle
            } else {
                Timer::Cooldown
            };
            (at, timer)
        });
        let flush = self.throttle.pending_at();
        [
            state,
            flush.map(|at| (at, Timer::ScrollFlush)),
            self.ticker.next_tick().map(|at| (at, Timer::Tick)),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn run_due(&mut self, now: Duration, out: &mut Vec<Effect>) {
        while let Some((at, timer)) = self.next_due() {
            if at > now {
                break;
            }
            match timer {
                Timer::Settle => self.on_settle(at),
                Timer::ScrollFlush => {
                    self.throttle.flush();
                    if !self.interaction.guards_scroll() {
                        self.reconcile(out);
                    }
                }
                Timer::Cooldown => self.resume(at),
                Timer::Tick => self.on_tick(at, out),
            }
        }
    }

    fn on_settle(&mut self, at: Duration) {
        let Interaction::ProgrammaticScrolling { resume_at, .. } = self.interaction else {
            return;
        };
        match resume_at {
            Some(resume_at) if resume_at > at => {
                self.set_interaction(at, Interaction::UserScrolling { resume_at });
            }
            Some(_) => self.resume(at),
            None => {
                let next = if self.autoplay_allowed() {
                    Interaction::AutoAdvancing
                } else {
                    Interaction::Idle
                };
                self.set_interaction(at, next);
            }
        }
    }

    fn on_tick(&mut self, at: Duration, out: &mut Vec<Effect>) {
        if !self.autoplay_allowed() {
            self.set_interaction(at, Interaction::Idle);
            self.ticker.stop();
            return;
        }
        let interval = self.options.auto_play_interval;
        if self.ticker.fire(interval, self.active_index) {
            self.auto_advance(at, out);
        }
    }

    fn auto_advance(&mut self, at: Duration, out: &mut Vec<Effect>) {
        let n = self.items.len();
        let next = (self.active_index + 1) % n;
        self.active_index = next;
        match self.layout.mode {
            LayoutMode::AllVisibleStatic => self.current_slide = next,
            LayoutMode::NaturalScroll => {
                self.scroll_naturally_to(at, next, None, out);
                self.current_slide = next;
            }
            LayoutMode::TransformPaging => {
                self.current_slide = if next == 0 {
                    0
                } else {
                    next.min(self.layout.max_slide())
                };
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            index = next,
            slide = self.current_slide,
            "autoplay advanced"
        );
        out.push(Effect::SlideChanged(next));
    }

    // --- navigation ------------------------------------------------------------------------

    fn go_to(&mut self, now: Duration, index: usize, out: &mut Vec<Effect>) {
        let n = self.items.len();
        if n == 0 {
            return;
        }
        let index = index.min(n - 1);
        let changed = index != self.active_index;
        self.active_index = index;
        self.ticker.reset_progress();
        match self.layout.mode {
            LayoutMode::AllVisibleStatic => {
                self.current_slide = index;
                self.mark_manual(now);
            }
            LayoutMode::NaturalScroll => {
                self.current_slide = index;
                self.scroll_naturally_to(now, index, Some(now + COOLDOWN), out);
            }
            LayoutMode::TransformPaging => {
                self.current_slide = clamp_slide(index, n, self.layout.visible_cards);
                self.mark_manual(now);
            }
        }
        if changed {
            out.push(Effect::SlideChanged(index));
        }
    }

    fn step(&mut self, now: Duration, forward: bool, out: &mut Vec<Effect>) {
        let n = self.items.len();
        if n == 0 {
            return;
        }
        let index = if forward {
            (self.active_index + 1) % n
        } else {
            (self.active_index + n - 1) % n
        };
        self.go_to(now, index, out);
    }

    fn on_key(&mut self, now: Duration, key: NavKey, out: &mut Vec<Effect>) {
        match key {
            NavKey::Left => self.step(now, false, out),
            NavKey::Right => self.step(now, true, out),
            NavKey::Home => self.go_to(now, 0, out),
            NavKey::End => self.go_to(now, self.items.len().saturating_sub(1), out),
        }
    }

    /// Scroll the native container so card `index` sits at the start, under the guard.
    fn scroll_naturally_to(
        &mut self,
        now: Duration,
        index: usize,
        resume_at: Option<Duration>,
        out: &mut Vec<Effect>,
    ) {
        let left = match (self.measure.card_bounds(index), self.measure.card_bounds(0)) {
            (Some(target), Some(first)) => target.x0 - first.x0,
            _ => index as f64 * self.layout.geometry.stride(),
        };
        out.push(Effect::ScrollContainer {
            left: left.max(0.0),
            behavior: ScrollBehavior::Smooth,
        });
        self.set_interaction(
            now,
            Interaction::ProgrammaticScrolling {
                settles_at: now + SCROLL_GUARD,
                resume_at,
            },
        );
    }

    // --- scroll reconciliation -------------------------------------------------------------

    fn on_scroll(&mut self, now: Duration, scroll_left: f64, out: &mut Vec<Effect>) {
        if !self.layout.mode.can_move() {
            return;
        }
        self.scroll_left = scroll_left;
        self.measure.scrolled_to(scroll_left);
        if self.interaction.guards_scroll() {
            #[cfg(feature = "tracing")]
            tracing::trace!(scroll_left, "scroll inside programmatic guard ignored");
            return;
        }
        self.mark_manual(now);
        if self.throttle.offer(now) {
            self.reconcile(out);
        }
    }

    /// Snap the active index to whatever card is nearest the viewport center.
    fn reconcile(&mut self, out: &mut Vec<Effect>) {
        let n = self.items.len();
        if n == 0 {
            return;
        }
        let nearest = match self.layout.mode {
            LayoutMode::NaturalScroll => {
                let center = self.measure.viewport_bounds().center().x;
                let measure = &self.measure;
                nearest_center(
                    center,
                    (0..n).filter_map(|i| measure.card_bounds(i).map(|r| (i, r.center().x))),
                )
            }
            LayoutMode::TransformPaging => nearest_theoretical_card(
                n,
                &self.layout.geometry,
                self.scroll_left + self.layout.viewport_width / 2.0,
            ),
            LayoutMode::AllVisibleStatic => None,
        };
        let Some(index) = nearest else {
            return;
        };
        if index == self.active_index {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            from = self.active_index,
            to = index,
            "reconciled to scroll position"
        );
        self.active_index = index;
        self.current_slide = match self.layout.mode {
            LayoutMode::TransformPaging => clamp_slide(index, n, self.layout.visible_cards),
            LayoutMode::NaturalScroll | LayoutMode::AllVisibleStatic => index,
        };
        self.ticker.reset_progress();
        out.push(Effect::SlideChanged(index));
    }

    // --- pointers --------------------------------------------------------------------------

    fn on_touch_start(&mut self, now: Duration) {
        if self.layout.mode.can_move() {
            self.mark_manual(now);
        }
    }

    fn on_pointer_down(&mut self, now: Duration, x: f64, kind: PointerKind) {
        if !self.layout.mode.accepts_drag() || self.items.len() <= 1 || !self.caps.drives_drag(kind)
        {
            return;
        }
        self.set_interaction(
            now,
            Interaction::Dragging(Drag {
                kind,
                origin_x: x,
                offset: 0.0,
            }),
        );
    }

    fn on_pointer_move(&mut self, x: f64, kind: PointerKind) {
        if let Interaction::Dragging(drag) = &mut self.interaction
            && drag.kind == kind
        {
            drag.offset = x - drag.origin_x;
        }
    }

    fn on_pointer_up(&mut self, now: Duration, x: f64, kind: PointerKind, out: &mut Vec<Effect>) {
        let Interaction::Dragging(drag) = self.interaction else {
            return;
        };
        if drag.kind != kind {
            return;
        }
        let delta = x - drag.origin_x;
        let threshold = self.layout.geometry.card_width * DRAG_THRESHOLD_RATIO;
        self.set_interaction(
            now,
            Interaction::UserScrolling {
                resume_at: now + COOLDOWN,
            },
        );
        if delta < -threshold {
            #[cfg(feature = "tracing")]
            tracing::debug!(delta, "drag committed forward");
            self.step(now, true, out);
        } else if delta > threshold {
            #[cfg(feature = "tracing")]
            tracing::debug!(delta, "drag committed backward");
            self.step(now, false, out);
        }
    }

    fn on_pointer_cancel(&mut self, now: Duration) {
        if self.interaction.drag().is_some() {
            self.set_interaction(
                now,
                Interaction::UserScrolling {
                    resume_at: now + COOLDOWN,
                },
            );
        }
    }

    fn on_hover(&mut self, path: &[Region], out: &mut Vec<Effect>) {
        if !self.caps.contains(DeviceCaps::HOVER) {
            return;
        }
        out.extend(self.hover.update_path(path).into_iter().map(Effect::Hover));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hover::HoverEvent;
    use alloc::format;
    use alloc::vec;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn items(n: usize) -> Vec<CarouselItem> {
        (0..n)
            .map(|i| CarouselItem::new(format!("item-{i}"), format!("Title {i}"), "Body"))
            .collect()
    }

    fn mounted(n: usize, options: CarouselOptions, width: f64) -> Carousel {
        let mut c = Carousel::new(items(n), options).unwrap();
        let _ = c.mount(Duration::ZERO, width);
        c
    }

    fn down(x: f64, kind: PointerKind) -> Action {
        Action::PointerDown { x, kind }
    }

    fn up(x: f64, kind: PointerKind) -> Action {
        Action::PointerUp { x, kind }
    }

    // 1280px with default options is xl transform paging, 4 cards per page.
    const DESKTOP: f64 = 1280.0;
    // 600px is sm natural scroll.
    const PHONE: f64 = 600.0;

    #[test]
    fn nothing_happens_before_mount() {
        let mut c = Carousel::new(items(3), CarouselOptions::default()).unwrap();
        assert!(c.next_slide(ms(10)).is_empty());
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.next_deadline(), None);
        assert!(!c.snapshot().mounted);
    }

    #[test]
    fn autoplay_starts_on_mount() {
        let c = mounted(3, CarouselOptions::default(), DESKTOP);
        assert_eq!(*c.interaction(), Interaction::AutoAdvancing);
        assert_eq!(c.next_deadline(), Some(ms(80)));
    }

    #[test]
    fn autoplay_never_starts_for_single_item_or_when_disabled() {
        let c = mounted(1, CarouselOptions::default(), DESKTOP);
        assert_eq!(*c.interaction(), Interaction::Idle);
        assert_eq!(c.next_deadline(), None);
        let c = mounted(4, CarouselOptions::default().with_auto_play(false), DESKTOP);
        assert_eq!(*c.interaction(), Interaction::Idle);
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c = mounted(0, CarouselOptions::default(), DESKTOP);
        assert!(c.scroll_to_slide(ms(1), 3).is_empty());
        assert!(c.next_slide(ms(2)).is_empty());
        assert!(c.scroll(ms(3), 500.0).is_empty());
        assert!(c.advance(ms(10_000)).is_empty());
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn scroll_to_slide_clamps_and_notifies() {
        let mut c = mounted(6, CarouselOptions::default(), DESKTOP);
        let fx = c.scroll_to_slide(ms(100), 42);
        assert_eq!(fx, vec![Effect::SlideChanged(5)]);
        assert_eq!(c.active_index(), 5);
        // 6 items, 4 visible.
        assert_eq!(c.current_slide(), 2);
        assert_eq!(c.progress(), 0.0);
        assert_eq!(
            *c.interaction(),
            Interaction::UserScrolling {
                resume_at: ms(5100)
            }
        );
    }

    #[test]
    fn scroll_to_current_slide_is_idempotent() {
        let mut c = mounted(6, CarouselOptions::default(), DESKTOP);
        let _ = c.scroll_to_slide(ms(100), 3);
        let first = (c.active_index(), c.current_slide());
        let fx = c.scroll_to_slide(ms(200), 3);
        assert!(fx.is_empty());
        assert_eq!((c.active_index(), c.current_slide()), first);
        assert_eq!(c.progress(), 0.0);
        assert_eq!(
            *c.interaction(),
            Interaction::UserScrolling {
                resume_at: ms(5200)
            }
        );
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut c = mounted(3, CarouselOptions::default(), DESKTOP);
        assert_eq!(c.prev_slide(ms(1)), vec![Effect::SlideChanged(2)]);
        assert_eq!(c.next_slide(ms(2)), vec![Effect::SlideChanged(0)]);
        let _ = c.dispatch(ms(3), Action::Key(NavKey::End));
        assert_eq!(c.active_index(), 2);
        let _ = c.dispatch(ms(4), Action::Key(NavKey::Home));
        assert_eq!(c.active_index(), 0);
        let _ = c.dispatch(ms(5), Action::Key(NavKey::Right));
        assert_eq!(c.active_index(), 1);
        let _ = c.dispatch(ms(6), Action::Key(NavKey::Left));
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn natural_navigation_scrolls_container_under_guard() {
        let mut c = mounted(5, CarouselOptions::default(), PHONE);
        assert_eq!(c.layout().mode, LayoutMode::NaturalScroll);
        let fx = c.scroll_to_slide(ms(100), 2);
        // stride = 260 + 16
        assert_eq!(
            fx,
            vec![
                Effect::ScrollContainer {
                    left: 552.0,
                    behavior: ScrollBehavior::Smooth,
                },
                Effect::SlideChanged(2),
            ]
        );
        assert!(c.interaction().guards_scroll());
        // The browser reports intermediate positions of our own scroll.
        assert!(c.scroll(ms(150), 100.0).is_empty());
        assert!(c.scroll(ms(400), 400.0).is_empty());
        assert_eq!(c.active_index(), 2);
        // Guard over: cooldown continues.
        let _ = c.advance(ms(600));
        assert_eq!(
            *c.interaction(),
            Interaction::UserScrolling {
                resume_at: ms(5100)
            }
        );
    }

    #[test]
    fn user_scroll_reconciles_to_nearest_card() {
        let mut c = mounted(5, CarouselOptions::default(), PHONE);
        // Card 3 left = 16 + 3 * 276 = 844; scrolled by 700 its center sits at 274,
        // nearest the viewport center 300.
        let fx = c.scroll(ms(1000), 700.0);
        assert_eq!(fx, vec![Effect::SlideChanged(3)]);
        assert_eq!(c.active_index(), 3);
        assert_eq!(c.current_slide(), 3);
        assert!(c.interaction().is_suspended());
    }

    #[test]
    fn scroll_bursts_are_throttled_with_trailing_run() {
        let mut c = mounted(5, CarouselOptions::default(), PHONE);
        // Card 1 center: 16 + 276 + 130 - 140 = 282.
        assert_eq!(c.scroll(ms(1000), 140.0), vec![Effect::SlideChanged(1)]);
        // Inside the 16ms window: recorded, not reconciled yet.
        assert!(c.scroll(ms(1005), 700.0).is_empty());
        assert_eq!(c.active_index(), 1);
        assert_eq!(c.next_deadline(), Some(ms(1016)));
        assert_eq!(c.advance(ms(1016)), vec![Effect::SlideChanged(3)]);
    }

    #[test]
    fn autoplay_scroll_does_not_feed_back() {
        let options = CarouselOptions::default().with_auto_play_interval(ms(800));
        let mut c = mounted(4, options, PHONE);
        // 800ms -> 10 ticks to 100, 14 ticks to 137.5 on the first card.
        let fx = c.advance(ms(14 * 80));
        assert_eq!(
            fx,
            vec![
                Effect::ScrollContainer {
                    left: 276.0,
                    behavior: ScrollBehavior::Smooth,
                },
                Effect::SlideChanged(1),
            ]
        );
        // The container has not moved yet; a stale scroll event must not pull us back to 0.
        assert!(c.scroll(ms(14 * 80 + 10), 0.0).is_empty());
        assert_eq!(c.active_index(), 1);
        // Autoplay keeps running through its own scroll.
        assert!(c.interaction().ticks_autoplay());
    }

    #[test]
    fn drag_past_threshold_pages_forward() {
        let mut c = mounted(6, CarouselOptions::default(), DESKTOP);
        let _ = c.dispatch(ms(10), down(500.0, PointerKind::Mouse));
        let moved = Action::PointerMove {
            x: 400.0,
            kind: PointerKind::Mouse,
        };
        let _ = c.dispatch(ms(20), moved);
        assert_eq!(c.snapshot().drag_offset(), -100.0);
        assert_eq!(c.snapshot().strip_offset(), -100.0);
        // 30% of 260 is 78.
        let fx = c.dispatch(ms(30), up(400.0, PointerKind::Mouse));
        assert_eq!(fx, vec![Effect::SlideChanged(1)]);
        assert_eq!(c.current_slide(), 1);
        assert!(!c.snapshot().is_dragging());
    }

    #[test]
    fn short_drag_snaps_back() {
        let mut c = mounted(6, CarouselOptions::default(), DESKTOP);
        let _ = c.dispatch(ms(10), down(500.0, PointerKind::Mouse));
        let fx = c.dispatch(ms(30), up(440.0, PointerKind::Mouse));
        assert!(fx.is_empty());
        assert_eq!(c.current_slide(), 0);
        assert_eq!(c.snapshot().drag_offset(), 0.0);
        assert_eq!(
            *c.interaction(),
            Interaction::UserScrolling {
                resume_at: ms(5030)
            }
        );
    }

    #[test]
    fn drag_right_pages_backward() {
        let mut c = mounted(6, CarouselOptions::default(), DESKTOP);
        let _ = c.scroll_to_slide(ms(5), 2);
        let _ = c.dispatch(ms(10), down(100.0, PointerKind::Mouse));
        let fx = c.dispatch(ms(30), up(300.0, PointerKind::Mouse));
        assert_eq!(fx, vec![Effect::SlideChanged(1)]);
    }

    #[test]
    fn touch_devices_ignore_mouse_drags() {
        let mut c = Carousel::new(items(6), CarouselOptions::default())
            .unwrap()
            .with_device_caps(DeviceCaps::TOUCH);
        let _ = c.mount(Duration::ZERO, DESKTOP);
        let _ = c.dispatch(ms(10), down(500.0, PointerKind::Mouse));
        assert!(!c.snapshot().is_dragging());
        let _ = c.dispatch(ms(10), down(500.0, PointerKind::Touch));
        assert!(c.snapshot().is_dragging());
        // A synthesized mouse release does not end the touch drag.
        assert!(c.dispatch(ms(20), up(100.0, PointerKind::Mouse)).is_empty());
        assert!(c.snapshot().is_dragging());
    }

    #[test]
    fn single_item_cannot_be_dragged() {
        let mut c = mounted(1, CarouselOptions::default(), DESKTOP);
        let _ = c.dispatch(ms(10), down(500.0, PointerKind::Mouse));
        assert!(!c.snapshot().is_dragging());
        assert!(c.dispatch(ms(20), up(0.0, PointerKind::Mouse)).is_empty());
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn resize_mid_drag_into_natural_scroll_cancels_drag() {
        let mut c = mounted(6, CarouselOptions::default(), DESKTOP);
        let _ = c.dispatch(ms(10), down(500.0, PointerKind::Mouse));
        let _ = c.resize(ms(20), PHONE);
        assert!(!c.snapshot().is_dragging());
        assert!(c.interaction().is_suspended());
    }

    #[test]
    fn resize_reclamps_slide() {
        let mut c = mounted(6, CarouselOptions::default(), 1600.0);
        // 1600px: 5 visible, max slide 1.
        let _ = c.resize(ms(1), 1100.0);
        let _ = c.scroll_to_slide(ms(2), 5);
        // 1100px: 3 visible, max slide 3.
        assert_eq!(c.current_slide(), 3);
        let _ = c.resize(ms(3), 1600.0);
        assert_eq!(c.current_slide(), 1);
        assert_eq!(c.active_index(), 5);
    }

    #[test]
    fn shrinking_items_reclamps_active_index() {
        let mut c = mounted(6, CarouselOptions::default(), DESKTOP);
        let _ = c.scroll_to_slide(ms(1), 5);
        let fx = c.set_items(ms(2), items(2));
        assert_eq!(fx, vec![Effect::SlideChanged(1)]);
        assert_eq!(c.active_index(), 1);
        assert_eq!(c.current_slide(), 0);
    }

    #[test]
    fn static_layout_ignores_scroll_and_drag() {
        let mut c = mounted(3, CarouselOptions::platform_page(), 1400.0);
        assert_eq!(c.layout().mode, LayoutMode::AllVisibleStatic);
        assert!(c.scroll(ms(10), 900.0).is_empty());
        let _ = c.dispatch(ms(20), down(500.0, PointerKind::Mouse));
        assert!(!c.snapshot().is_dragging());
        let fx = c.dispatch(ms(30), Action::IndicatorClick(2));
        assert_eq!(fx, vec![Effect::SlideChanged(2)]);
        assert_eq!(c.current_slide(), 2);
    }

    #[test]
    fn desktop_only_resume_stays_idle_on_phones() {
        let options = CarouselOptions::default().with_resume_policy(ResumePolicy::DesktopOnly);
        let mut c = mounted(4, options, PHONE);
        assert_eq!(*c.interaction(), Interaction::AutoAdvancing);
        let _ = c.dispatch(ms(100), Action::TouchStart);
        let _ = c.advance(ms(5200));
        assert_eq!(*c.interaction(), Interaction::Idle);
        assert_eq!(c.next_deadline(), None);
        // More items do not lift the hold.
        let _ = c.set_items(ms(5300), items(5));
        assert_eq!(*c.interaction(), Interaction::Idle);
        // Growing into a desktop tier revives autoplay.
        let _ = c.resize(ms(6000), DESKTOP);
        assert_eq!(*c.interaction(), Interaction::AutoAdvancing);
        assert_eq!(c.next_deadline(), Some(ms(6080)));
    }

    #[test]
    fn desktop_only_does_not_gate_a_fresh_start() {
        let policy = CarouselOptions::default().with_resume_policy(ResumePolicy::DesktopOnly);

        // Switching autoplay on.
        let mut c = mounted(4, policy.clone().with_auto_play(false), PHONE);
        assert_eq!(*c.interaction(), Interaction::Idle);
        let _ = c.set_options(ms(100), policy.clone()).unwrap();
        assert_eq!(*c.interaction(), Interaction::AutoAdvancing);
        assert_eq!(c.next_deadline(), Some(ms(180)));

        // Growing past a single item.
        let mut c = mounted(1, policy.clone(), PHONE);
        assert_eq!(c.next_deadline(), None);
        let _ = c.set_items(ms(200), items(4));
        assert_eq!(*c.interaction(), Interaction::AutoAdvancing);
        assert_eq!(c.next_deadline(), Some(ms(280)));

        // Re-enabling autoplay after a held cooldown starts fresh too.
        let _ = c.dispatch(ms(300), Action::TouchStart);
        let _ = c.advance(ms(5400));
        assert_eq!(*c.interaction(), Interaction::Idle);
        let off = policy.clone().with_auto_play(false);
        let _ = c.set_options(ms(5500), off).unwrap();
        let _ = c.set_options(ms(5600), policy).unwrap();
        assert_eq!(*c.interaction(), Interaction::AutoAdvancing);
    }

    #[test]
    fn paging_scroll_reconciles_from_viewport_center() {
        let mut c = mounted(8, CarouselOptions::default(), DESKTOP);
        assert_eq!(c.layout().mode, LayoutMode::TransformPaging);
        // Viewport center 640 + 640 = 1280. Card 4 center: 4 * 276 + 130 = 1234.
        assert_eq!(c.scroll(ms(1000), 640.0), vec![Effect::SlideChanged(4)]);
        assert_eq!(c.active_index(), 4);
        // 8 items, 4 visible: slide 4 is the last page.
        assert_eq!(c.current_slide(), 4);
        assert!(c.interaction().is_suspended());
        // Unscrolled, the center 640 is nearest card 2 (center 682).
        assert_eq!(c.scroll(ms(1100), 0.0), vec![Effect::SlideChanged(2)]);
        assert_eq!(c.current_slide(), 2);
    }

    #[test]
    fn changing_interval_restarts_ticker() {
        let mut c = mounted(4, CarouselOptions::default(), DESKTOP);
        let _ = c.advance(ms(800));
        assert_eq!(c.progress(), 20.0);
        let options = CarouselOptions::default().with_auto_play_interval(ms(2000));
        let _ = c.set_options(ms(810), options).unwrap();
        assert_eq!(c.progress(), 0.0);
        assert_eq!(c.next_deadline(), Some(ms(890)));
        // Turning autoplay off stops it.
        let _ = c
            .set_options(ms(900), CarouselOptions::default().with_auto_play(false))
            .unwrap();
        assert_eq!(*c.interaction(), Interaction::Idle);
        assert_eq!(c.next_deadline(), None);
    }

    #[test]
    fn invalid_options_are_rejected_without_change() {
        let mut c = mounted(4, CarouselOptions::default(), DESKTOP);
        let bad = CarouselOptions::default().with_card_metrics(-1.0, 0.0);
        assert!(c.set_options(ms(1), bad).is_err());
        assert_eq!(c.options(), &CarouselOptions::default());
    }

    #[test]
    fn hover_reports_transitions_only_with_hover_caps() {
        let mut c = mounted(3, CarouselOptions::default(), DESKTOP);
        let path = vec![Region::Viewport, Region::Card(1)];
        let fx = c.dispatch(ms(1), Action::Hover(path));
        assert_eq!(
            fx,
            vec![
                Effect::Hover(HoverEvent::Enter(Region::Viewport)),
                Effect::Hover(HoverEvent::Enter(Region::Card(1))),
            ]
        );
        assert!(c.snapshot().hovering);
        let _ = c.dispatch(ms(2), Action::Hover(vec![]));
        assert!(!c.snapshot().hovering);

        let mut t = Carousel::new(items(3), CarouselOptions::default())
            .unwrap()
            .with_device_caps(DeviceCaps::TOUCH);
        let _ = t.mount(Duration::ZERO, DESKTOP);
        let over = vec![Region::Viewport];
        assert!(t.dispatch(ms(1), Action::Hover(over)).is_empty());
        assert!(!t.snapshot().hovering);
    }

    #[test]
    fn unmount_drops_timers_and_ignores_everything() {
        let mut c = mounted(4, CarouselOptions::default(), PHONE);
        let _ = c.scroll_to_slide(ms(10), 2);
        let _ = c.unmount(ms(20));
        assert!(!c.is_mounted());
        assert_eq!(c.next_deadline(), None);
        assert!(c.advance(ms(60_000)).is_empty());
        assert!(c.next_slide(ms(60_001)).is_empty());
        assert!(c.mount(ms(60_002), DESKTOP).is_empty());
        assert_eq!(c.active_index(), 2);
        assert_eq!(*c.interaction(), Interaction::Idle);
    }

    #[test]
    fn time_never_runs_backwards() {
        let mut c = mounted(4, CarouselOptions::default(), DESKTOP);
        let _ = c.advance(ms(1000));
        let p = c.progress();
        let _ = c.advance(ms(500));
        assert_eq!(c.progress(), p);
        let _ = c.scroll_to_slide(ms(400), 1);
        assert_eq!(
            *c.interaction(),
            Interaction::UserScrolling {
                resume_at: ms(6000)
            }
        );
    }
}
