// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration and presets.
//!
//! ## Defaults
//!
//! | Option | Default |
//! |---|---|
//! | `auto_play` | `true` |
//! | `auto_play_interval` | 4000ms |
//! | `card_width` / `card_gap` | 260 / 16 |
//! | `responsive` | empty |
//! | `natural_scroll` | `false` |
//! | `flexible_width` | `false` |
//! | `resume_policy` | [`ResumePolicy::Always`] |
//!
//! The presentational options (`show_progress_indicators`, `show_gradients`, `indicator_style`,
//! `highlight_active_card`, `card_style`, `indicator_color`) are carried for the renderer and do
//! not affect the state machine.
//!
//! ## Presets
//!
//! [`CarouselOptions::people`] and [`CarouselOptions::platform_page`] configure the two stock
//! specializations. Both are plain values and can be tweaked further with the `with_*` methods.

use core::time::Duration;

use reel_layout::{CardMetrics, ResponsiveTable, Tier};

use crate::error::OptionsError;

/// Visual style of the per-item indicators.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum IndicatorStyle {
    /// Dots; the active one grows and fills with autoplay progress.
    #[default]
    Progress,
    /// Thin lines.
    Line,
}

impl IndicatorStyle {
    /// Short lowercase name, used for class names.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Progress => "progress",
            Self::Line => "line",
        }
    }
}

/// Card chrome.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum CardStyle {
    /// Shadowed card.
    #[default]
    Elevated,
    /// Bordered card without shadow.
    Outlined,
    /// No chrome.
    Plain,
}

impl CardStyle {
    /// Short lowercase name, used for class names.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Elevated => "elevated",
            Self::Outlined => "outlined",
            Self::Plain => "plain",
        }
    }
}

/// Color theme for indicators and the active-card highlight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ColorTheme {
    /// Brand primary.
    #[default]
    Primary,
    /// Brand secondary.
    Secondary,
    /// Accent color.
    Accent,
    /// Greys.
    Neutral,
}

impl ColorTheme {
    /// Short lowercase name, used for class names.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Neutral => "neutral",
        }
    }
}

/// When autoplay comes back after manual input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ResumePolicy {
    /// Resume once the cooldown elapses, whatever the tier.
    #[default]
    Always,
    /// Resume only on desktop-like tiers; on narrower tiers the carousel stays idle
    /// until the viewport grows into a desktop tier.
    DesktopOnly,
}

/// Public configuration surface of a carousel.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CarouselOptions {
    /// Advance automatically.
    pub auto_play: bool,
    /// Base cadence before quantization to autoplay ticks. Must be nonzero; anything shorter
    /// than [`MIN_INTERVAL`](crate::autoplay::MIN_INTERVAL) runs at that pace.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub auto_play_interval: Duration,
    /// Fallback card width when the responsive table has no applicable entry.
    pub card_width: f64,
    /// Fallback card gap when the responsive table has no applicable entry.
    pub card_gap: f64,
    /// Per-tier card metrics.
    pub responsive: ResponsiveTable,
    /// Force native scrolling on every tier.
    pub natural_scroll: bool,
    /// Allow the static all-visible layout on desktop tiers.
    pub flexible_width: bool,
    /// Autoplay resume gate after manual input.
    pub resume_policy: ResumePolicy,
    /// Render one indicator per item.
    pub show_progress_indicators: bool,
    /// Render edge fades while the strip can scroll.
    pub show_gradients: bool,
    /// Indicator look.
    pub indicator_style: IndicatorStyle,
    /// Highlight the active card.
    pub highlight_active_card: bool,
    /// Card chrome.
    pub card_style: CardStyle,
    /// Color of indicators and the highlight.
    pub indicator_color: ColorTheme,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            auto_play: true,
            auto_play_interval: Duration::from_millis(4000),
            card_width: CardMetrics::DEFAULT_CARD_WIDTH,
            card_gap: CardMetrics::DEFAULT_CARD_GAP,
            responsive: ResponsiveTable::new(),
            natural_scroll: false,
            flexible_width: false,
            resume_policy: ResumePolicy::Always,
            show_progress_indicators: true,
            show_gradients: true,
            indicator_style: IndicatorStyle::Progress,
            highlight_active_card: true,
            card_style: CardStyle::Elevated,
            indicator_color: ColorTheme::Primary,
        }
    }
}

impl CarouselOptions {
    /// Team and people listings: natural scrolling below desktop, thin line indicators,
    /// and autoplay that only resumes on desktop tiers.
    pub fn people() -> Self {
        Self {
            responsive: ResponsiveTable::new()
                .with(Tier::Sm, CardMetrics::new(260.0, 16.0))
                .with(Tier::Md, CardMetrics::new(280.0, 20.0))
                .with(Tier::Xl, CardMetrics::new(300.0, 24.0)),
            resume_policy: ResumePolicy::DesktopOnly,
            indicator_style: IndicatorStyle::Line,
            highlight_active_card: false,
            card_style: CardStyle::Outlined,
            indicator_color: ColorTheme::Neutral,
            ..Self::default()
        }
    }

    /// Platform feature pages: wide cards that lay out statically when they all fit,
    /// progress indicators, and a highlighted active card.
    pub fn platform_page() -> Self {
        Self {
            card_width: 320.0,
            card_gap: 24.0,
            flexible_width: true,
            indicator_style: IndicatorStyle::Progress,
            highlight_active_card: true,
            ..Self::default()
        }
    }

    /// Fallback metrics built from `card_width` and `card_gap`.
    pub fn card_metrics(&self) -> CardMetrics {
        CardMetrics::new(self.card_width, self.card_gap)
    }

    /// Check numeric fields.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.auto_play_interval.is_zero() {
            return Err(OptionsError::ZeroInterval);
        }
        let fallback = self.card_metrics();
        if !fallback.is_valid() {
            return Err(OptionsError::InvalidCardMetrics {
                width: fallback.card_width,
                gap: fallback.card_gap,
            });
        }
        if fallback.card_width == 0.0 {
            return Err(OptionsError::ZeroCardWidth);
        }
        for (tier, m) in self.responsive.entries() {
            if !m.is_valid() {
                return Err(OptionsError::InvalidResponsiveEntry {
                    tier,
                    width: m.card_width,
                    gap: m.card_gap,
                });
            }
            if m.card_width == 0.0 {
                return Err(OptionsError::ZeroCardWidth);
            }
        }
        Ok(())
    }

    /// Set `auto_play`.
    #[must_use]
    pub fn with_auto_play(mut self, on: bool) -> Self {
        self.auto_play = on;
        self
    }

    /// Set `auto_play_interval`.
    #[must_use]
    pub fn with_auto_play_interval(mut self, interval: Duration) -> Self {
        self.auto_play_interval = interval;
        self
    }

    /// Set the fallback card width and gap.
    #[must_use]
    pub fn with_card_metrics(mut self, card_width: f64, card_gap: f64) -> Self {
        self.card_width = card_width;
        self.card_gap = card_gap;
        self
    }

    /// Set the responsive table.
    #[must_use]
    pub fn with_responsive(mut self, responsive: ResponsiveTable) -> Self {
        self.responsive = responsive;
        self
    }

    /// Set `natural_scroll`.
    #[must_use]
    pub fn with_natural_scroll(mut self, on: bool) -> Self {
        self.natural_scroll = on;
        self
    }

    /// Set `flexible_width`.
    #[must_use]
    pub fn with_flexible_width(mut self, on: bool) -> Self {
        self.flexible_width = on;
        self
    }

    /// Set the resume policy.
    #[must_use]
    pub fn with_resume_policy(mut self, policy: ResumePolicy) -> Self {
        self.resume_policy = policy;
        self
    }

    /// Set `show_progress_indicators`.
    #[must_use]
    pub fn with_progress_indicators(mut self, on: bool) -> Self {
        self.show_progress_indicators = on;
        self
    }

    /// Set `show_gradients`.
    #[must_use]
    pub fn with_gradients(mut self, on: bool) -> Self {
        self.show_gradients = on;
        self
    }

    /// Set the indicator style.
    #[must_use]
    pub fn with_indicator_style(mut self, style: IndicatorStyle) -> Self {
        self.indicator_style = style;
        self
    }

    /// Set `highlight_active_card`.
    #[must_use]
    pub fn with_highlight_active_card(mut self, on: bool) -> Self {
        self.highlight_active_card = on;
        self
    }

    /// Set the card style.
    #[must_use]
    pub fn with_card_style(mut self, style: CardStyle) -> Self {
        self.card_style = style;
        self
    }

    /// Set the indicator and highlight color.
    #[must_use]
    pub fn with_indicator_color(mut self, color: ColorTheme) -> Self {
        self.indicator_color = color;
        self
    }
}

#[cfg(feature = "serde")]
mod duration_ms {
    use core::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(
        clippy::trivially_copy_pass_by_ref,
        reason = "Signature is fixed by serde's `with` attribute."
    )]
    pub(super) fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
        s.serialize_u64(ms)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
