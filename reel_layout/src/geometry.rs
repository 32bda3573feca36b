// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Card metrics, responsive tables, and per-tier geometry resolution.

use crate::tier::Tier;

/// Card width and gap, as supplied by the caller for a tier or as a global default.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CardMetrics {
    /// Fixed card width in pixels.
    pub card_width: f64,
    /// Gap between adjacent cards in pixels.
    pub card_gap: f64,
}

impl CardMetrics {
    /// Default card width when nothing else is configured.
    pub const DEFAULT_CARD_WIDTH: f64 = 260.0;
    /// Default gap when nothing else is configured.
    pub const DEFAULT_CARD_GAP: f64 = 16.0;

    /// Metrics from a width and a gap.
    pub const fn new(card_width: f64, card_gap: f64) -> Self {
        Self {
            card_width,
            card_gap,
        }
    }

    /// True if both values are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.card_width.is_finite()
            && self.card_gap.is_finite()
            && self.card_width >= 0.0
            && self.card_gap >= 0.0
    }
}

impl Default for CardMetrics {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CARD_WIDTH, Self::DEFAULT_CARD_GAP)
    }
}

/// Optional per-tier overrides of [`CardMetrics`].
///
/// A tier without an entry inherits the nearest narrower tier's entry; see [`Geometry::resolve`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResponsiveTable {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    sm: Option<CardMetrics>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    md: Option<CardMetrics>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    lg: Option<CardMetrics>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    xl: Option<CardMetrics>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "2xl", skip_serializing_if = "Option::is_none")
    )]
    xxl: Option<CardMetrics>,
}

impl ResponsiveTable {
    /// An empty table; every tier resolves to the fallback metrics.
    pub const fn new() -> Self {
        Self {
            sm: None,
            md: None,
            lg: None,
            xl: None,
            xxl: None,
        }
    }

    /// Builder form of [`ResponsiveTable::set`].
    #[must_use]
    pub fn with(mut self, tier: Tier, metrics: CardMetrics) -> Self {
        self.set(tier, Some(metrics));
        self
    }

    /// Set or clear the entry for `tier`.
    pub fn set(&mut self, tier: Tier, metrics: Option<CardMetrics>) {
        *self.slot_mut(tier) = metrics;
    }

    /// The entry declared for exactly `tier`, without fallback.
    pub fn get(&self, tier: Tier) -> Option<CardMetrics> {
        match tier {
            Tier::Sm => self.sm,
            Tier::Md => self.md,
            Tier::Lg => self.lg,
            Tier::Xl => self.xl,
            Tier::Xxl => self.xxl,
        }
    }

    /// True if no tier has an entry.
    pub fn is_empty(&self) -> bool {
        Tier::ALL.iter().all(|t| self.get(*t).is_none())
    }

    /// Declared entries, narrowest tier first.
    pub fn entries(&self) -> impl Iterator<Item = (Tier, CardMetrics)> + '_ {
        Tier::ALL
            .into_iter()
            .filter_map(|t| self.get(t).map(|m| (t, m)))
    }

    /// The entry that applies to `tier`: its own, else the nearest narrower one.
    pub fn lookup(&self, tier: Tier) -> Option<CardMetrics> {
        let mut cursor = Some(tier);
        while let Some(t) = cursor {
            if let Some(m) = self.get(t) {
                return Some(m);
            }
            cursor = t.narrower();
        }
        None
    }

    fn slot_mut(&mut self, tier: Tier) -> &mut Option<CardMetrics> {
        match tier {
            Tier::Sm => &mut self.sm,
            Tier::Md => &mut self.md,
            Tier::Lg => &mut self.lg,
            Tier::Xl => &mut self.xl,
            Tier::Xxl => &mut self.xxl,
        }
    }
}

/// Resolved per-tier geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Geometry {
    /// Fixed card width in pixels.
    pub card_width: f64,
    /// Gap between cards in pixels.
    pub card_gap: f64,
    /// Container padding before the first card.
    pub padding_left: f64,
    /// Container padding after the last card.
    pub padding_right: f64,
}

impl Geometry {
    /// Resolve geometry for `tier`.
    ///
    /// Card metrics walk the fallback chain `tier → … → sm` in `table` and end at
    /// `fallback`. Padding always comes from [`Tier::container_padding`] and ignores the table.
    pub fn resolve(tier: Tier, table: &ResponsiveTable, fallback: CardMetrics) -> Self {
        let metrics = table.lookup(tier).unwrap_or(fallback);
        let padding = tier.container_padding();
        Self {
            card_width: metrics.card_width,
            card_gap: metrics.card_gap,
            padding_left: padding,
            padding_right: padding,
        }
    }

    /// Distance from one card's left edge to the next.
    #[inline]
    pub fn stride(&self) -> f64 {
        self.card_width + self.card_gap
    }

    /// Sum of left and right padding.
    #[inline]
    pub fn horizontal_padding(&self) -> f64 {
        self.padding_left + self.padding_right
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::resolve(Tier::Sm, &ResponsiveTable::new(), CardMetrics::default())
    }
}
