// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breakpoint tiers.

/// Upper bound (exclusive) of [`Tier::Sm`].
pub(crate) const SM_BELOW: f64 = 640.0;
/// Upper bound (exclusive) of [`Tier::Md`].
pub(crate) const MD_BELOW: f64 = 768.0;
/// Upper bound (exclusive) of [`Tier::Lg`].
pub(crate) const LG_BELOW: f64 = 1024.0;
/// Upper bound (exclusive) of [`Tier::Xl`].
pub(crate) const XL_BELOW: f64 = 1600.0;

/// One of five ordered responsive breakpoint buckets.
///
/// Ordering follows viewport width: `Sm < Md < Lg < Xl < Xxl`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Below 640px.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "sm"))]
    Sm,
    /// 640px up to 768px.
    #[cfg_attr(feature = "serde", serde(rename = "md"))]
    Md,
    /// 768px up to 1024px.
    #[cfg_attr(feature = "serde", serde(rename = "lg"))]
    Lg,
    /// 1024px up to 1600px.
    #[cfg_attr(feature = "serde", serde(rename = "xl"))]
    Xl,
    /// 1600px and wider.
    #[cfg_attr(feature = "serde", serde(rename = "2xl"))]
    Xxl,
}

impl Tier {
    /// All tiers, narrowest first.
    pub const ALL: [Self; 5] = [Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Xxl];

    /// Classify a viewport width.
    ///
    /// Non-finite or negative widths classify as [`Tier::Sm`].
    pub fn from_viewport_width(width: f64) -> Self {
        if width.is_nan() || width < SM_BELOW {
            Self::Sm
        } else if width < MD_BELOW {
            Self::Md
        } else if width < LG_BELOW {
            Self::Lg
        } else if width < XL_BELOW {
            Self::Xl
        } else {
            Self::Xxl
        }
    }

    /// Position of this tier in [`Tier::ALL`].
    pub const fn ordinal(self) -> usize {
        match self {
            Self::Sm => 0,
            Self::Md => 1,
            Self::Lg => 2,
            Self::Xl => 3,
            Self::Xxl => 4,
        }
    }

    /// The next narrower tier, if any.
    pub const fn narrower(self) -> Option<Self> {
        match self {
            Self::Sm => None,
            Self::Md => Some(Self::Sm),
            Self::Lg => Some(Self::Md),
            Self::Xl => Some(Self::Lg),
            Self::Xxl => Some(Self::Xl),
        }
    }

    /// Desktop-like tiers (`Xl` and wider) page with transforms and may resume autoplay.
    pub const fn is_desktop_like(self) -> bool {
        matches!(self, Self::Xl | Self::Xxl)
    }

    /// Fixed horizontal container padding for this tier, applied on both sides.
    pub const fn container_padding(self) -> f64 {
        match self {
            Self::Sm => 16.0,
            Self::Md => 24.0,
            Self::Lg | Self::Xl | Self::Xxl => 32.0,
        }
    }

    /// Short name used in class names and serialized tables.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
        }
    }
}
