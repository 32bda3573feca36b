// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel items.

use alloc::string::String;
use core::fmt;

/// Caller-supplied item identifier: a string or a number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ItemId {
    /// Numeric identifier.
    Number(i64),
    /// String identifier.
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for ItemId {
    fn from(n: u32) -> Self {
        Self::Number(i64::from(n))
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// One card's data.
///
/// `N` is the renderable payload for the optional icon and content regions; the engine never
/// looks inside it. Items are immutable from the carousel's point of view.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselItem<N = String> {
    /// Stable identifier.
    pub id: ItemId,
    /// Card heading.
    pub title: String,
    /// Card body text.
    pub description: String,
    /// Optional icon; the region is omitted when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: Option<N>,
    /// Optional extra content; the region is omitted when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub content: Option<N>,
}

impl<N> CarouselItem<N> {
    /// An item without icon or content.
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            icon: None,
            content: None,
        }
    }

    /// Attach an icon.
    #[must_use]
    pub fn with_icon(mut self, icon: N) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Attach extra content.
    #[must_use]
    pub fn with_content(mut self, content: N) -> Self {
        self.content = Some(content);
        self
    }
}
