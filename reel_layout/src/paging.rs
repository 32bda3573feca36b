// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paging arithmetic for transform-based layouts.
//!
//! In [`TransformPaging`](crate::LayoutMode::TransformPaging) mode the strip is shifted by whole
//! cards. A *slide* is the index of the left-most card in view; it ranges over
//! `0..=max_slide(item_count, visible_card_count(..))`.

use core::ops::Range;

use crate::geometry::Geometry;
use crate::{distance, floor_to_usize};

/// Card width floor used when counting how many cards fit in the viewport.
pub const MIN_PAGING_CARD_WIDTH: f64 = 248.0;

/// Number of whole cards that fit in `viewport_width`. Always at least one.
///
/// Cards narrower than [`MIN_PAGING_CARD_WIDTH`] are counted as if they were that wide.
pub fn visible_card_count(viewport_width: f64, geometry: &Geometry) -> usize {
    let stride = geometry.card_width.max(MIN_PAGING_CARD_WIDTH) + geometry.card_gap;
    floor_to_usize(viewport_width / stride).max(1)
}

/// Largest slide that still fills the viewport: `item_count - visible`, or zero.
pub fn max_slide(item_count: usize, visible: usize) -> usize {
    item_count.saturating_sub(visible)
}

/// Clamp `slide` into `0..=max_slide(item_count, visible)`.
pub fn clamp_slide(slide: usize, item_count: usize, visible: usize) -> usize {
    slide.min(max_slide(item_count, visible))
}

/// Cards in view for a slide, clipped to the item count.
pub fn visible_range(slide: usize, visible: usize, item_count: usize) -> Range<usize> {
    let start = slide.min(item_count);
    let end = slide.saturating_add(visible).min(item_count);
    start..end
}

/// Translate offset of the strip for `slide`, plus an in-flight drag offset.
pub fn strip_offset(slide: usize, geometry: &Geometry, drag_offset: f64) -> f64 {
    -(slide as f64 * geometry.stride()) + drag_offset
}

/// Theoretical left edge of card `index` in strip coordinates.
///
/// Only the first card is shifted by the left padding.
pub fn theoretical_card_left(index: usize, geometry: &Geometry) -> f64 {
    let base = index as f64 * geometry.stride();
    if index == 0 {
        base + geometry.padding_left
    } else {
        base
    }
}

/// Theoretical horizontal center of card `index` in strip coordinates.
pub fn theoretical_card_center(index: usize, geometry: &Geometry) -> f64 {
    theoretical_card_left(index, geometry) + geometry.card_width / 2.0
}

/// Index of the candidate whose center is closest to `target`.
///
/// Candidates are `(index, center_x)` pairs. Ties resolve to the earliest candidate.
/// Non-finite centers never win. Returns `None` when there is no finite candidate.
pub fn nearest_center(
    target: f64,
    candidates: impl IntoIterator<Item = (usize, f64)>,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, center) in candidates {
        if !center.is_finite() {
            continue;
        }
        let d = distance(center, target);
        match best {
            Some((_, best_d)) if best_d <= d => {}
            _ => best = Some((index, d)),
        }
    }
    best.map(|(index, _)| index)
}

/// Nearest card to a viewport center expressed in strip coordinates, using theoretical offsets.
pub fn nearest_theoretical_card(
    item_count: usize,
    geometry: &Geometry,
    viewport_center: f64,
) -> Option<usize> {
    nearest_center(
        viewport_center,
        (0..item_count).map(|i| (i, theoretical_card_center(i, geometry))),
    )
}
