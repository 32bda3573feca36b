// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking over carousel regions.
//!
//! The host reports the root→leaf [`Region`](crate::Region) path under the pointer
//! (for example `[Viewport, Card(2)]`), and [`HoverState::update_path`] answers with the minimal
//! leave/enter transitions. The carousel hides its edge gradients while any path is hovered.
//!
//! ```
//! use reel_engine::Region;
//! use reel_engine::hover::{HoverEvent, HoverState};
//!
//! let mut h = HoverState::new();
//! assert_eq!(
//!     h.update_path(&[Region::Viewport, Region::Card(0)]),
//!     vec![HoverEvent::Enter(Region::Viewport), HoverEvent::Enter(Region::Card(0))]
//! );
//! assert_eq!(
//!     h.update_path(&[Region::Viewport, Region::Card(1)]),
//!     vec![HoverEvent::Leave(Region::Card(0)), HoverEvent::Enter(Region::Card(1))]
//! );
//! assert!(h.is_hovering());
//! ```

use alloc::vec::Vec;

/// Hovered path and its transitions.
///
/// Leaves are reported inner-most first, enters outer-most first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K: Copy + Eq> {
    current: Vec<K>,
}

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Pointer entered the region.
    Enter(K),
    /// Pointer left the region.
    Leave(K),
}

impl<K: Copy + Eq> HoverState<K> {
    /// Nothing hovered.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// Current root→leaf path.
    pub fn current_path(&self) -> &[K] {
        &self.current
    }

    /// True if anything is hovered.
    pub fn is_hovering(&self) -> bool {
        !self.current.is_empty()
    }

    /// The innermost hovered region.
    pub fn leaf(&self) -> Option<K> {
        self.current.last().copied()
    }

    /// Drop the hovered path, leaving inner-most first.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        let leaving = self.current.drain(..).rev();
        leaving.map(HoverEvent::Leave).collect()
    }

    /// Replace the hovered path and return the transitions.
    pub fn update_path(&mut self, new_path: &[K]) -> Vec<HoverEvent<K>> {
        let shared = self
            .current
            .iter()
            .zip(new_path)
            .take_while(|(a, b)| a == b)
            .count();

        let mut out: Vec<HoverEvent<K>> = self.current[shared..]
            .iter()
            .rev()
            .map(|&k| HoverEvent::Leave(k))
            .collect();
        out.extend(new_path[shared..].iter().map(|&k| HoverEvent::Enter(k)));

        self.current.clear();
        self.current.extend_from_slice(new_path);
        out
    }
}
