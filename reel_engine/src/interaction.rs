// Copyright 2025 the Reel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state.
//!
//! A single tagged value replaces independent "dragging", "manual input", and
//! "programmatic scroll" booleans, so contradictory combinations cannot be represented.
//!
//! ## Transitions
//!
//! | From | Input | To |
//! |---|---|---|
//! | any resting state | scroll, touch start, indicator, key | `UserScrolling { resume_at: now + COOLDOWN }` |
//! | any but `Dragging` | pointer down (transform paging) | `Dragging` |
//! | `Dragging` | pointer up / cancel | `UserScrolling { resume_at: now + COOLDOWN }` |
//! | `AutoAdvancing` | autoplay advance (natural scroll) | `ProgrammaticScrolling { resume_at: None }` |
//! | any | navigation (natural scroll) | `ProgrammaticScrolling { resume_at: Some(now + COOLDOWN) }` |
//! | `ProgrammaticScrolling` | guard elapsed | `UserScrolling` if `resume_at` is pending, else resting |
//! | `UserScrolling` | cooldown elapsed | resting |
//!
//! The resting state is `AutoAdvancing` when autoplay may run and `Idle` otherwise.

use core::time::Duration;

use crate::types::PointerKind;

/// How long manual input holds autoplay.
pub const COOLDOWN: Duration = Duration::from_millis(5000);
/// How long scroll events are attributed to our own programmatic scroll.
pub const SCROLL_GUARD: Duration = Duration::from_millis(500);
/// Minimum spacing of scroll reconciliations.
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(16);
/// Fraction of a card width a drag must exceed to change slides.
pub const DRAG_THRESHOLD_RATIO: f64 = 0.3;

/// An in-flight drag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Drag {
    /// Pointer that started the drag.
    pub kind: PointerKind,
    /// Horizontal position at pointer down.
    pub origin_x: f64,
    /// Live offset from `origin_x`; visual only.
    pub offset: f64,
}

/// What the carousel is doing right now.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Interaction {
    /// Nothing moves on its own.
    #[default]
    Idle,
    /// Autoplay is ticking.
    AutoAdvancing,
    /// The user is dragging the strip.
    Dragging(Drag),
    /// Our own smooth scroll is in flight; scroll events until `settles_at` are ours.
    ProgrammaticScrolling {
        /// End of the re-entrancy guard.
        settles_at: Duration,
        /// Cooldown end if the scroll was user-initiated; `None` if autoplay started it.
        resume_at: Option<Duration>,
    },
    /// Manual input was seen; autoplay is held until `resume_at`.
    UserScrolling {
        /// End of the cooldown.
        resume_at: Duration,
    },
}

impl Interaction {
    /// True if the autoplay ticker may run in this state.
    pub fn ticks_autoplay(&self) -> bool {
        matches!(
            self,
            Self::AutoAdvancing
                | Self::ProgrammaticScrolling {
                    resume_at: None,
                    ..
                }
        )
    }

    /// True while scroll events must not be reconciled.
    pub fn guards_scroll(&self) -> bool {
        matches!(self, Self::ProgrammaticScrolling { .. })
    }

    /// True if manual input is holding autoplay.
    pub fn is_suspended(&self) -> bool {
        match self {
            Self::Dragging(_) | Self::UserScrolling { .. } => true,
            Self::ProgrammaticScrolling { resume_at, .. } => resume_at.is_some(),
            Self::Idle | Self::AutoAdvancing => false,
        }
    }

    /// The drag, if dragging.
    pub fn drag(&self) -> Option<&Drag> {
        match self {
            Self::Dragging(d) => Some(d),
            _ => None,
        }
    }

    /// Live drag offset, zero when not dragging.
    pub fn drag_offset(&self) -> f64 {
        self.drag().map_or(0.0, |d| d.offset)
    }

    /// The state's own deadline: guard end or cooldown end.
    pub(crate) fn deadline(&self) -> Option<Duration> {
        match *self {
            Self::ProgrammaticScrolling { settles_at, .. } => Some(settles_at),
            Self::UserScrolling { resume_at } => Some(resume_at),
            Self::Idle | Self::AutoAdvancing | Self::Dragging(_) => None,
        }
    }

    /// Short name for logs and data attributes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AutoAdvancing => "auto-advancing",
            Self::Dragging(_) => "dragging",
            Self::ProgrammaticScrolling { .. } => "programmatic-scrolling",
            Self::UserScrolling { .. } => "user-scrolling",
        }
    }
}

/// Trailing-edge throttle for scroll reconciliation.
///
/// The first event in a quiet period runs immediately; later events inside the window
/// collapse into one run at the end of it.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ScrollThrottle {
    last_run: Option<Duration>,
    pending_at: Option<Duration>,
}

impl ScrollThrottle {
    /// Offer an event at `now`. Returns true if reconciliation should run now.
    pub(crate) fn offer(&mut self, now: Duration) -> bool {
        match self.last_run {
            Some(last) if now < last + SCROLL_THROTTLE => {
                self.pending_at = Some(last + SCROLL_THROTTLE);
                false
            }
            _ => {
                self.last_run = Some(now);
                self.pending_at = None;
                true
            }
        }
    }

    /// When the collapsed trailing run is due.
    pub(crate) fn pending_at(&self) -> Option<Duration> {
        self.pending_at
    }

    /// Consume the trailing run.
    pub(crate) fn flush(&mut self) {
        if let Some(at) = self.pending_at.take() {
            self.last_run = Some(at);
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn only_autoplay_states_tick() {
        assert!(Interaction::AutoAdvancing.ticks_autoplay());
        assert!(
            Interaction::ProgrammaticScrolling {
                settles_at: ms(500),
                resume_at: None
            }
            .ticks_autoplay()
        );
        assert!(
            !Interaction::ProgrammaticScrolling {
                settles_at: ms(500),
                resume_at: Some(ms(5000))
            }
            .ticks_autoplay()
        );
        assert!(!Interaction::Idle.ticks_autoplay());
        assert!(!Interaction::UserScrolling { resume_at: ms(1) }.ticks_autoplay());
    }

    #[test]
    fn suspension_and_guard_are_distinct() {
        let autoplay_scroll = Interaction::ProgrammaticScrolling {
            settles_at: ms(500),
            resume_at: None,
        };
        assert!(autoplay_scroll.guards_scroll());
        assert!(!autoplay_scroll.is_suspended());
        let user = Interaction::UserScrolling {
            resume_at: ms(5000),
        };
        assert!(!user.guards_scroll());
        assert!(user.is_suspended());
        assert_eq!(user.deadline(), Some(ms(5000)));
    }

    #[test]
    fn drag_offset_defaults_to_zero() {
        assert_eq!(Interaction::Idle.drag_offset(), 0.0);
        let d = Interaction::Dragging(Drag {
            kind: PointerKind::Mouse,
            origin_x: 10.0,
            offset: -42.0,
        });
        assert_eq!(d.drag_offset(), -42.0);
        assert!(d.is_suspended());
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn throttle_collapses_bursts() {
        let mut t = ScrollThrottle::default();
        assert!(t.offer(ms(100)));
        assert!(!t.offer(ms(105)));
        assert!(!t.offer(ms(110)));
        assert_eq!(t.pending_at(), Some(ms(116)));
        t.flush();
        assert_eq!(t.pending_at(), None);
        // Still inside the window that started with the trailing run.
        assert!(!t.offer(ms(120)));
        assert!(t.offer(ms(140)));
        assert_eq!(t.pending_at(), None);
    }
}
