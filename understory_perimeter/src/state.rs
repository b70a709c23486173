// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breach state machine as pure transitions.
//!
//! [`PerimeterState`] holds the measured bounds and whether the pointer is
//! currently inside the perimeter. Every transition consumes the state and
//! returns the next one, so the machine can be driven and tested without a
//! host or a rendering framework.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_perimeter::{Margin, MoveOutcome, PerimeterState};
//!
//! let margin = Margin::new(10.0).unwrap();
//! let state = PerimeterState::new().on_resize(Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
//!
//! let (state, outcome) = state.on_pointer_move(Point::new(-5.0, 50.0), margin);
//! assert_eq!(outcome, MoveOutcome::Entered);
//!
//! // Staying inside does not enter again.
//! let (state, outcome) = state.on_pointer_move(Point::new(50.0, 50.0), margin);
//! assert_eq!(outcome, MoveOutcome::Inside);
//!
//! // Leaving re-arms the trigger.
//! let (state, outcome) = state.on_pointer_move(Point::new(500.0, 50.0), margin);
//! assert_eq!(outcome, MoveOutcome::Outside);
//! assert!(!state.is_breached());
//! ```

use kurbo::{Point, Rect};

use crate::geometry::{Margin, within_perimeter};

/// Geometry and breach flag for one perimeter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PerimeterState {
    /// Last measured bounding box of the target node, if any.
    bounds: Option<Rect>,
    /// True while the pointer is inside the expanded rectangle.
    breached: bool,
}

/// Classification of a single pointer move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No bounds have been measured yet; the move was ignored.
    Unmeasured,
    /// The pointer is outside the perimeter. The breach flag is now clear.
    Outside,
    /// The pointer just crossed into the perimeter. The breach callback should fire.
    Entered,
    /// The pointer was already inside and still is.
    Inside,
}

impl MoveOutcome {
    /// Whether this outcome requires the breach callback to run.
    pub const fn is_breach(self) -> bool {
        matches!(self, Self::Entered)
    }
}

impl PerimeterState {
    /// An unmeasured, unbreached state.
    pub const fn new() -> Self {
        Self {
            bounds: None,
            breached: false,
        }
    }

    /// Last measured bounding box, or `None` before the first measurement.
    pub const fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Whether the pointer is currently inside the perimeter.
    pub const fn is_breached(&self) -> bool {
        self.breached
    }

    /// Replace the tracked bounds with a fresh measurement.
    ///
    /// `None` means the node could not be measured (it is absent), in which
    /// case the previous bounds are kept.
    #[must_use]
    pub fn on_resize(self, bounds: Option<Rect>) -> Self {
        match bounds {
            Some(bounds) => Self {
                bounds: Some(bounds),
                ..self
            },
            None => self,
        }
    }

    /// Classify a pointer position and advance the breach flag.
    ///
    /// Only the transition from outside to inside yields
    /// [`MoveOutcome::Entered`]; consecutive inside moves yield
    /// [`MoveOutcome::Inside`] until the pointer leaves again.
    #[must_use]
    pub fn on_pointer_move(self, point: Point, margin: Margin) -> (Self, MoveOutcome) {
        let Some(bounds) = self.bounds else {
            return (self, MoveOutcome::Unmeasured);
        };

        if !within_perimeter(bounds, margin, point) {
            let next = Self {
                breached: false,
                ..self
            };
            return (next, MoveOutcome::Outside);
        }

        if self.breached {
            return (self, MoveOutcome::Inside);
        }

        let next = Self {
            breached: true,
            ..self
        };
        (next, MoveOutcome::Entered)
    }
}
