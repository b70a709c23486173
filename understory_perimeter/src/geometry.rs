// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perimeter geometry: margins and the strict inside test.
//!
//! Bounding rectangles are [`kurbo::Rect`] values in viewport coordinates,
//! read as `x0 = left`, `y0 = top`, `x1 = right`, `y1 = bottom`.

use kurbo::{Point, Rect};

use crate::error::PerimeterError;

/// Distance, in viewport units, that a perimeter extends past each edge of its node.
///
/// A margin is always non-negative and never NaN.
///
/// ```
/// use understory_perimeter::Margin;
///
/// assert_eq!(Margin::new(12.0).unwrap().get(), 12.0);
/// assert!(Margin::new(-1.0).is_err());
/// assert!(Margin::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Margin(f64);

impl Margin {
    /// A zero margin: the perimeter is the node's own bounding box.
    pub const ZERO: Self = Self(0.0);

    /// Create a margin, rejecting negative and NaN values.
    pub fn new(value: f64) -> Result<Self, PerimeterError> {
        if value.is_nan() || value < 0.0 {
            return Err(PerimeterError::InvalidMargin(value));
        }
        Ok(Self(value))
    }

    /// The margin as a plain number.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Margin {
    type Error = PerimeterError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Margin> for f64 {
    fn from(margin: Margin) -> Self {
        margin.0
    }
}

/// The node bounds expanded by `margin` on all four sides.
pub fn perimeter_rect(bounds: Rect, margin: Margin) -> Rect {
    bounds.inflate(margin.0, margin.0)
}

/// Whether `point` lies strictly inside `bounds` expanded by `margin`.
///
/// All four comparisons are strict: a point exactly on the expanded edge is
/// outside. This differs from [`Rect::contains`], which includes the min edges.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_perimeter::{Margin, within_perimeter};
///
/// let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
/// let margin = Margin::new(10.0).unwrap();
/// assert!(!within_perimeter(bounds, margin, Point::new(-10.0, 50.0)));
/// assert!(within_perimeter(bounds, margin, Point::new(-9.999, 50.0)));
/// ```
pub fn within_perimeter(bounds: Rect, margin: Margin, point: Point) -> bool {
    let m = margin.0;
    point.x > bounds.x0 - m
        && point.x < bounds.x1 + m
        && point.y > bounds.y0 - m
        && point.y < bounds.y1 + m
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Rect {
        // top: 0, right: 100, bottom: 100, left: 0
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    fn ten() -> Margin {
        Margin::new(10.0).unwrap()
    }

    #[test]
    fn boundary_is_outside() {
        assert!(!within_perimeter(square(), ten(), Point::new(-10.0, 50.0)));
        assert!(!within_perimeter(square(), ten(), Point::new(110.0, 50.0)));
        assert!(!within_perimeter(square(), ten(), Point::new(50.0, -10.0)));
        assert!(!within_perimeter(square(), ten(), Point::new(50.0, 110.0)));
    }

    #[test]
    fn just_inside_boundary_is_inside() {
        assert!(within_perimeter(square(), ten(), Point::new(-9.999, 50.0)));
        assert!(within_perimeter(square(), ten(), Point::new(109.999, 50.0)));
        assert!(within_perimeter(square(), ten(), Point::new(50.0, -9.999)));
        assert!(within_perimeter(square(), ten(), Point::new(50.0, 109.999)));
    }

    #[test]
    fn corners_of_margin_band_are_inside() {
        // The perimeter is rectangular, not rounded.
        assert!(within_perimeter(square(), ten(), Point::new(-9.0, -9.0)));
        assert!(within_perimeter(square(), ten(), Point::new(109.0, 109.0)));
    }

    #[test]
    fn zero_margin_excludes_node_edges() {
        let b = square();
        assert!(within_perimeter(b, Margin::ZERO, Point::new(50.0, 50.0)));
        assert!(!within_perimeter(b, Margin::ZERO, Point::new(0.0, 50.0)));
        assert!(!within_perimeter(b, Margin::ZERO, Point::new(100.0, 50.0)));
    }

    #[test]
    fn perimeter_rect_inflates_every_side() {
        let r = perimeter_rect(square(), ten());
        assert_eq!(r, Rect::new(-10.0, -10.0, 110.0, 110.0));
    }

    #[test]
    fn margin_rejects_negative_and_nan() {
        assert_eq!(Margin::new(-0.5), Err(PerimeterError::InvalidMargin(-0.5)));
        assert!(Margin::new(f64::NAN).is_err());
        assert!(Margin::try_from(-1.0).is_err());
    }

    #[test]
    fn margin_accepts_zero_and_infinity() {
        assert_eq!(Margin::new(0.0), Ok(Margin::ZERO));
        let inf = Margin::new(f64::INFINITY).unwrap();
        assert!(within_perimeter(square(), inf, Point::new(-1e12, 1e12)));
    }
}
