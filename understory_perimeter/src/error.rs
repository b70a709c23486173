// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

/// Error returned when a perimeter is configured with invalid values.
///
/// Runtime event handling never fails; this type only surfaces while
/// building a [`PerimeterConfig`](crate::PerimeterConfig).
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum PerimeterError {
    /// The margin was negative or NaN.
    #[error("perimeter margin must be a non-negative number, got {0}")]
    InvalidMargin(f64),
}
