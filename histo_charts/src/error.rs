// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property validation errors.

/// Result alias for histogram operations.
pub type HistogramResult<T> = Result<T, HistogramError>;

/// Errors returned when histogram properties fail validation.
///
/// Data problems (missing fields, non-finite values) are not errors; they degrade to absent
/// values. Only the layout parameters are checked.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum HistogramError {
    /// Width or height is negative or not finite.
    #[error("invalid {name}: {value} (must be finite and >= 0)")]
    InvalidDimension {
        /// `"width"` or `"height"`.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A margin side is negative or not finite.
    #[error("invalid {side} margin: {value} (must be finite and >= 0)")]
    InvalidMargin {
        /// Which side.
        side: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// Bar padding is outside `[0, 1)`.
    #[error("invalid bar padding: {0} (must be in [0, 1))")]
    InvalidBarPadding(f64),
}
