// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Histogram chart state for `histo_transforms` records.
//!
//! This crate turns a table of records plus a series configuration into everything needed to
//! draw a stacked or overlapping histogram:
//! - **Series defaults**: every series gets a color, a display name and a kind.
//! - **Scales**: a band scale over the ordinal field and a zero-anchored linear value scale.
//! - **Stacks**: either one summed stack over all series, or independent per-series stacks.
//! - **Bars**: view-space rectangles with fills, emitted alongside lifecycle events.
//!
//! [`derive_chart_state`] is the pure core; [`Histogram`] wraps it with incremental property
//! updates. Drawing the bars (SVG, a GPU renderer, ...) is left to callers.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod axis;
mod bar_mark;
mod component;
mod error;
mod event;
#[cfg(not(feature = "std"))]
mod float;
mod histogram;
#[cfg(test)]
mod histogram_tests;
mod layout;
mod scale;
mod series;
mod z_order;

pub use axis::{AxisTick, AxisType, band_ticks, format_tick, linear_ticks};
pub use bar_mark::{BarMark, BarMarkSpec};
pub use component::{Histogram, OVERLAP_FILL_ALPHA};
pub use error::{HistogramError, HistogramResult};
pub use event::{ChartEvent, EventFn, EventSink};
pub use histogram::{
    ChartState, DEFAULT_BAR_PADDING, DataExtents, HistogramProperties, PropertyUpdate,
    VALUE_TICK_COUNT, derive_chart_state, derive_chart_state_with,
};
pub use layout::{ChartLayout, Margin, Size};
pub use scale::{ScaleBand, ScaleBandSpec, ScaleLinear, ScaleLinearSpec};
pub use series::{
    Palette, SeriesConfig, SeriesKind, SeriesStyle, complete_series_config, css_color,
};
pub use z_order::*;
